use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a promotional bundle, display-only.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Combo {
    /// Unique identifier of the combo.
    pub id: i32,
    /// Human-readable name of the combo.
    pub name: String,
    /// Optional description of what the bundle contains.
    pub description: Option<String>,
    /// Price in centavos.
    pub price_cents: i32,
    /// Optional image served from the asset host.
    pub image_url: Option<String>,
    /// Flag indicating whether the combo has been taken off the menu.
    pub is_archived: bool,
    /// Timestamp for when the combo record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the combo record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new combo.
#[derive(Debug, Clone)]
pub struct NewCombo {
    /// Human-readable name of the combo.
    pub name: String,
    /// Optional description of what the bundle contains.
    pub description: Option<String>,
    /// Price in centavos.
    pub price_cents: i32,
    /// Optional image served from the asset host.
    pub image_url: Option<String>,
}

impl NewCombo {
    /// Build a new combo payload with the supplied name and price.
    pub fn new(name: impl Into<String>, price_cents: i32) -> Self {
        Self {
            name: name.into(),
            description: None,
            price_cents,
            image_url: None,
        }
    }

    /// Attach a descriptive text to the combo payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an image URL to the combo payload.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}
