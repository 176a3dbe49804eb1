use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a catalog product shown on the menu.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Optional category the product is grouped under.
    pub category_id: Option<i32>,
    /// Human-readable name of the product.
    pub name: String,
    /// Optional longer description shown on the detail view.
    pub description: Option<String>,
    /// Price in centavos.
    pub price_cents: i32,
    /// Optional image served from the asset host.
    pub image_url: Option<String>,
    /// Flag indicating whether the product has been taken off the menu.
    pub is_archived: bool,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Optional category the product is grouped under.
    pub category_id: Option<i32>,
    /// Human-readable name of the product.
    pub name: String,
    /// Optional longer description shown on the detail view.
    pub description: Option<String>,
    /// Price in centavos.
    pub price_cents: i32,
    /// Optional image served from the asset host.
    pub image_url: Option<String>,
}

impl NewProduct {
    /// Build a new product payload with the supplied name and price.
    pub fn new(name: impl Into<String>, price_cents: i32) -> Self {
        Self {
            category_id: None,
            name: name.into(),
            description: None,
            price_cents,
            image_url: None,
        }
    }

    /// Attach a category identifier to the product payload.
    pub fn with_category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an image URL to the product payload.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// Query definition used to list menu products. Archived products never
/// show up on the menu, so the query always excludes them.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional category filter.
    pub category_id: Option<i32>,
}

impl ProductListQuery {
    /// Construct a query that targets all live products.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results to products belonging to `category_id`.
    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }
}
