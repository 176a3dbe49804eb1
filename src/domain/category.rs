use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a menu category used to group products.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name of the category.
    pub name: String,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub name: String,
}

impl NewCategory {
    /// Build a new category payload with the supplied name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
