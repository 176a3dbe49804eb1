use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::combo::{Combo as DomainCombo, NewCombo as DomainNewCombo};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::combos)]
pub struct Combo {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub image_url: Option<String>,
    pub is_archived: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::combos)]
pub struct NewCombo<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price_cents: i32,
    pub image_url: Option<&'a str>,
}

impl From<Combo> for DomainCombo {
    fn from(value: Combo) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price_cents: value.price_cents,
            image_url: value.image_url,
            is_archived: value.is_archived,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCombo> for NewCombo<'a> {
    fn from(value: &'a DomainNewCombo) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_deref(),
            price_cents: value.price_cents,
            image_url: value.image_url.as_deref(),
        }
    }
}
