use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// One cart line: a product snapshot plus the selected quantity.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CartItem {
    /// Identifier of the selected product.
    pub product_id: i32,
    /// Name snapshot taken when the product was first added.
    pub name: String,
    /// Unit price snapshot in centavos.
    pub price_cents: i32,
    /// Selected quantity, always at least 1.
    pub quantity: u32,
}

/// Session-scoped shopping cart: an ordered list of selected products.
///
/// Lines keep insertion order and are keyed by product identity; removing
/// the last unit of a line removes the line itself.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// The cart lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit of `product`, inserting a new line at quantity 1 the
    /// first time the product shows up.
    pub fn add(&mut self, product: &Product) {
        match self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id)
        {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem {
                product_id: product.id,
                name: product.name.clone(),
                price_cents: product.price_cents,
                quantity: 1,
            }),
        }
    }

    /// Removes one unit of the product; the line disappears once its
    /// quantity reaches zero. Unknown ids are a no-op.
    pub fn remove(&mut self, product_id: i32) {
        if let Some(position) = self
            .items
            .iter()
            .position(|item| item.product_id == product_id)
        {
            if self.items[position].quantity > 1 {
                self.items[position].quantity -= 1;
            } else {
                self.items.remove(position);
            }
        }
    }

    /// Order total in centavos.
    pub fn total_cents(&self) -> i64 {
        self.items
            .iter()
            .map(|item| i64::from(item.price_cents) * i64::from(item.quantity))
            .sum()
    }

    /// Number of units across all lines.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
