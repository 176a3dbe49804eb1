use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::order::{DeliveryMethod, OrderDraft, PaymentMethod};

/// Maximum length allowed for the free-text kiosk extras.
const EXTRAS_MAX_LEN: u64 = 500;

/// Form payload for adding one unit of a product to the cart.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
    /// Local path to return to after adding; defaults to the menu.
    #[serde(default)]
    pub next: Option<String>,
}

impl AddToCartForm {
    /// Redirect target after the add, restricted to local paths.
    pub fn redirect_target(&self) -> &str {
        self.next
            .as_deref()
            .filter(|path| path.starts_with('/') && !path.starts_with("//"))
            .unwrap_or("/")
    }
}

/// Form payload for removing one unit of a product from the cart.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

/// Errors that can occur while processing the checkout form.
#[derive(Debug, Error)]
pub enum CheckoutFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Checkout options collected on the cart screen.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutForm {
    /// Selected delivery method.
    pub delivery_method: DeliveryMethod,
    /// Selected payment method.
    pub payment_method: PaymentMethod,
    /// Free-text kiosk extras ("¿Querés algo más del kiosco?").
    #[validate(length(max = EXTRAS_MAX_LEN))]
    #[serde(default)]
    pub extras: Option<String>,
}

impl CheckoutForm {
    /// Validates and sanitizes the payload into an `OrderDraft`.
    pub fn into_order_draft(self) -> Result<OrderDraft, CheckoutFormError> {
        self.validate()?;

        let extras = self
            .extras
            .as_deref()
            .map(sanitize_extras)
            .filter(|value| !value.is_empty());

        Ok(OrderDraft {
            delivery_method: self.delivery_method,
            payment_method: self.payment_method,
            extras,
        })
    }
}

fn sanitize_extras(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}
