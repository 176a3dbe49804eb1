use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::cart::Cart;
use crate::domain::product::Product;
use crate::domain::schedule;
use crate::repository::{ProductReader, ScheduleReader};
use crate::services::{ServiceError, ServiceResult, format_price};

/// View of one cart line for the cart template.
#[derive(Debug, Serialize)]
pub struct CartLineView {
    pub product_id: i32,
    pub name: String,
    pub quantity: u32,
    pub unit_price_formatted: String,
    pub line_total_formatted: String,
}

/// Data required to render the cart page.
pub struct CartPageData {
    pub lines: Vec<CartLineView>,
    pub total_formatted: String,
    pub total_items: u32,
    /// Gates the checkout button.
    pub is_open: bool,
}

/// Loads the cart page, evaluating the open/closed gate at `now`.
pub fn load_cart_page<R>(repo: &R, now: NaiveDateTime, cart: &Cart) -> ServiceResult<CartPageData>
where
    R: ScheduleReader + ?Sized,
{
    let schedules = repo.list_schedules()?;
    let is_open = schedule::is_open_at(now, &schedules);

    let lines = cart
        .items()
        .iter()
        .map(|item| CartLineView {
            product_id: item.product_id,
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price_formatted: format_price(i64::from(item.price_cents)),
            line_total_formatted: format_price(
                i64::from(item.price_cents) * i64::from(item.quantity),
            ),
        })
        .collect();

    Ok(CartPageData {
        lines,
        total_formatted: format_price(cart.total_cents()),
        total_items: cart.total_items(),
        is_open,
    })
}

/// Adds one unit of `product_id` to the cart after checking the catalog.
/// Missing and archived products both read as not found.
pub fn add_to_cart<R>(repo: &R, cart: &mut Cart, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    let Some(product) = repo.get_product_by_id(product_id)? else {
        return Err(ServiceError::NotFound);
    };
    if product.is_archived {
        return Err(ServiceError::NotFound);
    }

    cart.add(&product);
    Ok(product)
}
