use chrono::NaiveDateTime;

use crate::domain::cart::Cart;
use crate::domain::order::OrderDraft;
use crate::domain::schedule;
use crate::repository::ScheduleReader;
use crate::services::{ServiceError, ServiceResult, format_price};

/// Builds the WhatsApp deep link for the cart, re-evaluating the
/// open/closed gate at `now` before letting the order through.
pub fn checkout<R>(
    repo: &R,
    now: NaiveDateTime,
    cart: &Cart,
    draft: &OrderDraft,
    phone: &str,
) -> ServiceResult<String>
where
    R: ScheduleReader + ?Sized,
{
    if cart.is_empty() {
        return Err(ServiceError::Form("El carrito está vacío.".to_string()));
    }

    let schedules = repo.list_schedules()?;
    if !schedule::is_open_at(now, &schedules) {
        return Err(ServiceError::Form(
            "El local está cerrado en este momento.".to_string(),
        ));
    }

    let message = build_order_message(cart, draft);
    Ok(build_whatsapp_link(phone, &message))
}

/// Formats the order the way the kiosk reads it in the chat: one bullet
/// per line, delivery and payment options, optional extras, subtotal.
pub fn build_order_message(cart: &Cart, draft: &OrderDraft) -> String {
    let items = cart
        .items()
        .iter()
        .map(|item| format!("• {}x {}", item.quantity, item.name))
        .collect::<Vec<_>>()
        .join("\n");

    let mut message = format!("¡Hola Rubén! 👋 Mi pedido:\n\n{items}\n\n");
    message.push_str("--- \n");
    message.push_str(&format!(
        "📍 *Entrega:* {}\n",
        draft.delivery_method.label()
    ));
    message.push_str(&format!("💳 *Pago:* {}\n", draft.payment_method.label()));
    if let Some(extras) = draft.extras.as_deref() {
        message.push_str(&format!("✨ *Extras Kiosco:* {extras}\n"));
    }
    message.push_str("--- \n");
    message.push_str(&format!(
        "💰 *Subtotal:* ${}\n",
        format_price(cart.total_cents())
    ));
    message.push_str("\n¡Quedo atento a la confirmación!");

    message
}

/// URL-encodes `message` into a `wa.me` deep link for `phone`.
pub fn build_whatsapp_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{phone}?text={}", urlencoding::encode(message))
}
