use actix_session::Session;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use chrono::Local;
use tera::Tera;

use crate::config::ServerConfig;
use crate::domain::cart::Cart;
use crate::forms::cart::{AddToCartForm, CheckoutForm, RemoveFromCartForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_connection_error, render_template};
use crate::services::ServiceError;
use crate::services::{cart as cart_service, orders};

const CART_SESSION_KEY: &str = "cart";

/// Reads the cart stored in the session, falling back to an empty one.
pub fn session_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(CART_SESSION_KEY)
        .ok()
        .flatten()
        .unwrap_or_default()
}

fn store_cart(session: &Session, cart: &Cart) {
    if let Err(err) = session.insert(CART_SESSION_KEY, cart) {
        log::error!("Failed to store the cart in the session: {err}");
    }
}

#[get("/cart")]
pub async fn show_cart(
    session: Session,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let cart = session_cart(&session);

    match cart_service::load_cart_page(repo.get_ref(), Local::now().naive_local(), &cart) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "cart");
            context.insert("lines", &data.lines);
            context.insert("total", &data.total_formatted);
            context.insert("cart_items", &data.total_items);
            context.insert("is_open", &data.is_open);
            render_template(&tera, "cart/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the cart page: {err}");
            render_connection_error(&tera)
        }
    }
}

#[post("/cart/add")]
pub async fn add_to_cart(
    session: Session,
    repo: web::Data<DieselRepository>,
    form: web::Form<AddToCartForm>,
) -> impl Responder {
    let mut cart = session_cart(&session);
    let target = form.redirect_target().to_string();

    match cart_service::add_to_cart(repo.get_ref(), &mut cart, form.product_id) {
        Ok(product) => {
            store_cart(&session, &cart);
            FlashMessage::success(format!("{} agregado al pedido.", product.name)).send();
            redirect(&target)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Producto no encontrado.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to add product {} to the cart: {err}", form.product_id);
            FlashMessage::error("No se pudo agregar el producto.").send();
            redirect(&target)
        }
    }
}

#[post("/cart/remove")]
pub async fn remove_from_cart(
    session: Session,
    form: web::Form<RemoveFromCartForm>,
) -> impl Responder {
    let mut cart = session_cart(&session);
    cart.remove(form.product_id);
    store_cart(&session, &cart);

    redirect("/cart")
}

#[post("/cart/checkout")]
pub async fn checkout(
    session: Session,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    form: web::Form<CheckoutForm>,
) -> impl Responder {
    let cart = session_cart(&session);

    let draft = match form.into_inner().into_order_draft() {
        Ok(draft) => draft,
        Err(err) => {
            FlashMessage::error(err.to_string()).send();
            return redirect("/cart");
        }
    };

    match orders::checkout(
        repo.get_ref(),
        Local::now().naive_local(),
        &cart,
        &draft,
        &config.whatsapp_phone,
    ) {
        Ok(link) => redirect(&link),
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/cart")
        }
        Err(err) => {
            log::error!("Failed to build the order link: {err}");
            FlashMessage::error("No se pudo enviar el pedido.").send();
            redirect("/cart")
        }
    }
}
