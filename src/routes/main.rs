use actix_session::Session;
use actix_web::{Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use chrono::Local;
use tera::Tera;

use crate::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::cart::session_cart;
use crate::routes::{base_context, redirect, render_connection_error, render_template};
use crate::services::ServiceError;
use crate::services::menu::{self, MenuQuery};

#[get("/")]
pub async fn show_menu(
    params: web::Query<MenuQuery>,
    session: Session,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match menu::load_menu_page(repo.get_ref(), Local::now().naive_local(), params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "menu");
            context.insert("categories", &data.categories);
            context.insert("sections", &data.sections);
            context.insert("combos", &data.combos);
            context.insert("schedules", &data.schedules);
            context.insert("is_open", &data.is_open);
            context.insert("category_filter", &data.category_filter);
            context.insert("cart_items", &session_cart(&session).total_items());
            context.insert("whatsapp_phone", &config.whatsapp_phone);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the menu: {err}");
            render_connection_error(&tera)
        }
    }
}

#[get("/products/{id}")]
pub async fn show_product(
    path: web::Path<i32>,
    session: Session,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let product_id = path.into_inner();

    match menu::load_product_page(repo.get_ref(), product_id) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "product");
            context.insert("product", &data.product);
            context.insert("category_name", &data.category_name);
            context.insert("description", &data.description);
            context.insert("cart_items", &session_cart(&session).total_items());
            render_template(&tera, "main/product.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Producto no encontrado.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to load product {product_id}: {err}");
            render_connection_error(&tera)
        }
    }
}
