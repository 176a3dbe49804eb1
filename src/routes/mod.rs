use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::Tera;

pub mod api;
pub mod cart;
pub mod main;
pub mod schedules;

/// One flash notice rendered by the base template.
#[derive(Serialize)]
struct Alert {
    level: &'static str,
    text: String,
}

fn level_to_str(level: Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Base template context: flash alerts plus the active page marker.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> tera::Context {
    let alerts: Vec<Alert> = flash_messages
        .iter()
        .map(|message| Alert {
            level: level_to_str(message.level()),
            text: message.content().to_string(),
        })
        .collect();

    let mut context = tera::Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

/// Answer with a `303 See Other` redirect to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Render `template` into a 200 response, or a bare 500 when rendering
/// fails.
pub fn render_template(tera: &Tera, template: &str, context: &tera::Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Generic connection-error page shown when the table store is down.
pub fn render_connection_error(tera: &Tera) -> HttpResponse {
    let mut context = tera::Context::new();
    context.insert("message", "Error al conectar con la base de datos.");

    match tera.render("main/error.html", &context) {
        Ok(body) => HttpResponse::InternalServerError()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render main/error.html: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
