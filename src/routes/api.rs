use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{HttpResponse, Responder, get, web};
use chrono::Local;

use crate::repository::DieselRepository;
use crate::services::menu;

/// Staleness hint on the composite menu payload, mirroring the five
/// minutes the storefront tolerates between refetches.
const MENU_MAX_AGE_SECS: u32 = 300;

#[get("/v1/menu")]
/// Return the composite menu snapshot (categories, products, combos,
/// schedules) plus the current open/closed status as JSON.
pub async fn api_v1_menu(repo: web::Data<DieselRepository>) -> impl Responder {
    match menu::load_menu_response(repo.get_ref(), Local::now().naive_local()) {
        Ok(response) => HttpResponse::Ok()
            .insert_header(CacheControl(vec![CacheDirective::MaxAge(
                MENU_MAX_AGE_SECS,
            )]))
            .json(response),
        Err(err) => {
            log::error!("Failed to load the menu: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
