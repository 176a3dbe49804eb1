use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::config::ServerConfig;
use crate::forms::schedule::UpsertScheduleForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::schedules::{self, SchedulesQuery};

#[get("/schedules")]
pub async fn show_schedules(
    params: web::Query<SchedulesQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match schedules::load_schedules_page(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "schedules");
            context.insert("schedules", &data.schedules);
            context.insert("weekdays", &data.weekdays);
            context.insert("selected_day", &data.selected_day);
            context.insert("selected", &data.selected);
            context.insert("form_action", &config.admin_schedules_path());
            render_template(&tera, "schedules/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list schedules: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/schedules")]
pub async fn upsert_schedule(
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    form: web::Form<UpsertScheduleForm>,
) -> impl Responder {
    match schedules::save_schedule(repo.get_ref(), form.into_inner()) {
        Ok(entry) => {
            FlashMessage::success(format!(
                "Horario de {} actualizado correctamente ⏰",
                entry.day_name
            ))
            .send();
            redirect(&format!(
                "{}?day={}",
                config.admin_schedules_path(),
                entry.day_of_week
            ))
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&config.admin_schedules_path())
        }
        Err(err) => {
            log::error!("Failed to save the schedule: {err}");
            FlashMessage::error("No se pudo guardar el horario.").send();
            redirect(&config.admin_schedules_path())
        }
    }
}
