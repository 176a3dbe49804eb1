use std::env;

use actix_files::Files;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use tera::Tera;

use rw_kiosco::config::ServerConfig;
use rw_kiosco::db::establish_connection_pool;
use rw_kiosco::repository::DieselRepository;
use rw_kiosco::routes::api::api_v1_menu;
use rw_kiosco::routes::cart::{add_to_cart, checkout, remove_from_cart, show_cart};
use rw_kiosco::routes::main::{show_menu, show_product};
use rw_kiosco::routes::schedules::{show_schedules, upsert_schedule};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("kiosco.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret_key = match env::var("SECRET_KEY") {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    let whatsapp_phone = match env::var("WHATSAPP_PHONE") {
        Ok(phone) => phone,
        Err(_) => {
            log::error!("WHATSAPP_PHONE environment variable not set");
            std::process::exit(1);
        }
    };

    let admin_path = env::var("ADMIN_PATH").unwrap_or("secret".to_string());
    let domain = env::var("DOMAIN").unwrap_or("localhost".to_string());

    let config = ServerConfig {
        whatsapp_phone,
        admin_path: admin_path.clone(),
    };

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{domain}")))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_menu)
            .service(show_product)
            .service(show_cart)
            .service(add_to_cart)
            .service(remove_from_cart)
            .service(checkout)
            .service(api_v1_menu)
            .service(
                web::scope(&format!("/admin/{admin_path}"))
                    .service(show_schedules)
                    .service(upsert_schedule),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(config.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
