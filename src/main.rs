use std::path::Path;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use chrono::Utc;
use env_logger::Env;

use monitoring_console::db::{establish_connection_pool, run_migrations};
use monitoring_console::models::config::ServerConfig;
use monitoring_console::repository::DieselRepository;
use monitoring_console::routes;
use monitoring_console::services::cameras::initialize_cameras;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load(Path::new("config")) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to open database {}: {e}", server_config.database_url);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("{e}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);

    if server_config.initialize_cameras_on_start
        && let Err(e) = initialize_cameras(&repo, Utc::now().naive_utc())
    {
        log::error!("Failed to initialize camera registry: {e}");
    }

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting monitoring console on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
