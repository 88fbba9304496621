use std::io;

use actix_web::HttpServer;
use carebloom_backend::app;
use carebloom_backend::config::Settings;
use dotenvy::dotenv;
use env_logger::{Env, Target};
use log::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Payload records go to stdout; RUST_LOG overrides the default filter
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    let settings = Settings::from_env().map_err(io::Error::other)?;
    if settings.swagger_ui {
        info!("Swagger UI enabled at /swagger-ui/");
    }

    info!("Server running at http://{}:{}", settings.host, settings.port);
    let bind = (settings.host.clone(), settings.port);
    HttpServer::new(move || app::build_app(&settings))
        .bind(bind)?
        .run()
        .await
}
