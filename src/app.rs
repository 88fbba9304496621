use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, middleware, web};

use crate::config::Settings;
use crate::{api, errors, routes};

/// Any origin may call any route; responses carry `Access-Control-Allow-Origin: *`.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Builds the application served by every worker and used by the tests.
pub fn build_app(
    settings: &Settings,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody + use<>>,
        Error = Error,
        InitError = (),
    > + use<>,
> {
    let swagger_ui = settings.swagger_ui;

    App::new()
        .wrap(middleware::Compress::default())
        .wrap(cors())
        // Log each incoming request with status, time, and size
        .wrap(middleware::Logger::new("%a \"%r\" %s %b %T"))
        .app_data(errors::json_config(settings.json_limit))
        .configure(api::init_routes)
        .configure(move |cfg: &mut web::ServiceConfig| api::docs::init_routes(cfg, swagger_ui))
        .default_service(web::route().to(routes::not_found))
}
