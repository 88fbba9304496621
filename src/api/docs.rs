use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::ack::MessageResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "carebloom-backend",
        description = "Mock acknowledgement endpoints. Payloads are logged and never stored."
    ),
    paths(
        super::register::register,
        super::login::login,
        super::profile::create_profile,
        super::donate::donate,
    ),
    components(schemas(MessageResponse)),
    tags((name = "Mock", description = "Static (mock response) endpoints"))
)]
pub struct ApiDoc;

pub const OPENAPI_URL: &str = "/api-docs/openapi.json";

pub fn init_routes(cfg: &mut web::ServiceConfig, enabled: bool) {
    if !enabled {
        return;
    }
    cfg.service(SwaggerUi::new("/swagger-ui/{_:.*}").url(OPENAPI_URL, ApiDoc::openapi()));
}
