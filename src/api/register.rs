use actix_web::{HttpResponse, web};
use serde_json::Value;

use super::ack::{acknowledge, MessageResponse};

pub const LOG_LABEL: &str = "Received register data:";
pub const MESSAGE: &str = "Registered successfully! (mock response)";

#[utoipa::path(
    post,
    path = "/register",
    tag = "Mock",
    description = "Accepts any registration payload, logs it and replies with a fixed message.",
    responses(
        (status = 200, description = "Fixed acknowledgement", body = MessageResponse),
        (status = 400, description = "Body is not valid JSON", body = MessageResponse),
        (status = 405, description = "Method other than POST"),
        (status = 415, description = "Content-Type is not JSON", body = MessageResponse),
    )
)]
pub async fn register(payload: web::Json<Value>) -> HttpResponse {
    acknowledge(LOG_LABEL, &payload, MESSAGE)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(register)));
}
