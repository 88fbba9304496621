use actix_web::HttpResponse;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Body of every mock reply, and of the framework-level rejections.
#[derive(Debug, Deserialize, Serialize, ToSchema, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Logs `payload` under `label` and answers with the route's fixed `message`.
///
/// The payload only ever reaches the log, never the response body.
pub fn acknowledge(label: &str, payload: &Value, message: &str) -> HttpResponse {
    info!("{} {}", label, payload);
    HttpResponse::Ok().json(MessageResponse::new(message))
}
