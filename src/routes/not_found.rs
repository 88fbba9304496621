use actix_web::{HttpRequest, HttpResponse};
use log::debug;

use crate::api::ack::MessageResponse;

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    debug!("No route for {} {}", req.method(), req.path());
    HttpResponse::NotFound().json(MessageResponse::new("Not found"))
}
