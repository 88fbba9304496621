use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpRequest, HttpResponse, web};
use log::warn;

use crate::api::ack::MessageResponse;

/// Extractor settings for the mock routes' JSON bodies.
///
/// Rejected bodies answer with a `{"message": ...}` object instead of the
/// default plain-text error.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    let status = rejection_status(&err);
    warn!(
        "Rejected body for {} {}: {} ({})",
        req.method(),
        req.path(),
        err,
        status
    );
    let resp = HttpResponse::build(status).json(MessageResponse::new(err.to_string()));
    InternalError::from_response(err, resp).into()
}

fn rejection_status(err: &JsonPayloadError) -> StatusCode {
    match err {
        JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_rejections_to_client_errors() {
        assert_eq!(
            rejection_status(&JsonPayloadError::ContentType),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            rejection_status(&JsonPayloadError::Overflow { limit: 16 }),
            StatusCode::PAYLOAD_TOO_LARGE
        );

        let syntax = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        assert_eq!(
            rejection_status(&JsonPayloadError::Deserialize(syntax)),
            StatusCode::BAD_REQUEST
        );
    }
}
