use std::sync::Mutex;

use actix_web::http::header;
use actix_web::test;
use carebloom_backend::api::{donate, login, profile, register};
use carebloom_backend::app::build_app;
use carebloom_backend::config::Settings;
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::json;

// Keeps only records from the route handlers, not the access log or rejections.
struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("carebloom_backend::api")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn take_records() -> Vec<(Level, String)> {
    std::mem::take(&mut *LOGGER.records.lock().unwrap())
}

// Single test in this binary: the logger is process-wide.
#[actix_web::test]
async fn each_request_logs_label_and_payload_once() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Info);

    let app = test::init_service(build_app(&Settings::default())).await;

    take_records();
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"username": "alice"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        take_records(),
        vec![(
            Level::Info,
            r#"Received login data: {"username":"alice"}"#.to_string()
        )]
    );

    let routes = [
        ("/register", register::LOG_LABEL, "Received register data:"),
        ("/login", login::LOG_LABEL, "Received login data:"),
        ("/create_profile", profile::LOG_LABEL, "Received profile data:"),
        ("/donate", donate::LOG_LABEL, "Received donation data:"),
    ];
    for (path, label, expected_label) in routes {
        assert_eq!(label, expected_label);

        let req = test::TestRequest::post()
            .uri(path)
            .set_json(json!({"amount": 10}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success(), "POST {path}");
        assert_eq!(
            take_records(),
            vec![(Level::Info, format!(r#"{label} {{"amount":10}}"#))],
            "POST {path}"
        );
    }

    // Rejected bodies never reach a handler.
    let req = test::TestRequest::post()
        .uri("/donate")
        .insert_header(header::ContentType::json())
        .set_payload("{\"amount\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
    assert!(take_records().is_empty());
}
