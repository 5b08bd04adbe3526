use actix_web::http::{Method, StatusCode};
use chrono::DateTime;

use super::helpers::send_request;
use crate::routes::health;

#[actix_web::test]
async fn health_check() {
    let (status, body) = send_request(Method::GET, "/health", None, |cfg| {
        cfg.service(health);
    })
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "UP");
    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
}
