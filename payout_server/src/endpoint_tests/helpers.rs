use actix_web::{
    http::{Method, StatusCode},
    test,
    test::TestRequest,
    web,
    web::ServiceConfig,
    App,
};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use log::debug;
use nps_common::Cents;
use payout_engine::db_types::{Order, OrderId, OrderStatusType, Vendor, VendorId};

use crate::{auth::TokenIssuer, config::AuthConfig, server::json_error_handler};

pub const VENDOR_ID: &str = "65f0c0ffee00000000000001";
const JWT_SECRET: &str = "endpoint tests signing secret";

pub fn token_issuer() -> TokenIssuer {
    TokenIssuer::new(&AuthConfig::new(JWT_SECRET, Duration::from_secs(3600)))
}

/// A valid access token for the vendor returned by [`vendor`].
pub fn vendor_token() -> String {
    token_issuer().issue_token(&VendorId::from(VENDOR_ID.to_string())).unwrap()
}

/// Sends a single request through an app built by `configure`, and returns the status and body of the response.
pub async fn send_request<F>(method: Method, path: &str, body: Option<&str>, configure: F) -> (StatusCode, String)
where F: FnOnce(&mut ServiceConfig) {
    send_request_with_token(None, method, path, body, configure).await
}

/// Like [`send_request`], but authenticated with a valid access token for the test vendor.
pub async fn send_authorized<F>(method: Method, path: &str, body: Option<&str>, configure: F) -> (StatusCode, String)
where F: FnOnce(&mut ServiceConfig) {
    let token = vendor_token();
    send_request_with_token(Some(&token), method, path, body, configure).await
}

/// Sends a request carrying `Authorization: Bearer {token}` if a token is given.
pub async fn send_request_with_token<F>(
    token: Option<&str>,
    method: Method,
    path: &str,
    body: Option<&str>,
    configure: F,
) -> (StatusCode, String)
where
    F: FnOnce(&mut ServiceConfig),
{
    let _ = env_logger::try_init();
    let mut req = TestRequest::default().method(method).uri(path);
    if let Some(token) = token {
        req = req.insert_header(("Authorization", format!("Bearer {token}")));
    }
    if let Some(body) = body {
        req = req.insert_header(("Content-Type", "application/json")).set_payload(body.to_string());
    }
    let app = App::new()
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::Data::new(token_issuer()))
        .configure(configure);
    let service = test::init_service(app).await;
    debug!("Making request");
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    (status, String::from_utf8_lossy(&body).into_owned())
}

pub fn vendor() -> Vendor {
    Vendor {
        id: VendorId::from(VENDOR_ID.to_string()),
        name: "Amira Haddad".into(),
        email: "amira@example.com".into(),
        store_name: "Nile Crafts".into(),
        bank_account: "EG38 0019 0005".into(),
        created_at: Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap(),
    }
}

pub fn order(id: i64, order_id: &str, amount: i64, status: OrderStatusType) -> Order {
    Order {
        id,
        order_id: OrderId::from(order_id.to_string()),
        amount: Cents::from(amount),
        status,
        vendor_id: VendorId::from(VENDOR_ID.to_string()),
        created_at: Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap(),
    }
}
