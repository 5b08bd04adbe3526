use actix_web::{
    http::{Method, StatusCode},
    web,
};
use nps_common::Cents;
use payout_engine::{
    db_types::OrderStatusType,
    traits::OrderApiError,
    OrderApi,
};

use super::{
    helpers::{order, send_authorized, send_request, send_request_with_token, VENDOR_ID},
    mocks::MockStore,
};
use crate::routes::{CreateOrderRoute, UpdateOrderStatusRoute};

fn configure_with(store: MockStore) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(CreateOrderRoute::<MockStore>::new())
            .service(UpdateOrderStatusRoute::<MockStore>::new())
            .app_data(web::Data::new(OrderApi::new(store)));
    }
}

fn new_order_json(order_id: &str, amount: i64) -> String {
    format!(r#"{{"order_id":"{order_id}","amount":{amount},"vendor":"{VENDOR_ID}"}}"#)
}

#[actix_web::test]
async fn create_order() {
    let mut store = MockStore::new();
    store
        .expect_insert_order()
        .withf(|o| {
            o.order_id.as_str() == "A-1" &&
                o.amount == Cents::from(1_500) &&
                o.status == OrderStatusType::Pending &&
                o.vendor_id.as_str() == VENDOR_ID
        })
        .returning(|_| Ok(order(1, "A-1", 1_500, OrderStatusType::Pending)));
    let body = new_order_json("A-1", 1_500);
    let (status, body) = send_authorized(Method::POST, "/orders", Some(&body), configure_with(store)).await;
    assert_eq!(status, StatusCode::CREATED);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["order_id"], "A-1");
    assert_eq!(json["amount"], 1_500);
    assert_eq!(json["status"], "pending");
    assert_eq!(json["vendor"], VENDOR_ID);
}

#[actix_web::test]
async fn create_completed_order() {
    let mut store = MockStore::new();
    store
        .expect_insert_order()
        .withf(|o| o.status == OrderStatusType::Completed)
        .returning(|_| Ok(order(2, "A-2", 700, OrderStatusType::Completed)));
    let body = format!(r#"{{"order_id":"A-2","amount":700,"vendor":"{VENDOR_ID}","status":"completed"}}"#);
    let (status, body) = send_authorized(Method::POST, "/orders", Some(&body), configure_with(store)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.contains(r#""status":"completed""#));
}

#[actix_web::test]
async fn create_order_with_invalid_amount() {
    let store = MockStore::new();
    let body = new_order_json("A-1", 0);
    let (status, body) = send_authorized(Method::POST, "/orders", Some(&body), configure_with(store)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"message":"Amount must be a positive number"}"#);
}

#[actix_web::test]
async fn create_order_with_unknown_status() {
    let store = MockStore::new();
    let body = format!(r#"{{"order_id":"A-2","amount":700,"vendor":"{VENDOR_ID}","status":"shipped"}}"#);
    let (status, _) = send_authorized(Method::POST, "/orders", Some(&body), configure_with(store)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn create_order_for_unknown_vendor() {
    let mut store = MockStore::new();
    store.expect_insert_order().returning(|o| Err(OrderApiError::VendorNotFound(o.vendor_id)));
    let body = new_order_json("A-1", 1_500);
    let (status, body) = send_authorized(Method::POST, "/orders", Some(&body), configure_with(store)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"message":"Vendor not found"}"#);
}

#[actix_web::test]
async fn create_duplicate_order() {
    let mut store = MockStore::new();
    store.expect_insert_order().returning(|o| Err(OrderApiError::OrderAlreadyExists(o.order_id)));
    let body = new_order_json("A-1", 1_500);
    let (status, body) = send_authorized(Method::POST, "/orders", Some(&body), configure_with(store)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, r#"{"message":"Order already exists"}"#);
}

#[actix_web::test]
async fn complete_an_order() {
    let mut store = MockStore::new();
    store
        .expect_update_order_status()
        .withf(|id, status| id.as_str() == "A-1" && *status == OrderStatusType::Completed)
        .returning(|_, _| Ok(Some(order(1, "A-1", 1_500, OrderStatusType::Completed))));
    let body = r#"{"status":"completed"}"#;
    let (status, body) = send_authorized(Method::PATCH, "/orders/A-1/status", Some(body), configure_with(store)).await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "completed");
}

#[actix_web::test]
async fn complete_an_unknown_order() {
    let mut store = MockStore::new();
    store.expect_update_order_status().returning(|_, _| Ok(None));
    let body = r#"{"status":"completed"}"#;
    let (status, body) =
        send_authorized(Method::PATCH, "/orders/A-404/status", Some(body), configure_with(store)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"message":"Order not found"}"#);
}

#[actix_web::test]
async fn status_update_needs_a_valid_status() {
    let store = MockStore::new();
    let body = r#"{"status":"refunded"}"#;
    let (status, _) = send_authorized(Method::PATCH, "/orders/A-1/status", Some(body), configure_with(store)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn vendor_ids_are_passed_through() {
    let mut store = MockStore::new();
    store
        .expect_insert_order()
        .withf(|o| o.vendor_id.as_str() == "abc")
        .returning(|o| Err(OrderApiError::VendorNotFound(o.vendor_id)));
    let body = r#"{"order_id":"A-1","amount":10,"vendor":"  abc  "}"#;
    let (status, _) = send_authorized(Method::POST, "/orders", Some(body), configure_with(store)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn create_order_without_a_token() {
    let store = MockStore::new();
    let body = new_order_json("A-1", 1_500);
    let (status, body) = send_request(Method::POST, "/orders", Some(&body), configure_with(store)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, r#"{"message":"Authentication token missing"}"#);
}

#[actix_web::test]
async fn create_order_with_an_invalid_token() {
    let store = MockStore::new();
    let body = new_order_json("A-1", 1_500);
    let (status, body) =
        send_request_with_token(Some("not.a.token"), Method::POST, "/orders", Some(&body), configure_with(store)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, r#"{"message":"Invalid token"}"#);
}

#[actix_web::test]
async fn status_update_without_a_token() {
    let store = MockStore::new();
    let body = r#"{"status":"completed"}"#;
    let (status, body) = send_request(Method::PATCH, "/orders/A-1/status", Some(body), configure_with(store)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, r#"{"message":"Authentication token missing"}"#);
}

#[actix_web::test]
async fn create_order_with_a_very_large_amount() {
    let mut store = MockStore::new();
    store
        .expect_insert_order()
        .withf(|o| o.amount == Cents::from(i64::MAX))
        .returning(|_| Ok(order(1, "A-1", i64::MAX, OrderStatusType::Pending)));
    let body = new_order_json("A-1", i64::MAX);
    let (status, body) = send_authorized(Method::POST, "/orders", Some(&body), configure_with(store)).await;
    assert_eq!(status, StatusCode::CREATED);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["amount"], i64::MAX);
}
