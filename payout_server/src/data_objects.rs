use std::sync::OnceLock;

use chrono::{DateTime, SecondsFormat, Utc};
use nps_common::{Cents, Secret};
use payout_engine::{
    db_types::{NewOrder, OrderId, OrderStatusType, Vendor, VendorId},
    NewVendorRequest,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ServerError;

const MIN_PASSWORD_LENGTH: usize = 6;
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN)).as_ref().map_or(false, |re| re.is_match(email))
}

fn require(condition: bool, message: &str, errors: &mut Vec<String>) {
    if !condition {
        errors.push(message.to_string());
    }
}

fn into_result(errors: Vec<String>) -> Result<(), ServerError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ServerError::ValidationError(errors.join("; ")))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn up(now: DateTime<Utc>) -> Self {
        Self { status: "UP".into(), timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true) }
    }
}

#[derive(Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub bank_account: String,
    #[serde(default)]
    pub store_name: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), ServerError> {
        let mut errors = Vec::new();
        require(!self.name.trim().is_empty(), "Name is required", &mut errors);
        require(is_valid_email(&self.email), "Please include a valid email", &mut errors);
        require(
            self.password.chars().count() >= MIN_PASSWORD_LENGTH,
            "Please enter a password with 6 or more characters",
            &mut errors,
        );
        require(!self.bank_account.trim().is_empty(), "Bank account is required", &mut errors);
        require(!self.store_name.trim().is_empty(), "Store name is required", &mut errors);
        into_result(errors)
    }
}

impl From<RegisterRequest> for NewVendorRequest {
    fn from(req: RegisterRequest) -> Self {
        Self {
            name: req.name.trim().to_string(),
            email: req.email.trim().to_string(),
            password: Secret::new(req.password),
            bank_account: req.bank_account.trim().to_string(),
            store_name: req.store_name.trim().to_string(),
        }
    }
}

/// Response to a successful registration or login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub vendor: Vendor,
    pub token: String,
}

#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ServerError> {
        let mut errors = Vec::new();
        require(is_valid_email(&self.email), "Please include a valid email", &mut errors);
        require(!self.password.is_empty(), "Password is required", &mut errors);
        into_result(errors)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub status: OrderStatusType,
    #[serde(default)]
    pub vendor: String,
}

impl CreateOrderRequest {
    pub fn validate(&self) -> Result<(), ServerError> {
        let mut errors = Vec::new();
        require(!self.order_id.trim().is_empty(), "Order ID is required", &mut errors);
        require(self.amount > 0, "Amount must be a positive number", &mut errors);
        require(!self.vendor.trim().is_empty(), "Vendor ID is required", &mut errors);
        into_result(errors)
    }
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        NewOrder::new(
            OrderId::from(req.order_id.trim().to_string()),
            VendorId::from(req.vendor.trim().to_string()),
            Cents::from(req.amount),
        )
        .with_status(req.status)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatusType,
}
