use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use nps_common::{Cents, Secret};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use thiserror::Error;

//--------------------------------------       VendorId        ---------------------------------------------------------
/// The server-assigned identifier of a vendor account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Type, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct VendorId(pub String);

impl FromStr for VendorId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for VendorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl VendorId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//--------------------------------------        Vendor         ---------------------------------------------------------
/// A registered vendor. The credential digest is deliberately not part of this record.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub email: String,
    pub store_name: String,
    pub bank_account: String,
    pub created_at: DateTime<Utc>,
}

//--------------------------------------       NewVendor       ---------------------------------------------------------
#[derive(Debug, Clone)]
pub struct NewVendor {
    pub id: VendorId,
    pub name: String,
    pub email: String,
    pub store_name: String,
    pub bank_account: String,
    /// Salted password digest, as produced by [`crate::helpers::hash_password`]
    pub password_digest: Secret<String>,
}

//--------------------------------------        OrderId        ---------------------------------------------------------
/// The caller-supplied, globally unique identifier of an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Type, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct OrderId(pub String);

impl FromStr for OrderId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//--------------------------------------   OrderStatusType     ---------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatusType {
    /// The order has been recorded, but is not yet eligible for payout.
    #[default]
    Pending,
    /// The order has been fulfilled and counts towards the vendor's payout.
    Completed,
}

impl Display for OrderStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatusType::Pending => write!(f, "pending"),
            OrderStatusType::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid order status: {0}")]
pub struct ConversionError(String);

impl FromStr for OrderStatusType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ConversionError(s.to_string())),
        }
    }
}

//--------------------------------------        Order          ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_id: OrderId,
    /// The order amount, in minor currency units
    pub amount: Cents,
    pub status: OrderStatusType,
    #[serde(rename = "vendor")]
    pub vendor_id: VendorId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//--------------------------------------       NewOrder        ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub order_id: OrderId,
    pub amount: Cents,
    #[serde(default)]
    pub status: OrderStatusType,
    #[serde(rename = "vendor")]
    pub vendor_id: VendorId,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl NewOrder {
    pub fn new(order_id: OrderId, vendor_id: VendorId, amount: Cents) -> Self {
        Self { order_id, amount, status: OrderStatusType::default(), vendor_id, created_at: Utc::now() }
    }

    pub fn with_status(mut self, status: OrderStatusType) -> Self {
        self.status = status;
        self
    }
}
