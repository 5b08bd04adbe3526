//! # Backend contracts
//!
//! This module defines the interfaces that payout engine storage *backends* must expose.
//!
//! * [`VendorManagement`] stores vendor accounts and the credential digests used to log in.
//! * [`OrderManagement`] records orders and answers the "completed orders for vendor X" query that payouts are built
//!   from.
//! * [`PayoutDatabase`] is the union of the two, and is what the payout orchestrator requires.
//!
//! [`crate::SqliteDatabase`] is the bundled implementation.
mod order_management;
mod vendor_management;

pub use order_management::{OrderApiError, OrderManagement};
pub use vendor_management::{VendorApiError, VendorManagement};

/// A backend that can serve everything a payout calculation needs.
pub trait PayoutDatabase: OrderManagement + VendorManagement {}

impl<T> PayoutDatabase for T where T: OrderManagement + VendorManagement {}
