use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::db_types::{Order, Vendor};

/// The share of every completed order retained by the platform (5%).
pub const FEE_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// The fee rate as a whole percentage, e.g. `5` for a rate of `0.05`.
pub fn fee_percentage() -> Decimal {
    (FEE_RATE * Decimal::ONE_HUNDRED).normalize()
}

/// What a vendor is owed for their completed orders. Monetary fields are in minor currency units.
///
/// A summary is built fresh for every request and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutSummary {
    /// The vendor's store name
    pub vendor: String,
    pub total_orders: usize,
    pub total_amount: Decimal,
    pub platform_fee: Decimal,
    pub net_payout: Decimal,
}

impl PayoutSummary {
    /// Aggregates `orders` for `vendor`. The caller is responsible for passing only completed orders.
    pub fn calculate(vendor: &Vendor, orders: &[Order]) -> Self {
        let total_amount: Decimal = orders.iter().map(|o| Decimal::from(o.amount)).sum();
        let platform_fee = total_amount * FEE_RATE;
        let net_payout = total_amount - platform_fee;
        Self { vendor: vendor.store_name.clone(), total_orders: orders.len(), total_amount, platform_fee, net_payout }
    }
}

/// Who the payout summary gets delivered to. Taken from the same vendor record as the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutRecipient {
    pub name: String,
    pub email: String,
}

impl From<&Vendor> for PayoutRecipient {
    fn from(vendor: &Vendor) -> Self {
        Self { name: vendor.name.clone(), email: vendor.email.clone() }
    }
}
