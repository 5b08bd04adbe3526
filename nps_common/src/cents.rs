use std::fmt::Display;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use sqlx::Type;

pub const CURRENCY_SYMBOL: &str = "$";

//--------------------------------------       Cents         ---------------------------------------------------------
/// An amount of money expressed in integer minor currency units (e.g. cents).
#[derive(Debug, Clone, Copy, Default, Type, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct Cents(i64);

impl From<i64> for Cents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Cents> for Decimal {
    fn from(value: Cents) -> Self {
        Decimal::from(value.0)
    }
}

impl Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_minor_units(Decimal::from(*self)))
    }
}

impl Cents {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

/// Formats an amount given in minor units as major units with exactly two decimal places, e.g. `1665` -> `$16.65`.
///
/// Fractional minor units (as produced by fee calculations) are rounded half away from zero.
pub fn format_minor_units(value: Decimal) -> String {
    let mut major = (value / Decimal::ONE_HUNDRED).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    major.rescale(2);
    format!("{CURRENCY_SYMBOL}{major}")
}
