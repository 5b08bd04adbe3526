mod cents;

pub mod helpers;
mod secret;

pub use cents::{format_minor_units, Cents, CURRENCY_SYMBOL};
pub use secret::Secret;
