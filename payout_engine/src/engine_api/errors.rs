use thiserror::Error;

use crate::traits::{OrderApiError, VendorApiError};

#[derive(Debug, Clone, Error)]
pub enum PayoutApiError {
    #[error("Vendor not found")]
    VendorNotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<OrderApiError> for PayoutApiError {
    fn from(e: OrderApiError) -> Self {
        PayoutApiError::DatabaseError(e.to_string())
    }
}

impl From<VendorApiError> for PayoutApiError {
    fn from(e: VendorApiError) -> Self {
        PayoutApiError::DatabaseError(e.to_string())
    }
}
