use nps_common::Secret;
use thiserror::Error;

use crate::db_types::{NewVendor, Vendor, VendorId};

#[derive(Debug, Clone, Error)]
pub enum VendorApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("A vendor with email {0} is already registered")]
    EmailAlreadyRegistered(String),
    #[error("Could not process vendor credentials: {0}")]
    CredentialError(String),
}

impl From<sqlx::Error> for VendorApiError {
    fn from(e: sqlx::Error) -> Self {
        VendorApiError::DatabaseError(e.to_string())
    }
}

/// The `VendorManagement` trait defines behaviour for storing and looking up vendor accounts.
#[allow(async_fn_in_trait)]
pub trait VendorManagement {
    /// Stores a new vendor. Email addresses are unique; inserting a second vendor with the same email fails with
    /// [`VendorApiError::EmailAlreadyRegistered`].
    async fn insert_vendor(&self, vendor: NewVendor) -> Result<Vendor, VendorApiError>;

    /// Fetches the vendor with the given id. If no vendor exists, `None` is returned.
    async fn fetch_vendor_by_id(&self, vendor_id: &VendorId) -> Result<Option<Vendor>, VendorApiError>;

    async fn fetch_vendor_by_email(&self, email: &str) -> Result<Option<Vendor>, VendorApiError>;

    /// Fetches the stored credential digest for the vendor registered under `email`.
    async fn fetch_password_digest(&self, email: &str) -> Result<Option<(VendorId, Secret<String>)>, VendorApiError>;
}
