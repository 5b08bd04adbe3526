use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{NewVendor, Vendor, VendorId},
    engine_api::vendor_objects::NewVendorRequest,
    helpers::{generate_vendor_id, hash_password, verify_password},
    traits::{VendorApiError, VendorManagement},
};

/// `VendorApi` handles vendor registration and login.
pub struct VendorApi<B> {
    db: B,
}

impl<B: Debug> Debug for VendorApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VendorApi ({:?})", self.db)
    }
}

impl<B> VendorApi<B>
where B: VendorManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Opens a new vendor account with a freshly generated id. Fails with
    /// [`VendorApiError::EmailAlreadyRegistered`] if the email is taken.
    pub async fn register(&self, request: NewVendorRequest) -> Result<Vendor, VendorApiError> {
        let NewVendorRequest { name, email, password, bank_account, store_name } = request;
        let vendor = NewVendor {
            id: generate_vendor_id(),
            name,
            email,
            store_name,
            bank_account,
            password_digest: hash_password(password.reveal())
                .map_err(|e| VendorApiError::CredentialError(e.to_string()))?,
        };
        let vendor = self.db.insert_vendor(vendor).await?;
        info!("🧑️ Vendor {} registered for store '{}'", vendor.id, vendor.store_name);
        Ok(vendor)
    }

    /// Checks the credentials, returning the vendor if they match. Unknown emails and wrong passwords both give `None`.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<Vendor>, VendorApiError> {
        let Some((vendor_id, digest)) = self.db.fetch_password_digest(email).await? else {
            debug!("🧑️ Login attempt for unknown email {email}");
            return Ok(None);
        };
        let valid = verify_password(password, &digest).map_err(|e| {
            error!("🧑️ Vendor {vendor_id} has a corrupt credential digest. {e}");
            VendorApiError::CredentialError(e.to_string())
        })?;
        if !valid {
            debug!("🧑️ Invalid password for vendor {vendor_id}");
            return Ok(None);
        }
        self.db.fetch_vendor_by_id(&vendor_id).await
    }

    pub async fn vendor_by_id(&self, vendor_id: &VendorId) -> Result<Option<Vendor>, VendorApiError> {
        self.db.fetch_vendor_by_id(vendor_id).await
    }
}
