//! Sqlite database operations for vendor accounts.
//!
//! Generally clients should never call these methods directly, and prefer to use the [`VendorManagement`] trait
//! methods that are implemented on the [`SqliteDatabase`] struct instead.
//!
//! [`VendorManagement`]: crate::traits::VendorManagement
//! [`SqliteDatabase`]: crate::SqliteDatabase
use chrono::Utc;
use log::debug;
use nps_common::Secret;
use sqlx::SqliteConnection;

use crate::{
    db_types::{NewVendor, Vendor, VendorId},
    traits::VendorApiError,
};

/// Inserts a new vendor. Email uniqueness is enforced by the `vendors` table, and a clash is reported as
/// [`VendorApiError::EmailAlreadyRegistered`].
pub async fn insert_vendor(vendor: NewVendor, conn: &mut SqliteConnection) -> Result<Vendor, VendorApiError> {
    let email = vendor.email.clone();
    let inserted: Vendor = sqlx::query_as(
        r#"
            INSERT INTO vendors (
                id,
                name,
                email,
                store_name,
                bank_account,
                password_digest,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, store_name, bank_account, created_at;
        "#,
    )
    .bind(vendor.id)
    .bind(vendor.name)
    .bind(vendor.email)
    .bind(vendor.store_name)
    .bind(vendor.bank_account)
    .bind(vendor.password_digest.reveal().clone())
    .bind(Utc::now())
    .fetch_one(conn)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            VendorApiError::EmailAlreadyRegistered(email)
        },
        e => VendorApiError::from(e),
    })?;
    debug!("🧑️ Vendor [{}] inserted for {}", inserted.id, inserted.store_name);
    Ok(inserted)
}

pub async fn fetch_vendor_by_id(
    vendor_id: &VendorId,
    conn: &mut SqliteConnection,
) -> Result<Option<Vendor>, sqlx::Error> {
    let vendor = sqlx::query_as(
        "SELECT id, name, email, store_name, bank_account, created_at FROM vendors WHERE id = $1",
    )
    .bind(vendor_id.as_str())
    .fetch_optional(conn)
    .await?;
    Ok(vendor)
}

pub async fn fetch_vendor_by_email(email: &str, conn: &mut SqliteConnection) -> Result<Option<Vendor>, sqlx::Error> {
    let vendor = sqlx::query_as(
        "SELECT id, name, email, store_name, bank_account, created_at FROM vendors WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(conn)
    .await?;
    Ok(vendor)
}

pub async fn vendor_exists(vendor_id: &VendorId, conn: &mut SqliteConnection) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT count(id) FROM vendors WHERE id = $1").bind(vendor_id.as_str()).fetch_one(conn).await?;
    Ok(count > 0)
}

pub async fn fetch_password_digest(
    email: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<(VendorId, Secret<String>)>, sqlx::Error> {
    let row: Option<(VendorId, String)> =
        sqlx::query_as("SELECT id, password_digest FROM vendors WHERE email = $1")
            .bind(email)
            .fetch_optional(conn)
            .await?;
    Ok(row.map(|(id, digest)| (id, Secret::new(digest))))
}
