//! `SqliteDatabase` is the concrete storage backend of the payout engine.
//!
//! It implements the [`VendorManagement`] and [`OrderManagement`] traits, and hence [`PayoutDatabase`].
//!
//! [`PayoutDatabase`]: crate::traits::PayoutDatabase
use std::fmt::Debug;

use log::*;
use nps_common::Secret;
use sqlx::SqlitePool;

use super::db::{db_url, new_pool, orders, vendors};
use crate::{
    db_types::{NewOrder, NewVendor, Order, OrderId, OrderStatusType, Vendor, VendorId},
    traits::{OrderApiError, OrderManagement, VendorApiError, VendorManagement},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Creates a new database API object using the URL in `NPS_DATABASE_URL`, or the default location.
    pub async fn new(max_connections: u32) -> Result<Self, sqlx::Error> {
        let url = db_url();
        SqliteDatabase::new_with_url(&url, max_connections).await
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = new_pool(url, max_connections).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Brings the schema up to date. Migrations that have already been applied are skipped.
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./src/sqlite/migrations").run(&self.pool).await?;
        info!("🗃️ Database migrations are up to date");
        Ok(())
    }
}

impl VendorManagement for SqliteDatabase {
    async fn insert_vendor(&self, vendor: NewVendor) -> Result<Vendor, VendorApiError> {
        let mut tx = self.pool.begin().await?;
        let vendor = vendors::insert_vendor(vendor, &mut tx).await?;
        tx.commit().await?;
        Ok(vendor)
    }

    async fn fetch_vendor_by_id(&self, vendor_id: &VendorId) -> Result<Option<Vendor>, VendorApiError> {
        let mut conn = self.pool.acquire().await?;
        let vendor = vendors::fetch_vendor_by_id(vendor_id, &mut conn).await?;
        Ok(vendor)
    }

    async fn fetch_vendor_by_email(&self, email: &str) -> Result<Option<Vendor>, VendorApiError> {
        let mut conn = self.pool.acquire().await?;
        let vendor = vendors::fetch_vendor_by_email(email, &mut conn).await?;
        Ok(vendor)
    }

    async fn fetch_password_digest(&self, email: &str) -> Result<Option<(VendorId, Secret<String>)>, VendorApiError> {
        let mut conn = self.pool.acquire().await?;
        let digest = vendors::fetch_password_digest(email, &mut conn).await?;
        Ok(digest)
    }
}

impl OrderManagement for SqliteDatabase {
    /// Checks that the vendor exists, then stores the order, in a single transaction.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderApiError> {
        let mut tx = self.pool.begin().await?;
        if !vendors::vendor_exists(&order.vendor_id, &mut tx).await? {
            return Err(OrderApiError::VendorNotFound(order.vendor_id));
        }
        let order = orders::insert_order(order, &mut tx).await?;
        tx.commit().await?;
        Ok(order)
    }

    async fn fetch_order_by_order_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderApiError> {
        let mut conn = self.pool.acquire().await?;
        let order = orders::fetch_order_by_order_id(order_id, &mut conn).await?;
        Ok(order)
    }

    async fn update_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatusType,
    ) -> Result<Option<Order>, OrderApiError> {
        let mut conn = self.pool.acquire().await?;
        let order = orders::update_order_status(order_id, status, &mut conn).await?;
        Ok(order)
    }

    async fn fetch_completed_orders_for_vendor(&self, vendor_id: &VendorId) -> Result<Vec<Order>, OrderApiError> {
        let mut conn = self.pool.acquire().await?;
        let orders = orders::fetch_orders_for_vendor(vendor_id, OrderStatusType::Completed, &mut conn).await?;
        Ok(orders)
    }
}
