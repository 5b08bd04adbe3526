use thiserror::Error;

use crate::db_types::{NewOrder, Order, OrderId, OrderStatusType, VendorId};

#[derive(Debug, Clone, Error)]
pub enum OrderApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Order {0} already exists")]
    OrderAlreadyExists(OrderId),
    #[error("Order {0} does not exist")]
    OrderNotFound(OrderId),
    #[error("Vendor {0} does not exist")]
    VendorNotFound(VendorId),
}

impl From<sqlx::Error> for OrderApiError {
    fn from(e: sqlx::Error) -> Self {
        OrderApiError::DatabaseError(e.to_string())
    }
}

/// The `OrderManagement` trait defines the behaviour for recording orders and querying them in the database backend.
#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    /// Stores a new order. The owning vendor must exist, and the `order_id` must not have been used before.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderApiError>;

    async fn fetch_order_by_order_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderApiError>;

    /// Sets the status of an existing order, returning the updated record, or `None` if the order does not exist.
    async fn update_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatusType,
    ) -> Result<Option<Order>, OrderApiError>;

    /// Fetches every order with status `Completed` owned by the given vendor, oldest first.
    async fn fetch_completed_orders_for_vendor(&self, vendor_id: &VendorId) -> Result<Vec<Order>, OrderApiError>;
}
