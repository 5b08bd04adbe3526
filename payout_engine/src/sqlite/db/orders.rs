use chrono::Utc;
use log::{debug, trace};
use sqlx::SqliteConnection;

use crate::{
    db_types::{NewOrder, Order, OrderId, OrderStatusType, VendorId},
    traits::OrderApiError,
};

/// Inserts a new order into the database using the given connection. This is not atomic. You can embed this call
/// inside a transaction if you need to ensure atomicity, and pass `&mut *tx` as the connection argument.
///
/// A reused `order_id` is rejected by the `orders` table and reported as [`OrderApiError::OrderAlreadyExists`].
/// Callers are responsible for checking that the vendor is valid.
pub async fn insert_order(order: NewOrder, conn: &mut SqliteConnection) -> Result<Order, OrderApiError> {
    let order_id = order.order_id.clone();
    let order: Order = sqlx::query_as(
        r#"
            INSERT INTO orders (
                order_id,
                amount,
                status,
                vendor_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *;
        "#,
    )
    .bind(order.order_id)
    .bind(order.amount)
    .bind(order.status)
    .bind(order.vendor_id)
    .bind(order.created_at)
    .bind(Utc::now())
    .fetch_one(conn)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            OrderApiError::OrderAlreadyExists(order_id)
        },
        e => OrderApiError::from(e),
    })?;
    debug!("📝️ Order [{}] inserted with id {}", order.order_id, order.id);
    Ok(order)
}

/// Returns the entry in the orders table for the corresponding `order_id`
pub async fn fetch_order_by_order_id(
    order_id: &OrderId,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, sqlx::Error> {
    let order =
        sqlx::query_as("SELECT * FROM orders WHERE order_id = $1").bind(order_id.as_str()).fetch_optional(conn).await?;
    Ok(order)
}

/// Updates the order status, returning the updated order, or `None` if no order matched `order_id`.
pub async fn update_order_status(
    order_id: &OrderId,
    status: OrderStatusType,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, sqlx::Error> {
    let order: Option<Order> =
        sqlx::query_as("UPDATE orders SET status = $1, updated_at = $2 WHERE order_id = $3 RETURNING *")
            .bind(status)
            .bind(Utc::now())
            .bind(order_id.as_str())
            .fetch_optional(conn)
            .await?;
    if order.is_some() {
        debug!("📝️ Order {order_id} is now {status}");
    }
    Ok(order)
}

/// Fetches the orders with the given status for a vendor.
///
/// Resulting orders are ordered by `created_at` in ascending order
pub async fn fetch_orders_for_vendor(
    vendor_id: &VendorId,
    status: OrderStatusType,
    conn: &mut SqliteConnection,
) -> Result<Vec<Order>, sqlx::Error> {
    let orders: Vec<Order> =
        sqlx::query_as("SELECT * FROM orders WHERE vendor_id = $1 AND status = $2 ORDER BY created_at ASC, id ASC")
            .bind(vendor_id.as_str())
            .bind(status)
            .fetch_all(conn)
            .await?;
    trace!("📝️ {} {status} orders found for vendor {vendor_id}", orders.len());
    Ok(orders)
}
