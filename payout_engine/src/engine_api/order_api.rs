use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{NewOrder, Order, OrderId, OrderStatusType, VendorId},
    traits::{OrderApiError, OrderManagement},
};

/// `OrderApi` records vendor orders and tracks their completion.
pub struct OrderApi<B> {
    db: B,
}

impl<B: Debug> Debug for OrderApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderApi ({:?})", self.db)
    }
}

impl<B> OrderApi<B>
where B: OrderManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Records a new order. The vendor must exist and the order id must be unused.
    pub async fn create_order(&self, order: NewOrder) -> Result<Order, OrderApiError> {
        let order = self.db.insert_order(order).await?;
        info!("📝️ Order {} for {} recorded for vendor {}", order.order_id, order.amount, order.vendor_id);
        Ok(order)
    }

    /// Sets the status of an existing order. Fails with [`OrderApiError::OrderNotFound`] if there is no such order.
    pub async fn update_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatusType,
    ) -> Result<Order, OrderApiError> {
        let order = self
            .db
            .update_order_status(order_id, status)
            .await?
            .ok_or_else(|| OrderApiError::OrderNotFound(order_id.clone()))?;
        info!("📝️ Order {order_id} marked as {status}");
        Ok(order)
    }

    pub async fn completed_orders_for_vendor(&self, vendor_id: &VendorId) -> Result<Vec<Order>, OrderApiError> {
        self.db.fetch_completed_orders_for_vendor(vendor_id).await
    }
}
