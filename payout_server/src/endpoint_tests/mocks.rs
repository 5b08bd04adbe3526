use std::future::pending;

use mockall::mock;
use nps_common::Secret;
use payout_engine::{
    db_types::{NewOrder, NewVendor, Order, OrderId, OrderStatusType, Vendor, VendorId},
    traits::{OrderApiError, OrderManagement, VendorApiError, VendorManagement},
    DeliveryError,
    DocumentRenderer,
    EmailMessage,
    Notifier,
    PayoutSummary,
    RenderError,
};

mock! {
    pub Store {}
    impl VendorManagement for Store {
        async fn insert_vendor(&self, vendor: NewVendor) -> Result<Vendor, VendorApiError>;
        async fn fetch_vendor_by_id(&self, vendor_id: &VendorId) -> Result<Option<Vendor>, VendorApiError>;
        async fn fetch_vendor_by_email(&self, email: &str) -> Result<Option<Vendor>, VendorApiError>;
        async fn fetch_password_digest(&self, email: &str) -> Result<Option<(VendorId, Secret<String>)>, VendorApiError>;
    }
    impl OrderManagement for Store {
        async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderApiError>;
        async fn fetch_order_by_order_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderApiError>;
        async fn update_order_status(&self, order_id: &OrderId, status: OrderStatusType) -> Result<Option<Order>, OrderApiError>;
        async fn fetch_completed_orders_for_vendor(&self, vendor_id: &VendorId) -> Result<Vec<Order>, OrderApiError>;
    }
}

pub struct StubRenderer;

impl DocumentRenderer for StubRenderer {
    fn filename(&self) -> &str {
        "payout_summary.pdf"
    }

    fn content_type(&self) -> &str {
        "application/pdf"
    }

    async fn render(&self, _summary: &PayoutSummary) -> Result<Vec<u8>, RenderError> {
        Ok(b"%PDF-1.3 stub".to_vec())
    }
}

pub struct StuckRenderer;

impl DocumentRenderer for StuckRenderer {
    fn filename(&self) -> &str {
        "payout_summary.pdf"
    }

    fn content_type(&self) -> &str {
        "application/pdf"
    }

    async fn render(&self, _summary: &PayoutSummary) -> Result<Vec<u8>, RenderError> {
        pending::<()>().await;
        Ok(vec![])
    }
}

pub struct NullNotifier;

impl Notifier for NullNotifier {
    async fn notify(&self, _message: &EmailMessage) -> Result<(), DeliveryError> {
        Ok(())
    }
}

pub struct FailingNotifier;

impl Notifier for FailingNotifier {
    async fn notify(&self, _message: &EmailMessage) -> Result<(), DeliveryError> {
        Err(DeliveryError::TransportError("connection refused".into()))
    }
}
