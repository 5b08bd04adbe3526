#![allow(dead_code)]
use std::future::pending;

use log::*;
use nps_common::{Cents, Secret};
use payout_engine::{
    db_types::{NewOrder, OrderId, OrderStatusType, Vendor},
    DeliveryError,
    DocumentRenderer,
    EmailMessage,
    NewVendorRequest,
    Notifier,
    OrderApi,
    PayoutSummary,
    RenderError,
    SqliteDatabase,
    VendorApi,
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Creates a fresh, migrated in-memory database.
pub async fn prepare_test_env() -> SqliteDatabase {
    dotenvy::from_filename(".env.test").ok();
    let _ = env_logger::try_init();
    let db = SqliteDatabase::new_with_url("sqlite::memory:", 1).await.expect("Error creating in-memory database");
    db.run_migrations().await.expect("Error running DB migrations");
    debug!("🚀️ Test database ready");
    db
}

pub fn vendor_request(name: &str, email: &str) -> NewVendorRequest {
    NewVendorRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: Secret::new("correct horse".to_string()),
        bank_account: "EG38 0019 0005 0000 0000 2631 8000 2".to_string(),
        store_name: format!("{name}'s Store"),
    }
}

pub async fn register_vendor(db: &SqliteDatabase, name: &str, email: &str) -> Vendor {
    VendorApi::new(db.clone()).register(vendor_request(name, email)).await.expect("Error registering vendor")
}

pub async fn add_order(db: &SqliteDatabase, vendor: &Vendor, order_id: &str, amount: i64, status: OrderStatusType) {
    let api = OrderApi::new(db.clone());
    let order = NewOrder::new(OrderId::from(order_id.to_string()), vendor.id.clone(), Cents::from(amount));
    api.create_order(order).await.expect("Error creating order");
    if status == OrderStatusType::Completed {
        api.update_order_status(&OrderId::from(order_id.to_string()), status).await.expect("Error completing order");
    }
}

//----------------------------------------------   Renderers   -------------------------------------------------------

/// Returns a fixed document immediately.
pub struct FixedRenderer;

impl DocumentRenderer for FixedRenderer {
    fn filename(&self) -> &str {
        "payout_summary.pdf"
    }

    fn content_type(&self) -> &str {
        "application/pdf"
    }

    async fn render(&self, _summary: &PayoutSummary) -> Result<Vec<u8>, RenderError> {
        Ok(b"%PDF-1.3 fixed".to_vec())
    }
}

pub struct FailingRenderer;

impl DocumentRenderer for FailingRenderer {
    fn filename(&self) -> &str {
        "payout_summary.pdf"
    }

    fn content_type(&self) -> &str {
        "application/pdf"
    }

    async fn render(&self, _summary: &PayoutSummary) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::PdfError("out of ink".into()))
    }
}

/// Never finishes rendering. If a `dropped` channel is given, a message is sent on it when the render is abandoned.
pub struct StuckRenderer {
    pub dropped: Option<UnboundedSender<()>>,
}

struct DropSignal(Option<UnboundedSender<()>>);

impl Drop for DropSignal {
    fn drop(&mut self) {
        if let Some(tx) = self.0.take() {
            let _ = tx.send(());
        }
    }
}

impl DocumentRenderer for StuckRenderer {
    fn filename(&self) -> &str {
        "payout_summary.pdf"
    }

    fn content_type(&self) -> &str {
        "application/pdf"
    }

    async fn render(&self, _summary: &PayoutSummary) -> Result<Vec<u8>, RenderError> {
        let _signal = DropSignal(self.dropped.clone());
        pending::<()>().await;
        Ok(vec![])
    }
}

//----------------------------------------------   Notifiers   -------------------------------------------------------

/// Hands every message it is asked to deliver to the test via a channel.
pub struct RecordingNotifier {
    tx: UnboundedSender<EmailMessage>,
}

impl RecordingNotifier {
    pub fn new() -> (Self, UnboundedReceiver<EmailMessage>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &EmailMessage) -> Result<(), DeliveryError> {
        self.tx.send(message.clone()).map_err(|e| DeliveryError::TransportError(e.to_string()))
    }
}

pub struct FailingNotifier;

impl Notifier for FailingNotifier {
    async fn notify(&self, _message: &EmailMessage) -> Result<(), DeliveryError> {
        Err(DeliveryError::TransportError("connection refused".into()))
    }
}

pub struct StuckNotifier;

impl Notifier for StuckNotifier {
    async fn notify(&self, _message: &EmailMessage) -> Result<(), DeliveryError> {
        pending::<()>().await;
        Ok(())
    }
}
