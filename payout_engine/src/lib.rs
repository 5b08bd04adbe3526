//! Nile Payout Engine
//!
//! The payout engine tracks vendors and their orders, and computes what each vendor is owed for their completed orders
//! after the platform fee. Every payout calculation also emails the vendor a PDF copy of their summary.
//!
//! The library is divided into these sections:
//! 1. Storage ([`traits`] and the SQLite backend). You should never need to access the database directly. Instead, use
//!    the public API provided by the engine. The data types used in the database are defined in [`db_types`] and are
//!    public.
//! 2. The public API ([`mod@engine_api`]): [`VendorApi`], [`OrderApi`] and [`PayoutApi`].
//! 3. Payout summary delivery: [`documents`] renders summaries and [`notifications`] emails them.
pub mod db_types;
pub mod documents;
pub mod engine_api;
pub mod helpers;
pub mod notifications;
#[cfg(feature = "sqlite")]
mod sqlite;
pub mod traits;

pub use documents::{DocumentRenderer, PdfRenderer, RenderError};
pub use engine_api::{
    errors::PayoutApiError,
    order_api::OrderApi,
    payout_api::PayoutApi,
    payout_objects::{PayoutRecipient, PayoutSummary, FEE_RATE},
    vendor_api::VendorApi,
    vendor_objects::NewVendorRequest,
};
pub use notifications::{DeliveryError, EmailAttachment, EmailMessage, Notifier, SmtpConfig, SmtpNotifier};
#[cfg(feature = "sqlite")]
pub use sqlite::{db::db_url, SqliteDatabase};
pub use traits::{OrderApiError, OrderManagement, PayoutDatabase, VendorApiError, VendorManagement};
