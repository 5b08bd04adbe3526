//! # Payout engine public API
//!
//! The `engine_api` module exposes the programmatic API of the payout engine. Each API is created by supplying a
//! backend that implements the traits it needs:
//!
//! * [`vendor_api`] registers vendors and checks their credentials.
//! * [`order_api`] records orders and moves them to `completed`.
//! * [`payout_api`] calculates a vendor's payout and, in the background, emails them a PDF copy of the summary.
//!
//! ```rust,ignore
//! use payout_engine::{PayoutApi, PdfRenderer, SmtpNotifier, SqliteDatabase};
//! let db = SqliteDatabase::new_with_url("sqlite://data/nps_store.db", 5).await?;
//! let api = PayoutApi::new(db, Arc::new(PdfRenderer::new()), Arc::new(SmtpNotifier::disabled()));
//! let summary = api.calculate_payout(&vendor_id).await?;
//! ```
pub mod errors;
pub mod order_api;
pub mod payout_api;
pub mod payout_objects;
pub mod vendor_api;
pub mod vendor_objects;
