//! # Payout documents
//!
//! A [`DocumentRenderer`] turns a [`PayoutSummary`] into the document that is attached to the vendor's payout email.
//! [`PdfRenderer`] is the production implementation.
use std::future::Future;

use thiserror::Error;

use crate::engine_api::payout_objects::PayoutSummary;

mod layout;
mod pdf;

pub use layout::{summary_lines, TextLine, COURTESY_MESSAGE};
pub use pdf::PdfRenderer;

#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("Could not build the PDF document: {0}")]
    PdfError(String),
    #[error("The rendering task did not complete: {0}")]
    TaskFailed(String),
}

pub trait DocumentRenderer: Send + Sync + 'static {
    /// The file name the rendered document should be delivered under.
    fn filename(&self) -> &str;

    /// The MIME type of the rendered document.
    fn content_type(&self) -> &str;

    /// Renders the summary. Either the complete document is returned, or an error; never a partial document.
    fn render(&self, summary: &PayoutSummary) -> impl Future<Output = Result<Vec<u8>, RenderError>> + Send;
}
