//! The payout orchestrator.
//!
//! [`PayoutApi::calculate_payout`] answers with the vendor's [`PayoutSummary`] as soon as it has been computed. Turning
//! the summary into a document and emailing it to the vendor happens on a detached task afterwards: nothing waits for
//! it, and its failures are logged rather than returned.
use std::{fmt::Debug, sync::Arc, time::Duration};

use log::*;

use crate::{
    db_types::VendorId,
    documents::DocumentRenderer,
    engine_api::{
        errors::PayoutApiError,
        payout_objects::{PayoutRecipient, PayoutSummary},
    },
    notifications::{payout_email, Notifier},
    traits::PayoutDatabase,
};

pub struct PayoutApi<B, R, N> {
    db: B,
    renderer: Arc<R>,
    notifier: Arc<N>,
    notification_timeout: Option<Duration>,
}

impl<B: Debug, R, N> Debug for PayoutApi<B, R, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PayoutApi ({:?}, timeout: {:?})", self.db, self.notification_timeout)
    }
}

impl<B, R, N> PayoutApi<B, R, N>
where
    B: PayoutDatabase,
    R: DocumentRenderer,
    N: Notifier,
{
    pub fn new(db: B, renderer: Arc<R>, notifier: Arc<N>) -> Self {
        Self { db, renderer, notifier, notification_timeout: None }
    }

    /// Abandons the background render-and-email task if it has not finished after `timeout`.
    pub fn with_notification_timeout(mut self, timeout: Duration) -> Self {
        self.notification_timeout = Some(timeout);
        self
    }

    /// Calculates the payout for `vendor_id` from its completed orders.
    ///
    /// On success the vendor is also sent a copy of the summary by email. That happens in the background, so the
    /// summary is returned without waiting for it, and rendering or delivery problems never affect the result.
    pub async fn calculate_payout(&self, vendor_id: &VendorId) -> Result<PayoutSummary, PayoutApiError> {
        let orders = self.db.fetch_completed_orders_for_vendor(vendor_id).await?;
        let vendor = self.db.fetch_vendor_by_id(vendor_id).await?.ok_or_else(|| {
            debug!("💰️ Payout requested for unknown vendor {vendor_id}");
            PayoutApiError::VendorNotFound
        })?;
        let summary = PayoutSummary::calculate(&vendor, &orders);
        info!(
            "💰️ Payout for vendor {vendor_id}: {} orders, total {}, fee {}, net {}",
            summary.total_orders, summary.total_amount, summary.platform_fee, summary.net_payout
        );
        self.spawn_delivery(summary.clone(), PayoutRecipient::from(&vendor));
        Ok(summary)
    }

    fn spawn_delivery(&self, summary: PayoutSummary, recipient: PayoutRecipient) {
        let renderer = Arc::clone(&self.renderer);
        let notifier = Arc::clone(&self.notifier);
        let timeout = self.notification_timeout;
        tokio::spawn(async move {
            let delivery = deliver_summary(renderer.as_ref(), notifier.as_ref(), &summary, &recipient);
            match timeout {
                Some(limit) => {
                    if tokio::time::timeout(limit, delivery).await.is_err() {
                        warn!("💰️ Payout summary for {} was abandoned after {limit:?}", recipient.email);
                    }
                },
                None => delivery.await,
            }
        });
    }
}

async fn deliver_summary<R: DocumentRenderer, N: Notifier>(
    renderer: &R,
    notifier: &N,
    summary: &PayoutSummary,
    recipient: &PayoutRecipient,
) {
    let document = match renderer.render(summary).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("💰️ Could not render the payout summary for {}. {e}", summary.vendor);
            return;
        },
    };
    let message = payout_email(recipient, document, renderer.filename(), renderer.content_type());
    match notifier.notify(&message).await {
        Ok(()) => info!("💰️ Payout summary emailed to {}", recipient.email),
        Err(e) => error!("💰️ Could not email the payout summary to {}. {e}", recipient.email),
    }
}
