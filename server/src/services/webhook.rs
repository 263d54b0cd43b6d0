//! Webhook notifier — share-creation callbacks to campaign endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Delivery is fire-and-forget: the share-create response never waits on or
//! reflects webhook outcomes. Callers spawn `notify_share_created` and log
//! the error, if any. No retries.

use std::time::Duration;

use serde::Serialize;

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("delivery failed: {0}")]
    Delivery(#[from] reqwest::Error),
}

/// Payload POSTed to a campaign's webhook URL when a share is created.
#[derive(Debug, Clone, Serialize)]
pub struct ShareCreatedPayload {
    pub campaign_id: i64,
    pub share_id: i64,
    pub code: String,
}

/// POST the share-created payload to `webhook_url`.
///
/// # Errors
///
/// Returns a delivery error on connect/timeout failures or a non-2xx status.
pub async fn notify_share_created(
    http: &reqwest::Client,
    webhook_url: &str,
    payload: &ShareCreatedPayload,
) -> Result<(), WebhookError> {
    http.post(webhook_url)
        .timeout(DELIVERY_TIMEOUT)
        .json(payload)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}

#[cfg(test)]
#[path = "webhook_test.rs"]
mod tests;
