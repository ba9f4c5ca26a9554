//! Handoff alerting. Low-confidence queries escalate to a human through a
//! best-effort webhook.

use std::future::Future;
use std::time::Duration;

use faqbot_core::FaqItem;
use serde::Serialize;

use crate::error::RetrievalError;

/// The corpus entry shown to a human reviewer alongside the unanswered
/// question.
#[derive(Debug, Clone, Serialize)]
pub struct FaqContext {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl From<&FaqItem> for FaqContext {
    fn from(item: &FaqItem) -> Self {
        Self {
            id: item.id.clone(),
            question: item.question.clone(),
            answer: item.answer.clone(),
        }
    }
}

/// Everything a reviewer needs about one low-confidence query.
#[derive(Debug, Clone, Serialize)]
pub struct HandoffAlert {
    pub question: String,
    pub top: FaqContext,
    pub score: f32,
    pub threshold: f32,
}

impl HandoffAlert {
    /// One-line summary, used as the message title.
    #[must_use]
    pub fn subject(&self) -> String {
        format!(
            "[FAQ Bot] Handoff triggered (score={:.2} < thr={:.2})",
            self.score, self.threshold
        )
    }

    /// Human-readable body with the question and the closest corpus entry.
    #[must_use]
    pub fn body(&self) -> String {
        format!(
            "A low-confidence FAQ query needs human attention.\n\n\
             User question:\n{}\n\n\
             Top retrieved context:\n\
             - id: {}\n\
             - question: {}\n\
             - answer: {}\n\n\
             Score: {:.3}\n\
             Threshold: {:.3}\n",
            self.question,
            self.top.id,
            self.top.question,
            self.top.answer,
            self.score,
            self.threshold
        )
    }
}

/// Notification seam for handoff alerts.
///
/// `Ok(true)` means an alert was attempted, `Ok(false)` means the channel
/// is not configured. Callers treat both as success; delivery is
/// best-effort.
pub trait HandoffNotifier {
    fn notify(
        &self,
        alert: &HandoffAlert,
    ) -> impl Future<Output = Result<bool, RetrievalError>> + Send;
}

/// Webhook-backed notifier. Without a URL it is a configured no-op.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: Option<String>,
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    subject: String,
    body: String,
    alert: &'a HandoffAlert,
}

impl WebhookNotifier {
    /// Create a notifier posting to `url`, or a no-op when `url` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(url: Option<String>, timeout_secs: u64) -> Result<Self, RetrievalError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, url })
    }
}

impl HandoffNotifier for WebhookNotifier {
    async fn notify(&self, alert: &HandoffAlert) -> Result<bool, RetrievalError> {
        let Some(url) = &self.url else {
            return Ok(false);
        };

        let payload = WebhookPayload {
            subject: alert.subject(),
            body: alert.body(),
            alert,
        };

        let resp = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| RetrievalError::Notify(format!("webhook request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(RetrievalError::Notify(format!(
                "webhook returned status {}",
                resp.status()
            )));
        }

        Ok(true)
    }
}
