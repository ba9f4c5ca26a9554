use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub faqs_path: PathBuf,
    /// Nominal range [0, 1]. Out-of-range values are clamped at the
    /// handoff decision rather than rejected here.
    pub confidence_threshold: f32,
    /// Embedding service base URL. Required for `faq ask`; sentiment
    /// commands run without it.
    pub embed_url: Option<String>,
    /// Handoff webhook URL. Unset means handoff alerts are skipped.
    pub handoff_webhook_url: Option<String>,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("faqs_path", &self.faqs_path)
            .field("confidence_threshold", &self.confidence_threshold)
            .field("embed_url", &self.embed_url)
            // webhook URLs carry the auth token in the path
            .field(
                "handoff_webhook_url",
                &self.handoff_webhook_url.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
