//! FAQ retrieval command handlers for the CLI.

use clap::Subcommand;
use faqbot_core::AppConfig;
use faqbot_retrieval::{ask, build_index, FaqEngine, HttpEmbedder, WebhookNotifier};

/// Sub-commands available under `faq`.
#[derive(Debug, Subcommand)]
pub enum FaqCommands {
    /// Answer a question from the FAQ corpus, or hand off below the threshold
    Ask {
        /// Question to answer
        #[arg(long)]
        question: String,

        /// Override the configured confidence threshold for this query
        #[arg(long)]
        threshold: Option<f32>,
    },
}

/// Dispatch one `faq` sub-command.
///
/// # Errors
///
/// Returns an error if required configuration is missing or the pipeline
/// fails.
pub(crate) async fn run(config: &AppConfig, command: FaqCommands) -> anyhow::Result<()> {
    match command {
        FaqCommands::Ask {
            question,
            threshold,
        } => run_ask(config, &question, threshold).await,
    }
}

/// Load the corpus, build the index, and resolve one question.
///
/// Prints the outcome as JSON: an answer with its source entry and score,
/// or a handoff with the score that fell short.
///
/// # Errors
///
/// Returns an error if `FAQBOT_EMBED_URL` is unset, the corpus cannot be
/// loaded, or the embedding service fails.
async fn run_ask(
    config: &AppConfig,
    question: &str,
    threshold_override: Option<f32>,
) -> anyhow::Result<()> {
    let embed_url = config
        .embed_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("FAQBOT_EMBED_URL is not set; cannot run `faq ask`"))?;

    let items = faqbot_core::load_faqs(&config.faqs_path)?;
    tracing::info!(
        entries = items.len(),
        path = %config.faqs_path.display(),
        "loaded FAQ corpus"
    );

    let provider = HttpEmbedder::new(embed_url, config.request_timeout_secs)?;
    let index = build_index(&provider, items).await?;

    let threshold = threshold_override.unwrap_or(config.confidence_threshold);
    let engine = FaqEngine::new(index, threshold);
    let notifier = WebhookNotifier::new(
        config.handoff_webhook_url.clone(),
        config.request_timeout_secs,
    )?;

    let resolution = ask(&engine, &provider, &notifier, question).await?;
    println!("{}", serde_json::to_string_pretty(&resolution.outcome)?);

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
