mod faq;
mod sentiment;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::faq::FaqCommands;
use crate::sentiment::SentimentCommands;

#[derive(Debug, Parser)]
#[command(name = "faqbot-cli")]
#[command(about = "FAQ bot command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rule-based sentiment classification and evaluation
    Sentiment {
        #[command(subcommand)]
        command: SentimentCommands,
    },
    /// FAQ retrieval with confidence-gated handoff
    Faq {
        #[command(subcommand)]
        command: FaqCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = faqbot_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Sentiment { command }) => sentiment::run(command),
        Some(Commands::Faq { command }) => faq::run(&config, command).await,
        None => {
            println!("faqbot-cli: pick a subcommand (sentiment, faq); see --help");
            Ok(())
        }
    }
}
