//! Forex News Signal Bot
//!
//! Fetches forex headlines, scores them for keyword sentiment, and prints a
//! trade signal per watched pair.

use clap::{Parser, Subcommand};
use forex_signal_bot::{agent::TradeAgent, config::Config, feed::RssFeedReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "forex-signal-bot")]
#[command(about = "News sentiment trade signals for forex pairs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce a signal for every watched pair
    Run,
    /// Produce a signal for one pair and print it as JSON
    Analyze {
        /// Trading pair, e.g. EUR/USD
        pair: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Run => run_bot(config).await,
        Commands::Analyze { pair } => analyze_pair(config, &pair).await,
    }
}

async fn run_bot(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting forex signal bot");

    let reader = RssFeedReader::new(&config.feed)?;
    let agent = TradeAgent::new(reader);

    println!("\n📊 Signals for {} pairs:\n", config.watch.pairs.len());
    println!(
        "{:<10} {:<7} {:>10} {:>7}  {}",
        "Pair", "Signal", "Confidence", "Time", "Reason"
    );
    println!("{}", "-".repeat(72));

    for pair in &config.watch.pairs {
        let decision = agent.run(pair).await;

        let note = decision
            .reason
            .as_deref()
            .or(decision.error.as_deref())
            .unwrap_or("");
        println!(
            "{:<10} {:<7} {:>9.0}% {:>7}  {}",
            decision.pair,
            decision.signal.as_str().to_uppercase(),
            decision.confidence * 100.0,
            decision.action_time,
            note
        );
    }

    Ok(())
}

async fn analyze_pair(config: Config, pair: &str) -> anyhow::Result<()> {
    let reader = RssFeedReader::new(&config.feed)?;
    let agent = TradeAgent::new(reader);

    let decision = agent.run(pair).await;
    println!("{}", serde_json::to_string_pretty(&decision)?);

    Ok(())
}
