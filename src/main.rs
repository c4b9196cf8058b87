// src/main.rs

//! moodring: Post Sentiment Tracker CLI
//!
//! Fetches a social-media post by URL, scores its text through an external
//! sentiment analyzer, stores the raw result, and lists past analyses with
//! a derived happiness label.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use moodring::config::{load_analyzer_credentials, load_source_credentials};
use moodring::error::Result;
use moodring::models::Config;
use moodring::pipeline::{run_analyze, run_list, run_validate};
use moodring::services::{PostSource, SentimentAnalyzer};
use moodring::storage::LocalStorage;
use moodring::utils::log;

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(
    name = "moodring",
    version,
    about = "Post sentiment tracker"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Suppress listing output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

/// CLI Commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a post, analyze its sentiment, and store the result
    Analyze {
        /// Post URL (https://<host>/<user>/status/<id>)
        url: String,
    },
    /// List previously analyzed posts with their derived labels
    List {
        /// Maximum number of posts to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Validate the configuration file
    Validate,
}

/// Main entry point
#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config);
    log::init(&config.logging.level);

    if cli.quiet {
        config.output.console_enabled = false;
    }

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Command::Analyze { url } => {
            config.validate()?;

            let source = PostSource::new(
                &config.http,
                config.source.clone(),
                load_source_credentials(&config)?,
            )?;
            let analyzer = SentimentAnalyzer::new(
                &config.http,
                config.analyzer.clone(),
                load_analyzer_credentials(&config)?,
            )?;
            let storage = LocalStorage::new(&config.storage.root_dir);

            run_analyze(&source, &analyzer, &storage, &url).await?;
        }
        Command::List { limit } => {
            let storage = LocalStorage::new(&config.storage.root_dir);
            let limit = limit.unwrap_or(config.storage.recent_limit);
            run_list(&config, &storage, limit).await?;
        }
        Command::Validate => run_validate(&cli.config)?,
    }

    Ok(())
}
