//! pubpolicy - Publishing Policy command-line builder
//!
//! Declare your editorial standards and see what malpublishing means for you:
//! - List sector templates and the options of every commitment
//! - Preview the malpublishing definitions derived from an answers file
//! - Walk the four step builder and save the policy

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod answers;
mod commands;
mod config;
mod error;
mod gateway;
mod output;

use config::{BuilderConfig, LoggingConfig};

/// pubpolicy CLI application
#[derive(Parser)]
#[command(name = "pubpolicy")]
#[command(about = "Publishing Policy - declare your standards, define malpublishing", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path (TOML, YAML or JSON)
    #[arg(short, long, env = "PUBPOLICY_CONFIG")]
    config: Option<String>,

    /// Output format (table, json, yaml); defaults to the configured format
    #[arg(short, long, global = true)]
    output: Option<output::OutputFormat>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// List sector templates grouped by category
    Sectors,

    /// List every commitment option
    Options,

    /// Show the malpublishing definitions an answers file produces
    Derive {
        /// Answers file (TOML, YAML or JSON)
        #[arg(short, long)]
        answers: PathBuf,
    },

    /// Build and save a policy
    Build {
        /// Answers file (TOML, YAML or JSON); seeds the prompts in interactive mode
        #[arg(short, long, required_unless_present = "interactive")]
        answers: Option<PathBuf>,

        /// Prompt for each field
        #[arg(short, long)]
        interactive: bool,
    },
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = BuilderConfig::load(cli.config.as_deref())?;
    init_tracing(&config.logging, cli.verbose);

    let format = cli.output.unwrap_or(config.output);
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Sectors => {
            let gateway = gateway::connect(&config.gateway)?;
            commands::sectors::execute(gateway.as_ref(), format).await?;
        }
        Commands::Options => commands::options::execute(format)?,
        Commands::Derive { answers } => commands::derive::execute(&answers, format)?,
        Commands::Build {
            answers,
            interactive,
        } => {
            let gateway = gateway::connect(&config.gateway)?;
            commands::build::execute(gateway, answers.as_deref(), interactive, format).await?;
        }
    }

    Ok(())
}
