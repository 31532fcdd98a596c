//! Command-line interface wiring for heart-predict.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod fields;
pub mod health;
pub mod predict;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Heart-disease risk prediction client", long_about = None)]
pub struct Cli {
    /// Override the prediction service base URL.
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        let settings = settings.with_base_url(self.api_url);
        match self.command {
            Commands::Predict(args) => predict::run(args, settings).await,
            Commands::Fields(args) => fields::run(args, settings).await,
            Commands::Health => health::run(settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Submit clinical parameters and show the risk assessment.
    Predict(predict::Args),
    /// List the clinical parameters and their value domains.
    Fields(fields::Args),
    /// Check that the prediction service is reachable.
    Health,
}
