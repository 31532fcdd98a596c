//! CLI entry-point for checking the prediction service.

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::{client::HttpPredictor, config::Settings};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let predictor = HttpPredictor::from_settings(&settings).context("building http client")?;
    let status = predictor
        .status()
        .await
        .with_context(|| format!("reaching {}", predictor.base_url()))?;
    info!(message = %status.message, "service reachable");
    println!("{}", status.message);
    Ok(())
}
