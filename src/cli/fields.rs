//! CLI entry-point listing the clinical parameters.

use std::io::IsTerminal;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    config::Settings,
    form::PatientParameters,
    view::{self, Theme},
};

/// Args for the `fields` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Disable ANSI colours.
    #[arg(long)]
    pub no_color: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let theme = Theme::init(settings.dark_mode);
    let color = !args.no_color && std::io::stdout().is_terminal();
    print!(
        "{}",
        view::render_fields(&PatientParameters::default(), &theme, color)
    );
    Ok(())
}
