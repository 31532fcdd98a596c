//! CLI entry-point for submitting parameters to the prediction service.

use std::io::IsTerminal;

use anyhow::{bail, Context, Result};
use clap::Args as ClapArgs;
use serde_json::json;
use tracing::{info, instrument};

use crate::{
    client::HttpPredictor,
    config::Settings,
    cycle::{Outcome, PredictionCycle},
    form::Field,
    view::{self, Theme},
};

/// Args for the `predict` sub-command. Omitted fields keep the form defaults.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Age in years.
    #[arg(long, allow_hyphen_values = true)]
    pub age: Option<String>,
    /// Sex (1 = male, 0 = female).
    #[arg(long, allow_hyphen_values = true)]
    pub sex: Option<String>,
    /// Chest pain type (1-4).
    #[arg(long, allow_hyphen_values = true)]
    pub cp: Option<String>,
    /// Resting blood pressure in mm Hg.
    #[arg(long, allow_hyphen_values = true)]
    pub trestbps: Option<String>,
    /// Serum cholesterol in mg/dl.
    #[arg(long, allow_hyphen_values = true)]
    pub chol: Option<String>,
    /// Fasting blood sugar > 120 mg/dl (0/1).
    #[arg(long, allow_hyphen_values = true)]
    pub fbs: Option<String>,
    /// Resting ECG result (0-2).
    #[arg(long, allow_hyphen_values = true)]
    pub restecg: Option<String>,
    /// Maximum heart rate achieved.
    #[arg(long, allow_hyphen_values = true)]
    pub thalach: Option<String>,
    /// Exercise induced angina (0/1).
    #[arg(long, allow_hyphen_values = true)]
    pub exang: Option<String>,
    /// ST depression induced by exercise.
    #[arg(long, allow_hyphen_values = true)]
    pub oldpeak: Option<String>,
    /// Slope of the peak exercise ST segment (1-3).
    #[arg(long, allow_hyphen_values = true)]
    pub slope: Option<String>,
    /// Number of major vessels coloured by fluoroscopy (0-3).
    #[arg(long, allow_hyphen_values = true)]
    pub ca: Option<String>,
    /// Thalassemia (3, 6 or 7).
    #[arg(long, allow_hyphen_values = true)]
    pub thal: Option<String>,
    /// Print the result as JSON instead of the rendered view.
    #[arg(long)]
    pub json: bool,
    /// Flip the configured light/dark preference.
    #[arg(long)]
    pub toggle_theme: bool,
    /// Disable ANSI colours.
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Field values given on the command line, in canonical order.
    pub fn values(&self) -> Vec<(Field, &str)> {
        let given = [
            (Field::Age, &self.age),
            (Field::Sex, &self.sex),
            (Field::Cp, &self.cp),
            (Field::Trestbps, &self.trestbps),
            (Field::Chol, &self.chol),
            (Field::Fbs, &self.fbs),
            (Field::Restecg, &self.restecg),
            (Field::Thalach, &self.thalach),
            (Field::Exang, &self.exang),
            (Field::Oldpeak, &self.oldpeak),
            (Field::Slope, &self.slope),
            (Field::Ca, &self.ca),
            (Field::Thal, &self.thal),
        ];
        given
            .into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
            .collect()
    }
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let mut theme = Theme::init(settings.dark_mode);
    if args.toggle_theme {
        theme.toggle();
    }
    let color = !args.no_color && std::io::stdout().is_terminal();

    let predictor = HttpPredictor::from_settings(&settings).context("building http client")?;
    info!(endpoint = %predictor.endpoint(), "using prediction endpoint");

    let mut cycle = PredictionCycle::new();
    for (field, value) in args.values() {
        cycle.update_field(field, value);
    }

    let outcome = cycle.submit(&predictor).await;
    if args.json {
        let body = match outcome {
            Outcome::Ready(result) => serde_json::to_value(result)?,
            Outcome::Failed { message } => json!({ "error": message }),
            Outcome::AwaitingInput => json!(null),
        };
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", view::render_outcome(outcome, &theme, color));
    }

    if let Outcome::Failed { message } = outcome {
        bail!("prediction failed: {message}");
    }
    Ok(())
}
