//! Terminal presentation of the cycle state.

pub mod indicator;
pub mod theme;

use crossterm::style::{style, Color, Stylize};

pub use indicator::RiskIndicator;
pub use theme::Theme;

use crate::{cycle::Outcome, form::PatientParameters};

/// Render the result area. `color` toggles ANSI styling.
pub fn render_outcome(outcome: &Outcome, theme: &Theme, color: bool) -> String {
    let indicator = RiskIndicator::from(outcome.result().map(|r| r.risk_level));
    let accent = indicator.accent(theme);
    match outcome {
        Outcome::Ready(result) => format!(
            "{} {}\n  probability: {}%\n  pulse: {} ms\n",
            paint(indicator.glyph(), accent, color),
            paint(indicator.headline(), accent, color),
            paint(&result.percent().to_string(), theme.text(), color),
            paint(&indicator.pulse().as_millis().to_string(), theme.muted(), color)
        ),
        Outcome::AwaitingInput => format!(
            "{} {}\n",
            paint(indicator.glyph(), accent, color),
            paint(indicator.headline(), theme.muted(), color)
        ),
        Outcome::Failed { message } => format!(
            "{} {}\n  {}\n",
            paint("✗", Color::Yellow, color),
            paint("Assessment failed", Color::Yellow, color),
            paint(message, theme.muted(), color)
        ),
    }
}

/// Render the field catalogue alongside the current values.
pub fn render_fields(parameters: &PatientParameters, theme: &Theme, color: bool) -> String {
    parameters
        .iter()
        .map(|(field, value)| {
            let shown = if value.is_empty() { "-" } else { value };
            format!(
                "{} {:<24} {:<6} {}\n",
                paint_padded(field.key(), 9, theme.text(), color),
                field.label(),
                shown,
                paint(&field.domain().to_string(), theme.muted(), color)
            )
        })
        .collect()
}

fn paint(text: &str, fg: Color, enabled: bool) -> String {
    if enabled {
        style(text).with(fg).to_string()
    } else {
        text.to_string()
    }
}

fn paint_padded(text: &str, width: usize, fg: Color, enabled: bool) -> String {
    paint(&format!("{text:<width$}"), fg, enabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{PredictionResult, RiskLevel};

    #[test]
    fn outcomes_render_distinctly() {
        let theme = Theme::init(true);
        let idle = render_outcome(&Outcome::AwaitingInput, &theme, false);
        let failed = render_outcome(
            &Outcome::Failed {
                message: "transport failure: connection refused".into(),
            },
            &theme,
            false,
        );
        let ready = render_outcome(
            &Outcome::Ready(PredictionResult {
                risk_level: RiskLevel::High,
                probability: 0.91,
                prediction: Some(1),
            }),
            &theme,
            false,
        );
        assert!(idle.contains("Awaiting clinical parameters"));
        assert!(failed.contains("Assessment failed"));
        assert!(failed.contains("connection refused"));
        assert!(ready.contains("High Risk Detected"));
        assert!(ready.contains("91%"));
        assert_ne!(idle, failed);
    }

    #[test]
    fn plain_rendering_has_no_escapes() {
        let theme = Theme::init(false);
        let text = render_fields(&PatientParameters::default(), &theme, false);
        assert!(!text.contains('\u{1b}'));
        assert_eq!(text.lines().count(), 13);
        assert!(text.starts_with("age"));
    }
}
