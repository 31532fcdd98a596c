//! Three-state risk indicator derived from the latest risk level.

use std::time::Duration;

use crossterm::style::Color;

use crate::{client::RiskLevel, view::Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskIndicator {
    High,
    Low,
    Neutral,
}

impl From<Option<RiskLevel>> for RiskIndicator {
    fn from(level: Option<RiskLevel>) -> Self {
        match level {
            Some(RiskLevel::High) => RiskIndicator::High,
            Some(RiskLevel::Low) => RiskIndicator::Low,
            None => RiskIndicator::Neutral,
        }
    }
}

impl RiskIndicator {
    pub fn accent(self, theme: &Theme) -> Color {
        match self {
            RiskIndicator::High => Color::Red,
            RiskIndicator::Low => Color::Green,
            RiskIndicator::Neutral => theme.muted(),
        }
    }

    /// Heartbeat period; high risk beats fast.
    pub fn pulse(self) -> Duration {
        match self {
            RiskIndicator::High => Duration::from_millis(350),
            RiskIndicator::Low | RiskIndicator::Neutral => Duration::from_millis(1200),
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            RiskIndicator::High => "High Risk Detected",
            RiskIndicator::Low => "Low Risk Detected",
            RiskIndicator::Neutral => {
                "Awaiting clinical parameters to generate real-time health assessment."
            }
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            RiskIndicator::High => "♥!",
            RiskIndicator::Low => "♥",
            RiskIndicator::Neutral => "♡",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_states_are_distinct() {
        let theme = Theme::init(true);
        let states = [
            RiskIndicator::from(Some(RiskLevel::High)),
            RiskIndicator::from(Some(RiskLevel::Low)),
            RiskIndicator::from(None),
        ];
        assert_eq!(
            states,
            [RiskIndicator::High, RiskIndicator::Low, RiskIndicator::Neutral]
        );
        for (i, a) in states.iter().enumerate() {
            for b in &states[i + 1..] {
                assert_ne!(a.accent(&theme), b.accent(&theme));
                assert_ne!(a.headline(), b.headline());
            }
        }
        assert!(RiskIndicator::High.pulse() < RiskIndicator::Low.pulse());
    }
}
