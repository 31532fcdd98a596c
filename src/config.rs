//! Runtime configuration utilities for heart-predict.

use std::env;

use anyhow::bail;

/// Host used when `PREDICT_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://heart-disease-predictor-alqg.onrender.com";

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the prediction service; `/predict` is appended.
    pub api_base_url: String,
    /// Initial theme preference.
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            dark_mode: true,
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let api_base_url = env::var("PREDICT_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let dark_mode = match env::var("PREDICT_THEME") {
            Ok(theme) => parse_theme(&theme)?,
            Err(_) => true,
        };

        Ok(Self {
            api_base_url,
            dark_mode,
        })
    }

    /// Replace the base URL, e.g. from a command-line override.
    pub fn with_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api_base_url = url;
        }
        self
    }
}

fn parse_theme(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "dark" | "" => Ok(true),
        "light" => Ok(false),
        other => bail!("PREDICT_THEME must be 'dark' or 'light', got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_values() {
        assert!(parse_theme("Dark").unwrap());
        assert!(!parse_theme(" light ").unwrap());
        assert!(parse_theme("sepia").is_err());
    }

    #[test]
    fn cli_override_wins() {
        let settings = Settings::default().with_base_url(Some("http://localhost:8000".into()));
        assert_eq!(settings.api_base_url, "http://localhost:8000");
        let settings = Settings::default().with_base_url(None);
        assert_eq!(settings.api_base_url, DEFAULT_API_URL);
    }
}
