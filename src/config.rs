use chrono::{Datelike, Local};
use serde::Deserialize;
use std::env;

use crate::error::Result;

/// Environment variable holding a JSON [`CalendarConfig`] override.
pub const CONFIG_ENV: &str = "FVRC_CONFIG";

/// Initial coverage window of a reservation calendar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Years generated before the base year.
    #[serde(default = "default_years_back")]
    pub years_back: u32,

    /// Years generated after the base year.
    #[serde(default = "default_years_forward")]
    pub years_forward: u32,

    /// Year the window is centred on, the local current year if unset.
    #[serde(default)]
    pub base_year: Option<i32>,
}

fn default_years_back() -> u32 {
    5
}

fn default_years_forward() -> u32 {
    10
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            years_back: default_years_back(),
            years_forward: default_years_forward(),
            base_year: None,
        }
    }
}

impl CalendarConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the config from [`CONFIG_ENV`], falling back to the defaults when unset.
    pub fn from_env() -> Result<Self> {
        match env::var(CONFIG_ENV) {
            Ok(json) => Self::from_json(&json),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Inclusive `(start, end)` years of the initial window.
    pub fn window(&self) -> (i32, i32) {
        let base = self.base_year.unwrap_or_else(|| Local::now().year());
        (
            base.saturating_sub_unsigned(self.years_back),
            base.saturating_add_unsigned(self.years_forward),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalendarError;

    #[test]
    fn test_default_window() {
        let config = CalendarConfig::default();
        assert_eq!(config.years_back, 5);
        assert_eq!(config.years_forward, 10);
        let year = Local::now().year();
        assert_eq!(config.window(), (year - 5, year + 10));
    }

    #[test]
    fn test_pinned_base_year() {
        let config = CalendarConfig {
            base_year: Some(2024),
            ..CalendarConfig::default()
        };
        assert_eq!(config.window(), (2019, 2034));
    }

    #[test]
    fn test_from_json_partial() {
        let config = CalendarConfig::from_json(r#"{"years_back": 1, "base_year": 2030}"#).unwrap();
        assert_eq!(
            config,
            CalendarConfig {
                years_back: 1,
                years_forward: 10,
                base_year: Some(2030),
            }
        );
        assert_eq!(config.window(), (2029, 2040));
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = CalendarConfig::from_json("{}").unwrap();
        assert_eq!(config, CalendarConfig::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let result = CalendarConfig::from_json(r#"{"weeks": 20}"#);
        assert!(matches!(result, Err(CalendarError::Config(_))));
    }

    #[test]
    fn test_from_json_rejects_negative_window() {
        let result = CalendarConfig::from_json(r#"{"years_back": -1}"#);
        assert!(matches!(result, Err(CalendarError::Config(_))));
    }
}
