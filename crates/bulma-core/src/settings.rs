//! Library-wide defaults loaded from JSON.
//!
//! # Design
//! - Every section derives `serde` with `#[serde(default)]`, so a document
//!   only lists what it overrides.
//! - [`BulmaSettings::from_json`] parses then validates; a settings value
//!   that exists has passed range checks.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::datetime::DateTimeSteps;
use crate::duration::DurationSteps;
use crate::error::SettingsError;
use crate::theme::ThemeSettings;

static DEFAULTS: Lazy<BulmaSettings> = Lazy::new(BulmaSettings::default);

/// Defaults shared by every widget.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BulmaSettings {
    /// Theme stylesheets and storage.
    pub theme: ThemeSettings,
    /// Duration popout steps.
    pub duration: DurationSteps,
    /// Date/time popout steps and calendar options.
    pub datetime: DateTimeSteps,
    /// Host logging.
    pub logging: LoggingSettings,
}

/// Log level and output format for native hosts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// `"json"` or `"pretty"`; inferred from the build when absent.
    pub format: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: None,
        }
    }
}

impl BulmaSettings {
    /// Built-in defaults.
    #[must_use]
    pub fn defaults() -> &'static Self {
        &DEFAULTS
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] for malformed JSON or unknown keys,
    /// and the validation error otherwise.
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate an already parsed value.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] when `value` does not match the schema.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_value(value)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Range and blank checks across every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`SettingsError`] found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.theme.validate()?;
        self.duration.validate()?;
        self.datetime.validate()?;
        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::Blank {
                field: "logging.level",
            });
        }
        Ok(())
    }

    /// Serialise for storage or display.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use serde_json::json;

    use super::*;

    #[test]
    fn partial_documents_keep_defaults() {
        let settings = BulmaSettings::from_value(json!({
            "duration": { "minutes": 10 },
            "datetime": { "start_of_week": "Mon" }
        }))
        .expect("valid settings");
        assert_eq!(settings.duration.minutes, 10);
        assert_eq!(settings.duration.seconds, 15);
        assert_eq!(settings.datetime.start_of_week, Weekday::Mon);
        assert_eq!(settings.theme, ThemeSettings::default());
        assert_eq!(BulmaSettings::defaults().logging.level, "info");
    }

    #[test]
    fn out_of_range_steps_are_rejected() {
        let err = BulmaSettings::from_value(json!({ "datetime": { "year_range": 0 } }))
            .expect_err("zero year range");
        assert!(matches!(
            err,
            SettingsError::OutOfRange {
                field: "datetime.year_range",
                min: 1,
                max: 100,
                ..
            }
        ));
    }

    #[test]
    fn unknown_keys_fail_to_parse() {
        let err = BulmaSettings::from_json(r#"{ "colour": "red" }"#).expect_err("unknown key");
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn json_round_trip_preserves_values() {
        let mut settings = BulmaSettings::default();
        settings.logging.format = Some("json".into());
        let text = settings.to_json().expect("serialise");
        assert_eq!(BulmaSettings::from_json(&text).expect("parse"), settings);
    }
}
