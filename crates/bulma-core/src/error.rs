//! Error types shared by the component logic.

use thiserror::Error;

/// Conversion failure raised while turning user text into a bound value.
///
/// The `Display` output is the message shown under the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Duration text contained characters outside `0-9 - . :`.
    #[error("The {field} field must contain only digits, '-', '.', and ':'.")]
    InvalidDurationCharacters {
        /// Display name of the field.
        field: String,
    },
    /// A negative duration was entered without `ALLOW_NEGATIVE`.
    #[error("The {field} field does not have the AllowNegative option enabled.")]
    NegativeNotAllowed {
        /// Display name of the field.
        field: String,
    },
    /// Separators appeared more often than the format permits.
    #[error(
        "The '-' and '.' characters may only appear once in the {field} field, the ':' character may appear twice."
    )]
    TooManyDurationSeparators {
        /// Display name of the field.
        field: String,
    },
    /// A minus sign appeared somewhere other than the first character.
    #[error("The negative sign may only appear at the start of the {field} field.")]
    MisplacedNegativeSign {
        /// Display name of the field.
        field: String,
    },
    /// Decimal input is ambiguous while minutes are displayed as seconds.
    #[error("Cannot enter decimal values when DisplayMinutesAsSeconds is active in the {field} field.")]
    DecimalNotAllowed {
        /// Display name of the field.
        field: String,
    },
    /// Duration text did not follow the expected shape.
    #[error(
        "The {field} could not be parsed as a time. Example: 1.03:15:43 = 1 day, 3 hours, 15 minutes, 43 seconds"
    )]
    InvalidDuration {
        /// Display name of the field.
        field: String,
    },
    /// Date/time text used too many separators.
    #[error("The '-', '/' and ':' characters may only appear twice in the {field} field.")]
    TooManyDateSeparators {
        /// Display name of the field.
        field: String,
    },
    /// Date/time text could not be parsed.
    #[error("The {field} could not be parsed as a date or time. Example: 2024-02-08 03:15:43")]
    InvalidDateTime {
        /// Display name of the field.
        field: String,
    },
    /// No autocomplete or select item matched the text.
    #[error("No match could be found in the {field} field.")]
    NoMatch {
        /// Display name of the field.
        field: String,
    },
    /// Text could not be read as a single character.
    #[error("The {field} field must be a char.")]
    InvalidCharacter {
        /// Display name of the field.
        field: String,
    },
    /// Text could not be read as a number.
    #[error("The {field} field must be a number.")]
    InvalidNumber {
        /// Display name of the field.
        field: String,
    },
    /// Text did not name a known flag or enum member.
    #[error("The {field} field could not be parsed.")]
    UnknownOption {
        /// Display name of the field.
        field: String,
    },
}

impl FieldError {
    /// Display name of the field the error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidDurationCharacters { field }
            | Self::NegativeNotAllowed { field }
            | Self::TooManyDurationSeparators { field }
            | Self::MisplacedNegativeSign { field }
            | Self::DecimalNotAllowed { field }
            | Self::InvalidDuration { field }
            | Self::TooManyDateSeparators { field }
            | Self::InvalidDateTime { field }
            | Self::NoMatch { field }
            | Self::InvalidCharacter { field }
            | Self::InvalidNumber { field }
            | Self::UnknownOption { field } => field,
        }
    }
}

/// Failures raised by parent/child registries (tabs, steps, breadcrumbs).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A named child registered without a name.
    #[error("{kind} must have a name assigned")]
    MissingName {
        /// Registry kind (e.g. `"Tabs"`).
        kind: &'static str,
    },
    /// A named child reused a name already present.
    #[error("{kind} must have a unique name, duplicate is {name}")]
    DuplicateName {
        /// Registry kind.
        kind: &'static str,
        /// The duplicated name.
        name: String,
    },
    /// Removal targeted a child that is not registered.
    #[error("could not find {kind} entry {key} to remove")]
    NotFound {
        /// Registry kind.
        kind: &'static str,
        /// Key that was looked up.
        key: String,
    },
}

/// Failures raised while loading or validating [`crate::settings::BulmaSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A numeric setting fell outside its accepted range.
    #[error("setting '{field}' must be between {min} and {max}")]
    OutOfRange {
        /// Setting name.
        field: &'static str,
        /// Offending value.
        value: i64,
        /// Inclusive minimum.
        min: i64,
        /// Inclusive maximum.
        max: i64,
    },
    /// A string setting was blank.
    #[error("setting '{field}' must not be blank")]
    Blank {
        /// Setting name.
        field: &'static str,
    },
    /// The settings document was not valid JSON for the schema.
    #[error("settings document is invalid")]
    Parse {
        /// Source deserialisation error.
        #[from]
        source: serde_json::Error,
    },
}

/// Top-level error for callers that do not care which subsystem failed.
#[derive(Debug, Error)]
pub enum BulmaError {
    /// Value conversion failed.
    #[error(transparent)]
    Field(#[from] FieldError),
    /// Registry bookkeeping failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// Settings were invalid.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Convenience alias for library results.
pub type BulmaResult<T> = Result<T, BulmaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_render_user_messages() {
        let err = FieldError::NoMatch {
            field: "Owner".into(),
        };
        assert_eq!(err.to_string(), "No match could be found in the Owner field.");
        assert_eq!(err.field(), "Owner");
    }

    #[test]
    fn registry_errors_name_the_kind() {
        let err = RegistryError::DuplicateName {
            kind: "Tabs",
            name: "General".into(),
        };
        assert_eq!(
            err.to_string(),
            "Tabs must have a unique name, duplicate is General"
        );
    }

    #[test]
    fn bulma_error_wraps_sources_transparently() {
        let err: BulmaError = RegistryError::MissingName { kind: "Steps" }.into();
        assert_eq!(err.to_string(), "Steps must have a name assigned");
    }
}
