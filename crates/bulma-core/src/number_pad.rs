//! On-screen number pad state.

use std::str::FromStr;

use crate::attributes::Attributes;
use crate::classes::{input_class, ClassList};
use crate::error::FieldError;
use crate::flags::InputStatus;

/// Keys the pad lets through to the browser.
pub const PASS_THROUGH_KEYS: [&str; 4] = ["Escape", "Tab", "Enter", "NumpadEnter"];

/// Icon shown next to the display.
pub const NUMBER_PAD_ICON: &str = "numbers";

/// A key press understood by the pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PadKey {
    /// `0` to `9`.
    Digit(u8),
    /// Decimal separator.
    Decimal,
    /// Delete the last character.
    Backspace,
}

impl PadKey {
    /// Map a `KeyboardEvent.code`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Backspace" => Some(Self::Backspace),
            "Period" | "NumpadDecimal" => Some(Self::Decimal),
            _ => code
                .strip_prefix("Digit")
                .or_else(|| code.strip_prefix("Numpad"))
                .and_then(|digit| digit.parse::<u8>().ok())
                .filter(|digit| *digit <= 9)
                .map(Self::Digit),
        }
    }
}

/// Visual options of the pad.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberPadStyle {
    /// Show the read-only display above the keys.
    pub display_input: bool,
    /// Rounded buttons.
    pub rounded: bool,
    /// Bordered buttons.
    pub bordered: bool,
    /// Colour the display after each parse.
    pub use_automatic_status_colors: bool,
    /// Caption of the backspace key.
    pub backspace_text: String,
    /// Caption of the reset key.
    pub reset_text: String,
}

impl Default for NumberPadStyle {
    fn default() -> Self {
        Self {
            display_input: true,
            rounded: true,
            bordered: true,
            use_automatic_status_colors: true,
            backspace_text: "⌫".to_string(),
            reset_text: "C".to_string(),
        }
    }
}

/// Entry buffer of a number pad bound to a numeric field.
///
/// The pad edits text and hands it to [`NumberPad::parse`], so any
/// `FromStr` number type works; `decimals` enables the separator key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberPad {
    field: String,
    nullable: bool,
    decimals: bool,
    text: String,
    status: InputStatus,
    error: Option<FieldError>,
    /// Visual options.
    pub style: NumberPadStyle,
}

impl NumberPad {
    /// Create the buffer, seeded with the formatted initial value.
    #[must_use]
    pub fn new(field: impl Into<String>, nullable: bool, decimals: bool, initial: Option<String>) -> Self {
        let text = initial.unwrap_or_else(|| if nullable { String::new() } else { "0".to_string() });
        Self {
            field: field.into(),
            nullable,
            decimals,
            text,
            status: InputStatus::empty(),
            error: None,
            style: NumberPadStyle::default(),
        }
    }

    /// Text on the display.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Status colours.
    #[must_use]
    pub const fn status(&self) -> InputStatus {
        self.status
    }

    /// Last conversion failure.
    #[must_use]
    pub const fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// Parse the buffer into the bound type, updating status and error.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidNumber`] when the text does not parse.
    pub fn parse<T: FromStr>(&mut self) -> Result<Option<T>, FieldError> {
        let outcome = if self.text.is_empty() && self.nullable {
            Ok(None)
        } else {
            self.text.parse::<T>().map(Some).map_err(|_| FieldError::InvalidNumber {
                field: self.field.clone(),
            })
        };
        if self.style.use_automatic_status_colors {
            self.status = self.status.with_outcome(outcome.is_ok());
        }
        self.error = outcome.as_ref().err().cloned();
        outcome
    }

    /// Resync with an externally supplied value.
    ///
    /// The buffer is kept when it already parses to `value`, so a trailing
    /// separator or zero survives a round trip.
    pub fn sync<T>(&mut self, value: Option<&T>)
    where
        T: FromStr + PartialEq + ToString,
    {
        let current = if self.text.is_empty() {
            None
        } else {
            self.text.parse::<T>().ok()
        };
        if current.as_ref() != value {
            self.text = value.map(ToString::to_string).unwrap_or_default();
        }
    }

    /// Append a digit; returns whether the value should be re-parsed.
    pub fn digit(&mut self, digit: u8, disabled: bool) -> bool {
        if disabled || digit > 9 {
            return false;
        }
        self.text.push(char::from(b'0' + digit));
        let bytes = self.text.as_bytes();
        if bytes.len() > 1 && bytes[0] == b'0' && bytes[1] != b'.' {
            self.text.remove(0);
        }
        true
    }

    /// Append the decimal separator; never re-parses on its own.
    pub fn decimal(&mut self, disabled: bool) {
        if disabled || !self.decimals || self.text.contains('.') {
            return;
        }
        if self.text.is_empty() {
            self.text.push('0');
        }
        self.text.push('.');
    }

    /// Drop the last character; returns whether the value should be re-parsed.
    pub fn backspace(&mut self, disabled: bool) -> bool {
        if disabled || self.text.is_empty() {
            return false;
        }
        if self.text.chars().count() == 1 {
            self.text = if self.nullable { String::new() } else { "0".to_string() };
        } else {
            self.text.pop();
        }
        true
    }

    /// Back to empty (nullable) or `0`; returns whether the value should be re-parsed.
    pub fn reset(&mut self, disabled: bool) -> bool {
        if disabled {
            return false;
        }
        self.text = if self.nullable { String::new() } else { "0".to_string() };
        true
    }

    /// Apply a key; returns whether the value should be re-parsed.
    pub fn press(&mut self, key: PadKey, disabled: bool) -> bool {
        match key {
            PadKey::Digit(digit) => self.digit(digit, disabled),
            PadKey::Decimal => {
                self.decimal(disabled);
                false
            }
            PadKey::Backspace => self.backspace(disabled),
        }
    }

    /// `keydown` on the display; returns `(prevent_default, reparse)`.
    ///
    /// Horizontal arrows are swallowed so the caret never moves.
    pub fn on_input_key_down(&mut self, code: &str, disabled: bool) -> (bool, bool) {
        if matches!(code, "ArrowLeft" | "ArrowRight") {
            return (true, false);
        }
        let prevent = !PASS_THROUGH_KEYS.contains(&code);
        let reparse = PadKey::from_code(code).is_some_and(|key| self.press(key, disabled));
        (prevent, reparse)
    }

    /// `keydown` on a pad button; returns `(prevent_default, reparse)`.
    pub fn on_button_key_down(&mut self, code: &str, disabled: bool) -> (bool, bool) {
        if disabled {
            return (false, false);
        }
        let prevent = !PASS_THROUGH_KEYS.contains(&code);
        let reparse = PadKey::from_code(code).is_some_and(|key| self.press(key, false));
        (prevent, reparse)
    }

    /// `true` when the separator key is shown.
    #[must_use]
    pub const fn allows_decimals(&self) -> bool {
        self.decimals
    }

    /// Class of the display.
    #[must_use]
    pub fn display_class(&self, attrs: &Attributes) -> String {
        let base = input_class(self.status, attrs.class("class"));
        ClassList::new(base).with("mb-3").build()
    }

    /// Class of one pad button.
    #[must_use]
    pub fn button_class(&self, attrs: &Attributes) -> String {
        ClassList::new("button is-fullwidth mb-3")
            .with_if(attrs.is_disabled(), "is-disabled")
            .with_if(self.style.rounded, "is-rounded")
            .with_if(self.style.bordered, "is-bordered")
            .with(attrs.class("button-class"))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_trim_leading_zero() {
        let mut pad = NumberPad::new("Amount", false, true, None);
        assert_eq!(pad.text(), "0");
        assert!(pad.digit(7, false));
        assert_eq!(pad.text(), "7");
        pad.digit(0, false);
        assert_eq!(pad.parse::<i32>(), Ok(Some(70)));
        assert!(!pad.digit(3, true));
    }

    #[test]
    fn decimal_only_once_and_only_for_floats() {
        let mut pad = NumberPad::new("Amount", true, true, None);
        pad.decimal(false);
        assert_eq!(pad.text(), "0.");
        pad.decimal(false);
        pad.digit(5, false);
        assert_eq!(pad.text(), "0.5");
        assert_eq!(pad.parse::<f64>(), Ok(Some(0.5)));

        let mut whole = NumberPad::new("Count", true, false, None);
        whole.decimal(false);
        assert_eq!(whole.text(), "");
    }

    #[test]
    fn backspace_and_reset_respect_nullability() {
        let mut nullable = NumberPad::new("Amount", true, false, Some("4".to_string()));
        assert!(nullable.backspace(false));
        assert_eq!(nullable.text(), "");
        assert!(!nullable.backspace(false));
        assert_eq!(nullable.parse::<i32>(), Ok(None));

        let mut required = NumberPad::new("Amount", false, false, Some("42".to_string()));
        required.backspace(false);
        required.backspace(false);
        assert_eq!(required.text(), "0");
        required.digit(9, false);
        required.reset(false);
        assert_eq!(required.text(), "0");
    }

    #[test]
    fn key_codes_map_to_pad_keys() {
        assert_eq!(PadKey::from_code("Digit4"), Some(PadKey::Digit(4)));
        assert_eq!(PadKey::from_code("Numpad9"), Some(PadKey::Digit(9)));
        assert_eq!(PadKey::from_code("NumpadDecimal"), Some(PadKey::Decimal));
        assert_eq!(PadKey::from_code("NumpadEnter"), None);

        let mut pad = NumberPad::new("Amount", true, false, None);
        assert_eq!(pad.on_input_key_down("ArrowLeft", false), (true, false));
        assert_eq!(pad.on_input_key_down("Digit3", false), (true, true));
        assert_eq!(pad.on_input_key_down("Tab", false), (false, false));
        assert_eq!(pad.on_button_key_down("Digit1", true), (false, false));
        assert_eq!(pad.text(), "3");
    }

    #[test]
    fn parse_failure_sets_danger_status() {
        let mut pad = NumberPad::new("Amount", false, true, Some("1.5".to_string()));
        assert!(matches!(
            pad.parse::<i32>(),
            Err(FieldError::InvalidNumber { .. })
        ));
        assert!(pad.status().contains(InputStatus::BACKGROUND_DANGER));
        assert_eq!(
            pad.display_class(&Attributes::new()),
            "input is-danger mb-3"
        );
    }

    #[test]
    fn sync_keeps_equivalent_text() {
        let mut pad = NumberPad::new("Amount", true, true, Some("2.".to_string()));
        pad.sync(Some(&2.0_f64));
        assert_eq!(pad.text(), "2.");
        pad.sync(Some(&3.5_f64));
        assert_eq!(pad.text(), "3.5");
        pad.sync::<f64>(None);
        assert_eq!(pad.text(), "");
    }
}
