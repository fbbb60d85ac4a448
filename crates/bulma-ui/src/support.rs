//! Glue between component props and the `bulma-core` helpers.
//!
//! # Design
//! - Components take a `class` prop plus named part classes; this module
//!   folds them into the [`Attributes`] map the core helpers read.
//! - Layout tables (number pad rows, weekday captions) live here so they
//!   can be tested without a browser.

use bulma_core::Attributes;
use bulma_core::number_pad::PadKey;
use chrono::Weekday;

/// Class of every Material icon element.
pub const MATERIAL_ICONS: &str = "material-icons";

/// Attributes carrying the main element class and the disabled marker.
#[must_use]
pub fn attributes(class: &str, disabled: bool) -> Attributes {
    let mut attrs = Attributes::new();
    if !class.trim().is_empty() {
        attrs.insert("class", class);
    }
    if disabled {
        attrs.insert("disabled", "disabled");
    }
    attrs
}

/// Add a sub-element class (`icon-class`, `header-class`, ...) when it is not blank.
#[must_use]
pub fn with_part(mut attrs: Attributes, key: &str, class: &str) -> Attributes {
    if !class.trim().is_empty() {
        attrs.insert(key, class);
    }
    attrs
}

/// `material-icons` plus extra classes.
#[must_use]
pub fn icon_class(extra: &str) -> String {
    bulma_core::ClassList::new(MATERIAL_ICONS).with(extra).build()
}

/// One button on the number pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PadButton {
    /// Digit, separator or backspace.
    Key(PadKey),
    /// Clear the buffer.
    Reset,
}

/// Pad rows, phone layout; the separator slot becomes reset without decimals.
#[must_use]
pub fn pad_rows(decimals: bool) -> [[PadButton; 3]; 4] {
    let d = |digit| PadButton::Key(PadKey::Digit(digit));
    let corner = if decimals {
        PadButton::Key(PadKey::Decimal)
    } else {
        PadButton::Reset
    };
    [
        [d(7), d(8), d(9)],
        [d(4), d(5), d(6)],
        [d(1), d(2), d(3)],
        [corner, d(0), PadButton::Key(PadKey::Backspace)],
    ]
}

/// Two-letter calendar header.
#[must_use]
pub const fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// Split a multi-line message for rendering with `<br/>` between lines.
#[must_use]
pub fn message_lines(message: &str) -> Vec<&str> {
    message.lines().filter(|line| !line.trim().is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_skip_blank_classes() {
        let attrs = attributes("  ", true);
        assert!(attrs.value("class").is_none());
        assert!(attrs.is_disabled());

        let attrs = with_part(attributes("mt-2", false), "icon-class", "has-text-info");
        assert_eq!(attrs.class("class"), "mt-2");
        assert_eq!(attrs.class("icon-class"), "has-text-info");
        assert_eq!(with_part(Attributes::new(), "icon-class", "").len(), 0);
    }

    #[test]
    fn pad_corner_depends_on_decimals() {
        assert_eq!(pad_rows(true)[3][0], PadButton::Key(PadKey::Decimal));
        assert_eq!(pad_rows(false)[3][0], PadButton::Reset);
        assert_eq!(pad_rows(false)[0][0], PadButton::Key(PadKey::Digit(7)));
    }

    #[test]
    fn labels_and_lines() {
        assert_eq!(weekday_label(Weekday::Sun), "Su");
        assert_eq!(icon_class("is-left"), "material-icons is-left");
        assert_eq!(message_lines("one\ntwo\n"), vec!["one", "two"]);
    }
}
