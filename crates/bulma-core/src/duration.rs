//! Duration text conversion and popout state for the duration input.
//!
//! # Design
//! - Text passes through three stages: [`DurationFormat::validate_text`]
//!   rejects malformed characters, [`DurationFormat::normalize_text`] expands
//!   shorthand (`1.5`, `90`, `:30`) into `[-]d.hh:mm:ss`, and
//!   [`parse_span`] reads the canonical form.
//! - [`DurationFormat::format`] is the inverse and honours the
//!   `DISPLAY_*_AS_*` compression options.
//! - [`DurationInput`] owns the bound value plus the popout state so the UI
//!   component only forwards events.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::{PopoutLayout, input_class, input_icon_class};
use crate::error::{FieldError, SettingsError};
use crate::flags::{DurationKind, InputDurationOptions, InputStatus, OptionWarning, normalize_duration};

type O = InputDurationOptions;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;
const MAX_DAYS: i64 = 10_675_199;

/// The longest value a time-of-day can hold.
#[must_use]
pub fn end_of_day() -> TimeDelta {
    TimeDelta::seconds(SECONDS_PER_DAY - 1)
}

/// Increment sizes for the popout buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationSteps {
    /// Days per click, `1..=365`.
    pub days: u32,
    /// Hours per click, `1..=24`.
    pub hours: u32,
    /// Minutes per click, `1..=60`.
    pub minutes: u32,
    /// Seconds per click, `1..=60`.
    pub seconds: u32,
}

impl Default for DurationSteps {
    fn default() -> Self {
        Self {
            days: 1,
            hours: 1,
            minutes: 5,
            seconds: 15,
        }
    }
}

impl DurationSteps {
    /// Check every step against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::OutOfRange`] naming the first offending step.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_range("duration.days", self.days, 1, 365)?;
        check_range("duration.hours", self.hours, 1, 24)?;
        check_range("duration.minutes", self.minutes, 1, 60)?;
        check_range("duration.seconds", self.seconds, 1, 60)
    }

    /// Signed delta for one click on `unit`.
    #[must_use]
    pub fn delta(&self, unit: DurationUnit, forward: bool) -> TimeDelta {
        let seconds = match unit {
            DurationUnit::Days => i64::from(self.days) * SECONDS_PER_DAY,
            DurationUnit::Hours => i64::from(self.hours) * SECONDS_PER_HOUR,
            DurationUnit::Minutes => i64::from(self.minutes) * SECONDS_PER_MINUTE,
            DurationUnit::Seconds => i64::from(self.seconds),
        };
        TimeDelta::seconds(if forward { seconds } else { -seconds })
    }
}

pub(crate) fn check_range(
    field: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<(), SettingsError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange {
            field,
            value: i64::from(value),
            min: i64::from(min),
            max: i64::from(max),
        })
    }
}

/// One column of the duration popout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationUnit {
    /// Days column.
    Days,
    /// Hours column.
    Hours,
    /// Minutes column.
    Minutes,
    /// Seconds column.
    Seconds,
}

/// Option-driven conversion between text and [`TimeDelta`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurationFormat {
    /// Effective (normalised) options.
    pub options: InputDurationOptions,
}

impl DurationFormat {
    /// Wrap an already normalised option set.
    #[must_use]
    pub const fn new(options: InputDurationOptions) -> Self {
        Self { options }
    }

    /// Reject text that can never parse. Blank text and disabled validation pass.
    ///
    /// # Errors
    ///
    /// Returns the first [`FieldError`] that applies, in the order the rules are listed.
    pub fn validate_text(&self, text: &str, field: &str) -> Result<(), FieldError> {
        if text.trim().is_empty() || !self.options.contains(O::VALIDATE_TEXT_INPUT) {
            return Ok(());
        }
        let field = field.to_string();
        if text
            .chars()
            .any(|c| !(c.is_ascii_digit() || matches!(c, '-' | '.' | ':')))
        {
            return Err(FieldError::InvalidDurationCharacters { field });
        }
        if !self.options.contains(O::ALLOW_NEGATIVE) && text.contains('-') {
            return Err(FieldError::NegativeNotAllowed { field });
        }
        let count = |needle: char| text.chars().filter(|c| *c == needle).count();
        if count('-') > 1 || count('.') > 1 || count(':') > 2 {
            return Err(FieldError::TooManyDurationSeparators { field });
        }
        if text.contains('-') && !text.starts_with('-') {
            return Err(FieldError::MisplacedNegativeSign { field });
        }
        if self.options.contains(O::DISPLAY_MINUTES_AS_SECONDS) && text.contains('.') {
            return Err(FieldError::DecimalNotAllowed { field });
        }
        Ok(())
    }

    /// Expand shorthand input into the canonical `[-]d.hh:mm:ss` shape.
    ///
    /// Returns `None` when a compressed total cannot be read as a number.
    #[must_use]
    pub fn normalize_text(&self, text: &str) -> Option<String> {
        let options = self.options;
        let negative = text.starts_with('-');
        let mut value = text.trim_start_matches('-').to_string();

        if value.starts_with('.') || value.starts_with(':') {
            value.insert(0, '0');
        }
        if value.ends_with('.') || value.ends_with(':') {
            value.push_str("00");
        }

        if value.contains('.') && !value.contains(':') {
            let (whole, fraction) = value.split_once('.').unwrap_or((value.as_str(), ""));
            value = if options.contains(O::DISPLAY_DAYS_AS_HOURS) {
                format!("{whole}:{}:00", sixtieths(fraction)?)
            } else if options.contains(O::DISPLAY_HOURS_AS_MINUTES) {
                format!("{whole}:{}", sixtieths(fraction)?)
            } else {
                format!("{value}:00:00")
            };
        }

        if !value.contains('.') && !value.contains(':') {
            if options.contains(O::SHOW_DAYS) {
                value = format!("{value}.00:00:00");
            } else if options.contains(O::SHOW_HOURS) {
                value = format!("{value}:00:00");
            } else if options.contains(O::DISPLAY_HOURS_AS_MINUTES) {
                value = format!("{value}:00");
            } else if options.contains(O::SHOW_MINUTES) {
                value = format!("00:{value}:00");
            } else if options.contains(O::SHOW_SECONDS)
                && !options.contains(O::DISPLAY_MINUTES_AS_SECONDS)
            {
                value = format!("00:00:{value}");
            }
        }

        if options.contains(O::DISPLAY_DAYS_AS_HOURS) {
            let mut parts = value.split(':');
            let total_hours = parse_total(parts.next()?)?;
            let rest: Vec<&str> = parts.collect();
            value = format!(
                "{}.{:02}:{}",
                total_hours / 24,
                total_hours % 24,
                rest.join(":")
            );
        } else if options.contains(O::DISPLAY_HOURS_AS_MINUTES) {
            let mut parts = value.split(':');
            let total_minutes = parse_total(parts.next()?)?;
            let seconds = parts.next()?;
            let days = total_minutes / 1_440;
            let remainder = total_minutes - days * 1_440;
            value = format!(
                "{days}.{:02}:{:02}:{seconds}",
                remainder / 60,
                remainder % 60
            );
        } else if options.contains(O::DISPLAY_MINUTES_AS_SECONDS) {
            let total_seconds = parse_total(&value)?;
            let days = total_seconds / SECONDS_PER_DAY;
            let remainder = total_seconds - days * SECONDS_PER_DAY;
            value = format!(
                "{days}.{:02}:{:02}:{:02}",
                remainder / SECONDS_PER_HOUR,
                remainder % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
                remainder % SECONDS_PER_MINUTE
            );
        }

        Some(if negative { format!("-{value}") } else { value })
    }

    /// Validate, normalise and parse user text.
    ///
    /// Blank text yields `Ok(None)`; callers bound to a non-nullable value treat that as zero.
    ///
    /// # Errors
    ///
    /// Returns the validation failure, or [`FieldError::InvalidDuration`] when
    /// the normalised text does not describe a duration valid for `kind`.
    pub fn parse(
        &self,
        text: &str,
        kind: DurationKind,
        field: &str,
    ) -> Result<Option<TimeDelta>, FieldError> {
        self.validate_text(text, field)?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let invalid = || FieldError::InvalidDuration {
            field: field.to_string(),
        };
        let normalized = self.normalize_text(text.trim()).ok_or_else(invalid)?;
        let span = parse_span(&normalized).ok_or_else(invalid)?;
        if kind == DurationKind::TimeOfDay && (span < TimeDelta::zero() || span > end_of_day()) {
            return Err(invalid());
        }
        Ok(Some(span))
    }

    /// Clamp a value to what the options allow.
    #[must_use]
    pub fn clamp(&self, value: TimeDelta) -> TimeDelta {
        if !self.options.contains(O::ALLOW_NEGATIVE) && value < TimeDelta::zero() {
            TimeDelta::zero()
        } else if !self.options.contains(O::ALLOW_GREATER_THAN_24_HOURS)
            && value >= TimeDelta::days(1)
        {
            end_of_day()
        } else {
            value
        }
    }

    /// Render a value for the text box.
    #[must_use]
    pub fn format(&self, value: TimeDelta) -> String {
        let value = self.clamp(value);
        let mut formatted = String::new();
        if value < TimeDelta::zero() {
            formatted.push('-');
        }
        if self.options.contains(O::SHOW_DAYS) {
            formatted.push_str(&self.unit_text(value, DurationUnit::Days));
            formatted.push('.');
        }
        if self.options.contains(O::SHOW_HOURS) {
            formatted.push_str(&self.unit_text(value, DurationUnit::Hours));
            formatted.push(':');
        }
        if self.options.contains(O::SHOW_MINUTES) {
            formatted.push_str(&self.unit_text(value, DurationUnit::Minutes));
            formatted.push(':');
        }
        if self.options.contains(O::SHOW_SECONDS) {
            formatted.push_str(&self.unit_text(value, DurationUnit::Seconds));
        }
        formatted.trim_end_matches(['.', ':']).to_string()
    }

    /// Text of a single component, as shown in the text box and the popout columns.
    #[must_use]
    pub fn unit_text(&self, value: TimeDelta, unit: DurationUnit) -> String {
        let total = value.num_seconds().abs();
        let days = total / SECONDS_PER_DAY;
        let hours = total % SECONDS_PER_DAY / SECONDS_PER_HOUR;
        let minutes = total % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
        let seconds = total % SECONDS_PER_MINUTE;
        let options = self.options;
        match unit {
            DurationUnit::Days => days.to_string(),
            DurationUnit::Hours if options.contains(O::SHOW_DAYS) => format!("{hours:02}"),
            DurationUnit::Hours if options.contains(O::DISPLAY_DAYS_AS_HOURS) => {
                (total / SECONDS_PER_HOUR).to_string()
            }
            DurationUnit::Hours => hours.to_string(),
            DurationUnit::Minutes if options.contains(O::SHOW_HOURS) => format!("{minutes:02}"),
            DurationUnit::Minutes if options.contains(O::DISPLAY_HOURS_AS_MINUTES) => {
                (total / SECONDS_PER_MINUTE).to_string()
            }
            DurationUnit::Minutes => minutes.to_string(),
            DurationUnit::Seconds if options.contains(O::SHOW_MINUTES) => format!("{seconds:02}"),
            DurationUnit::Seconds if options.contains(O::DISPLAY_MINUTES_AS_SECONDS) => {
                total.to_string()
            }
            DurationUnit::Seconds => seconds.to_string(),
        }
    }
}

fn parse_total(text: &str) -> Option<i64> {
    text.parse::<i64>().ok().map(i64::abs)
}

/// Whole sixtieths of a decimal fraction (`"5"` → `"30"`), padded to two digits.
fn sixtieths(fraction: &str) -> Option<String> {
    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let digits: String = fraction.chars().take(18).collect();
    if digits.is_empty() {
        return Some("00".to_string());
    }
    let numerator: u128 = digits.parse().ok()?;
    let denominator = 10u128.checked_pow(u32::try_from(digits.len()).ok()?)?;
    Some(format!("{:02}", numerator * 60 / denominator))
}

/// Parse `[-]d`, `[-][d.]h:m[:s[.f]]` into a duration.
///
/// Hours must stay below 24 and minutes/seconds below 60 whenever a larger unit is present.
#[must_use]
pub fn parse_span(text: &str) -> Option<TimeDelta> {
    let text = text.trim();
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if body.is_empty() {
        return None;
    }

    let magnitude = if body.contains(':') {
        let first_colon = body.find(':')?;
        let (days, clock) = match body.find('.') {
            Some(dot) if dot < first_colon => (digits(&body[..dot])?, &body[dot + 1..]),
            _ => (0, body),
        };
        let parts: Vec<&str> = clock.split(':').collect();
        let (hours, minutes, seconds, nanos) = match parts.as_slice() {
            [h, m] => (digits(h)?, digits(m)?, 0, 0),
            [h, m, s] => {
                let (whole, fraction) = match s.split_once('.') {
                    Some((whole, fraction)) => (whole, Some(fraction)),
                    None => (*s, None),
                };
                let nanos = match fraction {
                    Some(fraction) => fraction_nanos(fraction)?,
                    None => 0,
                };
                (digits(h)?, digits(m)?, digits(whole)?, nanos)
            }
            _ => return None,
        };
        if hours >= 24 || minutes >= 60 || seconds >= 60 || days > MAX_DAYS {
            return None;
        }
        TimeDelta::try_seconds(
            days * SECONDS_PER_DAY + hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds,
        )?
        .checked_add(&TimeDelta::nanoseconds(nanos))?
    } else {
        let days = digits(body)?;
        if days > MAX_DAYS {
            return None;
        }
        TimeDelta::try_days(days)?
    };

    Some(if negative { -magnitude } else { magnitude })
}

fn digits(text: &str) -> Option<i64> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn fraction_nanos(fraction: &str) -> Option<i64> {
    if fraction.is_empty() || fraction.len() > 7 || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let padded = format!("{fraction:0<9}");
    padded.parse().ok()
}

/// Bound value plus popout state of one duration input.
#[derive(Clone, Debug, PartialEq)]
pub struct DurationInput {
    field: String,
    kind: DurationKind,
    nullable: bool,
    format: DurationFormat,
    steps: DurationSteps,
    value: Option<TimeDelta>,
    text: String,
    error: Option<FieldError>,
    initial: TimeDelta,
    popout_value: TimeDelta,
    popout_open: bool,
    status: InputStatus,
    warnings: Vec<OptionWarning>,
}

impl DurationInput {
    /// Create the state for a field; options are normalised for `kind` here.
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        kind: DurationKind,
        nullable: bool,
        options: InputDurationOptions,
        value: Option<TimeDelta>,
    ) -> Self {
        let (options, warnings) = normalize_duration(options, kind);
        let format = DurationFormat::new(options);
        let value = if nullable {
            value
        } else {
            Some(value.unwrap_or_else(TimeDelta::zero))
        };
        let start = value.unwrap_or_else(TimeDelta::zero);
        Self {
            field: field.into(),
            kind,
            nullable,
            format,
            steps: DurationSteps::default(),
            text: value.map(|v| format.format(v)).unwrap_or_default(),
            value,
            error: None,
            initial: start,
            popout_value: start,
            popout_open: false,
            status: InputStatus::empty(),
            warnings,
        }
    }

    /// Replace the popout step sizes.
    #[must_use]
    pub fn with_steps(mut self, steps: DurationSteps) -> Self {
        self.steps = steps;
        self
    }

    /// Start from a caller supplied status.
    #[must_use]
    pub fn with_status(mut self, status: InputStatus) -> Self {
        self.status = status;
        self
    }

    /// Current bound value.
    #[must_use]
    pub const fn value(&self) -> Option<TimeDelta> {
        self.value
    }

    /// Option combinations that were dropped while normalising.
    #[must_use]
    pub fn warnings(&self) -> &[OptionWarning] {
        &self.warnings
    }

    /// Text currently displayed in the box.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Last conversion failure.
    #[must_use]
    pub const fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// Status colours.
    #[must_use]
    pub const fn status(&self) -> InputStatus {
        self.status
    }

    /// Effective options.
    #[must_use]
    pub const fn options(&self) -> InputDurationOptions {
        self.format.options
    }

    /// Conversion rules in use.
    #[must_use]
    pub const fn format(&self) -> &DurationFormat {
        &self.format
    }

    /// Popout step sizes.
    #[must_use]
    pub const fn steps(&self) -> DurationSteps {
        self.steps
    }

    /// Value shown in the popout.
    #[must_use]
    pub const fn popout_value(&self) -> TimeDelta {
        self.popout_value
    }

    /// `true` while the popout is shown.
    #[must_use]
    pub const fn is_popout_open(&self) -> bool {
        self.popout_open
    }

    fn value_or_zero(&self) -> TimeDelta {
        self.value.unwrap_or_else(TimeDelta::zero)
    }

    fn auto_status(&self) -> bool {
        self.format.options.contains(O::USE_AUTOMATIC_STATUS_COLORS)
    }

    /// Apply typed text: parse it and update the value, status and error.
    ///
    /// # Errors
    ///
    /// Returns the conversion failure; the value is left unchanged.
    pub fn set_text(&mut self, text: &str) -> Result<(), FieldError> {
        let outcome = self.format.parse(text, self.kind, &self.field);
        if self.auto_status() {
            self.status = self.status.with_outcome(outcome.is_ok());
        }
        match outcome {
            Ok(parsed) => {
                self.value = match parsed {
                    Some(span) => Some(span),
                    None if self.nullable => None,
                    None => Some(TimeDelta::zero()),
                };
                self.text = self.value.map(|v| self.format.format(v)).unwrap_or_default();
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.text = text.to_string();
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Text box `change` event: apply the text and re-sync the popout.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::set_text`] failures after re-syncing.
    pub fn on_change(&mut self, text: &str) -> Result<(), FieldError> {
        let outcome = self.set_text(text);
        self.popout_value = self.value_or_zero();
        outcome
    }

    /// Replace the value from outside (parameter change).
    pub fn set_value(&mut self, value: Option<TimeDelta>) {
        self.value = if self.nullable {
            value
        } else {
            Some(value.unwrap_or_else(TimeDelta::zero))
        };
        self.text = self.value.map(|v| self.format.format(v)).unwrap_or_default();
        self.error = None;
        self.popout_value = self.value_or_zero();
    }

    /// Show the popout; ignored with `NO_POPOUT` or when already open.
    pub fn open_popout(&mut self) {
        if self.popout_open || self.format.options.contains(O::NO_POPOUT) {
            return;
        }
        self.popout_open = true;
        if self.auto_status() {
            self.status = self.status.reset_background();
        }
    }

    /// Hide the popout, optionally restoring the initial value or committing the popout value.
    pub fn close_popout(&mut self, save: bool, reset: bool) {
        let options = self.format.options;
        if (!self.popout_open && !options.contains(O::HOVER_POPOUT)) || options.contains(O::NO_POPOUT)
        {
            return;
        }
        self.popout_open = false;
        if reset {
            self.popout_value = self.initial;
        }
        if save || reset {
            let text = self.format.format(self.popout_value);
            // Formatted text always parses.
            let _ = self.set_text(&text);
        }
    }

    /// `keydown` on the text box; Escape and Tab close the popout.
    pub fn on_key_down(&mut self, code: &str) {
        if matches!(code, "Escape" | "Tab") {
            self.close_popout(false, false);
        }
    }

    /// Step the popout value by `delta`, clamped to the allowed range.
    pub fn adjust(&mut self, delta: TimeDelta) {
        let adjusted = self
            .popout_value
            .checked_add(&delta)
            .unwrap_or(self.popout_value);
        self.popout_value = self.format.clamp(adjusted);
        if self.format.options.contains(O::UPDATE_ON_POPOUT_CHANGE) {
            let text = self.format.format(self.popout_value);
            let _ = self.set_text(&text);
        }
    }

    /// One popout button click.
    pub fn step(&mut self, unit: DurationUnit, forward: bool) {
        self.adjust(self.steps.delta(unit, forward));
    }

    /// Class for the `<input>`.
    #[must_use]
    pub fn input_class(&self, extra: &str) -> String {
        input_class(self.status, extra)
    }

    /// Class for the left icon.
    #[must_use]
    pub fn icon_class(&self, attrs: &Attributes, extra: &str) -> String {
        input_icon_class(&self.input_class(extra), self.status, attrs.class("icon-class"))
    }

    /// Class for the popout container.
    #[must_use]
    pub fn picker_class(&self, attrs: &Attributes) -> String {
        let options = self.format.options;
        let (vertical, horizontal) = PopoutLayout::positions(
            options.contains(O::POPOUT_TOP),
            options.contains(O::POPOUT_BOTTOM),
            options.contains(O::POPOUT_LEFT),
            options.contains(O::POPOUT_RIGHT),
        );
        PopoutLayout {
            hoverable: options.contains(O::HOVER_POPOUT),
            open: self.popout_open,
            inactive: attrs.is_disabled(),
            vertical,
            horizontal,
        }
        .picker_class(attrs.class("datetimepicker-class"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms() -> DurationFormat {
        DurationFormat::new(InputDurationOptions::default())
    }

    fn span(h: i64, m: i64, s: i64) -> TimeDelta {
        TimeDelta::seconds(h * 3_600 + m * 60 + s)
    }

    #[test]
    fn validation_rules_run_in_order() {
        let format = hms();
        assert!(matches!(
            format.validate_text("1h", "Wait"),
            Err(FieldError::InvalidDurationCharacters { .. })
        ));
        assert!(matches!(
            format.validate_text("-1", "Wait"),
            Err(FieldError::NegativeNotAllowed { .. })
        ));
        let negative = DurationFormat::new(InputDurationOptions::default() | O::ALLOW_NEGATIVE);
        assert!(matches!(
            negative.validate_text("1:2:3:4", "Wait"),
            Err(FieldError::TooManyDurationSeparators { .. })
        ));
        assert!(matches!(
            negative.validate_text("1-2", "Wait"),
            Err(FieldError::MisplacedNegativeSign { .. })
        ));
        assert!(format.validate_text("", "Wait").is_ok());
    }

    #[test]
    fn decimals_are_limited() {
        assert_eq!(
            hms().validate_text("1.2.3", "Wait"),
            Err(FieldError::TooManyDurationSeparators { field: "Wait".into() })
        );
        assert!(hms().validate_text("1.02:00:00", "Wait").is_ok());

        let seconds = DurationFormat::new(O::VALIDATE_TEXT_INPUT | O::SHOW_SECONDS | O::DISPLAY_MINUTES_AS_SECONDS);
        assert_eq!(
            seconds.validate_text("1.5", "Wait"),
            Err(FieldError::DecimalNotAllowed { field: "Wait".into() })
        );
        assert!(seconds.validate_text("90", "Wait").is_ok());
    }

    #[test]
    fn normalize_expands_shorthand() {
        let format = hms();
        assert_eq!(format.normalize_text("2").as_deref(), Some("2:00:00"));
        assert_eq!(format.normalize_text(":30").as_deref(), Some("0:30"));
        assert_eq!(format.normalize_text("1:").as_deref(), Some("1:00"));

        let days_as_hours = DurationFormat::new(O::SHOW_HOURS | O::SHOW_MINUTES | O::DISPLAY_DAYS_AS_HOURS);
        assert_eq!(days_as_hours.normalize_text("1.5").as_deref(), Some("0.01:30:00"));
        assert_eq!(days_as_hours.normalize_text("30:15").as_deref(), Some("1.06:15"));

        let minutes = DurationFormat::new(O::SHOW_MINUTES | O::SHOW_SECONDS | O::DISPLAY_HOURS_AS_MINUTES);
        assert_eq!(minutes.normalize_text("90:30").as_deref(), Some("0.01:30:30"));

        let seconds = DurationFormat::new(O::SHOW_SECONDS | O::DISPLAY_MINUTES_AS_SECONDS);
        assert_eq!(seconds.normalize_text("3725").as_deref(), Some("0.01:02:05"));
    }

    #[test]
    fn parse_span_accepts_dotnet_style_shapes() {
        assert_eq!(parse_span("2"), Some(TimeDelta::days(2)));
        assert_eq!(parse_span("1:30"), Some(span(1, 30, 0)));
        assert_eq!(parse_span("1.03:15:43"), Some(TimeDelta::days(1) + span(3, 15, 43)));
        assert_eq!(parse_span("-0:00:05"), Some(-TimeDelta::seconds(5)));
        assert_eq!(
            parse_span("0:00:01.5"),
            Some(TimeDelta::milliseconds(1_500))
        );
        assert_eq!(parse_span("24:00"), None);
        assert_eq!(parse_span("1:60"), None);
        assert_eq!(parse_span("a:b"), None);
    }

    #[test]
    fn format_clamps_and_compresses() {
        let format = hms();
        assert_eq!(format.format(span(1, 5, 9)), "1:05:09");
        assert_eq!(format.format(-span(1, 0, 0)), "0:00:00");
        assert_eq!(format.format(TimeDelta::days(2)), "23:59:59");

        let wide = DurationFormat::new(
            O::SHOW_HOURS | O::SHOW_MINUTES | O::DISPLAY_DAYS_AS_HOURS | O::ALLOW_GREATER_THAN_24_HOURS | O::ALLOW_NEGATIVE,
        );
        assert_eq!(wide.format(TimeDelta::days(1) + span(6, 15, 0)), "30:15");
        assert_eq!(wide.format(-(TimeDelta::days(1) + span(6, 15, 0))), "-30:15");

        let days = DurationFormat::new(O::SHOW_DAYS | O::SHOW_HOURS | O::ALLOW_GREATER_THAN_24_HOURS);
        assert_eq!(days.format(TimeDelta::days(3) + span(4, 0, 0)), "3.04");
    }

    #[test]
    fn time_of_day_rejects_values_past_midnight() {
        let format = DurationFormat::new(InputDurationOptions::default() | O::SHOW_DAYS);
        assert!(matches!(
            format.parse("1.00:00:00", DurationKind::TimeOfDay, "Start"),
            Err(FieldError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn input_tracks_status_and_text() {
        let mut input = DurationInput::new("Wait", DurationKind::Span, false, InputDurationOptions::default(), None);
        assert_eq!(input.text(), "0:00:00");

        input.set_text("1:30").expect("parses");
        assert_eq!(input.value(), Some(span(1, 30, 0)));
        assert_eq!(input.text(), "1:30:00");
        assert!(input.status().contains(InputStatus::BACKGROUND_SUCCESS));

        assert!(input.set_text("x").is_err());
        assert_eq!(input.text(), "x");
        assert_eq!(input.value(), Some(span(1, 30, 0)));
        assert!(input.status().contains(InputStatus::BACKGROUND_DANGER));

        input.set_text("").expect("blank is zero");
        assert_eq!(input.value(), Some(TimeDelta::zero()));
    }

    #[test]
    fn popout_adjusts_and_resets() {
        let mut input = DurationInput::new(
            "Wait",
            DurationKind::Span,
            false,
            InputDurationOptions::default(),
            Some(span(0, 10, 0)),
        );
        input.open_popout();
        assert!(input.is_popout_open());

        input.step(DurationUnit::Minutes, true);
        assert_eq!(input.value(), Some(span(0, 15, 0)));

        input.adjust(-TimeDelta::hours(5));
        assert_eq!(input.popout_value(), TimeDelta::zero());

        input.close_popout(false, true);
        assert!(!input.is_popout_open());
        assert_eq!(input.value(), Some(span(0, 10, 0)));
    }

    #[test]
    fn no_popout_option_keeps_popout_closed() {
        let mut input = DurationInput::new(
            "Wait",
            DurationKind::Span,
            true,
            InputDurationOptions::default() | O::NO_POPOUT,
            None,
        );
        input.open_popout();
        assert!(!input.is_popout_open());
        assert_eq!(input.text(), "");
    }

    #[test]
    fn conflicting_options_are_kept_as_warnings() {
        let input = DurationInput::new(
            "Wait",
            DurationKind::Span,
            false,
            InputDurationOptions::default() | O::DISPLAY_MINUTES_AS_SECONDS,
            None,
        );
        assert_eq!(
            input.warnings(),
            [OptionWarning::ConflictingDuration("DisplayMinutesAsSeconds", "ShowMinutes")]
        );
        let clean = DurationInput::new("Wait", DurationKind::Span, false, InputDurationOptions::default(), None);
        assert!(clean.warnings().is_empty());
    }

    #[test]
    fn steps_validate_ranges() {
        assert!(DurationSteps::default().validate().is_ok());
        let steps = DurationSteps {
            minutes: 61,
            ..DurationSteps::default()
        };
        assert!(matches!(
            steps.validate(),
            Err(SettingsError::OutOfRange { field: "duration.minutes", .. })
        ));
    }
}
