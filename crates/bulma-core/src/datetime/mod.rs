//! Date/time text conversion and popout state for the date/time input.
//!
//! All four bound shapes ([`DateTimeKind`]) are carried internally as a
//! [`NaiveDateTime`]; time-only kinds sit on the reference date supplied by
//! the caller's clock.

pub mod calendar;

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::classes::{PopoutLayout, input_class, input_icon_class};
use crate::duration::check_range;
use crate::error::{FieldError, SettingsError};
use crate::flags::{DateTimeKind, InputDateTimeOptions, InputStatus, OptionWarning, normalize_datetime};

type O = InputDateTimeOptions;

/// Popout step sizes and picker range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeSteps {
    /// Hours per click, `1..=24`.
    pub hours: u32,
    /// Minutes per click, `1..=60`.
    pub minutes: u32,
    /// Seconds per click, `1..=60`.
    pub seconds: u32,
    /// Years either side of the current one in the year picker, `1..=100`.
    pub year_range: u32,
    /// First column of the calendar grid.
    pub start_of_week: Weekday,
}

impl Default for DateTimeSteps {
    fn default() -> Self {
        Self {
            hours: 1,
            minutes: 5,
            seconds: 15,
            year_range: 12,
            start_of_week: Weekday::Sun,
        }
    }
}

impl DateTimeSteps {
    /// Check every step against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::OutOfRange`] naming the first offending value.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_range("datetime.hours", self.hours, 1, 24)?;
        check_range("datetime.minutes", self.minutes, 1, 60)?;
        check_range("datetime.seconds", self.seconds, 1, 60)?;
        check_range("datetime.year_range", self.year_range, 1, 100)
    }
}

/// View shown inside the popout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Day grid.
    #[default]
    Calendar,
    /// Month list.
    Months,
    /// Year list.
    Years,
}

/// Option-driven conversion between text and date/time values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateTimeFormat {
    /// Effective (normalised) options.
    pub options: InputDateTimeOptions,
    /// Bound value shape.
    pub kind: DateTimeKind,
}

impl DateTimeFormat {
    /// Pair normalised options with a kind.
    #[must_use]
    pub const fn new(options: InputDateTimeOptions, kind: DateTimeKind) -> Self {
        Self { options, kind }
    }

    /// Reject text with more than two of any separator.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::TooManyDateSeparators`].
    pub fn validate_text(&self, text: &str, field: &str) -> Result<(), FieldError> {
        if text.trim().is_empty() || !self.options.contains(O::VALIDATE_TEXT_INPUT) {
            return Ok(());
        }
        let count = |needle: char| text.chars().filter(|c| *c == needle).count();
        if count('-') > 2 || count('/') > 2 || count(':') > 2 {
            return Err(FieldError::TooManyDateSeparators {
                field: field.to_string(),
            });
        }
        Ok(())
    }

    /// Expand shorthand time input.
    #[must_use]
    pub fn normalize_text(&self, text: &str) -> String {
        let mut value = text.trim().to_string();

        if self.options.contains(O::CONVERT_DECIMALS) {
            value = convert_decimals(&value);
        }
        if !self.options.contains(O::SHOW_DATE) && value.chars().all(|c| c.is_ascii_digit()) {
            value.push_str(":00:00");
        }
        if value.starts_with(':') {
            value.insert(0, '0');
        }
        if value.ends_with(':') {
            value.push_str("00");
        }
        value
    }

    /// Validate, normalise and parse user text. Blank text yields `Ok(None)`.
    ///
    /// `today` anchors time-only input to a date.
    ///
    /// # Errors
    ///
    /// Returns the validation failure or [`FieldError::InvalidDateTime`].
    pub fn parse(
        &self,
        text: &str,
        today: NaiveDate,
        field: &str,
    ) -> Result<Option<NaiveDateTime>, FieldError> {
        self.validate_text(text, field)?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let normalized = self.normalize_text(text);
        let parsed = match self.kind {
            DateTimeKind::DateTime => parse_date_time(&normalized)
                .or_else(|| parse_time(&normalized).map(|time| today.and_time(time))),
            DateTimeKind::Date => parse_date(&normalized).map(|date| date.and_time(NaiveTime::MIN)),
            DateTimeKind::Span | DateTimeKind::Time => {
                parse_time(&normalized).map(|time| today.and_time(time))
            }
        };
        parsed.map(Some).ok_or_else(|| FieldError::InvalidDateTime {
            field: field.to_string(),
        })
    }

    /// Render a value: date as `MM/dd/yyyy`, time by the shown columns.
    #[must_use]
    pub fn format(&self, value: NaiveDateTime) -> String {
        let mut formatted = String::new();
        if self.options.contains(O::SHOW_DATE) {
            formatted.push_str(&value.format("%m/%d/%Y").to_string());
            formatted.push(' ');
        }
        let time = match (
            self.options.contains(O::SHOW_HOURS),
            self.options.contains(O::SHOW_MINUTES),
            self.options.contains(O::SHOW_SECONDS),
        ) {
            (true, true, true) => value.format("%H:%M:%S").to_string(),
            (true, true, false) => value.format("%H:%M").to_string(),
            (true, false, _) => value.format("%H").to_string(),
            _ => String::new(),
        };
        formatted.push_str(&time);
        formatted.trim_end().to_string()
    }
}

/// `1.5` → `1:30`; `1:2.5` → `1:2:30`. Other text is returned unchanged.
fn convert_decimals(value: &str) -> String {
    if value.contains(['/', '-']) || value.matches('.').count() != 1 {
        return value.to_string();
    }
    let colons = value.matches(':').count();
    if colons > 1 {
        return value.to_string();
    }
    let Some((whole, fraction)) = value.split_once('.') else {
        return value.to_string();
    };
    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return value.to_string();
    }
    let digits: String = fraction.chars().take(9).collect();
    let sixtieths = if digits.is_empty() {
        0
    } else {
        let numerator: u64 = digits.parse().unwrap_or(0);
        let denominator = 10u64.pow(u32::try_from(digits.len()).unwrap_or(9));
        numerator * 60 / denominator
    };
    format!("{whole}:{sixtieths:02}")
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    ["%H:%M:%S%.f", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
}

fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    let (date, time) = match text.split_once(['T', ' ']) {
        Some((date, time)) => (date, Some(time.trim())),
        None => (text, None),
    };
    let date = parse_date(date)?;
    let time = match time {
        None | Some("") => NaiveTime::MIN,
        Some(time) => parse_time(time).or_else(|| {
            let hour: u32 = time.parse().ok()?;
            NaiveTime::from_hms_opt(hour, 0, 0)
        })?,
    };
    Some(date.and_time(time))
}

/// Bound value plus popout state of one date/time input.
#[derive(Clone, Debug, PartialEq)]
pub struct DateTimeInput {
    field: String,
    nullable: bool,
    format: DateTimeFormat,
    steps: DateTimeSteps,
    now: NaiveDateTime,
    value: Option<NaiveDateTime>,
    text: String,
    error: Option<FieldError>,
    initial: NaiveDateTime,
    popout_value: NaiveDateTime,
    popout_open: bool,
    mode: DisplayMode,
    status: InputStatus,
    warnings: Vec<OptionWarning>,
}

impl DateTimeInput {
    /// Create the state; `now` stands in for a missing value and anchors time-only kinds.
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        kind: DateTimeKind,
        nullable: bool,
        options: InputDateTimeOptions,
        value: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> Self {
        let (options, warnings) = normalize_datetime(options, kind);
        let format = DateTimeFormat::new(options, kind);
        let value = value.map(|v| Self::coerce(kind, v, now.date()));
        let start = value.unwrap_or(now);
        Self {
            field: field.into(),
            nullable,
            format,
            steps: DateTimeSteps::default(),
            now,
            text: value.map(|v| format.format(v)).unwrap_or_default(),
            value,
            error: None,
            initial: start,
            popout_value: start,
            popout_open: false,
            mode: DisplayMode::Calendar,
            status: InputStatus::empty(),
            warnings,
        }
    }

    fn coerce(kind: DateTimeKind, value: NaiveDateTime, today: NaiveDate) -> NaiveDateTime {
        match kind {
            DateTimeKind::DateTime => value,
            DateTimeKind::Date => value.date().and_time(NaiveTime::MIN),
            DateTimeKind::Span | DateTimeKind::Time => today.and_time(value.time()),
        }
    }

    /// Replace the popout steps and picker settings.
    #[must_use]
    pub fn with_steps(mut self, steps: DateTimeSteps) -> Self {
        self.steps = steps;
        self
    }

    /// Start from a caller supplied status.
    #[must_use]
    pub fn with_status(mut self, status: InputStatus) -> Self {
        self.status = status;
        self
    }

    /// Bound value.
    #[must_use]
    pub const fn value(&self) -> Option<NaiveDateTime> {
        self.value
    }

    /// Bound value as a date.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.value.map(|v| v.date())
    }

    /// Bound value as a time of day.
    #[must_use]
    pub fn time(&self) -> Option<NaiveTime> {
        self.value.map(|v| v.time())
    }

    /// Bound value as a duration since midnight.
    #[must_use]
    pub fn span(&self) -> Option<TimeDelta> {
        self.value.map(|v| v.time().signed_duration_since(NaiveTime::MIN))
    }

    /// Option combinations that were dropped while normalising.
    #[must_use]
    pub fn warnings(&self) -> &[OptionWarning] {
        &self.warnings
    }

    /// Displayed text.
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
    pub const fn options(&self) -> InputDateTimeOptions {
        self.format.options
    }

    /// Conversion rules in use.
    #[must_use]
    pub const fn format(&self) -> &DateTimeFormat {
        &self.format
    }

    /// Popout steps and picker settings.
    #[must_use]
    pub const fn steps(&self) -> DateTimeSteps {
        self.steps
    }

    /// Value shown in the popout.
    #[must_use]
    pub const fn popout_value(&self) -> NaiveDateTime {
        self.popout_value
    }

    /// `true` while the popout is shown.
    #[must_use]
    pub const fn is_popout_open(&self) -> bool {
        self.popout_open
    }

    /// Current popout view.
    #[must_use]
    pub const fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    /// The clock reading the state was built or last refreshed with.
    #[must_use]
    pub const fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Update the clock reading used for "now" and time-only anchoring.
    pub fn set_now(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    fn auto_status(&self) -> bool {
        self.format.options.contains(O::USE_AUTOMATIC_STATUS_COLORS)
    }

    /// Apply typed text.
    ///
    /// # Errors
    ///
    /// Returns the conversion failure; the value is left unchanged.
    pub fn set_text(&mut self, text: &str) -> Result<(), FieldError> {
        let outcome = self.format.parse(text, self.now.date(), &self.field);
        if self.auto_status() {
            self.status = self.status.with_outcome(outcome.is_ok());
        }
        match outcome {
            Ok(parsed) => {
                self.value = match parsed {
                    Some(value) => Some(value),
                    None if self.nullable => None,
                    None => Some(Self::coerce(
                        self.format.kind,
                        NaiveDateTime::default(),
                        self.now.date(),
                    )),
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
        self.popout_value = self.value.unwrap_or(self.now);
        outcome
    }

    /// Replace the value from outside (parameter change).
    pub fn set_value(&mut self, value: Option<NaiveDateTime>) {
        self.value = value.map(|v| Self::coerce(self.format.kind, v, self.now.date()));
        self.text = self.value.map(|v| self.format.format(v)).unwrap_or_default();
        self.error = None;
        self.popout_value = self.value.unwrap_or(self.now);
    }

    /// Show the popout.
    pub fn open_popout(&mut self) {
        if self.popout_open || self.format.options.contains(O::NO_POPOUT) {
            return;
        }
        self.popout_open = true;
        if self.auto_status() {
            self.status = self.status.reset_background();
        }
    }

    /// Hide the popout. `value` replaces the popout value first; `reset` restores the initial one.
    pub fn close_popout(&mut self, save: bool, reset: bool, value: Option<NaiveDateTime>) {
        if !self.popout_open || self.format.options.contains(O::NO_POPOUT) {
            return;
        }
        self.mode = DisplayMode::Calendar;
        self.popout_open = false;
        if let Some(value) = value {
            self.popout_value = value;
        }
        if reset {
            self.popout_value = self.initial;
        }
        if save || reset {
            self.commit_popout();
        }
    }

    fn commit_popout(&mut self) {
        let text = self.format.format(self.popout_value);
        // Formatted text always parses.
        let _ = self.set_text(&text);
    }

    fn popout_changed(&mut self) {
        if self.format.options.contains(O::UPDATE_ON_POPOUT_CHANGE) {
            self.commit_popout();
        }
    }

    /// `keydown` on the text box; Escape and Tab close the popout.
    pub fn on_key_down(&mut self, code: &str) {
        if matches!(code, "Escape" | "Tab") {
            self.close_popout(false, false, None);
        }
    }

    /// Switch the popout view; this also keeps the popout open.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.popout_open = true;
        self.mode = mode;
    }

    fn set_popout_date(&mut self, year: i32, month: u32, day: u32) {
        let last = calendar::days_in_month(year, month).unwrap_or(28);
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day.min(last)) {
            self.popout_value = date.and_time(self.popout_value.time());
            self.popout_changed();
        }
    }

    /// Pick a year from the year list and return to the calendar.
    pub fn select_year(&mut self, year: i32) {
        self.set_display_mode(DisplayMode::Calendar);
        let current = self.popout_value;
        self.set_popout_date(year, current.month(), current.day());
    }

    /// Pick a month from the month list and return to the calendar.
    pub fn select_month(&mut self, month: u32) {
        self.set_display_mode(DisplayMode::Calendar);
        let current = self.popout_value;
        self.set_popout_date(current.year(), month, current.day());
    }

    /// Move the calendar one month forward or back, clamping the day.
    pub fn shift_month(&mut self, forward: bool) {
        let months = Months::new(1);
        let shifted = if forward {
            self.popout_value.checked_add_months(months)
        } else {
            self.popout_value.checked_sub_months(months)
        };
        if let Some(shifted) = shifted {
            self.popout_value = shifted;
            self.popout_changed();
        }
    }

    /// Shift the popout value by a time delta.
    pub fn adjust(&mut self, delta: TimeDelta) {
        if let Some(adjusted) = self.popout_value.checked_add_signed(delta) {
            self.popout_value = adjusted;
            self.popout_changed();
        }
    }

    /// A day cell was clicked.
    pub fn select_date(&mut self, date: NaiveDate) {
        let value = date.and_time(self.popout_value.time());
        if self.format.options.contains(O::CLOSE_ON_DATE_CLICKED) {
            self.close_popout(true, false, Some(value));
        } else {
            self.popout_value = value;
            self.popout_changed();
        }
    }

    /// The Now/Today button: commit the clock reading and close.
    pub fn select_now(&mut self) {
        let now = Self::coerce(self.format.kind, self.now, self.now.date());
        self.close_popout(true, false, Some(now));
    }

    /// Days shown in the calendar grid for the popout month.
    #[must_use]
    pub fn calendar_dates(&self) -> Vec<NaiveDate> {
        calendar::calendar_dates(self.popout_value.date(), self.steps.start_of_week)
    }

    /// Years shown in the year list, centred on the popout year.
    #[must_use]
    pub fn calendar_years(&self) -> Vec<i32> {
        calendar::calendar_years(self.popout_value.year(), self.steps.year_range)
    }

    /// Months shown in the month list.
    #[must_use]
    pub fn calendar_months(&self) -> Vec<NaiveDate> {
        calendar::calendar_months(self.now.year())
    }

    /// Zero padded hour, minute and second of the popout value.
    #[must_use]
    pub fn popout_clock(&self) -> (String, String, String) {
        let time = self.popout_value.time();
        (
            format!("{:02}", time.hour()),
            format!("{:02}", time.minute()),
            format!("{:02}", time.second()),
        )
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
            inactive: attrs.is_inactive(),
            vertical,
            horizontal,
        }
        .picker_class(attrs.class("datetimepicker-class"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .expect("valid timestamp")
    }

    fn now() -> NaiveDateTime {
        at(2024, 2, 8, 3, 15, 43)
    }

    #[test]
    fn normalize_expands_time_shorthand() {
        let time = DateTimeFormat::new(O::SHOW_HOURS | O::SHOW_MINUTES, DateTimeKind::Time);
        assert_eq!(time.normalize_text("7"), "7:00:00");
        assert_eq!(time.normalize_text(":30"), "0:30");
        assert_eq!(time.normalize_text("7:"), "7:00");

        let decimals = DateTimeFormat::new(O::SHOW_HOURS | O::CONVERT_DECIMALS, DateTimeKind::Time);
        assert_eq!(decimals.normalize_text("1.5"), "1:30");
        assert_eq!(decimals.normalize_text("1:2.5"), "1:2:30");
        assert_eq!(decimals.normalize_text("02/08/2024"), "02/08/2024");
    }

    #[test]
    fn time_without_columns_keeps_a_warning() {
        let input = DateTimeInput::new("Start", DateTimeKind::Time, true, O::SHOW_DATE, None, now());
        assert_eq!(input.warnings(), [OptionWarning::NoTimeColumn]);
        let date = DateTimeInput::new("Start", DateTimeKind::Date, true, O::SHOW_DATE, None, now());
        assert!(date.warnings().is_empty());
    }

    #[test]
    fn parses_invariant_dates_and_times() {
        let format = DateTimeFormat::new(InputDateTimeOptions::default(), DateTimeKind::DateTime);
        let today = now().date();
        assert_eq!(
            format.parse("2024-02-08 03:15:43", today, "When"),
            Ok(Some(now()))
        );
        assert_eq!(
            format.parse("02/08/2024 03:15", today, "When"),
            Ok(Some(at(2024, 2, 8, 3, 15, 0)))
        );
        assert_eq!(
            format.parse("2024-02-08T03", today, "When"),
            Ok(Some(at(2024, 2, 8, 3, 0, 0)))
        );
        assert_eq!(
            format.parse("14:30", today, "When"),
            Ok(Some(at(2024, 2, 8, 14, 30, 0)))
        );
        assert!(matches!(
            format.parse("soon", today, "When"),
            Err(FieldError::InvalidDateTime { .. })
        ));
        assert!(matches!(
            format.parse("1:2:3:4", today, "When"),
            Err(FieldError::TooManyDateSeparators { .. })
        ));
    }

    #[test]
    fn formats_by_columns() {
        let value = now();
        let full = DateTimeFormat::new(
            O::SHOW_DATE | O::SHOW_HOURS | O::SHOW_MINUTES | O::SHOW_SECONDS,
            DateTimeKind::DateTime,
        );
        assert_eq!(full.format(value), "02/08/2024 03:15:43");
        let hours = DateTimeFormat::new(O::SHOW_HOURS, DateTimeKind::Time);
        assert_eq!(hours.format(value), "03");
        let date = DateTimeFormat::new(O::SHOW_DATE, DateTimeKind::Date);
        assert_eq!(date.format(value), "02/08/2024");
    }

    #[test]
    fn date_kind_round_trips_through_text() {
        let mut input = DateTimeInput::new(
            "Due",
            DateTimeKind::Date,
            true,
            InputDateTimeOptions::default(),
            None,
            now(),
        );
        assert_eq!(input.text(), "");
        input.set_text("2024-03-01").expect("parses");
        assert_eq!(input.text(), "03/01/2024");
        assert_eq!(input.date(), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert!(input.status().contains(InputStatus::BACKGROUND_SUCCESS));
    }

    #[test]
    fn month_and_year_selection_clamp_the_day() {
        let mut input = DateTimeInput::new(
            "When",
            DateTimeKind::DateTime,
            false,
            InputDateTimeOptions::default(),
            Some(at(2024, 1, 31, 9, 0, 0)),
            now(),
        );
        input.set_display_mode(DisplayMode::Months);
        input.select_month(2);
        assert_eq!(input.display_mode(), DisplayMode::Calendar);
        assert_eq!(input.popout_value(), at(2024, 2, 29, 9, 0, 0));

        input.select_year(2023);
        assert_eq!(input.popout_value(), at(2023, 2, 28, 9, 0, 0));
        assert_eq!(input.text(), "02/28/2023 09:00");

        input.shift_month(true);
        assert_eq!(input.popout_value(), at(2023, 3, 28, 9, 0, 0));
    }

    #[test]
    fn date_click_closes_and_commits() {
        let mut input = DateTimeInput::new(
            "When",
            DateTimeKind::DateTime,
            false,
            InputDateTimeOptions::default() - O::UPDATE_ON_POPOUT_CHANGE,
            Some(at(2024, 2, 8, 9, 30, 0)),
            now(),
        );
        input.open_popout();
        input.adjust(TimeDelta::hours(1));
        assert_eq!(input.value(), Some(at(2024, 2, 8, 9, 30, 0)));

        input.select_date(NaiveDate::from_ymd_opt(2024, 2, 20).expect("valid date"));
        assert!(!input.is_popout_open());
        assert_eq!(input.value(), Some(at(2024, 2, 20, 10, 30, 0)));
    }

    #[test]
    fn reset_restores_initial_value_and_now_uses_clock() {
        let initial = at(2024, 2, 1, 8, 0, 0);
        let mut input = DateTimeInput::new(
            "When",
            DateTimeKind::DateTime,
            false,
            InputDateTimeOptions::default(),
            Some(initial),
            now(),
        );
        input.open_popout();
        input.adjust(TimeDelta::days(3));
        input.close_popout(false, true, None);
        assert_eq!(input.value(), Some(initial));

        input.open_popout();
        input.select_now();
        assert_eq!(input.value(), Some(at(2024, 2, 8, 3, 15, 0)));
    }

    #[test]
    fn steps_validate_ranges() {
        assert!(DateTimeSteps::default().validate().is_ok());
        let steps = DateTimeSteps {
            year_range: 0,
            ..DateTimeSteps::default()
        };
        assert!(steps.validate().is_err());
    }
}
