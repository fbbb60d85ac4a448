//! Option bitsets controlling widget behaviour, plus their normalisation rules.
//!
//! # Design
//! - Every set is a `bitflags` struct so options combine with `|` and test with
//!   `contains` (all bits) or `intersects` (any bit).
//! - Conflicting combinations are resolved once, when a widget is created, and
//!   reported as [`OptionWarning`]s so callers can surface them.

use bitflags::bitflags;
use tracing::warn;

bitflags! {
    /// Colour treatments applied to an input and its icon.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InputStatus: u32 {
        /// Success colour on the input background.
        const BACKGROUND_SUCCESS = 1 << 0;
        /// Warning colour on the input background.
        const BACKGROUND_WARNING = 1 << 1;
        /// Danger colour on the input background.
        const BACKGROUND_DANGER = 1 << 2;
        /// Success colour on the input icon.
        const ICON_SUCCESS = 1 << 3;
        /// Warning colour on the input icon.
        const ICON_WARNING = 1 << 4;
        /// Danger colour on the input icon.
        const ICON_DANGER = 1 << 5;
    }
}

impl InputStatus {
    /// All background bits, cleared together before a new validation result.
    pub const BACKGROUND: Self = Self::BACKGROUND_SUCCESS
        .union(Self::BACKGROUND_WARNING)
        .union(Self::BACKGROUND_DANGER);

    /// Clear the background bits and record a validation outcome.
    #[must_use]
    pub fn with_outcome(self, success: bool) -> Self {
        let cleared = self.difference(Self::BACKGROUND);
        if success {
            cleared | Self::BACKGROUND_SUCCESS
        } else {
            cleared | Self::BACKGROUND_DANGER
        }
    }

    /// Clear the background bits only.
    #[must_use]
    pub fn reset_background(self) -> Self {
        self.difference(Self::BACKGROUND)
    }
}

bitflags! {
    /// Progress of a loading operation. The empty set means not started.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LoadingStatus: u32 {
        /// Loading is underway.
        const IN_PROGRESS = 1 << 0;
        /// Loading finished.
        const COMPLETE = 1 << 1;
        /// Loading finished as expected.
        const SUCCESSFUL = 1 << 2;
        /// Loading hit an error.
        const FAILED = 1 << 3;
    }
}

impl LoadingStatus {
    /// Loading has not begun.
    pub const NOT_STARTED: Self = Self::empty();
}

bitflags! {
    /// Placement and behaviour of a tooltip. The empty set uses Bulma defaults.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TooltipOptions: u32 {
        /// Above the element.
        const TOP = 1 << 0;
        /// Below the element.
        const BOTTOM = 1 << 1;
        /// Left of the element.
        const LEFT = 1 << 2;
        /// Right of the element.
        const RIGHT = 1 << 3;
        /// Arrow pointing at the element.
        const HAS_ARROW = 1 << 4;
        /// Wrap across multiple lines.
        const MULTILINE = 1 << 5;
        /// Always visible.
        const ALWAYS_ACTIVE = 1 << 6;
    }
}

bitflags! {
    /// Behaviour of the autocomplete input.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InputAutocompleteOptions: u32 {
        /// Show the popout while hovering.
        const HOVER_POPOUT = 1 << 0;
        /// Show the popout on click or focus.
        const CLICK_POPOUT = 1 << 1;
        /// Show the popout while typing.
        const TYPE_POPOUT = 1 << 2;
        /// Popout above the input.
        const POPOUT_TOP = 1 << 3;
        /// Popout below the input.
        const POPOUT_BOTTOM = 1 << 4;
        /// Popout aligned left.
        const POPOUT_LEFT = 1 << 5;
        /// Popout aligned right.
        const POPOUT_RIGHT = 1 << 6;
        /// Colour the input from validation results.
        const USE_AUTOMATIC_STATUS_COLORS = 1 << 7;
        /// Select a match when focus leaves.
        const AUTO_SELECT_ON_EXIT = 1 << 8;
        /// Select a match on every keystroke.
        const AUTO_SELECT_ON_INPUT = 1 << 9;
        /// Match strategy: the highlighted item.
        const AUTO_SELECT_CURRENT = 1 << 10;
        /// Match strategy: exact display text.
        const AUTO_SELECT_EXACT = 1 << 11;
        /// Match strategy: closest display text.
        const AUTO_SELECT_CLOSEST = 1 << 12;
    }
}

impl Default for InputAutocompleteOptions {
    fn default() -> Self {
        Self::TYPE_POPOUT
            | Self::CLICK_POPOUT
            | Self::POPOUT_BOTTOM
            | Self::POPOUT_LEFT
            | Self::USE_AUTOMATIC_STATUS_COLORS
    }
}

bitflags! {
    /// Behaviour of the date/time input.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InputDateTimeOptions: u32 {
        /// Never show a popout.
        const NO_POPOUT = 1 << 0;
        /// Show the popout while hovering.
        const HOVER_POPOUT = 1 << 1;
        /// Show the popout on click or focus.
        const CLICK_POPOUT = 1 << 2;
        /// Popout above the input.
        const POPOUT_TOP = 1 << 3;
        /// Popout below the input.
        const POPOUT_BOTTOM = 1 << 4;
        /// Popout aligned left.
        const POPOUT_LEFT = 1 << 5;
        /// Popout aligned right.
        const POPOUT_RIGHT = 1 << 6;
        /// Write popout changes straight to the bound value.
        const UPDATE_ON_POPOUT_CHANGE = 1 << 7;
        /// Colour the input from validation results.
        const USE_AUTOMATIC_STATUS_COLORS = 1 << 8;
        /// Show the Accept button.
        const SHOW_ACCEPT_BUTTON = 1 << 9;
        /// Show the Now/Today button.
        const SHOW_NOW_BUTTON = 1 << 10;
        /// Show the Reset button.
        const SHOW_RESET_BUTTON = 1 << 11;
        /// Show the Cancel button.
        const SHOW_CANCEL_BUTTON = 1 << 12;
        /// Show the calendar section.
        const SHOW_DATE = 1 << 13;
        /// Show the hours column.
        const SHOW_HOURS = 1 << 14;
        /// Show the minutes column.
        const SHOW_MINUTES = 1 << 15;
        /// Show the seconds column.
        const SHOW_SECONDS = 1 << 16;
        /// Close the popout when a day is clicked.
        const CLOSE_ON_DATE_CLICKED = 1 << 17;
        /// Reject malformed text before parsing.
        const VALIDATE_TEXT_INPUT = 1 << 18;
        /// Read decimal fractions as minutes or seconds.
        const CONVERT_DECIMALS = 1 << 19;
    }
}

impl InputDateTimeOptions {
    /// The time columns.
    pub const TIME_COLUMNS: Self = Self::SHOW_HOURS
        .union(Self::SHOW_MINUTES)
        .union(Self::SHOW_SECONDS);
}

impl Default for InputDateTimeOptions {
    fn default() -> Self {
        Self::CLICK_POPOUT
            | Self::POPOUT_BOTTOM
            | Self::POPOUT_LEFT
            | Self::SHOW_NOW_BUTTON
            | Self::SHOW_RESET_BUTTON
            | Self::UPDATE_ON_POPOUT_CHANGE
            | Self::USE_AUTOMATIC_STATUS_COLORS
            | Self::SHOW_DATE
            | Self::SHOW_HOURS
            | Self::SHOW_MINUTES
            | Self::CLOSE_ON_DATE_CLICKED
            | Self::VALIDATE_TEXT_INPUT
    }
}

bitflags! {
    /// Behaviour of the duration input.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InputDurationOptions: u32 {
        /// Never show a popout.
        const NO_POPOUT = 1 << 0;
        /// Show the popout while hovering.
        const HOVER_POPOUT = 1 << 1;
        /// Show the popout on click or focus.
        const CLICK_POPOUT = 1 << 2;
        /// Popout above the input.
        const POPOUT_TOP = 1 << 3;
        /// Popout below the input.
        const POPOUT_BOTTOM = 1 << 4;
        /// Popout aligned left.
        const POPOUT_LEFT = 1 << 5;
        /// Popout aligned right.
        const POPOUT_RIGHT = 1 << 6;
        /// Write popout changes straight to the bound value.
        const UPDATE_ON_POPOUT_CHANGE = 1 << 7;
        /// Colour the input from validation results.
        const USE_AUTOMATIC_STATUS_COLORS = 1 << 8;
        /// Permit negative durations.
        const ALLOW_NEGATIVE = 1 << 9;
        /// Permit durations of a day or more.
        const ALLOW_GREATER_THAN_24_HOURS = 1 << 10;
        /// Show the Accept button.
        const SHOW_ACCEPT_BUTTON = 1 << 11;
        /// Show the Reset button.
        const SHOW_RESET_BUTTON = 1 << 12;
        /// Show the Cancel button.
        const SHOW_CANCEL_BUTTON = 1 << 13;
        /// Show the days column.
        const SHOW_DAYS = 1 << 14;
        /// Show the hours column.
        const SHOW_HOURS = 1 << 15;
        /// Show the minutes column.
        const SHOW_MINUTES = 1 << 16;
        /// Show the seconds column.
        const SHOW_SECONDS = 1 << 17;
        /// Fold days into a total hour count.
        const DISPLAY_DAYS_AS_HOURS = 1 << 18;
        /// Fold hours into a total minute count.
        const DISPLAY_HOURS_AS_MINUTES = 1 << 19;
        /// Fold minutes into a total second count.
        const DISPLAY_MINUTES_AS_SECONDS = 1 << 20;
        /// Reject malformed text before parsing.
        const VALIDATE_TEXT_INPUT = 1 << 21;
    }
}

impl Default for InputDurationOptions {
    fn default() -> Self {
        Self::CLICK_POPOUT
            | Self::POPOUT_BOTTOM
            | Self::POPOUT_LEFT
            | Self::SHOW_RESET_BUTTON
            | Self::UPDATE_ON_POPOUT_CHANGE
            | Self::USE_AUTOMATIC_STATUS_COLORS
            | Self::SHOW_HOURS
            | Self::SHOW_MINUTES
            | Self::SHOW_SECONDS
            | Self::VALIDATE_TEXT_INPUT
    }
}

/// A configuration problem found while normalising options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionWarning {
    /// Autocomplete has no way to open its popout.
    NoPopoutTrigger,
    /// A time-only value has no time column to edit.
    NoTimeColumn,
    /// Two duration options that cannot be combined were both set.
    ConflictingDuration(&'static str, &'static str),
}

impl OptionWarning {
    /// Human readable description used in logs.
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::NoPopoutTrigger => {
                "must set at least one of ClickPopout, TypePopout, or HoverPopout".to_string()
            }
            Self::NoTimeColumn => {
                "must set at least one of ShowHours, ShowMinutes, or ShowSeconds".to_string()
            }
            Self::ConflictingDuration(first, second) => {
                format!("cannot set both {first} and {second}")
            }
        }
    }
}

/// Which of the supported value shapes a date/time input is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeKind {
    /// Date and time of day.
    DateTime,
    /// Calendar date only.
    Date,
    /// Time of day carried as a duration since midnight.
    Span,
    /// Time of day.
    Time,
}

impl DateTimeKind {
    /// `true` for the kinds that carry no date.
    #[must_use]
    pub const fn is_time_only(self) -> bool {
        matches!(self, Self::Span | Self::Time)
    }
}

/// Which of the supported value shapes a duration input is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationKind {
    /// Signed duration with no upper bound.
    Span,
    /// Time of day, `00:00:00` through `23:59:59`.
    TimeOfDay,
}

/// Resolve conflicting autocomplete options.
#[must_use]
pub fn normalize_autocomplete(
    options: InputAutocompleteOptions,
) -> (InputAutocompleteOptions, Vec<OptionWarning>) {
    type O = InputAutocompleteOptions;
    let mut options = options;
    let mut warnings = Vec::new();

    if !options.intersects(O::CLICK_POPOUT | O::TYPE_POPOUT | O::HOVER_POPOUT) {
        warnings.push(OptionWarning::NoPopoutTrigger);
    }

    let triggers = O::AUTO_SELECT_ON_EXIT | O::AUTO_SELECT_ON_INPUT;
    let strategies = O::AUTO_SELECT_CURRENT | O::AUTO_SELECT_EXACT | O::AUTO_SELECT_CLOSEST;
    if !options.intersects(triggers) && options.intersects(strategies) {
        options |= O::AUTO_SELECT_ON_EXIT;
    }

    if options.contains(O::POPOUT_LEFT | O::POPOUT_RIGHT) {
        options.remove(O::POPOUT_RIGHT);
    }
    if options.contains(O::POPOUT_TOP | O::POPOUT_BOTTOM) {
        options.remove(O::POPOUT_TOP);
    }
    if options.contains(O::AUTO_SELECT_CURRENT | O::AUTO_SELECT_EXACT) {
        options.remove(O::AUTO_SELECT_CURRENT);
    }
    if options.contains(O::AUTO_SELECT_CURRENT | O::AUTO_SELECT_CLOSEST) {
        options.remove(O::AUTO_SELECT_CLOSEST);
    }
    if options.contains(O::AUTO_SELECT_EXACT | O::AUTO_SELECT_CLOSEST) {
        options.remove(O::AUTO_SELECT_CLOSEST);
    }

    log_warnings("InputAutocomplete", &warnings);
    (options, warnings)
}

/// Force and strip date/time options that make no sense for `kind`.
#[must_use]
pub fn normalize_datetime(
    options: InputDateTimeOptions,
    kind: DateTimeKind,
) -> (InputDateTimeOptions, Vec<OptionWarning>) {
    type O = InputDateTimeOptions;
    let mut options = options;
    let mut warnings = Vec::new();

    if kind.is_time_only() && !options.intersects(O::TIME_COLUMNS) {
        warnings.push(OptionWarning::NoTimeColumn);
    }
    match kind {
        DateTimeKind::Date => {
            options |= O::SHOW_DATE;
            options.remove(O::TIME_COLUMNS);
        }
        DateTimeKind::Span | DateTimeKind::Time => options.remove(O::SHOW_DATE),
        DateTimeKind::DateTime => {}
    }

    log_warnings("InputDateTime", &warnings);
    (options, warnings)
}

/// Report conflicting duration options and strip the ones `kind` cannot honour.
#[must_use]
pub fn normalize_duration(
    options: InputDurationOptions,
    kind: DurationKind,
) -> (InputDurationOptions, Vec<OptionWarning>) {
    type O = InputDurationOptions;
    const PAIRS: [(O, &str, O, &str); 6] = [
        (O::DISPLAY_DAYS_AS_HOURS, "DisplayDaysAsHours", O::SHOW_DAYS, "ShowDays"),
        (O::DISPLAY_HOURS_AS_MINUTES, "DisplayHoursAsMinutes", O::SHOW_HOURS, "ShowHours"),
        (
            O::DISPLAY_MINUTES_AS_SECONDS,
            "DisplayMinutesAsSeconds",
            O::SHOW_MINUTES,
            "ShowMinutes",
        ),
        (
            O::DISPLAY_DAYS_AS_HOURS,
            "DisplayDaysAsHours",
            O::DISPLAY_HOURS_AS_MINUTES,
            "DisplayHoursAsMinutes",
        ),
        (
            O::DISPLAY_DAYS_AS_HOURS,
            "DisplayDaysAsHours",
            O::DISPLAY_MINUTES_AS_SECONDS,
            "DisplayMinutesAsSeconds",
        ),
        (
            O::DISPLAY_HOURS_AS_MINUTES,
            "DisplayHoursAsMinutes",
            O::DISPLAY_MINUTES_AS_SECONDS,
            "DisplayMinutesAsSeconds",
        ),
    ];

    let mut options = options;
    let warnings: Vec<_> = PAIRS
        .iter()
        .filter(|(first, _, second, _)| options.contains(*first | *second))
        .map(|(_, first, _, second)| OptionWarning::ConflictingDuration(first, second))
        .collect();

    if kind == DurationKind::TimeOfDay {
        options.remove(O::ALLOW_NEGATIVE | O::ALLOW_GREATER_THAN_24_HOURS);
    }

    log_warnings("InputDuration", &warnings);
    (options, warnings)
}

fn log_warnings(widget: &'static str, warnings: &[OptionWarning]) {
    for warning in warnings {
        warn!(widget, message = %warning.message(), "invalid option combination");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_outcome_replaces_background_bits_only() {
        let status = InputStatus::BACKGROUND_WARNING | InputStatus::ICON_DANGER;
        let next = status.with_outcome(true);
        assert_eq!(
            next,
            InputStatus::BACKGROUND_SUCCESS | InputStatus::ICON_DANGER
        );
        assert_eq!(next.with_outcome(false).reset_background(), InputStatus::ICON_DANGER);
    }

    #[test]
    fn autocomplete_strategy_implies_exit_trigger() {
        let (options, warnings) = normalize_autocomplete(
            InputAutocompleteOptions::CLICK_POPOUT | InputAutocompleteOptions::AUTO_SELECT_EXACT,
        );
        assert!(warnings.is_empty());
        assert!(options.contains(InputAutocompleteOptions::AUTO_SELECT_ON_EXIT));
    }

    #[test]
    fn autocomplete_conflicts_keep_the_stronger_option() {
        type O = InputAutocompleteOptions;
        let (options, warnings) = normalize_autocomplete(
            O::POPOUT_LEFT
                | O::POPOUT_RIGHT
                | O::POPOUT_TOP
                | O::POPOUT_BOTTOM
                | O::AUTO_SELECT_CURRENT
                | O::AUTO_SELECT_EXACT
                | O::AUTO_SELECT_CLOSEST,
        );
        assert_eq!(warnings, vec![OptionWarning::NoPopoutTrigger]);
        assert!(options.contains(O::POPOUT_LEFT | O::POPOUT_BOTTOM | O::AUTO_SELECT_EXACT));
        assert!(!options.intersects(
            O::POPOUT_RIGHT | O::POPOUT_TOP | O::AUTO_SELECT_CURRENT | O::AUTO_SELECT_CLOSEST
        ));
    }

    #[test]
    fn datetime_date_kind_forces_calendar_only() {
        let (options, warnings) =
            normalize_datetime(InputDateTimeOptions::SHOW_HOURS, DateTimeKind::Date);
        assert!(warnings.is_empty());
        assert!(options.contains(InputDateTimeOptions::SHOW_DATE));
        assert!(!options.intersects(InputDateTimeOptions::TIME_COLUMNS));
    }

    #[test]
    fn datetime_time_kind_without_columns_warns() {
        let (options, warnings) =
            normalize_datetime(InputDateTimeOptions::SHOW_DATE, DateTimeKind::Time);
        assert_eq!(warnings, vec![OptionWarning::NoTimeColumn]);
        assert!(!options.contains(InputDateTimeOptions::SHOW_DATE));
    }

    #[test]
    fn duration_conflicts_are_reported_and_time_of_day_is_bounded() {
        type O = InputDurationOptions;
        let (options, warnings) = normalize_duration(
            O::DISPLAY_DAYS_AS_HOURS | O::SHOW_DAYS | O::ALLOW_NEGATIVE,
            DurationKind::TimeOfDay,
        );
        assert_eq!(
            warnings,
            vec![OptionWarning::ConflictingDuration(
                "DisplayDaysAsHours",
                "ShowDays"
            )]
        );
        assert!(!options.contains(O::ALLOW_NEGATIVE));
    }
}
