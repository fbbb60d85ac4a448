//! Buttons, icons, notifications, progress bars and tables.

use crate::attributes::Attributes;
use crate::classes::{tooltip_classes, ClassList};
use crate::color::BulmaColor;
use crate::flags::TooltipOptions;

/// Default prompt of the delete confirmation modal.
pub const DELETE_CONFIRMATION: &str = "Are you sure you would like to delete this entry?";

/// Text, icon and colour of a button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonPreset {
    /// Caption.
    pub text: String,
    /// Material icon.
    pub icon: Option<String>,
    /// Button colour.
    pub color: BulmaColor,
}

impl ButtonPreset {
    /// Green "Submit" with a save icon.
    #[must_use]
    pub fn submit() -> Self {
        Self {
            text: "Submit".to_string(),
            icon: Some("save".to_string()),
            color: BulmaColor::Green,
        }
    }

    /// Red "Delete" with a bin icon.
    #[must_use]
    pub fn delete() -> Self {
        Self {
            text: "Delete".to_string(),
            icon: Some("delete".to_string()),
            color: BulmaColor::Red,
        }
    }

    /// `button` + colour + caller class.
    #[must_use]
    pub fn class(&self, attrs: &Attributes) -> String {
        button_class(self.color, attrs)
    }
}

/// `button` + colour + caller class.
#[must_use]
pub fn button_class(color: BulmaColor, attrs: &Attributes) -> String {
    ClassList::new("button")
        .with_opt(color.modifier())
        .with(attrs.class("class"))
        .build()
}

/// Two-step delete: the first click opens the modal, confirming closes it
/// and reports that the delete should go ahead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    shown: bool,
}

impl DeleteConfirmation {
    /// `true` while the modal is open.
    #[must_use]
    pub const fn is_shown(self) -> bool {
        self.shown
    }

    /// Delete button clicked.
    pub fn request(&mut self) {
        self.shown = true;
    }

    /// Confirm button clicked; returns whether the delete callback should run.
    pub fn confirm(&mut self) -> bool {
        std::mem::replace(&mut self.shown, false)
    }

    /// Modal dismissed.
    pub fn cancel(&mut self) {
        self.shown = false;
    }
}

/// Icon name for a boolean.
#[must_use]
pub const fn boolean_icon(value: bool) -> &'static str {
    if value { "check_circle" } else { "cancel" }
}

/// `material-icons` coloured green or red.
#[must_use]
pub fn boolean_icon_class(value: bool, attrs: &Attributes) -> String {
    ClassList::new("material-icons")
        .with(if value { "has-text-success" } else { "has-text-danger" })
        .with(attrs.class("class"))
        .build()
}

/// Visibility of a notification or message that can be closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dismissable {
    hidden: bool,
}

impl Dismissable {
    /// Start hidden or visible.
    #[must_use]
    pub const fn new(hidden: bool) -> Self {
        Self { hidden }
    }

    /// `true` once dismissed.
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        self.hidden
    }

    /// Delete button clicked.
    pub fn dismiss(&mut self) {
        self.hidden = true;
    }
}

/// `notification` + hidden + colour.
#[must_use]
pub fn notification_class(hidden: bool, color: BulmaColor, attrs: &Attributes) -> String {
    ClassList::new("notification")
        .with_if(hidden, "is-hidden")
        .with_opt(color.modifier())
        .with(attrs.class("class"))
        .build()
}

/// `progress` + colour.
#[must_use]
pub fn progress_class(color: BulmaColor, attrs: &Attributes) -> String {
    ClassList::new("progress")
        .with_opt(color.modifier())
        .with(attrs.class("class"))
        .build()
}

/// Progress value clamped to `max`; `None` renders an indeterminate bar.
#[must_use]
pub fn progress_value(current: Option<u32>, max: u32) -> Option<u32> {
    current.map(|value| value.min(max))
}

/// `table` + striped.
#[must_use]
pub fn table_class(striped: bool, attrs: &Attributes) -> String {
    ClassList::new("table")
        .with_if(striped, "is-striped")
        .with(attrs.class("class"))
        .build()
}

/// Class of a row or cell: only the caller's class.
#[must_use]
pub fn table_cell_class(attrs: &Attributes) -> String {
    attrs.class("class").to_string()
}

/// Tooltip span inside a table header.
#[must_use]
pub fn table_header_tooltip_class(attrs: &Attributes, options: TooltipOptions) -> String {
    ClassList::new(tooltip_classes(attrs.value("data-tooltip"), options, true))
        .with(attrs.class("tooltip-class"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_carry_colors() {
        let attrs = Attributes::new();
        assert_eq!(ButtonPreset::submit().class(&attrs), "button is-success");
        assert_eq!(ButtonPreset::delete().class(&attrs), "button is-danger");
        assert_eq!(button_class(BulmaColor::Default, &attrs.with("class", "is-small")), "button is-small");
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut confirm = DeleteConfirmation::default();
        assert!(!confirm.confirm());
        confirm.request();
        assert!(confirm.is_shown());
        assert!(confirm.confirm());
        assert!(!confirm.is_shown());
        confirm.request();
        confirm.cancel();
        assert!(!confirm.confirm());
    }

    #[test]
    fn boolean_icons() {
        assert_eq!(boolean_icon(true), "check_circle");
        assert_eq!(boolean_icon_class(false, &Attributes::new()), "material-icons has-text-danger");
    }

    #[test]
    fn notifications_hide_after_dismiss() {
        let mut state = Dismissable::new(false);
        state.dismiss();
        assert_eq!(
            notification_class(state.is_hidden(), BulmaColor::Cyan, &Attributes::new()),
            "notification is-hidden is-info"
        );
    }

    #[test]
    fn progress_and_tables() {
        assert_eq!(progress_value(Some(150), 100), Some(100));
        assert_eq!(progress_value(None, 100), None);
        assert_eq!(progress_class(BulmaColor::Default, &Attributes::new()), "progress");
        assert_eq!(table_class(true, &Attributes::new()), "table is-striped");
        let attrs = Attributes::new().with("data-tooltip", "Size on disk");
        assert_eq!(
            table_header_tooltip_class(&attrs, TooltipOptions::TOP),
            "is-cursor-help has-tooltip-top"
        );
        assert_eq!(table_header_tooltip_class(&Attributes::new(), TooltipOptions::TOP), "");
    }
}
