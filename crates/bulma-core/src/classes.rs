//! CSS class composition shared by every widget.

use crate::flags::{InputStatus, TooltipOptions};

/// Ordered, space-joined class builder that drops blank entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    parts: Vec<String>,
}

impl ClassList {
    /// Start from a base class string.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let mut list = Self::default();
        list.push(base);
        list
    }

    /// Append a class, ignoring blank input.
    pub fn push(&mut self, class: impl Into<String>) -> &mut Self {
        let class = class.into();
        let trimmed = class.trim();
        if !trimmed.is_empty() {
            self.parts.push(trimmed.to_string());
        }
        self
    }

    /// Builder form of [`Self::push`].
    #[must_use]
    pub fn with(mut self, class: impl Into<String>) -> Self {
        self.push(class);
        self
    }

    /// Append `class` only when `condition` holds.
    #[must_use]
    pub fn with_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition { self.with(class) } else { self }
    }

    /// Append an optional class.
    #[must_use]
    pub fn with_opt(self, class: Option<impl Into<String>>) -> Self {
        match class {
            Some(class) => self.with(class),
            None => self,
        }
    }

    /// `true` when `class` is one of the space separated entries.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.parts
            .iter()
            .flat_map(|part| part.split_whitespace())
            .any(|part| part == class)
    }

    /// Join into the final attribute value.
    #[must_use]
    pub fn build(&self) -> String {
        self.parts.join(" ")
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build())
    }
}

/// Input background class for a status: danger wins over warning over success.
#[must_use]
pub const fn status_background_class(status: InputStatus) -> Option<&'static str> {
    if status.contains(InputStatus::BACKGROUND_DANGER) {
        Some("is-danger")
    } else if status.contains(InputStatus::BACKGROUND_WARNING) {
        Some("is-warning")
    } else if status.contains(InputStatus::BACKGROUND_SUCCESS) {
        Some("is-success")
    } else {
        None
    }
}

/// Icon text colour for a status, same precedence as the background.
#[must_use]
pub const fn status_icon_class(status: InputStatus) -> Option<&'static str> {
    if status.contains(InputStatus::ICON_DANGER) {
        Some("has-text-danger")
    } else if status.contains(InputStatus::ICON_WARNING) {
        Some("has-text-warning")
    } else if status.contains(InputStatus::ICON_SUCCESS) {
        Some("has-text-success")
    } else {
        None
    }
}

/// `input` plus the status background and caller classes.
#[must_use]
pub fn input_class(status: InputStatus, extra: &str) -> String {
    ClassList::new("input")
        .with_opt(status_background_class(status))
        .with(extra)
        .build()
}

/// Material icon placed on the left of an input.
#[must_use]
pub fn input_icon_class(input_class: &str, status: InputStatus, extra: &str) -> String {
    let small = input_class.split_whitespace().any(|c| c == "is-small");
    ClassList::new("material-icons icon is-left")
        .with_if(small, "is-small")
        .with_opt(status_icon_class(status))
        .with(extra)
        .build()
}

/// Tooltip classes; empty unless the element actually has tooltip text.
#[must_use]
pub fn tooltip_classes(tooltip: Option<&str>, options: TooltipOptions, cursor_help: bool) -> String {
    if tooltip.is_none_or(|text| text.trim().is_empty()) {
        return String::new();
    }
    let side = [
        (TooltipOptions::TOP, "has-tooltip-top"),
        (TooltipOptions::BOTTOM, "has-tooltip-bottom"),
        (TooltipOptions::LEFT, "has-tooltip-left"),
        (TooltipOptions::RIGHT, "has-tooltip-right"),
    ]
    .into_iter()
    .find(|(flag, _)| options.contains(*flag))
    .map(|(_, class)| class);

    ClassList::default()
        .with_if(cursor_help, "is-cursor-help")
        .with_opt(side)
        .with_if(options.contains(TooltipOptions::HAS_ARROW), "has-tooltip-arrow")
        .with_if(options.contains(TooltipOptions::ALWAYS_ACTIVE), "has-tooltip-active")
        .with_if(options.contains(TooltipOptions::MULTILINE), "has-tooltip-multiline")
        .build()
}

/// Vertical anchor of a popout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalPosition {
    /// Not specified.
    Unset,
    /// Below the input.
    Below,
    /// Above the input.
    Above,
}

/// Horizontal anchor of a popout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalPosition {
    /// Not specified.
    Unset,
    /// Aligned left.
    Left,
    /// Aligned right.
    Right,
}

/// Everything the popout class builders need, independent of the option set type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopoutLayout {
    /// Opens on hover.
    pub hoverable: bool,
    /// Currently open.
    pub open: bool,
    /// The host input is disabled or read-only.
    pub inactive: bool,
    /// Vertical anchor.
    pub vertical: VerticalPosition,
    /// Horizontal anchor.
    pub horizontal: HorizontalPosition,
}

impl PopoutLayout {
    /// Resolve positions from the four flags, bottom and left taking precedence.
    #[must_use]
    pub const fn positions(
        top: bool,
        bottom: bool,
        left: bool,
        right: bool,
    ) -> (VerticalPosition, HorizontalPosition) {
        let vertical = if bottom {
            VerticalPosition::Below
        } else if top {
            VerticalPosition::Above
        } else {
            VerticalPosition::Unset
        };
        let horizontal = if left {
            HorizontalPosition::Left
        } else if right {
            HorizontalPosition::Right
        } else {
            HorizontalPosition::Unset
        };
        (vertical, horizontal)
    }

    /// `datetimepicker` container used by the date/time and duration inputs.
    #[must_use]
    pub fn picker_class(&self, extra: &str) -> String {
        ClassList::new("datetimepicker")
            .with_if(self.hoverable, "is-hoverable")
            .with_if(self.open && !self.inactive, "is-active")
            .with_opt(match self.vertical {
                VerticalPosition::Below => Some("datetimepicker-below"),
                VerticalPosition::Above => Some("datetimepicker-above"),
                VerticalPosition::Unset => None,
            })
            .with_opt(match self.horizontal {
                HorizontalPosition::Left => Some("datetimepicker-left"),
                HorizontalPosition::Right => Some("datetimepicker-right"),
                HorizontalPosition::Unset => None,
            })
            .with(extra)
            .build()
    }

    /// `dropdown` container used by the autocomplete input.
    #[must_use]
    pub fn dropdown_class(&self, extra: &str) -> String {
        ClassList::new("dropdown dropdown-block")
            .with_if(self.open && !self.inactive, "is-active")
            .with_if(self.vertical == VerticalPosition::Above, "is-up")
            .with_if(self.horizontal == HorizontalPosition::Right, "is-right")
            .with_if(self.hoverable, "is-hoverable")
            .with(extra)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_skips_blank_entries() {
        let classes = ClassList::new("button")
            .with("")
            .with_if(true, " is-primary ")
            .with_if(false, "is-hidden")
            .with_opt(None::<&str>)
            .build();
        assert_eq!(classes, "button is-primary");
    }

    #[test]
    fn status_precedence_prefers_danger() {
        let status = InputStatus::BACKGROUND_SUCCESS
            | InputStatus::BACKGROUND_DANGER
            | InputStatus::ICON_WARNING;
        assert_eq!(input_class(status, "is-small"), "input is-danger is-small");
        assert_eq!(
            input_icon_class("input is-small", status, ""),
            "material-icons icon is-left is-small has-text-warning"
        );
    }

    #[test]
    fn tooltip_requires_text() {
        let options = TooltipOptions::RIGHT | TooltipOptions::TOP | TooltipOptions::HAS_ARROW;
        assert_eq!(tooltip_classes(None, options, true), "");
        assert_eq!(tooltip_classes(Some(" "), options, true), "");
        assert_eq!(
            tooltip_classes(Some("help"), options, true),
            "is-cursor-help has-tooltip-top has-tooltip-arrow"
        );
    }

    #[test]
    fn popout_classes_follow_layout() {
        let (vertical, horizontal) = PopoutLayout::positions(true, false, false, true);
        let layout = PopoutLayout {
            hoverable: false,
            open: true,
            inactive: false,
            vertical,
            horizontal,
        };
        assert_eq!(
            layout.picker_class(""),
            "datetimepicker is-active datetimepicker-above datetimepicker-right"
        );
        assert_eq!(layout.dropdown_class("x"), "dropdown dropdown-block is-active is-up is-right x");

        let inactive = PopoutLayout {
            inactive: true,
            ..layout
        };
        assert!(!ClassList::new(inactive.picker_class("")).contains("is-active"));
    }
}
