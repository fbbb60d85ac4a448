//! Autocomplete state: filtering, keyboard highlight and match selection.

use std::fmt;
use std::rc::Rc;

use crate::attributes::Attributes;
use crate::classes::{ClassList, PopoutLayout, input_class, input_icon_class};
use crate::error::FieldError;
use crate::flags::{InputAutocompleteOptions, InputStatus, OptionWarning, normalize_autocomplete};

type O = InputAutocompleteOptions;

/// Keys whose browser default is suppressed while the input has focus.
pub const PREVENT_DEFAULT_KEYS: [&str; 4] = ["Escape", "ArrowDown", "ArrowUp", "Enter"];

/// Display text of an item.
pub type DisplayFn<T> = Rc<dyn Fn(&T) -> String>;
/// `true` when an item should be listed for the typed text.
pub type FilterFn<T> = Rc<dyn Fn(&T, &str) -> bool>;
/// Item identity.
pub type EqualityFn<T> = Rc<dyn Fn(&T, &T) -> bool>;

/// Which rule picks the value from typed text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStrategy {
    /// The highlighted item.
    Current,
    /// Case-insensitive equality with the display text.
    Exact,
    /// The best ranked display text, see [`rank_closest`].
    Closest,
}

impl MatchStrategy {
    /// Strategy configured in `options`, in current/exact/closest priority.
    #[must_use]
    pub const fn configured(options: InputAutocompleteOptions) -> Option<Self> {
        if options.contains(O::AUTO_SELECT_CURRENT) {
            Some(Self::Current)
        } else if options.contains(O::AUTO_SELECT_EXACT) {
            Some(Self::Exact)
        } else if options.contains(O::AUTO_SELECT_CLOSEST) {
            Some(Self::Closest)
        } else {
            None
        }
    }
}

/// Rank of `display` against `query` for closest matching; lower is better.
///
/// Exact matches come first, then prefixes, then substrings (shorter text
/// first in both), then the longest shared prefix.
#[must_use]
pub fn rank_closest(display: &str, query: &str) -> (u8, usize) {
    let display = display.to_lowercase();
    let query = query.trim().to_lowercase();
    if display == query {
        (0, 0)
    } else if display.starts_with(&query) {
        (1, display.len())
    } else if display.contains(&query) {
        (2, display.len())
    } else {
        let shared = display
            .chars()
            .zip(query.chars())
            .take_while(|(a, b)| a == b)
            .count();
        (3, usize::MAX - shared)
    }
}

/// Autocomplete state for items of type `T`.
pub struct Autocomplete<T> {
    field: String,
    options: InputAutocompleteOptions,
    nullable: bool,
    display_count: Option<usize>,
    items: Vec<T>,
    display: DisplayFn<T>,
    filter: Option<FilterFn<T>>,
    are_equal: EqualityFn<T>,
    selected: Option<T>,
    highlighted: Option<T>,
    input_text: Option<String>,
    popout_open: bool,
    blur_suppressed: bool,
    status: InputStatus,
    error: Option<FieldError>,
    warnings: Vec<OptionWarning>,
}

impl<T: Clone> Clone for Autocomplete<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            options: self.options,
            nullable: self.nullable,
            display_count: self.display_count,
            items: self.items.clone(),
            display: Rc::clone(&self.display),
            filter: self.filter.clone(),
            are_equal: Rc::clone(&self.are_equal),
            selected: self.selected.clone(),
            highlighted: self.highlighted.clone(),
            input_text: self.input_text.clone(),
            popout_open: self.popout_open,
            blur_suppressed: self.blur_suppressed,
            status: self.status,
            error: self.error.clone(),
            warnings: self.warnings.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Autocomplete<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autocomplete")
            .field("field", &self.field)
            .field("options", &self.options)
            .field("items", &self.items)
            .field("selected", &self.selected)
            .field("highlighted", &self.highlighted)
            .field("popout_open", &self.popout_open)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq + 'static> Autocomplete<T> {
    /// Create the state with `PartialEq` identity; options are normalised here.
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        options: InputAutocompleteOptions,
        display: impl Fn(&T) -> String + 'static,
    ) -> Self {
        let (options, warnings) = normalize_autocomplete(options);
        Self {
            field: field.into(),
            options,
            nullable: true,
            display_count: None,
            items: Vec::new(),
            display: Rc::new(display),
            filter: None,
            are_equal: Rc::new(|a: &T, b: &T| a == b),
            selected: None,
            highlighted: None,
            input_text: None,
            popout_open: false,
            blur_suppressed: false,
            status: InputStatus::empty(),
            error: None,
            warnings,
        }
    }
}

impl<T: Clone> Autocomplete<T> {
    /// Replace the identity function.
    #[must_use]
    pub fn with_equality(mut self, are_equal: impl Fn(&T, &T) -> bool + 'static) -> Self {
        self.are_equal = Rc::new(are_equal);
        self
    }

    /// List only items accepted by `filter` for the typed text.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Fn(&T, &str) -> bool + 'static) -> Self {
        self.filter = Some(Rc::new(filter));
        self
    }

    /// Show at most `count` items; zero shows all.
    #[must_use]
    pub fn with_display_count(mut self, count: usize) -> Self {
        self.display_count = Some(count);
        self
    }

    /// Whether a blank value is acceptable.
    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Start from a caller supplied status.
    #[must_use]
    pub fn with_status(mut self, status: InputStatus) -> Self {
        self.status = status;
        self
    }

    /// Replace the item list.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Replace the bound value from outside; the highlight follows it.
    pub fn set_selected(&mut self, value: Option<T>) {
        self.highlighted.clone_from(&value);
        self.selected = value;
    }

    /// Bound value.
    #[must_use]
    pub const fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Keyboard highlighted item.
    #[must_use]
    pub const fn highlighted(&self) -> Option<&T> {
        self.highlighted.as_ref()
    }

    /// Effective options.
    #[must_use]
    pub const fn options(&self) -> InputAutocompleteOptions {
        self.options
    }

    /// Status colours.
    #[must_use]
    pub const fn status(&self) -> InputStatus {
        self.status
    }

    /// Last match failure.
    #[must_use]
    pub const fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// `true` while the dropdown is shown.
    #[must_use]
    pub const fn is_popout_open(&self) -> bool {
        self.popout_open
    }

    /// Display text of `item`.
    #[must_use]
    pub fn display(&self, item: &T) -> String {
        (self.display)(item)
    }

    /// Option combinations that were dropped while normalising.
    #[must_use]
    pub fn warnings(&self) -> &[OptionWarning] {
        &self.warnings
    }

    /// Text for the input box: what the user is typing, else the selection.
    #[must_use]
    pub fn text(&self) -> String {
        match (&self.input_text, &self.selected) {
            (Some(text), _) => text.clone(),
            (None, Some(selected)) => self.display(selected),
            (None, None) => String::new(),
        }
    }

    fn same(&self, a: &T, b: &T) -> bool {
        (self.are_equal)(a, b)
    }

    fn auto_status(&self) -> bool {
        self.options.contains(O::USE_AUTOMATIC_STATUS_COLORS)
    }

    /// Items listed in the dropdown: filtered by typed text, then capped.
    #[must_use]
    pub fn display_items(&self) -> Vec<&T> {
        let filtered = self.items.iter().filter(|item| {
            match (&self.filter, &self.input_text) {
                (Some(filter), Some(text)) => filter(*item, text),
                _ => true,
            }
        });
        match self.display_count {
            Some(count) if count > 0 => filtered.take(count).collect(),
            _ => filtered.collect(),
        }
    }

    /// Move the highlight down, wrapping to the first item.
    pub fn highlight_next(&mut self) {
        let items = self.display_items();
        let next = match &self.highlighted {
            None => items.first().copied(),
            Some(current) => items
                .iter()
                .position(|item| self.same(item, current))
                .and_then(|index| items.get(index + 1))
                .or_else(|| items.first())
                .copied(),
        };
        self.highlighted = next.cloned();
    }

    /// Move the highlight up, wrapping to the last item.
    pub fn highlight_previous(&mut self) {
        let items = self.display_items();
        let previous = match &self.highlighted {
            None => items.last().copied(),
            Some(current) => match items.iter().position(|item| self.same(item, current)) {
                Some(index) if index > 0 => items.get(index - 1).copied(),
                _ => items.last().copied(),
            },
        };
        self.highlighted = previous.cloned();
    }

    /// Resolve `text` with `strategy`, returning `(success, value)`.
    #[must_use]
    pub fn find_match(&self, text: Option<&str>, strategy: Option<MatchStrategy>) -> (bool, Option<T>) {
        let blank = text.is_none_or(|text| text.trim().is_empty());
        match strategy {
            Some(MatchStrategy::Current) if self.highlighted.is_some() => {
                (true, self.highlighted.clone())
            }
            Some(MatchStrategy::Exact) => {
                let found = text.and_then(|text| {
                    self.display_items()
                        .into_iter()
                        .find(|item| self.display(item).to_lowercase() == text.to_lowercase())
                        .cloned()
                });
                (found.is_some() || (self.nullable && blank), found)
            }
            Some(MatchStrategy::Closest) => {
                let query = text.unwrap_or_default();
                let found = self
                    .display_items()
                    .into_iter()
                    .enumerate()
                    .min_by_key(|(index, item)| (rank_closest(&self.display(item), query), *index))
                    .map(|(_, item)| item.clone());
                (found.is_some() || self.nullable, found)
            }
            _ => (false, None),
        }
    }

    fn apply_selection(&mut self, value: Option<T>, close: bool, success: bool) {
        self.selected = value;
        self.input_text = None;
        if close {
            self.popout_open = false;
        }
        if self.auto_status() {
            self.status = self.status.with_outcome(success);
        }
        self.error = if success {
            None
        } else {
            Some(FieldError::NoMatch {
                field: self.field.clone(),
            })
        };
    }

    /// Resolve typed text into the bound value.
    ///
    /// Uses the configured strategy when it is exact or closest, otherwise exact matching.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NoMatch`] and clears the highlight when nothing matches.
    pub fn set_text(&mut self, text: &str) -> Result<(), FieldError> {
        let strategy = if self.options.intersects(O::AUTO_SELECT_EXACT | O::AUTO_SELECT_CLOSEST) {
            MatchStrategy::configured(self.options)
        } else {
            Some(MatchStrategy::Exact)
        };
        let (success, found) = self.find_match(Some(text), strategy);
        if self.auto_status() {
            self.status = self.status.with_outcome(success);
        }
        if success {
            self.highlighted.clone_from(&found);
            self.selected = found;
            self.error = None;
            Ok(())
        } else {
            self.highlighted = None;
            let err = FieldError::NoMatch {
                field: self.field.clone(),
            };
            self.error = Some(err.clone());
            Err(err)
        }
    }

    /// A dropdown item was clicked.
    pub fn select(&mut self, item: T) {
        self.highlighted = Some(item.clone());
        self.apply_selection(Some(item), true, true);
    }

    /// Focus or click on the input.
    pub fn on_focus(&mut self) {
        if self.options.contains(O::CLICK_POPOUT) && !self.items.is_empty() {
            self.popout_open = true;
        }
    }

    /// Focus left the input.
    pub fn on_blur(&mut self) {
        if self.blur_suppressed {
            return;
        }
        self.popout_open = false;
        if self.options.contains(O::AUTO_SELECT_ON_EXIT) && self.input_text.is_some() {
            let text = self.input_text.clone();
            let (success, found) = self.find_match(text.as_deref(), MatchStrategy::configured(self.options));
            self.apply_selection(found, false, success);
        }
    }

    /// Text typed into the input.
    ///
    /// # Errors
    ///
    /// With `AUTO_SELECT_ON_INPUT`, propagates [`Self::set_text`] failures.
    pub fn on_input(&mut self, text: &str) -> Result<(), FieldError> {
        if self.options.contains(O::TYPE_POPOUT) && !self.items.is_empty() {
            self.popout_open = true;
        }
        self.input_text = Some(text.to_string());
        if self.options.contains(O::AUTO_SELECT_ON_INPUT) {
            self.set_text(text)?;
        }
        Ok(())
    }

    /// `keydown`; returns whether the browser default should be prevented.
    pub fn on_key_down(&mut self, code: &str) -> bool {
        let arrow = matches!(code, "ArrowDown" | "ArrowUp");
        if arrow && self.options.contains(O::TYPE_POPOUT) && !self.items.is_empty() {
            self.popout_open = true;
        }
        if self.popout_open && code == "ArrowDown" {
            self.highlight_next();
        } else if self.popout_open && code == "ArrowUp" {
            self.highlight_previous();
        }
        PREVENT_DEFAULT_KEYS.contains(&code)
    }

    /// `keyup`; Enter selects the highlighted item, Enter and Escape close.
    pub fn on_key_up(&mut self, code: &str) {
        if code == "Enter" {
            let text = self.input_text.clone();
            let (success, found) = self.find_match(text.as_deref(), Some(MatchStrategy::Current));
            self.apply_selection(found, true, success);
        }
        if matches!(code, "Enter" | "Escape") {
            self.popout_open = false;
        }
    }

    /// Mouse pressed on the dropdown; the following blur must not close it.
    pub fn on_mouse_down(&mut self) {
        self.blur_suppressed = true;
    }

    /// Mouse released on the dropdown.
    pub fn on_mouse_up(&mut self) {
        self.blur_suppressed = false;
    }

    /// Class of one dropdown entry.
    #[must_use]
    pub fn item_class(&self, item: &T, attrs: &Attributes) -> String {
        let highlighted = self
            .highlighted
            .as_ref()
            .is_some_and(|current| self.same(item, current));
        let selected = self
            .selected
            .as_ref()
            .is_some_and(|current| self.same(item, current));
        ClassList::new("dropdown-item is-clickable")
            .with_if(highlighted, "has-background-default")
            .with_if(selected, "has-text-success")
            .with(attrs.class("dropdown-item-class"))
            .build()
    }

    /// Class of the dropdown container.
    #[must_use]
    pub fn dropdown_class(&self, attrs: &Attributes) -> String {
        let (vertical, horizontal) = PopoutLayout::positions(
            self.options.contains(O::POPOUT_TOP),
            self.options.contains(O::POPOUT_BOTTOM),
            self.options.contains(O::POPOUT_LEFT),
            self.options.contains(O::POPOUT_RIGHT),
        );
        PopoutLayout {
            hoverable: self.options.contains(O::HOVER_POPOUT),
            open: self.popout_open,
            inactive: attrs.is_disabled(),
            vertical,
            horizontal,
        }
        .dropdown_class(attrs.class("dropdown-class"))
    }

    /// Class of the `<input>`.
    #[must_use]
    pub fn input_class(&self, extra: &str) -> String {
        input_class(self.status, extra)
    }

    /// Class of the left icon.
    #[must_use]
    pub fn icon_class(&self, attrs: &Attributes, extra: &str) -> String {
        input_icon_class(&self.input_class(extra), self.status, attrs.class("icon-class"))
    }
}

/// `dropdown-trigger` plus caller classes.
#[must_use]
pub fn trigger_class(attrs: &Attributes) -> String {
    ClassList::new("dropdown-trigger")
        .with(attrs.class("dropdown-trigger-class"))
        .build()
}

/// `dropdown-menu p-0` plus caller classes.
#[must_use]
pub fn menu_class(attrs: &Attributes) -> String {
    ClassList::new("dropdown-menu p-0")
        .with(attrs.class("dropdown-menu-class"))
        .build()
}

/// Selected value tag shown under the input.
#[must_use]
pub fn tag_class(attrs: &Attributes) -> String {
    ClassList::new("tag is-success mt-1")
        .with(attrs.class("tag-class"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit(options: InputAutocompleteOptions) -> Autocomplete<String> {
        let mut auto = Autocomplete::new("Fruit", options, |item: &String| item.clone())
            .with_filter(|item: &String, text: &str| item.to_lowercase().contains(&text.to_lowercase()));
        auto.set_items(
            ["Apple", "Apricot", "Banana", "Cherry"]
                .into_iter()
                .map(String::from)
                .collect(),
        );
        auto
    }

    #[test]
    fn missing_popout_trigger_is_kept_as_a_warning() {
        let silent = fruit(O::AUTO_SELECT_EXACT);
        assert_eq!(silent.warnings(), [OptionWarning::NoPopoutTrigger]);
        assert!(fruit(InputAutocompleteOptions::default()).warnings().is_empty());
    }

    #[test]
    fn display_items_filter_then_cap() {
        let mut auto = fruit(InputAutocompleteOptions::default()).with_display_count(1);
        assert_eq!(auto.display_items().len(), 1);
        auto.on_input("an").expect("typing never fails without auto select");
        assert_eq!(auto.display_items(), vec![&"Banana".to_string()]);
    }

    #[test]
    fn highlight_wraps_both_ways() {
        let mut auto = fruit(InputAutocompleteOptions::default());
        auto.highlight_previous();
        assert_eq!(auto.highlighted().map(String::as_str), Some("Cherry"));
        auto.highlight_next();
        assert_eq!(auto.highlighted().map(String::as_str), Some("Apple"));
        auto.highlight_previous();
        assert_eq!(auto.highlighted().map(String::as_str), Some("Cherry"));
    }

    #[test]
    fn arrow_keys_open_and_move() {
        let mut auto = fruit(InputAutocompleteOptions::default());
        assert!(auto.on_key_down("ArrowDown"));
        assert!(auto.is_popout_open());
        assert_eq!(auto.highlighted().map(String::as_str), Some("Apple"));
        assert!(!auto.on_key_down("KeyA"));

        auto.on_key_up("Enter");
        assert_eq!(auto.selected().map(String::as_str), Some("Apple"));
        assert!(!auto.is_popout_open());
        assert!(auto.status().contains(InputStatus::BACKGROUND_SUCCESS));
    }

    #[test]
    fn exact_parse_is_case_insensitive() {
        let mut auto = fruit(InputAutocompleteOptions::default()).with_nullable(false);
        auto.set_text("banana").expect("exact match");
        assert_eq!(auto.selected().map(String::as_str), Some("Banana"));

        let err = auto.set_text("kiwi").expect_err("no match");
        assert_eq!(err.to_string(), "No match could be found in the Fruit field.");
        assert!(auto.highlighted().is_none());
        assert!(auto.status().contains(InputStatus::BACKGROUND_DANGER));
    }

    #[test]
    fn closest_prefers_prefix_over_substring() {
        assert!(rank_closest("Apple", "ap") < rank_closest("Grape", "ap"));
        assert!(rank_closest("Apple", "apple") < rank_closest("Apple pie", "apple"));

        let auto = fruit(InputAutocompleteOptions::CLICK_POPOUT | O::AUTO_SELECT_CLOSEST);
        let (success, found) = auto.find_match(Some("apr"), Some(MatchStrategy::Closest));
        assert!(success);
        assert_eq!(found.as_deref(), Some("Apricot"));
    }

    #[test]
    fn blur_selects_with_exit_trigger_unless_suppressed() {
        let mut auto = fruit(InputAutocompleteOptions::CLICK_POPOUT | O::TYPE_POPOUT | O::AUTO_SELECT_EXACT);
        assert!(auto.options().contains(O::AUTO_SELECT_ON_EXIT));

        auto.on_input("cherry").expect("typing");
        auto.on_mouse_down();
        auto.on_blur();
        assert!(auto.is_popout_open());
        assert!(auto.selected().is_none());

        auto.on_mouse_up();
        auto.on_blur();
        assert!(!auto.is_popout_open());
        assert_eq!(auto.selected().map(String::as_str), Some("Cherry"));
        assert_eq!(auto.text(), "Cherry");
    }

    #[test]
    fn item_classes_mark_highlight_and_selection() {
        let mut auto = fruit(InputAutocompleteOptions::default());
        auto.select("Banana".to_string());
        let attrs = Attributes::new();
        assert_eq!(
            auto.item_class(&"Banana".to_string(), &attrs),
            "dropdown-item is-clickable has-background-default has-text-success"
        );
        assert_eq!(auto.item_class(&"Apple".to_string(), &attrs), "dropdown-item is-clickable");
        assert_eq!(tag_class(&attrs), "tag is-success mt-1");
        assert_eq!(menu_class(&attrs), "dropdown-menu p-0");
    }
}
