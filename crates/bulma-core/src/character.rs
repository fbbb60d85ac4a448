//! Character grid picker.

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::color::BulmaColor;
use crate::error::FieldError;

/// Keys the grid lets through to the browser.
pub const PASS_THROUGH_KEYS: [&str; 4] = ["Escape", "Tab", "Enter", "NumpadEnter"];

/// Default grid contents, `A` through `Z`.
#[must_use]
pub fn alphabet() -> Vec<char> {
    ('A'..='Z').collect()
}

/// Split `items` round-robin into `count` columns (`index % count`).
#[must_use]
pub fn split_columns<T: Clone>(items: &[T], count: usize) -> Vec<Vec<T>> {
    let count = count.max(1);
    let mut columns: Vec<Vec<T>> = vec![Vec::new(); count.min(items.len())];
    for (index, item) in items.iter().enumerate() {
        columns[index % count].push(item.clone());
    }
    columns
}

fn same_letter(a: char, b: char) -> bool {
    a.to_uppercase().eq(b.to_uppercase())
}

fn to_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

fn to_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Parse text bound to a character field.
///
/// # Errors
///
/// Returns [`FieldError::InvalidCharacter`] for anything but a single character.
pub fn parse_char(text: &str, nullable: bool, field: &str) -> Result<Option<char>, FieldError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (None, _) if nullable => Ok(None),
        (None, _) => Ok(Some('\0')),
        (Some(c), None) => Ok(Some(c)),
        _ => Err(FieldError::InvalidCharacter {
            field: field.to_string(),
        }),
    }
}

/// Visual options of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterStyle {
    /// Render the case toggle.
    pub show_case_change: bool,
    /// Rounded buttons.
    pub rounded: bool,
    /// Bordered buttons.
    pub bordered: bool,
    /// Colour of the selected button.
    pub active_color: BulmaColor,
}

impl Default for CharacterStyle {
    fn default() -> Self {
        Self {
            show_case_change: true,
            rounded: true,
            bordered: true,
            active_color: BulmaColor::Turquoise,
        }
    }
}

/// Selection state of a character grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterGrid {
    characters: Vec<char>,
    columns: usize,
    nullable: bool,
    upper_case: bool,
    value: Option<char>,
    /// Visual options.
    pub style: CharacterStyle,
}

impl CharacterGrid {
    /// Create a grid; `columns` is clamped to `1..=12`.
    ///
    /// The case mode starts lower when the initial value is a lowercase letter.
    #[must_use]
    pub fn new(characters: Vec<char>, columns: usize, nullable: bool, value: Option<char>) -> Self {
        let upper_case = !value.is_some_and(|c| c != '\0' && c.is_lowercase());
        Self {
            characters,
            columns: columns.clamp(1, 12),
            nullable,
            upper_case,
            value: value.filter(|c| *c != '\0'),
            style: CharacterStyle::default(),
        }
    }

    /// Selected character.
    #[must_use]
    pub const fn value(&self) -> Option<char> {
        self.value
    }

    /// Replace the selection from outside.
    pub fn set_value(&mut self, value: Option<char>) {
        self.value = value.filter(|c| *c != '\0');
    }

    /// `true` while showing upper case.
    #[must_use]
    pub const fn is_upper_case(&self) -> bool {
        self.upper_case
    }

    /// Grid columns as displayed.
    #[must_use]
    pub fn columns(&self) -> Vec<Vec<char>> {
        split_columns(&self.characters, self.columns)
    }

    /// A character rendered in the current case mode.
    #[must_use]
    pub fn display(&self, c: char) -> char {
        if self.upper_case { to_upper(c) } else { to_lower(c) }
    }

    /// A button was clicked; returns whether the value changed.
    pub fn click(&mut self, character: char, disabled: bool) -> bool {
        if disabled {
            return false;
        }
        let same = self.value.is_some_and(|current| same_letter(character, current));
        if !self.nullable && same {
            return false;
        }
        let next = if character == '\0' || same {
            None
        } else if (self.upper_case && character.is_uppercase())
            || (!self.upper_case && character.is_lowercase())
        {
            Some(character)
        } else {
            Some(self.display(character))
        };
        let changed = next != self.value;
        self.value = next;
        changed
    }

    /// Flip the case mode and convert the selection.
    pub fn toggle_case(&mut self, disabled: bool) {
        self.upper_case = !self.upper_case;
        if disabled {
            return;
        }
        if let Some(current) = self.value {
            if self.upper_case && current.is_lowercase() {
                self.value = Some(to_upper(current));
            } else if !self.upper_case && current.is_uppercase() {
                self.value = Some(to_lower(current));
            }
        }
    }

    /// Arrow key navigation; returns whether the browser default should be prevented.
    pub fn on_key_down(&mut self, code: &str, disabled: bool) -> bool {
        let prevent = !PASS_THROUGH_KEYS.contains(&code);
        if disabled {
            return prevent;
        }
        let Some(current) = self.value else {
            return prevent;
        };
        let columns = self.columns();
        let Some((col, row)) = columns.iter().enumerate().find_map(|(col, items)| {
            items
                .iter()
                .position(|c| same_letter(*c, current))
                .map(|row| (col, row))
        }) else {
            return prevent;
        };
        let column = &columns[col];
        let across = |target: &Vec<char>| target.get(row).or_else(|| target.last()).copied();

        let next = match code {
            "ArrowUp" if column.len() > 1 => column.get(if row == 0 { column.len() - 1 } else { row - 1 }).copied(),
            "ArrowDown" if column.len() > 1 => column.get(if row + 1 == column.len() { 0 } else { row + 1 }).copied(),
            "ArrowLeft" if columns.len() > 1 => {
                let target = if col == 0 { columns.len() - 1 } else { col - 1 };
                across(&columns[target])
            }
            "ArrowRight" if columns.len() > 1 => {
                let target = if col + 1 == columns.len() { 0 } else { col + 1 };
                across(&columns[target])
            }
            _ => None,
        };
        if next.is_some() {
            self.value = next;
        }
        prevent
    }

    /// Class of one grid button.
    #[must_use]
    pub fn button_class(&self, character: char, attrs: &Attributes) -> String {
        let active = self.style.active_color != BulmaColor::Default
            && character != '\0'
            && self.value.is_some_and(|current| same_letter(current, character));
        ClassList::new("button is-fullwidth mb-3")
            .with_if(attrs.is_disabled(), "is-disabled")
            .with_if(active, self.style.active_color.is_class())
            .with_if(self.style.rounded, "is-rounded")
            .with_if(self.style.bordered, "is-bordered")
            .with(attrs.class("button-class"))
            .build()
    }
}

/// `columns mb-0` plus caller classes.
#[must_use]
pub fn columns_class(attrs: &Attributes) -> String {
    ClassList::new("columns mb-0")
        .with(attrs.class("columns-class"))
        .build()
}

/// `column pb-0` plus caller classes.
#[must_use]
pub fn column_class(attrs: &Attributes) -> String {
    ClassList::new("column pb-0")
        .with(attrs.class("column-class"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_round_robin() {
        let columns = split_columns(&['A', 'B', 'C', 'D', 'E'], 3);
        assert_eq!(columns, vec![vec!['A', 'D'], vec!['B', 'E'], vec!['C']]);
        assert_eq!(split_columns::<char>(&[], 3), Vec::<Vec<char>>::new());
    }

    #[test]
    fn click_sets_and_clears() {
        let mut grid = CharacterGrid::new(alphabet(), 3, true, None);
        assert!(grid.click('b', false));
        assert_eq!(grid.value(), Some('B'));
        assert!(grid.click('B', false));
        assert_eq!(grid.value(), None);
        assert!(!grid.click('C', true));

        let mut required = CharacterGrid::new(alphabet(), 3, false, Some('c'));
        assert!(!required.is_upper_case());
        assert!(!required.click('C', false));
        assert_eq!(required.value(), Some('c'));
    }

    #[test]
    fn case_toggle_converts_value() {
        let mut grid = CharacterGrid::new(alphabet(), 3, true, Some('Q'));
        grid.toggle_case(false);
        assert_eq!(grid.value(), Some('q'));
        assert_eq!(grid.display('R'), 'r');
    }

    #[test]
    fn arrows_wrap_and_clamp() {
        // Columns of A..E in 3: [A D] [B E] [C]
        let chars = vec!['A', 'B', 'C', 'D', 'E'];
        let mut grid = CharacterGrid::new(chars, 3, true, Some('A'));
        assert!(grid.on_key_down("ArrowUp", false));
        assert_eq!(grid.value(), Some('D'));
        grid.on_key_down("ArrowDown", false);
        assert_eq!(grid.value(), Some('A'));
        grid.on_key_down("ArrowLeft", false);
        assert_eq!(grid.value(), Some('C'));

        grid.set_value(Some('E'));
        grid.on_key_down("ArrowRight", false);
        assert_eq!(grid.value(), Some('C'));
        assert!(!grid.on_key_down("Tab", false));
    }

    #[test]
    fn button_classes() {
        let grid = CharacterGrid::new(alphabet(), 3, true, Some('A'));
        let attrs = Attributes::new();
        assert_eq!(
            grid.button_class('a', &attrs),
            "button is-fullwidth mb-3 is-primary is-rounded is-bordered"
        );
        assert_eq!(
            grid.button_class('B', &Attributes::new().with("disabled", "true")),
            "button is-fullwidth mb-3 is-disabled is-rounded is-bordered"
        );
        assert_eq!(columns_class(&attrs), "columns mb-0");
    }

    #[test]
    fn parse_char_requires_single_character() {
        assert_eq!(parse_char("x", true, "Key"), Ok(Some('x')));
        assert_eq!(parse_char("", true, "Key"), Ok(None));
        assert!(parse_char("xy", true, "Key").is_err());
    }
}
