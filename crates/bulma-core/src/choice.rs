//! Choice inputs: selects, flag checkboxes, radio groups, switches and the
//! password caps-lock hint.

use bitflags::Flags;
use uuid::Uuid;

use crate::attributes::Attributes;
use crate::classes::{status_background_class, ClassList};
use crate::color::BulmaColor;
use crate::error::FieldError;
use crate::flags::InputStatus;

/// Fresh id used to group the options of one rendered input.
#[must_use]
pub fn new_group_id() -> String {
    Uuid::new_v4().to_string()
}

/// Match `text` against item display strings, ignoring case.
///
/// Blank text or no match yields `None` for a nullable field.
///
/// # Errors
///
/// Returns [`FieldError::NoMatch`] when a non-nullable field has no match.
pub fn select_object<T, D>(
    items: &[T],
    display: D,
    text: &str,
    nullable: bool,
    field: &str,
) -> Result<Option<T>, FieldError>
where
    T: Clone,
    D: Fn(&T) -> String,
{
    let needle = text.trim().to_lowercase();
    let found = items
        .iter()
        .find(|item| display(item).to_lowercase() == needle)
        .cloned();
    match found {
        Some(item) => Ok(Some(item)),
        None if nullable => Ok(None),
        None => Err(FieldError::NoMatch {
            field: field.to_string(),
        }),
    }
}

/// A fieldless enum offered in a select.
pub trait ChoiceEnum: Copy + PartialEq + 'static {
    /// Every variant in display order; the first one stands in for "zero".
    const VARIANTS: &'static [Self];

    /// Variant name as shown and parsed.
    fn label(self) -> &'static str;
}

impl ChoiceEnum for BulmaColor {
    const VARIANTS: &'static [Self] = &Self::ALL;

    fn label(self) -> &'static str {
        self.name()
    }
}

/// Variants to render, optionally without the first ("zero") one.
#[must_use]
pub fn enum_options<E: ChoiceEnum>(hide_zero: bool) -> &'static [E] {
    let skip = usize::from(hide_zero).min(E::VARIANTS.len());
    &E::VARIANTS[skip..]
}

/// Parse a variant name case-insensitively; blank means the first variant
/// unless the field is nullable.
///
/// # Errors
///
/// Returns [`FieldError::UnknownOption`] for an unknown name.
pub fn parse_enum<E: ChoiceEnum>(text: &str, nullable: bool, field: &str) -> Result<Option<E>, FieldError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(if nullable { None } else { E::VARIANTS.first().copied() });
    }
    let needle = text.to_lowercase();
    E::VARIANTS
        .iter()
        .copied()
        .find(|variant| variant.label().to_lowercase() == needle)
        .map(Some)
        .ok_or_else(|| FieldError::UnknownOption {
            field: field.to_string(),
        })
}

/// Parse flag names separated by spaces, commas or `|`, ignoring case.
///
/// # Errors
///
/// Returns [`FieldError::UnknownOption`] when any name is not a declared flag.
pub fn parse_flags<F: Flags + Copy>(text: &str, field: &str) -> Result<F, FieldError> {
    let mut value = F::empty();
    for name in text
        .split(|c: char| c == ',' || c == '|' || c.is_whitespace())
        .filter(|name| !name.is_empty())
    {
        let flag = F::FLAGS
            .iter()
            .find(|flag| flag.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| FieldError::UnknownOption {
                field: field.to_string(),
            })?;
        value.insert(*flag.value());
    }
    Ok(value)
}

/// Clear `flag` when any of its bits are set, otherwise set it.
#[must_use]
pub fn toggle_flag<F: Flags + Copy>(current: F, flag: F) -> F {
    let mut next = current;
    if current.intersects(flag) {
        next.remove(flag);
    } else {
        next.insert(flag);
    }
    next
}

/// `true` when any bit of `flag` is set in `current`.
#[must_use]
pub fn is_flag_checked<F: Flags + Copy>(current: F, flag: F) -> bool {
    current.intersects(flag)
}

/// Names of the set flags joined by spaces.
#[must_use]
pub fn flag_names<F: Flags>(value: &F) -> String {
    value
        .iter_names()
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Declared flags to render as switches, optionally skipping zero-valued ones.
#[must_use]
pub fn flag_options<F: Flags + Copy>(hide_zero: bool) -> Vec<(&'static str, F)> {
    F::FLAGS
        .iter()
        .filter(|flag| !(hide_zero && flag.value().is_empty()))
        .map(|flag| (flag.name(), *flag.value()))
        .collect()
}

/// Id of one flag switch.
#[must_use]
pub fn flag_switch_id(group: &str, name: &str) -> String {
    format!("switch-{group}-{name}")
}

/// `checkbox` + `box` wrapper used by switches and flag groups.
#[must_use]
pub fn checkbox_class(boxed: bool, extra: &str) -> String {
    ClassList::new("checkbox")
        .with_if(boxed, "box")
        .with(extra)
        .build()
}

/// `select` + status background.
#[must_use]
pub fn select_class(status: InputStatus, extra: &str) -> String {
    ClassList::new("select")
        .with_opt(status_background_class(status))
        .with(extra)
        .build()
}

/// Labelled options of a radio group.
#[derive(Clone, Debug, PartialEq)]
pub struct RadioGroup<T> {
    group: String,
    options: Vec<(String, T)>,
}

impl<T: PartialEq + Clone> RadioGroup<T> {
    /// Create a group; `group` namespaces the option ids.
    #[must_use]
    pub fn new(group: impl Into<String>, options: Vec<(String, T)>) -> Self {
        Self {
            group: group.into(),
            options,
        }
    }

    /// Options in display order.
    #[must_use]
    pub fn options(&self) -> &[(String, T)] {
        &self.options
    }

    /// Element id of the option labelled `display`.
    #[must_use]
    pub fn option_id(&self, display: &str) -> String {
        format!("radio-{}-{}", self.group, display.replace(' ', "-"))
    }

    /// Label of the option holding `value`.
    #[must_use]
    pub fn display_of(&self, value: &T) -> Option<&str> {
        self.options
            .iter()
            .find(|(_, option)| option == value)
            .map(|(label, _)| label.as_str())
    }

    /// Value of the option labelled `display`.
    #[must_use]
    pub fn value_of(&self, display: &str) -> Option<T> {
        self.options
            .iter()
            .find(|(label, _)| label == display)
            .map(|(_, value)| value.clone())
    }
}

/// Class of each radio option.
#[must_use]
pub fn radio_item_class(attrs: &Attributes) -> String {
    ClassList::new("is-checkradio is-primary")
        .with(attrs.class("item-class"))
        .build()
}

/// Class of a switch checkbox.
#[must_use]
pub fn switch_class(extra: &str) -> String {
    ClassList::new("switch").with(extra).build()
}

/// Message shown while typing a password.
pub const CAPS_LOCK_MESSAGE: &str = "Caps lock is on";

/// Caps-lock hint under a password box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordHint {
    message: Option<String>,
    color: BulmaColor,
}

impl PasswordHint {
    /// Inspect a `keydown`: a lone uppercase letter typed without shift
    /// means caps lock is on. Returns whether caps lock is on.
    pub fn on_key(&mut self, key: &str, shift: bool) -> bool {
        let mut chars = key.chars();
        let caps_on = match (chars.next(), chars.next()) {
            (Some(c), None) => c.is_alphabetic() && !c.is_lowercase() && !shift,
            _ => false,
        };
        if caps_on {
            self.message = Some(CAPS_LOCK_MESSAGE.to_string());
            self.color = BulmaColor::Yellow;
        } else if self.color == BulmaColor::Yellow {
            self.message = None;
            self.color = BulmaColor::Default;
        }
        caps_on
    }

    /// Current hint.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// `help` + message colour.
    #[must_use]
    pub fn message_class(&self, attrs: &Attributes) -> String {
        ClassList::new("help")
            .with_if(self.color != BulmaColor::Default, self.color.is_class())
            .with(attrs.class("message-class"))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use bitflags::bitflags;

    use super::*;

    bitflags! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        struct Days: u32 {
            const NONE = 0;
            const MONDAY = 1 << 0;
            const TUESDAY = 1 << 1;
            const FRIDAY = 1 << 4;
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Owner {
        id: u32,
        name: &'static str,
    }

    #[test]
    fn select_object_matches_case_insensitively() {
        let owners = [Owner { id: 1, name: "Ada" }, Owner { id: 2, name: "Linus" }];
        let display = |owner: &Owner| owner.name.to_string();
        let found = select_object(&owners, display, "linus", false, "Owner");
        assert_eq!(found.map(|o| o.map(|o| o.id)), Ok(Some(2)));
        assert_eq!(select_object(&owners, display, "", true, "Owner"), Ok(None));
        assert!(matches!(
            select_object(&owners, display, "Grace", false, "Owner"),
            Err(FieldError::NoMatch { .. })
        ));
    }

    #[test]
    fn select_object_folds_non_ascii_case() {
        let cities = ["Über".to_string(), "Straße".to_string()];
        let display = |city: &String| city.clone();
        assert_eq!(
            select_object(&cities, display, "über", false, "City"),
            Ok(Some("Über".to_string()))
        );
        assert_eq!(
            select_object(&cities, display, "STRASSE", false, "City"),
            Err(FieldError::NoMatch { field: "City".into() })
        );
        assert_eq!(
            select_object(&cities, display, "straße", false, "City"),
            Ok(Some("Straße".to_string()))
        );
    }

    #[test]
    fn enums_parse_names_and_default_blank() {
        assert_eq!(parse_enum::<BulmaColor>("turquoise", false, "Color"), Ok(Some(BulmaColor::Turquoise)));
        assert_eq!(parse_enum::<BulmaColor>(" ", false, "Color"), Ok(Some(BulmaColor::Default)));
        assert_eq!(parse_enum::<BulmaColor>("", true, "Color"), Ok(None));
        assert!(parse_enum::<BulmaColor>("mauve", false, "Color").is_err());
        assert_eq!(enum_options::<BulmaColor>(true).len(), BulmaColor::ALL.len() - 1);
    }

    #[test]
    fn flags_parse_toggle_and_display() {
        let parsed: Days = parse_flags("monday, Friday", "Days").expect("known names");
        assert_eq!(parsed, Days::MONDAY | Days::FRIDAY);
        assert!(parse_flags::<Days>("Sunday", "Days").is_err());

        let toggled = toggle_flag(parsed, Days::MONDAY);
        assert_eq!(toggled, Days::FRIDAY);
        assert_eq!(toggle_flag(toggled, Days::TUESDAY), Days::TUESDAY | Days::FRIDAY);
        assert!(is_flag_checked(parsed, Days::FRIDAY));
        assert!(!is_flag_checked(parsed, Days::TUESDAY));

        assert_eq!(flag_names(&(Days::MONDAY | Days::FRIDAY)), "MONDAY FRIDAY");
        let options = flag_options::<Days>(true);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].0, "MONDAY");
    }

    #[test]
    fn radio_ids_replace_spaces() {
        let group = RadioGroup::new("g1", vec![("Next day".to_string(), 1), ("Later".to_string(), 2)]);
        assert_eq!(group.option_id("Next day"), "radio-g1-Next-day");
        assert_eq!(group.display_of(&2), Some("Later"));
        assert_eq!(group.value_of("Next day"), Some(1));
        assert_eq!(radio_item_class(&Attributes::new()), "is-checkradio is-primary");
    }

    #[test]
    fn caps_lock_hint_follows_keys() {
        let mut hint = PasswordHint::default();
        assert!(hint.on_key("A", false));
        assert_eq!(hint.message(), Some(CAPS_LOCK_MESSAGE));
        assert_eq!(hint.message_class(&Attributes::new()), "help is-warning");
        assert!(!hint.on_key("A", true));
        assert_eq!(hint.message(), None);
        assert!(!hint.on_key("Shift", false));
        assert_eq!(hint.message_class(&Attributes::new()), "help");
    }

    #[test]
    fn wrapper_classes() {
        assert_eq!(checkbox_class(true, ""), "checkbox box");
        assert_eq!(select_class(InputStatus::BACKGROUND_SUCCESS, "is-small"), "select is-success is-small");
        assert_eq!(switch_class(""), "switch");
        assert_eq!(flag_switch_id("g", "MONDAY"), "switch-g-MONDAY");
    }
}
