//! Pass-through HTML attributes captured by a widget.

use std::collections::BTreeMap;

/// Extra attributes supplied by the caller, keyed by attribute name.
///
/// Widgets read sub-element classes (`icon-class`, `dropdown-class`, ...) from
/// here and forward the rest to their main element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    /// Empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert or replace an attribute.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Value of `key` when present and not blank.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Class string stored under `key`, or `""` so it can be appended directly.
    #[must_use]
    pub fn class(&self, key: &str) -> &str {
        self.value(key).unwrap_or_default()
    }

    /// Copy without the listed keys.
    #[must_use]
    pub fn filtered(&self, keys: &[&str]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(key, _)| !keys.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }

    /// Keep (`matching = true`) or drop the keys starting with `prefix`.
    /// The prefix is normalised to end with `-`.
    #[must_use]
    pub fn filtered_by_prefix(&self, prefix: &str, matching: bool) -> Self {
        let prefix = if prefix.ends_with('-') {
            prefix.to_string()
        } else {
            format!("{prefix}-")
        };
        Self(
            self.0
                .iter()
                .filter(|(key, _)| key.starts_with(&prefix) == matching)
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }

    /// `disabled` set to `true` or `disabled`.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.0.get("disabled").is_some_and(|value| {
            value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("disabled")
        })
    }

    /// Disabled, or `readonly` present.
    #[must_use]
    pub fn is_inactive(&self) -> bool {
        self.is_disabled() || self.0.contains_key("readonly")
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no attributes were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Attributes {
        Attributes::from_iter([
            ("class", "is-small"),
            ("icon-class", "has-text-info"),
            ("dropdown-class", " "),
            ("placeholder", "Search"),
        ])
    }

    #[test]
    fn blank_values_are_treated_as_missing() {
        let attrs = sample();
        assert_eq!(attrs.value("placeholder"), Some("Search"));
        assert_eq!(attrs.class("dropdown-class"), "");
        assert_eq!(attrs.class("icon-class"), "has-text-info");
        assert_eq!(attrs.value("missing"), None);
    }

    #[test]
    fn filters_by_key_and_prefix() {
        let attrs = sample();
        let rest = attrs.filtered(&["class", "icon-class", "dropdown-class"]);
        assert_eq!(rest.iter().collect::<Vec<_>>(), vec![("placeholder", "Search")]);

        let icon = attrs.filtered_by_prefix("icon", true);
        assert_eq!(icon.len(), 1);
        let without = attrs.filtered_by_prefix("icon-", false);
        assert_eq!(without.len(), 3);
    }

    #[test]
    fn disabled_and_readonly_make_inactive() {
        assert!(!sample().is_inactive());
        assert!(Attributes::new().with("disabled", "disabled").is_disabled());
        assert!(!Attributes::new().with("disabled", "false").is_disabled());
        assert!(Attributes::new().with("readonly", "").is_inactive());
    }
}
