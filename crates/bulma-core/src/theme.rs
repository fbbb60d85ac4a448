//! Light/dark theme decisions.
//!
//! The page ships two stylesheets; switching themes enables one and disables
//! the other. This module only decides which; the UI crate touches the DOM.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Where the theme stylesheets live and how the choice is remembered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSettings {
    /// Element id of the light stylesheet `<link>`.
    pub light_theme_id: String,
    /// Element id of the dark stylesheet `<link>`.
    pub dark_theme_id: String,
    /// Local storage key holding `"true"`/`"false"`.
    pub storage_key: String,
    /// Honour a stored choice over the OS preference.
    pub load_user_preference: bool,
    /// Render the toggle as a navbar item.
    pub navbar_item: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            light_theme_id: "bulma-theme".to_string(),
            dark_theme_id: "bulma-theme-dark".to_string(),
            storage_key: "bulma.isdarkmode".to_string(),
            load_user_preference: true,
            navbar_item: true,
        }
    }
}

/// Colour scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light stylesheet active.
    Light,
    /// Dark stylesheet active.
    Dark,
}

impl ThemeMode {
    /// Mode from a "dark?" flag.
    #[must_use]
    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// `true` for [`ThemeMode::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "light_mode",
            Self::Dark => "dark_mode",
        }
    }

    /// Value written to storage.
    #[must_use]
    pub const fn storage_value(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }
}

/// One stylesheet update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StylesheetChange {
    /// `<link>` element id.
    pub id: String,
    /// Enable (`true`) or disable the sheet.
    pub enable: bool,
    /// Clear the `media` attribute so the sheet applies regardless of the
    /// OS preference.
    pub clear_media: bool,
}

/// Outcome of resolving or toggling the theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeDecision {
    /// Mode now in effect.
    pub mode: ThemeMode,
    /// Stylesheet updates to apply, in order.
    pub changes: Vec<StylesheetChange>,
    /// Value to persist, if any.
    pub store: Option<&'static str>,
}

impl ThemeSettings {
    /// Validate the ids and key.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Blank`] for an empty id or key.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("theme.light_theme_id", &self.light_theme_id),
            ("theme.dark_theme_id", &self.dark_theme_id),
            ("theme.storage_key", &self.storage_key),
        ] {
            if value.trim().is_empty() {
                return Err(SettingsError::Blank { field });
            }
        }
        Ok(())
    }

    fn activate(&self, mode: ThemeMode) -> Vec<StylesheetChange> {
        let (on, off) = match mode {
            ThemeMode::Dark => (&self.dark_theme_id, &self.light_theme_id),
            ThemeMode::Light => (&self.light_theme_id, &self.dark_theme_id),
        };
        vec![
            StylesheetChange {
                id: on.clone(),
                enable: true,
                clear_media: true,
            },
            StylesheetChange {
                id: off.clone(),
                enable: false,
                clear_media: false,
            },
        ]
    }

    /// Mode on first render.
    ///
    /// Without a usable stored choice the page follows the OS, which the
    /// stylesheets' `media` attributes already do, so nothing changes. A stored
    /// choice that differs from the OS switches the sheets.
    #[must_use]
    pub fn resolve_initial(&self, os_dark: bool, stored: Option<&str>) -> ThemeDecision {
        let os_mode = ThemeMode::from_dark(os_dark);
        let stored = stored
            .map(str::trim)
            .filter(|value| self.load_user_preference && !value.is_empty());
        let Some(stored) = stored else {
            return ThemeDecision {
                mode: os_mode,
                changes: Vec::new(),
                store: None,
            };
        };
        let mode = ThemeMode::from_dark(stored.eq_ignore_ascii_case("true"));
        let changes = if mode == os_mode {
            Vec::new()
        } else {
            self.activate(mode)
        };
        ThemeDecision {
            mode,
            changes,
            store: None,
        }
    }

    /// Toggle clicked.
    #[must_use]
    pub fn toggle(&self, current: ThemeMode) -> ThemeDecision {
        let mode = current.toggled();
        ThemeDecision {
            mode,
            changes: self.activate(mode),
            store: Some(mode.storage_value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_stored_choice_follows_os() {
        let settings = ThemeSettings::default();
        let decision = settings.resolve_initial(true, None);
        assert_eq!(decision.mode, ThemeMode::Dark);
        assert!(decision.changes.is_empty());

        let ignored = ThemeSettings {
            load_user_preference: false,
            ..ThemeSettings::default()
        };
        assert_eq!(ignored.resolve_initial(false, Some("true")).mode, ThemeMode::Light);
    }

    #[test]
    fn stored_choice_overrides_os() {
        let settings = ThemeSettings::default();
        let decision = settings.resolve_initial(true, Some("False"));
        assert_eq!(decision.mode, ThemeMode::Light);
        assert_eq!(decision.changes.len(), 2);
        assert_eq!(decision.changes[0].id, "bulma-theme");
        assert!(decision.changes[0].enable && decision.changes[0].clear_media);
        assert!(!decision.changes[1].enable);

        assert!(settings.resolve_initial(false, Some("false")).changes.is_empty());
    }

    #[test]
    fn toggle_switches_and_persists() {
        let settings = ThemeSettings::default();
        let decision = settings.toggle(ThemeMode::Light);
        assert_eq!(decision.mode, ThemeMode::Dark);
        assert_eq!(decision.store, Some("true"));
        assert_eq!(decision.changes[0].id, "bulma-theme-dark");
        assert_eq!(decision.mode.icon(), "dark_mode");
    }

    #[test]
    fn blank_ids_are_rejected() {
        let settings = ThemeSettings {
            storage_key: " ".into(),
            ..ThemeSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Blank { field: "theme.storage_key" })
        ));
    }
}
