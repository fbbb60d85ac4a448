//! Sample data for the component gallery.

use bitflags::bitflags;
use bulma_core::BulmaSettings;
use bulma_core::choice::ChoiceEnum;

/// Gallery settings; partial so the rest comes from the defaults.
pub const GALLERY_SETTINGS: &str = r#"{
    "duration": { "minutes": 15, "seconds": 30 },
    "datetime": { "start_of_week": "Mon", "year_range": 8 }
}"#;

/// Parse [`GALLERY_SETTINGS`], falling back to the built-in defaults.
#[must_use]
pub fn gallery_settings() -> BulmaSettings {
    BulmaSettings::from_json(GALLERY_SETTINGS).unwrap_or_else(|_| BulmaSettings::defaults().clone())
}

/// Autocomplete suggestions.
pub const CITIES: [&str; 12] = [
    "Amsterdam",
    "Berlin",
    "Copenhagen",
    "Dublin",
    "Edinburgh",
    "Florence",
    "Geneva",
    "Helsinki",
    "Lisbon",
    "Madrid",
    "Oslo",
    "Vienna",
];

/// Case-insensitive "contains" used as the gallery's autocomplete filter.
#[must_use]
pub fn city_matches(city: &str, query: &str) -> bool {
    city.to_lowercase().contains(&query.trim().to_lowercase())
}

/// Select-enum sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    /// No priority set.
    None,
    /// Low.
    Low,
    /// Normal.
    Normal,
    /// High.
    High,
}

impl ChoiceEnum for Priority {
    const VARIANTS: &'static [Self] = &[Self::None, Self::Low, Self::Normal, Self::High];

    fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
        }
    }
}

bitflags! {
    /// Flag-switch sample.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Weekdays: u8 {
        /// Monday.
        const MONDAY = 1 << 0;
        /// Tuesday.
        const TUESDAY = 1 << 1;
        /// Wednesday.
        const WEDNESDAY = 1 << 2;
        /// Thursday.
        const THURSDAY = 1 << 3;
        /// Friday.
        const FRIDAY = 1 << 4;
        /// Saturday.
        const SATURDAY = 1 << 5;
        /// Sunday.
        const SUNDAY = 1 << 6;
    }
}

/// One row of the table sample.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Release {
    /// Version string.
    pub version: &'static str,
    /// Release month.
    pub month: &'static str,
    /// Long-term support.
    pub lts: bool,
}

/// Table sample rows.
pub const RELEASES: [Release; 3] = [
    Release {
        version: "1.0.0",
        month: "January",
        lts: true,
    },
    Release {
        version: "1.1.0",
        month: "April",
        lts: false,
    },
    Release {
        version: "2.0.0",
        month: "September",
        lts: true,
    },
];

#[cfg(test)]
mod tests {
    use bulma_core::choice::{enum_options, flag_names, parse_enum};
    use chrono::Weekday;

    use super::*;

    #[test]
    fn gallery_settings_parse() {
        let settings = gallery_settings();
        assert_eq!(settings.duration.minutes, 15);
        assert_eq!(settings.datetime.start_of_week, Weekday::Mon);
        assert_eq!(settings.theme, bulma_core::ThemeSettings::default());
    }

    #[test]
    fn samples_work_with_choice_helpers() {
        assert_eq!(enum_options::<Priority>(true).len(), 3);
        assert_eq!(
            parse_enum::<Priority>("high", false, "Priority").expect("known variant"),
            Some(Priority::High)
        );
        assert_eq!(flag_names(&(Weekdays::SATURDAY | Weekdays::SUNDAY)), "SATURDAY SUNDAY");
        assert!(city_matches("Copenhagen", " HAGEN "));
    }
}
