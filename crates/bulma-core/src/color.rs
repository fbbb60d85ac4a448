//! Bulma colour palette and image sizing classes.

use serde::{Deserialize, Serialize};

/// Named colours of the Bulma palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulmaColor {
    /// Default text colour.
    #[default]
    Default,
    /// Success.
    Green,
    /// Warning.
    Yellow,
    /// Danger.
    Red,
    /// Primary.
    Turquoise,
    /// Secondary.
    Purple,
    /// Tertiary.
    Orange,
    /// Link.
    Blue,
    /// Info.
    Cyan,
    /// Dark.
    Dark,
    /// Light.
    Light,
    /// Highlight.
    Pink,
}

impl BulmaColor {
    /// Every palette entry in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Default,
        Self::Green,
        Self::Yellow,
        Self::Red,
        Self::Turquoise,
        Self::Purple,
        Self::Orange,
        Self::Blue,
        Self::Cyan,
        Self::Dark,
        Self::Light,
        Self::Pink,
    ];

    /// Human readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Red => "Red",
            Self::Turquoise => "Turquoise",
            Self::Purple => "Purple",
            Self::Orange => "Orange",
            Self::Blue => "Blue",
            Self::Cyan => "Cyan",
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::Pink => "Pink",
        }
    }

    /// Bulma's semantic name, used inside class names.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Green => "success",
            Self::Yellow => "warning",
            Self::Red => "danger",
            Self::Turquoise => "primary",
            Self::Purple => "secondary",
            Self::Orange => "tertiary",
            Self::Blue => "link",
            Self::Cyan => "info",
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Pink => "highlight",
        }
    }

    /// Hex value of the colour; the extension colours have none.
    #[must_use]
    pub const fn hex(self) -> Option<&'static str> {
        match self {
            Self::Default | Self::Dark => Some("#0A0A0A"),
            Self::Green => Some("#48C78E"),
            Self::Yellow => Some("#FFE08A"),
            Self::Red => Some("#F14668"),
            Self::Turquoise => Some("#00D1B2"),
            Self::Purple => Some("#B86BFF"),
            Self::Blue => Some("#485FC7"),
            Self::Cyan => Some("#3E8ED0"),
            Self::Light => Some("#FFFFFF"),
            Self::Orange | Self::Pink => None,
        }
    }

    /// `"{prefix}-{short}"`, or `"{prefix}-{short}-{suffix}"` when a suffix is given.
    #[must_use]
    pub fn color_class(self, prefix: &str, suffix: Option<&str>) -> String {
        match suffix.map(str::trim).filter(|s| !s.is_empty()) {
            Some(suffix) => format!("{prefix}-{}-{suffix}", self.short_name()),
            None => format!("{prefix}-{}", self.short_name()),
        }
    }

    /// `is-{short}`.
    #[must_use]
    pub fn is_class(self) -> String {
        self.color_class("is", None)
    }

    /// `is-{short}`, or nothing for [`BulmaColor::Default`].
    #[must_use]
    pub fn modifier(self) -> Option<String> {
        (self != Self::Default).then(|| self.is_class())
    }

    /// `has-text-{short}[-suffix]`.
    #[must_use]
    pub fn text_class(self, suffix: Option<&str>) -> String {
        self.color_class("has-text", suffix)
    }

    /// `has-background-{short}[-suffix]`.
    #[must_use]
    pub fn background_class(self, suffix: Option<&str>) -> String {
        self.color_class("has-background", suffix)
    }

    /// Recover a colour from a class such as `is-danger`, matching the last `-` segment.
    #[must_use]
    pub fn from_class(class: &str) -> Option<Self> {
        let short = class.rsplit('-').next()?;
        Self::ALL.into_iter().find(|color| color.short_name() == short)
    }
}

/// Fixed dimension and aspect ratio classes for `figure.image`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ImageSize {
    Is16x16,
    Is24x24,
    Is32x32,
    Is48x48,
    Is64x64,
    Is96x96,
    Is128x128,
    Is192x192,
    Is256x256,
    Is384x384,
    Is512x512,
    Is768x768,
    Is1024x1024,
    IsSquare,
    Is1by1,
    Is5by4,
    Is4by3,
    Is3by2,
    Is5by3,
    Is16by9,
    Is2by1,
    Is3by1,
    Is4by5,
    Is3by4,
    Is2by3,
    Is3by5,
    Is9by16,
    Is1by2,
    Is1by3,
}

impl ImageSize {
    /// Bulma class for the size.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Is16x16 => "is-16x16",
            Self::Is24x24 => "is-24x24",
            Self::Is32x32 => "is-32x32",
            Self::Is48x48 => "is-48x48",
            Self::Is64x64 => "is-64x64",
            Self::Is96x96 => "is-96x96",
            Self::Is128x128 => "is-128x128",
            Self::Is192x192 => "is-192x192",
            Self::Is256x256 => "is-256x256",
            Self::Is384x384 => "is-384x384",
            Self::Is512x512 => "is-512x512",
            Self::Is768x768 => "is-768x768",
            Self::Is1024x1024 => "is-1024x1024",
            Self::IsSquare => "is-square",
            Self::Is1by1 => "is-1by1",
            Self::Is5by4 => "is-5by4",
            Self::Is4by3 => "is-4by3",
            Self::Is3by2 => "is-3by2",
            Self::Is5by3 => "is-5by3",
            Self::Is16by9 => "is-16by9",
            Self::Is2by1 => "is-2by1",
            Self::Is3by1 => "is-3by1",
            Self::Is4by5 => "is-4by5",
            Self::Is3by4 => "is-3by4",
            Self::Is2by3 => "is-2by3",
            Self::Is3by5 => "is-3by5",
            Self::Is9by16 => "is-9by16",
            Self::Is1by2 => "is-1by2",
            Self::Is1by3 => "is-1by3",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_classes_use_short_names() {
        assert_eq!(BulmaColor::Red.is_class(), "is-danger");
        assert_eq!(BulmaColor::Green.text_class(None), "has-text-success");
        assert_eq!(
            BulmaColor::Cyan.background_class(Some("light")),
            "has-background-info-light"
        );
        assert_eq!(BulmaColor::Pink.color_class("is", Some("  ")), "is-highlight");
    }

    #[test]
    fn from_class_matches_last_segment() {
        assert_eq!(BulmaColor::from_class("is-danger"), Some(BulmaColor::Red));
        assert_eq!(
            BulmaColor::from_class("has-text-primary"),
            Some(BulmaColor::Turquoise)
        );
        assert_eq!(BulmaColor::from_class("is-fullwidth"), None);
    }

    #[test]
    fn extension_colors_have_no_hex() {
        assert_eq!(BulmaColor::Orange.hex(), None);
        assert_eq!(BulmaColor::Light.hex(), Some("#FFFFFF"));
        assert_eq!(BulmaColor::Dark.hex(), BulmaColor::Default.hex());
    }

    #[test]
    fn image_sizes_map_to_bulma_classes() {
        assert_eq!(ImageSize::Is128x128.class(), "is-128x128");
        assert_eq!(ImageSize::Is16by9.class(), "is-16by9");
    }
}
