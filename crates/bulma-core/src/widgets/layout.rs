//! Hero, level and media object.

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::color::BulmaColor;

/// `hero` + colour.
#[must_use]
pub fn hero_class(color: BulmaColor, attrs: &Attributes) -> String {
    ClassList::new("hero")
        .with_opt(color.modifier())
        .with(attrs.class("class"))
        .build()
}

/// `hero-head`, `hero-body` and `hero-foot`.
#[must_use]
pub fn hero_section_classes(attrs: &Attributes) -> [String; 3] {
    [
        ClassList::new("hero-head").with(attrs.class("header-class")).build(),
        ClassList::new("hero-body").with(attrs.class("body-class")).build(),
        ClassList::new("hero-foot").with(attrs.class("foot-class")).build(),
    ]
}

/// `level`.
#[must_use]
pub fn level_class(attrs: &Attributes) -> String {
    ClassList::new("level").with(attrs.class("class")).build()
}

/// `level-item`.
#[must_use]
pub fn level_item_class(attrs: &Attributes) -> String {
    ClassList::new("level-item").with(attrs.class("class")).build()
}

/// Classes of a media object's parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaClasses {
    /// `media`.
    pub media: String,
    /// `media-left`.
    pub left: String,
    /// `image is-64x64`.
    pub image: String,
    /// `media-content`.
    pub content: String,
}

impl MediaClasses {
    /// Build every part from the caller's attributes.
    #[must_use]
    pub fn new(attrs: &Attributes) -> Self {
        Self {
            media: ClassList::new("media").with(attrs.class("class")).build(),
            left: ClassList::new("media-left").with(attrs.class("left-class")).build(),
            image: ClassList::new("image is-64x64").with(attrs.class("image-class")).build(),
            content: ClassList::new("media-content")
                .with(attrs.class("content-class"))
                .build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_classes() {
        let attrs = Attributes::new().with("body-class", "has-text-centered");
        assert_eq!(hero_class(BulmaColor::Dark, &attrs), "hero is-dark");
        let [head, body, foot] = hero_section_classes(&attrs);
        assert_eq!(head, "hero-head");
        assert_eq!(body, "hero-body has-text-centered");
        assert_eq!(foot, "hero-foot");
        assert_eq!(level_item_class(&Attributes::new()), "level-item");
        assert_eq!(MediaClasses::new(&Attributes::new()).image, "image is-64x64");
    }
}
