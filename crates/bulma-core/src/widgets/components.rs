//! Card, message, modal, navbar and panel.

use uuid::Uuid;

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::color::{BulmaColor, ImageSize};

/// Classes hiding a caption on touch, desktop and widescreen widths.
pub const COMPACT_DISPLAY_CLASSES: &str = "is-hidden-touch is-hidden-desktop-only is-hidden-widescreen-only";

fn joined(base: &str, attrs: &Attributes, key: &str) -> String {
    ClassList::new(base).with(attrs.class(key)).build()
}

/// Classes of a card's parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardClasses {
    /// `card`.
    pub card: String,
    /// `card-header`.
    pub header: String,
    /// `card-header-title`.
    pub title: String,
    /// `image` + size.
    pub figure: String,
    /// `card-content`.
    pub content: String,
    /// `card-footer`.
    pub footer: String,
}

impl CardClasses {
    /// Build every part from the caller's attributes.
    #[must_use]
    pub fn new(image_size: ImageSize, attrs: &Attributes) -> Self {
        Self {
            card: joined("card", attrs, "class"),
            header: joined("card-header", attrs, "header-class"),
            title: joined("card-header-title", attrs, "title-class"),
            figure: format!("image {}", image_size.class()),
            content: joined("card-content", attrs, "content-class"),
            footer: joined("card-footer", attrs, "footer-class"),
        }
    }
}

/// `message` + hidden + colour.
#[must_use]
pub fn message_class(hidden: bool, color: BulmaColor, attrs: &Attributes) -> String {
    ClassList::new("message")
        .with_if(hidden, "is-hidden")
        .with_opt(color.modifier())
        .with(attrs.class("class"))
        .build()
}

/// `message-header`.
#[must_use]
pub fn message_header_class(attrs: &Attributes) -> String {
    joined("message-header", attrs, "header-class")
}

/// `message-body`.
#[must_use]
pub fn message_body_class(attrs: &Attributes) -> String {
    joined("message-body", attrs, "body-class")
}

/// `modal` + active while displayed.
#[must_use]
pub fn modal_class(displayed: bool, attrs: &Attributes) -> String {
    ClassList::new("modal")
        .with_if(displayed, "is-active")
        .with(attrs.class("class"))
        .build()
}

/// `modal-card` or the full screen variant.
#[must_use]
pub const fn modal_card_class(full_screen: bool) -> &'static str {
    if full_screen { "modal-card is-fullscreen" } else { "modal-card" }
}

/// Navbar with a burger menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavbarState {
    id: String,
    active: bool,
}

impl NavbarState {
    /// Use the caller's id or generate one.
    #[must_use]
    pub fn new(id: Option<&str>) -> Self {
        let id = id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map_or_else(|| Uuid::new_v4().simple().to_string(), str::to_string);
        Self { id, active: false }
    }

    /// Id targeted by the burger.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `true` while the menu is expanded.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Burger clicked.
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    /// `navbar-burger` + active.
    #[must_use]
    pub fn burger_class(&self, attrs: &Attributes) -> String {
        ClassList::new("navbar-burger")
            .with_if(self.active, "is-active")
            .with(attrs.class("burger-class"))
            .build()
    }

    /// `navbar-menu is-unselectable` + active.
    #[must_use]
    pub fn menu_class(&self, attrs: &Attributes) -> String {
        ClassList::new("navbar-menu is-unselectable")
            .with_if(self.active, "is-active")
            .with(attrs.class("menu-class"))
            .build()
    }
}

/// `navbar`.
#[must_use]
pub fn navbar_class(attrs: &Attributes) -> String {
    joined("navbar", attrs, "class")
}

/// `navbar-brand no-select`.
#[must_use]
pub fn navbar_brand_class(attrs: &Attributes) -> String {
    joined("navbar-brand no-select", attrs, "brand-class")
}

/// Brand link.
#[must_use]
pub fn navbar_link_class(attrs: &Attributes) -> String {
    joined("navbar-item", attrs, "a-class")
}

/// Logo image: `logo-class`, then `img-class`, then `mr-2`.
#[must_use]
pub fn navbar_logo_class(attrs: &Attributes) -> String {
    attrs
        .value("logo-class")
        .or_else(|| attrs.value("img-class"))
        .unwrap_or("mr-2")
        .to_string()
}

/// Caption next to a navbar icon: spaced after an icon, hidden on smaller
/// screens in compact mode.
#[must_use]
pub fn navbar_caption_class(has_icon: bool, compact: bool, has_caption: bool, attrs: &Attributes) -> String {
    ClassList::default()
        .with_if(has_icon, "ml-2")
        .with_if(compact && has_caption, COMPACT_DISPLAY_CLASSES)
        .with(attrs.class("link-class"))
        .build()
}

/// `navbar-item`.
#[must_use]
pub fn navbar_item_class(attrs: &Attributes) -> String {
    joined("navbar-item", attrs, "class")
}

/// Navbar icon.
#[must_use]
pub fn navbar_icon_class(attrs: &Attributes) -> String {
    joined("material-icons", attrs, "icon-class")
}

/// `navbar-item has-dropdown is-hoverable` + mega.
#[must_use]
pub fn navbar_dropdown_class(full_width: bool, attrs: &Attributes) -> String {
    ClassList::new("navbar-item has-dropdown is-hoverable")
        .with_if(full_width, "is-mega")
        .with(attrs.class("class"))
        .build()
}

/// `navbar-dropdown` + active.
#[must_use]
pub fn navbar_dropdown_menu_class(active: bool, attrs: &Attributes) -> String {
    ClassList::new("navbar-dropdown")
        .with_if(active, "is-active")
        .with(attrs.class("dropdown-class"))
        .build()
}

/// What a click on the panel title does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelTitleAction {
    /// Forward to the caller's handler.
    Invoke,
    /// Collapse state flipped to the contained value.
    Toggled(bool),
    /// Nothing.
    None,
}

/// Collapsible panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelState {
    /// Colour of the panel and content background.
    pub color: BulmaColor,
    /// Flex column layout.
    pub flex: bool,
    /// Block content.
    pub block: bool,
    /// Title click collapses.
    pub show_collapse_icons: bool,
    /// Content hidden.
    pub collapsed: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            color: BulmaColor::Default,
            flex: false,
            block: true,
            show_collapse_icons: true,
            collapsed: false,
        }
    }
}

impl PanelState {
    /// Flip the collapsed state and return it.
    pub fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    /// Title clicked: a caller handler wins over collapsing.
    pub fn title_clicked(&mut self, has_handler: bool) -> PanelTitleAction {
        if has_handler {
            PanelTitleAction::Invoke
        } else if self.show_collapse_icons {
            PanelTitleAction::Toggled(self.toggle())
        } else {
            PanelTitleAction::None
        }
    }

    /// Icon shown in the header.
    #[must_use]
    pub const fn collapse_icon(&self) -> &'static str {
        if self.collapsed { "expand_more" } else { "expand_less" }
    }

    /// `panel` + flex + colour.
    #[must_use]
    pub fn class(&self, attrs: &Attributes) -> String {
        ClassList::new("panel")
            .with_if(self.flex, "is-flex is-flex-direction-column")
            .with_opt(self.color.modifier())
            .with(attrs.class("class"))
            .build()
    }

    /// `panel-heading is-unselectable py-3` + clickable.
    #[must_use]
    pub fn header_class(&self, has_handler: bool, attrs: &Attributes) -> String {
        ClassList::new("panel-heading is-unselectable py-3")
            .with_if(has_handler || self.show_collapse_icons, "is-clickable")
            .with(attrs.class("header-class"))
            .build()
    }

    /// `panel-block box` + hidden, grow, block and light background.
    #[must_use]
    pub fn content_class(&self, attrs: &Attributes) -> String {
        ClassList::new("panel-block box")
            .with_if(self.collapsed, "is-hidden")
            .with_if(self.flex, "is-flex-grow-1")
            .with_if(self.block, "is-block")
            .with_if(
                self.color != BulmaColor::Default,
                self.color.background_class(Some("light")),
            )
            .with(attrs.class("content-class"))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_parts_take_caller_classes() {
        let attrs = Attributes::new().with("title-class", "is-centered");
        let classes = CardClasses::new(ImageSize::Is4by3, &attrs);
        assert_eq!(classes.title, "card-header-title is-centered");
        assert_eq!(classes.figure, "image is-4by3");
        assert_eq!(classes.card, "card");
    }

    #[test]
    fn navbar_toggles_burger_and_menu() {
        let mut navbar = NavbarState::new(None);
        assert_eq!(navbar.id().len(), 32);
        let attrs = Attributes::new();
        navbar.toggle();
        assert_eq!(navbar.burger_class(&attrs), "navbar-burger is-active");
        assert_eq!(navbar.menu_class(&attrs), "navbar-menu is-unselectable is-active");
        assert_eq!(NavbarState::new(Some("main")).id(), "main");
        assert_eq!(navbar_logo_class(&attrs), "mr-2");
        assert_eq!(navbar_logo_class(&Attributes::new().with("img-class", "logo")), "logo");
    }

    #[test]
    fn compact_captions_hide_on_small_screens() {
        let attrs = Attributes::new();
        assert_eq!(
            navbar_caption_class(true, true, true, &attrs),
            format!("ml-2 {COMPACT_DISPLAY_CLASSES}")
        );
        assert_eq!(navbar_caption_class(false, true, false, &attrs), "");
        assert_eq!(
            navbar_dropdown_class(true, &attrs),
            "navbar-item has-dropdown is-hoverable is-mega"
        );
    }

    #[test]
    fn panel_title_click_prefers_handler() {
        let mut panel = PanelState {
            color: BulmaColor::Blue,
            ..PanelState::default()
        };
        assert_eq!(panel.title_clicked(true), PanelTitleAction::Invoke);
        assert_eq!(panel.title_clicked(false), PanelTitleAction::Toggled(true));
        let attrs = Attributes::new();
        assert_eq!(
            panel.content_class(&attrs),
            "panel-block box is-hidden is-block has-background-link-light"
        );
        assert_eq!(panel.header_class(false, &attrs), "panel-heading is-unselectable py-3 is-clickable");

        panel.show_collapse_icons = false;
        assert_eq!(panel.title_clicked(false), PanelTitleAction::None);
    }

    #[test]
    fn modal_and_message_classes() {
        let attrs = Attributes::new();
        assert_eq!(modal_class(true, &attrs), "modal is-active");
        assert_eq!(message_class(false, BulmaColor::Red, &attrs), "message is-danger");
        assert_eq!(message_body_class(&attrs), "message-body");
    }
}
