//! Parent/child registration for tabs, steps and breadcrumbs.
//!
//! # Design
//! - Children register on mount and deregister on unmount; the parent owns
//!   ordering and re-numbers indexes after every removal.
//! - Named registries track the active child by name and fall back to the
//!   first remaining child when the active one goes away.
//! - Failures are logged and returned; callers may ignore the result.

use tracing::error;

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::color::BulmaColor;
use crate::error::RegistryError;

/// One registered child of a named registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedEntry<T> {
    /// Unique, non-blank name.
    pub name: String,
    /// Zero-based position.
    pub index: usize,
    /// Child specific data.
    pub data: T,
}

/// Result of clicking a child.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The child cannot be selected; nothing happens.
    Ignored,
    /// The child was clicked but was already active.
    Unchanged,
    /// The active child changed to this name.
    Changed(String),
}

impl Selection {
    /// `true` when the item-clicked callback should fire.
    #[must_use]
    pub const fn clicked(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Ordered, uniquely named children with one active entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedRegistry<T> {
    kind: &'static str,
    entries: Vec<NamedEntry<T>>,
    active: Option<String>,
}

impl<T> NamedRegistry<T> {
    /// Empty registry; `kind` names it in errors (`"Tabs"`, `"Steps"`).
    #[must_use]
    pub fn new(kind: &'static str, active: Option<String>) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            active: active.filter(|name| !name.trim().is_empty()),
        }
    }

    /// Registered children in index order.
    #[must_use]
    pub fn entries(&self) -> &[NamedEntry<T>] {
        &self.entries
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the active child.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Position of the active child.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        let active = self.active.as_deref()?;
        self.get(active).map(|entry| entry.index)
    }

    /// `true` when `name` is the active child.
    #[must_use]
    pub fn is_active(&self, name: &str) -> bool {
        self.active.as_deref() == Some(name)
    }

    /// Child called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NamedEntry<T>> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Apply the active name supplied by the parent's caller.
    pub fn set_active(&mut self, active: Option<String>) {
        match active.filter(|name| !name.trim().is_empty()) {
            Some(name) => self.active = Some(name),
            None => self.active = self.entries.first().map(|entry| entry.name.clone()),
        }
    }

    /// Register a child and return its index.
    ///
    /// The first child becomes active when nothing is.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingName`] for a blank name and
    /// [`RegistryError::DuplicateName`] when the name is taken.
    pub fn add(&mut self, name: Option<&str>, data: T) -> Result<usize, RegistryError> {
        let name = match name.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => name.to_string(),
            None => {
                let err = RegistryError::MissingName { kind: self.kind };
                error!(kind = self.kind, error = %err, "child registration rejected");
                return Err(err);
            }
        };
        if self.get(&name).is_some() {
            let err = RegistryError::DuplicateName {
                kind: self.kind,
                name,
            };
            error!(kind = self.kind, error = %err, "child registration rejected");
            return Err(err);
        }

        let index = self
            .entries
            .iter()
            .map(|entry| entry.index + 1)
            .max()
            .unwrap_or(0);
        if self.active.is_none() {
            self.active = Some(name.clone());
        }
        self.entries.push(NamedEntry { name, index, data });
        Ok(index)
    }

    /// Replace the data of a registered child.
    pub fn update(&mut self, name: &str, data: T) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) {
            entry.data = data;
        }
    }

    /// Deregister a child, re-number the rest and move the active marker
    /// to the first child if the removed one held it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when `name` is not registered.
    pub fn remove(&mut self, name: &str) -> Result<NamedEntry<T>, RegistryError> {
        let Some(position) = self.entries.iter().position(|entry| entry.name == name) else {
            let err = RegistryError::NotFound {
                kind: self.kind,
                key: name.to_string(),
            };
            error!(kind = self.kind, error = %err, "child removal failed");
            return Err(err);
        };
        let removed = self.entries.remove(position);
        self.entries.sort_by_key(|entry| entry.index);
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.index = index;
        }
        if self.active.as_deref() == Some(removed.name.as_str()) {
            self.active = self.entries.first().map(|entry| entry.name.clone());
        }
        Ok(removed)
    }

    /// Click a child. `selectable` decides whether it reacts at all.
    pub fn select(&mut self, name: &str, selectable: impl Fn(&T) -> bool) -> Selection {
        let Some(entry) = self.get(name) else {
            return Selection::Ignored;
        };
        if !selectable(&entry.data) {
            return Selection::Ignored;
        }
        if self.is_active(name) {
            Selection::Unchanged
        } else {
            self.active = Some(name.to_string());
            Selection::Changed(name.to_string())
        }
    }
}

/// Active name last reported to whoever owns a registry.
///
/// The registry picks an active entry on its own when the first child arrives
/// or the active one is removed; the owner learns about that through
/// [`Self::update`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveReport {
    reported: Option<String>,
}

impl ActiveReport {
    /// Start from the name the owner already knows about.
    #[must_use]
    pub fn new(initial: Option<String>) -> Self {
        Self { reported: initial }
    }

    /// Record `active`. Returns it when it is set and differs from the last
    /// recorded name.
    pub fn update(&mut self, active: Option<&str>) -> Option<String> {
        if self.reported.as_deref() == active {
            return None;
        }
        self.reported = active.map(str::to_string);
        self.reported.clone()
    }
}

/// Data a tab registers with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabInfo {
    /// Material icon beside the title.
    pub icon: Option<String>,
    /// Disabled tabs ignore clicks.
    pub enabled: bool,
}

/// Tab bar options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabsStyle {
    /// Centre the bar.
    pub centered: bool,
    /// Boxed look; wins over toggle.
    pub boxed: bool,
    /// Toggle-button look.
    pub toggle: bool,
    /// Rounded toggle buttons.
    pub rounded: bool,
}

impl Default for TabsStyle {
    fn default() -> Self {
        Self {
            centered: true,
            boxed: false,
            toggle: true,
            rounded: true,
        }
    }
}

impl TabsStyle {
    /// Class of the tab bar.
    #[must_use]
    pub fn class(self, extra: &str) -> String {
        ClassList::new("tabs is-size-6")
            .with_if(self.centered, "is-centered")
            .with_if(self.boxed, "is-boxed")
            .with_if(!self.boxed && self.toggle, "is-toggle")
            .with_if(self.toggle && self.rounded, "is-toggle-rounded")
            .with(extra)
            .build()
    }
}

/// Registry of tabs.
pub type TabRegistry = NamedRegistry<TabInfo>;

/// Class of the tab at `index` among `count` tabs.
#[must_use]
pub fn tab_class(index: usize, count: usize, active: bool) -> String {
    let spacing = if index == 0 {
        "mr-1"
    } else if index + 1 == count {
        "ml-1"
    } else {
        "mx-1"
    };
    ClassList::new(spacing).with_if(active, "is-active").build()
}

/// Data a step registers with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepInfo {
    /// Material icon in the marker.
    pub icon: Option<String>,
    /// Marker colour.
    pub marker_color: BulmaColor,
}

/// Steps bar options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepsStyle {
    /// Vertical layout.
    pub vertical: bool,
    /// Centre the labels.
    pub centered: bool,
    /// Labels above the markers.
    pub text_above: bool,
    /// Markers react to clicks.
    pub clickable: bool,
}

impl Default for StepsStyle {
    fn default() -> Self {
        Self {
            vertical: false,
            centered: true,
            text_above: false,
            clickable: true,
        }
    }
}

impl StepsStyle {
    /// Class of the steps bar.
    #[must_use]
    pub fn class(self, extra: &str) -> String {
        ClassList::new("steps")
            .with_if(self.vertical, "is-vertical")
            .with_if(self.text_above, "has-content-above")
            .with_if(self.centered, "has-content-centered")
            .with(extra)
            .build()
    }

    /// Class of a step marker.
    #[must_use]
    pub fn marker_class(self, active: bool, color: BulmaColor) -> String {
        ClassList::new("steps-marker")
            .with_if(active, "is-active")
            .with_if(self.clickable, "is-clickable")
            .with_if(color != BulmaColor::Default, color.is_class())
            .build()
    }
}

/// Registry of steps.
pub type StepRegistry = NamedRegistry<StepInfo>;

/// Class of a step segment: done, current (active and dashed) or upcoming (dashed).
#[must_use]
pub fn step_segment_class(index: usize, active_index: Option<usize>) -> String {
    let Some(active) = active_index else {
        return "steps-segment".to_string();
    };
    ClassList::new("steps-segment")
        .with_if(index == active, "is-active")
        .with_if(index >= active, "is-dashed")
        .build()
}

/// Class of a step's content: the caller's class or `is-size-4`.
#[must_use]
pub fn step_content_class(attrs: &Attributes) -> String {
    ClassList::new("steps-content")
        .with(attrs.value("class").unwrap_or("is-size-4"))
        .build()
}

/// What a breadcrumb item shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BreadcrumbLink {
    /// Link text.
    pub label: String,
    /// Link target.
    pub url: String,
    /// Material icon before the text.
    pub icon: Option<String>,
    /// `class`, `a-class` and `icon-class` for this item only.
    pub attributes: Attributes,
}

impl BreadcrumbLink {
    /// Plain link without icon or extra classes.
    #[must_use]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            ..Self::default()
        }
    }
}

/// One registered breadcrumb item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbEntry {
    /// Identity chosen by the item.
    pub key: String,
    /// Zero-based position.
    pub index: usize,
    /// Current text, target and classes.
    pub link: BreadcrumbLink,
}

/// Breadcrumb items; the last one is the current page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BreadcrumbTrail {
    entries: Vec<BreadcrumbEntry>,
}

impl BreadcrumbTrail {
    /// Empty trail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in order.
    #[must_use]
    pub fn entries(&self) -> &[BreadcrumbEntry] {
        &self.entries
    }

    /// Append a plain link; it becomes the last one.
    pub fn add(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        url: impl Into<String>,
        icon: Option<String>,
    ) -> usize {
        let link = BreadcrumbLink {
            icon,
            ..BreadcrumbLink::new(label, url)
        };
        self.add_link(key, link)
    }

    /// Append an item; it becomes the last one.
    pub fn add_link(&mut self, key: impl Into<String>, link: BreadcrumbLink) -> usize {
        let index = self
            .entries
            .iter()
            .map(|entry| entry.index + 1)
            .max()
            .unwrap_or(0);
        self.entries.push(BreadcrumbEntry {
            key: key.into(),
            index,
            link,
        });
        index
    }

    /// Replace what an item shows, keeping its position. Returns `true` when
    /// anything changed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when `key` is not present.
    pub fn update(&mut self, key: &str, link: BreadcrumbLink) -> Result<bool, RegistryError> {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) else {
            let err = RegistryError::NotFound {
                kind: "BreadCrumb",
                key: key.to_string(),
            };
            error!(error = %err, "breadcrumb update failed");
            return Err(err);
        };
        if entry.link == link {
            return Ok(false);
        }
        entry.link = link;
        Ok(true)
    }

    /// Remove an item and re-number the rest.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when `key` is not present.
    pub fn remove(&mut self, key: &str) -> Result<BreadcrumbEntry, RegistryError> {
        let Some(position) = self.entries.iter().position(|entry| entry.key == key) else {
            let err = RegistryError::NotFound {
                kind: "BreadCrumb",
                key: key.to_string(),
            };
            error!(error = %err, "breadcrumb removal failed");
            return Err(err);
        };
        let removed = self.entries.remove(position);
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.index = index;
        }
        Ok(removed)
    }

    /// `true` for the final item.
    #[must_use]
    pub fn is_last(&self, key: &str) -> bool {
        self.entries.last().is_some_and(|entry| entry.key == key)
    }

    fn own_attributes(&self, key: &str) -> Option<&Attributes> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.link.attributes)
    }

    /// Class of an item's `li`: the trail-wide class, then the item's own.
    #[must_use]
    pub fn item_class(&self, key: &str, attrs: &Attributes) -> String {
        ClassList::default()
            .with_if(self.is_last(key), "is-active")
            .with(attrs.class("class"))
            .with_opt(self.own_attributes(key).and_then(|own| own.value("class")))
            .build()
    }

    /// Class of an item's `a`, from its `a-class` attribute.
    #[must_use]
    pub fn link_class(&self, key: &str) -> Option<&str> {
        self.own_attributes(key).and_then(|own| own.value("a-class"))
    }

    /// Class of an item's icon: the trail-wide `icon-class`, then the item's own.
    #[must_use]
    pub fn icon_class(&self, key: &str, attrs: &Attributes) -> String {
        ClassList::new(breadcrumb_icon_class(attrs))
            .with_opt(self.own_attributes(key).and_then(|own| own.value("icon-class")))
            .build()
    }
}

/// Class of the breadcrumb `nav`.
#[must_use]
pub fn breadcrumb_class(attrs: &Attributes) -> String {
    ClassList::new("breadcrumb").with(attrs.class("class")).build()
}

/// Class of a breadcrumb icon.
#[must_use]
pub fn breadcrumb_icon_class(attrs: &Attributes) -> String {
    ClassList::new("material-icons")
        .with(attrs.class("icon-class"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab() -> TabInfo {
        TabInfo {
            icon: None,
            enabled: true,
        }
    }

    #[test]
    fn first_child_becomes_active() {
        let mut tabs = TabRegistry::new("Tabs", None);
        assert_eq!(tabs.add(Some("General"), tab()), Ok(0));
        assert_eq!(tabs.add(Some("Advanced"), tab()), Ok(1));
        assert_eq!(tabs.active(), Some("General"));

        let mut preset = TabRegistry::new("Tabs", Some("Advanced".into()));
        preset.add(Some("General"), tab()).expect("unique");
        assert_eq!(preset.active(), Some("Advanced"));
    }

    #[test]
    fn implicit_activation_is_reported_once() {
        let mut tabs = TabRegistry::new("Tabs", None);
        let mut report = ActiveReport::new(None);
        assert_eq!(report.update(tabs.active()), None);

        tabs.add(Some("General"), tab()).expect("unique");
        tabs.add(Some("Advanced"), tab()).expect("unique");
        assert_eq!(report.update(tabs.active()), Some("General".into()));
        assert_eq!(report.update(tabs.active()), None);

        tabs.remove("General").expect("registered");
        assert_eq!(report.update(tabs.active()), Some("Advanced".into()));

        tabs.remove("Advanced").expect("registered");
        assert_eq!(report.update(tabs.active()), None);
    }

    #[test]
    fn names_the_owner_set_are_not_reported_back() {
        let mut steps = StepRegistry::new("Steps", Some("Two".into()));
        let mut report = ActiveReport::new(Some("Two".into()));
        for name in ["One", "Two", "Three"] {
            steps.add(Some(name), StepInfo::default()).expect("unique");
        }
        assert_eq!(report.update(steps.active()), None);

        // The owner records its own choice before applying it.
        let _ = report.update(Some("Three"));
        steps.set_active(Some("Three".into()));
        assert_eq!(report.update(steps.active()), None);
    }

    #[test]
    fn names_must_be_present_and_unique() {
        let mut tabs = TabRegistry::new("Tabs", None);
        assert_eq!(
            tabs.add(Some("  "), tab()),
            Err(RegistryError::MissingName { kind: "Tabs" })
        );
        tabs.add(Some("General"), tab()).expect("unique");
        assert!(matches!(
            tabs.add(Some("General"), tab()),
            Err(RegistryError::DuplicateName { .. })
        ));
        assert_eq!(tabs.len(), 1);
    }

    #[test]
    fn removal_reindexes_and_falls_back() {
        let mut steps = StepRegistry::new("Steps", None);
        for name in ["One", "Two", "Three"] {
            steps.add(Some(name), StepInfo::default()).expect("unique");
        }
        steps.set_active(Some("Two".into()));
        steps.remove("Two").expect("registered");
        assert_eq!(steps.active(), Some("One"));
        assert_eq!(steps.get("Three").map(|e| e.index), Some(1));
        assert!(steps.remove("Two").is_err());
    }

    #[test]
    fn selection_respects_enabled_flag() {
        let mut tabs = TabRegistry::new("Tabs", None);
        tabs.add(Some("General"), tab()).expect("unique");
        tabs.add(
            Some("Locked"),
            TabInfo {
                icon: None,
                enabled: false,
            },
        )
        .expect("unique");
        tabs.add(Some("Other"), tab()).expect("unique");

        assert_eq!(tabs.select("Locked", |t| t.enabled), Selection::Ignored);
        assert_eq!(tabs.select("General", |t| t.enabled), Selection::Unchanged);
        assert!(Selection::Unchanged.clicked());
        assert_eq!(
            tabs.select("Other", |t| t.enabled),
            Selection::Changed("Other".into())
        );
        assert_eq!(tabs.active_index(), Some(2));
    }

    #[test]
    fn tab_and_bar_classes() {
        assert_eq!(tab_class(0, 3, true), "mr-1 is-active");
        assert_eq!(tab_class(1, 3, false), "mx-1");
        assert_eq!(tab_class(2, 3, false), "ml-1");
        assert_eq!(
            TabsStyle::default().class(""),
            "tabs is-size-6 is-centered is-toggle is-toggle-rounded"
        );
        let boxed = TabsStyle {
            boxed: true,
            toggle: false,
            ..TabsStyle::default()
        };
        assert_eq!(boxed.class("x"), "tabs is-size-6 is-centered is-boxed x");
    }

    #[test]
    fn step_classes() {
        assert_eq!(step_segment_class(0, Some(1)), "steps-segment");
        assert_eq!(step_segment_class(1, Some(1)), "steps-segment is-active is-dashed");
        assert_eq!(step_segment_class(2, Some(1)), "steps-segment is-dashed");
        let style = StepsStyle::default();
        assert_eq!(style.class(""), "steps has-content-centered");
        assert_eq!(
            style.marker_class(true, BulmaColor::Green),
            "steps-marker is-active is-clickable is-success"
        );
        assert_eq!(step_content_class(&Attributes::new()), "steps-content is-size-4");
    }

    #[test]
    fn breadcrumb_marks_last_item() {
        let mut trail = BreadcrumbTrail::new();
        trail.add("a", "Home", "/", Some("home".into()));
        trail.add("b", "Docs", "/docs", None);
        assert!(trail.is_last("b"));
        assert_eq!(trail.item_class("b", &Attributes::new()), "is-active");
        assert_eq!(trail.item_class("a", &Attributes::new()), "");

        trail.remove("b").expect("present");
        assert!(trail.is_last("a"));
        assert_eq!(trail.entries()[0].index, 0);
        assert!(trail.remove("zzz").is_err());
        assert_eq!(breadcrumb_icon_class(&Attributes::new()), "material-icons");
    }

    #[test]
    fn breadcrumb_update_keeps_position() {
        let mut trail = BreadcrumbTrail::new();
        trail.add("a", "Home", "/", None);
        trail.add("b", "Docs", "/docs", None);

        let renamed = BreadcrumbLink {
            icon: Some("book".into()),
            ..BreadcrumbLink::new("Guide", "/guide")
        };
        assert_eq!(trail.update("a", renamed.clone()), Ok(true));
        assert_eq!(trail.update("a", renamed), Ok(false));
        let first = &trail.entries()[0];
        assert_eq!(first.index, 0);
        assert_eq!(first.link.label, "Guide");
        assert_eq!(first.link.url, "/guide");
        assert_eq!(first.link.icon.as_deref(), Some("book"));
        assert!(trail.is_last("b"));
        assert!(trail.update("zzz", BreadcrumbLink::default()).is_err());
    }

    #[test]
    fn breadcrumb_items_carry_their_own_classes() {
        let mut trail = BreadcrumbTrail::new();
        let link = BreadcrumbLink {
            icon: Some("home".into()),
            attributes: Attributes::new()
                .with("class", "crumb")
                .with("a-class", "has-text-link")
                .with("icon-class", "is-small"),
            ..BreadcrumbLink::new("Home", "/")
        };
        trail.add_link("a", link);
        trail.add("b", "Docs", "/docs", None);
        let shared = Attributes::new().with("class", "shared").with("icon-class", "mr-1");

        assert_eq!(trail.item_class("a", &shared), "shared crumb");
        assert_eq!(trail.item_class("b", &shared), "is-active shared");
        assert_eq!(trail.link_class("a"), Some("has-text-link"));
        assert_eq!(trail.link_class("b"), None);
        assert_eq!(trail.icon_class("a", &shared), "material-icons mr-1 is-small");
        assert_eq!(trail.icon_class("b", &Attributes::new()), "material-icons");
    }
}
