//! Loader, title block, label and theme selector.

use crate::attributes::Attributes;
use crate::classes::{tooltip_classes, ClassList};
use crate::flags::{LoadingStatus, TooltipOptions};

/// What the loader shows for a status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    /// Not started: the loader is hidden and the page content shows.
    Idle,
    /// Progress bar.
    InProgress,
    /// Result icon and close button.
    Finished {
        /// The operation failed.
        failed: bool,
    },
}

impl LoaderPhase {
    /// Phase for a status.
    #[must_use]
    pub const fn of(status: LoadingStatus) -> Self {
        if status.is_empty() {
            Self::Idle
        } else if status.contains(LoadingStatus::COMPLETE) || status.contains(LoadingStatus::FAILED) {
            Self::Finished {
                failed: status.contains(LoadingStatus::FAILED),
            }
        } else {
            Self::InProgress
        }
    }
}

/// Loader display options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderView {
    /// Current status; empty means not started.
    pub status: LoadingStatus,
    /// Percentage done, if known.
    pub completion: Option<u8>,
    /// Fill the viewport below the navbar.
    pub full_height: bool,
    /// Caption while loading.
    pub message: String,
}

impl Default for LoaderView {
    fn default() -> Self {
        Self {
            status: LoadingStatus::empty(),
            completion: None,
            full_height: false,
            message: "Loading...".to_string(),
        }
    }
}

impl LoaderView {
    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> LoaderPhase {
        LoaderPhase::of(self.status)
    }

    /// Completion clamped to 100.
    #[must_use]
    pub fn completion(&self) -> Option<u8> {
        self.completion.map(|value| value.min(100))
    }

    /// Close clicked: the status resets to not started.
    pub fn close(&mut self) -> LoadingStatus {
        self.status = LoadingStatus::empty();
        self.status
    }

    /// Result icon.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        if self.status.contains(LoadingStatus::FAILED) {
            "error_outline"
        } else {
            "check_circle"
        }
    }

    /// `hero` + full height + hidden when idle.
    #[must_use]
    pub fn class(&self, attrs: &Attributes) -> String {
        ClassList::new("hero")
            .with_if(self.full_height, "is-fullheight-with-navbar")
            .with_if(self.status.is_empty(), "is-hidden")
            .with(attrs.class("class"))
            .build()
    }

    /// `has-text-centered` + container when full height.
    #[must_use]
    pub fn container_class(&self, attrs: &Attributes) -> String {
        ClassList::new("has-text-centered")
            .with_if(self.full_height, "container")
            .with(attrs.class("container-class"))
            .build()
    }

    /// `progress`.
    #[must_use]
    pub fn progress_class(attrs: &Attributes) -> String {
        ClassList::new("progress").with(attrs.class("progress-class")).build()
    }

    /// Result icon coloured by outcome.
    #[must_use]
    pub fn icon_class(&self, attrs: &Attributes) -> String {
        ClassList::new("material-icons is-size-1")
            .with(if self.status.contains(LoadingStatus::FAILED) {
                "has-text-danger"
            } else {
                "has-text-success"
            })
            .with(attrs.class("icon-class"))
            .build()
    }

    /// Wrapper of the loading fragment: hidden when idle.
    #[must_use]
    pub fn loading_class(&self, attrs: &Attributes) -> String {
        ClassList::default()
            .with_if(self.status.is_empty(), "is-hidden")
            .with(attrs.class("loading-class"))
            .build()
    }

    /// Wrapper of the page content: hidden while the loader shows.
    #[must_use]
    pub fn content_class(&self, attrs: &Attributes) -> String {
        ClassList::default()
            .with_if(!self.status.is_empty(), "is-hidden")
            .with(attrs.class("content-class"))
            .build()
    }
}

/// Title banner options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TitleBlockStyle {
    /// Small hero.
    pub tiny: bool,
    /// Gradient.
    pub bold: bool,
    /// Tooltip placement.
    pub tooltip: TooltipOptions,
}

impl Default for TitleBlockStyle {
    fn default() -> Self {
        Self {
            tiny: true,
            bold: true,
            tooltip: TooltipOptions::empty(),
        }
    }
}

impl TitleBlockStyle {
    /// `hero is-primary` + tiny + bold.
    #[must_use]
    pub fn class(self, attrs: &Attributes) -> String {
        ClassList::new("hero is-primary")
            .with_if(self.tiny, "is-tiny")
            .with_if(self.bold, "is-bold")
            .with(attrs.class("class"))
            .build()
    }

    /// `hero-body pl-4`.
    #[must_use]
    pub fn body_class(attrs: &Attributes) -> String {
        ClassList::new("hero-body pl-4").with(attrs.class("body-class")).build()
    }

    /// `title has-text-centered`.
    #[must_use]
    pub fn title_class(attrs: &Attributes) -> String {
        ClassList::new("title has-text-centered")
            .with(attrs.class("title-class"))
            .build()
    }

    /// Tooltip wrapper around the title.
    #[must_use]
    pub fn tooltip_class(self, attrs: &Attributes) -> String {
        ClassList::new(tooltip_classes(attrs.value("data-tooltip"), self.tooltip, true))
            .with(attrs.class("tooltip-class"))
            .build()
    }
}

/// Document title for a page: `"{title} - {application}"` or just the title.
#[must_use]
pub fn page_title(title: &str, application: Option<&str>) -> String {
    match application.map(str::trim).filter(|app| !app.is_empty()) {
        Some(app) => format!("{title} - {app}"),
        None => title.to_string(),
    }
}

/// `label`.
#[must_use]
pub fn label_class(attrs: &Attributes) -> String {
    ClassList::new("label").with(attrs.class("class")).build()
}

/// Tooltip span inside a label; no help cursor.
#[must_use]
pub fn label_tooltip_class(tooltip: Option<&str>, options: TooltipOptions) -> String {
    tooltip_classes(tooltip, options, false)
}

/// Theme toggle wrapper: `navbar-item` when placed in a navbar.
#[must_use]
pub fn theme_selector_class(navbar_item: bool, attrs: &Attributes) -> String {
    ClassList::default()
        .with_if(navbar_item, "navbar-item")
        .with(attrs.class("class"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_hides_until_started() {
        let mut loader = LoaderView::default();
        let attrs = Attributes::new();
        assert_eq!(loader.phase(), LoaderPhase::Idle);
        assert_eq!(loader.class(&attrs), "hero is-hidden");
        assert_eq!(loader.content_class(&attrs), "");

        loader.status = LoadingStatus::IN_PROGRESS;
        loader.full_height = true;
        assert_eq!(loader.phase(), LoaderPhase::InProgress);
        assert_eq!(loader.class(&attrs), "hero is-fullheight-with-navbar");
        assert_eq!(loader.content_class(&attrs), "is-hidden");

        loader.status = LoadingStatus::COMPLETE | LoadingStatus::FAILED;
        assert_eq!(loader.phase(), LoaderPhase::Finished { failed: true });
        assert_eq!(loader.icon(), "error_outline");
        assert_eq!(loader.icon_class(&attrs), "material-icons is-size-1 has-text-danger");

        assert!(loader.close().is_empty());
        assert_eq!(loader.icon(), "check_circle");
    }

    #[test]
    fn completion_is_clamped() {
        let loader = LoaderView {
            completion: Some(140),
            ..LoaderView::default()
        };
        assert_eq!(loader.completion(), Some(100));
    }

    #[test]
    fn title_block_classes_and_page_title() {
        let style = TitleBlockStyle::default();
        let attrs = Attributes::new().with("data-tooltip", "About this page");
        assert_eq!(style.class(&attrs), "hero is-primary is-tiny is-bold");
        assert_eq!(style.tooltip_class(&attrs), "is-cursor-help");
        assert_eq!(page_title("Settings", Some("Demo")), "Settings - Demo");
        assert_eq!(page_title("Settings", Some(" ")), "Settings");
    }

    #[test]
    fn label_and_theme_selector() {
        assert_eq!(label_class(&Attributes::new()), "label");
        assert_eq!(
            label_tooltip_class(Some("Help"), TooltipOptions::RIGHT | TooltipOptions::HAS_ARROW),
            "has-tooltip-right has-tooltip-arrow"
        );
        assert_eq!(theme_selector_class(true, &Attributes::new()), "navbar-item");
    }
}
