//! Yew components.
//!
//! Each component keeps its state in a `bulma-core` type, renders the classes
//! that type computes and forwards DOM events to it.

mod composite;
mod containers;
mod elements;
mod error_page;
mod helpers;
mod icon;
pub mod inputs;
mod layout;
mod navbar;
mod panel;

pub use composite::{BreadCrumb, BreadCrumbItem, Step, Steps, Tab, Tabs};
pub use containers::{Card, Message, Modal};
pub use elements::{
    BooleanIcon, Button, ButtonKind, Notification, ProgressBar, Table, TableData, TableHeader, TableRow,
};
pub use error_page::{ErrorBoundary, HttpErrorPage};
pub use helpers::{Label, Loader, ThemeSelector, TitleBlock};
pub use icon::Icon;
pub use layout::{Hero, Level, LevelItem, MediaObject};
pub use navbar::{Navbar, NavbarDropdown, NavbarItem};
pub use panel::Panel;

use bulma_core::Attributes;
use yew::prelude::*;

use crate::support;

/// Core attributes for a component's `class` prop and disabled state.
pub(crate) fn attrs(class: &Classes, disabled: bool) -> Attributes {
    support::attributes(&class.to_string(), disabled)
}

/// Current value of the `<input>` that raised `event`.
pub(crate) fn event_value<E: TargetCast>(event: &E) -> String {
    event.target_unchecked_into::<web_sys::HtmlInputElement>().value()
}

/// Current value of the `<select>` that raised `event`.
pub(crate) fn select_value<E: TargetCast>(event: &E) -> String {
    event.target_unchecked_into::<web_sys::HtmlSelectElement>().value()
}
