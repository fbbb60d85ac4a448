//! Class builders and small state machines for the non-input widgets.
//!
//! Each submodule mirrors a Bulma documentation section: `elements`,
//! `components`, `layout`, plus app-level `helpers`.

pub mod components;
pub mod elements;
pub mod helpers;
pub mod layout;
