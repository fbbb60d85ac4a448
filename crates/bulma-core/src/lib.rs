#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unreachable_pub, dead_code, unused)]
#![allow(clippy::module_name_repetitions)]

//! DOM-free logic behind the Bulma components: option flags, class
//! composition, value conversion, popout state and parent/child registries.
//!
//! Layout: `flags.rs`/`color.rs`/`classes.rs`/`attributes.rs` (shared
//! vocabulary), one module per input (`duration`, `datetime`, `autocomplete`,
//! `character`, `number_pad`, `choice`), `registry.rs` (tabs, steps,
//! breadcrumbs), `widgets/` (everything else), plus `theme`, `http_error`,
//! `settings` and native-only `logging`.

pub mod attributes;
pub mod autocomplete;
pub mod character;
pub mod choice;
pub mod classes;
pub mod color;
pub mod datetime;
pub mod duration;
pub mod error;
pub mod flags;
pub mod http_error;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod number_pad;
pub mod registry;
pub mod settings;
pub mod theme;
pub mod widgets;

pub use attributes::Attributes;
pub use autocomplete::{Autocomplete, MatchStrategy};
pub use character::CharacterGrid;
pub use classes::ClassList;
pub use color::{BulmaColor, ImageSize};
pub use datetime::{DateTimeInput, DateTimeSteps};
pub use duration::{DurationInput, DurationSteps};
pub use error::{BulmaError, BulmaResult, FieldError, RegistryError, SettingsError};
pub use flags::{
    DateTimeKind, DurationKind, InputAutocompleteOptions, InputDateTimeOptions, InputDurationOptions, InputStatus,
    LoadingStatus, TooltipOptions,
};
pub use http_error::{ErrorPage, ErrorReport, HttpFailure};
pub use number_pad::NumberPad;
pub use registry::{
    ActiveReport, BreadcrumbLink, BreadcrumbTrail, NamedRegistry, Selection, StepRegistry, TabRegistry,
};
pub use settings::BulmaSettings;
pub use theme::{ThemeMode, ThemeSettings};
