//! Browser access: colour-scheme query, theme stylesheets, local storage and
//! the document title.

use anyhow::{Result, anyhow};
use bulma_core::theme::{StylesheetChange, ThemeDecision, ThemeMode, ThemeSettings};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlLinkElement, MediaQueryList};

/// `true` when the OS asks for a dark colour scheme.
#[must_use]
pub fn prefers_dark() -> Option<bool> {
    let media: MediaQueryList = window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()?
        .flatten()?;
    Some(media.matches())
}

/// Raw stored theme choice.
#[must_use]
pub fn stored_preference(settings: &ThemeSettings) -> Option<String> {
    LocalStorage::raw().get_item(&settings.storage_key).ok().flatten()
}

fn apply_change(change: &StylesheetChange) -> Result<()> {
    let link = document()
        .get_element_by_id(&change.id)
        .ok_or_else(|| anyhow!("stylesheet {} not found", change.id))?
        .dyn_into::<HtmlLinkElement>()
        .map_err(|_| anyhow!("element {} is not a <link>", change.id))?;
    link.set_disabled(!change.enable);
    if change.clear_media {
        link.remove_attribute("media")
            .map_err(|err| anyhow!("clearing media on {} failed: {err:?}", change.id))?;
    }
    Ok(())
}

fn apply(decision: &ThemeDecision, settings: &ThemeSettings) -> Result<()> {
    for change in &decision.changes {
        apply_change(change)?;
    }
    if let Some(value) = decision.store {
        LocalStorage::raw()
            .set_item(&settings.storage_key, value)
            .map_err(|err| anyhow!("storing {} failed: {err:?}", settings.storage_key))?;
    }
    Ok(())
}

/// Perform a theme decision, logging failures to the console.
pub fn apply_theme(decision: &ThemeDecision, settings: &ThemeSettings) {
    if let Err(err) = apply(decision, settings) {
        console::error!("theme update failed", err.to_string());
    }
}

/// Resolve and apply the theme for first render.
#[must_use]
pub fn initial_theme(settings: &ThemeSettings) -> ThemeMode {
    let stored = stored_preference(settings);
    let decision = settings.resolve_initial(prefers_dark().unwrap_or(false), stored.as_deref());
    apply_theme(&decision, settings);
    decision.mode
}

/// Replace `document.title`.
pub fn set_document_title(title: &str) {
    document().set_title(title);
}
