//! Form inputs.
//!
//! State lives in the matching `bulma-core` type inside a `use_state`
//! handle. Event handlers clone it, apply the event, store the result and
//! report a changed value through `onchange`.

mod autocomplete;
mod character;
mod choice;
mod datetime;
mod duration;
mod number_pad;

pub use autocomplete::InputAutocomplete;
pub use character::InputCharacter;
pub use choice::{Checkbox, FlagSwitches, InputPassword, RadioGroup, SelectEnum, SelectObject, Switch};
pub use datetime::InputDateTime;
pub use duration::InputDuration;
pub use number_pad::{InputNumberPad, PadNumber};

use bulma_core::FieldError;
use bulma_core::flags::OptionWarning;
use gloo::console;
use yew::prelude::*;

/// Apply `update` to a copy of the state, store it and emit the new value
/// when it differs from the old one.
pub(crate) fn commit<S, V>(
    state: &UseStateHandle<S>,
    value: fn(&S) -> V,
    onchange: &Callback<V>,
    update: impl FnOnce(&mut S),
) where
    S: Clone + 'static,
    V: PartialEq,
{
    let mut next = (**state).clone();
    let before = value(&next);
    update(&mut next);
    let after = value(&next);
    state.set(next);
    if before != after {
        onchange.emit(after);
    }
}

/// Log the option problems found while building an input's state, once per mount.
#[hook]
pub(crate) fn use_option_warnings(widget: &'static str, warnings: Vec<OptionWarning>) {
    use_effect_with_deps(
        move |_| {
            for warning in &warnings {
                console::warn!(format!("{widget}: {}", warning.message()));
            }
            || ()
        },
        (),
    );
}

/// `help is-danger` paragraph for a conversion failure.
pub(crate) fn error_help(error: Option<&FieldError>) -> Html {
    match error {
        Some(error) => html! { <p class="help is-danger">{error.to_string()}</p> },
        None => Html::default(),
    }
}

/// Accept, reset and cancel (and optionally now) buttons under a popout.
#[derive(Properties, PartialEq)]
pub(crate) struct PopoutButtonsProps {
    /// Render the accept button.
    pub show_accept: bool,
    /// Render the reset button.
    pub show_reset: bool,
    /// Render the cancel button.
    pub show_cancel: bool,
    /// Caption of the now button; no button when absent.
    #[prop_or_default]
    pub now_label: Option<AttrValue>,
    /// Accept clicked.
    pub onaccept: Callback<MouseEvent>,
    /// Reset clicked.
    pub onreset: Callback<MouseEvent>,
    /// Cancel clicked.
    pub oncancel: Callback<MouseEvent>,
    /// Now clicked.
    #[prop_or_default]
    pub onnow: Callback<MouseEvent>,
}

#[function_component(PopoutButtons)]
pub(crate) fn popout_buttons(props: &PopoutButtonsProps) -> Html {
    let any = props.show_accept || props.show_reset || props.show_cancel || props.now_label.is_some();
    if !any {
        return Html::default();
    }
    html! {
        <div class="buttons are-small is-centered mt-2">
            if let Some(label) = props.now_label.clone() {
                <button type="button" class="button is-info" onclick={props.onnow.clone()}>{label}</button>
            }
            if props.show_reset {
                <button type="button" class="button is-warning" onclick={props.onreset.clone()}>{"Reset"}</button>
            }
            if props.show_cancel {
                <button type="button" class="button" onclick={props.oncancel.clone()}>{"Cancel"}</button>
            }
            if props.show_accept {
                <button type="button" class="button is-success" onclick={props.onaccept.clone()}>{"Accept"}</button>
            }
        </div>
    }
}
