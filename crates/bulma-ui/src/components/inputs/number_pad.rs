use std::str::FromStr;

use bulma_core::NumberPad;
use bulma_core::number_pad::{NUMBER_PAD_ICON, PadKey};
use yew::prelude::*;

use super::error_help;
use crate::components::attrs;
use crate::support::{PadButton, pad_rows, with_part};

/// Numbers the pad can edit.
pub trait PadNumber: FromStr + PartialEq + ToString + Clone + 'static {}

impl<T> PadNumber for T where T: FromStr + PartialEq + ToString + Clone + 'static {}

/// Properties of [`InputNumberPad`].
#[derive(Properties, PartialEq)]
pub struct InputNumberPadProps<T: PadNumber> {
    /// Bound number.
    #[prop_or_default]
    pub value: Option<T>,
    /// Allow an empty value.
    #[prop_or_default]
    pub nullable: bool,
    /// Show the decimal separator key.
    #[prop_or_default]
    pub decimals: bool,
    /// Show the number above the pad.
    #[prop_or(true)]
    pub display_input: bool,
    /// Rounded buttons.
    #[prop_or(true)]
    pub rounded: bool,
    /// Outlined buttons.
    #[prop_or(true)]
    pub bordered: bool,
    /// Color the display by validation result.
    #[prop_or(true)]
    pub use_automatic_status_colors: bool,
    /// Field name used in error messages.
    #[prop_or(AttrValue::Static("Number"))]
    pub field: AttrValue,
    /// Render inactive and ignore input.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Extra classes on each button.
    #[prop_or_default]
    pub button_class: AttrValue,
    /// Fires with each new value.
    #[prop_or_default]
    pub onchange: Callback<Option<T>>,
}

/// Parse the buffer and report a value that differs from the bound one.
fn reparse<T: PadNumber>(pad: &mut NumberPad, current: Option<&T>, onchange: &Callback<Option<T>>) {
    if let Ok(value) = pad.parse::<T>() {
        if value.as_ref() != current {
            onchange.emit(value);
        }
    }
}

/// On-screen keypad bound to a number.
#[function_component(InputNumberPad)]
pub fn input_number_pad<T>(props: &InputNumberPadProps<T>) -> Html
where
    T: PadNumber,
{
    let state = use_state(|| {
        let mut pad = NumberPad::new(
            props.field.to_string(),
            props.nullable,
            props.decimals,
            props.value.as_ref().map(ToString::to_string),
        );
        pad.style.display_input = props.display_input;
        pad.style.rounded = props.rounded;
        pad.style.bordered = props.bordered;
        pad.style.use_automatic_status_colors = props.use_automatic_status_colors;
        pad
    });
    {
        let state = state.clone();
        use_effect_with_deps(
            move |value: &Option<T>| {
                let mut next = (*state).clone();
                next.sync(value.as_ref());
                if next != *state {
                    state.set(next);
                }
                || ()
            },
            props.value.clone(),
        );
    }

    let disabled = props.disabled;
    let apply = {
        let state = state.clone();
        let current = props.value.clone();
        let onchange = props.onchange.clone();
        move |edit: Box<dyn FnOnce(&mut NumberPad) -> bool>| {
            let mut next = (*state).clone();
            if edit(&mut next) {
                reparse(&mut next, current.as_ref(), &onchange);
            }
            state.set(next);
        }
    };
    let key_handler = |on_display: bool| {
        let apply = apply.clone();
        Callback::from(move |event: KeyboardEvent| {
            let code = event.code();
            apply(Box::new(move |pad: &mut NumberPad| {
                let (prevent, reparse) = if on_display {
                    pad.on_input_key_down(&code, disabled)
                } else {
                    pad.on_button_key_down(&code, disabled)
                };
                if prevent {
                    event.prevent_default();
                }
                reparse
            }));
        })
    };

    let attrs = with_part(attrs(&props.class, disabled), "button-class", &props.button_class);
    let style = &state.style;
    let rows = pad_rows(state.allows_decimals()).into_iter().map(|row| {
        let buttons = row.into_iter().map(|button| {
            let apply = apply.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                apply(Box::new(move |pad: &mut NumberPad| match button {
                    PadButton::Key(key) => pad.press(key, disabled),
                    PadButton::Reset => pad.reset(disabled),
                }));
            });
            let caption = match button {
                PadButton::Key(PadKey::Digit(digit)) => digit.to_string(),
                PadButton::Key(PadKey::Decimal) => ".".to_string(),
                PadButton::Key(PadKey::Backspace) => style.backspace_text.clone(),
                PadButton::Reset => style.reset_text.clone(),
            };
            html! {
                <div class="column is-4 py-0">
                    <button
                        type="button"
                        class={state.button_class(&attrs)}
                        {disabled}
                        {onclick}
                        onkeydown={key_handler(false)}
                    >
                        {caption}
                    </button>
                </div>
            }
        });
        html! { <div class="columns is-mobile mb-0">{ for buttons }</div> }
    });

    html! {
        <div class="number-pad">
            if style.display_input {
                <div class="control has-icons-left">
                    <input
                        class={state.display_class(&attrs)}
                        type="text"
                        inputmode="none"
                        readonly=true
                        value={state.text().to_string()}
                        onkeydown={key_handler(true)}
                    />
                    <span class="material-icons icon is-left">{NUMBER_PAD_ICON}</span>
                </div>
            }
            { for rows }
            {error_help(state.error())}
        </div>
    }
}
