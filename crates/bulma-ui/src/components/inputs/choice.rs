//! Selects, flag switches, radio groups, checkboxes and the password box.

use bitflags::Flags;
use bulma_core::choice::{
    ChoiceEnum, PasswordHint, RadioGroup as RadioOptions, checkbox_class, enum_options, flag_options,
    flag_switch_id, is_flag_checked, new_group_id, parse_enum, radio_item_class, select_class,
    select_object, switch_class, toggle_flag,
};
use bulma_core::{FieldError, InputStatus};
use yew::prelude::*;

use super::error_help;
use crate::components::{attrs, event_value, select_value};
use crate::support::with_part;

/// Properties of [`SelectObject`].
#[derive(Properties, PartialEq)]
pub struct SelectObjectProps<T: Clone + PartialEq + 'static> {
    /// Items to choose from.
    pub items: Vec<T>,
    /// Selected item.
    #[prop_or_default]
    pub value: Option<T>,
    /// Text shown for, and matched against, each item.
    pub display: Callback<T, String>,
    /// Allow an empty value.
    #[prop_or_default]
    pub nullable: bool,
    /// Caption of the blank option shown for nullable fields.
    #[prop_or_default]
    pub placeholder: AttrValue,
    /// Field name used in error messages.
    #[prop_or(AttrValue::Static("Value"))]
    pub field: AttrValue,
    /// Status colors for the select.
    #[prop_or(InputStatus::empty())]
    pub status: InputStatus,
    /// Render inactive and ignore input.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Fires with the newly selected item.
    #[prop_or_default]
    pub onchange: Callback<Option<T>>,
}

/// Select over arbitrary items matched by their display text.
#[function_component(SelectObject)]
pub fn select_object_component<T>(props: &SelectObjectProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    let error = use_state(|| None::<FieldError>);
    let onchange = {
        let error = error.clone();
        let items = props.items.clone();
        let display = props.display.clone();
        let nullable = props.nullable;
        let field = props.field.clone();
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            let text = select_value(&event);
            match select_object(&items, |item| display.emit(item.clone()), &text, nullable, &field) {
                Ok(value) => {
                    error.set(None);
                    onchange.emit(value);
                }
                Err(err) => error.set(Some(err)),
            }
        })
    };
    let selected = props.value.as_ref().map(|value| props.display.emit(value.clone()));
    let options = props.items.iter().map(|item| {
        let text = props.display.emit(item.clone());
        let is_selected = selected.as_deref() == Some(text.as_str());
        html! { <option value={text.clone()} selected={is_selected}>{text}</option> }
    });
    let class = select_class(props.status, &attrs(&props.class, props.disabled).class("class").to_string());
    html! {
        <>
            <div {class}>
                <select disabled={props.disabled} {onchange}>
                    if props.nullable {
                        <option value="" selected={selected.is_none()}>{props.placeholder.clone()}</option>
                    }
                    { for options }
                </select>
            </div>
            {error_help((*error).as_ref())}
        </>
    }
}

/// Properties of [`SelectEnum`].
#[derive(Properties, PartialEq)]
pub struct SelectEnumProps<E: ChoiceEnum> {
    /// Selected variant.
    #[prop_or_default]
    pub value: Option<E>,
    /// Allow an empty value.
    #[prop_or_default]
    pub nullable: bool,
    /// Leave out the first variant.
    #[prop_or_default]
    pub hide_zero: bool,
    /// Field name used in error messages.
    #[prop_or(AttrValue::Static("Value"))]
    pub field: AttrValue,
    /// Status colors for the select.
    #[prop_or(InputStatus::empty())]
    pub status: InputStatus,
    /// Render inactive and ignore input.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Fires with the newly selected variant.
    #[prop_or_default]
    pub onchange: Callback<Option<E>>,
}

/// Select over the variants of a [`ChoiceEnum`].
#[function_component(SelectEnum)]
pub fn select_enum<E: ChoiceEnum>(props: &SelectEnumProps<E>) -> Html {
    let error = use_state(|| None::<FieldError>);
    let onchange = {
        let error = error.clone();
        let nullable = props.nullable;
        let field = props.field.clone();
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| match parse_enum::<E>(&select_value(&event), nullable, &field) {
            Ok(value) => {
                error.set(None);
                onchange.emit(value);
            }
            Err(err) => error.set(Some(err)),
        })
    };
    let options = enum_options::<E>(props.hide_zero).iter().map(|variant| {
        let label = variant.label();
        html! { <option value={label} selected={props.value == Some(*variant)}>{label}</option> }
    });
    let class = select_class(props.status, &props.class.to_string());
    html! {
        <>
            <div {class}>
                <select disabled={props.disabled} {onchange}>
                    if props.nullable {
                        <option value="" selected={props.value.is_none()}></option>
                    }
                    { for options }
                </select>
            </div>
            {error_help((*error).as_ref())}
        </>
    }
}

/// Properties of [`FlagSwitches`].
#[derive(Properties, PartialEq)]
pub struct FlagSwitchesProps<F: Flags + Copy + PartialEq + 'static> {
    /// Current flag set.
    pub value: F,
    /// Leave out flags with no bits.
    #[prop_or(true)]
    pub hide_zero: bool,
    /// Wrap in a `box`.
    #[prop_or(true)]
    pub boxed: bool,
    /// Render inactive and ignore input.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Fires with the set after one flag is toggled.
    #[prop_or_default]
    pub onchange: Callback<F>,
}

/// One switch per declared flag.
#[function_component(FlagSwitches)]
pub fn flag_switches<F>(props: &FlagSwitchesProps<F>) -> Html
where
    F: Flags + Copy + PartialEq + 'static,
{
    let group = use_memo(|_| new_group_id(), ());
    let switches = flag_options::<F>(props.hide_zero).into_iter().map(|(name, flag)| {
        let id = flag_switch_id(&group, name);
        let value = props.value;
        let onchange = props.onchange.reform(move |_: Event| toggle_flag(value, flag));
        html! {
            <div class="field">
                <input
                    id={id.clone()}
                    type="checkbox"
                    class={switch_class("is-rounded")}
                    checked={is_flag_checked(props.value, flag)}
                    disabled={props.disabled}
                    {onchange}
                />
                <label for={id}>{name}</label>
            </div>
        }
    });
    html! {
        <div class={checkbox_class(props.boxed, &props.class.to_string())}>{ for switches }</div>
    }
}

/// Properties of [`RadioGroup`].
#[derive(Properties, PartialEq)]
pub struct RadioGroupProps<T: Clone + PartialEq + 'static> {
    /// Label and value of each option.
    pub options: Vec<(AttrValue, T)>,
    /// Checked option.
    #[prop_or_default]
    pub value: Option<T>,
    /// Render inactive and ignore input.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Extra classes on each radio input.
    #[prop_or_default]
    pub item_class: AttrValue,
    /// Fires with the newly checked value.
    #[prop_or_default]
    pub onchange: Callback<T>,
}

/// Radio buttons sharing one generated group name.
#[function_component(RadioGroup)]
pub fn radio_group<T>(props: &RadioGroupProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    let group = use_memo(|_| new_group_id(), ());
    let radios = RadioOptions::new(
        group.to_string(),
        props
            .options
            .iter()
            .map(|(label, value)| (label.to_string(), value.clone()))
            .collect(),
    );
    let attrs = with_part(attrs(&props.class, props.disabled), "item-class", &props.item_class);
    let checked = props.value.as_ref().and_then(|value| radios.display_of(value));
    let items = radios.options().iter().map(|(label, value)| {
        let id = radios.option_id(label);
        let value = value.clone();
        let onchange = props.onchange.reform(move |_: Event| value.clone());
        html! {
            <>
                <input
                    id={id.clone()}
                    type="radio"
                    name={group.to_string()}
                    class={radio_item_class(&attrs)}
                    checked={checked == Some(label.as_str())}
                    disabled={props.disabled}
                    {onchange}
                />
                <label for={id}>{label.clone()}</label>
            </>
        }
    });
    html! { <div class={classes!("field", props.class.clone())}>{ for items }</div> }
}

/// Properties of [`Checkbox`].
#[derive(Properties, PartialEq)]
pub struct CheckboxProps {
    /// Current state.
    #[prop_or_default]
    pub checked: bool,
    /// Caption beside the box.
    #[prop_or_default]
    pub text: AttrValue,
    /// Wrap in a `box`.
    #[prop_or_default]
    pub boxed: bool,
    /// Render inactive and ignore input.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Fires with the toggled state.
    #[prop_or_default]
    pub onchange: Callback<bool>,
}

/// Checkbox with a caption.
#[function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> Html {
    let checked = props.checked;
    let onchange = props.onchange.reform(move |_: Event| !checked);
    html! {
        <label class={checkbox_class(props.boxed, &props.class.to_string())}>
            <input type="checkbox" {checked} disabled={props.disabled} {onchange} />
            {" "}{props.text.clone()}
        </label>
    }
}

/// Boolean switch; the same props as [`Checkbox`].
#[function_component(Switch)]
pub fn switch(props: &CheckboxProps) -> Html {
    let id = use_memo(|_| format!("switch-{}", new_group_id()), ());
    let checked = props.checked;
    let onchange = props.onchange.reform(move |_: Event| !checked);
    html! {
        <div class={checkbox_class(props.boxed, "")}>
            <input
                id={id.to_string()}
                type="checkbox"
                class={switch_class(&props.class.to_string())}
                {checked}
                disabled={props.disabled}
                {onchange}
            />
            <label for={id.to_string()}>{props.text.clone()}</label>
        </div>
    }
}

/// Properties of [`InputPassword`].
#[derive(Properties, PartialEq)]
pub struct InputPasswordProps {
    /// Current text.
    #[prop_or_default]
    pub value: AttrValue,
    /// Hint shown while the box is empty.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// Status colors for the box.
    #[prop_or(InputStatus::empty())]
    pub status: InputStatus,
    /// Render inactive and ignore input.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Extra classes on the caps lock warning.
    #[prop_or_default]
    pub message_class: AttrValue,
    /// Fires with the committed text.
    #[prop_or_default]
    pub onchange: Callback<String>,
}

/// Password box that warns while caps lock is on.
#[function_component(InputPassword)]
pub fn input_password(props: &InputPasswordProps) -> Html {
    let hint = use_state(PasswordHint::default);
    let onkeydown = {
        let hint = hint.clone();
        Callback::from(move |event: KeyboardEvent| {
            let mut next = (*hint).clone();
            next.on_key(&event.key(), event.shift_key());
            if next != *hint {
                hint.set(next);
            }
        })
    };
    let onchange = props.onchange.reform(|event: Event| event_value(&event));
    let attrs = with_part(attrs(&props.class, props.disabled), "message-class", &props.message_class);
    let class = bulma_core::classes::input_class(props.status, attrs.class("class"));
    html! {
        <>
            <div class="control has-icons-left">
                <input
                    {class}
                    type="password"
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    disabled={props.disabled}
                    {onkeydown}
                    {onchange}
                />
                <span class="material-icons icon is-left">{"lock"}</span>
            </div>
            if let Some(message) = hint.message() {
                <p class={hint.message_class(&attrs)}>{message.to_string()}</p>
            }
        </>
    }
}
