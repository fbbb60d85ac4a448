use bulma_core::autocomplete::{menu_class, tag_class, trigger_class};
use bulma_core::{Autocomplete, InputAutocompleteOptions, InputStatus};
use yew::prelude::*;

use super::{commit, error_help, use_option_warnings};
use crate::components::{attrs, event_value};
use crate::support::with_part;

/// Properties of [`InputAutocomplete`].
#[derive(Properties, PartialEq)]
pub struct InputAutocompleteProps<T: Clone + PartialEq + 'static> {
    /// Items to choose from.
    #[prop_or_default]
    pub items: Vec<T>,
    /// Selected item.
    #[prop_or_default]
    pub value: Option<T>,
    /// Text shown for an item; read once when the input is created.
    pub display: Callback<T, String>,
    /// Narrows the list for the typed text; read once when the input is created.
    #[prop_or_default]
    pub filter: Option<Callback<(T, String), bool>>,
    /// Show at most this many items; zero shows all.
    #[prop_or_default]
    pub display_count: usize,
    /// Allow an empty value.
    #[prop_or(true)]
    pub nullable: bool,
    /// Behaviour flags; conflicting ones are resolved on mount.
    #[prop_or_default]
    pub options: InputAutocompleteOptions,
    /// Status colors for the box and its icon.
    #[prop_or(InputStatus::empty())]
    pub status: InputStatus,
    /// Field name used in error messages.
    #[prop_or(AttrValue::Static("Value"))]
    pub field: AttrValue,
    /// Material icon on the left of the box.
    #[prop_or(AttrValue::Static("search"))]
    pub icon: AttrValue,
    /// Hint shown while the box is empty.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// Show the selection as a tag under the input.
    #[prop_or_default]
    pub show_tag: bool,
    /// Render inactive and ignore input.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Extra classes on the icon.
    #[prop_or_default]
    pub icon_class: AttrValue,
    /// Extra classes on each menu entry.
    #[prop_or_default]
    pub dropdown_item_class: AttrValue,
    /// Fires with the newly selected item.
    #[prop_or_default]
    pub onchange: Callback<Option<T>>,
    /// Typed text, for callers that load items lazily.
    #[prop_or_default]
    pub onitemsrequested: Callback<String>,
}

fn build<T: Clone + PartialEq + 'static>(props: &InputAutocompleteProps<T>) -> Autocomplete<T> {
    let display = props.display.clone();
    let mut state = Autocomplete::new(props.field.to_string(), props.options, move |item: &T| {
        display.emit(item.clone())
    })
    .with_nullable(props.nullable)
    .with_status(props.status);
    if let Some(filter) = props.filter.clone() {
        state = state.with_filter(move |item: &T, text: &str| filter.emit((item.clone(), text.to_string())));
    }
    if props.display_count > 0 {
        state = state.with_display_count(props.display_count);
    }
    state.set_items(props.items.clone());
    state.set_selected(props.value.clone());
    state
}

/// Text box with a filtered dropdown of items.
#[function_component(InputAutocomplete)]
pub fn input_autocomplete<T>(props: &InputAutocompleteProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    let state = use_state(|| build(props));
    use_option_warnings("InputAutocomplete", state.warnings().to_vec());
    {
        let state = state.clone();
        use_effect_with_deps(
            move |(items, value): &(Vec<T>, Option<T>)| {
                let mut next = (*state).clone();
                next.set_items(items.clone());
                if next.selected() != value.as_ref() {
                    next.set_selected(value.clone());
                }
                state.set(next);
                || ()
            },
            (props.items.clone(), props.value.clone()),
        );
    }

    let disabled = props.disabled;
    let selected = |input: &Autocomplete<T>| input.selected().cloned();
    let onchange = props.onchange.clone();
    let update = {
        let state = state.clone();
        move |apply: Box<dyn FnOnce(&mut Autocomplete<T>)>| {
            commit(&state, selected, &onchange, apply);
        }
    };

    let onfocus = {
        let update = update.clone();
        Callback::from(move |_: FocusEvent| {
            if !disabled {
                update(Box::new(Autocomplete::<T>::on_focus));
            }
        })
    };
    let onclick = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                update(Box::new(Autocomplete::<T>::on_focus));
            }
        })
    };
    let onblur = {
        let update = update.clone();
        Callback::from(move |_: FocusEvent| update(Box::new(Autocomplete::<T>::on_blur)))
    };
    let oninput = {
        let update = update.clone();
        let requested = props.onitemsrequested.clone();
        Callback::from(move |event: InputEvent| {
            let text = event_value(&event);
            requested.emit(text.clone());
            update(Box::new(move |input: &mut Autocomplete<T>| {
                let _ = input.on_input(&text);
            }));
        })
    };
    let onkeydown = {
        let update = update.clone();
        Callback::from(move |event: KeyboardEvent| {
            let code = event.code();
            let prevent = bulma_core::autocomplete::PREVENT_DEFAULT_KEYS.contains(&code.as_str());
            if prevent {
                event.prevent_default();
            }
            update(Box::new(move |input: &mut Autocomplete<T>| {
                input.on_key_down(&code);
            }));
        })
    };
    let onkeyup = {
        let update = update.clone();
        Callback::from(move |event: KeyboardEvent| {
            let code = event.code();
            update(Box::new(move |input: &mut Autocomplete<T>| input.on_key_up(&code)));
        })
    };
    let onmousedown = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| update(Box::new(Autocomplete::<T>::on_mouse_down)))
    };
    let onmouseup = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| update(Box::new(Autocomplete::<T>::on_mouse_up)))
    };

    let attrs = with_part(
        with_part(attrs(&props.class, disabled), "icon-class", &props.icon_class),
        "dropdown-item-class",
        &props.dropdown_item_class,
    );
    let extra = attrs.class("class").to_string();
    let items = state.display_items().into_iter().map(|item| {
        let chosen = item.clone();
        let update = update.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            let chosen = chosen.clone();
            update(Box::new(move |input: &mut Autocomplete<T>| input.select(chosen)));
        });
        html! {
            <a class={state.item_class(item, &attrs)} {onclick}>{state.display(item)}</a>
        }
    });

    html! {
        <>
            <div class={state.dropdown_class(&attrs)}>
                <div class={trigger_class(&attrs)}>
                    <div class="control has-icons-left">
                        <input
                            class={state.input_class(&extra)}
                            type="text"
                            autocomplete="off"
                            value={state.text()}
                            placeholder={props.placeholder.clone()}
                            {disabled}
                            {onfocus}
                            {onclick}
                            {onblur}
                            {oninput}
                            {onkeydown}
                            {onkeyup}
                        />
                        <span class={state.icon_class(&attrs, &extra)}>{props.icon.clone()}</span>
                    </div>
                </div>
                <div class={menu_class(&attrs)} role="menu" {onmousedown} {onmouseup}>
                    <div class="dropdown-content">{ for items }</div>
                </div>
            </div>
            if props.show_tag {
                if let Some(item) = state.selected() {
                    <span class={tag_class(&attrs)}>{state.display(item)}</span>
                }
            }
            {error_help(state.error())}
        </>
    }
}
