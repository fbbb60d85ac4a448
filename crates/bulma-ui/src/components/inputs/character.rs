use bulma_core::character::{CharacterStyle, alphabet, column_class, columns_class};
use bulma_core::{BulmaColor, CharacterGrid};
use yew::prelude::*;

use super::commit;
use crate::components::attrs;
use crate::support::{icon_class, with_part};

/// Properties of [`InputCharacter`].
#[derive(Properties, PartialEq)]
pub struct InputCharacterProps {
    /// Selected character.
    #[prop_or_default]
    pub value: Option<char>,
    /// Defaults to `A` through `Z`.
    #[prop_or_default]
    pub characters: Option<Vec<char>>,
    /// Buttons per row.
    #[prop_or(3)]
    pub columns: usize,
    /// Allow an empty value.
    #[prop_or_default]
    pub nullable: bool,
    /// Add a button that flips letter case.
    #[prop_or(true)]
    pub show_case_change: bool,
    /// Rounded buttons.
    #[prop_or(true)]
    pub rounded: bool,
    /// Outlined buttons.
    #[prop_or(true)]
    pub bordered: bool,
    /// Color of the selected button.
    #[prop_or(BulmaColor::Turquoise)]
    pub active_color: BulmaColor,
    /// Render inactive and ignore input.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Extra classes on each button.
    #[prop_or_default]
    pub button_class: AttrValue,
    /// Fires with the newly picked character.
    #[prop_or_default]
    pub onchange: Callback<Option<char>>,
}

/// Grid of character buttons.
#[function_component(InputCharacter)]
pub fn input_character(props: &InputCharacterProps) -> Html {
    let style = CharacterStyle {
        show_case_change: props.show_case_change,
        rounded: props.rounded,
        bordered: props.bordered,
        active_color: props.active_color,
    };
    let state = use_state(|| {
        let characters = props.characters.clone().unwrap_or_else(alphabet);
        let mut grid = CharacterGrid::new(characters, props.columns, props.nullable, props.value);
        grid.style = style;
        grid
    });
    {
        let state = state.clone();
        use_effect_with_deps(
            move |(value, style): &(Option<char>, CharacterStyle)| {
                if state.value() != *value || state.style != *style {
                    let mut next = (*state).clone();
                    next.set_value(*value);
                    next.style = *style;
                    state.set(next);
                }
                || ()
            },
            (props.value, style),
        );
    }

    let disabled = props.disabled;
    let onkeydown = {
        let state = state.clone();
        let onchange = props.onchange.clone();
        Callback::from(move |event: KeyboardEvent| {
            let code = event.code();
            commit(&state, CharacterGrid::value, &onchange, |grid| {
                if grid.on_key_down(&code, disabled) {
                    event.prevent_default();
                }
            });
        })
    };
    let toggle_case = {
        let state = state.clone();
        let onchange = props.onchange.clone();
        Callback::from(move |_: MouseEvent| {
            commit(&state, CharacterGrid::value, &onchange, |grid| grid.toggle_case(disabled));
        })
    };

    let attrs = with_part(attrs(&props.class, disabled), "button-class", &props.button_class);
    let columns = state.columns().into_iter().map(|column| {
        let buttons = column.into_iter().map(|character| {
            let handle = state.clone();
            let onchange = props.onchange.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                commit(&handle, CharacterGrid::value, &onchange, |grid| {
                    grid.click(character, disabled);
                });
            });
            html! {
                <button type="button" class={state.button_class(character, &attrs)} {disabled} {onclick}>
                    {state.display(character)}
                </button>
            }
        });
        html! { <div class={column_class(&attrs)}>{ for buttons }</div> }
    });

    let case_icon = if state.is_upper_case() { "text_fields" } else { "title" };
    html! {
        <div {onkeydown} tabindex="0">
            <div class={columns_class(&attrs)}>{ for columns }</div>
            if state.style.show_case_change {
                <button type="button" class={state.button_class('\0', &attrs)} {disabled} onclick={toggle_case}>
                    <span class={icon_class("")}>{case_icon}</span>
                </button>
            }
        </div>
    }
}
