use bulma_core::duration::DurationUnit;
use bulma_core::{DurationInput, DurationKind, DurationSteps, InputDurationOptions, InputStatus};
use chrono::TimeDelta;
use yew::prelude::*;

use super::{PopoutButtons, commit, error_help, use_option_warnings};
use crate::components::{attrs, event_value};
use crate::support::{icon_class, with_part};

type O = InputDurationOptions;

/// Properties of [`InputDuration`].
#[derive(Properties, PartialEq)]
pub struct InputDurationProps {
    /// Bound duration.
    #[prop_or_default]
    pub value: Option<TimeDelta>,
    /// Shape of the bound value.
    #[prop_or(DurationKind::Span)]
    pub kind: DurationKind,
    /// Allow an empty value.
    #[prop_or_default]
    pub nullable: bool,
    /// Behaviour flags; conflicting ones are resolved on mount.
    #[prop_or_default]
    pub options: InputDurationOptions,
    /// Increments used by the popout arrows.
    #[prop_or_default]
    pub steps: DurationSteps,
    /// Status colors for the box and its icon.
    #[prop_or(InputStatus::empty())]
    pub status: InputStatus,
    /// Name used in validation messages.
    #[prop_or(AttrValue::Static("Duration"))]
    pub field: AttrValue,
    /// Material icon on the left of the box.
    #[prop_or(AttrValue::Static("timer"))]
    pub icon: AttrValue,
    /// Hint shown while the box is empty.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// Render inactive and ignore input.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Extra classes on the icon.
    #[prop_or_default]
    pub icon_class: AttrValue,
    /// Fires with each new value.
    #[prop_or_default]
    pub onchange: Callback<Option<TimeDelta>>,
}

/// Duration text box with a stepper popout.
#[function_component(InputDuration)]
pub fn input_duration(props: &InputDurationProps) -> Html {
    let state = use_state(|| {
        DurationInput::new(props.field.to_string(), props.kind, props.nullable, props.options, props.value)
            .with_steps(props.steps)
            .with_status(props.status)
    });
    use_option_warnings("InputDuration", state.warnings().to_vec());
    {
        let state = state.clone();
        use_effect_with_deps(
            move |value: &Option<TimeDelta>| {
                if state.value() != *value {
                    let mut next = (*state).clone();
                    next.set_value(*value);
                    state.set(next);
                }
                || ()
            },
            props.value,
        );
    }

    let disabled = props.disabled;
    let options = state.options();
    let onchange = props.onchange.clone();
    let update = {
        let state = state.clone();
        move |apply: Box<dyn FnOnce(&mut DurationInput)>| {
            commit(&state, DurationInput::value, &onchange, apply);
        }
    };

    let on_text_change = {
        let update = update.clone();
        Callback::from(move |event: Event| {
            let text = event_value(&event);
            update(Box::new(move |input: &mut DurationInput| {
                let _ = input.on_change(&text);
            }));
        })
    };
    let open = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            if !disabled && options.contains(O::CLICK_POPOUT) {
                update(Box::new(DurationInput::open_popout));
            }
        })
    };
    let onfocus = {
        let update = update.clone();
        Callback::from(move |_: FocusEvent| {
            if !disabled && options.contains(O::CLICK_POPOUT) {
                update(Box::new(DurationInput::open_popout));
            }
        })
    };
    let onkeydown = {
        let update = update.clone();
        Callback::from(move |event: KeyboardEvent| {
            let code = event.code();
            update(Box::new(move |input: &mut DurationInput| input.on_key_down(&code)));
        })
    };
    let onmouseleave = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            if options.contains(O::HOVER_POPOUT) {
                update(Box::new(|input: &mut DurationInput| input.close_popout(true, false)));
            }
        })
    };
    let close = |save: bool, reset: bool| {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            update(Box::new(move |input: &mut DurationInput| input.close_popout(save, reset)));
        })
    };
    let step = |unit: DurationUnit, forward: bool| {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                update(Box::new(move |input: &mut DurationInput| input.step(unit, forward)));
            }
        })
    };

    let attrs = with_part(attrs(&props.class, disabled), "icon-class", &props.icon_class);
    let extra = attrs.class("class").to_string();
    let popout = state.popout_value();
    let columns = [
        (O::SHOW_DAYS, DurationUnit::Days, "Days"),
        (O::SHOW_HOURS | O::DISPLAY_DAYS_AS_HOURS, DurationUnit::Hours, "Hours"),
        (O::SHOW_MINUTES | O::DISPLAY_HOURS_AS_MINUTES, DurationUnit::Minutes, "Minutes"),
        (O::SHOW_SECONDS | O::DISPLAY_MINUTES_AS_SECONDS, DurationUnit::Seconds, "Seconds"),
    ]
    .into_iter()
    .filter(|(flags, _, _)| options.intersects(*flags))
    .map(|(_, unit, caption)| {
        html! {
            <div class="column has-text-centered">
                <p class="heading">{caption}</p>
                <button type="button" class="button is-small is-white" onclick={step(unit, true)}>
                    <span class={icon_class("")}>{"expand_less"}</span>
                </button>
                <p class="is-size-4">{state.format().unit_text(popout, unit)}</p>
                <button type="button" class="button is-small is-white" onclick={step(unit, false)}>
                    <span class={icon_class("")}>{"expand_more"}</span>
                </button>
            </div>
        }
    });

    html! {
        <>
            <div class={state.picker_class(&attrs)} {onmouseleave}>
                <div class="control has-icons-left">
                    <input
                        class={state.input_class(&extra)}
                        type="text"
                        value={state.text().to_string()}
                        placeholder={props.placeholder.clone()}
                        {disabled}
                        onchange={on_text_change}
                        onclick={open}
                        {onfocus}
                        {onkeydown}
                    />
                    <span class={state.icon_class(&attrs, &extra)}>{props.icon.clone()}</span>
                </div>
                if !options.contains(O::NO_POPOUT) {
                    <div class="datetimepicker-popup box p-3">
                        <div class="columns is-mobile is-gapless">{ for columns }</div>
                        <PopoutButtons
                            show_accept={options.contains(O::SHOW_ACCEPT_BUTTON)}
                            show_reset={options.contains(O::SHOW_RESET_BUTTON)}
                            show_cancel={options.contains(O::SHOW_CANCEL_BUTTON)}
                            onaccept={close(true, false)}
                            onreset={close(false, true)}
                            oncancel={close(false, false)}
                        />
                    </div>
                }
            </div>
            {error_help(state.error())}
        </>
    }
}
