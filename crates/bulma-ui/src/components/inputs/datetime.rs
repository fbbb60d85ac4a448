use bulma_core::datetime::DisplayMode;
use bulma_core::datetime::calendar::{day_class, month_abbreviation, weekday_headers};
use bulma_core::{DateTimeInput, DateTimeKind, DateTimeSteps, InputDateTimeOptions, InputStatus};
use chrono::{Datelike, Local, NaiveDateTime, TimeDelta};
use yew::prelude::*;

use super::{PopoutButtons, commit, error_help, use_option_warnings};
use crate::components::{attrs, event_value};
use crate::support::{icon_class, weekday_label, with_part};

type O = InputDateTimeOptions;

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Properties of [`InputDateTime`].
#[derive(Properties, PartialEq)]
pub struct InputDateTimeProps {
    /// Time-only kinds carry today's date.
    #[prop_or_default]
    pub value: Option<NaiveDateTime>,
    /// Shape of the bound value.
    #[prop_or(DateTimeKind::DateTime)]
    pub kind: DateTimeKind,
    /// Allow an empty value.
    #[prop_or_default]
    pub nullable: bool,
    /// Behaviour flags; conflicting ones are resolved on mount.
    #[prop_or_default]
    pub options: InputDateTimeOptions,
    /// Increments used by the popout arrows.
    #[prop_or_default]
    pub steps: DateTimeSteps,
    /// Status colors for the box and its icon.
    #[prop_or(InputStatus::empty())]
    pub status: InputStatus,
    /// Field name used in error messages.
    #[prop_or(AttrValue::Static("Date"))]
    pub field: AttrValue,
    /// Material icon on the left of the box.
    #[prop_or(AttrValue::Static("calendar_month"))]
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
    pub onchange: Callback<Option<NaiveDateTime>>,
}

/// Date/time text box with a calendar and clock popout.
#[function_component(InputDateTime)]
pub fn input_date_time(props: &InputDateTimeProps) -> Html {
    let state = use_state(|| {
        DateTimeInput::new(
            props.field.to_string(),
            props.kind,
            props.nullable,
            props.options,
            props.value,
            now(),
        )
        .with_steps(props.steps)
        .with_status(props.status)
    });
    use_option_warnings("InputDateTime", state.warnings().to_vec());
    {
        let state = state.clone();
        use_effect_with_deps(
            move |value: &Option<NaiveDateTime>| {
                let mut next = (*state).clone();
                next.set_value(*value);
                if next.value() != state.value() {
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
        move |apply: Box<dyn FnOnce(&mut DateTimeInput)>| {
            commit(&state, DateTimeInput::value, &onchange, apply);
        }
    };
    let action = |apply: fn(&mut DateTimeInput)| {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                update(Box::new(apply));
            }
        })
    };
    let open_with = move |input: &mut DateTimeInput| {
        input.set_now(now());
        input.open_popout();
    };

    let on_text_change = {
        let update = update.clone();
        Callback::from(move |event: Event| {
            let text = event_value(&event);
            update(Box::new(move |input: &mut DateTimeInput| {
                let _ = input.on_change(&text);
            }));
        })
    };
    let open = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            if !disabled && options.contains(O::CLICK_POPOUT) {
                update(Box::new(open_with));
            }
        })
    };
    let onfocus = {
        let update = update.clone();
        Callback::from(move |_: FocusEvent| {
            if !disabled && options.contains(O::CLICK_POPOUT) {
                update(Box::new(open_with));
            }
        })
    };
    let onmouseenter = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            if !disabled && options.contains(O::HOVER_POPOUT) {
                update(Box::new(open_with));
            }
        })
    };
    let onmouseleave = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            if options.contains(O::HOVER_POPOUT) {
                update(Box::new(|input: &mut DateTimeInput| input.close_popout(true, false, None)));
            }
        })
    };
    let onkeydown = {
        let update = update.clone();
        Callback::from(move |event: KeyboardEvent| {
            let code = event.code();
            update(Box::new(move |input: &mut DateTimeInput| input.on_key_down(&code)));
        })
    };
    let adjust = |seconds: i64| {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                update(Box::new(move |input: &mut DateTimeInput| {
                    input.adjust(TimeDelta::seconds(seconds));
                }));
            }
        })
    };

    let popout = state.popout_value();
    let today = state.now().date();
    let calendar = match state.display_mode() {
        DisplayMode::Calendar => {
            let headers = weekday_headers(state.steps().start_of_week)
                .into_iter()
                .map(|day| html! { <div class="calendar-date has-text-weight-bold">{weekday_label(day)}</div> });
            let days = state.calendar_dates().into_iter().map(|day| {
                let update = update.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    if !disabled {
                        update(Box::new(move |input: &mut DateTimeInput| input.select_date(day)));
                    }
                });
                html! {
                    <div class={day_class(day, popout.date(), today)}>
                        <button type="button" class="date-item" {onclick}>{day.day()}</button>
                    </div>
                }
            });
            html! {
                <div class="calendar-body">
                    <div class="calendar-days">{ for headers }{ for days }</div>
                </div>
            }
        }
        DisplayMode::Months => {
            let months = state.calendar_months().into_iter().map(|month| {
                let update = update.clone();
                let number = month.month();
                let onclick = Callback::from(move |_: MouseEvent| {
                    update(Box::new(move |input: &mut DateTimeInput| input.select_month(number)));
                });
                let class = classes!("button", "is-small", (number == popout.month()).then_some("is-primary"));
                html! {
                    <div class="column is-3">
                        <button type="button" {class} {onclick}>{month_abbreviation(number)}</button>
                    </div>
                }
            });
            html! { <div class="columns is-multiline is-mobile">{ for months }</div> }
        }
        DisplayMode::Years => {
            let years = state.calendar_years().into_iter().map(|year| {
                let update = update.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    update(Box::new(move |input: &mut DateTimeInput| input.select_year(year)));
                });
                let class = classes!("button", "is-small", (year == popout.year()).then_some("is-primary"));
                html! {
                    <div class="column is-3">
                        <button type="button" {class} {onclick}>{year}</button>
                    </div>
                }
            });
            html! { <div class="columns is-multiline is-mobile">{ for years }</div> }
        }
    };

    let steps = state.steps();
    let (hours, minutes, seconds) = state.popout_clock();
    let clock = [
        (O::SHOW_HOURS, hours, i64::from(steps.hours) * 3600),
        (O::SHOW_MINUTES, minutes, i64::from(steps.minutes) * 60),
        (O::SHOW_SECONDS, seconds, i64::from(steps.seconds)),
    ]
    .into_iter()
    .filter(|(flag, _, _)| options.contains(*flag))
    .map(|(_, text, delta)| {
        html! {
            <div class="column has-text-centered">
                <button type="button" class="button is-small is-white" onclick={adjust(delta)}>
                    <span class={icon_class("")}>{"expand_less"}</span>
                </button>
                <p class="is-size-4">{text}</p>
                <button type="button" class="button is-small is-white" onclick={adjust(-delta)}>
                    <span class={icon_class("")}>{"expand_more"}</span>
                </button>
            </div>
        }
    });

    let show_date = options.contains(O::SHOW_DATE);
    let now_label = options.contains(O::SHOW_NOW_BUTTON).then(|| {
        AttrValue::Static(if props.kind == DateTimeKind::Date { "Today" } else { "Now" })
    });
    let attrs = with_part(attrs(&props.class, disabled), "icon-class", &props.icon_class);
    let extra = attrs.class("class").to_string();

    html! {
        <>
            <div class={state.picker_class(&attrs)} {onmouseenter} {onmouseleave}>
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
                        if show_date {
                            <div class="calendar">
                                <div class="calendar-nav">
                                    <button type="button" class="button is-small is-text"
                                        onclick={action(|input| input.shift_month(false))}>
                                        <span class={icon_class("")}>{"chevron_left"}</span>
                                    </button>
                                    <button type="button" class="button is-small is-text"
                                        onclick={action(|input| input.set_display_mode(DisplayMode::Months))}>
                                        {month_abbreviation(popout.month())}
                                    </button>
                                    <button type="button" class="button is-small is-text"
                                        onclick={action(|input| input.set_display_mode(DisplayMode::Years))}>
                                        {popout.year()}
                                    </button>
                                    <button type="button" class="button is-small is-text"
                                        onclick={action(|input| input.shift_month(true))}>
                                        <span class={icon_class("")}>{"chevron_right"}</span>
                                    </button>
                                </div>
                                {calendar}
                            </div>
                        }
                        <div class="columns is-mobile is-gapless mt-2">{ for clock }</div>
                        <PopoutButtons
                            show_accept={options.contains(O::SHOW_ACCEPT_BUTTON)}
                            show_reset={options.contains(O::SHOW_RESET_BUTTON)}
                            show_cancel={options.contains(O::SHOW_CANCEL_BUTTON)}
                            {now_label}
                            onaccept={action(|input| input.close_popout(true, false, None))}
                            onreset={action(|input| input.close_popout(false, true, None))}
                            oncancel={action(|input| input.close_popout(false, false, None))}
                            onnow={action(DateTimeInput::select_now)}
                        />
                    </div>
                }
            </div>
            {error_help(state.error())}
        </>
    }
}
