//! Gallery pages.

use std::rc::Rc;

use anyhow::Context as _;
use bulma_core::{
    BulmaColor, BulmaSettings, DateTimeKind, DurationKind, ErrorReport, HttpFailure, LoadingStatus,
    TooltipOptions,
};
use chrono::{NaiveDateTime, TimeDelta};
use gloo::console;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::APPLICATION;
use crate::components::inputs::{
    Checkbox, FlagSwitches, InputAutocomplete, InputCharacter, InputDateTime, InputDuration, InputNumberPad,
    InputPassword, RadioGroup, SelectEnum, SelectObject, Switch,
};
use crate::components::{
    BooleanIcon, BreadCrumb, BreadCrumbItem, Button, ButtonKind, Card, ErrorBoundary, HttpErrorPage, Icon, Label,
    Level, LevelItem, Loader, MediaObject, Message, Notification, Panel, ProgressBar, Step, Steps, Tab, Table,
    TableData, TableHeader, TableRow, Tabs, TitleBlock,
};
use crate::demo::{CITIES, Priority, RELEASES, Weekdays, city_matches};

const LOADER_TICK_MS: u32 = 150;
const LOADER_STEP: u8 = 5;

#[hook]
fn use_settings() -> Rc<BulmaSettings> {
    use_context::<Rc<BulmaSettings>>().unwrap_or_else(|| Rc::new(BulmaSettings::defaults().clone()))
}

/// Value readout under an input.
fn shown<T: std::fmt::Debug>(value: &T) -> Html {
    html! { <p class="help">{format!("Value: {value:?}")}</p> }
}

#[function_component(ElementsPage)]
pub(crate) fn elements_page() -> Html {
    let deleted = use_state(|| 0_u32);
    let notice_hidden = use_state(|| false);
    let message_hidden = use_state(|| false);
    let collapsed = use_state(|| false);

    let ondelete = {
        let deleted = deleted.clone();
        Callback::from(move |()| deleted.set(*deleted + 1))
    };
    let ondismiss_notice = {
        let hidden = notice_hidden.clone();
        Callback::from(move |()| hidden.set(true))
    };
    let ondismiss_message = {
        let hidden = message_hidden.clone();
        Callback::from(move |()| hidden.set(true))
    };
    let oncollapsedchange = {
        let collapsed = collapsed.clone();
        Callback::from(move |value: bool| collapsed.set(value))
    };

    let header = html! {
        <TableRow>
            <TableHeader>{"Version"}</TableHeader>
            <TableHeader>{"Month"}</TableHeader>
            <TableHeader tooltip="Long-term support" tooltip_options={TooltipOptions::RIGHT}>{"LTS"}</TableHeader>
        </TableRow>
    };
    let rows = RELEASES.iter().map(|release| {
        html! {
            <TableRow>
                <TableData>{release.version}</TableData>
                <TableData>{release.month}</TableData>
                <TableData><BooleanIcon value={release.lts} /></TableData>
            </TableRow>
        }
    });

    html! {
        <>
            <TitleBlock
                title="Elements"
                subtitle="Buttons, notifications, tables and containers"
                application={APPLICATION}
                tooltip="State and classes come from bulma-core"
            />
            <div class="buttons">
                <Button text="Plain" icon="star" color={BulmaColor::Cyan} />
                <Button kind={ButtonKind::Submit} />
                <Button kind={ButtonKind::Delete} {ondelete} />
            </div>
            <p class="block">{format!("Deleted {} times", *deleted)}</p>
            <Notification color={BulmaColor::Green} hidden={*notice_hidden} ondismiss={ondismiss_notice}>
                {"Saved."}
            </Notification>
            <Message title="Heads up" color={BulmaColor::Yellow} hidden={*message_hidden} ondismiss={ondismiss_message}>
                {"Messages carry a title and a dismiss button."}
            </Message>
            <ProgressBar value={Some(40)} color={BulmaColor::Turquoise} />
            <Table {header}>{ for rows }</Table>
            <Panel title="Panel" color={BulmaColor::Purple} collapsed={*collapsed} {oncollapsedchange}>
                <Card title="Card" footer={html! { <a class="card-footer-item" href="#">{"More"}</a> }}>
                    {"Cards sit inside collapsible panels."}
                </Card>
            </Panel>
            <Level>
                <LevelItem><Icon name="light_mode" /></LevelItem>
                <LevelItem>{"Level items line up horizontally."}</LevelItem>
            </Level>
            <MediaObject image="https://bulma.io/assets/images/placeholders/128x128.png">
                <p><strong>{"Media object"}</strong></p>
                <p>{"Image on the left, content on the right."}</p>
            </MediaObject>
        </>
    }
}

#[function_component(InputsPage)]
pub(crate) fn inputs_page() -> Html {
    let settings = use_settings();
    let city = use_state(|| None::<&'static str>);
    let span = use_state(|| Some(TimeDelta::minutes(90)));
    let time_of_day = use_state(|| None::<TimeDelta>);
    let moment = use_state(|| None::<NaiveDateTime>);
    let day = use_state(|| None::<NaiveDateTime>);
    let letter = use_state(|| Some('B'));
    let amount = use_state(|| Some(12.5_f64));
    let count = use_state(|| None::<u32>);
    let picked = use_state(|| None::<&'static str>);
    let priority = use_state(|| Some(Priority::Normal));
    let weekdays = use_state(|| Weekdays::MONDAY | Weekdays::FRIDAY);
    let color = use_state(|| Some(BulmaColor::Turquoise));
    let agreed = use_state(|| false);
    let enabled = use_state(|| true);
    let password = use_state(String::new);

    let display = Callback::from(|city: &'static str| city.to_string());
    let filter = Callback::from(|(city, query): (&'static str, String)| city_matches(city, &query));
    let colors = BulmaColor::ALL
        .iter()
        .skip(1)
        .take(4)
        .map(|color| (AttrValue::from(bulma_core::choice::ChoiceEnum::label(*color)), *color))
        .collect::<Vec<_>>();

    html! {
        <>
            <TitleBlock title="Inputs" application={APPLICATION} />
            <div class="columns is-multiline">
                <div class="column is-half">
                    <Label text="City" tooltip="Filtered as you type" />
                    <InputAutocomplete<&'static str>
                        items={CITIES.to_vec()}
                        value={*city}
                        display={display.clone()}
                        filter={Some(filter)}
                        display_count={5}
                        show_tag=true
                        onchange={setter(&city)}
                    />
                    {shown(&*city)}
                </div>
                <div class="column is-half">
                    <Label text="Duration" />
                    <InputDuration
                        value={*span}
                        steps={settings.duration.clone()}
                        onchange={setter(&span)}
                    />
                    {shown(&*span)}
                    <Label text="Time of day" />
                    <InputDuration
                        value={*time_of_day}
                        kind={DurationKind::TimeOfDay}
                        nullable=true
                        icon="schedule"
                        onchange={setter(&time_of_day)}
                    />
                    {shown(&*time_of_day)}
                </div>
                <div class="column is-half">
                    <Label text="Date and time" />
                    <InputDateTime
                        value={*moment}
                        nullable=true
                        steps={settings.datetime.clone()}
                        onchange={setter(&moment)}
                    />
                    {shown(&*moment)}
                    <Label text="Date" />
                    <InputDateTime
                        value={*day}
                        kind={DateTimeKind::Date}
                        nullable=true
                        steps={settings.datetime.clone()}
                        onchange={setter(&day)}
                    />
                    {shown(&*day)}
                </div>
                <div class="column is-half">
                    <Label text="Character" />
                    <InputCharacter value={*letter} nullable=true onchange={setter(&letter)} />
                    {shown(&*letter)}
                </div>
                <div class="column is-half">
                    <Label text="Amount" />
                    <InputNumberPad<f64> value={*amount} decimals=true nullable=true onchange={setter(&amount)} />
                    {shown(&*amount)}
                </div>
                <div class="column is-half">
                    <Label text="Count" />
                    <InputNumberPad<u32> value={*count} nullable=true field="Count" onchange={setter(&count)} />
                    {shown(&*count)}
                </div>
                <div class="column is-half">
                    <Label text="City select" />
                    <SelectObject<&'static str>
                        items={CITIES.to_vec()}
                        value={*picked}
                        {display}
                        nullable=true
                        placeholder="Pick a city"
                        onchange={setter(&picked)}
                    />
                    <Label text="Priority" />
                    <SelectEnum<Priority> value={*priority} hide_zero=true onchange={setter(&priority)} />
                    {shown(&*priority)}
                </div>
                <div class="column is-half">
                    <Label text="Weekdays" />
                    <FlagSwitches<Weekdays> value={*weekdays} onchange={setter(&weekdays)} />
                    <p class="help">{bulma_core::choice::flag_names(&*weekdays)}</p>
                    <Label text="Colour" />
                    <RadioGroup<BulmaColor>
                        options={colors}
                        value={*color}
                        onchange={{
                            let color = color.clone();
                            Callback::from(move |value: BulmaColor| color.set(Some(value)))
                        }}
                    />
                </div>
                <div class="column is-half">
                    <Checkbox checked={*agreed} text="I agree" boxed=true onchange={setter(&agreed)} />
                    <Switch checked={*enabled} text="Enabled" onchange={setter(&enabled)} />
                    <Label text="Password" />
                    <InputPassword
                        value={AttrValue::from((*password).clone())}
                        placeholder="Watch for caps lock"
                        onchange={setter(&password)}
                    />
                </div>
            </div>
        </>
    }
}

/// `onchange` that stores the new value in `state`.
fn setter<T: 'static>(state: &UseStateHandle<T>) -> Callback<T> {
    let state = state.clone();
    Callback::from(move |value: T| state.set(value))
}

#[function_component(CompositesPage)]
pub(crate) fn composites_page() -> Html {
    let active_tab = use_state(|| None::<AttrValue>);
    let status = use_state(LoadingStatus::empty);
    let completion = use_state(|| None::<u8>);
    let progress = use_mut_ref(|| 0_u8);

    {
        let status = status.clone();
        let completion = completion.clone();
        let running = *status == LoadingStatus::IN_PROGRESS;
        use_effect_with_deps(
            move |running: &bool| {
                let interval = running.then(|| {
                    *progress.borrow_mut() = 0;
                    Interval::new(LOADER_TICK_MS, move || {
                        let next = {
                            let mut value = progress.borrow_mut();
                            *value = value.saturating_add(LOADER_STEP).min(100);
                            *value
                        };
                        completion.set(Some(next));
                        if next == 100 {
                            status.set(LoadingStatus::COMPLETE | LoadingStatus::SUCCESSFUL);
                        }
                    })
                });
                move || drop(interval)
            },
            running,
        );
    }

    let start = {
        let status = status.clone();
        let completion = completion.clone();
        Callback::from(move |_: MouseEvent| {
            completion.set(Some(0));
            status.set(LoadingStatus::IN_PROGRESS);
        })
    };
    let fail = {
        let status = status.clone();
        Callback::from(move |_: MouseEvent| status.set(LoadingStatus::COMPLETE | LoadingStatus::FAILED))
    };
    let onstatuschange = {
        let status = status.clone();
        Callback::from(move |next: LoadingStatus| status.set(next))
    };
    let on_active_change = {
        let active_tab = active_tab.clone();
        Callback::from(move |title: String| {
            console::log!(format!("tab {title} selected"));
            active_tab.set(Some(title.into()));
        })
    };

    html! {
        <>
            <TitleBlock title="Composites" application={APPLICATION} />
            <BreadCrumb>
                <BreadCrumbItem label="Home" url="/" icon="home" />
                <BreadCrumbItem label="Gallery" url="/composites" link_class="has-text-link" />
                <BreadCrumbItem label={(*active_tab).clone().unwrap_or(AttrValue::Static("Composites"))} />
            </BreadCrumb>
            <Tabs active={(*active_tab).clone()} {on_active_change}>
                <Tab title="First" icon="looks_one">{"Tabs register themselves with their container."}</Tab>
                <Tab title="Second" icon="looks_two">{"Selecting a tab hides the others."}</Tab>
                <Tab title="Disabled" enabled=false>{"Never shown."}</Tab>
            </Tabs>
            <Steps>
                <Step title="Account" icon="person" marker_color={BulmaColor::Green}>{"Create an account."}</Step>
                <Step title="Profile" icon="badge">{"Fill in your profile."}</Step>
                <Step title="Done" icon="check">{"All set."}</Step>
            </Steps>
            <div class="buttons mt-4">
                <button type="button" class="button is-info" onclick={start}>{"Load"}</button>
                <button type="button" class="button is-danger" onclick={fail}>{"Fail"}</button>
            </div>
            <Loader status={*status} completion={*completion} {onstatuschange}>
                <p>{"Loaded content."}</p>
            </Loader>
        </>
    }
}

fn failing_request() -> anyhow::Result<()> {
    Err(HttpFailure {
        status: 503,
        message: "maintenance window".to_string(),
    })
    .context("loading releases")
}

#[derive(Properties, PartialEq)]
pub(crate) struct ErrorsPageProps {
    /// Status shown by the error page.
    pub(crate) status: Option<u16>,
}

#[function_component(ErrorsPage)]
pub(crate) fn errors_page(props: &ErrorsPageProps) -> Html {
    let report = use_state(|| None::<ErrorReport>);
    let raise = {
        let report = report.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = failing_request() {
                let source: &(dyn std::error::Error + 'static) = err.as_ref();
                console::error!(format!("{err:#}"));
                report.set(Some(ErrorReport::from_error(source)));
            }
        })
    };
    let clear = {
        let report = report.clone();
        Callback::from(move |_: MouseEvent| report.set(None))
    };

    html! {
        <>
            <HttpErrorPage status={props.status} />
            <div class="buttons">
                <button type="button" class="button is-warning" onclick={raise}>{"Raise an error"}</button>
                <button type="button" class="button" onclick={clear}>{"Clear"}</button>
            </div>
            <ErrorBoundary error={(*report).clone()} show_details=true>
                <p>{"Nothing has failed yet."}</p>
            </ErrorBoundary>
        </>
    }
}
