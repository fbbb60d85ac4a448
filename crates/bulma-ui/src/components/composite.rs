//! Tabs, steps and breadcrumbs.
//!
//! The parent keeps a registry in a reducer and shares the handle through a
//! context; children register on mount and deregister on unmount.

use std::rc::Rc;

use bulma_core::registry::{
    ActiveReport, BreadcrumbLink, BreadcrumbTrail, NamedRegistry, StepInfo, StepsStyle, TabInfo,
    TabsStyle, breadcrumb_class, step_content_class, step_segment_class, tab_class,
};
use bulma_core::{BulmaColor, Selection};
use gloo::console;
use uuid::Uuid;
use yew::prelude::*;

use super::icon::Icon;
use crate::components::attrs;
use crate::support::with_part;

/// Registry change requested by a parent or child.
enum RegistryAction<T> {
    Add(String, T),
    Update(String, T),
    Remove(String),
    Select(String),
    SetActive(Option<String>),
}

#[derive(Clone, PartialEq)]
struct RegistryState<T>(NamedRegistry<T>);

impl<T: Clone + 'static> Reducible for RegistryState<T> {
    type Action = RegistryAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut registry = self.0.clone();
        match action {
            RegistryAction::Add(name, data) => {
                if let Err(err) = registry.add(Some(&name), data) {
                    console::error!(err.to_string());
                }
            }
            RegistryAction::Update(name, data) => registry.update(&name, data),
            RegistryAction::Remove(name) => {
                if let Err(err) = registry.remove(&name) {
                    console::error!(err.to_string());
                }
            }
            RegistryAction::Select(name) => {
                registry.select(&name, |_| true);
            }
            RegistryAction::SetActive(active) => registry.set_active(active),
        }
        Rc::new(Self(registry))
    }
}

type RegistryHandle<T> = UseReducerHandle<RegistryState<T>>;

/// Register `data` under `name` for as long as the calling component lives.
#[hook]
fn use_registration<T: Clone + PartialEq + 'static>(
    registry: Option<RegistryHandle<T>>,
    name: String,
    data: T,
) {
    {
        let registry = registry.clone();
        let data = data.clone();
        use_effect_with_deps(
            move |name: &String| {
                let name = name.clone();
                if let Some(registry) = &registry {
                    registry.dispatch(RegistryAction::Add(name.clone(), data));
                }
                move || {
                    if let Some(registry) = registry {
                        registry.dispatch(RegistryAction::Remove(name));
                    }
                }
            },
            name.clone(),
        );
    }
    use_effect_with_deps(
        move |(name, data): &(String, T)| {
            if let Some(registry) = &registry {
                if registry.0.get(name).is_some_and(|entry| entry.data != *data) {
                    registry.dispatch(RegistryAction::Update(name.clone(), data.clone()));
                }
            }
            || ()
        },
        (name, data),
    );
}

/// Click handler shared by tabs and steps: reports the click, then moves the
/// active marker.
fn select_callback<T: Clone + PartialEq + 'static>(
    registry: &RegistryHandle<T>,
    selectable: fn(&T, bool) -> bool,
    enabled: bool,
    onitemclicked: &Callback<String>,
) -> Callback<String> {
    let registry = registry.clone();
    let onitemclicked = onitemclicked.clone();
    Callback::from(move |name: String| {
        let mut preview = registry.0.clone();
        let selection = preview.select(&name, |data| selectable(data, enabled));
        if selection.clicked() {
            onitemclicked.emit(name);
        }
        if let Selection::Changed(active) = selection {
            registry.dispatch(RegistryAction::Select(active));
        }
    })
}

/// Apply the parent's `active` prop to the registry and report every other
/// change of the active child through `on_active_change`.
#[hook]
fn use_active_binding<T: Clone + PartialEq + 'static>(
    registry: &RegistryHandle<T>,
    active: Option<AttrValue>,
    on_active_change: Callback<String>,
) {
    let reported = use_mut_ref(|| ActiveReport::new(active.as_ref().map(ToString::to_string)));
    {
        let registry = registry.clone();
        let reported = reported.clone();
        use_effect_with_deps(
            move |active: &Option<AttrValue>| {
                if let Some(active) = active {
                    let name: &str = active;
                    let _ = reported.borrow_mut().update(Some(name));
                    if !registry.0.is_active(name) {
                        registry.dispatch(RegistryAction::SetActive(Some(name.to_string())));
                    }
                }
                || ()
            },
            active,
        );
    }
    use_effect_with_deps(
        move |current: &Option<String>| {
            let changed = reported.borrow_mut().update(current.as_deref());
            if let Some(name) = changed {
                on_active_change.emit(name);
            }
            || ()
        },
        registry.0.active().map(str::to_string),
    );
}

/// Properties of [`Tabs`].
#[derive(Properties, PartialEq)]
pub struct TabsProps {
    /// [`Tab`] children.
    #[prop_or_default]
    pub children: Children,
    /// Title of the tab to show.
    #[prop_or_default]
    pub active: Option<AttrValue>,
    /// Center the header row.
    #[prop_or(true)]
    pub centered: bool,
    /// Boxed header style.
    #[prop_or_default]
    pub boxed: bool,
    /// Toggle-button header style.
    #[prop_or(true)]
    pub toggle: bool,
    /// Rounded ends on the toggle row.
    #[prop_or(true)]
    pub rounded: bool,
    /// Extra classes on the header container.
    #[prop_or_default]
    pub class: Classes,
    /// New active title, whether picked by a click or by the tabs themselves.
    #[prop_or_default]
    pub on_active_change: Callback<String>,
    /// Title of any enabled header that was clicked.
    #[prop_or_default]
    pub onitemclicked: Callback<String>,
}

/// Tab headers plus the active [`Tab`] body.
#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    let registry = {
        let active = props.active.as_ref().map(ToString::to_string);
        use_reducer(move || RegistryState(NamedRegistry::new("Tabs", active)))
    };
    use_active_binding(&registry, props.active.clone(), props.on_active_change.clone());

    let onselect = select_callback(
        &registry,
        |info: &TabInfo, _| info.enabled,
        true,
        &props.onitemclicked,
    );
    let style = TabsStyle {
        centered: props.centered,
        boxed: props.boxed,
        toggle: props.toggle,
        rounded: props.rounded,
    };
    let count = registry.0.len();
    let headers = registry.0.entries().iter().map(|entry| {
        let name = entry.name.clone();
        let onclick = onselect.reform(move |_: MouseEvent| name.clone());
        let active = registry.0.is_active(&entry.name);
        html! {
            <li class={tab_class(entry.index, count, active)}>
                <a {onclick} aria-disabled={(!entry.data.enabled).then_some("true")}>
                    if let Some(icon) = entry.data.icon.clone() {
                        <span class="icon is-small"><Icon name={icon} /></span>
                    }
                    <span>{entry.name.clone()}</span>
                </a>
            </li>
        }
    });

    html! {
        <ContextProvider<RegistryHandle<TabInfo>> context={registry.clone()}>
            <div class={style.class(&props.class.to_string())}>
                <ul>{ for headers }</ul>
            </div>
            { for props.children.iter() }
        </ContextProvider<RegistryHandle<TabInfo>>>
    }
}

/// Properties of [`Tab`].
#[derive(Properties, PartialEq)]
pub struct TabProps {
    /// Tab body.
    #[prop_or_default]
    pub children: Children,
    /// Unique title; also the tab's name.
    pub title: AttrValue,
    /// Material icon shown in the header.
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    /// Disabled tabs ignore clicks.
    #[prop_or(true)]
    pub enabled: bool,
    /// Extra classes on the body container.
    #[prop_or_default]
    pub class: Classes,
}

/// One tab body; hidden unless active.
#[function_component(Tab)]
pub fn tab(props: &TabProps) -> Html {
    let registry = use_context::<RegistryHandle<TabInfo>>();
    let info = TabInfo {
        icon: props.icon.as_ref().map(ToString::to_string),
        enabled: props.enabled,
    };
    use_registration(registry.clone(), props.title.to_string(), info);

    let active = registry.is_some_and(|registry| registry.0.is_active(&props.title));
    html! {
        <div class={classes!("tab-content", props.class.clone(), (!active).then_some("is-hidden"))}>
            { for props.children.iter() }
        </div>
    }
}

/// Properties of [`Steps`].
#[derive(Properties, PartialEq)]
pub struct StepsProps {
    /// [`Step`] children.
    #[prop_or_default]
    pub children: Children,
    /// Title of the current step.
    #[prop_or_default]
    pub active: Option<AttrValue>,
    /// Lay the segments out top to bottom.
    #[prop_or_default]
    pub vertical: bool,
    /// Center the segments.
    #[prop_or(true)]
    pub centered: bool,
    /// Put the step titles above the markers.
    #[prop_or_default]
    pub text_above: bool,
    /// Markers select their step when clicked.
    #[prop_or(true)]
    pub clickable: bool,
    /// Extra classes on the segment list.
    #[prop_or_default]
    pub class: Classes,
    /// New current title, whether picked by a click or by the steps themselves.
    #[prop_or_default]
    pub on_active_change: Callback<String>,
    /// Title of any marker that was clicked while clickable.
    #[prop_or_default]
    pub onitemclicked: Callback<String>,
}

/// Step markers plus the current [`Step`] content.
#[function_component(Steps)]
pub fn steps(props: &StepsProps) -> Html {
    let registry = {
        let active = props.active.as_ref().map(ToString::to_string);
        use_reducer(move || RegistryState(NamedRegistry::new("Steps", active)))
    };
    use_active_binding(&registry, props.active.clone(), props.on_active_change.clone());

    let style = StepsStyle {
        vertical: props.vertical,
        centered: props.centered,
        text_above: props.text_above,
        clickable: props.clickable,
    };
    let onselect = select_callback(
        &registry,
        |_: &StepInfo, clickable| clickable,
        style.clickable,
        &props.onitemclicked,
    );
    let active_index = registry.0.active_index();
    let segments = registry.0.entries().iter().map(|entry| {
        let name = entry.name.clone();
        let onclick = onselect.reform(move |_: MouseEvent| name.clone());
        let marker = style.marker_class(registry.0.is_active(&entry.name), entry.data.marker_color);
        html! {
            <li class={step_segment_class(entry.index, active_index)}>
                <a class={marker} {onclick}>
                    if let Some(icon) = entry.data.icon.clone() {
                        <span class="icon"><Icon name={icon} /></span>
                    }
                </a>
                <div class="steps-content">
                    <p class="is-size-6">{entry.name.clone()}</p>
                </div>
            </li>
        }
    });

    html! {
        <ContextProvider<RegistryHandle<StepInfo>> context={registry.clone()}>
            <ul class={style.class(&props.class.to_string())}>{ for segments }</ul>
            { for props.children.iter() }
        </ContextProvider<RegistryHandle<StepInfo>>>
    }
}

/// Properties of [`Step`].
#[derive(Properties, PartialEq)]
pub struct StepProps {
    /// Content shown while this step is current.
    #[prop_or_default]
    pub children: Children,
    /// Unique title; also the step's name.
    pub title: AttrValue,
    /// Material icon inside the marker.
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    /// Marker color.
    #[prop_or_default]
    pub marker_color: BulmaColor,
    /// Extra classes on the content container.
    #[prop_or_default]
    pub class: Classes,
}

/// One step; renders its content only while current.
#[function_component(Step)]
pub fn step(props: &StepProps) -> Html {
    let registry = use_context::<RegistryHandle<StepInfo>>();
    let info = StepInfo {
        icon: props.icon.as_ref().map(ToString::to_string),
        marker_color: props.marker_color,
    };
    use_registration(registry.clone(), props.title.to_string(), info);

    if !registry.is_some_and(|registry| registry.0.is_active(&props.title)) {
        return Html::default();
    }
    html! {
        <div class={step_content_class(&attrs(&props.class, false))}>{ for props.children.iter() }</div>
    }
}

/// Breadcrumb item change.
enum TrailAction {
    Add(String, BreadcrumbLink),
    Update(String, BreadcrumbLink),
    Remove(String),
}

#[derive(Clone, Default, PartialEq)]
struct TrailState(BreadcrumbTrail);

impl Reducible for TrailState {
    type Action = TrailAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut trail = self.0.clone();
        match action {
            TrailAction::Add(key, link) => {
                trail.add_link(key, link);
            }
            TrailAction::Update(key, link) => match trail.update(&key, link) {
                Ok(true) => {}
                Ok(false) => return self,
                Err(err) => {
                    console::error!(err.to_string());
                    return self;
                }
            },
            TrailAction::Remove(key) => {
                if let Err(err) = trail.remove(&key) {
                    console::error!(err.to_string());
                }
            }
        }
        Rc::new(Self(trail))
    }
}

/// Properties of [`BreadCrumb`].
#[derive(Properties, PartialEq)]
pub struct BreadCrumbProps {
    /// [`BreadCrumbItem`] children.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes on the `nav`.
    #[prop_or_default]
    pub class: Classes,
    /// Applied to every `li`.
    #[prop_or_default]
    pub item_class: AttrValue,
    /// Applied to every icon.
    #[prop_or_default]
    pub icon_class: AttrValue,
}

/// Breadcrumb `nav` built from its [`BreadCrumbItem`] children.
#[function_component(BreadCrumb)]
pub fn bread_crumb(props: &BreadCrumbProps) -> Html {
    let trail = use_reducer(TrailState::default);
    let attrs = with_part(attrs(&props.class, false), "icon-class", &props.icon_class);
    let item_attrs = with_part(bulma_core::Attributes::new(), "class", &props.item_class);
    let items = trail.0.entries().iter().map(|entry| {
        let link = &entry.link;
        html! {
            <li class={trail.0.item_class(&entry.key, &item_attrs)}>
                <a href={link.url.clone()} class={trail.0.link_class(&entry.key).map(str::to_string)}>
                    if let Some(icon) = link.icon.clone() {
                        <span class={trail.0.icon_class(&entry.key, &attrs)}>{icon}</span>
                    }
                    <span>{link.label.clone()}</span>
                </a>
            </li>
        }
    });
    html! {
        <ContextProvider<UseReducerHandle<TrailState>> context={trail.clone()}>
            <nav class={breadcrumb_class(&attrs)} aria-label="breadcrumbs">
                <ul>{ for items }</ul>
            </nav>
            { for props.children.iter() }
        </ContextProvider<UseReducerHandle<TrailState>>>
    }
}

/// Properties of [`BreadCrumbItem`].
#[derive(Properties, PartialEq)]
pub struct BreadCrumbItemProps {
    /// Link text.
    pub label: AttrValue,
    /// Link target.
    #[prop_or(AttrValue::Static("#"))]
    pub url: AttrValue,
    /// Material icon before the text.
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    /// Extra classes on this item's `li`.
    #[prop_or_default]
    pub class: AttrValue,
    /// Classes on this item's `a`.
    #[prop_or_default]
    pub link_class: AttrValue,
    /// Extra classes on this item's icon.
    #[prop_or_default]
    pub icon_class: AttrValue,
}

/// Registers a link with the enclosing [`BreadCrumb`]; renders nothing itself.
#[function_component(BreadCrumbItem)]
pub fn bread_crumb_item(props: &BreadCrumbItemProps) -> Html {
    let trail = use_context::<UseReducerHandle<TrailState>>();
    let key = use_memo(|_| Uuid::new_v4().to_string(), ());
    let attributes = [
        ("class", &props.class),
        ("a-class", &props.link_class),
        ("icon-class", &props.icon_class),
    ]
    .into_iter()
    .fold(bulma_core::Attributes::new(), |attributes, (part, value)| {
        with_part(attributes, part, value)
    });
    let link = BreadcrumbLink {
        label: props.label.to_string(),
        url: props.url.to_string(),
        icon: props.icon.as_ref().map(ToString::to_string),
        attributes,
    };
    {
        let trail = trail.clone();
        let link = link.clone();
        use_effect_with_deps(
            move |key: &Rc<String>| {
                let key = key.to_string();
                if let Some(trail) = &trail {
                    trail.dispatch(TrailAction::Add(key.clone(), link));
                }
                move || {
                    if let Some(trail) = trail {
                        trail.dispatch(TrailAction::Remove(key));
                    }
                }
            },
            key.clone(),
        );
    }
    use_effect_with_deps(
        move |(key, link): &(Rc<String>, BreadcrumbLink)| {
            if let Some(trail) = &trail {
                trail.dispatch(TrailAction::Update(key.to_string(), link.clone()));
            }
            || ()
        },
        (key, link),
    );
    Html::default()
}
