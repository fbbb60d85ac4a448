//! Loader, title block, label and theme selector.

use bulma_core::theme::ThemeMode;
use bulma_core::widgets::helpers::{
    LoaderPhase, LoaderView, TitleBlockStyle, label_class, label_tooltip_class, page_title,
    theme_selector_class,
};
use bulma_core::{LoadingStatus, ThemeSettings, TooltipOptions};
use yew::prelude::*;

use super::icon::Icon;
use crate::components::attrs;
use crate::interop;

/// Properties of [`Loader`].
#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Current loading state.
    #[prop_or(LoadingStatus::empty())]
    pub status: LoadingStatus,
    /// Percent done; indeterminate when absent.
    #[prop_or_default]
    pub completion: Option<u8>,
    /// Fill the parent while loading.
    #[prop_or_default]
    pub full_height: bool,
    /// Text shown while loading.
    #[prop_or(AttrValue::Static("Loading..."))]
    pub message: AttrValue,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Close button after completion; receives the reset status.
    #[prop_or_default]
    pub onstatuschange: Callback<LoadingStatus>,
}

/// Shows its children until a load starts, then a progress bar, then the
/// outcome with a close button.
#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    let view = LoaderView {
        status: props.status,
        completion: props.completion,
        full_height: props.full_height,
        message: props.message.to_string(),
    };
    let attrs = attrs(&props.class, false);
    let close = {
        let view = view.clone();
        let onstatuschange = props.onstatuschange.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = view.clone();
            onstatuschange.emit(next.close());
        })
    };

    let body = match view.phase() {
        LoaderPhase::Idle => Html::default(),
        LoaderPhase::InProgress => html! {
            <>
                <p class="subtitle">{view.message.clone()}</p>
                <progress
                    class={LoaderView::progress_class(&attrs)}
                    value={view.completion().map(|value| value.to_string())}
                    max="100"
                />
            </>
        },
        LoaderPhase::Finished { failed } => html! {
            <>
                <span class={view.icon_class(&attrs)}>{view.icon()}</span>
                <p class="subtitle">{ if failed { "Failed" } else { "Complete" } }</p>
                <button class="button" onclick={close}>{"Close"}</button>
            </>
        },
    };

    html! {
        <>
            <div class={view.loading_class(&attrs)}>
                <section class={view.class(&attrs)}>
                    <div class="hero-body">
                        <div class={view.container_class(&attrs)}>{body}</div>
                    </div>
                </section>
            </div>
            <div class={view.content_class(&attrs)}>{ for props.children.iter() }</div>
        </>
    }
}

/// Properties of [`TitleBlock`].
#[derive(Properties, PartialEq)]
pub struct TitleBlockProps {
    /// Page title; also written to the document title.
    pub title: AttrValue,
    /// Smaller line under the title.
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Also sets `document.title` to `"{title} - {application}"`.
    #[prop_or_default]
    pub application: Option<AttrValue>,
    /// Tooltip text.
    #[prop_or_default]
    pub tooltip: Option<AttrValue>,
    /// Tooltip placement and style.
    #[prop_or(TooltipOptions::empty())]
    pub tooltip_options: TooltipOptions,
    /// Small hero.
    #[prop_or(true)]
    pub tiny: bool,
    /// Bold title.
    #[prop_or(true)]
    pub bold: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// Hero title that also sets the document title.
#[function_component(TitleBlock)]
pub fn title_block(props: &TitleBlockProps) -> Html {
    {
        let title = page_title(&props.title, props.application.as_deref());
        use_effect_with_deps(
            move |title| {
                interop::set_document_title(title);
                || ()
            },
            title,
        );
    }
    let style = TitleBlockStyle {
        tiny: props.tiny,
        bold: props.bold,
        tooltip: props.tooltip_options,
    };
    let mut attrs = attrs(&props.class, false);
    if let Some(tooltip) = &props.tooltip {
        attrs.insert("data-tooltip", tooltip.to_string());
    }
    html! {
        <section class={style.class(&attrs)}>
            <div class={TitleBlockStyle::body_class(&attrs)}>
                <span class={style.tooltip_class(&attrs)} data-tooltip={props.tooltip.clone()}>
                    <h1 class={TitleBlockStyle::title_class(&attrs)}>{props.title.clone()}</h1>
                </span>
                if let Some(subtitle) = props.subtitle.clone() {
                    <h2 class="subtitle has-text-centered">{subtitle}</h2>
                }
            </div>
        </section>
    }
}

/// Properties of [`Label`].
#[derive(Properties, PartialEq)]
pub struct LabelProps {
    /// Caption.
    pub text: AttrValue,
    /// Id of the labelled input.
    #[prop_or_default]
    pub for_id: Option<AttrValue>,
    /// Tooltip text.
    #[prop_or_default]
    pub tooltip: Option<AttrValue>,
    /// Tooltip placement and style.
    #[prop_or(TooltipOptions::empty())]
    pub tooltip_options: TooltipOptions,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// Form label with an optional tooltip.
#[function_component(Label)]
pub fn label(props: &LabelProps) -> Html {
    let class = label_class(&attrs(&props.class, false));
    let tooltip_class = label_tooltip_class(props.tooltip.as_deref(), props.tooltip_options);
    html! {
        <label {class} for={props.for_id.clone()}>
            <span class={tooltip_class} data-tooltip={props.tooltip.clone()}>{props.text.clone()}</span>
        </label>
    }
}

/// Properties of [`ThemeSelector`].
#[derive(Properties, PartialEq)]
pub struct ThemeSelectorProps {
    /// Persistence and toggle settings.
    #[prop_or_default]
    pub settings: ThemeSettings,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Fires with the mode after each switch.
    #[prop_or_default]
    pub onthemechange: Callback<ThemeMode>,
}

/// Light/dark toggle; swaps the theme stylesheets and remembers the choice.
#[function_component(ThemeSelector)]
pub fn theme_selector(props: &ThemeSelectorProps) -> Html {
    let mode = {
        let settings = props.settings.clone();
        use_state(move || interop::initial_theme(&settings))
    };
    let onclick = {
        let mode = mode.clone();
        let settings = props.settings.clone();
        let onthemechange = props.onthemechange.clone();
        Callback::from(move |_: MouseEvent| {
            let decision = settings.toggle(*mode);
            interop::apply_theme(&decision, &settings);
            mode.set(decision.mode);
            onthemechange.emit(decision.mode);
        })
    };
    let class = theme_selector_class(props.settings.navbar_item, &attrs(&props.class, false));
    let title = if mode.is_dark() { "Switch to light theme" } else { "Switch to dark theme" };
    html! {
        <div {class}>
            <button class="button is-ghost" {title} {onclick}>
                <Icon name={mode.icon()} />
            </button>
        </div>
    }
}
