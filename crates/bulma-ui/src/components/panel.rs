use bulma_core::BulmaColor;
use bulma_core::widgets::components::{PanelState, PanelTitleAction};
use yew::prelude::*;

use crate::components::attrs;
use crate::support::icon_class;

/// Properties of [`Panel`].
#[derive(Properties, PartialEq)]
pub struct PanelProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Heading text.
    pub title: AttrValue,
    /// Bulma color.
    #[prop_or_default]
    pub color: BulmaColor,
    /// Flex column layout.
    #[prop_or_default]
    pub flex: bool,
    /// Wrap the body in a `panel-block`.
    #[prop_or(true)]
    pub block: bool,
    /// Show the expand and collapse arrows.
    #[prop_or(true)]
    pub show_collapse_icons: bool,
    /// Body hidden.
    #[prop_or_default]
    pub collapsed: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Replaces collapsing when set.
    #[prop_or_default]
    pub ontitleclick: Option<Callback<()>>,
    /// Fires with the new collapsed state.
    #[prop_or_default]
    pub oncollapsedchange: Callback<bool>,
}

/// Collapsible panel.
#[function_component(Panel)]
pub fn panel(props: &PanelProps) -> Html {
    let state = use_state(|| PanelState {
        color: props.color,
        flex: props.flex,
        block: props.block,
        show_collapse_icons: props.show_collapse_icons,
        collapsed: props.collapsed,
    });
    {
        let state = state.clone();
        use_effect_with_deps(
            move |(color, flex, block, show, collapsed)| {
                state.set(PanelState {
                    color: *color,
                    flex: *flex,
                    block: *block,
                    show_collapse_icons: *show,
                    collapsed: *collapsed,
                });
                || ()
            },
            (props.color, props.flex, props.block, props.show_collapse_icons, props.collapsed),
        );
    }

    let has_handler = props.ontitleclick.is_some();
    let onclick = {
        let state = state.clone();
        let handler = props.ontitleclick.clone();
        let oncollapsedchange = props.oncollapsedchange.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            match next.title_clicked(handler.is_some()) {
                PanelTitleAction::Invoke => {
                    if let Some(handler) = &handler {
                        handler.emit(());
                    }
                }
                PanelTitleAction::Toggled(collapsed) => {
                    state.set(next);
                    oncollapsedchange.emit(collapsed);
                }
                PanelTitleAction::None => {}
            }
        })
    };

    let attrs = attrs(&props.class, false);
    html! {
        <nav class={state.class(&attrs)}>
            <p class={state.header_class(has_handler, &attrs)} {onclick}>
                <span>{props.title.clone()}</span>
                if state.show_collapse_icons && !has_handler {
                    <span class={icon_class("is-pulled-right")}>{state.collapse_icon()}</span>
                }
            </p>
            <div class={state.content_class(&attrs)}>{ for props.children.iter() }</div>
        </nav>
    }
}
