//! Navbar with burger menu, items and dropdowns.

use bulma_core::widgets::components::{
    NavbarState, navbar_brand_class, navbar_caption_class, navbar_class, navbar_dropdown_class,
    navbar_dropdown_menu_class, navbar_icon_class, navbar_item_class, navbar_link_class, navbar_logo_class,
};
use yew::prelude::*;

use crate::components::attrs;
use crate::support::with_part;

/// Properties of [`Navbar`].
#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Items aligned right.
    #[prop_or_default]
    pub end: Html,
    /// Id of the menu; generated when absent.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Text in the brand area.
    #[prop_or_default]
    pub brand_text: Option<AttrValue>,
    /// Logo image URL.
    #[prop_or_default]
    pub logo: Option<AttrValue>,
    /// Target of the brand link.
    #[prop_or(AttrValue::Static("/"))]
    pub brand_url: AttrValue,
    /// Extra classes on the logo.
    #[prop_or_default]
    pub logo_class: AttrValue,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// Navbar with brand, burger toggle and right-aligned items.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let state = use_state(|| NavbarState::new(props.id.as_deref()));
    let attrs = with_part(attrs(&props.class, false), "logo-class", &props.logo_class);
    let toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.toggle();
            state.set(next);
        })
    };
    let target = state.id().to_string();
    html! {
        <nav class={navbar_class(&attrs)} role="navigation" aria-label="main navigation">
            <div class={navbar_brand_class(&attrs)}>
                <a class={navbar_link_class(&attrs)} href={props.brand_url.clone()}>
                    if let Some(src) = props.logo.clone() {
                        <img class={navbar_logo_class(&attrs)} {src} />
                    }
                    {props.brand_text.clone()}
                </a>
                <a
                    role="button"
                    class={state.burger_class(&attrs)}
                    aria-label="menu"
                    aria-expanded={state.is_active().to_string()}
                    data-target={target.clone()}
                    onclick={toggle}
                >
                    <span aria-hidden="true"></span>
                    <span aria-hidden="true"></span>
                    <span aria-hidden="true"></span>
                </a>
            </div>
            <div id={target} class={state.menu_class(&attrs)}>
                <div class="navbar-start">{ for props.children.iter() }</div>
                <div class="navbar-end">{props.end.clone()}</div>
            </div>
        </nav>
    }
}

/// Properties of [`NavbarItem`].
#[derive(Properties, PartialEq)]
pub struct NavbarItemProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Link target; a plain item when absent.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    /// Material icon before the text.
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    /// Caption.
    #[prop_or_default]
    pub text: Option<AttrValue>,
    /// Hide the caption on smaller screens.
    #[prop_or_default]
    pub compact: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Navbar link or plain item.
#[function_component(NavbarItem)]
pub fn navbar_item(props: &NavbarItemProps) -> Html {
    let attrs = attrs(&props.class, false);
    let caption_class = navbar_caption_class(props.icon.is_some(), props.compact, props.text.is_some(), &attrs);
    html! {
        <a class={navbar_item_class(&attrs)} href={props.href.clone()} onclick={props.onclick.clone()}>
            if let Some(icon) = props.icon.clone() {
                <span class={navbar_icon_class(&attrs)}>{icon}</span>
            }
            if let Some(text) = props.text.clone() {
                <span class={caption_class}>{text}</span>
            }
            { for props.children.iter() }
        </a>
    }
}

/// Properties of [`NavbarDropdown`].
#[derive(Properties, PartialEq)]
pub struct NavbarDropdownProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Caption of the dropdown link.
    pub text: AttrValue,
    /// Material icon before the caption.
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    /// Stretch the menu across the navbar.
    #[prop_or_default]
    pub full_width: bool,
    /// Hide the caption on smaller screens.
    #[prop_or_default]
    pub compact: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// Hoverable dropdown; clicking the link pins it open on touch screens.
#[function_component(NavbarDropdown)]
pub fn navbar_dropdown(props: &NavbarDropdownProps) -> Html {
    let active = use_state(|| false);
    let attrs = attrs(&props.class, false);
    let toggle = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(!*active))
    };
    let caption_class = navbar_caption_class(props.icon.is_some(), props.compact, true, &attrs);
    html! {
        <div class={navbar_dropdown_class(props.full_width, &attrs)}>
            <a class="navbar-link" onclick={toggle}>
                if let Some(icon) = props.icon.clone() {
                    <span class={navbar_icon_class(&attrs)}>{icon}</span>
                }
                <span class={caption_class}>{props.text.clone()}</span>
            </a>
            <div class={navbar_dropdown_menu_class(*active, &attrs)}>{ for props.children.iter() }</div>
        </div>
    }
}
