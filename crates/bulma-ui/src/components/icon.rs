use yew::prelude::*;

use crate::support::icon_class;

/// Properties of [`Icon`].
#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Material icon name.
    pub name: AttrValue,
    /// Extra classes beside `material-icons`.
    #[prop_or_default]
    pub class: Classes,
}

/// Material icon glyph.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <span class={icon_class(&props.class.to_string())} aria-hidden="true">{props.name.clone()}</span>
    }
}
