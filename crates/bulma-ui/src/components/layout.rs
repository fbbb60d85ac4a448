use bulma_core::BulmaColor;
use bulma_core::widgets::layout::{MediaClasses, hero_class, hero_section_classes, level_class, level_item_class};
use yew::prelude::*;

use crate::components::attrs;

/// Properties of [`Hero`].
#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Content of `hero-head`.
    #[prop_or_default]
    pub head: Html,
    /// Content of `hero-foot`.
    #[prop_or_default]
    pub foot: Html,
    /// Bulma color.
    #[prop_or_default]
    pub color: BulmaColor,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// Bulma hero with head, body and foot.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let attrs = attrs(&props.class, false);
    let [head, body, foot] = hero_section_classes(&attrs);
    html! {
        <section class={hero_class(props.color, &attrs)}>
            <div class={head}>{props.head.clone()}</div>
            <div class={body}>{ for props.children.iter() }</div>
            <div class={foot}>{props.foot.clone()}</div>
        </section>
    }
}

/// Properties of [`Level`].
#[derive(Properties, PartialEq)]
pub struct LevelProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// Horizontal level container.
#[function_component(Level)]
pub fn level(props: &LevelProps) -> Html {
    html! {
        <nav class={level_class(&attrs(&props.class, false))}>{ for props.children.iter() }</nav>
    }
}

/// One centered level item; same props as [`Level`].
#[function_component(LevelItem)]
pub fn level_item(props: &LevelProps) -> Html {
    html! {
        <div class={level_item_class(&attrs(&props.class, false))}>{ for props.children.iter() }</div>
    }
}

/// Properties of [`MediaObject`].
#[derive(Properties, PartialEq)]
pub struct MediaObjectProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Image URL on the left.
    #[prop_or_default]
    pub image: Option<AttrValue>,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// Media object with an image on the left.
#[function_component(MediaObject)]
pub fn media_object(props: &MediaObjectProps) -> Html {
    let classes = MediaClasses::new(&attrs(&props.class, false));
    html! {
        <article class={classes.media}>
            if let Some(src) = props.image.clone() {
                <figure class={classes.left}>
                    <p class={classes.image}><img {src} /></p>
                </figure>
            }
            <div class={classes.content}>{ for props.children.iter() }</div>
        </article>
    }
}
