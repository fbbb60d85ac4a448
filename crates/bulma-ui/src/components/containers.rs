//! Card, message and modal.

use bulma_core::widgets::components::{
    CardClasses, message_body_class, message_class, message_header_class, modal_card_class, modal_class,
};
use bulma_core::widgets::elements::Dismissable;
use bulma_core::{BulmaColor, ImageSize};
use yew::prelude::*;

use crate::components::attrs;
use crate::support::with_part;

/// Properties of [`Card`].
#[derive(Properties, PartialEq)]
pub struct CardProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Title text.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Image URL.
    #[prop_or_default]
    pub image: Option<AttrValue>,
    /// Aspect of the header image.
    #[prop_or(ImageSize::Is4by3)]
    pub image_size: ImageSize,
    /// Footer content.
    #[prop_or_default]
    pub footer: Html,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Extra classes on the content section.
    #[prop_or_default]
    pub content_class: AttrValue,
}

/// Bulma card with optional header image and footer.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let attrs = with_part(attrs(&props.class, false), "content-class", &props.content_class);
    let classes = CardClasses::new(props.image_size, &attrs);
    let has_footer = props.footer != Html::default();
    html! {
        <div class={classes.card}>
            if let Some(title) = props.title.clone() {
                <header class={classes.header}>
                    <p class={classes.title}>{title}</p>
                </header>
            }
            if let Some(src) = props.image.clone() {
                <div class="card-image">
                    <figure class={classes.figure}><img {src} /></figure>
                </div>
            }
            <div class={classes.content}>{ for props.children.iter() }</div>
            if has_footer {
                <footer class={classes.footer}>{props.footer.clone()}</footer>
            }
        </div>
    }
}

/// Properties of [`Message`].
#[derive(Properties, PartialEq)]
pub struct MessageProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Header text; no header when absent.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Bulma color.
    #[prop_or_default]
    pub color: BulmaColor,
    /// Render nothing while set.
    #[prop_or_default]
    pub hidden: bool,
    /// Show a close button.
    #[prop_or(true)]
    pub dismissable: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Fires when the close button is clicked.
    #[prop_or_default]
    pub ondismiss: Callback<()>,
}

/// Dismissable message box.
#[function_component(Message)]
pub fn message(props: &MessageProps) -> Html {
    let state = use_state(|| Dismissable::new(props.hidden));
    {
        let state = state.clone();
        use_effect_with_deps(
            move |hidden| {
                state.set(Dismissable::new(*hidden));
                || ()
            },
            props.hidden,
        );
    }
    let dismiss = {
        let state = state.clone();
        let ondismiss = props.ondismiss.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            next.dismiss();
            state.set(next);
            ondismiss.emit(());
        })
    };
    let attrs = attrs(&props.class, false);
    html! {
        <article class={message_class(state.is_hidden(), props.color, &attrs)}>
            if props.title.is_some() || props.dismissable {
                <div class={message_header_class(&attrs)}>
                    <p>{props.title.clone()}</p>
                    if props.dismissable {
                        <button class="delete" aria-label="delete" onclick={dismiss}></button>
                    }
                </div>
            }
            <div class={message_body_class(&attrs)}>{ for props.children.iter() }</div>
        </article>
    }
}

/// Properties of [`Modal`].
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Show the modal.
    #[prop_or_default]
    pub is_displayed: bool,
    /// Card header text; a plain modal when absent.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Cover the whole viewport.
    #[prop_or_default]
    pub full_screen: bool,
    /// Footer content.
    #[prop_or_default]
    pub footer: Html,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Fires with `false` when the modal is closed from inside.
    #[prop_or_default]
    pub on_displayed_change: Callback<bool>,
}

/// Modal card; closing through the background or the delete button reports
/// `false` through `on_displayed_change` so the caller's binding follows.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let close = props.on_displayed_change.reform(|_: MouseEvent| false);
    let attrs = attrs(&props.class, false);
    html! {
        <div class={modal_class(props.is_displayed, &attrs)} role="dialog" aria-modal="true">
            <div class="modal-background" onclick={close.clone()}></div>
            <div class={modal_card_class(props.full_screen)}>
                <header class="modal-card-head">
                    <p class="modal-card-title">{props.title.clone()}</p>
                    <button class="delete" aria-label="close" onclick={close}></button>
                </header>
                <section class="modal-card-body">{ for props.children.iter() }</section>
                <footer class="modal-card-foot">{props.footer.clone()}</footer>
            </div>
        </div>
    }
}
