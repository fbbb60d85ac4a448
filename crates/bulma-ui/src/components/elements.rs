//! Buttons, boolean icons, notifications, progress bars and tables.

use bulma_core::BulmaColor;
use bulma_core::TooltipOptions;
use bulma_core::widgets::elements::{
    ButtonPreset, DELETE_CONFIRMATION, DeleteConfirmation, Dismissable, boolean_icon, boolean_icon_class,
    button_class, notification_class, progress_class, progress_value, table_cell_class, table_class,
    table_header_tooltip_class,
};
use yew::prelude::*;

use super::containers::Modal;
use super::icon::Icon;
use crate::components::attrs;
use crate::support::with_part;

/// Preset applied to a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonKind {
    /// Caller supplied text, icon and colour.
    #[default]
    Plain,
    /// Green submit button.
    Submit,
    /// Red delete button guarded by a confirmation modal.
    Delete,
}

/// Properties of [`Button`].
#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Plain, submit or delete preset.
    #[prop_or_default]
    pub kind: ButtonKind,
    /// Bulma color.
    #[prop_or_default]
    pub color: BulmaColor,
    /// Caption.
    #[prop_or_default]
    pub text: Option<AttrValue>,
    /// Material icon before the caption.
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    /// Render inactive and ignore input.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Question shown in the delete confirmation modal.
    #[prop_or(AttrValue::Static(DELETE_CONFIRMATION))]
    pub confirmation: AttrValue,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Fires once a delete is confirmed.
    #[prop_or_default]
    pub ondelete: Callback<()>,
}

/// Plain, submit or confirmed delete button.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let confirm = use_state(DeleteConfirmation::default);
    let attrs = attrs(&props.class, props.disabled);

    let preset = match props.kind {
        ButtonKind::Plain => ButtonPreset {
            text: String::new(),
            icon: None,
            color: props.color,
        },
        ButtonKind::Submit => ButtonPreset::submit(),
        ButtonKind::Delete => ButtonPreset::delete(),
    };
    let text = props.text.as_ref().map_or(preset.text.clone(), ToString::to_string);
    let icon = props.icon.as_ref().map(ToString::to_string).or(preset.icon.clone());
    let class = preset.class(&attrs);

    let onclick = {
        let confirm = confirm.clone();
        let onclick = props.onclick.clone();
        let kind = props.kind;
        Callback::from(move |event: MouseEvent| {
            if kind == ButtonKind::Delete {
                let mut next = *confirm;
                next.request();
                confirm.set(next);
            }
            onclick.emit(event);
        })
    };
    let on_confirm = {
        let confirm = confirm.clone();
        let ondelete = props.ondelete.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *confirm;
            if next.confirm() {
                ondelete.emit(());
            }
            confirm.set(next);
        })
    };
    let on_displayed_change = {
        let confirm = confirm.clone();
        Callback::from(move |shown: bool| {
            if !shown {
                let mut next = *confirm;
                next.cancel();
                confirm.set(next);
            }
        })
    };

    let kind = if props.kind == ButtonKind::Submit { "submit" } else { "button" };
    let footer = html! {
        <>
            <button class={button_class(BulmaColor::Red, &Default::default())} onclick={on_confirm}>{"Delete"}</button>
            <button class="button" onclick={on_displayed_change.reform(|_: MouseEvent| false)}>{"Cancel"}</button>
        </>
    };

    html! {
        <>
            <button {class} type={kind} disabled={props.disabled} {onclick}>
                if let Some(icon) = icon {
                    <span class="icon"><Icon name={icon} /></span>
                }
                if !text.is_empty() {
                    <span>{text}</span>
                }
                { for props.children.iter() }
            </button>
            if props.kind == ButtonKind::Delete {
                <Modal
                    is_displayed={confirm.is_shown()}
                    title={AttrValue::from("Confirm")}
                    {on_displayed_change}
                    {footer}
                >
                    <p>{props.confirmation.clone()}</p>
                </Modal>
            }
        </>
    }
}

/// Properties of [`BooleanIcon`].
#[derive(Properties, PartialEq)]
pub struct BooleanIconProps {
    /// Value shown as a check or a cross.
    pub value: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// Check or cross icon for a flag.
#[function_component(BooleanIcon)]
pub fn boolean_icon_component(props: &BooleanIconProps) -> Html {
    let class = boolean_icon_class(props.value, &attrs(&props.class, false));
    html! { <span {class}>{boolean_icon(props.value)}</span> }
}

/// Properties of [`Notification`].
#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
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

/// Dismissable notification.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
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
    let class = notification_class(state.is_hidden(), props.color, &attrs(&props.class, false));
    html! {
        <div {class}>
            if props.dismissable {
                <button class="delete" aria-label="close" onclick={dismiss}></button>
            }
            { for props.children.iter() }
        </div>
    }
}

/// Properties of [`ProgressBar`].
#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Current value; indeterminate when absent.
    #[prop_or_default]
    pub value: Option<u32>,
    /// Value at a full bar.
    #[prop_or(100)]
    pub max: u32,
    /// Bulma color.
    #[prop_or_default]
    pub color: BulmaColor,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// `progress` element with a percent label.
#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let class = progress_class(props.color, &attrs(&props.class, false));
    let value = progress_value(props.value, props.max).map(|value| value.to_string());
    let label = value.clone().map(|value| format!("{value}%"));
    html! {
        <progress {class} {value} max={props.max.to_string()}>{label}</progress>
    }
}

/// Properties of [`Table`].
#[derive(Properties, PartialEq)]
pub struct TableProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Header rows.
    #[prop_or_default]
    pub header: Html,
    /// Alternate row shading.
    #[prop_or(true)]
    pub striped: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// Bulma table with optional header rows.
#[function_component(Table)]
pub fn table(props: &TableProps) -> Html {
    let class = table_class(props.striped, &attrs(&props.class, false));
    html! {
        <div class="table-container">
            <table {class}>
                <thead>{props.header.clone()}</thead>
                <tbody>{ for props.children.iter() }</tbody>
            </table>
        </div>
    }
}

/// Properties of [`TableRow`].
#[derive(Properties, PartialEq)]
pub struct TableRowProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// Table row.
#[function_component(TableRow)]
pub fn table_row(props: &TableRowProps) -> Html {
    let class = table_cell_class(&attrs(&props.class, false));
    html! { <tr {class}>{ for props.children.iter() }</tr> }
}

/// Properties of [`TableHeader`].
#[derive(Properties, PartialEq)]
pub struct TableHeaderProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Tooltip text.
    #[prop_or_default]
    pub tooltip: Option<AttrValue>,
    /// Tooltip placement and style.
    #[prop_or(TooltipOptions::empty())]
    pub tooltip_options: TooltipOptions,
    /// Extra classes on the tooltip.
    #[prop_or_default]
    pub tooltip_class: AttrValue,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// Header cell with an optional tooltip.
#[function_component(TableHeader)]
pub fn table_header(props: &TableHeaderProps) -> Html {
    let mut attrs = with_part(attrs(&props.class, false), "tooltip-class", &props.tooltip_class);
    if let Some(tooltip) = &props.tooltip {
        attrs.insert("data-tooltip", tooltip.to_string());
    }
    let class = table_cell_class(&attrs);
    let tooltip_class = table_header_tooltip_class(&attrs, props.tooltip_options);
    html! {
        <th {class}>
            <span class={tooltip_class} data-tooltip={props.tooltip.clone()}>
                { for props.children.iter() }
            </span>
        </th>
    }
}

/// Properties of [`TableData`].
#[derive(Properties, PartialEq)]
pub struct TableDataProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// Body cell.
#[function_component(TableData)]
pub fn table_data(props: &TableDataProps) -> Html {
    let class = table_cell_class(&attrs(&props.class, false));
    html! { <td {class}>{ for props.children.iter() }</td> }
}
