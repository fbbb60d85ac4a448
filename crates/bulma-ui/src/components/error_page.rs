use bulma_core::ErrorReport;
use bulma_core::http_error::{ErrorPage, error_column_class};
use yew::prelude::*;

use crate::components::attrs;
use crate::support::{icon_class, message_lines};

/// Properties of [`HttpErrorPage`].
#[derive(Properties, PartialEq)]
pub struct HttpErrorPageProps {
    /// Response status; `None` shows the generic page.
    #[prop_or_default]
    pub status: Option<u16>,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
}

/// Full page for an HTTP status.
#[function_component(HttpErrorPage)]
pub fn http_error_page(props: &HttpErrorPageProps) -> Html {
    let page = ErrorPage::for_status(props.status);
    let icon = icon_class(&format!("{} is-size-1", page.text_class()));
    let heading = page
        .status
        .map_or_else(|| page.title.to_string(), |code| format!("{code} {}", page.title));
    html! {
        <section class="hero is-fullheight-with-navbar">
            <div class="hero-body">
                <div class="container has-text-centered">
                    <div class="columns is-centered">
                        <div class={error_column_class(&attrs(&props.class, false))}>
                            <span class={icon}>{page.icon}</span>
                            <h1 class="title">{heading}</h1>
                            <p class="subtitle">
                                { for page.lines().map(|line| html! { <>{line}<br /></> }) }
                            </p>
                            { for props.children.iter() }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Properties of [`ErrorBoundary`].
#[derive(Properties, PartialEq)]
pub struct ErrorBoundaryProps {
    /// Content rendered inside.
    #[prop_or_default]
    pub children: Children,
    /// Set by the caller when an operation failed.
    #[prop_or_default]
    pub error: Option<ErrorReport>,
    /// Show the error text under the page.
    #[prop_or_default]
    pub show_details: bool,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

/// Renders its children, or the error page matching a reported failure.
#[function_component(ErrorBoundary)]
pub fn error_boundary(props: &ErrorBoundaryProps) -> Html {
    let Some(report) = props.error.as_ref() else {
        return html! { <>{ for props.children.iter() }</> };
    };
    html! {
        <HttpErrorPage status={report.status} class={props.class.clone()}>
            if props.show_details {
                <pre class="has-text-left">
                    { for message_lines(&report.message).into_iter().map(|line| html! { <>{line.to_string()}{"\n"}</> }) }
                </pre>
            }
        </HttpErrorPage>
    }
}
