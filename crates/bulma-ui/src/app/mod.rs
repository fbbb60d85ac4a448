//! Component gallery: navbar, theme selector and one page per component group.

mod pages;
mod routes;

use std::rc::Rc;

use bulma_core::{BulmaSettings, ThemeMode};
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Navbar, NavbarItem, ThemeSelector};
use crate::demo::gallery_settings;
use pages::{CompositesPage, ElementsPage, ErrorsPage, InputsPage};
use routes::Route;

/// Name shown in the navbar and page titles.
pub(crate) const APPLICATION: &str = "Bulma Components";

fn switch(route: Route) -> Html {
    match route {
        Route::Elements => html! { <ElementsPage /> },
        Route::Inputs => html! { <InputsPage /> },
        Route::Composites => html! { <CompositesPage /> },
        Route::Error { status } => html! { <ErrorsPage status={Some(status)} /> },
        Route::NotFound => html! { <ErrorsPage status={Some(404)} /> },
    }
}

#[function_component(GalleryApp)]
fn gallery_app() -> Html {
    let settings = use_memo(|_| gallery_settings(), ());
    let onthemechange = Callback::from(|mode: ThemeMode| {
        console::log!(format!("theme changed to {mode:?}"));
    });
    let menu = Route::menu().into_iter().map(|(route, text, icon)| {
        html! { <NavbarItem href={AttrValue::from(route.to_path())} {text} {icon} /> }
    });
    let end = html! {
        <div class="navbar-item">
            <ThemeSelector settings={settings.theme.clone()} {onthemechange} />
        </div>
    };

    html! {
        <ContextProvider<Rc<BulmaSettings>> context={settings.clone()}>
            <BrowserRouter>
                <Navbar brand_text={APPLICATION} {end}>
                    { for menu }
                </Navbar>
                <section class="section">
                    <div class="container">
                        <Switch<Route> render={switch} />
                    </div>
                </section>
            </BrowserRouter>
        </ContextProvider<Rc<BulmaSettings>>>
    }
}

/// Mount the gallery on `#root`, or on `<body>` when the page has none.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<GalleryApp>::with_root(root).render();
    } else {
        yew::Renderer::<GalleryApp>::new().render();
    }
}
