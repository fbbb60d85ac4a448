//! Gallery routes.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Elements,
    #[at("/inputs")]
    Inputs,
    #[at("/composites")]
    Composites,
    #[at("/errors/:status")]
    Error { status: u16 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Entries shown in the navbar, with their caption and icon.
    pub(crate) fn menu() -> [(Self, &'static str, &'static str); 4] {
        [
            (Self::Elements, "Elements", "widgets"),
            (Self::Inputs, "Inputs", "edit_note"),
            (Self::Composites, "Composites", "tab"),
            (Self::Error { status: 500 }, "Errors", "error"),
        ]
    }
}
