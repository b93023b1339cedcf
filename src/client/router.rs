use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Board, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    // Job boards deep-link into the application form via query params.
    #[route("/?:company&:job_title")]
    Board { company: String, job_title: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
