use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        Page { class: "flex items-center justify-center",
            p { class: "text-lg",
                "Page not found"
            }
        }
    )
}
