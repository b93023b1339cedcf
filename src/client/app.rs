use dioxus::document::Stylesheet;
use dioxus::prelude::*;

use crate::client::router::Route;
use crate::client::store::application::ApplicationState;
use crate::client::store::drag::DragSession;
use crate::client::store::pipeline::PipelineState;
use crate::client::store::toast::ToastState;

/// Root component. All board state lives in context signals provided here so
/// every mutation routes through the stores rather than ad hoc shared state.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(PipelineState::default()));
    use_context_provider(|| Signal::new(ApplicationState::default()));
    use_context_provider(|| Signal::new(DragSession::default()));
    use_context_provider(|| Signal::new(ToastState::default()));

    rsx!(
        Stylesheet { href: "/assets/tailwind.css" }
        Router::<Route> {}
    )
}
