use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::board::application_form::ApplicationFormState;
use crate::client::components::board::handle_drop;
use crate::client::store::application::ApplicationState;
use crate::client::store::drag::{DragPayload, DragSession};
use crate::client::store::pipeline::PipelineState;
use crate::client::store::toast::ToastState;
use crate::client::util::refetch::refetch_applications;
use crate::model::application::JobApplicationDto;
use crate::model::cv::CvDto;

/// One application card. Draggable; dropping another card on it inserts
/// that card immediately before this one in this pipeline.
#[component]
pub fn ApplicationCard(
    application: JobApplicationDto,
    cvs: Signal<Vec<CvDto>>,
    application_form: Signal<Option<ApplicationFormState>>,
) -> Element {
    let pipelines = use_context::<Signal<PipelineState>>();
    let applications = use_context::<Signal<ApplicationState>>();
    let mut drag = use_context::<Signal<DragSession>>();
    let mut toasts = use_context::<Signal<ToastState>>();
    let mut application_form = application_form;

    let id = application.id;
    let pipeline_id = application.pipeline_id;
    let edit_state = ApplicationFormState::edit(&application);

    let cv_title = application.cv_id.and_then(|cv_id| {
        cvs.read()
            .iter()
            .find(|cv| cv.id == cv_id)
            .map(|cv| cv.title.clone())
    });
    let date = application.application_date.format("%b %-d, %Y").to_string();

    let hovered = drag.read().is_hovering_application(id);
    let card_class = if hovered {
        "card bg-base-100 shadow-sm cursor-grab ring-2 ring-primary"
    } else {
        "card bg-base-100 shadow-sm cursor-grab"
    };

    let delete_application = move |_| {
        let mut applications = applications;
        applications.write().remove(id);
        spawn(async move {
            match api::applications::delete_application(id).await {
                Ok(()) => toasts.write().success("Application deleted"),
                Err(err) => {
                    tracing::error!("failed to delete application: {err}");
                    toasts.write().error(err.to_string());
                    refetch_applications(applications, toasts).await;
                }
            }
        });
    };

    rsx!(
        div {
            class: "{card_class}",
            draggable: true,
            ondragstart: move |_| {
                drag.write().begin(DragPayload::application(id, pipeline_id));
            },
            ondragend: move |_| {
                drag.write().take();
            },
            // Drag-over fires continuously while a drag lingers; only write
            // the signal when the hovered target actually changes.
            ondragover: move |evt| {
                evt.prevent_default();
                if !drag.peek().is_hovering_application(id) {
                    drag.write().hover_application(id);
                }
            },
            ondragleave: move |_| {
                if drag.peek().is_hovering_application(id) {
                    drag.write().drag_over_application = None;
                }
            },
            ondrop: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                let payload = drag.write().take();
                if let Some(payload) = payload {
                    handle_drop(payload, pipeline_id, Some(id), pipelines, applications, toasts);
                }
            },
            div {
                class: "card-body p-3 gap-1",
                div { class: "flex items-start gap-2",
                    div { class: "grow",
                        p { class: "font-semibold",
                            "{application.company_name}"
                        }
                        p { class: "text-sm",
                            "{application.job_title}"
                        }
                    }
                    button {
                        class: "btn btn-ghost btn-xs",
                        onclick: move |_| application_form.set(Some(edit_state.clone())),
                        Icon { width: 12, height: 12, icon: FaPen }
                    }
                    button {
                        class: "btn btn-ghost btn-xs",
                        onclick: delete_application,
                        Icon { width: 12, height: 12, icon: FaTrash }
                    }
                }
                div { class: "flex items-center gap-2 text-xs opacity-70",
                    p { "{date}" }
                    if let Some(cv_title) = cv_title {
                        span { class: "badge badge-outline badge-sm",
                            "{cv_title}"
                        }
                    }
                }
            }
        }
    )
}
