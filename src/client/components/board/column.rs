use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::board::application_form::ApplicationFormState;
use crate::client::components::board::card::ApplicationCard;
use crate::client::components::board::handle_drop;
use crate::client::components::board::pipeline_form::PipelineFormState;
use crate::client::store::application::ApplicationState;
use crate::client::store::drag::{DragPayload, DragSession};
use crate::client::store::pipeline::PipelineState;
use crate::client::store::toast::ToastState;
use crate::client::util::refetch::refetch_board;
use crate::model::application::JobApplicationDto;
use crate::model::cv::CvDto;
use crate::model::pipeline::PipelineDto;

/// One stage column: draggable header, drop target for both column reorder
/// and card moves, ordered card list, and an add-application footer.
#[component]
pub fn PipelineColumn(
    pipeline: PipelineDto,
    cvs: Signal<Vec<CvDto>>,
    application_form: Signal<Option<ApplicationFormState>>,
    pipeline_form: Signal<Option<PipelineFormState>>,
) -> Element {
    let pipelines = use_context::<Signal<PipelineState>>();
    let mut applications = use_context::<Signal<ApplicationState>>();
    let mut drag = use_context::<Signal<DragSession>>();
    let mut toasts = use_context::<Signal<ToastState>>();
    let mut application_form = application_form;
    let mut pipeline_form = pipeline_form;

    let pipeline_id = pipeline.id;
    let is_default = pipeline.is_default;
    let edit_state = PipelineFormState::edit(&pipeline);

    let cards: Vec<JobApplicationDto> = applications
        .read()
        .get_ordered(pipeline_id)
        .into_iter()
        .cloned()
        .collect();
    let count = cards.len();

    let hovered = drag.read().is_hovering_pipeline(pipeline_id);
    let column_class = if hovered {
        "card bg-base-200 w-72 shrink-0 ring-2 ring-primary"
    } else {
        "card bg-base-200 w-72 shrink-0"
    };

    let delete_pipeline = move |_| {
        // Default pipelines cannot be deleted; the button is not rendered
        // for them, this guard covers programmatic paths.
        if is_default {
            return;
        }
        let mut pipelines = pipelines;
        pipelines.write().remove(pipeline_id);
        applications.write().remove_pipeline(pipeline_id);
        spawn(async move {
            match api::pipelines::delete_pipeline(pipeline_id).await {
                Ok(()) => toasts.write().success("Stage deleted"),
                Err(err) => {
                    tracing::error!("failed to delete pipeline: {err}");
                    toasts.write().error(err.to_string());
                    refetch_board(pipelines, applications, toasts).await;
                }
            }
        });
    };

    rsx!(
        div {
            class: "{column_class}",
            // Drag-over fires continuously while a drag lingers; only write
            // the signal when the hovered target actually changes.
            ondragover: move |evt| {
                evt.prevent_default();
                if !drag.peek().is_hovering_pipeline(pipeline_id) {
                    drag.write().hover_pipeline(pipeline_id);
                }
            },
            ondragleave: move |_| {
                if drag.peek().is_hovering_pipeline(pipeline_id) {
                    drag.write().drag_over_pipeline = None;
                }
            },
            ondrop: move |evt| {
                evt.prevent_default();
                let payload = drag.write().take();
                if let Some(payload) = payload {
                    handle_drop(payload, pipeline_id, None, pipelines, applications, toasts);
                }
            },
            div {
                class: "card-body p-3 gap-3",
                div {
                    class: "flex items-center gap-2 cursor-grab",
                    draggable: true,
                    ondragstart: move |_| drag.write().begin(DragPayload::pipeline(pipeline_id)),
                    ondragend: move |_| {
                        drag.write().take();
                    },
                    span {
                        class: "w-3 h-3 rounded-full shrink-0",
                        style: "background-color: {pipeline.color}",
                    }
                    h2 { class: "font-semibold grow truncate",
                        "{pipeline.name}"
                    }
                    span { class: "badge badge-ghost",
                        "{count}"
                    }
                    button {
                        class: "btn btn-ghost btn-xs",
                        onclick: move |_| pipeline_form.set(Some(edit_state.clone())),
                        Icon { width: 14, height: 14, icon: FaPen }
                    }
                    if !is_default {
                        button {
                            class: "btn btn-ghost btn-xs",
                            onclick: delete_pipeline,
                            Icon { width: 14, height: 14, icon: FaTrash }
                        }
                    }
                }
                div { class: "flex flex-col gap-2 min-h-16",
                    {cards.into_iter().map(|application| {
                        let id = application.id;
                        rsx!(
                            ApplicationCard {
                                key: "{id}",
                                application: application,
                                cvs: cvs,
                                application_form: application_form,
                            }
                        )
                    })}
                }
                button {
                    class: "btn btn-ghost btn-sm justify-start",
                    onclick: move |_| {
                        application_form.set(Some(ApplicationFormState::create(pipeline_id)));
                    },
                    Icon { width: 14, height: 14, icon: FaPlus }
                    p { "Add Application" }
                }
            }
        }
    )
}
