//! The application tracking board: draggable stage columns holding
//! draggable application cards.
//!
//! Drops are the only place committed order changes. Each drop applies the
//! store mutation synchronously (optimistic, zero latency) and spawns the
//! persistence request; a rejected write resolves to an error toast plus an
//! authoritative refetch.

use dioxus::prelude::*;

use crate::client::store::application::ApplicationState;
use crate::client::store::drag::{DragKind, DragPayload, DragSession};
use crate::client::store::pipeline::{default_color, default_stage_payloads, PipelineState};
use crate::client::store::toast::ToastState;
use crate::client::util::persist_order::{persist_application_moves, persist_pipeline_order};
use crate::client::util::refetch::refetch_pipelines;
use crate::client::{api, components::board::pipeline_form::PipelineFormState};
use crate::model::cv::CvDto;
use crate::model::pipeline::PipelineDto;

pub mod application_form;
pub mod card;
pub mod column;
pub mod pipeline_form;

pub use application_form::{ApplicationForm, ApplicationFormState};
pub use card::ApplicationCard;
pub use column::PipelineColumn;
pub use pipeline_form::PipelineForm;

/// Dispatch a drop to the matching store operation. A pipeline payload
/// reorders columns (inserted before `target_pipeline_id`); an application
/// payload moves a card (before `before_application_id`, appended when
/// `None`). No-ops return without issuing a network request.
pub(crate) fn handle_drop(
    payload: DragPayload,
    target_pipeline_id: i64,
    before_application_id: Option<i64>,
    mut pipelines: Signal<PipelineState>,
    mut applications: Signal<ApplicationState>,
    toasts: Signal<ToastState>,
) {
    match payload.kind {
        DragKind::Pipeline => {
            let order = pipelines
                .write()
                .reorder(payload.id, Some(target_pipeline_id));
            if let Some(order) = order {
                spawn(persist_pipeline_order(order, pipelines, toasts));
            }
        }
        DragKind::Application => {
            let moves = applications.write().move_in_order(
                payload.id,
                target_pipeline_id,
                before_application_id,
            );
            if let Some(moves) = moves {
                spawn(persist_application_moves(moves, applications, toasts));
            }
        }
    }
}

#[component]
pub fn PipelineBoard(
    cvs: Signal<Vec<CvDto>>,
    prefill: Option<(String, String)>,
) -> Element {
    let mut pipelines = use_context::<Signal<PipelineState>>();
    let mut drag = use_context::<Signal<DragSession>>();
    let mut toasts = use_context::<Signal<ToastState>>();

    let mut application_form = use_signal(|| None::<ApplicationFormState>);
    let mut pipeline_form = use_signal(|| None::<PipelineFormState>);

    // A deep-linked company/title pair waits here until the pipelines have
    // loaded, then opens the application form once seeded into the first
    // stage.
    let mut pending_prefill = use_signal(|| prefill);
    use_effect(move || {
        let first_pipeline = pipelines.read().list().first().map(|p| p.id);
        if let Some(pipeline_id) = first_pipeline {
            let prefill_pair = pending_prefill.peek().clone();
            if let Some((company, job_title)) = prefill_pair {
                application_form.set(Some(ApplicationFormState::prefill(
                    pipeline_id,
                    company,
                    job_title,
                )));
                pending_prefill.set(None);
            }
        }
    });

    let columns: Vec<PipelineDto> = pipelines.read().list().to_vec();
    let board_empty = pipelines.read().fetched && columns.is_empty();
    let next_color = default_color(columns.len()).to_string();

    // Guards the bootstrap against a second click while the stage creates
    // are still in flight; without it the board would seed twice over.
    let mut seeding = use_signal(|| false);

    let create_defaults = move |_| {
        if *seeding.peek() {
            return;
        }
        seeding.set(true);
        spawn(async move {
            for payload in default_stage_payloads() {
                match api::pipelines::create_pipeline(&payload).await {
                    Ok(created) => pipelines.write().insert(created),
                    Err(err) => {
                        toasts.write().error(err.to_string());
                        refetch_pipelines(pipelines, toasts).await;
                        seeding.set(false);
                        return;
                    }
                }
            }
            toasts.write().success("Default stages created");
            seeding.set(false);
        });
    };

    rsx!(
        div { class: "flex items-center justify-between pb-4",
            h1 { class: "text-2xl font-semibold",
                "Application Board"
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| pipeline_form.set(Some(PipelineFormState::create(&next_color))),
                "Add Stage"
            }
        }
        if board_empty {
            div { class: "flex flex-col items-center gap-4 py-16",
                p { class: "text-lg",
                    "No stages yet. Start with the default hiring workflow."
                }
                button {
                    class: "btn btn-primary",
                    disabled: seeding(),
                    onclick: create_defaults,
                    "Create Default Stages"
                }
            }
        }
        div { class: "flex gap-4 items-start overflow-x-auto pb-4",
            {columns.into_iter().map(|pipeline| {
                let id = pipeline.id;
                rsx!(
                    PipelineColumn {
                        key: "{id}",
                        pipeline: pipeline,
                        cvs: cvs,
                        application_form: application_form,
                        pipeline_form: pipeline_form,
                    }
                )
            })}
            // Trailing drop zone: dropping a column here moves it to the end.
            div {
                class: "w-8 self-stretch min-h-32",
                ondragover: move |evt| evt.prevent_default(),
                ondrop: move |evt| {
                    evt.prevent_default();
                    let payload = drag.write().take();
                    if let Some(payload) = payload {
                        if payload.kind == DragKind::Pipeline {
                            let order = pipelines.write().reorder(payload.id, None);
                            if let Some(order) = order {
                                spawn(persist_pipeline_order(order, pipelines, toasts));
                            }
                        }
                    }
                }
            }
        }
        ApplicationForm { form: application_form, cvs: cvs }
        PipelineForm { form: pipeline_form }
    )
}
