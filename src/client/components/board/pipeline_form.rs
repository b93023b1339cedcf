use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::store::pipeline::{PipelineState, PIPELINE_PALETTE};
use crate::client::store::toast::ToastState;
use crate::client::util::refetch::refetch_pipelines;
use crate::model::pipeline::{CreatePipelineDto, PipelineDto, UpdatePipelineDto};

/// Draft of the stage form dialog. `id` is `None` for a create.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineFormState {
    pub id: Option<i64>,
    pub name: String,
    pub color: String,
    /// In-flight flag scoped to this dialog; disables its submit controls
    /// while the request runs.
    pub busy: bool,
}

impl PipelineFormState {
    pub fn create(color: &str) -> Self {
        Self {
            id: None,
            name: String::new(),
            color: color.to_string(),
            busy: false,
        }
    }

    pub fn edit(pipeline: &PipelineDto) -> Self {
        Self {
            id: Some(pipeline.id),
            name: pipeline.name.clone(),
            color: pipeline.color.clone(),
            busy: false,
        }
    }

    /// Mark this dialog's request in flight. Returns false when a submit is
    /// already pending, so a double-click cannot fire twice.
    pub fn begin_submit(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }
}

/// Create/rename/recolor dialog for a pipeline stage.
#[component]
pub fn PipelineForm(form: Signal<Option<PipelineFormState>>) -> Element {
    let mut pipelines = use_context::<Signal<PipelineState>>();
    let mut toasts = use_context::<Signal<ToastState>>();
    let mut form = form;

    let Some(state) = form.read().clone() else {
        return rsx!();
    };
    let editing = state.id.is_some();

    let submit = move |_| {
        let Some(state) = form.read().clone() else {
            return;
        };
        let name = state.name.trim().to_string();
        if name.is_empty() {
            toasts.write().error("Stage name is required");
            return;
        }
        {
            let mut guard = form.write();
            match guard.as_mut() {
                Some(state) => {
                    if !state.begin_submit() {
                        return;
                    }
                }
                None => return,
            }
        }

        match state.id {
            None => {
                let dto = CreatePipelineDto {
                    name,
                    color: state.color,
                };
                spawn(async move {
                    match api::pipelines::create_pipeline(&dto).await {
                        Ok(created) => {
                            pipelines.write().insert(created);
                            toasts.write().success("Stage created");
                        }
                        Err(err) => {
                            tracing::error!("failed to create pipeline: {err}");
                            toasts.write().error(err.to_string());
                            refetch_pipelines(pipelines, toasts).await;
                        }
                    }
                    form.set(None);
                });
            }
            Some(id) => {
                // Optimistic rename/recolor, reconciled on response.
                let existing = pipelines.read().get(id).cloned();
                if let Some(mut local) = existing {
                    local.name = name.clone();
                    local.color = state.color.clone();
                    pipelines.write().update(local);
                }
                let update = UpdatePipelineDto {
                    name: Some(name),
                    color: Some(state.color),
                };
                spawn(async move {
                    match api::pipelines::update_pipeline(id, &update).await {
                        Ok(updated) => {
                            pipelines.write().update(updated);
                            toasts.write().success("Stage updated");
                        }
                        Err(err) => {
                            tracing::error!("failed to update pipeline: {err}");
                            toasts.write().error(err.to_string());
                            refetch_pipelines(pipelines, toasts).await;
                        }
                    }
                    form.set(None);
                });
            }
        }
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box flex flex-col gap-3",
                h3 { class: "font-bold text-lg",
                    if editing { "Edit Stage" } else { "New Stage" }
                }
                label { class: "form-control",
                    span { class: "label-text", "Name" }
                    input {
                        class: "input input-bordered",
                        value: "{state.name}",
                        oninput: move |evt| {
                            if let Some(state) = form.write().as_mut() {
                                state.name = evt.value();
                            }
                        }
                    }
                }
                div { class: "flex flex-col gap-1",
                    span { class: "label-text", "Color" }
                    div { class: "flex gap-2",
                        {PIPELINE_PALETTE.iter().map(|swatch| {
                            let swatch = *swatch;
                            let class = if state.color == swatch {
                                "w-6 h-6 rounded-full ring-2 ring-offset-1 ring-neutral"
                            } else {
                                "w-6 h-6 rounded-full"
                            };
                            rsx!(
                                button {
                                    key: "{swatch}",
                                    class: "{class}",
                                    style: "background-color: {swatch}",
                                    onclick: move |_| {
                                        if let Some(state) = form.write().as_mut() {
                                            state.color = swatch.to_string();
                                        }
                                    }
                                }
                            )
                        })}
                    }
                }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        disabled: state.busy,
                        onclick: move |_| form.set(None),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: state.busy,
                        onclick: submit,
                        if editing { "Save" } else { "Create" }
                    }
                }
            }
        }
    )
}
