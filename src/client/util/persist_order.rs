//! Persistence half of an optimistic drop: the store has already applied the
//! new order, these helpers ship it to the server and fall back to an
//! authoritative refetch when the write is rejected.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::store::application::{ApplicationMove, ApplicationState};
use crate::client::store::pipeline::PipelineState;
use crate::client::store::toast::ToastState;
use crate::client::util::refetch::{refetch_applications, refetch_pipelines};
use crate::model::application::UpdateJobApplicationDto;
use crate::model::pipeline::PipelinePositionDto;

/// Persist a batched column reorder.
pub async fn persist_pipeline_order(
    order: Vec<PipelinePositionDto>,
    pipelines: Signal<PipelineState>,
    mut toasts: Signal<ToastState>,
) {
    match api::pipelines::reorder_pipelines(&order).await {
        Ok(()) => toasts.write().success("Stage order saved"),
        Err(err) => {
            tracing::error!("pipeline reorder failed: {err}");
            toasts.write().error(err.to_string());
            refetch_pipelines(pipelines, toasts).await;
        }
    }
}

/// Persist the position assignment(s) of an application move. Usually a
/// single update; a renormalized pipeline produces one per rewritten card.
/// The first rejected update aborts the rest and triggers a refetch.
pub async fn persist_application_moves(
    moves: Vec<ApplicationMove>,
    applications: Signal<ApplicationState>,
    mut toasts: Signal<ToastState>,
) {
    for mv in &moves {
        let update = UpdateJobApplicationDto {
            pipeline_id: Some(mv.pipeline_id),
            position: Some(mv.position),
            ..Default::default()
        };
        if let Err(err) = api::applications::update_application(mv.id, &update).await {
            tracing::error!("application move failed: {err}");
            toasts.write().error(err.to_string());
            refetch_applications(applications, toasts).await;
            return;
        }
    }
    toasts.write().success("Application moved");
}
