//! Authoritative refetches used after a failed write. No partial local state
//! is trusted once a mutation request fails; the affected collection is
//! reloaded wholesale from the server instead of undone piecemeal.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::store::application::ApplicationState;
use crate::client::store::pipeline::PipelineState;
use crate::client::store::toast::ToastState;

pub async fn refetch_pipelines(
    mut pipelines: Signal<PipelineState>,
    mut toasts: Signal<ToastState>,
) {
    match api::pipelines::get_pipelines().await {
        Ok(list) => pipelines.write().set_all(list),
        Err(err) => {
            tracing::error!("failed to refetch pipelines: {err}");
            toasts.write().error(err.to_string());
        }
    }
}

pub async fn refetch_applications(
    mut applications: Signal<ApplicationState>,
    mut toasts: Signal<ToastState>,
) {
    match api::applications::get_applications(None).await {
        Ok(list) => applications.write().set_all(list),
        Err(err) => {
            tracing::error!("failed to refetch applications: {err}");
            toasts.write().error(err.to_string());
        }
    }
}

/// Reload both collections after a write whose blast radius spans them,
/// e.g. a failed pipeline deletion that had already cascaded locally.
pub async fn refetch_board(
    pipelines: Signal<PipelineState>,
    applications: Signal<ApplicationState>,
    toasts: Signal<ToastState>,
) {
    refetch_pipelines(pipelines, toasts).await;
    refetch_applications(applications, toasts).await;
}
