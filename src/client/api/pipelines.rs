use reqwasm::http::Request;

use super::{expect_empty, expect_json, json_body, send, ApiError, API_BASE};
use crate::model::pipeline::{
    CreatePipelineDto, PipelineDto, PipelinePositionDto, UpdatePipelineDto,
};

/// Retrieve all pipelines for the current user.
pub async fn get_pipelines() -> Result<Vec<PipelineDto>, ApiError> {
    let response = send(Request::get(&format!("{API_BASE}/pipelines"))).await?;
    match response.status() {
        404 => Ok(Vec::new()),
        _ => expect_json(response).await,
    }
}

pub async fn create_pipeline(pipeline: &CreatePipelineDto) -> Result<PipelineDto, ApiError> {
    let response = send(
        Request::post(&format!("{API_BASE}/pipelines"))
            .header("Content-Type", "application/json")
            .body(json_body(pipeline)?),
    )
    .await?;
    expect_json(response).await
}

pub async fn update_pipeline(id: i64, update: &UpdatePipelineDto) -> Result<PipelineDto, ApiError> {
    let response = send(
        Request::put(&format!("{API_BASE}/pipelines/{id}"))
            .header("Content-Type", "application/json")
            .body(json_body(update)?),
    )
    .await?;
    expect_json(response).await
}

/// Delete a pipeline. The server cascades deletion of its applications.
pub async fn delete_pipeline(id: i64) -> Result<(), ApiError> {
    let response = send(Request::delete(&format!("{API_BASE}/pipelines/{id}"))).await?;
    expect_empty(response).await
}

/// Persist a full column reorder as one batched id-to-position mapping.
pub async fn reorder_pipelines(order: &[PipelinePositionDto]) -> Result<(), ApiError> {
    let response = send(
        Request::post(&format!("{API_BASE}/pipelines/reorder"))
            .header("Content-Type", "application/json")
            .body(json_body(&order)?),
    )
    .await?;
    expect_empty(response).await
}
