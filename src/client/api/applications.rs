use reqwasm::http::Request;

use super::{expect_empty, expect_json, json_body, send, ApiError, API_BASE};
use crate::model::application::{
    CreateJobApplicationDto, JobApplicationDto, UpdateJobApplicationDto,
};

/// Retrieve job applications, optionally scoped to one pipeline.
pub async fn get_applications(
    pipeline_id: Option<i64>,
) -> Result<Vec<JobApplicationDto>, ApiError> {
    let url = match pipeline_id {
        Some(pipeline_id) => {
            format!("{API_BASE}/job-applications?pipeline_id={pipeline_id}")
        }
        None => format!("{API_BASE}/job-applications"),
    };
    let response = send(Request::get(&url)).await?;
    match response.status() {
        404 => Ok(Vec::new()),
        _ => expect_json(response).await,
    }
}

pub async fn create_application(
    application: &CreateJobApplicationDto,
) -> Result<JobApplicationDto, ApiError> {
    let response = send(
        Request::post(&format!("{API_BASE}/job-applications"))
            .header("Content-Type", "application/json")
            .body(json_body(application)?),
    )
    .await?;
    expect_json(response).await
}

pub async fn update_application(
    id: i64,
    update: &UpdateJobApplicationDto,
) -> Result<JobApplicationDto, ApiError> {
    let response = send(
        Request::put(&format!("{API_BASE}/job-applications/{id}"))
            .header("Content-Type", "application/json")
            .body(json_body(update)?),
    )
    .await?;
    expect_json(response).await
}

pub async fn delete_application(id: i64) -> Result<(), ApiError> {
    let response = send(Request::delete(&format!("{API_BASE}/job-applications/{id}"))).await?;
    expect_empty(response).await
}
