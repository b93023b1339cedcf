use reqwasm::http::Request;

use super::{expect_json, send, ApiError, API_BASE};
use crate::model::cv::CvDto;

/// Retrieve the current user's CV summaries for the application form's
/// selector. CV content and lifecycle belong to the resume editor.
pub async fn get_cvs() -> Result<Vec<CvDto>, ApiError> {
    let response = send(Request::get(&format!("{API_BASE}/cvs"))).await?;
    match response.status() {
        404 => Ok(Vec::new()),
        _ => expect_json(response).await,
    }
}
