use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked job application, always belonging to exactly one pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobApplicationDto {
    pub id: i64,
    pub company_name: String,
    pub job_title: String,
    pub application_date: NaiveDate,
    pub pipeline_id: i64,
    /// Optional link to a CV managed by the resume editor.
    pub cv_id: Option<i64>,
    /// Sparse fractional sort key ordering applications within a pipeline.
    pub position: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateJobApplicationDto {
    pub company_name: String,
    pub job_title: String,
    pub application_date: NaiveDate,
    pub pipeline_id: i64,
    pub position: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_id: Option<i64>,
}

/// Partial update; omitted fields are left unchanged by the server.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateJobApplicationDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<i64>,
    /// `Some(None)` serializes as an explicit null to detach the CV;
    /// `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
}
