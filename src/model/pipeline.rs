use serde::{Deserialize, Serialize};

/// A pipeline stage ("column") of the application tracking board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineDto {
    pub id: i64,
    pub name: String,
    /// Hex color used for visual grouping, e.g. "#3b82f6".
    pub color: String,
    /// Dense integer sort key; strictly increasing defines column order.
    pub position: i32,
    /// Default pipelines cannot be deleted.
    pub is_default: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatePipelineDto {
    pub name: String,
    pub color: String,
}

/// Partial update; omitted fields are left unchanged by the server.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdatePipelineDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One entry of the batched pipeline reorder request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelinePositionDto {
    pub id: i64,
    pub position: i32,
}
