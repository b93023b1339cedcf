mod default_stages;
mod reorder;

use crate::model::pipeline::PipelineDto;

/// Build a pipeline record for store tests.
pub fn pipeline(id: i64, position: i32) -> PipelineDto {
    PipelineDto {
        id,
        name: format!("Stage {id}"),
        color: "#3b82f6".to_string(),
        position,
        is_default: false,
    }
}
