//! Authoritative in-memory pipeline list for the current user.
//!
//! Pipelines are the board's columns. They are few and reordered rarely, so
//! a reorder rewrites every position to a dense `1..=N` integer and ships the
//! whole mapping in one batched request; this keeps positions human-readable
//! and avoids fractional drift at the column level.

use crate::model::pipeline::{CreatePipelineDto, PipelineDto, PipelinePositionDto};

/// Fixed palette pipelines default their color from, by creation index.
pub const PIPELINE_PALETTE: [&str; 8] = [
    "#3b82f6", "#8b5cf6", "#f59e0b", "#10b981", "#ef4444", "#06b6d4", "#ec4899", "#64748b",
];

/// Stage names seeded by the "create default stages" bootstrap action,
/// in board order.
pub const DEFAULT_STAGES: [&str; 5] = ["Wishlist", "Applied", "Interview", "Offer", "Rejected"];

/// Default color for the pipeline at `index` among its siblings.
pub fn default_color(index: usize) -> &'static str {
    PIPELINE_PALETTE[index % PIPELINE_PALETTE.len()]
}

/// Create payloads for the five default stages.
pub fn default_stage_payloads() -> Vec<CreatePipelineDto> {
    DEFAULT_STAGES
        .iter()
        .enumerate()
        .map(|(i, name)| CreatePipelineDto {
            name: (*name).to_string(),
            color: default_color(i).to_string(),
        })
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct PipelineState {
    pipelines: Vec<PipelineDto>,
    /// True once the first fetch has resolved, so empty state can be told
    /// apart from not-yet-loaded state.
    pub fetched: bool,
}

impl PipelineState {
    /// Replace the full list with the server's, kept sorted ascending by
    /// position. The sort is stable so ties keep server insertion order.
    pub fn set_all(&mut self, mut pipelines: Vec<PipelineDto>) {
        pipelines.sort_by_key(|p| p.position);
        self.pipelines = pipelines;
        self.fetched = true;
    }

    /// Pipelines in board order.
    pub fn list(&self) -> &[PipelineDto] {
        &self.pipelines
    }

    pub fn get(&self, id: i64) -> Option<&PipelineDto> {
        self.pipelines.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }

    /// Insert a server-created pipeline, preserving position order.
    pub fn insert(&mut self, pipeline: PipelineDto) {
        let at = self
            .pipelines
            .iter()
            .position(|p| p.position > pipeline.position)
            .unwrap_or(self.pipelines.len());
        self.pipelines.insert(at, pipeline);
    }

    /// Apply a rename/recolor returned by the server.
    pub fn update(&mut self, pipeline: PipelineDto) {
        if let Some(existing) = self.pipelines.iter_mut().find(|p| p.id == pipeline.id) {
            *existing = pipeline;
        }
    }

    /// Remove a pipeline locally. The caller cascades application removal
    /// through the application store.
    pub fn remove(&mut self, id: i64) -> Option<PipelineDto> {
        let at = self.pipelines.iter().position(|p| p.id == id)?;
        Some(self.pipelines.remove(at))
    }

    /// Move `moved_id` immediately before `target_id`, or to the end when
    /// `target_id` is `None`, then renumber every pipeline to dense `1..=N`
    /// positions.
    ///
    /// Returns the full id-to-position mapping for the batched reorder
    /// request, or `None` when the drop changes nothing (no network call is
    /// warranted). Unknown ids are treated as a no-op.
    pub fn reorder(
        &mut self,
        moved_id: i64,
        target_id: Option<i64>,
    ) -> Option<Vec<PipelinePositionDto>> {
        if target_id == Some(moved_id) {
            return None;
        }
        let from = self.pipelines.iter().position(|p| p.id == moved_id)?;
        let moved = self.pipelines.remove(from);

        let to = match target_id {
            Some(target_id) => match self.pipelines.iter().position(|p| p.id == target_id) {
                Some(at) => at,
                None => {
                    // Unknown target, put the column back where it was.
                    self.pipelines.insert(from, moved);
                    return None;
                }
            },
            None => self.pipelines.len(),
        };
        self.pipelines.insert(to, moved);

        let already_dense = self
            .pipelines
            .iter()
            .enumerate()
            .all(|(i, p)| p.position == i as i32 + 1);
        if to == from && already_dense {
            return None;
        }

        for (i, pipeline) in self.pipelines.iter_mut().enumerate() {
            pipeline.position = i as i32 + 1;
        }
        Some(
            self.pipelines
                .iter()
                .map(|p| PipelinePositionDto {
                    id: p.id,
                    position: p.position,
                })
                .collect(),
        )
    }
}
