//! Authoritative job-application records plus the derived per-pipeline
//! ordering (the order index).
//!
//! The order index maps pipeline id to application ids sorted ascending by
//! position. It is a pure projection of the authoritative `pipeline_id` and
//! `position` fields, rebuilt once per store mutation and cached until the
//! next one, so `get_ordered` never scans the full application set during a
//! render.

use std::collections::HashMap;

use crate::client::store::position::{gap_exhausted, midpoint, renormalized, POSITION_STEP};
use crate::model::application::JobApplicationDto;

/// A position assignment to persist after an optimistic move. Usually one
/// per drop; several when the move triggered a renormalization.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicationMove {
    pub id: i64,
    pub pipeline_id: i64,
    pub position: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ApplicationState {
    /// Records keyed by id, so resolving an indexed id is O(1) and a column
    /// render stays O(k) overall.
    applications: HashMap<i64, JobApplicationDto>,
    /// Cached order index: pipeline id -> application ids ascending by
    /// position. Rebuilt by every mutation, never mutated independently.
    order: HashMap<i64, Vec<i64>>,
    pub fetched: bool,
}

impl ApplicationState {
    /// Replace the full set with the server's and rebuild the index.
    pub fn set_all(&mut self, applications: Vec<JobApplicationDto>) {
        self.applications = applications.into_iter().map(|a| (a.id, a)).collect();
        self.fetched = true;
        self.rebuild_index();
    }

    pub fn get(&self, id: i64) -> Option<&JobApplicationDto> {
        self.applications.get(&id)
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    /// Application ids for one pipeline in position order, from the cached
    /// index. O(k) for k applications in that pipeline.
    pub fn ordered_ids(&self, pipeline_id: i64) -> &[i64] {
        self.order.get(&pipeline_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Applications for one pipeline in position order.
    pub fn get_ordered(&self, pipeline_id: i64) -> Vec<&JobApplicationDto> {
        self.ordered_ids(pipeline_id)
            .iter()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    /// Position for a brand-new application appended to a pipeline.
    pub fn append_position(&self, pipeline_id: i64) -> f64 {
        self.get_ordered(pipeline_id)
            .last()
            .map(|a| a.position + POSITION_STEP)
            .unwrap_or(POSITION_STEP)
    }

    /// Insert a server-created application.
    pub fn insert(&mut self, application: JobApplicationDto) {
        self.applications.insert(application.id, application);
        self.rebuild_index();
    }

    /// Apply a server-confirmed edit.
    pub fn update(&mut self, application: JobApplicationDto) {
        if let Some(existing) = self.applications.get_mut(&application.id) {
            *existing = application;
            self.rebuild_index();
        }
    }

    pub fn remove(&mut self, id: i64) -> Option<JobApplicationDto> {
        let removed = self.applications.remove(&id)?;
        self.rebuild_index();
        Some(removed)
    }

    /// Cascade for a deleted pipeline: drop every application in it so no
    /// orphaned ids remain in the index.
    pub fn remove_pipeline(&mut self, pipeline_id: i64) {
        self.applications.retain(|_, a| a.pipeline_id != pipeline_id);
        self.rebuild_index();
    }

    /// Move an application into `target_pipeline_id`, placed immediately
    /// before `before_id` (appended when `None`). Applies the new
    /// `pipeline_id`/`position` optimistically and returns the assignment(s)
    /// to persist.
    ///
    /// Returns `None` for a no-op drop: before itself, or into the slot it
    /// already occupies. When the midpoint gap between the target neighbors
    /// has collapsed, the whole target pipeline is renormalized to evenly
    /// spaced positions and every reassigned application is returned.
    pub fn move_in_order(
        &mut self,
        application_id: i64,
        target_pipeline_id: i64,
        before_id: Option<i64>,
    ) -> Option<Vec<ApplicationMove>> {
        if before_id == Some(application_id) {
            return None;
        }
        let source_pipeline_id = self.get(application_id)?.pipeline_id;

        // Target order with the moved application taken out, so indices
        // describe the list it is inserted into.
        let mut target_ids: Vec<i64> = self
            .ordered_ids(target_pipeline_id)
            .iter()
            .copied()
            .filter(|id| *id != application_id)
            .collect();
        let insert_at = match before_id {
            Some(before_id) => target_ids.iter().position(|id| *id == before_id)?,
            None => target_ids.len(),
        };

        if source_pipeline_id == target_pipeline_id {
            let old_index = self
                .ordered_ids(target_pipeline_id)
                .iter()
                .position(|id| *id == application_id)?;
            // Dropping back into the same slot changes nothing.
            if insert_at == old_index {
                return None;
            }
        }

        let prev = insert_at
            .checked_sub(1)
            .and_then(|i| target_ids.get(i))
            .and_then(|id| self.get(*id))
            .map(|a| a.position);
        let next = target_ids
            .get(insert_at)
            .and_then(|id| self.get(*id))
            .map(|a| a.position);

        let moves = if gap_exhausted(prev, next) {
            // Precision is gone between these neighbors; rewrite the whole
            // pipeline to evenly spaced positions in the new order.
            target_ids.insert(insert_at, application_id);
            let mut moves = Vec::with_capacity(target_ids.len());
            for (i, id) in target_ids.iter().enumerate() {
                let position = renormalized(i);
                if let Some(app) = self.applications.get_mut(id) {
                    if app.position != position || app.pipeline_id != target_pipeline_id {
                        app.pipeline_id = target_pipeline_id;
                        app.position = position;
                        moves.push(ApplicationMove {
                            id: *id,
                            pipeline_id: target_pipeline_id,
                            position,
                        });
                    }
                }
            }
            moves
        } else {
            let position = midpoint(prev, next);
            let app = self.applications.get_mut(&application_id)?;
            app.pipeline_id = target_pipeline_id;
            app.position = position;
            vec![ApplicationMove {
                id: application_id,
                pipeline_id: target_pipeline_id,
                position,
            }]
        };

        self.rebuild_index();
        Some(moves)
    }

    fn rebuild_index(&mut self) {
        let mut order: HashMap<i64, Vec<i64>> = HashMap::new();
        let mut sorted: Vec<&JobApplicationDto> = self.applications.values().collect();
        // Ties broken by id so the projection is deterministic.
        sorted.sort_by(|a, b| {
            a.position
                .partial_cmp(&b.position)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.id.cmp(&b.id))
        });
        for application in sorted {
            order
                .entry(application.pipeline_id)
                .or_default()
                .push(application.id);
        }
        self.order = order;
    }
}
