//! Ephemeral drag-gesture state: what is being dragged and what is hovered.
//!
//! The session is a plain `idle -> dragging -> idle` machine. Hover
//! indicators exist purely for visual feedback and never feed the ordering
//! logic; committed order only changes inside a drop handler. Nothing here
//! survives a page reload.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    Pipeline,
    Application,
}

/// Typed transfer payload describing the dragged entity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    pub kind: DragKind,
    pub id: i64,
    /// Pipeline the drag started from; `None` for pipeline drags.
    pub origin_pipeline_id: Option<i64>,
}

impl DragPayload {
    pub fn pipeline(id: i64) -> Self {
        Self {
            kind: DragKind::Pipeline,
            id,
            origin_pipeline_id: None,
        }
    }

    pub fn application(id: i64, origin_pipeline_id: i64) -> Self {
        Self {
            kind: DragKind::Application,
            id,
            origin_pipeline_id: Some(origin_pipeline_id),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a transfer payload. Malformed payloads yield `None` and are
    /// silently ignored by drop handlers; they can only come from programmer
    /// error or unsupported drag sources.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    source: Option<DragPayload>,
    /// Hovered column, for drop-target highlighting only.
    pub drag_over_pipeline: Option<i64>,
    /// Hovered card, for insertion-marker rendering only.
    pub drag_over_application: Option<i64>,
}

impl DragSession {
    pub fn begin(&mut self, payload: DragPayload) {
        self.source = Some(payload);
    }

    pub fn source(&self) -> Option<DragPayload> {
        self.source
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    pub fn hover_pipeline(&mut self, pipeline_id: i64) {
        self.drag_over_pipeline = Some(pipeline_id);
    }

    pub fn hover_application(&mut self, application_id: i64) {
        self.drag_over_application = Some(application_id);
    }

    /// Whether this column is already the hovered drop target. Drag-over
    /// handlers check this before writing so the stream of drag-over events
    /// does not trigger a re-render per event.
    pub fn is_hovering_pipeline(&self, pipeline_id: i64) -> bool {
        self.drag_over_pipeline == Some(pipeline_id)
    }

    /// Whether this card is already the hovered drop target.
    pub fn is_hovering_application(&self, application_id: i64) -> bool {
        self.drag_over_application == Some(application_id)
    }

    pub fn clear_hover(&mut self) {
        self.drag_over_pipeline = None;
        self.drag_over_application = None;
    }

    /// Consume the session on drop or drag-end. Hover indicators are cleared
    /// unconditionally, whether or not a payload was present.
    pub fn take(&mut self) -> Option<DragPayload> {
        self.clear_hover();
        self.source.take()
    }
}
