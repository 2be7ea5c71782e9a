//! Latest-value handoff between the landmark source and the pipeline.
//!
//! The landmark source runs out-of-band and delivers results through a
//! callback-style `publish`; the render loop reads whatever is most recent
//! once per tick. There is no queue: a slow producer means the consumer
//! reuses stale data, and a fast producer simply overwrites unread frames.

use crate::landmarks::Face;
use std::sync::{Arc, Mutex};

/// Shared cell holding the most recently delivered face list
#[derive(Debug, Clone, Default)]
pub struct FrameCell {
    latest: Arc<Mutex<Vec<Face>>>,
}

impl FrameCell {
    /// Create an empty cell (no faces yet)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cell contents with a new detection result
    pub fn publish(&self, faces: Vec<Face>) {
        let mut guard = self.latest.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = faces;
    }

    /// Clone of the most recent detection result; empty until the first
    /// `publish`, stale if the producer has fallen behind
    #[must_use]
    pub fn latest(&self) -> Vec<Face> {
        self.latest
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}
