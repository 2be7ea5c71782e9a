//! Motion tracking from frame-to-frame centroid displacement.
//!
//! The tracker keeps the previous frame's face centroid and classifies the
//! face as moving when the centroid travels further than a threshold between
//! consecutive frames. While moving, an animation offset accumulates at a
//! fixed step per frame; while still, the offset is frozen (never reset), so
//! the hue field drifts only during movement.

use crate::constants::{DEFAULT_ANIMATION_STEP, DEFAULT_MOVEMENT_THRESHOLD};
use crate::landmarks::{Face, Keypoint};

/// Movement classifier and animation-offset accumulator
#[derive(Debug, Clone)]
pub struct MotionTracker {
    movement_threshold: f64,
    animation_step: f64,
    previous_centroid: Option<Keypoint>,
    animation_offset: f64,
}

impl Default for MotionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MOVEMENT_THRESHOLD, DEFAULT_ANIMATION_STEP)
    }
}

impl MotionTracker {
    /// Create a new motion tracker
    #[must_use]
    pub fn new(movement_threshold: f64, animation_step: f64) -> Self {
        Self {
            movement_threshold,
            animation_step,
            previous_centroid: None,
            animation_offset: 0.0,
        }
    }

    /// Update with the current frame's face and classify moving/still.
    ///
    /// The previous centroid is replaced unconditionally. The first observed
    /// frame has no displacement reference and counts as still. A face with
    /// no keypoints leaves all state untouched.
    pub fn update(&mut self, face: &Face) -> bool {
        let Some(centroid) = face.centroid() else {
            return false;
        };

        let moving = match self.previous_centroid {
            Some(prev) => centroid.distance_to(&prev) > self.movement_threshold,
            None => false,
        };

        if moving {
            self.animation_offset += self.animation_step;
        }

        self.previous_centroid = Some(centroid);
        moving
    }

    /// Accumulated animation offset, monotonically non-decreasing
    #[must_use]
    pub fn animation_offset(&self) -> f64 {
        self.animation_offset
    }

    /// Reset the tracker to its initial state
    pub fn reset(&mut self) {
        self.previous_centroid = None;
        self.animation_offset = 0.0;
    }
}
