//! Landmark data model: keypoints, faces, and the named-landmark layout.
//!
//! A `Face` is an ordered, index-addressable sequence of 2D keypoints
//! replaced wholesale each frame by the external landmark source. Specific
//! indices carry semantic meaning (eye lids, lip centers); the
//! `LandmarkLayout` table maps semantic names to indices so the signal
//! detectors never hard-code a particular mesh version.

use crate::constants::{
    LEFT_EYE_BOTTOM_INDEX, LEFT_EYE_TOP_INDEX, LOWER_LIP_INDEX, RIGHT_EYE_BOTTOM_INDEX,
    RIGHT_EYE_TOP_INDEX, UPPER_LIP_INDEX,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single 2D keypoint in frame coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Keypoint {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

impl Keypoint {
    /// Create a new keypoint
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another keypoint
    #[must_use]
    pub fn distance_to(&self, other: &Keypoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// One detected face: an ordered sequence of keypoints for a single frame
#[derive(Debug, Clone, Default)]
pub struct Face {
    keypoints: Vec<Keypoint>,
}

impl Face {
    /// Wrap a detection result's keypoint sequence
    #[must_use]
    pub fn new(keypoints: Vec<Keypoint>) -> Self {
        Self { keypoints }
    }

    /// All keypoints in detection order
    #[must_use]
    pub fn keypoints(&self) -> &[Keypoint] {
        &self.keypoints
    }

    /// Number of keypoints
    #[must_use]
    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    /// Whether the face carries no keypoints
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    /// Look up a keypoint by semantic landmark name, failing fast when the
    /// layout points outside this face's keypoint sequence.
    pub fn landmark(&self, name: &'static str, index: usize) -> Result<Keypoint> {
        self.keypoints
            .get(index)
            .copied()
            .ok_or(Error::LandmarkIndex {
                name,
                index,
                len: self.keypoints.len(),
            })
    }

    /// Arithmetic mean position of all keypoints, used as a coarse motion proxy.
    ///
    /// Returns `None` for a face with no keypoints.
    #[must_use]
    pub fn centroid(&self) -> Option<Keypoint> {
        if self.keypoints.is_empty() {
            return None;
        }

        let n = self.keypoints.len() as f64;
        let sum_x: f64 = self.keypoints.iter().map(|p| p.x).sum();
        let sum_y: f64 = self.keypoints.iter().map(|p| p.y).sum();

        Some(Keypoint::new(sum_x / n, sum_y / n))
    }
}

/// Semantic name → keypoint index table for the landmarks the pipeline reads.
///
/// Supplied as configuration so a different mesh version only needs a
/// different table, not different detector code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkLayout {
    /// Top of the left eyelid
    pub left_eye_top: usize,
    /// Bottom of the left eyelid
    pub left_eye_bottom: usize,
    /// Top of the right eyelid
    pub right_eye_top: usize,
    /// Bottom of the right eyelid
    pub right_eye_bottom: usize,
    /// Upper lip center
    pub upper_lip: usize,
    /// Lower lip center
    pub lower_lip: usize,
}

impl Default for LandmarkLayout {
    fn default() -> Self {
        Self {
            left_eye_top: LEFT_EYE_TOP_INDEX,
            left_eye_bottom: LEFT_EYE_BOTTOM_INDEX,
            right_eye_top: RIGHT_EYE_TOP_INDEX,
            right_eye_bottom: RIGHT_EYE_BOTTOM_INDEX,
            upper_lip: UPPER_LIP_INDEX,
            lower_lip: LOWER_LIP_INDEX,
        }
    }
}

impl LandmarkLayout {
    /// Largest index the layout will read
    #[must_use]
    pub fn max_index(&self) -> usize {
        [
            self.left_eye_top,
            self.left_eye_bottom,
            self.right_eye_top,
            self.right_eye_bottom,
            self.upper_lip,
            self.lower_lip,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}
