//! Blink detection from eyelid landmark distances.
//!
//! Each eye is open iff the vertical distance between its top and bottom lid
//! landmarks exceeds a threshold; this is a plain step function, tolerant of
//! jitter only through the threshold itself. A blink event fires on the
//! closing edge (open last frame, closed now); the opening edge is not an
//! event. Left-eye blinks shift the hue gradient by 60 degrees, right-eye
//! blinks by 120, and the accumulated shift is wrapped into [0, 360).

use crate::constants::{
    DEFAULT_EYE_OPEN_THRESHOLD, HUE_WRAP, LEFT_BLINK_HUE_SHIFT, RIGHT_BLINK_HUE_SHIFT,
};
use crate::landmarks::{Face, LandmarkLayout};
use crate::Result;
use log::debug;

/// Which eyes produced a closing edge this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlinkEvents {
    /// Left eye transitioned open -> closed
    pub left: bool,
    /// Right eye transitioned open -> closed
    pub right: bool,
}

impl BlinkEvents {
    /// Whether either eye blinked
    #[must_use]
    pub fn any(&self) -> bool {
        self.left || self.right
    }
}

/// Per-eye opening distances, exposed for the debug overlay
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EyeDistances {
    /// Left eye top-to-bottom lid distance
    pub left: f64,
    /// Right eye top-to-bottom lid distance
    pub right: f64,
}

/// Closing-edge blink detector and gradient-shift accumulator
#[derive(Debug, Clone)]
pub struct BlinkDetector {
    eye_open_threshold: f64,
    previous_left_open: bool,
    previous_right_open: bool,
    gradient_shift: f64,
    last_distances: EyeDistances,
}

impl Default for BlinkDetector {
    fn default() -> Self {
        Self::new(DEFAULT_EYE_OPEN_THRESHOLD)
    }
}

impl BlinkDetector {
    /// Create a new blink detector. Both eyes start in the open state.
    #[must_use]
    pub fn new(eye_open_threshold: f64) -> Self {
        Self {
            eye_open_threshold,
            previous_left_open: true,
            previous_right_open: true,
            gradient_shift: 0.0,
            last_distances: EyeDistances::default(),
        }
    }

    /// Update with the current frame's face.
    ///
    /// Returns the closing edges detected this frame. Previous-open flags are
    /// updated unconditionally, every call, even absent a blink.
    ///
    /// # Errors
    ///
    /// Fails when the layout's eyelid indices fall outside the face's
    /// keypoint sequence.
    pub fn update(&mut self, face: &Face, layout: &LandmarkLayout) -> Result<BlinkEvents> {
        let left_top = face.landmark("left_eye_top", layout.left_eye_top)?;
        let left_bottom = face.landmark("left_eye_bottom", layout.left_eye_bottom)?;
        let right_top = face.landmark("right_eye_top", layout.right_eye_top)?;
        let right_bottom = face.landmark("right_eye_bottom", layout.right_eye_bottom)?;

        let left_distance = (left_top.y - left_bottom.y).abs();
        let right_distance = (right_top.y - right_bottom.y).abs();
        self.last_distances = EyeDistances {
            left: left_distance,
            right: right_distance,
        };

        let left_open = left_distance > self.eye_open_threshold;
        let right_open = right_distance > self.eye_open_threshold;

        let events = BlinkEvents {
            left: self.previous_left_open && !left_open,
            right: self.previous_right_open && !right_open,
        };

        if events.left {
            self.gradient_shift += LEFT_BLINK_HUE_SHIFT;
            debug!("Left eye blink, gradient shift now {}", self.gradient_shift);
        }
        if events.right {
            self.gradient_shift += RIGHT_BLINK_HUE_SHIFT;
            debug!("Right eye blink, gradient shift now {}", self.gradient_shift);
        }

        self.gradient_shift = self.gradient_shift.rem_euclid(HUE_WRAP);

        self.previous_left_open = left_open;
        self.previous_right_open = right_open;

        Ok(events)
    }

    /// Accumulated gradient shift, always in [0, 360)
    #[must_use]
    pub fn gradient_shift(&self) -> f64 {
        self.gradient_shift
    }

    /// Eye distances from the most recent update, for the debug overlay
    #[must_use]
    pub fn last_distances(&self) -> EyeDistances {
        self.last_distances
    }

    /// Reset to the initial open-eyes, zero-shift state
    pub fn reset(&mut self) {
        self.previous_left_open = true;
        self.previous_right_open = true;
        self.gradient_shift = 0.0;
        self.last_distances = EyeDistances::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Keypoint;

    /// Build a minimal face where the layout's eye/lip indices exist and the
    /// eyes have the given opening distances.
    fn face_with_eyes(left_distance: f64, right_distance: f64) -> (Face, LandmarkLayout) {
        let layout = LandmarkLayout {
            left_eye_top: 0,
            left_eye_bottom: 1,
            right_eye_top: 2,
            right_eye_bottom: 3,
            upper_lip: 4,
            lower_lip: 5,
        };
        let face = Face::new(vec![
            Keypoint::new(0.0, 0.0),
            Keypoint::new(0.0, left_distance),
            Keypoint::new(0.0, 0.0),
            Keypoint::new(0.0, right_distance),
            Keypoint::new(0.0, 0.0),
            Keypoint::new(0.0, 0.0),
        ]);
        (face, layout)
    }

    #[test]
    fn test_left_blink_fires_once_on_closing_edge() {
        let mut detector = BlinkDetector::default();

        // Distance sequence [10, 10, 3, 3, 10] against threshold 8:
        // exactly one event, on the 10 -> 3 transition.
        let mut events_fired = 0;
        for d in [10.0, 10.0, 3.0, 3.0, 10.0] {
            let (face, layout) = face_with_eyes(d, 10.0);
            let events = detector.update(&face, &layout).unwrap();
            if events.left {
                events_fired += 1;
            }
        }
        assert_eq!(events_fired, 1);
        assert_eq!(detector.gradient_shift(), 60.0);
    }

    #[test]
    fn test_right_blink_adds_120() {
        let mut detector = BlinkDetector::default();
        let (open, layout) = face_with_eyes(10.0, 10.0);
        detector.update(&open, &layout).unwrap();

        let (closed, layout) = face_with_eyes(10.0, 2.0);
        let events = detector.update(&closed, &layout).unwrap();
        assert!(events.right && !events.left);
        assert_eq!(detector.gradient_shift(), 120.0);
    }

    #[test]
    fn test_simultaneous_blinks_compound_to_180() {
        let mut detector = BlinkDetector::default();
        let (open, layout) = face_with_eyes(10.0, 10.0);
        detector.update(&open, &layout).unwrap();

        let (closed, layout) = face_with_eyes(2.0, 2.0);
        let events = detector.update(&closed, &layout).unwrap();
        assert!(events.left && events.right);
        assert_eq!(detector.gradient_shift(), 180.0);
    }

    #[test]
    fn test_no_event_while_already_closed_or_on_opening() {
        let mut detector = BlinkDetector::default();
        let layout;
        {
            let (open, l) = face_with_eyes(10.0, 10.0);
            layout = l;
            detector.update(&open, &layout).unwrap();
        }

        let (closed, _) = face_with_eyes(2.0, 10.0);
        detector.update(&closed, &layout).unwrap();
        assert_eq!(detector.gradient_shift(), 60.0);

        // Still closed: no further event
        detector.update(&closed, &layout).unwrap();
        assert_eq!(detector.gradient_shift(), 60.0);

        // Opening edge: not an event
        let (open, _) = face_with_eyes(10.0, 10.0);
        let events = detector.update(&open, &layout).unwrap();
        assert!(!events.any());
        assert_eq!(detector.gradient_shift(), 60.0);
    }

    #[test]
    fn test_gradient_shift_wraps_into_range() {
        let mut detector = BlinkDetector::default();
        let layout = face_with_eyes(10.0, 10.0).1;

        // Alternate both-eyes closed/open; each closing edge adds 180
        for _ in 0..5 {
            let (closed, _) = face_with_eyes(2.0, 2.0);
            detector.update(&closed, &layout).unwrap();
            let (open, _) = face_with_eyes(10.0, 10.0);
            detector.update(&open, &layout).unwrap();

            let shift = detector.gradient_shift();
            assert!((0.0..360.0).contains(&shift), "shift out of range: {shift}");
        }
        // 5 * 180 = 900 = 180 mod 360
        assert_eq!(detector.gradient_shift(), 180.0);
    }

    #[test]
    fn test_distance_at_threshold_counts_as_closed() {
        let mut detector = BlinkDetector::default();
        // Exactly 8 is not strictly greater than the threshold
        let (face, layout) = face_with_eyes(8.0, 10.0);
        let events = detector.update(&face, &layout).unwrap();
        assert!(events.left);
    }

    #[test]
    fn test_missing_landmark_index_fails() {
        let mut detector = BlinkDetector::default();
        let layout = LandmarkLayout::default();
        let face = Face::new(vec![Keypoint::new(0.0, 0.0); 10]);
        assert!(detector.update(&face, &layout).is_err());
    }
}
