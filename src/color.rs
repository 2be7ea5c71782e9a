//! Color signal composition.
//!
//! The hue of each keypoint is derived from its position plus the two
//! accumulators (animation offset from motion, gradient shift from blinks),
//! wrapped to the hue circle. Saturation and brightness come from the mouth
//! mapper and are shared by every keypoint of the face in the frame, so the
//! hue gradient rides on accumulators that only change on movement or blink
//! events.

use crate::constants::HUE_WRAP;
use crate::landmarks::Keypoint;
use crate::mouth_mapper::MouthValues;

/// HSB-style color triple handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsbColor {
    /// Hue in [0, 360)
    pub hue: f64,
    /// Saturation in [25, 85]
    pub saturation: f64,
    /// Brightness in [65, 90]
    pub brightness: f64,
}

/// Position-dependent hue: (x + y + animation_offset + gradient_shift) mod 360
#[must_use]
pub fn keypoint_hue(point: &Keypoint, animation_offset: f64, gradient_shift: f64) -> f64 {
    (point.x + point.y + animation_offset + gradient_shift).rem_euclid(HUE_WRAP)
}

/// Compose the final color for one keypoint
#[must_use]
pub fn compose(
    point: &Keypoint,
    animation_offset: f64,
    gradient_shift: f64,
    mouth: &MouthValues,
) -> HsbColor {
    HsbColor {
        hue: keypoint_hue(point, animation_offset, gradient_shift),
        saturation: mouth.saturation,
        brightness: mouth.brightness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_formula() {
        let p = Keypoint::new(100.0, 50.0);
        assert_eq!(keypoint_hue(&p, 10.0, 20.0), 180.0);
    }

    #[test]
    fn test_hue_wraps() {
        let p = Keypoint::new(300.0, 300.0);
        // 300 + 300 + 100 + 60 = 760 = 40 mod 360
        assert_eq!(keypoint_hue(&p, 100.0, 60.0), 40.0);
    }

    #[test]
    fn test_hue_in_range_for_grid_of_inputs() {
        for x in [0.0, 13.5, 359.0, 640.0, 1e6] {
            for offset in [0.0, 2.0, 720.0] {
                for shift in [0.0, 60.0, 180.0, 359.9] {
                    let hue = keypoint_hue(&Keypoint::new(x, x * 0.5), offset, shift);
                    assert!((0.0..360.0).contains(&hue), "hue out of range: {hue}");
                }
            }
        }
    }

    #[test]
    fn test_compose_carries_mouth_values() {
        let mouth = MouthValues {
            opening: 10.0,
            saturation: 55.0,
            brightness: 77.5,
        };
        let color = compose(&Keypoint::new(1.0, 2.0), 0.0, 0.0, &mouth);
        assert_eq!(color.hue, 3.0);
        assert_eq!(color.saturation, 55.0);
        assert_eq!(color.brightness, 77.5);
    }
}
