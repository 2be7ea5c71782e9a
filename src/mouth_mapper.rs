//! Mouth-opening to saturation/brightness mapping.
//!
//! A pure function of the current frame: the vertical distance between the
//! upper and lower lip landmarks is linearly mapped from [0, 20] onto the
//! saturation range [25, 85] and the brightness range [65, 90], clamped at
//! the range bounds for out-of-domain inputs. A closed mouth gives pastel
//! colors, an open mouth gives vibrant ones.

use crate::constants::{
    BRIGHTNESS_MAX, BRIGHTNESS_MIN, MOUTH_OPENING_MAX, MOUTH_OPENING_MIN, SATURATION_MAX,
    SATURATION_MIN,
};
use crate::landmarks::{Face, LandmarkLayout};
use crate::Result;

/// Saturation/brightness pair shared by every keypoint of a face in a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouthValues {
    /// Mouth-opening distance the values were derived from
    pub opening: f64,
    /// Saturation in [25, 85]
    pub saturation: f64,
    /// Brightness in [65, 90]
    pub brightness: f64,
}

/// Map a value from one range to another, then clamp to the output range.
fn map_clamped(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let t = (value - in_min) / (in_max - in_min);
    (out_min + t * (out_max - out_min)).clamp(out_min, out_max)
}

/// Compute the saturation/brightness pair for the current frame's face.
///
/// # Errors
///
/// Fails when the layout's lip indices fall outside the face's keypoint
/// sequence.
pub fn mouth_values(face: &Face, layout: &LandmarkLayout) -> Result<MouthValues> {
    let upper = face.landmark("upper_lip", layout.upper_lip)?;
    let lower = face.landmark("lower_lip", layout.lower_lip)?;

    let opening = (lower.y - upper.y).abs();

    Ok(MouthValues {
        opening,
        saturation: map_clamped(
            opening,
            MOUTH_OPENING_MIN,
            MOUTH_OPENING_MAX,
            SATURATION_MIN,
            SATURATION_MAX,
        ),
        brightness: map_clamped(
            opening,
            MOUTH_OPENING_MIN,
            MOUTH_OPENING_MAX,
            BRIGHTNESS_MIN,
            BRIGHTNESS_MAX,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Keypoint;

    fn face_with_mouth(opening: f64) -> (Face, LandmarkLayout) {
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
            Keypoint::new(0.0, 10.0),
            Keypoint::new(0.0, 0.0),
            Keypoint::new(0.0, 10.0),
            Keypoint::new(0.0, 100.0),
            Keypoint::new(0.0, 100.0 + opening),
        ]);
        (face, layout)
    }

    #[test]
    fn test_domain_endpoints() {
        let (face, layout) = face_with_mouth(0.0);
        let v = mouth_values(&face, &layout).unwrap();
        assert_eq!(v.saturation, 25.0);
        assert_eq!(v.brightness, 65.0);

        let (face, layout) = face_with_mouth(20.0);
        let v = mouth_values(&face, &layout).unwrap();
        assert_eq!(v.saturation, 85.0);
        assert_eq!(v.brightness, 90.0);
    }

    #[test]
    fn test_midpoint() {
        let (face, layout) = face_with_mouth(10.0);
        let v = mouth_values(&face, &layout).unwrap();
        assert_eq!(v.saturation, 55.0);
        assert_eq!(v.brightness, 77.5);
    }

    #[test]
    fn test_clamped_outside_domain() {
        let (face, layout) = face_with_mouth(50.0);
        let v = mouth_values(&face, &layout).unwrap();
        assert_eq!(v.saturation, 85.0);
        assert_eq!(v.brightness, 90.0);
    }

    #[test]
    fn test_bounds_and_monotonicity() {
        let mut last_sat = f64::NEG_INFINITY;
        let mut last_bri = f64::NEG_INFINITY;

        for i in 0..=60 {
            let opening = f64::from(i);
            let (face, layout) = face_with_mouth(opening);
            let v = mouth_values(&face, &layout).unwrap();

            assert!((25.0..=85.0).contains(&v.saturation));
            assert!((65.0..=90.0).contains(&v.brightness));
            assert!(v.saturation >= last_sat);
            assert!(v.brightness >= last_bri);

            last_sat = v.saturation;
            last_bri = v.brightness;
        }
    }

    #[test]
    fn test_opening_uses_absolute_distance() {
        // Lower lip above upper lip still yields a positive opening
        let (face, layout) = face_with_mouth(-10.0);
        let v = mouth_values(&face, &layout).unwrap();
        assert_eq!(v.opening, 10.0);
        assert_eq!(v.saturation, 55.0);
    }
}
