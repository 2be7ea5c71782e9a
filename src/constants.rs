//! Constants used throughout the application

/// Number of keypoints in the default face mesh layout
pub const NUM_FACE_MESH_KEYPOINTS: usize = 468;

/// Default MediaPipe face-mesh indices for the landmarks we read
pub const LEFT_EYE_TOP_INDEX: usize = 159;
pub const LEFT_EYE_BOTTOM_INDEX: usize = 145;
pub const RIGHT_EYE_TOP_INDEX: usize = 386;
pub const RIGHT_EYE_BOTTOM_INDEX: usize = 374;
pub const UPPER_LIP_INDEX: usize = 13;
pub const LOWER_LIP_INDEX: usize = 14;

/// Centroid displacement (in frame units) above which the face counts as moving
pub const DEFAULT_MOVEMENT_THRESHOLD: f64 = 5.0;

/// Animation offset increment applied on each moving frame
pub const DEFAULT_ANIMATION_STEP: f64 = 2.0;

/// Eye-opening distance above which an eye counts as open
pub const DEFAULT_EYE_OPEN_THRESHOLD: f64 = 8.0;

/// Hue shift added on a left-eye closing edge
pub const LEFT_BLINK_HUE_SHIFT: f64 = 60.0;

/// Hue shift added on a right-eye closing edge
pub const RIGHT_BLINK_HUE_SHIFT: f64 = 120.0;

/// Mouth-opening input domain for the pastel mapping
pub const MOUTH_OPENING_MIN: f64 = 0.0;
pub const MOUTH_OPENING_MAX: f64 = 20.0;

/// Saturation range driven by mouth opening
pub const SATURATION_MIN: f64 = 25.0;
pub const SATURATION_MAX: f64 = 85.0;

/// Brightness range driven by mouth opening
pub const BRIGHTNESS_MIN: f64 = 65.0;
pub const BRIGHTNESS_MAX: f64 = 90.0;

/// Full hue circle, used to wrap accumulated shifts
pub const HUE_WRAP: f64 = 360.0;

/// Default radius for rendered keypoints
pub const DEFAULT_KEYPOINT_RADIUS: f64 = 5.0;

/// Default maximum number of faces requested from the landmark source
pub const DEFAULT_MAX_FACES: usize = 1;
