//! Configuration management for the face-rainbow application

use crate::constants::{
    DEFAULT_ANIMATION_STEP, DEFAULT_EYE_OPEN_THRESHOLD, DEFAULT_KEYPOINT_RADIUS,
    DEFAULT_MAX_FACES, DEFAULT_MOVEMENT_THRESHOLD,
};
use crate::landmarks::LandmarkLayout;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Landmark source configuration
    pub detector: DetectorConfig,

    /// Named-landmark index table
    pub layout: LandmarkLayout,

    /// Motion tracking configuration
    pub motion: MotionConfig,

    /// Blink detection configuration
    pub blink: BlinkConfig,

    /// Overlay rendering configuration
    pub overlay: OverlayConfig,
}

/// Knobs passed through to the external landmark source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Maximum number of faces to track
    pub max_faces: usize,

    /// Ask the source for refined (iris etc.) landmarks
    pub refine_landmarks: bool,

    /// Mirror the input horizontally before detection
    pub mirror_input: bool,
}

/// Motion tracking parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Centroid displacement above which the face counts as moving
    pub movement_threshold: f64,

    /// Animation offset increment per moving frame
    pub animation_step: f64,
}

/// Blink detection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlinkConfig {
    /// Eyelid distance above which an eye counts as open
    pub eye_open_threshold: f64,
}

/// Overlay rendering parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Radius of each rendered keypoint
    pub keypoint_radius: f64,

    /// Draw the debug text overlay (face count, eye distances, mouth values)
    pub debug_text: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_faces: DEFAULT_MAX_FACES,
            refine_landmarks: false,
            mirror_input: false,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            movement_threshold: DEFAULT_MOVEMENT_THRESHOLD,
            animation_step: DEFAULT_ANIMATION_STEP,
        }
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            eye_open_threshold: DEFAULT_EYE_OPEN_THRESHOLD,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            keypoint_radius: DEFAULT_KEYPOINT_RADIUS,
            debug_text: true,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.detector.max_faces == 0 {
            return Err(Error::ConfigError(
                "max_faces must be greater than 0".to_string(),
            ));
        }

        if self.motion.movement_threshold < 0.0 {
            return Err(Error::ConfigError(
                "Movement threshold must be non-negative".to_string(),
            ));
        }
        if self.motion.animation_step < 0.0 {
            return Err(Error::ConfigError(
                "Animation step must be non-negative".to_string(),
            ));
        }

        if self.blink.eye_open_threshold <= 0.0 {
            return Err(Error::ConfigError(
                "Eye open threshold must be greater than 0".to_string(),
            ));
        }

        if self.overlay.keypoint_radius <= 0.0 {
            return Err(Error::ConfigError(
                "Keypoint radius must be greater than 0".to_string(),
            ));
        }

        // Eyelid pairs must be distinct points or every eye reads as closed
        if self.layout.left_eye_top == self.layout.left_eye_bottom
            || self.layout.right_eye_top == self.layout.right_eye_bottom
        {
            return Err(Error::ConfigError(
                "Eye top/bottom landmark indices must differ".to_string(),
            ));
        }
        if self.layout.upper_lip == self.layout.lower_lip {
            return Err(Error::ConfigError(
                "Upper/lower lip landmark indices must differ".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Face Rainbow Configuration

# Landmark source knobs (opaque to the pipeline)
detector:
  max_faces: 1
  refine_landmarks: false
  mirror_input: false

# Named-landmark index table (MediaPipe face mesh)
layout:
  left_eye_top: 159
  left_eye_bottom: 145
  right_eye_top: 386
  right_eye_bottom: 374
  upper_lip: 13
  lower_lip: 14

# Motion tracking
motion:
  movement_threshold: 5.0
  animation_step: 2.0

# Blink detection
blink:
  eye_open_threshold: 8.0

# Overlay rendering
overlay:
  keypoint_radius: 5.0
  debug_text: true
"#;
