//! Landmark-driven color overlay library.
//!
//! This library turns a stream of facial landmark detections into per-keypoint
//! colors for a rainbow overlay:
//! 1. Motion tracking accumulates a hue animation offset while the face moves
//! 2. Blink detection shifts the hue gradient on eye-closing edges
//! 3. Mouth opening drives a pastel-to-vibrant saturation/brightness mapping
//! 4. Each keypoint's hue is derived from its position plus both accumulators
//!
//! Landmark production and pixel rendering are external collaborators: the
//! landmark source publishes `Face` records into a [`frame_cell::FrameCell`],
//! and draw calls go out through the [`render::Renderer`] trait.
//!
//! # Examples
//!
//! ## One pipeline pass
//!
//! ```
//! use face_rainbow::{
//!     config::Config,
//!     landmarks::{Face, Keypoint, LandmarkLayout},
//!     pipeline::FrameOrchestrator,
//!     render::NullRenderer,
//! };
//!
//! # fn main() -> face_rainbow::Result<()> {
//! let config = Config {
//!     layout: LandmarkLayout {
//!         left_eye_top: 0,
//!         left_eye_bottom: 1,
//!         right_eye_top: 2,
//!         right_eye_bottom: 3,
//!         upper_lip: 4,
//!         lower_lip: 5,
//!     },
//!     ..Config::default()
//! };
//! let mut orchestrator = FrameOrchestrator::new(&config);
//!
//! let face = Face::new(vec![
//!     Keypoint::new(100.0, 100.0),
//!     Keypoint::new(100.0, 110.0),
//!     Keypoint::new(120.0, 100.0),
//!     Keypoint::new(120.0, 110.0),
//!     Keypoint::new(110.0, 130.0),
//!     Keypoint::new(110.0, 135.0),
//! ]);
//!
//! let signals = orchestrator.process_frame(&[face], &mut NullRenderer)?;
//! println!("mouth saturation: {:.1}", signals[0].mouth.saturation);
//! # Ok(())
//! # }
//! ```
//!
//! ## Driving the app from a landmark source
//!
//! ```
//! use face_rainbow::{app::FaceRainbowApp, config::Config, render::NullRenderer};
//! use face_rainbow::landmarks::{Face, Keypoint, LandmarkLayout};
//!
//! # fn main() -> face_rainbow::Result<()> {
//! let config = Config {
//!     layout: LandmarkLayout {
//!         left_eye_top: 0,
//!         left_eye_bottom: 1,
//!         right_eye_top: 2,
//!         right_eye_bottom: 3,
//!         upper_lip: 4,
//!         lower_lip: 5,
//!     },
//!     ..Config::default()
//! };
//! let mut app = FaceRainbowApp::new(config)?;
//!
//! // The detection callback publishes into the cell; the render loop ticks.
//! let cell = app.frame_cell();
//! cell.publish(vec![Face::new(vec![
//!     Keypoint::new(0.0, 0.0),
//!     Keypoint::new(0.0, 10.0),
//!     Keypoint::new(5.0, 0.0),
//!     Keypoint::new(5.0, 10.0),
//!     Keypoint::new(2.0, 20.0),
//!     Keypoint::new(2.0, 25.0),
//! ])]);
//!
//! let signals = app.tick(&mut NullRenderer)?;
//! assert_eq!(signals.len(), 1);
//! # Ok(())
//! # }
//! ```

/// Landmark data model: keypoints, faces, and the named-landmark layout
pub mod landmarks;

/// Motion tracking from centroid displacement
pub mod motion_tracker;

/// Blink detection and gradient-shift accumulation
pub mod blink_detector;

/// Mouth-opening to saturation/brightness mapping
pub mod mouth_mapper;

/// Color signal composition
pub mod color;

/// Frame orchestration and per-face tracking state
pub mod pipeline;

/// Renderer boundary
pub mod render;

/// Latest-value handoff from the landmark source
pub mod frame_cell;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
