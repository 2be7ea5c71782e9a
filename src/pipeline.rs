//! Frame orchestration: one pipeline pass per incoming frame.
//!
//! Each tracked face owns a `TrackingState` bundling the motion tracker and
//! blink detector. The orchestrator keys state by face index in the
//! detection result, which stands in for a stable track id while the source
//! reports faces in a consistent order; state is threaded through the
//! per-frame pass explicitly rather than living in ambient globals.
//!
//! Per frame, per face: motion tracker, blink detector, mouth mapper, then
//! color composition per keypoint, with results handed to the renderer. An
//! empty face list is a no-op: no state mutation, no draw calls.

use crate::blink_detector::{BlinkDetector, BlinkEvents, EyeDistances};
use crate::color::{self, HsbColor};
use crate::config::Config;
use crate::landmarks::{Face, LandmarkLayout};
use crate::motion_tracker::MotionTracker;
use crate::mouth_mapper::{self, MouthValues};
use crate::render::Renderer;
use crate::Result;
use log::debug;

/// Persistent per-face signal state, explicitly threaded through each pass
#[derive(Debug, Clone)]
pub struct TrackingState {
    motion: MotionTracker,
    blink: BlinkDetector,
}

impl TrackingState {
    /// Create tracking state with the given thresholds
    #[must_use]
    pub fn new(movement_threshold: f64, animation_step: f64, eye_open_threshold: f64) -> Self {
        Self {
            motion: MotionTracker::new(movement_threshold, animation_step),
            blink: BlinkDetector::new(eye_open_threshold),
        }
    }

    /// Accumulated animation offset
    #[must_use]
    pub fn animation_offset(&self) -> f64 {
        self.motion.animation_offset()
    }

    /// Accumulated gradient shift
    #[must_use]
    pub fn gradient_shift(&self) -> f64 {
        self.blink.gradient_shift()
    }

    /// Reset both automata to their initial state
    pub fn reset(&mut self) {
        self.motion.reset();
        self.blink.reset();
    }
}

/// Signals derived for one face in one frame, exposed for logging and the
/// debug overlay
#[derive(Debug, Clone, Copy)]
pub struct FaceSignals {
    /// Whether the centroid moved beyond the threshold this frame
    pub moving: bool,
    /// Animation offset after this frame's update
    pub animation_offset: f64,
    /// Gradient shift after this frame's update
    pub gradient_shift: f64,
    /// Closing edges detected this frame
    pub blinks: BlinkEvents,
    /// Eyelid distances measured this frame
    pub eye_distances: EyeDistances,
    /// Mouth-driven saturation/brightness
    pub mouth: MouthValues,
}

/// Runs the full signal-derivation pass once per frame
pub struct FrameOrchestrator {
    layout: LandmarkLayout,
    movement_threshold: f64,
    animation_step: f64,
    eye_open_threshold: f64,
    keypoint_radius: f64,
    debug_text: bool,
    states: Vec<TrackingState>,
}

impl FrameOrchestrator {
    /// Create an orchestrator from configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            layout: config.layout,
            movement_threshold: config.motion.movement_threshold,
            animation_step: config.motion.animation_step,
            eye_open_threshold: config.blink.eye_open_threshold,
            keypoint_radius: config.overlay.keypoint_radius,
            debug_text: config.overlay.debug_text,
            states: Vec::new(),
        }
    }

    /// Tracking state for a face index, if that face has been seen
    #[must_use]
    pub fn state(&self, face_index: usize) -> Option<&TrackingState> {
        self.states.get(face_index)
    }

    /// Run one pipeline pass over the current frame's faces.
    ///
    /// Returns the derived signals per face, in input order. An empty face
    /// list returns an empty vec without touching state or the renderer.
    ///
    /// # Errors
    ///
    /// Fails when the configured landmark layout points outside a face's
    /// keypoint sequence; state updated before the failure is kept.
    pub fn process_frame(
        &mut self,
        faces: &[Face],
        renderer: &mut dyn Renderer,
    ) -> Result<Vec<FaceSignals>> {
        if faces.is_empty() {
            return Ok(Vec::new());
        }

        if self.debug_text {
            renderer.draw_text(&format!("Faces detected: {}", faces.len()), 10.0, 30.0);
        }

        let mut all_signals = Vec::with_capacity(faces.len());

        for (index, face) in faces.iter().enumerate() {
            while self.states.len() <= index {
                self.states.push(TrackingState::new(
                    self.movement_threshold,
                    self.animation_step,
                    self.eye_open_threshold,
                ));
            }
            let state = &mut self.states[index];

            let moving = state.motion.update(face);
            let blinks = state.blink.update(face, &self.layout)?;
            let mouth = mouth_mapper::mouth_values(face, &self.layout)?;

            let signals = FaceSignals {
                moving,
                animation_offset: state.motion.animation_offset(),
                gradient_shift: state.blink.gradient_shift(),
                blinks,
                eye_distances: state.blink.last_distances(),
                mouth,
            };

            if blinks.any() {
                debug!(
                    "face {index}: blink left={} right={} shift={:.0}",
                    blinks.left, blinks.right, signals.gradient_shift
                );
            }

            self.draw_face(face, &signals, renderer);
            all_signals.push(signals);
        }

        Ok(all_signals)
    }

    fn draw_face(&self, face: &Face, signals: &FaceSignals, renderer: &mut dyn Renderer) {
        if self.debug_text {
            self.draw_debug_text(signals, renderer);
        }

        for point in face.keypoints() {
            let color: HsbColor = color::compose(
                point,
                signals.animation_offset,
                signals.gradient_shift,
                &signals.mouth,
            );
            renderer.draw_keypoint(*point, color, self.keypoint_radius);
        }
    }

    fn draw_debug_text(&self, signals: &FaceSignals, renderer: &mut dyn Renderer) {
        let d = signals.eye_distances;
        renderer.draw_text(&format!("Left eye: {:.1}", d.left), 10.0, 60.0);
        renderer.draw_text(&format!("Right eye: {:.1}", d.right), 10.0, 80.0);
        renderer.draw_text(
            &format!("Gradient shift: {:.0}", signals.gradient_shift),
            10.0,
            100.0,
        );
        renderer.draw_text(
            &format!("Mouth opening: {:.1}", signals.mouth.opening),
            10.0,
            120.0,
        );
        renderer.draw_text(
            &format!("Saturation: {:.1}", signals.mouth.saturation),
            10.0,
            140.0,
        );
        renderer.draw_text(
            &format!("Brightness: {:.1}", signals.mouth.brightness),
            10.0,
            160.0,
        );
    }
}
