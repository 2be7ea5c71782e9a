//! Main application module wiring the frame cell, orchestrator, and renderer.

use crate::config::Config;
use crate::frame_cell::FrameCell;
use crate::pipeline::{FaceSignals, FrameOrchestrator};
use crate::render::Renderer;
use crate::Result;
use log::info;

/// Application driver: consumes the latest landmark frame once per tick and
/// runs the full pipeline pass over it.
pub struct FaceRainbowApp {
    config: Config,
    cell: FrameCell,
    orchestrator: FrameOrchestrator,
}

impl FaceRainbowApp {
    /// Create a new application from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        info!(
            "Initializing face-rainbow (max_faces={}, movement_threshold={}, eye_open_threshold={})",
            config.detector.max_faces,
            config.motion.movement_threshold,
            config.blink.eye_open_threshold
        );

        let orchestrator = FrameOrchestrator::new(&config);
        Ok(Self {
            config,
            cell: FrameCell::new(),
            orchestrator,
        })
    }

    /// Handle for the landmark source to publish detection results into
    #[must_use]
    pub fn frame_cell(&self) -> FrameCell {
        self.cell.clone()
    }

    /// Application configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one render tick against the most recently published frame.
    ///
    /// Faces beyond the configured `max_faces` are ignored. With no frame
    /// published yet this is a no-op, like any other empty frame.
    pub fn tick(&mut self, renderer: &mut dyn Renderer) -> Result<Vec<FaceSignals>> {
        let mut faces = self.cell.latest();
        faces.truncate(self.config.detector.max_faces);
        self.orchestrator.process_frame(&faces, renderer)
    }
}
