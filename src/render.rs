//! Renderer boundary.
//!
//! The pipeline has no dependency on pixel formats or drawing primitives; it
//! emits per-keypoint draw calls and overlay text through this trait and the
//! host supplies the actual canvas.

use crate::color::HsbColor;
use crate::landmarks::Keypoint;
use log::trace;

/// Sink for the pipeline's draw calls
pub trait Renderer {
    /// Draw one keypoint as a filled circle of the given radius
    fn draw_keypoint(&mut self, position: Keypoint, color: HsbColor, radius: f64);

    /// Draw one line of overlay text at the given position
    fn draw_text(&mut self, text: &str, x: f64, y: f64);
}

/// Renderer that discards everything, for headless runs
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_keypoint(&mut self, _position: Keypoint, _color: HsbColor, _radius: f64) {}

    fn draw_text(&mut self, _text: &str, _x: f64, _y: f64) {}
}

/// Renderer that traces draw calls through the `log` facade, used by the
/// demo binary to make pipeline output visible without a canvas.
#[derive(Debug, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn draw_keypoint(&mut self, position: Keypoint, color: HsbColor, radius: f64) {
        trace!(
            "circle ({:.1}, {:.1}) r={radius} hsb({:.1}, {:.1}, {:.1})",
            position.x,
            position.y,
            color.hue,
            color.saturation,
            color.brightness
        );
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64) {
        trace!("text ({x:.0}, {y:.0}): {text}");
    }
}
