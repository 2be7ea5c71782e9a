//! Face rainbow demo binary.
//!
//! Without a camera or landmark model wired in, the binary drives the
//! pipeline from a scripted synthetic face so the full signal path (motion,
//! blinks, mouth mapping, color composition) can be observed through the log
//! renderer.

use anyhow::Result;
use clap::Parser;
use face_rainbow::{
    app::FaceRainbowApp,
    config::Config,
    constants::NUM_FACE_MESH_KEYPOINTS,
    landmarks::{Face, Keypoint, LandmarkLayout},
    render::LogRenderer,
};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Maximum number of faces to track
    #[arg(long)]
    max_faces: Option<usize>,

    /// Mirror the input horizontally
    #[arg(long)]
    mirror: bool,

    /// Number of synthetic frames to run
    #[arg(short, long, default_value = "120")]
    frames: usize,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

/// Build a scripted synthetic face for the given frame number: the face
/// drifts on even 10-frame blocks, blinks around frame multiples of 30, and
/// opens its mouth on a slow cycle.
fn synthetic_face(frame: usize, layout: &LandmarkLayout) -> Face {
    let t = frame as f64;
    let drift = if (frame / 10) % 2 == 0 { t * 6.0 } else { 0.0 };
    let base_x = 320.0 + drift.sin() * 40.0 + drift;
    let base_y = 240.0 + (t * 0.05).cos() * 10.0;

    let blinking = frame % 30 < 2 && frame > 0;
    let eye_distance = if blinking { 2.0 } else { 12.0 };
    let mouth_opening = 10.0 * (1.0 + (t * 0.1).sin());

    let mut keypoints = vec![Keypoint::default(); NUM_FACE_MESH_KEYPOINTS];
    for (i, point) in keypoints.iter_mut().enumerate() {
        // Scatter the mesh around the face center
        let angle = i as f64 * 0.618;
        point.x = base_x + angle.cos() * 80.0;
        point.y = base_y + angle.sin() * 100.0;
    }

    let eye_y = base_y - 30.0;
    keypoints[layout.left_eye_top] = Keypoint::new(base_x - 30.0, eye_y);
    keypoints[layout.left_eye_bottom] = Keypoint::new(base_x - 30.0, eye_y + eye_distance);
    keypoints[layout.right_eye_top] = Keypoint::new(base_x + 30.0, eye_y);
    keypoints[layout.right_eye_bottom] = Keypoint::new(base_x + 30.0, eye_y + eye_distance);
    keypoints[layout.upper_lip] = Keypoint::new(base_x, base_y + 40.0);
    keypoints[layout.lower_lip] = Keypoint::new(base_x, base_y + 40.0 + mouth_opening);

    Face::new(keypoints)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Face Rainbow - landmark color overlay demo");

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(max_faces) = args.max_faces {
        config.detector.max_faces = max_faces;
    }
    if args.mirror {
        config.detector.mirror_input = true;
    }

    let layout = config.layout;
    let mut app = FaceRainbowApp::new(config)?;
    let cell = app.frame_cell();
    let mut renderer = LogRenderer;

    let mut blinks = 0usize;
    let mut moving_frames = 0usize;

    for frame in 0..args.frames {
        // Stand-in for the asynchronous detection callback
        cell.publish(vec![synthetic_face(frame, &layout)]);

        let signals = app.tick(&mut renderer)?;
        for s in &signals {
            if s.moving {
                moving_frames += 1;
            }
            if s.blinks.any() {
                blinks += 1;
            }
        }
    }

    info!(
        "Processed {} frames: {} moving, {} frames with blinks",
        args.frames, moving_frames, blinks
    );

    Ok(())
}
