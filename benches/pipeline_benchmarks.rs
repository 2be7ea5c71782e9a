//! Benchmarks for the per-frame pipeline pass

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use face_rainbow::{
    config::Config,
    constants::NUM_FACE_MESH_KEYPOINTS,
    landmarks::{Face, Keypoint, LandmarkLayout},
    pipeline::FrameOrchestrator,
    render::NullRenderer,
};

/// Build a frame sequence simulating a jittery face drifting across the view
fn synthetic_frames(count: usize) -> Vec<Face> {
    let layout = LandmarkLayout::default();

    (0..count)
        .map(|i| {
            let t = i as f64;
            let cx = 320.0 + t * 3.0 + rand::random::<f64>();
            let cy = 240.0 + (t * 0.2).sin() * 20.0;
            let eye_distance = if i % 25 < 2 { 2.0 } else { 12.0 };
            let mouth_opening = 10.0 * (1.0 + (t * 0.1).sin());

            let mut keypoints = vec![Keypoint::new(cx, cy); NUM_FACE_MESH_KEYPOINTS];
            keypoints[layout.left_eye_top] = Keypoint::new(cx - 30.0, cy - 30.0);
            keypoints[layout.left_eye_bottom] = Keypoint::new(cx - 30.0, cy - 30.0 + eye_distance);
            keypoints[layout.right_eye_top] = Keypoint::new(cx + 30.0, cy - 30.0);
            keypoints[layout.right_eye_bottom] = Keypoint::new(cx + 30.0, cy - 30.0 + eye_distance);
            keypoints[layout.upper_lip] = Keypoint::new(cx, cy + 40.0);
            keypoints[layout.lower_lip] = Keypoint::new(cx, cy + 40.0 + mouth_opening);

            Face::new(keypoints)
        })
        .collect()
}

fn benchmark_pipeline(c: &mut Criterion) {
    let frames = synthetic_frames(100);

    c.bench_function("process_frame_full_mesh", |b| {
        let config = Config::default();
        let mut orchestrator = FrameOrchestrator::new(&config);
        let mut renderer = NullRenderer;
        let mut i = 0;

        b.iter(|| {
            let face = &frames[i % frames.len()];
            i += 1;
            let signals = orchestrator
                .process_frame(black_box(std::slice::from_ref(face)), &mut renderer)
                .unwrap();
            black_box(signals);
        });
    });

    c.bench_function("process_frame_no_overlay", |b| {
        let mut config = Config::default();
        config.overlay.debug_text = false;
        let mut orchestrator = FrameOrchestrator::new(&config);
        let mut renderer = NullRenderer;
        let mut i = 0;

        b.iter(|| {
            let face = &frames[i % frames.len()];
            i += 1;
            let signals = orchestrator
                .process_frame(black_box(std::slice::from_ref(face)), &mut renderer)
                .unwrap();
            black_box(signals);
        });
    });
}

criterion_group!(benches, benchmark_pipeline);
criterion_main!(benches);
