//! Headless driver: spins a mesh in front of the camera and logs what the
//! geometry pipeline produces each frame.
//!
//! ```text
//! softpipe [mesh.obj] [frames]
//! ```

use softpipe::prelude::*;

const DEFAULT_FRAMES: u32 = 60;
const ROTATION_PER_FRAME: f32 = 0.02;

fn main() -> softpipe::Result<()> {
    // Default: WARN for everything, INFO for softpipe.
    // Override with RUST_LOG env var (e.g. RUST_LOG=softpipe=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("softpipe=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let mesh_path = args.next();
    let frames = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let mut engine = Engine::new(EngineConfig::default())?;
    if let Some(path) = mesh_path {
        engine.load_mesh(&path)?;
    }

    let mut totals = FrameStats::default();
    for frame in 0..frames {
        engine
            .mesh_mut()
            .transform_mut()
            .rotate(Vec3::new(ROTATION_PER_FRAME, ROTATION_PER_FRAME, 0.0));
        engine.update();

        let stats = engine.stats();
        tracing::debug!(frame, ?stats, "frame");
        totals.faces += stats.faces;
        totals.culled += stats.culled;
        totals.clipped += stats.clipped;
        totals.triangles += stats.triangles;
        totals.dropped += stats.dropped;
    }

    tracing::info!(
        mesh = engine.mesh().name(),
        frames,
        faces = totals.faces,
        culled = totals.culled,
        clipped = totals.clipped,
        triangles = totals.triangles,
        dropped = totals.dropped,
        "finished"
    );
    Ok(())
}
