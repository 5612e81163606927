//! Headless globe driver
//!
//! Builds the globe mesh, replays an orbit input script against the camera
//! and logs what a renderer would upload for the final frame.

#[cfg(not(target_arch = "wasm32"))]
use globe_engine::{
    args::GlobeArgs, mesh, Camera, CameraController, GlobeError, OrbitController,
};

#[cfg(not(target_arch = "wasm32"))]
fn run(args: &GlobeArgs) -> Result<(), GlobeError> {
    let config = args.config();
    config.validate()?;
    let inputs = args.inputs()?;

    let globe = mesh::build(config.subdivisions)?;
    log::info!(
        "Globe mesh: {} subdivisions, {} vertices, {} triangles ({} + {} bytes)",
        globe.subdivisions(),
        globe.vertex_count(),
        globe.triangle_count(),
        globe.vertex_bytes().len(),
        globe.index_bytes().len()
    );

    let mut orbit = OrbitController::from_config(config.orbit)?;
    let mut camera = Camera::from_config(&config.camera, orbit.position())?;

    for input in &inputs {
        orbit.update(&mut camera, input);
    }
    log::info!(
        "{} after {} steps: azimuth {}, elevation {}, radius {}, camera at {}",
        orbit.name(),
        inputs.len(),
        orbit.azimuth(),
        orbit.elevation(),
        orbit.radius(),
        camera.position()
    );

    let render_mode = orbit.render_mode();
    log::info!(
        "Render mode: {} ({:?})",
        render_mode,
        render_mode.topology()
    );

    let mvp = camera.mvp(args.aspect, glam::Mat4::IDENTITY);
    log::info!("MVP: {:?}", mvp.to_cols_array_2d());

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    globe_engine::init();

    let args = GlobeArgs::parse();
    if let Err(err) = run(&args) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven from JavaScript on the web; see `init_web_logging`.
}
