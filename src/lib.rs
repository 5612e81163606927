//! Globe Engine - cube-sphere globe meshes and an orbiting camera
//!
//! The engine produces everything a renderer needs to draw a spinning globe,
//! without owning a window or a GPU device:
//! - **Mesh**: a unit cube-sphere built by generating the six cube faces in
//!   parallel into one contiguous vertex/index buffer pair
//! - **Camera**: view and projection matrices looking at the origin, with an
//!   up vector that follows the camera's own position
//! - **Orbit**: azimuth/elevation/radius state with clamping, converted to a
//!   camera position
//!
//! # Example
//!
//! ```
//! use globe_engine::{mesh, Camera, CameraController, OrbitController, OrbitInput};
//!
//! let globe = mesh::build(15).unwrap();
//! assert_eq!(globe.vertex_count(), 6 * 17 * 17);
//!
//! let mut camera = Camera::default();
//! let mut orbit = OrbitController::new();
//! orbit.update(&mut camera, &"right".parse::<OrbitInput>().unwrap());
//!
//! let mvp = camera.mvp(16.0 / 9.0, glam::Mat4::IDENTITY);
//! assert!(mvp.is_finite());
//! ```

pub mod config;
pub mod error;
pub mod mesh;
pub mod scene;

#[cfg(not(target_arch = "wasm32"))]
pub mod args;

pub use config::{CameraConfig, GlobeConfig, OrbitConfig};
pub use error::{CameraError, ConfigError, GlobeError, MeshError};
pub use mesh::{CubeFace, Mesh, PrimitiveTopology};
pub use scene::{
    AzimuthMode, Camera, CameraController, CameraUniforms, DepthRange, OrbitController,
    OrbitInput, RenderMode, SharedCamera,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn init() {
    log::info!("Globe Engine v{} initialized", VERSION);
}

// Web initialization helper
#[cfg(target_arch = "wasm32")]
pub fn init_web_logging() -> Result<(), log::SetLoggerError> {
    // Set up panic hook for better error messages in console
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)?;
    init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
