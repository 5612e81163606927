//! Command line arguments for the `globe` driver.
//!
//! Uses clap for CLI parsing on native targets; every flag maps onto a field
//! of [`GlobeConfig`] except the aspect ratio and the input script, which are
//! per-run settings of the driver.
//!
//! # Examples
//!
//! ```bash
//! # Coarse globe, filled, seen from above
//! ./globe --subdivisions 4 --elevation 45 --filled
//!
//! # Orbit twice to the right, zoom in, switch render mode
//! ./globe --input right,right,in,toggle
//! ```

use clap::Parser;

use crate::config::{CameraConfig, GlobeConfig, OrbitConfig};
use crate::error::ConfigResult;
use crate::scene::{AzimuthMode, DepthRange, OrbitInput, RenderMode};

/// Clip-space depth convention for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CliDepthRange {
    /// OpenGL `[-1, 1]`.
    #[default]
    Gl,
    /// wgpu / Vulkan `[0, 1]`.
    ZeroToOne,
}

impl From<CliDepthRange> for DepthRange {
    fn from(cli: CliDepthRange) -> Self {
        match cli {
            CliDepthRange::Gl => DepthRange::NegativeOneToOne,
            CliDepthRange::ZeroToOne => DepthRange::ZeroToOne,
        }
    }
}

/// Azimuth overflow behavior for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CliAzimuthMode {
    /// Reset to 0 past the bound.
    #[default]
    SnapBack,
    /// Wrap continuously.
    Wrap,
}

impl From<CliAzimuthMode> for AzimuthMode {
    fn from(cli: CliAzimuthMode) -> Self {
        match cli {
            CliAzimuthMode::SnapBack => AzimuthMode::SnapBack,
            CliAzimuthMode::Wrap => AzimuthMode::Wrap,
        }
    }
}

/// Globe viewer arguments.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "globe",
    about = "Build a cube-sphere globe and orbit a camera around it",
    version
)]
pub struct GlobeArgs {
    /// Extra grid lines per cube face.
    #[arg(long, default_value_t = 15)]
    pub subdivisions: u32,

    /// Vertical field of view in degrees, within [0, 180].
    #[arg(long, default_value_t = 90.0)]
    pub fov: f32,

    /// Distance to the near clipping plane.
    #[arg(long, default_value_t = 0.1)]
    pub near: f32,

    /// Distance to the far clipping plane.
    #[arg(long, default_value_t = 10.0)]
    pub far: f32,

    /// Initial orbit radius.
    #[arg(long, default_value_t = 2.0)]
    pub radius: f32,

    /// Initial azimuth in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub azimuth: f32,

    /// Initial elevation in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub elevation: f32,

    /// Clip-space depth range of the projection matrix.
    #[arg(long, default_value = "gl", value_enum)]
    pub depth_range: CliDepthRange,

    /// What happens when the azimuth passes its bound.
    #[arg(long, default_value = "snap-back", value_enum)]
    pub azimuth_mode: CliAzimuthMode,

    /// Viewport aspect ratio (width / height).
    #[arg(long, default_value_t = 16.0 / 9.0)]
    pub aspect: f32,

    /// Start with filled triangles instead of wireframe.
    #[arg(long)]
    pub filled: bool,

    /// Comma-separated orbit steps: left, right, up, down, in, out, toggle.
    #[arg(long, value_delimiter = ',')]
    pub input: Vec<String>,
}

impl GlobeArgs {
    /// Unvalidated configuration; call [`GlobeConfig::validate`] before use.
    pub fn config(&self) -> GlobeConfig {
        let camera = CameraConfig::default()
            .with_field_of_view(self.fov)
            .with_planes(self.near, self.far)
            .with_depth_range(self.depth_range.into());

        let render_mode = if self.filled {
            RenderMode::Filled
        } else {
            RenderMode::Wireframe
        };
        let orbit = OrbitConfig::default()
            .with_radius(self.radius)
            .with_angles(self.azimuth, self.elevation)
            .with_azimuth_mode(self.azimuth_mode.into())
            .with_render_mode(render_mode);

        GlobeConfig::default()
            .with_subdivisions(self.subdivisions)
            .with_camera(camera)
            .with_orbit(orbit)
    }

    /// Parse the input script, one [`OrbitInput`] per step.
    pub fn inputs(&self) -> ConfigResult<Vec<OrbitInput>> {
        self.input
            .iter()
            .filter(|token| !token.trim().is_empty())
            .map(|token| token.parse())
            .collect()
    }
}
