//! Orbit camera controller
//!
//! Keeps the camera on a sphere around the origin, parameterized by
//! azimuth, elevation (both in degrees) and radius:
//! - Azimuth: stepped, then snapped back (or wrapped) at a symmetric bound
//! - Elevation: stepped and saturated short of the poles
//! - Radius: stepped and saturated to `[radius_min, radius_max]`

use std::str::FromStr;

use glam::Vec3;

use super::{Camera, RenderMode};
use crate::config::OrbitConfig;
use crate::error::{ConfigError, ConfigResult};

/// What happens when the azimuth leaves `[-bound, bound]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AzimuthMode {
    /// Reset to 0 once `|azimuth| > bound`.
    #[default]
    SnapBack,
    /// Euclidean remainder into `[0, bound)`.
    Wrap,
}

impl AzimuthMode {
    pub fn apply(self, azimuth: f32, bound: f32) -> f32 {
        match self {
            AzimuthMode::SnapBack => {
                if azimuth.abs() > bound {
                    0.0
                } else {
                    azimuth
                }
            }
            AzimuthMode::Wrap => azimuth.rem_euclid(bound),
        }
    }
}

/// One frame of orbit input.
///
/// Each axis is a signed unit in `[-1, 1]`; the controller scales it by the
/// configured step. Larger magnitudes are clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitInput {
    pub azimuth: f32,
    pub elevation: f32,
    /// Positive moves away from the globe
    pub radius: f32,
    pub toggle_render_mode: bool,
}

impl OrbitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset per-frame state (call after update)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }

    /// Accumulate another input into this one.
    pub fn merge(mut self, other: OrbitInput) -> Self {
        self.azimuth += other.azimuth;
        self.elevation += other.elevation;
        self.radius += other.radius;
        self.toggle_render_mode ^= other.toggle_render_mode;
        self
    }
}

/// Parses one step of an input script: `left`, `right`, `up`, `down`,
/// `in`, `out` or `toggle`.
impl FromStr for OrbitInput {
    type Err = ConfigError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let input = OrbitInput::default();
        match token.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(OrbitInput {
                azimuth: -1.0,
                ..input
            }),
            "right" => Ok(OrbitInput {
                azimuth: 1.0,
                ..input
            }),
            "up" => Ok(OrbitInput {
                elevation: 1.0,
                ..input
            }),
            "down" => Ok(OrbitInput {
                elevation: -1.0,
                ..input
            }),
            "in" => Ok(OrbitInput {
                radius: -1.0,
                ..input
            }),
            "out" => Ok(OrbitInput {
                radius: 1.0,
                ..input
            }),
            "toggle" => Ok(OrbitInput {
                toggle_render_mode: true,
                ..input
            }),
            _ => Err(ConfigError::UnknownInput(token.to_string())),
        }
    }
}

/// Abstract camera controller trait
pub trait CameraController {
    /// Apply one frame of input and move the camera accordingly
    fn update(&mut self, camera: &mut Camera, input: &OrbitInput);

    /// Get the controller name for debugging
    fn name(&self) -> &'static str;

    /// Reset the controller to its initial state
    fn reset(&mut self);
}

/// Orbit camera controller
///
/// Owns the orbit state; the camera only receives the resulting cartesian
/// position through [`update_camera_position`](Self::update_camera_position).
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitController {
    config: OrbitConfig,
    azimuth: f32,
    elevation: f32,
    radius: f32,
    render_mode: RenderMode,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::with_unchecked_config(OrbitConfig::default())
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validated constructor
    pub fn from_config(config: OrbitConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::with_unchecked_config(config))
    }

    fn with_unchecked_config(config: OrbitConfig) -> Self {
        Self {
            config,
            azimuth: config.azimuth,
            elevation: config.elevation,
            radius: config.radius,
            render_mode: config.render_mode,
        }
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// Azimuth in degrees
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Elevation in degrees
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn adjust_azimuth(&mut self, unit: f32) {
        let azimuth = self.azimuth + signed_unit(unit) * self.config.azimuth_step;
        self.azimuth = self
            .config
            .azimuth_mode
            .apply(azimuth, self.config.azimuth_bound);
    }

    pub fn adjust_elevation(&mut self, unit: f32) {
        let elevation = self.elevation + signed_unit(unit) * self.config.elevation_step;
        self.elevation = elevation.clamp(self.config.elevation_min, self.config.elevation_max);
    }

    pub fn adjust_radius(&mut self, unit: f32) {
        let radius = self.radius + signed_unit(unit) * self.config.radius_step;
        self.radius = radius.clamp(self.config.radius_min, self.config.radius_max);
    }

    pub fn increase_azimuth(&mut self) {
        self.adjust_azimuth(1.0);
    }

    pub fn decrease_azimuth(&mut self) {
        self.adjust_azimuth(-1.0);
    }

    pub fn increase_elevation(&mut self) {
        self.adjust_elevation(1.0);
    }

    pub fn decrease_elevation(&mut self) {
        self.adjust_elevation(-1.0);
    }

    /// Move one radius step closer to the globe.
    pub fn zoom_in(&mut self) {
        self.adjust_radius(-1.0);
    }

    pub fn zoom_out(&mut self) {
        self.adjust_radius(1.0);
    }

    pub fn enable_wireframe(&mut self) {
        self.render_mode = RenderMode::Wireframe;
    }

    pub fn disable_wireframe(&mut self) {
        self.render_mode = RenderMode::Filled;
    }

    pub fn toggle_wireframe(&mut self) {
        self.render_mode = self.render_mode.toggled();
    }

    /// Cartesian camera position (right-handed, Y-up).
    pub fn position(&self) -> Vec3 {
        let azimuth = self.azimuth.to_radians();
        let elevation = self.elevation.to_radians();

        let y = self.radius * elevation.sin();
        let hyp = self.radius * elevation.cos();
        Vec3::new(hyp * azimuth.sin(), y, hyp * azimuth.cos())
    }

    pub fn update_camera_position(&self, camera: &mut Camera) {
        let position = self.position();
        log::trace!(
            "Orbit az={} el={} r={} -> {}",
            self.azimuth,
            self.elevation,
            self.radius,
            position
        );
        camera.set_position(position);
    }
}

impl CameraController for OrbitController {
    fn update(&mut self, camera: &mut Camera, input: &OrbitInput) {
        if input.azimuth != 0.0 {
            self.adjust_azimuth(input.azimuth);
        }
        if input.elevation != 0.0 {
            self.adjust_elevation(input.elevation);
        }
        if input.radius != 0.0 {
            self.adjust_radius(input.radius);
        }
        if input.toggle_render_mode {
            self.toggle_wireframe();
        }

        self.update_camera_position(camera);
    }

    fn name(&self) -> &'static str {
        "Orbit"
    }

    fn reset(&mut self) {
        *self = Self::with_unchecked_config(self.config);
    }
}

/// Clamp to `[-1, 1]`; NaN counts as no input.
fn signed_unit(unit: f32) -> f32 {
    if unit.is_nan() {
        0.0
    } else {
        unit.clamp(-1.0, 1.0)
    }
}
