//! Globe configuration
//!
//! Plain structs with defaults matching the desktop viewer, consuming `with_*`
//! builders and a `validate()` pass used by the validated constructors.

use crate::error::{CameraError, ConfigError, ConfigResult};
use crate::scene::{AzimuthMode, DepthRange, RenderMode, FIELD_OF_VIEW_MAX, FIELD_OF_VIEW_MIN};

/// Elevation limits must stay strictly inside this bound (degrees).
const POLE: f32 = 90.0;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeConfig {
    /// Extra grid lines per cube face (`vertices_per_side = subdivisions + 2`)
    pub subdivisions: u32,
    pub camera: CameraConfig,
    pub orbit: OrbitConfig,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            subdivisions: 15,
            camera: CameraConfig::default(),
            orbit: OrbitConfig::default(),
        }
    }
}

impl GlobeConfig {
    pub fn with_subdivisions(mut self, subdivisions: u32) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_orbit(mut self, orbit: OrbitConfig) -> Self {
        self.orbit = orbit;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.camera.validate()?;
        self.orbit.validate()
    }
}

/// Lens parameters of the [`Camera`](crate::scene::Camera).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub field_of_view: f32,
    pub near: f32,
    pub far: f32,
    pub depth_range: DepthRange,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            field_of_view: 90.0,
            near: 0.1,
            far: 10.0,
            depth_range: DepthRange::NegativeOneToOne,
        }
    }
}

impl CameraConfig {
    pub fn with_field_of_view(mut self, degrees: f32) -> Self {
        self.field_of_view = degrees;
        self
    }

    pub fn with_planes(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    pub fn with_depth_range(mut self, depth_range: DepthRange) -> Self {
        self.depth_range = depth_range;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(FIELD_OF_VIEW_MIN..=FIELD_OF_VIEW_MAX).contains(&self.field_of_view) {
            return Err(CameraError::FieldOfViewOutOfRange(self.field_of_view).into());
        }
        if !(self.near >= 0.0) {
            return Err(ConfigError::NegativeNearPlane(self.near));
        }
        positive("far plane distance", self.far)?;
        if self.near > self.far {
            return Err(CameraError::NearBeyondFar {
                near: self.near,
                far: self.far,
            }
            .into());
        }
        Ok(())
    }
}

/// Orbit state, limits and per-step increments. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitConfig {
    pub radius: f32,
    pub azimuth: f32,
    pub elevation: f32,
    /// Degrees per unit of azimuth input
    pub azimuth_step: f32,
    /// Degrees per unit of elevation input
    pub elevation_step: f32,
    /// Distance per unit of zoom input
    pub radius_step: f32,
    pub elevation_min: f32,
    pub elevation_max: f32,
    /// Symmetric azimuth bound; see [`AzimuthMode`]
    pub azimuth_bound: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub azimuth_mode: AzimuthMode,
    pub render_mode: RenderMode,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            azimuth: 0.0,
            elevation: 0.0,
            azimuth_step: 10.0,
            elevation_step: 10.0,
            radius_step: 0.25,
            elevation_min: -80.0,
            elevation_max: 80.0,
            azimuth_bound: 360.0,
            radius_min: 1.25,
            radius_max: 8.0,
            azimuth_mode: AzimuthMode::SnapBack,
            render_mode: RenderMode::Wireframe,
        }
    }
}

impl OrbitConfig {
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_angles(mut self, azimuth: f32, elevation: f32) -> Self {
        self.azimuth = azimuth;
        self.elevation = elevation;
        self
    }

    pub fn with_steps(mut self, azimuth: f32, elevation: f32, radius: f32) -> Self {
        self.azimuth_step = azimuth;
        self.elevation_step = elevation;
        self.radius_step = radius;
        self
    }

    pub fn with_elevation_limits(mut self, min: f32, max: f32) -> Self {
        self.elevation_min = min;
        self.elevation_max = max;
        self
    }

    pub fn with_radius_limits(mut self, min: f32, max: f32) -> Self {
        self.radius_min = min;
        self.radius_max = max;
        self
    }

    pub fn with_azimuth_mode(mut self, mode: AzimuthMode) -> Self {
        self.azimuth_mode = mode;
        self
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        positive("azimuth step", self.azimuth_step)?;
        positive("elevation step", self.elevation_step)?;
        positive("radius step", self.radius_step)?;
        positive("azimuth bound", self.azimuth_bound)?;
        positive("minimum radius", self.radius_min)?;
        positive("maximum radius", self.radius_max)?;

        if self.elevation_min > self.elevation_max {
            return Err(ConfigError::InvertedRange {
                name: "elevation",
                min: self.elevation_min,
                max: self.elevation_max,
            });
        }
        if !(self.elevation_min > -POLE && self.elevation_max < POLE) {
            return Err(ConfigError::ElevationReachesPole {
                min: self.elevation_min,
                max: self.elevation_max,
            });
        }
        if self.radius_min > self.radius_max {
            return Err(ConfigError::InvertedRange {
                name: "radius",
                min: self.radius_min,
                max: self.radius_max,
            });
        }

        within("radius", self.radius, self.radius_min, self.radius_max)?;
        within(
            "elevation",
            self.elevation,
            self.elevation_min,
            self.elevation_max,
        )?;
        within(
            "azimuth",
            self.azimuth,
            -self.azimuth_bound,
            self.azimuth_bound,
        )
    }
}

fn positive(name: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn within(name: &'static str, value: f32, min: f32, max: f32) -> ConfigResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
