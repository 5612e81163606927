//! Camera system
//!
//! The camera always looks at the origin. Its "up" vector is derived from the
//! camera's *stored* position, even when a view matrix is requested for some
//! other eye point, so the orientation stays continuous while orbiting.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

use crate::config::CameraConfig;
use crate::error::{CameraError, CameraResult, ConfigResult};

/// Look-at target of every view matrix.
pub const ORIGIN: Vec3 = Vec3::ZERO;

/// Lowest accepted field of view, in degrees.
pub const FIELD_OF_VIEW_MIN: f32 = 0.0;

/// Highest accepted field of view, in degrees.
pub const FIELD_OF_VIEW_MAX: f32 = 180.0;

/// Components below this magnitude count as zero (same tolerance as the
/// usual single-precision fuzzy-null check).
const FUZZY_ZERO: f32 = 1e-5;

/// Clip-space depth convention of the projection matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DepthRange {
    /// OpenGL style `[-1, 1]`.
    #[default]
    NegativeOneToOne,
    /// wgpu / Vulkan / D3D style `[0, 1]`.
    ZeroToOne,
}

/// Perspective camera orbiting the origin.
///
/// Parameter setters follow an "ignore invalid input, keep the last good
/// value" contract: out-of-range requests are silent no-ops. The `try_set_*`
/// variants report the rejection instead. Either way
/// `distance_to_near_plane() <= distance_to_far_plane()` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    field_of_view: f32,
    near: f32,
    far: f32,
    depth_range: DepthRange,
}

impl Default for Camera {
    fn default() -> Self {
        let config = CameraConfig::default();
        Self {
            position: Vec3::new(0.0, 0.0, 2.0),
            field_of_view: config.field_of_view,
            near: config.near,
            far: config.far,
            depth_range: config.depth_range,
        }
    }
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Validated constructor: fails instead of silently ignoring bad values.
    pub fn from_config(config: &CameraConfig, position: Vec3) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            position,
            field_of_view: config.field_of_view,
            near: config.near,
            far: config.far,
            depth_range: config.depth_range,
        })
    }

    pub fn with_depth_range(mut self, depth_range: DepthRange) -> Self {
        self.depth_range = depth_range;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Any point is a legal camera position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Field of view in degrees
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    /// Set the field of view in degrees; ignored outside `[0, 180]`.
    pub fn set_field_of_view(&mut self, degrees: f32) {
        let _ = self.try_set_field_of_view(degrees);
    }

    pub fn try_set_field_of_view(&mut self, degrees: f32) -> CameraResult<()> {
        if (FIELD_OF_VIEW_MIN..=FIELD_OF_VIEW_MAX).contains(&degrees) {
            self.field_of_view = degrees;
            Ok(())
        } else {
            Err(CameraError::FieldOfViewOutOfRange(degrees))
        }
    }

    pub fn distance_to_near_plane(&self) -> f32 {
        self.near
    }

    /// Ignored if `distance` lies beyond the far plane.
    pub fn set_distance_to_near_plane(&mut self, distance: f32) {
        let _ = self.try_set_distance_to_near_plane(distance);
    }

    pub fn try_set_distance_to_near_plane(&mut self, distance: f32) -> CameraResult<()> {
        if distance <= self.far {
            self.near = distance;
            Ok(())
        } else {
            Err(CameraError::NearBeyondFar {
                near: distance,
                far: self.far,
            })
        }
    }

    pub fn distance_to_far_plane(&self) -> f32 {
        self.far
    }

    /// Ignored if `distance` lies before the near plane.
    pub fn set_distance_to_far_plane(&mut self, distance: f32) {
        let _ = self.try_set_distance_to_far_plane(distance);
    }

    pub fn try_set_distance_to_far_plane(&mut self, distance: f32) -> CameraResult<()> {
        if distance >= self.near {
            self.far = distance;
            Ok(())
        } else {
            Err(CameraError::FarBeforeNear {
                near: self.near,
                far: distance,
            })
        }
    }

    pub fn depth_range(&self) -> DepthRange {
        self.depth_range
    }

    pub fn set_depth_range(&mut self, depth_range: DepthRange) {
        self.depth_range = depth_range;
    }

    /// View matrix from the camera's own position.
    pub fn view_matrix_at_position(&self) -> Mat4 {
        look_at_origin(self.position, self.position)
    }

    /// View matrix with the eye placed at the origin.
    ///
    /// Eye and target coincide, so this is the identity matrix.
    pub fn view_matrix_at_origin(&self) -> Mat4 {
        look_at_origin(ORIGIN, self.position)
    }

    /// Right-handed look-at matrix from `eye` toward the origin.
    ///
    /// The up vector still comes from the stored position, not from `eye`.
    pub fn view_matrix(&self, eye: Vec3) -> Mat4 {
        look_at_origin(eye, self.position)
    }

    /// Perspective projection for the given aspect ratio (width / height).
    ///
    /// Degenerate input (zero aspect, coincident planes, zero field of view)
    /// produces the identity matrix.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        debug_assert!(
            self.near <= self.far,
            "near plane {} lies beyond far plane {}",
            self.near,
            self.far
        );

        let half_fov = (self.field_of_view * 0.5).to_radians();
        if aspect_ratio == 0.0 || self.near == self.far || half_fov.sin().abs() <= FUZZY_ZERO {
            return Mat4::IDENTITY;
        }

        let fov_y = self.field_of_view.to_radians();
        match self.depth_range {
            DepthRange::NegativeOneToOne => {
                Mat4::perspective_rh_gl(fov_y, aspect_ratio, self.near, self.far)
            }
            DepthRange::ZeroToOne => Mat4::perspective_rh(fov_y, aspect_ratio, self.near, self.far),
        }
    }

    /// Combined `projection * view * model` matrix for one frame.
    pub fn mvp(&self, aspect_ratio: f32, model: Mat4) -> Mat4 {
        self.projection_matrix(aspect_ratio) * self.view_matrix_at_position() * model
    }

    /// Build camera uniform data for shaders
    pub fn uniforms(&self, aspect_ratio: f32, model: Mat4) -> CameraUniforms {
        let view = self.view_matrix_at_position();
        let projection = self.projection_matrix(aspect_ratio);

        CameraUniforms {
            mvp: projection * view * model,
            view,
            projection,
            position: self.position.extend(1.0),
        }
    }
}

/// Up vector derived from `up_source`: the component of world Y that is
/// perpendicular to the direction from the origin to `up_source`.
fn up_vector(up_source: Vec3) -> Vec3 {
    let direction = (up_source - ORIGIN).normalize_or_zero();
    let right = Vec3::Y.cross(direction).normalize_or_zero();
    direction.cross(right)
}

/// World axis least aligned with `v`.
fn least_aligned_axis(v: Vec3) -> Vec3 {
    let a = v.abs();
    if a.x <= a.y && a.x <= a.z {
        Vec3::X
    } else if a.y <= a.z {
        Vec3::Y
    } else {
        Vec3::Z
    }
}

fn look_at_origin(eye: Vec3, up_source: Vec3) -> Mat4 {
    let forward = ORIGIN - eye;
    if forward.abs().max_element() <= FUZZY_ZERO {
        return Mat4::IDENTITY;
    }

    // Stored position at the origin or on the Y axis leaves no usable up.
    let mut up = up_vector(up_source);
    if forward.normalize().cross(up).length_squared() <= FUZZY_ZERO {
        up = least_aligned_axis(forward);
    }

    Mat4::look_at_rh(eye, ORIGIN, up)
}

/// Camera uniform data for GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniforms {
    pub mvp: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub position: Vec4,
}
