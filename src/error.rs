//! Error types for mesh generation, camera parameters and configuration.

use thiserror::Error;

/// Mesh generation error type
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshError {
    #[error("subdivision count {0} overflows the vertices-per-side computation")]
    SubdivisionOverflow(u32),
    #[error("{subdivisions} subdivisions produce {vertex_count} vertices, more than a u32 index can address")]
    TooManyVertices { subdivisions: u32, vertex_count: u64 },
}

pub type MeshResult<T> = Result<T, MeshError>;

/// Rejected camera parameter update.
///
/// Only returned by the `try_set_*` family; the plain setters swallow it.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CameraError {
    #[error("field of view {0} is outside [0, 180] degrees")]
    FieldOfViewOutOfRange(f32),
    #[error("near plane {near} would lie beyond the far plane {far}")]
    NearBeyondFar { near: f32, far: f32 },
    #[error("far plane {far} would lie before the near plane {near}")]
    FarBeforeNear { near: f32, far: f32 },
}

pub type CameraResult<T> = Result<T, CameraError>;

/// Configuration validation error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid camera settings: {0}")]
    Camera(#[from] CameraError),
    #[error("near plane distance must be non-negative, got {0}")]
    NegativeNearPlane(f32),
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} range is inverted: min {min} > max {max}")]
    InvertedRange { name: &'static str, min: f32, max: f32 },
    #[error("{name} {value} lies outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("elevation limits must stay strictly inside (-90, 90) degrees, got [{min}, {max}]")]
    ElevationReachesPole { min: f32, max: f32 },
    #[error("unknown orbit input token '{0}'")]
    UnknownInput(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for applications driving the globe.
#[derive(Error, Debug)]
pub enum GlobeError {
    #[error(transparent)]
    Mesh(#[from] MeshError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
