//! CPU-side cube-sphere mesh.
//!
//! - [`Mesh`] - immutable vertex/index buffers ready for upload
//! - [`CubeFace`] / [`FaceLayout`] - the six face slices and their offsets
//! - [`build`] - parallel cube-sphere builder
//!
//! Vertices are tightly packed positions (three `f32` per vertex, no other
//! attributes); indices form a `u32` triangle list.

mod cube_sphere;
mod face;

pub use cube_sphere::{build, vertices_per_side};
pub use face::{generate_face, CubeFace, FaceLayout};

use glam::Vec3;

/// Number of `f32` components per vertex.
pub const FLOATS_PER_VERTEX: usize = 3;

/// Byte stride of one vertex in [`Mesh::vertex_bytes`].
pub const VERTEX_STRIDE: usize = FLOATS_PER_VERTEX * std::mem::size_of::<f32>();

/// Primitive topology the renderer should draw the index buffer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    /// Every two indices form a line.
    LineList,
    /// Every three indices form a triangle.
    #[default]
    TriangleList,
}

impl PrimitiveTopology {
    pub fn vertices_per_primitive(&self) -> u32 {
        match self {
            Self::LineList => 2,
            Self::TriangleList => 3,
        }
    }
}

/// A built cube-sphere: flat position buffer plus triangle-list indices.
///
/// Never mutated after [`build`] returns. Every vertex lies on the unit
/// sphere, so a renderer may reuse positions as normals.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<f32>,
    indices: Vec<u32>,
    layout: FaceLayout,
}

impl Mesh {
    pub(crate) fn from_parts(vertices: Vec<f32>, indices: Vec<u32>, layout: FaceLayout) -> Self {
        debug_assert_eq!(vertices.len(), layout.total_floats());
        debug_assert_eq!(indices.len(), layout.total_indices());
        Self {
            vertices,
            indices,
            layout,
        }
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Hand the raw buffers to the caller.
    pub fn into_buffers(self) -> (Vec<f32>, Vec<u32>) {
        (self.vertices, self.indices)
    }

    pub fn layout(&self) -> FaceLayout {
        self.layout
    }

    pub fn vertices_per_side(&self) -> u32 {
        self.layout.vertices_per_side()
    }

    /// Subdivision count the mesh was built with (`vertices_per_side - 2`).
    pub fn subdivisions(&self) -> u32 {
        self.layout.vertices_per_side() - 2
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / FLOATS_PER_VERTEX
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of vertex `index`, or `None` if out of range.
    pub fn position(&self, index: usize) -> Option<Vec3> {
        let at = index.checked_mul(FLOATS_PER_VERTEX)?;
        let end = at.checked_add(FLOATS_PER_VERTEX)?;
        self.vertices.get(at..end).map(Vec3::from_slice)
    }

    /// Normal of vertex `index`; identical to its position on a unit sphere.
    pub fn normal(&self, index: usize) -> Option<Vec3> {
        self.position(index)
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices
            .chunks_exact(FLOATS_PER_VERTEX)
            .map(Vec3::from_slice)
    }

    /// The face's slice of the vertex buffer.
    pub fn face_vertices(&self, face: CubeFace) -> &[f32] {
        let start = self.layout.vertex_offset(face);
        &self.vertices[start..start + self.layout.floats_per_face()]
    }

    /// The face's slice of the index buffer.
    pub fn face_indices(&self, face: CubeFace) -> &[u32] {
        let start = self.layout.index_offset(face);
        &self.indices[start..start + self.layout.indices_per_face()]
    }

    /// Get vertex data as bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Get index data as bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
