//! Cube faces and the per-face grid generator.
//!
//! Each face is a flat `n x n` grid on the cube `[-0.5, 0.5]^3`, pushed onto
//! the unit sphere by normalizing every grid point. A face only ever touches
//! its own slice of the shared buffers, which is what lets the six faces be
//! generated concurrently.

use glam::Vec3;

/// One of the six faces of the cube, in buffer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    /// +Z
    Front,
    /// -Z
    Back,
    /// -X
    Left,
    /// +X
    Right,
    /// +Y
    Top,
    /// -Y
    Bottom,
}

impl CubeFace {
    /// All faces, ordered by ordinal (the order of their buffer slices).
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Front,
        CubeFace::Back,
        CubeFace::Left,
        CubeFace::Right,
        CubeFace::Top,
        CubeFace::Bottom,
    ];

    /// Position of this face's slice in the shared buffers (0..6).
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            CubeFace::Front => "front",
            CubeFace::Back => "back",
            CubeFace::Left => "left",
            CubeFace::Right => "right",
            CubeFace::Top => "top",
            CubeFace::Bottom => "bottom",
        }
    }

    /// Outward unit normal of the flat cube face.
    pub fn normal(self) -> Vec3 {
        match self {
            CubeFace::Front => Vec3::Z,
            CubeFace::Back => Vec3::NEG_Z,
            CubeFace::Left => Vec3::NEG_X,
            CubeFace::Right => Vec3::X,
            CubeFace::Top => Vec3::Y,
            CubeFace::Bottom => Vec3::NEG_Y,
        }
    }

    /// Point on the cube surface for grid cell `(i, j)` before normalization.
    ///
    /// Column `j` and row `i` drive the two free axes; the face's normal axis
    /// is pinned at `±0.5`. Back, Right and Top run their `j` axis in reverse
    /// so that every face is wound counter-clockwise when seen from outside.
    pub fn cube_point(self, i: u32, j: u32, step: f32) -> Vec3 {
        let along_j = j as f32 * step - 0.5;
        let against_j = (1.0 - j as f32 * step) - 0.5;
        let along_i = i as f32 * step - 0.5;

        match self {
            CubeFace::Front => Vec3::new(along_j, along_i, 0.5),
            CubeFace::Back => Vec3::new(against_j, along_i, -0.5),
            CubeFace::Left => Vec3::new(-0.5, along_i, along_j),
            CubeFace::Right => Vec3::new(0.5, along_i, against_j),
            CubeFace::Top => Vec3::new(against_j, 0.5, along_i),
            CubeFace::Bottom => Vec3::new(along_j, -0.5, along_i),
        }
    }
}

impl std::fmt::Display for CubeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed-form sizes and offsets of the six face slices.
///
/// Slice `k` of the vertex buffer starts at `k * n * n * 3` floats and slice
/// `k` of the index buffer at `k * (n - 1) * (n - 1) * 6` indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceLayout {
    vertices_per_side: u32,
}

impl FaceLayout {
    /// # Panics
    ///
    /// Panics if `vertices_per_side < 2`; a one-vertex grid has no step size.
    pub fn new(vertices_per_side: u32) -> Self {
        assert!(
            vertices_per_side >= 2,
            "a cube face needs at least 2 vertices per side, got {vertices_per_side}"
        );
        Self { vertices_per_side }
    }

    pub fn vertices_per_side(&self) -> u32 {
        self.vertices_per_side
    }

    /// Grid step along either free axis of a face.
    pub fn step(&self) -> f32 {
        1.0 / (self.vertices_per_side - 1) as f32
    }

    pub fn vertices_per_face(&self) -> usize {
        let n = self.vertices_per_side as usize;
        n * n
    }

    pub fn floats_per_face(&self) -> usize {
        self.vertices_per_face() * 3
    }

    pub fn quads_per_face(&self) -> usize {
        let cells = self.vertices_per_side as usize - 1;
        cells * cells
    }

    pub fn indices_per_face(&self) -> usize {
        self.quads_per_face() * 6
    }

    pub fn total_vertices(&self) -> usize {
        self.vertices_per_face() * CubeFace::ALL.len()
    }

    pub fn total_floats(&self) -> usize {
        self.floats_per_face() * CubeFace::ALL.len()
    }

    pub fn total_indices(&self) -> usize {
        self.indices_per_face() * CubeFace::ALL.len()
    }

    /// Offset (in floats) of the face's slice in the vertex buffer.
    pub fn vertex_offset(&self, face: CubeFace) -> usize {
        face.ordinal() * self.floats_per_face()
    }

    /// Offset (in indices) of the face's slice in the index buffer.
    pub fn index_offset(&self, face: CubeFace) -> usize {
        face.ordinal() * self.indices_per_face()
    }

    /// Index of the face's first vertex, i.e. `vertex_offset / 3`.
    ///
    /// Callers must ensure [`total_vertices`](Self::total_vertices) fits in `u32`.
    pub fn base_vertex(&self, face: CubeFace) -> u32 {
        (face.ordinal() * self.vertices_per_face()) as u32
    }
}

/// Fill one face's slices of the vertex and index buffers.
///
/// `vertices` and `indices` are exactly the face's own slices (see
/// [`FaceLayout`]); indices are still absolute, offset by the face's base
/// vertex. Vertex `(i, j)` lands at `3 * (i * n + j)` and the two triangles of
/// cell `(i, j)` at `6 * (i * (n - 1) + j)`.
///
/// # Panics
///
/// Panics if the slice lengths disagree with `layout`.
pub fn generate_face(face: CubeFace, layout: FaceLayout, vertices: &mut [f32], indices: &mut [u32]) {
    assert_eq!(
        vertices.len(),
        layout.floats_per_face(),
        "vertex slice of the {face} face has the wrong length"
    );
    assert_eq!(
        indices.len(),
        layout.indices_per_face(),
        "index slice of the {face} face has the wrong length"
    );

    let n = layout.vertices_per_side();
    let step = layout.step();

    for i in 0..n {
        for j in 0..n {
            let point = face.cube_point(i, j, step).normalize();
            let at = 3 * (i * n + j) as usize;
            vertices[at..at + 3].copy_from_slice(&point.to_array());
        }
    }

    // Connectivity only depends on the grid, not on the projected positions.
    let base = layout.base_vertex(face);
    for i in 0..n - 1 {
        for j in 0..n - 1 {
            let p00 = base + i * n + j;
            let p01 = p00 + 1;
            let p10 = p00 + n;
            let p11 = p10 + 1;

            let at = 6 * (i * (n - 1) + j) as usize;
            indices[at..at + 6].copy_from_slice(&[p00, p01, p11, p00, p11, p10]);
        }
    }
}
