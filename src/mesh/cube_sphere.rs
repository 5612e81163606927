//! Cube-sphere builder.
//!
//! Sizes the shared buffers, carves them into six disjoint face slices and
//! generates every face on its own thread via [`std::thread::scope`]. The
//! scope joins all six workers before the mesh is handed out, so nobody can
//! observe a partially built buffer. On WASM, where threads are unavailable,
//! the faces are generated one after another.

use super::face::{generate_face, CubeFace, FaceLayout};
use super::Mesh;
use crate::error::{MeshError, MeshResult};

/// Vertices per cube-face side for a subdivision count (`subdivisions + 2`).
pub fn vertices_per_side(subdivisions: u32) -> MeshResult<u32> {
    subdivisions
        .checked_add(2)
        .ok_or(MeshError::SubdivisionOverflow(subdivisions))
}

/// Build a unit cube-sphere with `subdivisions` extra grid lines per face.
///
/// The result holds `6 * n * n` vertices and `6 * (n - 1)^2 * 2` triangles
/// with `n = subdivisions + 2`. The build is deterministic: the same input
/// always yields bit-identical buffers.
///
/// Vertex and index counts grow quadratically; anything beyond a few dozen
/// subdivisions is rarely useful for a globe.
pub fn build(subdivisions: u32) -> MeshResult<Mesh> {
    let n = vertices_per_side(subdivisions)?;
    let layout = FaceLayout::new(n);

    // Indices are u32, so every vertex must stay addressable.
    let vertex_count = 6 * u64::from(n) * u64::from(n);
    if vertex_count > u64::from(u32::MAX) + 1 {
        return Err(MeshError::TooManyVertices {
            subdivisions,
            vertex_count,
        });
    }

    let mut vertices = vec![0.0_f32; layout.total_floats()];
    let mut indices = vec![0_u32; layout.total_indices()];

    log::debug!(
        "Building cube-sphere: {} subdivisions, {} vertices, {} indices",
        subdivisions,
        layout.total_vertices(),
        layout.total_indices()
    );

    generate_faces(layout, &mut vertices, &mut indices);

    Ok(Mesh::from_parts(vertices, indices, layout))
}

/// Split both buffers into per-face slices in [`CubeFace::ALL`] order.
fn face_slices<'a>(
    layout: FaceLayout,
    vertices: &'a mut [f32],
    indices: &'a mut [u32],
) -> impl Iterator<Item = (CubeFace, &'a mut [f32], &'a mut [u32])> {
    CubeFace::ALL
        .into_iter()
        .zip(vertices.chunks_exact_mut(layout.floats_per_face()))
        .zip(indices.chunks_exact_mut(layout.indices_per_face()))
        .map(|((face, v), i)| (face, v, i))
}

#[cfg(not(target_arch = "wasm32"))]
fn generate_faces(layout: FaceLayout, vertices: &mut [f32], indices: &mut [u32]) {
    std::thread::scope(|scope| {
        for (face, face_vertices, face_indices) in face_slices(layout, vertices, indices) {
            // Each worker owns a disjoint &mut slice, so no locking is needed.
            scope.spawn(move || {
                generate_face(face, layout, face_vertices, face_indices);
                log::trace!("Generated {} face", face);
            });
        }
    });
}

/// WASM fallback: sequential generation (no threads available).
#[cfg(target_arch = "wasm32")]
fn generate_faces(layout: FaceLayout, vertices: &mut [f32], indices: &mut [u32]) {
    for (face, face_vertices, face_indices) in face_slices(layout, vertices, indices) {
        generate_face(face, layout, face_vertices, face_indices);
        log::trace!("Generated {} face", face);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_per_side() {
        assert_eq!(vertices_per_side(0), Ok(2));
        assert_eq!(vertices_per_side(15), Ok(17));
        assert_eq!(
            vertices_per_side(u32::MAX),
            Err(MeshError::SubdivisionOverflow(u32::MAX))
        );
    }

    #[test]
    fn test_build_minimal() {
        let mesh = build(0).unwrap();
        // 6 faces * 4 vertices, 6 faces * 2 triangles
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_build_sizes() {
        let mesh = build(3).unwrap();
        let n = 5;
        assert_eq!(mesh.vertices().len(), 6 * n * n * 3);
        assert_eq!(mesh.indices().len(), 6 * (n - 1) * (n - 1) * 6);
    }

    #[test]
    fn test_build_rejects_unaddressable_vertex_count() {
        let err = build(30_000).unwrap_err();
        assert_eq!(
            err,
            MeshError::TooManyVertices {
                subdivisions: 30_000,
                vertex_count: 5_400_720_024,
            }
        );
    }

    #[test]
    fn test_every_face_slice_is_written() {
        let mesh = build(1).unwrap();
        for face in CubeFace::ALL {
            // Zero-initialized slices would contain zero-length vertices.
            assert!(mesh
                .face_vertices(face)
                .chunks_exact(3)
                .all(|v| v.iter().any(|c| *c != 0.0)));
        }
    }
}
