//! Cube-sphere mesh properties across subdivision levels.

use glam::Vec3;
use globe_engine::mesh::{self, CubeFace, Mesh};
use rstest::rstest;

fn triangle(mesh: &Mesh, tri: &[u32]) -> [Vec3; 3] {
    let at = |i: u32| mesh.position(i as usize).unwrap();
    [at(tri[0]), at(tri[1]), at(tri[2])]
}

#[rstest]
#[case::minimal(0)]
#[case::one(1)]
#[case::two(2)]
#[case::five(5)]
#[case::viewer_default(15)]
fn test_buffer_sizes(#[case] subdivisions: u32) {
    let mesh = mesh::build(subdivisions).unwrap();
    let n = subdivisions as usize + 2;

    assert_eq!(mesh.vertices().len(), 6 * n * n * 3);
    assert_eq!(mesh.indices().len(), 6 * (n - 1) * (n - 1) * 6);
    assert_eq!(mesh.vertices_per_side() as usize, n);
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(15)]
fn test_vertices_lie_on_unit_sphere(#[case] subdivisions: u32) {
    let mesh = mesh::build(subdivisions).unwrap();
    for (i, p) in mesh.positions().enumerate() {
        assert!((p.length() - 1.0).abs() < 1e-5, "vertex {i} has length {}", p.length());
    }
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(7)]
fn test_indices_stay_within_their_face(#[case] subdivisions: u32) {
    let mesh = mesh::build(subdivisions).unwrap();
    let n = subdivisions + 2;
    let per_face = n * n;

    assert!(mesh.indices().iter().all(|&i| i < 6 * per_face));
    for face in CubeFace::ALL {
        let first = face.ordinal() as u32 * per_face;
        let range = first..first + per_face;
        assert!(
            mesh.face_indices(face).iter().all(|i| range.contains(i)),
            "{face} face references another face's vertices"
        );
    }
}

#[rstest]
#[case(0)]
#[case(4)]
fn test_faces_wind_outward(#[case] subdivisions: u32) {
    let mesh = mesh::build(subdivisions).unwrap();
    for tri in mesh.indices().chunks_exact(3) {
        let [a, b, c] = triangle(&mesh, tri);
        let normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(normal.dot(centroid) > 0.0, "triangle {tri:?} faces inward");
    }
}

#[rstest]
#[case(1)]
#[case(6)]
fn test_faces_cover_their_cube_side(#[case] subdivisions: u32) {
    let mesh = mesh::build(subdivisions).unwrap();
    for face in CubeFace::ALL {
        let axis = face.normal();
        // Every vertex of a face lies in the pyramid over that cube side.
        for v in mesh.face_vertices(face).chunks_exact(3) {
            let p = Vec3::from_slice(v);
            assert!(p.dot(axis) + 1e-6 >= p.abs().max_element(), "{face}: {p}");
        }
    }
}

#[test]
fn test_build_is_deterministic() {
    let first = mesh::build(9).unwrap();
    let second = mesh::build(9).unwrap();

    assert_eq!(first.vertex_bytes(), second.vertex_bytes());
    assert_eq!(first.index_bytes(), second.index_bytes());
}

#[test]
fn test_minimal_mesh_has_two_triangles_per_face() {
    let mesh = mesh::build(0).unwrap();
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.index_count(), 36);
    for face in CubeFace::ALL {
        assert_eq!(mesh.face_vertices(face).len(), 4 * 3);
        assert_eq!(mesh.face_indices(face).len(), 6);
    }
}

#[test]
fn test_front_face_first_cell() {
    let mesh = mesh::build(1).unwrap();
    let k = 1.0 / 3.0_f32.sqrt();

    let first = mesh.position(0).unwrap();
    assert!(first.abs_diff_eq(Vec3::new(-k, -k, k), 1e-3));

    // Grid cells (0,0), (0,1), (1,1) of a 3x3 face.
    let front = mesh.face_indices(CubeFace::Front);
    assert_eq!(&front[..3], &[0, 1, 4]);
    assert_eq!(&front[3..6], &[0, 4, 3]);
}

#[test]
fn test_buffers_can_be_taken() {
    let mesh = mesh::build(2).unwrap();
    let expected_vertices = mesh.vertices().to_vec();
    let (vertices, indices) = mesh.into_buffers();

    assert_eq!(vertices, expected_vertices);
    assert_eq!(indices.len(), 6 * 3 * 3 * 6);
}
