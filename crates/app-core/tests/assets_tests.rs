use std::path::Path;

use app_core::{AssetError, EnvironmentMap, ModelMesh};

#[test]
fn generated_mesh_has_consistent_topology() {
    let mesh = ModelMesh::generate(16, 8, 1.0, |_| {});
    assert_eq!(mesh.vertices.len(), 17 * 9, "(sectors+1) * (stacks+1)");
    assert!(!mesh.indices.is_empty());
    assert_eq!(mesh.indices.len() % 3, 0, "indices must form triangles");

    let max_index = mesh.vertices.len() as u32;
    for &i in &mesh.indices {
        assert!(i < max_index, "index {i} out of bounds");
    }
}

#[test]
fn generated_mesh_normals_are_unit_length() {
    let mesh = ModelMesh::generate(24, 12, 2.0, |_| {});
    for v in &mesh.vertices {
        let [x, y, z] = v.normal;
        let len = (x * x + y * y + z * z).sqrt();
        assert!((len - 1.0).abs() < 1e-3, "normal length {len}");
    }
}

#[test]
fn generated_mesh_uvs_cover_the_unit_square() {
    let mesh = ModelMesh::generate(12, 6, 1.0, |_| {});
    for v in &mesh.vertices {
        assert!((0.0..=1.0).contains(&v.uv[0]));
        assert!((0.0..=1.0).contains(&v.uv[1]));
    }
}

#[test]
fn generation_reports_monotonic_progress_up_to_one() {
    let mut reported = Vec::new();
    ModelMesh::generate(8, 4, 1.0, |p| reported.push(p));
    assert!(!reported.is_empty());
    for pair in reported.windows(2) {
        assert!(pair[1] >= pair[0], "progress went backwards");
    }
    assert_eq!(*reported.last().unwrap(), 1.0);
}

#[test]
fn degenerate_resolution_is_clamped() {
    // below the minimum tessellation the generator still produces a mesh
    let mesh = ModelMesh::generate(1, 1, 1.0, |_| {});
    assert!(mesh.vertices.len() >= 4 * 3);
    assert!(!mesh.indices.is_empty());
}

#[test]
fn missing_environment_file_is_an_io_error() {
    let err = EnvironmentMap::load_png(Path::new("definitely/not/here.png"), |_| {})
        .expect_err("load must fail");
    assert!(matches!(err, AssetError::Io(_)), "got {err:?}");
}

#[test]
fn undecodable_environment_file_is_a_decode_error() {
    let path = std::env::temp_dir().join("glitch_viewer_bogus_env.png");
    std::fs::write(&path, b"this is not a png").expect("temp write");
    let err = EnvironmentMap::load_png(&path, |_| {}).expect_err("decode must fail");
    assert!(matches!(err, AssetError::Decode(_)), "got {err:?}");
    let _ = std::fs::remove_file(&path);
}
