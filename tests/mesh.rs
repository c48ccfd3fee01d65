use hemesh::error::BuildDiagnostic;
use hemesh::mesh::{CoordLayout, Mesh};

fn single_triangle() -> Mesh<f64> {
    let mut mesh = Mesh::new();
    let coords = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let report = mesh.build(&coords, CoordLayout::Xyz, &[0, 1, 2]);
    assert!(report.is_clean());
    mesh
}

fn unit_square() -> Mesh<f64> {
    // Unit square split along the 0-2 diagonal.
    let mut mesh = Mesh::new();
    let coords = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        1.0, 1.0, 0.0, //
        0.0, 1.0, 0.0,
    ];
    let report = mesh.build(&coords, CoordLayout::Xyz, &[0, 1, 2, 0, 2, 3]);
    assert!(report.is_clean());
    mesh
}

#[test]
fn test_single_triangle_tables() {
    let mesh = single_triangle();

    assert!(mesh.is_ready());
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.half_edge_count(), 3);
    assert_eq!(mesh.face_count(), 1);

    // A lone triangle is pure boundary.
    for he in &mesh.half_edges {
        assert!(he.opposite.is_none());
    }
    assert!(mesh.validate());
}

#[test]
fn test_face_cycle_period_three() {
    let mesh = unit_square();

    for he in 0..mesh.half_edge_count() {
        let n1 = mesh.half_edges[he].next;
        let n2 = mesh.half_edges[n1].next;
        let n3 = mesh.half_edges[n2].next;
        assert_eq!(n3, he);
        assert_ne!(n1, he);
    }
}

#[test]
fn test_half_edge_face_ratio() {
    assert_eq!(single_triangle().half_edge_count(), 3);
    assert_eq!(unit_square().half_edge_count(), 6);
    assert_eq!(unit_square().half_edge_count(), 3 * unit_square().face_count());
}

#[test]
fn test_single_triangle_buffers() {
    let mesh = single_triangle();
    let buffers = mesh.render_buffers();

    assert_eq!(buffers.indices, vec![0, 1, 2]);
    assert_eq!(buffers.positions.len(), 12);
    assert_eq!(buffers.normals.len(), 12);
    assert_eq!(buffers.scalars.len(), 3);

    // w components: 1 on positions, 0 on normals.
    for v in 0..3 {
        assert_eq!(buffers.positions[4 * v + 3], 1.0);
        assert_eq!(buffers.normals[4 * v + 3], 0.0);
    }

    // CCW triangle in the z = 0 plane accumulates (0, 0, 1) everywhere.
    for v in 0..3 {
        assert_eq!(buffers.normals[4 * v], 0.0);
        assert_eq!(buffers.normals[4 * v + 1], 0.0);
        assert_eq!(buffers.normals[4 * v + 2], 1.0);
    }
}

#[test]
fn test_scalar_attribute_is_index_over_count() {
    let mesh = unit_square();
    let buffers = mesh.render_buffers();
    assert_eq!(buffers.scalars, vec![0.0, 0.25, 0.5, 0.75]);
}

#[test]
fn test_square_pairs_exactly_the_diagonal() {
    let mesh = unit_square();

    let paired: Vec<usize> = (0..mesh.half_edge_count())
        .filter(|&he| mesh.half_edges[he].opposite.is_some())
        .collect();
    assert_eq!(paired.len(), 2, "only the shared diagonal pairs");

    let (a, b) = (paired[0], paired[1]);
    assert_eq!(mesh.half_edges[a].opposite, Some(b));
    assert_eq!(mesh.half_edges[b].opposite, Some(a));

    // Both sides span the 0-2 diagonal.
    let (u, v) = mesh.edge_endpoints(a);
    assert_eq!((u.min(v), u.max(v)), (0, 2));
    let (u, v) = mesh.edge_endpoints(b);
    assert_eq!((u.min(v), u.max(v)), (0, 2));

    // The four perimeter half-edges stay open.
    let boundary = (0..mesh.half_edge_count())
        .filter(|&he| mesh.is_boundary_half_edge(he))
        .count();
    assert_eq!(boundary, 4);

    assert!(mesh.validate());
}

#[test]
fn test_square_accumulated_normals() {
    let mesh = unit_square();

    // Both faces contribute (0, 0, 1); the diagonal vertices see both.
    let expected_z = [2.0, 1.0, 2.0, 1.0];
    for (v, &z) in expected_z.iter().enumerate() {
        let n = mesh.vertices[v].normal;
        assert_eq!((n.x, n.y, n.z, n.w), (0.0, 0.0, z, 0.0));
    }
}

#[test]
fn test_out_of_range_triangle_is_skipped() {
    let mut mesh = Mesh::new();
    let coords = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        1.0, 1.0, 0.0, //
        0.0, 1.0, 0.0,
    ];
    let report = mesh.build(&coords, CoordLayout::Xyz, &[0, 1, 2, 0, 1, 99]);

    assert_eq!(report.skipped_triangles(), 1);
    assert_eq!(
        report.diagnostics,
        vec![BuildDiagnostic::VertexIndexOutOfRange {
            triangle: 1,
            vertex: 99,
            vertex_count: 4,
        }]
    );

    // The valid triangle still built.
    assert!(mesh.is_ready());
    assert_eq!(mesh.face_count(), 1);
    assert_eq!(mesh.half_edge_count(), 3);
    assert!(mesh.validate());
}

#[test]
fn test_all_triangles_invalid_leaves_mesh_unready() {
    let mut mesh = Mesh::new();
    let coords = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let report = mesh.build(&coords, CoordLayout::Xyz, &[7, 8, 9]);

    assert_eq!(report.skipped_triangles(), 1);
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.face_count(), 0);
    assert!(!mesh.is_ready());
}

#[test]
fn test_empty_input_is_not_an_error() {
    let mut mesh = Mesh::<f64>::new();
    let report = mesh.build(&[], CoordLayout::Xyz, &[]);

    assert!(report.is_clean());
    assert!(!mesh.is_ready());

    let buffers = mesh.render_buffers();
    assert!(buffers.positions.is_empty());
    assert!(buffers.scalars.is_empty());
    assert!(buffers.normals.is_empty());
    assert!(buffers.indices.is_empty());

    assert!(mesh.star(0).is_empty());
}

#[test]
fn test_rebuild_replaces_everything() {
    let mut mesh = Mesh::new();
    let coords = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    mesh.build(&coords, CoordLayout::Xyz, &[0, 1, 2]);

    // Rebuild with the square input; nothing of the triangle survives.
    let square = unit_square();
    let coords = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        1.0, 1.0, 0.0, //
        0.0, 1.0, 0.0,
    ];
    mesh.build(&coords, CoordLayout::Xyz, &[0, 1, 2, 0, 2, 3]);

    assert_eq!(mesh.vertex_count(), square.vertex_count());
    assert_eq!(mesh.half_edges, square.half_edges);
    assert_eq!(mesh.faces, square.faces);
}

#[test]
fn test_rebuild_is_idempotent() {
    let mut mesh = Mesh::new();
    let coords = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        1.0, 1.0, 0.0, //
        0.0, 1.0, 0.0,
    ];
    let triangles = [0, 1, 2, 0, 2, 3];

    mesh.build(&coords, CoordLayout::Xyz, &triangles);
    let first_half_edges = mesh.half_edges.clone();
    let first_faces = mesh.faces.clone();
    let first_reps: Vec<Option<usize>> = mesh.vertices.iter().map(|v| v.half_edge).collect();

    mesh.build(&coords, CoordLayout::Xyz, &triangles);
    let second_reps: Vec<Option<usize>> = mesh.vertices.iter().map(|v| v.half_edge).collect();

    assert_eq!(mesh.half_edges, first_half_edges);
    assert_eq!(mesh.faces, first_faces);
    assert_eq!(second_reps, first_reps);
}

#[test]
fn test_xyzw_layout_keeps_supplied_w() {
    let mut mesh = Mesh::new();
    let coords = [
        0.0, 0.0, 0.0, 2.5, //
        1.0, 0.0, 0.0, 1.0, //
        0.0, 1.0, 0.0, 1.0,
    ];
    let report = mesh.build(&coords, CoordLayout::Xyzw, &[0, 1, 2]);

    assert!(report.is_clean());
    assert_eq!(mesh.vertices[0].position.w, 2.5);
    assert_eq!(mesh.vertices[1].position.w, 1.0);
    assert_eq!(mesh.render_buffers().positions[3], 2.5);
}

#[test]
fn test_trailing_coordinates_reported() {
    let mut mesh = Mesh::new();
    // 10 values: three full xyz groups plus one orphan.
    let coords = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 9.0];
    let report = mesh.build(&coords, CoordLayout::Xyz, &[0, 1, 2]);

    assert_eq!(
        report.diagnostics,
        vec![BuildDiagnostic::TrailingCoordinates { count: 1, group: 3 }]
    );
    assert_eq!(mesh.vertex_count(), 3);
    assert!(mesh.is_ready());
}

#[test]
fn test_trailing_indices_reported() {
    let mut mesh = Mesh::new();
    let coords = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let report = mesh.build(&coords, CoordLayout::Xyz, &[0, 1, 2, 0]);

    assert_eq!(
        report.diagnostics,
        vec![BuildDiagnostic::TrailingIndices { count: 1 }]
    );
    assert_eq!(mesh.face_count(), 1);
}

#[test]
fn test_non_manifold_edge_pairs_first_two_only() {
    // Three triangles share the 0-1 edge.
    let mut mesh = Mesh::new();
    let coords = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        0.5, 1.0, 0.0, //
        0.5, -1.0, 0.0, //
        0.5, 0.0, 1.0,
    ];
    let report = mesh.build(&coords, CoordLayout::Xyz, &[0, 1, 2, 1, 0, 3, 1, 0, 4]);
    assert!(report.is_clean(), "non-manifold input is not a diagnostic");

    // First two sightings of the 0-1 key pair up; the third stays open.
    assert_eq!(mesh.half_edges[0].opposite, Some(3));
    assert_eq!(mesh.half_edges[3].opposite, Some(0));
    assert_eq!(mesh.half_edges[6].opposite, None);

    let paired = mesh
        .half_edges
        .iter()
        .filter(|he| he.opposite.is_some())
        .count();
    assert_eq!(paired, 2);

    assert!(mesh.validate());
}

#[test]
fn test_works_with_f32() {
    let mut mesh = Mesh::<f32>::new();
    let coords = [0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let report = mesh.build(&coords, CoordLayout::Xyz, &[0, 1, 2]);

    assert!(report.is_clean());
    assert!(mesh.is_ready());
    assert_eq!(mesh.render_buffers().indices, vec![0, 1, 2]);
}
