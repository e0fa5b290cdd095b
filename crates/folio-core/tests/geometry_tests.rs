// Host-side tests for the wireframe meshes.

use folio_core::geometry::{icosahedron, octahedron, tetrahedron, torus, wire_mesh};
use folio_core::scene::ShapeKind;

#[test]
fn polyhedra_have_the_canonical_edge_counts() {
    assert_eq!(tetrahedron(2.5).edge_count(), 6);
    assert_eq!(octahedron(2.0).edge_count(), 12);
    assert_eq!(icosahedron(2.0).edge_count(), 30);
}

#[test]
fn polyhedra_vertices_sit_on_their_sphere() {
    for mesh in [tetrahedron(2.5), icosahedron(2.0)] {
        let radius = mesh.vertices[0].length();
        for v in &mesh.vertices {
            assert!((v.length() - radius).abs() < 1e-4);
        }
    }
}

#[test]
fn torus_grid_dimensions() {
    let mesh = torus(3.0, 1.0, 16, 100);
    assert_eq!(mesh.vertices.len(), 16 * 100);
    // Two edges per grid vertex: one along the ring, one along the tube.
    assert_eq!(mesh.edge_count(), 16 * 100 * 2);
}

#[test]
fn torus_vertices_lie_on_the_tube_surface() {
    let mesh = torus(3.0, 1.0, 16, 100);
    for v in &mesh.vertices {
        // Distance from the ring circle (radius 3 in the xy plane) must be
        // the tube radius.
        let ring_dist = (v.x * v.x + v.y * v.y).sqrt() - 3.0;
        let tube_dist = (ring_dist * ring_dist + v.z * v.z).sqrt();
        assert!((tube_dist - 1.0).abs() < 1e-4, "off-surface vertex: {v:?}");
    }
}

#[test]
fn edge_indices_stay_in_range() {
    for kind in ShapeKind::ALL {
        let mesh = wire_mesh(kind);
        let len = mesh.vertices.len() as u16;
        for edge in &mesh.edges {
            assert!(edge[0] < len && edge[1] < len);
            assert_ne!(edge[0], edge[1]);
        }
    }
}
