//! Wireframe line-list meshes for the floating shapes.
//!
//! Each mesh is a vertex list plus index pairs, ready to upload as a
//! line-list vertex/index buffer. The polyhedra derive their edges from the
//! canonical vertex sets by shortest-pair scan, so edge counts stay honest
//! (tetrahedron 6, octahedron 12, icosahedron 30).

use glam::Vec3;

use crate::scene::ShapeKind;

pub struct WireMesh {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[u16; 2]>,
}

impl WireMesh {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Build the mesh for a shape at its fixed display size.
pub fn wire_mesh(kind: ShapeKind) -> WireMesh {
    match kind {
        ShapeKind::Torus => torus(3.0, 1.0, 16, 100),
        ShapeKind::Octahedron => octahedron(2.0),
        ShapeKind::Icosahedron => icosahedron(2.0),
        ShapeKind::Tetrahedron => tetrahedron(2.5),
    }
}

/// Parametric torus grid with edges along both the ring and tube directions.
pub fn torus(radius: f32, tube: f32, radial_segments: u16, tubular_segments: u16) -> WireMesh {
    let tau = std::f32::consts::TAU;
    let mut vertices = Vec::with_capacity(radial_segments as usize * tubular_segments as usize);
    for j in 0..tubular_segments {
        let theta = j as f32 / tubular_segments as f32 * tau;
        for i in 0..radial_segments {
            let phi = i as f32 / radial_segments as f32 * tau;
            let ring = radius + tube * phi.cos();
            vertices.push(Vec3::new(
                ring * theta.cos(),
                ring * theta.sin(),
                tube * phi.sin(),
            ));
        }
    }
    let index = |j: u16, i: u16| j as usize * radial_segments as usize + i as usize;
    let mut edges = Vec::with_capacity(vertices.len() * 2);
    for j in 0..tubular_segments {
        let j_next = (j + 1) % tubular_segments;
        for i in 0..radial_segments {
            let i_next = (i + 1) % radial_segments;
            edges.push([index(j, i) as u16, index(j, i_next) as u16]);
            edges.push([index(j, i) as u16, index(j_next, i) as u16]);
        }
    }
    WireMesh { vertices, edges }
}

pub fn octahedron(radius: f32) -> WireMesh {
    let vertices = vec![
        Vec3::new(radius, 0.0, 0.0),
        Vec3::new(-radius, 0.0, 0.0),
        Vec3::new(0.0, radius, 0.0),
        Vec3::new(0.0, -radius, 0.0),
        Vec3::new(0.0, 0.0, radius),
        Vec3::new(0.0, 0.0, -radius),
    ];
    let edges = shortest_pair_edges(&vertices);
    WireMesh { vertices, edges }
}

pub fn icosahedron(radius: f32) -> WireMesh {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let raw = [
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, 1.0),
    ];
    let vertices: Vec<Vec3> = raw.iter().map(|v| v.normalize() * radius).collect();
    let edges = shortest_pair_edges(&vertices);
    WireMesh { vertices, edges }
}

pub fn tetrahedron(radius: f32) -> WireMesh {
    let raw = [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
    ];
    let vertices: Vec<Vec3> = raw.iter().map(|v| v.normalize() * radius).collect();
    let edges = shortest_pair_edges(&vertices);
    WireMesh { vertices, edges }
}

/// Edges of a regular polyhedron are exactly the vertex pairs at the minimum
/// pairwise distance.
fn shortest_pair_edges(vertices: &[Vec3]) -> Vec<[u16; 2]> {
    let mut min_dist = f32::MAX;
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            min_dist = min_dist.min(vertices[i].distance(vertices[j]));
        }
    }
    let tolerance = min_dist * 1e-3;
    let mut edges = Vec::new();
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if (vertices[i].distance(vertices[j]) - min_dist).abs() <= tolerance {
                edges.push([i as u16, j as u16]);
            }
        }
    }
    edges
}
