/// Procedural wheel meshes built from circular point rings
use nalgebra::Vector3;
use std::f32::consts::PI;

use crate::geometry::{Color, Edge, GeometryError, Shape, Vertex};

/// Parameters for the wheel assembly
#[derive(Debug, Clone)]
pub struct WheelSpec {
    pub radius: f32,
    pub count: usize,
    /// Ring centers. Consecutive pairs (0,1), (2,3), ... form one wheel.
    pub offsets: Vec<Vector3<f32>>,
}

impl Default for WheelSpec {
    fn default() -> Self {
        let axle_height = -0.25;
        let mut offsets = Vec::with_capacity(8);
        for z in [-0.7, 0.7] {
            for x in [0.3, 0.2, -0.3, -0.2] {
                offsets.push(Vector3::new(x, axle_height, z));
            }
        }

        Self {
            radius: 0.1,
            count: 10,
            offsets,
        }
    }
}

/// `count` points on a circle of `radius`, at angles 2πk/count in increasing order
pub fn ring(radius: f32, count: usize) -> Vec<(f32, f32)> {
    (0..count)
        .map(|k| {
            let angle = 2.0 * PI * k as f32 / count as f32;
            (angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}

/// One translated copy of the ring per offset, in the Y/Z plane
pub fn wheel_vertices(spec: &WheelSpec) -> Vec<Vertex> {
    let circle = ring(spec.radius, spec.count);
    spec.offsets
        .iter()
        .flat_map(|offset| {
            circle
                .iter()
                .map(move |&(u, v)| Vertex::new(offset.x, offset.y + u, offset.z + v))
        })
        .collect()
}

/// Edges for `rings` consecutive rings of `count` points each.
///
/// Every ring gets its closed outline. Each even ring is also joined to the
/// following ring point by point, plus one seam edge from its last point to
/// the first point of the next ring.
pub fn wheel_edges(count: usize, rings: usize) -> Vec<Edge> {
    if count == 0 {
        return Vec::new();
    }

    let mut edges = Vec::with_capacity(rings * count + rings.div_ceil(2) * (count + 1));

    for j in 0..rings {
        let start = j * count;
        let last = start + count - 1;
        let bridged = j % 2 == 0 && j + 1 < rings;

        for i in start..last {
            edges.push(Edge::new(i, i + 1));
            if bridged {
                edges.push(Edge::new(i, i + count));
            }
        }
        if bridged {
            edges.push(Edge::new(last, last + count));
            edges.push(Edge::new(last, last + 1));
        }
        edges.push(Edge::new(start, last));
    }

    edges
}

/// The black wheel assembly described by `spec`
pub fn wheels(spec: &WheelSpec) -> Result<Shape, GeometryError> {
    if spec.count == 0 {
        return Err(GeometryError::EmptyRing);
    }

    let vertices = wheel_vertices(spec);
    let edges = wheel_edges(spec.count, spec.offsets.len());
    log::debug!(
        "generated wheels: {} rings, {} vertices, {} edges",
        spec.offsets.len(),
        vertices.len(),
        edges.len()
    );

    Shape::new("wheels", vertices, edges, Color::BLACK)
}
