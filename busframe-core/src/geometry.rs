/// Geometry primitives for wireframe rendering
use nalgebra::Point3;
use thiserror::Error;

/// A model-space vertex
pub type Vertex = Point3<f32>;

/// Errors raised while assembling shapes
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("edge {edge} of shape `{shape}` references vertex {index}, but the shape has {len} vertices")]
    EdgeOutOfRange {
        shape: &'static str,
        edge: usize,
        index: usize,
        len: usize,
    },
    #[error("a ring needs at least one point")]
    EmptyRing,
}

/// An undirected line segment between two vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    pub fn touches(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

/// An RGBA color with normalized components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A wireframe shape: vertices, the edges between them and a draw color
#[derive(Debug, Clone)]
pub struct Shape {
    name: &'static str,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    color: Color,
}

impl Shape {
    /// Build a shape, rejecting any edge that points past the vertex list
    pub fn new(
        name: &'static str,
        vertices: Vec<Vertex>,
        edges: Vec<Edge>,
        color: Color,
    ) -> Result<Self, GeometryError> {
        let len = vertices.len();
        for (i, edge) in edges.iter().enumerate() {
            for index in [edge.a, edge.b] {
                if index >= len {
                    return Err(GeometryError::EdgeOutOfRange {
                        shape: name,
                        edge: i,
                        index,
                        len,
                    });
                }
            }
        }

        Ok(Self {
            name,
            vertices,
            edges,
            color,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Endpoint pairs in edge-sequence order
    pub fn segments(&self) -> impl Iterator<Item = (&Vertex, &Vertex)> + '_ {
        self.edges
            .iter()
            .map(move |edge| (&self.vertices[edge.a], &self.vertices[edge.b]))
    }

    /// Number of edges touching the given vertex
    pub fn degree(&self, index: usize) -> usize {
        self.edges.iter().filter(|edge| edge.touches(index)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Vertex> {
        vec![
            Vertex::new(0.0, 0.0, 0.0),
            Vertex::new(1.0, 0.0, 0.0),
            Vertex::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_shape_rejects_out_of_range_edge() {
        let result = Shape::new(
            "tri",
            triangle(),
            vec![Edge::new(0, 1), Edge::new(1, 3)],
            Color::RED,
        );
        assert_eq!(
            result.unwrap_err(),
            GeometryError::EdgeOutOfRange {
                shape: "tri",
                edge: 1,
                index: 3,
                len: 3,
            }
        );
    }

    #[test]
    fn test_segments_follow_edge_order() {
        let shape = Shape::new(
            "tri",
            triangle(),
            vec![Edge::new(2, 0), Edge::new(0, 1)],
            Color::BLUE,
        )
        .unwrap();

        let segments: Vec<_> = shape.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(*segments[0].0, Vertex::new(0.0, 1.0, 0.0));
        assert_eq!(*segments[1].1, Vertex::new(1.0, 0.0, 0.0));
        assert_eq!(shape.degree(0), 2);
        assert_eq!(shape.degree(2), 1);
    }

    #[test]
    fn test_color_array() {
        assert_eq!(Color::BLUE.to_array(), [0.0, 0.0, 1.0, 1.0]);
    }
}
