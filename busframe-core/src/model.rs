/// The bus model: body and window tables plus the generated wheels
use crate::geometry::{Color, Edge, GeometryError, Shape, Vertex};
use crate::wheels::{wheels, WheelSpec};

const BODY_VERTICES: [[f32; 3]; 10] = [
    [0.25, -0.25, -1.0],
    [0.25, 0.25, -1.0],
    [-0.25, 0.25, -1.0],
    [-0.25, -0.25, -1.0],
    [0.25, -0.25, 1.0],
    [0.25, 0.25, 0.9],
    [-0.25, -0.25, 1.0],
    [-0.25, 0.25, 0.9],
    [-0.25, -0.10, 1.0],
    [0.25, -0.10, 1.0],
];

const BODY_EDGES: [(usize, usize); 14] = [
    (0, 1),
    (0, 3),
    (0, 4),
    (4, 9),
    (2, 1),
    (2, 3),
    (2, 7),
    (6, 3),
    (6, 4),
    (6, 8),
    (8, 7),
    (5, 1),
    (5, 9),
    (5, 7),
];

// Sits on the slanted front between the bumper line and the roof
const WINDOW_VERTICES: [[f32; 3]; 4] = [
    [0.2, 0.2, 0.92],
    [0.2, -0.10, 1.0],
    [-0.2, -0.10, 1.0],
    [-0.2, 0.2, 0.92],
];

const WINDOW_EDGES: [(usize, usize); 4] = [(0, 1), (1, 2), (2, 3), (3, 0)];

fn table_shape(
    name: &'static str,
    vertices: &[[f32; 3]],
    edges: &[(usize, usize)],
    color: Color,
) -> Result<Shape, GeometryError> {
    Shape::new(
        name,
        vertices.iter().map(|&[x, y, z]| Vertex::new(x, y, z)).collect(),
        edges.iter().copied().map(Edge::from).collect(),
        color,
    )
}

/// The red body outline
pub fn body() -> Result<Shape, GeometryError> {
    table_shape("body", &BODY_VERTICES, &BODY_EDGES, Color::RED)
}

/// The blue front window
pub fn window() -> Result<Shape, GeometryError> {
    table_shape("window", &WINDOW_VERTICES, &WINDOW_EDGES, Color::BLUE)
}

/// All geometry of the scene, built once at startup and never mutated
#[derive(Debug, Clone)]
pub struct BusModel {
    pub body: Shape,
    pub wheels: Shape,
    pub window: Shape,
}

impl BusModel {
    pub fn new() -> Result<Self, GeometryError> {
        Self::with_wheels(&WheelSpec::default())
    }

    pub fn with_wheels(spec: &WheelSpec) -> Result<Self, GeometryError> {
        let model = Self {
            body: body()?,
            wheels: wheels(spec)?,
            window: window()?,
        };
        log::info!(
            "bus model ready: {} vertices, {} edges",
            model.shapes().iter().map(|s| s.vertices().len()).sum::<usize>(),
            model.shapes().iter().map(|s| s.edges().len()).sum::<usize>()
        );
        Ok(model)
    }

    /// Shapes in draw order
    pub fn shapes(&self) -> [&Shape; 3] {
        [&self.body, &self.wheels, &self.window]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_table() {
        let body = body().unwrap();
        assert_eq!(body.vertices().len(), 10);
        assert_eq!(body.edges().len(), 14);
        assert!(body
            .edges()
            .iter()
            .all(|e| e.a < 10 && e.b < 10));
        assert_eq!(body.color(), Color::RED);
    }

    #[test]
    fn test_window_is_closed_loop() {
        let window = window().unwrap();
        assert_eq!(window.vertices().len(), 4);
        assert_eq!(window.edges().len(), 4);
        for i in 0..4 {
            assert_eq!(window.degree(i), 2);
        }

        // Walk the loop from vertex 0 and make sure it visits every vertex
        let mut visited = vec![0usize];
        let mut current = 0;
        let mut previous = usize::MAX;
        loop {
            let next = window
                .edges()
                .iter()
                .find_map(|e| {
                    let other = if e.a == current {
                        e.b
                    } else if e.b == current {
                        e.a
                    } else {
                        return None;
                    };
                    (other != previous).then_some(other)
                })
                .unwrap();
            if next == 0 {
                break;
            }
            visited.push(next);
            previous = current;
            current = next;
        }
        assert_eq!(visited.len(), 4);
    }

    #[test]
    fn test_model_draw_order() {
        let model = BusModel::new().unwrap();
        let names: Vec<_> = model.shapes().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["body", "wheels", "window"]);
    }
}
