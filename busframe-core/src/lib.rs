/// Busframe Core Library - Shared geometry and transformation logic
///
/// This library holds the stateless pieces of the wireframe bus renderer:
/// the shape tables, the wheel generator, transformation and projection
/// math, the `Canvas` drawing seam and the frame loop state.

pub mod frame;
pub mod geometry;
pub mod model;
pub mod projection;
pub mod render;
pub mod transform;
pub mod wheels;

// Re-export commonly used types
pub use frame::{FrameLoop, LoopSettings, Phase};
pub use geometry::{Color, Edge, GeometryError, Shape, Vertex};
pub use model::BusModel;
pub use projection::{Camera, ProjectionMode};
pub use render::{draw_model, draw_shape, Canvas};
pub use transform::{RotationState, Transform};
pub use wheels::WheelSpec;
