/// Immediate-mode line drawing of wireframe shapes
use crate::geometry::{Color, Shape, Vertex};
use crate::model::BusModel;

/// A target that accepts colored line segments in model space.
///
/// Implementors apply the current scene transform themselves.
pub trait Canvas {
    fn set_color(&mut self, color: Color);
    fn line(&mut self, a: &Vertex, b: &Vertex);
}

/// Draw every edge of `shape` in its color, in edge order
pub fn draw_shape<C: Canvas + ?Sized>(canvas: &mut C, shape: &Shape) {
    canvas.set_color(shape.color());
    for (a, b) in shape.segments() {
        canvas.line(a, b);
    }
}

/// Draw body, wheels and window, in that order
pub fn draw_model<C: Canvas + ?Sized>(canvas: &mut C, model: &BusModel) {
    for shape in model.shapes() {
        draw_shape(canvas, shape);
    }
}
