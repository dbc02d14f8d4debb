/// ASCII line rasterizer for terminal rendering
use busframe_core::{Camera, Canvas, Color, RotationState, Transform, Vertex};
use crossterm::{
    cursor,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Matrix4;
use std::io::Write;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    color: Color,
}

/// ASCII renderer that rasterizes wireframe lines into a character grid
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    cells: Vec<Option<Cell>>,
    camera: Camera,
    model_matrix: Matrix4<f32>,
    pen: Color,
    background: Color,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        let projected_height = (height as f32 * CELL_ASPECT) as u32;
        Self {
            width,
            height,
            cells: vec![None; width * height],
            camera: Camera::new(width as u32, projected_height),
            model_matrix: Matrix4::identity(),
            pen: Color::WHITE,
            background,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Clear the grid and set the scene rotation for the following lines
    pub fn begin_frame(&mut self, rotation: &RotationState) {
        self.cells.fill(None);
        self.model_matrix = Transform::rotation_matrix(rotation);
    }

    /// Glyph and color at a cell, if anything was drawn there
    pub fn cell(&self, x: usize, y: usize) -> Option<(char, Color)> {
        self.cells
            .get(y * self.width + x)
            .copied()
            .flatten()
            .map(|cell| (cell.glyph, cell.color))
    }

    pub fn lit_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    fn project(&self, point: &Vertex) -> Option<(i32, i32)> {
        self.camera
            .project_to_screen(
                point,
                &self.model_matrix,
                self.width as u32,
                self.height as u32,
            )
            .map(|(x, y, _)| (x.floor() as i32, y.floor() as i32))
    }

    fn plot(&mut self, x: i32, y: i32, glyph: char) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = Some(Cell {
            glyph,
            color: self.pen,
        });
    }

    /// Bresenham between two cells
    fn rasterize_line(&mut self, (x0, y0): (i32, i32), (x1, y1): (i32, i32)) {
        let glyph = slope_glyph((x1 - x0) as f32, (y1 - y0) as f32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.plot(x, y, glyph);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetBackgroundColor(term_color(self.background)))?;
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                match self.cells[y * self.width + x] {
                    Some(cell) => {
                        writer.queue(SetForegroundColor(term_color(cell.color)))?;
                        writer.queue(Print(cell.glyph))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Canvas for AsciiRenderer {
    fn set_color(&mut self, color: Color) {
        self.pen = color;
    }

    fn line(&mut self, a: &Vertex, b: &Vertex) {
        // Lines with a clipped endpoint are dropped
        if let (Some(start), Some(end)) = (self.project(a), self.project(b)) {
            self.rasterize_line(start, end);
        }
    }
}

/// Pick a character that follows the on-screen direction of a line
fn slope_glyph(dx: f32, dy: f32) -> char {
    let dy = dy * CELL_ASPECT;
    if dx.abs() > 2.0 * dy.abs() {
        '-'
    } else if dy.abs() > 2.0 * dx.abs() {
        '|'
    } else if (dx > 0.0) == (dy > 0.0) {
        '\\'
    } else {
        '/'
    }
}

fn term_color(color: Color) -> style::Color {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    style::Color::Rgb {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use busframe_core::{draw_model, BusModel};

    #[test]
    fn test_horizontal_line() {
        let mut renderer = AsciiRenderer::new(20, 5, Color::WHITE);
        renderer.set_color(Color::RED);
        renderer.rasterize_line((2, 1), (8, 1));

        for x in 2..=8 {
            assert_eq!(renderer.cell(x, 1), Some(('-', Color::RED)));
        }
        assert_eq!(renderer.cell(1, 1), None);
        assert_eq!(renderer.lit_cells(), 7);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut renderer = AsciiRenderer::new(4, 4, Color::WHITE);
        renderer.rasterize_line((-3, 2), (10, 2));
        assert_eq!(renderer.lit_cells(), 4);
    }

    #[test]
    fn test_slope_glyphs() {
        assert_eq!(slope_glyph(10.0, 0.0), '-');
        assert_eq!(slope_glyph(0.0, 4.0), '|');
        assert_eq!(slope_glyph(4.0, 2.0), '\\');
        assert_eq!(slope_glyph(4.0, -2.0), '/');
    }

    #[test]
    fn test_model_frame_uses_shape_colors() {
        let model = BusModel::new().unwrap();
        let mut renderer = AsciiRenderer::new(80, 40, Color::WHITE);
        renderer.begin_frame(&RotationState::new(0.0, 30.0, 0.0));
        draw_model(&mut renderer, &model);

        let mut colors = Vec::new();
        for y in 0..renderer.height() {
            for x in 0..renderer.width() {
                if let Some((_, color)) = renderer.cell(x, y) {
                    if !colors.contains(&color) {
                        colors.push(color);
                    }
                }
            }
        }
        assert!(colors.contains(&Color::RED));
        assert!(colors.contains(&Color::BLACK));
        assert!(colors.contains(&Color::BLUE));

        renderer.begin_frame(&RotationState::zero());
        assert_eq!(renderer.lit_cells(), 0);
    }

    #[test]
    fn test_draw_writes_every_row() {
        let renderer = AsciiRenderer::new(3, 2, Color::WHITE);
        let mut out = Vec::new();
        renderer.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(' ').count(), 6);
    }

    #[test]
    fn test_term_color() {
        assert_eq!(
            term_color(Color::BLUE),
            style::Color::Rgb { r: 0, g: 0, b: 255 }
        );
    }
}
