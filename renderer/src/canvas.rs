use glam::UVec2;

use crate::{Paint, RectF};

/// A 2D drawing surface.
pub trait Canvas {
    /// Size of the surface in pixels.
    fn size(&self) -> UVec2;

    /// Fill or stroke the rectangle `bounds` with `paint`.
    fn draw_rect(&mut self, bounds: RectF, paint: &Paint);

    /// Fill or stroke the ellipse inscribed in `bounds` with `paint`.
    fn draw_oval(&mut self, bounds: RectF, paint: &Paint);
}
