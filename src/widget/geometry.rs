//! Placement of the circle inside a view and of the bitmap inside the circle.

use glam::{Affine2, UVec2, Vec2};
use renderer::RectF;

use crate::engine::ui::Frame;

/// The largest square that fits in the frame's content area, centered along the axis that has
/// space to spare.
pub fn circle_bounds(frame: &Frame) -> RectF {
    let content = frame.content_size();
    let content_width = content.width as f32;
    let content_height = content.height as f32;

    let mut left = frame.padding.left as f32;
    let mut top = frame.padding.top as f32;
    if content_width > content_height {
        left += (content_width - content_height) / 2.0;
    } else {
        top += (content_height - content_width) / 2.0;
    }

    let diameter = content_width.min(content_height).max(0.0);
    RectF::new(left, top, left + diameter, top + diameter)
}

/// Bounds a centered stroke of `stroke_width` is traced along so that its outer edge lands on
/// the edge of `circle`.
pub fn stroke_bounds(circle: RectF, stroke_width: f32) -> RectF {
    let half_stroke_width = stroke_width / 2.0;
    circle.inset(half_stroke_width, half_stroke_width)
}

/// Maps bitmap space onto `circle` with a uniform scale, centering the overflowing dimension.
/// Portrait bitmaps are scaled to the circle's width, everything else to its height.
pub fn cover_transform(image_size: UVec2, circle: RectF) -> Affine2 {
    let image_size = image_size.as_vec2();

    let (scale, offset) = if image_size.x < image_size.y {
        let scale = circle.width() / image_size.x;
        let dy = circle.top - image_size.y * scale / 2.0 + circle.width() / 2.0;
        (scale, Vec2::new(circle.left, dy))
    } else {
        let scale = circle.height() / image_size.y;
        let dx = circle.left - image_size.x * scale / 2.0 + circle.width() / 2.0;
        (scale, Vec2::new(dx, circle.top))
    };

    Affine2::from_translation(offset) * Affine2::from_scale(Vec2::splat(scale))
}

/// True if `point` lies on or inside the circle inscribed in `circle`. A circle without area
/// contains nothing.
pub fn circle_contains(circle: RectF, point: Vec2) -> bool {
    let radius = circle.width() / 2.0;
    radius > 0.0 && circle.center().distance(point) <= radius
}
