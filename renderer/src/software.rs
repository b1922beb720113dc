use glam::{UVec2, Vec2};
use tracing::trace;

use crate::{Canvas, Color, Paint, PaintStyle, RectF};

#[derive(Clone, Copy, Debug)]
enum Shape {
    Rect,
    Oval,
}

impl Shape {
    /// Approximate signed distance in pixels from `point` to the edge of the shape inscribed in
    /// `bounds`. Negative inside.
    fn signed_distance(self, bounds: RectF, point: Vec2) -> f32 {
        let half = bounds.size() * 0.5;
        let offset = point - bounds.center();
        match self {
            Shape::Rect => {
                let d = offset.abs() - half;
                d.x.max(d.y)
            }
            Shape::Oval => {
                if half.x <= 0.0 || half.y <= 0.0 {
                    return f32::INFINITY;
                }
                ((offset / half).length() - 1.0) * half.min_element()
            }
        }
    }
}

/// Rasterizes draw commands onto an RGBA buffer on the CPU.
pub struct SoftwareCanvas {
    target: image::RgbaImage,
}

impl SoftwareCanvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: image::RgbaImage::new(width, height),
        }
    }

    pub fn with_background(width: u32, height: u32, color: Color) -> Self {
        Self {
            target: image::RgbaImage::from_pixel(width, height, color.into()),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        (*self.target.get_pixel(x, y)).into()
    }

    pub fn image(&self) -> &image::RgbaImage {
        &self.target
    }

    pub fn into_image(self) -> image::RgbaImage {
        self.target
    }

    fn draw_shape(&mut self, shape: Shape, bounds: RectF, paint: &Paint) {
        if bounds.is_empty() {
            trace!("Skipping {:?} with empty bounds {:?}", shape, bounds);
            return;
        }

        let half_width = match paint.style {
            PaintStyle::Fill => 0.0,
            // Zero width strokes are drawn as a hairline.
            PaintStyle::Stroke => paint.stroke_width.max(1.0) * 0.5,
        };

        // Pixels that could be touched, clipped to the target.
        let reach = half_width + 1.0;
        let min_x = (bounds.left - reach).floor().max(0.0) as u32;
        let min_y = (bounds.top - reach).floor().max(0.0) as u32;
        let max_x = ((bounds.right + reach).ceil().max(0.0) as u32).min(self.target.width());
        let max_y = ((bounds.bottom + reach).ceil().max(0.0) as u32).min(self.target.height());

        for y in min_y..max_y {
            for x in min_x..max_x {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let sd = shape.signed_distance(bounds, center);

                let distance = match paint.style {
                    PaintStyle::Fill => sd,
                    PaintStyle::Stroke => sd.abs(),
                };
                let coverage = if paint.anti_alias {
                    (half_width + 0.5 - distance).clamp(0.0, 1.0)
                } else if distance <= half_width {
                    1.0
                } else {
                    0.0
                };
                if coverage <= 0.0 {
                    continue;
                }

                let source = paint.source_color(center);
                blend(self.target.get_pixel_mut(x, y), source, coverage);
            }
        }
    }
}

/// Source-over blending of straight alpha colors.
fn blend(dst: &mut image::Rgba<u8>, src: Color, coverage: f32) {
    let sa = src.alpha as f32 / 255.0 * coverage;
    if sa <= 0.0 {
        return;
    }

    let da = dst.0[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let channel = |s: u8, d: u8| -> u8 {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        let c = (s * sa + d * da * (1.0 - sa)) / out_a;
        (c * 255.0).round().clamp(0.0, 255.0) as u8
    };

    dst.0 = [
        channel(src.red, dst.0[0]),
        channel(src.green, dst.0[1]),
        channel(src.blue, dst.0[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ];
}

impl Canvas for SoftwareCanvas {
    fn size(&self) -> UVec2 {
        UVec2::new(self.target.width(), self.target.height())
    }

    fn draw_rect(&mut self, bounds: RectF, paint: &Paint) {
        self.draw_shape(Shape::Rect, bounds, paint);
    }

    fn draw_oval(&mut self, bounds: RectF, paint: &Paint) {
        self.draw_shape(Shape::Oval, bounds, paint);
    }
}
