use glam::{Affine2, Vec2};

use crate::{Color, RasterImage};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintStyle {
    /// Fill the interior of the shape.
    #[default]
    Fill,
    /// Trace the outline of the shape, centered on its edge.
    Stroke,
}

/// How a shader samples outside of its bitmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileMode {
    /// Repeat the edge pixels.
    #[default]
    Clamp,
    /// Repeat the whole bitmap.
    Repeat,
    /// Repeat the bitmap, flipping every other copy.
    Mirror,
}

impl TileMode {
    fn resolve(self, coord: f32, len: u32) -> u32 {
        let len = len as i64;
        let i = coord.floor() as i64;
        let resolved = match self {
            TileMode::Clamp => i.clamp(0, len - 1),
            TileMode::Repeat => i.rem_euclid(len),
            TileMode::Mirror => {
                let m = i.rem_euclid(len * 2);
                if m >= len { len * 2 - 1 - m } else { m }
            }
        };
        resolved as u32
    }
}

/// Fills shapes by sampling a bitmap through an affine transform that maps bitmap space into
/// surface space.
#[derive(Clone, Debug)]
pub struct BitmapShader {
    image: RasterImage,
    tile_x: TileMode,
    tile_y: TileMode,
    /// Maps surface space back into bitmap space.
    inverse: Affine2,
}

impl BitmapShader {
    pub fn new(image: RasterImage, tile_x: TileMode, tile_y: TileMode) -> Self {
        Self {
            image,
            tile_x,
            tile_y,
            inverse: Affine2::IDENTITY,
        }
    }

    pub fn set_local_matrix(&mut self, matrix: Affine2) {
        self.inverse = matrix.inverse();
    }

    /// Sample the bitmap at a point in surface space. Returns transparent if the point can not be
    /// mapped back into the bitmap.
    pub fn sample(&self, point: Vec2) -> Color {
        if self.image.is_empty() {
            return Color::TRANSPARENT;
        }

        let local = self.inverse.transform_point2(point);
        if !local.is_finite() {
            return Color::TRANSPARENT;
        }

        let x = self.tile_x.resolve(local.x, self.image.width());
        let y = self.tile_y.resolve(local.y, self.image.height());
        self.image.pixel(x, y)
    }
}

#[derive(Clone, Debug)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f32,
    pub shader: Option<BitmapShader>,
    pub anti_alias: bool,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            shader: None,
            anti_alias: false,
        }
    }
}

impl Paint {
    pub fn anti_aliased() -> Self {
        Self {
            anti_alias: true,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_style(mut self, style: PaintStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// The color the paint produces at a point, before coverage is applied. A shader takes
    /// precedence over the solid color and is modulated by the paint's alpha.
    pub fn source_color(&self, point: Vec2) -> Color {
        match self.shader {
            Some(ref shader) => {
                let sample = shader.sample(point);
                let alpha = sample.alpha as u32 * self.color.alpha as u32 / 255;
                sample.with_alpha(alpha as u8)
            }
            None => self.color,
        }
    }
}
