use std::sync::Arc;

use glam::UVec2;

use crate::Color;

/// An immutable decoded RGBA bitmap. Clones share the pixel storage.
#[derive(Clone)]
pub struct RasterImage {
    pub size: UVec2,
    data: Arc<image::RgbaImage>,
}

impl RasterImage {
    pub fn from_rgba(data: image::RgbaImage) -> Self {
        Self {
            size: UVec2::new(data.width(), data.height()),
            data: Arc::new(data),
        }
    }

    /// Create a bitmap of the given size with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self::from_rgba(image::RgbaImage::from_pixel(width, height, color.into()))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.y
    }

    /// A bitmap with no pixels can not be sampled.
    pub fn is_empty(&self) -> bool {
        self.size.x == 0 || self.size.y == 0
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        (*self.data.get_pixel(x, y)).into()
    }

    /// True if both bitmaps share the same pixel storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl From<image::DynamicImage> for RasterImage {
    fn from(value: image::DynamicImage) -> Self {
        Self::from_rgba(value.into_rgba8())
    }
}

impl std::fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.size.x)
            .field("height", &self.size.y)
            .finish()
    }
}
