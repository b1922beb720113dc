use glam::{Affine2, UVec2, Vec2};
use renderer::{
    BitmapShader, Canvas, Color, Paint, RasterImage, RectF, SoftwareCanvas, TileMode,
};
use tracing::debug;

use crate::engine::assets::{AssetError, Assets, ResourceId};

/// Something that can paint itself into given bounds.
pub trait Drawable {
    /// The natural size of the drawable in pixels, if it has one.
    fn intrinsic_size(&self) -> Option<UVec2>;

    fn draw(&self, canvas: &mut dyn Canvas, bounds: RectF);

    /// The bitmap backing the drawable, for drawables that are just a bitmap.
    fn as_bitmap(&self) -> Option<&RasterImage> {
        None
    }
}

pub struct BitmapDrawable {
    image: RasterImage,
}

impl BitmapDrawable {
    pub fn new(image: RasterImage) -> Self {
        Self { image }
    }
}

impl Drawable for BitmapDrawable {
    fn intrinsic_size(&self) -> Option<UVec2> {
        Some(self.image.size)
    }

    fn draw(&self, canvas: &mut dyn Canvas, bounds: RectF) {
        let mut shader = BitmapShader::new(self.image.clone(), TileMode::Clamp, TileMode::Clamp);
        let scale = bounds.size() / self.image.size.as_vec2();
        shader.set_local_matrix(
            Affine2::from_translation(bounds.min()) * Affine2::from_scale(scale),
        );

        let mut paint = Paint::default();
        paint.shader = Some(shader);
        canvas.draw_rect(bounds, &paint);
    }

    fn as_bitmap(&self) -> Option<&RasterImage> {
        Some(&self.image)
    }
}

/// Fills its bounds with a solid color. Has no intrinsic size.
pub struct ColorDrawable {
    pub color: Color,
}

impl Drawable for ColorDrawable {
    fn intrinsic_size(&self) -> Option<UVec2> {
        None
    }

    fn draw(&self, canvas: &mut dyn Canvas, bounds: RectF) {
        canvas.draw_rect(bounds, &Paint::default().with_color(self.color));
    }
}

/// A filled oval with a fixed size.
pub struct OvalDrawable {
    pub size: UVec2,
    pub color: Color,
}

impl Drawable for OvalDrawable {
    fn intrinsic_size(&self) -> Option<UVec2> {
        Some(self.size)
    }

    fn draw(&self, canvas: &mut dyn Canvas, bounds: RectF) {
        canvas.draw_oval(bounds, &Paint::anti_aliased().with_color(self.color));
    }
}

/// Render a drawable into a bitmap of its intrinsic size. Bitmap drawables return their bitmap
/// as is. Drawables without a usable intrinsic size can not be rasterized.
pub fn rasterize(drawable: &dyn Drawable) -> Option<RasterImage> {
    if let Some(image) = drawable.as_bitmap() {
        return Some(image.clone());
    }

    let size = drawable.intrinsic_size()?;
    if size.x == 0 || size.y == 0 {
        debug!("Drawable has an empty intrinsic size {}", size);
        return None;
    }

    let mut canvas = SoftwareCanvas::new(size.x, size.y);
    drawable.draw(&mut canvas, RectF::from_min_size(Vec2::ZERO, size.as_vec2()));
    Some(RasterImage::from_rgba(canvas.into_image()))
}

/// The different ways an image can be handed to a view.
pub enum ImageSource {
    Resource(ResourceId),
    Bitmap(RasterImage),
    Drawable(Box<dyn Drawable>),
    Uri(String),
}

impl ImageSource {
    /// Normalize the source into a bitmap. `Ok(None)` means the source is valid but has nothing to
    /// show.
    pub fn resolve(self, assets: &Assets) -> Result<Option<RasterImage>, AssetError> {
        Ok(match self {
            ImageSource::Resource(id) => Some(assets.load_resource_image(id)?),
            ImageSource::Bitmap(image) => Some(image),
            ImageSource::Drawable(drawable) => rasterize(drawable.as_ref()),
            ImageSource::Uri(uri) => Some(assets.load_uri_image(&uri)?),
        })
    }
}

impl std::fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSource::Resource(id) => f.debug_tuple("Resource").field(id).finish(),
            ImageSource::Bitmap(image) => f.debug_tuple("Bitmap").field(image).finish(),
            ImageSource::Drawable(_) => f.write_str("Drawable"),
            ImageSource::Uri(uri) => f.debug_tuple("Uri").field(uri).finish(),
        }
    }
}
