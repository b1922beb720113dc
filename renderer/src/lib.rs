//! CPU side drawing primitives: colors, paints, bitmap shaders and the canvases they are drawn
//! onto.

mod canvas;
mod color;
mod geometry;
mod paint;
mod raster_image;
mod recording;
mod software;

pub use canvas::*;
pub use color::*;
pub use geometry::*;
pub use paint::*;
pub use raster_image::*;
pub use recording::*;
pub use software::*;
