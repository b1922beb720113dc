mod circle_image;
pub mod config;
pub mod geometry;
pub mod source;

pub use circle_image::CircleImageView;
pub use config::{CircleImageConfig, ConfigError};
pub use source::{BitmapDrawable, ColorDrawable, Drawable, ImageSource, OvalDrawable};
