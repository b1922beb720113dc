mod context;
mod geometry;
mod widget;

pub use context::Context;
pub use geometry::{Frame, Padding, Size};
pub use widget::Widget;
