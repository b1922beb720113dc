//! A circular image view: clips a bitmap to a circle, draws an optional ring around it and a
//! highlight while pressed, and only accepts touches that land inside the circle.

pub mod engine;
pub mod widget;

pub use renderer;
