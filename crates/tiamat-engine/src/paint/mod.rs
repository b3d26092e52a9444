//! Paint model shared between scene recording and the renderer.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;
