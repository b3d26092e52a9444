//! Shape renderers.

pub mod circle;
