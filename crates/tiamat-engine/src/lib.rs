//! Tiamat engine crate.
//!
//! Owns the window runtime, GPU surface plumbing, and the shape renderer
//! used by the demo binary.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
