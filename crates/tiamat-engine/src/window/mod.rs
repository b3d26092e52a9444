//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer.
//! The open/closed lifecycle lives in its own type so it can be driven in
//! tests without a windowing system.

mod lifecycle;
mod runtime;

pub use lifecycle::{Lifecycle, Phase};
pub use runtime::{Runtime, RuntimeConfig};
