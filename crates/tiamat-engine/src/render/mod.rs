//! wgpu-backed rendering.
//!
//! The renderer consumes the scene's draw stream and records GPU passes.
//! CPU-side geometry is logical pixels (top-left origin, +Y down); the
//! shader converts to NDC with a viewport uniform.

pub mod shapes;

use crate::coords::Viewport;

/// What a renderer needs from the device layer for one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Logical pixels.
    pub viewport: Viewport,
}

/// Where a renderer records its passes: the frame's encoder and color view.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}
