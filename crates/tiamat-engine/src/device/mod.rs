//! GPU bring-up and surface ownership.
//!
//! [`Gpu`] wraps the wgpu device, queue and configured surface for one
//! window; frames are acquired with [`Gpu::begin_frame`] and presented with
//! [`Gpu::submit`]. Surface loss is classified by
//! [`Gpu::handle_surface_error`].

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
