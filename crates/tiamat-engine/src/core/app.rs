use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Tells the runtime whether to keep running after a callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// The callbacks a program hands to [`crate::window::Runtime::run`].
///
/// `on_frame` is the only required method; it records and presents one frame
/// through [`FrameCtx::render`]. `on_window_event` gives the app first look
/// at raw window events and defaults to ignoring them.
pub trait App {
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
