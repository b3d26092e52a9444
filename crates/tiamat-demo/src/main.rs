//! Windowed circle demo.
//!
//! Opens a 600×800 window titled "test" and presents one magenta circle with
//! an inward yellow outline every frame until the window is closed.

use anyhow::Result;
use winit::dpi::LogicalSize;

use tiamat_engine::core::{App, AppControl, FrameCtx};
use tiamat_engine::coords::Vec2;
use tiamat_engine::device::GpuInit;
use tiamat_engine::logging::init_logging;
use tiamat_engine::paint::Color;
use tiamat_engine::render::shapes::circle::CircleRenderer;
use tiamat_engine::scene::{DrawList, Outline, ZIndex};
use tiamat_engine::window::{Runtime, RuntimeConfig};

const WINDOW_WIDTH: f64 = 600.0;
const WINDOW_HEIGHT: f64 = 800.0;
const WINDOW_TITLE: &str = "test";

const CIRCLE_RADIUS: f32 = 300.0;
// Negative thickness draws the outline inward over the fill.
const OUTLINE_THICKNESS: f32 = -30.0;

const CLEAR_COLOR: Color = Color::BLACK;

/// Window configuration for the demo: 600×800 logical pixels, default
/// decorations.
fn window_config() -> RuntimeConfig {
    RuntimeConfig {
        title: WINDOW_TITLE.to_string(),
        initial_size: LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
    }
}

/// Records the demo's one shape.
///
/// The circle's bounding box sits at the surface origin, so its center lands
/// at (radius, radius). The attributes are fixed; every frame records the
/// same command.
fn record_scene(out: &mut DrawList) {
    out.push_circle(
        ZIndex::default(),
        Vec2::new(CIRCLE_RADIUS, CIRCLE_RADIUS),
        CIRCLE_RADIUS,
        Color::MAGENTA,
        Some(Outline::new(OUTLINE_THICKNESS, Color::YELLOW)),
    );
}

struct CircleApp {
    renderer: CircleRenderer,
    draw_list: DrawList,
}

impl CircleApp {
    fn new() -> Self {
        Self {
            renderer: CircleRenderer::new(),
            draw_list: DrawList::new(),
        }
    }
}

impl App for CircleApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.draw_list.clear();
        record_scene(&mut self.draw_list);

        let renderer = &mut self.renderer;
        let draw_list = &mut self.draw_list;

        ctx.render(CLEAR_COLOR, |rctx, target| {
            renderer.render(rctx, target, draw_list);
        })
    }
}

fn main() -> Result<()> {
    init_logging(None);

    log::info!(
        "opening {WINDOW_WIDTH}x{WINDOW_HEIGHT} window \"{WINDOW_TITLE}\""
    );

    Runtime::run(window_config(), GpuInit::default(), CircleApp::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiamat_engine::scene::DrawCmd;

    fn recorded_circle(list: &DrawList) -> &tiamat_engine::scene::shapes::circle::CircleCmd {
        assert_eq!(list.items().len(), 1);
        let DrawCmd::Circle(cmd) = &list.items()[0].cmd;
        cmd
    }

    #[test]
    fn window_config_matches_the_demo_surface() {
        let config = window_config();
        assert_eq!(config.title, "test");
        assert_eq!(config.initial_size, LogicalSize::new(600.0, 800.0));
    }

    #[test]
    fn scene_records_the_configured_circle() {
        let mut list = DrawList::new();
        record_scene(&mut list);

        let circle = recorded_circle(&list);
        assert_eq!(circle.center, Vec2::new(300.0, 300.0));
        assert_eq!(circle.radius, 300.0);
        assert_eq!(circle.fill, Color::MAGENTA);

        let outline = circle.outline.as_ref().expect("outline present");
        assert_eq!(outline.thickness, -30.0);
        assert_eq!(outline.color, Color::YELLOW);
    }

    #[test]
    fn scene_is_identical_across_frames() {
        let mut first = DrawList::new();
        record_scene(&mut first);

        // Re-record many times the way on_frame does; the stream never
        // changes between frame 1 and frame N.
        let mut current = DrawList::new();
        for _ in 0..100 {
            current.clear();
            record_scene(&mut current);
            assert_eq!(current.items(), first.items());
        }
    }

    #[test]
    fn inward_outline_stays_inside_the_circle_edge() {
        let mut list = DrawList::new();
        record_scene(&mut list);

        let circle = recorded_circle(&list);
        let outline = circle.outline.as_ref().expect("outline present");
        let (inner, outer) = outline.ring(circle.radius);
        assert_eq!((inner, outer), (270.0, 300.0));
    }
}
