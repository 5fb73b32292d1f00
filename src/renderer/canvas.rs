//! Canvas 2D presenter for the browser
//!
//! Fills the triangles of a [`DrawList`] on a `CanvasRenderingContext2d`.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{DrawList, Presenter};
use crate::sim::SessionSnapshot;

pub struct CanvasPresenter {
    ctx: CanvasRenderingContext2d,
    list: DrawList,
}

impl CanvasPresenter {
    /// `None` when the canvas has no 2D context
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            list: DrawList::new(),
        })
    }
}

fn css_color(color: [f32; 4]) -> String {
    let [r, g, b, a] = color;
    format!(
        "rgba({}, {}, {}, {})",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
        a
    )
}

impl Presenter for CanvasPresenter {
    fn render(&mut self, snapshot: &SessionSnapshot<'_>) {
        self.list.build(snapshot);

        for tri in self.list.vertices.chunks_exact(3) {
            self.ctx.set_fill_style_str(&css_color(tri[0].color));
            self.ctx.begin_path();
            self.ctx.move_to(tri[0].position[0] as f64, tri[0].position[1] as f64);
            self.ctx.line_to(tri[1].position[0] as f64, tri[1].position[1] as f64);
            self.ctx.line_to(tri[2].position[0] as f64, tri[2].position[1] as f64);
            self.ctx.close_path();
            self.ctx.fill();
        }
    }
}
