//! Scroll and resize wiring for the hero.
//!
//! The scroll handler runs on the UI thread and must return promptly: it
//! computes progress, stores it in the shared cell and re-applies the stage
//! classes. All camera motion happens later, in the frame loop.

use crate::constants::INITIAL_SCROLL_DELAY_MS;
use crate::dom;
use crate::frame::FrameContext;
use crate::scroll::{self, Stage};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The stage text blocks, side dots and scroll hint the classifier toggles.
pub struct StageIndicators {
    pub stages: Vec<web::Element>,
    pub dots: Vec<web::Element>,
    pub indicator: web::Element,
}

impl StageIndicators {
    /// Deactivate everything, then activate exactly the classified stage.
    /// Idempotent: repeated calls with the same progress leave the same
    /// single stage active.
    pub fn apply(&self, progress: f32) {
        if scroll::indicator_hidden(progress) {
            dom::add_class(&self.indicator, "hide");
        } else {
            dom::remove_class(&self.indicator, "hide");
        }

        for stage in &self.stages {
            dom::remove_class(stage, "active");
        }
        for dot in &self.dots {
            dom::remove_class(dot, "active");
        }
        let i = Stage::classify(progress).index();
        if let Some(stage) = self.stages.get(i) {
            dom::add_class(stage, "active");
        }
        if let Some(dot) = self.dots.get(i) {
            dom::add_class(dot, "active");
        }
    }
}

pub fn wire_scroll(progress: Rc<Cell<f32>>, spacer: web::HtmlElement, ui: StageIndicators) {
    let closure = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else { return };
        let scroll_top = w.scroll_y().unwrap_or(0.0);
        let viewport = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let p = scroll::scroll_progress(scroll_top, spacer.offset_height() as f64, viewport);
        progress.set(p);
        ui.apply(p);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Resize re-derives the camera aspect and resizes the render surface
/// synchronously with the notification. `try_borrow_mut` makes a resize
/// that races frame setup a no-op.
pub fn wire_resize(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let closure = Closure::wrap(Box::new(move || {
        let (vw, vh) = dom::viewport_size();
        if let Ok(mut ctx) = frame_ctx.try_borrow_mut() {
            ctx.canvas.set_width(vw.max(1.0) as u32);
            ctx.canvas.set_height(vh.max(1.0) as u32);
            ctx.camera.set_aspect(vw as f32, vh as f32);
            let w = ctx.canvas.width();
            let h = ctx.canvas.height();
            ctx.gpu.resize_if_needed(w, h);
        }
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Fire a synthetic scroll shortly after init so a mid-page reload lands in
/// the correct camera/stage state without the user scrolling first.
pub fn schedule_initial_scroll() {
    dom::set_timeout(INITIAL_SCROLL_DELAY_MS, || {
        if let Some(w) = web::window() {
            if let Ok(ev) = web::Event::new("scroll") {
                _ = w.dispatch_event(&ev);
            }
        }
    });
}
