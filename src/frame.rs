//! Per-frame glue: reads the shared scroll progress, advances the scene,
//! eases the camera and renders. The loop is the only consumer of the
//! progress cell; scroll events only write it.

use crate::camera::{Camera, CameraRig};
use crate::render::GpuState;
use crate::scene::SceneObjects;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub gpu: GpuState<'a>,
    pub scene: SceneObjects,
    pub rig: CameraRig,
    pub camera: Camera,
    pub progress: Rc<Cell<f32>>,
    pub canvas: web::HtmlCanvasElement,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let progress = self.progress.get();

        self.scene.advance();
        self.scene.set_scroll_tilt(progress);

        self.rig.retarget(progress);
        self.rig.step();
        self.camera.eye.z = self.rig.current_depth;

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        if let Err(e) = self.gpu.render(&self.scene, &self.camera) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    particle_positions: &[glam::Vec3],
) -> Option<GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match GpuState::new(leaked_canvas, particle_positions).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Self-rescheduling requestAnimationFrame loop; runs for the lifetime of
/// the page view, there is no teardown path.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
