#![cfg(target_arch = "wasm32")]
use crate::camera::{Camera, CameraRig};
use crate::constants::{CONTAINER_REVEAL_DELAY_MS, PARTICLE_COUNT, PARTICLE_EXTENT};
use crate::events::StageIndicators;
use crate::scene::SceneObjects;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod background;
mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod geometry;
mod nav;
mod portfolio;
mod render;
mod ripple;
mod scene;
mod scroll;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    nav::wire(&document);
    ripple::wire(&document);
    portfolio::wire(&document);

    // The hero container is the activation switch: present on the homepage,
    // absent on subpages which get the static pixel background instead.
    if document.get_element_by_id("canvas-container").is_some() {
        match HeroDom::find(&document) {
            Some(hero) => init_hero(&document, hero).await?,
            // Never partially initialize: any missing stage element
            // disables the whole hero.
            None => log::warn!("[hero] stage elements missing; hero disabled"),
        }
    } else {
        background::populate(&document);
    }
    Ok(())
}

/// Every DOM dependency of the hero, resolved up front.
struct HeroDom {
    container: web::Element,
    spacer: web::HtmlElement,
    stages: Vec<web::Element>,
    dots: Vec<web::Element>,
    indicator: web::Element,
}

impl HeroDom {
    fn find(document: &web::Document) -> Option<Self> {
        let container = document.get_element_by_id("canvas-container")?;
        let spacer = document
            .query_selector(".hero-spacer")
            .ok()
            .flatten()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let stages = dom::query_all(document, ".hero-stage");
        let dots = dom::query_all(document, ".control-dot");
        let indicator = document.query_selector(".scroll-indicator").ok().flatten()?;
        if stages.len() != 3 || dots.len() != 3 {
            return None;
        }
        Some(Self {
            container,
            spacer,
            stages,
            dots,
            indicator,
        })
    }
}

async fn init_hero(document: &web::Document, hero: HeroDom) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::sync_canvas_viewport_size(&canvas);
    hero.container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let mut rng = rand::thread_rng();
    let particle_positions = geometry::scatter_cube(&mut rng, PARTICLE_COUNT, PARTICLE_EXTENT);

    // Adapter/device failure is fatal to the hero only; the page content
    // never depends on it.
    let Some(gpu) = frame::init_gpu(&canvas, &particle_positions).await else {
        log::warn!("[hero] WebGPU unavailable; hero disabled");
        return Ok(());
    };

    let (vw, vh) = dom::viewport_size();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        gpu,
        scene: SceneObjects::new(),
        rig: CameraRig::new(),
        camera: Camera::hero(vw as f32 / (vh as f32).max(1.0)),
        progress: Rc::new(Cell::new(0.0)),
        canvas,
    }));

    let progress = frame_ctx.borrow().progress.clone();
    events::wire_scroll(
        progress,
        hero.spacer.clone(),
        StageIndicators {
            stages: hero.stages,
            dots: hero.dots,
            indicator: hero.indicator,
        },
    );
    events::wire_resize(frame_ctx.clone());
    frame::start_loop(frame_ctx);

    // Fade the surface in once the first frames are up, then seed
    // camera/stage state from the current (possibly mid-page) scroll
    // offset without requiring the user to scroll first.
    let container = hero.container.clone();
    dom::set_timeout(CONTAINER_REVEAL_DELAY_MS, move || {
        dom::set_style(&container, "opacity", "1");
    });
    events::schedule_initial_scroll();

    log::info!("[hero] initialized");
    Ok(())
}
