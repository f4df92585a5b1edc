//! Portfolio grid: one-shot fetch of `projects.json`, viewport-triggered
//! fade-in for each row and a modal detail view.
//!
//! The fetch is fire-and-forget; a failure swaps the grid content for a
//! static message and never blocks the rest of the page.

use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const FAILURE_MARKUP: &str = r#"<p class="portfolio-error">Projects are unavailable right now.</p>"#;

#[derive(Clone, Debug, Default)]
pub struct Project {
    pub image: String,
    pub title: String,
    pub excerpt: String,
    pub details: String,
}

#[derive(Clone)]
struct ModalDom {
    modal: web::Element,
    image: web::Element,
    title: web::Element,
    details: web::Element,
}

impl ModalDom {
    fn find(document: &web::Document) -> Option<Self> {
        Some(Self {
            modal: document.get_element_by_id("project-modal")?,
            image: document.get_element_by_id("modal-image")?,
            title: document.get_element_by_id("modal-title")?,
            details: document.get_element_by_id("modal-details")?,
        })
    }

    fn open(&self, project: &Project) {
        _ = self.image.set_attribute("src", &project.image);
        self.title.set_text_content(Some(&project.title));
        self.details.set_text_content(Some(&project.details));
        dom::add_class(&self.modal, "show");
        set_body_overflow("hidden");
    }

    fn close(&self) {
        dom::remove_class(&self.modal, "show");
        set_body_overflow("auto");
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = dom::window_document().and_then(|d| d.body()) {
        _ = body.style().set_property("overflow", value);
    }
}

pub fn wire(document: &web::Document) {
    let Some(grid) = document.get_element_by_id("portfolio-grid-dynamic") else {
        return;
    };

    let modal = ModalDom::find(document);
    if let Some(m) = &modal {
        wire_modal_close(document, m.clone());
    }

    let observer = make_fade_in_observer();
    let doc = document.clone();
    spawn_local(async move {
        match load_projects().await {
            Ok(projects) => {
                log::info!("[portfolio] loaded {} projects", projects.len());
                render_grid(&doc, &grid, &projects, observer.as_ref(), modal);
            }
            Err(e) => {
                log::error!("[portfolio] fetch failed: {:?}", e);
                grid.set_inner_html(FAILURE_MARKUP);
            }
        }
    });
}

async fn load_projects() -> anyhow::Result<Vec<Project>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str("projects.json"))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("projects.json returned status {}", resp.status());
    }
    let json = JsFuture::from(resp.json().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let arr = js_sys::Array::from(&json);
    let mut projects = Vec::with_capacity(arr.length() as usize);
    for entry in arr.iter() {
        projects.push(Project {
            image: str_field(&entry, "image"),
            title: str_field(&entry, "title"),
            excerpt: str_field(&entry, "excerpt"),
            details: str_field(&entry, "details"),
        });
    }
    Ok(projects)
}

fn str_field(value: &JsValue, key: &str) -> String {
    js_sys::Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

fn render_grid(
    document: &web::Document,
    grid: &web::Element,
    projects: &[Project],
    observer: Option<&web::IntersectionObserver>,
    modal: Option<ModalDom>,
) {
    for project in projects {
        let Ok(row) = document.create_element("div") else {
            continue;
        };
        row.set_class_name("portfolio-row");
        row.set_inner_html(&format!(
            r#"<img src="{}" alt="{}"><div class="portfolio-row-content"><h3>{}</h3><p>{}</p></div>"#,
            project.image, project.title, project.title, project.excerpt
        ));
        // Start hidden; the observer fades the row in when it enters the
        // viewport.
        dom::set_style(&row, "opacity", "0");
        dom::set_style(&row, "transform", "translateY(30px)");
        if let Some(obs) = observer {
            obs.observe(&row);
        }

        if let Some(m) = &modal {
            let m = m.clone();
            let project = project.clone();
            let closure = Closure::wrap(Box::new(move || m.open(&project)) as Box<dyn FnMut()>);
            _ = row.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        _ = grid.append_child(&row);
    }
}

fn make_fade_in_observer() -> Option<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::set_style(&target, "opacity", "1");
                    dom::set_style(&target, "transform", "translateY(0)");
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let observer = web::IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok();
    callback.forget();
    observer
}

fn wire_modal_close(document: &web::Document, modal: ModalDom) {
    let modal_for_button = modal.clone();
    dom::add_click_listener(document, "close-modal", move || modal_for_button.close());

    // A click on the backdrop itself (not its children) also closes.
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some(target) = ev.target() {
            let target: JsValue = target.into();
            let backdrop: &JsValue = modal.modal.as_ref();
            if &target == backdrop {
                modal.close();
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
