//! Button ripple effect: a short-lived span appended at the click point.

use crate::constants::RIPPLE_LIFETIME_MS;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(document: &web::Document) {
    for button in dom::query_all(document, ".btn") {
        let doc = document.clone();
        let button_for_closure = button.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let rect = button_for_closure.get_bounding_client_rect();
            let x = ev.client_x() as f64 - rect.left();
            let y = ev.client_y() as f64 - rect.top();

            let Ok(span) = doc.create_element("span") else {
                return;
            };
            dom::add_class(&span, "ripple");
            dom::set_style(&span, "left", &format!("{x:.0}px"));
            dom::set_style(&span, "top", &format!("{y:.0}px"));
            _ = button_for_closure.append_child(&span);

            let span_expired = span.clone();
            dom::set_timeout(RIPPLE_LIFETIME_MS, move || span_expired.remove());
        }) as Box<dyn FnMut(_)>);
        _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
