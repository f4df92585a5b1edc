//! Navigation glue: mobile menu toggle and scroll-dependent navbar
//! background. Both degrade to no-ops on pages without the elements.

use crate::constants::NAVBAR_SOLID_SCROLL_PX;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(document: &web::Document) {
    wire_menu_toggle(document);
    wire_navbar_scroll(document);
}

fn wire_menu_toggle(document: &web::Document) {
    let (Some(toggle), Some(menu)) = (
        document.get_element_by_id("nav-toggle"),
        document.get_element_by_id("mobile-menu"),
    ) else {
        return;
    };

    let dots = dom::query_all_in(&toggle, ".dot");
    let toggle_for_listener = toggle.clone();
    let closure = Closure::wrap(Box::new(move || {
        let open = dom::toggle_class(&menu, "active");
        let color = if open { "#ff4444" } else { "#444" };
        for dot in &dots {
            dom::set_style(dot, "background", color);
        }
    }) as Box<dyn FnMut()>);
    _ = toggle_for_listener
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_navbar_scroll(document: &web::Document) {
    let Some(navbar) = document.query_selector(".navbar").ok().flatten() else {
        return;
    };

    let closure = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else { return };
        let solid = w.scroll_y().unwrap_or(0.0) > NAVBAR_SOLID_SCROLL_PX;
        let background = if solid {
            "rgba(18, 18, 18, 0.98)"
        } else {
            "rgba(18, 18, 18, 0.95)"
        };
        dom::set_style(&navbar, "background", background);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
