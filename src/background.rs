//! Subpage background variant: pages without the hero container get a set
//! of floating pixels and the decorative connecting line instead.

use crate::constants::{
    FLOATING_PIXEL_COUNT, PIXEL_DELAY_MAX_SEC, PIXEL_DURATION_MIN_SEC, PIXEL_DURATION_SPAN_SEC,
};
use crate::dom;
use rand::Rng;
use web_sys as web;

const CONNECTING_LINE_SVG: &str = r#"<svg class="connecting-line" viewBox="0 0 800 400" preserveAspectRatio="none">
  <path d="M50,200 Q200,100 400,200 T750,150" stroke="#ff4444" stroke-width="1" fill="none" opacity="0.3"/>
</svg>"#;

pub fn populate(document: &web::Document) {
    let Some(container) = document.query_selector(".page-background").ok().flatten() else {
        return;
    };

    let mut rng = rand::thread_rng();
    for _ in 0..FLOATING_PIXEL_COUNT {
        let Ok(pixel) = document.create_element("div") else {
            continue;
        };
        dom::add_class(&pixel, "floating-pixel");
        dom::set_style(&pixel, "left", &format!("{:.2}%", rng.gen::<f64>() * 100.0));
        dom::set_style(&pixel, "top", &format!("{:.2}%", rng.gen::<f64>() * 100.0));
        // Random delays so the pixels don't move in sync.
        dom::set_style(
            &pixel,
            "animation-delay",
            &format!("{:.2}s", rng.gen::<f64>() * PIXEL_DELAY_MAX_SEC),
        );
        dom::set_style(
            &pixel,
            "animation-duration",
            &format!(
                "{:.2}s",
                PIXEL_DURATION_MIN_SEC + rng.gen::<f64>() * PIXEL_DURATION_SPAN_SEC
            ),
        );
        _ = container.append_child(&pixel);
    }

    // Restore the connecting SVG line if the page markup lost it.
    if container
        .query_selector(".connecting-line")
        .ok()
        .flatten()
        .is_none()
    {
        _ = container.insert_adjacent_html("beforeend", CONNECTING_LINE_SVG);
    }
}
