use crate::constants::REVEAL_LAYER_ID;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up the overlay element the mask is written to.
pub fn reveal_layer(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .get_element_by_id(REVEAL_LAYER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", REVEAL_LAYER_ID))?;
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Viewport center in CSS pixels; the chain and pointer target start here.
pub fn viewport_center(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32 * 0.5, h as f32 * 0.5)
}
