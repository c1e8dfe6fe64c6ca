#![cfg(target_arch = "wasm32")]
//! Pointer-trailing reveal effect: a chain of soft circular holes punched
//! through an overlay element, tracking the pointer with exponential lag.

pub mod chain;
pub mod constants;
pub mod dom;
pub mod frame;
pub mod input;
pub mod mask;

use chain::{BlobChain, PointerTarget};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reveal-web starting");

    init().map_err(|e| JsValue::from_str(&format!("{e:?}")))
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let layer = dom::reveal_layer(&document)?;

    let center = dom::viewport_center(&window);
    let target = Rc::new(RefCell::new(PointerTarget::new(center)));
    let chain = BlobChain::new(center);

    input::wire_pointer_handlers(target.clone());
    input::wire_resize_listener();

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        chain,
        target,
        layer,
    }));
    // Runs for the page lifetime; the handle is only needed by embedders
    // that tear the effect down.
    let _handle = frame::start_loop(frame_ctx);

    Ok(())
}
