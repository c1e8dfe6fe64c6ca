//! Pointer and touch listener wiring. Handlers only overwrite the shared
//! target coordinate; all motion happens in the frame tick.

use crate::chain::PointerTarget;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(target: Rc<RefCell<PointerTarget>>) {
    let Some(window) = web::window() else {
        return;
    };

    // pointermove
    {
        let target_m = target.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            target_m
                .borrow_mut()
                .set(ev.client_x() as f32, ev.client_y() as f32);
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // touchmove, registered non-passive so preventDefault is honored
    {
        let target_m = target.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            let point = ev
                .touches()
                .get(0)
                .map(|t| (t.client_x() as f32, t.client_y() as f32));
            if point.is_some() {
                // keep the page from scrolling under the effect
                ev.prevent_default();
            }
            target_m.borrow_mut().apply_touch(point);
        }) as Box<dyn FnMut(_)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }
}

/// Observe viewport resizes. Intentionally changes nothing: the chain drifts
/// back toward wherever the pointer goes next, so there is no state to fix
/// up. Kept as an explicit hook point.
pub fn wire_resize_listener() {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || {}) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
