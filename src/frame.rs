use crate::chain::{BlobChain, PointerTarget};
use crate::mask;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one tick needs: the chain, the shared pointer target, and the
/// overlay element the mask is written to.
pub struct FrameContext {
    pub chain: BlobChain,
    pub target: Rc<RefCell<PointerTarget>>,
    pub layer: web::HtmlElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let target = self.target.borrow().pos;
        self.chain.step(target);

        let value = mask::mask_image_value(self.chain.blobs());
        let style = self.layer.style();
        let _ = style.set_property("mask-image", &value);
        let _ = style.set_property("-webkit-mask-image", &value);
    }
}

/// Handle for the self-rescheduling animation loop. Dropping it leaves the
/// loop running; `stop` ends it after the in-flight tick.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Drive `FrameContext::frame` once per display refresh via
/// requestAnimationFrame until the returned handle is stopped.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let running_tick = running.clone();

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
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
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }

    LoopHandle { running }
}
