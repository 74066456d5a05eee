use crate::dom;
use facet_core::{FrameHost, LoaderDriver};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slot holding the frame callback so the host can hand it to
/// `requestAnimationFrame` again on every reschedule.
pub type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `FrameHost` backed by the browser window and the loader's own element.
pub struct WebFrameHost {
    window: web::Window,
    element: web::Element,
    callback: FrameSlot,
}

impl WebFrameHost {
    pub fn new(window: web::Window, element: web::Element, callback: FrameSlot) -> Self {
        Self {
            window,
            element,
            callback,
        }
    }
}

impl FrameHost for WebFrameHost {
    type Handle = i32;

    fn subscribe_frame(&mut self) -> Option<i32> {
        let slot = self.callback.borrow();
        let callback = slot.as_ref()?;
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("requestAnimationFrame error: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }

    fn is_visible(&self) -> bool {
        self.element.get_bounding_client_rect().width() > 0.0
    }
}

/// Install the frame callback and mount the driver, which schedules the
/// first frame. Each published snapshot is painted onto `circles`.
pub fn start_loop(
    driver: Rc<RefCell<LoaderDriver<WebFrameHost>>>,
    slot: &FrameSlot,
    circles: Vec<web::Element>,
) {
    let driver_tick = driver.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let published = driver_tick.borrow_mut().on_frame(timestamp);
        if let Some(frame) = published {
            dom::paint_dots(&circles, &frame);
        }
    }) as Box<dyn FnMut(f64)>));
    driver.borrow_mut().mount();
}
