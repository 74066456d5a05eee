use crate::dom;
use crate::frame::{self, FrameSlot, WebFrameHost};
use facet_core::LoaderDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Three pulsing dots shown while results load.
#[wasm_bindgen]
pub struct LoaderThreeDots {
    driver: Rc<RefCell<LoaderDriver<WebFrameHost>>>,
    callback: FrameSlot,
    svg: web::Element,
}

#[wasm_bindgen]
impl LoaderThreeDots {
    /// Render the loader into `container` and start animating it.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: web::Element,
        class_name: Option<String>,
    ) -> Result<LoaderThreeDots, JsValue> {
        Self::mount(&container, class_name.as_deref())
            .map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    /// Stop the animation and detach the loader. Safe to call twice.
    pub fn unmount(&mut self) {
        self.driver.borrow_mut().unmount();
        self.svg.remove();
    }
}

impl LoaderThreeDots {
    fn mount(container: &web::Element, class_name: Option<&str>) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

        let callback: FrameSlot = Rc::new(RefCell::new(None));
        let host = WebFrameHost::new(window, container.clone(), callback.clone());
        let driver = LoaderDriver::with_preset(host)?;

        let (svg, circles) = dom::build_loader_svg(&document, class_name, driver.frame())?;
        container
            .append_child(&svg)
            .map_err(|e| anyhow::anyhow!("append loader: {:?}", e))?;

        let driver = Rc::new(RefCell::new(driver));
        frame::start_loop(driver.clone(), &callback, circles);
        log::info!("loader mounted");

        Ok(Self {
            driver,
            callback,
            svg,
        })
    }
}

impl Drop for LoaderThreeDots {
    fn drop(&mut self) {
        if let Ok(mut driver) = self.driver.try_borrow_mut() {
            driver.unmount();
        }
        // breaks the closure -> driver -> host -> slot cycle
        self.callback.borrow_mut().take();
    }
}
