#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod frame;
mod loader;
mod search;
mod svg;

pub use loader::LoaderThreeDots;
pub use search::FacetedSearch;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("facet-web starting");
    Ok(())
}
