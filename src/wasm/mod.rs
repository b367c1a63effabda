use wasm_bindgen::prelude::*;

use crate::config::{Settings, View};
use crate::error::CraftError;
use crate::logging;

pub mod aurora;
pub mod dom;
pub mod grid;
pub mod onboard;
pub mod palette;
pub mod render;

/// Entry point: mounts the showcase named by `<body data-view>`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    logging::install_panic_hook();

    let window = web_sys::window().ok_or(CraftError::Context("window"))?;
    let document = window.document().ok_or(CraftError::Context("document"))?;
    let settings = Settings::load(&window.location().search()?)?;

    let view: View = document
        .body()
        .and_then(|body| body.get_attribute("data-view"))
        .unwrap_or_default()
        .parse()?;
    log::info!("mounting {view:?} ({settings:?})");

    match view {
        View::Home => Ok(()),
        View::Grid => grid::mount(&document, &dom::by_id(&document, "grid")?, &settings),
        View::Onboard => onboard::mount(&document, &dom::by_id(&document, "onboard")?, &settings),
        View::Palette => palette::mount(&document, &dom::by_id(&document, "palette")?),
    }
}
