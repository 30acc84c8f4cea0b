#![cfg(target_arch = "wasm32")]
use glass_core::GlassParams;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod constants;
mod dom;
mod events;
mod filter;
mod input;
mod panel;
mod surface;

use constants::{EFFECT_SELECTOR, PANE_CONTAINER_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glass-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root: web::HtmlElement = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let effect = dom::query_html(&document, EFFECT_SELECTOR)?;
    let nodes = filter::mount(&document, &effect)?;
    let surface = surface::DomSurface::new(nodes, root);

    let container = document
        .get_element_by_id(PANE_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", PANE_CONTAINER_ID))?;
    let params = GlassParams::default();
    panel::build(&document, &container, &params)?;

    // First sync happens in `new`, before the panel can fire any change.
    let app = app::GlassApp::new(params, surface, container.clone());
    panel::wire(&container, app);

    events::place_over_placeholder(&document, &effect);
    events::wire_drag(&effect);
    Ok(())
}
