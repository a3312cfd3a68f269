//! Chat widget — WASM entry point.
//!
//! This crate is the composition root: it reads the host configuration,
//! assembles the platform adapters, and hands them to the egui UI.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use widget_types::config::WidgetConfig;

/// WASM entry point — called from the host page
#[wasm_bindgen(start)]
pub async fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Chat widget starting...");

    let web_options = eframe::WebOptions::default();

    // Get the canvas element by ID
    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");
    let canvas = document
        .get_element_by_id("chat_widget_canvas")
        .expect("No canvas element with id 'chat_widget_canvas'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Element is not a canvas");

    // Host pages configure the widget through data attributes on the canvas
    let mut config = WidgetConfig::default();
    if let Some(embed_id) = canvas.get_attribute("data-embed-id") {
        config.embed_id = embed_id;
    }
    if let Some(api_base) = canvas.get_attribute("data-api-base") {
        config.api_base = api_base;
    }
    if let Some(title) = canvas.get_attribute("data-title") {
        config.title = title;
    }

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::WidgetApp::new(cc, config)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
