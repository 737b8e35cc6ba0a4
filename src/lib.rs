/// URL Sentinel - browser extension that warns about known malicious domains
/// Built with Rust + WASM + Yew

mod background;
pub mod domain;
pub mod error;
pub mod messages;
pub mod monitor;
pub mod service;
pub mod threat_list;
pub mod ui;
pub mod warning;

use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::service::QueryService;
use crate::threat_list::ThreatList;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export core domain functions for JavaScript access
#[wasm_bindgen]
pub fn extract_domain(url: &str) -> Option<String> {
    domain::extract_domain(url)
}

thread_local! {
    // Built on first use, then shared by every direct check
    static REFERENCE_SERVICE: QueryService = QueryService::new(Rc::new(ThreatList::reference()));
}

/// Check a URL against the shipped list without a message round-trip
#[wasm_bindgen]
pub fn check_url(url: &str) -> Result<JsValue, JsValue> {
    let result = REFERENCE_SERVICE.with(|service| service.check_url(url));

    result
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

// Start navigation monitoring and the query service in the background context
#[wasm_bindgen]
pub fn start_background() {
    background::start(ThreatList::reference());
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
