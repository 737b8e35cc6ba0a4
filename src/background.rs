/// Background context: wires host events to the monitor and query service
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::monitor::{NavigationEvent, NavigationMonitor};
use crate::service::QueryService;
use crate::threat_list::ThreatList;
use crate::warning::ScriptingPresenter;

// Import JS bridge functions
#[wasm_bindgen(module = "/background.js")]
extern "C" {
    fn setCommittedHandler(callback: &Closure<dyn Fn(JsValue)>);

    fn setMessageHandler(callback: &Closure<dyn Fn(JsValue) -> JsValue>);
}

/// Install the navigation and message handlers for the lifetime of the context.
///
/// The host listeners themselves are registered by the worker script before
/// the module loads; they wait for this call before dispatching.
pub fn start(threats: ThreatList) {
    let threats = Rc::new(threats);

    log::info!("Malicious URL Detector is now active!");
    log::info!("Currently monitoring {} known malicious domains", threats.count());

    let monitor = NavigationMonitor::new(threats.clone(), ScriptingPresenter);
    let on_committed = Closure::wrap(Box::new(move |details: JsValue| {
        match serde_wasm_bindgen::from_value::<NavigationEvent>(details) {
            Ok(event) => {
                monitor.on_committed(&event);
            }
            Err(e) => log::error!("Unreadable navigation details: {:?}", e),
        }
    }) as Box<dyn Fn(JsValue)>);

    let service = QueryService::new(threats);
    let on_message = Closure::wrap(Box::new(move |request: JsValue| {
        respond(&service, request)
    }) as Box<dyn Fn(JsValue) -> JsValue>);

    setCommittedHandler(&on_committed);
    setMessageHandler(&on_message);

    // Handlers stay installed until the context is torn down
    on_committed.forget();
    on_message.forget();
}

/// Returns `undefined` for requests that get no reply
fn respond(service: &QueryService, request: JsValue) -> JsValue {
    let message = match serde_wasm_bindgen::from_value::<serde_json::Value>(request) {
        Ok(message) => message,
        Err(e) => {
            log::debug!("Ignoring non-JSON message: {:?}", e);
            return JsValue::UNDEFINED;
        }
    };

    let Some(response) = service.handle_value(message) else {
        return JsValue::UNDEFINED;
    };

    match response.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
        Ok(value) => value,
        Err(e) => {
            log::error!("Failed to serialize response: {:?}", e);
            JsValue::UNDEFINED
        }
    }
}
