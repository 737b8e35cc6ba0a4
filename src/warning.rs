/// In-page warnings for flagged navigations
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::error::BridgeError;
use crate::monitor::WarningSink;

// Import JS bridge functions
#[wasm_bindgen(module = "/background.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn showAlertInTab(tab_id: i32, message: &str) -> Result<(), JsValue>;
}

/// Build the modal text shown for a flagged domain
pub fn warning_message(domain: &str) -> String {
    format!(
        "⚠️ SECURITY WARNING ⚠️\n\
         \n\
         The website you're trying to visit is DANGEROUS:\n\
         {domain}\n\
         \n\
         This site may:\n\
         • Steal your passwords\n\
         • Install malware on your device\n\
         • Trick you into sharing personal information\n\
         • Steal your credit card details\n\
         \n\
         🛑 RECOMMENDATION: Leave this site immediately!\n\
         \n\
         Click OK to acknowledge this warning."
    )
}

/// Shows warnings with `chrome.scripting.executeScript` + `alert()`.
///
/// Best effort: privileged and restricted pages reject injection, and the
/// user can still continue to the site.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptingPresenter;

impl ScriptingPresenter {
    pub async fn present(&self, tab_id: i32, domain: &str) -> Result<(), BridgeError> {
        showAlertInTab(tab_id, &warning_message(domain))
            .await
            .map_err(|e| BridgeError::injection(tab_id, &e))
    }
}

impl WarningSink for ScriptingPresenter {
    fn warn(&self, tab_id: i32, domain: &str) {
        let presenter = *self;
        let domain = domain.to_string();

        spawn_local(async move {
            if let Err(e) = presenter.present(tab_id, &domain).await {
                log::error!("Could not display alert: {}", e);
                log::warn!("User should be warned about: {}", domain);
            }
        });
    }
}
