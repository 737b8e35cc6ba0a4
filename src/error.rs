/// Failures reported by host browser APIs
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    /// The host refused to run a script in the tab
    #[error("Could not inject into tab {tab_id}: {reason}")]
    Injection { tab_id: i32, reason: String },

    /// The message round-trip to the background context failed
    #[error("Message failed: {0}")]
    Messaging(String),

    #[error("Failed to query tabs: {0}")]
    TabQuery(String),

    #[error("No active tab")]
    NoActiveTab,

    #[error("Failed to convert payload: {0}")]
    Serialization(String),
}

impl BridgeError {
    pub fn injection(tab_id: i32, reason: &JsValue) -> BridgeError {
        BridgeError::Injection {
            tab_id,
            reason: format!("{:?}", reason),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for BridgeError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        BridgeError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = BridgeError::Injection {
            tab_id: 4,
            reason: "Cannot access a chrome:// URL".to_string(),
        };
        assert_eq!(e.to_string(), "Could not inject into tab 4: Cannot access a chrome:// URL");
        assert_eq!(BridgeError::NoActiveTab.to_string(), "No active tab");
        assert_eq!(
            BridgeError::Messaging("Receiving end does not exist".to_string()).to_string(),
            "Message failed: Receiving end does not exist"
        );
    }
}
