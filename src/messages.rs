/// Messages exchanged between the popup and the background context
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A request to the background query service, tagged by `action`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    CheckUrl {
        #[serde(default, deserialize_with = "lenient_url")]
        url: String,
    },
    GetDomainCount,
    GetDomainList,
}

/// Accept whatever the caller put in `url`; non-strings simply fail extraction
fn lenient_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(url) => url,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Outcome of checking one URL against the threat list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainCheckResult {
    #[serde(default)]
    pub domain: Option<String>,
    pub is_malicious: bool,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainCountResponse {
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainListResponse {
    pub domains: Vec<String>,
}

/// Reply payload; serialized without a tag so each kind keeps its own shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Check(DomainCheckResult),
    Count(DomainCountResponse),
    List(DomainListResponse),
}
