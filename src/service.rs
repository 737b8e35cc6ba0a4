/// Request/response handler backing the popup's queries
use std::rc::Rc;

use crate::domain::extract_domain;
use crate::messages::{
    DomainCheckResult, DomainCountResponse, DomainListResponse, Request, Response,
};
use crate::threat_list::ThreatList;

#[derive(Debug, Clone)]
pub struct QueryService {
    threats: Rc<ThreatList>,
}

impl QueryService {
    pub fn new(threats: Rc<ThreatList>) -> QueryService {
        QueryService { threats }
    }

    #[cfg(test)]
    pub(crate) fn threats(&self) -> &Rc<ThreatList> {
        &self.threats
    }

    pub fn check_url(&self, url: &str) -> DomainCheckResult {
        let domain = extract_domain(url);
        let is_malicious = self.threats.is_malicious(domain.as_deref());

        DomainCheckResult {
            domain,
            is_malicious,
            url: url.to_string(),
        }
    }

    pub fn handle(&self, request: &Request) -> Response {
        match request {
            Request::CheckUrl { url } => Response::Check(self.check_url(url)),
            Request::GetDomainCount => Response::Count(DomainCountResponse {
                count: self.threats.count(),
            }),
            Request::GetDomainList => Response::List(DomainListResponse {
                domains: self.threats.domains().to_vec(),
            }),
        }
    }

    /// Handle an untyped message; anything that isn't a known request gets no reply
    pub fn handle_value(&self, message: serde_json::Value) -> Option<Response> {
        match serde_json::from_value::<Request>(message) {
            Ok(request) => Some(self.handle(&request)),
            Err(e) => {
                log::debug!("Ignoring unrecognized message: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reference_service() -> QueryService {
        QueryService::new(Rc::new(ThreatList::reference()))
    }

    #[test]
    fn test_check_malicious_url() {
        let service = reference_service();

        let result = service.check_url("https://malware-test.com");

        assert_eq!(
            result,
            DomainCheckResult {
                domain: Some("malware-test.com".to_string()),
                is_malicious: true,
                url: "https://malware-test.com".to_string(),
            }
        );
    }

    #[test]
    fn test_check_safe_url() {
        let result = reference_service().check_url("https://example.com");

        assert_eq!(result.domain.as_deref(), Some("example.com"));
        assert!(!result.is_malicious);
    }

    #[test]
    fn test_check_malformed_url() {
        let result = reference_service().check_url("not a url");

        assert_eq!(result.domain, None);
        assert!(!result.is_malicious);
        assert_eq!(result.url, "not a url");
    }

    #[test]
    fn test_check_is_idempotent() {
        let service = reference_service();

        let first = service.check_url("https://www.fake-paypal.com/login?x=1");
        let second = service.check_url("https://www.fake-paypal.com/login?x=1");

        assert_eq!(first, second);
        assert!(first.is_malicious);
    }

    #[test]
    fn test_domain_count() {
        let response = reference_service().handle(&Request::GetDomainCount);

        assert_eq!(response, Response::Count(DomainCountResponse { count: 8 }));
    }

    #[test]
    fn test_domain_list_matches_threat_list() {
        let threats = Rc::new(ThreatList::new(["one.test", "two.test"]));
        let service = QueryService::new(threats.clone());

        let response = service.handle(&Request::GetDomainList);

        assert_eq!(
            response,
            Response::List(DomainListResponse {
                domains: threats.domains().to_vec(),
            })
        );
    }

    #[test]
    fn test_alternate_list() {
        let service = QueryService::new(Rc::new(ThreatList::new(["example.com"])));

        assert!(service.check_url("https://www.example.com/").is_malicious);
        assert!(!service.check_url("https://malware-test.com").is_malicious);
    }

    #[test]
    fn test_handle_value() {
        let service = reference_service();

        let response = service
            .handle_value(json!({"action": "checkUrl", "url": "https://malware-test.com"}))
            .unwrap();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"domain": "malware-test.com", "isMalicious": true, "url": "https://malware-test.com"})
        );

        let response = service.handle_value(json!({"action": "getDomainCount"})).unwrap();
        assert_eq!(serde_json::to_value(&response).unwrap(), json!({"count": 8}));
    }

    #[test]
    fn test_check_with_null_url_still_responds() {
        let service = reference_service();

        let response = service
            .handle_value(json!({"action": "checkUrl", "url": null}))
            .unwrap();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"domain": null, "isMalicious": false, "url": ""})
        );

        let response = service.handle_value(json!({"action": "checkUrl", "url": 7})).unwrap();
        assert_eq!(
            response,
            Response::Check(DomainCheckResult {
                domain: None,
                is_malicious: false,
                url: "7".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_message_gets_no_response() {
        let service = reference_service();

        assert!(service.handle_value(json!({"action": "reportSite"})).is_none());
        assert!(service.handle_value(json!(null)).is_none());
        assert!(service.handle_value(json!(42)).is_none());
    }
}
