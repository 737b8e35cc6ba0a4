/// Navigation monitoring: evaluate committed navigations against the threat list
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::domain::extract_domain;
use crate::threat_list::ThreatList;

/// Frame id the host uses for a tab's outermost frame
pub const TOP_LEVEL_FRAME_ID: i32 = 0;

/// One committed page load, as delivered by `webNavigation.onCommitted`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEvent {
    pub tab_id: i32,
    pub frame_id: i32,
    pub url: String,
}

impl NavigationEvent {
    pub fn new(tab_id: i32, frame_id: i32, url: String) -> NavigationEvent {
        NavigationEvent {
            tab_id,
            frame_id,
            url,
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.frame_id == TOP_LEVEL_FRAME_ID
    }
}

/// What the monitor decided about a navigation
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationVerdict {
    /// Sub-frame load; never checked
    Ignored,
    Safe { domain: Option<String> },
    Malicious { tab_id: i32, domain: String },
}

/// Receives warnings for flagged navigations.
///
/// Implementations must not block: the navigation has already committed and
/// the warning is advisory.
pub trait WarningSink {
    fn warn(&self, tab_id: i32, domain: &str);
}

pub struct NavigationMonitor<W: WarningSink> {
    threats: Rc<ThreatList>,
    sink: W,
}

impl<W: WarningSink> NavigationMonitor<W> {
    pub fn new(threats: Rc<ThreatList>, sink: W) -> NavigationMonitor<W> {
        NavigationMonitor { threats, sink }
    }

    /// Classify a navigation without side effects
    pub fn evaluate(&self, event: &NavigationEvent) -> NavigationVerdict {
        if !event.is_top_level() {
            return NavigationVerdict::Ignored;
        }

        match extract_domain(&event.url) {
            Some(domain) if self.threats.is_malicious(Some(domain.as_str())) => {
                NavigationVerdict::Malicious {
                    tab_id: event.tab_id,
                    domain,
                }
            }
            domain => NavigationVerdict::Safe { domain },
        }
    }

    /// Evaluate a navigation and warn the user on a match
    pub fn on_committed(&self, event: &NavigationEvent) -> NavigationVerdict {
        let verdict = self.evaluate(event);

        match &verdict {
            NavigationVerdict::Ignored => {}
            NavigationVerdict::Safe { domain: Some(domain) } => {
                log::info!("Safe site: {}", domain);
            }
            NavigationVerdict::Safe { domain: None } => {
                log::debug!("No domain for navigation to {:?}", event.url);
            }
            NavigationVerdict::Malicious { tab_id, domain } => {
                log::warn!("MALICIOUS SITE DETECTED: {}", domain);
                log::warn!("Full URL: {}", event.url);
                self.sink.warn(*tab_id, domain);
            }
        }

        verdict
    }

    #[cfg(test)]
    fn sink(&self) -> &W {
        &self.sink
    }
}
