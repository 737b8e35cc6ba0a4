/// Known-malicious domain list
use std::collections::HashSet;

use crate::domain::strip_www;

/// Domains shipped with the extension
pub const REFERENCE_DOMAINS: [&str; 8] = [
    "phishing-example.com",
    "malware-test.com",
    "scam-website.net",
    "fake-bank-login.com",
    "virus-download.org",
    "steal-passwords.net",
    "fake-paypal.com",
    "credit-card-scam.org",
];

/// An immutable set of normalized host names.
///
/// Entries are lowercased and have one leading "www." removed when the list
/// is built, so lookups are plain equality against extracted domains.
/// Insertion order is kept for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreatList {
    domains: Vec<String>,
    index: HashSet<String>,
}

impl ThreatList {
    pub fn new<I, S>(domains: I) -> ThreatList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = ThreatList {
            domains: Vec::new(),
            index: HashSet::new(),
        };

        for raw in domains {
            let lowered = raw.as_ref().trim().to_ascii_lowercase();
            let domain = strip_www(&lowered);
            if domain.is_empty() || list.index.contains(domain) {
                continue;
            }
            list.index.insert(domain.to_string());
            list.domains.push(domain.to_string());
        }

        list
    }

    /// The list the extension ships with
    pub fn reference() -> ThreatList {
        ThreatList::new(REFERENCE_DOMAINS)
    }

    /// Absent or empty domains never match
    pub fn is_malicious(&self, domain: Option<&str>) -> bool {
        match domain {
            Some(d) if !d.is_empty() => self.index.contains(d),
            _ => false,
        }
    }

    pub fn count(&self) -> usize {
        self.domains.len()
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }
}

impl Default for ThreatList {
    fn default() -> Self {
        Self::reference()
    }
}
