/// Popup view state: status rows, transient result panels, monitored list
use std::rc::Rc;

use serde::Deserialize;
use yew::Reducible;

use crate::messages::DomainCheckResult;

/// How long a result panel stays visible
pub const RESULT_DISMISS_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub enum CountDisplay {
    Loading,
    Known(usize),
    Unknown,
}

impl CountDisplay {
    pub fn label(&self) -> String {
        match self {
            CountDisplay::Loading => "...".to_string(),
            CountDisplay::Known(count) => count.to_string(),
            CountDisplay::Unknown => "unknown".to_string(),
        }
    }
}

/// Active tab as returned by `chrome.tabs.query`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActiveTab {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageInfo {
    Loading,
    Loaded { url: String },
    Unavailable,
}

impl PageInfo {
    pub fn from_tab(tab: Option<ActiveTab>) -> PageInfo {
        match tab {
            Some(ActiveTab { url: Some(url) }) => PageInfo::Loaded { url },
            _ => PageInfo::Unavailable,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            PageInfo::Loaded { url } => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PageInfo::Loading => "Loading...",
            PageInfo::Loaded { url } => url.as_str(),
            PageInfo::Unavailable => "Unable to load",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultKind {
    Danger,
    Safe,
    Error,
}

impl ResultKind {
    /// CSS modifier for the status box
    pub fn class(&self) -> &'static str {
        match self {
            ResultKind::Danger => "warning",
            ResultKind::Safe => "active",
            ResultKind::Error => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultContent {
    pub kind: ResultKind,
    pub title: String,
    pub message: String,
}

impl ResultContent {
    pub fn from_check(result: &DomainCheckResult) -> ResultContent {
        let subject = result.domain.as_deref().unwrap_or("This page");

        if result.is_malicious {
            ResultContent {
                kind: ResultKind::Danger,
                title: "⚠️ THREAT DETECTED!".to_string(),
                message: format!(
                    "{} is a known malicious website. Do not enter any personal information!",
                    subject
                ),
            }
        } else {
            ResultContent {
                kind: ResultKind::Safe,
                title: "✅ Site Appears Safe".to_string(),
                message: format!("{} is not in our database of malicious sites.", subject),
            }
        }
    }

    pub fn error() -> ResultContent {
        ResultContent {
            kind: ResultKind::Error,
            title: "❌ Error".to_string(),
            message: "Could not check the current page. Please try again.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub id: u32,
    pub content: ResultContent,
}

pub enum PanelAction {
    Show(ResultPanel),
    Dismiss(u32),
}

/// Visible result panels, newest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultPanels {
    pub panels: Vec<ResultPanel>,
}

impl Reducible for ResultPanels {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut panels = self.panels.clone();

        match action {
            PanelAction::Show(panel) => panels.insert(0, panel),
            PanelAction::Dismiss(id) => panels.retain(|p| p.id != id),
        }

        Rc::new(ResultPanels { panels })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomainListView {
    Hidden,
    Loading,
    Shown(Vec<String>),
    Failed(String),
}
