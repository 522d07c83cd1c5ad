//! Arrival context for an incoming link.
//!
//! Read-only metadata supplied by the caller. The classifier only branches on
//! `LinkSource::QuickAction` (the input is then a shortcut identifier, not a
//! URL); everything else is carried through to the result for the router.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the link reached the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkSource {
    /// Opened through the app's own URL scheme (e.g. from another app).
    #[default]
    CustomScheme,
    /// HTTPS link routed to the app by the OS.
    UniversalLink,
    /// Tapped from a push notification payload.
    PushNotification,
    /// A document handed over with "Open in…".
    OpenIn,
    /// Home-screen quick action; the input is a shortcut type identifier.
    QuickAction,
}

impl LinkSource {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkSource::CustomScheme => "custom-scheme",
            LinkSource::UniversalLink => "universal-link",
            LinkSource::PushNotification => "push-notification",
            LinkSource::OpenIn => "open-in",
            LinkSource::QuickAction => "quick-action",
        }
    }
}

impl fmt::Display for LinkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LinkSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "custom-scheme" | "scheme" => Ok(LinkSource::CustomScheme),
            "universal-link" | "universal" => Ok(LinkSource::UniversalLink),
            "push-notification" | "push" => Ok(LinkSource::PushNotification),
            "open-in" => Ok(LinkSource::OpenIn),
            "quick-action" | "shortcut" => Ok(LinkSource::QuickAction),
            other => Err(format!("unknown link source: {other}")),
        }
    }
}

/// Whether the app was already running when the link arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LaunchState {
    ColdStart,
    #[default]
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DispatchContext {
    pub source: LinkSource,
    pub launch: LaunchState,
}

impl DispatchContext {
    pub fn new(source: LinkSource, launch: LaunchState) -> Self {
        Self { source, launch }
    }

    /// Context for a quick action delivered to a running app.
    pub fn quick_action() -> Self {
        Self::new(LinkSource::QuickAction, LaunchState::Running)
    }

    pub fn is_cold_start(&self) -> bool {
        self.launch == LaunchState::ColdStart
    }
}
