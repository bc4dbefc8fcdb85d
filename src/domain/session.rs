//! Admin session and tab state machine.
//!
//! The login view and the dashboard are mutually exclusive, and so are the
//! three dashboard tabs. Every data load takes a [`LoadTicket`] stamped with the
//! current request generation; a response is rendered only while its ticket
//! is still current.

use std::fmt;
use std::str::FromStr;

use crate::api::dto::SessionInfo;

/// Dashboard tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Urls,
    Users,
    Analytics,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Urls, Tab::Users, Tab::Analytics];

    /// Identifier used by tab buttons (`data-tab`).
    pub fn id(self) -> &'static str {
        match self {
            Tab::Urls => "urls",
            Tab::Users => "users",
            Tab::Analytics => "analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Urls => "URLs",
            Tab::Users => "Users",
            Tab::Analytics => "Analytics",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown tab '{0}' (expected urls, users or analytics)")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "urls" => Ok(Tab::Urls),
            "users" => Ok(Tab::Users),
            "analytics" => Ok(Tab::Analytics),
            other => Err(UnknownTab(other.to_string())),
        }
    }
}

/// Which of the two top-level views is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated {
        tab: Tab,
    },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn active_tab(&self) -> Option<Tab> {
        match self {
            SessionState::Authenticated { tab } => Some(*tab),
            SessionState::Anonymous => None,
        }
    }
}

/// Proof that a load was started for `tab` at `generation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub tab: Tab,
    pub generation: u64,
}

/// Mutable state owned by the admin controller.
#[derive(Debug, Default)]
pub struct AdminState {
    session: SessionState,
    identity: Option<SessionInfo>,
    generation: u64,
}

impl AdminState {
    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn identity(&self) -> Option<&SessionInfo> {
        self.identity.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Enters the dashboard on its default tab.
    pub fn enter_dashboard(&mut self, identity: SessionInfo) -> Tab {
        let tab = Tab::default();
        self.session = SessionState::Authenticated { tab };
        self.identity = Some(identity);
        self.generation += 1;
        tab
    }

    /// Returns to the login view. Outstanding tickets become stale.
    pub fn sign_out(&mut self) {
        self.session = SessionState::Anonymous;
        self.identity = None;
        self.generation += 1;
    }

    /// Switches the active tab. Returns `false` while anonymous.
    pub fn activate(&mut self, tab: Tab) -> bool {
        match self.session {
            SessionState::Authenticated { .. } => {
                self.session = SessionState::Authenticated { tab };
                true
            }
            SessionState::Anonymous => false,
        }
    }

    /// Starts a load for `tab`, superseding every earlier ticket.
    ///
    /// Returns `None` unless `tab` is the visible tab of an authenticated session.
    pub fn begin_load(&mut self, tab: Tab) -> Option<LoadTicket> {
        if self.session.active_tab() != Some(tab) {
            return None;
        }
        self.generation += 1;
        Some(LoadTicket {
            tab,
            generation: self.generation,
        })
    }

    /// True if no newer load, tab switch away, or sign-out happened since `ticket`.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.generation && self.session.active_tab() == Some(ticket.tab)
    }
}
