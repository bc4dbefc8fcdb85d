//! Admin session and tab coordinator.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::dto::{LoginRequest, SessionInfo, ToggleRequest};
use crate::domain::session::UnknownTab;
use crate::domain::{AdminState, LoadTicket, RowAction, SessionState, ShortenerApi, Tab};
use crate::error::ClientError;
use crate::presentation::rows::{StatCards, UrlRow, UserRow};
use crate::presentation::view::AdminView;

pub const MISSING_CREDENTIALS: &str = "Please enter both username and password";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this URL?";

/// Gates the dashboard behind a server-verified session and drives which
/// dataset is fetched and displayed.
///
/// All methods take `&self`; overlapping calls are allowed. A tab response is
/// rendered only if no newer load, tab switch or sign-out happened while it was
/// in flight.
pub struct AdminController<A: ShortenerApi, V: AdminView> {
    api: Arc<A>,
    view: Arc<V>,
    state: Mutex<AdminState>,
}

impl<A: ShortenerApi, V: AdminView> AdminController<A, V> {
    pub fn new(api: Arc<A>, view: Arc<V>) -> Self {
        Self {
            api,
            view,
            state: Mutex::new(AdminState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, AdminState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn session_state(&self) -> SessionState {
        self.state().session()
    }

    pub fn identity(&self) -> Option<SessionInfo> {
        self.state().identity().cloned()
    }

    /// Probes the server session and shows the matching view.
    ///
    /// Any failure, including transport errors, resolves to the login view.
    pub async fn check_session(&self) -> SessionState {
        match self.api.session().await {
            Ok(identity) => self.enter_dashboard(identity).await,
            Err(e) => {
                if e.is_transport() {
                    tracing::error!(error = %e, "Authentication check failed");
                } else {
                    tracing::debug!(error = %e, "No active session");
                }
                self.state().sign_out();
                self.view.show_login();
            }
        }
        self.session_state()
    }

    /// Authenticates with the server.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] if either field is blank; nothing is sent
    /// - [`ClientError::Server`] with the server's message, shown verbatim
    /// - transport failures, shown as a generic retry message
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            self.view.show_login_error(MISSING_CREDENTIALS);
            return Err(ClientError::validation(MISSING_CREDENTIALS));
        }

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        match self.api.login(&request).await {
            Ok(identity) => {
                tracing::info!(username, "Signed in");
                self.view.hide_login_error();
                self.enter_dashboard(identity).await;
                Ok(())
            }
            Err(e) => {
                if e.server_message().is_none() {
                    tracing::error!(error = %e, "Login error");
                }
                self.view.show_login_error(e.user_message(LOGIN_FAILED));
                Err(e)
            }
        }
    }

    /// Signs out. Local state becomes anonymous whatever the server answers.
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            tracing::error!(error = %e, "Logout error");
        }
        self.state().sign_out();
        self.view.show_login();
    }

    /// Activates `tab` and loads its data. Ignored while signed out.
    pub async fn select_tab(&self, tab: Tab) {
        let activated = self.state().activate(tab);
        if !activated {
            tracing::warn!(%tab, "Ignoring tab selection while signed out");
            return;
        }
        self.view.activate_tab(tab);
        self.load_tab(tab).await;
    }

    /// Parses a `data-tab` identifier and selects it.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTab`] for identifiers other than `urls`, `users`, `analytics`.
    pub async fn select_tab_id(&self, id: &str) -> Result<(), UnknownTab> {
        let tab = id.parse::<Tab>()?;
        self.select_tab(tab).await;
        Ok(())
    }

    /// Reloads whichever tab is active.
    pub async fn refresh(&self) {
        let active = self.session_state().active_tab();
        if let Some(tab) = active {
            self.load_tab(tab).await;
        }
    }

    async fn load_tab(&self, tab: Tab) {
        match tab {
            Tab::Urls => self.load_urls().await,
            Tab::Users => self.load_users().await,
            Tab::Analytics => self.load_analytics().await,
        }
    }

    async fn enter_dashboard(&self, identity: SessionInfo) {
        let tab = self.state().enter_dashboard(identity.clone());
        self.view.show_dashboard(Some(&identity));
        self.view.activate_tab(tab);
        self.load_tab(tab).await;
    }

    fn begin_load(&self, tab: Tab) -> Option<LoadTicket> {
        let ticket = self.state().begin_load(tab);
        if ticket.is_none() {
            tracing::debug!(%tab, "Skipping load for hidden tab");
        }
        ticket
    }

    fn still_current(&self, ticket: LoadTicket) -> bool {
        let current = self.state().is_current(ticket);
        if !current {
            tracing::debug!(
                tab = %ticket.tab,
                generation = ticket.generation,
                "Discarding stale response"
            );
        }
        current
    }

    /// Fetches `/admin/urls` and replaces the URLs table.
    pub async fn load_urls(&self) {
        let Some(ticket) = self.begin_load(Tab::Urls) else {
            return;
        };

        match self.api.list_urls().await {
            Ok(urls) => {
                if self.still_current(ticket) {
                    let rows: Vec<UrlRow> = urls.iter().map(UrlRow::from).collect();
                    self.view.render_urls(&rows);
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to load URLs"),
        }
    }

    /// Fetches `/admin/users` and replaces the users table.
    pub async fn load_users(&self) {
        let Some(ticket) = self.begin_load(Tab::Users) else {
            return;
        };

        match self.api.list_users().await {
            Ok(users) => {
                if self.still_current(ticket) {
                    let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
                    self.view.render_users(&rows);
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to load users"),
        }
    }

    /// Fetches `/admin/dashboard/stats` and replaces the summary cards.
    pub async fn load_analytics(&self) {
        let Some(ticket) = self.begin_load(Tab::Analytics) else {
            return;
        };

        match self.api.dashboard_stats().await {
            Ok(stats) => {
                if self.still_current(ticket) {
                    self.view.render_analytics(&StatCards::from(&stats));
                }
            }
            Err(e) => tracing::error!(error = %e, "Error loading analytics"),
        }
    }

    /// Flips a URL's active flag, then reloads the URLs table regardless of outcome.
    ///
    /// A toggle issued from another tab brings the URLs tab forward first.
    pub async fn toggle_url_active(&self, id: i64, currently_active: bool) {
        let request = ToggleRequest {
            is_active: !currently_active,
        };
        match self.api.toggle_url(id, request).await {
            Ok(()) => tracing::info!(url_id = id, is_active = request.is_active, "URL toggled"),
            Err(e) => tracing::error!(error = %e, url_id = id, "Failed to toggle URL"),
        }
        self.resync_urls().await;
    }

    /// Deletes a URL after confirmation, then reloads the URLs table on the
    /// URLs tab.
    ///
    /// Declining the confirmation issues no request at all.
    pub async fn delete_url(&self, id: i64) {
        if !self.view.confirm(DELETE_PROMPT) {
            tracing::debug!(url_id = id, "Delete cancelled");
            return;
        }

        match self.api.delete_url(id).await {
            Ok(()) => tracing::info!(url_id = id, "URL deleted"),
            Err(e) => tracing::error!(error = %e, url_id = id, "Failed to delete URL"),
        }
        self.resync_urls().await;
    }

    /// Reloads the URLs table after a mutation, switching to it if another
    /// tab is showing. Does nothing once signed out.
    async fn resync_urls(&self) {
        let switched = {
            let mut state = self.state();
            match state.session().active_tab() {
                Some(Tab::Urls) | None => false,
                Some(_) => state.activate(Tab::Urls),
            }
        };
        if switched {
            self.view.activate_tab(Tab::Urls);
        }
        self.load_urls().await;
    }

    /// Delegated handler for every button in the URLs table.
    pub async fn dispatch(&self, action: RowAction) {
        match action {
            RowAction::Toggle { id, is_active } => self.toggle_url_active(id, is_active).await,
            RowAction::Delete { id } => self.delete_url(id).await,
        }
    }
}
