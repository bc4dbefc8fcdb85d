//! Recording view used by controller unit tests.

use std::sync::Mutex;

use crate::api::dto::SessionInfo;
use crate::domain::{ChartKind, QrImage, Tab};
use crate::presentation::charts::ChartConfig;
use crate::presentation::rows::{ActivityRow, StatCards, UrlRow, UserRow};
use crate::presentation::view::{AdminView, AnalyticsView, LandingView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    ShowLogin,
    ShowDashboard(Option<String>),
    LoginError(String),
    HideLoginError,
    ActivateTab(Tab),
    Urls(Vec<UrlRow>),
    Users(Vec<UserRow>),
    Analytics(StatCards),
    Confirm(String),
    Result(String),
    HideResult,
    Error(String),
    HideError,
    Preview(String),
    Qr(QrImage),
    QrUnavailable(String),
    Stats(StatCards),
    InitChart(ChartKind),
    UpdateChart(ChartConfig),
    Activity(Vec<ActivityRow>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visible {
    Login,
    Dashboard,
}

#[derive(Debug, Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
    confirm_answer: bool,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirming(answer: bool) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            confirm_answer: answer,
        }
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }

    /// Which top-level view the last show call left visible.
    pub fn visible(&self) -> Option<Visible> {
        self.events().iter().rev().find_map(|e| match e {
            ViewEvent::ShowLogin => Some(Visible::Login),
            ViewEvent::ShowDashboard(_) => Some(Visible::Dashboard),
            _ => None,
        })
    }

    pub fn last_urls(&self) -> Option<Vec<UrlRow>> {
        self.events().into_iter().rev().find_map(|e| match e {
            ViewEvent::Urls(rows) => Some(rows),
            _ => None,
        })
    }
}

impl AdminView for RecordingView {
    fn show_login(&self) {
        self.push(ViewEvent::ShowLogin);
    }

    fn show_dashboard(&self, identity: Option<&SessionInfo>) {
        self.push(ViewEvent::ShowDashboard(
            identity.and_then(|i| i.username.clone()),
        ));
    }

    fn show_login_error(&self, message: &str) {
        self.push(ViewEvent::LoginError(message.to_string()));
    }

    fn hide_login_error(&self) {
        self.push(ViewEvent::HideLoginError);
    }

    fn activate_tab(&self, tab: Tab) {
        self.push(ViewEvent::ActivateTab(tab));
    }

    fn render_urls(&self, rows: &[UrlRow]) {
        self.push(ViewEvent::Urls(rows.to_vec()));
    }

    fn render_users(&self, rows: &[UserRow]) {
        self.push(ViewEvent::Users(rows.to_vec()));
    }

    fn render_analytics(&self, cards: &StatCards) {
        self.push(ViewEvent::Analytics(cards.clone()));
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.push(ViewEvent::Confirm(prompt.to_string()));
        self.confirm_answer
    }
}

impl LandingView for RecordingView {
    fn show_result(&self, short_url: &str) {
        self.push(ViewEvent::Result(short_url.to_string()));
    }

    fn hide_result(&self) {
        self.push(ViewEvent::HideResult);
    }

    fn show_error(&self, message: &str) {
        self.push(ViewEvent::Error(message.to_string()));
    }

    fn hide_error(&self) {
        self.push(ViewEvent::HideError);
    }

    fn show_preview(&self, text: &str) {
        self.push(ViewEvent::Preview(text.to_string()));
    }

    fn show_qr_code(&self, image: &QrImage) {
        self.push(ViewEvent::Qr(image.clone()));
    }

    fn qr_unavailable(&self, message: &str) {
        self.push(ViewEvent::QrUnavailable(message.to_string()));
    }
}

impl AnalyticsView for RecordingView {
    fn render_stats(&self, cards: &StatCards) {
        self.push(ViewEvent::Stats(cards.clone()));
    }

    fn init_chart(&self, chart: &ChartConfig) {
        self.push(ViewEvent::InitChart(chart.kind));
    }

    fn update_chart(&self, chart: &ChartConfig) {
        self.push(ViewEvent::UpdateChart(chart.clone()));
    }

    fn render_recent_activity(&self, rows: &[ActivityRow]) {
        self.push(ViewEvent::Activity(rows.to_vec()));
    }
}
