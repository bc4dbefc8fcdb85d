#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Form, Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use url_shortener_console::api::dto::SessionInfo;
use url_shortener_console::domain::{QrImage, Tab};
use url_shortener_console::infrastructure::http::HttpShortenerApi;
use url_shortener_console::presentation::{
    ActivityRow, AdminView, AnalyticsView, ChartConfig, LandingView, StatCards, UrlRow, UserRow,
};

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";
/// Base64 of the 8-byte PNG signature.
pub const PNG_BASE64: &str = "iVBORw0KGgo=";

const SESSION_COOKIE: &str = "session=fake-admin";

/// Mutable state behind the fake shortener server.
#[derive(Default)]
pub struct FakeState {
    pub urls: Mutex<Vec<Value>>,
    pub users: Mutex<Vec<Value>>,
    /// `"METHOD /path"` for every request received, in arrival order.
    pub requests: Mutex<Vec<String>>,
    /// Artificial latency per route key (`"urls"`, `"users"`, `"stats"`, `"preview"`, `"qr"`, ...).
    pub delays: Mutex<HashMap<&'static str, Duration>>,
    /// Route keys answered with a 500.
    pub failing: Mutex<Vec<&'static str>>,
    pub last_shorten_form: Mutex<Option<HashMap<String, String>>>,
    pub last_toggle_body: Mutex<Option<Value>>,
}

impl FakeState {
    pub fn with_urls(urls: Vec<Value>) -> Self {
        let state = Self::default();
        *state.urls.lock().unwrap() = urls;
        state
    }

    fn record(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }

    async fn pause(&self, key: &str) {
        let delay = self.delays.lock().unwrap().get(key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn fails(&self, key: &str) -> bool {
        self.failing.lock().unwrap().iter().any(|k| *k == key)
    }
}

pub struct FakeServer {
    pub base_url: String,
    pub state: Arc<FakeState>,
}

impl FakeServer {
    pub async fn start(state: FakeState) -> Self {
        let state = Arc::new(state);
        let app = router(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn api(&self) -> Arc<HttpShortenerApi> {
        Arc::new(HttpShortenerApi::new(&self.base_url, Some(Duration::from_secs(5))).unwrap())
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn count(&self, request: &str) -> usize {
        self.requests().iter().filter(|r| *r == request).count()
    }

    pub fn delay(&self, key: &'static str, millis: u64) {
        self.state
            .delays
            .lock()
            .unwrap()
            .insert(key, Duration::from_millis(millis));
    }

    pub fn fail(&self, key: &'static str) {
        self.state.failing.lock().unwrap().push(key);
    }
}

pub fn url_json(id: i64, code: &str, is_active: Value) -> Value {
    json!({
        "id": id,
        "short_code": code,
        "original_url": "http://x",
        "clicks": 5,
        "created_at": "2024-01-01 12:30:00",
        "is_active": is_active,
    })
}

type Shared = State<Arc<FakeState>>;

fn router(state: Arc<FakeState>) -> Router {
    Router::new()
        .route("/admin/session", get(session))
        .route("/admin/login", post(login))
        .route("/admin/logout", post(logout))
        .route("/admin/urls", get(list_urls))
        .route("/admin/urls/{id}/toggle", post(toggle_url))
        .route("/admin/urls/{id}/delete", post(delete_url))
        .route("/admin/users", get(list_users))
        .route("/admin/dashboard/stats", get(dashboard_stats))
        .route("/admin/dashboard/chart/{slug}", get(chart))
        .route("/admin/dashboard/recent", get(recent_activity))
        .route("/shorten", post(shorten))
        .route("/preview/{code}", get(preview))
        .route("/qr/{code}", get(qr_code))
        .with_state(state)
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn signed_in(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|cookies| cookies.split(';').any(|c| c.trim() == SESSION_COOKIE))
}

async fn session(State(state): Shared, headers: HeaderMap) -> Response {
    state.record("GET /admin/session".to_string());
    if !signed_in(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Not authenticated");
    }
    Json(json!({ "user_id": 1, "username": USERNAME, "is_admin": 1 })).into_response()
}

async fn login(State(state): Shared, Json(body): Json<Value>) -> Response {
    state.record("POST /admin/login".to_string());
    if body["username"] != USERNAME || body["password"] != PASSWORD {
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    (
        [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/; HttpOnly"))],
        Json(json!({ "user_id": 1, "username": USERNAME, "is_admin": true })),
    )
        .into_response()
}

async fn logout(State(state): Shared) -> Response {
    state.record("POST /admin/logout".to_string());
    (
        [(header::SET_COOKIE, "session=; Path=/; Max-Age=0")],
        Json(json!({ "success": true })),
    )
        .into_response()
}

async fn list_urls(State(state): Shared, headers: HeaderMap) -> Response {
    state.record("GET /admin/urls".to_string());
    state.pause("urls").await;
    if !signed_in(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Not authenticated");
    }
    if state.fails("urls") {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "database is locked");
    }
    let urls = state.urls.lock().unwrap().clone();
    Json(Value::Array(urls)).into_response()
}

async fn toggle_url(State(state): Shared, Path(id): Path<i64>, Json(body): Json<Value>) -> Response {
    state.record(format!("POST /admin/urls/{id}/toggle"));
    *state.last_toggle_body.lock().unwrap() = Some(body.clone());

    let mut urls = state.urls.lock().unwrap();
    match urls.iter_mut().find(|u| u["id"] == id) {
        Some(url) => {
            url["is_active"] = body["is_active"].clone();
            Json(json!({ "success": true, "is_active": body["is_active"] })).into_response()
        }
        None => error(StatusCode::NOT_FOUND, "URL not found"),
    }
}

async fn delete_url(State(state): Shared, Path(id): Path<i64>) -> Response {
    state.record(format!("POST /admin/urls/{id}/delete"));
    let mut urls = state.urls.lock().unwrap();
    let before = urls.len();
    urls.retain(|u| u["id"] != id);
    if urls.len() == before {
        return error(StatusCode::NOT_FOUND, "URL not found");
    }
    Json(json!({ "success": true })).into_response()
}

async fn list_users(State(state): Shared, headers: HeaderMap) -> Response {
    state.record("GET /admin/users".to_string());
    state.pause("users").await;
    if !signed_in(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Not authenticated");
    }
    let users = state.users.lock().unwrap().clone();
    Json(Value::Array(users)).into_response()
}

async fn dashboard_stats(State(state): Shared) -> Response {
    state.record("GET /admin/dashboard/stats".to_string());
    state.pause("stats").await;
    if state.fails("stats") {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "database is locked");
    }
    Json(json!({
        "total_urls": 2,
        "total_clicks": 12,
        "active_urls": 1,
        "top_country": null,
    }))
    .into_response()
}

async fn chart(State(state): Shared, Path(slug): Path<String>) -> Response {
    state.record(format!("GET /admin/dashboard/chart/{slug}"));
    let series = match slug.as_str() {
        "clicks-over-time" => json!({ "labels": ["2024-01-01", "2024-01-02"], "clicks": [3, 9] }),
        "geographic-distribution" => {
            if state.fails("geo") {
                return error(StatusCode::INTERNAL_SERVER_ERROR, "database is locked");
            }
            json!({ "labels": ["US", "DE"], "clicks": [7, 5] })
        }
        "top-urls" => json!({ "labels": ["abc"], "clicks": [12] }),
        "device-types" => json!({
            "labels": ["Desktop", "Mobile", "Tablet", "Other"],
            "clicks": [6, 4, 1, 1],
        }),
        _ => return error(StatusCode::NOT_FOUND, "Unknown chart"),
    };
    Json(series).into_response()
}

async fn recent_activity(State(state): Shared) -> Response {
    state.record("GET /admin/dashboard/recent".to_string());
    Json(json!([
        {
            "short_code": "abc",
            "original_url": "http://x",
            "ip_address": "10.0.0.1",
            "country": null,
            "timestamp": "2024-01-02 08:15:00",
        }
    ]))
    .into_response()
}

async fn shorten(State(state): Shared, Form(form): Form<HashMap<String, String>>) -> Response {
    state.record("POST /shorten".to_string());
    *state.last_shorten_form.lock().unwrap() = Some(form.clone());

    let Some(url) = form.get("url").filter(|u| !u.is_empty()) else {
        return error(StatusCode::BAD_REQUEST, "Invalid URL provided");
    };
    let code = match form.get("custom_code") {
        Some(code) if code == "taken" => {
            return error(StatusCode::BAD_REQUEST, "Custom short code already exists");
        }
        Some(code) => code.clone(),
        None => "abc".to_string(),
    };

    Json(json!({
        "short_url": format!("https://s/{code}"),
        "short_code": code,
        "original_url": url,
    }))
    .into_response()
}

async fn preview(State(state): Shared, Path(code): Path<String>) -> Response {
    state.record(format!("GET /preview/{code}"));
    state.pause("preview").await;
    if state.fails("preview") {
        return error(StatusCode::NOT_FOUND, "Short URL not found");
    }
    Json(json!({ "original_url": "https://example.com" })).into_response()
}

async fn qr_code(State(state): Shared, Path(code): Path<String>) -> Response {
    state.record(format!("GET /qr/{code}"));
    state.pause("qr").await;
    Json(json!({ "qr_code": PNG_BASE64 })).into_response()
}

/// View events as seen by a test.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Login,
    Dashboard(Option<String>),
    LoginError(String),
    Tab(Tab),
    Urls(Vec<UrlRow>),
    Users(Vec<UserRow>),
    Analytics(StatCards),
    Confirm,
    Result(String),
    Error(String),
    Preview(String),
    Qr(usize),
    QrUnavailable(String),
    Stats(StatCards),
    ChartUpdated(ChartConfig),
    Activity(Vec<ActivityRow>),
}

#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<Event>>,
    confirm_answer: bool,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn confirming(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
            confirm_answer: answer,
        })
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    pub fn url_tables(&self) -> Vec<Vec<UrlRow>> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Urls(rows) => Some(rows),
                _ => None,
            })
            .collect()
    }

    pub fn dashboard_visible(&self) -> bool {
        self.events()
            .iter()
            .rev()
            .find_map(|e| match e {
                Event::Login => Some(false),
                Event::Dashboard(_) => Some(true),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl AdminView for RecordingView {
    fn show_login(&self) {
        self.push(Event::Login);
    }

    fn show_dashboard(&self, identity: Option<&SessionInfo>) {
        self.push(Event::Dashboard(identity.and_then(|i| i.username.clone())));
    }

    fn show_login_error(&self, message: &str) {
        self.push(Event::LoginError(message.to_string()));
    }

    fn hide_login_error(&self) {}

    fn activate_tab(&self, tab: Tab) {
        self.push(Event::Tab(tab));
    }

    fn render_urls(&self, rows: &[UrlRow]) {
        self.push(Event::Urls(rows.to_vec()));
    }

    fn render_users(&self, rows: &[UserRow]) {
        self.push(Event::Users(rows.to_vec()));
    }

    fn render_analytics(&self, cards: &StatCards) {
        self.push(Event::Analytics(cards.clone()));
    }

    fn confirm(&self, _prompt: &str) -> bool {
        self.push(Event::Confirm);
        self.confirm_answer
    }
}

impl LandingView for RecordingView {
    fn show_result(&self, short_url: &str) {
        self.push(Event::Result(short_url.to_string()));
    }

    fn hide_result(&self) {}

    fn show_error(&self, message: &str) {
        self.push(Event::Error(message.to_string()));
    }

    fn hide_error(&self) {}

    fn show_preview(&self, text: &str) {
        self.push(Event::Preview(text.to_string()));
    }

    fn show_qr_code(&self, image: &QrImage) {
        self.push(Event::Qr(image.png.len()));
    }

    fn qr_unavailable(&self, message: &str) {
        self.push(Event::QrUnavailable(message.to_string()));
    }
}

impl AnalyticsView for RecordingView {
    fn render_stats(&self, cards: &StatCards) {
        self.push(Event::Stats(cards.clone()));
    }

    fn init_chart(&self, _chart: &ChartConfig) {}

    fn update_chart(&self, chart: &ChartConfig) {
        self.push(Event::ChartUpdated(chart.clone()));
    }

    fn render_recent_activity(&self, rows: &[ActivityRow]) {
        self.push(Event::Activity(rows.to_vec()));
    }
}
