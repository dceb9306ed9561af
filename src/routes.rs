use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::models::Language;
use crate::services::i18n;
use crate::services::nav::{self, PageView};
use crate::services::sessions::{SESSION_COOKIE, SessionRegistry, token_from_cookie_header};
use crate::services::store::{ContentStore, VerseLookup};
use crate::views::pages;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub sessions: Arc<SessionRegistry>,
    pub admin_password: Arc<str>,
}

/// Build our application with its routes
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/chapters", get(chapter_index))
        .route("/chapters/:id", get(chapter_page))
        .route("/chapters/:id/verses/:verse", get(verse_page))
        .route("/gallery", get(gallery_page))
        .route("/donate", get(donate_page).post(donate_submit))
        .route("/admin", get(admin_page))
        .route("/admin/login", post(admin_login))
        .route("/admin/save", post(admin_save))
        .route("/admin/logout", post(admin_logout))
        .route("/api/chapters", get(api_chapters))
        .route("/api/chapters/:id", get(api_chapter))
        .route("/api/chapters/:id/verses/:verse", get(api_verse))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Add CORS layer
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::AllowMethods::any())
                .allow_headers(tower_http::cors::AllowHeaders::any()),
        )
}

/// Language selection, carried as a query parameter on every page link;
/// unknown or missing codes resolve to English.
#[derive(Deserialize, Default)]
pub struct LangQuery {
    lang: Option<String>,
}

impl LangQuery {
    fn language(&self) -> Language {
        Language::from_code(self.lang.as_deref().unwrap_or(""))
    }
}

async fn health_check() -> &'static str {
    "OK"
}

async fn home(State(state): State<AppState>, Query(q): Query<LangQuery>) -> Html<String> {
    Html(pages::home(&state.store, q.language()))
}

async fn chapter_index(State(state): State<AppState>, Query(q): Query<LangQuery>) -> Html<String> {
    Html(pages::chapter_index(&state.store, q.language()))
}

async fn chapter_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(q): Query<LangQuery>,
) -> (StatusCode, Html<String>) {
    let language = q.language();
    let view = nav::resolve_view(&state.store, &id, None);
    let status = page_status(&view);
    (status, Html(pages::render_page_view(&view, language)))
}

async fn verse_page(
    State(state): State<AppState>,
    Path((id, verse)): Path<(String, String)>,
    Query(q): Query<LangQuery>,
) -> (StatusCode, Html<String>) {
    let language = q.language();
    let view = nav::resolve_view(&state.store, &id, Some(&verse));
    let status = page_status(&view);
    (status, Html(pages::render_page_view(&view, language)))
}

/// A not-yet-authored verse is valid content state, so it renders as 200;
/// only genuinely unknown chapters / out-of-range verses are 404.
fn page_status(view: &PageView<'_>) -> StatusCode {
    match view {
        PageView::ChapterNotFound | PageView::VerseOutOfRange { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    }
}

async fn gallery_page(State(state): State<AppState>, Query(q): Query<LangQuery>) -> Html<String> {
    Html(pages::gallery(&state.store, q.language()))
}

async fn donate_page(Query(q): Query<LangQuery>) -> Html<String> {
    Html(pages::donate(q.language(), None))
}

#[derive(Deserialize, Default)]
struct DonationForm {
    #[serde(default)]
    amount: String,
    #[serde(default)]
    custom_amount: String,
    #[serde(default)]
    payment_method: String,
}

impl DonationForm {
    /// Positive whole-rupee amount, preferring the preset over the custom
    /// field, exactly as the form offers them.
    fn amount(&self) -> Option<u32> {
        let raw = if self.amount.trim().is_empty() {
            self.custom_amount.trim()
        } else {
            self.amount.trim()
        };
        match raw.parse::<u32>() {
            Ok(n) if n > 0 => Some(n),
            _ => None,
        }
    }
}

async fn donate_submit(
    Query(q): Query<LangQuery>,
    axum::extract::Form(form): axum::extract::Form<DonationForm>,
) -> Html<String> {
    let language = q.language();
    let t = i18n::ui(language);
    match form.amount() {
        Some(amount) if !form.payment_method.trim().is_empty() => {
            // Acknowledgment only; no payment gateway is wired up.
            tracing::info!(amount, method = %form.payment_method, "donation pledged");
            Html(pages::donate_ack(language, amount))
        }
        _ => Html(pages::donate(language, Some(t.donation_invalid))),
    }
}

fn session_is_valid(state: &AppState, headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(token_from_cookie_header)
        .is_some_and(|token| state.sessions.is_valid(token))
}

async fn admin_page(
    State(state): State<AppState>,
    Query(q): Query<LangQuery>,
    headers: HeaderMap,
) -> Html<String> {
    let language = q.language();
    if session_is_valid(&state, &headers) {
        Html(pages::admin_dashboard(&state.store, language, None))
    } else {
        Html(pages::admin_login(language, false))
    }
}

#[derive(Deserialize)]
struct LoginForm {
    #[serde(default)]
    password: String,
}

async fn admin_login(
    State(state): State<AppState>,
    Query(q): Query<LangQuery>,
    axum::extract::Form(form): axum::extract::Form<LoginForm>,
) -> Response {
    let language = q.language();
    if form.password == *state.admin_password {
        let token = state.sessions.create();
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, token);
        tracing::info!("admin session opened");
        let destination = format!("/admin?lang={}", language.code());
        ([(header::SET_COOKIE, cookie)], Redirect::to(&destination)).into_response()
    } else {
        tracing::warn!("admin login rejected");
        (
            StatusCode::UNAUTHORIZED,
            Html(pages::admin_login(language, true)),
        )
            .into_response()
    }
}

async fn admin_logout(
    State(state): State<AppState>,
    Query(q): Query<LangQuery>,
    headers: HeaderMap,
) -> Response {
    if let Some(token) = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(token_from_cookie_header)
    {
        state.sessions.revoke(token);
        tracing::info!("admin session closed");
    }
    let expired = format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE);
    let destination = format!("/admin?lang={}", q.language().code());
    ([(header::SET_COOKIE, expired)], Redirect::to(&destination)).into_response()
}

#[derive(Deserialize, Default)]
struct AdminSaveForm {
    #[serde(default)]
    section: String,
}

async fn admin_save(
    State(state): State<AppState>,
    Query(q): Query<LangQuery>,
    headers: HeaderMap,
    axum::extract::Form(form): axum::extract::Form<AdminSaveForm>,
) -> Response {
    let language = q.language();
    if !session_is_valid(&state, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Html(pages::admin_login(language, false)),
        )
            .into_response();
    }
    // The store is immutable; saving acknowledges the edit and drops it.
    tracing::info!(section = %form.section, "admin save acknowledged (no persistence configured)");
    let t = i18n::ui(language);
    Html(pages::admin_dashboard(&state.store, language, Some(t.saved))).into_response()
}

async fn api_chapters(State(state): State<AppState>) -> Json<serde_json::Value> {
    let summaries: Vec<serde_json::Value> = state
        .store
        .chapters()
        .iter()
        .map(|c| {
            json!({
                "number": c.number,
                "name_hindi": c.name_hindi,
                "name_english": c.name_english,
                "name_sanskrit": c.name_sanskrit,
                "subtitle": c.subtitle,
                "verses": c.verses,
                "theme": c.theme,
                "authored_verses": c.shlokas.len(),
            })
        })
        .collect();
    Json(json!({ "chapters": summaries }))
}

async fn api_chapter(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(chapter) = nav::parse_number(&id).and_then(|n| state.store.chapter(n)) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "chapter not found" })),
        )
            .into_response();
    };
    Json(chapter).into_response()
}

async fn api_verse(
    State(state): State<AppState>,
    Path((id, verse)): Path<(String, String)>,
) -> Response {
    let chapter_number = nav::parse_number(&id).unwrap_or(0);
    let verse_number = nav::parse_number(&verse).unwrap_or(0);
    match state.store.verse(chapter_number, verse_number) {
        VerseLookup::Found(shloka) => Json(shloka).into_response(),
        VerseLookup::NotYetAuthored => Json(json!({
            "chapter": chapter_number,
            "verse": verse_number,
            "status": "not_yet_authored",
        }))
        .into_response(),
        VerseLookup::OutOfRange { declared } => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "verse out of range", "declared": declared })),
        )
            .into_response(),
        VerseLookup::ChapterNotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "chapter not found" })),
        )
            .into_response(),
    }
}
