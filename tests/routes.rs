use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use gita_prerna::services::sessions::SessionRegistry;
use gita_prerna::services::store::ContentStore;
use gita_prerna::{AppState, app};
use tower::ServiceExt;

const TEST_PASSWORD: &str = "test-secret";

fn test_app() -> Router {
    let state = AppState {
        store: Arc::new(ContentStore::new().expect("seed table is valid")),
        sessions: Arc::new(SessionRegistry::new()),
        admin_password: TEST_PASSWORD.into(),
    };
    app(state)
}

async fn get(path: &str) -> (StatusCode, String) {
    let response = test_app()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(app: Router, path: &str, body: &str, cookie: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_check_responds_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn home_page_renders() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Gita Prerna"));
}

#[tokio::test]
async fn home_page_renders_features_and_spotlight() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Multiple Languages"));
    assert!(body.contains("For Everyone"));
    assert!(body.contains("Arjuna Vishada Yoga"));
    assert!(body.contains(r#"href="/chapters/18?lang=en""#));
}

#[tokio::test]
async fn chapter_index_lists_chapters() {
    let (status, body) = get("/chapters").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Sankhya Yoga"));
    assert!(body.contains("Moksha Sanyasa Yoga"));
}

#[tokio::test]
async fn every_chapter_page_is_reachable() {
    for c in 1..=18 {
        let (status, _) = get(&format!("/chapters/{}", c)).await;
        assert_eq!(status, StatusCode::OK, "chapter {}", c);
    }
}

#[tokio::test]
async fn unknown_chapter_returns_not_found() {
    let (status, body) = get("/chapters/25").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Chapter Not Found"));
}

#[tokio::test]
async fn non_numeric_chapter_returns_not_found() {
    let (status, _) = get("/chapters/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_chapter_wins_over_verse_parameter() {
    let (status, body) = get("/chapters/25/verses/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Chapter Not Found"));
}

#[tokio::test]
async fn seeded_verse_renders_translation() {
    let (status, body) = get("/chapters/2/verses/47").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("You have a right to perform your prescribed duty"));
}

#[tokio::test]
async fn hindi_selection_switches_verse_translation() {
    let (status, body) = get("/chapters/2/verses/47?lang=hi").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("तुम्हारा कर्म करने में अधिकार है"));
}

#[tokio::test]
async fn sanskrit_selection_falls_back_to_english() {
    let (status, body) = get("/chapters/2/verses/47?lang=sa").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("You have a right to perform your prescribed duty"));
}

#[tokio::test]
async fn unseeded_in_range_verse_is_valid_but_empty() {
    let (status, body) = get("/chapters/2/verses/5").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("has not been added yet"));
}

#[tokio::test]
async fn out_of_range_verse_returns_not_found() {
    let (status, body) = get("/chapters/2/verses/73").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("outside the chapter"));
}

#[tokio::test]
async fn api_lists_all_eighteen_chapters() {
    let (status, body) = get("/api/chapters").await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["chapters"].as_array().unwrap().len(), 18);
}

#[tokio::test]
async fn api_chapter_detail_includes_shlokas() {
    let (status, body) = get("/api/chapters/1").await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["number"], 1);
    assert_eq!(value["shlokas"][0]["number"], 1);
}

#[tokio::test]
async fn api_distinguishes_unauthored_from_out_of_range() {
    let (status, body) = get("/api/chapters/2/verses/5").await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["status"], "not_yet_authored");

    let (status, body) = get("/api/chapters/2/verses/73").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["declared"], 72);
}

#[tokio::test]
async fn donation_requires_amount_and_method() {
    let response = post_form(test_app(), "/donate", "amount=&custom_amount=&payment_method=", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Please select an amount and payment method"));
}

#[tokio::test]
async fn donation_acknowledges_a_valid_pledge() {
    let response = post_form(
        test_app(),
        "/donate",
        "amount=500&custom_amount=&payment_method=upi",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Thank you for your donation"));
    assert!(body.contains("₹500"));
}

#[tokio::test]
async fn admin_page_shows_login_without_session() {
    let (status, body) = get("/admin").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Admin Panel"));
    assert!(body.contains("password"));
}

#[tokio::test]
async fn wrong_admin_password_is_rejected() {
    let response = post_form(test_app(), "/admin/login", "password=nope", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_text(response).await;
    assert!(body.contains("Invalid password"));
}

#[tokio::test]
async fn admin_login_and_save_round_trip() {
    // The session registry must be shared across requests, so build the
    // state once instead of a fresh app per call.
    let state = AppState {
        store: Arc::new(ContentStore::new().unwrap()),
        sessions: Arc::new(SessionRegistry::new()),
        admin_password: TEST_PASSWORD.into(),
    };

    let login = post_form(
        app(state.clone()),
        "/admin/login",
        &format!("password={}", TEST_PASSWORD),
        None,
    )
    .await;
    assert_eq!(login.status(), StatusCode::SEE_OTHER);
    let cookie = login
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie set")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let dashboard = app(state.clone())
        .oneshot(
            Request::builder()
                .uri("/admin")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(dashboard.status(), StatusCode::OK);
    let body = body_text(dashboard).await;
    assert!(body.contains("Sankhya Yoga"));

    let save = post_form(app(state), "/admin/save", "section=chapters", Some(&cookie)).await;
    assert_eq!(save.status(), StatusCode::OK);
    let body = body_text(save).await;
    assert!(body.contains("Content saved"));
}

#[tokio::test]
async fn admin_logout_revokes_the_session() {
    let state = AppState {
        store: Arc::new(ContentStore::new().unwrap()),
        sessions: Arc::new(SessionRegistry::new()),
        admin_password: TEST_PASSWORD.into(),
    };

    let login = post_form(
        app(state.clone()),
        "/admin/login",
        &format!("password={}", TEST_PASSWORD),
        None,
    )
    .await;
    let cookie = login
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie set")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let logout = post_form(app(state.clone()), "/admin/logout", "", Some(&cookie)).await;
    assert_eq!(logout.status(), StatusCode::SEE_OTHER);
    let expired = logout
        .headers()
        .get(header::SET_COOKIE)
        .expect("cookie cleared")
        .to_str()
        .unwrap();
    assert!(expired.contains("Max-Age=0"));

    // The old token no longer opens the dashboard.
    let revisit = app(state)
        .oneshot(
            Request::builder()
                .uri("/admin")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(revisit.status(), StatusCode::OK);
    let body = body_text(revisit).await;
    assert!(body.contains("password"));
    assert!(!body.contains("Sankhya Yoga"));
}

#[tokio::test]
async fn admin_save_without_session_is_rejected() {
    let response = post_form(test_app(), "/admin/save", "section=chapters", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
