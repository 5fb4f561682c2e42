use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

use tarot_api::{build_router, deck, AppState, Config, Deck};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// Config pointing at the repository's `static/` directory
pub fn bundled_config() -> Config {
    let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");
    Config {
        data_path: static_dir.join("card_data.json"),
        static_dir,
        ..Config::default()
    }
}

pub fn bundled_deck() -> Deck {
    deck::load(&bundled_config().data_path).expect("bundled card data should load")
}

/// Router over the full bundled deck
pub fn bundled_app() -> Router {
    build_router(AppState::new(Arc::new(bundled_deck())), &bundled_config())
}

/// Router over the two-card deck `[fool, queen of wands]`
pub fn scenario_app() -> Router {
    let deck = deck::load_from_str(
        r#"[
            {"name_short": "ar01", "suit": "", "value": "fool"},
            {"name_short": "wa-qu", "suit": "wands", "value": "queen"}
        ]"#,
    )
    .expect("scenario deck should load");

    build_router(AppState::new(Arc::new(deck)), &bundled_config())
}

// ============================================================================
// Request helpers
// ============================================================================

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn ids(&self) -> Vec<String> {
        self.json()["cards"]
            .as_array()
            .expect("response should carry a cards array")
            .iter()
            .map(|card| card["name_short"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}
