use axum::{
    http::{header, HeaderName, Method},
    response::{IntoResponse, Response},
    routing::{get, get_service},
    Router,
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::cards;
use crate::config::Config;
use crate::shared::{AppError, AppState};

/// Builds the full HTTP surface: landing page, static files, API docs and the
/// card API under `/api/v1`
pub fn build_router(state: AppState, config: &Config) -> Router {
    let api = Router::new()
        .route("/api/v1/", get(cards::api_root))
        .route("/api/v1/docs", get_service(ServeFile::new(config.docs_path())))
        .route("/api/v1/cards", get(cards::list_cards))
        .route("/api/v1/cards/search", get(cards::search_cards))
        .route("/api/v1/cards/random", get(cards::random_cards))
        .route("/api/v1/cards/courts", get(cards::court_cards))
        .route("/api/v1/cards/courts/:court", get(cards::cards_by_court))
        .route("/api/v1/cards/suits/:suit", get(cards::cards_by_suit))
        .route("/api/v1/cards/:id", get(cards::get_card))
        .layer(cors_layer());

    Router::new()
        .route_service("/", ServeFile::new(config.index_path()))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .merge(api)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}

async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(details).into_response()
}
