use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    query::SearchCriteria,
    service::CardService,
    types::{CardResponse, CardsResponse, RandomQuery},
};
use crate::shared::{AppError, AppState};

/// Where parameterless searches and the API root redirect to
pub const CARDS_PATH: &str = "/api/v1/cards";

fn service(state: &AppState) -> CardService {
    CardService::new(Arc::clone(&state.deck))
}

/// GET /api/v1/
pub async fn api_root() -> Redirect {
    Redirect::to(CARDS_PATH)
}

/// HTTP handler for listing the whole deck
///
/// GET /api/v1/cards
#[instrument(name = "list_cards", skip(state))]
pub async fn list_cards(State(state): State<AppState>) -> Json<CardsResponse> {
    Json(service(&state).list_all().into())
}

/// HTTP handler for multi-field search
///
/// GET /api/v1/cards/search?<field>=<value>...
/// Redirects to the full listing when no parameters are given
#[instrument(name = "search_cards", skip(state))]
pub async fn search_cards(
    State(state): State<AppState>,
    Query(criteria): Query<SearchCriteria>,
) -> Response {
    if criteria.is_empty() {
        info!("Search without parameters, redirecting to full listing");
        return Redirect::to(CARDS_PATH).into_response();
    }

    Json(CardsResponse::from(service(&state).search(&criteria))).into_response()
}

/// HTTP handler for random draws
///
/// GET /api/v1/cards/random?n=<int>
#[instrument(name = "random_cards", skip(state))]
pub async fn random_cards(
    State(state): State<AppState>,
    Query(params): Query<RandomQuery>,
) -> Json<CardsResponse> {
    Json(service(&state).random(params.count()).into())
}

/// HTTP handler for single-card lookup
///
/// GET /api/v1/cards/{id}
#[instrument(name = "get_card", skip(state))]
pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CardResponse>, AppError> {
    let card = service(&state).get_card(&id)?;
    Ok(Json(card.into()))
}

/// GET /api/v1/cards/suits/{suit}
#[instrument(name = "cards_by_suit", skip(state))]
pub async fn cards_by_suit(
    State(state): State<AppState>,
    Path(suit): Path<String>,
) -> Result<Json<CardsResponse>, AppError> {
    let cards = service(&state).cards_of_suit(&suit)?;
    Ok(Json(cards.into()))
}

/// GET /api/v1/cards/courts
#[instrument(name = "court_cards", skip(state))]
pub async fn court_cards(State(state): State<AppState>) -> Json<CardsResponse> {
    Json(service(&state).court_cards().into())
}

/// GET /api/v1/cards/courts/{court}
#[instrument(name = "cards_by_court", skip(state))]
pub async fn cards_by_court(
    State(state): State<AppState>,
    Path(court): Path<String>,
) -> Result<Json<CardsResponse>, AppError> {
    let cards = service(&state).cards_of_court(&court)?;
    Ok(Json(cards.into()))
}
