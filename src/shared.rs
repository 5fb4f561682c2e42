use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

use crate::cards::QueryError;
use crate::deck::Deck;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub deck: Arc<Deck>,
}

impl AppState {
    pub fn new(deck: Arc<Deck>) -> Self {
        Self { deck }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        AppError::NotFound(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::NotFound(msg) => {
                debug!(message = %msg, "Responding with not found");
                msg
            }
            AppError::Internal(msg) => {
                error!(message = %msg, "Internal server error");
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "status": status.as_u16(),
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
