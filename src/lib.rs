// Library crate for the tarot card API
// This file exposes the public API for integration tests

pub mod cards;
pub mod config;
pub mod deck;
pub mod router;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use cards::{CardResponse, CardService, CardsResponse, Court, QueryError, SearchCriteria};
pub use config::{Config, ConfigError};
pub use deck::{Card, DataLoadError, Deck};
pub use router::build_router;
pub use shared::{AppError, AppState};
