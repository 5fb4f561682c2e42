// Public API - what other modules can use
pub use loader::{load, load_from_str, DataLoadError};
pub use models::{Card, Deck, InvalidCard};

// Internal modules
mod loader;
mod models;
