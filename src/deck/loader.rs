use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, instrument};

use super::models::{Card, Deck, InvalidCard};

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Failed to read card data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Card data is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Card data must be an array of cards or an object with a `cards` array")]
    NotASequence,

    #[error("Card record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: InvalidCard,
    },

    #[error("Duplicate card id: {0}")]
    DuplicateId(String),
}

/// Reads and validates the deck stored at `path`
#[instrument]
pub fn load(path: &Path) -> Result<Deck, DataLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let deck = load_from_str(&raw)?;
    info!(card_count = deck.len(), "Card data loaded");

    Ok(deck)
}

/// Parses a deck from JSON text.
///
/// Accepts either `{"cards": [...]}` (any sibling keys are ignored) or a bare
/// array of card records.
pub fn load_from_str(raw: &str) -> Result<Deck, DataLoadError> {
    let records = match serde_json::from_str::<Value>(raw)? {
        Value::Array(records) => records,
        Value::Object(mut root) => match root.remove("cards") {
            Some(Value::Array(records)) => records,
            _ => return Err(DataLoadError::NotASequence),
        },
        _ => return Err(DataLoadError::NotASequence),
    };

    debug!(record_count = records.len(), "Parsing card records");

    let cards = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Card::try_from(record).map_err(|source| DataLoadError::InvalidRecord { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Deck::new(cards)
}
