use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::query::{self, SearchCriteria};
use crate::deck::{Card, Deck};
use crate::shared::AppError;

/// Service for answering card queries against the shared deck.
///
/// Results are cloned out of the deck so callers own what they serialize.
pub struct CardService {
    deck: Arc<Deck>,
}

fn owned(cards: Vec<&Card>) -> Vec<Card> {
    cards.into_iter().cloned().collect()
}

impl CardService {
    pub fn new(deck: Arc<Deck>) -> Self {
        Self { deck }
    }

    #[instrument(skip(self))]
    pub fn list_all(&self) -> Vec<Card> {
        debug!(card_count = self.deck.len(), "Listing all cards");
        owned(query::list_all(&self.deck))
    }

    #[instrument(skip(self))]
    pub fn get_card(&self, id: &str) -> Result<Card, AppError> {
        query::lookup_by_id(&self.deck, id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("No card with id '{}'", id)))
    }

    /// Errors when the suit has no cards
    #[instrument(skip(self))]
    pub fn cards_of_suit(&self, suit: &str) -> Result<Vec<Card>, AppError> {
        let cards = query::filter_by_suit(&self.deck, suit);
        if cards.is_empty() {
            return Err(AppError::NotFound(format!("No cards of suit '{}'", suit)));
        }

        Ok(owned(cards))
    }

    #[instrument(skip(self))]
    pub fn court_cards(&self) -> Vec<Card> {
        owned(query::filter_all_courts(&self.deck))
    }

    /// Errors for short tokens and for courts with no cards
    #[instrument(skip(self))]
    pub fn cards_of_court(&self, court: &str) -> Result<Vec<Card>, AppError> {
        let cards = query::filter_by_court(&self.deck, court)?;
        if cards.is_empty() {
            return Err(AppError::NotFound(format!("No cards of court '{}'", court)));
        }

        Ok(owned(cards))
    }

    #[instrument(skip(self))]
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Card> {
        let cards = owned(query::search(&self.deck, criteria));
        info!(hit_count = cards.len(), "Search completed");
        cards
    }

    /// Draws `n` cards; `None` or an out-of-range count draws the whole deck
    #[instrument(skip(self))]
    pub fn random(&self, n: Option<i64>) -> Vec<Card> {
        owned(query::sample(&self.deck, n.unwrap_or(0)))
    }
}
