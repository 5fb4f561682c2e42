use serde::{Deserialize, Serialize};

use crate::deck::Card;

/// Response for every multi-card endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct CardsResponse {
    pub nhits: usize,
    pub cards: Vec<Card>,
}

impl From<Vec<Card>> for CardsResponse {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            nhits: cards.len(),
            cards,
        }
    }
}

/// Response for single-card lookup
#[derive(Debug, Serialize, Deserialize)]
pub struct CardResponse {
    pub nhits: usize,
    pub card: Card,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self { nhits: 1, card }
    }
}

/// Query parameters for `GET /cards/random`
#[derive(Debug, Default, Deserialize)]
pub struct RandomQuery {
    pub n: Option<String>,
}

impl RandomQuery {
    /// Requested count truncated toward zero; `None` if absent or not a number
    pub fn count(&self) -> Option<i64> {
        let n = self.n.as_deref()?.trim().parse::<f64>().ok()?;
        n.is_finite().then(|| n.trunc() as i64)
    }
}
