//! Read-only queries over a [`Deck`].
//!
//! Every function borrows the deck immutably and returns cards in deck order,
//! except the sampling functions which shuffle a private list of references.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};
use thiserror::Error;

use crate::deck::{Card, Deck};

/// Query-string criteria for [`search`]: field name -> raw query value
pub type SearchCriteria = BTreeMap<String, String>;

/// Shortest court token that plural folding applies to
pub const MIN_COURT_TOKEN_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Unrecognized court: {0}")]
    UnrecognizedCourt(String),
}

/// Court ranks, matched against a card's `value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Court {
    Queen,
    King,
    Page,
    Knight,
}

impl Court {
    pub fn is_court_value(value: &str) -> bool {
        Court::iter().any(|court| court.as_ref() == value)
    }
}

pub fn list_all(deck: &Deck) -> Vec<&Card> {
    deck.iter().collect()
}

/// Exact, case-sensitive match on `name_short`
pub fn lookup_by_id<'a>(deck: &'a Deck, id: &str) -> Option<&'a Card> {
    deck.iter().find(|card| card.name_short() == id)
}

/// Exact, case-sensitive match on `suit`. Suit names are not validated.
pub fn filter_by_suit<'a>(deck: &'a Deck, suit: &str) -> Vec<&'a Card> {
    deck.iter().filter(|card| card.suit() == Some(suit)).collect()
}

/// Folds a plural court token (`queens` -> `queen`).
///
/// Tokens shorter than [`MIN_COURT_TOKEN_LEN`] characters are rejected. Longer
/// tokens are not checked against [`Court`]; an unknown token simply matches
/// nothing.
pub fn normalize_court(token: &str) -> Result<&str, QueryError> {
    if token.chars().count() < MIN_COURT_TOKEN_LEN {
        return Err(QueryError::UnrecognizedCourt(token.to_string()));
    }

    Ok(token.strip_suffix('s').unwrap_or(token))
}

pub fn filter_by_court<'a>(deck: &'a Deck, token: &str) -> Result<Vec<&'a Card>, QueryError> {
    let court = normalize_court(token)?;
    Ok(deck.iter().filter(|card| card.value() == court).collect())
}

pub fn filter_all_courts(deck: &Deck) -> Vec<&Card> {
    deck.iter()
        .filter(|card| Court::is_court_value(card.value()))
        .collect()
}

/// One lowercased search criterion
#[derive(Debug)]
enum Criterion<'q> {
    /// `meaning`: substring of upright and reversed meanings
    Meaning(String),
    /// `q`: substring of every field
    FullText(String),
    /// Any other key: whole-field equality
    Field { key: &'q str, value: String },
}

impl<'q> Criterion<'q> {
    fn parse(key: &'q str, raw: &str) -> Self {
        let value = raw.to_lowercase();
        match key {
            "meaning" => Criterion::Meaning(value),
            "q" => Criterion::FullText(value),
            _ => Criterion::Field { key, value },
        }
    }

    fn matches(&self, card: &Card) -> bool {
        match self {
            Criterion::Meaning(needle) => {
                let meanings = [
                    card.meaning_up().unwrap_or_default(),
                    card.meaning_rev().unwrap_or_default(),
                ]
                .join(",");
                meanings.to_lowercase().contains(needle.as_str())
            }
            Criterion::FullText(needle) => {
                let haystack = card.field_texts().collect::<Vec<_>>().join(",");
                haystack.to_lowercase().contains(needle.as_str())
            }
            Criterion::Field { key, value } => match card.field_text(key) {
                Some(text) if !text.is_empty() => text.to_lowercase() == *value,
                _ => false,
            },
        }
    }
}

/// Cards satisfying every criterion, case-insensitively.
///
/// Empty criteria match every card.
pub fn search<'a>(deck: &'a Deck, criteria: &SearchCriteria) -> Vec<&'a Card> {
    let criteria: Vec<Criterion<'_>> = criteria
        .iter()
        .map(|(key, raw)| Criterion::parse(key, raw))
        .collect();

    deck.iter()
        .filter(|card| criteria.iter().all(|criterion| criterion.matches(card)))
        .collect()
}

/// Number of cards a draw of `n` yields: `n` when `0 < n < deck_size`,
/// otherwise the whole deck
pub fn clamp_sample_size(n: i64, deck_size: usize) -> usize {
    match usize::try_from(n) {
        Ok(n) if n > 0 && n < deck_size => n,
        _ => deck_size,
    }
}

/// Draws `n` distinct cards in random order using the thread-local RNG
pub fn sample(deck: &Deck, n: i64) -> Vec<&Card> {
    sample_with(deck, n, &mut rand::rng())
}

/// Shuffles a private copy of the deck's references and keeps the first
/// [`clamp_sample_size`] of them
pub fn sample_with<'a, R: Rng + ?Sized>(deck: &'a Deck, n: i64, rng: &mut R) -> Vec<&'a Card> {
    let mut drawn = list_all(deck);
    drawn.shuffle(rng);
    drawn.truncate(clamp_sample_size(n, deck.len()));
    drawn
}
