use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::HashSet;
use thiserror::Error;

use super::loader::DataLoadError;

/// Why a JSON record could not be turned into a [`Card`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidCard {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must be a string")]
    NotAString(String),
}

/// A single card record.
///
/// Fields are kept in their stored order, which is the order they are
/// serialized in and the order `q` searches concatenate them in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Card {
    fields: Map<String, Value>,
}

impl Card {
    const REQUIRED: [&'static str; 2] = ["name_short", "value"];
    const OPTIONAL_TEXT: [&'static str; 4] = ["name", "suit", "meaning_up", "meaning_rev"];

    /// Unique identifier, e.g. `ar01` or `waqu`
    pub fn name_short(&self) -> &str {
        self.str_field("name_short").unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.str_field("name").unwrap_or_default()
    }

    /// `None` for major arcana
    pub fn suit(&self) -> Option<&str> {
        self.str_field("suit").filter(|s| !s.is_empty())
    }

    /// Rank token: `page`, `queen`, `ten`, `0`, ...
    pub fn value(&self) -> &str {
        self.str_field("value").unwrap_or_default()
    }

    pub fn meaning_up(&self) -> Option<&str> {
        self.str_field("meaning_up")
    }

    pub fn meaning_rev(&self) -> Option<&str> {
        self.str_field("meaning_rev")
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Textual form of any field; `None` when absent or null
    pub fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        self.fields.get(key).and_then(value_text)
    }

    /// Textual form of every field, in stored order
    pub fn field_texts(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.fields.values().filter_map(value_text)
    }
}

fn value_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        other => Some(Cow::Owned(other.to_string())),
    }
}

impl TryFrom<Map<String, Value>> for Card {
    type Error = InvalidCard;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        for key in Self::REQUIRED {
            match fields.get(key) {
                None | Some(Value::Null) => return Err(InvalidCard::MissingField(key)),
                Some(Value::String(_)) => {}
                Some(_) => return Err(InvalidCard::NotAString(key.to_string())),
            }
        }

        for key in Self::OPTIONAL_TEXT {
            if let Some(value) = fields.get(key) {
                if !value.is_string() && !value.is_null() {
                    return Err(InvalidCard::NotAString(key.to_string()));
                }
            }
        }

        Ok(Self { fields })
    }
}

impl TryFrom<Value> for Card {
    type Error = InvalidCard;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Self::try_from(fields),
            _ => Err(InvalidCard::NotAnObject),
        }
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// The full, ordered card collection.
///
/// Built once at startup and never mutated afterwards; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a deck, rejecting duplicate identifiers
    pub fn new(cards: Vec<Card>) -> Result<Self, DataLoadError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.name_short()) {
                return Err(DataLoadError::DuplicateId(card.name_short().to_string()));
            }
        }

        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
