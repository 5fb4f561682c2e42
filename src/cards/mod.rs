// Public API - what other modules can use
pub use handlers::{
    api_root, cards_by_court, cards_by_suit, court_cards, get_card, list_cards, random_cards,
    search_cards, CARDS_PATH,
};
pub use query::{Court, QueryError, SearchCriteria};
pub use service::CardService;
pub use types::{CardResponse, CardsResponse, RandomQuery};

// Internal modules
mod handlers;
pub mod query;
mod service;
mod types;
