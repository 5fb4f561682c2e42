pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use setup::{bundled_app, bundled_config, bundled_deck, get, scenario_app, send, TestResponse};
