//! autosuggest library - text input with a live suggestion list
//!
//! The suggestion store and its input adapter are terminal-independent;
//! the app modules wire them into a ratatui front end.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod notification;
pub mod scroll;
pub mod suggestions;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use error::AutosuggestError;
pub use suggestions::{
    BoundField, CandidateSource, EventOutcome, InputAdapter, OpenPolicy, SuggestionStore,
    WordListSource,
};
