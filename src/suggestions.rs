//! Suggestion list attached to a text input
//!
//! `SuggestionStore` is the framework-independent state machine. The loader
//! runs the candidate source off the UI thread, `InputAdapter` binds the
//! store to a field, and `handle_suggestion_key` routes keystrokes.

pub mod input_adapter;
pub mod source;
pub mod suggestion_events;
pub mod suggestion_loader;
pub mod suggestion_store;
pub mod suggestions_render;
pub mod worker;

pub use input_adapter::{BoundField, InputAdapter};
pub use source::{CandidateSource, WordListSource};
pub use suggestion_events::{EventOutcome, handle_suggestion_key};
pub use suggestion_loader::SuggestionLoader;
pub use suggestion_store::{OpenPolicy, SuggestionStore};
pub use worker::{LoadRequest, LoadResponse};
