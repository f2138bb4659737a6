//! Binds a suggestion store to a host text field
//!
//! The host only has to implement [`BoundField`]; everything else (issuing
//! loads, applying responses, committing a selection) happens here.

use super::suggestion_loader::SuggestionLoader;
use super::suggestion_store::SuggestionStore;
use super::worker::LoadResponse;
use crate::error::AutosuggestError;

/// The text field a suggestion list is attached to
pub trait BoundField {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    fn focus(&mut self);
    fn is_focused(&self) -> bool;
}

pub struct InputAdapter {
    pub store: SuggestionStore,
    loader: SuggestionLoader,
    /// Shorter text hides the list instead of loading
    min_chars: usize,
    /// Token of the load still waiting for a response
    pending_token: Option<u64>,
}

impl InputAdapter {
    pub fn new(store: SuggestionStore, loader: SuggestionLoader, min_chars: usize) -> Self {
        Self {
            store,
            loader,
            // Empty text never loads
            min_chars: min_chars.max(1),
            pending_token: None,
        }
    }

    /// React to a keystroke-driven change of the field's text
    pub fn on_value_changed(&mut self, text: &str) -> Result<(), AutosuggestError> {
        if text.chars().count() < self.min_chars {
            self.hide();
            return Ok(());
        }

        // Text was just written from a selection
        if self.store.selected() == Some(text) {
            return Ok(());
        }

        self.load(text)
    }

    /// Ask the candidate source for suggestions matching `query`
    pub fn load(&mut self, query: &str) -> Result<(), AutosuggestError> {
        let token = self.store.begin_load();
        self.pending_token = Some(token);

        if let Err(e) = self.loader.request(token, query) {
            self.pending_token = None;
            self.store.hide();
            return Err(e);
        }
        Ok(())
    }

    /// Close the list and drop any load still in flight
    pub fn hide(&mut self) {
        self.store.hide();
        self.store.cancel_pending();
        self.pending_token = None;
    }

    /// Write the selected suggestion into `field` and close the list
    ///
    /// Returns the committed value. With nothing selected the field keeps
    /// its text but the list still closes.
    pub fn commit(&mut self, field: &mut dyn BoundField) -> Option<String> {
        let selected = self.store.selected().map(str::to_string);
        if let Some(value) = &selected {
            log::debug!("Committing suggestion {:?}", value);
            field.set_value(value);
        }

        self.hide();
        field.focus();
        selected
    }

    /// Apply responses that arrived since the last poll
    ///
    /// Returns true when visible state changed. A failure of the latest load
    /// closes the list and is reported as `SourceFailed`.
    pub fn poll(&mut self) -> Result<bool, AutosuggestError> {
        let responses = match self.loader.poll() {
            Ok(responses) => responses,
            Err(e) => {
                self.pending_token = None;
                self.store.hide();
                return Err(e);
            }
        };

        let mut changed = false;
        let mut failure = None;

        for response in responses {
            let request_id = response.request_id();
            if self.pending_token == Some(request_id) {
                self.pending_token = None;
            }

            match response {
                LoadResponse::Loaded { items, .. } => {
                    changed |= self.store.apply_load(request_id, items);
                }
                LoadResponse::Failed { message, .. } => {
                    if request_id == self.store.latest_token() {
                        log::error!("Load {} failed: {}", request_id, message);
                        self.store.hide();
                        changed = true;
                        failure = Some(message);
                    }
                }
            }
        }

        match failure {
            Some(message) => Err(AutosuggestError::SourceFailed(message)),
            None => Ok(changed),
        }
    }

    /// Whether the latest load is still waiting for its response
    pub fn is_pending(&self) -> bool {
        self.pending_token.is_some()
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    pub fn loader(&self) -> &SuggestionLoader {
        &self.loader
    }

    /// Swap in a new loader; responses owed by the old one are dropped
    pub fn set_loader(&mut self, loader: SuggestionLoader) {
        self.loader = loader;
        self.hide();
    }
}

#[cfg(test)]
#[path = "input_adapter_tests.rs"]
mod input_adapter_tests;
