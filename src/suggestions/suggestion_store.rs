//! Suggestion list state machine
//!
//! Holds the candidate list, the cyclic selection cursor and the visibility
//! flag for one bound input. Loading is split into `begin_load()` (issue a
//! request token) and `apply_load()` (accept a resolved list) so the async
//! transport lives elsewhere and only the latest request can change state.

/// What the cursor does when a freshly loaded list becomes visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenPolicy {
    /// Leave the cursor unset until the user navigates
    #[default]
    Unset,
    /// Highlight the first candidate
    SelectFirst,
}

#[derive(Debug, Clone)]
pub struct SuggestionStore {
    items: Vec<String>,
    cursor: Option<usize>,
    visible: bool,
    /// Token of the most recently issued load (0 = none yet)
    latest_token: u64,
    open_policy: OpenPolicy,
}

impl Default for SuggestionStore {
    fn default() -> Self {
        Self::new(OpenPolicy::default())
    }
}

impl SuggestionStore {
    pub fn new(open_policy: OpenPolicy) -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
            visible: false,
            latest_token: 0,
            open_policy,
        }
    }

    /// Issue a new request token; any response carrying an older token is stale
    pub fn begin_load(&mut self) -> u64 {
        self.latest_token = self.latest_token.wrapping_add(1);
        // 0 means no load was ever issued
        if self.latest_token == 0 {
            self.latest_token = 1;
        }
        self.latest_token
    }

    /// Apply a resolved load. Returns false when the token is stale.
    pub fn apply_load(&mut self, token: u64, items: Vec<String>) -> bool {
        if token != self.latest_token {
            log::debug!(
                "Discarding stale suggestions for request {} (latest: {})",
                token,
                self.latest_token
            );
            return false;
        }

        log::debug!("Applying {} suggestions for request {}", items.len(), token);
        self.items = items;
        self.visible = !self.items.is_empty();
        self.cursor = match self.open_policy {
            OpenPolicy::SelectFirst if self.visible => Some(0),
            _ => None,
        };
        true
    }

    /// Drop any in-flight response by moving the latest token forward
    pub fn cancel_pending(&mut self) {
        self.begin_load();
    }

    pub fn show(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.visible = true;
        self.select(0);
    }

    pub fn hide(&mut self) {
        self.items.clear();
        self.cursor = None;
        self.visible = false;
    }

    pub fn reset(&mut self) {
        self.hide();
    }

    pub fn next(&mut self) {
        let from = self.cursor.map_or(-1, |i| i as isize);
        self.select(from + 1);
    }

    pub fn prior(&mut self) {
        let from = self
            .cursor
            .map_or(self.items.len() as isize, |i| i as isize);
        self.select(from - 1);
    }

    /// Move the cursor to `index`, wrapping past either end
    pub fn select(&mut self, index: isize) {
        let len = self.items.len();
        if len == 0 {
            self.cursor = None;
            return;
        }

        let index = if index < 0 {
            len - 1
        } else if index as usize >= len {
            0
        } else {
            index as usize
        };
        self.cursor = Some(index);
    }

    pub fn selected(&self) -> Option<&str> {
        self.cursor
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn latest_token(&self) -> u64 {
        self.latest_token
    }

    pub fn open_policy(&self) -> OpenPolicy {
        self.open_policy
    }
}

#[cfg(test)]
#[path = "suggestion_store_tests.rs"]
mod suggestion_store_tests;
