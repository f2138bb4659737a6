use crate::config::{Config, LoaderConfig};
use crate::error::AutosuggestError;
use crate::input::{InputState, WordListLoader};
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::scroll::ScrollState;
use crate::suggestions::{
    BoundField, CandidateSource, InputAdapter, SuggestionLoader, SuggestionStore, WordListSource,
};

pub struct App {
    pub input: InputState,
    pub suggestions: InputAdapter,
    pub suggestions_scroll: ScrollState,
    pub max_visible: usize,
    pub layout_regions: LayoutRegions,
    pub notification: NotificationState,
    /// Present until the background word list read finishes
    pub word_list: Option<WordListLoader>,
    pub loader_config: LoaderConfig,
    /// Value printed after the terminal is restored
    pub output: Option<String>,
    pub should_quit: bool,
    pub needs_render: bool,
}

impl App {
    /// Create an app over a ready candidate source
    pub fn new(source: Box<dyn CandidateSource>, config: &Config) -> Self {
        let mut app = Self::with_loader(SuggestionLoader::disconnected(), config);
        app.connect_source(source);
        app
    }

    /// Create an app whose word list is still being read
    pub fn new_with_word_list(word_list: WordListLoader, config: &Config) -> Self {
        let mut app = Self::with_loader(SuggestionLoader::disconnected(), config);
        app.word_list = Some(word_list);
        app
    }

    fn with_loader(loader: SuggestionLoader, config: &Config) -> Self {
        let store = SuggestionStore::new(config.suggestions.open_policy());

        Self {
            input: InputState::new(),
            suggestions: InputAdapter::new(store, loader, config.suggestions.min_chars),
            suggestions_scroll: ScrollState::new(),
            max_visible: config.suggestions.max_visible.max(1),
            layout_regions: LayoutRegions::new(),
            notification: NotificationState::new(),
            word_list: None,
            loader_config: config.loader.clone(),
            output: None,
            should_quit: false,
            needs_render: true,
        }
    }

    fn connect_source(&mut self, source: Box<dyn CandidateSource>) {
        match SuggestionLoader::spawn(source) {
            Ok(loader) => self.suggestions.set_loader(loader),
            Err(e) => {
                log::error!("Failed to start suggestion loader: {}", e);
                self.notification
                    .show_error(&format!("Suggestions unavailable: {}", e));
            }
        }
    }

    /// Pick up the word list once the background read completes
    pub fn poll_word_list(&mut self) {
        let Some(word_list) = &mut self.word_list else {
            return;
        };
        let Some(result) = word_list.poll() else {
            return;
        };
        self.word_list = None;
        self.mark_dirty();

        match result {
            Ok(words) => {
                let count = words.len();
                let source = WordListSource::new(
                    words,
                    self.loader_config.limit,
                    self.loader_config.case_sensitive,
                );
                self.connect_source(Box::new(source));
                self.notification.show(&format!("Loaded {} words", count));

                // Text typed while loading gets its suggestions now
                if self.input.is_focused() && !self.query().is_empty() {
                    let text = self.input.value();
                    let result = self.suggestions.on_value_changed(&text);
                    self.report(result);
                }
            }
            Err(e) => {
                log::error!("Failed to load word list: {}", e);
                self.notification.show_error(&e.to_string());
            }
        }
    }

    /// Apply suggestion responses from the worker
    pub fn poll_suggestions(&mut self) {
        match self.suggestions.poll() {
            Ok(true) => self.mark_dirty(),
            Ok(false) => {}
            Err(e) => {
                self.report::<()>(Err(e));
                self.mark_dirty();
            }
        }
    }

    /// Surface a suggestion error as a notification
    pub fn report<T>(&mut self, result: Result<T, AutosuggestError>) {
        if let Err(e) = result {
            match e {
                AutosuggestError::LoaderDisconnected => {
                    self.notification.show_error(&e.to_string())
                }
                AutosuggestError::SourceFailed(_) => self
                    .notification
                    .show_error(&format!("Suggestions failed: {}", e)),
                _ => self
                    .notification
                    .show_warning(&format!("Suggestions failed: {}", e)),
            }
        }
    }

    pub fn is_loading_words(&self) -> bool {
        self.word_list.is_some()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// Dirty, or something on screen animates on its own
    pub fn should_render(&self) -> bool {
        self.needs_render
            || self.is_loading_words()
            || self.suggestions.is_pending()
            || self.notification.current().is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
