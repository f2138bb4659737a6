//! Shared test utilities for autosuggest
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{Receiver, Sender, channel};
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use crate::app::App;
    use crate::config::Config;
    use crate::suggestions::{BoundField, CandidateSource, InputAdapter, WordListSource};

    /// Test fixture word list
    pub const TEST_WORDS: &[&str] = &[
        "Item1", "Item2", "Item3", "apple", "apricot", "avocado", "banana",
    ];

    pub fn word_source() -> WordListSource {
        WordListSource::new(TEST_WORDS.iter().map(|w| w.to_string()).collect(), 50, false)
    }

    /// Helper to create App over the fixture word list with default config
    pub fn test_app() -> App {
        test_app_with_config(&Config::default())
    }

    pub fn test_app_with_config(config: &Config) -> App {
        App::new(Box::new(word_source()), config)
    }

    /// Helper to create App whose source only answers when released
    pub fn gated_app() -> (App, GatedSourceHandle) {
        let (source, handle) = GatedSource::new();
        (App::new(Box::new(source), &Config::default()), handle)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Helper to create a MouseEvent at a screen position
    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Render the app once so layout regions are populated
    pub fn render_app(app: &mut App, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().buffer().clone()
    }

    /// One row of a rendered buffer as text
    pub fn buffer_row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    /// Poll the app until `done` holds or two seconds pass
    pub fn poll_app_until(app: &mut App, done: impl Fn(&App) -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            app.poll_suggestions();
            if done(app) {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    /// Poll the adapter until no load is pending or two seconds pass
    pub fn settle(adapter: &mut InputAdapter) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while adapter.is_pending() && Instant::now() < deadline {
            let _ = adapter.poll();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    /// Type text into the app's input one character at a time
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    /// Type text and wait until the suggestions for it are visible
    pub fn app_with_suggestions(text: &str) -> App {
        let mut app = test_app();
        type_text(&mut app, text);
        poll_app_until(&mut app, |app| !app.suggestions.is_pending());
        app
    }

    /// Field double for adapter tests
    #[derive(Debug, Default)]
    pub struct MockField {
        pub text: String,
        pub focused: bool,
    }

    impl BoundField for MockField {
        fn value(&self) -> String {
            self.text.clone()
        }

        fn set_value(&mut self, value: &str) {
            self.text = value.to_string();
        }

        fn focus(&mut self) {
            self.focused = true;
        }

        fn is_focused(&self) -> bool {
            self.focused
        }
    }

    /// Candidate source that records queries and blocks until released
    pub struct GatedSource {
        calls: Arc<Mutex<Vec<String>>>,
        gate: Receiver<Vec<String>>,
    }

    pub struct GatedSourceHandle {
        calls: Arc<Mutex<Vec<String>>>,
        release_tx: Sender<Vec<String>>,
    }

    impl GatedSource {
        pub fn new() -> (Self, GatedSourceHandle) {
            let calls = Arc::new(Mutex::new(Vec::new()));
            let (release_tx, gate) = channel();
            (
                Self {
                    calls: Arc::clone(&calls),
                    gate,
                },
                GatedSourceHandle { calls, release_tx },
            )
        }
    }

    impl CandidateSource for GatedSource {
        fn candidates(&self, query: &str) -> Vec<String> {
            self.calls.lock().unwrap().push(query.to_string());
            self.gate.recv().unwrap_or_default()
        }
    }

    impl GatedSourceHandle {
        /// Let the oldest blocked request resolve with `items`
        pub fn release(&self, items: &[&str]) {
            let items = items.iter().map(|s| s.to_string()).collect();
            self.release_tx.send(items).unwrap();
        }

        /// Queries the source has been asked for so far
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        /// Wait until the source has received `count` queries
        pub fn wait_for_calls(&self, count: usize) -> Vec<String> {
            let deadline = Instant::now() + Duration::from_secs(2);
            while self.calls().len() < count && Instant::now() < deadline {
                std::thread::sleep(Duration::from_millis(5));
            }
            self.calls()
        }
    }
}
