use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_events;
use crate::suggestions::{BoundField, EventOutcome, handle_suggestion_key};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_word_list();
        self.poll_suggestions();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(&text);
                }
                Event::Mouse(mouse) => {
                    mouse_events::handle_mouse_event(self, mouse);
                }
                Event::FocusLost => {
                    self.blur();
                }
                Event::FocusGained | Event::Resize(_, _) => {
                    self.mark_dirty();
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.mark_dirty();

        // A key press acknowledges a standing error
        if self
            .notification
            .current()
            .is_some_and(|n| n.duration.is_none())
        {
            self.notification.dismiss();
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // First key after a blur only brings focus back
        if !self.input.is_focused() {
            self.input.focus();
            if matches!(key.code, KeyCode::Esc | KeyCode::Tab) {
                return;
            }
        }

        // Nothing to browse until the word list arrives
        if key.code == KeyCode::Down
            && self.is_loading_words()
            && !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return;
        }

        match handle_suggestion_key(&mut self.suggestions, &mut self.input, key) {
            Ok(EventOutcome::Handled) => return,
            Ok(EventOutcome::Ignored) => {}
            Err(e) => {
                self.report::<()>(Err(e));
                return;
            }
        }

        self.handle_input_key(key);
    }

    /// Keys the suggestion list passed through
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                log::debug!("Submitting {:?}", self.query());
                self.output = Some(self.input.value());
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up => {}
            _ => {
                if self.input.handle_key(key) {
                    self.text_changed();
                }
            }
        }
    }

    fn handle_paste_event(&mut self, text: &str) {
        self.mark_dirty();
        self.input.focus();
        if self.input.insert_text(text) {
            self.text_changed();
        }
    }

    fn text_changed(&mut self) {
        // Without a word list yet there is nothing to ask
        if self.is_loading_words() {
            return;
        }

        let text = self.input.value();
        let result = self.suggestions.on_value_changed(&text);
        self.suggestions_scroll.reset();
        self.report(result);
    }

    /// Terminal or field lost focus: close the list
    pub fn blur(&mut self) {
        self.suggestions.hide();
        self.input.blur();
        self.mark_dirty();
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
