//! Word List Loader Module
//!
//! Reads the candidate word list in a background thread so the UI comes up
//! before a large file (or a slow pipe on stdin) has been read.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

use crate::error::AutosuggestError;
use crate::suggestions::WordListSource;

/// Represents the current state of word list loading
#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Loading,
    /// Number of distinct words read
    Complete(usize),
    Error(AutosuggestError),
}

/// Manages asynchronous word list loading in a background thread
pub struct WordListLoader {
    pub state: LoadingState,
    pub rx: Option<Receiver<Result<Vec<String>, AutosuggestError>>>,
}

impl WordListLoader {
    /// Spawn a background thread to load a word list file
    pub fn spawn_load(path: PathBuf) -> Self {
        Self::spawn_with(move || load_file_sync(&path))
    }

    /// Spawn a background thread to load the word list from stdin
    pub fn spawn_load_stdin() -> Self {
        Self::spawn_with(load_stdin_sync)
    }

    /// Spawn a background thread running an arbitrary word list reader
    pub(crate) fn spawn_with<F>(load: F) -> Self
    where
        F: FnOnce() -> Result<Vec<String>, AutosuggestError> + Send + 'static,
    {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let _ = tx.send(load());
        });

        Self {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    /// Poll for loading completion (non-blocking)
    ///
    /// Returns None while still loading, or once the result has been taken.
    pub fn poll(&mut self) -> Option<Result<Vec<String>, AutosuggestError>> {
        let rx = self.rx.as_ref()?;

        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                self.state = match &result {
                    Ok(words) => LoadingState::Complete(words.len()),
                    Err(e) => LoadingState::Error(e.clone()),
                };
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                let err = AutosuggestError::Io("Word list loader thread disconnected".to_string());
                self.state = LoadingState::Error(err.clone());
                Some(Err(err))
            }
        }
    }

    pub fn state(&self) -> &LoadingState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadingState::Loading)
    }
}

fn load_file_sync(path: &Path) -> Result<Vec<String>, AutosuggestError> {
    let contents = std::fs::read_to_string(path)?;
    parse_word_list(&contents)
}

fn load_stdin_sync() -> Result<Vec<String>, AutosuggestError> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_word_list(&buffer)
}

fn parse_word_list(contents: &str) -> Result<Vec<String>, AutosuggestError> {
    let words = WordListSource::parse_words(contents);
    if words.is_empty() {
        return Err(AutosuggestError::EmptyWordList);
    }

    log::debug!("Loaded word list with {} entries", words.len());
    Ok(words)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
