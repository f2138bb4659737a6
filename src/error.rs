use thiserror::Error;

/// Custom error types for autosuggest
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AutosuggestError {
    #[error("Word list is empty: nothing to suggest")]
    EmptyWordList,

    #[error("Suggestion loader disconnected")]
    LoaderDisconnected,

    #[error("{0}")]
    SourceFailed(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AutosuggestError {
    fn from(err: std::io::Error) -> Self {
        AutosuggestError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
