// Configuration type definitions

use serde::Deserialize;

use crate::suggestions::OpenPolicy;

/// Suggestion list configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionsConfig {
    /// Highlight the first candidate whenever the list opens
    #[serde(default)]
    pub open_selects_first: bool,
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
}

fn default_max_visible() -> usize {
    10
}

fn default_min_chars() -> usize {
    1
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        SuggestionsConfig {
            open_selects_first: false,
            max_visible: default_max_visible(),
            min_chars: default_min_chars(),
        }
    }
}

impl SuggestionsConfig {
    pub fn open_policy(&self) -> OpenPolicy {
        if self.open_selects_first {
            OpenPolicy::SelectFirst
        } else {
            OpenPolicy::Unset
        }
    }
}

/// Word list loader configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoaderConfig {
    /// Most candidates returned for one query
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub case_sensitive: bool,
}

fn default_limit() -> usize {
    50
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            limit: default_limit(),
            case_sensitive: false,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
