//! Loader Worker Types
//!
//! Messages exchanged between the UI thread and the loader worker.

/// Request to fetch candidates for a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Text typed into the bound field
    pub query: String,
    /// Store token for this load
    pub request_id: u64,
}

/// Response from the loader worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResponse {
    /// Candidate source returned a list (possibly empty)
    Loaded {
        items: Vec<String>,
        /// The query that produced these items
        query: String,
        request_id: u64,
    },
    /// Candidate source panicked while handling the request
    Failed {
        message: String,
        request_id: u64,
    },
}

impl LoadResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            LoadResponse::Loaded { request_id, .. } | LoadResponse::Failed { request_id, .. } => {
                *request_id
            }
        }
    }
}
