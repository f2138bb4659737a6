use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use super::source::CandidateSource;
use super::worker::{LoadRequest, LoadResponse, spawn_worker};
use crate::error::AutosuggestError;

/// UI-side handle to the loader worker
///
/// Sends requests and drains responses without blocking. Responses are
/// returned as-is; deciding which one is stale is the store's job.
pub struct SuggestionLoader {
    request_tx: Option<Sender<LoadRequest>>,
    response_rx: Option<Receiver<LoadResponse>>,
    /// Queries sent so far, newest last
    requests_sent: u64,
}

impl SuggestionLoader {
    /// Spawn a worker for `source` and connect to it
    pub fn spawn(source: Box<dyn CandidateSource>) -> Result<Self, AutosuggestError> {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        spawn_worker(source, request_rx, response_tx)?;

        Ok(Self {
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
            requests_sent: 0,
        })
    }

    /// A loader with no worker; every request fails with `LoaderDisconnected`
    pub fn disconnected() -> Self {
        Self {
            request_tx: None,
            response_rx: None,
            requests_sent: 0,
        }
    }

    /// Send a load request for `query` tagged with the store token
    pub fn request(&mut self, request_id: u64, query: &str) -> Result<(), AutosuggestError> {
        let Some(tx) = &self.request_tx else {
            return Err(AutosuggestError::LoaderDisconnected);
        };

        log::debug!("Sending load request {} for query: {:?}", request_id, query);

        let request = LoadRequest {
            query: query.to_string(),
            request_id,
        };
        if tx.send(request).is_err() {
            log::error!("Suggestion loader disconnected - send failed");
            self.request_tx = None;
            self.response_rx = None;
            return Err(AutosuggestError::LoaderDisconnected);
        }

        self.requests_sent += 1;
        Ok(())
    }

    /// Drain every response that has arrived (non-blocking)
    pub fn poll(&mut self) -> Result<Vec<LoadResponse>, AutosuggestError> {
        let Some(rx) = &self.response_rx else {
            return Ok(Vec::new());
        };

        let mut responses = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::error!("Suggestion loader disconnected in poll");
                    self.request_tx = None;
                    // Hand over what arrived; the next poll reports the disconnect
                    if !responses.is_empty() {
                        break;
                    }
                    self.response_rx = None;
                    return Err(AutosuggestError::LoaderDisconnected);
                }
            }
        }
        Ok(responses)
    }

    pub fn is_connected(&self) -> bool {
        self.request_tx.is_some()
    }

    pub fn requests_sent(&self) -> u64 {
        self.requests_sent
    }
}

#[cfg(test)]
#[path = "suggestion_loader_tests.rs"]
mod suggestion_loader_tests;
