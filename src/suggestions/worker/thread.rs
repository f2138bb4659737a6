//! Loader Worker Thread
//!
//! Receives load requests via channel, asks the candidate source for
//! candidates, and sends the results back to the main thread.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::sync::mpsc::{Receiver, Sender};

use super::types::{LoadRequest, LoadResponse};
use crate::suggestions::CandidateSource;

pub const WORKER_THREAD_NAME: &str = "suggestion-loader";

static PANIC_HOOK: Once = Once::new();

/// Spawn the loader worker thread
///
/// The worker runs until the request channel closes. A panicking source
/// fails only the request it was handling.
pub fn spawn_worker(
    source: Box<dyn CandidateSource>,
    request_rx: Receiver<LoadRequest>,
    response_tx: Sender<LoadResponse>,
) -> std::io::Result<()> {
    install_panic_hook();

    std::thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || worker_loop(source.as_ref(), request_rx, response_tx))?;

    Ok(())
}

/// Keep worker panics off the terminal while the TUI owns it
///
/// Panics on the worker thread are logged; every other thread keeps the
/// previously installed hook.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let on_worker = std::thread::current().name() == Some(WORKER_THREAD_NAME);
            if on_worker {
                log::error!(
                    "Suggestion loader panic: {} at {:?}",
                    panic_message(panic_info.payload()),
                    panic_info.location()
                );
            } else {
                prev_hook(panic_info);
            }
        }));
    });
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic in suggestion loader".to_string()
    }
}

fn worker_loop(
    source: &dyn CandidateSource,
    request_rx: Receiver<LoadRequest>,
    response_tx: Sender<LoadResponse>,
) {
    log::debug!("Suggestion loader thread started");

    while let Ok(request) = request_rx.recv() {
        log::debug!(
            "Loader received request {}: {:?}",
            request.request_id,
            request.query
        );
        let response = handle_request(source, request);
        if response_tx.send(response).is_err() {
            break;
        }
    }

    log::debug!("Suggestion loader thread shutting down");
}

fn handle_request(source: &dyn CandidateSource, request: LoadRequest) -> LoadResponse {
    let LoadRequest { query, request_id } = request;

    match panic::catch_unwind(AssertUnwindSafe(|| source.candidates(&query))) {
        Ok(items) => {
            log::debug!("Request {} produced {} candidates", request_id, items.len());
            LoadResponse::Loaded {
                items,
                query,
                request_id,
            }
        }
        Err(payload) => LoadResponse::Failed {
            message: format!("Suggestion source crashed: {}", panic_message(payload.as_ref())),
            request_id,
        },
    }
}

#[cfg(test)]
#[path = "thread_tests.rs"]
mod thread_tests;
