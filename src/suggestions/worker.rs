//! Loader Worker Module
//!
//! Runs the candidate source in a background thread so a slow source never
//! blocks the UI. Requests carry the store's request token; responses echo it
//! back so the store can discard anything that is not the latest request.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::mpsc::channel;
//! use suggestions::worker::{spawn_worker, LoadRequest, LoadResponse};
//!
//! let (request_tx, request_rx) = channel();
//! let (response_tx, response_rx) = channel();
//!
//! spawn_worker(Box::new(source), request_rx, response_tx)?;
//!
//! request_tx.send(LoadRequest { query: "ap".to_string(), request_id: 1 })?;
//!
//! match response_rx.recv()? {
//!     LoadResponse::Loaded { items, .. } => println!("{:?}", items),
//!     LoadResponse::Failed { message, .. } => eprintln!("{}", message),
//! }
//! ```

pub mod thread;
pub mod types;

pub use thread::spawn_worker;
pub use types::{LoadRequest, LoadResponse};
