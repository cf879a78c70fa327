//! Event source adapters: the event-type gate and pull-request payload extraction.
//!
//! Ambient CI context (environment variables) is read by the CLI only; this crate takes
//! the event name and payload location as explicit parameters.

#![forbid(unsafe_code)]

mod gate;
mod payload;

pub use gate::{EventGate, gate_event};
pub use payload::{EventError, parse_pull_request, read_pull_request};
