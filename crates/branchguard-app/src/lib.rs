//! Use case orchestration for branchguard.
//!
//! This crate provides the application layer: use cases that coordinate the event, settings,
//! domain, and render layers. It is intentionally thin and delegates heavy lifting to them.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod gate;
mod render;
mod report;

pub use gate::{GateInput, GateOutput, run_gate, verdict_exit_code};
pub use render::{OutputFormat, render_log, render_markdown};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
