//! Stable DTOs and IDs used across the branchguard workspace.
//!
//! This crate is intentionally boring:
//! - case-insensitive branch names and branch lists
//! - stable string IDs and codes
//! - data types for the emitted gate report

#![forbid(unsafe_code)]

pub mod branch;
pub mod ids;
pub mod receipt;

pub use branch::{BranchList, BranchName};
pub use receipt::{
    EventMeta, GateReport, Level, Message, PolicyMeta, PolicyMode, PullRequestMeta, RunMeta,
    SCHEMA_REPORT_V1, ToolMeta, Verdict, VerdictStatus,
};
