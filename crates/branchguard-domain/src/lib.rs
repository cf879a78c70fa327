//! Pure policy evaluation (no IO).
//!
//! Input: normalized allow/deny lists and a pull request context built elsewhere.
//! Output: a decision with ordered diagnostics and an optional failure message.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
