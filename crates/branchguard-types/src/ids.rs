//! Stable identifiers used in report verdict reasons.
//!
//! Codes are short snake_case discriminators.

// Codes: policy outcome
pub const CODE_NOT_ON_ALLOW_LIST: &str = "not_on_allow_list";
pub const CODE_ON_DENY_LIST: &str = "on_deny_list";

// Codes: event gate
pub const CODE_UNSUPPORTED_EVENT: &str = "unsupported_event";

// Tool-level
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

/// The only event type the gate evaluates.
pub const EVENT_PULL_REQUEST: &str = "pull_request";
