//! Fuzz target for pull request payload parsing.
//!
//! Goal: arbitrary payloads either parse or return an error, and a parsed
//! pull request always evaluates to a decision without panicking.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_event_payload
//! ```

#![no_main]

use branchguard_domain::{evaluate, policy::PolicyConfig};
use branchguard_event::parse_pull_request;
use branchguard_settings::normalize_branch_list;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(pr) = parse_pull_request(text)
    {
        let cfg = PolicyConfig::new(
            normalize_branch_list(Some("main\ndevelop")),
            normalize_branch_list(Some("hotfix")),
        );
        let decision = evaluate(&cfg, &pr);
        assert_eq!(decision.is_forbidden(), decision.error_message.is_some());
    }
});
