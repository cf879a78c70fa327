//! Fuzz target for branch list normalization.
//!
//! Goal: normalization never panics, never yields an empty entry, and is idempotent.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_branch_list
//! ```

#![no_main]

use branchguard_settings::normalize_branch_list;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let list = normalize_branch_list(Some(text));
        assert!(list.iter().all(|b| !b.as_str().is_empty()));

        let joined = list.iter().map(|b| b.as_str()).collect::<Vec<_>>().join("\n");
        assert_eq!(normalize_branch_list(Some(&joined)), list);

        let _ = list.to_json_array();
    }
});
