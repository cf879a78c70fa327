use branchguard_types::{BranchList, BranchName};

/// Build a [`BranchList`] from a raw newline-separated input.
///
/// Absent or empty input yields an empty list. Lines are split on `'\n'` only and
/// are not trimmed; lines that are exactly empty are dropped and the rest lower-cased.
pub fn normalize_branch_list(raw: Option<&str>) -> BranchList {
    let Some(raw) = raw else {
        return BranchList::new();
    };
    raw.split('\n')
        .filter(|line| !line.is_empty())
        .map(BranchName::new)
        .collect()
}
