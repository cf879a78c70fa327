use branchguard_types::BranchName;

/// The pull request under judgement.
///
/// `base_ref` is labelled "source" and `head_ref` "target" in all output; the
/// lists are always tested against `head_ref`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PullRequestContext {
    pub number: u64,
    pub base_ref: BranchName,
    pub head_ref: BranchName,
}

impl PullRequestContext {
    pub fn new(number: u64, base_ref: impl Into<BranchName>, head_ref: impl Into<BranchName>) -> Self {
        Self {
            number,
            base_ref: base_ref.into(),
            head_ref: head_ref.into(),
        }
    }
}
