use crate::model::PullRequestContext;
use crate::policy::PolicyConfig;
use branchguard_types::{BranchList, BranchName};

pub fn list(names: &[&str]) -> BranchList {
    names.iter().map(BranchName::new).collect()
}

pub fn config(allowed: &[&str], forbidden: &[&str]) -> PolicyConfig {
    PolicyConfig::new(list(allowed), list(forbidden))
}

pub fn pr(base: &str, head: &str) -> PullRequestContext {
    PullRequestContext::new(7, base, head)
}
