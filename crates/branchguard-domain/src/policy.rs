use branchguard_types::{BranchList, PolicyMode};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    pub allowed: BranchList,
    pub forbidden: BranchList,
}

impl PolicyConfig {
    pub fn new(allowed: BranchList, forbidden: BranchList) -> Self {
        Self { allowed, forbidden }
    }

    /// The allow-list wins whenever it is non-empty.
    pub fn mode(&self) -> PolicyMode {
        match (self.allowed.is_empty(), self.forbidden.is_empty()) {
            (false, false) => PolicyMode::Both,
            (false, true) => PolicyMode::AllowList,
            (true, false) => PolicyMode::DenyList,
            (true, true) => PolicyMode::Unconfigured,
        }
    }
}
