use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Case-insensitive branch name.
///
/// The stored form is always lower-cased; nothing else is touched (no trimming,
/// no `refs/heads/` stripping). Two names are equal iff their lower-cased forms are.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct BranchName(String);

impl BranchName {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BranchName {
    fn from(value: &str) -> Self {
        BranchName::new(value)
    }
}

impl From<String> for BranchName {
    fn from(value: String) -> Self {
        BranchName::new(value)
    }
}

// Re-normalize on the way in so hand-edited reports keep the invariant.
impl<'de> Deserialize<'de> for BranchName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(BranchName::new)
    }
}

/// Ordered collection of branch names with set-style membership.
///
/// Input order is kept so echoes of the list stay stable; it has no bearing on
/// membership. Duplicates are harmless.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct BranchList(Vec<BranchName>);

impl BranchList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Exact membership after normalization. No prefix or wildcard matching.
    pub fn contains(&self, name: &BranchName) -> bool {
        self.0.iter().any(|b| b == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BranchName> {
        self.0.iter()
    }

    /// Compact JSON array rendering, e.g. `[]` or `["main","develop"]`.
    pub fn to_json_array(&self) -> String {
        let names: Vec<&str> = self.0.iter().map(BranchName::as_str).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }
}

impl FromIterator<BranchName> for BranchList {
    fn from_iter<I: IntoIterator<Item = BranchName>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BranchList {
    type Item = &'a BranchName;
    type IntoIter = std::slice::Iter<'a, BranchName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
