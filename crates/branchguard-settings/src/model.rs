use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `branchguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BranchguardConfigV1 {
    /// Optional schema string for tooling (`branchguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Allow-list. When non-empty, only these head branches pass.
    #[serde(default, alias = "whitelist", skip_serializing_if = "Vec::is_empty")]
    pub allowed: Vec<String>,

    /// Deny-list. Used only when the allow-list is empty.
    #[serde(default, alias = "blacklist", skip_serializing_if = "Vec::is_empty")]
    pub forbidden: Vec<String>,
}
