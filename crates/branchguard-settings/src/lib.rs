//! Input normalization, config parsing, and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod normalize;
mod resolve;

pub use model::BranchguardConfigV1;
pub use normalize::normalize_branch_list;
pub use resolve::{ListSource, Overrides, ResolvedConfig};

/// Parse `branchguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<BranchguardConfigV1> {
    let cfg: BranchguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective policy used by the evaluator (inputs + config file).
pub fn resolve_config(
    cfg: BranchguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
