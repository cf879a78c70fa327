use crate::{model::BranchguardConfigV1, normalize::normalize_branch_list};
use branchguard_domain::policy::PolicyConfig;
use branchguard_types::BranchList;

/// Raw list inputs supplied by the caller (CLI flags or action inputs).
///
/// A value that is empty once surrounding whitespace is trimmed counts as absent,
/// matching how CI runners pass unset inputs.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub whitelist: Option<String>,
    pub blacklist: Option<String>,
}

/// Where a resolved list came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListSource {
    Input,
    ConfigFile,
    Unset,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub policy: PolicyConfig,
    pub allowed_source: ListSource,
    pub forbidden_source: ListSource,
}

pub fn resolve_config(
    cfg: BranchguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != "branchguard.config.v1"
    {
        anyhow::bail!("unknown config schema: {schema} (expected 'branchguard.config.v1')");
    }

    let (allowed, allowed_source) = resolve_list(overrides.whitelist.as_deref(), &cfg.allowed);
    let (forbidden, forbidden_source) =
        resolve_list(overrides.blacklist.as_deref(), &cfg.forbidden);

    Ok(ResolvedConfig {
        policy: PolicyConfig::new(allowed, forbidden),
        allowed_source,
        forbidden_source,
    })
}

fn resolve_list(input: Option<&str>, from_file: &[String]) -> (BranchList, ListSource) {
    // Only the value as a whole is trimmed; individual lines are kept verbatim.
    if let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) {
        return (normalize_branch_list(Some(raw)), ListSource::Input);
    }
    if !from_file.is_empty() {
        // File entries go through the same line rule as raw inputs.
        let joined = from_file.join("\n");
        return (normalize_branch_list(Some(&joined)), ListSource::ConfigFile);
    }
    (BranchList::new(), ListSource::Unset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;
    use branchguard_types::BranchName;

    #[test]
    fn inputs_win_over_config_file() {
        let cfg = parse_config_toml("allowed = [\"release\"]\nforbidden = [\"hotfix\"]\n").unwrap();
        let resolved = resolve_config(
            cfg,
            Overrides {
                whitelist: Some("Main\nDevelop".to_string()),
                blacklist: None,
            },
        )
        .unwrap();

        assert_eq!(resolved.allowed_source, ListSource::Input);
        assert_eq!(resolved.forbidden_source, ListSource::ConfigFile);
        assert!(resolved.policy.allowed.contains(&BranchName::new("develop")));
        assert!(!resolved.policy.allowed.contains(&BranchName::new("release")));
        assert!(resolved.policy.forbidden.contains(&BranchName::new("hotfix")));
    }

    #[test]
    fn empty_input_falls_back_to_file() {
        let cfg = parse_config_toml("whitelist = [\"Main\"]").unwrap();
        let resolved = resolve_config(
            cfg,
            Overrides {
                whitelist: Some(String::new()),
                blacklist: Some(String::new()),
            },
        )
        .unwrap();
        assert_eq!(resolved.allowed_source, ListSource::ConfigFile);
        assert_eq!(resolved.forbidden_source, ListSource::Unset);
        assert_eq!(resolved.policy.allowed.to_json_array(), r#"["main"]"#);
    }

    #[test]
    fn whitespace_only_input_counts_as_absent() {
        for blank in ["   ", "\n  \n", "\t\r\n"] {
            let resolved = resolve_config(
                BranchguardConfigV1::default(),
                Overrides {
                    whitelist: Some(blank.to_string()),
                    blacklist: Some(blank.to_string()),
                },
            )
            .unwrap();
            assert_eq!(resolved.allowed_source, ListSource::Unset, "{blank:?}");
            assert_eq!(resolved.forbidden_source, ListSource::Unset, "{blank:?}");
            assert!(resolved.policy.allowed.is_empty());
            assert!(resolved.policy.forbidden.is_empty());
        }
    }

    #[test]
    fn whitespace_only_input_falls_back_to_file() {
        let cfg = parse_config_toml("forbidden = [\"hotfix\"]").unwrap();
        let resolved = resolve_config(
            cfg,
            Overrides {
                whitelist: None,
                blacklist: Some("  \n ".to_string()),
            },
        )
        .unwrap();
        assert_eq!(resolved.forbidden_source, ListSource::ConfigFile);
        assert_eq!(resolved.policy.forbidden.to_json_array(), r#"["hotfix"]"#);
    }

    #[test]
    fn only_the_outer_whitespace_is_trimmed() {
        let resolved = resolve_config(
            BranchguardConfigV1::default(),
            Overrides {
                whitelist: Some("  main\n develop  \n".to_string()),
                blacklist: None,
            },
        )
        .unwrap();
        assert_eq!(resolved.allowed_source, ListSource::Input);
        assert_eq!(
            resolved.policy.allowed.to_json_array(),
            r#"["main"," develop"]"#
        );
    }

    #[test]
    fn defaults_are_unconfigured() {
        let resolved =
            resolve_config(BranchguardConfigV1::default(), Overrides::default()).unwrap();
        assert!(resolved.policy.allowed.is_empty());
        assert!(resolved.policy.forbidden.is_empty());
    }

    #[test]
    fn file_entries_drop_empty_strings() {
        let cfg = parse_config_toml("forbidden = [\"\", \"Hotfix\"]").unwrap();
        let resolved = resolve_config(cfg, Overrides::default()).unwrap();
        assert_eq!(resolved.policy.forbidden.to_json_array(), r#"["hotfix"]"#);
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let cfg = parse_config_toml("schema = \"branchguard.config.v9\"").unwrap();
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("unknown config schema"));
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        assert!(parse_config_toml("future_key = true").is_ok());
    }
}
