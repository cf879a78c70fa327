//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - allow-list precedence over the deny-list
//! - totality of the unconfigured policy
//! - case-insensitive membership
//! - message ordering and failure-signal consistency

use crate::engine::evaluate;
use crate::model::PullRequestContext;
use crate::policy::PolicyConfig;
use crate::report::Outcome;
use branchguard_types::{BranchList, BranchName, Level};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for branch-like names, mixed case, with path separators.
fn arb_branch() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9._-]{0,11}(/[A-Za-z0-9._-]{1,8}){0,2}").unwrap()
}

fn arb_list(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_branch(), 0..=max)
}

fn arb_non_empty_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_branch(), 1..=6)
}

fn to_list(names: &[String]) -> BranchList {
    names.iter().map(BranchName::new).collect()
}

fn pr(base: &str, head: &str) -> PullRequestContext {
    PullRequestContext::new(42, base, head)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn deny_list_is_ignored_when_allow_list_is_set(
        allowed in arb_non_empty_list(),
        forbidden_a in arb_list(6),
        forbidden_b in arb_non_empty_list(),
        base in arb_branch(),
        head in arb_branch(),
    ) {
        let pr = pr(&base, &head);
        let with_a = evaluate(&PolicyConfig::new(to_list(&allowed), to_list(&forbidden_a)), &pr);
        let with_b = evaluate(&PolicyConfig::new(to_list(&allowed), to_list(&forbidden_b)), &pr);

        prop_assert_eq!(with_a.outcome, with_b.outcome);
        prop_assert_eq!(with_a.error_message, with_b.error_message);

        let expected = if to_list(&allowed).contains(&BranchName::new(&head)) {
            Outcome::Allowed
        } else {
            Outcome::Forbidden
        };
        prop_assert_eq!(with_b.outcome, expected);
    }

    #[test]
    fn unconfigured_policy_always_allows(base in arb_branch(), head in arb_branch()) {
        let d = evaluate(&PolicyConfig::default(), &pr(&base, &head));
        prop_assert_eq!(d.outcome, Outcome::Allowed);
        prop_assert!(d.error_message.is_none());
        prop_assert_eq!(d.errors().count(), 0);
        prop_assert_eq!(d.warnings().count(), 1);
    }

    #[test]
    fn deny_list_forbids_exactly_its_members(
        forbidden in arb_non_empty_list(),
        base in arb_branch(),
        head in arb_branch(),
    ) {
        let list = to_list(&forbidden);
        let member = list.contains(&BranchName::new(&head));
        let d = evaluate(&PolicyConfig::new(BranchList::new(), list), &pr(&base, &head));
        prop_assert_eq!(d.is_forbidden(), member);
    }

    #[test]
    fn membership_ignores_case(allowed in arb_non_empty_list(), pick in any::<prop::sample::Index>()) {
        let chosen = pick.get(&allowed).clone();
        let cfg = PolicyConfig::new(to_list(&allowed), BranchList::new());
        let upper = evaluate(&cfg, &pr("main", &chosen.to_uppercase()));
        let lower = evaluate(&cfg, &pr("main", &chosen.to_lowercase()));
        prop_assert_eq!(upper.outcome, Outcome::Allowed);
        prop_assert_eq!(lower.outcome, Outcome::Allowed);
    }

    #[test]
    fn failure_message_iff_forbidden(
        allowed in arb_list(4),
        forbidden in arb_list(4),
        base in arb_branch(),
        head in arb_branch(),
    ) {
        let d = evaluate(&PolicyConfig::new(to_list(&allowed), to_list(&forbidden)), &pr(&base, &head));
        prop_assert_eq!(d.error_message.is_some(), d.is_forbidden());
        prop_assert_eq!(d.errors().count(), usize::from(d.is_forbidden()));
    }

    #[test]
    fn advisories_precede_summary(
        allowed in arb_list(3),
        forbidden in arb_list(3),
        base in arb_branch(),
        head in arb_branch(),
    ) {
        let d = evaluate(&PolicyConfig::new(to_list(&allowed), to_list(&forbidden)), &pr(&base, &head));
        let first_info = d.messages.iter().position(|m| m.level == Level::Info).unwrap();
        prop_assert!(d.messages[..first_info].iter().all(|m| m.level == Level::Warning));
        prop_assert!(d.messages[first_info].text.starts_with("Pull request #42: "));
        prop_assert!(d.messages[first_info + 1].text.starts_with("Allowed Branches: "));
        prop_assert!(d.messages[first_info + 2].text.starts_with("Forbidden Branches: "));
    }
}
