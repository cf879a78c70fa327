use crate::model::PullRequestContext;
use crate::policy::PolicyConfig;
use crate::report::{Decision, Outcome};
use branchguard_types::{Message, PolicyMode};

const BOTH_LISTS_ADVISORY: &str = "You should either specify a whitelist (allowedBranches) or a blacklist (forbiddenBranches). \
Not both at the same time! The whitelist will be used in this case.";
const NO_POLICY_ADVISORY: &str = "Both the white- and the blacklist are empty.";

pub fn evaluate(cfg: &PolicyConfig, pr: &PullRequestContext) -> Decision {
    let mut messages = Vec::new();

    // Advisories come first and never affect the outcome.
    match cfg.mode() {
        PolicyMode::Both => messages.push(Message::warning(BOTH_LISTS_ADVISORY)),
        PolicyMode::Unconfigured => messages.push(Message::warning(NO_POLICY_ADVISORY)),
        PolicyMode::AllowList | PolicyMode::DenyList => {}
    }

    messages.push(Message::info(format!(
        "Pull request #{}: {} -> {}",
        pr.number, pr.base_ref, pr.head_ref
    )));
    messages.push(Message::info(format!(
        "Allowed Branches: {}",
        cfg.allowed.to_json_array()
    )));
    messages.push(Message::info(format!(
        "Forbidden Branches: {}",
        cfg.forbidden.to_json_array()
    )));

    // Message texts name `base_ref` while the lists are tested against `head_ref`.
    let base = &pr.base_ref;
    let head = &pr.head_ref;

    if !cfg.allowed.is_empty() {
        if cfg.allowed.contains(head) {
            messages.push(Message::info(format!(
                "The pull request is allowed. Branch '{base}' has been found on the whitelist."
            )));
            return allowed(messages);
        }
        messages.push(Message::error(format!(
            "The pull request is forbidden. Branch '{base}' hasn't been found on the whitelist."
        )));
        return forbidden(
            messages,
            format!("Head branch '{base}' hasn't been found on the whitelist for '{head}'."),
        );
    }

    if !cfg.forbidden.is_empty() {
        if cfg.forbidden.contains(head) {
            messages.push(Message::error(format!(
                "The pull request is forbidden. Branch '{base}' has been found on the blacklist."
            )));
            return forbidden(
                messages,
                format!("Head branch '{base}' has been found on the blacklist for '{head}'."),
            );
        }
        messages.push(Message::info(format!(
            "The pull request is allowed. Branch '{base}' hasn't been found on the blacklist."
        )));
        return allowed(messages);
    }

    allowed(messages)
}

fn allowed(messages: Vec<Message>) -> Decision {
    Decision {
        outcome: Outcome::Allowed,
        messages,
        error_message: None,
    }
}

fn forbidden(messages: Vec<Message>, error_message: String) -> Decision {
    Decision {
        outcome: Outcome::Forbidden,
        messages,
        error_message: Some(error_message),
    }
}
