//! The `gate` use case: inspect the event, resolve lists, evaluate policy, produce a report.

use anyhow::Context;
use branchguard_domain::report::{Decision, Outcome};
use branchguard_event::EventGate;
use branchguard_settings::{Overrides, ResolvedConfig};
use branchguard_types::{
    EventMeta, GateReport, PolicyMeta, PullRequestMeta, RunMeta, SCHEMA_REPORT_V1, ToolMeta,
    Verdict, VerdictStatus, ids,
};
use camino::Utf8Path;
use time::OffsetDateTime;

/// Input for the gate use case.
#[derive(Clone, Debug)]
pub struct GateInput<'a> {
    /// Declared event type (e.g. `pull_request`).
    pub event_name: &'a str,
    /// Path to the event payload JSON. Required only for pull request events.
    pub payload_path: Option<&'a Utf8Path>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Raw allow/deny list inputs.
    pub overrides: Overrides,
}

/// Output from the gate use case.
#[derive(Clone, Debug)]
pub struct GateOutput {
    /// The generated report.
    pub report: GateReport,
    /// The policy decision; `None` when the event gate skipped evaluation.
    pub decision: Option<Decision>,
}

/// Run the gate use case.
///
/// Non pull-request events short-circuit to a `skip` report before any config or payload is read.
pub fn run_gate(input: GateInput<'_>) -> anyhow::Result<GateOutput> {
    let started_at = OffsetDateTime::now_utc();

    if let EventGate::Skip(warning) = branchguard_event::gate_event(input.event_name) {
        tracing::debug!(event = input.event_name, "event gate skipped evaluation");
        let report = GateReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: tool_meta(),
            run: finish_run(started_at),
            event: EventMeta {
                name: input.event_name.to_string(),
            },
            verdict: Verdict {
                status: VerdictStatus::Skip,
                reasons: vec![ids::CODE_UNSUPPORTED_EVENT.to_string()],
            },
            pull_request: None,
            policy: None,
            messages: vec![warning],
            failure: None,
        };
        return Ok(GateOutput {
            report,
            decision: None,
        });
    }

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        branchguard_settings::BranchguardConfigV1::default()
    } else {
        branchguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = branchguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    tracing::debug!(
        allowed = resolved.policy.allowed.len(),
        allowed_source = ?resolved.allowed_source,
        forbidden = resolved.policy.forbidden.len(),
        forbidden_source = ?resolved.forbidden_source,
        "resolved branch lists"
    );

    let payload_path = input
        .payload_path
        .context("pull_request event requires an event payload path")?;
    let pr = branchguard_event::read_pull_request(payload_path).context("load pull request event")?;
    tracing::debug!(number = pr.number, base = %pr.base_ref, head = %pr.head_ref, "loaded pull request");

    let decision = branchguard_domain::evaluate(&resolved.policy, &pr);

    let verdict = match decision.outcome {
        Outcome::Allowed => Verdict {
            status: VerdictStatus::Pass,
            reasons: Vec::new(),
        },
        Outcome::Forbidden => Verdict {
            status: VerdictStatus::Fail,
            reasons: vec![forbidden_reason(&resolved).to_string()],
        },
    };

    let report = GateReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        run: finish_run(started_at),
        event: EventMeta {
            name: input.event_name.to_string(),
        },
        verdict,
        pull_request: Some(PullRequestMeta {
            number: pr.number,
            base_ref: pr.base_ref.clone(),
            head_ref: pr.head_ref.clone(),
        }),
        policy: Some(PolicyMeta {
            mode: resolved.policy.mode(),
            allowed: resolved.policy.allowed.clone(),
            forbidden: resolved.policy.forbidden.clone(),
        }),
        messages: decision.messages.clone(),
        failure: decision.error_message.clone(),
    };

    Ok(GateOutput {
        report,
        decision: Some(decision),
    })
}

/// A forbidden outcome comes from the allow-list whenever it is set.
fn forbidden_reason(resolved: &ResolvedConfig) -> &'static str {
    if resolved.policy.allowed.is_empty() {
        ids::CODE_ON_DENY_LIST
    } else {
        ids::CODE_NOT_ON_ALLOW_LIST
    }
}

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "branchguard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub(crate) fn finish_run(started_at: OffsetDateTime) -> RunMeta {
    let ended_at = OffsetDateTime::now_utc();
    let duration_ms = (ended_at - started_at).whole_milliseconds().max(0) as u64;
    RunMeta {
        started_at,
        ended_at: Some(ended_at),
        duration_ms: Some(duration_ms),
    }
}

/// Map verdict to exit code: 0 = pass/skip, 2 = fail.
pub fn verdict_exit_code(status: VerdictStatus) -> i32 {
    match status {
        VerdictStatus::Pass => 0,
        VerdictStatus::Skip => 0,
        VerdictStatus::Fail => 2,
    }
}
