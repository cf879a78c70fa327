use anyhow::Context;
use branchguard_render::{
    RenderableLevel, RenderableMessage, RenderablePullRequest, RenderableReport,
    RenderableVerdictStatus,
};
use branchguard_types::{
    EventMeta, GateReport, Level, Message, PolicyMode, SCHEMA_REPORT_V1, Verdict, VerdictStatus,
    ids,
};
use time::OffsetDateTime;

use crate::gate::{finish_run, tool_meta};

pub fn parse_report_json(text: &str) -> anyhow::Result<GateReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse branchguard v1 report")
}

pub fn serialize_report(report: &GateReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Report emitted when the gate could not run (bad payload, unreadable config, ...).
pub fn runtime_error_report(event_name: &str, message: &str) -> GateReport {
    GateReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        run: finish_run(OffsetDateTime::now_utc()),
        event: EventMeta {
            name: event_name.to_string(),
        },
        verdict: Verdict {
            status: VerdictStatus::Fail,
            reasons: vec![ids::CODE_RUNTIME_ERROR.to_string()],
        },
        pull_request: None,
        policy: None,
        messages: Vec::new(),
        failure: Some(message.to_string()),
    }
}

pub fn to_renderable(report: &GateReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict.status {
            VerdictStatus::Pass => RenderableVerdictStatus::Pass,
            VerdictStatus::Fail => RenderableVerdictStatus::Fail,
            VerdictStatus::Skip => RenderableVerdictStatus::Skip,
        },
        event: report.event.name.clone(),
        pull_request: report.pull_request.as_ref().map(|pr| RenderablePullRequest {
            number: pr.number,
            source: pr.base_ref.to_string(),
            target: pr.head_ref.to_string(),
        }),
        policy_mode: report.policy.as_ref().map(|p| policy_mode_str(p.mode).to_string()),
        messages: report.messages.iter().map(renderable_message).collect(),
        failure: report.failure.clone(),
    }
}

fn renderable_message(m: &Message) -> RenderableMessage {
    RenderableMessage {
        level: match m.level {
            Level::Info => RenderableLevel::Info,
            Level::Warning => RenderableLevel::Warning,
            Level::Error => RenderableLevel::Error,
        },
        text: m.text.clone(),
    }
}

fn policy_mode_str(mode: PolicyMode) -> &'static str {
    match mode {
        PolicyMode::AllowList => "allow_list",
        PolicyMode::DenyList => "deny_list",
        PolicyMode::Both => "both",
        PolicyMode::Unconfigured => "unconfigured",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_error_report_round_trips() {
        let report = runtime_error_report("pull_request", "load pull request event: missing field `head`");
        let bytes = serialize_report(&report).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let parsed = parse_report_json(&text).unwrap();
        assert_eq!(parsed.verdict.status, VerdictStatus::Fail);
        assert_eq!(parsed.verdict.reasons, vec![ids::CODE_RUNTIME_ERROR]);
        assert_eq!(parsed.failure, report.failure);
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let err = parse_report_json(r#"{"schema": "other.report.v2"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown report schema"));
    }

    #[test]
    fn renderable_labels_base_as_source() {
        let mut report = runtime_error_report("pull_request", "x");
        report.pull_request = Some(branchguard_types::PullRequestMeta {
            number: 3,
            base_ref: "main".into(),
            head_ref: "dev".into(),
        });
        let r = to_renderable(&report);
        let pr = r.pull_request.unwrap();
        assert_eq!(pr.source, "main");
        assert_eq!(pr.target, "dev");
        assert_eq!(r.verdict, RenderableVerdictStatus::Fail);
        assert!(r.messages.is_empty());
        assert_eq!(r.failure.as_deref(), Some("x"));
    }
}
