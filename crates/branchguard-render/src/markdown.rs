use crate::{RenderableLevel, RenderableReport, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Branchguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Fail => "FAIL",
        RenderableVerdictStatus::Skip => "SKIP",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Event: `{}`\n",
        verdict, report.event
    ));

    if let Some(pr) = &report.pull_request {
        out.push_str(&format!(
            "- Pull request: #{} (source `{}`, target `{}`)\n",
            pr.number, pr.source, pr.target
        ));
    }
    if let Some(mode) = &report.policy_mode {
        out.push_str(&format!("- Policy: `{}`\n", mode));
    }
    out.push('\n');

    if let Some(failure) = &report.failure {
        out.push_str(&format!("> Failed: {}\n\n", failure));
    }

    if report.messages.is_empty() {
        out.push_str("No messages.\n");
        return out;
    }

    out.push_str("## Log\n\n");

    for m in &report.messages {
        let level = match m.level {
            RenderableLevel::Info => "INFO",
            RenderableLevel::Warning => "WARN",
            RenderableLevel::Error => "ERROR",
        };
        out.push_str(&format!("- [{}] {}\n", level, m.text));
    }

    out
}
