use crate::{RenderableLevel, RenderableReport};

/// Render diagnostics as GitHub Actions workflow commands, in emission order.
///
/// Format:
/// - info: the message as a plain log line
/// - warning: `::warning::{message}`
/// - error: `::error::{message}`
///
/// A failure message, if any, is emitted last as an `::error::` command.
pub fn render_workflow_commands(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for m in &report.messages {
        match m.level {
            RenderableLevel::Info => out.push(m.text.clone()),
            RenderableLevel::Warning => out.push(format!("::warning::{}", escape_data(&m.text))),
            RenderableLevel::Error => out.push(format!("::error::{}", escape_data(&m.text))),
        }
    }

    if let Some(failure) = &report.failure {
        out.push(format!("::error::{}", escape_data(failure)));
    }

    out
}

/// Escape a workflow-command message payload.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
