use crate::{RenderableLevel, RenderableReport};

/// Render diagnostics as `level: message` lines for non-Actions consoles.
pub fn render_plain(report: &RenderableReport) -> Vec<String> {
    let mut out: Vec<String> = report
        .messages
        .iter()
        .map(|m| {
            let level = match m.level {
                RenderableLevel::Info => "info",
                RenderableLevel::Warning => "warning",
                RenderableLevel::Error => "error",
            };
            format!("{level}: {}", m.text)
        })
        .collect();

    if let Some(failure) = &report.failure {
        out.push(format!("failed: {failure}"));
    }

    out
}
