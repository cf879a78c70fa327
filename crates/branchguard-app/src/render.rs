//! Render use cases: log lines and Markdown from in-memory reports.

use branchguard_render::RenderableReport;

/// How diagnostics are written to the job log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// GitHub Actions workflow commands.
    #[default]
    Gha,
    /// `level: message` lines.
    Plain,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gha" | "github" => Ok(OutputFormat::Gha),
            "plain" | "text" => Ok(OutputFormat::Plain),
            other => anyhow::bail!("unknown output format: {other} (expected gha or plain)"),
        }
    }
}

pub fn render_log(report: &RenderableReport, format: OutputFormat) -> Vec<String> {
    match format {
        OutputFormat::Gha => branchguard_render::render_workflow_commands(report),
        OutputFormat::Plain => branchguard_render::render_plain(report),
    }
}

pub fn render_markdown(report: &RenderableReport) -> String {
    branchguard_render::render_markdown(report)
}
