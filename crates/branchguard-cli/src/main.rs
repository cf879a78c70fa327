//! CLI entry point for branchguard.
//!
//! This module is intentionally thin: it reads the ambient CI context, handles I/O, and
//! maps verdicts to exit codes. All business logic lives in the `branchguard-app` crate.

use anyhow::Context;
use branchguard_app::{
    GateInput, OutputFormat, parse_report_json, render_log, render_markdown, run_gate,
    runtime_error_report, serialize_report, to_renderable, verdict_exit_code,
};
use branchguard_settings::Overrides;
use branchguard_types::GateReport;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(
    name = "branchguard",
    version,
    about = "Branch allow/deny-list gate for pull-request events"
)]
struct Cli {
    /// Emit debug diagnostics on stderr (also enabled by RUNNER_DEBUG=1).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Gate the triggering event against the branch lists.
    Check {
        /// Declared event type (e.g. pull_request).
        #[arg(long, env = "GITHUB_EVENT_NAME")]
        event_name: Option<String>,

        /// Path to the event payload JSON.
        #[arg(long, env = "GITHUB_EVENT_PATH")]
        event_path: Option<Utf8PathBuf>,

        /// Newline-separated allow-list of head branches.
        #[arg(long, env = "INPUT_WHITELIST")]
        whitelist: Option<String>,

        /// Newline-separated deny-list of head branches.
        #[arg(long, env = "INPUT_BLACKLIST")]
        blacklist: Option<String>,

        /// Path to branchguard config TOML (used for lists not given as inputs).
        #[arg(long, default_value = "branchguard.toml")]
        config: Utf8PathBuf,

        /// Log output format (gha or plain).
        #[arg(long, default_value = "gha")]
        format: String,

        /// Where to write the JSON report.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Where to write a Markdown summary.
        #[arg(long)]
        markdown_out: Option<Utf8PathBuf>,

        /// Append the Markdown summary to $GITHUB_STEP_SUMMARY.
        #[arg(long)]
        step_summary: bool,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/branchguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

struct CheckArgs {
    event_name: Option<String>,
    event_path: Option<Utf8PathBuf>,
    whitelist: Option<String>,
    blacklist: Option<String>,
    config: Utf8PathBuf,
    format: String,
    report_out: Option<Utf8PathBuf>,
    markdown_out: Option<Utf8PathBuf>,
    step_summary: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Check {
            event_name,
            event_path,
            whitelist,
            blacklist,
            config,
            format,
            report_out,
            markdown_out,
            step_summary,
        } => cmd_check(CheckArgs {
            event_name,
            event_path,
            whitelist,
            blacklist,
            config,
            format,
            report_out,
            markdown_out,
            step_summary,
        }),
        Commands::Md { report, output } => cmd_md(report, output),
    }
}

fn init_tracing(verbose: bool) {
    let debug = verbose || std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1");
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    // Unknown formats fall back to gha.
    let format = args.format.parse::<OutputFormat>().unwrap_or_else(|err| {
        tracing::warn!("{err:#}; using gha");
        OutputFormat::Gha
    });

    let result = (|| -> anyhow::Result<i32> {
        // An absent event name is just another non pull-request event.
        let event_name = args.event_name.as_deref().unwrap_or_default();

        // Load config if present; missing file is allowed (inputs or defaults apply).
        let cfg_text = match std::fs::read_to_string(&args.config) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %args.config, "no config file; using inputs only");
                String::new()
            }
            Err(err) => {
                return Err(err).with_context(|| format!("read config: {}", args.config));
            }
        };

        let input = GateInput {
            event_name,
            payload_path: args.event_path.as_deref(),
            config_text: &cfg_text,
            overrides: Overrides {
                whitelist: args.whitelist.clone(),
                blacklist: args.blacklist.clone(),
            },
        };

        let output = run_gate(input)?;
        let renderable = to_renderable(&output.report);

        emit_lines(&render_log(&renderable, format))?;

        if let Some(path) = &args.report_out {
            write_report_file(path, &output.report).context("write report json")?;
        }
        write_summaries(&args, &render_markdown(&renderable))?;

        Ok(verdict_exit_code(output.report.verdict.status))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let event_name = args.event_name.as_deref().unwrap_or_default();
            let report = runtime_error_report(event_name, &format!("{err:#}"));
            if let Err(emit_err) = emit_lines(&render_log(&to_renderable(&report), format)) {
                tracing::warn!("failed to emit runtime error log: {emit_err:#}");
            }
            if let Some(path) = &args.report_out
                && let Err(write_err) = write_report_file(path, &report)
            {
                tracing::warn!("failed to write runtime error report: {write_err:#}");
            }
            std::process::exit(1);
        }
    }
}

/// The job log is the reporting sink: workflow commands go to stdout.
fn emit_lines(lines: &[String]) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{line}").context("write to stdout")?;
    }
    out.flush().context("flush stdout")
}

fn write_summaries(args: &CheckArgs, markdown: &str) -> anyhow::Result<()> {
    if let Some(path) = &args.markdown_out {
        write_text_file(path, markdown).context("write markdown")?;
    }
    if args.step_summary {
        match std::env::var("GITHUB_STEP_SUMMARY") {
            Ok(path) if !path.is_empty() => {
                append_text_file(Utf8Path::new(&path), markdown).context("append step summary")?;
            }
            _ => tracing::warn!("--step-summary given but GITHUB_STEP_SUMMARY is not set"),
        }
    }
    Ok(())
}

fn write_report_file(
    path: &Utf8Path,
    report: &GateReport,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn append_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open: {}", path))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("append: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}
