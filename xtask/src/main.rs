//! Developer tasks (schema generation, conformance runs).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .context("xtask has no parent")
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(branchguard_types::GateReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(branchguard_settings::BranchguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "branchguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "branchguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Run the built branchguard binary over the event fixtures");
    eprintln!("                    and validate every report against the generated schema");
}

/// Token pattern for verdict reasons.
fn is_valid_token(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Event name the fixture was captured from; `push.json` is the only non-PR fixture.
fn fixture_event_name(path: &Path) -> &'static str {
    match path.file_stem().and_then(|s| s.to_str()) {
        Some("push") => "push",
        _ => "pull_request",
    }
}

/// Conformance: every event fixture produces a schema-valid report with clean reason tokens
/// and an exit code consistent with its verdict.
fn conform() -> anyhow::Result<()> {
    let root = project_root()?;
    let schema = serde_json::to_value(generate_report_schema())
        .context("Failed to serialize report schema")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    let bin = root.join("target").join("debug").join("branchguard");
    #[cfg(target_os = "windows")]
    let bin = bin.with_extension("exe");

    if !bin.exists() {
        bail!(
            "branchguard binary not found at {}.\n\
            Run `cargo build -p branchguard-cli` first.",
            bin.display()
        );
    }

    let fixtures_dir = root.join("tests").join("fixtures").join("events");
    let mut errors = Vec::new();
    let mut fixture_count = 0;

    let mut entries: Vec<PathBuf> = fs::read_dir(&fixtures_dir)
        .context("Failed to read tests/fixtures/events/")?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    entries.sort();

    for path in entries {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
        let report_out = temp_dir.path().join("report.json");

        let output = std::process::Command::new(&bin)
            .current_dir(temp_dir.path())
            .env_remove("INPUT_WHITELIST")
            .env_remove("INPUT_BLACKLIST")
            .args(["check", "--event-name", fixture_event_name(&path), "--event-path"])
            .arg(&path)
            .args(["--blacklist", "hotfix", "--report-out"])
            .arg(&report_out)
            .output()
            .with_context(|| format!("Failed to run branchguard on fixture '{}'", name))?;

        let report_text = match fs::read_to_string(&report_out) {
            Ok(text) => text,
            Err(_) => {
                errors.push(format!("fixture '{}': no report output generated", name));
                continue;
            }
        };
        let report: serde_json::Value = serde_json::from_str(&report_text)
            .with_context(|| format!("Failed to parse report for fixture '{}'", name))?;

        for err in validator.iter_errors(&report) {
            errors.push(format!("fixture '{}': schema validation: {}", name, err));
        }

        if let Some(reasons) = report["verdict"]["reasons"].as_array() {
            for (i, reason) in reasons.iter().enumerate() {
                if let Some(s) = reason.as_str()
                    && !is_valid_token(s)
                {
                    errors.push(format!(
                        "fixture '{}': verdict.reasons[{}] '{}' is not a valid token",
                        name, i, s
                    ));
                }
            }
        }

        let expected_code = match report["verdict"]["status"].as_str() {
            Some("pass") | Some("skip") => 0,
            Some("fail") if report["verdict"]["reasons"][0] == "runtime_error" => 1,
            Some("fail") => 2,
            other => {
                errors.push(format!("fixture '{}': unknown verdict {:?}", name, other));
                continue;
            }
        };
        if output.status.code() != Some(expected_code) {
            errors.push(format!(
                "fixture '{}': exit code {:?} does not match verdict (expected {})",
                name,
                output.status.code(),
                expected_code
            ));
            continue;
        }

        fixture_count += 1;
        println!("  ✓ {} produces a valid report", name);
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }
    if fixture_count == 0 {
        bail!("No JSON fixtures found in {}", fixtures_dir.display());
    }

    println!("\n✓ All {} event fixtures pass conformance checks!", fixture_count);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
