//! Backoffice - AI backoffice simulator CLI
//!
//! Runs the deterministic evaluation pipeline over a business scenario
//! and renders the result for human review.
//!
//! ## Commands
//!
//! - `run`: Evaluate a scenario (from a JSON file, or the built-in sample)
//! - `sample`: Print the built-in sample scenario as JSON

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, Level};

use backoffice_core::{classify, run_digest, run_office, OfficeStatus, RunResult, Scenario};

#[derive(Parser)]
#[command(name = "backoffice")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AI backoffice simulator", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a scenario and print the run report
    Run {
        /// Path to a scenario JSON file (built-in sample when omitted)
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Print the built-in sample scenario as JSON
    Sample,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    backoffice_core::init_tracing(cli.json, level);

    match cli.command {
        Commands::Run { scenario, format } => {
            let scenario = match scenario {
                Some(path) => load_scenario(&path)?,
                None => sample_scenario(),
            };

            let invocation_id = uuid::Uuid::new_v4();
            info!(invocation_id = %invocation_id, scenario_id = %scenario.id, "evaluating scenario");

            let result = run_office(&scenario)
                .with_context(|| format!("scenario '{}' failed validation", scenario.id))?;
            let status = classify(&result);
            let digest = run_digest(&result).context("computing run digest")?;

            match format {
                Format::Text => print!("{}", render_text_report(&scenario, &result, &status, &digest)),
                Format::Json => {
                    let report = serde_json::json!({
                        "scenario": scenario,
                        "result": result,
                        "status": status,
                        "digest": digest,
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }
        Commands::Sample => {
            println!("{}", serde_json::to_string_pretty(&sample_scenario())?);
        }
    }

    Ok(())
}

/// Load and parse a scenario from a JSON file.
fn load_scenario(path: &PathBuf) -> Result<Scenario> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading scenario file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing scenario file {}", path.display()))
}

/// The built-in demo scenario: a strained support organisation under
/// strict compliance with a tight discount cap.
fn sample_scenario() -> Scenario {
    Scenario::new("demo-strained-quarter", "Strained quarter")
        .with_backlog(420)
        .with_monthly_budget(60_000.0)
        .with_constraints(true, 0.15)
        .with_free_text(
            "Support backlog is exploding, churn complaints are rising, \
             and the sales team wants room to close deals before quarter end.",
        )
}

/// Render the human-readable run report.
fn render_text_report(
    scenario: &Scenario,
    result: &RunResult,
    status: &OfficeStatus,
    digest: &str,
) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out, "Backoffice run report");
    let _ = writeln!(out, "  scenario: {} ({})", scenario.title, scenario.id);
    let _ = writeln!(out, "  generated: {}", Utc::now().to_rfc3339());
    let _ = writeln!(out, "  digest: {digest}");
    let _ = writeln!(out);

    let _ = writeln!(out, "Agents");
    for agent in &result.agents {
        let _ = writeln!(
            out,
            "  {} (confidence {:.2}, evidence {:.2}, budget ask {:.0})",
            agent.agent, agent.confidence, agent.evidence, agent.required_budget
        );
        let _ = writeln!(out, "    {}", agent.proposal.summary);
        for action in &agent.proposal.actions {
            let _ = writeln!(out, "    - {} (cost {:.0})", action.title, action.cost);
        }
    }
    let _ = writeln!(out);

    if result.conflicts.is_empty() {
        let _ = writeln!(out, "Conflicts: none");
    } else {
        let _ = writeln!(out, "Conflicts");
        for conflict in &result.conflicts {
            let _ = writeln!(
                out,
                "  [{}] {}: {}",
                conflict.severity,
                conflict.actors.join(" / "),
                conflict.description
            );
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Policy findings");
    for finding in &result.policy_findings {
        let _ = writeln!(out, "  [{}] {}", finding.status, finding.reason);
    }
    let _ = writeln!(out);

    if !result.post_mortem.is_empty() {
        let _ = writeln!(out, "Post-mortem");
        for line in &result.post_mortem {
            let _ = writeln!(out, "  - {line}");
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Verdict: {} ({})", status.verdict, status.hint);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_sample_scenario_is_valid() {
        assert!(sample_scenario().validate().is_ok());
    }

    #[test]
    fn test_load_scenario_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_scenario()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_scenario(&file.path().to_path_buf()).unwrap();
        assert_eq!(loaded, sample_scenario());
    }

    #[test]
    fn test_load_scenario_missing_file_errors() {
        let err = load_scenario(&PathBuf::from("/nonexistent/scenario.json")).unwrap_err();
        assert!(err.to_string().contains("reading scenario file"));
    }

    #[test]
    fn test_text_report_contains_verdict_and_digest() {
        let scenario = sample_scenario();
        let result = run_office(&scenario).unwrap();
        let status = classify(&result);
        let digest = run_digest(&result).unwrap();

        let report = render_text_report(&scenario, &result, &status, &digest);
        assert!(report.contains("Verdict: NEEDS HUMAN"));
        assert!(report.contains(&digest));
        assert!(report.contains("Marketing"));
        assert!(report.contains("Post-mortem"));
    }

    #[test]
    fn test_json_report_shape() {
        let scenario = sample_scenario();
        let result = run_office(&scenario).unwrap();
        let status = classify(&result);
        let report = serde_json::json!({
            "scenario": scenario,
            "result": result,
            "status": status,
            "digest": run_digest(&result).unwrap(),
        });
        assert_eq!(report["status"]["verdict"], "needs_human");
        assert!(report["result"]["policy_findings"].as_array().is_some());
    }
}
