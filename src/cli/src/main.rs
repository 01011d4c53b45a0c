//! CLI for the Sprint Report.
//!
//! This tool collects every issue of a Jira sprint and prints a markdown
//! report grouped by parent issue.

use clap::Parser;
use sprint_report::{
    load_config, CredentialOverrides, JiraCredentials, Runner, RunnerConfig, RunnerError,
    SprintReport,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sprint Report - Print a markdown report of a Jira sprint.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Key of the Jira project.
    project: String,

    /// Name of the Jira sprint.
    sprint: String,

    /// Path to a config.toml with [jira] credentials and [report] settings.
    #[arg(long, env = "SPRINT_REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Jira server URL (overrides JIRA_SERVER and the config file).
    #[arg(long)]
    server: Option<String>,

    /// Jira login (overrides JIRA_LOGIN and the config file).
    #[arg(long)]
    login: Option<String>,

    /// Jira API token (overrides JIRA_TOKEN and the config file).
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_client_init_failure() => {
            error!("Cannot initialize Jira API: {e}");
            ExitCode::from(1)
        }
        Err(e) if e.is_init_failure() => {
            error!(error = %e, "Invalid configuration");
            ExitCode::from(1)
        }
        Err(e) => {
            error!(error = %e, "Failed to generate sprint report");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, keeping stdout
///   for the report itself
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<SprintReport, RunnerError> {
    let config_file = load_config(args.config.as_deref())?;
    let credentials = JiraCredentials::resolve(
        CredentialOverrides {
            server: args.server,
            login: args.login,
            token: args.token,
        },
        &config_file.jira,
    )?;

    let config = RunnerConfig::new(args.project, args.sprint).with_settings(config_file.report);
    let runner = Runner::connect(config, &credentials)?;
    runner.run().await
}

/// Prints the issue count followed by the report.
fn print_report(report: &SprintReport) {
    println!("{}", report.count_line());
    print!("{}", report.body);
}
