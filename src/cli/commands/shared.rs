//! Shared components for CLI commands
//!
//! Logging setup and the human-readable report summary.

use crate::app::services::results_import::ImportReport;
use crate::constants::LOG_TARGET;
use colored::*;
use tracing::debug;

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the level derived from CLI flags.
pub fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed (e.g. by an embedding test harness)
    let installed = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_timer(fmt::time::uptime()))
            .try_init()
    };

    if installed.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Print a colored summary of an import report to stderr
pub fn print_summary(report: &ImportReport) {
    let (samples, analytes) = report
        .results
        .as_ref()
        .map(|results| (results.sample_count(), results.analyte_count()))
        .unwrap_or((0, 0));

    let status = if report.is_success() {
        "Import succeeded".bright_green().bold()
    } else if report.results.is_some() {
        "Import completed with problems".bright_yellow().bold()
    } else {
        "Import failed".bright_red().bold()
    };

    eprintln!("{}", status);
    eprintln!(
        "  {} {}  {} {}",
        "Samples:".bright_cyan(),
        samples.to_string().bright_white().bold(),
        "Analytes:".bright_cyan(),
        analytes.to_string().bright_white().bold()
    );

    for error in &report.errors {
        eprintln!("  {} {}", "error:".red(), error);
    }
    for warning in &report.warns {
        eprintln!("  {} {}", "warning:".yellow(), warning);
    }
}
