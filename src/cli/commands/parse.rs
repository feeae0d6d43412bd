//! Parse command implementation
//!
//! Runs one import over a results file and prints the JSON report to stdout.

use super::shared::{print_summary, setup_logging};
use crate::Result;
use crate::app::services::results_import::{ImportReport, import_file};
use crate::cli::args::ParseArgs;
use tracing::{debug, info};

/// Parse command runner
pub async fn run_parse(args: ParseArgs) -> Result<ImportReport> {
    setup_logging(args.get_log_level(), args.quiet);
    debug!("Parse arguments: {:?}", args);

    args.validate()?;
    let config = args.import_config();

    let report = import_file(args.file.as_deref(), &config).await;
    info!(
        "Import finished with {} errors and {} warnings",
        report.errors.len(),
        report.warns.len()
    );

    println!("{}", report.to_json(args.pretty)?);
    if !args.quiet {
        print_summary(&report);
    }

    Ok(report)
}
