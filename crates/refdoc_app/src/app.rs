use std::process::ExitCode;

use refdoc_engine::{Harvester, RunOutcome};
use refdoc_logging::{refdoc_error, refdoc_info};

use crate::config_file;
use crate::logging::{self, LogDestination};

/// Run one harvest: initialize logging, load the optional RON config given
/// as the sole argument, drive the engine to completion.
pub fn run() -> ExitCode {
    logging::initialize(LogDestination::Terminal);

    let config_path = std::env::args().nth(1);
    let config = match config_file::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            refdoc_error!("Could not load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    let harvester = Harvester::new(config);
    match harvester.run_blocking() {
        Ok(RunOutcome::Completed(summary)) => {
            refdoc_info!(
                "Done: {} pages, {} bytes -> {}",
                summary.page_count,
                summary.bytes_written,
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::NoPages) => {
            refdoc_info!("Nothing to do: no documentation links survived filtering");
            ExitCode::SUCCESS
        }
        Err(err) => {
            refdoc_error!("Harvest aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
