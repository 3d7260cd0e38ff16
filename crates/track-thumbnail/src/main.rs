mod cli;
mod logging;

use clap::Parser;
use std::process::ExitCode;
use track_thumbnail_lib::convert_many;

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };
    logging::init();

    let jobs = cli.jobs().unwrap_or_else(|e| e.exit());
    let config = cli.config();
    tracing::debug!(?config, "Converting {} file(s)", jobs.len());

    let results = convert_many(&jobs, &config);

    let mut failed = 0usize;
    for (job, result) in jobs.iter().zip(results) {
        match result {
            Ok(()) => tracing::info!(
                "{} -> {}",
                job.input.display(),
                job.output.display()
            ),
            Err(e) => {
                failed += 1;
                tracing::error!(kind = ?e.kind(), "{e}");
            }
        }
    }

    if failed > 0 {
        tracing::error!("{failed} of {} conversion(s) failed", jobs.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
