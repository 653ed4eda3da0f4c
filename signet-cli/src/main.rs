//! CLI entry point for signet.
//!
//! Arguments are parsed before logging starts so `-v` can pick the default
//! filter. Generated graphs go to stdout (or the requested files) and every
//! diagnostic goes to stderr through `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use signet_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn execute(cli: Cli) -> Result<()> {
    let summary = run_cli(cli).context("failed to generate graph")?;
    let mut writer = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut writer).context("failed to render output")?;
    writer.flush().context("failed to flush output")
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init_logging(cli.verbose) {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Only graph errors carry a stable code; I/O failures log without one.
            let code = match err.downcast_ref::<CliError>() {
                Some(CliError::Graph(graph)) => Some(field::display(graph.code())),
                Some(CliError::Io { .. }) | None => None,
            };
            let chain = format!("{err:#}");
            error!(error = %chain, code, "signet failed");
            ExitCode::FAILURE
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is unavailable until logging initialises"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
