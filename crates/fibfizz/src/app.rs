//! Application entry point: banner, length prompt, run, summary.

use std::io::{self, BufRead, BufWriter, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use fibfizz_cli::{ConsolePresenter, ConsolePrinter};
use fibfizz_core::constants::{OPERAND_BITS, OPERAND_LIMBS};
use fibfizz_core::generator::SequenceGenerator;

use crate::config::{parse_length_input, sequence_length, AppConfig};

/// Run the application against the process's stdin and stdout.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(config, stdin.lock(), stdout.lock())
}

/// Run the application against arbitrary input and output streams.
///
/// A requested length below 1 (or an unreadable answer) ends the run
/// quietly after the banner. Overflow is reported in the summary, not as
/// an error.
pub fn run_with<R: BufRead, W: Write>(config: &AppConfig, input: R, mut output: W) -> Result<()> {
    let mut presenter = ConsolePresenter::new(&mut output);
    presenter
        .present_banner(OPERAND_BITS)
        .context("failed to write banner")?;

    let requested = match config.length {
        Some(length) => Some(length),
        None => {
            presenter
                .present_prompt()
                .context("failed to write prompt")?;
            read_requested_length(input)?
        }
    };
    debug!(?requested, "requested sequence length");

    let Some(length) = requested.and_then(sequence_length) else {
        debug!("length below 1, nothing to run");
        return Ok(());
    };

    let mut printer = ConsolePrinter::new(BufWriter::new(presenter.into_inner()), !config.quiet);
    let start = Instant::now();
    let outcome = SequenceGenerator::<OPERAND_BITS, OPERAND_LIMBS>::run(length, &mut printer)
        .context("failed to write sequence")?;
    let elapsed = start.elapsed();
    debug!(counts = ?printer.counts(), ?elapsed, "labels emitted");

    let writer = printer
        .into_inner()
        .context("failed to flush sequence output")?
        .into_inner()
        .map_err(io::IntoInnerError::into_error)
        .context("failed to flush sequence output")?;
    ConsolePresenter::new(writer)
        .present_summary(&outcome, elapsed)
        .context("failed to write summary")?;
    Ok(())
}

fn read_requested_length<R: BufRead>(mut input: R) -> Result<Option<i64>> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read sequence length")?;
    Ok(parse_length_input(&line))
}
