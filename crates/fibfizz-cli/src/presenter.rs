//! Banner, prompt, and run summary.

use std::io::{self, Write};
use std::time::Duration;

use fibfizz_core::generator::RunOutcome;

use crate::output::{format_banner, format_seconds, LENGTH_PROMPT};

/// Writes the framing text around a run.
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn present_banner(&mut self, bits: usize) -> io::Result<()> {
        self.out.write_all(format_banner(bits).as_bytes())?;
        self.out.flush()
    }

    /// Write the length prompt without a newline and flush it so it shows
    /// before stdin blocks.
    pub fn present_prompt(&mut self) -> io::Result<()> {
        self.out.write_all(LENGTH_PROMPT.as_bytes())?;
        self.out.flush()
    }

    /// Write the success or overflow summary followed by the elapsed
    /// wall-clock time.
    pub fn present_summary<const BITS: usize, const LIMBS: usize>(
        &mut self,
        outcome: &RunOutcome<BITS, LIMBS>,
        elapsed: Duration,
    ) -> io::Result<()> {
        let RunOutcome { index, value, .. } = outcome;
        if outcome.overflowed {
            writeln!(self.out, "\nHIGHEST RESULT:  {index}  {value}")?;
            writeln!(self.out, "ERROR: data overflow condition after n = {index}")?;
            writeln!(self.out, "Please rebuild with a larger OPERAND_BITS")?;
        } else {
            writeln!(self.out, "\nSUCCESS:  {index}  {value}")?;
        }
        writeln!(self.out, "Elapsed seconds: {}", format_seconds(elapsed))?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
