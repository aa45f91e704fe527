//! Per-term console printer.

use std::io::{self, Write};

use ruint::Uint;
use tracing::trace;

use fibfizz_core::classifier::{classify, Label};
use fibfizz_core::sink::TermSink;

use crate::output::{label_name, write_line};

/// Number of terms seen per label during a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LabelCounts {
    pub buzz: u32,
    pub fizz: u32,
    pub buzz_fizz: u32,
    pub prime_index: u32,
    pub plain: u32,
}

impl LabelCounts {
    fn record(&mut self, label: Label) {
        let slot = match label {
            Label::Buzz => &mut self.buzz,
            Label::Fizz => &mut self.fizz,
            Label::BuzzFizz => &mut self.buzz_fizz,
            Label::PrimeIndex => &mut self.prime_index,
            Label::Plain => &mut self.plain,
        };
        *slot += 1;
    }

    /// Total terms recorded.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.buzz + self.fizz + self.buzz_fizz + self.prime_index + self.plain
    }
}

/// Term sink that classifies every term and, when detail printing is on,
/// writes one `<index>  <label or value>` line per term.
///
/// With details off the classification still runs, so quiet runs time the
/// same work.
pub struct ConsolePrinter<W: Write> {
    out: W,
    details: bool,
    counts: LabelCounts,
}

impl<W: Write> ConsolePrinter<W> {
    #[must_use]
    pub fn new(out: W, details: bool) -> Self {
        Self {
            out,
            details,
            counts: LabelCounts::default(),
        }
    }

    #[must_use]
    pub fn counts(&self) -> LabelCounts {
        self.counts
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<const BITS: usize, const LIMBS: usize, W: Write> TermSink<BITS, LIMBS> for ConsolePrinter<W> {
    fn on_term(&mut self, index: u32, value: &Uint<BITS, LIMBS>) -> io::Result<()> {
        let label = classify(index, value);
        self.counts.record(label);
        trace!(index, label = label_name(label), "classified term");

        if !self.details {
            return Ok(());
        }
        write_line(&mut self.out, index, value, label)
    }
}
