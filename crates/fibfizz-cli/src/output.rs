//! Console text formatting.

use std::io::{self, Write};
use std::time::Duration;

use ruint::Uint;

use fibfizz_core::classifier::Label;
use fibfizz_core::constants::max_decimal_digits;

/// Prompt shown before reading the sequence length.
pub const LENGTH_PROMPT: &str = "Enter the length of FIZZBUZZ sequence to run: ";

/// Welcome banner for an operand width of `bits`.
#[must_use]
pub fn format_banner(bits: usize) -> String {
    format!(
        "\nWelcome to FIZZBUZZ!\n\
         Your current operand size is {bits}bits, your result will be limited to {} decimal digits\n\
         If you need more digits, then rebuild with a larger OPERAND_BITS\n\n",
        max_decimal_digits(bits)
    )
}

/// Write one sequence line, `<index>  <label or value>\n`.
pub fn write_line<W, const BITS: usize, const LIMBS: usize>(
    out: &mut W,
    index: u32,
    value: &Uint<BITS, LIMBS>,
    label: Label,
) -> io::Result<()>
where
    W: Write + ?Sized,
{
    match label.marker() {
        Some(marker) => writeln!(out, "{index}  {marker}"),
        None => writeln!(out, "{index}  {value}"),
    }
}

/// Elapsed seconds as printed in the summary.
#[must_use]
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{:.6}", elapsed.as_secs_f64())
}

/// Short label name for logs.
#[must_use]
pub fn label_name(label: Label) -> &'static str {
    match label {
        Label::Buzz => "buzz",
        Label::Fizz => "fizz",
        Label::BuzzFizz => "buzz+fizz",
        Label::PrimeIndex => "prime-index",
        Label::Plain => "plain",
    }
}
