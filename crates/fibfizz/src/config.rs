//! Application configuration from CLI flags and the length prompt.

use clap::Parser;

/// fibfizz — FizzBuzz over the Fibonacci sequence with fixed-width integers.
#[derive(Parser, Debug, Default)]
#[command(name = "fibfizz", version, about)]
pub struct AppConfig {
    /// Sequence length to run. Prompts on stdin when omitted.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Suppress the per-term lines (useful for timing).
    #[arg(short, long)]
    pub quiet: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Parse the leading integer of a prompt answer.
///
/// Leading whitespace and a sign are accepted and anything after the digits
/// is ignored, so `"12 apples"` reads as 12. Returns `None` when no digits
/// are present.
#[must_use]
pub fn parse_length_input(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    let token = &s[..sign_len + digits_len];
    match token.parse::<i64>() {
        Ok(n) => Some(n),
        // Too many digits for i64: keep the sign, saturate the magnitude.
        Err(_) if token.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Turn a requested length into a sequence length, `None` if it is below 1.
/// Lengths past `u32::MAX` saturate.
#[must_use]
pub fn sequence_length(requested: i64) -> Option<u32> {
    if requested < 1 {
        return None;
    }
    Some(u32::try_from(requested).unwrap_or(u32::MAX))
}
