//! Build-time operand width and the console markers.

use ruint::Uint;

/// Operand width (in bits) used for every Fibonacci value.
///
/// This controls how far the sequence can go before overflowing:
///
/// | bits   | last reachable index |
/// |--------|----------------------|
/// | 64     | 93                   |
/// | 1024   | 1,476                |
/// | 8192   | 11,801               |
/// | 32768  | 47,201               |
pub const OPERAND_BITS: usize = 8192;

/// Number of 64-bit limbs backing [`OPERAND_BITS`].
pub const OPERAND_LIMBS: usize = ruint::nlimbs(OPERAND_BITS);

/// Fibonacci value at the configured operand width.
pub type Fib = Uint<OPERAND_BITS, OPERAND_LIMBS>;

/// Marker printed when F(n) is divisible by 3.
pub const BUZZ_MARKER: &str = "Buzz   ";

/// Marker printed when F(n) is divisible by 5.
pub const FIZZ_MARKER: &str = "Fizz   ";

/// Marker printed when n is a known Fibonacci-prime index.
pub const PRIME_MARKER: &str = "BuzzFizz!!  ";

/// Largest number of decimal digits guaranteed to fit in `bits` bits,
/// `floor(bits * log10(2))`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn max_decimal_digits(bits: usize) -> u64 {
    (bits as f64 * std::f64::consts::LOG10_2).floor() as u64
}
