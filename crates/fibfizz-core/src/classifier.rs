//! FizzBuzz classification of a Fibonacci term.
//!
//! Divisibility is checked first and both markers may fire together. The
//! prime-index marker is only considered when neither divisibility marker
//! fired, so F(4) = 3 is "Buzz" even though 4 is a prime index.

use ruint::Uint;

use crate::constants::{BUZZ_MARKER, FIZZ_MARKER, PRIME_MARKER};
use crate::prime_index::is_prime_index;

/// Classification of a single term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Value divisible by 3 only.
    Buzz,
    /// Value divisible by 5 only.
    Fizz,
    /// Value divisible by both 3 and 5.
    BuzzFizz,
    /// Neither divisor, but the index is a known Fibonacci-prime index.
    PrimeIndex,
    /// None of the above; the value itself is printed.
    Plain,
}

impl Label {
    /// Console text for this label, `None` for [`Label::Plain`].
    #[must_use]
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Self::Buzz => Some(BUZZ_MARKER),
            Self::Fizz => Some(FIZZ_MARKER),
            Self::BuzzFizz => Some("Buzz   Fizz   "),
            Self::PrimeIndex => Some(PRIME_MARKER),
            Self::Plain => None,
        }
    }

    #[must_use]
    pub fn is_buzz(self) -> bool {
        matches!(self, Self::Buzz | Self::BuzzFizz)
    }

    #[must_use]
    pub fn is_fizz(self) -> bool {
        matches!(self, Self::Fizz | Self::BuzzFizz)
    }
}

/// Classify F(`index`) = `value`.
#[must_use]
pub fn classify<const BITS: usize, const LIMBS: usize>(
    index: u32,
    value: &Uint<BITS, LIMBS>,
) -> Label {
    let buzz = (*value % Uint::<BITS, LIMBS>::from(3u64)).is_zero();
    let fizz = (*value % Uint::<BITS, LIMBS>::from(5u64)).is_zero();
    match (buzz, fizz) {
        (true, true) => Label::BuzzFizz,
        (true, false) => Label::Buzz,
        (false, true) => Label::Fizz,
        (false, false) if is_prime_index(index) => Label::PrimeIndex,
        (false, false) => Label::Plain,
    }
}
