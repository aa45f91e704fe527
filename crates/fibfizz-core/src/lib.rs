//! # fibfizz-core
//!
//! FizzBuzz over the Fibonacci sequence. Terms are computed with a
//! fixed-width [`ruint::Uint`] whose checked addition reports overflow, so a
//! run stops cleanly at the last representable index instead of wrapping.

pub mod classifier;
pub mod constants;
pub mod generator;
pub mod prime_index;
pub mod sink;

// Re-exports
pub use classifier::{classify, Label};
pub use constants::{max_decimal_digits, Fib, OPERAND_BITS, OPERAND_LIMBS};
pub use generator::{FizzError, RunOutcome, SequenceGenerator, Step};
pub use prime_index::{is_prime_index, PRIME_INDICES};
pub use sink::{CollectingSink, NoOpSink, TermSink};

/// Compute F(n) at the configured operand width.
///
/// Returns `None` for `n == 0` or when F(n) does not fit in
/// [`OPERAND_BITS`] bits.
///
/// # Example
/// ```
/// assert_eq!(fibfizz_core::fibonacci(10).unwrap().to_string(), "55");
/// assert!(fibfizz_core::fibonacci(0).is_none());
/// ```
#[must_use]
pub fn fibonacci(n: u32) -> Option<Fib> {
    let outcome = SequenceGenerator::<OPERAND_BITS, OPERAND_LIMBS>::run(n, &mut NoOpSink).ok()?;
    outcome.is_success().then_some(outcome.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fibonacci_small() {
        assert_eq!(fibonacci(1), Some(Fib::from(1u64)));
        assert_eq!(fibonacci(2), Some(Fib::from(1u64)));
        assert_eq!(fibonacci(12).map(|v| v.to_string()), Some("144".into()));
    }

    #[test]
    fn fibonacci_out_of_range() {
        assert!(fibonacci(0).is_none());
        assert!(fibonacci(11_801).is_some());
        assert!(fibonacci(11_802).is_none());
    }
}
