//! Fixed-width Fibonacci sequence generator.
//!
//! The generator holds F(i) and, one step ahead, F(i+1). The lookahead is
//! computed with [`Uint::checked_add`]; once it no longer fits the
//! generator is exhausted and `advance` refuses to move, so `current` always
//! holds the last value that was representable.

use ruint::Uint;
use tracing::{debug, info};

use crate::sink::TermSink;

/// Error type for sequence runs.
#[derive(Debug, thiserror::Error)]
pub enum FizzError {
    /// The requested length was below 1.
    #[error("sequence length must be at least 1, got {0}")]
    InvalidLength(u32),

    /// A term sink failed to write.
    #[error("failed to emit term: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a single [`SequenceGenerator::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to the next index.
    Advanced,
    /// The next term does not fit in the operand width; nothing changed.
    Overflow,
}

/// Final state of a [`SequenceGenerator::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome<const BITS: usize, const LIMBS: usize> {
    /// Last index reached.
    pub index: u32,
    /// F(`index`).
    pub value: Uint<BITS, LIMBS>,
    /// The run stopped before the requested length because the operand
    /// width was exhausted.
    pub overflowed: bool,
}

impl<const BITS: usize, const LIMBS: usize> RunOutcome<BITS, LIMBS> {
    /// Whether the requested length was reached.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.overflowed
    }
}

/// Iterative generator over 1, 1, 2, 3, 5, 8, ...
#[derive(Debug, Clone)]
pub struct SequenceGenerator<const BITS: usize, const LIMBS: usize> {
    index: u32,
    current: Uint<BITS, LIMBS>,
    upcoming: Option<Uint<BITS, LIMBS>>,
}

impl<const BITS: usize, const LIMBS: usize> SequenceGenerator<BITS, LIMBS> {
    /// Start at index 1 with F(1) = F(2) = 1.
    #[must_use]
    pub fn new() -> Self {
        let one = Uint::from(1u64);
        Self {
            index: 1,
            current: one,
            upcoming: Some(one),
        }
    }

    /// Current index (1-based).
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// F(`self.index()`).
    #[must_use]
    pub fn current(&self) -> &Uint<BITS, LIMBS> {
        &self.current
    }

    /// Move to the next index, or report overflow and stay put.
    pub fn advance(&mut self) -> Step {
        let Some(next) = self.upcoming else {
            return Step::Overflow;
        };
        self.upcoming = self.current.checked_add(next);
        self.current = next;
        self.index += 1;
        Step::Advanced
    }

    /// Generate terms 1..=`target_length`, handing each to `sink`.
    ///
    /// Stops early, with [`RunOutcome::overflowed`] set, if the operand
    /// width is exhausted before `target_length` is reached.
    pub fn run<S>(target_length: u32, sink: &mut S) -> Result<RunOutcome<BITS, LIMBS>, FizzError>
    where
        S: TermSink<BITS, LIMBS> + ?Sized,
    {
        if target_length == 0 {
            return Err(FizzError::InvalidLength(target_length));
        }
        debug!(target_length, operand_bits = BITS, "starting sequence run");

        let mut gen = Self::new();
        sink.on_term(gen.index, &gen.current)?;
        let mut overflowed = false;
        while gen.index < target_length {
            match gen.advance() {
                Step::Advanced => sink.on_term(gen.index, &gen.current)?,
                Step::Overflow => {
                    overflowed = true;
                    break;
                }
            }
        }

        if overflowed {
            info!(
                index = gen.index,
                operand_bits = BITS,
                "operand width exhausted before requested length"
            );
        }
        debug!(index = gen.index, overflowed, "sequence run finished");

        Ok(RunOutcome {
            index: gen.index,
            value: gen.current,
            overflowed,
        })
    }
}

impl<const BITS: usize, const LIMBS: usize> Default for SequenceGenerator<BITS, LIMBS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const BITS: usize, const LIMBS: usize> Iterator for SequenceGenerator<BITS, LIMBS> {
    type Item = (u32, Uint<BITS, LIMBS>);

    /// Yields the term after the current one; the seed term F(1) is
    /// available through [`SequenceGenerator::current`] before the first
    /// call. Ends when the operand width is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            Step::Advanced => Some((self.index, self.current)),
            Step::Overflow => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{CollectingSink, NoOpSink};
    use num_bigint::BigUint;
    use ruint::aliases::{U128, U64};

    type Terms<const BITS: usize, const LIMBS: usize> = Vec<(u32, Uint<BITS, LIMBS>)>;

    fn run_collect<const BITS: usize, const LIMBS: usize>(
        n: u32,
    ) -> (RunOutcome<BITS, LIMBS>, Terms<BITS, LIMBS>) {
        let mut sink = CollectingSink::new();
        let outcome = SequenceGenerator::<BITS, LIMBS>::run(n, &mut sink).unwrap();
        (outcome, sink.into_terms())
    }

    #[test]
    fn starts_at_seed() {
        let gen = SequenceGenerator::<64, 1>::new();
        assert_eq!(gen.index(), 1);
        assert_eq!(gen.current(), &U64::from(1u64));
    }

    #[test]
    fn first_ten_terms() {
        let (outcome, terms) = run_collect::<64, 1>(10);
        let values: Vec<u64> = terms.iter().map(|(_, v)| v.as_limbs()[0]).collect();
        assert_eq!(values, [1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
        let indices: Vec<u32> = terms.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, (1..=10).collect::<Vec<_>>());
        assert_eq!(outcome.index, 10);
        assert_eq!(outcome.value, U64::from(55u64));
        assert!(outcome.is_success());
    }

    #[test]
    fn length_one_emits_seed_only() {
        let (outcome, terms) = run_collect::<64, 1>(1);
        assert_eq!(terms, [(1, U64::from(1u64))]);
        assert_eq!(outcome.index, 1);
        assert!(!outcome.overflowed);
    }

    #[test]
    fn zero_length_rejected() {
        let result = SequenceGenerator::<64, 1>::run(0, &mut NoOpSink);
        assert!(matches!(result, Err(FizzError::InvalidLength(0))));
    }

    #[test]
    fn halts_at_u64_boundary() {
        let (outcome, terms) = run_collect::<64, 1>(200);
        assert!(outcome.overflowed);
        assert_eq!(outcome.index, 93);
        assert_eq!(outcome.value, U64::from(12_200_160_415_121_876_738u64));
        assert_eq!(terms.len(), 93);
        assert_eq!(terms.last(), Some(&(93, outcome.value)));
    }

    #[test]
    fn reaching_boundary_exactly_is_success() {
        let (outcome, _) = run_collect::<64, 1>(93);
        assert!(outcome.is_success());
        assert_eq!(outcome.index, 93);

        let (outcome, _) = run_collect::<64, 1>(94);
        assert!(outcome.overflowed);
        assert_eq!(outcome.index, 93);
    }

    #[test]
    fn halts_at_u128_boundary() {
        let mut reference = (1u128, 1u128);
        let mut last_index = 1u32;
        while let Some(next) = reference.0.checked_add(reference.1) {
            reference = (reference.1, next);
            last_index += 1;
        }
        let (outcome, _) = run_collect::<128, 2>(1_000);
        assert!(outcome.overflowed);
        assert_eq!(outcome.index, last_index + 1);
        assert_eq!(outcome.index, 186);
        assert_eq!(outcome.value, U128::from(reference.1));
        assert_eq!(
            BigUint::from_bytes_le(&outcome.value.to_le_bytes_vec()),
            BigUint::from(reference.1)
        );
    }

    #[test]
    fn next_sum_overflows_at_boundary() {
        let mut gen = SequenceGenerator::<64, 1>::new();
        let mut previous = *gen.current();
        while gen.advance() == Step::Advanced {
            let (_, carried) = previous.overflowing_add(*gen.current());
            if gen.index() < 93 {
                assert!(!carried, "F({}) should still fit", gen.index() + 1);
            }
            previous = *gen.current();
        }
        // F(92) + F(93) no longer fits in 64 bits.
        let f92 = U64::from(7_540_113_804_746_346_429u64);
        assert!(f92.overflowing_add(*gen.current()).1);
    }

    #[test]
    fn advance_refuses_after_overflow() {
        let mut gen = SequenceGenerator::<64, 1>::new();
        while gen.advance() == Step::Advanced {}
        let stuck = *gen.current();
        assert_eq!(gen.advance(), Step::Overflow);
        assert_eq!(gen.current(), &stuck);
        assert_eq!(gen.index(), 93);
    }

    #[test]
    fn iterator_yields_after_seed() {
        let terms: Vec<(u32, u64)> = SequenceGenerator::<64, 1>::new()
            .take(4)
            .map(|(i, v)| (i, v.as_limbs()[0]))
            .collect();
        assert_eq!(terms, [(2, 1), (3, 2), (4, 3), (5, 5)]);
        assert_eq!(SequenceGenerator::<64, 1>::new().count(), 92);
    }

    #[test]
    fn sink_error_aborts_run() {
        let mut failing = |index: u32, _: &U64| -> std::io::Result<()> {
            if index == 3 {
                Err(std::io::Error::other("closed"))
            } else {
                Ok(())
            }
        };
        let result = SequenceGenerator::<64, 1>::run(10, &mut failing);
        assert!(matches!(result, Err(FizzError::Io(_))));
    }
}
