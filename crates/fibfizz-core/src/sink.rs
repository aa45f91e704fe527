//! Receivers for generated terms.

use std::io;

use ruint::Uint;

/// Receives each `(index, F(index))` pair the generator produces.
pub trait TermSink<const BITS: usize, const LIMBS: usize> {
    /// Handle one term. An error aborts the run.
    fn on_term(&mut self, index: u32, value: &Uint<BITS, LIMBS>) -> io::Result<()>;
}

impl<const BITS: usize, const LIMBS: usize, F> TermSink<BITS, LIMBS> for F
where
    F: FnMut(u32, &Uint<BITS, LIMBS>) -> io::Result<()>,
{
    fn on_term(&mut self, index: u32, value: &Uint<BITS, LIMBS>) -> io::Result<()> {
        self(index, value)
    }
}

/// Sink that discards every term.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSink;

impl NoOpSink {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<const BITS: usize, const LIMBS: usize> TermSink<BITS, LIMBS> for NoOpSink {
    fn on_term(&mut self, _index: u32, _value: &Uint<BITS, LIMBS>) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that records every term, mostly useful in tests.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink<const BITS: usize, const LIMBS: usize> {
    terms: Vec<(u32, Uint<BITS, LIMBS>)>,
}

impl<const BITS: usize, const LIMBS: usize> CollectingSink<BITS, LIMBS> {
    #[must_use]
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    #[must_use]
    pub fn terms(&self) -> &[(u32, Uint<BITS, LIMBS>)] {
        &self.terms
    }

    #[must_use]
    pub fn into_terms(self) -> Vec<(u32, Uint<BITS, LIMBS>)> {
        self.terms
    }
}

impl<const BITS: usize, const LIMBS: usize> TermSink<BITS, LIMBS> for CollectingSink<BITS, LIMBS> {
    fn on_term(&mut self, index: u32, value: &Uint<BITS, LIMBS>) -> io::Result<()> {
        self.terms.push((index, *value));
        Ok(())
    }
}
