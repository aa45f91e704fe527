//! fibfizz library — driver for the Fibonacci FizzBuzz run.

pub mod app;
pub mod config;
