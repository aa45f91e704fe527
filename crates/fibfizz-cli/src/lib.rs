//! # fibfizz-cli
//!
//! Console output for fibfizz: the per-term printer, the welcome banner,
//! and the end-of-run summary.

pub mod output;
pub mod presenter;
pub mod printer;

pub use presenter::ConsolePresenter;
pub use printer::ConsolePrinter;
