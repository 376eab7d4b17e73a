//! Test modules for Olelo.
//!
//! Cross-component tests live here; each data structure keeps its own
//! unit and property tests next to its code.

pub mod test_utils;

pub use test_utils::{dictionary_line_strategy, TestFixture};
