//! Translation failures.

use thiserror::Error;

/// Errors surfaced while turning bytecode into script text.
///
/// Argument values themselves never fail to translate: the value model is
/// closed and every variant has a textual form. What can fail is the shape
/// of the bytecode (an unnamed instruction) or, when a depth cap is
/// configured, runaway nesting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// An instruction carried an empty operator name. The index is the
    /// instruction's position within its own bytecode, sources first.
    #[error("instruction {index} has an empty operator name")]
    InvalidInstruction { index: usize },

    /// Argument nesting went past the translator's configured depth cap.
    #[error("argument nesting exceeded the configured depth limit of {limit}")]
    RecursionLimitExceeded { limit: usize },
}
