//! Evaluation errors for the dfield VM.
//!
//! Every error carries the position (`at`) of the instruction that raised
//! it. None of them leave state behind: the caller may evaluate again.

use thiserror::Error;

/// Errors that occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The head cursor moved left of register 0, or a binary operator ran
    /// with no left neighbour.
    #[error("register window underflow at instruction {at}")]
    Underflow { at: usize },

    /// The head cursor moved past the last register.
    #[error("register window overflow at instruction {at}")]
    Overflow { at: usize },

    /// RETURN was missing, or appeared before the end of the program.
    #[error("unexpected terminator at instruction {at}")]
    UnexpectedTerminator { at: usize },

    /// The instruction cannot be executed (corrupt buffer).
    #[error("invalid instruction at {at}")]
    InvalidInstruction { at: usize },

    /// Division by zero, or the result is NaN or infinite. The formula has
    /// no defined value at these bindings.
    #[error("non-finite result at instruction {at}")]
    NonFinite { at: usize },

    /// Strict evaluation read a variable that has no binding.
    #[error("unbound variable '{name}' at instruction {at}")]
    UnboundVariable { at: usize, name: char },
}

impl EvalError {
    /// Position of the instruction that failed.
    pub fn at(&self) -> usize {
        match self {
            EvalError::Underflow { at }
            | EvalError::Overflow { at }
            | EvalError::UnexpectedTerminator { at }
            | EvalError::InvalidInstruction { at }
            | EvalError::NonFinite { at }
            | EvalError::UnboundVariable { at, .. } => *at,
        }
    }

    /// True when the formula is well-formed but undefined at this point,
    /// as opposed to a broken program.
    pub fn is_undefined_point(&self) -> bool {
        matches!(self, EvalError::NonFinite { .. })
    }
}
