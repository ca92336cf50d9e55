//! Verification errors for the dfield verifier.
//!
//! Every error that concerns a single instruction carries its index (`at`).
//! The verifier collects ALL errors, not just the first.

use thiserror::Error;

/// Errors found during static verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    // --- Limits ---
    /// Program has more instructions than the verifier accepts.
    #[error("program too large: {size} instructions (max {max})")]
    ProgramTooLarge { size: usize, max: usize },

    // --- Structural ---
    /// Program does not end with RETURN.
    #[error("program does not end with RETURN")]
    MissingReturn,

    /// RETURN appears before the last instruction.
    #[error("RETURN before end of program at instruction {at}")]
    EarlyReturn { at: usize },

    /// A VAR instruction names something other than `a`..=`z`.
    #[error("invalid variable '{letter}' at instruction {at}")]
    InvalidVariable { at: usize, letter: char },

    // --- Register window ---
    /// The head cursor would move left of register 0.
    #[error("register window underflow at instruction {at}")]
    WindowUnderflow { at: usize },

    /// The head cursor would move past the last register.
    #[error("register window overflow at instruction {at}")]
    WindowOverflow { at: usize },

    /// A binary operator would run at register 0, with no left operand.
    #[error("binary operator without left operand at instruction {at}")]
    BinaryAtLeftEdge { at: usize },

    // --- Bindings ---
    /// The program reads a variable the caller will not bind.
    #[error("unbound variable '{name}' first read at instruction {at}")]
    UnboundVariable { at: usize, name: char },
}
