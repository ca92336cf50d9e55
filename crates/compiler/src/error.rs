//! Error types for the formula compiler.

use thiserror::Error;

/// Errors produced while compiling formula text.
///
/// Every offset is a 1-based character position in the source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Source is longer than the configured maximum.
    #[error("source too long: {len} characters (maximum {max})")]
    SourceTooLong { len: usize, max: usize },

    /// The character after `_` is not a known constant.
    #[error("invalid constant '{found}' at offset {offset}")]
    InvalidConstant { offset: usize, found: char },

    /// A function name ran past the configured maximum length.
    #[error("function name too long at offset {offset} (maximum {max} characters)")]
    FunctionNameTooLong { offset: usize, max: usize },

    /// The name after `=` is not a known function.
    #[error("invalid function name '{name}' at offset {offset}")]
    InvalidFunction { offset: usize, name: String },

    /// Variables are single lowercase letters.
    #[error("variables must be lowercase: '{found}' at offset {offset}")]
    UppercaseVariable { offset: usize, found: char },

    /// Character is not an operator, digit, letter or blank.
    #[error("invalid operation '{found}' at offset {offset}")]
    InvalidOperation { offset: usize, found: char },
}

impl CompileError {
    /// 1-based source offset the error points at.
    ///
    /// For [`CompileError::SourceTooLong`] this is the first character past
    /// the limit.
    pub fn offset(&self) -> usize {
        match self {
            CompileError::SourceTooLong { max, .. } => max + 1,
            CompileError::InvalidConstant { offset, .. }
            | CompileError::FunctionNameTooLong { offset, .. }
            | CompileError::InvalidFunction { offset, .. }
            | CompileError::UppercaseVariable { offset, .. }
            | CompileError::InvalidOperation { offset, .. } => *offset,
        }
    }
}
