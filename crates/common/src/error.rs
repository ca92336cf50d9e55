//! Encode and decode errors for dfield word streams.

use thiserror::Error;

/// Errors that occur while decoding a word stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Word in opcode position is not an opcode, operand prefix, variable or sentinel.
    #[error("invalid word {word:#x} at offset {at}")]
    InvalidWord { at: usize, word: u64 },

    /// LITERAL or CONSTANT prefix is the last word of the stream.
    #[error("missing operand for word at offset {at}")]
    MissingOperand { at: usize },

    /// Stream ended without a RETURN sentinel.
    #[error("word stream has no RETURN sentinel")]
    MissingTerminator,

    /// Words follow the RETURN sentinel.
    #[error("unexpected words after RETURN at offset {at}")]
    TrailingWords { at: usize },

    /// Byte stream length is not a multiple of 8.
    #[error("invalid byte stream length: {0} (must be multiple of 8)")]
    InvalidLength(usize),
}

impl DecodeError {
    /// Word offset where decoding failed, if the error has one.
    pub fn at(&self) -> Option<usize> {
        match self {
            DecodeError::InvalidWord { at, .. }
            | DecodeError::MissingOperand { at }
            | DecodeError::TrailingWords { at } => Some(*at),
            DecodeError::MissingTerminator | DecodeError::InvalidLength(_) => None,
        }
    }
}

/// Errors that occur while encoding a program to words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A `Var` instruction holds something other than `a`..=`z`.
    #[error("variable '{letter}' at instruction {at} is not a lowercase ASCII letter")]
    InvalidVariable { at: usize, letter: char },
}
