//! Program representation for compiled formulas.
//!
//! A program is a sequence of instructions ending in exactly one
//! [`Instruction::Return`]. Word files (.dfb) are raw little-endian
//! concatenations of 8-byte words with no header.

use crate::error::{DecodeError, EncodeError};
use crate::instruction::Instruction;

/// A compiled formula: the instruction buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The instruction stream.
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Create a new program from a vector of instructions.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Encode the program to its word stream.
    pub fn encode_words(&self) -> Result<Vec<u64>, EncodeError> {
        let mut words = Vec::with_capacity(self.word_len());
        for (at, instr) in self.instructions.iter().enumerate() {
            instr.encode_into(at, &mut words)?;
        }
        Ok(words)
    }

    /// Decode a word stream into a program.
    ///
    /// The stream must end with the RETURN sentinel and nothing may follow it.
    pub fn decode_words(words: &[u64]) -> Result<Self, DecodeError> {
        let mut instructions = Vec::new();
        let mut at = 0;

        loop {
            let (instr, width) = Instruction::decode(words, at)?;
            instructions.push(instr);
            at += width;
            if instr == Instruction::Return {
                break;
            }
        }

        if at != words.len() {
            return Err(DecodeError::TrailingWords { at });
        }

        Ok(Self { instructions })
    }

    /// Encode the program to bytes, 8 little-endian bytes per word.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let words = self.encode_words()?;
        let mut bytes = Vec::with_capacity(words.len() * 8);
        for word in words {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        Ok(bytes)
    }

    /// Decode a byte slice produced by [`Program::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_words(&bytes_to_words(bytes)?)
    }

    /// Number of words the encoded program occupies.
    pub fn word_len(&self) -> usize {
        self.instructions.iter().map(Instruction::width).sum()
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Split a byte slice into little-endian words.
pub fn bytes_to_words(bytes: &[u8]) -> Result<Vec<u64>, DecodeError> {
    if !bytes.len().is_multiple_of(8) {
        return Err(DecodeError::InvalidLength(bytes.len()));
    }

    Ok(bytes
        .chunks_exact(8)
        .map(|chunk| {
            let mut arr = [0u8; 8];
            arr.copy_from_slice(chunk);
            u64::from_le_bytes(arr)
        })
        .collect())
}
