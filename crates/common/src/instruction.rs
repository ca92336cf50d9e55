//! Instruction representation and its 64-bit word encoding.
//!
//! A compiled formula is stored on disk as a flat stream of `u64` words:
//! ```text
//! 0                   NOP
//! 1, <f64 bits>       LITERAL followed by its raw operand word
//! 2, <f64 bits>       CONSTANT followed by its raw operand word
//! 3..=37              operation opcodes (see Opcode)
//! 0x1000..=0x1019     variable a..z
//! u64::MAX            RETURN sentinel
//! ```
//!
//! In memory the stream is a sequence of [`Instruction`] values, so an
//! operand word can never be mistaken for an opcode.

use std::f64::consts::{E, PI};
use std::fmt;

use crate::error::{DecodeError, EncodeError};
use crate::opcode::Opcode;

/// Word that prefixes a literal operand.
pub const LITERAL_WORD: u64 = 1;
/// Word that prefixes a named-constant operand.
pub const CONSTANT_WORD: u64 = 2;
/// Word for variable `a`. Variable `z` is `VAR_BASE + 25`.
pub const VAR_BASE: u64 = 0x1000;
/// Word for variable `z`.
pub const VAR_TOP: u64 = VAR_BASE + 25;
/// Terminal sentinel word.
pub const RETURN_WORD: u64 = u64::MAX;

/// A single decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    /// An operation without operand.
    Op(Opcode),
    /// A numeric literal from the source text.
    Literal(f64),
    /// A named constant (`_e`, `_p`).
    Constant(f64),
    /// Load the binding for this lowercase letter.
    Var(char),
    /// End of program.
    Return,
}

/// Word value for a variable letter, or `None` if it is not `a`..=`z`.
pub fn var_word(letter: char) -> Option<u64> {
    letter
        .is_ascii_lowercase()
        .then(|| VAR_BASE + (letter as u64 - 'a' as u64))
}

/// Variable letter for a word in the variable range.
pub fn var_letter(word: u64) -> Option<char> {
    if (VAR_BASE..=VAR_TOP).contains(&word) {
        Some((b'a' + (word - VAR_BASE) as u8) as char)
    } else {
        None
    }
}

impl Instruction {
    /// Number of words this instruction occupies when encoded.
    pub fn width(&self) -> usize {
        match self {
            Instruction::Literal(_) | Instruction::Constant(_) => 2,
            _ => 1,
        }
    }

    /// Append the word encoding of this instruction to `out`.
    ///
    /// `at` is the instruction index, used only for error reporting.
    pub fn encode_into(&self, at: usize, out: &mut Vec<u64>) -> Result<(), EncodeError> {
        match *self {
            Instruction::Op(op) => out.push(op.word()),
            Instruction::Literal(v) => out.extend([LITERAL_WORD, v.to_bits()]),
            Instruction::Constant(v) => out.extend([CONSTANT_WORD, v.to_bits()]),
            Instruction::Var(letter) => {
                let word = var_word(letter).ok_or(EncodeError::InvalidVariable { at, letter })?;
                out.push(word);
            }
            Instruction::Return => out.push(RETURN_WORD),
        }
        Ok(())
    }

    /// Decode the instruction starting at word offset `at`.
    ///
    /// Returns the instruction and the number of words it consumed.
    pub fn decode(words: &[u64], at: usize) -> Result<(Self, usize), DecodeError> {
        let word = *words.get(at).ok_or(DecodeError::MissingTerminator)?;

        let operand = || {
            words
                .get(at + 1)
                .map(|bits| f64::from_bits(*bits))
                .ok_or(DecodeError::MissingOperand { at })
        };

        match word {
            LITERAL_WORD => Ok((Instruction::Literal(operand()?), 2)),
            CONSTANT_WORD => Ok((Instruction::Constant(operand()?), 2)),
            RETURN_WORD => Ok((Instruction::Return, 1)),
            _ => {
                if let Some(letter) = var_letter(word) {
                    Ok((Instruction::Var(letter), 1))
                } else if let Some(op) = Opcode::from_word(word) {
                    Ok((Instruction::Op(op), 1))
                } else {
                    Err(DecodeError::InvalidWord { at, word })
                }
            }
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::Op(op) => f.write_str(op.mnemonic()),
            Instruction::Literal(v) => write!(f, "LIT {v}"),
            Instruction::Constant(v) if v == E => f.write_str("CONST e"),
            Instruction::Constant(v) if v == PI => f.write_str("CONST p"),
            Instruction::Constant(v) => write!(f, "CONST {v}"),
            Instruction::Var(letter) => write!(f, "VAR {letter}"),
            Instruction::Return => f.write_str("RET"),
        }
    }
}
