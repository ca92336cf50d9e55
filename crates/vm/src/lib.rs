//! dfield virtual machine: evaluates compiled formulas.
//!
//! The VM is a register-window machine, not a stack machine:
//! - 64 registers addressed by a movable head cursor
//! - one clip register for parking a value
//! - binary operators combine the head register with its left neighbour
//!   and leave the head where it is
//!
//! # Usage
//!
//! ```
//! use dfield_common::{Instruction, Opcode, Program};
//! use dfield_vm::{evaluate, Binding};
//!
//! // y > 2 *   →   y * 2
//! let program = Program::new(vec![
//!     Instruction::Var('y'),
//!     Instruction::Op(Opcode::SeekRight),
//!     Instruction::Literal(2.0),
//!     Instruction::Op(Opcode::Multiply),
//!     Instruction::Return,
//! ]);
//!
//! let result = evaluate(&program, &[Binding::new('y', 1.5)]).unwrap();
//! assert_eq!(result, 3.0);
//! ```

pub mod error;
pub mod execute;
pub mod machine;

pub use error::EvalError;
pub use machine::{Binding, Machine, UnboundPolicy, MAX_REGISTERS};

use dfield_common::{DecodeError, Program};

/// Evaluate a program, leaving registers untouched for unbound variables.
///
/// This is the primary entry point for the VM. It is pure: the same program
/// and bindings always give the same result.
///
/// # Errors
///
/// Returns [`EvalError`] if the head leaves the register window, the program
/// is malformed, or the result is not finite.
pub fn evaluate(program: &Program, bindings: &[Binding]) -> Result<f64, EvalError> {
    Machine::new().evaluate(program, bindings)
}

/// Decode a raw word stream and evaluate it.
///
/// Decode failures are reported at their word offset; evaluation failures
/// at their instruction index.
pub fn evaluate_words(words: &[u64], bindings: &[Binding]) -> Result<f64, EvalError> {
    let program = Program::decode_words(words).map_err(|e| decode_failure(&e, words.len()))?;
    evaluate(&program, bindings)
}

fn decode_failure(err: &DecodeError, len: usize) -> EvalError {
    match err {
        DecodeError::MissingTerminator => EvalError::UnexpectedTerminator { at: len },
        DecodeError::TrailingWords { at } => EvalError::UnexpectedTerminator { at: *at },
        other => EvalError::InvalidInstruction {
            at: other.at().unwrap_or(0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfield_common::instruction::{LITERAL_WORD, RETURN_WORD};
    use dfield_common::{Instruction, Opcode};

    #[test]
    fn evaluate_words_runs_raw_stream() {
        let words = [LITERAL_WORD, 7.5f64.to_bits(), RETURN_WORD];
        assert_eq!(evaluate_words(&words, &[]), Ok(7.5));
    }

    #[test]
    fn evaluate_words_rejects_unknown_word() {
        let words = [LITERAL_WORD, 1f64.to_bits(), 0x777, RETURN_WORD];
        assert_eq!(
            evaluate_words(&words, &[]),
            Err(EvalError::InvalidInstruction { at: 2 })
        );
    }

    #[test]
    fn evaluate_words_without_sentinel() {
        let words = [Opcode::Nop.word()];
        assert_eq!(
            evaluate_words(&words, &[]),
            Err(EvalError::UnexpectedTerminator { at: 1 })
        );
    }

    #[test]
    fn evaluate_words_with_trailing_words() {
        let words = [RETURN_WORD, Opcode::Nop.word()];
        assert_eq!(
            evaluate_words(&words, &[]),
            Err(EvalError::UnexpectedTerminator { at: 1 })
        );
    }

    #[test]
    fn evaluate_words_truncated_operand() {
        assert_eq!(
            evaluate_words(&[LITERAL_WORD], &[]),
            Err(EvalError::InvalidInstruction { at: 0 })
        );
    }

    #[test]
    fn strict_machine_rejects_unbound() {
        let program = Program::new(vec![Instruction::Var('q'), Instruction::Return]);
        assert_eq!(evaluate(&program, &[]), Ok(0.0));
        assert_eq!(
            Machine::strict().evaluate(&program, &[]),
            Err(EvalError::UnboundVariable { at: 0, name: 'q' })
        );
    }
}
