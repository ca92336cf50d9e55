//! Limits checking for dfield programs.

use crate::error::VerifyError;
use dfield_common::Instruction;

/// Maximum program size in instructions. The compiler's default source
/// limit produces at most one instruction per character plus RETURN.
pub const MAX_PROGRAM_LEN: usize = 8_192;

/// Run the limits check.
pub fn check_limits(instrs: &[Instruction]) -> Vec<VerifyError> {
    let mut errors = Vec::new();

    if instrs.len() > MAX_PROGRAM_LEN {
        errors.push(VerifyError::ProgramTooLarge {
            size: instrs.len(),
            max: MAX_PROGRAM_LEN,
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfield_common::{Instruction, Opcode};

    #[test]
    fn small_program_passes() {
        let instrs = [Instruction::Literal(1.0), Instruction::Return];
        assert!(check_limits(&instrs).is_empty());
    }

    #[test]
    fn program_at_limit_passes() {
        let mut instrs = vec![Instruction::Op(Opcode::Nop); MAX_PROGRAM_LEN - 1];
        instrs.push(Instruction::Return);
        assert!(check_limits(&instrs).is_empty());
    }

    #[test]
    fn program_over_limit() {
        let instrs = vec![Instruction::Op(Opcode::Nop); MAX_PROGRAM_LEN + 1];
        let errors = check_limits(&instrs);
        assert!(errors
            .iter()
            .any(|e| matches!(e, VerifyError::ProgramTooLarge { size, .. } if *size == MAX_PROGRAM_LEN + 1)));
    }
}
