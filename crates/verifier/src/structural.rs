//! Structural validation pass for dfield programs.
//!
//! Checks terminator placement and variable letters, and builds the
//! ProgramContext used by later passes.

use std::collections::BTreeMap;

use crate::error::VerifyError;
use dfield_common::Instruction;

/// Context built from the structural pass, consumed by later passes.
#[derive(Debug, Clone, Default)]
pub struct ProgramContext {
    /// Each variable letter read, with the index of its first read.
    pub first_reads: BTreeMap<char, usize>,
    /// Whether a fatal structural error occurred (callers should skip later passes).
    pub fatal: bool,
}

/// Run the structural validation pass.
///
/// Returns the ProgramContext and any errors found.
pub fn check_structural(instrs: &[Instruction]) -> (ProgramContext, Vec<VerifyError>) {
    let mut errors = Vec::new();
    let mut ctx = ProgramContext::default();

    if instrs.last() != Some(&Instruction::Return) {
        errors.push(VerifyError::MissingReturn);
        ctx.fatal = true;
    }

    let body_len = instrs.len().saturating_sub(1);
    for (at, instr) in instrs.iter().enumerate() {
        match *instr {
            Instruction::Return if at < body_len => {
                errors.push(VerifyError::EarlyReturn { at });
                ctx.fatal = true;
            }
            Instruction::Var(letter) if !letter.is_ascii_lowercase() => {
                errors.push(VerifyError::InvalidVariable { at, letter });
            }
            Instruction::Var(letter) => {
                ctx.first_reads.entry(letter).or_insert(at);
            }
            _ => {}
        }
    }

    (ctx, errors)
}
