//! Register-window analysis for dfield programs.
//!
//! The head cursor moves only on SEEK and COPY instructions, never on data,
//! so its whole trajectory is known before execution. This pass walks it
//! and stops at the first instruction that would leave the window.

use crate::error::VerifyError;
use dfield_common::{Instruction, OpClass};

/// Number of registers the VM provides.
pub const WINDOW_SIZE: usize = 64;

/// Head positions observed while walking a program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadTrace {
    /// Highest register index the head reaches.
    pub max_head: usize,
    /// Head position when RETURN reads the result.
    pub final_head: usize,
}

/// Run the window check.
///
/// Returns the trace up to the first violation, plus that violation if any.
pub fn check_window(instrs: &[Instruction]) -> (HeadTrace, Vec<VerifyError>) {
    let mut trace = HeadTrace::default();
    let mut head = 0usize;

    for (at, instr) in instrs.iter().enumerate() {
        let op = match instr {
            Instruction::Op(op) => *op,
            Instruction::Return => break,
            _ => continue,
        };

        match op.class() {
            OpClass::MoveLeft => match head.checked_sub(1) {
                Some(h) => head = h,
                None => return (trace, vec![VerifyError::WindowUnderflow { at }]),
            },
            OpClass::MoveRight => {
                if head + 1 >= WINDOW_SIZE {
                    return (trace, vec![VerifyError::WindowOverflow { at }]);
                }
                head += 1;
                trace.max_head = trace.max_head.max(head);
            }
            OpClass::Binary if head == 0 => {
                return (trace, vec![VerifyError::BinaryAtLeftEdge { at }]);
            }
            OpClass::Nop | OpClass::Clip | OpClass::Binary | OpClass::Unary => {}
        }
    }

    trace.final_head = head;
    (trace, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfield_common::Opcode;

    fn op(op: Opcode) -> Instruction {
        Instruction::Op(op)
    }

    #[test]
    fn flat_program_stays_at_zero() {
        let instrs = [Instruction::Literal(2.0), op(Opcode::Sqrt), Instruction::Return];
        let (trace, errors) = check_window(&instrs);
        assert!(errors.is_empty());
        assert_eq!(trace, HeadTrace::default());
    }

    #[test]
    fn default_formula_trace() {
        // y > t + > y > t - [ /
        let instrs = [
            Instruction::Var('y'),
            op(Opcode::SeekRight),
            Instruction::Var('t'),
            op(Opcode::Add),
            op(Opcode::SeekRight),
            Instruction::Var('y'),
            op(Opcode::SeekRight),
            Instruction::Var('t'),
            op(Opcode::Subtract),
            op(Opcode::CopyLeft),
            op(Opcode::Divide),
            Instruction::Return,
        ];
        let (trace, errors) = check_window(&instrs);
        assert!(errors.is_empty());
        assert_eq!(trace.max_head, 3);
        assert_eq!(trace.final_head, 2);
    }

    #[test]
    fn seek_left_at_zero_underflows() {
        let instrs = [op(Opcode::SeekLeft), Instruction::Return];
        let (_, errors) = check_window(&instrs);
        assert_eq!(errors, vec![VerifyError::WindowUnderflow { at: 0 }]);
    }

    #[test]
    fn copy_left_at_zero_underflows() {
        let instrs = [Instruction::Literal(1.0), op(Opcode::CopyLeft), Instruction::Return];
        let (_, errors) = check_window(&instrs);
        assert_eq!(errors, vec![VerifyError::WindowUnderflow { at: 1 }]);
    }

    #[test]
    fn binary_at_left_edge() {
        let instrs = [Instruction::Literal(3.0), op(Opcode::Add), Instruction::Return];
        let (_, errors) = check_window(&instrs);
        assert_eq!(errors, vec![VerifyError::BinaryAtLeftEdge { at: 1 }]);
    }

    #[test]
    fn overflow_on_64th_move() {
        let mut instrs = vec![op(Opcode::SeekRight); WINDOW_SIZE];
        instrs.push(Instruction::Return);
        let (trace, errors) = check_window(&instrs);
        assert_eq!(errors, vec![VerifyError::WindowOverflow { at: WINDOW_SIZE - 1 }]);
        assert_eq!(trace.max_head, WINDOW_SIZE - 1);
    }

    #[test]
    fn only_first_violation_reported() {
        let instrs = [
            op(Opcode::SeekLeft),
            op(Opcode::SeekLeft),
            op(Opcode::Add),
            Instruction::Return,
        ];
        let (_, errors) = check_window(&instrs);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn copy_right_counts_towards_max() {
        let instrs = [
            op(Opcode::CopyRight),
            op(Opcode::CopyRight),
            op(Opcode::SeekLeft),
            Instruction::Return,
        ];
        let (trace, errors) = check_window(&instrs);
        assert!(errors.is_empty());
        assert_eq!(trace.max_head, 2);
        assert_eq!(trace.final_head, 1);
    }
}
