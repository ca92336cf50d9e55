//! dfield verifier: static analysis for compiled formulas.
//!
//! The verifier checks a `Program` for correctness BEFORE execution.
//! It collects ALL errors (not just the first) and returns them.
//! A program that passes can still produce a non-finite result, but it can
//! never leave the register window.
//!
//! # Usage
//!
//! ```
//! use dfield_common::{Instruction, Opcode, Program};
//! use dfield_verifier::verify;
//!
//! let program = Program::new(vec![
//!     Instruction::Var('y'),
//!     Instruction::Op(Opcode::SeekRight),
//!     Instruction::Literal(2.0),
//!     Instruction::Op(Opcode::Multiply),
//!     Instruction::Return,
//! ]);
//!
//! let report = verify(&program).unwrap();
//! assert_eq!(report.max_head, 1);
//! assert!(report.variables.contains(&'y'));
//! ```
//!
//! # Passes
//!
//! 1. **Limits**: program size
//! 2. **Structural**: RETURN placement, variable letters
//! 3. **Window**: head cursor stays inside the 64 registers
//! 4. **Bindings**: only with [`verify_bindings`]

pub mod error;
pub mod limits;
pub mod structural;
pub mod window;

pub use error::VerifyError;

use std::collections::BTreeSet;

use dfield_common::Program;

/// What a verified program does with the register window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowReport {
    /// Highest register index the head reaches.
    pub max_head: usize,
    /// Register the result is read from.
    pub final_head: usize,
    /// Variable letters the program reads.
    pub variables: BTreeSet<char>,
}

/// Verify a program for correctness.
///
/// Returns a [`WindowReport`] if the program passes all checks, or
/// `Err(Vec<VerifyError>)` with all errors found.
///
/// If the structural pass finds fatal errors (a missing or early RETURN),
/// the window pass is skipped.
pub fn verify(program: &Program) -> Result<WindowReport, Vec<VerifyError>> {
    let (report, errors) = run_passes(program, None);
    if errors.is_empty() {
        Ok(report)
    } else {
        Err(errors)
    }
}

/// Verify a program and check that every variable it reads is in `bound`.
pub fn verify_bindings(
    program: &Program,
    bound: &[char],
) -> Result<WindowReport, Vec<VerifyError>> {
    let (report, errors) = run_passes(program, Some(bound));
    if errors.is_empty() {
        Ok(report)
    } else {
        Err(errors)
    }
}

fn run_passes(program: &Program, bound: Option<&[char]>) -> (WindowReport, Vec<VerifyError>) {
    let instrs = &program.instructions;
    let mut all_errors = Vec::new();
    let mut report = WindowReport::default();

    // Pass 1: Limits (independent)
    all_errors.extend(limits::check_limits(instrs));

    // Pass 2: Structural (builds ProgramContext)
    let (ctx, structural_errors) = structural::check_structural(instrs);
    all_errors.extend(structural_errors);
    report.variables = ctx.first_reads.keys().copied().collect();

    // Pass 3: Window
    if !ctx.fatal {
        let (trace, window_errors) = window::check_window(instrs);
        all_errors.extend(window_errors);
        report.max_head = trace.max_head;
        report.final_head = trace.final_head;
    }

    // Pass 4: Bindings
    if let Some(bound) = bound {
        all_errors.extend(
            ctx.first_reads
                .iter()
                .filter(|(name, _)| !bound.contains(name))
                .map(|(&name, &at)| VerifyError::UnboundVariable { at, name }),
        );
    }

    (report, all_errors)
}
