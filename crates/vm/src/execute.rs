//! Main evaluation loop and opcode dispatch for the dfield VM.

use dfield_common::{Instruction, Opcode, Program};

use crate::error::EvalError;
use crate::machine::{Binding, Machine, UnboundPolicy, Window};

impl Machine {
    /// Evaluate a program against a set of bindings.
    ///
    /// The result is the register under the head when RETURN is reached. It
    /// must be finite; NaN and infinity are reported as
    /// [`EvalError::NonFinite`] at the RETURN instruction.
    pub fn evaluate(&self, program: &Program, bindings: &[Binding]) -> Result<f64, EvalError> {
        let instrs = &program.instructions;
        let mut window = Window::new();

        for (at, instr) in instrs.iter().enumerate() {
            match *instr {
                Instruction::Return => {
                    if at + 1 != instrs.len() {
                        return Err(EvalError::UnexpectedTerminator { at });
                    }
                    let result = window.current();
                    if !result.is_finite() {
                        return Err(EvalError::NonFinite { at });
                    }
                    return Ok(result);
                }
                Instruction::Literal(v) | Instruction::Constant(v) => window.set_current(v),
                Instruction::Var(name) => self.exec_var(&mut window, bindings, name, at)?,
                Instruction::Op(op) => exec_op(&mut window, op, at)?,
            }
        }

        Err(EvalError::UnexpectedTerminator { at: instrs.len() })
    }

    fn exec_var(
        &self,
        window: &mut Window,
        bindings: &[Binding],
        name: char,
        at: usize,
    ) -> Result<(), EvalError> {
        if !name.is_ascii_lowercase() {
            return Err(EvalError::InvalidInstruction { at });
        }

        match bindings.iter().find(|b| b.name == name) {
            Some(binding) => window.set_current(binding.value),
            None if self.unbound == UnboundPolicy::Reject => {
                return Err(EvalError::UnboundVariable { at, name });
            }
            // Lenient: the register keeps whatever it held.
            None => {}
        }
        Ok(())
    }
}

fn exec_op(window: &mut Window, op: Opcode, at: usize) -> Result<(), EvalError> {
    match op {
        Opcode::Nop => {}

        // Register window
        Opcode::ClipWrite => window.clip = window.current(),
        Opcode::ClipRead => window.set_current(window.clip),
        Opcode::SeekLeft => window.seek_left(at)?,
        Opcode::SeekRight => window.seek_right(at)?,
        Opcode::CopyLeft => {
            let value = window.current();
            window.seek_left(at)?;
            window.set_current(value);
        }
        Opcode::CopyRight => {
            let value = window.current();
            window.seek_right(at)?;
            window.set_current(value);
        }

        // Binary: the left operand is read, not consumed.
        Opcode::Add => exec_binary(window, at, |a, b| a + b)?,
        Opcode::Subtract => exec_binary(window, at, |a, b| a - b)?,
        Opcode::Multiply => exec_binary(window, at, |a, b| a * b)?,
        Opcode::Divide => exec_checked_binary(window, at, |a, b| a / b)?,
        Opcode::Remainder => exec_checked_binary(window, at, |a, b| a % b)?,
        Opcode::Power => exec_binary(window, at, f64::powf)?,

        // Unary, no domain checks: NaN is caught at RETURN.
        Opcode::Square => exec_unary(window, |x| x * x),
        Opcode::Sqrt => exec_unary(window, f64::sqrt),
        Opcode::Ln => exec_unary(window, f64::ln),
        Opcode::Log10 => exec_unary(window, f64::log10),
        Opcode::Log2 => exec_unary(window, f64::log2),
        Opcode::Abs => exec_unary(window, f64::abs),
        Opcode::Sin => exec_unary(window, f64::sin),
        Opcode::Cos => exec_unary(window, f64::cos),
        Opcode::Tan => exec_unary(window, f64::tan),
        Opcode::Asin => exec_unary(window, f64::asin),
        Opcode::Acos => exec_unary(window, f64::acos),
        Opcode::Atan => exec_unary(window, f64::atan),
        Opcode::Sinh => exec_unary(window, f64::sinh),
        Opcode::Cosh => exec_unary(window, f64::cosh),
        Opcode::Tanh => exec_unary(window, f64::tanh),
        Opcode::Asinh => exec_unary(window, f64::asinh),
        Opcode::Acosh => exec_unary(window, f64::acosh),
        Opcode::Atanh => exec_unary(window, f64::atanh),
        Opcode::Sign => exec_unary(window, sign),
        Opcode::Ceil => exec_unary(window, f64::ceil),
        Opcode::Floor => exec_unary(window, f64::floor),
        Opcode::Round => exec_unary(window, f64::round),
        Opcode::Negate => exec_unary(window, |x| -x),
    }
    Ok(())
}

/// `r[head] := f(r[head - 1], r[head])`. The head does not move.
fn exec_binary(window: &mut Window, at: usize, f: fn(f64, f64) -> f64) -> Result<(), EvalError> {
    let a = window.left(at)?;
    let b = window.current();
    window.set_current(f(a, b));
    Ok(())
}

/// Like [`exec_binary`], but a divisor of exactly zero is an undefined point.
fn exec_checked_binary(
    window: &mut Window,
    at: usize,
    f: fn(f64, f64) -> f64,
) -> Result<(), EvalError> {
    let a = window.left(at)?;
    let b = window.current();
    if b == 0.0 {
        return Err(EvalError::NonFinite { at });
    }
    window.set_current(f(a, b));
    Ok(())
}

fn exec_unary(window: &mut Window, f: fn(f64) -> f64) {
    window.set_current(f(window.current()));
}

/// -1, 0 or 1. Unlike `f64::signum`, zero maps to zero.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}
