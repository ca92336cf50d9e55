//! Single-pass scanner that turns formula text into instructions.
//!
//! The scanner keeps at most one token pending (a literal, a constant escape
//! or a function name). A pending token is flushed by the first character
//! that cannot extend it; that character is then scanned on its own.

use dfield_common::{Instruction, Program};
use tracing::trace;

use crate::config::CompilerConfig;
use crate::error::CompileError;
use crate::grammar::{
    is_blank, is_function_prefix, lookup_constant, lookup_function, lookup_operator,
    CONSTANT_ESCAPE, FUNCTION_ESCAPE,
};

/// Token that has been started but not yet emitted.
#[derive(Debug)]
enum Pending {
    None,
    /// Digits seen so far. `fraction_digits` is `Some` once `.` has been seen.
    Literal {
        magnitude: f64,
        fraction_digits: Option<u32>,
    },
    /// `_` seen, waiting for the constant letter.
    Constant,
    /// `=` seen. `start` is the offset of the first name character.
    Function { start: usize, name: String },
}

pub(crate) struct Compiler<'c> {
    config: &'c CompilerConfig,
    pending: Pending,
    out: Vec<Instruction>,
}

impl<'c> Compiler<'c> {
    pub(crate) fn new(config: &'c CompilerConfig) -> Self {
        Self {
            config,
            pending: Pending::None,
            out: Vec::new(),
        }
    }

    /// Scan the whole source and return the finished program.
    pub(crate) fn run(mut self, source: &str) -> Result<Program, CompileError> {
        let len = source.chars().count();
        if len > self.config.max_source_len {
            return Err(CompileError::SourceTooLong {
                len,
                max: self.config.max_source_len,
            });
        }

        for (idx, ch) in source.chars().enumerate() {
            self.feed(idx + 1, ch)?;
        }

        // A trailing token has no delimiter to flush it, so supply one.
        if !matches!(self.pending, Pending::None) {
            self.feed(len + 1, ' ')?;
        }

        self.out.push(Instruction::Return);
        Ok(Program::new(self.out))
    }

    fn feed(&mut self, offset: usize, ch: char) -> Result<(), CompileError> {
        match std::mem::replace(&mut self.pending, Pending::None) {
            Pending::None => {}

            Pending::Constant => {
                let value =
                    lookup_constant(ch).ok_or(CompileError::InvalidConstant { offset, found: ch })?;
                self.emit(offset, Instruction::Constant(value));
                return Ok(());
            }

            Pending::Function { start, mut name } => {
                if extends_name(&name, ch) {
                    if name.len() >= self.config.max_function_name {
                        return Err(CompileError::FunctionNameTooLong {
                            offset,
                            max: self.config.max_function_name,
                        });
                    }
                    name.push(ch);
                    self.pending = Pending::Function { start, name };
                    return Ok(());
                }

                let op = lookup_function(&name).ok_or_else(|| CompileError::InvalidFunction {
                    offset: start,
                    name: name.clone(),
                })?;
                self.emit(start, Instruction::Op(op));
            }

            Pending::Literal {
                magnitude,
                fraction_digits,
            } => {
                if let Some(digit) = ch.to_digit(10) {
                    self.pending = Pending::Literal {
                        magnitude: magnitude * 10.0 + f64::from(digit),
                        fraction_digits: fraction_digits.map(|n| n + 1),
                    };
                    return Ok(());
                }
                if ch == '.' && fraction_digits.is_none() {
                    self.pending = Pending::Literal {
                        magnitude,
                        fraction_digits: Some(0),
                    };
                    return Ok(());
                }

                let mut value = magnitude;
                for _ in 0..fraction_digits.unwrap_or(0) {
                    value /= 10.0;
                }
                self.emit(offset, Instruction::Literal(value));
            }
        }

        self.start(offset, ch)
    }

    /// Scan `ch` with nothing pending.
    fn start(&mut self, offset: usize, ch: char) -> Result<(), CompileError> {
        if let Some(digit) = ch.to_digit(10) {
            self.pending = Pending::Literal {
                magnitude: f64::from(digit),
                fraction_digits: None,
            };
        } else if is_blank(ch) {
            // no-op
        } else if ch.is_ascii_lowercase() {
            self.emit(offset, Instruction::Var(ch));
        } else if ch.is_ascii_uppercase() {
            return Err(CompileError::UppercaseVariable { offset, found: ch });
        } else if ch == CONSTANT_ESCAPE {
            self.pending = Pending::Constant;
        } else if ch == FUNCTION_ESCAPE {
            self.pending = Pending::Function {
                start: offset + 1,
                name: String::new(),
            };
        } else {
            let op = lookup_operator(ch).ok_or(CompileError::InvalidOperation { offset, found: ch })?;
            self.emit(offset, Instruction::Op(op));
        }
        Ok(())
    }

    fn emit(&mut self, offset: usize, instr: Instruction) {
        trace!(offset, instruction = %instr, "emit");
        self.out.push(instr);
    }
}

/// Letters always extend a function name; a digit only does when some
/// function is spelled that way (`log2`).
fn extends_name(name: &str, ch: char) -> bool {
    if ch.is_ascii_alphabetic() {
        return true;
    }
    if ch.is_ascii_digit() && !name.is_empty() {
        let mut candidate = String::with_capacity(name.len() + 1);
        candidate.push_str(name);
        candidate.push(ch);
        return is_function_prefix(&candidate);
    }
    false
}
