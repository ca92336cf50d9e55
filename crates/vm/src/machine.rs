//! VM state: the register window, the clip register and variable bindings.

use crate::error::EvalError;

/// Number of registers in the window.
pub const MAX_REGISTERS: usize = 64;

/// A named value supplied to one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binding {
    /// Lowercase variable letter.
    pub name: char,
    pub value: f64,
}

impl Binding {
    pub fn new(name: char, value: f64) -> Self {
        Self { name, value }
    }
}

impl From<(char, f64)> for Binding {
    fn from((name, value): (char, f64)) -> Self {
        Self { name, value }
    }
}

/// What to do when a program reads a letter with no binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnboundPolicy {
    /// Leave the current register as it is.
    #[default]
    Ignore,
    /// Fail with [`EvalError::UnboundVariable`].
    Reject,
}

/// The dfield virtual machine.
///
/// Holds no state between evaluations, so one machine can evaluate any
/// number of programs from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Machine {
    pub(crate) unbound: UnboundPolicy,
}

impl Machine {
    /// A machine that ignores unbound variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// A machine that rejects unbound variables.
    pub fn strict() -> Self {
        Self {
            unbound: UnboundPolicy::Reject,
        }
    }

    /// The unbound-variable policy in effect.
    pub fn unbound_policy(&self) -> UnboundPolicy {
        self.unbound
    }
}

/// Per-evaluation register file. Lives on the stack of one `evaluate` call.
#[derive(Debug)]
pub(crate) struct Window {
    registers: [f64; MAX_REGISTERS],
    head: usize,
    /// Scratch register written by `,` and read by `;`.
    pub(crate) clip: f64,
}

impl Window {
    pub(crate) fn new() -> Self {
        Self {
            registers: [0.0; MAX_REGISTERS],
            head: 0,
            clip: 0.0,
        }
    }

    pub(crate) fn head(&self) -> usize {
        self.head
    }

    pub(crate) fn current(&self) -> f64 {
        self.registers[self.head]
    }

    pub(crate) fn set_current(&mut self, value: f64) {
        self.registers[self.head] = value;
    }

    /// The register left of the head. Binary operators read it.
    pub(crate) fn left(&self, at: usize) -> Result<f64, EvalError> {
        self.head
            .checked_sub(1)
            .map(|i| self.registers[i])
            .ok_or(EvalError::Underflow { at })
    }

    pub(crate) fn seek_left(&mut self, at: usize) -> Result<(), EvalError> {
        self.head = self.head.checked_sub(1).ok_or(EvalError::Underflow { at })?;
        Ok(())
    }

    pub(crate) fn seek_right(&mut self, at: usize) -> Result<(), EvalError> {
        if self.head + 1 >= MAX_REGISTERS {
            return Err(EvalError::Overflow { at });
        }
        self.head += 1;
        Ok(())
    }
}
