//! dfield common types and instruction encoding.
//!
//! This crate provides the data structures shared by the compiler, the
//! virtual machine and the verifier:
//!
//! - [`Opcode`]: the closed set of operand-free operations
//! - [`Instruction`]: the tagged instruction (`Op`, `Literal`, `Constant`, `Var`, `Return`)
//! - [`Program`]: a compiled formula, with its 64-bit word codec
//! - [`DecodeError`] / [`EncodeError`]: word stream codec errors
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::{DecodeError, EncodeError};
pub use instruction::Instruction;
pub use opcode::{OpClass, Opcode};
pub use program::Program;

/// Formula evaluated when the caller supplies none: `(y + t) / (y - t)`.
pub const DEFAULT_FORMULA: &str = "y>t+>y>t-[/";
