//! dfield compiler: formula text → instruction buffer.
//!
//! The notation is one character per token. Digits form literals, lowercase
//! letters are variables, punctuation is an operator, `_e`/`_p` are named
//! constants and `=name` calls a named function. There is no grouping: the
//! program moves a cursor (`>`, `<`, `]`, `[`) over a window of registers and
//! binary operators combine the current register with its left neighbour.
//!
//! # Usage
//!
//! ```
//! use dfield_compiler::{compile, listing};
//!
//! // (y + t) / (y - t)
//! let program = compile("y>t+>y>t-[/").unwrap();
//! assert!(listing(&program).ends_with("DIV\n0011  RET\n"));
//! ```
//!
//! Compilation is a single pass with no optimization. Errors are fatal and
//! carry the 1-based character offset they refer to.

pub mod config;
pub mod error;
pub mod grammar;

mod compiler;
mod listing;

pub use config::CompilerConfig;
pub use error::CompileError;
pub use listing::listing;

use compiler::Compiler;
use dfield_common::Program;
use tracing::debug;

/// Compile formula text with the default limits.
pub fn compile(source: &str) -> Result<Program, CompileError> {
    compile_with(source, &CompilerConfig::default())
}

/// Compile formula text with explicit limits.
pub fn compile_with(source: &str, config: &CompilerConfig) -> Result<Program, CompileError> {
    let program = Compiler::new(config).run(source)?;
    debug!(
        source_len = source.len(),
        instructions = program.len(),
        words = program.word_len(),
        "compiled formula"
    );
    Ok(program)
}
