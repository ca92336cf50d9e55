//! Compiler limits.

/// Default maximum source length, in characters.
pub const DEFAULT_MAX_SOURCE_LEN: usize = 4096;

/// Default maximum function name length, in characters.
pub const DEFAULT_MAX_FUNCTION_NAME: usize = 16;

/// Limits applied while compiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Longest accepted source text, in characters.
    pub max_source_len: usize,
    /// Longest accepted name after `=`, in characters.
    pub max_function_name: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            max_source_len: DEFAULT_MAX_SOURCE_LEN,
            max_function_name: DEFAULT_MAX_FUNCTION_NAME,
        }
    }
}
