//! Listing: program → human-readable instruction text.
//!
//! One instruction per line, prefixed with its word offset in the encoded
//! stream. LIT and CONST occupy one line but two words.

use std::fmt::Write;

use dfield_common::Program;

/// Render a program as a listing.
pub fn listing(program: &Program) -> String {
    let mut out = String::new();
    let mut word = 0;

    for instr in &program.instructions {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{word:04}  {instr}");
        word += instr.width();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile;

    #[test]
    fn default_formula_listing() {
        let program = compile(dfield_common::DEFAULT_FORMULA).unwrap();
        let expected = "\
0000  VAR y
0001  SEEK_RIGHT
0002  VAR t
0003  ADD
0004  SEEK_RIGHT
0005  VAR y
0006  SEEK_RIGHT
0007  VAR t
0008  SUB
0009  COPY_LEFT
0010  DIV
0011  RET
";
        assert_eq!(listing(&program), expected);
    }

    #[test]
    fn operands_advance_word_offset() {
        let program = compile("1.5>_p*").unwrap();
        let expected = "\
0000  LIT 1.5
0002  SEEK_RIGHT
0003  CONST p
0005  MUL
0006  RET
";
        assert_eq!(listing(&program), expected);
    }

    #[test]
    fn empty_program_lists_nothing() {
        assert_eq!(listing(&Program::new(vec![])), "");
    }
}
