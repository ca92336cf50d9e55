//! Character and name tables for the formula notation.

use std::f64::consts::{E, PI};

use dfield_common::Opcode;

/// Starts a named constant: `_e`, `_p`.
pub const CONSTANT_ESCAPE: char = '_';
/// Starts a named function: `=sin`, `=log2`.
pub const FUNCTION_ESCAPE: char = '=';

/// Single-character operators, in source form.
pub const OPERATORS: [(char, Opcode); 20] = [
    (',', Opcode::ClipWrite),
    (';', Opcode::ClipRead),
    ('<', Opcode::SeekLeft),
    ('>', Opcode::SeekRight),
    ('[', Opcode::CopyLeft),
    (']', Opcode::CopyRight),
    ('+', Opcode::Add),
    ('-', Opcode::Subtract),
    ('*', Opcode::Multiply),
    ('/', Opcode::Divide),
    ('%', Opcode::Remainder),
    ('^', Opcode::Power),
    ('{', Opcode::Sqrt),
    ('}', Opcode::Square),
    ('$', Opcode::Ln),
    ('#', Opcode::Abs),
    ('(', Opcode::Sin),
    (')', Opcode::Cos),
    ('\\', Opcode::Tan),
    ('~', Opcode::Negate),
];

/// Names accepted after the function escape.
pub const FUNCTIONS: [(&str, Opcode); 22] = [
    ("sin", Opcode::Sin),
    ("cos", Opcode::Cos),
    ("tan", Opcode::Tan),
    ("asin", Opcode::Asin),
    ("acos", Opcode::Acos),
    ("atan", Opcode::Atan),
    ("sinh", Opcode::Sinh),
    ("cosh", Opcode::Cosh),
    ("tanh", Opcode::Tanh),
    ("asinh", Opcode::Asinh),
    ("acosh", Opcode::Acosh),
    ("atanh", Opcode::Atanh),
    ("pow", Opcode::Power),
    ("abs", Opcode::Abs),
    ("ln", Opcode::Ln),
    ("log", Opcode::Log10),
    ("log2", Opcode::Log2),
    ("sign", Opcode::Sign),
    ("ceil", Opcode::Ceil),
    ("floor", Opcode::Floor),
    ("round", Opcode::Round),
    ("sqrt", Opcode::Sqrt),
];

pub fn lookup_operator(ch: char) -> Option<Opcode> {
    OPERATORS
        .iter()
        .find(|(symbol, _)| *symbol == ch)
        .map(|(_, op)| *op)
}

pub fn lookup_function(name: &str) -> Option<Opcode> {
    FUNCTIONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, op)| *op)
}

/// True if some function name starts with `prefix`.
pub fn is_function_prefix(prefix: &str) -> bool {
    FUNCTIONS.iter().any(|(n, _)| n.starts_with(prefix))
}

pub fn lookup_constant(ch: char) -> Option<f64> {
    match ch {
        'e' => Some(E),
        'p' => Some(PI),
        _ => None,
    }
}

/// Space and tab. Newlines are not blank.
pub fn is_blank(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbols_are_unique() {
        for (i, (a, _)) in OPERATORS.iter().enumerate() {
            assert!(
                OPERATORS[i + 1..].iter().all(|(b, _)| a != b),
                "duplicate operator '{a}'"
            );
            assert_ne!(*a, CONSTANT_ESCAPE);
            assert_ne!(*a, FUNCTION_ESCAPE);
        }
    }

    #[test]
    fn pow_matches_caret() {
        assert_eq!(lookup_function("pow"), lookup_operator('^'));
    }

    #[test]
    fn log_is_base_ten() {
        assert_eq!(lookup_function("log"), Some(Opcode::Log10));
        assert_eq!(lookup_function("log2"), Some(Opcode::Log2));
        assert_eq!(lookup_function("ln"), lookup_operator('$'));
    }

    #[test]
    fn function_prefixes() {
        assert!(is_function_prefix("log"));
        assert!(is_function_prefix("log2"));
        assert!(!is_function_prefix("log3"));
        assert!(!is_function_prefix("sin2"));
    }

    #[test]
    fn constants() {
        assert_eq!(lookup_constant('e'), Some(E));
        assert_eq!(lookup_constant('p'), Some(PI));
        assert_eq!(lookup_constant('P'), None);
    }

    #[test]
    fn blanks() {
        assert!(is_blank(' '));
        assert!(is_blank('\t'));
        assert!(!is_blank('\n'));
    }
}
