//! Opcode definitions for the dfield instruction set.
//!
//! Discriminants are the on-disk word values. Literal (1) and Constant (2)
//! are not opcodes here: they carry an operand and are modelled directly as
//! [`Instruction`](crate::Instruction) variants.

/// How an opcode uses the register window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpClass {
    /// Does nothing.
    Nop,
    /// Moves data between the current register and the clip register.
    Clip,
    /// Moves the head cursor one register left.
    MoveLeft,
    /// Moves the head cursor one register right.
    MoveRight,
    /// Reads `r[head - 1]` and `r[head]`, writes `r[head]`. Head stays put.
    Binary,
    /// Rewrites `r[head]` in place.
    Unary,
}

/// Identifies the operation to perform.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Nop = 0,

    // Register window
    /// `clip := r[head]`
    ClipWrite = 3,
    /// `r[head] := clip`
    ClipRead = 4,
    /// `head -= 1`
    SeekLeft = 5,
    /// `head += 1`
    SeekRight = 6,
    /// `head -= 1`, then copy the old current register into the new one.
    CopyLeft = 7,
    /// `head += 1`, then copy the old current register into the new one.
    CopyRight = 8,

    // Binary arithmetic: r[head] := r[head - 1] <op> r[head]
    Add = 9,
    Subtract = 10,
    Multiply = 11,
    /// Fails when the divisor is exactly zero.
    Divide = 12,
    /// Floating-point remainder with the sign of the dividend. Fails on a zero divisor.
    Remainder = 13,
    Power = 14,

    // Unary functions, applied in place
    Square = 15,
    Sqrt = 16,
    Ln = 17,
    Log10 = 18,
    Log2 = 19,
    Abs = 20,
    Sin = 21,
    Cos = 22,
    Tan = 23,
    Asin = 24,
    Acos = 25,
    Atan = 26,
    Sinh = 27,
    Cosh = 28,
    Tanh = 29,
    Asinh = 30,
    Acosh = 31,
    Atanh = 32,
    /// -1, 0 or 1. NaN stays NaN.
    Sign = 33,
    Ceil = 34,
    Floor = 35,
    /// Rounds half away from zero.
    Round = 36,
    Negate = 37,
}

/// All opcodes, in word order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 36] = [
    Opcode::Nop,
    Opcode::ClipWrite,
    Opcode::ClipRead,
    Opcode::SeekLeft,
    Opcode::SeekRight,
    Opcode::CopyLeft,
    Opcode::CopyRight,
    Opcode::Add,
    Opcode::Subtract,
    Opcode::Multiply,
    Opcode::Divide,
    Opcode::Remainder,
    Opcode::Power,
    Opcode::Square,
    Opcode::Sqrt,
    Opcode::Ln,
    Opcode::Log10,
    Opcode::Log2,
    Opcode::Abs,
    Opcode::Sin,
    Opcode::Cos,
    Opcode::Tan,
    Opcode::Asin,
    Opcode::Acos,
    Opcode::Atan,
    Opcode::Sinh,
    Opcode::Cosh,
    Opcode::Tanh,
    Opcode::Asinh,
    Opcode::Acosh,
    Opcode::Atanh,
    Opcode::Sign,
    Opcode::Ceil,
    Opcode::Floor,
    Opcode::Round,
    Opcode::Negate,
];

impl Opcode {
    /// Look up the opcode whose word value is `word`.
    ///
    /// Returns `None` for the operand prefixes (1, 2), the variable range,
    /// the sentinel and every unassigned value.
    pub fn from_word(word: u64) -> Option<Self> {
        let byte = u8::try_from(word).ok()?;
        ALL_OPCODES.iter().copied().find(|op| *op as u8 == byte)
    }

    /// The word value of this opcode.
    pub fn word(self) -> u64 {
        self as u8 as u64
    }

    /// How this opcode uses the register window.
    pub fn class(self) -> OpClass {
        match self {
            Opcode::Nop => OpClass::Nop,
            Opcode::ClipWrite | Opcode::ClipRead => OpClass::Clip,
            Opcode::SeekLeft | Opcode::CopyLeft => OpClass::MoveLeft,
            Opcode::SeekRight | Opcode::CopyRight => OpClass::MoveRight,
            Opcode::Add
            | Opcode::Subtract
            | Opcode::Multiply
            | Opcode::Divide
            | Opcode::Remainder
            | Opcode::Power => OpClass::Binary,
            _ => OpClass::Unary,
        }
    }

    /// Returns the listing mnemonic for this opcode.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Nop => "NOP",
            Opcode::ClipWrite => "CLIP_WRITE",
            Opcode::ClipRead => "CLIP_READ",
            Opcode::SeekLeft => "SEEK_LEFT",
            Opcode::SeekRight => "SEEK_RIGHT",
            Opcode::CopyLeft => "COPY_LEFT",
            Opcode::CopyRight => "COPY_RIGHT",
            Opcode::Add => "ADD",
            Opcode::Subtract => "SUB",
            Opcode::Multiply => "MUL",
            Opcode::Divide => "DIV",
            Opcode::Remainder => "REM",
            Opcode::Power => "POW",
            Opcode::Square => "SQUARE",
            Opcode::Sqrt => "SQRT",
            Opcode::Ln => "LN",
            Opcode::Log10 => "LOG10",
            Opcode::Log2 => "LOG2",
            Opcode::Abs => "ABS",
            Opcode::Sin => "SIN",
            Opcode::Cos => "COS",
            Opcode::Tan => "TAN",
            Opcode::Asin => "ASIN",
            Opcode::Acos => "ACOS",
            Opcode::Atan => "ATAN",
            Opcode::Sinh => "SINH",
            Opcode::Cosh => "COSH",
            Opcode::Tanh => "TANH",
            Opcode::Asinh => "ASINH",
            Opcode::Acosh => "ACOSH",
            Opcode::Atanh => "ATANH",
            Opcode::Sign => "SIGN",
            Opcode::Ceil => "CEIL",
            Opcode::Floor => "FLOOR",
            Opcode::Round => "ROUND",
            Opcode::Negate => "NEG",
        }
    }
}
