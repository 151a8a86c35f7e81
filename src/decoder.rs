use serde::{Deserialize, Serialize};

/// Field layout convention governing how a word's bits are partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    R,
    I,
    D,
    B,
    Cb,
    Im,
    Nop,
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mnemonic {
    Nop,
    B,
    And,
    Add,
    Addi,
    Orr,
    Cbz,
    Cbnz,
    Eor,
    Sub,
    Subi,
    Movz,
    Movk,
    Lsr,
    Lsl,
    Stur,
    Ldur,
    Break,
}

impl Mnemonic {
    pub fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Nop => "NOP",
            Mnemonic::B => "B",
            Mnemonic::And => "AND",
            Mnemonic::Add => "ADD",
            Mnemonic::Addi => "ADDI",
            Mnemonic::Orr => "ORR",
            Mnemonic::Cbz => "CBZ",
            Mnemonic::Cbnz => "CBNZ",
            Mnemonic::Eor => "EOR",
            Mnemonic::Sub => "SUB",
            Mnemonic::Subi => "SUBI",
            Mnemonic::Movz => "MOVZ",
            Mnemonic::Movk => "MOVK",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Lsl => "LSL",
            Mnemonic::Stur => "STUR",
            Mnemonic::Ldur => "LDUR",
            Mnemonic::Break => "BREAK",
        }
    }
}

/// A fully decoded instruction word, tagged by format.
///
/// Each variant carries exactly the fields its format encodes; signed
/// fields are stored already two's-complement decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inst {
    R {
        mnemonic: Mnemonic,
        opcode: u16,
        rm: u8,
        shamt: u8,
        rn: u8,
        rd: u8,
    },
    I {
        mnemonic: Mnemonic,
        opcode: u16,
        immediate: i16, // 12-bit two's complement
        rn: u8,
        rd: u8,
    },
    D {
        mnemonic: Mnemonic,
        opcode: u16,
        offset: u16, // 9-bit, unsigned
        op2: u8,
        rn: u8,
        rt: u8,
    },
    B {
        mnemonic: Mnemonic,
        opcode: u16,
        address: i32, // 24-bit two's complement
    },
    Cb {
        mnemonic: Mnemonic,
        opcode: u16,
        offset: i32, // 19-bit two's complement
        rt: u8,
    },
    Im {
        mnemonic: Mnemonic,
        opcode: u16,
        shift: u8, // quadrant, rendered as LSL shift*16
        immediate: u16,
        rd: u8,
    },
    Nop,
    Break,
}

impl Inst {
    pub fn mnemonic(&self) -> Mnemonic {
        match *self {
            Inst::R { mnemonic, .. }
            | Inst::I { mnemonic, .. }
            | Inst::D { mnemonic, .. }
            | Inst::B { mnemonic, .. }
            | Inst::Cb { mnemonic, .. }
            | Inst::Im { mnemonic, .. } => mnemonic,
            Inst::Nop => Mnemonic::Nop,
            Inst::Break => Mnemonic::Break,
        }
    }
}

/// Fatal decode failures; `index` is the 0-based position of the word in
/// the input stream.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid instruction at word {index}: '{word:032b}' matches no opcode")]
    UnknownOpcode { index: usize, word: u32 },
    #[error("invalid instruction at word {index}: '{word:032b}' matches {matches} opcode ranges")]
    AmbiguousOpcode {
        index: usize,
        word: u32,
        matches: usize,
    },
    #[error("invalid instruction at word {index}: '{word:032b}' has a NOP opcode but nonzero operand bits")]
    MalformedNop { index: usize, word: u32 },
}
