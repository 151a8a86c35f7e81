pub mod bits;
pub mod decoder;
pub mod disasm;
pub mod instructions;
pub mod program;

pub mod isa {
    pub mod legv8; // ARMv8/LEGv8 educational subset
}

pub use decoder::{DecodeError, Format, Inst, Mnemonic};
pub use program::{disassemble, disassemble_from, Program, Record, BASE_ADDRESS, BREAK_WORD};
