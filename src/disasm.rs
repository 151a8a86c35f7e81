use crate::decoder::{Inst, Mnemonic};

/// Column widths of the spaced binary dump: 8-3-5-5-5-6.
const SPACING: [usize; 6] = [8, 3, 5, 5, 5, 6];

/// The 32 bits of `word`, grouped per `SPACING` with single spaces.
pub fn bin_spaced(word: u32) -> String {
    let bits = format!("{word:032b}");
    let mut out = String::with_capacity(37);
    let mut pos = 0;
    for (i, &width) in SPACING.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&bits[pos..pos + width]);
        pos += width;
    }
    out
}

/// Assembly text for one decoded instruction.
pub fn fmt_inst(inst: &Inst) -> String {
    match *inst {
        // Shift-by-immediate renders the shamt field; rm is unused.
        Inst::R {
            mnemonic: mnemonic @ (Mnemonic::Lsl | Mnemonic::Lsr),
            shamt,
            rn,
            rd,
            ..
        } => format!("{}\tR{}, R{}, #{}", mnemonic.as_str(), rd, rn, shamt),
        Inst::R {
            mnemonic,
            rm,
            rn,
            rd,
            ..
        } => format!("{}\tR{}, R{}, R{}", mnemonic.as_str(), rd, rn, rm),
        Inst::I {
            mnemonic,
            immediate,
            rn,
            rd,
            ..
        } => format!("{}\tR{}, R{}, #{}", mnemonic.as_str(), rd, rn, immediate),
        Inst::D {
            mnemonic,
            offset,
            rn,
            rt,
            ..
        } => format!("{}\tR{}, [R{}, #{}]", mnemonic.as_str(), rt, rn, offset),
        Inst::B {
            mnemonic, address, ..
        } => format!("{}\t#{}", mnemonic.as_str(), address),
        Inst::Cb {
            mnemonic,
            offset,
            rt,
            ..
        } => format!("{}\tR{}, #{}", mnemonic.as_str(), rt, offset),
        Inst::Im {
            mnemonic,
            shift,
            immediate,
            rd,
            ..
        } => format!(
            "{}\tR{}, {}, LSL {}",
            mnemonic.as_str(),
            rd,
            immediate,
            u32::from(shift) * 16
        ),
        Inst::Nop => Mnemonic::Nop.as_str().to_string(),
        Inst::Break => Mnemonic::Break.as_str().to_string(),
    }
}

/// Output line for a word in the instruction region.
pub fn instruction_line(word: u32, address: u32, inst: &Inst) -> String {
    format!("{}\t{}\t{}", bin_spaced(word), address, fmt_inst(inst))
}

/// Output line for a word in the data region.
pub fn data_line(word: u32, address: u32, value: i32) -> String {
    format!("{word:032b}\t{address}\t{value}")
}
