use crate::bits::{field, field_signed};
use crate::decoder::{DecodeError, Format, Inst, Mnemonic};

/// LEGv8 subset field layouts, one routine per format.
///
/// `index` is the 0-based position of the word in the stream and only
/// feeds error reports; decoding itself depends on the word alone.
pub fn decode(
    word: u32,
    format: Format,
    mnemonic: Mnemonic,
    index: usize,
) -> Result<Inst, DecodeError> {
    match format {
        Format::R => Ok(decode_r(word, mnemonic)),
        Format::I => Ok(decode_i(word, mnemonic)),
        Format::D => Ok(decode_d(word, mnemonic)),
        Format::B => Ok(decode_b(word, mnemonic)),
        Format::Cb => Ok(decode_cb(word, mnemonic)),
        Format::Im => Ok(decode_im(word, mnemonic)),
        Format::Nop => decode_nop(word, index),
        Format::Break => Ok(Inst::Break),
    }
}

// R: opcode[31:21] rm[20:16] shamt[15:10] rn[9:5] rd[4:0]
fn decode_r(word: u32, mnemonic: Mnemonic) -> Inst {
    Inst::R {
        mnemonic,
        opcode: field(word, 31, 21) as u16,
        rm: field(word, 20, 16) as u8,
        shamt: field(word, 15, 10) as u8,
        rn: field(word, 9, 5) as u8,
        rd: field(word, 4, 0) as u8,
    }
}

// I: opcode[31:22] immediate[21:10] rn[9:5] rd[4:0]; immediate is signed
fn decode_i(word: u32, mnemonic: Mnemonic) -> Inst {
    Inst::I {
        mnemonic,
        opcode: field(word, 31, 22) as u16,
        immediate: field_signed(word, 21, 10) as i16,
        rn: field(word, 9, 5) as u8,
        rd: field(word, 4, 0) as u8,
    }
}

// D: opcode[31:21] offset[20:12] op2[11:10] rn[9:5] rt[4:0]
fn decode_d(word: u32, mnemonic: Mnemonic) -> Inst {
    Inst::D {
        mnemonic,
        opcode: field(word, 31, 21) as u16,
        offset: field(word, 20, 12) as u16,
        op2: field(word, 11, 10) as u8,
        rn: field(word, 9, 5) as u8,
        rt: field(word, 4, 0) as u8,
    }
}

// B: opcode[31:24] address[23:0]; address is signed
fn decode_b(word: u32, mnemonic: Mnemonic) -> Inst {
    Inst::B {
        mnemonic,
        opcode: field(word, 31, 24) as u16,
        address: field_signed(word, 23, 0),
    }
}

// CB: opcode[31:24] offset[23:5] rt[4:0]; offset is signed
fn decode_cb(word: u32, mnemonic: Mnemonic) -> Inst {
    Inst::Cb {
        mnemonic,
        opcode: field(word, 31, 24) as u16,
        offset: field_signed(word, 23, 5),
        rt: field(word, 4, 0) as u8,
    }
}

// IM: opcode[31:23] shift[22:21] immediate[20:5] rd[4:0]
fn decode_im(word: u32, mnemonic: Mnemonic) -> Inst {
    Inst::Im {
        mnemonic,
        opcode: field(word, 31, 23) as u16,
        shift: field(word, 22, 21) as u8,
        immediate: field(word, 20, 5) as u16,
        rd: field(word, 4, 0) as u8,
    }
}

// A zero opcode is only legal when the whole word is zero.
fn decode_nop(word: u32, index: usize) -> Result<Inst, DecodeError> {
    if word != 0 {
        return Err(DecodeError::MalformedNop { index, word });
    }
    Ok(Inst::Nop)
}
