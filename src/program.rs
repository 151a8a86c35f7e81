use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bits::sign_extend;
use crate::decoder::{DecodeError, Inst};
use crate::disasm;
use crate::instructions::classify;
use crate::isa::legv8;

/// Address assigned to the first word; each following word sits 4 higher.
pub const BASE_ADDRESS: u32 = 96;

/// The BREAK sentinel encoding terminating the instruction region.
pub const BREAK_WORD: u32 = 0xFEDE_FFE7;

/// Which side of the BREAK sentinel the pass is on. The transition is
/// one-way: once in `Data` nothing returns to `Instruction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Instruction,
    Data,
}

/// One decoded word with its assigned address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Record {
    Instruction { address: u32, word: u32, inst: Inst },
    Data { address: u32, word: u32, value: i32 },
}

impl Record {
    pub fn address(&self) -> u32 {
        match *self {
            Record::Instruction { address, .. } | Record::Data { address, .. } => address,
        }
    }

    /// The output line for this record.
    pub fn text(&self) -> String {
        match self {
            Record::Instruction {
                address,
                word,
                inst,
            } => disasm::instruction_line(*word, *address, inst),
            Record::Data {
                address,
                word,
                value,
            } => disasm::data_line(*word, *address, *value),
        }
    }
}

/// A completed decode pass: the instruction prefix up to and including
/// BREAK, then the data suffix. Built once, never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub records: Vec<Record>,
}

impl Program {
    pub fn instructions(&self) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(|r| matches!(r, Record::Instruction { .. }))
    }

    pub fn data(&self) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(|r| matches!(r, Record::Data { .. }))
    }

    /// Output lines in stream order, one per input word.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(Record::text)
    }
}

/// Decodes `words` starting at [`BASE_ADDRESS`].
pub fn disassemble(words: &[u32]) -> Result<Program, DecodeError> {
    disassemble_from(words, BASE_ADDRESS)
}

/// Single pass over the word stream.
///
/// The `(address, region)` pair is the whole fold state. In the
/// instruction region each word is classified and dispatched to its format
/// decoder; the BREAK word is still emitted as an instruction before the
/// switch. In the data region every word is read as a 32-bit
/// two's-complement value, bypassing the classifier.
///
/// All-or-nothing: the first error aborts the pass and no partial
/// `Program` is returned.
pub fn disassemble_from(words: &[u32], base: u32) -> Result<Program, DecodeError> {
    let mut records = Vec::with_capacity(words.len());
    let mut region = Region::Instruction;
    let mut address = base;

    for (index, &word) in words.iter().enumerate() {
        match region {
            Region::Instruction => {
                let (format, mnemonic) = classify(word, index)?;
                let inst = legv8::decode(word, format, mnemonic, index)?;
                trace!(index, address, mnemonic = mnemonic.as_str(), "decoded");
                records.push(Record::Instruction {
                    address,
                    word,
                    inst,
                });
                if matches!(inst, Inst::Break) {
                    debug!(address, "BREAK reached, rest of stream is data");
                    region = Region::Data;
                }
            }
            Region::Data => {
                records.push(Record::Data {
                    address,
                    word,
                    value: sign_extend(word, 32),
                });
            }
        }
        address = address.wrapping_add(4);
    }

    Ok(Program { records })
}
