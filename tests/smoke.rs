use pretty_assertions::assert_eq;

use legv8_rs::program::{disassemble, Program, BREAK_WORD};

fn enc_r(opcode: u32, rm: u32, shamt: u32, rn: u32, rd: u32) -> u32 {
    (opcode << 21) | (rm << 16) | (shamt << 10) | (rn << 5) | rd
}

fn enc_i(opcode: u32, imm12: u32, rn: u32, rd: u32) -> u32 {
    (opcode << 22) | ((imm12 & 0xFFF) << 10) | (rn << 5) | rd
}

fn enc_d(opcode: u32, off9: u32, op2: u32, rn: u32, rt: u32) -> u32 {
    (opcode << 21) | ((off9 & 0x1FF) << 12) | (op2 << 10) | (rn << 5) | rt
}

fn enc_b(opcode: u32, addr24: u32) -> u32 {
    (opcode << 24) | (addr24 & 0xFF_FFFF)
}

fn enc_cb(opcode: u32, off19: u32, rt: u32) -> u32 {
    (opcode << 24) | ((off19 & 0x7_FFFF) << 5) | rt
}

fn enc_im(opcode: u32, shift: u32, imm16: u32, rd: u32) -> u32 {
    (opcode << 23) | (shift << 21) | (imm16 << 5) | rd
}

fn sample_words() -> Vec<u32> {
    vec![
        enc_r(1112, 3, 0, 2, 1),     // ADD  R1, R2, R3
        enc_i(580, 0xFFB, 1, 4),     // ADDI R4, R1, #-5
        enc_im(421, 1, 100, 2),      // MOVZ R2, 100, LSL 16
        enc_d(1984, 8, 0, 5, 4),     // STUR R4, [R5, #8]
        enc_cb(180, 2, 4),           // CBZ  R4, #2
        enc_b(20, 0xFF_FFFA),        // B    #-6
        0,                           // NOP
        BREAK_WORD,                  // BREAK
        12,
        0xFFFF_FF9C,                 // -100
    ]
}

#[test]
fn sample_program_end_to_end() {
    let program = disassemble(&sample_words()).unwrap();
    let lines: Vec<String> = program.lines().collect();
    assert_eq!(lines.len(), 10);

    assert_eq!(
        lines[0],
        "10001011 000 00011 00000 00001 000001\t96\tADD\tR1, R2, R3"
    );
    assert!(lines[1].ends_with("\t100\tADDI\tR4, R1, #-5"), "{}", lines[1]);
    assert!(lines[2].ends_with("\t104\tMOVZ\tR2, 100, LSL 16"), "{}", lines[2]);
    assert!(lines[3].ends_with("\t108\tSTUR\tR4, [R5, #8]"), "{}", lines[3]);
    assert!(lines[4].ends_with("\t112\tCBZ\tR4, #2"), "{}", lines[4]);
    assert!(lines[5].ends_with("\t116\tB\t#-6"), "{}", lines[5]);
    assert_eq!(lines[6], "00000000 000 00000 00000 00000 000000\t120\tNOP");
    assert_eq!(lines[7], "11111110 110 11110 11111 11111 100111\t124\tBREAK");
    assert_eq!(lines[8], format!("{:032b}\t128\t12", 12u32));
    assert_eq!(lines[9], format!("{:032b}\t132\t-100", 0xFFFF_FF9Cu32));
}

#[test]
fn program_survives_a_json_round_trip() {
    let program = disassemble(&sample_words()).unwrap();
    let json = serde_json::to_string(&program).unwrap();
    let back: Program = serde_json::from_str(&json).unwrap();
    assert_eq!(back, program);
}
