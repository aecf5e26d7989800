//! Disassembler Output Tests.

use lc2k_core::isa::disasm::disassemble;
use lc2k_core::isa::opcodes::Opcode;
use rstest::rstest;

use crate::common::builder::instruction::{add, beq, fill, halt, jalr, lw, noop, nor, sw};

#[rstest]
#[case(add(1, 2, 3), "add 1 2 3")]
#[case(nor(7, 0, 5), "nor 7 0 5")]
#[case(lw(0, 1, -1), "lw 0 1 -1")]
#[case(sw(2, 3, 32767), "sw 2 3 32767")]
#[case(beq(2, 3, -32768), "beq 2 3 -32768")]
#[case(jalr(4, 5), "jalr 4 5")]
#[case(halt(), "halt")]
#[case(noop(), "noop")]
#[case(fill(-1), ".fill -1")]
#[case(fill(8 << 22), ".fill 33554432")]
fn formats_instruction(#[case] word: i32, #[case] expected: &str) {
    assert_eq!(disassemble(word), expected);
}

#[test]
fn small_data_words_read_as_add() {
    // Opcode field is zero, so a `.fill 100` is indistinguishable from `add 0 0 100`.
    assert_eq!(disassemble(fill(100)), "add 0 0 100");
}

#[test]
fn jalr_ignores_offset_bits() {
    let word = jalr(1, 2) | 0x1234;
    assert_eq!(disassemble(word), "jalr 1 2");
}

#[test]
fn mnemonics_match_display() {
    for raw in 0..8 {
        let op = Opcode::from_raw(raw).unwrap();
        assert_eq!(op.to_string(), op.mnemonic());
    }
    assert_eq!(Opcode::from_raw(8), None);
}
