//! Instruction Decode Properties.
//!
//! Verifies that `decode()` extracts opcode, register fields and the
//! sign-extended offset for every opcode, and that re-encoding a decoded
//! word reproduces exactly the fields its opcode uses.

use lc2k_core::common::constants::NOOP_INSTR;
use lc2k_core::isa::decode::{decode, encode};
use lc2k_core::isa::instruction::InstructionBits;
use lc2k_core::isa::opcodes::Opcode;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::{add, halt, jalr, lw, noop, nor, sw};

const OPS_WITH_OFFSET: [Opcode; 5] = [Opcode::Add, Opcode::Nor, Opcode::Lw, Opcode::Sw, Opcode::Beq];

// ──────────────────────────────────────────────────────────
// Field extraction
// ──────────────────────────────────────────────────────────

#[test]
fn decodes_lw_fields() {
    let d = decode(lw(3, 5, -2));
    assert_eq!(d.opcode, Some(Opcode::Lw));
    assert_eq!(d.reg_a, 3);
    assert_eq!(d.reg_b, 5);
    assert_eq!(d.imm, 0xFFFE);
    assert_eq!(d.offset, -2);
}

#[test]
fn noop_constant_matches_encoder() {
    assert_eq!(noop(), NOOP_INSTR);
    assert_eq!(NOOP_INSTR, 29_360_128);
}

#[rstest]
#[case(0, Some(Opcode::Add))]
#[case(100, Some(Opcode::Add))]
#[case(25_165_824, Some(Opcode::Halt))]
#[case(29_360_128, Some(Opcode::Noop))]
#[case(8 << 22, None)]
#[case(-1, None)]
#[case(i32::MIN, None)]
fn classifies_opcode_field(#[case] word: i32, #[case] expected: Option<Opcode>) {
    assert_eq!(word.opcode(), expected);
}

#[rstest]
#[case(add(1, 2, 3), Some(3))]
#[case(add(1, 2, 11), Some(3))]
#[case(nor(0, 0, 7), Some(7))]
#[case(lw(4, 6, 100), Some(6))]
#[case(sw(4, 6, 100), None)]
#[case(jalr(1, 2), None)]
#[case(halt(), None)]
#[case(noop(), None)]
#[case(-1, None)]
fn destination_register(#[case] word: i32, #[case] expected: Option<usize>) {
    assert_eq!(word.dest_reg(), expected);
}

#[rstest]
#[case(add(1, 2, 3), [Some(1), Some(2)])]
#[case(sw(4, 5, 0), [Some(4), Some(5)])]
#[case(lw(4, 5, 0), [Some(4), None])]
#[case(jalr(4, 5), [None, None])]
#[case(halt(), [None, None])]
#[case(-1, [None, None])]
fn source_registers(#[case] word: i32, #[case] expected: [Option<usize>; 2]) {
    assert_eq!(word.src_regs(), expected);
}

// ──────────────────────────────────────────────────────────
// Properties
// ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn offset_is_sign_extended_imm(word in any::<i32>()) {
        let off = word.offset();
        prop_assert!((-32768..=32767).contains(&off));
        prop_assert_eq!((off as u32) & 0xFFFF, word.field_imm());
    }

    #[test]
    fn encode_decode_round_trips_used_fields(word in any::<i32>()) {
        let d = decode(word);
        let re = d.encode();
        match d.opcode {
            Some(Opcode::Add | Opcode::Nor | Opcode::Lw | Opcode::Sw | Opcode::Beq) | None => {
                prop_assert_eq!(re, word);
            }
            Some(Opcode::Jalr) => {
                prop_assert_eq!(re, word & !0xFFFF);
            }
            Some(op @ (Opcode::Halt | Opcode::Noop)) => {
                prop_assert_eq!(re, (op as i32) << 22);
            }
        }
    }

    #[test]
    fn encoded_fields_decode_back(
        op_idx in 0..OPS_WITH_OFFSET.len(),
        a in 0usize..8,
        b in 0usize..8,
        off in -32768i32..=32767,
    ) {
        let op = OPS_WITH_OFFSET[op_idx];
        let d = decode(encode(op, a, b, off));
        prop_assert_eq!(d.opcode, Some(op));
        prop_assert_eq!(d.reg_a, a);
        prop_assert_eq!(d.reg_b, b);
        prop_assert_eq!(d.offset, off);
    }
}
