//! ALU unit tests.

use lc2k_core::core::units::alu::Alu;
use lc2k_core::isa::opcodes::Opcode;
use rstest::rstest;

#[rstest]
#[case(Opcode::Add, 2, 3, 5)]
#[case(Opcode::Add, -1, 1, 0)]
#[case(Opcode::Add, i32::MAX, 1, i32::MIN)]
#[case(Opcode::Nor, 0, 0, -1)]
#[case(Opcode::Nor, -1, 0, 0)]
#[case(Opcode::Nor, 0b1100, 0b1010, !0b1110)]
#[case(Opcode::Lw, 100, -4, 96)]
#[case(Opcode::Sw, 0, 65535, 65535)]
#[case(Opcode::Beq, 7, 7, 14)]
fn execute(#[case] op: Opcode, #[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    assert_eq!(Alu::execute(Some(op), a, b), expected);
}

#[test]
fn fill_words_add() {
    assert_eq!(Alu::execute(None, 40, 2), 42);
}

#[rstest]
#[case(Some(Opcode::Add), 9)]
#[case(Some(Opcode::Nor), 9)]
#[case(Some(Opcode::Lw), -2)]
#[case(Some(Opcode::Sw), -2)]
#[case(Some(Opcode::Beq), -2)]
#[case(Some(Opcode::Halt), -2)]
#[case(None, -2)]
fn operand_b_selects_register_for_alu_ops(#[case] op: Option<Opcode>, #[case] expected: i32) {
    assert_eq!(Alu::operand_b(op, 9, -2), expected);
}
