//! Writeback Stage Unit Tests.
//!
//! Verifies register commits per opcode, the WB/END copy, writable
//! register 0, and JALR handling.

use lc2k_core::common::error::SimError;
use lc2k_core::core::pipeline::latches::WbEnd;
use lc2k_core::core::pipeline::stages::wb_stage;
use lc2k_core::isa::opcodes::Opcode;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::{add, beq, fill, halt, jalr, lw, nor, sw};
use crate::common::builder::pipeline_state::StateBuilder;

#[test]
fn add_commits_to_low_bits_of_field() {
    let cur = StateBuilder::new(&[halt()]).mem_wb(add(0, 0, 11), 5).build();
    let mut next = cur.clone();
    assert_eq!(wb_stage(&cur, &mut next, true), Ok(Some(Opcode::Add)));
    assert_eq!(next.regs.read(3), 5);
}

#[test]
fn nor_and_lw_commit() {
    let cur = StateBuilder::new(&[halt()]).mem_wb(nor(1, 2, 6), -3).build();
    let mut next = cur.clone();
    let _ = wb_stage(&cur, &mut next, true).unwrap();
    assert_eq!(next.regs.read(6), -3);

    let cur = StateBuilder::new(&[halt()]).mem_wb(lw(1, 4, 0), 17).build();
    let mut next = cur.clone();
    let _ = wb_stage(&cur, &mut next, true).unwrap();
    assert_eq!(next.regs.read(4), 17);
}

#[test]
fn register_zero_is_writable() {
    let cur = StateBuilder::new(&[halt()]).mem_wb(lw(1, 0, 0), 9).build();
    let mut next = cur.clone();
    let _ = wb_stage(&cur, &mut next, true).unwrap();
    assert_eq!(next.regs.read(0), 9);
}

#[test]
fn non_writers_only_update_wb_end() {
    for instr in [sw(1, 2, 3), beq(1, 2, 3), halt(), fill(-5)] {
        let cur = StateBuilder::new(&[halt()]).mem_wb(instr, 31).build();
        let mut next = cur.clone();
        let _ = wb_stage(&cur, &mut next, true).unwrap();
        assert_eq!(next.regs, cur.regs, "{instr}");
        assert_eq!(
            next.wb_end,
            WbEnd {
                instr,
                write_data: 31
            }
        );
    }
}

#[test]
fn fill_word_retires_as_none() {
    let cur = StateBuilder::new(&[halt()]).mem_wb(fill(-5), 0).build();
    let mut next = cur.clone();
    assert_eq!(wb_stage(&cur, &mut next, true), Ok(None));
}

#[test]
fn jalr_rejected_when_configured() {
    let cur = StateBuilder::new(&[halt()]).mem_wb(jalr(1, 2), 0).build();
    let mut next = cur.clone();
    assert_eq!(
        wb_stage(&cur, &mut next, true),
        Err(SimError::UnsupportedInstruction(jalr(1, 2)))
    );
}

#[test]
fn jalr_is_a_no_op_when_allowed() {
    let cur = StateBuilder::new(&[halt()]).mem_wb(jalr(1, 2), 4).build();
    let mut next = cur.clone();
    assert_eq!(wb_stage(&cur, &mut next, false), Ok(Some(Opcode::Jalr)));
    assert_eq!(next.regs, cur.regs);
    assert_eq!(next.wb_end.instr, jalr(1, 2));
}
