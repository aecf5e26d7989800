//! Memory Stage Unit Tests.
//!
//! Verifies branch resolution with flush, stores into the successor's data
//! memory, loads from the current data memory, and pass-through of ALU results.

use lc2k_core::common::constants::NOOP_INSTR;
use lc2k_core::common::error::{MemoryRegion, SimError};
use lc2k_core::core::pipeline::stages::{execute_stage, fetch_stage, mem_stage};
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::{add, beq, fill, halt, lw, sw};
use crate::common::builder::pipeline_state::{StateBuilder, ex_mem, id_ex};

#[test]
fn taken_branch_flushes_younger_latches() {
    let cur = StateBuilder::new(&[halt(), add(0, 0, 1), add(0, 0, 2), add(0, 0, 3)])
        .pc(3)
        .if_id(add(0, 0, 2), 3)
        .id_ex(id_ex(add(0, 0, 1), 2, 0, 0, 1))
        .ex_mem(ex_mem(beq(0, 0, 5), 6, true, 5, 0))
        .build();

    let mut next = cur.clone();
    fetch_stage(&cur, &mut next).unwrap();
    execute_stage(&cur, &mut next);
    let squashed = mem_stage(&cur, &mut next).unwrap();

    assert_eq!(squashed, Some(3));
    assert_eq!(next.pc, 6);
    assert_eq!(next.if_id.instr, NOOP_INSTR);
    assert_eq!(next.id_ex.instr, NOOP_INSTR);
    assert_eq!(next.ex_mem.instr, NOOP_INSTR);
    assert_eq!(next.if_id.pc_plus1, 4);
    assert_eq!(next.mem_wb.instr, beq(0, 0, 5));
}

#[test]
fn not_taken_branch_does_nothing() {
    let cur = StateBuilder::new(&[halt()])
        .pc(3)
        .ex_mem(ex_mem(beq(0, 1, 5), 6, false, 5, 0))
        .build();
    let mut next = cur.clone();
    assert_eq!(mem_stage(&cur, &mut next).unwrap(), None);
    assert_eq!(next.pc, 3);
}

#[test]
fn flush_of_bubbles_squashes_nothing() {
    let cur = StateBuilder::new(&[halt()])
        .pc(3)
        .ex_mem(ex_mem(beq(0, 0, 5), 6, true, 5, 0))
        .build();
    let mut next = cur.clone();
    assert_eq!(mem_stage(&cur, &mut next).unwrap(), Some(0));
    assert_eq!(next.pc, 6);
}

#[test]
fn store_writes_successor_memory_only() {
    let cur = StateBuilder::new(&[halt(), fill(0)])
        .ex_mem(ex_mem(sw(0, 1, 1), 0, false, 1, 123))
        .build();
    let mut next = cur.clone();
    let _ = mem_stage(&cur, &mut next).unwrap();
    assert_eq!(next.data_mem.read(1), Ok(123));
    assert_eq!(cur.data_mem.read(1), Ok(0));
}

#[test]
fn load_reads_current_memory() {
    let cur = StateBuilder::new(&[halt(), fill(-8)])
        .ex_mem(ex_mem(lw(0, 1, 1), 0, false, 1, 0))
        .build();
    let mut next = cur.clone();
    let _ = mem_stage(&cur, &mut next).unwrap();
    assert_eq!(next.mem_wb.write_data, -8);
    assert_eq!(next.mem_wb.alu_result, 1);
}

#[test]
fn alu_result_passes_through() {
    let cur = StateBuilder::new(&[halt()])
        .ex_mem(ex_mem(add(1, 2, 3), 0, false, 77, 0))
        .build();
    let mut next = cur.clone();
    let _ = mem_stage(&cur, &mut next).unwrap();
    assert_eq!(next.mem_wb.write_data, 77);
}

#[test]
fn load_outside_data_memory_fails() {
    let cur = StateBuilder::new(&[halt()])
        .ex_mem(ex_mem(lw(0, 1, -1), 0, false, -1, 0))
        .build();
    let mut next = cur.clone();
    assert_eq!(
        mem_stage(&cur, &mut next),
        Err(SimError::OutOfBounds {
            region: MemoryRegion::Data,
            addr: -1,
            capacity: 65536,
        })
    );
}

#[test]
fn store_past_capacity_fails() {
    let cur = StateBuilder::new(&[halt()])
        .ex_mem(ex_mem(sw(0, 1, 0), 0, false, 65536, 1))
        .build();
    let mut next = cur.clone();
    assert!(mem_stage(&cur, &mut next).is_err());
}
