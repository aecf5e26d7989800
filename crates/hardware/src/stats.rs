//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the LC-2K pipeline. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (CPI, MIPS).
//! 2. **Instruction mix:** Counts by operation (ALU, load, store, branch, other).
//! 3. **Hazards:** Load-use stalls, taken-branch flushes, and squashed instructions.

use std::fmt;
use std::time::Instant;

use crate::core::pipeline::engine::CycleEvents;
use crate::isa::opcodes::Opcode;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions that passed writeback, excluding NOOPs and fill words.
    pub instructions_retired: u64,

    /// ADD and NOR retired.
    pub inst_alu: u64,
    /// LW retired.
    pub inst_load: u64,
    /// SW retired.
    pub inst_store: u64,
    /// BEQ retired, taken or not.
    pub inst_branch: u64,
    /// JALR and HALT retired.
    pub inst_other: u64,
    /// NOOPs through writeback, including stall bubbles and flushed slots.
    pub inst_noop: u64,
    /// Fill words through writeback.
    pub inst_fill: u64,

    /// Cycles decode spent holding an instruction for a load-use hazard.
    pub stalls_data: u64,
    /// Taken branches resolved in the memory stage.
    pub branch_flushes: u64,
    /// Instructions squashed by taken branches. Bubbles already in a flushed
    /// latch are not counted.
    pub squashed: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_other: 0,
            inst_noop: 0,
            inst_fill: 0,
            stalls_data: 0,
            branch_flushes: 0,
            squashed: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"hazards"`, `"instruction_mix"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "hazards", "instruction_mix"];

const RULE_HEAVY: &str = "==========================================================";
const RULE_LIGHT: &str = "----------------------------------------------------------";

impl SimStats {
    /// Accounts for one simulated cycle.
    pub const fn record(&mut self, events: &CycleEvents) {
        self.cycles += 1;
        if events.stalled {
            self.stalls_data += 1;
        }
        if events.flushed {
            self.branch_flushes += 1;
            self.squashed += events.squashed as u64;
        }

        match events.retired {
            Some(Opcode::Noop) => self.inst_noop += 1,
            None => self.inst_fill += 1,
            Some(op) => {
                self.instructions_retired += 1;
                match op {
                    Opcode::Add | Opcode::Nor => self.inst_alu += 1,
                    Opcode::Lw => self.inst_load += 1,
                    Opcode::Sw => self.inst_store += 1,
                    Opcode::Beq => self.inst_branch += 1,
                    Opcode::Jalr | Opcode::Halt | Opcode::Noop => self.inst_other += 1,
                }
            }
        }
    }

    /// Renders the requested sections as text.
    ///
    /// Same section names and semantics as [`print_sections`](Self::print_sections).
    pub fn render_sections(&self, sections: &[String]) -> String {
        self.report(sections).to_string()
    }

    /// Borrows the requested sections as a [`Display`](fmt::Display) value.
    pub const fn report<'a>(&'a self, sections: &'a [String]) -> StatsReport<'a> {
        StatsReport {
            stats: self,
            sections,
        }
    }

    fn write_sections(&self, out: &mut fmt::Formatter<'_>, sections: &[String]) -> fmt::Result {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64, of: f64| (n as f64 / of) * 100.0;

        writeln!(out, "\n{RULE_HEAVY}")?;
        writeln!(out, "LC-2K PIPELINE SIMULATION STATISTICS")?;
        writeln!(out, "{RULE_HEAVY}")?;
        if want("summary") {
            let ipc = self.instructions_retired as f64 / cyc;
            let cpi = cyc / instr;
            let mips = if seconds > 0.0 {
                (self.instructions_retired as f64 / seconds) / 1_000_000.0
            } else {
                0.0
            };
            writeln!(out, "host_seconds             {seconds:.4} s")?;
            writeln!(out, "sim_cycles               {}", self.cycles)?;
            writeln!(out, "sim_insts                {}", self.instructions_retired)?;
            writeln!(out, "sim_ipc                  {ipc:.4}")?;
            writeln!(out, "sim_cpi                  {cpi:.4}")?;
            writeln!(out, "sim_mips                 {mips:.2}")?;
            writeln!(out, "{RULE_LIGHT}")?;
        }
        if want("hazards") {
            writeln!(out, "HAZARDS")?;
            writeln!(
                out,
                "  stalls.data            {} ({:.2}%)",
                self.stalls_data,
                pct(self.stalls_data, cyc)
            )?;
            writeln!(out, "  branch.flushes         {}", self.branch_flushes)?;
            writeln!(
                out,
                "  branch.squashed        {} ({:.2}%)",
                self.squashed,
                pct(self.squashed, cyc)
            )?;
            writeln!(out, "{RULE_LIGHT}")?;
        }
        if want("instruction_mix") {
            writeln!(out, "INSTRUCTION MIX")?;
            for (name, count) in [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.other", self.inst_other),
            ] {
                writeln!(out, "  {name:<22} {count} ({:.2}%)", pct(count, instr))?;
            }
            writeln!(out, "  op.noop                {}", self.inst_noop)?;
            writeln!(out, "  op.fill                {}", self.inst_fill)?;
            writeln!(out, "{RULE_LIGHT}")?;
        }
        writeln!(out, "{RULE_HEAVY}")
    }

    /// Prints only the requested statistics sections to stderr.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an
    /// empty slice to print all sections (same as `print()`). Output goes to
    /// stderr so the state dump on stdout is left untouched.
    pub fn print_sections(&self, sections: &[String]) {
        eprint!("{}", self.report(sections));
    }

    /// Prints all statistics sections to stderr.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

/// Statistics report for a selection of sections.
///
/// Created by [`SimStats::report`].
#[derive(Clone, Copy, Debug)]
pub struct StatsReport<'a> {
    stats: &'a SimStats,
    sections: &'a [String],
}

impl fmt::Display for StatsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.stats.write_sections(f, self.sections)
    }
}
