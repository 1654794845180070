//! SimStats unit tests.
//!
//! Verifies per-class counting, derived metrics and the report layout.

use rvsoc_core::core::cpu::Retired;
use rvsoc_core::isa::instruction::InstructionClass;
use rvsoc_core::stats::SimStats;

fn retired(class: Option<InstructionClass>, taken: bool) -> Retired {
    Retired {
        pc: 0,
        raw: 0,
        class,
        taken,
    }
}

#[test]
fn default_stats_all_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.ticks, 0);
    assert_eq!(stats.instructions, 0);
    assert_eq!(stats.uart_bytes, 0);
    assert_eq!(stats.cpi(), 0.0);
}

#[test]
fn record_counts_every_class() {
    let mut stats = SimStats::default();
    for class in InstructionClass::ALL {
        stats.record(&retired(Some(class), false));
    }
    stats.record(&retired(None, false));

    assert_eq!(stats.instructions, 11);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.branch_not_taken, 1);
    assert_eq!(stats.branch_taken, 0);
    assert_eq!(stats.inst_jump, 2);
    assert_eq!(stats.inst_upper, 2);
    assert_eq!(stats.inst_system, 1);
    assert_eq!(stats.inst_undecoded, 1);
}

#[test]
fn taken_flag_splits_branches() {
    let mut stats = SimStats::default();
    stats.record(&retired(Some(InstructionClass::Branch), true));
    stats.record(&retired(Some(InstructionClass::Branch), true));
    stats.record(&retired(Some(InstructionClass::Branch), false));
    assert_eq!(stats.branch_taken, 2);
    assert_eq!(stats.branch_not_taken, 1);
}

#[test]
fn cpi_divides_ticks_by_instructions() {
    let stats = SimStats {
        ticks: 38,
        instructions: 8,
        ..SimStats::default()
    };
    assert!((stats.cpi() - 4.75).abs() < 1e-9);
}

#[test]
fn display_contains_header_and_rows() {
    let mut stats = SimStats {
        ticks: 12,
        uart_bytes: 3,
        ..SimStats::default()
    };
    stats.record(&retired(Some(InstructionClass::AluImm), false));
    stats.record(&retired(Some(InstructionClass::Load), false));

    let report = stats.to_string();
    assert!(report.contains("RV32I SOC SIMULATION STATISTICS"));
    assert!(report.contains("sim_ticks                12"));
    assert!(report.contains("sim_cpi                  6.0000"));
    assert!(report.contains("( 50.00%)"));
    assert!(report.lines().any(|l| l.starts_with("op_undecoded")));
    assert!(report.ends_with("uart_bytes               3"));
}
