use std::fmt::Write as _;

use crate::burn::{Activation, BurnReport};

const RULE_WIDTH: usize = 20;

/// Tick start time as shown in tables: the clock starts at a bare `0`, later ticks carry one
/// decimal (`0.5`, `1.0`, ...).
fn format_time(tick: u64, time: f64) -> String {
    if tick == 0 {
        "0".to_string()
    } else {
        format!("{time:.1}")
    }
}

/// Render the total followed by a `Time (s)` / `Damage` table.
pub fn format_summary(report: &BurnReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Damage: {}", report.total_damage);
    let _ = writeln!(out, "{:<10} {:<10}", "Time (s)", "Damage");
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for tick in &report.ticks {
        let _ = writeln!(out, "{:<10} {:<10}", format_time(tick.tick, tick.time), tick.damage);
    }
    out
}

/// Render the activation trace, one line per activation.
pub fn format_activations(activations: &[Activation]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10} {:<16} {:<8}", "Time (s)", "Item", "Stacks");
    let _ = writeln!(out, "{}", "-".repeat(36));
    for activation in activations {
        let _ = writeln!(
            out,
            "{:<10} {:<16} {:<8}",
            format_time(activation.tick, activation.time),
            activation.item,
            activation.stacks_granted
        );
    }
    out
}
