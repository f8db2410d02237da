use std::fmt::Write as _;

use crate::poison::RoundRecord;

pub const NO_DAMAGE_NOTICE: &str = "No poison damage dealt, as the poison count was 0 or negative.";

const RULE_WIDTH: usize = 38;

/// Render poison rounds as a fixed-width table (`Round`, `Damage This Round`, `Total Damage`).
pub fn format_summary(records: &[RoundRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:<20} {:<12}",
        "Round", "Damage This Round", "Total Damage"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for record in records {
        let _ = writeln!(
            out,
            "{:<6} {:<20} {:<12}",
            record.round, record.damage, record.total
        );
    }
    if records.is_empty() {
        let _ = writeln!(out, "{NO_DAMAGE_NOTICE}");
    }
    out
}
