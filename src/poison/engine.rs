use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::InputError;

/// One round of poison damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round index.
    pub round: i64,
    /// Poison value at the start of the round, dealt as damage.
    pub damage: i64,
    /// Running sum of `damage` up to and including this round.
    pub total: i64,
}

/// Simulate poison decay for up to `rounds` rounds.
///
/// Stops early once the counter reaches zero. Non-positive `initial_poison` or
/// `rounds` produce no records.
pub fn simulate_poison(initial_poison: i64, rounds: i64) -> Vec<RoundRecord> {
    let mut poison = initial_poison;
    let mut total: i64 = 0;
    let capacity = initial_poison.min(rounds).clamp(0, 1024) as usize;
    let mut records = Vec::with_capacity(capacity);

    for round in 1..=rounds.max(0) {
        if poison <= 0 {
            break;
        }
        total = total.saturating_add(poison);
        records.push(RoundRecord {
            round,
            damage: poison,
            total,
        });
        poison -= 1;
    }

    debug!(
        initial_poison,
        rounds,
        emitted = records.len(),
        total,
        "poison simulation finished"
    );
    records
}

/// Total damage of a run (the last running total, or 0 for an empty run).
pub fn total_damage(records: &[RoundRecord]) -> i64 {
    records.last().map(|record| record.total).unwrap_or(0)
}

/// Parse one console answer as a poison-model integer.
pub fn parse_count(raw: &str, field: &'static str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| InputError::NotNumeric {
            field,
            value: trimmed.to_string(),
        })
}
