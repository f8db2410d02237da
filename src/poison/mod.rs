//! Poison: a counter that deals its current value as damage each round, then loses one.

pub mod engine;
pub mod summary;

pub use engine::{parse_count, simulate_poison, total_damage, RoundRecord};
pub use summary::{format_summary, NO_DAMAGE_NOTICE};
