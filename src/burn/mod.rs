//! Burn: items add fire stacks on cooldown; each tick deals the current stack count and sheds one stack.

pub mod clock;
pub mod engine;
pub mod item;
pub mod summary;

pub use clock::{cooldown_ticks, tick_count, tick_time, EPSILON, MAX_TICKS, TICK_SECONDS};
pub use engine::{
    simulate_burn, simulate_burn_with, simulate_scenario, Activation, BurnReport, TickRecord,
    TraceMode,
};
pub use item::Item;
pub use summary::{format_activations, format_summary};
