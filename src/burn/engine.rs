use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::burn::clock::{cooldown_ticks, tick_count, tick_time};
use crate::burn::Item;
use crate::data::BurnScenario;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraceMode {
    #[default]
    Off,
    /// Record every item activation alongside the per-tick damage.
    Events,
}

/// Damage dealt on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u64,
    /// Tick start time in seconds.
    pub time: f64,
    /// Stacks present before this tick's decay.
    pub damage: u64,
}

/// One item activation, recorded when tracing is on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activation {
    pub tick: u64,
    pub time: f64,
    pub item: String,
    pub stacks_granted: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnReport {
    pub total_damage: u64,
    pub ticks: Vec<TickRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activations: Vec<Activation>,
}

pub fn simulate_burn(items: &[Item], duration: f64) -> BurnReport {
    simulate_burn_with(items, duration, TraceMode::Off)
}

pub fn simulate_scenario(scenario: &BurnScenario, trace_mode: TraceMode) -> BurnReport {
    simulate_burn_with(&scenario.items, scenario.duration, trace_mode)
}

/// Run the burn model for every tick that starts before `duration`.
///
/// Per tick: ready items activate in order, damage is the current stack count, then stacks
/// decay by one and every cooldown counts down one tick.
pub fn simulate_burn_with(items: &[Item], duration: f64, trace_mode: TraceMode) -> BurnReport {
    let ticks = tick_count(duration);
    let reset_ticks: Vec<u64> = items.iter().map(|item| cooldown_ticks(item.cooldown)).collect();
    // Remaining countdowns, indexed like `items`. Zero means ready.
    let mut timers = vec![0u64; items.len()];

    let mut fire_stacks: u64 = 0;
    let mut total_damage: u64 = 0;
    let mut records = Vec::with_capacity(ticks.min(1 << 16) as usize);
    let mut activations = Vec::new();

    for tick in 0..ticks {
        let time = tick_time(tick);

        for (index, item) in items.iter().enumerate() {
            if timers[index] > 0 {
                continue;
            }
            let granted = item.stacks_per_activation();
            fire_stacks = fire_stacks.saturating_add(granted);
            timers[index] = reset_ticks[index];
            trace!(tick, item = %item.name, granted, fire_stacks, "item activated");
            if trace_mode == TraceMode::Events {
                activations.push(Activation {
                    tick,
                    time,
                    item: item.name.clone(),
                    stacks_granted: granted,
                });
            }
        }

        total_damage = total_damage.saturating_add(fire_stacks);
        records.push(TickRecord {
            tick,
            time,
            damage: fire_stacks,
        });

        fire_stacks = fire_stacks.saturating_sub(1);
        for timer in &mut timers {
            *timer = timer.saturating_sub(1);
        }
    }

    debug!(
        items = items.len(),
        duration,
        ticks,
        total_damage,
        "burn simulation finished"
    );

    BurnReport {
        total_damage,
        ticks: records,
        activations,
    }
}
