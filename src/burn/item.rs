use serde::{Deserialize, Serialize};

/// An item that adds fire stacks every time its cooldown expires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Fire stacks granted per activation.
    pub stack_value: u32,
    /// Seconds before the item can activate again.
    pub cooldown: f64,
    /// Amplifying items grant one extra stack per activation.
    #[serde(default)]
    pub increases_burn: bool,
}

impl Item {
    pub fn new(name: impl Into<String>, stack_value: u32, cooldown: f64) -> Self {
        Self {
            name: name.into(),
            stack_value,
            cooldown,
            increases_burn: false,
        }
    }

    pub fn amplifying(name: impl Into<String>, stack_value: u32, cooldown: f64) -> Self {
        Self {
            increases_burn: true,
            ..Self::new(name, stack_value, cooldown)
        }
    }

    /// Stacks added by a single activation, including the amplification bonus.
    pub fn stacks_per_activation(&self) -> u64 {
        u64::from(self.stack_value) + u64::from(self.increases_burn)
    }
}
