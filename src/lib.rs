//! Damage-over-time calculators: decaying poison and item-driven stacking burn.

pub mod burn;
pub mod cli;
pub mod data;
pub mod error;
pub mod export;
pub mod poison;
