//! The player robot and its energy meter.

pub mod agent;
pub mod energy;

pub use agent::{PlayerAgent, PlayerConfig};
pub use energy::{EnergyBudget, EnergyConfig, EnergyEvent};
