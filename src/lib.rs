//! Pandemic Directive - turn-based outbreak command simulator.

pub mod simulation;

pub use simulation::{SimulationConfig, SimulationWorld, TurnResult};
