use bevy_ecs::prelude::*;

use crate::simulation::{DayClock, DynamicsConfig, Flag, NationState, SimulationConfig};

/// Additive economic drag for one day.
pub fn economic_drag(state: &NationState, day: u32, config: &DynamicsConfig) -> f32 {
    let mut drag = config.economy_decay;
    if state.stats.infection > config.infection_drag_threshold {
        drag += config.infection_drag;
    }
    if state.stats.trust < config.low_trust_threshold {
        drag += config.low_trust_drag;
    }
    if state.flags.is_set(Flag::Lockdown) {
        drag += config.lockdown_drag;
    }
    if day > config.exhaustion_day {
        drag += config.exhaustion_drag;
    }
    drag
}

pub fn economy_system(
    mut state: ResMut<NationState>,
    config: Res<SimulationConfig>,
    clock: Res<DayClock>,
) {
    let dynamics = &config.dynamics;
    let drag = economic_drag(&state, clock.day, dynamics);
    state.stats.economy -= drag;

    let accrued = state.stats.infection as f64 * dynamics.cost_per_infection;
    state.cumulative_cost += accrued;
}
