use bevy_ecs::prelude::*;

use crate::simulation::{DynamicsConfig, NationState, SimulationConfig};

/// Share of the population lost today. Hospital collapse multiplies it.
pub fn daily_mortality(state: &NationState, config: &DynamicsConfig) -> f32 {
    let mut mortality = (config.base_mortality
        + config.infection_mortality * state.stats.infection)
        * state.virus.lethality;
    if state.stats.healthcare_load > config.collapse_threshold {
        mortality *= config.collapse_multiplier;
    }
    mortality.max(0.0)
}

pub fn demography_system(mut state: ResMut<NationState>, config: Res<SimulationConfig>) {
    let mortality = daily_mortality(&state, &config.dynamics);
    state.stats.population -= mortality;
}
