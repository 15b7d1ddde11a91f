use bevy_ecs::prelude::*;

use crate::simulation::{DynamicsConfig, Flag, NationState, SimulationConfig};

pub fn trust_erosion(state: &NationState, config: &DynamicsConfig) -> f32 {
    let mut erosion = config.trust_decay;
    if state.stats.economy < config.weak_economy_threshold {
        erosion += config.weak_economy_penalty;
    }
    if state.stats.population < config.population_loss_threshold {
        erosion += config.population_loss_penalty;
    }
    if state.stats.healthcare_load > config.overload_threshold {
        erosion += config.overload_penalty;
    }
    if state.flags.is_set(Flag::CensoredMedia) {
        erosion += config.censorship_penalty;
    }
    erosion
}

pub fn trust_system(mut state: ResMut<NationState>, config: Res<SimulationConfig>) {
    let erosion = trust_erosion(&state, &config.dynamics);
    state.stats.trust -= erosion;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_additive() {
        let config = DynamicsConfig::default();
        let mut state = NationState::default();
        state.stats.economy = 0.1;
        state.stats.population = 0.5;
        state.stats.healthcare_load = 1.0;
        let expected = config.trust_decay
            + config.weak_economy_penalty
            + config.population_loss_penalty
            + config.overload_penalty;
        assert!((trust_erosion(&state, &config) - expected).abs() < 1e-6);
    }
}
