//! Infection spread and hospital pressure.

use bevy_ecs::prelude::*;
use rand::Rng;

use crate::simulation::{Counter, DynamicsConfig, Flag, NationState, SessionRng, SimulationConfig};

/// Daily logistic growth rate after flag, trust, load and cure modifiers.
pub fn spread_rate(state: &NationState, config: &DynamicsConfig) -> f32 {
    let mut rate = config.base_spread;
    if state.flags.is_set(Flag::Lockdown) {
        rate -= config.lockdown_relief;
    }
    if state.stats.trust < config.low_trust_threshold {
        rate += config.low_trust_boost;
    }
    if state.stats.healthcare_load > config.saturated_load_threshold {
        rate += config.saturated_load_boost;
    }

    let cure = (state.flags.counter(Counter::CureProgress) as f32 / 100.0).clamp(0.0, 1.0);
    rate *= 1.0 - config.cure_relief * cure;
    (rate * state.virus.infectivity).max(0.0)
}

/// Uniform draw over `[-scale/2, scale/2]`; a zero or non-finite scale yields no noise.
pub fn draw_noise<R: Rng + ?Sized>(rng: &mut R, scale: f32) -> f32 {
    let half = scale / 2.0;
    if half.is_finite() && half > 0.0 {
        rng.gen_range(-half..=half)
    } else {
        0.0
    }
}

pub fn contagion_system(
    mut state: ResMut<NationState>,
    config: Res<SimulationConfig>,
    mut rng: ResMut<SessionRng>,
) {
    let dynamics = &config.dynamics;
    let rate = spread_rate(&state, dynamics);

    let noise = draw_noise(&mut rng.0, dynamics.noise_scale);

    let infection = state.stats.infection;
    state.stats.infection = infection + rate * infection * (1.0 - infection) + noise;

    // Hospitals relax toward a load proportional to the new infection level
    let target = state.stats.infection * dynamics.load_per_infection;
    let load = state.stats.healthcare_load;
    state.stats.healthcare_load =
        load + (target - load) * dynamics.load_smoothing + dynamics.load_fatigue;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn noise_stays_inside_its_window() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..200 {
            let noise = draw_noise(&mut rng, 0.02);
            assert!((-0.01..=0.01).contains(&noise));
        }
    }

    #[test]
    fn degenerate_noise_scale_draws_nothing() {
        let mut rng = SmallRng::seed_from_u64(12);
        for scale in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN, 0.0, -1.0] {
            assert_eq!(draw_noise(&mut rng, scale), 0.0);
        }
    }

    #[test]
    fn lockdown_slows_and_low_trust_speeds_spread() {
        let config = DynamicsConfig::default();
        let mut state = NationState::default();
        let baseline = spread_rate(&state, &config);

        state.flags.set_once(Flag::Lockdown);
        assert!(spread_rate(&state, &config) < baseline);

        state.flags.clear(Flag::Lockdown);
        state.stats.trust = 0.1;
        assert!(spread_rate(&state, &config) > baseline);
    }

    #[test]
    fn cure_progress_down_weights_spread() {
        let config = DynamicsConfig::default();
        let mut state = NationState::default();
        let baseline = spread_rate(&state, &config);
        state.flags.add(Counter::CureProgress, 100);
        let cured = spread_rate(&state, &config);
        assert!((cured - baseline * (1.0 - config.cure_relief)).abs() < 1e-6);
    }

    #[test]
    fn spread_rate_never_goes_negative() {
        let config = DynamicsConfig {
            lockdown_relief: 1.0,
            ..DynamicsConfig::default()
        };
        let mut state = NationState::default();
        state.flags.set_once(Flag::Lockdown);
        assert_eq!(spread_rate(&state, &config), 0.0);
    }
}
