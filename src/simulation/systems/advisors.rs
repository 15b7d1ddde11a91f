//! Cabinet loyalty drift and walkouts.

use bevy_ecs::prelude::*;
use tracing::debug;

use crate::simulation::{
    Advisor, NationState, PendingUltimatums, SimulationConfig, flag_loyalty_collapse,
};

/// Whether the advisor's portfolio is in crisis today.
pub fn portfolio_in_crisis(advisor: Advisor, state: &NationState) -> bool {
    let stats = &state.stats;
    match advisor {
        Advisor::ChiefMedicalOfficer => stats.healthcare_load > 0.80 || stats.infection > 0.40,
        Advisor::FinanceMinister => stats.economy < 0.40,
        Advisor::DefenseChief => stats.trust < 0.35,
    }
}

pub fn advisor_system(
    mut state: ResMut<NationState>,
    mut pending: ResMut<PendingUltimatums>,
    config: Res<SimulationConfig>,
) {
    let dynamics = &config.dynamics;
    for advisor in Advisor::ALL {
        let shift = if portfolio_in_crisis(advisor, &state) {
            -dynamics.loyalty_drift
        } else {
            dynamics.loyalty_recovery
        };
        state.advisors.adjust(advisor, shift);
    }
    state.clamp();

    for advisor in flag_loyalty_collapse(&mut state, &mut pending, config.selection.loyalty_floor) {
        debug!("{} loyalty collapsed; ultimatum queued", advisor.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crisis_follows_each_portfolio() {
        let mut state = NationState::default();
        assert!(!Advisor::ALL
            .iter()
            .any(|advisor| portfolio_in_crisis(*advisor, &state)));

        state.stats.economy = 0.3;
        assert!(portfolio_in_crisis(Advisor::FinanceMinister, &state));
        assert!(!portfolio_in_crisis(Advisor::DefenseChief, &state));
    }
}
