//! Terminal outcomes and the ordered rule list that decides them.

use serde::{Deserialize, Serialize};

use crate::simulation::{EndingConfig, NationState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    Extinction,
    EconomicCollapse,
    GenerationalTrauma,
    CascadingFailure,
    ControlledEradication,
    UncertainFuture,
}

impl Ending {
    pub fn label(&self) -> &'static str {
        match self {
            Ending::Extinction => "HUMAN EXTINCTION",
            Ending::EconomicCollapse => "COUNTRY COLLAPSE",
            Ending::GenerationalTrauma => "GENERATIONAL TRAUMA",
            Ending::CascadingFailure => "EXTINCTION (CASCADING FAILURE)",
            Ending::ControlledEradication => "CONTROLLED ERADICATION",
            Ending::UncertainFuture => "UNCERTAIN FUTURE",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Ending::Extinction => "There is no one left to bury the dead. The virus won.",
            Ending::EconomicCollapse => {
                "The nation dissolves into warring tribes. Starvation claims those the virus missed."
            }
            Ending::GenerationalTrauma => {
                "The government falls. The virus is contained, but the survivors will never \
                 trust authority again. History will judge you."
            }
            Ending::CascadingFailure => {
                "Hospitals became incubation centers. The viral load is too high for species survival."
            }
            Ending::ControlledEradication => {
                "We have survived. The cost was high, but humanity endures with its soul intact."
            }
            Ending::UncertainFuture => {
                "The worst is over. The survivors emerge into a quiet, broken world."
            }
        }
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, Ending::ControlledEradication)
    }
}

/// First matching rule wins. Expects a clamped state.
pub fn evaluate_ending(state: &NationState, day: u32, config: &EndingConfig) -> Option<Ending> {
    if day < config.min_day {
        return None;
    }

    let stats = &state.stats;
    if stats.population < config.extinction_floor {
        return Some(Ending::Extinction);
    }
    if stats.economy < config.economic_floor {
        return Some(Ending::EconomicCollapse);
    }
    if stats.trust < config.trust_floor {
        return Some(Ending::GenerationalTrauma);
    }
    if stats.healthcare_load >= config.cascade_load && stats.infection > config.cascade_infection {
        return Some(Ending::CascadingFailure);
    }
    if stats.population > config.victory_population
        && stats.economy > config.victory_economy
        && stats.trust > config.victory_trust
        && stats.infection < config.victory_infection
    {
        return Some(Ending::ControlledEradication);
    }
    if day > config.max_day {
        return Some(Ending::UncertainFuture);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(population: f32, economy: f32, trust: f32, infection: f32, load: f32) -> NationState {
        let mut state = NationState::default();
        state.stats.population = population;
        state.stats.economy = economy;
        state.stats.trust = trust;
        state.stats.infection = infection;
        state.stats.healthcare_load = load;
        state
    }

    #[test]
    fn nothing_ends_before_the_minimum_day() {
        let config = EndingConfig::default();
        let doomed = state(0.0, 0.0, 0.0, 1.0, 1.0);
        assert_eq!(evaluate_ending(&doomed, 15, &config), None);
        assert_eq!(evaluate_ending(&doomed, 16, &config), Some(Ending::Extinction));
    }

    #[test]
    fn extinction_outranks_economic_collapse() {
        let config = EndingConfig::default();
        let both = state(0.10, 0.10, 0.70, 0.20, 0.40);
        assert_eq!(evaluate_ending(&both, 18, &config), Some(Ending::Extinction));

        let broke = state(0.50, 0.10, 0.10, 0.20, 0.40);
        assert_eq!(evaluate_ending(&broke, 18, &config), Some(Ending::EconomicCollapse));
    }

    #[test]
    fn cascade_needs_saturated_hospitals() {
        let config = EndingConfig::default();
        let saturated = state(0.60, 0.50, 0.50, 0.60, 1.0);
        assert_eq!(evaluate_ending(&saturated, 17, &config), Some(Ending::CascadingFailure));

        let strained = state(0.60, 0.50, 0.50, 0.60, 0.99);
        assert_eq!(evaluate_ending(&strained, 17, &config), None);
    }

    #[test]
    fn eradication_and_open_ending() {
        let config = EndingConfig::default();
        let clean = state(0.80, 0.60, 0.70, 0.05, 0.20);
        assert_eq!(evaluate_ending(&clean, 16, &config), Some(Ending::ControlledEradication));

        let lingering = state(0.80, 0.60, 0.40, 0.30, 0.50);
        assert_eq!(evaluate_ending(&lingering, 25, &config), None);
        assert_eq!(evaluate_ending(&lingering, 26, &config), Some(Ending::UncertainFuture));
    }
}
