//! Session configuration with documented tuning constants
//!
//! Every threshold the dynamics engine, the scenario selector and the ending
//! evaluator read lives here. All sections deserialize with defaults so a
//! TOML file only needs to name the values it overrides.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::simulation::error::{DirectiveError, Result};

#[derive(Debug, Clone, Resource, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the session RNG. `None` means the caller picks one.
    pub seed: Option<u64>,
    pub initial: InitialConditions,
    pub dynamics: DynamicsConfig,
    pub selection: SelectionConfig,
    pub endings: EndingConfig,
    pub critical: CriticalConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial: InitialConditions::default(),
            dynamics: DynamicsConfig::default(),
            selection: SelectionConfig::default(),
            endings: EndingConfig::default(),
            critical: CriticalConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InitialConditions {
    pub population: f32,
    pub economy: f32,
    pub trust: f32,
    pub infection: f32,
    pub healthcare_load: f32,
    /// Starting loyalty of every advisor (0..=100)
    pub advisor_loyalty: f32,
    pub lethality: f32,
    pub infectivity: f32,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            population: 1.0,
            economy: 0.80,
            trust: 0.70,
            infection: 0.05,
            healthcare_load: 0.10,
            advisor_loyalty: 70.0,
            lethality: 1.0,
            infectivity: 1.0,
        }
    }
}

/// Coefficients of the per-day model.
///
/// Infection follows `i += r * i * (1 - i) + noise`, so `base_spread` is the
/// daily logistic rate before modifiers. With the defaults an untreated
/// outbreak starting at 5% passes 50% around day 18.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DynamicsConfig {
    // === CONTAGION ===
    pub base_spread: f32,
    /// Subtracted from the spread rate while a lockdown is in force
    pub lockdown_relief: f32,
    pub low_trust_threshold: f32,
    /// Added to the spread rate when trust sits below `low_trust_threshold`
    pub low_trust_boost: f32,
    pub saturated_load_threshold: f32,
    /// Hospitals past saturation become spread centers
    pub saturated_load_boost: f32,
    /// Fraction of the spread rate removed at 100 cure progress
    pub cure_relief: f32,
    /// Width of the symmetric noise window; draws land in `[-s/2, s/2]`
    pub noise_scale: f32,

    // === HEALTHCARE ===
    /// Load target per unit of infection
    pub load_per_infection: f32,
    /// Exponential smoothing factor toward the target (0..1)
    pub load_smoothing: f32,
    /// Constant daily worker fatigue
    pub load_fatigue: f32,

    // === ECONOMY ===
    pub economy_decay: f32,
    pub infection_drag_threshold: f32,
    pub infection_drag: f32,
    pub low_trust_drag: f32,
    pub lockdown_drag: f32,
    /// Day after which late-game exhaustion kicks in
    pub exhaustion_day: u32,
    pub exhaustion_drag: f32,
    /// Cost accrued per day per unit of infection
    pub cost_per_infection: f64,

    // === MORTALITY ===
    pub base_mortality: f32,
    pub infection_mortality: f32,
    /// Load above which hospital collapse multiplies mortality
    pub collapse_threshold: f32,
    pub collapse_multiplier: f32,

    // === TRUST ===
    pub trust_decay: f32,
    pub weak_economy_threshold: f32,
    pub weak_economy_penalty: f32,
    pub population_loss_threshold: f32,
    pub population_loss_penalty: f32,
    pub overload_threshold: f32,
    pub overload_penalty: f32,
    pub censorship_penalty: f32,

    // === ADVISORS ===
    /// Loyalty lost per day while an advisor's portfolio is in crisis
    pub loyalty_drift: f32,
    /// Loyalty regained per day otherwise
    pub loyalty_recovery: f32,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            base_spread: 0.16,
            lockdown_relief: 0.07,
            low_trust_threshold: 0.30,
            low_trust_boost: 0.05,
            saturated_load_threshold: 0.90,
            saturated_load_boost: 0.04,
            cure_relief: 0.6,
            noise_scale: 0.01,

            load_per_infection: 1.3,
            load_smoothing: 0.35,
            load_fatigue: 0.005,

            economy_decay: 0.008,
            infection_drag_threshold: 0.30,
            infection_drag: 0.015,
            low_trust_drag: 0.015,
            lockdown_drag: 0.01,
            exhaustion_day: 20,
            exhaustion_drag: 0.01,
            cost_per_infection: 50.0,

            base_mortality: 0.0015,
            infection_mortality: 0.02,
            collapse_threshold: 0.90,
            collapse_multiplier: 3.0,

            trust_decay: 0.005,
            weak_economy_threshold: 0.30,
            weak_economy_penalty: 0.02,
            population_loss_threshold: 0.60,
            population_loss_penalty: 0.02,
            overload_threshold: 0.95,
            overload_penalty: 0.03,
            censorship_penalty: 0.005,

            loyalty_drift: 2.0,
            loyalty_recovery: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    /// Probability that an interruption fires on an eligible day
    pub interruption_chance: f64,
    /// First day (inclusive) on which interruptions may fire
    pub interruption_first_day: u32,
    /// Last day (inclusive) on which interruptions may fire
    pub interruption_last_day: u32,
    /// Loyalty at or below which an advisor issues an ultimatum
    pub loyalty_floor: f32,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            interruption_chance: 0.25,
            interruption_first_day: 3,
            interruption_last_day: 22,
            loyalty_floor: 15.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EndingConfig {
    /// No ending fires before this day, whatever the stats say
    pub min_day: u32,
    /// Past this day the session closes with the open ending
    pub max_day: u32,
    pub extinction_floor: f32,
    pub economic_floor: f32,
    pub trust_floor: f32,
    pub cascade_load: f32,
    pub cascade_infection: f32,
    pub victory_population: f32,
    pub victory_economy: f32,
    pub victory_trust: f32,
    pub victory_infection: f32,
}

impl Default for EndingConfig {
    fn default() -> Self {
        Self {
            min_day: 16,
            max_day: 25,
            extinction_floor: 0.15,
            economic_floor: 0.20,
            trust_floor: 0.20,
            cascade_load: 1.0,
            cascade_infection: 0.50,
            victory_population: 0.30,
            victory_economy: 0.30,
            victory_trust: 0.55,
            victory_infection: 0.10,
        }
    }
}

/// Hysteresis band for the critical warning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CriticalConfig {
    /// Population below which the warning switches on
    pub enter_below: f32,
    /// Population at or above which the warning switches off again
    pub exit_at: f32,
}

impl Default for CriticalConfig {
    fn default() -> Self {
        Self {
            enter_below: 0.70,
            exit_at: 0.75,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.critical.exit_at <= self.critical.enter_below {
            return Err(DirectiveError::InvalidConfig(format!(
                "critical.exit_at ({}) must be above critical.enter_below ({})",
                self.critical.exit_at, self.critical.enter_below
            )));
        }

        if !(0.0..=1.0).contains(&self.selection.interruption_chance) {
            return Err(DirectiveError::InvalidConfig(format!(
                "selection.interruption_chance ({}) must lie in [0, 1]",
                self.selection.interruption_chance
            )));
        }

        if self.selection.interruption_first_day > self.selection.interruption_last_day {
            return Err(DirectiveError::InvalidConfig(format!(
                "interruption window is empty ({}..={})",
                self.selection.interruption_first_day, self.selection.interruption_last_day
            )));
        }

        if self.endings.min_day > self.endings.max_day {
            return Err(DirectiveError::InvalidConfig(format!(
                "endings.min_day ({}) should be <= endings.max_day ({})",
                self.endings.min_day, self.endings.max_day
            )));
        }

        if !(0.0..=1.0).contains(&self.dynamics.load_smoothing) {
            return Err(DirectiveError::InvalidConfig(
                "dynamics.load_smoothing must lie in [0, 1]".into(),
            ));
        }

        if !self.dynamics.noise_scale.is_finite() || self.dynamics.noise_scale < 0.0 {
            return Err(DirectiveError::InvalidConfig(format!(
                "dynamics.noise_scale ({}) must be finite and non-negative",
                self.dynamics.noise_scale
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SimulationConfig::from_toml_str(
            r#"
            seed = 7

            [selection]
            interruption_chance = 0.5

            [endings]
            max_day = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.selection.interruption_chance, 0.5);
        assert_eq!(config.selection.loyalty_floor, 15.0);
        assert_eq!(config.endings.max_day, 30);
        assert_eq!(config.endings.min_day, 16);
        assert_eq!(config.initial, InitialConditions::default());
    }

    #[test]
    fn inverted_hysteresis_band_is_rejected() {
        let result = SimulationConfig::from_toml_str(
            r#"
            [critical]
            enter_below = 0.8
            exit_at = 0.7
            "#,
        );
        assert!(matches!(result, Err(DirectiveError::InvalidConfig(_))));
    }

    #[test]
    fn unbounded_noise_scale_is_rejected() {
        let result = SimulationConfig::from_toml_str("[dynamics]\nnoise_scale = inf\n");
        assert!(matches!(result, Err(DirectiveError::InvalidConfig(_))));

        let result = SimulationConfig::from_toml_str("[dynamics]\nnoise_scale = nan\n");
        assert!(matches!(result, Err(DirectiveError::InvalidConfig(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = SimulationConfig::from_toml_str("seed = \"soon\"");
        assert!(matches!(result, Err(DirectiveError::ConfigParse(_))));
    }
}
