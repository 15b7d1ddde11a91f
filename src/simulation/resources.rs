//! Session resources: the numeric state of the nation and the narrative cursors.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use bevy_ecs::prelude::Resource;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::simulation::{Advisor, ArcId, Ending, InitialConditions, Scenario, Stat};

pub const LOYALTY_MAX: f32 = 100.0;

/// Clamp into `[0, 1]`, mapping NaN to the floor so the clamp stays total.
pub fn unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub population: f32,
    pub economy: f32,
    pub trust: f32,
    pub infection: f32,
    pub healthcare_load: f32,
}

impl Stats {
    pub fn get(&self, stat: Stat) -> f32 {
        match stat {
            Stat::Population => self.population,
            Stat::Economy => self.economy,
            Stat::Trust => self.trust,
            Stat::Infection => self.infection,
            Stat::HealthcareLoad => self.healthcare_load,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut f32 {
        match stat {
            Stat::Population => &mut self.population,
            Stat::Economy => &mut self.economy,
            Stat::Trust => &mut self.trust,
            Stat::Infection => &mut self.infection,
            Stat::HealthcareLoad => &mut self.healthcare_load,
        }
    }

    pub fn is_bounded(&self) -> bool {
        Stat::ALL
            .iter()
            .all(|stat| (0.0..=1.0).contains(&self.get(*stat)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorBoard {
    loyalty: BTreeMap<Advisor, f32>,
}

impl AdvisorBoard {
    pub fn new(starting_loyalty: f32) -> Self {
        Self {
            loyalty: Advisor::ALL
                .iter()
                .map(|advisor| (*advisor, starting_loyalty))
                .collect(),
        }
    }

    pub fn loyalty(&self, advisor: Advisor) -> f32 {
        self.loyalty.get(&advisor).copied().unwrap_or(0.0)
    }

    pub fn adjust(&mut self, advisor: Advisor, delta: f32) {
        *self.loyalty.entry(advisor).or_insert(0.0) += delta;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Advisor, f32)> + '_ {
        self.loyalty.iter().map(|(advisor, value)| (*advisor, *value))
    }

    fn clamp(&mut self) {
        for value in self.loyalty.values_mut() {
            *value = if value.is_nan() {
                0.0
            } else {
                value.clamp(0.0, LOYALTY_MAX)
            };
        }
    }
}

impl Default for AdvisorBoard {
    fn default() -> Self {
        Self::new(InitialConditions::default().advisor_loyalty)
    }
}

/// Multipliers on spread and mortality; unbounded above, never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VirusProfile {
    pub lethality: f32,
    pub infectivity: f32,
}

impl Default for VirusProfile {
    fn default() -> Self {
        Self {
            lethality: 1.0,
            infectivity: 1.0,
        }
    }
}

/// One-time narrative facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    Lockdown,
    Militarized,
    CensoredMedia,
    SoldPatents,
    WeaponizedQuarantine,
    SacrificedRegion,
    Sterility,
    AdvisorWalkout(Advisor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    CureProgress,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    switches: BTreeSet<Flag>,
    counters: BTreeMap<Counter, i32>,
}

impl Flags {
    pub fn is_set(&self, flag: Flag) -> bool {
        self.switches.contains(&flag)
    }

    /// Returns `true` only the first time the flag is raised.
    pub fn set_once(&mut self, flag: Flag) -> bool {
        self.switches.insert(flag)
    }

    pub fn clear(&mut self, flag: Flag) {
        self.switches.remove(&flag);
    }

    pub fn counter(&self, counter: Counter) -> i32 {
        self.counters.get(&counter).copied().unwrap_or(0)
    }

    pub fn add(&mut self, counter: Counter, delta: i32) {
        let entry = self.counters.entry(counter).or_insert(0);
        *entry = entry.saturating_add(delta);
    }

    pub fn switches(&self) -> impl Iterator<Item = Flag> + '_ {
        self.switches.iter().copied()
    }
}

/// The whole numeric world of one session.
#[derive(Debug, Clone, PartialEq, Resource, Serialize, Deserialize)]
pub struct NationState {
    pub stats: Stats,
    pub advisors: AdvisorBoard,
    pub virus: VirusProfile,
    pub cumulative_cost: f64,
    pub flags: Flags,
}

impl NationState {
    pub fn new(initial: &InitialConditions) -> Self {
        let mut state = Self {
            stats: Stats {
                population: initial.population,
                economy: initial.economy,
                trust: initial.trust,
                infection: initial.infection,
                healthcare_load: initial.healthcare_load,
            },
            advisors: AdvisorBoard::new(initial.advisor_loyalty),
            virus: VirusProfile {
                lethality: initial.lethality,
                infectivity: initial.infectivity,
            },
            cumulative_cost: 0.0,
            flags: Flags::default(),
        };
        state.clamp();
        state
    }

    pub fn stat(&self, stat: Stat) -> f32 {
        self.stats.get(stat)
    }

    /// Idempotent and total. Must run at the end of every mutation pathway.
    pub fn clamp(&mut self) {
        for stat in Stat::ALL {
            let value = self.stats.get_mut(stat);
            *value = unit(*value);
        }
        self.advisors.clamp();
        self.virus.lethality = non_negative(self.virus.lethality);
        self.virus.infectivity = non_negative(self.virus.infectivity);
        if !self.cumulative_cost.is_finite() {
            self.cumulative_cost = 0.0;
        }
    }
}

impl Default for NationState {
    fn default() -> Self {
        Self::new(&InitialConditions::default())
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}

#[derive(Debug, Clone, Resource, Serialize, Deserialize)]
pub struct DayClock {
    pub day: u32,
}

impl Default for DayClock {
    fn default() -> Self {
        Self { day: 1 }
    }
}

/// The only source of randomness in a session.
#[derive(Resource)]
pub struct SessionRng(pub SmallRng);

impl SessionRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

/// Population warning with hysteresis.
#[derive(Debug, Clone, Default, Resource, Serialize, Deserialize)]
pub struct CriticalMonitor {
    pub active: bool,
}

impl CriticalMonitor {
    pub fn observe(&mut self, population: f32, enter_below: f32, exit_at: f32) -> bool {
        if population < enter_below {
            self.active = true;
        } else if population >= exit_at {
            self.active = false;
        }
        self.active
    }
}

/// Per-day series for charting.
#[derive(Debug, Clone, Default, Resource, Serialize, Deserialize, PartialEq)]
pub struct StatHistory {
    pub day: Vec<u32>,
    pub population: Vec<f32>,
    pub economy: Vec<f32>,
    pub trust: Vec<f32>,
    pub infection: Vec<f32>,
    pub healthcare_load: Vec<f32>,
    pub cost: Vec<f64>,
}

impl StatHistory {
    pub fn record(&mut self, day: u32, state: &NationState) {
        self.day.push(day);
        self.population.push(state.stats.population);
        self.economy.push(state.stats.economy);
        self.trust.push(state.stats.trust);
        self.infection.push(state.stats.infection);
        self.healthcare_load.push(state.stats.healthcare_load);
        self.cost.push(state.cumulative_cost);
    }

    pub fn series(&self, stat: Stat) -> &[f32] {
        match stat {
            Stat::Population => &self.population,
            Stat::Economy => &self.economy,
            Stat::Trust => &self.trust,
            Stat::Infection => &self.infection,
            Stat::HealthcareLoad => &self.healthcare_load,
        }
    }

    pub fn len(&self) -> usize {
        self.day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.day.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource, Serialize, Deserialize)]
#[serde(tag = "phase", content = "ending", rename_all = "snake_case")]
pub enum TurnPhase {
    AwaitingChoice,
    InterruptionActive,
    Ended(Ending),
}

/// The narrative cursor: what is on screen and what the next valid index applies to.
#[derive(Debug, Clone, Default, Resource)]
pub struct TurnCursor {
    pub current: Option<Scenario>,
    pub interruption: Option<Scenario>,
    /// Day on which the interruption roll last ran
    pub rolled_day: Option<u32>,
}

impl TurnCursor {
    pub fn active(&self) -> Option<&Scenario> {
        self.interruption.as_ref().or(self.current.as_ref())
    }
}

#[derive(Debug, Clone, Resource)]
pub struct ArcCursor {
    pub arc: ArcId,
    pub progress: usize,
    pub visited: BTreeSet<ArcId>,
}

impl Default for ArcCursor {
    fn default() -> Self {
        Self {
            arc: ArcId::Main,
            progress: 0,
            visited: BTreeSet::new(),
        }
    }
}

/// Ids already drawn from the one-shot pools.
#[derive(Debug, Clone, Default, Resource)]
pub struct UsedContent {
    pub balancing: BTreeSet<String>,
    pub filler: BTreeSet<String>,
    pub interruptions: BTreeSet<String>,
}

/// Advisors whose loyalty collapsed and who still await their ultimatum.
#[derive(Debug, Clone, Default, Resource)]
pub struct PendingUltimatums(pub VecDeque<Advisor>);

/// Raise a one-time ultimatum for every advisor at or below `floor`.
pub fn flag_loyalty_collapse(
    state: &mut NationState,
    pending: &mut PendingUltimatums,
    floor: f32,
) -> Vec<Advisor> {
    let mut raised = Vec::new();
    for advisor in Advisor::ALL {
        if state.advisors.loyalty(advisor) <= floor
            && state.flags.set_once(Flag::AdvisorWalkout(advisor))
        {
            pending.0.push_back(advisor);
            raised.push(advisor);
        }
    }
    raised
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_is_idempotent() {
        let mut state = NationState::default();
        state.stats.infection = 1.7;
        state.stats.trust = -0.4;
        state.stats.economy = f32::NAN;
        state.advisors.adjust(Advisor::DefenseChief, 90.0);
        state.virus.lethality = -2.0;

        state.clamp();
        let once = state.clone();
        state.clamp();

        assert_eq!(state, once);
        assert_eq!(state.stats.infection, 1.0);
        assert_eq!(state.stats.trust, 0.0);
        assert_eq!(state.stats.economy, 0.0);
        assert_eq!(state.advisors.loyalty(Advisor::DefenseChief), 100.0);
        assert_eq!(state.virus.lethality, 0.0);
        assert!(state.stats.is_bounded());
    }

    #[test]
    fn loyalty_uses_its_own_range() {
        let mut state = NationState::default();
        state.advisors.adjust(Advisor::FinanceMinister, -500.0);
        state.clamp();
        assert_eq!(state.advisors.loyalty(Advisor::FinanceMinister), 0.0);
        assert_eq!(state.advisors.loyalty(Advisor::ChiefMedicalOfficer), 70.0);
    }

    #[test]
    fn flags_are_write_once_effective() {
        let mut flags = Flags::default();
        assert!(flags.set_once(Flag::Lockdown));
        assert!(!flags.set_once(Flag::Lockdown));
        assert!(flags.is_set(Flag::Lockdown));

        flags.add(Counter::CureProgress, 50);
        flags.add(Counter::CureProgress, 25);
        assert_eq!(flags.counter(Counter::CureProgress), 75);
    }

    #[test]
    fn critical_warning_has_hysteresis() {
        let mut monitor = CriticalMonitor::default();
        assert!(!monitor.observe(0.80, 0.70, 0.75));
        assert!(monitor.observe(0.69, 0.70, 0.75));
        assert!(monitor.observe(0.72, 0.70, 0.75));
        assert!(monitor.observe(0.7499, 0.70, 0.75));
        assert!(!monitor.observe(0.75, 0.70, 0.75));
        assert!(!monitor.observe(0.72, 0.70, 0.75));
    }

    #[test]
    fn loyalty_collapse_fires_once_per_advisor() {
        let mut state = NationState::default();
        let mut pending = PendingUltimatums::default();
        state.advisors.adjust(Advisor::FinanceMinister, -60.0);

        let raised = flag_loyalty_collapse(&mut state, &mut pending, 15.0);
        assert_eq!(raised, vec![Advisor::FinanceMinister]);
        assert!(flag_loyalty_collapse(&mut state, &mut pending, 15.0).is_empty());
        assert_eq!(pending.0.len(), 1);
        assert!(state.flags.is_set(Flag::AdvisorWalkout(Advisor::FinanceMinister)));
    }
}
