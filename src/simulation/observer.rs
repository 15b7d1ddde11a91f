//! Turn results and the shared snapshot read by the dashboard.

use serde::{Deserialize, Serialize};

use crate::simulation::error::Result;
use crate::simulation::{
    Advisor, ChronicleEntry, Counter, Ending, NationState, ScenarioKind, StatHistory, TurnPhase,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorStanding {
    pub advisor: Advisor,
    pub loyalty: f32,
}

/// Clamped numbers as they stood when the result was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub day: u32,
    pub population: f32,
    pub economy: f32,
    pub trust: f32,
    pub infection: f32,
    pub healthcare_load: f32,
    pub cumulative_cost: f64,
    pub cure_progress: i32,
    pub lethality: f32,
    pub infectivity: f32,
    pub advisors: Vec<AdvisorStanding>,
    pub pending_effects: usize,
}

impl StatusReport {
    pub fn capture(day: u32, state: &NationState, pending_effects: usize) -> Self {
        Self {
            day,
            population: state.stats.population,
            economy: state.stats.economy,
            trust: state.stats.trust,
            infection: state.stats.infection,
            healthcare_load: state.stats.healthcare_load,
            cumulative_cost: state.cumulative_cost,
            cure_progress: state.flags.counter(Counter::CureProgress),
            lethality: state.virus.lethality,
            infectivity: state.virus.infectivity,
            advisors: state
                .advisors
                .iter()
                .map(|(advisor, loyalty)| AdvisorStanding { advisor, loyalty })
                .collect(),
            pending_effects,
        }
    }
}

/// What one call to `advance_turn` hands back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    pub day: u32,
    pub kind: Option<ScenarioKind>,
    pub headline: String,
    /// Scenario prose, or the ending text once terminal
    pub body: String,
    /// Full display text: status report, scenario text and numbered choices,
    /// or the ending banner.
    pub text: String,
    pub choices: Vec<String>,
    /// Zero exactly when `ended` is true.
    pub choice_count: usize,
    pub ended: bool,
    pub critical: bool,
    pub interruption: bool,
    pub ending: Option<Ending>,
    pub ending_text: Option<String>,
    /// Echo of the choice applied by this call
    pub action: Option<String>,
    /// Set when the submitted index was rejected
    pub notice: Option<String>,
    pub report: StatusReport,
}

impl TurnResult {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ObserverSnapshot {
    pub day: u32,
    pub phase: TurnPhase,
    pub critical: bool,
    pub report: Option<StatusReport>,
    pub latest: Option<TurnResult>,
    pub history: StatHistory,
    pub chronicle: Vec<ChronicleEntry>,
}

impl ObserverSnapshot {
    pub fn new() -> Self {
        Self {
            day: 1,
            phase: TurnPhase::AwaitingChoice,
            critical: false,
            report: None,
            latest: None,
            history: StatHistory::default(),
            chronicle: Vec::new(),
        }
    }

    pub fn update(
        &mut self,
        result: &TurnResult,
        phase: TurnPhase,
        history: &StatHistory,
        chronicle: Vec<ChronicleEntry>,
    ) {
        self.day = result.day;
        self.phase = phase;
        self.critical = result.critical;
        self.report = Some(result.report.clone());
        self.latest = Some(result.clone());
        self.history = history.clone();
        self.chronicle = chronicle;
    }
}

impl Default for ObserverSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
