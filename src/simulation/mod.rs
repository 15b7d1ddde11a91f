use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{ExecutorKind, Schedule};
use tracing::{info, warn};

pub mod catalog;
pub mod config;
pub mod content;
pub mod effects;
pub mod endings;
pub mod error;
pub mod events;
pub mod localization;
pub mod nation;
pub mod observer;
pub mod resources;
pub mod selector;
pub mod systems;

pub use catalog::*;
pub use config::*;
pub use effects::*;
pub use endings::*;
pub use error::DirectiveError;
pub use events::*;
pub use localization::*;
pub use nation::*;
pub use observer::*;
pub use resources::*;
pub use selector::*;
pub use systems::*;

const ENDING_RULE: &str = "================================";

/// One play session: every piece of mutable state lives in `world`.
pub struct SimulationWorld {
    world: World,
    dynamics: Schedule,
    narrative: Schedule,
    seed: u64,
    observer: Option<Arc<RwLock<ObserverSnapshot>>>,
}

impl SimulationWorld {
    /// Uses `config.seed`, or a fresh entropy seed readable through [`Self::seed`].
    pub fn new(config: SimulationConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        Self::with_catalog(config, ContentCatalog::standard(), seed)
    }

    pub fn with_seed(config: SimulationConfig, seed: u64) -> Self {
        Self::with_catalog(config, ContentCatalog::standard(), seed)
    }

    pub fn with_catalog(config: SimulationConfig, catalog: ContentCatalog, seed: u64) -> Self {
        let state = NationState::new(&config.initial);
        let mut history = StatHistory::default();
        history.record(1, &state);

        let mut world = World::default();
        world.insert_resource(config);
        world.insert_resource(catalog);
        world.insert_resource(state);
        world.insert_resource(history);
        world.insert_resource(SessionRng::seeded(seed));
        world.insert_resource(DayClock::default());
        world.insert_resource(DelayedEffectQueue::default());
        world.insert_resource(CriticalMonitor::default());
        world.insert_resource(TurnPhase::AwaitingChoice);
        world.insert_resource(TurnCursor::default());
        world.insert_resource(ArcCursor::default());
        world.insert_resource(UsedContent::default());
        world.insert_resource(PendingUltimatums::default());
        world.insert_resource(Chronicle::default());

        let mut dynamics = Schedule::default();
        dynamics.set_executor_kind(ExecutorKind::SingleThreaded);
        dynamics.add_systems(
            (
                contagion_system,
                economy_system,
                demography_system,
                trust_system,
                advisor_system,
                delayed_effect_system,
                clamp_system,
                history_system,
                logging_system,
            )
                .chain(),
        );

        let mut narrative = Schedule::default();
        narrative.set_executor_kind(ExecutorKind::SingleThreaded);
        narrative.add_systems((scenario_selection_system, interruption_system).chain());

        Self {
            world,
            dynamics,
            narrative,
            seed,
            observer: None,
        }
    }

    /// Publish a snapshot into `observer` after every turn.
    pub fn with_observer(mut self, observer: Arc<RwLock<ObserverSnapshot>>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Advance the session by one input.
    ///
    /// `None` primes the session (or re-displays the active scenario). An
    /// index outside the active choice list re-presents the same scenario
    /// with a notice and mutates nothing. Once ended, every call returns the
    /// ending again.
    pub fn advance_turn(&mut self, choice: Option<usize>) -> TurnResult {
        if let TurnPhase::Ended(ending) = *self.world.resource::<TurnPhase>() {
            let result = self.ending_result(ending, None);
            return self.publish(result);
        }

        let mut action = None;
        if let Some(index) = choice {
            if self.active_scenario().is_none() {
                self.narrative.run(&mut self.world);
            }

            if let Some(scenario) = self.active_scenario().cloned() {
                let Some(picked) = scenario.choices.get(index).cloned() else {
                    warn!(index, id = %scenario.id, "choice index out of range");
                    let notice = format!(
                        "INVALID INPUT: option {} does not exist. Choose 1-{}.",
                        index.saturating_add(1),
                        scenario.choices.len()
                    );
                    let result = self.present(None, Some(notice));
                    return self.publish(result);
                };

                self.apply_choice(&scenario, &picked);
                action = Some(picked.label);

                if let Some(ending) = self.check_ending() {
                    let result = self.ending_result(ending, action);
                    return self.publish(result);
                }
            }
        }

        self.narrative.run(&mut self.world);
        let result = self.present(action, None);
        self.publish(result)
    }

    fn apply_choice(&mut self, scenario: &Scenario, choice: &Choice) {
        let day = self.day();
        let floor = self.config().selection.loyalty_floor;

        let raised = self
            .world
            .resource_scope(|world, mut state: Mut<NationState>| {
                let before: BTreeSet<Flag> = state.flags.switches().collect();
                {
                    let mut queue = world.resource_mut::<DelayedEffectQueue>();
                    apply_effects(&choice.effects, &mut state, &mut queue, day);
                }
                state.clamp();

                let mut pending = world.resource_mut::<PendingUltimatums>();
                flag_loyalty_collapse(&mut state, &mut pending, floor);

                state
                    .flags
                    .switches()
                    .filter(|flag| !before.contains(flag))
                    .filter(|flag| !matches!(flag, Flag::AdvisorWalkout(_)))
                    .collect::<Vec<_>>()
            });

        {
            let mut chronicle = self.world.resource_mut::<Chronicle>();
            chronicle.push(ChronicleEntry::decision(day, &scenario.title, &choice.label));
            for flag in raised {
                chronicle.push(ChronicleEntry::flag(day, flag));
            }
        }

        if scenario.kind.is_interruption() {
            self.world.resource_mut::<TurnCursor>().interruption = None;
            *self.world.resource_mut::<TurnPhase>() = TurnPhase::AwaitingChoice;
        } else {
            self.dynamics.run(&mut self.world);
            self.world.resource_mut::<DayClock>().day += 1;
            self.world.resource_mut::<TurnCursor>().current = None;
        }
    }

    fn check_ending(&mut self) -> Option<Ending> {
        let day = self.day();
        let ending = evaluate_ending(self.state(), day, &self.config().endings)?;

        info!("session ended on day {}: {}", day, ending.label());
        *self.world.resource_mut::<TurnPhase>() = TurnPhase::Ended(ending);
        self.world
            .resource_mut::<Chronicle>()
            .push(ChronicleEntry::ending(day, ending));
        Some(ending)
    }

    fn observe_critical(&mut self) -> bool {
        let population = self.state().stats.population;
        let band = self.config().critical.clone();
        self.world
            .resource_mut::<CriticalMonitor>()
            .observe(population, band.enter_below, band.exit_at)
    }

    fn report(&self) -> StatusReport {
        StatusReport::capture(self.day(), self.state(), self.pending_effects())
    }

    fn present(&mut self, action: Option<String>, notice: Option<String>) -> TurnResult {
        let critical = self.observe_critical();
        let report = self.report();
        let interruption = self.world.resource::<TurnCursor>().interruption.is_some();
        let scenario = self
            .active_scenario()
            .cloned()
            .unwrap_or_else(|| self.world.resource::<ContentCatalog>().playable_fallback());
        let choices: Vec<String> = scenario
            .choices
            .iter()
            .map(|choice| choice.label.clone())
            .collect();

        let mut lines = Vec::new();
        if let Some(action) = &action {
            lines.push(format!(">> ACTION: {action}"));
        }
        if let Some(notice) = &notice {
            lines.push(format!(">> {notice}"));
        }
        lines.push(status_report_text(&report));
        if critical {
            lines.push("!! CRITICAL: POPULATION IN FREEFALL !!".to_string());
        }
        lines.push(String::new());
        lines.push(scenario.title.clone());
        lines.push(scenario.text.clone());
        lines.push(String::new());
        for (index, label) in choices.iter().enumerate() {
            lines.push(format!("[{}] {}", index + 1, label));
        }

        TurnResult {
            day: report.day,
            kind: Some(scenario.kind),
            headline: scenario.title,
            body: scenario.text,
            text: lines.join("\n"),
            choice_count: choices.len(),
            choices,
            ended: false,
            critical,
            interruption,
            ending: None,
            ending_text: None,
            action,
            notice,
            report,
        }
    }

    fn ending_result(&mut self, ending: Ending, action: Option<String>) -> TurnResult {
        let critical = self.observe_critical();
        let report = self.report();

        let mut lines = Vec::new();
        if let Some(action) = &action {
            lines.push(format!(">> ACTION: {action}"));
        }
        lines.push(status_report_text(&report));
        lines.push(String::new());
        lines.push(ENDING_RULE.to_string());
        lines.push(format!("ENDING: {}.", ending.label()));
        lines.push(ending.text().to_string());
        lines.push(ENDING_RULE.to_string());

        TurnResult {
            day: report.day,
            kind: None,
            headline: format!("ENDING: {}", ending.label()),
            body: ending.text().to_string(),
            text: lines.join("\n"),
            choices: Vec::new(),
            choice_count: 0,
            ended: true,
            critical,
            interruption: false,
            ending: Some(ending),
            ending_text: Some(ending.text().to_string()),
            action,
            notice: None,
            report,
        }
    }

    fn publish(&mut self, result: TurnResult) -> TurnResult {
        if let Some(observer) = &self.observer {
            let phase = self.phase();
            let history = self.history();
            let chronicle = self.chronicle();
            let mut snapshot = match observer.write() {
                Ok(guard) => guard,
                Err(poisoned) => {
                    warn!("observer lock poisoned; recovering");
                    observer.clear_poison();
                    poisoned.into_inner()
                }
            };
            snapshot.update(&result, phase, history, chronicle);
        }
        result
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SimulationConfig {
        self.world.resource::<SimulationConfig>()
    }

    pub fn state(&self) -> &NationState {
        self.world.resource::<NationState>()
    }

    pub fn day(&self) -> u32 {
        self.world.resource::<DayClock>().day
    }

    pub fn phase(&self) -> TurnPhase {
        *self.world.resource::<TurnPhase>()
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.phase(), TurnPhase::Ended(_))
    }

    /// The interruption when one is up, otherwise the pending scenario.
    pub fn active_scenario(&self) -> Option<&Scenario> {
        self.world.resource::<TurnCursor>().active()
    }

    pub fn history(&self) -> &StatHistory {
        self.world.resource::<StatHistory>()
    }

    pub fn chronicle(&self) -> Vec<ChronicleEntry> {
        self.world.resource::<Chronicle>().snapshot()
    }

    pub fn pending_effects(&self) -> usize {
        self.world.resource::<DelayedEffectQueue>().len()
    }

    pub fn delayed_effects(&self) -> &DelayedEffectQueue {
        self.world.resource::<DelayedEffectQueue>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> SimulationConfig {
        let mut config = SimulationConfig::default();
        config.selection.interruption_chance = 0.0;
        config
    }

    #[test]
    fn priming_shows_day_one_without_mutation() {
        let mut session = SimulationWorld::with_seed(quiet_config(), 1);
        let before = session.state().clone();

        let first = session.advance_turn(None);
        assert_eq!(first.day, 1);
        assert_eq!(first.headline, "DAY 1: PATIENT ZERO");
        assert_eq!(first.choice_count, 3);
        assert!(!first.ended);
        assert_eq!(session.state(), &before);

        let again = session.advance_turn(None);
        assert_eq!(again, first);
    }

    #[test]
    fn a_valid_choice_consumes_the_day() {
        let mut session = SimulationWorld::with_seed(quiet_config(), 2);
        session.advance_turn(None);
        let result = session.advance_turn(Some(1));

        assert_eq!(session.day(), 2);
        assert_eq!(result.day, 2);
        assert_eq!(
            result.action.as_deref(),
            Some("Declare a public health emergency.")
        );
        assert_eq!(result.headline, "DAY 2: BORDER CONTROL");
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn unprimed_choice_applies_to_day_one() {
        let mut session = SimulationWorld::with_seed(quiet_config(), 3);
        let result = session.advance_turn(Some(0));
        assert_eq!(result.action.as_deref(), Some("Keep it quiet. Avoid panic."));
        assert_eq!(session.day(), 2);
        assert!(session.state().flags.is_set(Flag::CensoredMedia));
    }

    #[test]
    fn poisoned_observer_still_receives_turns() {
        let observer = Arc::new(RwLock::new(ObserverSnapshot::default()));
        let holder = observer.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.write().unwrap();
            panic!("reader crashed while holding the snapshot");
        })
        .join();
        assert!(observer.is_poisoned());

        let mut session =
            SimulationWorld::with_seed(quiet_config(), 5).with_observer(observer.clone());
        let shown = session.advance_turn(None);

        let snapshot = observer.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        assert_eq!(snapshot.latest.as_ref(), Some(&shown));
        drop(snapshot);
        assert!(!observer.is_poisoned());
    }

    #[test]
    fn unvalidated_noise_scale_does_not_break_a_day() {
        let mut config = quiet_config();
        config.dynamics.noise_scale = f32::INFINITY;
        let mut session = SimulationWorld::with_seed(config, 6);
        session.advance_turn(None);
        session.advance_turn(Some(0));

        assert_eq!(session.day(), 2);
        assert!(session.state().stats.is_bounded());
    }

    #[test]
    fn observer_receives_each_turn() {
        let observer = Arc::new(RwLock::new(ObserverSnapshot::default()));
        let mut session =
            SimulationWorld::with_seed(quiet_config(), 4).with_observer(observer.clone());
        session.advance_turn(None);
        session.advance_turn(Some(0));

        let snapshot = observer.read().unwrap();
        assert_eq!(snapshot.day, 2);
        assert_eq!(snapshot.history.len(), 2);
        assert!(snapshot.latest.is_some());
        assert!(!snapshot.chronicle.is_empty());
    }
}
