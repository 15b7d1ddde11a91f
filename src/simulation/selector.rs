//! Scenario selection policy.
//!
//! The day's scenario is picked in strict priority order: one-shot balancing
//! lifelines, the active story arc, the fixed beat for the day, the
//! non-repeating filler pool and finally the fallback. Interruptions travel on
//! a separate channel: queued advisor ultimatums first, then a once-per-day
//! roll inside the configured window.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::simulation::content::ultimatum;
use crate::simulation::{
    ArcCursor, ArcId, ContentCatalog, NationState, PendingUltimatums, Scenario, SelectionConfig,
    UsedContent,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub scenario: Scenario,
    /// Arc transitions that happened while selecting, in order
    pub arc_shifts: Vec<(ArcId, ArcId)>,
}

impl Selection {
    fn plain(scenario: Scenario) -> Self {
        Self {
            scenario,
            arc_shifts: Vec::new(),
        }
    }
}

/// Never hands out a scenario without choices.
fn ensure_playable(scenario: Scenario, catalog: &ContentCatalog) -> Scenario {
    if scenario.is_playable() {
        scenario
    } else {
        warn!(id = %scenario.id, "scenario has no choices; using fallback");
        catalog.playable_fallback()
    }
}

pub fn select_scenario<R: Rng + ?Sized>(
    catalog: &ContentCatalog,
    state: &NationState,
    day: u32,
    arcs: &mut ArcCursor,
    used: &mut UsedContent,
    rng: &mut R,
) -> Selection {
    if let Some(event) = catalog.balancing.iter().find(|event| {
        !used.balancing.contains(&event.scenario.id) && event.trigger.holds(state)
    }) {
        used.balancing.insert(event.scenario.id.clone());
        debug!(day, id = %event.scenario.id, "balancing event selected");
        return Selection::plain(ensure_playable(event.scenario.clone(), catalog));
    }

    let mut arc_shifts = Vec::new();
    if arcs.arc == ArcId::Main {
        if let Some(arc) = catalog
            .arcs
            .iter()
            .find(|arc| !arcs.visited.contains(&arc.id) && arc.trigger.holds(state))
        {
            arcs.arc = arc.id;
            arcs.progress = 0;
            arcs.visited.insert(arc.id);
            arc_shifts.push((ArcId::Main, arc.id));
        }
    }

    if arcs.arc != ArcId::Main {
        let current = arcs.arc;
        let scenes = catalog
            .arc(current)
            .map(|arc| arc.scenarios.as_slice())
            .unwrap_or_default();

        let drawn = scenes.get(arcs.progress).cloned();
        if drawn.is_some() {
            arcs.progress += 1;
        }
        if arcs.progress >= scenes.len() {
            arcs.arc = ArcId::Main;
            arcs.progress = 0;
            arc_shifts.push((current, ArcId::Main));
        }

        if let Some(scenario) = drawn {
            debug!(day, arc = current.label(), id = %scenario.id, "arc scene selected");
            return Selection {
                scenario: ensure_playable(scenario, catalog),
                arc_shifts,
            };
        }
    }

    let scenario = if let Some(beat) = catalog.main_story.get(&day) {
        beat.clone()
    } else {
        let candidates: Vec<&Scenario> = catalog
            .filler
            .iter()
            .filter(|scenario| !used.filler.contains(&scenario.id))
            .collect();
        match candidates.choose(rng) {
            Some(scenario) => {
                used.filler.insert(scenario.id.clone());
                (*scenario).clone()
            }
            None => catalog.playable_fallback(),
        }
    };

    debug!(day, id = %scenario.id, "scenario selected");
    Selection {
        scenario: ensure_playable(scenario, catalog),
        arc_shifts,
    }
}

/// Queued ultimatums always win; otherwise roll at most once per day.
pub fn select_interruption<R: Rng + ?Sized>(
    catalog: &ContentCatalog,
    config: &SelectionConfig,
    day: u32,
    rolled_day: &mut Option<u32>,
    pending: &mut PendingUltimatums,
    used: &mut UsedContent,
    rng: &mut R,
) -> Option<Scenario> {
    if let Some(advisor) = pending.0.pop_front() {
        debug!(day, advisor = advisor.name(), "ultimatum pre-empts the day");
        return Some(ultimatum(advisor));
    }

    if *rolled_day == Some(day) {
        return None;
    }
    if day < config.interruption_first_day || day > config.interruption_last_day {
        return None;
    }
    *rolled_day = Some(day);

    let chance = if config.interruption_chance.is_nan() {
        0.0
    } else {
        config.interruption_chance.clamp(0.0, 1.0)
    };
    if !rng.gen_bool(chance) {
        return None;
    }

    let candidates: Vec<&Scenario> = catalog
        .interruptions
        .iter()
        .filter(|scenario| !used.interruptions.contains(&scenario.id))
        .collect();
    let picked = candidates.choose(rng)?;
    used.interruptions.insert(picked.id.clone());

    if picked.is_playable() {
        debug!(day, id = %picked.id, "interruption fired");
        Some((*picked).clone())
    } else {
        warn!(id = %picked.id, "interruption has no choices; skipped");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{Advisor, Counter, Flag, ScenarioKind};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn fresh() -> (ArcCursor, UsedContent, SmallRng) {
        (
            ArcCursor::default(),
            UsedContent::default(),
            SmallRng::seed_from_u64(11),
        )
    }

    #[test]
    fn fixed_beat_on_its_day() {
        let catalog = ContentCatalog::standard();
        let state = NationState::default();
        let (mut arcs, mut used, mut rng) = fresh();
        let selection = select_scenario(&catalog, &state, 1, &mut arcs, &mut used, &mut rng);
        assert_eq!(selection.scenario.id, "patient_zero");
        assert!(selection.arc_shifts.is_empty());
    }

    #[test]
    fn balancing_fires_once_and_outranks_the_beat() {
        let catalog = ContentCatalog::standard();
        let mut state = NationState::default();
        state.stats.economy = 0.1;
        let (mut arcs, mut used, mut rng) = fresh();

        let first = select_scenario(&catalog, &state, 2, &mut arcs, &mut used, &mut rng);
        assert_eq!(first.scenario.kind, ScenarioKind::Balancing);
        assert_eq!(first.scenario.id, "imf_bailout");

        let second = select_scenario(&catalog, &state, 2, &mut arcs, &mut used, &mut rng);
        assert_eq!(second.scenario.id, "border_control");
    }

    #[test]
    fn militarized_streets_bring_the_tribunal_once() {
        let catalog = ContentCatalog::standard();
        let mut state = NationState::default();
        state.flags.set_once(Flag::Militarized);
        let (mut arcs, mut used, mut rng) = fresh();

        let first = select_scenario(&catalog, &state, 13, &mut arcs, &mut used, &mut rng);
        assert_eq!(first.scenario.id, "checkpoint_tribunal");
        assert_eq!(first.scenario.kind, ScenarioKind::Balancing);

        let second = select_scenario(&catalog, &state, 14, &mut arcs, &mut used, &mut rng);
        assert_ne!(second.scenario.id, "checkpoint_tribunal");
    }

    #[test]
    fn arc_runs_its_list_then_reverts() {
        let catalog = ContentCatalog::standard();
        let mut state = NationState::default();
        state.flags.add(Counter::CureProgress, 60);
        let (mut arcs, mut used, mut rng) = fresh();

        let opening = select_scenario(&catalog, &state, 2, &mut arcs, &mut used, &mut rng);
        assert_eq!(opening.scenario.id, "cure_formula");
        assert_eq!(opening.arc_shifts, vec![(ArcId::Main, ArcId::CureRace)]);

        select_scenario(&catalog, &state, 3, &mut arcs, &mut used, &mut rng);
        let last = select_scenario(&catalog, &state, 4, &mut arcs, &mut used, &mut rng);
        assert_eq!(last.scenario.id, "cure_rollout");
        assert_eq!(last.arc_shifts, vec![(ArcId::CureRace, ArcId::Main)]);

        // The trigger still holds, but the arc is not re-entered
        let after = select_scenario(&catalog, &state, 5, &mut arcs, &mut used, &mut rng);
        assert_eq!(after.scenario.id, "lockdown_protocol");
        assert_eq!(arcs.arc, ArcId::Main);
    }

    #[test]
    fn filler_never_repeats_and_then_falls_back() {
        let catalog = ContentCatalog::standard();
        let state = NationState::default();
        let (mut arcs, mut used, mut rng) = fresh();

        let mut seen = Vec::new();
        for _ in 0..catalog.filler.len() {
            let selection = select_scenario(&catalog, &state, 6, &mut arcs, &mut used, &mut rng);
            assert_eq!(selection.scenario.kind, ScenarioKind::Filler);
            assert!(!seen.contains(&selection.scenario.id));
            seen.push(selection.scenario.id);
        }

        let exhausted = select_scenario(&catalog, &state, 6, &mut arcs, &mut used, &mut rng);
        assert_eq!(exhausted.scenario.kind, ScenarioKind::Fallback);
        assert!(exhausted.scenario.is_playable());
    }

    #[test]
    fn malformed_beat_degrades_to_fallback() {
        let mut catalog = ContentCatalog::empty();
        catalog.main_story.insert(
            1,
            Scenario::new("broken", ScenarioKind::MainStory, "BROKEN", "", Vec::new()),
        );
        let state = NationState::default();
        let (mut arcs, mut used, mut rng) = fresh();

        let selection = select_scenario(&catalog, &state, 1, &mut arcs, &mut used, &mut rng);
        assert_eq!(selection.scenario.id, "quiet_day");
    }

    #[test]
    fn ultimatum_pre_empts_the_roll() {
        let catalog = ContentCatalog::standard();
        let config = SelectionConfig {
            interruption_chance: 0.0,
            ..SelectionConfig::default()
        };
        let (_, mut used, mut rng) = fresh();
        let mut pending = PendingUltimatums::default();
        pending.0.push_back(Advisor::DefenseChief);
        let mut rolled = None;

        let forced = select_interruption(
            &catalog, &config, 1, &mut rolled, &mut pending, &mut used, &mut rng,
        );
        let forced = forced.expect("ultimatum");
        assert_eq!(forced.kind, ScenarioKind::Ultimatum(Advisor::DefenseChief));
        assert_eq!(forced.choices.len(), 1);
        assert_eq!(rolled, None);
    }

    #[test]
    fn roll_happens_once_per_day_inside_the_window() {
        let catalog = ContentCatalog::standard();
        let config = SelectionConfig {
            interruption_chance: 1.0,
            interruption_first_day: 3,
            interruption_last_day: 5,
            ..SelectionConfig::default()
        };
        let (_, mut used, mut rng) = fresh();
        let mut pending = PendingUltimatums::default();
        let mut rolled = None;

        let early = select_interruption(
            &catalog, &config, 2, &mut rolled, &mut pending, &mut used, &mut rng,
        );
        assert!(early.is_none());

        let fired = select_interruption(
            &catalog, &config, 3, &mut rolled, &mut pending, &mut used, &mut rng,
        );
        assert!(fired.is_some());
        let again = select_interruption(
            &catalog, &config, 3, &mut rolled, &mut pending, &mut used, &mut rng,
        );
        assert!(again.is_none());
        assert_eq!(used.interruptions.len(), 1);
    }
}
