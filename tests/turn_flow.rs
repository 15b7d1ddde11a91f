use std::collections::BTreeSet;

use pandemic_directive::simulation::{
    Advisor, ChronicleKind, ContentCatalog, Ending, Scenario, ScenarioKind, SimulationConfig,
    SimulationWorld, TurnPhase,
};

fn quiet_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.selection.interruption_chance = 0.0;
    config
}

fn play_out(session: &mut SimulationWorld, mut pick: impl FnMut(usize, usize) -> usize) -> Vec<String> {
    let mut transcript = Vec::new();
    let mut result = session.advance_turn(None);
    for turn in 0..200 {
        transcript.push(result.to_json().unwrap());
        if result.ended {
            break;
        }
        let index = pick(turn, result.choice_count);
        result = session.advance_turn(Some(index));
    }
    transcript
}

#[test]
fn invalid_index_changes_nothing() {
    let mut session = SimulationWorld::with_seed(quiet_config(), 5);
    let shown = session.advance_turn(None);
    let state = session.state().clone();
    let queued = session.pending_effects();

    let result = session.advance_turn(Some(99));

    assert!(!result.ended);
    assert!(result.notice.is_some());
    assert_eq!(result.headline, shown.headline);
    assert_eq!(result.choice_count, shown.choice_count);
    assert_eq!(session.state(), &state);
    assert_eq!(session.day(), 1);
    assert_eq!(session.pending_effects(), queued);
}

#[test]
fn day_one_keep_quiet_then_one_day_of_dynamics() {
    let mut session = SimulationWorld::with_seed(quiet_config(), 9);
    session.advance_turn(None);
    session.advance_turn(Some(0));

    let stats = &session.state().stats;
    assert!(stats.infection > 0.05);
    assert!(stats.population < 1.0);
    assert_eq!(session.day(), 2);
}

#[test]
fn interruption_does_not_consume_the_day() {
    let mut config = SimulationConfig::default();
    config.selection.interruption_chance = 1.0;
    config.selection.interruption_first_day = 1;
    config.selection.interruption_last_day = 25;
    let mut session = SimulationWorld::with_seed(config, 13);

    let breaking = session.advance_turn(None);
    assert!(breaking.interruption);
    assert_eq!(breaking.kind, Some(ScenarioKind::Interruption));
    assert_eq!(session.phase(), TurnPhase::InterruptionActive);

    let resumed = session.advance_turn(Some(0));
    assert_eq!(session.day(), 1);
    assert!(!resumed.interruption);
    assert_eq!(resumed.headline, "DAY 1: PATIENT ZERO");

    session.advance_turn(Some(0));
    assert_eq!(session.day(), 2);
}

#[test]
fn ultimatum_pre_empts_without_consuming_a_day() {
    let mut config = quiet_config();
    config.selection.loyalty_floor = 65.0;
    let mut session = SimulationWorld::with_seed(config, 21);
    session.advance_turn(None);

    // Declaring the emergency costs the Finance Minister five points of loyalty
    let walkout = session.advance_turn(Some(1));
    assert_eq!(session.day(), 2);
    assert_eq!(walkout.kind, Some(ScenarioKind::Ultimatum(Advisor::FinanceMinister)));
    assert_eq!(walkout.choice_count, 1);

    let resumed = session.advance_turn(Some(0));
    assert_eq!(session.day(), 2);
    assert_eq!(resumed.headline, "DAY 2: BORDER CONTROL");
    assert!(session.state().advisors.loyalty(Advisor::FinanceMinister) > 65.0);

    let walkouts = session
        .chronicle()
        .iter()
        .filter(|entry| matches!(entry.kind, ChronicleKind::Ultimatum { .. }))
        .count();
    assert_eq!(walkouts, 1);
}

#[test]
fn delayed_effect_lands_on_its_day_exactly_once() {
    let mut session = SimulationWorld::with_seed(quiet_config(), 3);
    session.advance_turn(None);
    // "Delay the announcement" schedules an infection surge five days out
    session.advance_turn(Some(2));
    assert!(session.delayed_effects().iter().any(|entry| entry.trigger_day == 6));

    for _ in 0..3 {
        session.advance_turn(Some(0));
    }
    assert_eq!(session.day(), 5);
    assert!(session.delayed_effects().iter().any(|entry| entry.trigger_day == 6));

    session.advance_turn(Some(0));
    assert_eq!(session.day(), 6);
    assert!(!session.delayed_effects().iter().any(|entry| entry.trigger_day == 6));

    let landed: Vec<u32> = session
        .chronicle()
        .iter()
        .filter(|entry| matches!(entry.kind, ChronicleKind::DelayedEffectsLanded { .. }))
        .map(|entry| entry.day)
        .collect();
    assert_eq!(landed, vec![6]);
}

#[test]
fn same_seed_replays_identically() {
    let pick = |turn: usize, count: usize| (turn * 7 + 3) % count.max(1);
    let mut first = SimulationWorld::with_seed(SimulationConfig::default(), 42);
    let mut second = SimulationWorld::with_seed(SimulationConfig::default(), 42);

    let a = play_out(&mut first, pick);
    let b = play_out(&mut second, pick);
    assert_eq!(a, b);
    assert!(a.len() > 1);
}

#[test]
fn ended_session_refuses_further_input() {
    let mut config = quiet_config();
    config.initial.population = 0.10;
    config.endings.min_day = 1;
    let mut session = SimulationWorld::with_seed(config, 8);
    session.advance_turn(None);

    let ending = session.advance_turn(Some(0));
    assert!(ending.ended);
    assert_eq!(ending.ending, Some(Ending::Extinction));
    assert_eq!(ending.choice_count, 0);

    let state = session.state().clone();
    let day = session.day();
    let again = session.advance_turn(Some(0));
    assert!(again.ended);
    assert_eq!(again.ending, Some(Ending::Extinction));
    assert_eq!(session.state(), &state);
    assert_eq!(session.day(), day);
}

#[test]
fn malformed_scenario_falls_back_to_the_quiet_day() {
    let mut catalog = ContentCatalog::empty();
    catalog.main_story.insert(
        1,
        Scenario::new("hollow", ScenarioKind::MainStory, "HOLLOW", "Nothing here.", Vec::new()),
    );
    let mut session = SimulationWorld::with_catalog(quiet_config(), catalog, 1);

    let result = session.advance_turn(None);
    assert_eq!(result.kind, Some(ScenarioKind::Fallback));
    assert_eq!(result.choice_count, 2);

    let before = session.state().stats.economy;
    session.advance_turn(Some(1));
    assert_eq!(session.day(), 2);
    assert_ne!(session.state().stats.economy, before);
}

#[test]
fn a_full_session_reaches_an_ending_without_repeating_filler() {
    let mut session = SimulationWorld::with_seed(quiet_config(), 77);
    let mut result = session.advance_turn(None);
    let mut filler = BTreeSet::new();

    while !result.ended {
        if result.kind == Some(ScenarioKind::Filler) {
            assert!(filler.insert(result.headline.clone()), "{} repeated", result.headline);
        }
        result = session.advance_turn(Some(0));
    }

    assert!(result.ending.is_some());
    assert!(session.day() <= 26);
    assert!(matches!(session.phase(), TurnPhase::Ended(_)));
}
