//! Narrative cursor refresh, run after every accepted input.

use bevy_ecs::prelude::*;
use tracing::info;

use crate::simulation::{
    ArcCursor, Chronicle, ChronicleEntry, ContentCatalog, DayClock, NationState,
    PendingUltimatums, ScenarioKind, SessionRng, SimulationConfig, TurnCursor, TurnPhase,
    UsedContent, select_interruption, select_scenario,
};

/// Selects the day's scenario when the cursor was invalidated.
pub fn scenario_selection_system(
    catalog: Res<ContentCatalog>,
    state: Res<NationState>,
    clock: Res<DayClock>,
    mut cursor: ResMut<TurnCursor>,
    mut arcs: ResMut<ArcCursor>,
    mut used: ResMut<UsedContent>,
    mut rng: ResMut<SessionRng>,
    mut chronicle: ResMut<Chronicle>,
) {
    if cursor.current.is_some() {
        return;
    }

    let selection = select_scenario(
        &catalog,
        &state,
        clock.day,
        &mut arcs,
        &mut used,
        &mut rng.0,
    );
    for (from, to) in selection.arc_shifts {
        info!("story arc {} -> {} on day {}", from.label(), to.label(), clock.day);
        chronicle.push(ChronicleEntry::arc_shift(clock.day, from, to));
    }
    cursor.current = Some(selection.scenario);
}

/// Places an ultimatum or a rolled interruption over the pending scenario.
pub fn interruption_system(
    catalog: Res<ContentCatalog>,
    config: Res<SimulationConfig>,
    clock: Res<DayClock>,
    mut cursor: ResMut<TurnCursor>,
    mut pending: ResMut<PendingUltimatums>,
    mut used: ResMut<UsedContent>,
    mut rng: ResMut<SessionRng>,
    mut chronicle: ResMut<Chronicle>,
    mut phase: ResMut<TurnPhase>,
) {
    if cursor.interruption.is_none() {
        let cursor = &mut *cursor;
        let interruption = select_interruption(
            &catalog,
            &config.selection,
            clock.day,
            &mut cursor.rolled_day,
            &mut pending,
            &mut used,
            &mut rng.0,
        );
        if let Some(scenario) = &interruption {
            if let ScenarioKind::Ultimatum(advisor) = scenario.kind {
                chronicle.push(ChronicleEntry::ultimatum(clock.day, advisor));
            }
        }
        cursor.interruption = interruption;
    }

    *phase = if cursor.interruption.is_some() {
        TurnPhase::InterruptionActive
    } else {
        TurnPhase::AwaitingChoice
    };
}
