//! End-of-day bookkeeping: delayed consequences, clamping and history.

use bevy_ecs::prelude::*;
use tracing::debug;

use crate::simulation::{
    Chronicle, ChronicleEntry, DayClock, DelayedEffectQueue, NationState, StatHistory,
};

/// Resolves everything due on the day about to begin.
pub fn delayed_effect_system(
    mut queue: ResMut<DelayedEffectQueue>,
    mut state: ResMut<NationState>,
    mut chronicle: ResMut<Chronicle>,
    clock: Res<DayClock>,
) {
    let next_day = clock.day + 1;
    let landed = queue.resolve_due(next_day, &mut state);
    if landed > 0 {
        debug!(day = next_day, landed, remaining = queue.len(), "delayed effects resolved");
        chronicle.push(ChronicleEntry::delayed(next_day, landed));
    }
}

pub fn clamp_system(mut state: ResMut<NationState>) {
    state.clamp();
}

pub fn history_system(
    mut history: ResMut<StatHistory>,
    state: Res<NationState>,
    clock: Res<DayClock>,
) {
    history.record(clock.day + 1, &state);
}
