//! Choice effects as data and the delayed effect queue.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::simulation::{Advisor, Counter, Flag, NationState, Stat};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Effect {
    Adjust { stat: Stat, delta: f32 },
    Scale { stat: Stat, factor: f32 },
    Set { stat: Stat, value: f32 },
    Raise { flag: Flag },
    Lower { flag: Flag },
    Count { counter: Counter, delta: i32 },
    Loyalty { advisor: Advisor, delta: f32 },
    Lethality { factor: f32 },
    Infectivity { factor: f32 },
    Cost { amount: f64 },
    Delay { days: u32, effects: Vec<Effect> },
}

impl Effect {
    pub fn adjust(stat: Stat, delta: f32) -> Self {
        Effect::Adjust { stat, delta }
    }

    pub fn scale(stat: Stat, factor: f32) -> Self {
        Effect::Scale { stat, factor }
    }

    pub fn set(stat: Stat, value: f32) -> Self {
        Effect::Set { stat, value }
    }

    pub fn raise(flag: Flag) -> Self {
        Effect::Raise { flag }
    }

    pub fn lower(flag: Flag) -> Self {
        Effect::Lower { flag }
    }

    pub fn count(counter: Counter, delta: i32) -> Self {
        Effect::Count { counter, delta }
    }

    pub fn loyalty(advisor: Advisor, delta: f32) -> Self {
        Effect::Loyalty { advisor, delta }
    }

    pub fn cost(amount: f64) -> Self {
        Effect::Cost { amount }
    }

    pub fn delay(days: u32, effects: Vec<Effect>) -> Self {
        Effect::Delay { days, effects }
    }
}

/// Apply `effects` in order. Does not clamp; callers clamp once afterwards.
pub fn apply_effects(
    effects: &[Effect],
    state: &mut NationState,
    queue: &mut DelayedEffectQueue,
    day: u32,
) {
    for effect in effects {
        match effect {
            Effect::Adjust { stat, delta } => *state.stats.get_mut(*stat) += *delta,
            Effect::Scale { stat, factor } => *state.stats.get_mut(*stat) *= *factor,
            Effect::Set { stat, value } => *state.stats.get_mut(*stat) = *value,
            Effect::Raise { flag } => {
                state.flags.set_once(*flag);
            }
            Effect::Lower { flag } => state.flags.clear(*flag),
            Effect::Count { counter, delta } => state.flags.add(*counter, *delta),
            Effect::Loyalty { advisor, delta } => state.advisors.adjust(*advisor, *delta),
            Effect::Lethality { factor } => state.virus.lethality *= *factor,
            Effect::Infectivity { factor } => state.virus.infectivity *= *factor,
            Effect::Cost { amount } => state.cumulative_cost += *amount,
            Effect::Delay { days, effects } => queue.schedule(day, *days, effects.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayedEffect {
    pub trigger_day: u32,
    pub effects: Vec<Effect>,
}

/// Consequences waiting for their day. Entries keep insertion order.
#[derive(Debug, Clone, Default, Resource, Serialize, Deserialize)]
pub struct DelayedEffectQueue {
    entries: Vec<DelayedEffect>,
}

impl DelayedEffectQueue {
    pub fn schedule(&mut self, current_day: u32, days_ahead: u32, effects: Vec<Effect>) {
        self.entries.push(DelayedEffect {
            trigger_day: current_day.saturating_add(days_ahead),
            effects,
        });
    }

    /// Apply and drop every entry due on or before `current_day`.
    ///
    /// Effects scheduled by a resolving entry wait for the next pass.
    pub fn resolve_due(&mut self, current_day: u32, state: &mut NationState) -> usize {
        if self.entries.is_empty() {
            return 0;
        }

        let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.trigger_day <= current_day);
        self.entries = pending;

        for entry in &due {
            apply_effects(&entry.effects, state, self, current_day);
        }
        due.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DelayedEffect> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolving_an_empty_queue_is_a_no_op() {
        let mut queue = DelayedEffectQueue::default();
        let mut state = NationState::default();
        let before = state.clone();
        assert_eq!(queue.resolve_due(10, &mut state), 0);
        assert_eq!(state, before);
    }

    #[test]
    fn only_due_entries_apply_and_leave_the_queue() {
        let mut queue = DelayedEffectQueue::default();
        let mut state = NationState::default();
        queue.schedule(1, 5, vec![Effect::scale(Stat::Infection, 2.0)]);
        queue.schedule(1, 9, vec![Effect::adjust(Stat::Trust, -0.3)]);

        assert_eq!(queue.resolve_due(5, &mut state), 0);
        assert_eq!(queue.resolve_due(6, &mut state), 1);
        assert!((state.stats.infection - 0.10).abs() < 1e-6);
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.resolve_due(6, &mut state), 0);
        assert!((state.stats.infection - 0.10).abs() < 1e-6);
        assert_eq!(queue.resolve_due(12, &mut state), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn same_day_entries_apply_in_schedule_order() {
        let mut queue = DelayedEffectQueue::default();
        let mut state = NationState::default();
        queue.schedule(3, 2, vec![Effect::set(Stat::Economy, 0.5)]);
        queue.schedule(3, 2, vec![Effect::scale(Stat::Economy, 0.5)]);

        queue.resolve_due(5, &mut state);
        assert!((state.stats.economy - 0.25).abs() < 1e-6);
    }

    #[test]
    fn nested_delays_wait_for_a_later_pass() {
        let mut queue = DelayedEffectQueue::default();
        let mut state = NationState::default();
        apply_effects(
            &[Effect::delay(
                2,
                vec![Effect::delay(0, vec![Effect::raise(Flag::Sterility)])],
            )],
            &mut state,
            &mut queue,
            4,
        );

        assert_eq!(queue.resolve_due(6, &mut state), 1);
        assert!(!state.flags.is_set(Flag::Sterility));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.resolve_due(6, &mut state), 1);
        assert!(state.flags.is_set(Flag::Sterility));
    }

    #[test]
    fn effects_apply_in_order_without_clamping() {
        let mut queue = DelayedEffectQueue::default();
        let mut state = NationState::default();
        apply_effects(
            &[
                Effect::adjust(Stat::Population, 0.5),
                Effect::loyalty(Advisor::DefenseChief, 10.0),
                Effect::cost(300.0),
                Effect::Lethality { factor: 0.5 },
            ],
            &mut state,
            &mut queue,
            1,
        );
        assert!(state.stats.population > 1.0);
        assert_eq!(state.advisors.loyalty(Advisor::DefenseChief), 80.0);
        assert_eq!(state.cumulative_cost, 300.0);
        assert_eq!(state.virus.lethality, 0.5);

        state.clamp();
        assert_eq!(state.stats.population, 1.0);
    }
}
