//! Immutable scenario catalog definitions.

use std::collections::BTreeMap;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::simulation::{Advisor, Counter, Effect, Flag, NationState, Stat, content};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcId {
    Main,
    Riots,
    CureRace,
}

impl ArcId {
    pub fn label(&self) -> &'static str {
        match self {
            ArcId::Main => "main",
            ArcId::Riots => "riots",
            ArcId::CureRace => "cure_race",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail", rename_all = "snake_case")]
pub enum ScenarioKind {
    MainStory,
    Balancing,
    Arc(ArcId),
    Filler,
    Fallback,
    Interruption,
    Ultimatum(Advisor),
}

impl ScenarioKind {
    pub fn is_interruption(&self) -> bool {
        matches!(self, ScenarioKind::Interruption | ScenarioKind::Ultimatum(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioKind::MainStory => "Directive",
            ScenarioKind::Balancing => "Lifeline",
            ScenarioKind::Arc(ArcId::Riots) => "Unrest",
            ScenarioKind::Arc(ArcId::CureRace) => "Cure Race",
            ScenarioKind::Arc(ArcId::Main) => "Directive",
            ScenarioKind::Filler => "Briefing",
            ScenarioKind::Fallback => "Quiet Day",
            ScenarioKind::Interruption => "Breaking",
            ScenarioKind::Ultimatum(_) => "Ultimatum",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub effects: Vec<Effect>,
}

impl Choice {
    pub fn new(label: impl Into<String>, effects: Vec<Effect>) -> Self {
        Self {
            label: label.into(),
            effects,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub kind: ScenarioKind,
    pub title: String,
    pub text: String,
    pub choices: Vec<Choice>,
}

impl Scenario {
    pub fn new(
        id: impl Into<String>,
        kind: ScenarioKind,
        title: impl Into<String>,
        text: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            text: text.into(),
            choices,
        }
    }

    pub fn is_playable(&self) -> bool {
        !self.choices.is_empty()
    }
}

/// Stat-threshold predicates gating balancing events and arc branches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum Trigger {
    Below { stat: Stat, threshold: f32 },
    Above { stat: Stat, threshold: f32 },
    CounterAtLeast { counter: Counter, value: i32 },
    FlagSet { flag: Flag },
}

impl Trigger {
    pub fn holds(&self, state: &NationState) -> bool {
        match self {
            Trigger::Below { stat, threshold } => state.stat(*stat) < *threshold,
            Trigger::Above { stat, threshold } => state.stat(*stat) > *threshold,
            Trigger::CounterAtLeast { counter, value } => state.flags.counter(*counter) >= *value,
            Trigger::FlagSet { flag } => state.flags.is_set(*flag),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancingEvent {
    pub trigger: Trigger,
    pub scenario: Scenario,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryArc {
    pub id: ArcId,
    pub trigger: Trigger,
    pub scenarios: Vec<Scenario>,
}

#[derive(Debug, Clone, Resource, Serialize, Deserialize)]
pub struct ContentCatalog {
    pub main_story: BTreeMap<u32, Scenario>,
    pub balancing: Vec<BalancingEvent>,
    pub arcs: Vec<StoryArc>,
    pub filler: Vec<Scenario>,
    pub interruptions: Vec<Scenario>,
    pub fallback: Scenario,
}

impl ContentCatalog {
    /// The authored outbreak campaign.
    pub fn standard() -> Self {
        Self {
            main_story: content::main_story(),
            balancing: content::balancing_events(),
            arcs: content::story_arcs(),
            filler: content::filler_pool(),
            interruptions: content::interruption_pool(),
            fallback: content::fallback(),
        }
    }

    /// A catalog with nothing but the fallback day.
    pub fn empty() -> Self {
        Self {
            main_story: BTreeMap::new(),
            balancing: Vec::new(),
            arcs: Vec::new(),
            filler: Vec::new(),
            interruptions: Vec::new(),
            fallback: content::fallback(),
        }
    }

    pub fn arc(&self, id: ArcId) -> Option<&StoryArc> {
        self.arcs.iter().find(|arc| arc.id == id)
    }

    /// Fallback that is guaranteed to offer at least one choice.
    pub fn playable_fallback(&self) -> Scenario {
        if self.fallback.is_playable() {
            self.fallback.clone()
        } else {
            content::fallback()
        }
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_playable() {
        let catalog = ContentCatalog::standard();
        assert!(catalog.fallback.is_playable());
        assert!(catalog.main_story.contains_key(&1));
        for scenario in catalog.main_story.values() {
            assert!(scenario.is_playable(), "{} has no choices", scenario.id);
            assert_eq!(scenario.kind, ScenarioKind::MainStory);
        }
        for event in &catalog.balancing {
            assert!((2..=3).contains(&event.scenario.choices.len()));
        }
        for scenario in &catalog.interruptions {
            assert!(scenario.kind.is_interruption());
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = ContentCatalog::standard();
        let mut ids: Vec<&str> = catalog
            .main_story
            .values()
            .chain(catalog.balancing.iter().map(|event| &event.scenario))
            .chain(catalog.arcs.iter().flat_map(|arc| arc.scenarios.iter()))
            .chain(catalog.filler.iter())
            .chain(catalog.interruptions.iter())
            .map(|scenario| scenario.id.as_str())
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn day_one_keep_quiet_matches_the_briefing() {
        let catalog = ContentCatalog::standard();
        let keep_quiet = &catalog.main_story[&1].choices[0];
        assert!(keep_quiet.effects.contains(&Effect::adjust(Stat::Economy, 0.02)));
        assert!(keep_quiet.effects.contains(&Effect::adjust(Stat::Infection, 0.05)));
        assert!(keep_quiet.effects.contains(&Effect::adjust(Stat::Trust, -0.02)));
    }

    #[test]
    fn triggers_read_the_state() {
        let mut state = NationState::default();
        let low_economy = Trigger::Below {
            stat: Stat::Economy,
            threshold: 0.25,
        };
        assert!(!low_economy.holds(&state));
        state.stats.economy = 0.2;
        assert!(low_economy.holds(&state));

        let cure = Trigger::CounterAtLeast {
            counter: Counter::CureProgress,
            value: 50,
        };
        assert!(!cure.holds(&state));
        state.flags.add(Counter::CureProgress, 50);
        assert!(cure.holds(&state));

        let troops = Trigger::FlagSet {
            flag: Flag::Militarized,
        };
        assert!(!troops.holds(&state));
        state.flags.set_once(Flag::Militarized);
        assert!(troops.holds(&state));
    }
}
