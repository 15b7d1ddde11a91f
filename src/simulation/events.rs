//! Structured session chronicle shown in the dashboard and the JSON feed.

use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::simulation::{Advisor, ArcId, Ending, Flag};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChronicleKind {
    Decision {
        scenario: String,
        choice: String,
    },
    DelayedEffectsLanded {
        count: usize,
    },
    FlagRaised {
        flag: Flag,
    },
    Ultimatum {
        advisor: Advisor,
    },
    ArcShift {
        from: ArcId,
        to: ArcId,
    },
    Ending {
        ending: Ending,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChronicleEntry {
    pub day: u32,
    pub kind: ChronicleKind,
}

impl ChronicleEntry {
    pub fn decision(day: u32, scenario: &str, choice: &str) -> Self {
        Self {
            day,
            kind: ChronicleKind::Decision {
                scenario: scenario.to_string(),
                choice: choice.to_string(),
            },
        }
    }

    pub fn delayed(day: u32, count: usize) -> Self {
        Self {
            day,
            kind: ChronicleKind::DelayedEffectsLanded { count },
        }
    }

    pub fn flag(day: u32, flag: Flag) -> Self {
        Self {
            day,
            kind: ChronicleKind::FlagRaised { flag },
        }
    }

    pub fn ultimatum(day: u32, advisor: Advisor) -> Self {
        Self {
            day,
            kind: ChronicleKind::Ultimatum { advisor },
        }
    }

    pub fn arc_shift(day: u32, from: ArcId, to: ArcId) -> Self {
        Self {
            day,
            kind: ChronicleKind::ArcShift { from, to },
        }
    }

    pub fn ending(day: u32, ending: Ending) -> Self {
        Self {
            day,
            kind: ChronicleKind::Ending { ending },
        }
    }

    pub fn category(&self) -> &'static str {
        match &self.kind {
            ChronicleKind::Decision { .. } => "Decision",
            ChronicleKind::DelayedEffectsLanded { .. } => "Fallout",
            ChronicleKind::FlagRaised { .. } => "Record",
            ChronicleKind::Ultimatum { .. } => "Cabinet",
            ChronicleKind::ArcShift { .. } => "Story",
            ChronicleKind::Ending { .. } => "Ending",
        }
    }

    pub fn sentiment(&self) -> Sentiment {
        match &self.kind {
            ChronicleKind::Decision { .. } => Sentiment::Neutral,
            ChronicleKind::DelayedEffectsLanded { .. } => Sentiment::Negative,
            ChronicleKind::FlagRaised { .. } => Sentiment::Neutral,
            ChronicleKind::Ultimatum { .. } => Sentiment::Negative,
            ChronicleKind::ArcShift { .. } => Sentiment::Neutral,
            ChronicleKind::Ending { ending } if ending.is_victory() => Sentiment::Positive,
            ChronicleKind::Ending { .. } => Sentiment::Negative,
        }
    }

    pub fn headline(&self) -> String {
        match &self.kind {
            ChronicleKind::Decision { scenario, choice } => format!("{scenario}: {choice}"),
            ChronicleKind::DelayedEffectsLanded { count } => {
                format!("{count} earlier decision(s) came due")
            }
            ChronicleKind::FlagRaised { flag } => format!("On record: {flag:?}"),
            ChronicleKind::Ultimatum { advisor } => format!("{} walked out", advisor.name()),
            ChronicleKind::ArcShift { from, to } => {
                format!("Story moved from {} to {}", from.label(), to.label())
            }
            ChronicleKind::Ending { ending } => format!("ENDING: {}", ending.label()),
        }
    }
}

/// Bounded log; the oldest entry drops once capacity is reached.
#[derive(Debug, Resource)]
pub struct Chronicle {
    entries: VecDeque<ChronicleEntry>,
    capacity: usize,
}

impl Chronicle {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: ChronicleEntry) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn snapshot(&self) -> Vec<ChronicleEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn recent(&self, count: usize) -> impl Iterator<Item = &ChronicleEntry> {
        self.entries.iter().rev().take(count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Chronicle {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chronicle_drops_oldest_at_capacity() {
        let mut chronicle = Chronicle::new(2);
        chronicle.push(ChronicleEntry::delayed(1, 1));
        chronicle.push(ChronicleEntry::delayed(2, 1));
        chronicle.push(ChronicleEntry::delayed(3, 1));

        let days: Vec<u32> = chronicle.snapshot().iter().map(|entry| entry.day).collect();
        assert_eq!(days, vec![2, 3]);
        assert_eq!(chronicle.recent(1).next().map(|entry| entry.day), Some(3));
    }

    #[test]
    fn ending_sentiment_follows_the_outcome() {
        let win = ChronicleEntry::ending(20, Ending::ControlledEradication);
        let loss = ChronicleEntry::ending(20, Ending::Extinction);
        assert_eq!(win.sentiment(), Sentiment::Positive);
        assert_eq!(loss.sentiment(), Sentiment::Negative);
        assert_eq!(loss.headline(), "ENDING: HUMAN EXTINCTION");
    }
}
