//! Colorized daily pulse for quick CLI scanning.

use bevy_ecs::prelude::*;
use colored::{Color, Colorize};
use tracing::info;

use crate::simulation::{
    Chronicle, ChronicleEntry, DayClock, DelayedEffectQueue, NationState, Stat, format_cost,
    percent, sentiment_color,
};

pub(crate) fn badge(label: &str, color: Color) -> String {
    format!("[{}]", label).color(color).to_string()
}

fn stat_badge(stat: Stat, value: f32) -> String {
    let reading = format!("{} {}", stat.name(), percent(value));
    let alarming = if stat.is_threat() {
        value > 0.7
    } else {
        value < 0.3
    };
    let tag = format!("[{}]", reading).color(stat.logging_color());
    if alarming {
        tag.bold().to_string()
    } else {
        tag.to_string()
    }
}

pub fn format_chronicle_line(entry: &ChronicleEntry) -> String {
    format!(
        "{} {} {}",
        badge(entry.category(), sentiment_color(entry.sentiment())),
        badge(&format!("Day {}", entry.day), Color::BrightBlack),
        entry.headline()
    )
}

pub fn logging_system(
    clock: Res<DayClock>,
    state: Res<NationState>,
    queue: Res<DelayedEffectQueue>,
    chronicle: Res<Chronicle>,
) {
    let header_line = format!(
        "{} {} {} {}",
        badge("Nation", Color::BrightWhite),
        badge(&format!("Dawn of day {}", clock.day + 1), Color::BrightBlack),
        badge(
            &format!("Cost {}", format_cost(state.cumulative_cost)),
            Color::Yellow
        ),
        badge(&format!("Pending {}", queue.len()), Color::BrightBlue),
    );

    let stat_line = Stat::ALL
        .iter()
        .map(|stat| stat_badge(*stat, state.stat(*stat)))
        .collect::<Vec<_>>()
        .join(" ");

    let cabinet_line = state
        .advisors
        .iter()
        .map(|(advisor, loyalty)| {
            badge(
                &format!("{} {:.0}", advisor.short(), loyalty),
                advisor.logging_color(),
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![header_line, stat_line, cabinet_line];
    lines.extend(
        chronicle
            .recent(1)
            .filter(|entry| entry.day >= clock.day)
            .map(format_chronicle_line),
    );

    info!("\n{}", lines.join("\n"));
}
