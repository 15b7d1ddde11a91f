use pandemic_directive::simulation::{ObserverSnapshot, Stat};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Sparkline},
};

use super::{MODERN_THEME, themed_block};

/// Day-by-day sparklines for every vital statistic.
pub fn render_trend_deck(frame: &mut Frame, area: Rect, snapshot: &ObserverSnapshot) {
    let block = themed_block("Trend Deck", MODERN_THEME.accent_a);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(inner);

    for (stat, column) in Stat::ALL.iter().zip(columns.iter()) {
        let series = series_from_history(snapshot.history.series(*stat), 100.0);
        let sparkline = Sparkline::default()
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .title(stat.name())
                    .title_style(Style::default().fg(stat.color())),
            )
            .data(&series)
            .max(100)
            .style(Style::default().fg(stat.color()));
        frame.render_widget(sparkline, *column);
    }
}

const TREND_WINDOW: usize = 120;

/// The most recent samples of a ratio series as whole percentage points.
///
/// Always yields at least one point so an empty history still draws a baseline.
pub fn series_from_history(history: &[f32], scale: f32) -> Vec<u64> {
    let recent = &history[history.len().saturating_sub(TREND_WINDOW)..];
    if recent.is_empty() {
        return vec![0];
    }
    recent
        .iter()
        .map(|ratio| (ratio.clamp(0.0, 1.0) * scale).round() as u64)
        .collect()
}
