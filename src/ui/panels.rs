use pandemic_directive::simulation::{
    ObserverSnapshot, ScenarioKind, Sentiment, Stat, StatusReport, percent,
};
use ratatui::{
    prelude::*,
    style::Stylize,
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, Paragraph, Wrap},
};

use super::{MODERN_THEME, themed_block};

fn kind_accent(kind: Option<ScenarioKind>) -> Color {
    match kind {
        Some(ScenarioKind::Interruption) => MODERN_THEME.accent_b,
        Some(ScenarioKind::Ultimatum(_)) => MODERN_THEME.alert,
        Some(ScenarioKind::Balancing) => Color::LightGreen,
        Some(ScenarioKind::Arc(_)) => Color::LightMagenta,
        Some(_) => MODERN_THEME.accent_a,
        None => MODERN_THEME.alert,
    }
}

pub fn render_scenario_panel(frame: &mut Frame, area: Rect, snapshot: &ObserverSnapshot) {
    let Some(latest) = &snapshot.latest else {
        let waiting = Paragraph::new("Awaiting the first briefing...")
            .block(themed_block("Briefing", MODERN_THEME.accent_a));
        frame.render_widget(waiting, area);
        return;
    };

    let accent = kind_accent(latest.kind);
    let title = latest
        .kind
        .map(|kind| kind.label())
        .unwrap_or("Final Report");

    let mut lines: Vec<Line> = Vec::new();
    if let Some(action) = &latest.action {
        lines.push(Line::from(Span::styled(
            format!(">> {action}"),
            Style::default().fg(MODERN_THEME.muted).italic(),
        )));
    }
    if let Some(notice) = &latest.notice {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(MODERN_THEME.alert).bold(),
        )));
    }
    lines.push(Line::from(Span::styled(
        latest.headline.clone(),
        Style::default().fg(accent).bold(),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(latest.body.clone()));
    if !latest.ended {
        lines.push(Line::from(""));
        for (index, label) in latest.choices.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("[{}] ", index + 1),
                    Style::default().fg(accent).bold(),
                ),
                Span::raw(label.clone()),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(themed_block(title, accent));
    frame.render_widget(paragraph, area);
}

pub fn render_vitals_panel(frame: &mut Frame, area: Rect, snapshot: &ObserverSnapshot) {
    let block = themed_block("Vital Signs", MODERN_THEME.accent_a);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(report) = &snapshot.report else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2); 5])
        .split(inner);

    for (stat, row) in Stat::ALL.iter().zip(rows.iter()) {
        let value = stat_value(report, *stat);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(stat.color()).bg(Color::Black))
            .label(format!("{:<10} {}", stat.name(), percent(value)))
            .ratio(f64::from(value.clamp(0.0, 1.0)));
        frame.render_widget(gauge, *row);
    }
}

fn stat_value(report: &StatusReport, stat: Stat) -> f32 {
    match stat {
        Stat::Population => report.population,
        Stat::Economy => report.economy,
        Stat::Trust => report.trust,
        Stat::Infection => report.infection,
        Stat::HealthcareLoad => report.healthcare_load,
    }
}

pub fn render_cabinet_panel(frame: &mut Frame, area: Rect, snapshot: &ObserverSnapshot) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    if let Some(report) = &snapshot.report {
        for standing in &report.advisors {
            lines.push(Line::from(Span::styled(
                standing.advisor.name().to_string(),
                Style::default().fg(standing.advisor.color()),
            )));
            lines.push(create_bar(standing.loyalty, 100.0, 16, standing.advisor.color()));
        }
        lines.push(Line::from(vec![
            Span::styled("Virus ", Style::default().fg(MODERN_THEME.muted)),
            Span::raw(format!(
                "lethality x{:.2}  infectivity x{:.2}",
                report.lethality, report.infectivity
            )),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Pending ", Style::default().fg(MODERN_THEME.muted)),
            Span::raw(format!("{} delayed consequence(s)", report.pending_effects)),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(themed_block("Cabinet", MODERN_THEME.accent_b));
    frame.render_widget(paragraph, area);
}

pub fn render_chronicle_panel(frame: &mut Frame, area: Rect, snapshot: &ObserverSnapshot) {
    let items: Vec<ListItem> = snapshot
        .chronicle
        .iter()
        .rev()
        .take(area.height.saturating_sub(2) as usize)
        .map(|entry| {
            let color = match entry.sentiment() {
                Sentiment::Positive => Color::LightGreen,
                Sentiment::Neutral => Color::White,
                Sentiment::Negative => Color::LightRed,
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("D{:>2} ", entry.day),
                    Style::default().fg(MODERN_THEME.muted),
                ),
                Span::styled(
                    format!("[{}] ", entry.category()),
                    Style::default().fg(color).bold(),
                ),
                Span::raw(entry.headline()),
            ]))
        })
        .collect();

    let list = List::new(items).block(themed_block("Chronicle", MODERN_THEME.accent_b));
    frame.render_widget(list, area);
}

fn create_bar(value: f32, max_value: f32, max_width: usize, color: Color) -> Line<'static> {
    let percentage = (value / max_value).clamp(0.0, 1.0);
    let width = (percentage * max_width as f32) as usize;
    let bar_text = "█".repeat(width);
    let padding = " ".repeat(max_width - width);

    Line::from(vec![
        Span::raw("["),
        Span::styled(bar_text, Style::default().fg(color)),
        Span::raw(padding),
        Span::raw("]"),
        Span::from(format!(" {:.0}", value)),
    ])
}
