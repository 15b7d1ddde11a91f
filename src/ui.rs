mod charts;
mod panels;

use charts::render_trend_deck;
use panels::{
    render_cabinet_panel, render_chronicle_panel, render_scenario_panel, render_vitals_panel,
};
use pandemic_directive::simulation::{ObserverSnapshot, TurnPhase, format_cost};
use ratatui::{
    prelude::*,
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub struct Theme {
    pub border: Color,
    pub accent_a: Color,
    pub accent_b: Color,
    pub alert: Color,
    pub muted: Color,
}

pub const MODERN_THEME: Theme = Theme {
    border: Color::DarkGray,
    accent_a: Color::LightCyan,
    accent_b: Color::LightYellow,
    alert: Color::LightRed,
    muted: Color::Gray,
};

#[derive(Debug, Clone)]
pub struct ConsoleState {
    pub seed: u64,
    pub log_path: String,
    /// Last key forwarded to the session, echoed in the footer
    pub last_input: Option<char>,
}

pub fn themed_block(title: &str, accent: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(MODERN_THEME.border))
        .title(format!(" {title} "))
        .title_style(Style::default().fg(accent).bold())
}

pub fn render(frame: &mut Frame, snapshot: &ObserverSnapshot, console: &ConsoleState) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(9),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_header(frame, main_layout[0], snapshot);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(main_layout[1]);
    render_scenario_panel(frame, body[0], snapshot);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(5)])
        .split(body[1]);
    render_vitals_panel(frame, side[0], snapshot);
    render_cabinet_panel(frame, side[1], snapshot);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_layout[2]);
    render_trend_deck(frame, bottom[0], snapshot);
    render_chronicle_panel(frame, bottom[1], snapshot);

    render_footer(frame, main_layout[3], snapshot, console);
}

fn render_header(frame: &mut Frame, area: Rect, snapshot: &ObserverSnapshot) {
    let (phase_label, phase_color) = match snapshot.phase {
        TurnPhase::AwaitingChoice => ("AWAITING ORDERS", MODERN_THEME.accent_a),
        TurnPhase::InterruptionActive => ("BREAKING NEWS", MODERN_THEME.accent_b),
        TurnPhase::Ended(_) => ("SESSION CLOSED", MODERN_THEME.alert),
    };

    let mut spans = vec![
        Span::styled(" PANDEMIC DIRECTIVE ", Style::default().bold()),
        Span::raw(" | "),
        Span::styled(
            format!("Day {}", snapshot.day),
            Style::default().fg(Color::White).bold(),
        ),
        Span::raw(" | "),
        Span::styled(phase_label, Style::default().fg(phase_color).bold()),
    ];
    if let Some(report) = &snapshot.report {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("Cost {}", format_cost(report.cumulative_cost)),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("Cure {}%", report.cure_progress.clamp(0, 100)),
            Style::default().fg(Color::LightGreen),
        ));
    }
    if snapshot.critical {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "CRITICAL",
            Style::default().fg(MODERN_THEME.alert).bold().rapid_blink(),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(MODERN_THEME.border)),
    );
    frame.render_widget(header, area);
}

fn render_footer(
    frame: &mut Frame,
    area: Rect,
    snapshot: &ObserverSnapshot,
    console: &ConsoleState,
) {
    let hint = if matches!(snapshot.phase, TurnPhase::Ended(_)) {
        "[q] quit"
    } else {
        "[1-9] choose  [q] quit"
    };
    let echo = console
        .last_input
        .map(|key| format!("  last input {key}"))
        .unwrap_or_default();

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(hint, Style::default().fg(MODERN_THEME.accent_a)),
        Span::styled(echo, Style::default().fg(MODERN_THEME.muted)),
        Span::styled(
            format!("  seed {}  log {}", console.seed, console.log_path),
            Style::default().fg(MODERN_THEME.muted),
        ),
    ]));
    frame.render_widget(footer, area);
}
