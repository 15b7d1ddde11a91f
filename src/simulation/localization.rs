//! Display strings and color semantics shared by the log and the dashboard.

use colored::Color;

use crate::simulation::{ScenarioKind, Sentiment, StatusReport};

pub fn percent(value: f32) -> String {
    format!("{:.1}%", value * 100.0)
}

pub fn format_cost(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0 {
        out.push('-');
    }
    out.chars().rev().collect()
}

pub fn status_report_text(report: &StatusReport) -> String {
    let rule = "----------------------------";
    format!(
        "STATUS REPORT - DAY {day}\n{rule}\n\
         POPULATION: {population}\n\
         ECONOMY:    {economy}\n\
         TRUST:      {trust}\n\
         INFECTION:  {infection}\n\
         HOSPITALS:  {load} Load\n\
         {rule}",
        day = report.day,
        population = percent(report.population),
        economy = percent(report.economy),
        trust = percent(report.trust),
        infection = percent(report.infection),
        load = percent(report.healthcare_load),
    )
}

pub fn kind_color(kind: ScenarioKind) -> Color {
    match kind {
        ScenarioKind::MainStory => Color::BrightWhite,
        ScenarioKind::Balancing => Color::BrightGreen,
        ScenarioKind::Arc(_) => Color::BrightMagenta,
        ScenarioKind::Filler => Color::White,
        ScenarioKind::Fallback => Color::BrightBlack,
        ScenarioKind::Interruption => Color::BrightYellow,
        ScenarioKind::Ultimatum(_) => Color::BrightRed,
    }
}

pub fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => Color::BrightGreen,
        Sentiment::Neutral => Color::Yellow,
        Sentiment::Negative => Color::BrightRed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_percent_and_cost() {
        assert_eq!(percent(0.05), "5.0%");
        assert_eq!(percent(1.0), "100.0%");
        assert_eq!(format_cost(1234567.4), "1,234,567");
        assert_eq!(format_cost(-200.0), "-200");
        assert_eq!(format_cost(0.0), "0");
    }
}
