use colored::Color as ColoredColor;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// The five bounded ratios describing the nation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Population,
    Economy,
    Trust,
    Infection,
    HealthcareLoad,
}

impl Stat {
    pub const ALL: [Stat; 5] = [
        Stat::Population,
        Stat::Economy,
        Stat::Trust,
        Stat::Infection,
        Stat::HealthcareLoad,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stat::Population => "POPULATION",
            Stat::Economy => "ECONOMY",
            Stat::Trust => "TRUST",
            Stat::Infection => "INFECTION",
            Stat::HealthcareLoad => "HOSPITALS",
        }
    }

    /// Threat stats read worse as they rise.
    pub fn is_threat(&self) -> bool {
        matches!(self, Stat::Infection | Stat::HealthcareLoad)
    }

    pub fn color(&self) -> Color {
        match self {
            Stat::Population => Color::LightGreen,
            Stat::Economy => Color::Yellow,
            Stat::Trust => Color::Cyan,
            Stat::Infection => Color::LightRed,
            Stat::HealthcareLoad => Color::Magenta,
        }
    }

    pub fn logging_color(&self) -> ColoredColor {
        match self {
            Stat::Population => ColoredColor::BrightGreen,
            Stat::Economy => ColoredColor::Yellow,
            Stat::Trust => ColoredColor::Cyan,
            Stat::Infection => ColoredColor::BrightRed,
            Stat::HealthcareLoad => ColoredColor::Magenta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisor {
    ChiefMedicalOfficer,
    FinanceMinister,
    DefenseChief,
}

impl Advisor {
    pub const ALL: [Advisor; 3] = [
        Advisor::ChiefMedicalOfficer,
        Advisor::FinanceMinister,
        Advisor::DefenseChief,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Advisor::ChiefMedicalOfficer => "Chief Medical Officer",
            Advisor::FinanceMinister => "Finance Minister",
            Advisor::DefenseChief => "Defense Chief",
        }
    }

    pub fn short(&self) -> &'static str {
        match self {
            Advisor::ChiefMedicalOfficer => "CMO",
            Advisor::FinanceMinister => "FIN",
            Advisor::DefenseChief => "DEF",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Advisor::ChiefMedicalOfficer => Color::LightBlue,
            Advisor::FinanceMinister => Color::Yellow,
            Advisor::DefenseChief => Color::Red,
        }
    }

    pub fn logging_color(&self) -> ColoredColor {
        match self {
            Advisor::ChiefMedicalOfficer => ColoredColor::BrightBlue,
            Advisor::FinanceMinister => ColoredColor::Yellow,
            Advisor::DefenseChief => ColoredColor::Red,
        }
    }
}
