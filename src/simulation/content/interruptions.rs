//! Breaking news and advisor ultimatums. Neither consumes a day.

use crate::simulation::Advisor::*;
use crate::simulation::Stat::*;
use crate::simulation::{Advisor, Choice, Counter, Effect, Flag, Scenario, ScenarioKind};

fn breaking(id: &str, title: &str, text: &str, choices: Vec<Choice>) -> Scenario {
    Scenario::new(id, ScenarioKind::Interruption, title, text, choices)
}

pub fn interruption_pool() -> Vec<Scenario> {
    vec![
        breaking(
            "hospital_fire",
            "BREAKING: HOSPITAL FIRE",
            "An oxygen line has ignited in the east wing of the central hospital.",
            vec![
                Choice::new(
                    "Evacuate patients to schools.",
                    vec![Effect::adjust(HealthcareLoad, 0.05), Effect::adjust(Trust, 0.03)],
                ),
                Choice::new(
                    "Keep the other wings running.",
                    vec![
                        Effect::adjust(Population, -0.01),
                        Effect::adjust(HealthcareLoad, -0.02),
                    ],
                ),
            ],
        ),
        breaking(
            "leaked_memo",
            "BREAKING: LEAKED MEMO",
            "A cabinet memo estimating the true death toll is circulating online.",
            vec![
                Choice::new(
                    "Deny everything.",
                    vec![Effect::adjust(Trust, -0.05), Effect::raise(Flag::CensoredMedia)],
                ),
                Choice::new(
                    "Confirm it.",
                    vec![Effect::adjust(Trust, 0.02), Effect::adjust(Economy, -0.02)],
                ),
            ],
        ),
        breaking(
            "border_stampede",
            "BREAKING: STAMPEDE AT THE BORDER",
            "Thousands are pushing through the northern checkpoint.",
            vec![
                Choice::new(
                    "Open the gates.",
                    vec![Effect::adjust(Infection, 0.03), Effect::adjust(Trust, 0.03)],
                ),
                Choice::new(
                    "Hold the line.",
                    vec![Effect::adjust(Trust, -0.04), Effect::loyalty(DefenseChief, 5.0)],
                ),
            ],
        ),
        breaking(
            "celebrity_infected",
            "BREAKING: CELEBRITY INFECTED",
            "The country's most famous singer has been hospitalized.",
            vec![
                Choice::new(
                    "Turn it into a public health campaign.",
                    vec![Effect::adjust(Trust, 0.04), Effect::adjust(Infection, -0.01)],
                ),
                Choice::new(
                    "Respect their privacy.",
                    vec![Effect::adjust(Trust, -0.01)],
                ),
            ],
        ),
        breaking(
            "lab_power_surge",
            "BREAKING: LAB POWER SURGE",
            "A surge has knocked out the freezers at the national virology lab.",
            vec![
                Choice::new(
                    "Divert grid power to the lab.",
                    vec![
                        Effect::adjust(Economy, -0.03),
                        Effect::count(Counter::CureProgress, 10),
                    ],
                ),
                Choice::new(
                    "Let the backup generators cope.",
                    vec![Effect::cost(50.0)],
                ),
            ],
        ),
    ]
}

/// The one-time walkout scene of an advisor whose loyalty collapsed.
pub fn ultimatum(advisor: Advisor) -> Scenario {
    let (id, text, fallout) = match advisor {
        ChiefMedicalOfficer => (
            "ultimatum_chief_medical_officer",
            "The Chief Medical Officer has resigned on live television, accusing the \
             government of ignoring the science.",
            vec![Effect::adjust(Trust, -0.05), Effect::adjust(HealthcareLoad, 0.05)],
        ),
        FinanceMinister => (
            "ultimatum_finance_minister",
            "The Finance Minister has walked out and taken the central bank's confidence \
             with them.",
            vec![Effect::adjust(Economy, -0.05)],
        ),
        DefenseChief => (
            "ultimatum_defense_chief",
            "The Defense Chief has ordered the troops back to barracks and refuses your calls.",
            vec![Effect::adjust(Trust, -0.03), Effect::lower(Flag::Militarized)],
        ),
    };

    let mut effects = fallout;
    effects.push(Effect::loyalty(advisor, 45.0));

    Scenario::new(
        id,
        ScenarioKind::Ultimatum(advisor),
        format!("ULTIMATUM: {}", advisor.name().to_uppercase()),
        text,
        vec![Choice::new("Appoint a successor.", effects)],
    )
}
