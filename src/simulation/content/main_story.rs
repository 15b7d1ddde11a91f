//! Fixed-day story beats.

use std::collections::BTreeMap;

use crate::simulation::Advisor::*;
use crate::simulation::Stat::*;
use crate::simulation::{Choice, Counter, Effect, Flag, Scenario, ScenarioKind};

fn beat(day: u32, id: &str, title: &str, text: &str, choices: Vec<Choice>) -> (u32, Scenario) {
    (
        day,
        Scenario::new(
            id,
            ScenarioKind::MainStory,
            format!("DAY {day}: {title}"),
            text,
            choices,
        ),
    )
}

pub fn main_story() -> BTreeMap<u32, Scenario> {
    BTreeMap::from([
        beat(
            1,
            "patient_zero",
            "PATIENT ZERO",
            "Reports from the capital's general hospital indicate a cluster of respiratory \
             failures. The mortality rate is abnormally high. Intelligence suggests a novel \
             pathogen.",
            vec![
                Choice::new(
                    "Keep it quiet. Avoid panic.",
                    vec![
                        Effect::adjust(Economy, 0.02),
                        Effect::adjust(Infection, 0.05),
                        Effect::adjust(Trust, -0.02),
                        Effect::raise(Flag::CensoredMedia),
                        Effect::loyalty(ChiefMedicalOfficer, -10.0),
                        Effect::delay(7, vec![Effect::adjust(Trust, -0.08)]),
                    ],
                ),
                Choice::new(
                    "Declare a public health emergency.",
                    vec![
                        Effect::adjust(Economy, -0.05),
                        Effect::adjust(Trust, 0.05),
                        Effect::adjust(HealthcareLoad, -0.05),
                        Effect::loyalty(ChiefMedicalOfficer, 10.0),
                        Effect::loyalty(FinanceMinister, -5.0),
                    ],
                ),
                Choice::new(
                    "Delay the announcement until the data firms up.",
                    vec![
                        Effect::adjust(Trust, 0.02),
                        Effect::delay(5, vec![Effect::scale(Infection, 1.8)]),
                    ],
                ),
            ],
        ),
        beat(
            2,
            "border_control",
            "BORDER CONTROL",
            "Neighboring nations are watching. Closing borders will sever trade routes \
             essential for food and tech, but might slow the viral entry.",
            vec![
                Choice::new(
                    "Close all borders immediately.",
                    vec![
                        Effect::adjust(Economy, -0.10),
                        Effect::adjust(Infection, -0.03),
                        Effect::adjust(Trust, 0.03),
                        Effect::loyalty(FinanceMinister, -10.0),
                    ],
                ),
                Choice::new(
                    "Keep trade open with screening.",
                    vec![
                        Effect::adjust(Economy, 0.03),
                        Effect::adjust(Infection, 0.04),
                        Effect::loyalty(FinanceMinister, 5.0),
                    ],
                ),
            ],
        ),
        beat(
            3,
            "stock_market",
            "THE STOCK MARKET",
            "The index is plummeting. Investors are demanding reassurance.",
            vec![
                Choice::new(
                    "Inject state funds to stabilize markets.",
                    vec![
                        Effect::adjust(Economy, 0.10),
                        Effect::adjust(HealthcareLoad, 0.05),
                        Effect::cost(150.0),
                        Effect::loyalty(FinanceMinister, 10.0),
                    ],
                ),
                Choice::new(
                    "Let the market crash. Save funds for hospitals.",
                    vec![
                        Effect::adjust(Economy, -0.15),
                        Effect::adjust(HealthcareLoad, -0.10),
                        Effect::loyalty(FinanceMinister, -15.0),
                        Effect::loyalty(ChiefMedicalOfficer, 5.0),
                    ],
                ),
            ],
        ),
        beat(
            4,
            "whistleblower",
            "THE WHISTLEBLOWER",
            "A doctor posted photos of overflowing morgues. It's viral. We can arrest the \
             doctor for 'inciting panic' or validate the claims.",
            vec![
                Choice::new(
                    "Arrest the doctor. Delete the photos.",
                    vec![
                        Effect::adjust(Trust, -0.15),
                        Effect::adjust(Economy, 0.02),
                        Effect::raise(Flag::CensoredMedia),
                        Effect::loyalty(ChiefMedicalOfficer, -15.0),
                    ],
                ),
                Choice::new(
                    "Validate the report. Warn the public.",
                    vec![
                        Effect::adjust(Trust, 0.10),
                        Effect::adjust(Economy, -0.05),
                        Effect::loyalty(ChiefMedicalOfficer, 5.0),
                    ],
                ),
            ],
        ),
        beat(
            5,
            "lockdown_protocol",
            "LOCKDOWN PROTOCOL",
            "Infection is spiking. Advisors suggest a total home confinement order.",
            vec![
                Choice::new(
                    "Enforce total lockdown.",
                    vec![
                        Effect::adjust(Economy, -0.15),
                        Effect::adjust(Infection, -0.10),
                        Effect::adjust(Trust, -0.05),
                        Effect::raise(Flag::Lockdown),
                        Effect::loyalty(FinanceMinister, -10.0),
                        Effect::loyalty(ChiefMedicalOfficer, 10.0),
                    ],
                ),
                Choice::new(
                    "Recommend 'social distancing' only.",
                    vec![
                        Effect::adjust(Economy, -0.02),
                        Effect::adjust(Infection, 0.08),
                        Effect::adjust(Trust, 0.05),
                        Effect::loyalty(ChiefMedicalOfficer, -10.0),
                    ],
                ),
            ],
        ),
        beat(
            7,
            "religious_gathering",
            "RELIGIOUS GATHERING",
            "A major religious festival is tomorrow. Clergy demand the right to gather.",
            vec![
                Choice::new(
                    "Ban the gathering.",
                    vec![
                        Effect::adjust(Trust, -0.15),
                        Effect::adjust(Infection, -0.05),
                    ],
                ),
                Choice::new(
                    "Allow it with 'guidelines'.",
                    vec![
                        Effect::adjust(Trust, 0.10),
                        Effect::adjust(Infection, 0.15),
                        Effect::adjust(HealthcareLoad, 0.10),
                        Effect::loyalty(ChiefMedicalOfficer, -10.0),
                    ],
                ),
            ],
        ),
        beat(
            8,
            "triage_ethics",
            "TRIAGE ETHICS",
            "Hospitals are at capacity. Doctors ask for permission to stop treating the \
             elderly to save the young.",
            vec![
                Choice::new(
                    "Authorize aggressive triage.",
                    vec![
                        Effect::adjust(HealthcareLoad, -0.20),
                        Effect::adjust(Population, -0.05),
                        Effect::adjust(Trust, -0.20),
                    ],
                ),
                Choice::new(
                    "First come, first served.",
                    vec![
                        Effect::adjust(HealthcareLoad, 0.20),
                        Effect::adjust(Population, -0.03),
                        Effect::adjust(Trust, 0.05),
                        Effect::loyalty(ChiefMedicalOfficer, -5.0),
                    ],
                ),
            ],
        ),
        beat(
            9,
            "vaccine_patents",
            "VACCINE PATENTS",
            "Pharmaceutical firms offer rapid vaccine deployment in exchange for exclusive \
             global patents.",
            vec![
                Choice::new(
                    "Fund emergency vaccine trials.",
                    vec![
                        Effect::cost(300.0),
                        Effect::Lethality { factor: 0.8 },
                        Effect::count(Counter::CureProgress, 20),
                        Effect::delay(10, vec![Effect::adjust(Trust, -0.10)]),
                        Effect::loyalty(FinanceMinister, -10.0),
                    ],
                ),
                Choice::new(
                    "Sell the patents to stabilize the economy.",
                    vec![
                        Effect::cost(-200.0),
                        Effect::adjust(Economy, 0.05),
                        Effect::raise(Flag::SoldPatents),
                        Effect::delay(8, vec![Effect::Lethality { factor: 1.4 }]),
                        Effect::loyalty(FinanceMinister, 10.0),
                        Effect::loyalty(ChiefMedicalOfficer, -10.0),
                    ],
                ),
            ],
        ),
        beat(
            11,
            "mutation",
            "THE MUTATION",
            "The virus has mutated. It's now airborne and more lethal.",
            vec![
                Choice::new(
                    "Suppress this information.",
                    vec![
                        Effect::adjust(Trust, 0.05),
                        Effect::adjust(Infection, 0.12),
                        Effect::Infectivity { factor: 1.2 },
                        Effect::raise(Flag::CensoredMedia),
                        Effect::loyalty(ChiefMedicalOfficer, -15.0),
                    ],
                ),
                Choice::new(
                    "Announce the mutation.",
                    vec![
                        Effect::adjust(Trust, -0.12),
                        Effect::adjust(Infection, -0.04),
                        Effect::Infectivity { factor: 1.1 },
                    ],
                ),
            ],
        ),
        beat(
            12,
            "martial_law",
            "MARTIAL LAW",
            "Mass protests block hospital access. Looting is widespread and local police \
             have deserted. Security forces demand authorization.",
            vec![
                Choice::new(
                    "Deploy a military quarantine.",
                    vec![
                        Effect::adjust(Trust, -0.20),
                        Effect::adjust(Population, -0.02),
                        Effect::adjust(Economy, 0.05),
                        Effect::raise(Flag::Militarized),
                        Effect::raise(Flag::WeaponizedQuarantine),
                        Effect::loyalty(DefenseChief, 15.0),
                        Effect::delay(6, vec![Effect::adjust(Trust, -0.10)]),
                    ],
                ),
                Choice::new(
                    "Negotiate with protest leaders.",
                    vec![
                        Effect::adjust(Trust, 0.10),
                        Effect::adjust(Economy, -0.10),
                        Effect::loyalty(DefenseChief, -15.0),
                        Effect::delay(4, vec![Effect::adjust(Trust, -0.05)]),
                    ],
                ),
            ],
        ),
        beat(
            14,
            "mass_disposal",
            "MASS DISPOSAL",
            "Morgues are full. Bodies are piling in the streets, spreading disease.",
            vec![
                Choice::new(
                    "Mass incineration.",
                    vec![
                        Effect::adjust(HealthcareLoad, -0.10),
                        Effect::adjust(Trust, -0.15),
                        Effect::adjust(Infection, -0.05),
                    ],
                ),
                Choice::new(
                    "Designate mass grave parks.",
                    vec![Effect::adjust(Trust, -0.05), Effect::adjust(Infection, 0.03)],
                ),
            ],
        ),
        beat(
            15,
            "vaccine_trials",
            "VACCINE TRIALS",
            "We have a prototype. It's unsafe. We can test it on prisoners.",
            vec![
                Choice::new(
                    "Authorize human experimentation.",
                    vec![
                        Effect::adjust(Trust, -0.20),
                        Effect::count(Counter::CureProgress, 50),
                        Effect::adjust(HealthcareLoad, -0.05),
                        Effect::loyalty(ChiefMedicalOfficer, -20.0),
                    ],
                ),
                Choice::new(
                    "Follow standard safety protocols.",
                    vec![
                        Effect::adjust(Trust, 0.05),
                        Effect::adjust(Population, -0.05),
                        Effect::count(Counter::CureProgress, 15),
                        Effect::loyalty(ChiefMedicalOfficer, 5.0),
                    ],
                ),
            ],
        ),
        beat(
            17,
            "regional_sacrifice",
            "REGIONAL SACRIFICE",
            "The infection is concentrated in the South. We can destroy bridges and cut \
             power and water to seal it in. Evacuation is impossible.",
            vec![
                Choice::new(
                    "Sacrifice the South.",
                    vec![
                        Effect::adjust(Population, -0.25),
                        Effect::adjust(Infection, -0.35),
                        Effect::adjust(Trust, -0.35),
                        Effect::adjust(Economy, -0.15),
                        Effect::raise(Flag::SacrificedRegion),
                        Effect::loyalty(ChiefMedicalOfficer, -20.0),
                    ],
                ),
                Choice::new(
                    "Refuse and preserve unity.",
                    vec![
                        Effect::adjust(Infection, 0.10),
                        Effect::adjust(HealthcareLoad, 0.20),
                        Effect::delay(5, vec![Effect::adjust(HealthcareLoad, 0.10)]),
                    ],
                ),
            ],
        ),
        beat(
            19,
            "the_immune",
            "THE IMMUNE",
            "A small group of children appear naturally immune. Invasive study could \
             yield a cure immediately.",
            vec![
                Choice::new(
                    "Sacrifice the children for the cure.",
                    vec![
                        Effect::adjust(Trust, -0.30),
                        Effect::count(Counter::CureProgress, 100),
                        Effect::adjust(Infection, -0.20),
                        Effect::loyalty(ChiefMedicalOfficer, -30.0),
                    ],
                ),
                Choice::new(
                    "Take samples non-invasively (slow).",
                    vec![
                        Effect::adjust(Trust, 0.10),
                        Effect::adjust(Infection, 0.05),
                        Effect::count(Counter::CureProgress, 25),
                    ],
                ),
            ],
        ),
        beat(
            20,
            "blackout",
            "BLACKOUT",
            "The power grid is failing due to lack of staff.",
            vec![
                Choice::new(
                    "Divert power to hospitals only.",
                    vec![
                        Effect::adjust(HealthcareLoad, -0.10),
                        Effect::adjust(Economy, -0.20),
                        Effect::adjust(Trust, -0.10),
                        Effect::loyalty(FinanceMinister, -10.0),
                    ],
                ),
                Choice::new(
                    "Rolling blackouts for everyone.",
                    vec![
                        Effect::adjust(HealthcareLoad, 0.15),
                        Effect::adjust(Economy, -0.10),
                    ],
                ),
            ],
        ),
        beat(
            21,
            "elites_ark",
            "THE ELITE'S ARK",
            "Rich citizens are building a secure bunker city, draining resources. The poor \
             are gathering to storm it.",
            vec![
                Choice::new(
                    "Protect the rich (preserve capital).",
                    vec![
                        Effect::adjust(Economy, 0.15),
                        Effect::adjust(Trust, -0.25),
                        Effect::adjust(Population, -0.05),
                        Effect::loyalty(FinanceMinister, 10.0),
                    ],
                ),
                Choice::new(
                    "Seize the bunker for the sick.",
                    vec![
                        Effect::adjust(HealthcareLoad, -0.15),
                        Effect::adjust(Economy, -0.20),
                        Effect::adjust(Trust, 0.20),
                        Effect::loyalty(FinanceMinister, -15.0),
                    ],
                ),
            ],
        ),
        beat(
            23,
            "last_resort",
            "LAST RESORT",
            "Scientists propose releasing a chemical agent that kills the virus but causes \
             sterility in half of all humans.",
            vec![
                Choice::new(
                    "Release the agent.",
                    vec![
                        Effect::set(Infection, 0.05),
                        Effect::adjust(Trust, -0.30),
                        Effect::raise(Flag::Sterility),
                    ],
                ),
                Choice::new(
                    "Wait for a better way.",
                    vec![Effect::adjust(Population, -0.10)],
                ),
            ],
        ),
        beat(
            25,
            "the_silence",
            "THE SILENCE",
            "Population density is so low the virus is naturally dying out. Survivors are \
             emerging.",
            vec![
                Choice::new(
                    "Rebuild the economy (forced labor).",
                    vec![Effect::adjust(Economy, 0.20), Effect::adjust(Trust, -0.20)],
                ),
                Choice::new(
                    "Mourn the dead (a day of silence).",
                    vec![Effect::adjust(Trust, 0.20), Effect::adjust(Economy, -0.10)],
                ),
            ],
        ),
    ])
}
