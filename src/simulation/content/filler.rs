use crate::simulation::Advisor::*;
use crate::simulation::Stat::*;
use crate::simulation::{Choice, Effect, Flag, Scenario, ScenarioKind};

fn briefing(id: &str, title: &str, text: &str, choices: Vec<Choice>) -> Scenario {
    Scenario::new(id, ScenarioKind::Filler, title, text, choices)
}

/// Days without a fixed beat draw from this pool without repetition.
pub fn filler_pool() -> Vec<Scenario> {
    vec![
        briefing(
            "supply_chains",
            "SUPPLY CHAINS",
            "Food supplies are running low in urban centers. Trucks are stalled at the \
             checkpoints.",
            vec![
                Choice::new(
                    "Nationalize food distribution.",
                    vec![
                        Effect::adjust(Economy, -0.05),
                        Effect::adjust(Trust, 0.05),
                        Effect::loyalty(FinanceMinister, -5.0),
                    ],
                ),
                Choice::new(
                    "Let the market decide prices.",
                    vec![
                        Effect::adjust(Economy, 0.05),
                        Effect::adjust(Trust, -0.10),
                        Effect::adjust(Population, -0.01),
                    ],
                ),
            ],
        ),
        briefing(
            "disinformation",
            "DISINFORMATION",
            "Social media claims drinking bleach cures the virus.",
            vec![
                Choice::new(
                    "Shut down the internet.",
                    vec![
                        Effect::adjust(Economy, -0.10),
                        Effect::adjust(Trust, -0.10),
                        Effect::raise(Flag::CensoredMedia),
                    ],
                ),
                Choice::new(
                    "Run a counter-campaign.",
                    vec![Effect::adjust(Economy, -0.02), Effect::adjust(Population, -0.01)],
                ),
            ],
        ),
        briefing(
            "propaganda",
            "PROPAGANDA",
            "Morale is low. The ministry of information has drafted a poster campaign.",
            vec![
                Choice::new(
                    "Broadcast that 'victory is near'.",
                    vec![
                        Effect::adjust(Trust, 0.05),
                        Effect::delay(5, vec![Effect::adjust(Trust, -0.08)]),
                    ],
                ),
                Choice::new(
                    "Tell the grim truth.",
                    vec![Effect::adjust(Trust, -0.02), Effect::adjust(Economy, -0.02)],
                ),
            ],
        ),
        briefing(
            "currency_crash",
            "CURRENCY CRASH",
            "The national currency is worthless. Barter is replacing cash in the markets.",
            vec![
                Choice::new(
                    "Adopt a foreign currency.",
                    vec![
                        Effect::adjust(Economy, 0.10),
                        Effect::adjust(Trust, -0.10),
                        Effect::loyalty(FinanceMinister, 5.0),
                    ],
                ),
                Choice::new(
                    "Issue a resource-backed scrip.",
                    vec![Effect::adjust(Economy, 0.05), Effect::adjust(Trust, 0.02)],
                ),
            ],
        ),
        briefing(
            "foreign_aid",
            "FOREIGN AID",
            "A superpower offers medical aid in exchange for military bases on our soil.",
            vec![
                Choice::new(
                    "Accept the aid.",
                    vec![
                        Effect::adjust(HealthcareLoad, -0.20),
                        Effect::adjust(Trust, -0.10),
                        Effect::loyalty(DefenseChief, -10.0),
                    ],
                ),
                Choice::new(
                    "Refuse. Sovereignty first.",
                    vec![Effect::adjust(HealthcareLoad, 0.05), Effect::adjust(Trust, 0.05)],
                ),
            ],
        ),
        briefing(
            "data_corruption",
            "DATA CORRUPTION",
            "Official infection figures don't match the graves being dug.",
            vec![
                Choice::new(
                    "Publish the real numbers.",
                    vec![
                        Effect::adjust(Trust, -0.10),
                        Effect::adjust(Infection, -0.05),
                        Effect::lower(Flag::CensoredMedia),
                    ],
                ),
                Choice::new(
                    "Keep publishing the fake numbers.",
                    vec![
                        Effect::adjust(Trust, 0.05),
                        Effect::adjust(Infection, 0.10),
                        Effect::raise(Flag::CensoredMedia),
                    ],
                ),
            ],
        ),
        briefing(
            "total_anarchy",
            "TOTAL ANARCHY",
            "Several regional governors have stopped answering your calls.",
            vec![
                Choice::new(
                    "Retake control by force.",
                    vec![
                        Effect::adjust(Population, -0.05),
                        Effect::adjust(Trust, -0.20),
                        Effect::raise(Flag::Militarized),
                        Effect::loyalty(DefenseChief, 10.0),
                    ],
                ),
                Choice::new(
                    "Grant them autonomy.",
                    vec![Effect::adjust(Economy, -0.20), Effect::adjust(Trust, 0.05)],
                ),
            ],
        ),
        briefing(
            "corporate_bailout",
            "CORPORATE BAILOUT",
            "The national airline and the largest bank are about to fail together.",
            vec![
                Choice::new(
                    "Bail them out.",
                    vec![
                        Effect::adjust(Economy, 0.10),
                        Effect::adjust(Trust, -0.10),
                        Effect::cost(200.0),
                    ],
                ),
                Choice::new(
                    "Let them fail.",
                    vec![
                        Effect::adjust(Economy, -0.10),
                        Effect::adjust(Trust, 0.05),
                        Effect::loyalty(FinanceMinister, -10.0),
                    ],
                ),
            ],
        ),
        briefing(
            "reopening_pressure",
            "REOPENING PRESSURE",
            "Shop owners march on the ministry, demanding an end to restrictions.",
            vec![
                Choice::new(
                    "Lift the lockdown.",
                    vec![
                        Effect::lower(Flag::Lockdown),
                        Effect::adjust(Economy, 0.08),
                        Effect::adjust(Infection, 0.04),
                        Effect::loyalty(FinanceMinister, 5.0),
                        Effect::loyalty(ChiefMedicalOfficer, -5.0),
                    ],
                ),
                Choice::new(
                    "Hold the line.",
                    vec![Effect::adjust(Trust, -0.05), Effect::adjust(Economy, -0.02)],
                ),
            ],
        ),
    ]
}

/// Shown when nothing else is available or the selected content is malformed.
pub fn fallback() -> Scenario {
    Scenario::new(
        "quiet_day",
        ScenarioKind::Fallback,
        "A QUIET DAY",
        "No new crises reached your desk today. The situation continues to evolve.",
        vec![
            Choice::new(
                "Use the lull to restock the hospitals.",
                vec![
                    Effect::adjust(HealthcareLoad, -0.02),
                    Effect::adjust(Economy, -0.01),
                    Effect::cost(25.0),
                ],
            ),
            Choice::new(
                "Let the markets breathe for a day.",
                vec![Effect::adjust(Economy, 0.02), Effect::adjust(Infection, 0.01)],
            ),
        ],
    )
}
