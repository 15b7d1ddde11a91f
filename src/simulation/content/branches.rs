//! Threshold-triggered content: balancing lifelines and story arcs.

use crate::simulation::Advisor::*;
use crate::simulation::Stat::*;
use crate::simulation::{
    ArcId, BalancingEvent, Choice, Counter, Effect, Flag, Scenario, ScenarioKind, StoryArc,
    Trigger,
};

fn lifeline(
    trigger: Trigger,
    id: &str,
    title: &str,
    text: &str,
    choices: Vec<Choice>,
) -> BalancingEvent {
    BalancingEvent {
        trigger,
        scenario: Scenario::new(id, ScenarioKind::Balancing, title, text, choices),
    }
}

/// One-shot recovery opportunities, checked in this order.
pub fn balancing_events() -> Vec<BalancingEvent> {
    vec![
        lifeline(
            Trigger::Below {
                stat: Economy,
                threshold: 0.25,
            },
            "imf_bailout",
            "LIFELINE: THE BAILOUT OFFER",
            "An international monetary fund offers emergency credit. The conditions are \
             brutal: public spending cuts and foreign auditors in every ministry.",
            vec![
                Choice::new(
                    "Accept the loan and its conditions.",
                    vec![
                        Effect::adjust(Economy, 0.20),
                        Effect::adjust(Trust, -0.08),
                        Effect::cost(-250.0),
                        Effect::loyalty(FinanceMinister, 10.0),
                    ],
                ),
                Choice::new(
                    "Print money instead.",
                    vec![
                        Effect::adjust(Economy, 0.10),
                        Effect::delay(4, vec![Effect::adjust(Economy, -0.06)]),
                    ],
                ),
                Choice::new(
                    "Refuse. We stand alone.",
                    vec![Effect::adjust(Trust, 0.05), Effect::loyalty(FinanceMinister, -10.0)],
                ),
            ],
        ),
        lifeline(
            Trigger::Below {
                stat: Trust,
                threshold: 0.25,
            },
            "national_address",
            "LIFELINE: THE NATIONAL ADDRESS",
            "Your approval has collapsed. Advisors suggest a televised address, but the \
             words you choose will be remembered.",
            vec![
                Choice::new(
                    "Admit the mistakes. Apologize.",
                    vec![
                        Effect::adjust(Trust, 0.15),
                        Effect::lower(Flag::CensoredMedia),
                        Effect::loyalty(DefenseChief, -5.0),
                    ],
                ),
                Choice::new(
                    "Blame foreign saboteurs.",
                    vec![
                        Effect::adjust(Trust, 0.08),
                        Effect::adjust(Economy, -0.05),
                        Effect::delay(6, vec![Effect::adjust(Trust, -0.05)]),
                    ],
                ),
            ],
        ),
        lifeline(
            Trigger::Above {
                stat: HealthcareLoad,
                threshold: 0.85,
            },
            "field_hospitals",
            "LIFELINE: FIELD HOSPITALS",
            "The army can raise field hospitals in stadiums within forty-eight hours. \
             Volunteers from abroad are also offering to come.",
            vec![
                Choice::new(
                    "Let the army build them.",
                    vec![
                        Effect::adjust(HealthcareLoad, -0.25),
                        Effect::adjust(Economy, -0.05),
                        Effect::cost(120.0),
                        Effect::loyalty(DefenseChief, 10.0),
                    ],
                ),
                Choice::new(
                    "Accept the foreign volunteers.",
                    vec![
                        Effect::adjust(HealthcareLoad, -0.15),
                        Effect::adjust(Trust, 0.03),
                        Effect::adjust(Infection, 0.02),
                        Effect::loyalty(ChiefMedicalOfficer, 10.0),
                    ],
                ),
            ],
        ),
        lifeline(
            Trigger::Below {
                stat: Population,
                threshold: 0.45,
            },
            "repopulation_drive",
            "LIFELINE: THE EMPTY CITIES",
            "Whole districts stand empty. Refugees from the collapsed south ask to be \
             resettled in the capital.",
            vec![
                Choice::new(
                    "Open the capital to the refugees.",
                    vec![
                        Effect::adjust(Population, 0.08),
                        Effect::adjust(Infection, 0.04),
                        Effect::adjust(Trust, 0.05),
                    ],
                ),
                Choice::new(
                    "Quarantine them outside the walls.",
                    vec![
                        Effect::adjust(Population, 0.03),
                        Effect::adjust(Trust, -0.05),
                        Effect::loyalty(DefenseChief, 5.0),
                    ],
                ),
            ],
        ),
        lifeline(
            Trigger::FlagSet {
                flag: Flag::Militarized,
            },
            "checkpoint_tribunal",
            "LIFELINE: THE CHECKPOINT TRIBUNAL",
            "Footage from a quarantine checkpoint shows soldiers beating a family who tried              to reach a hospital. The army wants it buried. The street wants a trial.",
            vec![
                Choice::new(
                    "Open a public tribunal and pull the troops back.",
                    vec![
                        Effect::adjust(Trust, 0.08),
                        Effect::lower(Flag::Militarized),
                        Effect::loyalty(DefenseChief, -15.0),
                    ],
                ),
                Choice::new(
                    "Seal the footage. The checkpoints stay.",
                    vec![
                        Effect::adjust(Trust, -0.06),
                        Effect::raise(Flag::CensoredMedia),
                        Effect::loyalty(DefenseChief, 5.0),
                    ],
                ),
            ],
        ),
    ]
}

fn arc_scene(arc: ArcId, id: &str, title: &str, text: &str, choices: Vec<Choice>) -> Scenario {
    Scenario::new(id, ScenarioKind::Arc(arc), title, text, choices)
}

/// Alternate storylines entered when their trigger holds on the main line.
pub fn story_arcs() -> Vec<StoryArc> {
    vec![
        StoryArc {
            id: ArcId::Riots,
            trigger: Trigger::Below {
                stat: Trust,
                threshold: 0.30,
            },
            scenarios: vec![
                arc_scene(
                    ArcId::Riots,
                    "riots_barricades",
                    "UNREST: THE BARRICADES",
                    "Protesters have barricaded the ministry district. They chant your name \
                     beside the names of the dead.",
                    vec![
                        Choice::new(
                            "Send in the riot police.",
                            vec![
                                Effect::adjust(Trust, -0.08),
                                Effect::adjust(Economy, 0.03),
                                Effect::raise(Flag::Militarized),
                                Effect::loyalty(DefenseChief, 10.0),
                            ],
                        ),
                        Choice::new(
                            "Receive a delegation.",
                            vec![
                                Effect::adjust(Trust, 0.08),
                                Effect::adjust(Economy, -0.04),
                                Effect::loyalty(DefenseChief, -10.0),
                            ],
                        ),
                    ],
                ),
                arc_scene(
                    ArcId::Riots,
                    "riots_occupation",
                    "UNREST: THE OCCUPATION",
                    "Strikers occupy the central rail depot. Food and medicine stop moving.",
                    vec![
                        Choice::new(
                            "Meet their demands.",
                            vec![Effect::adjust(Trust, 0.10), Effect::adjust(Economy, -0.08)],
                        ),
                        Choice::new(
                            "Break the strike.",
                            vec![
                                Effect::adjust(Economy, 0.06),
                                Effect::adjust(Trust, -0.10),
                                Effect::delay(3, vec![Effect::adjust(Trust, -0.05)]),
                            ],
                        ),
                    ],
                ),
                arc_scene(
                    ArcId::Riots,
                    "riots_reckoning",
                    "UNREST: THE RECKONING",
                    "The opposition demands your resignation. The army waits for your word.",
                    vec![
                        Choice::new(
                            "Call early elections.",
                            vec![
                                Effect::adjust(Trust, 0.15),
                                Effect::adjust(Economy, -0.05),
                                Effect::loyalty(FinanceMinister, -10.0),
                            ],
                        ),
                        Choice::new(
                            "Declare a state of emergency.",
                            vec![
                                Effect::adjust(Trust, -0.10),
                                Effect::raise(Flag::Militarized),
                                Effect::loyalty(DefenseChief, 10.0),
                            ],
                        ),
                    ],
                ),
            ],
        },
        StoryArc {
            id: ArcId::CureRace,
            trigger: Trigger::CounterAtLeast {
                counter: Counter::CureProgress,
                value: 50,
            },
            scenarios: vec![
                arc_scene(
                    ArcId::CureRace,
                    "cure_formula",
                    "CURE RACE: THE FORMULA",
                    "The lab has a working formula. Three governments have already asked for it.",
                    vec![
                        Choice::new(
                            "Publish the formula openly.",
                            vec![
                                Effect::adjust(Trust, 0.08),
                                Effect::adjust(Economy, -0.03),
                                Effect::count(Counter::CureProgress, 20),
                                Effect::loyalty(ChiefMedicalOfficer, 10.0),
                            ],
                        ),
                        Choice::new(
                            "Classify it.",
                            vec![
                                Effect::adjust(Economy, 0.04),
                                Effect::count(Counter::CureProgress, 10),
                                Effect::raise(Flag::CensoredMedia),
                                Effect::loyalty(FinanceMinister, 10.0),
                            ],
                        ),
                    ],
                ),
                arc_scene(
                    ArcId::CureRace,
                    "cure_bidding_war",
                    "CURE RACE: THE BIDDING WAR",
                    "Foreign manufacturers bid for production rights. Our own factories could \
                     do it, slowly, at enormous cost.",
                    vec![
                        Choice::new(
                            "Sell production rights abroad.",
                            vec![
                                Effect::adjust(Economy, 0.12),
                                Effect::adjust(Trust, -0.05),
                                Effect::cost(-400.0),
                                Effect::raise(Flag::SoldPatents),
                            ],
                        ),
                        Choice::new(
                            "Nationalize production.",
                            vec![
                                Effect::adjust(Economy, -0.08),
                                Effect::adjust(Trust, 0.06),
                                Effect::cost(500.0),
                                Effect::loyalty(FinanceMinister, -10.0),
                            ],
                        ),
                    ],
                ),
                arc_scene(
                    ArcId::CureRace,
                    "cure_rollout",
                    "CURE RACE: THE ROLLOUT",
                    "The first million doses are ready. There will not be enough for weeks.",
                    vec![
                        Choice::new(
                            "Vaccinate the frontline first.",
                            vec![
                                Effect::adjust(HealthcareLoad, -0.15),
                                Effect::adjust(Infection, -0.08),
                                Effect::Infectivity { factor: 0.6 },
                            ],
                        ),
                        Choice::new(
                            "Vaccinate by public lottery.",
                            vec![
                                Effect::adjust(Trust, 0.08),
                                Effect::adjust(Infection, -0.05),
                                Effect::Infectivity { factor: 0.7 },
                            ],
                        ),
                    ],
                ),
            ],
        },
    ]
}
