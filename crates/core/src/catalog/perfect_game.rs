//! Youth-baseball prospects, events, and development data behind `/perfect-game-analytics`.

use super::{Keyed, Scalars};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoutingLevel {
    Elite,
    High,
    Standard,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectNil {
    pub current_value: u64,
    pub projected_college: &'static str,
    /// Sums to 1.0.
    pub weight_factors: Scalars,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prospect {
    pub rank: u32,
    pub name: &'static str,
    pub position: &'static str,
    pub hometown: &'static str,
    pub graduation_year: i32,
    pub commitment: Option<&'static str>,
    pub physical_metrics: Scalars,
    pub cognitive_profile: Scalars,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nil_projection: Option<ProspectNil>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub name: &'static str,
    pub location: &'static str,
    pub dates: &'static str,
    pub team_count: u32,
    pub scouting_level: ScoutingLevel,
    pub cognitive_testing: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pathway {
    pub name: &'static str,
    pub description: &'static str,
    pub stages: &'static [&'static str],
    /// Share of athletes reaching the pathway's athletic milestone.
    #[serde(skip)]
    pub athletic_ratio: f64,
    /// Share reaching the business/brand milestone on the same pathway.
    #[serde(skip)]
    pub business_ratio: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AustinInsights {
    pub region: &'static str,
    pub ranked_prospects: u32,
    pub d1_commitments: u32,
    pub top_programs: &'static [&'static str],
    pub key_facilities: &'static [&'static str],
    pub market_notes: &'static [&'static str],
}

pub static PROSPECTS: &[Prospect] = &[
    Prospect {
        rank: 1,
        name: "Jackson Reyes",
        position: "SS",
        hometown: "Austin, TX",
        graduation_year: 2025,
        commitment: Some("Texas"),
        physical_metrics: Keyed(&[
            ("height_in", 74.0),
            ("weight_lb", 190.0),
            ("sixty_yard", 6.52),
            ("exit_velocity", 98.0),
            ("infield_velocity", 91.0),
        ]),
        cognitive_profile: Keyed(&[
            ("pitch_recognition", 0.91),
            ("reaction_time", 0.88),
            ("decision_making", 0.86),
            ("composure", 0.9),
        ]),
        nil_projection: Some(ProspectNil {
            current_value: 85_000,
            projected_college: "Texas",
            weight_factors: Keyed(&[("performance", 0.5), ("social", 0.3), ("marketability", 0.2)]),
        }),
    },
    Prospect {
        rank: 2,
        name: "Mason Whitfield",
        position: "RHP",
        hometown: "Houston, TX",
        graduation_year: 2025,
        commitment: Some("LSU"),
        physical_metrics: Keyed(&[
            ("height_in", 76.0),
            ("weight_lb", 205.0),
            ("fastball_velocity", 95.0),
            ("spin_rate", 2450.0),
        ]),
        cognitive_profile: Keyed(&[
            ("pitch_recognition", 0.78),
            ("reaction_time", 0.82),
            ("decision_making", 0.9),
            ("composure", 0.93),
        ]),
        nil_projection: Some(ProspectNil {
            current_value: 72_000,
            projected_college: "LSU",
            weight_factors: Keyed(&[("performance", 0.55), ("social", 0.25), ("marketability", 0.2)]),
        }),
    },
    Prospect {
        rank: 3,
        name: "Eli Vasquez",
        position: "C",
        hometown: "San Antonio, TX",
        graduation_year: 2026,
        commitment: None,
        physical_metrics: Keyed(&[
            ("height_in", 72.0),
            ("weight_lb", 200.0),
            ("pop_time", 1.89),
            ("exit_velocity", 95.0),
        ]),
        cognitive_profile: Keyed(&[
            ("pitch_recognition", 0.84),
            ("reaction_time", 0.8),
            ("decision_making", 0.92),
            ("composure", 0.87),
        ]),
        nil_projection: None,
    },
    Prospect {
        rank: 4,
        name: "Tyler Brooks",
        position: "OF",
        hometown: "Round Rock, TX",
        graduation_year: 2026,
        commitment: Some("Texas A&M"),
        physical_metrics: Keyed(&[
            ("height_in", 73.0),
            ("weight_lb", 185.0),
            ("sixty_yard", 6.38),
            ("outfield_velocity", 93.0),
        ]),
        cognitive_profile: Keyed(&[
            ("pitch_recognition", 0.8),
            ("reaction_time", 0.93),
            ("decision_making", 0.79),
            ("composure", 0.82),
        ]),
        nil_projection: Some(ProspectNil {
            current_value: 40_000,
            projected_college: "Texas A&M",
            weight_factors: Keyed(&[("performance", 0.45), ("social", 0.35), ("marketability", 0.2)]),
        }),
    },
    Prospect {
        rank: 5,
        name: "Caleb Nguyen",
        position: "LHP",
        hometown: "Dallas, TX",
        graduation_year: 2027,
        commitment: None,
        physical_metrics: Keyed(&[
            ("height_in", 75.0),
            ("weight_lb", 180.0),
            ("fastball_velocity", 90.0),
            ("spin_rate", 2300.0),
        ]),
        cognitive_profile: Keyed(&[
            ("pitch_recognition", 0.76),
            ("reaction_time", 0.79),
            ("decision_making", 0.84),
            ("composure", 0.88),
        ]),
        nil_projection: None,
    },
];

pub static TOURNAMENTS: &[Tournament] = &[
    Tournament {
        name: "WWBA World Championship",
        location: "Jupiter, FL",
        dates: "2024-10-10/2024-10-14",
        team_count: 96,
        scouting_level: ScoutingLevel::Elite,
        cognitive_testing: true,
    },
    Tournament {
        name: "Texas State Championship",
        location: "Round Rock, TX",
        dates: "2024-06-20/2024-06-24",
        team_count: 64,
        scouting_level: ScoutingLevel::High,
        cognitive_testing: true,
    },
    Tournament {
        name: "Central Texas Fall Classic",
        location: "Austin, TX",
        dates: "2024-09-27/2024-09-29",
        team_count: 32,
        scouting_level: ScoutingLevel::Standard,
        cognitive_testing: false,
    },
];

pub static SHOWCASES: &[Tournament] = &[
    Tournament {
        name: "Perfect Game National Showcase",
        location: "Phoenix, AZ",
        dates: "2024-06-12/2024-06-16",
        team_count: 0,
        scouting_level: ScoutingLevel::Elite,
        cognitive_testing: true,
    },
    Tournament {
        name: "Texas Underclass Showcase",
        location: "Houston, TX",
        dates: "2024-08-03/2024-08-04",
        team_count: 0,
        scouting_level: ScoutingLevel::High,
        cognitive_testing: false,
    },
];

pub static PATHWAYS: &[Pathway] = &[
    Pathway {
        name: "Power Five Commitment",
        description: "High school showcase circuit into a Power Five roster",
        stages: &["Regional showcase", "National showcase", "Verbal commitment", "Signing day"],
        athletic_ratio: 0.62,
        business_ratio: 0.71,
    },
    Pathway {
        name: "Draft Eligible",
        description: "Senior season into the MLB first-year player draft",
        stages: &["Area scout coverage", "Draft combine", "Selection"],
        athletic_ratio: 0.18,
        business_ratio: 0.24,
    },
    Pathway {
        name: "JUCO Development",
        description: "Two-year program before a four-year transfer",
        stages: &["JUCO roster", "All-conference", "Four-year transfer"],
        athletic_ratio: 0.45,
        business_ratio: 0.39,
    },
];

pub static AUSTIN_INSIGHTS: AustinInsights = AustinInsights {
    region: "Central Texas",
    ranked_prospects: 142,
    d1_commitments: 37,
    top_programs: &["Texas", "Texas A&M", "Baylor", "TCU"],
    key_facilities: &["Dell Diamond", "UFCU Disch-Falk Field"],
    market_notes: &[
        "Fastest-growing youth baseball market in the state",
        "Highest cognitive-testing participation among Texas regions",
    ],
};

pub fn prospects_for_year(year: Option<i32>) -> impl Iterator<Item = &'static Prospect> {
    PROSPECTS
        .iter()
        .filter(move |p| year.map_or(true, |y| p.graduation_year == y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prospects_are_ranked_in_order() {
        for (i, p) in PROSPECTS.iter().enumerate() {
            assert_eq!(p.rank as usize, i + 1);
        }
    }

    #[test]
    fn year_filter_narrows_prospects() {
        assert_eq!(prospects_for_year(Some(2025)).count(), 2);
        assert_eq!(prospects_for_year(Some(2031)).count(), 0);
        assert_eq!(prospects_for_year(None).count(), PROSPECTS.len());
    }
}
