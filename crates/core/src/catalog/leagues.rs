//! Leagues, flagship teams, and platform counters used by `/blaze-analytics`.

use super::{Keyed, Scalars};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LeagueId {
    #[serde(rename = "MLB")]
    Mlb,
    #[serde(rename = "NFL")]
    Nfl,
    #[serde(rename = "NBA")]
    Nba,
    #[serde(rename = "NCAA-FB")]
    NcaaFootball,
}

impl LeagueId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mlb => "MLB",
            Self::Nfl => "NFL",
            Self::Nba => "NBA",
            Self::NcaaFootball => "NCAA-FB",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LeagueMetadata {
    pub team_count: u32,
    pub games_per_season: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Leader {
    pub player: &'static str,
    pub team: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct League {
    /// Selector key accepted by `?league=` and `?focus=`.
    pub key: &'static str,
    pub id: LeagueId,
    pub name: &'static str,
    pub season: &'static str,
    pub metadata: LeagueMetadata,
    pub current_leaders: Keyed<Leader>,
    pub predictions: Keyed<&'static str>,
    /// Numeric basis for the league's letter grade; the grade itself is derived per response.
    #[serde(skip)]
    pub rating_score: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeamPredictions {
    pub win_probability_tonight: f64,
    pub playoff_chances: f64,
    pub championship_odds: f64,
    #[serde(flatten)]
    pub sport_specific: Scalars,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Team {
    pub key: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub league_key: &'static str,
    pub venue: &'static str,
    pub predictions: TeamPredictions,
    pub metrics: Scalars,
    #[serde(skip)]
    pub rating_score: f64,
}

/// Aggregate platform counters. `avg_response_time` is in milliseconds.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlatformMetrics {
    pub data_points: u64,
    pub predictions_made: u64,
    pub accuracy_rate: f64,
    pub cache_hit_rate: f64,
    pub avg_response_time: f64,
    pub team_readiness: Scalars,
}

pub static LEAGUES: &[League] = &[
    League {
        key: "mlb",
        id: LeagueId::Mlb,
        name: "Major League Baseball",
        season: "2024",
        metadata: LeagueMetadata {
            team_count: 30,
            games_per_season: 162,
        },
        current_leaders: Keyed(&[
            (
                "batting_average",
                Leader {
                    player: "Bobby Witt Jr.",
                    team: "KC",
                    value: 0.332,
                },
            ),
            (
                "home_runs",
                Leader {
                    player: "Aaron Judge",
                    team: "NYY",
                    value: 58.0,
                },
            ),
            (
                "era",
                Leader {
                    player: "Chris Sale",
                    team: "ATL",
                    value: 2.38,
                },
            ),
        ]),
        predictions: Keyed(&[
            ("mvp_al", "Aaron Judge"),
            ("mvp_nl", "Shohei Ohtani"),
            ("cy_young_nl", "Chris Sale"),
            ("world_series", "Los Angeles Dodgers"),
        ]),
        rating_score: 88.0,
    },
    League {
        key: "nfl",
        id: LeagueId::Nfl,
        name: "National Football League",
        season: "2024",
        metadata: LeagueMetadata {
            team_count: 32,
            games_per_season: 17,
        },
        current_leaders: Keyed(&[
            (
                "passing_yards",
                Leader {
                    player: "Joe Burrow",
                    team: "CIN",
                    value: 4918.0,
                },
            ),
            (
                "rushing_yards",
                Leader {
                    player: "Saquon Barkley",
                    team: "PHI",
                    value: 2005.0,
                },
            ),
            (
                "sacks",
                Leader {
                    player: "Trey Hendrickson",
                    team: "CIN",
                    value: 17.5,
                },
            ),
        ]),
        predictions: Keyed(&[
            ("mvp", "Josh Allen"),
            ("offensive_player", "Saquon Barkley"),
            ("super_bowl", "Philadelphia Eagles"),
        ]),
        rating_score: 84.0,
    },
    League {
        key: "nba",
        id: LeagueId::Nba,
        name: "National Basketball Association",
        season: "2024-25",
        metadata: LeagueMetadata {
            team_count: 30,
            games_per_season: 82,
        },
        current_leaders: Keyed(&[
            (
                "points_per_game",
                Leader {
                    player: "Shai Gilgeous-Alexander",
                    team: "OKC",
                    value: 32.7,
                },
            ),
            (
                "rebounds_per_game",
                Leader {
                    player: "Domantas Sabonis",
                    team: "SAC",
                    value: 13.9,
                },
            ),
            (
                "assists_per_game",
                Leader {
                    player: "Trae Young",
                    team: "ATL",
                    value: 11.6,
                },
            ),
        ]),
        predictions: Keyed(&[
            ("mvp", "Shai Gilgeous-Alexander"),
            ("defensive_player", "Jaren Jackson Jr."),
            ("champion", "Oklahoma City Thunder"),
        ]),
        rating_score: 81.0,
    },
    League {
        key: "college_football",
        id: LeagueId::NcaaFootball,
        name: "NCAA Division I Football",
        season: "2024",
        metadata: LeagueMetadata {
            team_count: 134,
            games_per_season: 12,
        },
        current_leaders: Keyed(&[
            (
                "passing_yards",
                Leader {
                    player: "Cam Ward",
                    team: "MIA",
                    value: 4313.0,
                },
            ),
            (
                "rushing_yards",
                Leader {
                    player: "Ashton Jeanty",
                    team: "BSU",
                    value: 2601.0,
                },
            ),
        ]),
        predictions: Keyed(&[
            ("heisman", "Travis Hunter"),
            ("national_champion", "Ohio State"),
            ("sec_champion", "Georgia"),
        ]),
        rating_score: 86.5,
    },
];

pub static TEAMS: &[Team] = &[
    Team {
        key: "cardinals",
        name: "St. Louis Cardinals",
        city: "St. Louis",
        league_key: "mlb",
        venue: "Busch Stadium",
        predictions: TeamPredictions {
            win_probability_tonight: 0.617,
            playoff_chances: 0.67,
            championship_odds: 0.08,
            sport_specific: Keyed(&[("projected_wins", 86.0), ("run_differential_pace", 42.0)]),
        },
        metrics: Keyed(&[
            ("team_ops", 0.742),
            ("team_era", 3.84),
            ("defensive_runs_saved", 31.0),
            ("bullpen_war", 4.6),
        ]),
        rating_score: 78.0,
    },
    Team {
        key: "titans",
        name: "Tennessee Titans",
        city: "Nashville",
        league_key: "nfl",
        venue: "Nissan Stadium",
        predictions: TeamPredictions {
            win_probability_tonight: 0.54,
            playoff_chances: 0.41,
            championship_odds: 0.03,
            sport_specific: Keyed(&[("projected_wins", 8.5), ("division_title_odds", 0.22)]),
        },
        metrics: Keyed(&[
            ("points_per_game", 21.4),
            ("yards_per_play", 5.3),
            ("turnover_margin", -2.0),
            ("red_zone_pct", 0.56),
        ]),
        rating_score: 68.0,
    },
    Team {
        key: "longhorns",
        name: "Texas Longhorns",
        city: "Austin",
        league_key: "college_football",
        venue: "Darrell K Royal-Texas Memorial Stadium",
        predictions: TeamPredictions {
            win_probability_tonight: 0.81,
            playoff_chances: 0.72,
            championship_odds: 0.14,
            sport_specific: Keyed(&[("projected_wins", 10.5), ("sec_title_odds", 0.31)]),
        },
        metrics: Keyed(&[
            ("points_per_game", 36.8),
            ("points_allowed_per_game", 16.2),
            ("recruiting_class_rank", 3.0),
            ("third_down_pct", 0.47),
        ]),
        rating_score: 91.0,
    },
    Team {
        key: "grizzlies",
        name: "Memphis Grizzlies",
        city: "Memphis",
        league_key: "nba",
        venue: "FedExForum",
        predictions: TeamPredictions {
            win_probability_tonight: 0.58,
            playoff_chances: 0.74,
            championship_odds: 0.06,
            sport_specific: Keyed(&[("projected_wins", 48.0), ("seed_projection", 4.0)]),
        },
        metrics: Keyed(&[
            ("offensive_rating", 112.1),
            ("defensive_rating", 108.3),
            ("pace", 99.4),
            ("rebound_pct", 0.521),
        ]),
        rating_score: 83.0,
    },
];

pub static PLATFORM_METRICS: PlatformMetrics = PlatformMetrics {
    data_points: 2_847_000,
    predictions_made: 18_452,
    accuracy_rate: 0.946,
    cache_hit_rate: 0.89,
    avg_response_time: 87.0,
    team_readiness: Keyed(&[
        ("cardinals", 0.87),
        ("titans", 0.72),
        ("longhorns", 0.91),
        ("grizzlies", 0.84),
    ]),
};

pub fn league(key: &str) -> Option<&'static League> {
    LEAGUES.iter().find(|l| l.key.eq_ignore_ascii_case(key))
}

pub fn team(key: &str) -> Option<&'static Team> {
    TEAMS.iter().find(|t| t.key.eq_ignore_ascii_case(key))
}

pub fn league_keys() -> Vec<&'static str> {
    LEAGUES.iter().map(|l| l.key).collect()
}

pub fn team_keys() -> Vec<&'static str> {
    TEAMS.iter().map(|t| t.key).collect()
}

pub fn teams_in(league_key: &str) -> impl Iterator<Item = &'static Team> + '_ {
    TEAMS
        .iter()
        .filter(move |t| t.league_key.eq_ignore_ascii_case(league_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_ignore_case() {
        assert_eq!(league("MLB").map(|l| l.id), Some(LeagueId::Mlb));
        assert_eq!(team("Cardinals").map(|t| t.name), Some("St. Louis Cardinals"));
        assert!(team("wizards").is_none());
    }

    #[test]
    fn league_id_serializes_with_display_names() {
        let json = serde_json::to_string(&LeagueId::NcaaFootball).unwrap();
        assert_eq!(json, "\"NCAA-FB\"");
    }

    #[test]
    fn team_predictions_flatten_sport_specific_fields() {
        let cardinals = team("cardinals").unwrap();
        let value = serde_json::to_value(cardinals.predictions).unwrap();
        assert_eq!(value["win_probability_tonight"], 0.617);
        assert_eq!(value["projected_wins"], 86.0);
    }

    #[test]
    fn every_team_has_readiness() {
        for t in TEAMS {
            assert!(PLATFORM_METRICS.team_readiness.get(t.key).is_some(), "{}", t.key);
        }
    }
}
