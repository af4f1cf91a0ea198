//! Fixed Memphis Grizzlies analytics document.

use super::{Keyed, Scalars};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMetrics {
    pub grit_score: f64,
    pub defensive_rating: f64,
    pub offensive_rating: f64,
    pub net_rating: f64,
    pub pace: f64,
    pub record: &'static str,
    pub conference_rank: u32,
    pub clutch_record: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCognitive {
    pub player: &'static str,
    pub position: &'static str,
    pub profile: Scalars,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NilProjection {
    pub player: &'static str,
    pub current_value: u64,
    pub projected_value: u64,
    pub market_tier: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveGame {
    pub opponent: &'static str,
    pub status: &'static str,
    pub quarter: u32,
    pub clock: &'static str,
    pub home_score: u32,
    pub away_score: u32,
    pub win_probability: f64,
    pub key_stats: Scalars,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legacy {
    pub era: &'static str,
    pub identity: &'static str,
    pub core_players: &'static [&'static str],
    pub playoff_appearances: u32,
    pub defensive_rank_by_season: Keyed<u32>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrizzliesDocument {
    pub team_metrics: TeamMetrics,
    pub player_cognitive: &'static [PlayerCognitive],
    pub nil_projections: &'static [NilProjection],
    pub live_game: LiveGame,
    pub grit_and_grind_legacy: Legacy,
}

pub static GRIZZLIES: GrizzliesDocument = GrizzliesDocument {
    team_metrics: TeamMetrics {
        grit_score: 0.92,
        defensive_rating: 108.3,
        offensive_rating: 112.1,
        net_rating: 3.8,
        pace: 99.4,
        record: "48-34",
        conference_rank: 4,
        clutch_record: "21-12",
    },
    player_cognitive: &[
        PlayerCognitive {
            player: "Ja Morant",
            position: "PG",
            profile: Keyed(&[
                ("decisionSpeed", 0.94),
                ("courtVision", 0.89),
                ("composure", 0.81),
                ("patternRecognition", 0.86),
            ]),
        },
        PlayerCognitive {
            player: "Jaren Jackson Jr.",
            position: "PF",
            profile: Keyed(&[
                ("decisionSpeed", 0.82),
                ("courtVision", 0.74),
                ("composure", 0.85),
                ("patternRecognition", 0.91),
            ]),
        },
        PlayerCognitive {
            player: "Desmond Bane",
            position: "SG",
            profile: Keyed(&[
                ("decisionSpeed", 0.85),
                ("courtVision", 0.83),
                ("composure", 0.9),
                ("patternRecognition", 0.84),
            ]),
        },
    ],
    nil_projections: &[
        NilProjection {
            player: "Ja Morant",
            current_value: 4_200_000,
            projected_value: 5_100_000,
            market_tier: "National",
        },
        NilProjection {
            player: "Jaren Jackson Jr.",
            current_value: 1_800_000,
            projected_value: 2_300_000,
            market_tier: "Regional",
        },
        NilProjection {
            player: "Desmond Bane",
            current_value: 1_100_000,
            projected_value: 1_450_000,
            market_tier: "Regional",
        },
    ],
    live_game: LiveGame {
        opponent: "Oklahoma City Thunder",
        status: "IN_PROGRESS",
        quarter: 4,
        clock: "03:12",
        home_score: 104,
        away_score: 99,
        win_probability: 0.71,
        key_stats: Keyed(&[
            ("reboundMargin", 7.0),
            ("pointsInPaint", 54.0),
            ("turnoversForced", 16.0),
        ]),
    },
    grit_and_grind_legacy: Legacy {
        era: "2011-2017",
        identity: "Grit and Grind",
        core_players: &["Marc Gasol", "Zach Randolph", "Mike Conley", "Tony Allen"],
        playoff_appearances: 7,
        defensive_rank_by_season: Keyed(&[
            ("2012-13", 2),
            ("2013-14", 3),
            ("2014-15", 4),
            ("2015-16", 7),
        ]),
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_metrics_use_camel_case_keys() {
        let value = serde_json::to_value(GRIZZLIES.team_metrics).unwrap();
        assert_eq!(value["gritScore"], 0.92);
        assert_eq!(value["defensiveRating"], 108.3);
    }
}
