//! `/blaze-analytics` selector resolution.
//!
//! Precedence when several selectors are supplied: `league`, then `team`, then
//! `metrics`/`platform`, then `focus`; with none, a comprehensive report.

use super::{is_truthy, present, QueryError};
use crate::catalog::leagues::{
    self, League, LeagueId, PlatformMetrics, Team, TeamPredictions, PLATFORM_METRICS,
};
use crate::catalog::Scalars;
use crate::metrics::grade::{grade_letter, Grade};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlazeParams {
    pub league: Option<String>,
    pub team: Option<String>,
    pub metrics: Option<String>,
    pub platform: Option<String>,
    pub focus: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub enum BlazeSelector {
    League(&'static League),
    Team(&'static Team),
    Platform,
    Focus(&'static League),
    Comprehensive,
}

impl BlazeSelector {
    pub fn parse(params: &BlazeParams) -> Result<Self, QueryError> {
        if let Some(raw) = present(params.league.as_deref()) {
            return leagues::league(raw).map(Self::League).ok_or_else(|| {
                QueryError::bad_selector(
                    "League not found",
                    "league",
                    raw,
                    "available_leagues",
                    leagues::league_keys(),
                )
            });
        }
        if let Some(raw) = present(params.team.as_deref()) {
            return leagues::team(raw).map(Self::Team).ok_or_else(|| {
                QueryError::bad_selector(
                    "Team not found",
                    "team",
                    raw,
                    "available_teams",
                    leagues::team_keys(),
                )
            });
        }
        if is_truthy(params.metrics.as_deref()) || is_truthy(params.platform.as_deref()) {
            return Ok(Self::Platform);
        }
        if let Some(raw) = present(params.focus.as_deref()) {
            return leagues::league(raw).map(Self::Focus).ok_or_else(|| {
                QueryError::bad_selector(
                    "Focus not found",
                    "focus",
                    raw,
                    "available_focus",
                    leagues::league_keys(),
                )
            });
        }
        Ok(Self::Comprehensive)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeagueView {
    #[serde(flatten)]
    pub league: &'static League,
    pub grade: Grade,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeagueSummary {
    pub key: &'static str,
    pub id: LeagueId,
    pub name: &'static str,
    pub team_count: u32,
    pub grade: Grade,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamSummary {
    pub key: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub league: LeagueId,
    pub venue: &'static str,
    pub grade: Grade,
    pub readiness: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FocusReport {
    pub league: LeagueView,
    pub teams: Vec<TeamSummary>,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComprehensiveReport {
    pub leagues: Vec<LeagueSummary>,
    pub teams: Vec<TeamSummary>,
    pub platform_metrics: &'static PlatformMetrics,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BlazePayload {
    League {
        league: LeagueId,
        data: LeagueView,
    },
    Team {
        team: TeamSummary,
        predictions: &'static TeamPredictions,
        metrics: &'static Scalars,
    },
    Platform {
        platform_metrics: &'static PlatformMetrics,
    },
    Focus {
        focus: &'static str,
        data: FocusReport,
    },
    Comprehensive {
        data: ComprehensiveReport,
    },
}

pub fn resolve(selector: BlazeSelector) -> BlazePayload {
    match selector {
        BlazeSelector::League(league) => BlazePayload::League {
            league: league.id,
            data: league_view(league),
        },
        BlazeSelector::Team(team) => BlazePayload::Team {
            team: team_summary(team),
            predictions: &team.predictions,
            metrics: &team.metrics,
        },
        BlazeSelector::Platform => BlazePayload::Platform {
            platform_metrics: &PLATFORM_METRICS,
        },
        BlazeSelector::Focus(league) => BlazePayload::Focus {
            focus: league.key,
            data: focus_report(league),
        },
        BlazeSelector::Comprehensive => BlazePayload::Comprehensive {
            data: ComprehensiveReport {
                leagues: leagues::LEAGUES
                    .iter()
                    .map(|l| LeagueSummary {
                        key: l.key,
                        id: l.id,
                        name: l.name,
                        team_count: l.metadata.team_count,
                        grade: grade_letter(l.rating_score),
                    })
                    .collect(),
                teams: leagues::TEAMS.iter().map(team_summary).collect(),
                platform_metrics: &PLATFORM_METRICS,
            },
        },
    }
}

fn league_view(league: &'static League) -> LeagueView {
    LeagueView {
        league,
        grade: grade_letter(league.rating_score),
    }
}

fn team_summary(team: &'static Team) -> TeamSummary {
    TeamSummary {
        key: team.key,
        name: team.name,
        city: team.city,
        league: leagues::league(team.league_key)
            .map(|l| l.id)
            .unwrap_or(LeagueId::Mlb),
        venue: team.venue,
        grade: grade_letter(team.rating_score),
        readiness: PLATFORM_METRICS.team_readiness.get(team.key).copied(),
    }
}

fn focus_report(league: &'static League) -> FocusReport {
    let teams: Vec<TeamSummary> = leagues::teams_in(league.key).map(team_summary).collect();

    let mut insights: Vec<String> = league
        .current_leaders
        .iter()
        .map(|(category, leader)| {
            format!(
                "{} ({}) leads {} in {} at {}",
                leader.player,
                leader.team,
                league.id.as_str(),
                category.replace('_', " "),
                leader.value
            )
        })
        .collect();

    for team in &teams {
        if let Some(readiness) = team.readiness {
            insights.push(format!(
                "{} readiness at {}%",
                team.name,
                (readiness * 100.0).round() as i64
            ));
        }
    }

    FocusReport {
        league: league_view(league),
        teams,
        insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> BlazeParams {
        BlazeParams::default()
    }

    fn resolve_json(p: BlazeParams) -> serde_json::Value {
        serde_json::to_value(resolve(BlazeSelector::parse(&p).unwrap())).unwrap()
    }

    #[test]
    fn team_predictions_for_cardinals() {
        let v = resolve_json(BlazeParams {
            team: Some("cardinals".into()),
            ..params()
        });
        assert_eq!(v["predictions"]["win_probability_tonight"], 0.617);
        assert_eq!(v["predictions"]["playoff_chances"], 0.67);
        assert_eq!(v["team"]["name"], "St. Louis Cardinals");
        assert_eq!(v["team"]["league"], "MLB");
        assert_eq!(v["metrics"]["team_era"], 3.84);
    }

    #[test]
    fn league_wins_over_every_other_selector() {
        let selector = BlazeSelector::parse(&BlazeParams {
            league: Some("nfl".into()),
            team: Some("cardinals".into()),
            metrics: Some("true".into()),
            focus: Some("mlb".into()),
            ..params()
        })
        .unwrap();
        assert!(matches!(selector, BlazeSelector::League(l) if l.key == "nfl"));
    }

    #[test]
    fn team_wins_over_metrics_and_focus() {
        let selector = BlazeSelector::parse(&BlazeParams {
            team: Some("titans".into()),
            platform: Some("true".into()),
            focus: Some("mlb".into()),
            ..params()
        })
        .unwrap();
        assert!(matches!(selector, BlazeSelector::Team(t) if t.key == "titans"));
    }

    #[test]
    fn metrics_wins_over_focus() {
        let selector = BlazeSelector::parse(&BlazeParams {
            metrics: Some("true".into()),
            focus: Some("mlb".into()),
            ..params()
        })
        .unwrap();
        assert!(matches!(selector, BlazeSelector::Platform));

        let selector = BlazeSelector::parse(&BlazeParams {
            metrics: Some("false".into()),
            focus: Some("mlb".into()),
            ..params()
        })
        .unwrap();
        assert!(matches!(selector, BlazeSelector::Focus(_)));
    }

    #[test]
    fn league_view_carries_derived_grade() {
        let v = resolve_json(BlazeParams {
            league: Some("MLB".into()),
            ..params()
        });
        assert_eq!(v["league"], "MLB");
        assert_eq!(v["data"]["grade"], "A");
        assert_eq!(v["data"]["metadata"]["games_per_season"], 162);
        assert_eq!(v["data"]["current_leaders"]["home_runs"]["player"], "Aaron Judge");
        assert!(v["data"].get("rating_score").is_none());
    }

    #[test]
    fn unknown_league_lists_every_key() {
        let err = BlazeSelector::parse(&BlazeParams {
            league: Some("xfl".into()),
            ..params()
        })
        .unwrap_err();
        match err {
            QueryError::BadSelector {
                error,
                available_key,
                available,
                ..
            } => {
                assert_eq!(error, "League not found");
                assert_eq!(available_key, "available_leagues");
                assert_eq!(available, vec!["mlb", "nfl", "nba", "college_football"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn focus_report_lists_league_teams() {
        let v = resolve_json(BlazeParams {
            focus: Some("nba".into()),
            ..params()
        });
        assert_eq!(v["focus"], "nba");
        assert_eq!(v["data"]["teams"][0]["key"], "grizzlies");
        let insights = v["data"]["insights"].as_array().unwrap();
        assert!(insights
            .iter()
            .any(|i| i.as_str() == Some("Memphis Grizzlies readiness at 84%")));
    }

    #[test]
    fn comprehensive_by_default() {
        let v = resolve_json(params());
        assert_eq!(v["data"]["leagues"].as_array().map(Vec::len), Some(4));
        assert_eq!(v["data"]["teams"].as_array().map(Vec::len), Some(4));
        assert_eq!(v["data"]["platform_metrics"]["predictions_made"], 18_452);
    }
}
