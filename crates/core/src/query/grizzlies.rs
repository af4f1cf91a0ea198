use super::{present, QueryError};
use crate::catalog::grizzlies::{
    GrizzliesDocument, Legacy, LiveGame, NilProjection, PlayerCognitive, TeamMetrics, GRIZZLIES,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrizzliesParams {
    pub metric: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrizzliesMetric {
    All,
    TeamMetrics,
    PlayerCognitive,
    NilProjections,
    LiveGame,
    GritAndGrindLegacy,
}

const METRICS: &[(&str, GrizzliesMetric)] = &[
    ("all", GrizzliesMetric::All),
    ("teamMetrics", GrizzliesMetric::TeamMetrics),
    ("playerCognitive", GrizzliesMetric::PlayerCognitive),
    ("nilProjections", GrizzliesMetric::NilProjections),
    ("liveGame", GrizzliesMetric::LiveGame),
    ("gritAndGrindLegacy", GrizzliesMetric::GritAndGrindLegacy),
];

impl GrizzliesMetric {
    pub fn as_str(self) -> &'static str {
        METRICS
            .iter()
            .find(|(_, m)| *m == self)
            .map(|(name, _)| *name)
            .unwrap_or("all")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GrizzliesRequest {
    pub metric: GrizzliesMetric,
}

impl GrizzliesRequest {
    pub fn parse(params: &GrizzliesParams) -> Result<Self, QueryError> {
        let Some(raw) = present(params.metric.as_deref()) else {
            return Ok(Self {
                metric: GrizzliesMetric::All,
            });
        };
        let metric = METRICS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(raw))
            .map(|(_, m)| *m)
            .ok_or_else(|| {
                QueryError::bad_selector(
                    "Invalid metric",
                    "metric",
                    raw,
                    "available_metrics",
                    METRICS.iter().map(|(name, _)| *name).collect(),
                )
            })?;
        Ok(Self { metric })
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum GrizzliesSlice {
    All(&'static GrizzliesDocument),
    TeamMetrics(&'static TeamMetrics),
    PlayerCognitive(&'static [PlayerCognitive]),
    NilProjections(&'static [NilProjection]),
    LiveGame(&'static LiveGame),
    Legacy(&'static Legacy),
}

#[derive(Debug, Clone, Serialize)]
pub struct GrizzliesPayload {
    pub metric: &'static str,
    pub data: GrizzliesSlice,
}

pub fn resolve(request: &GrizzliesRequest) -> GrizzliesPayload {
    let doc = &GRIZZLIES;
    let data = match request.metric {
        GrizzliesMetric::All => GrizzliesSlice::All(doc),
        GrizzliesMetric::TeamMetrics => GrizzliesSlice::TeamMetrics(&doc.team_metrics),
        GrizzliesMetric::PlayerCognitive => GrizzliesSlice::PlayerCognitive(doc.player_cognitive),
        GrizzliesMetric::NilProjections => GrizzliesSlice::NilProjections(doc.nil_projections),
        GrizzliesMetric::LiveGame => GrizzliesSlice::LiveGame(&doc.live_game),
        GrizzliesMetric::GritAndGrindLegacy => GrizzliesSlice::Legacy(&doc.grit_and_grind_legacy),
    };
    GrizzliesPayload {
        metric: request.metric.as_str(),
        data,
    }
}
