use super::{parse_body, parse_number, present, QueryError};
use crate::catalog::character::{Trait, TRAITS};
use crate::metrics::character::{
    self, CharacterInsights, DataPoints, PartialDataPoints, PlanItem, RecruitingProjection,
    TraitScore,
};
use crate::metrics::grade::Grade;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterParams {
    #[serde(rename = "playerId", alias = "player_id")]
    pub player_id: Option<String>,
    #[serde(rename = "clutchPerformance", alias = "clutch_performance")]
    pub clutch_performance: Option<String>,
    #[serde(rename = "consistencyScore", alias = "consistency_score")]
    pub consistency_score: Option<String>,
    #[serde(rename = "teamworkRating", alias = "teamwork_rating")]
    pub teamwork_rating: Option<String>,
    #[serde(rename = "pressureResponse", alias = "pressure_response")]
    pub pressure_response: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataPointsBody {
    #[serde(rename = "clutchPerformance", alias = "clutch_performance")]
    pub clutch_performance: Option<f64>,
    #[serde(rename = "consistencyScore", alias = "consistency_score")]
    pub consistency_score: Option<f64>,
    #[serde(rename = "teamworkRating", alias = "teamwork_rating")]
    pub teamwork_rating: Option<f64>,
    #[serde(rename = "pressureResponse", alias = "pressure_response")]
    pub pressure_response: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterBody {
    #[serde(rename = "playerId", alias = "player_id")]
    pub player_id: Option<String>,
    #[serde(rename = "dataPoints", alias = "data_points")]
    pub data_points: Option<DataPointsBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRequest {
    pub player_id: String,
    pub points: PartialDataPoints,
}

impl CharacterRequest {
    pub fn from_params(params: &CharacterParams) -> Result<Self, QueryError> {
        let points = PartialDataPoints {
            clutch_performance: parse_number::<f64>(
                "clutchPerformance",
                params.clutch_performance.as_deref(),
            )?,
            consistency_score: parse_number::<f64>(
                "consistencyScore",
                params.consistency_score.as_deref(),
            )?,
            teamwork_rating: parse_number::<f64>(
                "teamworkRating",
                params.teamwork_rating.as_deref(),
            )?,
            pressure_response: parse_number::<f64>(
                "pressureResponse",
                params.pressure_response.as_deref(),
            )?,
        };
        Self::build(params.player_id.as_deref(), points)
    }

    pub fn from_body(body: &[u8]) -> Result<Self, QueryError> {
        let body: CharacterBody = parse_body(body)?;
        let dp = body.data_points.unwrap_or_default();
        let points = PartialDataPoints {
            clutch_performance: dp.clutch_performance,
            consistency_score: dp.consistency_score,
            teamwork_rating: dp.teamwork_rating,
            pressure_response: dp.pressure_response,
        };
        Self::build(body.player_id.as_deref(), points)
    }

    fn build(player_id: Option<&str>, points: PartialDataPoints) -> Result<Self, QueryError> {
        let player_id = present(player_id).ok_or(QueryError::MissingField("playerId"))?;

        for (field, value) in [
            ("clutchPerformance", points.clutch_performance),
            ("consistencyScore", points.consistency_score),
            ("teamworkRating", points.teamwork_rating),
            ("pressureResponse", points.pressure_response),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(QueryError::InvalidValue {
                        field,
                        reason: format!("must be between 0 and 1 (got {v})"),
                    });
                }
            }
        }

        Ok(Self {
            player_id: player_id.to_string(),
            points,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub player_id: String,
    pub overall_score: i64,
    pub overall_rating: i64,
    pub grade: Grade,
    pub trait_scores: BTreeMap<Trait, TraitScore>,
    pub trait_weights: BTreeMap<Trait, f64>,
    pub data_points: DataPoints,
    pub imputed_data_points: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPayload {
    pub character_assessment: Assessment,
    pub insights: CharacterInsights,
    pub development_plan: Vec<PlanItem>,
    pub recruiting_projection: RecruitingProjection,
}

pub fn resolve(request: &CharacterRequest) -> CharacterPayload {
    let filled = request.points.fill(&request.player_id);
    let scores = character::score(&filled.points);

    CharacterPayload {
        insights: character::insights(&scores),
        development_plan: character::development_plan(&scores),
        recruiting_projection: character::recruiting_projection(&scores),
        character_assessment: Assessment {
            player_id: request.player_id.clone(),
            overall_score: scores.overall_score,
            overall_rating: scores.overall_rating,
            grade: scores.grade,
            trait_scores: scores.traits.iter().map(|t| (t.name, *t)).collect(),
            trait_weights: TRAITS.iter().map(|t| (t.name, t.weight)).collect(),
            data_points: filled.points,
            imputed_data_points: filled.imputed,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const S4_BODY: &[u8] = br#"{"playerId":"p1","dataPoints":{"clutchPerformance":0.9,"consistencyScore":0.8,"teamworkRating":0.85,"pressureResponse":0.75}}"#;

    #[test]
    fn body_assessment_matches_weighted_formula() {
        let request = CharacterRequest::from_body(S4_BODY).unwrap();
        let v = serde_json::to_value(resolve(&request)).unwrap();
        let a = &v["characterAssessment"];
        assert_eq!(a["overallScore"], 84);
        assert_eq!(a["overallRating"], 76);
        assert_eq!(a["traitScores"]["grit"]["grade"], "A");
        assert_eq!(a["traitScores"]["grit"]["score"], 90.0);
        assert_eq!(a["traitScores"]["grit"]["weight"], 0.25);
        assert_eq!(a["traitWeights"]["leadership"], 0.20);
        assert_eq!(a["imputedDataPoints"].as_array().map(Vec::len), Some(0));
        assert_eq!(v["recruitingProjection"]["projection"], "Excellent");
    }

    #[test]
    fn snake_case_query_aliases_are_accepted() {
        let params: CharacterParams = serde_json::from_value(serde_json::json!({
            "player_id": "p9",
            "clutch_performance": "0.6",
        }))
        .unwrap();
        let request = CharacterRequest::from_params(&params).unwrap();
        assert_eq!(request.player_id, "p9");
        assert_eq!(request.points.clutch_performance, Some(0.6));
    }

    #[test]
    fn missing_points_are_reproducible() {
        let request = CharacterRequest::from_body(br#"{"playerId":"prospect-42"}"#).unwrap();
        let a = serde_json::to_value(resolve(&request)).unwrap();
        let b = serde_json::to_value(resolve(&request)).unwrap();
        assert_eq!(a, b);
        let score = a["characterAssessment"]["overallScore"].as_i64().unwrap();
        assert!((0..=100).contains(&score));
        assert_eq!(
            a["characterAssessment"]["imputedDataPoints"].as_array().map(Vec::len),
            Some(4)
        );
    }

    #[test]
    fn player_id_is_required() {
        let err = CharacterRequest::from_body(br#"{"dataPoints":{}}"#).unwrap_err();
        assert_eq!(err.code(), "playerId is required");
        let err = CharacterRequest::from_params(&CharacterParams::default()).unwrap_err();
        assert_eq!(err.code(), "playerId is required");
    }

    #[test]
    fn out_of_range_point_is_rejected() {
        let err = CharacterRequest::from_body(
            br#"{"playerId":"p1","dataPoints":{"teamworkRating":1.2}}"#,
        )
        .unwrap_err();
        assert_eq!(err.code(), "Invalid teamworkRating");
    }
}
