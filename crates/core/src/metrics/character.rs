//! Character assessment: per-trait scores, the weighted overall score, and the recruiting
//! projection derived from it.

use super::grade::{grade_letter, Grade};
use super::round_to;
use crate::catalog::character::{self, Trait, TRAITS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

pub const DEFAULT_POINT_RANGE: std::ops::RangeInclusive<f64> = 0.70..=0.90;
const COMPETITIVENESS_CAP: f64 = 95.0;
const COMPETITIVENESS_LIFT: f64 = 0.2;

/// The four observed data points, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoints {
    pub clutch_performance: f64,
    pub consistency_score: f64,
    pub teamwork_rating: f64,
    pub pressure_response: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialDataPoints {
    pub clutch_performance: Option<f64>,
    pub consistency_score: Option<f64>,
    pub teamwork_rating: Option<f64>,
    pub pressure_response: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct FilledDataPoints {
    pub points: DataPoints,
    /// Names of the points that were sampled rather than supplied.
    pub imputed: Vec<&'static str>,
}

impl PartialDataPoints {
    /// Fills absent points with a uniform draw from [`DEFAULT_POINT_RANGE`], seeded from the
    /// player id so the same request always yields the same assessment.
    pub fn fill(self, player_id: &str) -> FilledDataPoints {
        let mut rng = StdRng::seed_from_u64(seed_for(player_id));
        let mut imputed = Vec::new();
        let mut take = |value: Option<f64>, name: &'static str| match value {
            Some(v) => v,
            None => {
                imputed.push(name);
                rng.gen_range(DEFAULT_POINT_RANGE)
            }
        };

        let points = DataPoints {
            clutch_performance: take(self.clutch_performance, "clutchPerformance"),
            consistency_score: take(self.consistency_score, "consistencyScore"),
            teamwork_rating: take(self.teamwork_rating, "teamworkRating"),
            pressure_response: take(self.pressure_response, "pressureResponse"),
        };

        FilledDataPoints { points, imputed }
    }
}

/// FNV-1a over the player id bytes.
fn seed_for(player_id: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    player_id
        .bytes()
        .fold(OFFSET, |hash, b| (hash ^ u64::from(b)).wrapping_mul(PRIME))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraitScore {
    #[serde(skip)]
    pub name: Trait,
    /// Unrounded 0..=100 score; serialised to one decimal.
    #[serde(serialize_with = "one_decimal")]
    pub score: f64,
    pub weight: f64,
    pub grade: Grade,
}

fn one_decimal<S: serde::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to(*value, 1))
}

pub fn raw_trait_score(name: Trait, points: &DataPoints) -> f64 {
    match name {
        Trait::Grit => points.clutch_performance * 100.0,
        Trait::Leadership => points.teamwork_rating * 100.0,
        Trait::Resilience => points.pressure_response * 100.0,
        Trait::Coachability => points.consistency_score * 100.0,
        Trait::Competitiveness => {
            ((points.clutch_performance + COMPETITIVENESS_LIFT) * 100.0).min(COMPETITIVENESS_CAP)
        }
        Trait::Teamwork => points.teamwork_rating * 100.0,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CharacterScores {
    pub traits: Vec<TraitScore>,
    pub overall_score: i64,
    pub overall_rating: i64,
    pub grade: Grade,
}

impl CharacterScores {
    pub fn get(&self, name: Trait) -> Option<&TraitScore> {
        self.traits.iter().find(|t| t.name == name)
    }
}

pub fn score(points: &DataPoints) -> CharacterScores {
    let traits: Vec<TraitScore> = TRAITS
        .iter()
        .map(|t| {
            let score = raw_trait_score(t.name, points);
            TraitScore {
                name: t.name,
                score,
                weight: t.weight,
                grade: grade_letter(score),
            }
        })
        .collect();

    let weighted: f64 = traits.iter().map(|t| t.score * t.weight).sum();
    let overall_score = weighted.round_ties_even() as i64;
    let overall_rating = (overall_score as f64 * 0.9).round() as i64;

    CharacterScores {
        traits,
        overall_score,
        overall_rating,
        grade: grade_letter(overall_score as f64),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectionLevel {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Development")]
    NeedsDevelopment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    Higher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CoachingPotential {
    High,
    Moderate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitingProjection {
    pub projection: ProjectionLevel,
    pub risk_assessment: RiskLevel,
    pub coaching_potential: CoachingPotential,
    pub overall_rating: i64,
}

pub fn recruiting_projection(scores: &CharacterScores) -> RecruitingProjection {
    let overall = scores.overall_score;
    let projection = match overall {
        s if s >= 80 => ProjectionLevel::Excellent,
        s if s >= 70 => ProjectionLevel::Good,
        s if s >= 60 => ProjectionLevel::Fair,
        _ => ProjectionLevel::NeedsDevelopment,
    };
    let risk_assessment = match overall {
        s if s >= 75 => RiskLevel::Low,
        s if s >= 65 => RiskLevel::Medium,
        _ => RiskLevel::Higher,
    };
    let coachability = scores
        .get(Trait::Coachability)
        .map(|t| t.score)
        .unwrap_or_default();
    let coaching_potential = if coachability >= 75.0 {
        CoachingPotential::High
    } else {
        CoachingPotential::Moderate
    };

    RecruitingProjection {
        projection,
        risk_assessment,
        coaching_potential,
        overall_rating: scores.overall_rating,
    }
}

const STRENGTH_THRESHOLD: f64 = 85.0;
const DEVELOPMENT_THRESHOLD: f64 = 75.0;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterInsights {
    pub strengths: Vec<Trait>,
    pub development_areas: Vec<Trait>,
    pub top_trait: Option<Trait>,
    pub summary: String,
}

pub fn insights(scores: &CharacterScores) -> CharacterInsights {
    let strengths: Vec<Trait> = scores
        .traits
        .iter()
        .filter(|t| t.score >= STRENGTH_THRESHOLD)
        .map(|t| t.name)
        .collect();
    let development_areas: Vec<Trait> = scores
        .traits
        .iter()
        .filter(|t| t.score < DEVELOPMENT_THRESHOLD)
        .map(|t| t.name)
        .collect();
    // First maximum wins so ties resolve in presentation order.
    let top_trait = scores
        .traits
        .iter()
        .fold(None::<&TraitScore>, |best, t| match best {
            Some(b) if b.score >= t.score => Some(b),
            _ => Some(t),
        })
        .map(|t| t.name);

    let summary = match top_trait {
        Some(name) => format!(
            "Overall character grade {} led by {}",
            scores.grade.as_str(),
            name.label().to_lowercase()
        ),
        None => format!("Overall character grade {}", scores.grade.as_str()),
    };

    CharacterInsights {
        strengths,
        development_areas,
        top_trait,
        summary,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    #[serde(rename = "trait")]
    pub name: Trait,
    pub focus: &'static str,
    pub current_score: f64,
    pub target_score: f64,
    pub drills: &'static [&'static str],
    pub timeline: &'static str,
}

/// One plan entry per development area; with none, a maintenance entry for the weakest trait.
pub fn development_plan(scores: &CharacterScores) -> Vec<PlanItem> {
    let mut areas: Vec<&TraitScore> = scores
        .traits
        .iter()
        .filter(|t| t.score < DEVELOPMENT_THRESHOLD)
        .collect();

    if areas.is_empty() {
        let weakest = scores.traits.iter().fold(None::<&TraitScore>, |worst, t| match worst {
            Some(w) if w.score <= t.score => Some(w),
            _ => Some(t),
        });
        return weakest
            .and_then(|t| plan_item(t, "Maintain", "Ongoing"))
            .into_iter()
            .collect();
    }

    areas.sort_by(|a, b| a.score.total_cmp(&b.score));
    areas
        .into_iter()
        .filter_map(|t| {
            let timeline = if t.score < 60.0 { "12 weeks" } else { "6 weeks" };
            plan_item(t, "Develop", timeline)
        })
        .collect()
}

fn plan_item(t: &TraitScore, focus: &'static str, timeline: &'static str) -> Option<PlanItem> {
    let info = character::trait_info(t.name)?;
    Some(PlanItem {
        name: t.name,
        focus,
        current_score: round_to(t.score, 1),
        target_score: round_to((t.score + 10.0).min(100.0), 1),
        drills: info.drills,
        timeline,
    })
}
