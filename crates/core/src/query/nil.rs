use super::{parse_body, parse_number, present, QueryError};
use crate::catalog::nil_market;
use crate::metrics::nil::{
    self, AthleteProfile, Breakdown, DealRecommendations, MarketComparison, PerformanceLevel,
    Projections, SocialMedia, ValuationModel, ValueDrivers,
};
use serde::{Deserialize, Serialize};

const MAX_GPA: f64 = 5.0;

/// Query-string form: social counts are flat and achievements are comma-separated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NilParams {
    pub sport: Option<String>,
    pub position: Option<String>,
    pub conference: Option<String>,
    #[serde(alias = "performanceLevel")]
    pub performance_level: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub tiktok: Option<String>,
    pub gpa: Option<String>,
    pub year: Option<String>,
    pub achievements: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialMediaBody {
    pub instagram: Option<u64>,
    pub twitter: Option<u64>,
    pub tiktok: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NilBody {
    pub sport: Option<String>,
    pub position: Option<String>,
    pub conference: Option<String>,
    #[serde(alias = "performanceLevel")]
    pub performance_level: Option<String>,
    #[serde(alias = "socialMedia")]
    pub social_media: Option<SocialMediaBody>,
    pub gpa: Option<f64>,
    pub year: Option<String>,
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NilRequest {
    pub athlete: AthleteProfile,
}

impl NilRequest {
    pub fn from_params(params: &NilParams) -> Result<Self, QueryError> {
        let social_media = SocialMedia {
            instagram: parse_number::<u64>("instagram", params.instagram.as_deref())?.unwrap_or(0),
            twitter: parse_number::<u64>("twitter", params.twitter.as_deref())?.unwrap_or(0),
            tiktok: parse_number::<u64>("tiktok", params.tiktok.as_deref())?.unwrap_or(0),
        };
        let achievements: Vec<String> = present(params.achievements.as_deref())
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self::build(
            params.sport.as_deref(),
            params.position.as_deref(),
            params.conference.as_deref(),
            params.performance_level.as_deref(),
            social_media,
            parse_number::<f64>("gpa", params.gpa.as_deref())?,
            params.year.as_deref(),
            achievements,
        )
    }

    pub fn from_body(body: &[u8]) -> Result<Self, QueryError> {
        let body: NilBody = parse_body(body)?;
        let social = body.social_media.unwrap_or_default();
        let social_media = SocialMedia {
            instagram: social.instagram.unwrap_or(0),
            twitter: social.twitter.unwrap_or(0),
            tiktok: social.tiktok.unwrap_or(0),
        };
        let achievements: Vec<String> = body
            .achievements
            .unwrap_or_default()
            .into_iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();

        Self::build(
            body.sport.as_deref(),
            body.position.as_deref(),
            body.conference.as_deref(),
            body.performance_level.as_deref(),
            social_media,
            body.gpa,
            body.year.as_deref(),
            achievements,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        sport: Option<&str>,
        position: Option<&str>,
        conference: Option<&str>,
        performance_level: Option<&str>,
        social_media: SocialMedia,
        gpa: Option<f64>,
        year: Option<&str>,
        achievements: Vec<String>,
    ) -> Result<Self, QueryError> {
        let sport = present(sport).ok_or(QueryError::MissingField("sport"))?;

        let performance = match present(performance_level) {
            None => PerformanceLevel::default(),
            Some(raw) => nil_market::PERFORMANCE_LEVELS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(raw))
                .map(|&(name, multiplier)| PerformanceLevel { name, multiplier })
                .ok_or_else(|| {
                    QueryError::bad_selector(
                        "Invalid performance level",
                        "performance level",
                        raw,
                        "available_performance_levels",
                        nil_market::performance_level_names(),
                    )
                })?,
        };

        if let Some(gpa) = gpa {
            if !(0.0..=MAX_GPA).contains(&gpa) {
                return Err(QueryError::InvalidValue {
                    field: "gpa",
                    reason: format!("must be between 0 and {MAX_GPA} (got {gpa})"),
                });
            }
        }

        Ok(Self {
            athlete: AthleteProfile {
                sport: sport.to_lowercase(),
                position: present(position).map(str::to_lowercase),
                conference: present(conference).map(str::to_string),
                performance,
                social_media,
                gpa,
                year: present(year).map(str::to_string),
                achievements,
            },
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteSummary {
    pub sport: String,
    pub position: Option<String>,
    pub conference: Option<String>,
    pub performance_level: &'static str,
    pub year: Option<String>,
    pub social_media: SocialMedia,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NilValuationView {
    pub athlete: AthleteSummary,
    pub total_annual_value: i64,
    pub breakdown: Breakdown,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NilInsights {
    pub highlights: Vec<String>,
    pub value_drivers: ValueDrivers,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NilPayload {
    pub nil_valuation: NilValuationView,
    pub market_comparison: MarketComparison,
    pub insights: NilInsights,
    pub deal_recommendations: DealRecommendations,
    pub projections: Projections,
}

pub fn resolve(request: &NilRequest, model: &dyn ValuationModel) -> NilPayload {
    let athlete = &request.athlete;
    let value = model.value(athlete);
    let total = value.total_annual_value;
    let comparison = nil::market_comparison(total, &athlete.sport, athlete.position.as_deref());

    NilPayload {
        nil_valuation: NilValuationView {
            athlete: AthleteSummary {
                sport: athlete.sport.clone(),
                position: athlete.position.clone(),
                conference: athlete.conference.clone(),
                performance_level: athlete.performance.name,
                year: athlete.year.clone(),
                social_media: athlete.social_media,
            },
            total_annual_value: total,
            breakdown: value.breakdown,
        },
        insights: NilInsights {
            highlights: nil::highlights(athlete, &value, &comparison),
            value_drivers: nil::value_drivers(athlete, &nil_market::WEIGHTS),
        },
        market_comparison: comparison,
        deal_recommendations: nil::deal_recommendations(total),
        projections: nil::projections(total),
    }
}
