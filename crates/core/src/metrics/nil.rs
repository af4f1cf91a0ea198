//! NIL valuation: the base market formula, market comparison, deal split, and projections.
//!
//! Base formula published as part of the API contract:
//!
//! ```text
//! performance_value = baseline[sport][position] × conference_multiplier × performance_multiplier
//! social_bonus      = (instagram·0.5 + twitter·1.0 + tiktok·0.8) / 1000
//! academic_bonus    = 2,500 if gpa ≥ 3.5, 1,000 if gpa ≥ 3.0, else 0
//! achievement_bonus = 5,000 per listed achievement
//! total             = round(performance_value + social_bonus + academic_bonus + achievement_bonus)
//! ```

use super::round_to;
use crate::catalog::nil_market::{self, NilWeights};
use serde::Serialize;

const INSTAGRAM_RATE: f64 = 0.5;
const TWITTER_RATE: f64 = 1.0;
const TIKTOK_RATE: f64 = 0.8;
const SOCIAL_DIVISOR: f64 = 1000.0;

const ACHIEVEMENT_BONUS: f64 = 5_000.0;
const HIGH_GPA: f64 = 3.5;
const HIGH_GPA_BONUS: f64 = 2_500.0;
const GOOD_GPA: f64 = 3.0;
const GOOD_GPA_BONUS: f64 = 1_000.0;

const FULL_REACH_FOLLOWERS: f64 = 1_000_000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SocialMedia {
    pub instagram: u64,
    pub twitter: u64,
    pub tiktok: u64,
}

impl SocialMedia {
    pub fn total_followers(&self) -> u64 {
        self.instagram
            .saturating_add(self.twitter)
            .saturating_add(self.tiktok)
    }

    pub fn bonus(&self) -> f64 {
        (self.instagram as f64 * INSTAGRAM_RATE
            + self.twitter as f64 * TWITTER_RATE
            + self.tiktok as f64 * TIKTOK_RATE)
            / SOCIAL_DIVISOR
    }

    /// The channel with the most followers, if any are reported.
    pub fn strongest_channel(&self) -> Option<&'static str> {
        [
            ("Instagram", self.instagram),
            ("Twitter", self.twitter),
            ("TikTok", self.tiktok),
        ]
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .fold(None::<(&'static str, u64)>, |best, c| match best {
            Some(b) if b.1 >= c.1 => Some(b),
            _ => Some(c),
        })
        .map(|(name, _)| name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceLevel {
    pub name: &'static str,
    pub multiplier: f64,
}

impl Default for PerformanceLevel {
    fn default() -> Self {
        Self {
            name: nil_market::DEFAULT_PERFORMANCE_LEVEL,
            multiplier: 1.0,
        }
    }
}

/// A validated athlete description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AthleteProfile {
    pub sport: String,
    pub position: Option<String>,
    pub conference: Option<String>,
    pub performance: PerformanceLevel,
    pub social_media: SocialMedia,
    pub gpa: Option<f64>,
    pub year: Option<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub base_value: f64,
    pub conference_multiplier: f64,
    pub performance_multiplier: f64,
    pub performance_value: f64,
    pub social_media_bonus: f64,
    pub academic_bonus: f64,
    pub achievement_bonus: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NilValue {
    pub total_annual_value: i64,
    pub breakdown: Breakdown,
}

/// Produces the base valuation for an athlete.
pub trait ValuationModel: Send + Sync {
    fn value(&self, athlete: &AthleteProfile) -> NilValue;
}

/// Market-table formula described in the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketFormula;

impl ValuationModel for MarketFormula {
    fn value(&self, athlete: &AthleteProfile) -> NilValue {
        let base_value = nil_market::baseline(&athlete.sport, athlete.position.as_deref());
        let conference_multiplier = nil_market::conference_multiplier(athlete.conference.as_deref());
        let performance_multiplier = athlete.performance.multiplier;
        let performance_value = base_value * conference_multiplier * performance_multiplier;

        let social_media_bonus = athlete.social_media.bonus();
        let academic_bonus = match athlete.gpa {
            Some(gpa) if gpa >= HIGH_GPA => HIGH_GPA_BONUS,
            Some(gpa) if gpa >= GOOD_GPA => GOOD_GPA_BONUS,
            _ => 0.0,
        };
        let achievement_bonus = ACHIEVEMENT_BONUS * athlete.achievements.len() as f64;

        let total =
            performance_value + social_media_bonus + academic_bonus + achievement_bonus;

        NilValue {
            total_annual_value: total.round() as i64,
            breakdown: Breakdown {
                base_value,
                conference_multiplier,
                performance_multiplier,
                performance_value: round_to(performance_value, 2),
                social_media_bonus: round_to(social_media_bonus, 2),
                academic_bonus,
                achievement_bonus,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketPosition {
    #[serde(rename = "Above Market")]
    AboveMarket,
    #[serde(rename = "Below Market")]
    BelowMarket,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketComparison {
    pub baseline: f64,
    pub percentile_rank: i64,
    pub market_position: MarketPosition,
    pub percent_difference: i64,
}

pub fn market_comparison(total: i64, sport: &str, position: Option<&str>) -> MarketComparison {
    let baseline = nil_market::baseline(sport, position);
    let total = total as f64;
    let ratio = total / baseline;

    MarketComparison {
        baseline,
        percentile_rank: ((ratio * 50.0).round() as i64).min(100),
        market_position: if total >= baseline {
            MarketPosition::AboveMarket
        } else {
            MarketPosition::BelowMarket
        },
        percent_difference: ((total - baseline).abs() / baseline * 100.0).round() as i64,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRecommendations {
    pub endorsements: i64,
    pub social_media: i64,
    pub appearances: i64,
    pub merchandise: i64,
}

impl DealRecommendations {
    pub fn total(&self) -> i64 {
        self.endorsements + self.social_media + self.appearances + self.merchandise
    }
}

pub fn deal_recommendations(total: i64) -> DealRecommendations {
    let share = |pct: f64| (total as f64 * pct).round() as i64;
    DealRecommendations {
        endorsements: share(0.40),
        social_media: share(0.25),
        appearances: share(0.20),
        merchandise: share(0.15),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfessionalPotential {
    High,
    Medium,
    Developing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projections {
    pub next_year: i64,
    pub graduation: i64,
    pub professional_potential: ProfessionalPotential,
}

pub fn projections(total: i64) -> Projections {
    let t = total as f64;
    Projections {
        next_year: (t * 1.15).round() as i64,
        graduation: (t * 0.85).round() as i64,
        professional_potential: if total > 100_000 {
            ProfessionalPotential::High
        } else if total > 50_000 {
            ProfessionalPotential::Medium
        } else {
            ProfessionalPotential::Developing
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueDrivers {
    pub social: f64,
    pub performance: f64,
    pub marketability: f64,
    pub composite: f64,
}

/// Applies the NIL weight triple to normalised reach, performance, and conference exposure.
pub fn value_drivers(athlete: &AthleteProfile, weights: &NilWeights) -> ValueDrivers {
    let reach = (athlete.social_media.total_followers() as f64 / FULL_REACH_FOLLOWERS).min(1.0);
    let top_performance = nil_market::PERFORMANCE_LEVELS
        .iter()
        .map(|(_, m)| *m)
        .fold(f64::MIN, f64::max);
    let top_conference = nil_market::CONFERENCES
        .iter()
        .map(|(_, m)| *m)
        .fold(f64::MIN, f64::max);

    let performance = (athlete.performance.multiplier / top_performance).min(1.0);
    let marketability =
        (nil_market::conference_multiplier(athlete.conference.as_deref()) / top_conference).min(1.0);

    let social = weights.social * reach;
    let performance = weights.performance * performance;
    let marketability = weights.marketability * marketability;

    ValueDrivers {
        social: round_to(social, 3),
        performance: round_to(performance, 3),
        marketability: round_to(marketability, 3),
        composite: round_to(social + performance + marketability, 3),
    }
}

pub fn highlights(
    athlete: &AthleteProfile,
    value: &NilValue,
    comparison: &MarketComparison,
) -> Vec<String> {
    let mut out = Vec::new();
    let position = athlete.position.as_deref().unwrap_or("athlete");
    let direction = match comparison.market_position {
        MarketPosition::AboveMarket => "above",
        MarketPosition::BelowMarket => "below",
    };
    out.push(format!(
        "Valuation is {}% {direction} the {} {} market baseline",
        comparison.percent_difference,
        athlete.sport.to_lowercase(),
        position.to_uppercase(),
    ));

    match athlete.social_media.strongest_channel() {
        Some(channel) => out.push(format!(
            "{channel} is the strongest social channel ({} total followers)",
            athlete.social_media.total_followers()
        )),
        None => out.push("No social following reported; social bonus is zero".to_string()),
    }

    let conference = value.breakdown.conference_multiplier;
    if conference > 1.0 {
        if let Some(name) = athlete.conference.as_deref() {
            out.push(format!(
                "{name} exposure adds {}% to the performance value",
                ((conference - 1.0) * 100.0).round() as i64
            ));
        }
    }

    if value.breakdown.academic_bonus > 0.0 {
        out.push("Academic standing qualifies for an academic bonus".to_string());
    }

    if !athlete.achievements.is_empty() {
        out.push(format!(
            "{} listed achievement(s) add {}",
            athlete.achievements.len(),
            value.breakdown.achievement_bonus as i64
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qb() -> AthleteProfile {
        AthleteProfile {
            sport: "football".into(),
            position: Some("qb".into()),
            conference: Some("SEC".into()),
            ..Default::default()
        }
    }

    #[test]
    fn sec_quarterback_uses_market_times_conference() {
        let value = MarketFormula.value(&qb());
        assert_eq!(value.total_annual_value, 325_000);
        assert_eq!(value.breakdown.base_value, 250_000.0);
        assert_eq!(value.breakdown.conference_multiplier, 1.3);
        assert_eq!(value.breakdown.social_media_bonus, 0.0);
    }

    #[test]
    fn bonuses_stack_on_performance_value() {
        let athlete = AthleteProfile {
            performance: PerformanceLevel {
                name: "elite",
                multiplier: 1.5,
            },
            social_media: SocialMedia {
                instagram: 100_000,
                twitter: 20_000,
                tiktok: 50_000,
            },
            gpa: Some(3.6),
            achievements: vec!["All-SEC".into(), "Heisman finalist".into()],
            ..qb()
        };
        let value = MarketFormula.value(&athlete);
        // 250k·1.3·1.5 + (50k + 20k + 40k)/1000 + 2.5k + 10k
        assert_eq!(value.total_annual_value, 487_500 + 110 + 2_500 + 10_000);
        assert_eq!(value.breakdown.social_media_bonus, 110.0);
    }

    #[test]
    fn market_comparison_caps_percentile() {
        let c = market_comparison(325_000, "football", Some("qb"));
        assert_eq!(c.baseline, 250_000.0);
        assert_eq!(c.percentile_rank, 65);
        assert_eq!(c.market_position, MarketPosition::AboveMarket);
        assert_eq!(c.percent_difference, 30);

        let big = market_comparison(1_000_000, "football", Some("qb"));
        assert_eq!(big.percentile_rank, 100);

        let low = market_comparison(25_000, "curling", None);
        assert_eq!(low.baseline, 50_000.0);
        assert_eq!(low.market_position, MarketPosition::BelowMarket);
        assert_eq!(low.percent_difference, 50);
    }

    #[test]
    fn deal_split_is_within_rounding_of_total() {
        for total in [0, 1, 7, 999, 12_345, 325_000, 487_613] {
            let deals = deal_recommendations(total);
            assert!((deals.total() - total).abs() <= 4, "{total}: {deals:?}");
        }
        assert_eq!(deal_recommendations(100_000).endorsements, 40_000);
    }

    #[test]
    fn projection_tiers() {
        let p = projections(325_000);
        assert_eq!(p.next_year, 373_750);
        assert_eq!(p.graduation, 276_250);
        assert_eq!(p.professional_potential, ProfessionalPotential::High);
        assert_eq!(projections(100_000).professional_potential, ProfessionalPotential::Medium);
        assert_eq!(projections(50_000).professional_potential, ProfessionalPotential::Developing);
    }

    #[test]
    fn strongest_channel_prefers_largest_following() {
        let s = SocialMedia {
            instagram: 10,
            twitter: 0,
            tiktok: 40,
        };
        assert_eq!(s.strongest_channel(), Some("TikTok"));
        assert_eq!(SocialMedia::default().strongest_channel(), None);
    }

    #[test]
    fn value_drivers_stay_within_weights() {
        let d = value_drivers(&qb(), &nil_market::WEIGHTS);
        assert_eq!(d.social, 0.0);
        assert!(d.performance <= nil_market::WEIGHTS.performance);
        assert_eq!(d.marketability, 0.2);
        assert!(d.composite <= 1.0);
    }
}
