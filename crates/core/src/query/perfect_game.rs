use super::{parse_number, present, QueryError};
use crate::catalog::perfect_game::{
    self, AustinInsights, Pathway, Prospect, Tournament, AUSTIN_INSIGHTS, PATHWAYS, SHOWCASES,
    TOURNAMENTS,
};
use crate::metrics::{round_to, trajectory::trajectory_growth};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerfectGameParams {
    pub category: Option<String>,
    #[serde(rename = "graduationYear", alias = "graduation_year")]
    pub graduation_year: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Rankings,
    Tournaments,
    Showcases,
    CognitiveAnalytics,
    DevelopmentPathways,
    AustinInsights,
}

const CATEGORIES: &[(&str, Category)] = &[
    ("rankings", Category::Rankings),
    ("tournaments", Category::Tournaments),
    ("showcases", Category::Showcases),
    ("cognitiveAnalytics", Category::CognitiveAnalytics),
    ("developmentPathways", Category::DevelopmentPathways),
    ("austinInsights", Category::AustinInsights),
];

impl Category {
    pub fn as_str(self) -> &'static str {
        CATEGORIES
            .iter()
            .find(|(_, c)| *c == self)
            .map(|(name, _)| *name)
            .unwrap_or("rankings")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PerfectGameRequest {
    pub category: Category,
    pub graduation_year: Option<i32>,
}

impl PerfectGameRequest {
    pub fn parse(params: &PerfectGameParams) -> Result<Self, QueryError> {
        let category = match present(params.category.as_deref()) {
            None => Category::Rankings,
            Some(raw) => CATEGORIES
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(raw))
                .map(|(_, c)| *c)
                .ok_or_else(|| {
                    QueryError::bad_selector(
                        "Invalid category",
                        "category",
                        raw,
                        "available_categories",
                        CATEGORIES.iter().map(|(name, _)| *name).collect(),
                    )
                })?,
        };
        let graduation_year =
            parse_number::<i32>("graduationYear", params.graduation_year.as_deref())?;

        Ok(Self {
            category,
            graduation_year,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveSummary {
    pub prospect_count: usize,
    /// Mean of each labelled cognitive score across the selected prospects.
    pub averages: BTreeMap<&'static str, f64>,
    pub standouts: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayView {
    #[serde(flatten)]
    pub pathway: &'static Pathway,
    pub athletic_score: f64,
    pub business_score: f64,
    pub growth_percent: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PerfectGameSlice {
    Prospects(Vec<&'static Prospect>),
    Events(&'static [Tournament]),
    Cognitive(CognitiveSummary),
    Pathways(Vec<PathwayView>),
    Austin(&'static AustinInsights),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfectGamePayload {
    pub category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub data: PerfectGameSlice,
}

pub fn resolve(request: &PerfectGameRequest) -> Result<PerfectGamePayload, QueryError> {
    let year = request.graduation_year;
    let (count, data) = match request.category {
        Category::Rankings => {
            let prospects: Vec<_> = perfect_game::prospects_for_year(year).collect();
            (Some(prospects.len()), PerfectGameSlice::Prospects(prospects))
        }
        Category::Tournaments => (Some(TOURNAMENTS.len()), PerfectGameSlice::Events(TOURNAMENTS)),
        Category::Showcases => (Some(SHOWCASES.len()), PerfectGameSlice::Events(SHOWCASES)),
        Category::CognitiveAnalytics => (
            None,
            PerfectGameSlice::Cognitive(cognitive_summary(perfect_game::prospects_for_year(year))),
        ),
        Category::DevelopmentPathways => {
            let pathways = PATHWAYS
                .iter()
                .map(pathway_view)
                .collect::<Result<Vec<_>, _>>()?;
            (Some(pathways.len()), PerfectGameSlice::Pathways(pathways))
        }
        Category::AustinInsights => (None, PerfectGameSlice::Austin(&AUSTIN_INSIGHTS)),
    };

    Ok(PerfectGamePayload {
        category: request.category.as_str(),
        graduation_year: year,
        count,
        data,
    })
}

fn pathway_view(pathway: &'static Pathway) -> Result<PathwayView, QueryError> {
    Ok(PathwayView {
        pathway,
        athletic_score: round_to(pathway.athletic_ratio * 100.0, 1),
        business_score: round_to(pathway.business_ratio * 100.0, 1),
        growth_percent: trajectory_growth(pathway.athletic_ratio, pathway.business_ratio)?,
    })
}

fn cognitive_summary(prospects: impl Iterator<Item = &'static Prospect>) -> CognitiveSummary {
    let mut totals: BTreeMap<&'static str, (f64, usize)> = BTreeMap::new();
    let mut best: BTreeMap<&'static str, (&'static str, f64)> = BTreeMap::new();
    let mut prospect_count = 0;

    for prospect in prospects {
        prospect_count += 1;
        for &(key, value) in prospect.cognitive_profile.iter() {
            let entry = totals.entry(key).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;

            let leader = best.entry(key).or_insert((prospect.name, value));
            if value > leader.1 {
                *leader = (prospect.name, value);
            }
        }
    }

    CognitiveSummary {
        prospect_count,
        averages: totals
            .into_iter()
            .map(|(k, (sum, n))| (k, round_to(sum / n as f64, 3)))
            .collect(),
        standouts: best.into_iter().map(|(k, (name, _))| (k, name)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(category: Option<&str>, year: Option<&str>) -> Result<serde_json::Value, QueryError> {
        let params = PerfectGameParams {
            category: category.map(str::to_string),
            graduation_year: year.map(str::to_string),
        };
        let request = PerfectGameRequest::parse(&params)?;
        Ok(serde_json::to_value(resolve(&request)?).unwrap())
    }

    #[test]
    fn rankings_filter_by_graduation_year() {
        let v = run(Some("rankings"), Some("2026")).unwrap();
        assert_eq!(v["graduationYear"], 2026);
        assert_eq!(v["count"], 2);
        assert_eq!(v["data"][0]["name"], "Eli Vasquez");
        assert!(v["data"][0].get("nilProjection").is_none());
    }

    #[test]
    fn default_category_is_rankings() {
        let v = run(None, None).unwrap();
        assert_eq!(v["category"], "rankings");
        assert_eq!(v["count"], 5);
        assert!(v.get("graduationYear").is_none());
    }

    #[test]
    fn cognitive_averages_over_selected_year() {
        let v = run(Some("cognitiveAnalytics"), Some("2025")).unwrap();
        assert_eq!(v["data"]["prospectCount"], 2);
        assert_eq!(v["data"]["averages"]["composure"], 0.915);
        assert_eq!(v["data"]["standouts"]["reaction_time"], "Jackson Reyes");
    }

    #[test]
    fn pathways_report_growth() {
        let v = run(Some("developmentPathways"), None).unwrap();
        assert_eq!(v["data"][0]["name"], "Power Five Commitment");
        assert_eq!(v["data"][0]["growthPercent"], 15);
        assert_eq!(v["data"][2]["growthPercent"], -13);
    }

    #[test]
    fn events_expose_scouting_level() {
        let v = run(Some("tournaments"), None).unwrap();
        assert_eq!(v["data"][0]["scoutingLevel"], "Elite");
        assert_eq!(v["data"][0]["cognitiveTesting"], true);
    }

    #[test]
    fn bad_inputs() {
        assert_eq!(run(Some("gossip"), None).unwrap_err().code(), "Invalid category");
        assert_eq!(
            run(Some("rankings"), Some("next")).unwrap_err().code(),
            "Invalid graduationYear"
        );
    }
}
