use super::{present, QueryError};
use crate::catalog::live::{self, Game, BOARDS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const ALL: &str = "all";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveScoresParams {
    pub sport: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub enum SportSelector {
    All,
    One(&'static live::SportBoard),
}

#[derive(Debug, Clone, Copy)]
pub struct LiveScoresRequest {
    pub sport: SportSelector,
}

impl LiveScoresRequest {
    pub fn parse(params: &LiveScoresParams) -> Result<Self, QueryError> {
        let sport = match present(params.sport.as_deref()) {
            None => SportSelector::All,
            Some(s) if s.eq_ignore_ascii_case(ALL) => SportSelector::All,
            Some(s) => live::board(s).map(SportSelector::One).ok_or_else(|| {
                QueryError::bad_selector(
                    "Sport not found",
                    "sport",
                    s,
                    "available_sports",
                    available_sports(),
                )
            })?,
        };
        Ok(Self { sport })
    }
}

pub fn available_sports() -> Vec<&'static str> {
    std::iter::once(ALL)
        .chain(BOARDS.iter().map(|b| b.key))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Scores {
    One(&'static [Game]),
    All(BTreeMap<&'static str, &'static [Game]>),
}

#[derive(Debug, Clone, Serialize)]
pub struct LiveScoresPayload {
    pub sport: &'static str,
    pub count: usize,
    pub scores: Scores,
}

pub fn resolve(request: &LiveScoresRequest) -> LiveScoresPayload {
    match request.sport {
        SportSelector::One(board) => LiveScoresPayload {
            sport: board.display,
            count: board.games.len(),
            scores: Scores::One(board.games),
        },
        SportSelector::All => LiveScoresPayload {
            sport: "ALL",
            count: BOARDS.iter().map(|b| b.games.len()).sum(),
            scores: Scores::All(BOARDS.iter().map(|b| (b.key, b.games)).collect()),
        },
    }
}
