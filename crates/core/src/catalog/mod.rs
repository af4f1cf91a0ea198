//! Immutable dataset behind every endpoint.
//!
//! Everything here is a `static` literal: the catalog is built into the binary, never reassigned,
//! and handed out as `&'static` borrows. Response time stamps are added by the API layer; nothing
//! in this module is time-dependent.

pub mod character;
pub mod grizzlies;
pub mod leagues;
pub mod live;
pub mod nil_market;
pub mod perfect_game;

use anyhow::ensure;
use serde::ser::{Serialize, SerializeMap, Serializer};

pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Ordered `label -> value` pairs rendered as a JSON object.
#[derive(Debug, Clone, Copy)]
pub struct Keyed<T: 'static>(pub &'static [(&'static str, T)]);

/// Bag of labelled numeric fields (physical metrics, cognitive profiles, weight factors).
pub type Scalars = Keyed<f64>;

impl<T> Keyed<T> {
    pub fn get(&self, key: &str) -> Option<&'static T> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static (&'static str, T)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.0.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Keyed<f64> {
    pub fn sum(&self) -> f64 {
        self.0.iter().map(|(_, v)| v).sum()
    }
}

impl<T: Serialize> Serialize for Keyed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Checks the catalog invariants. Called once before the server binds; a failure here is a
/// programming error in the literals, not a runtime condition.
pub fn validate() -> anyhow::Result<()> {
    let trait_total = character::total_weight();
    ensure!(
        (trait_total - 1.0).abs() <= WEIGHT_TOLERANCE,
        "character trait weights must sum to 1.0 (got {trait_total})"
    );

    let nil = nil_market::WEIGHTS;
    let nil_total = nil.social + nil.performance + nil.marketability;
    ensure!(
        (nil_total - 1.0).abs() <= WEIGHT_TOLERANCE,
        "NIL weight triple must sum to 1.0 (got {nil_total})"
    );

    for prospect in perfect_game::PROSPECTS {
        ensure_unit_bag(prospect.name, "cognitive_profile", &prospect.cognitive_profile)?;
        if let Some(nil) = &prospect.nil_projection {
            let total = nil.weight_factors.sum();
            ensure!(
                (total - 1.0).abs() <= WEIGHT_TOLERANCE,
                "NIL weight factors for {} must sum to 1.0 (got {total})",
                prospect.name
            );
        }
    }

    for team in leagues::TEAMS {
        let p = &team.predictions;
        ensure_unit(team.key, "win_probability_tonight", p.win_probability_tonight)?;
        ensure_unit(team.key, "playoff_chances", p.playoff_chances)?;
        ensure_unit(team.key, "championship_odds", p.championship_odds)?;
        ensure!(
            leagues::league(team.league_key).is_some(),
            "team {} references unknown league {}",
            team.key,
            team.league_key
        );
    }

    let platform = &leagues::PLATFORM_METRICS;
    ensure_unit("platform", "accuracy_rate", platform.accuracy_rate)?;
    ensure_unit("platform", "cache_hit_rate", platform.cache_hit_rate)?;
    ensure_unit_bag("platform", "team_readiness", &platform.team_readiness)?;

    for player in grizzlies::GRIZZLIES.player_cognitive {
        ensure_unit_bag(player.player, "cognitive_profile", &player.profile)?;
    }
    ensure_unit(
        "grizzlies",
        "live_game.win_probability",
        grizzlies::GRIZZLIES.live_game.win_probability,
    )?;

    tracing::debug!(
        leagues = leagues::LEAGUES.len(),
        teams = leagues::TEAMS.len(),
        prospects = perfect_game::PROSPECTS.len(),
        "catalog validated"
    );
    Ok(())
}

fn ensure_unit(owner: &str, field: &str, value: f64) -> anyhow::Result<()> {
    ensure!(
        (0.0..=1.0).contains(&value),
        "{owner}.{field} must be between 0 and 1 (got {value})"
    );
    Ok(())
}

fn ensure_unit_bag(owner: &str, field: &str, bag: &Scalars) -> anyhow::Result<()> {
    for (key, value) in bag.iter() {
        ensure_unit(owner, &format!("{field}.{key}"), *value)?;
    }
    Ok(())
}
