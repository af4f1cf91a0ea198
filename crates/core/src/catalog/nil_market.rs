//! NIL market constants: per-position baselines, conference multipliers, and the weight triple
//! used to attribute an athlete's value.

pub const DEFAULT_BASELINE: f64 = 50_000.0;
pub const DEFAULT_CONFERENCE_MULTIPLIER: f64 = 1.0;

pub struct SportMarket {
    pub sport: &'static str,
    pub positions: &'static [(&'static str, f64)],
}

#[derive(Debug, Clone, Copy)]
pub struct NilWeights {
    pub social: f64,
    pub performance: f64,
    pub marketability: f64,
}

pub static MARKETS: &[SportMarket] = &[
    SportMarket {
        sport: "football",
        positions: &[
            ("qb", 250_000.0),
            ("rb", 90_000.0),
            ("wr", 110_000.0),
            ("te", 70_000.0),
            ("ol", 45_000.0),
            ("dl", 60_000.0),
            ("lb", 55_000.0),
            ("db", 65_000.0),
            ("k", 15_000.0),
        ],
    },
    SportMarket {
        sport: "basketball",
        positions: &[
            ("pg", 140_000.0),
            ("sg", 110_000.0),
            ("sf", 100_000.0),
            ("pf", 85_000.0),
            ("c", 90_000.0),
        ],
    },
    SportMarket {
        sport: "baseball",
        positions: &[
            ("p", 40_000.0),
            ("c", 30_000.0),
            ("if", 32_000.0),
            ("of", 35_000.0),
        ],
    },
];

pub static CONFERENCES: &[(&str, f64)] = &[
    ("SEC", 1.3),
    ("Big Ten", 1.25),
    ("Big 12", 1.15),
    ("ACC", 1.1),
    ("Pac-12", 1.05),
];

pub static PERFORMANCE_LEVELS: &[(&str, f64)] = &[
    ("elite", 1.5),
    ("high", 1.25),
    ("average", 1.0),
    ("developing", 0.75),
];

pub const DEFAULT_PERFORMANCE_LEVEL: &str = "average";

pub static WEIGHTS: NilWeights = NilWeights {
    social: 0.35,
    performance: 0.45,
    marketability: 0.20,
};

/// Market baseline for a sport/position pair; unlisted pairs fall back to [`DEFAULT_BASELINE`].
pub fn baseline(sport: &str, position: Option<&str>) -> f64 {
    position
        .and_then(|pos| {
            MARKETS
                .iter()
                .find(|m| m.sport.eq_ignore_ascii_case(sport))?
                .positions
                .iter()
                .find(|(p, _)| p.eq_ignore_ascii_case(pos))
                .map(|(_, v)| *v)
        })
        .unwrap_or(DEFAULT_BASELINE)
}

pub fn conference_multiplier(conference: Option<&str>) -> f64 {
    conference
        .and_then(|c| {
            CONFERENCES
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(c.trim()))
                .map(|(_, m)| *m)
        })
        .unwrap_or(DEFAULT_CONFERENCE_MULTIPLIER)
}

pub fn performance_multiplier(level: &str) -> Option<f64> {
    PERFORMANCE_LEVELS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(level))
        .map(|(_, m)| *m)
}

pub fn performance_level_names() -> Vec<&'static str> {
    PERFORMANCE_LEVELS.iter().map(|(n, _)| *n).collect()
}
