use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Final,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Side {
    pub team: &'static str,
    pub abbreviation: &'static str,
    pub score: u32,
    pub record: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Game {
    pub id: &'static str,
    pub status: GameStatus,
    pub detail: &'static str,
    pub venue: &'static str,
    pub home: Side,
    pub away: Side,
}

#[derive(Debug, Clone, Copy)]
pub struct SportBoard {
    pub key: &'static str,
    pub display: &'static str,
    pub games: &'static [Game],
}

pub static BOARDS: &[SportBoard] = &[
    SportBoard {
        key: "mlb",
        display: "MLB",
        games: &[
            Game {
                id: "mlb-stl-chc-0914",
                status: GameStatus::InProgress,
                detail: "Bottom 7th",
                venue: "Busch Stadium",
                home: Side {
                    team: "St. Louis Cardinals",
                    abbreviation: "STL",
                    score: 5,
                    record: "78-72",
                },
                away: Side {
                    team: "Chicago Cubs",
                    abbreviation: "CHC",
                    score: 3,
                    record: "80-70",
                },
            },
            Game {
                id: "mlb-hou-tex-0914",
                status: GameStatus::Final,
                detail: "Final",
                venue: "Globe Life Field",
                home: Side {
                    team: "Texas Rangers",
                    abbreviation: "TEX",
                    score: 2,
                    record: "73-77",
                },
                away: Side {
                    team: "Houston Astros",
                    abbreviation: "HOU",
                    score: 6,
                    record: "82-68",
                },
            },
        ],
    },
    SportBoard {
        key: "nfl",
        display: "NFL",
        games: &[
            Game {
                id: "nfl-ten-ind-wk2",
                status: GameStatus::Scheduled,
                detail: "Sun 12:00 PM CT",
                venue: "Nissan Stadium",
                home: Side {
                    team: "Tennessee Titans",
                    abbreviation: "TEN",
                    score: 0,
                    record: "0-1",
                },
                away: Side {
                    team: "Indianapolis Colts",
                    abbreviation: "IND",
                    score: 0,
                    record: "1-0",
                },
            },
            Game {
                id: "nfl-dal-phi-wk2",
                status: GameStatus::Final,
                detail: "Final",
                venue: "AT&T Stadium",
                home: Side {
                    team: "Dallas Cowboys",
                    abbreviation: "DAL",
                    score: 24,
                    record: "1-1",
                },
                away: Side {
                    team: "Philadelphia Eagles",
                    abbreviation: "PHI",
                    score: 27,
                    record: "2-0",
                },
            },
        ],
    },
    SportBoard {
        key: "ncaa",
        display: "NCAA",
        games: &[Game {
            id: "ncaa-tex-okla-rr",
            status: GameStatus::InProgress,
            detail: "Q3 08:41",
            venue: "Cotton Bowl",
            home: Side {
                team: "Texas Longhorns",
                abbreviation: "TEX",
                score: 24,
                record: "5-0",
            },
            away: Side {
                team: "Oklahoma Sooners",
                abbreviation: "OU",
                score: 10,
                record: "4-1",
            },
        }],
    },
    SportBoard {
        key: "nba",
        display: "NBA",
        games: &[
            Game {
                id: "nba-mem-okc-1102",
                status: GameStatus::InProgress,
                detail: "Q4 03:12",
                venue: "FedExForum",
                home: Side {
                    team: "Memphis Grizzlies",
                    abbreviation: "MEM",
                    score: 104,
                    record: "5-3",
                },
                away: Side {
                    team: "Oklahoma City Thunder",
                    abbreviation: "OKC",
                    score: 99,
                    record: "7-1",
                },
            },
            Game {
                id: "nba-sas-dal-1102",
                status: GameStatus::Scheduled,
                detail: "7:30 PM CT",
                venue: "American Airlines Center",
                home: Side {
                    team: "Dallas Mavericks",
                    abbreviation: "DAL",
                    score: 0,
                    record: "4-4",
                },
                away: Side {
                    team: "San Antonio Spurs",
                    abbreviation: "SAS",
                    score: 0,
                    record: "3-5",
                },
            },
        ],
    },
];

pub fn board(key: &str) -> Option<&'static SportBoard> {
    BOARDS.iter().find(|b| b.key.eq_ignore_ascii_case(key))
}
