use serde::Serialize;

/// Letter grade, ordered from lowest to highest so `Ord` matches grade rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A+")]
    APlus,
}

// Breakpoints are exclusive: a score must clear the bound to earn the grade.
const SCALE: [(f64, Grade); 8] = [
    (90.0, Grade::APlus),
    (85.0, Grade::A),
    (80.0, Grade::AMinus),
    (75.0, Grade::BPlus),
    (70.0, Grade::B),
    (65.0, Grade::BMinus),
    (60.0, Grade::CPlus),
    (55.0, Grade::C),
];

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
        }
    }
}

/// Maps a 0..=100 score to its letter grade. NaN grades as `C-`.
pub fn grade_letter(score: f64) -> Grade {
    SCALE
        .iter()
        .find(|(bound, _)| score > *bound)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::CMinus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints() {
        assert_eq!(grade_letter(100.0), Grade::APlus);
        assert_eq!(grade_letter(90.5), Grade::APlus);
        assert_eq!(grade_letter(90.0), Grade::A);
        assert_eq!(grade_letter(84.0), Grade::AMinus);
        assert_eq!(grade_letter(76.0), Grade::BPlus);
        assert_eq!(grade_letter(70.1), Grade::B);
        assert_eq!(grade_letter(66.0), Grade::BMinus);
        assert_eq!(grade_letter(61.0), Grade::CPlus);
        assert_eq!(grade_letter(56.0), Grade::C);
        assert_eq!(grade_letter(55.0), Grade::CMinus);
        assert_eq!(grade_letter(0.0), Grade::CMinus);
        assert_eq!(grade_letter(f64::NAN), Grade::CMinus);
    }

    #[test]
    fn monotone_non_increasing_as_score_drops() {
        let mut previous = grade_letter(100.0);
        let mut score = 100.0;
        while score >= 0.0 {
            let g = grade_letter(score);
            assert!(g <= previous, "grade rose at {score}");
            previous = g;
            score -= 0.25;
        }
    }

    #[test]
    fn serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::AMinus).unwrap(), "\"A-\"");
        assert_eq!(Grade::BPlus.as_str(), "B+");
    }
}
