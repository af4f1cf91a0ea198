use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    Grit,
    Leadership,
    Resilience,
    Coachability,
    Competitiveness,
    Teamwork,
}

impl Trait {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grit => "grit",
            Self::Leadership => "leadership",
            Self::Resilience => "resilience",
            Self::Coachability => "coachability",
            Self::Competitiveness => "competitiveness",
            Self::Teamwork => "teamwork",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Grit => "Grit",
            Self::Leadership => "Leadership",
            Self::Resilience => "Resilience",
            Self::Coachability => "Coachability",
            Self::Competitiveness => "Competitiveness",
            Self::Teamwork => "Teamwork",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CharacterTrait {
    pub name: Trait,
    pub weight: f64,
    pub description: &'static str,
    pub drills: &'static [&'static str],
}

/// Trait weights for the overall character score. Order is the presentation order.
pub static TRAITS: [CharacterTrait; 6] = [
    CharacterTrait {
        name: Trait::Grit,
        weight: 0.25,
        description: "Execution in high-leverage, late-game situations",
        drills: &["Late-inning pressure simulations", "Two-strike approach reps"],
    },
    CharacterTrait {
        name: Trait::Leadership,
        weight: 0.20,
        description: "Influence on teammates and on-field communication",
        drills: &["Captain rotation in practice", "Film-room presentation to position group"],
    },
    CharacterTrait {
        name: Trait::Resilience,
        weight: 0.20,
        description: "Recovery after errors and adverse outcomes",
        drills: &["Reset-routine training", "Adversity scrimmages with imposed deficits"],
    },
    CharacterTrait {
        name: Trait::Coachability,
        weight: 0.15,
        description: "Speed and consistency of adopting coaching adjustments",
        drills: &["Weekly adjustment checklists", "Video feedback loops with position coach"],
    },
    CharacterTrait {
        name: Trait::Competitiveness,
        weight: 0.10,
        description: "Effort and intensity across repetitions",
        drills: &["Scored competition periods", "Head-to-head conditioning ladders"],
    },
    CharacterTrait {
        name: Trait::Teamwork,
        weight: 0.10,
        description: "Willingness to play within the team structure",
        drills: &["Situational team-defense reps", "Partner accountability goals"],
    },
];

pub fn weight(name: Trait) -> f64 {
    TRAITS
        .iter()
        .find(|t| t.name == name)
        .map(|t| t.weight)
        .unwrap_or_default()
}

pub fn total_weight() -> f64 {
    TRAITS.iter().map(|t| t.weight).sum()
}

pub fn trait_info(name: Trait) -> Option<&'static CharacterTrait> {
    TRAITS.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((total_weight() - 1.0).abs() <= crate::catalog::WEIGHT_TOLERANCE);
    }

    #[test]
    fn grit_carries_the_largest_weight() {
        assert_eq!(weight(Trait::Grit), 0.25);
        assert!(TRAITS.iter().all(|t| t.weight <= weight(Trait::Grit)));
    }
}
