use std::fmt;

use serde::{Deserialize, Serialize};

/// Surface under the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LieType {
    Tee,
    #[default]
    Fairway,
    FirstCut,
    Rough,
    DeepRough,
    Bunker,
    Green,
    PenaltyArea,
}

impl LieType {
    pub const ALL: [LieType; 8] = [
        LieType::Tee,
        LieType::Fairway,
        LieType::FirstCut,
        LieType::Rough,
        LieType::DeepRough,
        LieType::Bunker,
        LieType::Green,
        LieType::PenaltyArea,
    ];

    /// Target number adjustment. Positive makes the shot easier.
    pub fn difficulty_modifier(self) -> i32 {
        match self {
            LieType::Tee => 2,
            LieType::Fairway => 0,
            LieType::FirstCut => -1,
            LieType::Rough => -2,
            LieType::DeepRough => -4,
            LieType::Bunker => -4,
            LieType::Green => 1,
            // played as a drop
            LieType::PenaltyArea => 0,
        }
    }
}

impl fmt::Display for LieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LieType::Tee => "Tee",
            LieType::Fairway => "Fairway",
            LieType::FirstCut => "First Cut",
            LieType::Rough => "Rough",
            LieType::DeepRough => "Deep Rough",
            LieType::Bunker => "Bunker",
            LieType::Green => "Green",
            LieType::PenaltyArea => "Penalty Area",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_modifiers() {
        let expected = [2, 0, -1, -2, -4, -4, 1, 0];
        for (lie, modifier) in LieType::ALL.iter().zip(expected) {
            assert_eq!(lie.difficulty_modifier(), modifier, "{lie}");
        }
    }

    #[test]
    fn test_harder_lies_rank_lower() {
        assert!(LieType::Tee.difficulty_modifier() > LieType::Fairway.difficulty_modifier());
        assert!(LieType::Fairway.difficulty_modifier() > LieType::Rough.difficulty_modifier());
        assert!(LieType::Rough.difficulty_modifier() > LieType::DeepRough.difficulty_modifier());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(LieType::FirstCut.to_string(), "First Cut");
        assert_eq!(LieType::PenaltyArea.to_string(), "Penalty Area");
    }

    #[test]
    fn test_yaml_names() {
        let lie: LieType = serde_yaml::from_str("deep_rough").unwrap();
        assert_eq!(lie, LieType::DeepRough);
    }
}
