//! 3d6 skill checks and the outcome ladder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rng::RandomSource;

pub const DICE_PER_CHECK: usize = 3;
pub const DIE_SIDES: usize = 6;

/// Quality tiers, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCheckOutcome {
    CriticalFailure,
    Bad,
    Poor,
    Marginal,
    Good,
    Excellent,
    CriticalSuccess,
}

impl SkillCheckOutcome {
    /// Experience awarded to the club's skill and ability.
    pub fn experience(self) -> u32 {
        match self {
            SkillCheckOutcome::CriticalSuccess => 15,
            SkillCheckOutcome::Excellent => 10,
            SkillCheckOutcome::Good => 7,
            SkillCheckOutcome::Marginal => 5,
            SkillCheckOutcome::Poor => 3,
            SkillCheckOutcome::Bad => 2,
            SkillCheckOutcome::CriticalFailure => 1,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SkillCheckOutcome::CriticalSuccess => "PURE STRIKE! Perfect contact.",
            SkillCheckOutcome::Excellent => "Great shot! Solid compression.",
            SkillCheckOutcome::Good => "Good contact. Ball flights well.",
            SkillCheckOutcome::Marginal => "Just caught it. Got away with one.",
            SkillCheckOutcome::Poor => "Slight miss. Not quite centered.",
            SkillCheckOutcome::Bad => "Poor contact. Significant mishit.",
            SkillCheckOutcome::CriticalFailure => "DISASTER! Completely topped/chunked it.",
        }
    }
}

impl fmt::Display for SkillCheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkillCheckOutcome::CriticalFailure => "Critical Failure",
            SkillCheckOutcome::Bad => "Bad",
            SkillCheckOutcome::Poor => "Poor",
            SkillCheckOutcome::Marginal => "Marginal",
            SkillCheckOutcome::Good => "Good",
            SkillCheckOutcome::Excellent => "Excellent",
            SkillCheckOutcome::CriticalSuccess => "Critical Success",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCheckResult {
    pub success: bool,
    pub is_critical: bool,
    pub roll_total: i32,
    pub rolls: [u8; DICE_PER_CHECK],
    /// Target number minus roll total.
    pub margin: i32,
    pub outcome: SkillCheckOutcome,
}

impl SkillCheckResult {
    /// Builds the result for a known set of dice.
    pub fn from_rolls(target_number: i32, rolls: [u8; DICE_PER_CHECK]) -> Self {
        let roll_total: i32 = rolls.iter().map(|&r| i32::from(r)).sum();
        let margin = target_number - roll_total;
        let is_critical = rolls.iter().all(|&r| r == rolls[0]);
        Self {
            success: margin >= 0,
            is_critical,
            roll_total,
            rolls,
            margin,
            outcome: determine_outcome(margin, is_critical),
        }
    }
}

pub fn roll_die<R: RandomSource + ?Sized>(rng: &mut R) -> u8 {
    (rng.int_n(DIE_SIDES) + 1) as u8
}

/// Rolls 3d6 against `target_number`.
pub fn skill_check<R: RandomSource + ?Sized>(target_number: i32, rng: &mut R) -> SkillCheckResult {
    let mut rolls = [0u8; DICE_PER_CHECK];
    for roll in rolls.iter_mut() {
        *roll = roll_die(rng);
    }
    SkillCheckResult::from_rolls(target_number, rolls)
}

/// Maps a margin to its tier. A triple overrides the table entirely.
pub fn determine_outcome(margin: i32, is_critical: bool) -> SkillCheckOutcome {
    if is_critical {
        return if margin >= 0 {
            SkillCheckOutcome::CriticalSuccess
        } else {
            SkillCheckOutcome::CriticalFailure
        };
    }
    match margin {
        m if m >= 7 => SkillCheckOutcome::CriticalSuccess,
        4..=6 => SkillCheckOutcome::Excellent,
        1..=3 => SkillCheckOutcome::Good,
        0 => SkillCheckOutcome::Marginal,
        -3..=-1 => SkillCheckOutcome::Poor,
        -6..=-4 => SkillCheckOutcome::Bad,
        _ => SkillCheckOutcome::CriticalFailure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{seeded, ScriptedRandom};

    #[test]
    fn test_tier_boundaries() {
        use SkillCheckOutcome::*;
        let cases = [
            (10, CriticalSuccess),
            (7, CriticalSuccess),
            (6, Excellent),
            (4, Excellent),
            (3, Good),
            (1, Good),
            (0, Marginal),
            (-1, Poor),
            (-3, Poor),
            (-4, Bad),
            (-6, Bad),
            (-7, CriticalFailure),
            (-15, CriticalFailure),
        ];
        for (margin, expected) in cases {
            assert_eq!(determine_outcome(margin, false), expected, "margin {margin}");
        }
    }

    #[test]
    fn test_critical_overrides_table() {
        for margin in 0..=15 {
            assert_eq!(determine_outcome(margin, true), SkillCheckOutcome::CriticalSuccess);
        }
        for margin in -15..0 {
            assert_eq!(determine_outcome(margin, true), SkillCheckOutcome::CriticalFailure);
        }
    }

    #[test]
    fn test_tiers_are_monotonic_in_margin() {
        let mut previous = determine_outcome(-30, false);
        for margin in -29..=30 {
            let current = determine_outcome(margin, false);
            assert!(current >= previous, "margin {margin}");
            previous = current;
        }
    }

    #[test]
    fn test_skill_check_uses_injected_dice() {
        let mut rng = ScriptedRandom::with_rolls(&[3, 4, 5], 0.0);
        let result = skill_check(4, &mut rng);
        assert_eq!(result.rolls, [3, 4, 5]);
        assert_eq!(result.roll_total, 12);
        assert_eq!(result.margin, -8);
        assert!(!result.success);
        assert!(!result.is_critical);
        assert_eq!(result.outcome, SkillCheckOutcome::CriticalFailure);
    }

    #[test]
    fn test_triple_is_critical() {
        let result = SkillCheckResult::from_rolls(10, [2, 2, 2]);
        assert!(result.is_critical);
        assert!(result.success);
        assert_eq!(result.margin, 4);
        assert_eq!(result.outcome, SkillCheckOutcome::CriticalSuccess);

        let result = SkillCheckResult::from_rolls(10, [6, 6, 6]);
        assert!(result.is_critical);
        assert_eq!(result.outcome, SkillCheckOutcome::CriticalFailure);
    }

    #[test]
    fn test_break_even_is_success() {
        let result = SkillCheckResult::from_rolls(9, [2, 3, 4]);
        assert!(result.success);
        assert_eq!(result.outcome, SkillCheckOutcome::Marginal);
    }

    #[test]
    fn test_roll_totals_in_range() {
        let mut rng = seeded(99);
        for _ in 0..1000 {
            let result = skill_check(10, &mut rng);
            assert!((3..=18).contains(&result.roll_total));
            assert!(result.rolls.iter().all(|r| (1..=6).contains(r)));
        }
    }
}
