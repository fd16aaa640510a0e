//! Clubs and the optional gear that modifies them.

use serde::{Deserialize, Serialize};

use crate::units::Yard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubCategory {
    Driver,
    Woods,
    LongIrons,
    MidIrons,
    ShortIrons,
    Wedges,
    Putter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub name: String,
    pub category: ClubCategory,
    /// Stock carry at full power.
    pub distance: Yard,
    /// 1.0 means no dispersion.
    pub accuracy: f64,
    /// Share of accuracy that survives a mis-hit.
    pub forgiveness: f64,
}

impl Club {
    pub fn new(
        name: impl Into<String>,
        category: ClubCategory,
        distance: f64,
        accuracy: f64,
        forgiveness: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            distance: Yard(distance),
            accuracy,
            forgiveness,
        }
    }

    /// Half-angle of the dispersion cone in degrees.
    pub fn accuracy_degrees(&self) -> f64 {
        ((1.0 - self.accuracy) * 100.0) / 2.0
    }

    pub fn is_putter(&self) -> bool {
        self.category == ClubCategory::Putter
    }
}

/// The fourteen-club bag every new golfer carries.
pub fn standard_bag() -> Vec<Club> {
    use ClubCategory::*;
    vec![
        Club::new("Driver", Driver, 280.0, 0.75, 0.8),
        Club::new("3 Wood", Woods, 250.0, 0.8, 0.8),
        Club::new("5 Wood", Woods, 230.0, 0.8, 0.8),
        Club::new("4 Iron", LongIrons, 215.0, 0.85, 0.8),
        Club::new("5 Iron", LongIrons, 200.0, 0.85, 0.8),
        Club::new("6 Iron", MidIrons, 190.0, 0.88, 0.8),
        Club::new("7 Iron", MidIrons, 180.0, 0.9, 0.8),
        Club::new("8 Iron", ShortIrons, 165.0, 0.9, 0.8),
        Club::new("9 Iron", ShortIrons, 150.0, 0.92, 0.8),
        Club::new("PW", Wedges, 140.0, 0.93, 0.8),
        Club::new("GW", Wedges, 130.0, 0.94, 0.8),
        Club::new("SW", Wedges, 125.0, 0.95, 0.8),
        Club::new("LW", Wedges, 100.0, 0.95, 0.8),
        Club::new("Putter", Putter, 40.0, 1.0, 0.95),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub name: String,
    /// Extra yards on every full-power carry.
    pub distance_bonus: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glove {
    pub name: String,
    pub accuracy_bonus: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoes {
    pub name: String,
    pub lie_penalty_reduction: i32,
}

/// Equipped gear; every slot may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub ball: Option<Ball>,
    #[serde(default)]
    pub glove: Option<Glove>,
    #[serde(default)]
    pub shoes: Option<Shoes>,
}

impl Equipment {
    pub fn distance_bonus(&self) -> f64 {
        self.ball.as_ref().map_or(0.0, |ball| ball.distance_bonus)
    }

    pub fn accuracy_bonus(&self) -> f64 {
        self.glove.as_ref().map_or(0.0, |glove| glove.accuracy_bonus)
    }

    pub fn lie_penalty_reduction(&self) -> i32 {
        self.shoes
            .as_ref()
            .map_or(0, |shoes| shoes.lie_penalty_reduction.max(0))
    }

    /// Applies ball and glove bonuses. Accuracy never exceeds 1.0.
    pub fn modify(&self, club: &Club) -> Club {
        Club {
            distance: Yard(club.distance.0 + self.distance_bonus()),
            accuracy: (club.accuracy + self.accuracy_bonus()).min(1.0),
            ..club.clone()
        }
    }
}
