//! Rotation, power and curvature for a resolved swing.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    dice::{SkillCheckOutcome, SkillCheckResult},
    equipment::Club,
    geometry::{Point, Vector},
    rng::RandomSource,
    shape::ShapeResult,
    units::Yard,
};

/// Lowest power a Poor or Bad strike can produce.
pub const MIN_MISHIT_POWER: f64 = 0.1;
/// Base rotation applied by a curving shape.
pub const CURVE_DEGREES: f64 = 30.0;
/// Extra intensity when the shape itself was missed.
pub const MISSED_SHAPE_FACTOR: f64 = 1.3;

/// Side of the target line a rotation pushes the ball to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Even `|margin|` goes left, odd goes right.
    pub fn from_margin(margin: i32) -> Self {
        if margin.unsigned_abs() % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Degrees off the target line, always non-negative.
pub fn calculate_rotation<R: RandomSource + ?Sized>(
    club: &Club,
    result: &SkillCheckResult,
    rng: &mut R,
) -> f64 {
    let club_acc = club.accuracy_degrees();
    let margin = f64::from(result.margin);
    let roll = rng.float64();
    match result.outcome {
        SkillCheckOutcome::CriticalSuccess => roll * club_acc * 0.1,
        SkillCheckOutcome::Excellent => (roll * club_acc * 0.5 - margin * 0.5).max(0.0),
        SkillCheckOutcome::Good => ((roll * club_acc).min(club_acc) - margin).max(0.0),
        SkillCheckOutcome::Marginal => roll * club_acc * 0.9,
        SkillCheckOutcome::Poor => {
            let base_miss = 45.0 * (1.0 - club.forgiveness);
            let rotation = (roll * base_miss + club_acc).max(club_acc);
            (rotation + margin.abs()).max(1.0)
        }
        SkillCheckOutcome::Bad => {
            let base_miss = 60.0 * (1.0 - club.forgiveness);
            let rotation = (roll * base_miss + club_acc * 1.5).max(club_acc * 1.5);
            (rotation + margin.abs() * 1.5).max(1.0)
        }
        SkillCheckOutcome::CriticalFailure => 60.0 + roll * 30.0,
    }
}

pub fn calculate_power(club: &Club, initial_power: f64, result: &SkillCheckResult) -> f64 {
    let margin_penalty = f64::from(result.margin.unsigned_abs()) / 100.0;
    match result.outcome {
        SkillCheckOutcome::CriticalSuccess => initial_power * 1.05,
        SkillCheckOutcome::Excellent | SkillCheckOutcome::Good => initial_power,
        SkillCheckOutcome::Marginal => initial_power * 0.95,
        SkillCheckOutcome::Poor => {
            (initial_power * (club.forgiveness - margin_penalty)).max(MIN_MISHIT_POWER)
        }
        SkillCheckOutcome::Bad => {
            (initial_power * (club.forgiveness * 0.8 - margin_penalty)).max(MIN_MISHIT_POWER)
        }
        SkillCheckOutcome::CriticalFailure => initial_power * 0.2,
    }
}

/// Straight-line flight before any shape is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swing {
    pub rotation: f64,
    pub side: Side,
    pub power: f64,
    /// Carry in Units.
    pub distance: f64,
    pub direction: Vector,
}

/// Turns a check into a swing aimed along `aim`.
///
/// `aim` must be non-zero.
pub fn resolve_swing<R: RandomSource + ?Sized>(
    club: &Club,
    initial_power: f64,
    result: &SkillCheckResult,
    aim: Vector,
    rng: &mut R,
) -> Swing {
    let rotation = calculate_rotation(club, result, rng);
    let power = calculate_power(club, initial_power, result);
    let side = Side::from_margin(result.margin);
    let distance = club.distance.units().0 * power;
    debug!(
        outcome = %result.outcome,
        rotation,
        %side,
        power,
        distance,
        "resolved swing"
    );
    Swing {
        rotation,
        side,
        power,
        distance,
        direction: aim.rotate(rotation * side.sign()),
    }
}

/// Bends the landing spot for a curving shape.
///
/// Returns `landing` unchanged for putts, straight shots and zero-length
/// flights. The turn direction flips when the hole lies behind the ball.
pub fn apply_curvature<R: RandomSource + ?Sized>(
    club: &Club,
    shape: &ShapeResult,
    from: Point,
    landing: Point,
    hole: Point,
    rng: &mut R,
) -> Point {
    let path = from.direction(landing);
    if club.is_putter() || !shape.actual.is_curving() || path.is_zero() {
        return landing;
    }
    let mut intensity = if shape.actual.is_severe() { 1.5 } else { 1.0 };
    if !shape.success {
        intensity *= MISSED_SHAPE_FACTOR;
    }
    let turn = if shape.actual.curves_left() { -1.0 } else { 1.0 };
    let behind = if from.direction(hole).y < 0.0 { -1.0 } else { 1.0 };
    let curved = path.rotate(CURVE_DEGREES * intensity * turn * behind);
    let drift = Yard((rng.float64() * 3.0 * intensity).max(1.0)).units().0;
    let curved_landing = landing.moved(curved, drift);
    debug!(
        shape = %shape.actual,
        intensity,
        drift,
        x = curved_landing.x,
        y = curved_landing.y,
        "applied curvature"
    );
    curved_landing
}
