//! Intended versus actual shot shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    dice::{SkillCheckOutcome, SkillCheckResult},
    rng::RandomSource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotShape {
    #[default]
    Straight,
    Draw,
    Fade,
    Hook,
    Slice,
}

impl ShotShape {
    pub const ALL: [ShotShape; 5] = [
        ShotShape::Straight,
        ShotShape::Draw,
        ShotShape::Fade,
        ShotShape::Hook,
        ShotShape::Slice,
    ];

    /// Target number adjustment for attempting this shape.
    pub fn difficulty_modifier(self) -> i32 {
        match self {
            ShotShape::Straight => -2,
            ShotShape::Draw | ShotShape::Fade => 1,
            ShotShape::Hook | ShotShape::Slice => -1,
        }
    }

    pub fn is_curving(self) -> bool {
        self != ShotShape::Straight
    }

    /// Draw and hook curve to the left.
    pub fn curves_left(self) -> bool {
        matches!(self, ShotShape::Draw | ShotShape::Hook)
    }

    pub fn is_severe(self) -> bool {
        matches!(self, ShotShape::Hook | ShotShape::Slice)
    }
}

impl fmt::Display for ShotShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShotShape::Straight => "Straight",
            ShotShape::Draw => "Draw",
            ShotShape::Fade => "Fade",
            ShotShape::Hook => "Hook",
            ShotShape::Slice => "Slice",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeResult {
    pub intended: ShotShape,
    pub actual: ShotShape,
    pub success: bool,
}

impl ShapeResult {
    pub fn clean(shape: ShotShape) -> Self {
        Self {
            intended: shape,
            actual: shape,
            success: true,
        }
    }
}

/// A check at or above `Marginal` holds the intended shape; anything worse
/// draws the miss from the per-shape table.
pub fn determine_actual_shape<R: RandomSource + ?Sized>(
    intended: ShotShape,
    result: &SkillCheckResult,
    rng: &mut R,
) -> ShapeResult {
    if result.outcome >= SkillCheckOutcome::Marginal {
        return ShapeResult::clean(intended);
    }
    let actual = missed_shape(intended, rng);
    ShapeResult {
        intended,
        actual,
        success: actual == intended,
    }
}

fn missed_shape<R: RandomSource + ?Sized>(intended: ShotShape, rng: &mut R) -> ShotShape {
    match intended {
        ShotShape::Straight => {
            if rng.int_n(2) == 0 {
                ShotShape::Draw
            } else {
                ShotShape::Fade
            }
        }
        ShotShape::Draw => pick(rng, 8, ShotShape::Hook, ShotShape::Straight),
        ShotShape::Fade => pick(rng, 8, ShotShape::Slice, ShotShape::Straight),
        ShotShape::Hook => pick(rng, 7, ShotShape::Hook, ShotShape::Draw),
        ShotShape::Slice => pick(rng, 7, ShotShape::Slice, ShotShape::Fade),
    }
}

/// `likely` with probability `tenths / 10`.
fn pick<R: RandomSource + ?Sized>(
    rng: &mut R,
    tenths: usize,
    likely: ShotShape,
    otherwise: ShotShape,
) -> ShotShape {
    if rng.int_n(10) < tenths {
        likely
    } else {
        otherwise
    }
}
