//! Holes, the ball, and hole-completion detection.

use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Point, Vector},
    grid::CourseGrid,
    lie::LieType,
    units::{Foot, Unit, Yard},
};

/// Mercy rule: a hole ends at this many strokes.
pub const MAX_STROKES_PER_HOLE: u32 = 11;
/// A directly struck ball drops if it stops within this radius.
pub const DIRECT_HIT_RADIUS: Foot = Foot(16.0);
/// A near miss drops if it stops within this radius.
pub const LIP_OUT_RADIUS: Yard = Yard(1.0);
/// Closest approach that still counts as a near miss.
pub const NEAR_MISS_UNITS: Unit = Unit(2.0);
pub const TAP_IN_RADIUS: Foot = Foot(4.0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GolfBall {
    pub location: Point,
    pub prev_location: Point,
}

impl GolfBall {
    pub fn at(location: Point) -> Self {
        Self {
            location,
            prev_location: location,
        }
    }

    pub fn tee_up(&mut self, tee: Point) {
        *self = GolfBall::at(tee);
    }

    /// Moves the ball `distance` Units along `direction` and returns the path.
    pub fn receive_hit(&mut self, direction: Vector, distance: f64) -> Vector {
        self.prev_location = self.location;
        if !direction.is_zero() {
            self.location = self.location.moved(direction, distance);
        }
        self.path()
    }

    /// Moves the resting point without touching the previous location.
    pub fn settle(&mut self, location: Point) {
        self.location = location;
    }

    pub fn path(&self) -> Vector {
        self.prev_location.direction(self.location)
    }

    /// Closest approach of the last travel segment to `target`.
    pub fn closest_approach(&self, target: Point) -> Unit {
        let path = self.path();
        let length_sq = path.dot(path);
        if length_sq == 0.0 {
            return self.location.distance(target);
        }
        let projection = self.prev_location.direction(target).dot(path) / length_sq;
        let closest = if projection < 0.0 {
            self.prev_location
        } else if projection > 1.0 {
            self.location
        } else {
            Point::new(
                (self.prev_location.x as f64 + projection * path.x) as i64,
                (self.prev_location.y as f64 + projection * path.y) as i64,
            )
        };
        closest.distance(target)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub number: u32,
    pub par: u32,
    #[serde(default)]
    pub tee: Point,
    pub hole_location: Point,
    #[serde(default)]
    pub grid: Option<CourseGrid>,
}

impl Hole {
    pub fn new(number: u32, par: u32, hole_location: Point) -> Self {
        Self {
            number,
            par,
            tee: Point::ORIGIN,
            hole_location,
            grid: None,
        }
    }

    pub fn with_grid(mut self, grid: CourseGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn with_tee(mut self, tee: Point) -> Self {
        self.tee = tee;
        self
    }

    /// Tee to cup.
    pub fn distance(&self) -> Yard {
        self.tee.distance(self.hole_location).yards()
    }

    /// Fairway everywhere when no grid is configured.
    pub fn lie_at(&self, pos: Point) -> LieType {
        self.grid
            .as_ref()
            .map_or(LieType::Fairway, |grid| grid.lie_at(pos))
    }

    /// Holed when the last segment passes over the cup and stops within
    /// 16 feet, or passes within 2 Units and stops within a yard.
    pub fn detect_hole_out(&self, ball: &GolfBall) -> bool {
        let approach = ball.closest_approach(self.hole_location);
        let rest = ball.location.distance(self.hole_location);
        let direct_hit = approach.0 < 1.0;
        (direct_hit && rest <= DIRECT_HIT_RADIUS.units())
            || (approach <= NEAR_MISS_UNITS && rest <= LIP_OUT_RADIUS.units())
    }

    pub fn detect_tap_in(&self, ball: &GolfBall) -> bool {
        ball.location.distance(self.hole_location) <= TAP_IN_RADIUS.units()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub holes: Vec<Hole>,
}

impl Course {
    pub fn new(holes: Vec<Hole>) -> Self {
        Self { holes }
    }

    pub fn par(&self) -> u32 {
        self.holes.iter().map(|hole| hole.par).sum()
    }

    pub fn par_through(&self, hole_number: u32) -> u32 {
        self.holes
            .iter()
            .filter(|hole| hole.number <= hole_number)
            .map(|hole| hole.par)
            .sum()
    }

    pub fn hole(&self, index: usize) -> Option<&Hole> {
        self.holes.get(index)
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }
}

pub const SIMPLE_HOLE_LENGTH: Yard = Yard(300.0);
pub const SIMPLE_HOLE_WIDTH: Yard = Yard(50.0);
pub const SIMPLE_CELL_SIZE: Yard = Yard(10.0);

/// Par-4, 300-yard holes with a tee strip and a 20-yard green. The tee and
/// the cup sit on the centre line.
pub fn generate_simple_course(hole_count: u32) -> Course {
    let holes = (1..=hole_count)
        .map(|number| {
            let mut grid = CourseGrid::new(SIMPLE_HOLE_WIDTH, SIMPLE_HOLE_LENGTH, SIMPLE_CELL_SIZE);
            grid.paint_region(
                (Yard(0.0), Yard(0.0)),
                (SIMPLE_HOLE_WIDTH, SIMPLE_CELL_SIZE),
                LieType::Tee,
            );
            grid.paint_region(
                (Yard(0.0), Yard(SIMPLE_HOLE_LENGTH.0 - 20.0)),
                (SIMPLE_HOLE_WIDTH, SIMPLE_HOLE_LENGTH),
                LieType::Green,
            );
            let cup = Point::new(
                (SIMPLE_HOLE_WIDTH.units().0 / 2.0) as i64,
                (SIMPLE_HOLE_LENGTH.units().0 - Yard(10.0).units().0) as i64,
            );
            Hole::new(number, 4, cup)
                .with_tee(Point::new(cup.x, 0))
                .with_grid(grid)
        })
        .collect();
    Course::new(holes)
}
