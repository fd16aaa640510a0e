//! Points and vectors on the course plane.
//!
//! `y` grows from the tee towards the green. Rotations are clockwise-positive.

use serde::{Deserialize, Serialize};

use crate::units::Unit;

/// Integer position in Units. The origin is the tee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn subtract(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Unit-length copy. Callers must not pass a zero vector.
    pub fn normalize(self) -> Vector {
        let mag = self.magnitude();
        Vector::new(self.x / mag, self.y / mag)
    }

    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Angle in radians, 0 when either vector is zero.
    pub fn angle_between(self, other: Vector) -> f64 {
        let mags = self.magnitude() * other.magnitude();
        if mags == 0.0 {
            return 0.0;
        }
        (self.dot(other) / mags).clamp(-1.0, 1.0).acos()
    }

    pub fn rotate(self, degrees: f64) -> Vector {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vector::new(cos * self.x + sin * self.y, -sin * self.x + cos * self.y)
    }
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn as_vector(self) -> Vector {
        Vector::new(self.x as f64, self.y as f64)
    }

    /// Displacement from `self` to `other`.
    pub fn direction(self, other: Point) -> Vector {
        other.as_vector().subtract(self.as_vector())
    }

    pub fn distance(self, other: Point) -> Unit {
        Unit(self.direction(other).magnitude())
    }

    /// Moves `distance` Units along `direction`, truncating toward zero.
    pub fn moved(self, direction: Vector, distance: f64) -> Point {
        let unit = direction.normalize();
        Point {
            x: (self.x as f64 + unit.x * distance) as i64,
            y: (self.y as f64 + unit.y * distance) as i64,
        }
    }
}
