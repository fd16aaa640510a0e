//! Fixed-ratio course lengths.
//!
//! Everything on the course plane is measured in `Unit`s (5 inches). The other
//! types exist for readable constants and for reporting.

use serde::{Deserialize, Serialize};

const INCHES_PER_UNIT: f64 = 5.0;
const INCHES_PER_FOOT: f64 = 12.0;
const FEET_PER_YARD: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Unit(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Inch(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Foot(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Yard(pub f64);

impl Unit {
    pub fn inches(self) -> Inch {
        Inch(self.0 * INCHES_PER_UNIT)
    }

    pub fn feet(self) -> Foot {
        self.inches().feet()
    }

    pub fn yards(self) -> Yard {
        self.feet().yards()
    }
}

impl Inch {
    pub fn units(self) -> Unit {
        Unit(self.0 / INCHES_PER_UNIT)
    }

    pub fn feet(self) -> Foot {
        Foot(self.0 / INCHES_PER_FOOT)
    }

    pub fn yards(self) -> Yard {
        self.feet().yards()
    }
}

impl Foot {
    pub fn units(self) -> Unit {
        self.inches().units()
    }

    pub fn inches(self) -> Inch {
        Inch(self.0 * INCHES_PER_FOOT)
    }

    pub fn yards(self) -> Yard {
        Yard(self.0 / FEET_PER_YARD)
    }
}

impl Yard {
    pub fn units(self) -> Unit {
        self.feet().units()
    }

    pub fn inches(self) -> Inch {
        self.feet().inches()
    }

    pub fn feet(self) -> Foot {
        Foot(self.0 * FEET_PER_YARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_yard_conversions() {
        let yard = Yard(1.0);
        assert!(close(yard.feet().0, 3.0));
        assert!(close(yard.inches().0, 36.0));
        assert!(close(yard.units().0, 7.2));
    }

    #[test]
    fn test_hole_length_in_units() {
        // 300 yards -> 10_800 inches -> 2_160 units
        assert!(close(Yard(300.0).units().0, 2160.0));
        assert!(close(Unit(2160.0).yards().0, 300.0));
    }

    #[test]
    fn test_small_distances() {
        assert!(close(Foot(4.0).units().0, 9.6));
        assert!(close(Foot(16.0).units().0, 38.4));
        assert!(close(Unit(1.0).inches().0, 5.0));
        assert!(close(Inch(60.0).feet().0, 5.0));
    }

    #[test]
    fn test_round_trips_are_stable() {
        for value in [0.0, 0.5, 1.0, 12.25, 280.0, 1234.5] {
            assert!(close(Yard(value).units().yards().0, value));
            assert!(close(Foot(value).inches().feet().0, value));
            assert!(close(Inch(value).units().inches().0, value));
            assert!(close(Unit(value).feet().units().0, value));
        }
    }
}
