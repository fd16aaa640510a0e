use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::course::Course;

/// Strokes per hole number, with the pars needed to score them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pars: BTreeMap<u32, u32>,
    strokes: BTreeMap<u32, u32>,
}

impl ScoreCard {
    pub fn new(course: &Course) -> Self {
        Self {
            pars: course
                .holes
                .iter()
                .map(|hole| (hole.number, hole.par))
                .collect(),
            strokes: BTreeMap::new(),
        }
    }

    pub fn record_stroke(&mut self, hole_number: u32) {
        *self.strokes.entry(hole_number).or_insert(0) += 1;
    }

    pub fn strokes_on(&self, hole_number: u32) -> u32 {
        self.strokes.get(&hole_number).copied().unwrap_or(0)
    }

    pub fn total_strokes(&self) -> u32 {
        self.strokes.values().sum()
    }

    pub fn strokes_through(&self, hole_number: u32) -> u32 {
        self.strokes.range(..=hole_number).map(|(_, &s)| s).sum()
    }

    pub fn hole_score_to_par(&self, hole_number: u32) -> i64 {
        i64::from(self.strokes_on(hole_number))
            - i64::from(self.pars.get(&hole_number).copied().unwrap_or(0))
    }

    /// Whole-course score; unplayed holes count against par.
    pub fn score_to_par(&self) -> i64 {
        i64::from(self.total_strokes()) - i64::from(self.pars.values().sum::<u32>())
    }

    pub fn score_through(&self, hole_number: u32) -> i64 {
        let par: u32 = self.pars.range(..=hole_number).map(|(_, &p)| p).sum();
        i64::from(self.strokes_through(hole_number)) - i64::from(par)
    }

    pub fn holes(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.strokes.iter().map(|(&hole, &strokes)| (hole, strokes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::generate_simple_course;

    fn card_with(strokes: &[(u32, u32)]) -> ScoreCard {
        let mut card = ScoreCard::new(&generate_simple_course(3));
        for &(hole, count) in strokes {
            for _ in 0..count {
                card.record_stroke(hole);
            }
        }
        card
    }

    #[test]
    fn test_empty_card() {
        let card = card_with(&[]);
        assert_eq!(card.total_strokes(), 0);
        assert_eq!(card.strokes_on(1), 0);
        assert_eq!(card.score_to_par(), -12);
    }

    #[test]
    fn test_strokes_and_scores() {
        let card = card_with(&[(1, 5), (2, 3), (3, 4)]);
        assert_eq!(card.strokes_on(1), 5);
        assert_eq!(card.total_strokes(), 12);
        assert_eq!(card.strokes_through(2), 8);
        assert_eq!(card.hole_score_to_par(1), 1);
        assert_eq!(card.hole_score_to_par(2), -1);
        assert_eq!(card.score_through(2), 0);
        assert_eq!(card.score_through(1), 1);
        assert_eq!(card.score_to_par(), 0);
    }

    #[test]
    fn test_holes_iterate_in_order() {
        let card = card_with(&[(2, 3), (1, 4)]);
        let holes: Vec<_> = card.holes().collect();
        assert_eq!(holes, vec![(1, 4), (2, 3)]);
    }
}
