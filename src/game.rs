//! Round orchestration: one swing at a time through the resolution pipeline.

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    course::{Course, GolfBall, Hole, MAX_STROKES_PER_HOLE},
    dice::{skill_check, SkillCheckOutcome, DICE_PER_CHECK},
    error::GameError,
    geometry::{Point, Vector},
    golfer::Golfer,
    lie::LieType,
    rng::{derive_seed, seeded, RandomSource},
    scorecard::ScoreCard,
    shape::{determine_actual_shape, ShapeResult, ShotShape},
    trajectory::{apply_curvature, resolve_swing, Side},
    units::{Unit, Yard},
};

/// The player's decision for one swing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotCall {
    pub club: String,
    /// Nominally 0..=1; not clamped.
    pub power: f64,
    #[serde(default)]
    pub shape: ShotShape,
}

impl ShotCall {
    pub fn new(club: impl Into<String>, power: f64, shape: ShotShape) -> Self {
        Self {
            club: club.into(),
            power,
            shape,
        }
    }
}

/// Everything a renderer needs to describe one swing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotReport {
    pub hole_number: u32,
    pub stroke: u32,
    pub club: String,
    pub lie: LieType,
    pub target_number: i32,
    pub rolls: [u8; DICE_PER_CHECK],
    pub margin: i32,
    pub outcome: SkillCheckOutcome,
    pub description: String,
    pub intended_shape: ShotShape,
    pub actual_shape: ShotShape,
    pub shape_success: bool,
    pub rotation: f64,
    pub side: Side,
    pub power: f64,
    pub adjusted_power: f64,
    pub distance: Yard,
    pub location: Point,
    pub xp_earned: u32,
    pub level_ups: Vec<String>,
    pub holed_out: bool,
    pub tap_in: bool,
}

/// Read-only view of the ball's situation before a swing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotContext {
    pub hole_number: u32,
    pub par: u32,
    pub strokes: u32,
    pub ball: Point,
    pub hole_location: Point,
    pub lie: LieType,
    pub remaining: Yard,
    pub suggested_club: String,
    pub suggested_power: f64,
}

impl ShotContext {
    /// The suggested club and power with the given shape.
    pub fn suggested_call(&self, shape: ShotShape) -> ShotCall {
        ShotCall::new(self.suggested_club.clone(), self.suggested_power, shape)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleSummary {
    pub hole_number: u32,
    pub par: u32,
    pub strokes: u32,
    pub reward: u32,
    /// Ended by the stroke limit rather than holing out.
    pub mercy: bool,
    pub shots: Vec<ShotReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub golfer: Golfer,
    pub hole_index: usize,
    pub holes_total: usize,
    pub ball: GolfBall,
    pub scorecard: ScoreCard,
    pub total_strokes: u32,
    pub score_to_par: i64,
    pub last_shot: Option<ShotReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub holes: Vec<HoleSummary>,
    pub total_strokes: u32,
    pub score_to_par: i64,
    pub money: u32,
}

pub struct Round<R: RandomSource = ChaCha8Rng> {
    golfer: Golfer,
    course: Course,
    ball: GolfBall,
    scorecard: ScoreCard,
    hole_index: usize,
    rng: R,
    /// Master seed and constructor for a fresh stream per hole.
    hole_streams: Option<(u64, fn(u64) -> R)>,
    last_shot: Option<ShotReport>,
    rewarded: bool,
}

impl Round<ChaCha8Rng> {
    /// Every hole draws from its own stream derived from `seed` and the hole
    /// number, so a hole replays the same way whatever was played before it.
    pub fn seeded(golfer: Golfer, course: Course, seed: u64) -> Self {
        let mut round = Self::with_random(golfer, course, seeded(seed));
        round.hole_streams = Some((seed, seeded as fn(u64) -> ChaCha8Rng));
        round.start_hole_stream();
        round
    }
}

impl<R: RandomSource> Round<R> {
    pub fn with_random(golfer: Golfer, course: Course, rng: R) -> Self {
        let ball = course
            .hole(0)
            .map_or_else(GolfBall::default, |hole| GolfBall::at(hole.tee));
        Self {
            scorecard: ScoreCard::new(&course),
            golfer,
            course,
            ball,
            hole_index: 0,
            rng,
            hole_streams: None,
            last_shot: None,
            rewarded: false,
        }
    }

    fn start_hole_stream(&mut self) {
        let Some((master, build)) = self.hole_streams else {
            return;
        };
        if let Some(number) = self.current_hole().map(|hole| hole.number) {
            self.rng = build(derive_seed(master, u64::from(number)));
            debug!(hole = number, "reseeded hole stream");
        }
    }

    pub fn golfer(&self) -> &Golfer {
        &self.golfer
    }

    pub fn golfer_mut(&mut self) -> &mut Golfer {
        &mut self.golfer
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn ball(&self) -> &GolfBall {
        &self.ball
    }

    pub fn scorecard(&self) -> &ScoreCard {
        &self.scorecard
    }

    pub fn last_shot(&self) -> Option<&ShotReport> {
        self.last_shot.as_ref()
    }

    pub fn hole_index(&self) -> usize {
        self.hole_index
    }

    pub fn current_hole(&self) -> Option<&Hole> {
        self.course.hole(self.hole_index)
    }

    /// Drops the ball somewhere on the current hole. The previous location
    /// follows, so the next hole-out check starts from here.
    pub fn place_ball(&mut self, location: Point) {
        self.ball = GolfBall::at(location);
    }

    pub fn is_round_complete(&self) -> bool {
        self.hole_index >= self.course.len()
    }

    pub fn strokes_this_hole(&self) -> u32 {
        self.current_hole()
            .map_or(0, |hole| self.scorecard.strokes_on(hole.number))
    }

    /// Holed out, or the stroke limit reached.
    pub fn is_hole_complete(&self) -> bool {
        if self.last_shot.as_ref().is_some_and(|shot| shot.holed_out) {
            return true;
        }
        self.strokes_this_hole() >= MAX_STROKES_PER_HOLE
    }

    pub fn context(&self) -> Result<ShotContext, GameError> {
        let hole = self.current_hole().ok_or(GameError::RoundComplete)?;
        let lie = hole.lie_at(self.ball.location);
        let remaining = self.ball.location.distance(hole.hole_location).yards();
        let club = self
            .golfer
            .best_club(remaining, lie)
            .ok_or(GameError::EmptyBag)?;
        let carry = self.golfer.modified_club(club).distance;
        let suggested_power = if carry.0 > 0.0 {
            (remaining.0 / carry.0).min(1.0)
        } else {
            1.0
        };
        Ok(ShotContext {
            hole_number: hole.number,
            par: hole.par,
            strokes: self.scorecard.strokes_on(hole.number),
            ball: self.ball.location,
            hole_location: hole.hole_location,
            lie,
            remaining,
            suggested_club: club.name.clone(),
            suggested_power,
        })
    }

    /// Resolves one swing end to end and records it.
    pub fn take_shot(&mut self, call: &ShotCall) -> Result<ShotReport, GameError> {
        let hole = self
            .course
            .hole(self.hole_index)
            .ok_or(GameError::RoundComplete)?;
        if self.is_hole_complete() {
            return Err(GameError::HoleComplete(hole.number));
        }
        let club = self
            .golfer
            .clubs
            .iter()
            .find(|club| club.name == call.club)
            .cloned()
            .ok_or_else(|| GameError::UnknownClub(call.club.clone()))?;

        let intended = if club.is_putter() {
            ShotShape::Straight
        } else {
            call.shape
        };
        let lie = hole.lie_at(self.ball.location);
        let target_number = self.golfer.target_number_with_shape(&club, lie, intended);
        let check = skill_check(target_number, &mut self.rng);
        debug!(
            club = %club.name,
            %lie,
            target_number,
            rolls = ?check.rolls,
            margin = check.margin,
            outcome = %check.outcome,
            "skill check"
        );
        let shape = if club.is_putter() {
            ShapeResult::clean(ShotShape::Straight)
        } else {
            determine_actual_shape(intended, &check, &mut self.rng)
        };

        let modified = self.golfer.modified_club(&club);
        let mut aim = self.ball.location.direction(hole.hole_location);
        if aim.is_zero() {
            aim = Vector::new(0.0, 1.0);
        }
        let swing = resolve_swing(&modified, call.power, &check, aim, &mut self.rng);
        self.ball.receive_hit(swing.direction, swing.distance);
        let landing = apply_curvature(
            &modified,
            &shape,
            self.ball.prev_location,
            self.ball.location,
            hole.hole_location,
            &mut self.rng,
        );
        self.ball.settle(landing);
        self.scorecard.record_stroke(hole.number);

        let xp_earned = check.outcome.experience();
        let level_ups = self.golfer.award_experience(&club, xp_earned);

        let holed_out = hole.detect_hole_out(&self.ball);
        let tap_in = !holed_out && hole.detect_tap_in(&self.ball);
        if tap_in {
            self.scorecard.record_stroke(hole.number);
        }

        let report = ShotReport {
            hole_number: hole.number,
            stroke: self.scorecard.strokes_on(hole.number),
            club: club.name.clone(),
            lie,
            target_number,
            rolls: check.rolls,
            margin: check.margin,
            outcome: check.outcome,
            description: check.outcome.description().to_string(),
            intended_shape: shape.intended,
            actual_shape: shape.actual,
            shape_success: shape.success,
            rotation: swing.rotation,
            side: swing.side,
            power: call.power,
            adjusted_power: swing.power,
            distance: Unit(self.ball.path().magnitude()).yards(),
            location: self.ball.location,
            xp_earned,
            level_ups: level_ups.messages(),
            holed_out: holed_out || tap_in,
            tap_in,
        };
        info!(
            hole = report.hole_number,
            stroke = report.stroke,
            club = %report.club,
            outcome = %report.outcome,
            shape = %report.actual_shape,
            distance = report.distance.0,
            holed_out = report.holed_out,
            tap_in,
            "shot"
        );
        for message in &report.level_ups {
            info!(golfer = %self.golfer.name, "{message}");
        }
        self.last_shot = Some(report.clone());
        Ok(report)
    }

    /// Credits the hole reward once. Returns the amount paid.
    pub fn complete_hole(&mut self) -> Result<u32, GameError> {
        let hole = self.current_hole().ok_or(GameError::RoundComplete)?;
        if !self.is_hole_complete() {
            return Err(GameError::HoleInProgress(hole.number));
        }
        if self.rewarded {
            return Ok(0);
        }
        let (par, number) = (hole.par, hole.number);
        let strokes = self.scorecard.strokes_on(number);
        let reward = self.golfer.award_hole_reward(par, strokes);
        self.rewarded = true;
        info!(hole = number, par, strokes, reward, "hole complete");
        Ok(reward)
    }

    /// Moves to the next hole and tees up.
    pub fn next_hole(&mut self) -> Result<(), GameError> {
        if self.is_round_complete() {
            return Err(GameError::RoundComplete);
        }
        self.hole_index += 1;
        self.last_shot = None;
        self.rewarded = false;
        if let Some(tee) = self.current_hole().map(|hole| hole.tee) {
            self.ball.tee_up(tee);
        }
        self.start_hole_stream();
        Ok(())
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            golfer: self.golfer.clone(),
            hole_index: self.hole_index,
            holes_total: self.course.len(),
            ball: self.ball,
            scorecard: self.scorecard.clone(),
            total_strokes: self.scorecard.total_strokes(),
            score_to_par: self.scorecard.score_to_par(),
            last_shot: self.last_shot.clone(),
        }
    }

    /// Plays the current hole to completion with `caddie` choosing each
    /// shot, then credits the reward. Does not advance to the next hole.
    pub fn play_hole<C>(&mut self, caddie: &mut C) -> Result<HoleSummary, GameError>
    where
        C: FnMut(&ShotContext) -> ShotCall,
    {
        let mut shots = Vec::new();
        while !self.is_hole_complete() {
            let context = self.context()?;
            let call = caddie(&context);
            shots.push(self.take_shot(&call)?);
        }
        let reward = self.complete_hole()?;
        let hole = self.current_hole().ok_or(GameError::RoundComplete)?;
        let holed = shots.last().is_some_and(|shot| shot.holed_out);
        Ok(HoleSummary {
            hole_number: hole.number,
            par: hole.par,
            strokes: self.scorecard.strokes_on(hole.number),
            reward,
            mercy: !holed,
            shots,
        })
    }

    pub fn run<C>(&mut self, caddie: C) -> anyhow::Result<RoundSummary>
    where
        C: FnMut(&ShotContext) -> ShotCall,
    {
        self.run_with_hook(caddie, |_, _| Ok(()))
    }

    /// Plays every remaining hole, calling `hook` after each one.
    pub fn run_with_hook<C, H>(
        &mut self,
        mut caddie: C,
        mut hook: H,
    ) -> anyhow::Result<RoundSummary>
    where
        C: FnMut(&ShotContext) -> ShotCall,
        H: FnMut(&HoleSummary, &RoundSnapshot) -> anyhow::Result<()>,
    {
        let mut holes = Vec::new();
        while !self.is_round_complete() {
            let summary = self.play_hole(&mut caddie)?;
            hook(&summary, &self.snapshot())?;
            holes.push(summary);
            self.next_hole()?;
        }
        info!(
            strokes = self.scorecard.total_strokes(),
            score_to_par = self.scorecard.score_to_par(),
            money = self.golfer.money,
            "round complete"
        );
        Ok(RoundSummary {
            holes,
            total_strokes: self.scorecard.total_strokes(),
            score_to_par: self.scorecard.score_to_par(),
            money: self.golfer.money,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{equipment::ClubCategory, golfer::AbilityKind, rng::ScriptedRandom};

    fn putting_green() -> Course {
        Course::new(vec![Hole::new(1, 3, Point::new(0, 100))])
    }

    #[test]
    fn test_unknown_club_is_rejected() {
        let mut round = Round::seeded(Golfer::new("Casey"), putting_green(), 1);
        let err = round
            .take_shot(&ShotCall::new("Sand Iron", 1.0, ShotShape::Straight))
            .unwrap_err();
        assert_eq!(err, GameError::UnknownClub("Sand Iron".into()));
        assert_eq!(round.strokes_this_hole(), 0);
    }

    #[test]
    fn test_context_suggests_putter_for_short_distance() {
        let round = Round::seeded(Golfer::new("Casey"), putting_green(), 1);
        let context = round.context().unwrap();
        assert_eq!(context.hole_number, 1);
        assert_eq!(context.lie, LieType::Fairway);
        assert_eq!(context.suggested_club, "Putter");
        // 100 Units is 13.9 yards of a 40-yard putter
        assert!((context.suggested_power - 100.0 / 288.0).abs() < 1e-9);
    }

    #[test]
    fn test_putts_ignore_shape() {
        // 1-2-3 against a target of 4
        let rng = ScriptedRandom::new(vec![0.0], vec![0, 1, 2]);
        let mut round = Round::with_random(Golfer::new("Casey"), putting_green(), rng);
        let report = round
            .take_shot(&ShotCall::new("Putter", 0.1, ShotShape::Hook))
            .unwrap();
        assert_eq!(report.target_number, 4);
        assert_eq!(report.outcome, SkillCheckOutcome::Poor);
        assert_eq!(report.intended_shape, ShotShape::Straight);
        assert_eq!(report.actual_shape, ShotShape::Straight);
        assert!(report.shape_success);
    }

    #[test]
    fn test_mercy_rule_ends_hole() {
        // no combination from this script reaches a target of 4
        let rng = ScriptedRandom::new(vec![0.0], vec![5, 5, 4, 1]);
        let course = Course::new(vec![Hole::new(1, 4, Point::new(0, 100_000))]);
        let mut round = Round::with_random(Golfer::new("Casey"), course, rng);
        let call = ShotCall::new("Putter", 0.01, ShotShape::Straight);
        for _ in 0..MAX_STROKES_PER_HOLE {
            round.take_shot(&call).unwrap();
        }
        assert!(round.is_hole_complete());
        assert_eq!(
            round.take_shot(&call).unwrap_err(),
            GameError::HoleComplete(1)
        );
        assert_eq!(round.complete_hole().unwrap(), 1);
        assert_eq!(round.golfer().money, 1);
        assert_eq!(round.complete_hole().unwrap(), 0);
    }

    #[test]
    fn test_complete_hole_requires_finished_hole() {
        let mut round = Round::seeded(Golfer::new("Casey"), putting_green(), 1);
        assert_eq!(round.complete_hole().unwrap_err(), GameError::HoleInProgress(1));
    }

    #[test]
    fn test_finished_round_rejects_shots() {
        let mut round = Round::seeded(Golfer::new("Casey"), putting_green(), 1);
        round.next_hole().unwrap();
        assert!(round.is_round_complete());
        assert_eq!(
            round
                .take_shot(&ShotCall::new("Putter", 0.5, ShotShape::Straight))
                .unwrap_err(),
            GameError::RoundComplete
        );
        assert_eq!(round.next_hole().unwrap_err(), GameError::RoundComplete);
        assert_eq!(round.context().unwrap_err(), GameError::RoundComplete);
    }

    #[test]
    fn test_shot_awards_experience() {
        let rng = ScriptedRandom::new(vec![0.0], vec![0, 0, 0]);
        let mut round = Round::with_random(Golfer::new("Casey"), putting_green(), rng);
        let report = round
            .take_shot(&ShotCall::new("Putter", 0.1, ShotShape::Straight))
            .unwrap();
        assert_eq!(report.outcome, SkillCheckOutcome::CriticalSuccess);
        assert_eq!(report.xp_earned, 15);
        let golfer = round.golfer();
        assert_eq!(golfer.skill(ClubCategory::Putter).experience(), 15);
        assert_eq!(golfer.ability(AbilityKind::Mental).experience(), 15);
    }

    #[test]
    fn test_next_hole_tees_up() {
        let course = Course::new(vec![
            Hole::new(1, 3, Point::new(0, 100)),
            Hole::new(2, 3, Point::new(0, 500)).with_tee(Point::new(10, 10)),
        ]);
        let mut round = Round::seeded(Golfer::new("Casey"), course, 9);
        round.place_ball(Point::new(0, 60));
        round.next_hole().unwrap();
        assert_eq!(round.ball().location, Point::new(10, 10));
        assert_eq!(round.ball().prev_location, Point::new(10, 10));
        assert_eq!(round.current_hole().unwrap().number, 2);
        assert!(round.last_shot().is_none());
    }

    #[test]
    fn test_hole_stream_ignores_earlier_holes() {
        let second = || Hole::new(2, 4, Point::new(0, 2000));
        let call = ShotCall::new("Driver", 1.0, ShotShape::Straight);

        // hole 1 played out before the second tee shot
        let course = Course::new(vec![Hole::new(1, 3, Point::new(0, 100)), second()]);
        let mut played = Round::seeded(Golfer::new("Casey"), course, 42);
        played
            .play_hole(&mut |context: &ShotContext| context.suggested_call(ShotShape::Fade))
            .unwrap();
        played.next_hole().unwrap();

        // hole 1 skipped
        let course = Course::new(vec![Hole::new(1, 5, Point::new(0, 4000)), second()]);
        let mut skipped = Round::seeded(Golfer::new("Casey"), course, 42);
        skipped.next_hole().unwrap();

        // hole 2 alone
        let mut alone = Round::seeded(Golfer::new("Casey"), Course::new(vec![second()]), 42);

        let first = played.take_shot(&call).unwrap();
        assert_eq!(skipped.take_shot(&call).unwrap().rolls, first.rolls);
        assert_eq!(alone.take_shot(&call).unwrap().rolls, first.rolls);
    }

    #[test]
    fn test_seeded_round_replays_per_hole() {
        let course = || {
            Course::new(vec![
                Hole::new(1, 4, Point::new(0, 2000)),
                Hole::new(2, 4, Point::new(0, 2000)),
            ])
        };
        let call = ShotCall::new("Driver", 1.0, ShotShape::Straight);
        let mut a = Round::seeded(Golfer::new("Casey"), course(), 7);
        let mut b = Round::seeded(Golfer::new("Casey"), course(), 7);
        assert_eq!(a.take_shot(&call).unwrap(), b.take_shot(&call).unwrap());
        a.next_hole().unwrap();
        b.next_hole().unwrap();
        assert_eq!(a.take_shot(&call).unwrap(), b.take_shot(&call).unwrap());
    }
}
