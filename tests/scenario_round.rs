use std::path::Path;

use fairway::{
    equipment::ClubCategory,
    game::RoundSummary,
    scenario::{Scenario, ScenarioLoader},
    shape::ShotShape,
    snapshot::{load_snapshot, SnapshotWriter},
    ShotCall, ShotContext,
};
use tempfile::tempdir;

fn load_practice_round() -> Scenario {
    ScenarioLoader::new(env!("CARGO_MANIFEST_DIR"))
        .load("scenarios/practice_round.yaml")
        .expect("scenario should load")
}

fn caddie(context: &ShotContext) -> ShotCall {
    context.suggested_call(ShotShape::Straight)
}

fn play(scenario: &Scenario, seed: Option<u64>) -> RoundSummary {
    scenario
        .build_round(seed, None)
        .run(caddie)
        .expect("round completes")
}

#[test]
fn practice_round_fixture_loads() {
    let scenario = load_practice_round();
    assert_eq!(scenario.name, "practice_round");
    assert_eq!(scenario.seed, 2024);

    let course = scenario.build_course(None);
    assert_eq!(course.len(), 3);
    assert_eq!(course.par(), 12);

    let golfer = scenario.build_golfer();
    assert_eq!(golfer.name, "Casey");
    assert_eq!(golfer.skill(ClubCategory::Driver).level(), 2);
    assert_eq!(golfer.equipment.distance_bonus(), 5.0);
}

#[test]
fn same_seed_replays_identically() {
    let scenario = load_practice_round();
    let first = play(&scenario, None);
    let second = play(&scenario, None);
    assert_eq!(first, second);
    assert_eq!(first.holes.len(), 3);
}

#[test]
fn every_hole_finishes_within_the_stroke_limit() {
    let scenario = load_practice_round();
    for seed in 0..5 {
        let summary = play(&scenario, Some(seed));
        let mut expected_total = 0;
        for (index, hole) in summary.holes.iter().enumerate() {
            assert_eq!(hole.hole_number, index as u32 + 1);
            // a tap-in on the last allowed swing adds one
            assert!((1..=12).contains(&hole.strokes), "{} strokes", hole.strokes);
            expected_total += hole.strokes;
        }
        assert_eq!(summary.total_strokes, expected_total);
        assert_eq!(summary.score_to_par, i64::from(expected_total) - 12);
    }
}

#[test]
fn hole_limit_shortens_the_round() {
    let scenario = load_practice_round();
    let summary = scenario
        .build_round(None, Some(2))
        .run(caddie)
        .expect("round completes");
    assert_eq!(summary.holes.len(), 2);
}

#[test]
fn hook_runs_once_per_hole() {
    let scenario = load_practice_round();
    let mut round = scenario.build_round(None, None);
    let mut seen = Vec::new();
    round
        .run_with_hook(caddie, |hole, snapshot| {
            seen.push((hole.hole_number, snapshot.hole_index));
            Ok(())
        })
        .expect("round completes");
    assert_eq!(seen, vec![(1, 0), (2, 1), (3, 2)]);
    assert!(round.is_round_complete());
}

#[test]
fn snapshots_are_written_per_hole() {
    let scenario = load_practice_round();
    let temp = tempdir().expect("tempdir");
    let writer = SnapshotWriter::new(temp.path(), 1);
    let mut round = scenario.build_round(None, None);
    round
        .run_with_hook(caddie, |hole, snapshot| {
            writer.maybe_write(&scenario.name, hole, snapshot)?;
            Ok(())
        })
        .expect("round completes");

    let dir = temp.path().join("practice_round");
    for number in 1..=3u32 {
        let path = dir.join(format!("hole_{number:02}.json"));
        assert!(Path::new(&path).exists(), "missing {}", path.display());
        let record = load_snapshot(&path).expect("snapshot parses");
        assert_eq!(record.scenario, "practice_round");
        assert_eq!(record.hole.hole_number, number);
        assert_eq!(record.round.golfer.name, "Casey");
    }
}

#[test]
fn snapshot_interval_skips_holes() {
    let scenario = load_practice_round();
    let temp = tempdir().expect("tempdir");
    let writer = SnapshotWriter::new(temp.path(), 2);
    let mut written = Vec::new();
    scenario
        .build_round(None, None)
        .run_with_hook(caddie, |hole, snapshot| {
            if let Some(path) = writer.maybe_write(&scenario.name, hole, snapshot)? {
                written.push(path);
            }
            Ok(())
        })
        .expect("round completes");
    assert_eq!(written.len(), 1);
    assert!(written[0].ends_with("practice_round/hole_02.json"));
}
