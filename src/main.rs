use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

use fairway::{
    lie::LieType, scenario::ScenarioLoader, shape::ShotShape, snapshot::SnapshotWriter, ShotCall,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Fairway round simulator")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/practice_round.yaml")]
    scenario: PathBuf,

    /// Override the scenario seed
    #[arg(long)]
    seed: Option<u64>,

    /// Play at most this many holes
    #[arg(long)]
    holes: Option<u32>,

    /// Override the commit power applied to every shot
    #[arg(long)]
    power: Option<f64>,

    /// Override snapshot interval in holes (0 disables)
    #[arg(long)]
    snapshot_interval: Option<u32>,

    /// Directory for snapshots
    #[arg(long)]
    snapshot_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let mut scenario = loader.load(&cli.scenario)?;
    if let Some(power) = cli.power {
        scenario.commit_power = power;
        scenario.validate()?;
    }
    let writer = SnapshotWriter::new(
        cli.snapshot_dir
            .unwrap_or_else(|| PathBuf::from("snapshots")),
        cli.snapshot_interval
            .unwrap_or(scenario.snapshot_interval_holes),
    );

    let mut round = scenario.build_round(cli.seed, cli.holes);
    let commit_power = scenario.commit_power;
    let default_shape = scenario.default_shape;
    let caddie = |context: &fairway::ShotContext| {
        let shape = if context.lie == LieType::Green {
            ShotShape::Straight
        } else {
            default_shape
        };
        ShotCall::new(
            context.suggested_club.clone(),
            context.suggested_power * commit_power,
            shape,
        )
    };
    let summary = round.run_with_hook(caddie, |hole, snapshot| {
        println!(
            "Hole {} (par {}): {} strokes{}",
            hole.hole_number,
            hole.par,
            hole.strokes,
            if hole.mercy { " (mercy rule)" } else { "" }
        );
        writer.maybe_write(&scenario.name, hole, snapshot)?;
        Ok(())
    })?;

    println!(
        "Scenario '{}' completed: {} strokes ({:+} to par), ${} earned.",
        scenario.name, summary.total_strokes, summary.score_to_par, summary.money
    );
    Ok(())
}
