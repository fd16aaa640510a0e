use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{
    course::{generate_simple_course, Course, Hole},
    equipment::{ClubCategory, Equipment},
    error::ScenarioError,
    game::Round,
    geometry::Point,
    golfer::{AbilityKind, Golfer},
    grid::CourseGrid,
    lie::LieType,
    shape::ShotShape,
    units::Yard,
};

fn default_golfer_name() -> String {
    "Player".to_string()
}

fn default_commit_power() -> f64 {
    1.0
}

fn default_snapshot_interval_holes() -> u32 {
    1
}

fn default_cell_size() -> f64 {
    10.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub seed: u64,
    #[serde(default)]
    pub golfer: GolferSetup,
    /// Scales the suggested power on every auto-played shot.
    #[serde(default = "default_commit_power")]
    pub commit_power: f64,
    #[serde(default)]
    pub default_shape: ShotShape,
    #[serde(default = "default_snapshot_interval_holes")]
    pub snapshot_interval_holes: u32,
    /// Use `generate_simple_course` with this many holes instead of `holes`.
    #[serde(default)]
    pub generated_holes: Option<u32>,
    #[serde(default)]
    pub holes: Vec<ScenarioHole>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GolferSetup {
    #[serde(default = "default_golfer_name")]
    pub name: String,
    #[serde(default)]
    pub skills: BTreeMap<ClubCategory, u8>,
    #[serde(default)]
    pub abilities: BTreeMap<AbilityKind, u8>,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub money: u32,
}

impl Default for GolferSetup {
    fn default() -> Self {
        Self {
            name: default_golfer_name(),
            skills: BTreeMap::new(),
            abilities: BTreeMap::new(),
            equipment: Equipment::default(),
            money: 0,
        }
    }
}

/// A hole laid out in yards. `y` runs from the tee to the back of the green.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioHole {
    pub par: u32,
    pub length: f64,
    pub width: f64,
    #[serde(default = "default_cell_size")]
    pub cell_size: f64,
    pub cup: [f64; 2],
    /// Defaults to the front edge on the centre line.
    #[serde(default)]
    pub tee: Option<[f64; 2]>,
    #[serde(default)]
    pub lies: Vec<LieRegion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LieRegion {
    pub lie: LieType,
    pub from: [f64; 2],
    pub to: [f64; 2],
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        scenario
            .validate()
            .with_context(|| format!("Invalid scenario {}", path.display()))?;
        Ok(scenario)
    }
}

fn yard_point(coords: [f64; 2]) -> Point {
    Point::new(
        Yard(coords[0]).units().0 as i64,
        Yard(coords[1]).units().0 as i64,
    )
}

impl Scenario {
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !(self.commit_power > 0.0 && self.commit_power <= 1.5) {
            return Err(ScenarioError::InvalidPower(self.commit_power));
        }
        match self.generated_holes {
            Some(0) => return Err(ScenarioError::NoHoles(self.name.clone())),
            Some(_) => {}
            None if self.holes.is_empty() => {
                return Err(ScenarioError::NoHoles(self.name.clone()))
            }
            None => {}
        }
        for (index, hole) in self.holes.iter().enumerate() {
            hole.validate(index as u32 + 1)?;
        }
        Ok(())
    }

    /// Builds the course, keeping at most `hole_limit` holes.
    pub fn build_course(&self, hole_limit: Option<u32>) -> Course {
        if let Some(count) = self.generated_holes {
            return generate_simple_course(hole_limit.map_or(count, |limit| limit.min(count)));
        }
        let limit = hole_limit.map_or(self.holes.len(), |limit| limit as usize);
        let holes = self
            .holes
            .iter()
            .take(limit)
            .enumerate()
            .map(|(index, hole)| hole.build(index as u32 + 1))
            .collect();
        Course::new(holes)
    }

    pub fn build_golfer(&self) -> Golfer {
        let setup = &self.golfer;
        let mut golfer = Golfer::new(setup.name.clone());
        for (&category, &level) in &setup.skills {
            golfer.set_skill_level(category, level);
        }
        for (&ability, &level) in &setup.abilities {
            golfer.set_ability_level(ability, level);
        }
        golfer.equipment = setup.equipment.clone();
        golfer.money = setup.money;
        golfer
    }

    pub fn build_round(&self, seed: Option<u64>, hole_limit: Option<u32>) -> Round {
        Round::seeded(
            self.build_golfer(),
            self.build_course(hole_limit),
            seed.unwrap_or(self.seed),
        )
    }
}

impl ScenarioHole {
    fn validate(&self, number: u32) -> Result<(), ScenarioError> {
        if self.par < 3 {
            return Err(ScenarioError::InvalidPar {
                hole: number,
                par: self.par,
            });
        }
        for (field, value) in [
            ("length", self.length),
            ("width", self.width),
            ("cell_size", self.cell_size),
        ] {
            if !(value > 0.0) {
                return Err(ScenarioError::InvalidDimension {
                    hole: number,
                    field,
                    value,
                });
            }
        }
        let [x, y] = self.cup;
        if !(0.0..self.width).contains(&x) || !(0.0..self.length).contains(&y) {
            return Err(ScenarioError::CupOutsideHole { hole: number, x, y });
        }
        Ok(())
    }

    fn build(&self, number: u32) -> Hole {
        let mut grid = CourseGrid::new(Yard(self.width), Yard(self.length), Yard(self.cell_size));
        for region in &self.lies {
            grid.paint_region(
                (Yard(region.from[0]), Yard(region.from[1])),
                (Yard(region.to[0]), Yard(region.to[1])),
                region.lie,
            );
        }
        let tee = self.tee.unwrap_or([self.width / 2.0, 0.0]);
        Hole::new(number, self.par, yard_point(self.cup))
            .with_tee(yard_point(tee))
            .with_grid(grid)
    }
}
