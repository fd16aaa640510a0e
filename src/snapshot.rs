//! Per-hole JSON checkpoints of a round.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::game::{HoleSummary, RoundSnapshot};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub scenario: String,
    pub written_at: DateTime<Utc>,
    pub hole: HoleSummary,
    pub round: RoundSnapshot,
}

pub struct SnapshotWriter {
    dir: PathBuf,
    interval_holes: u32,
}

impl SnapshotWriter {
    /// An interval of 0 disables writing.
    pub fn new(dir: impl AsRef<Path>, interval_holes: u32) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            interval_holes,
        }
    }

    pub fn should_write(&self, hole_number: u32) -> bool {
        self.interval_holes != 0 && hole_number % self.interval_holes == 0
    }

    /// Writes `<dir>/<scenario>/hole_NN.json` when the interval is due.
    pub fn maybe_write(
        &self,
        scenario: &str,
        hole: &HoleSummary,
        round: &RoundSnapshot,
    ) -> Result<Option<PathBuf>> {
        if !self.should_write(hole.hole_number) {
            return Ok(None);
        }
        let scenario_dir = self.dir.join(scenario);
        fs::create_dir_all(&scenario_dir).with_context(|| {
            format!(
                "Failed to create snapshot directory {}",
                scenario_dir.display()
            )
        })?;
        let path = scenario_dir.join(format!("hole_{:02}.json", hole.hole_number));
        let record = SnapshotRecord {
            scenario: scenario.to_string(),
            written_at: Utc::now(),
            hole: hole.clone(),
            round: round.clone(),
        };
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
        debug!(path = %path.display(), "wrote snapshot");
        Ok(Some(path))
    }
}

pub fn load_snapshot(path: impl AsRef<Path>) -> Result<SnapshotRecord> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Failed to parse {}", path.display()))
}
