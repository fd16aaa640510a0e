use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("round is already complete")]
    RoundComplete,
    #[error("hole {0} is already complete")]
    HoleComplete(u32),
    #[error("hole {0} is still in play")]
    HoleInProgress(u32),
    #[error("no club named '{0}' in the bag")]
    UnknownClub(String),
    #[error("the bag is empty")]
    EmptyBag,
}

#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("scenario '{0}' has no holes")]
    NoHoles(String),
    #[error("hole {hole}: par {par} is below 3")]
    InvalidPar { hole: u32, par: u32 },
    #[error("hole {hole}: {field} must be positive, got {value}")]
    InvalidDimension {
        hole: u32,
        field: &'static str,
        value: f64,
    },
    #[error("hole {hole}: cup at ({x}, {y}) yards lies outside the hole")]
    CupOutsideHole { hole: u32, x: f64, y: f64 },
    #[error("commit power {0} must be in (0, 1.5]")]
    InvalidPower(f64),
}
