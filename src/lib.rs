pub mod course;
pub mod dice;
pub mod equipment;
pub mod error;
pub mod game;
pub mod geometry;
pub mod golfer;
pub mod grid;
pub mod lie;
pub mod rng;
pub mod scenario;
pub mod scorecard;
pub mod shape;
pub mod snapshot;
pub mod trajectory;
pub mod units;

pub use error::{GameError, ScenarioError};
pub use game::{Round, ShotCall, ShotContext, ShotReport};
pub use scenario::{Scenario, ScenarioLoader};
