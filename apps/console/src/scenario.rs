use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use shared::action::Action;
use store::AppState;

/// Replayable dispatch sequence. `initial` may be partial or absent; missing
/// slices start from their falsy defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub initial: AppState,
    pub actions: Vec<Action>,
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid scenario in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ScenarioError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
