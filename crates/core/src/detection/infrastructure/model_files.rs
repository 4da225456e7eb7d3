use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::{MODEL_TOPOLOGY_FILE, MODEL_WEIGHTS_FILE};

#[derive(Error, Debug)]
pub enum ModelFilesError {
    #[error("model directory {0} does not exist")]
    MissingDirectory(PathBuf),
    #[error("model artifact {0} not found")]
    MissingArtifact(PathBuf),
    #[error("could not determine cache directory")]
    NoCacheDir,
}

/// The two artifacts a ResNet-10 SSD model directory must contain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelFiles {
    /// Graph loaded by the inference engine.
    pub topology: PathBuf,
    /// External-data weights the graph references by file name.
    pub weights: PathBuf,
}

impl ModelFiles {
    /// Checks that `model_dir` holds both fixed-named artifacts.
    pub fn locate(model_dir: &Path) -> Result<Self, ModelFilesError> {
        if !model_dir.is_dir() {
            return Err(ModelFilesError::MissingDirectory(model_dir.to_path_buf()));
        }
        let topology = require(model_dir.join(MODEL_TOPOLOGY_FILE))?;
        let weights = require(model_dir.join(MODEL_WEIGHTS_FILE))?;
        Ok(Self { topology, weights })
    }
}

fn require(path: PathBuf) -> Result<PathBuf, ModelFilesError> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(ModelFilesError::MissingArtifact(path))
    }
}

/// Platform-specific default model directory under the user cache dir.
///
/// - macOS: `~/Library/Caches/odetect/models/`
/// - Linux: `$XDG_CACHE_HOME/odetect/models/` or `~/.cache/odetect/models/`
/// - Windows: `%LOCALAPPDATA%/odetect/models/`
pub fn default_model_dir() -> Result<PathBuf, ModelFilesError> {
    dirs::cache_dir()
        .map(|d| d.join("odetect").join("models"))
        .ok_or(ModelFilesError::NoCacheDir)
}
