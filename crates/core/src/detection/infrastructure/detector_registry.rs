use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::detection::domain::detector_config::DetectorConfig;
use crate::detection::domain::model_dnn_detector::ModelDnnDetector;
use crate::detection::domain::ssd_network::InferenceError;
use crate::shared::caps::OdCaps;

use super::model_files::ModelFilesError;
use super::resnet10_ssd_face_detector::ResNet10SsdFaceDetector;

#[derive(Error, Debug)]
pub enum DetectorBuildError {
    #[error(transparent)]
    ModelFiles(#[from] ModelFilesError),
    #[error("failed to load network: {0}")]
    Network(#[from] InferenceError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown detector '{0}'")]
pub struct UnknownDetector(pub String);

/// Detector implementations that can be constructed by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectorKind {
    ResNet10Ssd,
}

impl DetectorKind {
    pub const ALL: [DetectorKind; 1] = [DetectorKind::ResNet10Ssd];

    pub fn name(self) -> &'static str {
        match self {
            DetectorKind::ResNet10Ssd => "resnet10-ssd",
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DetectorKind {
    type Err = UnknownDetector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DetectorKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDetector(s.to_string()))
    }
}

/// Constructs a detector of the given kind bound to `caps`.
pub fn construct(
    kind: DetectorKind,
    model_dir: &Path,
    caps: OdCaps,
    config: DetectorConfig,
) -> Result<Box<dyn ModelDnnDetector>, DetectorBuildError> {
    log::info!("Constructing {kind} detector for {caps}");
    match kind {
        DetectorKind::ResNet10Ssd => Ok(Box::new(ResNet10SsdFaceDetector::new(
            model_dir, caps, config,
        )?)),
    }
}

/// Like [`construct`], reading the configuration from an opaque blob
/// (see [`DetectorConfig::from_bytes`]).
pub fn construct_from_blob(
    kind: DetectorKind,
    model_dir: &Path,
    caps: OdCaps,
    config_data: &[u8],
) -> Result<Box<dyn ModelDnnDetector>, DetectorBuildError> {
    construct(kind, model_dir, caps, DetectorConfig::from_bytes(config_data))
}
