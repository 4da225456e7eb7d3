use thiserror::Error;

use crate::shared::caps::OdCaps;

use super::detection::Detection;
use super::ssd_network::InferenceError;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("input frame is {actual} bytes, expected exactly {expected}")]
    InputSize { expected: usize, actual: usize },
    #[error("output buffer holds {actual} bytes, need at least {expected}")]
    OutputSize { expected: usize, actual: usize },
    #[error("unexpected detection tensor shape {0:?}, expected [1, 1, N, 7]")]
    OutputShape(Vec<usize>),
    #[error("inference failed: {0}")]
    Inference(#[from] InferenceError),
}

/// Plugin contract for DNN-backed detectors bound to a fixed frame geometry.
///
/// `detect` reads one raw frame laid out as `caps()` describes and writes the
/// annotated 3-channel BGR frame into `output`. Calls on one instance must be
/// serialized, hence `&mut self`.
pub trait ModelDnnDetector: Send {
    fn caps(&self) -> &OdCaps;

    fn threshold(&self) -> f32;

    /// Returns the detections that were drawn.
    fn detect(&mut self, input: &[u8], output: &mut [u8]) -> Result<Vec<Detection>, DetectError>;
}
