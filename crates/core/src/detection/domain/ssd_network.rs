use ndarray::{Array4, ArrayD};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("{context}: {message}")]
    Engine {
        context: &'static str,
        message: String,
    },
    #[error("network produced no outputs")]
    NoOutput,
}

impl InferenceError {
    pub fn engine(context: &'static str, err: impl std::fmt::Display) -> Self {
        InferenceError::Engine {
            context,
            message: err.to_string(),
        }
    }
}

/// A loaded single-shot detector network.
///
/// Takes a `(1, 3, H, W)` blob and returns the raw detection tensor,
/// logically `(1, 1, N, 7)`. Running inference mutates engine state,
/// hence `&mut self`.
pub trait SsdNetwork: Send {
    fn forward(&mut self, blob: Array4<f32>) -> Result<ArrayD<f32>, InferenceError>;
}
