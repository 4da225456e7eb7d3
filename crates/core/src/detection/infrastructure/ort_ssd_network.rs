//! SSD network executed by ONNX Runtime via `ort`.

use ndarray::{Array4, ArrayD};

use crate::detection::domain::ssd_network::{InferenceError, SsdNetwork};

use super::execution_provider::{execution_backend_name, preferred_execution_providers};
use super::model_files::ModelFiles;

pub struct OrtSsdNetwork {
    session: ort::session::Session,
}

impl OrtSsdNetwork {
    /// Builds a session from the topology graph. ONNX Runtime resolves the
    /// external-data weights relative to the graph's directory.
    pub fn load(files: &ModelFiles) -> Result<Self, InferenceError> {
        let session = ort::session::Session::builder()
            .map_err(|e| InferenceError::engine("creating session builder", e))?
            .with_execution_providers(preferred_execution_providers())
            .map_err(|e| InferenceError::engine("registering execution providers", e))?
            .commit_from_file(&files.topology)
            .map_err(|e| InferenceError::engine("loading network", e))?;

        log::info!(
            "Loaded SSD network from {} ({} backend)",
            files.topology.display(),
            execution_backend_name()
        );
        Ok(Self { session })
    }
}

impl SsdNetwork for OrtSsdNetwork {
    fn forward(&mut self, blob: Array4<f32>) -> Result<ArrayD<f32>, InferenceError> {
        let input = ort::value::Tensor::from_array(blob)
            .map_err(|e| InferenceError::engine("building input tensor", e))?;
        let outputs = self
            .session
            .run(ort::inputs![input])
            .map_err(|e| InferenceError::engine("running forward pass", e))?;
        if outputs.len() == 0 {
            return Err(InferenceError::NoOutput);
        }
        let detections = outputs[0]
            .try_extract_array::<f32>()
            .map_err(|e| InferenceError::engine("reading detection tensor", e))?;
        Ok(detections.to_owned())
    }
}
