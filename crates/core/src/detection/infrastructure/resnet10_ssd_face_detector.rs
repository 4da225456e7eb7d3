//! ResNet-10 SSD face detector: raw frame in, annotated BGR frame out.

use std::path::Path;

use crate::detection::domain::detection::{above_threshold, parse_ssd_output, Detection};
use crate::detection::domain::detector_config::DetectorConfig;
use crate::detection::domain::model_dnn_detector::{DetectError, ModelDnnDetector};
use crate::detection::domain::ssd_network::SsdNetwork;
use crate::imaging::blob::{blob_from_image, BlobParams};
use crate::imaging::draw::draw_rectangle;
use crate::imaging::input_preprocess::to_bgr;
use crate::shared::caps::OdCaps;
use crate::shared::constants::{BOX_COLOR_BGR, BOX_THICKNESS};

use super::detector_registry::DetectorBuildError;
use super::model_files::ModelFiles;
use super::ort_ssd_network::OrtSsdNetwork;

/// Face detector bound to one frame geometry for its whole lifetime.
///
/// Owns a scratch buffer of exactly `caps.input_len()` bytes that every
/// `detect` call overwrites before reading, so no state carries over
/// between calls.
pub struct ResNet10SsdFaceDetector<N: SsdNetwork = OrtSsdNetwork> {
    network: N,
    caps: OdCaps,
    config: DetectorConfig,
    blob_params: BlobParams,
    scratch: Box<[u8]>,
}

impl ResNet10SsdFaceDetector<OrtSsdNetwork> {
    /// Loads the network from `model_dir` and binds it to `caps`.
    pub fn new(
        model_dir: &Path,
        caps: OdCaps,
        config: DetectorConfig,
    ) -> Result<Self, DetectorBuildError> {
        let files = ModelFiles::locate(model_dir)?;
        let network = OrtSsdNetwork::load(&files)?;
        log::info!(
            "ResNet-10 SSD face detector ready: model_dir={}, frame={}, threshold={}",
            model_dir.display(),
            caps,
            config.threshold()
        );
        Ok(Self::with_network(network, caps, config))
    }
}

impl<N: SsdNetwork> ResNet10SsdFaceDetector<N> {
    pub fn with_network(network: N, caps: OdCaps, config: DetectorConfig) -> Self {
        Self {
            network,
            caps,
            config,
            blob_params: BlobParams::ssd_300(),
            scratch: vec![0u8; caps.input_len()].into_boxed_slice(),
        }
    }
}

impl<N: SsdNetwork> ModelDnnDetector for ResNet10SsdFaceDetector<N> {
    fn caps(&self) -> &OdCaps {
        &self.caps
    }

    fn threshold(&self) -> f32 {
        self.config.threshold()
    }

    fn detect(&mut self, input: &[u8], output: &mut [u8]) -> Result<Vec<Detection>, DetectError> {
        let in_len = self.caps.input_len();
        let out_len = self.caps.output_len();
        if input.len() != in_len {
            return Err(DetectError::InputSize {
                expected: in_len,
                actual: input.len(),
            });
        }
        if output.len() < out_len {
            return Err(DetectError::OutputSize {
                expected: out_len,
                actual: output.len(),
            });
        }

        self.scratch.copy_from_slice(input);
        let mut frame = to_bgr(&self.scratch, &self.caps);

        let blob = blob_from_image(&frame, &self.blob_params);
        let raw = self.network.forward(blob)?;
        let candidates = parse_ssd_output(raw.view())?;
        let faces = above_threshold(&candidates, self.config.threshold());

        for face in &faces {
            let b = face.to_pixel_box(frame.width(), frame.height());
            draw_rectangle(
                &mut frame,
                (b.x1, b.y1),
                (b.x2, b.y2),
                BOX_COLOR_BGR,
                BOX_THICKNESS,
            );
        }

        output[..out_len].copy_from_slice(&frame.data()[..out_len]);

        log::debug!(
            "{} of {} candidates above threshold {}",
            faces.len(),
            candidates.len(),
            self.config.threshold()
        );
        Ok(faces)
    }
}
