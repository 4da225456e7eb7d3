use std::fs;
use std::path::Path;

use crate::detection::domain::model_dnn_detector::ModelDnnDetector;

/// Raw frame annotation: headerless pixel bytes in the detector's native
/// layout are read from a file, the annotated BGR bytes are written out.
pub struct AnnotateRawUseCase {
    detector: Box<dyn ModelDnnDetector>,
}

impl AnnotateRawUseCase {
    pub fn new(detector: Box<dyn ModelDnnDetector>) -> Self {
        Self { detector }
    }

    /// Returns the number of faces drawn.
    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<usize, Box<dyn std::error::Error>> {
        let input = fs::read(input_path)?;
        let mut output = vec![0u8; self.detector.caps().output_len()];
        let faces = self.detector.detect(&input, &mut output)?;

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, &output)?;

        log::info!(
            "Annotated {} face(s) in raw {} frame {} -> {}",
            faces.len(),
            self.detector.caps(),
            input_path.display(),
            output_path.display()
        );
        Ok(faces.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::model_dnn_detector::DetectError;
    use crate::pipeline::annotate_image_use_case::tests::StubDetector;
    use crate::shared::caps::{OdCaps, PixelFormat};

    fn use_case(caps: OdCaps, faces: usize) -> AnnotateRawUseCase {
        AnnotateRawUseCase::new(Box::new(StubDetector { caps, faces }))
    }

    #[test]
    fn test_writes_bgr_output_of_expected_length() {
        let dir = tempfile::tempdir().unwrap();
        let caps = OdCaps::new(4, 2, PixelFormat::Gray8).unwrap();
        let input_path = dir.path().join("frame.gray");
        let output_path = dir.path().join("out").join("frame.bgr");
        fs::write(&input_path, vec![42u8; caps.input_len()]).unwrap();

        let faces = use_case(caps, 0)
            .execute(&input_path, &output_path)
            .unwrap();

        assert_eq!(faces, 0);
        let out = fs::read(&output_path).unwrap();
        assert_eq!(out.len(), caps.output_len());
        assert!(out.iter().all(|&b| b == 42));
    }

    #[test]
    fn test_reports_faces() {
        let dir = tempfile::tempdir().unwrap();
        let caps = OdCaps::new(2, 2, PixelFormat::Bgr24).unwrap();
        let input_path = dir.path().join("frame.bgr");
        fs::write(&input_path, vec![0u8; caps.input_len()]).unwrap();

        let faces = use_case(caps, 2)
            .execute(&input_path, &dir.path().join("out.bgr"))
            .unwrap();

        assert_eq!(faces, 2);
    }

    #[test]
    fn test_wrong_file_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let caps = OdCaps::new(4, 4, PixelFormat::Bgr24).unwrap();
        let input_path = dir.path().join("short.bgr");
        let output_path = dir.path().join("out.bgr");
        fs::write(&input_path, vec![0u8; 10]).unwrap();

        let err = use_case(caps, 0)
            .execute(&input_path, &output_path)
            .unwrap_err();

        let detect_err = err.downcast_ref::<DetectError>().unwrap();
        assert!(matches!(
            detect_err,
            DetectError::InputSize {
                expected: 48,
                actual: 10
            }
        ));
        assert!(!output_path.exists());
    }

    #[test]
    fn test_missing_input_file_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let caps = OdCaps::new(2, 2, PixelFormat::Bgr24).unwrap();
        let result = use_case(caps, 0).execute(&dir.path().join("absent"), &dir.path().join("o"));
        assert!(result.is_err());
    }
}
