use std::path::Path;

use crate::detection::domain::model_dnn_detector::ModelDnnDetector;
use crate::imaging::input_preprocess::bgr_to_rgb;
use crate::shared::caps::{OdCaps, PixelFormat};
use crate::shared::frame::Frame;
use crate::video::domain::image_reader::ImageReader;
use crate::video::domain::image_writer::ImageWriter;

/// Builds a detector for the geometry of the image being processed.
pub type DetectorFactory =
    Box<dyn FnMut(OdCaps) -> Result<Box<dyn ModelDnnDetector>, Box<dyn std::error::Error>>>;

/// Single-image annotation pipeline: read → detect → draw → write.
pub struct AnnotateImageUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    factory: DetectorFactory,
}

impl AnnotateImageUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        factory: DetectorFactory,
    ) -> Self {
        Self {
            reader,
            writer,
            factory,
        }
    }

    /// Annotates faces in `input_path` and writes the result to
    /// `output_path`. Returns the number of faces drawn.
    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<usize, Box<dyn std::error::Error>> {
        let frame = self.reader.read(input_path)?;
        let caps = OdCaps::new(frame.width(), frame.height(), PixelFormat::Rgb24)?;
        let mut detector = (self.factory)(caps)?;

        let mut bgr = vec![0u8; caps.output_len()];
        let faces = detector.detect(frame.data(), &mut bgr)?;

        let annotated = Frame::new(bgr_to_rgb(&bgr), caps.width(), caps.height(), 3);
        self.writer.write(output_path, &annotated)?;

        log::info!(
            "Annotated {} face(s) in {} -> {}",
            faces.len(),
            input_path.display(),
            output_path.display()
        );
        Ok(faces.len())
    }
}
