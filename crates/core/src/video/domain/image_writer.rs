use std::path::Path;

use crate::shared::frame::Frame;

/// Encodes an interleaved RGB frame to an image file; format follows the extension.
pub trait ImageWriter: Send {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;
}
