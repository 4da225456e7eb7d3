use ndarray::ArrayViewD;

use crate::shared::constants::SSD_ROW_LEN;

use super::model_dnn_detector::DetectError;

/// One candidate row of the SSD output, coordinates normalized to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    pub image_id: f32,
    pub class_id: f32,
    pub confidence: f32,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// Box corners in frame pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Detection {
    fn from_row(row: &[f32]) -> Self {
        Self {
            image_id: row[0],
            class_id: row[1],
            confidence: row[2],
            x1: row[3],
            y1: row[4],
            x2: row[5],
            y2: row[6],
        }
    }

    /// Scales to a `width` x `height` frame, truncating toward zero.
    /// Out-of-range coordinates saturate rather than wrap.
    pub fn to_pixel_box(&self, width: u32, height: u32) -> PixelBox {
        let w = width as f32;
        let h = height as f32;
        PixelBox {
            x1: (self.x1 * w) as i32,
            y1: (self.y1 * h) as i32,
            x2: (self.x2 * w) as i32,
            y2: (self.y2 * h) as i32,
        }
    }
}

/// Parses a `(1, 1, N, 7)` detection tensor into its rows.
pub fn parse_ssd_output(output: ArrayViewD<'_, f32>) -> Result<Vec<Detection>, DetectError> {
    let shape = output.shape();
    let valid = shape.len() == 4 && shape[0] == 1 && shape[1] == 1 && shape[3] == SSD_ROW_LEN;
    if !valid {
        return Err(DetectError::OutputShape(shape.to_vec()));
    }
    let n = shape[2];

    let rows = output
        .to_shape((n, SSD_ROW_LEN))
        .map_err(|_| DetectError::OutputShape(shape.to_vec()))?;

    Ok(rows
        .outer_iter()
        .map(|row| Detection::from_row(&row.to_vec()))
        .collect())
}

/// Keeps candidates whose confidence strictly exceeds `threshold`.
pub fn above_threshold(detections: &[Detection], threshold: f32) -> Vec<Detection> {
    detections
        .iter()
        .filter(|d| d.confidence > threshold)
        .copied()
        .collect()
}
