use ndarray::Array4;

use crate::shared::constants::{SSD_INPUT_SIZE, SSD_MEAN_BGR};
use crate::shared::frame::Frame;

/// How a 3-channel frame becomes an NCHW network input tensor.
#[derive(Clone, Debug, PartialEq)]
pub struct BlobParams {
    pub width: usize,
    pub height: usize,
    /// Subtracted per output channel before scaling.
    pub mean: [f32; 3],
    pub scale: f32,
    pub swap_rb: bool,
}

impl BlobParams {
    /// 300x300, BGR mean (104, 177, 123), no scaling, no channel swap.
    pub fn ssd_300() -> Self {
        Self {
            width: SSD_INPUT_SIZE,
            height: SSD_INPUT_SIZE,
            mean: SSD_MEAN_BGR,
            scale: 1.0,
            swap_rb: false,
        }
    }
}

/// Resizes `frame` bilinearly to the target size and packs it as a
/// `(1, 3, height, width)` tensor with `(pixel - mean) * scale`.
///
/// Sampling uses pixel-centre alignment, so a same-size resize is exact.
/// Interpolated samples are rounded to whole intensities first.
pub fn blob_from_image(frame: &Frame, params: &BlobParams) -> Array4<f32> {
    debug_assert_eq!(frame.channels(), 3, "blob input must have 3 channels");

    let src = frame.as_ndarray();
    let xs = axis_taps(frame.width() as usize, params.width);
    let ys = axis_taps(frame.height() as usize, params.height);

    let mut blob = Array4::<f32>::zeros((1, 3, params.height, params.width));

    for (dy, &(y0, y1, ty)) in ys.iter().enumerate() {
        for (dx, &(x0, x1, tx)) in xs.iter().enumerate() {
            for c in 0..3 {
                let sc = if params.swap_rb { 2 - c } else { c };
                let top = lerp(src[[y0, x0, sc]], src[[y0, x1, sc]], tx);
                let bottom = lerp(src[[y1, x0, sc]], src[[y1, x1, sc]], tx);
                // Resampled pixels are 8-bit before the mean is applied
                let value = (top + (bottom - top) * ty).round_ties_even();
                blob[[0, c, dy, dx]] = (value - params.mean[c]) * params.scale;
            }
        }
    }

    blob
}

fn lerp(a: u8, b: u8, t: f32) -> f32 {
    a as f32 + (b as f32 - a as f32) * t
}

/// For each destination index: the two source taps and the weight of the second.
fn axis_taps(src: usize, dst: usize) -> Vec<(usize, usize, f32)> {
    let ratio = src as f32 / dst as f32;
    (0..dst)
        .map(|d| {
            let pos = (d as f32 + 0.5) * ratio - 0.5;
            if pos <= 0.0 {
                return (0, 1.min(src - 1), 0.0);
            }
            let i = pos.floor() as usize;
            if i >= src - 1 {
                return (src - 1, src - 1, 0.0);
            }
            (i, i + 1, pos - i as f32)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solid(width: u32, height: u32, bgr: [u8; 3]) -> Frame {
        let data = bgr
            .iter()
            .copied()
            .cycle()
            .take((width * height * 3) as usize)
            .collect();
        Frame::new(data, width, height, 3)
    }

    #[test]
    fn test_ssd_blob_shape() {
        let blob = blob_from_image(&solid(64, 48, [0, 0, 0]), &BlobParams::ssd_300());
        assert_eq!(blob.shape(), &[1, 3, 300, 300]);
    }

    #[test]
    fn test_mean_is_subtracted_per_channel() {
        let blob = blob_from_image(&solid(40, 30, [104, 200, 0]), &BlobParams::ssd_300());
        assert_relative_eq!(blob[[0, 0, 150, 150]], 0.0);
        assert_relative_eq!(blob[[0, 1, 0, 0]], 23.0);
        assert_relative_eq!(blob[[0, 2, 299, 299]], -123.0);
    }

    #[test]
    fn test_same_size_resize_is_exact() {
        let mut frame = Frame::zeroed(4, 4, 3);
        frame.as_ndarray_mut()[[2, 1, 1]] = 90;
        let params = BlobParams {
            width: 4,
            height: 4,
            mean: [0.0; 3],
            scale: 1.0,
            swap_rb: false,
        };
        let blob = blob_from_image(&frame, &params);
        assert_relative_eq!(blob[[0, 1, 2, 1]], 90.0);
        assert_relative_eq!(blob[[0, 1, 2, 2]], 0.0);
    }

    #[test]
    fn test_upscale_interpolates_between_pixels() {
        // 2x1 gradient 0 -> 100 stretched to 4x1
        let frame = Frame::new(vec![0, 0, 0, 100, 100, 100], 2, 1, 3);
        let params = BlobParams {
            width: 4,
            height: 1,
            mean: [0.0; 3],
            scale: 1.0,
            swap_rb: false,
        };
        let blob = blob_from_image(&frame, &params);
        assert_relative_eq!(blob[[0, 0, 0, 0]], 0.0);
        assert_relative_eq!(blob[[0, 0, 0, 1]], 25.0);
        assert_relative_eq!(blob[[0, 0, 0, 2]], 75.0);
        assert_relative_eq!(blob[[0, 0, 0, 3]], 100.0);
    }

    #[test]
    fn test_resampled_values_are_rounded_before_mean() {
        // 0 -> 1 stretched to 4x1 samples at 0.25 and 0.75
        let frame = Frame::new(vec![0, 0, 0, 1, 1, 1], 2, 1, 3);
        let params = BlobParams {
            width: 4,
            height: 1,
            mean: [0.5; 3],
            scale: 1.0,
            swap_rb: false,
        };
        let blob = blob_from_image(&frame, &params);
        assert_relative_eq!(blob[[0, 0, 0, 1]], -0.5);
        assert_relative_eq!(blob[[0, 0, 0, 2]], 0.5);
    }

    #[test]
    fn test_swap_rb_and_scale() {
        let params = BlobParams {
            width: 2,
            height: 2,
            mean: [0.0; 3],
            scale: 0.5,
            swap_rb: true,
        };
        let blob = blob_from_image(&solid(2, 2, [10, 20, 30]), &params);
        assert_relative_eq!(blob[[0, 0, 0, 0]], 15.0);
        assert_relative_eq!(blob[[0, 1, 0, 0]], 10.0);
        assert_relative_eq!(blob[[0, 2, 0, 0]], 5.0);
    }

    #[test]
    fn test_single_pixel_source() {
        let blob = blob_from_image(&solid(1, 1, [50, 60, 70]), &BlobParams::ssd_300());
        assert_relative_eq!(blob[[0, 0, 299, 0]], 50.0 - 104.0);
    }
}
