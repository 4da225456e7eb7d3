//! Conversion of raw frames in any supported [`PixelFormat`] into the
//! 3-channel BGR layout the network and the annotated output use.

use crate::shared::caps::{OdCaps, PixelFormat};
use crate::shared::constants::OUTPUT_CHANNELS;
use crate::shared::frame::Frame;

/// Converts `raw` (exactly `caps.input_len()` bytes) into a BGR frame of the
/// same width and height.
pub fn to_bgr(raw: &[u8], caps: &OdCaps) -> Frame {
    debug_assert_eq!(raw.len(), caps.input_len(), "raw frame size mismatch");

    let data = match caps.format() {
        PixelFormat::Bgr24 => raw.to_vec(),
        PixelFormat::Rgb24 => swap_rb(raw, 3),
        PixelFormat::Bgra32 => drop_alpha(raw, false),
        PixelFormat::Rgba32 => drop_alpha(raw, true),
        PixelFormat::Gray8 => raw.iter().flat_map(|&v| [v, v, v]).collect(),
        PixelFormat::Yuyv422 => yuyv_to_bgr(raw),
    };

    Frame::new(data, caps.width(), caps.height(), OUTPUT_CHANNELS as u8)
}

/// Swaps the first and third channel of every pixel (BGR <-> RGB).
pub fn bgr_to_rgb(bgr: &[u8]) -> Vec<u8> {
    swap_rb(bgr, 3)
}

fn swap_rb(src: &[u8], channels: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len() / channels * 3);
    for px in src.chunks_exact(channels) {
        out.extend_from_slice(&[px[2], px[1], px[0]]);
    }
    out
}

fn drop_alpha(src: &[u8], swap: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len() / 4 * 3);
    for px in src.chunks_exact(4) {
        if swap {
            out.extend_from_slice(&[px[2], px[1], px[0]]);
        } else {
            out.extend_from_slice(&px[..3]);
        }
    }
    out
}

/// BT.601 full-range YUYV 4:2:2; each 4-byte macropixel yields two pixels.
fn yuyv_to_bgr(yuyv: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(yuyv.len() / 2 * 3);
    for chunk in yuyv.chunks_exact(4) {
        let u = chunk[1] as f32 - 128.0;
        let v = chunk[3] as f32 - 128.0;
        for y in [chunk[0], chunk[2]] {
            let y = y as f32;
            let r = (y + 1.402 * v).clamp(0.0, 255.0) as u8;
            let g = (y - 0.344 * u - 0.714 * v).clamp(0.0, 255.0) as u8;
            let b = (y + 1.772 * u).clamp(0.0, 255.0) as u8;
            out.extend_from_slice(&[b, g, r]);
        }
    }
    out
}
