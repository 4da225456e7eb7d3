use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::shared::frame::Frame;

/// Draws an axis-aligned rectangle outline between two opposite corners.
///
/// The stroke is built from concentric one-pixel outlines offset by up to
/// `thickness / 2` on each side of the edge, so a thickness of 3 paints a
/// 3px band. Corners may be given in any order and may lie outside the
/// frame; only in-frame pixels are written.
pub fn draw_rectangle(
    frame: &mut Frame,
    p1: (i32, i32),
    p2: (i32, i32),
    color: [u8; 3],
    thickness: u32,
) {
    debug_assert_eq!(frame.channels(), 3, "boxes are drawn on 3-channel frames");
    let (width, height) = (frame.width(), frame.height());
    // Channel order is whatever the frame holds; `Rgb` is only the container.
    let Some(mut canvas) = RgbImage::from_raw(width, height, frame.data().to_vec()) else {
        return;
    };

    let half = (thickness / 2) as i64;
    // Edges further out than this are off-frame for every outline offset.
    let x_range = (-half - 1, width as i64 + half + 1);
    let y_range = (-half - 1, height as i64 + half + 1);
    let (left, right) = clamped_span(p1.0, p2.0, x_range);
    let (top, bottom) = clamped_span(p1.1, p2.1, y_range);

    for offset in -half..=half {
        let (l, t) = (left - offset, top - offset);
        let (r, b) = (right + offset, bottom + offset);
        if l > r || t > b {
            continue;
        }
        let rect = Rect::at(l as i32, t as i32).of_size((r - l + 1) as u32, (b - t + 1) as u32);
        draw_hollow_rect_mut(&mut canvas, rect, Rgb(color));
    }

    frame.data_mut().copy_from_slice(canvas.as_raw());
}

fn clamped_span(a: i32, b: i32, (lo, hi): (i64, i64)) -> (i64, i64) {
    let (min, max) = (a.min(b) as i64, a.max(b) as i64);
    (min.clamp(lo, hi), max.clamp(lo, hi))
}
