//! Annotation overlays drawn onto full-resolution RGBA frames.
//!
//! The tracker draws a circle-and-center marker around a found target and a
//! fixed rectangle marking the calibration sampling area while following is
//! disabled. All coordinates are clamped to the frame.

use crate::image::RgbaFrame;
use nalgebra::Point2;

/// Stroke a circle outline of the given thickness.
pub fn circle_outline(
    frame: &mut RgbaFrame,
    center: Point2<f32>,
    radius: f32,
    color: [u8; 4],
    thickness: f32,
) {
    let half = thickness.max(1.0) * 0.5;
    let reach = radius + half;
    let (x0, x1) = clamp_span(center.x - reach, center.x + reach, frame.w);
    let (y0, y1) = clamp_span(center.y - reach, center.y + reach, frame.h);
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - center.x;
            let dy = y as f32 + 0.5 - center.y;
            if ((dx * dx + dy * dy).sqrt() - radius).abs() <= half {
                frame.set(x, y, color);
            }
        }
    }
}

/// Fill a solid disc (used for the target center dot).
pub fn disc(frame: &mut RgbaFrame, center: Point2<f32>, radius: f32, color: [u8; 4]) {
    let (x0, x1) = clamp_span(center.x - radius, center.x + radius, frame.w);
    let (y0, y1) = clamp_span(center.y - radius, center.y + radius, frame.h);
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - center.x;
            let dy = y as f32 + 0.5 - center.y;
            if dx * dx + dy * dy <= radius * radius {
                frame.set(x, y, color);
            }
        }
    }
}

/// Stroke an axis-aligned rectangle between two corners (any order).
pub fn rect_outline(
    frame: &mut RgbaFrame,
    corner_a: (i32, i32),
    corner_b: (i32, i32),
    color: [u8; 4],
    thickness: i32,
) {
    let half = thickness.max(1) / 2;
    let x_lo = corner_a.0.min(corner_b.0);
    let x_hi = corner_a.0.max(corner_b.0);
    let y_lo = corner_a.1.min(corner_b.1);
    let y_hi = corner_a.1.max(corner_b.1);

    let (x0, x1) = clamp_span((x_lo - half) as f32, (x_hi + half + 1) as f32, frame.w);
    let (y0, y1) = clamp_span((y_lo - half) as f32, (y_hi + half + 1) as f32, frame.h);
    for y in y0..y1 {
        for x in x0..x1 {
            let xi = x as i32;
            let yi = y as i32;
            let inside_inner =
                xi > x_lo + half && xi < x_hi - half && yi > y_lo + half && yi < y_hi - half;
            if !inside_inner {
                frame.set(x, y, color);
            }
        }
    }
}

fn clamp_span(lo: f32, hi: f32, limit: usize) -> (usize, usize) {
    let lo = lo.floor().max(0.0) as usize;
    let hi = (hi.ceil().max(0.0) as usize).min(limit);
    (lo.min(hi), hi)
}
