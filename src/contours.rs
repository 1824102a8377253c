//! Contour extraction and blob selection.
//!
//! Border following after Suzuki–Abe: a raster scan finds untraced border
//! pixels and walks each border with 8-connected neighbor probing, marking
//! visited pixels in a label buffer so no border is traced twice. Outer and
//! hole borders are both emitted, as a flat list without hierarchy. Straight
//! 8-direction runs are compressed down to their endpoints, so axis-aligned
//! and diagonal edges keep only their corner points.
//!
//! An empty mask yields an empty list; that is the normal "nothing matched"
//! outcome, not an error.

use crate::image::Mask;
use nalgebra::Point2;

/// Ordered boundary points of one blob, treated as a closed polygon.
#[derive(Clone, Debug, Default)]
pub struct Contour {
    pub points: Vec<Point2<i32>>,
}

impl Contour {
    /// Enclosed polygon area: absolute shoelace sum over the closed point
    /// sequence. Degenerate contours (fewer than three points) have zero
    /// area.
    pub fn area(&self) -> f64 {
        let pts = &self.points;
        if pts.len() < 3 {
            return 0.0;
        }
        let mut sum = 0i64;
        for i in 0..pts.len() {
            let a = pts[i];
            let b = pts[(i + 1) % pts.len()];
            sum += a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64;
        }
        (sum.abs() as f64) * 0.5
    }
}

/// 8-connected neighbor offsets, counterclockwise from east (y grows down).
const NEIGHBORS: [(i32, i32); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Extract every border of `mask` into `out`.
///
/// `labels` is a caller-owned scratch buffer (one `i32` per pixel) reused
/// across frames; `out` is cleared and refilled.
pub fn extract_contours(mask: &Mask, labels: &mut Vec<i32>, out: &mut Vec<Contour>) {
    out.clear();
    let (w, h) = (mask.w as i32, mask.h as i32);
    labels.clear();
    labels.extend(mask.data.iter().map(|&v| (v != 0) as i32));

    let mut nbd = 1i32;
    for y in 0..h {
        for x in 0..w {
            let f = labels[(y * w + x) as usize];
            let from = if f == 1 && label_at(labels, w, h, x - 1, y) == 0 {
                // outer border: background to the west
                (x - 1, y)
            } else if f >= 1 && label_at(labels, w, h, x + 1, y) == 0 {
                // hole border: background to the east, not yet traced
                (x + 1, y)
            } else {
                continue;
            };
            nbd += 1;
            let traced = trace_border(labels, w, h, (x, y), from, nbd);
            out.push(compress_chain(traced));
        }
    }
}

#[inline]
fn label_at(labels: &[i32], w: i32, h: i32, x: i32, y: i32) -> i32 {
    if x < 0 || y < 0 || x >= w || y >= h {
        0
    } else {
        labels[(y * w + x) as usize]
    }
}

fn neighbor_dir(from: (i32, i32), to: (i32, i32)) -> usize {
    let delta = (to.0 - from.0, to.1 - from.1);
    NEIGHBORS
        .iter()
        .position(|&d| d == delta)
        .unwrap_or_default()
}

/// Follow one border starting at `start`, whose background neighbor `from`
/// triggered the scan. Marks traced pixels in `labels` with `nbd` (negated
/// when the pixel's east neighbor is background, which is what prevents the
/// raster scan from re-entering this border).
fn trace_border(
    labels: &mut [i32],
    w: i32,
    h: i32,
    start: (i32, i32),
    from: (i32, i32),
    nbd: i32,
) -> Vec<Point2<i32>> {
    let mut points = Vec::new();

    // clockwise probe for the first nonzero neighbor
    let start_dir = neighbor_dir(start, from);
    let mut first = None;
    for k in 0..8 {
        let dir = (start_dir + 8 - k) % 8;
        let (dx, dy) = NEIGHBORS[dir];
        if label_at(labels, w, h, start.0 + dx, start.1 + dy) != 0 {
            first = Some((start.0 + dx, start.1 + dy));
            break;
        }
    }
    let Some(first) = first else {
        // isolated pixel
        labels[(start.1 * w + start.0) as usize] = -nbd;
        points.push(Point2::new(start.0, start.1));
        return points;
    };

    let mut prev = first;
    let mut cur = start;
    loop {
        // counterclockwise probe, starting just past the previous pixel
        let back = neighbor_dir(cur, prev);
        let mut next = prev;
        let mut east_was_zero = false;
        for k in 1..=8 {
            let dir = (back + k) % 8;
            let (dx, dy) = NEIGHBORS[dir];
            let (nx, ny) = (cur.0 + dx, cur.1 + dy);
            if label_at(labels, w, h, nx, ny) != 0 {
                next = (nx, ny);
                break;
            }
            if dir == 0 {
                east_was_zero = true;
            }
        }

        let idx = (cur.1 * w + cur.0) as usize;
        if east_was_zero {
            labels[idx] = -nbd;
        } else if labels[idx] == 1 {
            labels[idx] = nbd;
        }
        points.push(Point2::new(cur.0, cur.1));

        if next == start && cur == first {
            break;
        }
        prev = cur;
        cur = next;
    }
    points
}

/// Drop interior points of straight 8-direction runs (circularly), keeping
/// the endpoints. Shoelace area is unaffected.
fn compress_chain(points: Vec<Point2<i32>>) -> Contour {
    if points.len() < 3 {
        return Contour { points };
    }
    let n = points.len();
    let mut kept = Vec::with_capacity(n);
    for i in 0..n {
        let before = points[(i + n - 1) % n];
        let here = points[i];
        let after = points[(i + 1) % n];
        let incoming = (here.x - before.x, here.y - before.y);
        let outgoing = (after.x - here.x, after.y - here.y);
        if incoming != outgoing {
            kept.push(here);
        }
    }
    if kept.is_empty() {
        kept.push(points[0]);
    }
    Contour { points: kept }
}

/// Pick the contour with strictly greatest positive area.
///
/// Ties keep the first-encountered contour; an all-zero-area list selects
/// nothing (the "no target" outcome).
pub fn largest_contour(contours: &[Contour]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    let mut best_area = 0.0f64;
    for (idx, contour) in contours.iter().enumerate() {
        let area = contour.area();
        if area > best_area {
            best_area = area;
            best = Some((idx, area));
        }
    }
    best
}
