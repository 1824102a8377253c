//! Mask denoising via 3×3 morphology.
//!
//! The mask is dilated once and then eroded once (a closing): small holes
//! inside a blob are filled and nearby speckle merges before the erosion
//! trims the boundary back. The 3×3 window is clamped at the borders, which
//! matches replicate-border dilation and ignore-outside erosion.

use crate::image::mask::FOREGROUND;
use crate::image::{FrameView, Mask};

/// One 3×3 dilation pass: a pixel is set when any mask pixel in its
/// (clamped) 3×3 neighborhood is set.
pub fn dilate3(src: &Mask, dst: &mut Mask) {
    dst.reset(src.w, src.h);
    neighborhood_pass(src, dst, false);
}

/// One 3×3 erosion pass: a pixel survives when every mask pixel in its
/// (clamped) 3×3 neighborhood is set.
pub fn erode3(src: &Mask, dst: &mut Mask) {
    dst.reset(src.w, src.h);
    neighborhood_pass(src, dst, true);
}

/// Dilate then erode. `scratch` holds the dilated intermediate.
pub fn close(src: &Mask, scratch: &mut Mask, dst: &mut Mask) {
    dilate3(src, scratch);
    erode3(scratch, dst);
}

fn neighborhood_pass(src: &Mask, dst: &mut Mask, require_all: bool) {
    let (w, h) = (src.w, src.h);
    for y in 0..h {
        let y0 = y.saturating_sub(1);
        let y1 = (y + 1).min(h.saturating_sub(1));
        for x in 0..w {
            let x0 = x.saturating_sub(1);
            let x1 = (x + 1).min(w - 1);
            let mut hit = require_all;
            'scan: for ny in y0..=y1 {
                let row = src.row(ny);
                for cell in &row[x0..=x1] {
                    let set = *cell != 0;
                    if require_all != set {
                        hit = set;
                        break 'scan;
                    }
                }
            }
            dst.data[y * w + x] = if hit { FOREGROUND } else { 0 };
        }
    }
}
