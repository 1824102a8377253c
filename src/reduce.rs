//! Pyramidal frame reduction.
//!
//! The tracker processes a 4×-reduced frame, obtained as two successive
//! halvings. Each halving low-pass filters with the normalized 5-tap
//! Gaussian `[1, 4, 6, 4, 1] / 16` (border replicate) before decimating by
//! two, so thin structures alias-blur instead of disappearing. Output
//! dimensions follow the `div_ceil(2)` rule on every halving.

use crate::image::RgbaFrame;

/// Ratio between full-resolution and reduced-frame coordinates.
pub const REDUCTION_FACTOR: usize = 4;

/// Integer taps of the separable Gaussian; the 2-D weights sum to 256.
const TAPS: [u32; 5] = [1, 4, 6, 4, 1];

/// Blur-and-halve one step. `dst` is resized to `ceil(w/2) × ceil(h/2)`.
pub fn pyr_down(src: &RgbaFrame, dst: &mut RgbaFrame) {
    let nw = src.w.div_ceil(2);
    let nh = src.h.div_ceil(2);
    dst.reset(nw, nh);

    let max_x = src.w as i32 - 1;
    let max_y = src.h as i32 - 1;
    for y in 0..nh {
        for x in 0..nw {
            let cx = (x * 2) as i32;
            let cy = (y * 2) as i32;
            let mut acc = [0u32; 4];
            for (dy, wy) in TAPS.iter().enumerate() {
                let sy = (cy + dy as i32 - 2).clamp(0, max_y) as usize;
                let row = &src.data[sy * src.w..(sy + 1) * src.w];
                for (dx, wx) in TAPS.iter().enumerate() {
                    let sx = (cx + dx as i32 - 2).clamp(0, max_x) as usize;
                    let wgt = wy * wx;
                    let px = row[sx];
                    for c in 0..4 {
                        acc[c] += wgt * px[c] as u32;
                    }
                }
            }
            dst.data[y * nw + x] = [
                ((acc[0] + 128) >> 8) as u8,
                ((acc[1] + 128) >> 8) as u8,
                ((acc[2] + 128) >> 8) as u8,
                ((acc[3] + 128) >> 8) as u8,
            ];
        }
    }
}

/// Reduce a full-resolution frame by [`REDUCTION_FACTOR`] via two halvings.
/// `scratch` holds the intermediate level between the halvings.
pub fn reduce(src: &RgbaFrame, scratch: &mut RgbaFrame, dst: &mut RgbaFrame) {
    pyr_down(src, scratch);
    pyr_down(scratch, dst);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_quarters_each_dimension() {
        let src = RgbaFrame::new(640, 480);
        let mut scratch = RgbaFrame::default();
        let mut dst = RgbaFrame::default();
        reduce(&src, &mut scratch, &mut dst);
        assert_eq!((dst.w, dst.h), (160, 120));
    }

    #[test]
    fn odd_dimensions_round_up_on_each_halving() {
        let src = RgbaFrame::new(5, 9);
        let mut scratch = RgbaFrame::default();
        let mut dst = RgbaFrame::default();
        reduce(&src, &mut scratch, &mut dst);
        // 5 -> 3 -> 2, 9 -> 5 -> 3
        assert_eq!((dst.w, dst.h), (2, 3));
    }

    #[test]
    fn uniform_frames_stay_uniform() {
        let mut src = RgbaFrame::new(64, 48);
        src.fill([210, 90, 17, 255]);
        let mut scratch = RgbaFrame::default();
        let mut dst = RgbaFrame::default();
        reduce(&src, &mut scratch, &mut dst);
        assert_eq!((dst.w, dst.h), (16, 12));
        assert!(dst.data.iter().all(|px| *px == [210, 90, 17, 255]));
    }
}
