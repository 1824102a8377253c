//! HSV range binarization.
//!
//! Classifies every pixel of an HSV frame against a [`ThresholdWindow`]:
//! a pixel is foreground when each of its three channels lies inside the
//! window's inclusive `[lower, upper]` bounds. Rows are processed in
//! parallel; the test itself is branch-free per channel.

use crate::image::mask::FOREGROUND;
use crate::image::{HsvFrame, Mask};
use crate::types::ThresholdWindow;
use rayon::prelude::*;

/// Write the in-range mask of `hsv` under `window` into `mask`.
pub fn in_range(hsv: &HsvFrame, window: &ThresholdWindow, mask: &mut Mask) {
    mask.reset(hsv.w, hsv.h);
    let width = hsv.w.max(1);
    mask.data
        .par_chunks_mut(width)
        .zip(hsv.data.par_chunks(width))
        .for_each(|(mask_row, hsv_row)| {
            for (m, px) in mask_row.iter_mut().zip(hsv_row) {
                *m = if window.contains_hsv(*px) { FOREGROUND } else { 0 };
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector4;

    fn window(lower: [f32; 3], upper: [f32; 3]) -> ThresholdWindow {
        ThresholdWindow::new(
            Vector4::new(lower[0], lower[1], lower[2], 0.0),
            Vector4::new(upper[0], upper[1], upper[2], 255.0),
        )
    }

    fn classify(win: &ThresholdWindow, px: [u8; 3]) -> bool {
        let mut hsv = HsvFrame::new(1, 1);
        hsv.data[0] = px;
        let mut mask = Mask::default();
        in_range(&hsv, win, &mut mask);
        mask.data[0] == FOREGROUND
    }

    #[test]
    fn strictly_inside_is_foreground() {
        let win = window([10.0, 20.0, 30.0], [50.0, 60.0, 70.0]);
        assert!(classify(&win, [30, 40, 50]));
    }

    #[test]
    fn bounds_are_inclusive() {
        let win = window([10.0, 20.0, 30.0], [50.0, 60.0, 70.0]);
        assert!(classify(&win, [10, 20, 30]));
        assert!(classify(&win, [50, 60, 70]));
    }

    #[test]
    fn any_channel_outside_is_background() {
        let win = window([10.0, 20.0, 30.0], [50.0, 60.0, 70.0]);
        assert!(!classify(&win, [9, 40, 50]));
        assert!(!classify(&win, [30, 61, 50]));
        assert!(!classify(&win, [30, 40, 71]));
    }

    #[test]
    fn unclamped_calibration_bounds_are_tolerated() {
        // saturation window [205, 305] from a saturated mean: 255 passes
        let win = window([0.0, 205.0, 205.0], [25.0, 305.0, 305.0]);
        assert!(classify(&win, [0, 255, 255]));
        assert!(!classify(&win, [0, 100, 255]));
    }

    #[test]
    fn empty_frame_yields_empty_mask() {
        let hsv = HsvFrame::default();
        let mut mask = Mask::new(3, 3);
        in_range(&hsv, &ThresholdWindow::default(), &mut mask);
        assert_eq!((mask.w, mask.h), (0, 0));
        assert!(mask.data.is_empty());
    }
}
