//! HSV buffer and the RGB → HSV conversion used by the pipeline.
//!
//! The conversion uses the full-range hue mapping: hue occupies the whole
//! 0–255 byte instead of the 0–179 half-range, i.e. `h = deg · 255 / 360`.

use crate::image::{FrameView, FrameViewMut, RgbaFrame};

/// Owned 3-channel HSV frame, row-major, stride == width.
#[derive(Clone, Debug, Default)]
pub struct HsvFrame {
    pub w: usize,
    pub h: usize,
    pub data: Vec<[u8; 3]>,
}

impl HsvFrame {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![[0; 3]; w * h],
        }
    }

    /// Resize to `w × h`, reallocating only when the dimensions change.
    pub fn reset(&mut self, w: usize, h: usize) {
        if self.w != w || self.h != h {
            self.w = w;
            self.h = h;
            self.data.resize(w * h, [0; 3]);
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        self.data[y * self.w + x]
    }
}

impl FrameView for HsvFrame {
    type Pixel = [u8; 3];

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[[u8; 3]] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl FrameViewMut for HsvFrame {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [[u8; 3]] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

/// Convert one RGB triple to full-range HSV.
#[inline]
pub fn rgb_to_hsv_full(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let v = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = v - min;

    let s = if v > 0.0 {
        (255.0 * delta / v).round()
    } else {
        0.0
    };

    let deg = if delta > 0.0 {
        let raw = if v == rf {
            60.0 * (gf - bf) / delta
        } else if v == gf {
            120.0 + 60.0 * (bf - rf) / delta
        } else {
            240.0 + 60.0 * (rf - gf) / delta
        };
        if raw < 0.0 {
            raw + 360.0
        } else {
            raw
        }
    } else {
        0.0
    };
    let h = (deg * 255.0 / 360.0).round();

    [h as u8, s as u8, v as u8]
}

/// Convert a whole RGBA frame (alpha dropped) into `dst`.
pub fn convert_rgba(src: &RgbaFrame, dst: &mut HsvFrame) {
    dst.reset(src.w, src.h);
    for (out, px) in dst.data.iter_mut().zip(&src.data) {
        *out = rgb_to_hsv_full(px[0], px[1], px[2]);
    }
}
