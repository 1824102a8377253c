use crate::image::{FrameView, FrameViewMut};

/// Owned 4-channel RGBA frame, row-major, stride == width.
#[derive(Clone, Debug, Default)]
pub struct RgbaFrame {
    pub w: usize,
    pub h: usize,
    pub data: Vec<[u8; 4]>,
}

impl RgbaFrame {
    /// Construct a zero-initialized frame of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![[0; 4]; w * h],
        }
    }

    /// Wrap an existing pixel vector. Panics if the length disagrees with
    /// the dimensions.
    pub fn from_pixels(w: usize, h: usize, data: Vec<[u8; 4]>) -> Self {
        assert_eq!(data.len(), w * h, "pixel count must match dimensions");
        Self { w, h, data }
    }

    /// Resize to `w × h`, reallocating only when the dimensions change.
    /// Existing pixel contents are unspecified afterwards.
    pub fn reset(&mut self, w: usize, h: usize) {
        if self.w != w || self.h != h {
            self.w = w;
            self.h = h;
            self.data.resize(w * h, [0; 4]);
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 4] {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: [u8; 4]) {
        self.data[y * self.w + x] = px;
    }

    pub fn fill(&mut self, px: [u8; 4]) {
        self.data.fill(px);
    }

    /// Copy out the `w × h` subregion anchored at `(x, y)`, or `None` when
    /// the rectangle does not lie fully inside the frame or is empty.
    pub fn crop(&self, x: usize, y: usize, w: usize, h: usize) -> Option<RgbaFrame> {
        if w == 0 || h == 0 {
            return None;
        }
        let x1 = x.checked_add(w)?;
        let y1 = y.checked_add(h)?;
        if x1 > self.w || y1 > self.h {
            return None;
        }
        let mut data = Vec::with_capacity(w * h);
        for row in y..y1 {
            let start = row * self.w + x;
            data.extend_from_slice(&self.data[start..start + w]);
        }
        Some(RgbaFrame { w, h, data })
    }
}

impl FrameView for RgbaFrame {
    type Pixel = [u8; 4];

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[[u8; 4]] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl FrameViewMut for RgbaFrame {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [[u8; 4]] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_copies_the_requested_window() {
        let mut frame = RgbaFrame::new(8, 6);
        frame.set(3, 2, [9, 9, 9, 255]);
        let patch = frame.crop(2, 1, 3, 3).expect("in bounds");
        assert_eq!(patch.w, 3);
        assert_eq!(patch.h, 3);
        assert_eq!(patch.get(1, 1), [9, 9, 9, 255]);
    }

    #[test]
    fn crop_rejects_out_of_bounds_and_empty_windows() {
        let frame = RgbaFrame::new(8, 6);
        assert!(frame.crop(6, 0, 3, 2).is_none());
        assert!(frame.crop(0, 5, 2, 2).is_none());
        assert!(frame.crop(0, 0, 0, 3).is_none());
    }
}
