//! Owned pixel buffers used by the pipeline.
//!
//! All buffers are row-major and tightly packed. They expose a `reset`
//! method that only reallocates when the requested dimensions change, so a
//! workspace can hand the same buffers to every frame.

pub mod draw;
pub mod hsv;
pub mod io;
pub mod mask;
pub mod rgba;

pub use self::hsv::HsvFrame;
pub use self::mask::Mask;
pub use self::rgba::RgbaFrame;

/// Read access to a row-major pixel buffer.
pub trait FrameView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn row(&self, y: usize) -> &[Self::Pixel];

    #[inline]
    fn pixel(&self, x: usize, y: usize) -> Self::Pixel {
        self.row(y)[x]
    }
}

/// Write access to a row-major pixel buffer.
pub trait FrameViewMut: FrameView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];

    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, value: Self::Pixel) {
        self.row_mut(y)[x] = value;
    }
}
