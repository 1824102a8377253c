//! Per-stage buffers reused across frames.
//!
//! Every pipeline stage writes into a preallocated buffer owned here; the
//! buffers resize lazily via each type's `reset`, so steady-state frames
//! allocate nothing and a resolution change reallocates exactly once.

use crate::contours::Contour;
use crate::image::{HsvFrame, Mask, RgbaFrame};

/// Buffer pool backing one tracker instance.
#[derive(Default)]
pub struct TrackerWorkspace {
    /// First pyramidal halving.
    pub(crate) half: RgbaFrame,
    /// Second halving: the reduced frame the pipeline operates on.
    pub(crate) reduced: RgbaFrame,
    pub(crate) hsv: HsvFrame,
    /// Raw in-range mask.
    pub(crate) mask: Mask,
    /// Dilated intermediate of the closing.
    pub(crate) dilated: Mask,
    /// Denoised mask handed to contour extraction.
    pub(crate) denoised: Mask,
    /// Label scratch for border following.
    pub(crate) labels: Vec<i32>,
    pub(crate) contours: Vec<Contour>,
}

impl TrackerWorkspace {
    pub fn new() -> Self {
        Self::default()
    }
}
