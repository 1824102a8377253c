//! Tracker orchestrating the per-frame color-blob pipeline.
//!
//! Overview
//! - Reduces each RGBA frame 4× via two pyramidal halvings.
//! - Converts the reduced frame to full-range HSV and binarizes it against
//!   the shared threshold window.
//! - Denoises the mask with a 3×3 closing, extracts contours by border
//!   following, and keeps the largest-area blob.
//! - Rescales the winning contour to full resolution and fits its minimal
//!   enclosing circle.
//! - Maps the circle center's horizontal offset to a steering angle and
//!   issues one drive/stop command per frame to the actuator.
//! - With following disabled, draws the fixed calibration marker instead
//!   and issues no command.
//!
//! Modules
//! - [`params`] – configuration for the tracker and the demo binary.
//! - `pipeline` – the [`Tracker`] implementation.
//! - `workspace` – reusable buffers that amortise allocations across frames.

pub mod params;
mod pipeline;
mod workspace;

pub use params::TrackerParams;
pub use pipeline::Tracker;
pub use workspace::TrackerWorkspace;
