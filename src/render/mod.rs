//! Bar geometry and rasterization

mod geometry;
mod raster;
mod sequence;

pub(crate) use sequence::{frames, render_frame};

/// One bar rectangle in oversampled canvas coordinates. Recomputed per frame,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BarRect {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}
