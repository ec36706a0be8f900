//! Driving geometry and rasterization across animation frames

use image::RgbaImage;

use crate::config::{GeometryMode, VUMeterConfig};
use crate::peaks::PeakDataset;

use super::geometry::{arc_envelope, canvas_size, static_bars};
use super::raster::rasterize;

/// Render a single frame. A pure function of `(config, dataset, frame)`:
/// no frame depends on any other frame's output, so callers may render
/// frames concurrently without coordination.
///
/// In `ArcEnvelope` mode a frame index past the end of the dataset renders
/// as an all-baseline frame rather than failing. In `StaticBars` mode the
/// frame index is ignored.
pub(crate) fn render_frame(
    config: &VUMeterConfig,
    dataset: &PeakDataset,
    frame: usize,
) -> RgbaImage {
    let rects = match config.geometry {
        GeometryMode::StaticBars => static_bars(config, &dataset.bar_values),
        GeometryMode::ArcEnvelope => {
            let peak = dataset.bar_values.get(frame).copied().unwrap_or(0);
            arc_envelope(config, peak)
        }
    };

    let (canvas_width, canvas_height) = canvas_size(config);
    rasterize(
        &rects,
        canvas_width,
        canvas_height,
        config.width,
        config.height,
    )
}

/// Iterator over rendered frames `0..total_frames`.
pub(crate) fn frames<'a>(
    config: &'a VUMeterConfig,
    dataset: &'a PeakDataset,
    total_frames: usize,
) -> impl Iterator<Item = RgbaImage> + 'a {
    (0..total_frames).map(move |frame| render_frame(config, dataset, frame))
}
