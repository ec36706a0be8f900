//! Mapping peak values to bar rectangles

use std::f64::consts::PI;

use crate::config::VUMeterConfig;

use super::BarRect;

/// Bar width in output pixels, `ceil(width / (bar_count * 2))`. Every bar is
/// followed by a gap of the same width.
pub(crate) fn bar_width(config: &VUMeterConfig) -> u32 {
    config.width.div_ceil(config.bar_count * 2)
}

/// Oversampled canvas dimensions (2x the output for anti-aliasing).
pub(crate) fn canvas_size(config: &VUMeterConfig) -> (u32, u32) {
    (
        config.bar_count * bar_width(config) * 2,
        config.height * 2,
    )
}

fn place(bar: u32, bar_width: u32, height: u32, bar_height: u32) -> BarRect {
    BarRect {
        x: (bar * bar_width * 2) as i32,
        y: height as i32 - bar_height as i32,
        width: bar_width,
        height: bar_height * 2,
    }
}

/// Flat-topped bars, one per peak value. The caller guarantees `values` holds
/// at least `bar_count` entries.
pub(crate) fn static_bars(config: &VUMeterConfig, values: &[u8]) -> Vec<BarRect> {
    let bar_width = bar_width(config);

    (0..config.bar_count)
        .map(|bar| {
            let value = u32::from(values[bar as usize]);
            // Minimum of bar_width keeps a visible baseline nub at zero amplitude.
            let bar_height = (config.height * value / 100).max(bar_width);
            place(bar, bar_width, config.height, bar_height)
        })
        .collect()
}

/// Half-sine envelope over the lit span for one animation frame. The lit span
/// of `full_bars` bars is centered within the row; everything outside renders
/// at the baseline height.
///
/// The bar exactly at the span start is excluded by a strict comparison and
/// stays flat, matching long-observed output. `arc_inclusive_start` switches
/// to `>=` for callers that want the span boundary lit.
pub(crate) fn arc_envelope(config: &VUMeterConfig, peak: u8) -> Vec<BarRect> {
    let bar_width = bar_width(config);
    let baseline = |bar| place(bar, bar_width, config.height, bar_width);

    let full_bars = (f64::from(config.bar_count) * f64::from(peak) / 100.0).round() as u32;
    if full_bars == 0 {
        return (0..config.bar_count).map(baseline).collect();
    }

    let bars_offset = (config.bar_count - full_bars) / 2;
    let angle_per_bar = PI / f64::from(full_bars);

    (0..config.bar_count)
        .map(|bar| {
            let past_start = if config.arc_inclusive_start {
                bar >= bars_offset
            } else {
                bar > bars_offset
            };

            if past_start && bar < bars_offset + full_bars {
                let angle = f64::from(bar - bars_offset) * angle_per_bar;
                let bar_height =
                    ((f64::from(config.height) * angle.sin()).round() as u32).max(bar_width);
                place(bar, bar_width, config.height, bar_height)
            } else {
                baseline(bar)
            }
        })
        .collect()
}
