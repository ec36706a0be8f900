//! Peak extraction and on-disk peak dataset cache

mod cache;
mod extract;

pub(crate) use cache::load_or_generate;

use serde::{Deserialize, Serialize};

/// Downsampled peak amplitudes for one audio file. Immutable once produced.
///
/// `bar_values` holds one entry per complete window of `samples_per_unit`
/// interleaved samples, each the window's peak amplitude as a percentage of
/// full scale. Trailing samples that do not fill a window are dropped, so
/// `bar_values.len() == total_samples / samples_per_unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PeakDataset {
    pub(crate) bpm: f64,
    pub(crate) channels: u16,
    pub(crate) sample_rate: u32,
    pub(crate) total_samples: usize,
    #[serde(rename = "samples_per_frame", alias = "samples_per_meter_bar")]
    pub(crate) samples_per_unit: usize,
    #[serde(rename = "bars_data")]
    pub(crate) bar_values: Vec<u8>,
}
