//! Downsampling a PCM stream into per-window peak percentages

use crate::audio::AudioData;
use crate::config::{TimeDivision, VUMeterConfig};
use crate::error::{MeterError, Result};

use super::PeakDataset;

/// Window size in interleaved samples for the configured time division.
pub(crate) fn samples_per_unit(
    config: &VUMeterConfig,
    channels: u16,
    sample_rate: u32,
) -> Result<usize> {
    let samples_per_second = f64::from(channels) * f64::from(sample_rate);

    let raw = match config.time_division {
        TimeDivision::FixedFrameRate => samples_per_second / config.frame_rate,
        TimeDivision::BpmSubdivision => {
            let samples_per_beat = (60.0 / config.bpm) * samples_per_second;
            samples_per_beat / f64::from(config.bar_count)
        }
    };

    let unit = raw.floor() as usize;
    if unit == 0 {
        return Err(MeterError::InvalidConfig(format!(
            "window of {:.2} samples is too small; lower the frame rate or bar count",
            raw
        )));
    }

    Ok(unit)
}

/// Scan the sample stream and record each window's peak amplitude as a
/// percentage of full scale for the stream's bit depth.
pub(crate) fn extract_peaks(audio: &AudioData, config: &VUMeterConfig) -> Result<PeakDataset> {
    let samples_per_unit = samples_per_unit(config, audio.channels, audio.sample_rate)?;
    let max_amplitude = audio.max_amplitude();

    let mut bar_values = Vec::with_capacity(audio.samples.len() / samples_per_unit);

    for window in audio.samples.chunks_exact(samples_per_unit) {
        let peak = window.iter().map(|&s| s.unsigned_abs()).max().unwrap_or(0);
        let percent = (f64::from(peak) / max_amplitude * 100.0).round().min(100.0) as u8;
        bar_values.push(percent);
    }

    Ok(PeakDataset {
        bpm: config.bpm,
        channels: audio.channels,
        sample_rate: audio.sample_rate,
        total_samples: audio.samples.len(),
        samples_per_unit,
        bar_values,
    })
}
