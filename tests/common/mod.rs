//! Common test utilities

use std::f32::consts::PI;
use std::io::Write;
use std::path::Path;

/// Generate a mono sine wave at the given frequency
pub fn generate_sine(freq: f32, sample_rate: u32, duration_secs: f32) -> Vec<f32> {
    let num_samples = (sample_rate as f32 * duration_secs) as usize;
    (0..num_samples)
        .map(|i| (2.0 * PI * freq * i as f32 / sample_rate as f32).sin() * 0.5)
        .collect()
}

/// Generate a sine wave pulsed on every beat with a decaying envelope
pub fn generate_beat(bpm: f32, freq: f32, sample_rate: u32, duration_secs: f32) -> Vec<f32> {
    let num_samples = (sample_rate as f32 * duration_secs) as usize;
    let beat_period = 60.0 / bpm;
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            let envelope = (-8.0 * (t % beat_period)).exp();
            (2.0 * PI * freq * t).sin() * envelope
        })
        .collect()
}

/// Write samples as a WAV file to the given path
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_wav_to(&mut file, samples, sample_rate)
}

/// Write samples as WAV data to a writer
fn write_wav_to<W: Write>(
    writer: &mut W,
    samples: &[f32],
    sample_rate: u32,
) -> std::io::Result<()> {
    let channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let byte_rate = sample_rate * channels as u32 * bits_per_sample as u32 / 8;
    let block_align = channels * bits_per_sample / 8;
    let data_size = samples.len() as u32 * 2; // 16-bit = 2 bytes per sample
    let file_size = 36 + data_size;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // chunk size
    writer.write_all(&1u16.to_le_bytes())?; // PCM format
    writer.write_all(&channels.to_le_bytes())?;
    writer.write_all(&sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&block_align.to_le_bytes())?;
    writer.write_all(&bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;

    // Convert f32 samples to i16 and write
    for &sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        let i16_sample = (clamped * 32767.0) as i16;
        writer.write_all(&i16_sample.to_le_bytes())?;
    }

    Ok(())
}

/// Read the dimensions out of a PNG file's IHDR chunk
pub fn png_dimensions(path: &Path) -> std::io::Result<(u32, u32)> {
    let data = std::fs::read(path)?;
    assert!(data.len() > 24, "PNG too short: {}", path.display());
    assert_eq!(&data[1..4], b"PNG", "not a PNG: {}", path.display());
    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
    Ok((width, height))
}
