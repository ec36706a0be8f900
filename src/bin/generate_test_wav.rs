use std::f32::consts::PI;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let byte_rate = sample_rate * channels as u32 * bits_per_sample as u32 / 8;
    let block_align = channels * bits_per_sample / 8;
    let data_size = samples.len() as u32 * 2;
    let file_size = 36 + data_size;

    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?;
    writer.write_all(&channels.to_le_bytes())?;
    writer.write_all(&sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&block_align.to_le_bytes())?;
    writer.write_all(&bits_per_sample.to_le_bytes())?;
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;

    for &sample in samples {
        let value = (sample * 32767.0).clamp(-32768.0, 32767.0) as i16;
        writer.write_all(&value.to_le_bytes())?;
    }

    Ok(())
}

/// Sine bursts with exponential decay on each beat, so the meter has
/// something to swing to.
fn pulsed_beat(bpm: f32, freq: f32, duration: f32, sample_rate: u32) -> Vec<f32> {
    let n = (duration * sample_rate as f32) as usize;
    let beat_period = 60.0 / bpm;

    (0..n)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            let since_beat = t % beat_period;
            let envelope = (-8.0 * since_beat).exp();
            (2.0 * PI * freq * t).sin() * envelope
        })
        .collect()
}

fn main() -> std::io::Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "beat.wav".to_string());
    let bpm: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(95.0);

    let samples = pulsed_beat(bpm, 220.0, 10.0, 44100);
    write_wav(Path::new(&path), &samples, 44100)?;

    eprintln!("Wrote 10s {} BPM test beat to {}", bpm, path);
    Ok(())
}
