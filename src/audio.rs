use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::{MeterError, Result};
use crate::output::print_warning;

/// Decoded PCM audio. Samples are interleaved across channels and scaled to
/// the integer range of the container's declared bit depth.
pub(crate) struct AudioData {
    pub(crate) samples: Vec<i32>,
    pub(crate) sample_rate: u32,
    pub(crate) channels: u16,
    pub(crate) bits_per_sample: u32,
}

impl AudioData {
    /// Largest representable absolute sample value, `2^(bits-1)`.
    pub(crate) fn max_amplitude(&self) -> f64 {
        (1u64 << (self.bits_per_sample - 1)) as f64
    }
}

pub(crate) fn load_audio(path: &Path) -> Result<AudioData> {
    let file = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| MeterError::InvalidAudioFormat(format!("unsupported format: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != symphonia::core::codecs::CODEC_TYPE_NULL)
        .ok_or_else(|| MeterError::InvalidAudioFormat("no audio track found".to_string()))?;

    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| MeterError::InvalidAudioFormat("unknown sample rate".to_string()))?;
    let channels = track
        .codec_params
        .channels
        .ok_or_else(|| MeterError::InvalidAudioFormat("unknown channel count".to_string()))?
        .count() as u16;
    let bits_per_sample = track
        .codec_params
        .bits_per_sample
        .ok_or_else(|| MeterError::InvalidAudioFormat("unknown bit depth".to_string()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| MeterError::InvalidAudioFormat(format!("failed to create decoder: {}", e)))?;

    let track_id = track.id;
    let scale = (1u64 << (bits_per_sample - 1)) as f32;
    let mut samples: Vec<i32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(MeterError::InvalidAudioFormat(format!(
                    "error reading packet: {}",
                    e
                )));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(e) => {
                print_warning(&format!("decode error: {}", e));
                continue;
            }
        };

        let spec = *decoded.spec();
        let mut sample_buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);

        samples.extend(
            sample_buf
                .samples()
                .iter()
                .map(|&s| (s * scale).round() as i32),
        );
    }

    Ok(AudioData {
        samples,
        sample_rate,
        channels,
        bits_per_sample,
    })
}
