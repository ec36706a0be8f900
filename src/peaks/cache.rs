//! Read-or-recompute boundary for persisted peak datasets

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::audio::load_audio;
use crate::config::VUMeterConfig;
use crate::error::{MeterError, Result};
use crate::output::print_warning;

use super::PeakDataset;
use super::extract::extract_peaks;

/// Cache file sits next to the audio input: `song.wav` -> `song.wav.pk`.
pub(crate) fn peak_cache_path(audio_path: &Path) -> PathBuf {
    let mut name = audio_path.as_os_str().to_os_string();
    name.push(".pk");
    PathBuf::from(name)
}

pub(crate) fn read_peaks(path: &Path) -> Result<PeakDataset> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|e| MeterError::PersistedDatasetCorrupt {
        path: path.display().to_string(),
        source: e,
    })
}

pub(crate) fn write_peaks(path: &Path, dataset: &PeakDataset) -> io::Result<()> {
    let json = serde_json::to_string_pretty(dataset).map_err(io::Error::other)?;
    fs::write(path, json)
}

/// Return the persisted dataset if one exists, otherwise decode the audio,
/// extract peaks, and persist the result. A corrupt cache file is a hard
/// error (and is left on disk); a failed cache write only warns, since the
/// cache is an optimization rather than a correctness requirement.
pub(crate) fn load_or_generate(audio_path: &Path, config: &VUMeterConfig) -> Result<PeakDataset> {
    let cache_path = peak_cache_path(audio_path);

    if cache_path.exists() {
        return read_peaks(&cache_path);
    }

    let audio = load_audio(audio_path)?;
    let dataset = extract_peaks(&audio, config)?;

    if let Err(e) = write_peaks(&cache_path, &dataset) {
        print_warning(&format!(
            "could not persist peak data to {}: {}",
            cache_path.display(),
            e
        ));
    }

    Ok(dataset)
}
