mod audio;
mod config;
mod error;
mod output;
mod peaks;
mod render;

use std::path::Path;

use clap::Parser;

use config::{GeometryMode, TimeDivision, VUMeterConfig};
use error::{MeterError, Result};
use output::{get_display_name, print_error, print_warning};
use peaks::PeakDataset;

#[derive(Parser)]
#[command(
    name = "vumeter",
    version,
    about = "Renders VU meter bar-graph images and animation frames from audio files",
    after_help = "Examples:
  vumeter --audio song.wav --folder frames --frames 300       Animated arc meter
  vumeter --audio song.wav --folder out --static              Single static bar graph
  vumeter --audio song.wav --folder out --static --bpm-division --bpm 120
                                                              One bar per beat subdivision
  vumeter --audio song.wav --folder frames --frames 300 --arc-inclusive
                                                              Light the first arc bar too"
)]
struct Args {
    /// Audio file path (linear PCM WAV)
    #[arg(long, value_name = "PATH")]
    audio: String,

    /// Destination folder for rendered images
    #[arg(long, value_name = "DIR")]
    folder: String,

    /// Image width
    #[arg(long, default_value = "200")]
    width: u32,

    /// Image height
    #[arg(long, default_value = "50")]
    height: u32,

    /// Total bars
    #[arg(long, default_value = "60")]
    bars: u32,

    /// Song speed in BPM (used with --bpm-division)
    #[arg(long, default_value = "95.0")]
    bpm: f64,

    /// Video frame rate (used for the default time division)
    #[arg(long = "frame-rate", default_value = "30.0")]
    frame_rate: f64,

    /// Total animation frames to render
    #[arg(long, default_value = "0")]
    frames: u32,

    /// Render a single static bar graph instead of animation frames
    #[arg(long = "static")]
    static_bars: bool,

    /// Divide time into BPM subdivisions instead of video frames
    #[arg(long = "bpm-division")]
    bpm_division: bool,

    /// Light the bar at the arc span start (historically rendered flat)
    #[arg(long = "arc-inclusive")]
    arc_inclusive: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Mode: render one animation frame per peak window
fn run_animation(
    config: &VUMeterConfig,
    dataset: &PeakDataset,
    folder: &Path,
    total_frames: u32,
) -> Result<()> {
    let total = total_frames as usize;

    for (frame, image) in render::frames(config, dataset, total).enumerate() {
        eprint!("\rRendering frame {}/{}", frame + 1, total);

        let path = folder.join(format!("vumeter{}.png", 10000 + frame));
        image.save(&path)?;
    }

    eprintln!("\rRendered {} frames to {}", total, folder.display());
    Ok(())
}

/// Mode: render a single static bar graph
fn run_static(config: &VUMeterConfig, dataset: &PeakDataset, folder: &Path) -> Result<()> {
    if dataset.bar_values.len() < config.bar_count as usize {
        return Err(MeterError::InvalidConfig(format!(
            "peak dataset has {} bars but static mode needs {}; lower --bars or use a longer file",
            dataset.bar_values.len(),
            config.bar_count
        )));
    }

    let image = render::render_frame(config, dataset, 0);
    let path = folder.join("vumeter10000.png");
    image.save(&path)?;

    eprintln!("Rendered static meter to {}", path.display());
    Ok(())
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    if args.width == 0 || args.height == 0 {
        print_error("width and height must be positive");
        std::process::exit(1);
    }

    if args.bars == 0 {
        print_error("bar count must be positive");
        std::process::exit(1);
    }

    if args.bpm_division && args.bpm <= 0.0 {
        print_error("BPM must be positive");
        std::process::exit(1);
    }

    if !args.bpm_division && args.frame_rate <= 0.0 {
        print_error("frame rate must be positive");
        std::process::exit(1);
    }

    let folder = Path::new(&args.folder);
    if !folder.is_dir() {
        print_error(&format!("directory does not exist: {}", folder.display()));
        std::process::exit(1);
    }

    let config = VUMeterConfig {
        width: args.width,
        height: args.height,
        bar_count: args.bars,
        bpm: args.bpm,
        frame_rate: args.frame_rate,
        time_division: if args.bpm_division {
            TimeDivision::BpmSubdivision
        } else {
            TimeDivision::FixedFrameRate
        },
        geometry: if args.static_bars {
            GeometryMode::StaticBars
        } else {
            GeometryMode::ArcEnvelope
        },
        arc_inclusive_start: args.arc_inclusive,
    };

    let audio_path = Path::new(&args.audio);
    let dataset = match peaks::load_or_generate(audio_path, &config) {
        Ok(d) => d,
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    eprintln!(
        "{}: {} peak bars ({} samples per window)",
        get_display_name(&args.audio),
        dataset.bar_values.len(),
        dataset.samples_per_unit
    );

    if !args.static_bars && args.frames == 0 {
        print_warning("--frames is 0, nothing to render");
        return;
    }

    let result = if args.static_bars {
        run_static(&config, &dataset, folder)
    } else {
        run_animation(&config, &dataset, folder, args.frames)
    };

    if let Err(e) = result {
        eprintln!();
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
