//! Meter render configuration

/// How the sample stream is divided into peak windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimeDivision {
    /// One window per video frame: `channels * sample_rate / frame_rate` samples.
    FixedFrameRate,
    /// One window per meter bar within a beat: `samples_per_beat / bar_count`.
    BpmSubdivision,
}

/// How peak values are turned into bar heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GeometryMode {
    /// One bar per peak value, flat tops. Single still image.
    StaticBars,
    /// Half-sine envelope over the lit span, one frame per peak value.
    ArcEnvelope,
}

#[derive(Debug, Clone)]
pub(crate) struct VUMeterConfig {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) bar_count: u32,
    /// Song tempo. Only consulted in `BpmSubdivision` mode.
    pub(crate) bpm: f64,
    /// Video frame rate. Only consulted in `FixedFrameRate` mode.
    pub(crate) frame_rate: f64,
    pub(crate) time_division: TimeDivision,
    pub(crate) geometry: GeometryMode,
    /// Light the bar exactly at the arc span start. Historically that bar was
    /// excluded by a strict comparison and always rendered flat; this opts into
    /// the `>=` variant instead of silently changing the default.
    pub(crate) arc_inclusive_start: bool,
}
