//! Media file probing to get metadata without decoding.
//!
//! Runs `ffprobe` (located through ffmpeg-sidecar) and reads its JSON report.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;
use twinview_core::{Result, TwinViewError};

/// Information about a media file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaProbe {
    /// File path
    pub path: String,
    /// Duration in seconds
    pub duration: f64,
    /// Video streams
    pub video_streams: Vec<VideoStreamInfo>,
    /// Number of audio streams
    pub audio_stream_count: usize,
    /// Container format
    pub format: String,
}

/// Information about a video stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoStreamInfo {
    pub index: usize,
    pub codec: String,
    pub width: u32,
    pub height: u32,
    /// Frames per second, when ffprobe reports a usable rate.
    pub frame_rate: Option<f64>,
}

// ── ffprobe JSON report ─────────────────────────────────────────

#[derive(Deserialize, Debug)]
struct FfprobeOutput {
    #[serde(default)]
    format: Option<FfprobeFormat>,
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Deserialize, Debug)]
struct FfprobeFormat {
    format_name: Option<String>,
    duration: Option<String>,
}

#[derive(Deserialize, Debug)]
struct FfprobeStream {
    index: Option<usize>,
    codec_type: Option<String>,
    codec_name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    r_frame_rate: Option<String>,
    duration: Option<String>,
}

impl MediaProbe {
    /// Probe a media file with ffprobe.
    pub fn probe<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TwinViewError::NotFound(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let ffprobe = ffmpeg_sidecar::ffprobe::ffprobe_path();
        debug!(ffprobe = %ffprobe.display(), path = %path.display(), "Probing media");

        let output = Command::new(&ffprobe)
            .args(["-v", "quiet", "-print_format", "json", "-show_format", "-show_streams"])
            .arg(path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                TwinViewError::Probe(format!("Failed to run {}: {}", ffprobe.display(), e))
            })?;

        if !output.status.success() {
            return Err(TwinViewError::Probe(format!(
                "ffprobe exited with {} for {}: {}",
                output.status,
                path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Self::from_ffprobe_json(path.to_string_lossy(), &output.stdout)
    }

    /// Build a probe result from an ffprobe JSON report.
    pub fn from_ffprobe_json(path: impl Into<String>, json: &[u8]) -> Result<Self> {
        let path = path.into();
        let report: FfprobeOutput = serde_json::from_slice(json)
            .map_err(|e| TwinViewError::Probe(format!("Invalid ffprobe output for {}: {}", path, e)))?;

        let video: Vec<&FfprobeStream> = report
            .streams
            .iter()
            .filter(|s| s.codec_type.as_deref() == Some("video"))
            .collect();
        let audio_stream_count = report
            .streams
            .iter()
            .filter(|s| s.codec_type.as_deref() == Some("audio"))
            .count();

        // Prefer the video stream's own duration, then the container's.
        let duration = video
            .first()
            .and_then(|s| parse_seconds(s.duration.as_deref()))
            .or_else(|| {
                report
                    .format
                    .as_ref()
                    .and_then(|f| parse_seconds(f.duration.as_deref()))
            })
            .ok_or_else(|| TwinViewError::Probe(format!("No duration reported for {}", path)))?;

        let video_streams = video
            .iter()
            .enumerate()
            .map(|(i, s)| VideoStreamInfo {
                index: s.index.unwrap_or(i),
                codec: s.codec_name.clone().unwrap_or_else(|| "unknown".to_string()),
                width: s.width.unwrap_or(0),
                height: s.height.unwrap_or(0),
                frame_rate: s.r_frame_rate.as_deref().and_then(parse_frame_rate),
            })
            .collect();

        let format = report
            .format
            .and_then(|f| f.format_name)
            .unwrap_or_else(|| "unknown".to_string());

        Ok(Self {
            path,
            duration,
            video_streams,
            audio_stream_count,
            format,
        })
    }

    /// Build a probe result by hand (for handles without a file behind them).
    pub fn synthetic(path: impl Into<String>, duration: f64) -> Self {
        Self {
            path: path.into(),
            duration,
            video_streams: Vec::new(),
            audio_stream_count: 0,
            format: "unknown".to_string(),
        }
    }

    /// Get the primary video stream info.
    pub fn primary_video(&self) -> Option<&VideoStreamInfo> {
        self.video_streams.first()
    }
}

/// Whether an ffprobe binary can be found.
pub fn ffprobe_available() -> bool {
    ffmpeg_sidecar::ffprobe::ffprobe_is_installed()
}

fn parse_seconds(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d > 0.0)
}

/// Parse `30000/1001` or `25` style rates.
fn parse_frame_rate(value: &str) -> Option<f64> {
    let rate = match value.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().ok()?;
            let den: f64 = den.trim().parse().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => value.trim().parse().ok()?,
    };
    (rate.is_finite() && rate > 0.0).then_some(rate)
}
