//! Clip sources and the video-only admission rule.

use std::path::{Path, PathBuf};
use twinview_core::{Result, TwinViewError};

/// Extensions offered by the open-file dialog.
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "m4v", "mov", "webm", "mkv", "avi", "wmv", "flv", "mpg", "mpeg", "ogv", "3gp", "ts",
];

const FALLBACK_TYPE: &str = "application/octet-stream";

/// Media type for a file extension (case-insensitive).
pub fn media_type_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "mp4" => "video/mp4",
        "m4v" => "video/x-m4v",
        "mov" | "qt" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "wmv" => "video/x-ms-wmv",
        "flv" => "video/x-flv",
        "mpg" | "mpeg" => "video/mpeg",
        "ogv" => "video/ogg",
        "3gp" => "video/3gpp",
        "ts" => "video/mp2t",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "m4a" => "audio/mp4",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "txt" => "text/plain",
        _ => FALLBACK_TYPE,
    }
}

/// A file offered for a slot, with the media type it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource {
    path: PathBuf,
    name: String,
    media_type: String,
}

impl MediaSource {
    /// Source whose media type is derived from the file extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::with_declared_type(path, "")
    }

    /// Source with a media type declared by whoever handed us the file (a
    /// drag-and-drop payload, say). An empty declaration falls back to the
    /// extension.
    pub fn with_declared_type(path: impl Into<PathBuf>, declared: &str) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let declared = declared.trim();
        let media_type = if declared.is_empty() {
            path.extension()
                .and_then(|e| e.to_str())
                .map(media_type_for_extension)
                .unwrap_or(FALLBACK_TYPE)
                .to_string()
        } else {
            declared.to_ascii_lowercase()
        };

        Self {
            path,
            name,
            media_type,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn is_video(&self) -> bool {
        self.media_type.starts_with("video/")
    }

    /// Pass the source through only if it declares a `video/` type.
    pub fn accept(self) -> Result<Self> {
        if self.is_video() {
            Ok(self)
        } else {
            Err(TwinViewError::UnsupportedMediaType(format!(
                "{} ({})",
                self.name, self.media_type
            )))
        }
    }
}
