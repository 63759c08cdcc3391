/// Type-safe handling of the accepted input image formats.
use crate::error::{EnhanceError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Input formats accepted for enhancement. Output is always PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    WebP,
}

impl InputFormat {
    /// Canonical file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            InputFormat::Png => "png",
            InputFormat::Jpeg => "jpg",
            InputFormat::Bmp => "bmp",
            InputFormat::Gif => "gif",
            InputFormat::WebP => "webp",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            InputFormat::Png => "image/png",
            InputFormat::Jpeg => "image/jpeg",
            InputFormat::Bmp => "image/bmp",
            InputFormat::Gif => "image/gif",
            InputFormat::WebP => "image/webp",
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "png" => Some(InputFormat::Png),
            "jpg" | "jpeg" => Some(InputFormat::Jpeg),
            "bmp" => Some(InputFormat::Bmp),
            "gif" => Some(InputFormat::Gif),
            "webp" => Some(InputFormat::WebP),
            _ => None,
        }
    }

    /// Determine the format from a file path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputFormat::Png => "PNG",
            InputFormat::Jpeg => "JPEG",
            InputFormat::Bmp => "BMP",
            InputFormat::Gif => "GIF",
            InputFormat::WebP => "WebP",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for InputFormat {
    type Err = EnhanceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s).ok_or_else(|| EnhanceError::UnsupportedFormat(s.to_string()))
    }
}
