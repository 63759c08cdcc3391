/// Helpers shared by the single-file and batch pipelines.
use crate::constants::{MAX_FILE_SIZE, MAX_IMAGE_DIMENSION, PROGRESS_SPINNER_TEMPLATE};
use crate::error::{EnhanceError, Result};
use crate::formats::InputFormat;
use image::ImageReader;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Check whether a path carries one of the supported image extensions.
pub fn is_image_file(path: &Path) -> bool {
    InputFormat::from_path(path).is_some()
}

pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(EnhanceError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Read an image file into memory, enforcing the file-size and image
/// dimension limits before the full decode happens.
pub fn read_image_file(path: &Path) -> Result<Vec<u8>> {
    validate_file_exists(path)?;

    let file_size = fs::metadata(path)?.len();
    if file_size > MAX_FILE_SIZE {
        return Err(EnhanceError::FileTooLarge(file_size, MAX_FILE_SIZE));
    }

    let bytes = fs::read(path)?;

    // Probe dimensions from the header, before the full decode
    let (width, height) = ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(EnhanceError::InvalidDimensions(
            width,
            height,
            MAX_IMAGE_DIMENSION,
        ));
    }

    Ok(bytes)
}

pub fn create_progress_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template(PROGRESS_SPINNER_TEMPLATE)
            .expect("Invalid progress template"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Format a byte count as a human-readable size string.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
