use crate::enhance::{
    auto_enhance_and_upscale, encode_png, load_image_from_bytes, EnhanceOptions,
};
use crate::error::{EnhanceError, Result};
use crate::utils::{create_progress_spinner, format_file_size, is_image_file, read_image_file};
use glob::glob;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// One batch input: an encoded image byte stream carrying its original name.
#[derive(Debug, Clone)]
pub struct NamedImage {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl NamedImage {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Enhance every input in order and pack the PNG-encoded results into a zip
/// archive, returned as a single byte buffer.
///
/// Entries are named after each input's original name, with no dedup: a
/// duplicate name is written again and shadows the earlier entry on lookup.
/// Any decode, transform, or encode failure aborts the whole batch; no
/// partial archive is returned.
pub fn process_images(inputs: &[NamedImage], options: &EnhanceOptions) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let entry_options = SimpleFileOptions::default();

    for input in inputs {
        let img = load_image_from_bytes(&input.bytes)?;
        let enhanced = auto_enhance_and_upscale(&img, options);
        let png = encode_png(&enhanced)?;

        writer.start_file(input.name.as_str(), entry_options)?;
        writer.write_all(&png)?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Collect image files from a path that may be a single file, a directory,
/// or a glob pattern. Directory listings are sorted for a stable batch order.
pub fn collect_image_files(input: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();
    let input_path = Path::new(input);

    if input_path.is_file() {
        image_files.push(input_path.to_path_buf());
    } else if input_path.is_dir() {
        let walker = if recursive {
            WalkDir::new(input_path).into_iter()
        } else {
            WalkDir::new(input_path).max_depth(1).into_iter()
        };

        for entry in walker.filter_entry(|e| !e.file_name().to_string_lossy().starts_with('.')) {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_image_file(path) {
                image_files.push(path.to_path_buf());
            }
        }
        image_files.sort();
    } else if let Ok(paths) = glob(input) {
        for entry in paths.flatten() {
            if entry.is_file() && is_image_file(&entry) {
                image_files.push(entry);
            }
        }
        image_files.sort();
    } else {
        return Err(EnhanceError::NoImageFilesFound(input.to_string()));
    }

    Ok(image_files)
}

/// Enhance a batch of image files and write the packaged zip archive.
pub fn batch_enhance_files(
    inputs: &[String],
    output: &Path,
    options: &EnhanceOptions,
    recursive: bool,
) -> Result<()> {
    crate::info!("🚀 Starting batch enhancement...");
    crate::info!("📁 Output archive: {:?}", output);

    let start_time = Instant::now();

    let mut image_files = Vec::new();
    for input in inputs {
        let found = collect_image_files(input, recursive)?;
        if found.is_empty() {
            crate::warn!("No image files matched input: {}", input);
        }
        image_files.extend(found);
    }
    let total_files = image_files.len();

    if total_files == 0 {
        return Err(EnhanceError::NoImageFilesFound(inputs.join(", ")));
    }

    crate::info!("📊 Found {} image files to process", total_files);

    let mut named_inputs = Vec::with_capacity(total_files);
    for path in &image_files {
        crate::verbose!("Reading {:?}", path);
        let bytes = read_image_file(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| EnhanceError::UnsupportedFormat("Invalid file name".to_string()))?;
        named_inputs.push(NamedImage::new(name, bytes));
    }

    let pb = create_progress_spinner(&format!("Enhancing {} images...", total_files));
    let archive = process_images(&named_inputs, options)?;
    pb.finish_with_message("✅ Batch enhancement complete");

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|_| EnhanceError::DirectoryCreationFailed(parent.to_path_buf()))?;
        }
    }
    fs::write(output, &archive)?;

    let elapsed_time = start_time.elapsed();

    crate::info!("\n📊 Batch Enhancement Summary:");
    crate::info!("  📁 Images processed: {}", total_files);
    crate::info!(
        "  📦 Archive size: {} bytes ({})",
        archive.len(),
        format_file_size(archive.len() as u64)
    );
    crate::info!("  ⏱️  Total time: {:?}", elapsed_time);

    Ok(())
}
