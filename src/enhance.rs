use crate::constants::{
    DEFAULT_BRIGHTNESS_FACTOR, DEFAULT_COLOR_FACTOR, DEFAULT_CONTRAST_FACTOR,
    DEFAULT_SCALE_FACTOR, SHARPEN_KERNEL,
};
use crate::error::Result;
use crate::utils::{create_progress_spinner, format_file_size, read_image_file};
use image::{DynamicImage, GenericImageView, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Parameters for the enhancement pipeline.
///
/// All four values are multiplicative: 1.0 leaves the corresponding property
/// unchanged. The library itself does not enforce ranges; the CLI restricts
/// the scale factor to 1-10 and the enhancement factors to 0.0-3.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnhanceOptions {
    pub scale_factor: u32,
    pub color_factor: f32,
    pub brightness_factor: f32,
    pub contrast_factor: f32,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            color_factor: DEFAULT_COLOR_FACTOR,
            brightness_factor: DEFAULT_BRIGHTNESS_FACTOR,
            contrast_factor: DEFAULT_CONTRAST_FACTOR,
        }
    }
}

impl EnhanceOptions {
    pub fn new(
        scale_factor: Option<u32>,
        color_factor: Option<f32>,
        brightness_factor: Option<f32>,
        contrast_factor: Option<f32>,
    ) -> Self {
        Self {
            scale_factor: scale_factor.unwrap_or(DEFAULT_SCALE_FACTOR),
            color_factor: color_factor.unwrap_or(DEFAULT_COLOR_FACTOR),
            brightness_factor: brightness_factor.unwrap_or(DEFAULT_BRIGHTNESS_FACTOR),
            contrast_factor: contrast_factor.unwrap_or(DEFAULT_CONTRAST_FACTOR),
        }
    }

    /// The recommended auto-enhance profile
    pub fn auto() -> Self {
        Self::default()
    }
}

// ITU-R 601 luma, matching an 8-bit grayscale conversion
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000) as u8
}

fn blend(base: f32, value: u8, factor: f32) -> u8 {
    let out = base + factor * (value as f32 - base);
    out.clamp(0.0, 255.0).round() as u8
}

/// Adjust color saturation in place. 0.0 is fully desaturated, 1.0 leaves the
/// image unchanged, values above 1.0 oversaturate. Alpha is untouched.
pub fn adjust_color(img: &mut RgbaImage, factor: f32) {
    for pixel in img.pixels_mut() {
        let gray = luma(pixel[0], pixel[1], pixel[2]) as f32;
        pixel[0] = blend(gray, pixel[0], factor);
        pixel[1] = blend(gray, pixel[1], factor);
        pixel[2] = blend(gray, pixel[2], factor);
    }
}

/// Adjust brightness in place. 0.0 yields black, 1.0 leaves the image
/// unchanged. Alpha is untouched.
pub fn adjust_brightness(img: &mut RgbaImage, factor: f32) {
    for pixel in img.pixels_mut() {
        for i in 0..3 {
            pixel[i] = (pixel[i] as f32 * factor).clamp(0.0, 255.0).round() as u8;
        }
    }
}

/// Adjust contrast in place by blending against the mean luma of the whole
/// image. 0.0 yields a solid gray image, 1.0 leaves it unchanged.
pub fn adjust_contrast(img: &mut RgbaImage, factor: f32) {
    let mean = mean_luma(img);
    for pixel in img.pixels_mut() {
        pixel[0] = blend(mean, pixel[0], factor);
        pixel[1] = blend(mean, pixel[1], factor);
        pixel[2] = blend(mean, pixel[2], factor);
    }
}

// Mean luma over all pixels, rounded to the nearest integer value.
fn mean_luma(img: &RgbaImage) -> f32 {
    let count = (img.width() as u64) * (img.height() as u64);
    if count == 0 {
        return 0.0;
    }
    let sum: u64 = img
        .pixels()
        .map(|p| luma(p[0], p[1], p[2]) as u64)
        .sum();
    ((sum as f64 / count as f64) + 0.5).floor() as f32
}

/// Apply the fixed 3x3 sharpening kernel.
pub fn sharpen(img: &DynamicImage) -> DynamicImage {
    img.filter3x3(&SHARPEN_KERNEL)
}

/// Resample to `(width * scale, height * scale)` with Lanczos3.
pub fn upscale(img: &DynamicImage, scale_factor: u32) -> DynamicImage {
    let (width, height) = img.dimensions();
    img.resize_exact(
        width * scale_factor,
        height * scale_factor,
        image::imageops::FilterType::Lanczos3,
    )
}

/// Run the full enhancement pipeline over one decoded image.
///
/// The steps run in a fixed order: color saturation, brightness, contrast,
/// sharpening, then Lanczos3 upscaling. Enhancement happens at the native
/// resolution; sharpening after upscaling would amplify interpolation
/// artifacts instead.
pub fn auto_enhance_and_upscale(img: &DynamicImage, options: &EnhanceOptions) -> DynamicImage {
    let mut rgba = img.to_rgba8();
    adjust_color(&mut rgba, options.color_factor);
    adjust_brightness(&mut rgba, options.brightness_factor);
    adjust_contrast(&mut rgba, options.contrast_factor);
    let sharpened = sharpen(&DynamicImage::ImageRgba8(rgba));
    upscale(&sharpened, options.scale_factor)
}

/// Decode an image from an in-memory byte stream.
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Encode an image as PNG into an in-memory byte buffer.
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;
    Ok(buf)
}

/// Decode, enhance, and PNG-encode one image held in memory.
pub fn enhance_image_bytes(bytes: &[u8], options: &EnhanceOptions) -> Result<Vec<u8>> {
    let img = load_image_from_bytes(bytes)?;
    let enhanced = auto_enhance_and_upscale(&img, options);
    encode_png(&enhanced)
}

/// Enhance a single image file and write the result as PNG.
pub fn enhance_file(input: &Path, output: &Path, options: &EnhanceOptions) -> Result<()> {
    crate::info!("✨ Enhancing image: {:?}", input);
    crate::info!("📁 Output: {:?}", output);

    if let Some(format) = crate::formats::InputFormat::from_path(input) {
        crate::verbose!("Input format: {} ({})", format, format.mime_type());
    }

    let pb = create_progress_spinner("Loading image...");
    let bytes = read_image_file(input)?;
    let img = load_image_from_bytes(&bytes)?;
    pb.set_message("Enhancing...");

    let enhanced = auto_enhance_and_upscale(&img, options);

    pb.set_message("Encoding PNG...");
    let png = encode_png(&enhanced)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|_| {
                crate::error::EnhanceError::DirectoryCreationFailed(parent.to_path_buf())
            })?;
        }
    }
    fs::write(output, &png)?;
    pb.finish_with_message("✅ Enhancement complete");

    crate::info!(
        "📏 Dimensions: {}x{} -> {}x{}",
        img.width(),
        img.height(),
        enhanced.width(),
        enhanced.height()
    );
    crate::info!(
        "📈 Output size: {} bytes ({})",
        png.len(),
        format_file_size(png.len() as u64)
    );

    Ok(())
}
