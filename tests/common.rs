use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Build a small gradient image so enhancement has real structure to work on.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let r = ((x * 255) / width.max(1)) as u8;
        let g = ((y * 255) / height.max(1)) as u8;
        let b = ((x + y) % 256) as u8;
        Rgba([r, g, b, 255])
    });
    DynamicImage::ImageRgba8(img)
}

/// Encode an image into an in-memory byte stream of the given format.
/// JPEG has no alpha channel, so the image is flattened to RGB first.
pub fn encode_image(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    match format {
        ImageFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
            rgb.write_to(&mut Cursor::new(&mut buf), format).unwrap();
        }
        _ => {
            img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
        }
    }
    buf
}

/// Write a gradient test image file into `dir` and return its path.
pub fn write_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let format = match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some("png") => ImageFormat::Png,
        Some("jpg") | Some("jpeg") => ImageFormat::Jpeg,
        Some("bmp") => ImageFormat::Bmp,
        Some("gif") => ImageFormat::Gif,
        Some("webp") => ImageFormat::WebP,
        _ => ImageFormat::Png,
    };
    let path = dir.join(name);
    std::fs::write(&path, encode_image(&gradient_image(width, height), format)).unwrap();
    path
}
