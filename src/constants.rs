pub const DEFAULT_SCALE_FACTOR: u32 = 2;
pub const MIN_SCALE_FACTOR: u32 = 1;
pub const MAX_SCALE_FACTOR: u32 = 10;

pub const DEFAULT_COLOR_FACTOR: f32 = 1.5;
pub const DEFAULT_BRIGHTNESS_FACTOR: f32 = 1.2;
pub const DEFAULT_CONTRAST_FACTOR: f32 = 1.3;

pub const MIN_ENHANCE_FACTOR: f32 = 0.0;
pub const MAX_ENHANCE_FACTOR: f32 = 3.0;

/// 3x3 sharpening kernel, pre-divided by its scale of 16.
pub const SHARPEN_KERNEL: [f32; 9] = [
    -0.125, -0.125, -0.125, //
    -0.125, 2.0, -0.125, //
    -0.125, -0.125, -0.125,
];

pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;
pub const MAX_IMAGE_DIMENSION: u32 = 20_000;

pub const DEFAULT_SINGLE_OUTPUT: &str = "enhanced_image.png";
pub const DEFAULT_ARCHIVE_OUTPUT: &str = "enhanced_images.zip";

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";
