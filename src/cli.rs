use crate::constants::{
    MAX_ENHANCE_FACTOR, MAX_SCALE_FACTOR, MIN_ENHANCE_FACTOR, MIN_SCALE_FACTOR,
};
use crate::enhance::EnhanceOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-enhance",
    about = "An image auto-enhancement and upscaling tool with batch zip packaging",
    long_about = "img-enhance applies a fixed enhancement pipeline (color saturation, brightness, \
                  contrast, sharpening) followed by Lanczos3 upscaling to one or more images. \
                  A single input produces a PNG file; multiple inputs are packaged into a zip \
                  archive with one PNG entry per input, named after the original file.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    img-enhance enhance photo.jpg\n  \
    img-enhance enhance photo.jpg enhanced.png -s 4 --color 1.8\n  \
    img-enhance batch ./photos -o enhanced_images.zip -r\n  \
    img-enhance batch \"shots/*.png\" extra.jpg --auto"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short = 'q', long, global = true, help = "Suppress informational output")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Show verbose progress information")]
    pub verbose: bool,
}

/// Enhancement parameters shared by both subcommands. The ranges mirror the
/// bounds the original sliders enforce; the library itself does not check.
#[derive(clap::Args)]
pub struct EnhanceFlags {
    #[arg(
        short = 's',
        long,
        help = "Upscale factor (1-10, default: 2)",
        long_help = "Multiplier applied independently to width and height during resampling. \
                     A factor of 1 keeps the original dimensions.",
        value_parser = clap::value_parser!(u32).range(MIN_SCALE_FACTOR as i64..=MAX_SCALE_FACTOR as i64)
    )]
    pub scale: Option<u32>,

    #[arg(
        long,
        help = "Color saturation factor (0.0-3.0, default: 1.5)",
        long_help = "Multiplicative saturation adjustment. 0.0 fully desaturates, \
                     1.0 leaves colors unchanged, values above 1.0 oversaturate.",
        value_parser = parse_enhance_factor
    )]
    pub color: Option<f32>,

    #[arg(
        long,
        help = "Brightness factor (0.0-3.0, default: 1.2)",
        long_help = "Multiplicative brightness adjustment. 0.0 yields black, \
                     1.0 leaves the image unchanged.",
        value_parser = parse_enhance_factor
    )]
    pub brightness: Option<f32>,

    #[arg(
        long,
        help = "Contrast factor (0.0-3.0, default: 1.3)",
        long_help = "Multiplicative contrast adjustment around the image's mean luminance. \
                     0.0 yields solid gray, 1.0 leaves the image unchanged.",
        value_parser = parse_enhance_factor
    )]
    pub contrast: Option<f32>,

    #[arg(
        short = 'a',
        long,
        help = "Use the recommended auto-enhance profile",
        long_help = "Ignore --color/--brightness/--contrast and apply the fixed auto-enhance \
                     profile (color 1.5, brightness 1.2, contrast 1.3)."
    )]
    pub auto: bool,
}

impl EnhanceFlags {
    pub fn to_options(&self) -> EnhanceOptions {
        if self.auto {
            EnhanceOptions::new(self.scale, None, None, None)
        } else {
            EnhanceOptions::new(self.scale, self.color, self.brightness, self.contrast)
        }
    }
}

pub fn parse_enhance_factor(s: &str) -> std::result::Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;
    if !(MIN_ENHANCE_FACTOR..=MAX_ENHANCE_FACTOR).contains(&value) {
        return Err(format!(
            "factor must be between {:.1} and {:.1}",
            MIN_ENHANCE_FACTOR, MAX_ENHANCE_FACTOR
        ));
    }
    Ok(value)
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Enhance and upscale a single image",
        long_about = "Enhance a single image and write the result as PNG. \
                      The output path defaults to enhanced_image.png."
    )]
    Enhance {
        #[arg(help = "Input image file path")]
        input: PathBuf,

        #[arg(help = "Output PNG path (default: enhanced_image.png)")]
        output: Option<PathBuf>,

        #[command(flatten)]
        flags: EnhanceFlags,
    },

    #[command(
        about = "Enhance multiple images into a zip archive",
        long_about = "Enhance every input image and package the PNG-encoded results into a \
                      single zip archive, one entry per input named after the original file. \
                      Inputs may be files, directories, or glob patterns. \
                      The archive path defaults to enhanced_images.zip."
    )]
    Batch {
        #[arg(
            num_args = 1..,
            required = true,
            help = "Input files, directories, or glob patterns",
            long_help = "One or more inputs. Directories are scanned for supported image files \
                         (non-recursively unless --recursive is given); glob patterns are \
                         expanded. Examples: './photos', '*.jpg', 'shots/*.{png}'"
        )]
        inputs: Vec<String>,

        #[arg(
            short = 'o',
            long,
            help = "Output zip archive path (default: enhanced_images.zip)"
        )]
        output: Option<PathBuf>,

        #[arg(short = 'r', long, help = "Scan directories recursively")]
        recursive: bool,

        #[command(flatten)]
        flags: EnhanceFlags,
    },
}
