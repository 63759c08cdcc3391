pub mod batch;
pub mod cli;
pub mod constants;
pub mod enhance;
pub mod error;
pub mod formats;
pub mod logger;
pub mod utils;

pub use batch::{batch_enhance_files, collect_image_files, process_images, NamedImage};
pub use enhance::{
    auto_enhance_and_upscale, encode_png, enhance_file, enhance_image_bytes,
    load_image_from_bytes, EnhanceOptions,
};
pub use error::{EnhanceError, Result};
pub use formats::InputFormat;
pub use utils::is_image_file;
