use clap::Parser;
use img_enhance::cli::{Args, Commands};
use img_enhance::constants::{DEFAULT_ARCHIVE_OUTPUT, DEFAULT_SINGLE_OUTPUT};
use img_enhance::error::Result;
use img_enhance::{batch_enhance_files, enhance_file, logger};
use std::path::PathBuf;
use std::process;

fn main() {
    let args = Args::parse();

    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    if let Err(e) = run(args.command) {
        img_enhance::error!("{}", e);
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Enhance {
            input,
            output,
            flags,
        } => {
            let options = flags.to_options();
            let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_SINGLE_OUTPUT));
            enhance_file(&input, &output, &options)?;
        }
        Commands::Batch {
            inputs,
            output,
            recursive,
            flags,
        } => {
            let options = flags.to_options();
            let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_ARCHIVE_OUTPUT));
            batch_enhance_files(&inputs, &output, &options, recursive)?;
        }
    }

    Ok(())
}
