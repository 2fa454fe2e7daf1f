//! Command-line argument parsing and dispatch.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::config::DEFAULT_BLOCK_SIZE;
use crate::processor::{self, DecodeOptions, EncodeOptions};

/// Archive a file into a grid of QR codes, or reconstruct it from one.
#[derive(Parser)]
#[command(name = "shumzu")]
#[command(version)]
#[command(about = "SHUMZU: archive a file into a grid of QR codes and reconstruct it from the composite image.")]
pub struct Cli {
    /// Source file (encode) or composite PNG (decode).
    #[arg(short, long)]
    pub file: PathBuf,

    /// Switch to decode mode.
    #[arg(short, long)]
    pub decode: bool,

    /// Output PNG path (encode mode only).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory (decode mode only).
    ///
    /// Clap's derive `short` is a single character, so the two-letter
    /// `-of`/`-bs` forms from the reference CLI surface are exposed as
    /// long-only flags here instead.
    #[arg(long = "output_folder", value_name = "DIR")]
    pub output_folder: Option<PathBuf>,

    /// Password; if omitted in encode mode, prompt interactively (empty =
    /// no encryption); if omitted in decode mode, attempt no-password first
    /// then prompt only if the scan suggests the blocks are encrypted.
    #[arg(short, long)]
    pub password: Option<String>,

    /// Payload block size in bytes.
    #[arg(long = "block_size", default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: usize,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parses `std::env::args`.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Dispatches to the encode or decode processor and maps the result to
    /// a process exit code, printing only the error's one-line `Display`.
    pub fn run(self) -> ExitCode {
        crate::logging::init(self.verbose);

        let result = if self.decode {
            processor::decode(DecodeOptions { input: self.file, output_folder: self.output_folder, password: self.password }).map(|_| ())
        } else {
            processor::encode(EncodeOptions { input: self.file, output: self.output, password: self.password, block_size: self.block_size }).map(|_| ())
        };

        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        }
    }
}
