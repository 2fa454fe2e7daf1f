// SHUMZU - file-to-image archival and transmission.
//
// Encoding: file bytes -> blocks -> compress -> encrypt? -> QR grid -> PNG.
// Decoding: PNG -> QR grid -> decrypt? -> decompress -> blocks -> file bytes.

use std::process::ExitCode;

use shumzu::cli::Cli;

fn main() -> ExitCode {
    Cli::parse_args().run()
}
