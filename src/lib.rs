//! SHUMZU - file-to-image archival and transmission.
//!
//! Transforms an arbitrary byte file into a single composite raster image
//! (a "keymaster") made of a grid of QR codes, and reconstructs the
//! original file from that image, under authenticated encryption and
//! whole-file integrity verification.
//!
//! - SHA3-256 content hashing
//! - Brotli + Zstandard two-stage compression
//! - Argon2id key derivation, AES-256-GCM per-block sealing
//! - Parallel block processing via `rayon`

pub mod block;
pub mod cli;
pub mod compression;
pub mod config;
pub mod crypto;
pub mod envelope;
pub mod error;
pub mod file;
pub mod hash;
pub mod logging;
pub mod matrix;
pub mod pipeline;
pub mod processor;
pub mod qr;
pub mod reassemble;
pub mod types;
pub mod ui;
