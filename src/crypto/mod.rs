//! Cryptographic primitives: Argon2id key derivation and AES-256-GCM sealing.

pub mod cipher;
pub mod derive;

pub use cipher::{open, seal};
pub use derive::{derive_key, generate_salt};
