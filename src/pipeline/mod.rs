//! Orchestrates the encode and decode flows over a `rayon` worker pool.
//!
//! Each per-block transform chain (compress → encrypt? → envelope / base64
//! → decrypt? → decompress) is a pure function from owned bytes to owned
//! bytes, fanned out with `rayon`'s `par_iter` and fanned back in by
//! collecting into a `Vec`. Unlike a streaming file codec, every block here
//! is already resident in memory — there is no unbounded source to chunk
//! through a channel, so a single `map`/`collect` over the block list is
//! the whole pipeline; no separate reader/writer threads are needed.

pub mod decode;
pub mod encode;
