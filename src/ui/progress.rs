//! A thin, styled wrapper around `indicatif::ProgressBar` for the per-block
//! worker stage of encode/decode.

use indicatif::{ProgressBar as Bar, ProgressStyle as Style};

/// Template for the block-count progress bar.
const PROGRESS_TEMPLATE: &str = "{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len} blocks ({eta})";

/// A progress bar tracking blocks processed, not bytes — the per-block
/// pipeline stage reports completion one block at a time regardless of
/// block size.
pub struct ProgressBar {
    bar: Bar,
}

impl ProgressBar {
    /// Creates a progress bar for `total` blocks, labeled with `description`.
    pub fn new(total: u64, description: &str) -> Self {
        let bar = Bar::new(total);
        if let Ok(style) = Style::with_template(PROGRESS_TEMPLATE) {
            bar.set_style(style.progress_chars("\u{25cf}\u{25cb} "));
        }
        bar.set_message(description.to_owned());
        Self { bar }
    }

    /// Advances the bar by one completed block.
    #[inline]
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Suspends the bar for the duration of `f`, so interleaved log lines or
    /// prompts don't corrupt its rendering.
    pub fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        self.bar.suspend(f)
    }

    /// Marks the bar complete.
    #[inline]
    pub fn finish(&self) {
        self.bar.finish();
    }
}

impl Drop for ProgressBar {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_with_message("Done");
        }
    }
}
