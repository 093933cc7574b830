//! Terminal progress display for training and synthesis

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_PIXEL_STRIDE};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static TRAINING_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "Training   [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static SYNTHESIS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Synthesis [{{bar:{PROGRESS_BAR_WIDTH}.green/blue}}] {{pos}}/{{len}} px"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bars for the two pipeline phases
pub struct ProgressManager {
    multi_progress: MultiProgress,
    training_bar: Option<ProgressBar>,
    synthesis_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            training_bar: None,
            synthesis_bar: None,
        }
    }

    /// Show a bar counting ingested source images
    pub fn start_training(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(TRAINING_STYLE.clone());
        self.training_bar = Some(self.multi_progress.add(bar));
    }

    /// Advance the training bar after `path` has been ingested
    pub fn image_ingested(&self, path: &Path) {
        if let Some(ref bar) = self.training_bar {
            bar.set_message(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
            bar.inc(1);
        }
    }

    /// Show a bar counting colored pixels
    pub fn start_synthesis(&mut self, total_pixels: usize) {
        if let Some(ref bar) = self.training_bar {
            bar.finish_with_message("done");
        }
        let bar = ProgressBar::new(total_pixels as u64);
        bar.set_style(SYNTHESIS_STYLE.clone());
        self.synthesis_bar = Some(self.multi_progress.add(bar));
    }

    /// Report the number of pixels colored so far
    ///
    /// Redraws every `PROGRESS_PIXEL_STRIDE` pixels and on the final pixel.
    pub fn update_synthesis(&self, colored: usize) {
        if let Some(ref bar) = self.synthesis_bar {
            let colored = colored as u64;
            if colored % PROGRESS_PIXEL_STRIDE == 0 || bar.length() == Some(colored) {
                bar.set_position(colored);
            }
        }
    }

    /// Position of the synthesis bar, if one is active
    pub fn synthesis_position(&self) -> Option<u64> {
        self.synthesis_bar.as_ref().map(ProgressBar::position)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.synthesis_bar {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }
}
