//! Terminal progress for batch renders
//!
//! One spinner line follows the image being rendered. Batches larger than
//! [`MAX_UNBATCHED_FILES`] also get an overall counter bar above it.

use crate::io::configuration::MAX_UNBATCHED_FILES;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static CURRENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::with_template("{spinner:.yellow} {prefix:.dim} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("▖▘▝▗ ")
});

static OVERALL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::with_template("{elapsed:>4} {bar:36.yellow/white} {pos}/{len} images")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("■□ ")
});

/// Summary of one rendered image shown on the progress line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedFile {
    /// Working raster width
    pub width: u32,
    /// Working raster height
    pub height: u32,
    /// Blocks painted
    pub blocks: usize,
    /// Wall time of load, render and export
    pub elapsed: Duration,
}

/// Progress display over a batch of images
pub struct ProgressManager {
    lines: MultiProgress,
    overall: Option<ProgressBar>,
    current: Option<ProgressBar>,
    total: usize,
    done: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an idle display
    pub fn new() -> Self {
        Self {
            lines: MultiProgress::new(),
            overall: None,
            current: None,
            total: 0,
            done: 0,
        }
    }

    /// Set up the bars for a batch of `total` images
    pub fn initialize(&mut self, total: usize) {
        self.total = total;
        self.done = 0;

        self.overall = (total > MAX_UNBATCHED_FILES).then(|| {
            let bar = self.lines.add(ProgressBar::new(total as u64));
            bar.set_style(OVERALL_STYLE.clone());
            bar
        });

        let current = self.lines.add(ProgressBar::new_spinner());
        current.set_style(CURRENT_STYLE.clone());
        self.current = Some(current);
    }

    /// Show the image at `index` as in progress
    pub fn start_file(&self, index: usize, path: &Path) {
        if let Some(ref current) = self.current {
            current.set_prefix(format!("{}/{}", index + 1, self.total));
            current.set_message(file_label(path));
            current.enable_steady_tick(Duration::from_millis(120));
        }
    }

    /// Mark `path` as rendered
    pub fn complete_file(&mut self, path: &Path, rendered: &RenderedFile) {
        self.done += 1;
        if let Some(ref overall) = self.overall {
            overall.inc(1);
        }
        if let Some(ref current) = self.current {
            current.set_message(format!(
                "{} {}x{}, {} blocks in {} ms",
                file_label(path),
                rendered.width,
                rendered.height,
                rendered.blocks,
                rendered.elapsed.as_millis()
            ));
        }
    }

    /// Images completed since the last [`initialize`](Self::initialize)
    pub const fn completed(&self) -> usize {
        self.done
    }

    /// Remove the bars from the terminal
    pub fn finish(&self) {
        if let Some(ref current) = self.current {
            current.finish_and_clear();
        }
        if let Some(ref overall) = self.overall {
            overall.finish();
        }
        let _ = self.lines.clear();
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
