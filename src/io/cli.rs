//! Command-line interface for rendering single images or whole directories

use crate::algorithm::renderer::render_with_rng;
use crate::io::color::parse_hex_color;
use crate::io::configuration::{
    DEFAULT_BACKGROUND_HEX, DEFAULT_BLOCK_SIZE, DEFAULT_BRIGHTNESS_BIAS, DEFAULT_EDGE_BOOST,
    DEFAULT_FOREGROUND_HEX, DEFAULT_GAP_PERCENT, DEFAULT_LOCAL_PERCENT, DEFAULT_MIN_BLOCK_SIZE,
    DEFAULT_VARIANCE_THRESHOLD, OUTPUT_EXTENSION, OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, invalid_parameter, invalid_target};
use crate::io::image::{export_png, load_source};
use crate::io::progress::{ProgressManager, RenderedFile};
use crate::io::settings::RenderSettings;
use clap::{ArgAction, Parser};
use image::Rgb;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "pixblock")]
#[command(
    author,
    version,
    about = "Render images as adaptive pixel blocks"
)]
/// Command-line arguments for the pixel-block renderer
// Flags map one-to-one onto user settings and output behaviour
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory of images to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output PNG path (single-file targets only)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Base block size in pixels
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: u32,

    /// Gap between blocks, percent of the block side (0-50)
    #[arg(short, long, default_value_t = DEFAULT_GAP_PERCENT)]
    pub gap: u32,

    /// Weight of local over global brightness, percent (0-100)
    #[arg(short, long, default_value_t = DEFAULT_LOCAL_PERCENT)]
    pub local: u32,

    /// Edge strength that forces a block to the foreground color
    #[arg(short, long, default_value_t = DEFAULT_EDGE_BOOST)]
    pub edge: f64,

    /// Luminance variance above which a block is subdivided
    #[arg(long, default_value_t = DEFAULT_VARIANCE_THRESHOLD)]
    pub variance: f64,

    /// Smallest block size in pixels
    #[arg(short, long, default_value_t = DEFAULT_MIN_BLOCK_SIZE)]
    pub min_block: u32,

    /// Offset added to the brightness threshold
    #[arg(long, default_value_t = DEFAULT_BRIGHTNESS_BIAS, allow_hyphen_values = true)]
    pub bias: f64,

    /// Swap foreground and background classification
    #[arg(short, long)]
    pub invert: bool,

    /// Foreground block color (#rrggbb or #rgb)
    #[arg(short, long, default_value = DEFAULT_FOREGROUND_HEX, value_parser = parse_color_arg)]
    pub color: Rgb<u8>,

    /// Background color (#rrggbb or #rgb)
    #[arg(long, default_value = DEFAULT_BACKGROUND_HEX, value_parser = parse_color_arg)]
    pub background: Rgb<u8>,

    /// Seed for reproducible speckle placement
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log detail (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_color_arg(value: &str) -> std::result::Result<Rgb<u8>, String> {
    parse_hex_color(value).map_err(|e| e.to_string())
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Render settings described by the arguments
    pub const fn settings(&self) -> RenderSettings {
        RenderSettings {
            block_size: self.block_size,
            gap_percent: self.gap,
            local_percent: self.local,
            edge_boost: self.edge,
            variance_threshold: self.variance,
            min_block_size: self.min_block,
            brightness_bias: self.bias,
            invert: self.invert,
            foreground: self.color,
            background: self.background,
        }
    }
}

/// Orchestrates batch rendering of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    rng: StdRng,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let rng = cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            cli,
            rng,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation fails or any file cannot be
    /// loaded, rendered or written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let files = self.collect_files()?;

        if files.is_empty() {
            log::info!("nothing to render in {}", self.cli.target.display());
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut written = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            written.push(self.process_file(file, index)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    /// Input files selected by the target, skipping those already rendered
    ///
    /// # Errors
    ///
    /// Returns an error if the target is missing, is an unsupported file, or
    /// an output path is given for a directory target
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if !is_supported_image(target) {
                return Err(invalid_target(
                    target.clone(),
                    &format!("expected one of: {}", SUPPORTED_EXTENSIONS.join(", ")),
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                Vec::new()
            })
        } else if target.is_dir() {
            if self.cli.output.is_some() {
                return Err(invalid_parameter(
                    "output",
                    &target.display(),
                    &"an output path can only be used with a single input file",
                ));
            }

            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if path.is_file()
                    && is_supported_image(&path)
                    && !is_rendered_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_target(
                target.clone(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path_for(input_path);
        if output_path.exists() {
            log::warn!("skipping {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<PathBuf> {
        let start_time = Instant::now();
        let output_path = self.output_path_for(input_path);

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let source = load_source(input_path)?;
        let params = self.cli.settings().snapshot();
        let rendering = render_with_rng(&source, &params, &mut self.rng);

        export_png(&rendering.image, &output_path)?;

        log::info!(
            "{} -> {} ({}x{}, {} blocks)",
            input_path.display(),
            output_path.display(),
            rendering.image.width(),
            rendering.image.height(),
            rendering.stats.terminal_blocks
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(
                input_path,
                &RenderedFile {
                    width: rendering.image.width(),
                    height: rendering.image.height(),
                    blocks: rendering.stats.terminal_blocks,
                    elapsed: start_time.elapsed(),
                },
            );
        }

        Ok(output_path)
    }

    fn output_path_for(&self, input_path: &Path) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| output_path(input_path))
    }
}

/// Default output path: `<stem>_pixel.png` next to the input
pub fn output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!(
        "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
        stem.to_string_lossy()
    );

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Whether the file extension is one of the supported image formats
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

// Keeps directory runs from re-rendering their own results
fn is_rendered_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
