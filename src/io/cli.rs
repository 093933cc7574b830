//! Command-line interface: train on source images, then synthesize one output

use crate::algorithm::synthesis::{Synthesizer, default_seed_position};
use crate::analysis::training::Trainer;
use crate::analysis::transitions::TransitionModel;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_OUTPUT_PATH, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_grid_as_png, load_pixel_grid};
use crate::io::persistence::{load_model, save_model};
use crate::io::progress::ProgressManager;
use crate::io::visualization::GrowthCapture;
use crate::spatial::grid::{Coordinate, PixelGrid};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "markovtile")]
#[command(
    author,
    version,
    about = "Synthesize images from color adjacency statistics of sample images"
)]
/// Command-line arguments for the synthesis tool
pub struct Cli {
    /// Source images to learn color adjacencies from
    #[arg(value_name = "IMAGES")]
    pub inputs: Vec<PathBuf>,

    /// Output width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Output height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Path of the synthesized PNG
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Random seed for reproducible synthesis (drawn from OS entropy if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Column of the first pixel to color (defaults to the center)
    #[arg(long)]
    pub origin_x: Option<usize>,

    /// Row of the first pixel to color (defaults to the center)
    #[arg(long)]
    pub origin_y: Option<usize>,

    /// Previously saved model to start from (repeatable; models are merged)
    #[arg(long, value_name = "PATH")]
    pub load_model: Vec<PathBuf>,

    /// Save the trained model before synthesis
    #[arg(long, value_name = "PATH")]
    pub save_model: Option<PathBuf>,

    /// Write an animated GIF of the growth order
    #[arg(long, value_name = "PATH")]
    pub visualize: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// First pixel to color, defaulting each axis to the center
    pub const fn origin(&self) -> Coordinate {
        let center = default_seed_position(self.width, self.height);
        let x = match self.origin_x {
            Some(x) => x,
            None => center.0,
        };
        let y = match self.origin_y {
            Some(y) => y,
            None => center.1,
        };
        (x, y)
    }

    /// Reject sizes and origins that cannot describe a pixel of the output
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero width or height, or an origin
    /// column or row outside the requested output.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(invalid_parameter("width", &self.width, &"must be at least 1"));
        }
        if self.height == 0 {
            return Err(invalid_parameter("height", &self.height, &"must be at least 1"));
        }
        let (x, y) = self.origin();
        if x >= self.width {
            return Err(invalid_parameter(
                "origin-x",
                &x,
                &format!("must be less than the width {}", self.width),
            ));
        }
        if y >= self.height {
            return Err(invalid_parameter(
                "origin-y",
                &y,
                &format!("must be less than the height {}", self.height),
            ));
        }
        Ok(())
    }
}

/// Runs training, optional model persistence, synthesis and export
pub struct Pipeline {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl Pipeline {
    /// Create a pipeline for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run every stage and write the output image
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` before any file is read if the size or
    /// origin is unusable. Otherwise returns an error if a model or image
    /// cannot be read, the model is empty, or an output file cannot be written.
    pub fn run(&mut self) -> Result<()> {
        let start_time = Instant::now();
        self.cli.validate()?;

        let model = self.train()?;
        let summary = model.summary();
        info!(
            "Model has {} from-colors, {} distinct edges, {} pairs",
            summary.from_colors, summary.distinct_edges, summary.total_pairs
        );

        if let Some(ref path) = self.cli.save_model {
            save_model(&model, path)?;
        }

        let grid = self.synthesize(&model)?;
        export_grid_as_png(&grid, &self.cli.output)?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        info!(
            "Image \"{}\" generated in {:.2?}",
            self.cli.output.display(),
            start_time.elapsed()
        );
        Ok(())
    }

    /// Load saved models and ingest every input image
    ///
    /// # Errors
    ///
    /// Returns an error if a saved model or an input image cannot be read.
    pub fn train(&mut self) -> Result<TransitionModel> {
        let mut base = TransitionModel::new();
        for path in &self.cli.load_model {
            base.merge(&load_model(path)?)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_training(self.cli.inputs.len());
        }

        let mut trainer = Trainer::with_model(base);
        for path in &self.cli.inputs {
            let grid = load_pixel_grid(path)?;
            let recorded = trainer.ingest(&grid);
            info!("Ingested {} ({recorded} adjacencies)", path.display());
            if let Some(ref pm) = self.progress_manager {
                pm.image_ingested(path);
            }
        }

        Ok(trainer.into_model())
    }

    fn synthesize(&mut self, model: &TransitionModel) -> Result<PixelGrid> {
        let (width, height) = (self.cli.width, self.cli.height);
        let seed = self.cli.seed.unwrap_or_else(rand::random);
        info!("Synthesizing {width}x{height} with random seed {seed}");

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_synthesis(width.saturating_mul(height));
        }

        let mut capture = self
            .cli
            .visualize
            .as_ref()
            .map(|_| GrowthCapture::new(width, height));
        let progress = self.progress_manager.as_ref();
        let mut colored = 0usize;

        let mut synthesizer = Synthesizer::new(model, seed);
        let grid =
            synthesizer.synthesize_with_observer(width, height, self.cli.origin(), |position, color| {
                colored += 1;
                if let Some(pm) = progress {
                    pm.update_synthesis(colored);
                }
                if let Some(ref mut capture) = capture {
                    capture.record(position, color);
                }
            })?;

        let stats = synthesizer.stats();
        info!(
            "Colored {} pixels ({} from neighbor context, {} fallback draws)",
            stats.total(),
            stats.conditioned,
            stats.unconditioned
        );

        if let (Some(path), Some(capture)) = (&self.cli.visualize, &capture) {
            capture.export_gif(path, GIF_FRAME_DELAY_MS)?;
            info!("Growth visualization written to {}", path.display());
        }

        Ok(grid)
    }
}
