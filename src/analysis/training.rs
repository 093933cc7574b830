//! Adjacency extraction from source pixel grids

use log::{debug, warn};

use crate::analysis::transitions::TransitionModel;
use crate::spatial::grid::PixelSource;

/// Accumulates look-left and look-up adjacencies from any number of images
///
/// Row 0 and column 0 are never used as the from-pixel, so every recorded
/// pair has both members inside the image.
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    model: TransitionModel,
    images_ingested: usize,
}

impl Trainer {
    /// Start from an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue training an existing model (e.g. one restored from disk)
    pub const fn with_model(model: TransitionModel) -> Self {
        Self {
            model,
            images_ingested: 0,
        }
    }

    /// Record the horizontal and vertical adjacency of every interior pixel
    ///
    /// Returns the number of pairs recorded. Images narrower or shorter than
    /// two pixels contribute nothing.
    pub fn ingest(&mut self, source: &impl PixelSource) -> usize {
        let (width, height) = (source.width(), source.height());
        self.images_ingested += 1;

        if width < 2 || height < 2 {
            warn!("Image of {width}x{height} is too small to contribute adjacencies");
            return 0;
        }

        let mut recorded = 0;
        for x in 1..width {
            for y in 1..height {
                let Some(current) = source.pixel(x, y) else {
                    continue;
                };
                if let Some(left) = source.pixel(x - 1, y) {
                    self.model.record_edge(current, left);
                    recorded += 1;
                }
                if let Some(up) = source.pixel(x, y - 1) {
                    self.model.record_edge(current, up);
                    recorded += 1;
                }
            }
        }

        debug!("Recorded {recorded} adjacencies from {width}x{height} image");
        recorded
    }

    /// Number of images passed to [`Trainer::ingest`]
    pub const fn images_ingested(&self) -> usize {
        self.images_ingested
    }

    /// Model built so far
    pub const fn model(&self) -> &TransitionModel {
        &self.model
    }

    /// Finish training and hand the model over for synthesis
    pub fn into_model(self) -> TransitionModel {
        self.model
    }
}
