//! Animated GIF of the order in which pixels were colored

use std::path::Path;

use crate::io::configuration::{
    UNSET_PIXEL_COLOR, VIEWER_MIN_FRAME_DELAY_MS, VISUALIZATION_TARGET_FRAMES,
};
use crate::io::error::{AlgorithmError, Result};
use crate::io::image::ensure_parent_dir;
use crate::spatial::color::Color;
use crate::spatial::grid::Coordinate;
use image::{Frame, Rgba, RgbaImage};

/// Records colored pixels in growth order
///
/// Feed it from the synthesis observer, then export once synthesis is done.
pub struct GrowthCapture {
    width: usize,
    height: usize,
    placements: Vec<(Coordinate, Color)>,
}

impl GrowthCapture {
    /// Create an empty capture for a `width` × `height` output
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            placements: Vec::with_capacity(width.saturating_mul(height)),
        }
    }

    /// Record that `position` received `color`
    pub fn record(&mut self, position: Coordinate, color: Color) {
        self.placements.push((position, color));
    }

    /// Returns the total number of recorded pixels
    pub const fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Placements in the order they were recorded
    pub fn placements(&self) -> &[(Coordinate, Color)] {
        &self.placements
    }

    /// Number of placements drawn between consecutive frames
    ///
    /// Aims for about `VISUALIZATION_TARGET_FRAMES` frames, and keeps fewer
    /// frames when the requested delay is shorter than viewers honor.
    pub fn placements_per_frame(&self, frame_delay_ms: u32) -> usize {
        let base = self
            .placements
            .len()
            .div_ceil(VISUALIZATION_TARGET_FRAMES)
            .max(1);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };
        base * skip_factor
    }

    /// Export the growth as an animated GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No pixels were recorded
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.placements.is_empty() {
            return Err(AlgorithmError::InvalidSourceData {
                reason: "No pixels captured for visualization".to_string(),
            });
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let frames = self.generate_frames(
            self.placements_per_frame(frame_delay_ms),
            effective_delay_ms,
        );

        ensure_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).map_err(|e| AlgorithmError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AlgorithmError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, per_frame: usize, delay_ms: u32) -> Vec<Frame> {
        let mut canvas = RgbaImage::from_pixel(
            self.width as u32,
            self.height as u32,
            Rgba(UNSET_PIXEL_COLOR),
        );
        let mut frames = Vec::new();

        for chunk in self.placements.chunks(per_frame) {
            for &((x, y), color) in chunk {
                if let Some(pixel) = canvas.get_pixel_mut_checked(x as u32, y as u32) {
                    *pixel = color.into();
                }
            }
            frames.push(frame(canvas.clone(), delay_ms));
        }

        // Hold the finished image on screen
        frames.push(frame(canvas, delay_ms * 25));
        frames
    }
}

fn frame(img: RgbaImage, delay_ms: u32) -> Frame {
    Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
}
