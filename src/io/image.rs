//! Decoding source images into pixel grids and PNG export of results

use std::path::Path;

use image::{DynamicImage, ImageBuffer, Pixel, RgbaImage};
use ndarray::Array2;

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::color::Color;
use crate::spatial::grid::{PixelGrid, PixelSource};

/// Load an image file and canonicalize every pixel to RGBA
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded.
pub fn load_pixel_grid(path: &Path) -> Result<PixelGrid> {
    let img = image::open(path).map_err(|e| AlgorithmError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(pixel_grid_from_image(&img))
}

/// Convert a decoded image into a pixel grid
///
/// 8-bit RGB and RGBA pixels are canonicalized channel by channel; other
/// layouts (grayscale, 16-bit, float) are first expanded to 8-bit RGBA by the decoder.
pub fn pixel_grid_from_image(img: &DynamicImage) -> PixelGrid {
    match img {
        DynamicImage::ImageRgb8(buffer) => grid_from_buffer(buffer),
        DynamicImage::ImageRgba8(buffer) => grid_from_buffer(buffer),
        // Gray layouts come back with the luma copied into R, G and B, and
        // 16-bit or float layouts are scaled down to 8 bits.
        other => grid_from_buffer(&other.to_rgba8()),
    }
}

fn grid_from_buffer<P>(buffer: &ImageBuffer<P, Vec<u8>>) -> PixelGrid
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = (buffer.width() as usize, buffer.height() as usize);
    let mut pixels = Array2::from_elem((height, width), Color::new(0, 0, 0, 0));
    for (x, y, pixel) in buffer.enumerate_pixels() {
        if let Some(slot) = pixels.get_mut([y as usize, x as usize]) {
            *slot = Color::from_channels(pixel.channels());
        }
    }
    PixelGrid::from_array(pixels)
}

/// Render a pixel grid as an RGBA image buffer
pub fn grid_to_rgba_image(grid: &PixelGrid) -> RgbaImage {
    let mut img = RgbaImage::new(grid.width() as u32, grid.height() as u32);
    for (x, y, color) in grid.enumerate() {
        img.put_pixel(x as u32, y as u32, color.into());
    }
    img
}

/// Export a pixel grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no pixels
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &PixelGrid, output_path: &Path) -> Result<()> {
    if grid.is_empty() {
        return Err(AlgorithmError::InvalidSourceData {
            reason: "Cannot export an image with no pixels".to_string(),
        });
    }

    ensure_parent_dir(output_path)?;

    grid_to_rgba_image(grid)
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Create the parent directory of `path` if it has one
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })
        }
        _ => Ok(()),
    }
}
