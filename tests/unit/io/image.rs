//! Tests for image decoding into pixel grids and PNG export

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
    use markovtile::io::image::{
        export_grid_as_png, grid_to_rgba_image, load_pixel_grid, pixel_grid_from_image,
    };
    use markovtile::spatial::color::Color;
    use markovtile::spatial::grid::{PixelGrid, PixelSink, PixelSource};

    // Tests RGB images gain an opaque alpha channel
    // Verified by defaulting alpha to 0
    #[test]
    fn test_rgb_image_canonicalized() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([10, 20, 30]));
        img.put_pixel(1, 0, Rgb([40, 50, 60]));

        let grid = pixel_grid_from_image(&DynamicImage::ImageRgb8(img));

        assert_eq!(grid.pixel(0, 0), Some(Color::new(10, 20, 30, 255)));
        assert_eq!(grid.pixel(1, 0), Some(Color::new(40, 50, 60, 255)));
    }

    // Tests RGBA images pass through unchanged
    #[test]
    fn test_rgba_image_unchanged() {
        let mut img = RgbaImage::new(1, 2);
        img.put_pixel(0, 1, Rgba([1, 2, 3, 4]));

        let grid = pixel_grid_from_image(&DynamicImage::ImageRgba8(img));

        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.pixel(0, 1), Some(Color::new(1, 2, 3, 4)));
        assert_eq!(grid.pixel(0, 0), Some(Color::new(0, 0, 0, 0)));
    }

    // Tests grayscale images expand to opaque gray
    #[test]
    fn test_grayscale_image_expanded() {
        let mut img = GrayImage::new(1, 1);
        img.put_pixel(0, 0, Luma([90]));

        let grid = pixel_grid_from_image(&DynamicImage::ImageLuma8(img));

        assert_eq!(grid.pixel(0, 0), Some(Color::new(90, 90, 90, 255)));
    }

    // Tests exported PNG reloads to the same grid
    // Verified by disabling file save operation
    #[test]
    fn test_export_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.png");
        let grid = PixelGrid::from_rows(&[
            vec![Color::rgb(255, 0, 0), Color::new(0, 255, 0, 128)],
            vec![Color::rgb(0, 0, 255), Color::rgb(9, 9, 9)],
        ])
        .unwrap();

        export_grid_as_png(&grid, &path).unwrap();

        assert!(path.exists(), "PNG file should be created");
        assert_eq!(load_pixel_grid(&path).unwrap(), grid);
    }

    // Tests exporting an empty grid fails
    // Verified by ignoring empty grid check
    #[test]
    fn test_export_empty_grid_error() {
        let dir = tempfile::tempdir().unwrap();
        let grid = PixelGrid::filled(0, 0, Color::rgb(0, 0, 0));

        let result = export_grid_as_png(&grid, &dir.path().join("empty.png"));

        assert!(result.is_err(), "Should fail when the grid has no pixels");
    }

    // Tests loading a missing file reports the path
    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");

        let error = load_pixel_grid(&path).unwrap_err();

        assert!(error.to_string().contains("missing.png"));
    }

    // Tests rendering keeps coordinates
    #[test]
    fn test_grid_to_rgba_image() {
        let mut grid = PixelGrid::filled(3, 2, Color::rgb(0, 0, 0));
        assert!(grid.put_pixel(2, 1, Color::rgb(7, 8, 9)));

        let img = grid_to_rgba_image(&grid);

        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1), &Rgba([7, 8, 9, 255]));
    }
}
