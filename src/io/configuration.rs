//! Compile-time defaults for the command-line tool

/// Default output width in pixels
pub const DEFAULT_WIDTH: usize = 300;

/// Default output height in pixels
pub const DEFAULT_HEIGHT: usize = 300;

/// Default path of the synthesized image
pub const DEFAULT_OUTPUT_PATH: &str = "output_image.png";

// Order matters: frontier scheduling and neighbor context both follow it
/// 4-connected neighbor offsets `(dx, dy)`: up, right, down, left
pub const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Version tag written into persisted model files
pub const MODEL_FORMAT_VERSION: u32 = 1;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Pixels colored between progress bar refreshes
pub const PROGRESS_PIXEL_STRIDE: u64 = 1024;

// Visualization settings
/// Number of animation frames targeted for a growth visualization
pub const VISUALIZATION_TARGET_FRAMES: usize = 120;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Color drawn for pixels not yet reached by the growth front
pub const UNSET_PIXEL_COLOR: [u8; 4] = [128, 128, 128, 255];
