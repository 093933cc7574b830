//! File formats, command line, progress and error handling

/// Command-line parsing and the end-to-end pipeline
pub mod cli;
/// Compile-time defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Image decoding and PNG export
pub mod image;
/// Model save and load
pub mod persistence;
/// Terminal progress bars
pub mod progress;
/// Growth-order GIF export
pub mod visualization;
