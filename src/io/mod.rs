/// Command-line interface and batch file processing
pub mod cli;
/// Hex color parsing
pub mod color;
/// Constants and setting defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image loading and PNG export
pub mod image;
/// Logger initialisation
pub mod logging;
/// Batch progress display
pub mod progress;
/// User-facing settings and their clamping into render parameters
pub mod settings;
