//! Rendering constants and user-setting defaults

// Working raster
/// Longest side of the working raster; larger sources are scaled down
pub const MAX_WORKING_DIMENSION: u32 = 1200;

// Defaults applied by a settings reset
/// Default base block size in pixels
pub const DEFAULT_BLOCK_SIZE: u32 = 12;
/// Default gap between blocks, in percent of the block side
pub const DEFAULT_GAP_PERCENT: u32 = 12;
/// Default weight of local brightness against global brightness, in percent
pub const DEFAULT_LOCAL_PERCENT: u32 = 80;
/// Default gradient magnitude above which a block is forced to foreground
pub const DEFAULT_EDGE_BOOST: f64 = 18.0;
/// Default luminance variance above which a block subdivides
pub const DEFAULT_VARIANCE_THRESHOLD: f64 = 30.0;
/// Default smallest block side the decomposer may stop subdividing at
pub const DEFAULT_MIN_BLOCK_SIZE: u32 = 4;
/// Default offset added to the classification threshold
pub const DEFAULT_BRIGHTNESS_BIAS: f64 = 0.0;
/// Default foreground color
pub const DEFAULT_FOREGROUND: [u8; 3] = [0xff, 0x5a, 0x00];
/// Default foreground color as accepted on the command line
pub const DEFAULT_FOREGROUND_HEX: &str = "#ff5a00";
/// Default background color
pub const DEFAULT_BACKGROUND: [u8; 3] = [0xff, 0xff, 0xff];
/// Default background color as accepted on the command line
pub const DEFAULT_BACKGROUND_HEX: &str = "#ffffff";
/// Color used when an empty color string is supplied
pub const FALLBACK_FOREGROUND: [u8; 3] = [255, 90, 0];

// Clamping contract for settings entering the core
/// Smallest block size or minimum block size accepted
pub const MIN_BLOCK_FLOOR: u32 = 2;
/// Largest gap fraction accepted
pub const MAX_GAP_FRACTION: f64 = 0.5;

// Speckle texture
/// Block area per speckle dot
pub const SPECKLE_AREA_DIVISOR: u32 = 60;
/// A block must exceed this side length in either dimension to be speckled
pub const SPECKLE_MIN_SIDE: u32 = 4;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_pixel";
/// Extension of every exported raster
pub const OUTPUT_EXTENSION: &str = "png";
/// Input extensions picked up when processing a directory
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "webp", "gif", "bmp", "tif", "tiff"];

// Progress display
/// Batches larger than this show an overall bar next to the per-file spinner
pub const MAX_UNBATCHED_FILES: usize = 5;
