//! Constants used throughout botfile.

/// Bot configuration file extension (without the dot), as matched by
/// directory discovery.
pub const BOT_FILE_EXTENSION: &str = "bot";
