use std::path::PathBuf;

use crate::palette::Palette;

/// Immutable per-run settings, built by the caller and passed by reference
/// into the pipeline. Nothing here persists between runs.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Source raster image.
    pub image: PathBuf,
    /// Destination text artifact.
    pub destination: PathBuf,
    /// Character ramp used for brightness quantization.
    pub palette: Palette,
    /// Trace an outline around opaque regions.
    pub outline: bool,
}
