use std::path::{Path, PathBuf};

use sc_core::CoreError;
use sc_core::frame::SpriteFrame;
use thiserror::Error;

/// Errors raised while turning a file into a frame. Fatal: the run aborts
/// before any grid work begins.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Source path missing, unreadable, or not a decodable image format.
    #[error("cannot load image {path}: {source}")]
    Load {
        /// Path that failed to decode.
        path: PathBuf,
        /// Decoder error.
        source: image::ImageError,
    },

    /// Decoded buffer did not match its declared dimensions.
    #[error(transparent)]
    Frame(#[from] CoreError),
}

/// Decode a raster image into an RGBA frame.
///
/// Any format the `image` crate is built with is accepted (PNG, JPEG, BMP,
/// GIF). The whole frame is held in memory for the run.
///
/// # Errors
/// Returns [`SourceError::Load`] when the file cannot be read or decoded.
///
/// # Example
/// ```no_run
/// use sc_source::load_sprite;
/// use std::path::Path;
/// let frame = load_sprite(Path::new("sprite.png")).unwrap();
/// ```
pub fn load_sprite(path: &Path) -> Result<SpriteFrame, SourceError> {
    let img = image::open(path).map_err(|source| SourceError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("decoded {} ({width}×{height})", path.display());
    Ok(SpriteFrame::from_raw(rgba.into_raw(), width, height)?)
}
