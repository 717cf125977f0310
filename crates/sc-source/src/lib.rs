/// Image decoding for spritescii.
///
/// Turns a raster file on disk into an RGBA [`sc_core::SpriteFrame`] the
/// pipeline can sample.

pub mod image;

pub use image::{SourceError, load_sprite};
