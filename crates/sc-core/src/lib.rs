/// Shared types for the spritescii workspace.
///
/// This crate contains the palette registry, the RGBA sprite frame with its
/// perceived-brightness sampler, the character grid the pipeline mutates,
/// and the per-run configuration.

pub mod config;
pub mod error;
pub mod frame;
pub mod grid;
pub mod palette;

pub use config::RunConfig;
pub use error::CoreError;
pub use frame::SpriteFrame;
pub use grid::{Cell, CharGrid};
pub use palette::Palette;
