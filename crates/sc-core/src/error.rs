use thiserror::Error;

/// Errors originating from the core types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Palette selector outside the closed enumeration.
    #[error("unknown palette selector: {index} (valid: 0..=4)")]
    InvalidSelector {
        /// The out-of-range index that was supplied.
        index: usize,
    },

    /// Pixel buffer does not match the declared width/height.
    #[error("invalid frame dimensions: {width}×{height} for {bytes} bytes")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
        /// Length of the supplied RGBA buffer.
        bytes: usize,
    },
}
