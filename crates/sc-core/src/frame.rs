use crate::error::CoreError;

/// Decoded sprite held in memory for the duration of one run.
///
/// Stores pixels as RGBA row-major, 4 bytes per pixel.
///
/// # Example
/// ```
/// use sc_core::frame::SpriteFrame;
/// let frame = SpriteFrame::new(10, 10);
/// assert_eq!(frame.data.len(), 400);
/// ```
#[derive(Debug)]
pub struct SpriteFrame {
    /// RGBA pixels, row-major, 4 bytes per pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SpriteFrame {
    /// Create a zeroed (fully transparent) frame at the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; (width * height * 4) as usize],
            width,
            height,
        }
    }

    /// Wrap a decoded RGBA buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] when the buffer length does
    /// not equal `width * height * 4`.
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Result<Self, CoreError> {
        if data.len() != (width * height * 4) as usize {
            return Err(CoreError::InvalidDimensions {
                width,
                height,
                bytes: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Access pixel (x, y) → (r, g, b, a).
    ///
    /// # Example
    /// ```
    /// use sc_core::frame::SpriteFrame;
    /// let frame = SpriteFrame::new(10, 10);
    /// assert_eq!(frame.pixel(0, 0), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = ((y * self.width + x) * 4) as usize;
        if idx + 3 >= self.data.len() {
            return (0, 0, 0, 0);
        }
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Overwrite pixel (x, y).
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: (u8, u8, u8, u8)) {
        let idx = ((y * self.width + x) * 4) as usize;
        if idx + 3 < self.data.len() {
            self.data[idx] = rgba.0;
            self.data[idx + 1] = rgba.1;
            self.data[idx + 2] = rgba.2;
            self.data[idx + 3] = rgba.3;
        }
    }

    /// True when the pixel's alpha channel is zero. Transparency takes
    /// precedence over brightness in the quantizer.
    #[inline(always)]
    #[must_use]
    pub fn is_transparent(&self, x: u32, y: u32) -> bool {
        self.pixel(x, y).3 == 0
    }

    /// Perceived brightness of pixel (x, y), in `[0, 255·√(0.241+0.691+0.068)]`.
    ///
    /// Not normalized; divide by 255 before mapping to a ramp index.
    ///
    /// # Example
    /// ```
    /// use sc_core::frame::SpriteFrame;
    /// let mut frame = SpriteFrame::new(1, 1);
    /// frame.set_pixel(0, 0, (255, 255, 255, 255));
    /// let expected = 255.0 * (0.241f64 + 0.691 + 0.068).sqrt();
    /// assert!((frame.brightness(0, 0) - expected).abs() < 1e-9);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn brightness(&self, x: u32, y: u32) -> f64 {
        let (r, g, b, _) = self.pixel(x, y);
        perceived_brightness(r, g, b)
    }
}

/// Weighted perceptual brightness: `√(r²·0.241 + g²·0.691 + b²·0.068)`.
#[inline(always)]
#[must_use]
pub fn perceived_brightness(r: u8, g: u8, b: u8) -> f64 {
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
    (r * r * 0.241 + g * g * 0.691 + b * b * 0.068).sqrt()
}
