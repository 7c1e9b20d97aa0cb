//! The aggregate colour and brightness of one character cell.

/// The reduced colour of one pixel block.
///
/// Brightness and RGB are derived independently from the same block: the
/// brightness from the averaged HSV value, the colour from the averaged
/// channels. A `Sample` is immutable once computed.
///
/// # Example
///
/// ```rust
/// use blockart::rendering::sample::Sample;
///
/// let sample = Sample::new(255, [255, 0, 0]);
/// assert_eq!(sample.brightness(), 255);
/// assert_eq!(sample.rgb(), [255, 0, 0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Sample {
    brightness: u8,
    r: u8,
    g: u8,
    b: u8,
}

impl Sample {
    /// Creates a sample from a brightness and an RGB colour.
    pub fn new(brightness: u8, [r, g, b]: [u8; 3]) -> Self {
        Self { brightness, r, g, b }
    }

    /// The brightness in `0..=255`, used to pick the glyph.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// The foreground colour of the cell.
    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
