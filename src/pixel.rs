
//! Pixel values, either packed into a bit-aligned format
//! or expanded to eight bits per color.

use std::iter::FromIterator;
use smallvec::SmallVec;
use crate::error::{Error, Result};
use crate::format::{ChannelKind, PixelFormat};

/// The samples of a packed pixel.
/// Contains one sample per channel, in the order of the pixel format.
/// Each sample is bounded by the width of its channel.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PixelValue {
    samples: SmallVec<[u8; 4]>,
}

/// A pixel with eight bits for each of red, green, and blue.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct Rgb8 {

    /// Red sample.
    pub r: u8,

    /// Green sample.
    pub g: u8,

    /// Blue sample.
    pub b: u8,
}


impl PixelValue {

    /// Create a pixel from samples in the channel order of the format.
    /// Fails if the sample count does not match or a sample exceeds its channel width.
    pub fn new(format: &PixelFormat, samples: impl IntoIterator<Item = u8>) -> Result<Self> {
        let value: Self = samples.into_iter().collect();

        if value.len() != format.channels().len() {
            return Err(Error::invalid(format!(
                "expected {} samples, but got {}", format.channels().len(), value.len()
            )));
        }

        if !format.fits(&value) {
            return Err(Error::invalid("sample exceeds channel width"));
        }

        Ok(value)
    }

    /// A pixel with all samples set to zero.
    pub fn zero(format: &PixelFormat) -> Self {
        format.channels().iter().map(|_| 0).collect()
    }

    /// The samples, in the channel order of the pixel format.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Number of samples in this pixel.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether this pixel has no samples at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The sample of the specified color, if the format contains it.
    pub fn sample(&self, format: &PixelFormat, kind: ChannelKind) -> Option<u8> {
        format.channel_index(kind).and_then(|index| self.samples.get(index).copied())
    }
}

impl FromIterator<u8> for PixelValue {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        Self { samples: iter.into_iter().collect() }
    }
}


impl Rgb8 {

    /// Create an 8-bit pixel.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The sample of the specified color.
    #[inline]
    pub fn sample(self, kind: ChannelKind) -> u8 {
        match kind {
            ChannelKind::Red => self.r,
            ChannelKind::Green => self.g,
            ChannelKind::Blue => self.b,
        }
    }

    /// Replace the sample of the specified color.
    #[inline]
    pub fn set_sample(&mut self, kind: ChannelKind, sample: u8) {
        match kind {
            ChannelKind::Red => self.r = sample,
            ChannelKind::Green => self.g = sample,
            ChannelKind::Blue => self.b = sample,
        }
    }

    /// The samples in red, green, blue order.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self { Self::new(r, g, b) }
}
