
//! Describes how the channels of a bit-aligned pixel are laid out.
//! A pixel format is an ordered list of channels, each with its own bit width.
//! The first channel occupies the most significant bits of a pixel.

use smallvec::SmallVec;
use crate::error::{Error, Result, UnitResult};
use crate::pixel::{PixelValue, Rgb8};

/// The color a channel contributes to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ChannelKind {

    /// The red component.
    Red,

    /// The green component.
    Green,

    /// The blue component.
    Blue,
}

/// A single channel of a pixel format.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Channel {

    /// Which color this channel contains.
    pub kind: ChannelKind,

    /// Number of bits this channel occupies. Between 1 and 8.
    pub bits: u8,
}

/// The channel list of a pixel format. Rarely contains more than three channels.
pub type ChannelList = SmallVec<[Channel; 4]>;

/// An immutable, validated bit-aligned pixel layout.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PixelFormat {
    channels: ChannelList,
    bits_per_pixel: u8,
}


impl Channel {

    /// Create a channel of the specified color and width.
    pub fn new(kind: ChannelKind, bits: u8) -> Self {
        Self { kind, bits }
    }

    /// The largest sample this channel can hold, `2^bits - 1`.
    #[inline]
    pub fn max_value(self) -> u8 {
        (((1_u16) << self.bits) - 1) as u8
    }

    /// Truncate an 8-bit sample to the width of this channel,
    /// keeping only the most significant bits.
    #[inline]
    pub fn narrow(self, sample: u8) -> u8 {
        sample >> (8 - self.bits)
    }

    /// Scale a sample of this channel up to the full 8-bit range,
    /// so that the largest channel value becomes 255.
    #[inline]
    pub fn widen(self, sample: u8) -> u8 {
        debug_assert!(sample <= self.max_value(), "sample {} exceeds channel {:?}", sample, self);
        (u16::from(sample) * 255 / u16::from(self.max_value())) as u8
    }
}

impl PixelFormat {

    /// Create a new pixel format from the channels, starting at the most significant bit.
    /// Fails if a channel width is zero or exceeds a byte,
    /// if a color appears twice, or if the pixel does not fit into a single byte.
    pub fn new(channels: impl Into<ChannelList>) -> Result<Self> {
        let channels = channels.into();
        Self::validate(&channels)?;

        let bits_per_pixel = channels.iter().map(|channel| channel.bits).sum();
        Ok(Self { channels, bits_per_pixel })
    }

    /// Blue with one bit, green with two bits, red with one bit.
    /// Two of these pixels share a single byte.
    pub fn bgr121() -> Self {
        let channels: ChannelList = smallvec::smallvec![
            Channel::new(ChannelKind::Blue, 1),
            Channel::new(ChannelKind::Green, 2),
            Channel::new(ChannelKind::Red, 1),
        ];

        Self { channels, bits_per_pixel: 4 }
    }

    fn validate(channels: &[Channel]) -> UnitResult {
        if channels.is_empty() {
            return Err(Error::invalid("pixel format without channels"));
        }

        if channels.len() > 3 {
            return Err(Error::invalid("pixel format with more than three channels"));
        }

        for (index, channel) in channels.iter().enumerate() {
            if channel.bits == 0 || channel.bits > 8 {
                return Err(Error::invalid(format!("channel {:?} must have between 1 and 8 bits", channel.kind)));
            }

            if channels[.. index].iter().any(|previous| previous.kind == channel.kind) {
                return Err(Error::invalid(format!("channel {:?} appears twice", channel.kind)));
            }
        }

        let total_bits: u32 = channels.iter().map(|channel| u32::from(channel.bits)).sum();
        if total_bits > 8 {
            return Err(Error::unsupported("pixels wider than a single byte"));
        }

        Ok(())
    }

    /// The channels, starting with the one in the most significant bits.
    #[inline]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Sum of all channel widths.
    #[inline]
    pub fn bits_per_pixel(&self) -> usize {
        usize::from(self.bits_per_pixel)
    }

    /// Bit offset of each channel relative to the first bit of the pixel.
    pub fn channel_bit_offsets(&self) -> impl Iterator<Item = (Channel, usize)> + '_ {
        self.channels.iter().scan(0_usize, |offset, &channel| {
            let channel_offset = *offset;
            *offset += usize::from(channel.bits);
            Some((channel, channel_offset))
        })
    }

    /// Find the channel containing the specified color.
    pub fn channel_index(&self, kind: ChannelKind) -> Option<usize> {
        self.channels.iter().position(|channel| channel.kind == kind)
    }

    /// Down-convert an 8-bit pixel into this format.
    /// Each channel keeps the most significant bits of the matching color.
    pub fn convert_rgb8(&self, source: Rgb8) -> PixelValue {
        self.channels.iter()
            .map(|channel| channel.narrow(source.sample(channel.kind)))
            .collect()
    }

    /// Expand a pixel of this format to 8 bits per color, scaling each channel to the full range.
    /// Colors that this format does not contain are zero.
    pub fn expand_to_rgb8(&self, value: &PixelValue) -> Rgb8 {
        debug_assert_eq!(value.len(), self.channels.len(), "pixel value does not match format");

        let mut rgb = Rgb8::default();
        for (channel, &sample) in self.channels.iter().zip(value.samples()) {
            rgb.set_sample(channel.kind, channel.widen(sample));
        }

        rgb
    }

    /// Whether every sample of the pixel fits its channel.
    pub fn fits(&self, value: &PixelValue) -> bool {
        value.len() == self.channels.len() && self.channels.iter()
            .zip(value.samples())
            .all(|(channel, &sample)| sample <= channel.max_value())
    }
}
