
//! Read and write bit-aligned pixels in a byte buffer.
//! Bits are addressed starting at the most significant bit of each byte,
//! so the first pixel of a buffer occupies the high bits of the first byte.
//! Values may straddle byte boundaries.

use std::ops::Range;
use bit_field::BitField;
use crate::format::PixelFormat;
use crate::pixel::PixelValue;

/// The location of a single bit inside a byte buffer.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct BitPosition {

    /// Index of the byte containing the bit.
    pub byte: usize,

    /// Index of the bit inside the byte, where `0` is the most significant bit.
    pub bit: u8,
}

impl BitPosition {

    /// Split an absolute bit offset into byte and bit.
    #[inline]
    pub fn from_bit_offset(bit_offset: usize) -> Self {
        BitPosition { byte: bit_offset / 8, bit: (bit_offset % 8) as u8 }
    }

    /// Where the pixel with the specified flat index starts.
    #[inline]
    pub fn of_pixel(format: &PixelFormat, pixel_index: usize) -> Self {
        Self::from_bit_offset(pixel_index * format.bits_per_pixel())
    }

    /// The absolute bit offset of this position.
    #[inline]
    pub fn bit_offset(self) -> usize {
        self.byte * 8 + usize::from(self.bit)
    }
}


/// Iterate the pieces of a bit span, one piece per touched byte.
/// Yields the byte index, the `bit_field` range inside that byte (counted from the least significant bit),
/// and how many bits of the span remain after this piece.
fn byte_pieces(bit_offset: usize, bit_count: usize) -> impl Iterator<Item = (usize, Range<usize>, usize)> {
    let mut position = bit_offset;
    let mut remaining = bit_count;

    std::iter::from_fn(move || {
        if remaining == 0 { return None; }

        let BitPosition { byte, bit } = BitPosition::from_bit_offset(position);
        let taken = (8 - usize::from(bit)).min(remaining);
        let lowest_bit = 8 - usize::from(bit) - taken;

        position += taken;
        remaining -= taken;

        Some((byte, lowest_bit .. lowest_bit + taken, remaining))
    })
}

/// Read `bit_count` bits starting at `bit_offset`.
/// The first bit read becomes the most significant bit of the result.
/// Panics if the bits are outside the buffer or more than 32 bits are requested.
pub fn read_bits(buffer: &[u8], bit_offset: usize, bit_count: usize) -> u32 {
    assert!(bit_count <= 32, "cannot read {} bits at once", bit_count);

    byte_pieces(bit_offset, bit_count).fold(0_u32, |value, (byte, range, _)| {
        let taken = range.len();
        let piece = buffer[byte].get_bits(range);
        (value << taken) | u32::from(piece)
    })
}

/// Write the lowest `bit_count` bits of `value`, starting at `bit_offset`.
/// Only the addressed bits change, all other bits of the touched bytes are kept.
/// Panics if the bits are outside the buffer or more than 32 bits are requested.
pub fn write_bits(buffer: &mut [u8], bit_offset: usize, bit_count: usize, value: u32) {
    assert!(bit_count <= 32, "cannot write {} bits at once", bit_count);
    debug_assert!(bit_count == 32 || value >> bit_count == 0, "value {} does not fit into {} bits", value, bit_count);

    for (byte, range, remaining) in byte_pieces(bit_offset, bit_count) {
        let mask = (1_u32 << range.len()) - 1;
        let piece = (value >> remaining) & mask;
        buffer[byte].set_bits(range, piece as u8);
    }
}


/// Read the pixel with the specified flat index.
pub fn read_pixel(format: &PixelFormat, buffer: &[u8], pixel_index: usize) -> PixelValue {
    let pixel_offset = BitPosition::of_pixel(format, pixel_index).bit_offset();

    format.channel_bit_offsets()
        .map(|(channel, offset)| read_bits(buffer, pixel_offset + offset, usize::from(channel.bits)) as u8)
        .collect()
}

/// Replace the pixel with the specified flat index.
/// Pixels that share a byte with this pixel are not modified.
/// Panics if the value does not have one sample per channel.
pub fn write_pixel(format: &PixelFormat, buffer: &mut [u8], pixel_index: usize, value: &PixelValue) {
    assert_eq!(value.len(), format.channels().len(), "pixel {:?} does not match format {:?}", value, format);
    debug_assert!(format.fits(value), "pixel {:?} does not fit format {:?}", value, format);
    let pixel_offset = BitPosition::of_pixel(format, pixel_index).bit_offset();

    for ((channel, offset), &sample) in format.channel_bit_offsets().zip(value.samples()) {
        write_bits(buffer, pixel_offset + offset, usize::from(channel.bits), u32::from(sample));
    }
}
