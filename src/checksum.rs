
//! Fingerprint the contents of a view.
//! The pixels are first expanded to eight bits per color,
//! so that the checksum does not depend on the packed byte layout.

use std::fmt;
use crate::image::GetPixel;

/// Reflected polynomial of the CRC-32 used by zlib and PNG.
const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Remainders for every possible byte, computed at compile time.
static CRC_TABLE: [u32; 256] = crc_table();

const fn crc_table() -> [u32; 256] {
    let mut table = [0_u32; 256];
    let mut index = 0;

    while index < 256 {
        let mut remainder = index as u32;
        let mut bit = 0;

        while bit < 8 {
            remainder = if remainder & 1 != 0 { (remainder >> 1) ^ POLYNOMIAL } else { remainder >> 1 };
            bit += 1;
        }

        table[index] = remainder;
        index += 1;
    }

    table
}


/// A CRC-32 fingerprint of the pixels of a view.
/// Displayed as lowercase hexadecimal without leading zeroes, for example `23a6f403`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Checksum(pub u32);

impl Checksum {

    /// The hexadecimal text used by golden values.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Whether this checksum equals the hexadecimal golden text exactly.
    pub fn matches(self, golden: &str) -> bool {
        self.to_hex() == golden
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:x}", self.0)
    }
}


/// Compute the standard CRC-32 (as used by zlib and PNG) of the bytes.
pub fn crc32(bytes: &[u8]) -> u32 {
    !bytes.iter().fold(!0_u32, |crc, &byte| {
        CRC_TABLE[((crc ^ u32::from(byte)) & 0xFF) as usize] ^ (crc >> 8)
    })
}

/// Expand every pixel to red, green, and blue bytes, in row-major order.
/// The result contains `width * height * 3` bytes.
pub fn to_canonical_rgb(view: &impl GetPixel) -> Vec<u8> {
    let format = view.format();
    let mut bytes = Vec::with_capacity(view.resolution().area() * 3);

    for pixel in view.pixels() {
        bytes.extend_from_slice(&format.expand_to_rgb8(&pixel).to_bytes());
    }

    bytes
}

/// Compute the CRC-32 of the canonical RGB bytes of the view.
pub fn checksum(view: &impl GetPixel) -> Checksum {
    Checksum(crc32(&to_canonical_rgb(view)))
}
