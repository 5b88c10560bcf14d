
//! Address the pixels of bit-packed images, where several pixels share a single byte.
//!
//! Pixels can be accessed with a 2D locator, with row-major cursors, or directly by position.
//! All of these always agree on the addressed pixel, no matter in which order
//! the locator's axes are stepped. The `checksum` and `regression` modules verify this
//! against golden values recorded for the `bgr121` format.

#![forbid(unsafe_code)]
#![deny(
    clippy::all,
)]

#![warn(
    missing_docs,
)]


pub mod error;
pub mod math;
pub mod format;
pub mod pixel;
pub mod bits;
pub mod image;
pub mod checksum;
pub mod dump;
pub mod regression;


/// Export the most important items from `bitpix`.
pub mod prelude {

    // core data types
    pub use crate::format::{PixelFormat, Channel, ChannelKind};
    pub use crate::pixel::{PixelValue, Rgb8};
    pub use crate::image::{PackedImage, View, ViewMut, GetPixel, SetPixel};
    pub use crate::image::locator::{Locator, AxisCursor};
    pub use crate::image::iter::{RasterCursor, RowCursor, Pixels};

    // verification
    pub use crate::checksum::{checksum, Checksum};
    pub use crate::regression::{run_all, RegressionOptions, Report, DrawMethod, Palette};

    // secondary data types
    pub use crate::math::Vec2;
    pub use crate::error::{Error, Result, UnitResult};
}
