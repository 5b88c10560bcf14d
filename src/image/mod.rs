
//! Bit-packed images and the views used to address their pixels.
//! A `PackedImage` owns the bytes, `View` and `ViewMut` borrow a rectangle of it.
//! All pixel access goes through `GetPixel` and `SetPixel`,
//! which always derive the buffer location from the `(x, y)` position.

pub mod locator;
pub mod iter;

use crate::bits::{self, BitPosition};
use crate::error::{Error, Result};
use crate::format::PixelFormat;
use crate::math::Vec2;
use crate::pixel::PixelValue;
use self::iter::{Pixels, RasterCursor, RowCursor};
use self::locator::Locator;


/// Examine the pixels of a two-dimensional, bit-packed pixel grid.
pub trait GetPixel {

    /// The layout of each pixel.
    fn format(&self) -> &PixelFormat;

    /// Width and height of the addressable rectangle.
    fn resolution(&self) -> Vec2<usize>;

    /// The flat index of the pixel inside the underlying buffer.
    /// Panics if the position is outside of `resolution()`.
    fn pixel_index(&self, position: Vec2<usize>) -> usize;

    /// Read the pixel at the specified position.
    /// Panics if the position is outside of `resolution()`.
    fn get_pixel(&self, position: Vec2<usize>) -> PixelValue;

    /// Where the bits of the pixel at the specified position start.
    fn bit_position(&self, position: Vec2<usize>) -> BitPosition {
        BitPosition::of_pixel(self.format(), self.pixel_index(position))
    }

    /// All pixels in row-major order.
    fn pixels(&self) -> Pixels<&Self> {
        Pixels::new(self)
    }
}

/// Update the pixels of a two-dimensional, bit-packed pixel grid.
pub trait SetPixel: GetPixel {

    /// Replace the pixel at the specified position.
    /// Panics if the position is outside of `resolution()`.
    fn set_pixel(&mut self, position: Vec2<usize>, value: &PixelValue);

    /// Replace every pixel, walking in row-major order.
    fn fill(&mut self, value: &PixelValue) {
        let mut cursor = RasterCursor::new(self);

        while !cursor.is_end() {
            cursor.set(value);
            cursor.advance();
        }
    }
}

impl<T: GetPixel + ?Sized> GetPixel for &T {
    #[inline] fn format(&self) -> &PixelFormat { T::format(self) }
    #[inline] fn resolution(&self) -> Vec2<usize> { T::resolution(self) }
    #[inline] fn pixel_index(&self, position: Vec2<usize>) -> usize { T::pixel_index(self, position) }
    #[inline] fn get_pixel(&self, position: Vec2<usize>) -> PixelValue { T::get_pixel(self, position) }
}

impl<T: GetPixel + ?Sized> GetPixel for &mut T {
    #[inline] fn format(&self) -> &PixelFormat { T::format(self) }
    #[inline] fn resolution(&self) -> Vec2<usize> { T::resolution(self) }
    #[inline] fn pixel_index(&self, position: Vec2<usize>) -> usize { T::pixel_index(self, position) }
    #[inline] fn get_pixel(&self, position: Vec2<usize>) -> PixelValue { T::get_pixel(self, position) }
}

impl<T: SetPixel + ?Sized> SetPixel for &mut T {
    #[inline] fn set_pixel(&mut self, position: Vec2<usize>, value: &PixelValue) { T::set_pixel(self, position, value) }
}


/// An image that owns its bit-packed pixel bytes.
/// Rows are not padded, so a row may start in the middle of a byte.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PackedImage {
    format: PixelFormat,
    resolution: Vec2<usize>,
    bytes: Vec<u8>,
}

/// Read access to a rectangle of a packed image.
#[derive(Debug, Clone, Copy)]
pub struct View<'i> {
    image: &'i PackedImage,
    origin: Vec2<usize>,
    size: Vec2<usize>,
}

/// Write access to a rectangle of a packed image.
#[derive(Debug)]
pub struct ViewMut<'i> {
    image: &'i mut PackedImage,
    origin: Vec2<usize>,
    size: Vec2<usize>,
}


impl PackedImage {

    /// Allocate a zeroed image with the specified width and height.
    pub fn new(format: PixelFormat, resolution: impl Into<Vec2<usize>>) -> Self {
        let resolution = resolution.into();
        let byte_count = Self::byte_count(&format, resolution);
        Self { format, resolution, bytes: vec![0; byte_count] }
    }

    /// Number of bytes required for all pixels of an image, `ceil(width * height * bits / 8)`.
    pub fn byte_count(format: &PixelFormat, resolution: Vec2<usize>) -> usize {
        (resolution.area() * format.bits_per_pixel()).div_ceil(8)
    }

    /// The raw pixel bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// View all pixels of this image.
    pub fn view(&self) -> View<'_> {
        View { image: self, origin: Vec2(0, 0), size: self.resolution }
    }

    /// Modify all pixels of this image.
    pub fn view_mut(&mut self) -> ViewMut<'_> {
        let size = self.resolution;
        ViewMut { image: self, origin: Vec2(0, 0), size }
    }
}

impl GetPixel for PackedImage {
    #[inline] fn format(&self) -> &PixelFormat { &self.format }
    #[inline] fn resolution(&self) -> Vec2<usize> { self.resolution }

    #[inline]
    fn pixel_index(&self, position: Vec2<usize>) -> usize {
        assert_within(position, self.resolution);
        position.flat_index_for_size(self.resolution)
    }

    #[inline]
    fn get_pixel(&self, position: Vec2<usize>) -> PixelValue {
        bits::read_pixel(&self.format, &self.bytes, self.pixel_index(position))
    }
}

impl SetPixel for PackedImage {
    #[inline]
    fn set_pixel(&mut self, position: Vec2<usize>, value: &PixelValue) {
        let index = self.pixel_index(position);
        bits::write_pixel(&self.format, &mut self.bytes, index, value)
    }
}


impl<'i> View<'i> {

    /// A smaller rectangle of this view. The origin is relative to this view.
    pub fn sub_view(self, origin: impl Into<Vec2<usize>>, size: impl Into<Vec2<usize>>) -> Result<View<'i>> {
        let (origin, size) = sub_rectangle(self.size, origin.into(), size.into())?;
        Ok(View { image: self.image, origin: self.origin + origin, size })
    }

    /// A locator starting at the specified position.
    pub fn locator_at(self, position: impl Into<Vec2<usize>>) -> Result<Locator<Self>> {
        Locator::new(self, position.into())
    }

    /// A cursor walking all pixels of this view in row-major order.
    pub fn raster_cursor(self) -> RasterCursor<Self> {
        RasterCursor::new(self)
    }

    /// A cursor walking the pixels of a single row.
    pub fn row_cursor(self, y: usize) -> RowCursor<Self> {
        RowCursor::new(self, y)
    }
}

impl GetPixel for View<'_> {
    #[inline] fn format(&self) -> &PixelFormat { &self.image.format }
    #[inline] fn resolution(&self) -> Vec2<usize> { self.size }

    #[inline]
    fn pixel_index(&self, position: Vec2<usize>) -> usize {
        assert_within(position, self.size);
        self.image.pixel_index(self.origin + position)
    }

    #[inline]
    fn get_pixel(&self, position: Vec2<usize>) -> PixelValue {
        bits::read_pixel(&self.image.format, &self.image.bytes, self.pixel_index(position))
    }
}


impl<'i> ViewMut<'i> {

    /// Shorten the lifetime of this view to create a read-only view.
    pub fn as_view(&self) -> View<'_> {
        View { image: &*self.image, origin: self.origin, size: self.size }
    }

    /// A smaller rectangle of this view. The origin is relative to this view.
    pub fn sub_view_mut(self, origin: impl Into<Vec2<usize>>, size: impl Into<Vec2<usize>>) -> Result<ViewMut<'i>> {
        let (origin, size) = sub_rectangle(self.size, origin.into(), size.into())?;
        Ok(ViewMut { image: self.image, origin: self.origin + origin, size })
    }

    /// A locator starting at the specified position.
    pub fn locator_at(&mut self, position: impl Into<Vec2<usize>>) -> Result<Locator<&mut Self>> {
        Locator::new(self, position.into())
    }

    /// A cursor walking all pixels of this view in row-major order.
    pub fn raster_cursor(&mut self) -> RasterCursor<&mut Self> {
        RasterCursor::new(self)
    }

    /// A cursor walking the pixels of a single row.
    pub fn row_cursor(&mut self, y: usize) -> RowCursor<&mut Self> {
        RowCursor::new(self, y)
    }
}

impl GetPixel for ViewMut<'_> {
    #[inline] fn format(&self) -> &PixelFormat { &self.image.format }
    #[inline] fn resolution(&self) -> Vec2<usize> { self.size }

    #[inline]
    fn pixel_index(&self, position: Vec2<usize>) -> usize {
        assert_within(position, self.size);
        self.image.pixel_index(self.origin + position)
    }

    #[inline]
    fn get_pixel(&self, position: Vec2<usize>) -> PixelValue {
        bits::read_pixel(&self.image.format, &self.image.bytes, self.pixel_index(position))
    }
}

impl SetPixel for ViewMut<'_> {
    #[inline]
    fn set_pixel(&mut self, position: Vec2<usize>, value: &PixelValue) {
        let index = self.pixel_index(position);
        bits::write_pixel(&self.image.format, &mut self.image.bytes, index, value)
    }
}


#[inline]
fn assert_within(position: Vec2<usize>, size: Vec2<usize>) {
    assert!(
        position.is_within(size),
        "pixel ({}, {}) is outside of the {}x{} view",
        position.x(), position.y(), size.width(), size.height()
    );
}

fn sub_rectangle(parent: Vec2<usize>, origin: Vec2<usize>, size: Vec2<usize>) -> Result<(Vec2<usize>, Vec2<usize>)> {
    let end = origin.x().checked_add(size.width())
        .zip(origin.y().checked_add(size.height()));

    match end {
        Some((end_x, end_y)) if end_x <= parent.width() && end_y <= parent.height() => Ok((origin, size)),
        _ => Err(Error::invalid("sub view exceeds the bounds of its parent")),
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::pixel::Rgb8;

    fn red_and_blue(format: &PixelFormat) -> (PixelValue, PixelValue) {
        (format.convert_rgb8(Rgb8::new(255, 0, 0)), format.convert_rgb8(Rgb8::new(0, 0, 255)))
    }

    #[test]
    fn byte_count_rounds_up() {
        let format = PixelFormat::bgr121();
        assert_eq!(PackedImage::byte_count(&format, Vec2(3, 3)), 5);
        assert_eq!(PackedImage::byte_count(&format, Vec2(2, 2)), 2);
        assert_eq!(PackedImage::byte_count(&format, Vec2(0, 5)), 0);
        assert_eq!(PackedImage::new(format, (1, 1)).bytes().len(), 1);
    }

    #[test]
    fn rows_are_not_padded() {
        let format = PixelFormat::bgr121();
        let (red, blue) = red_and_blue(&format);

        let mut image = PackedImage::new(format, (3, 3));
        image.view_mut().fill(&red);
        image.set_pixel(Vec2(0, 1), &blue);

        // the second row starts in the low half of the second byte
        assert_eq!(image.bytes(), &[0b0001_0001, 0b0001_1000, 0b0001_0001, 0b0001_0001, 0b0001_0000]);
        assert_eq!(image.bit_position(Vec2(0, 1)), BitPosition { byte: 1, bit: 4 });
    }

    #[test]
    fn views_agree_with_image() {
        let format = PixelFormat::bgr121();
        let (red, blue) = red_and_blue(&format);

        let mut image = PackedImage::new(format, (4, 3));
        image.fill(&red);

        {
            let mut view = image.view_mut();
            view.set_pixel(Vec2(3, 2), &blue);
            assert_eq!(view.get_pixel(Vec2(3, 2)), blue);
            assert_eq!(view.as_view().get_pixel(Vec2(2, 2)), red);
        }

        assert_eq!(image.get_pixel(Vec2(3, 2)), blue);
        assert_eq!(image.view().get_pixel(Vec2(3, 2)), blue);
        assert_eq!(image.view().pixel_index(Vec2(3, 2)), 11);
    }

    #[test]
    fn sub_views_are_offset() {
        let format = PixelFormat::bgr121();
        let (red, blue) = red_and_blue(&format);

        let mut image = PackedImage::new(format, (5, 4));
        image.fill(&red);

        {
            let mut inner = image.view_mut().sub_view_mut((1, 1), (3, 2)).unwrap();
            assert_eq!(inner.resolution(), Vec2(3, 2));
            inner.fill(&blue);
        }

        let view = image.view();
        for y in 0 .. 4 {
            for x in 0 .. 5 {
                let inside = (1 ..= 3).contains(&x) && (1 ..= 2).contains(&y);
                let expected = if inside { &blue } else { &red };
                assert_eq!(&view.get_pixel(Vec2(x, y)), expected, "pixel ({}, {})", x, y);
            }
        }

        let nested = view.sub_view((1, 1), (3, 2)).unwrap().sub_view((2, 1), (1, 1)).unwrap();
        assert_eq!(nested.pixel_index(Vec2(0, 0)), 2 * 5 + 3);
        assert_eq!(nested.get_pixel(Vec2(0, 0)), blue);
    }

    #[test]
    fn rejects_oversized_sub_views() {
        let image = PackedImage::new(PixelFormat::bgr121(), (3, 3));
        assert!(image.view().sub_view((1, 1), (2, 2)).is_ok());
        assert!(image.view().sub_view((1, 1), (3, 2)).is_err());
        assert!(image.view().sub_view((0, 3), (1, 1)).is_err());
        assert!(image.view().sub_view((usize::MAX, 0), (2, 1)).is_err());
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_access_panics() {
        let image = PackedImage::new(PixelFormat::bgr121(), (3, 3));
        image.view().get_pixel(Vec2(3, 0));
    }

    #[test]
    #[should_panic(expected = "does not match format")]
    fn writing_an_empty_pixel_panics() {
        let mut image = PackedImage::new(PixelFormat::bgr121(), (2, 1));
        let empty: PixelValue = std::iter::empty().collect();
        image.set_pixel(Vec2(1, 0), &empty);
    }
}
