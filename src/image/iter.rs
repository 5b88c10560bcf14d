
//! One-dimensional walks over a view.
//!
//! `RasterCursor` and `Pixels` walk the whole view in row-major order,
//! continuing at the first column of the next row after the last column.
//! `RowCursor` only ever walks a single row and never wraps.

use crate::image::{GetPixel, SetPixel};
use crate::math::Vec2;
use crate::pixel::PixelValue;


/// Walks all pixels of a view in row-major order, reading or writing each one.
#[derive(Debug, Clone)]
pub struct RasterCursor<V> {
    view: V,
    position: Vec2<usize>,
}

/// Walks the pixels of a single row. Moving past the last column is allowed,
/// but the cursor must not be dereferenced there.
#[derive(Debug, Clone)]
pub struct RowCursor<V> {
    view: V,
    x: usize,
    y: usize,
}

/// Iterates the pixels of a view in row-major order.
#[derive(Debug, Clone)]
pub struct Pixels<V> {
    view: V,
    next_index: usize,
    len: usize,
}


impl<V: GetPixel> RasterCursor<V> {

    /// Start at the first pixel of the view.
    pub fn new(view: V) -> Self {
        Self { view, position: Vec2(0, 0) }
    }

    /// The current position. The row equals the height once the cursor is at the end.
    #[inline]
    pub fn position(&self) -> Vec2<usize> {
        self.position
    }

    /// Whether the cursor walked past the last pixel.
    /// True right away for views without pixels.
    #[inline]
    pub fn is_end(&self) -> bool {
        let resolution = self.view.resolution();
        resolution.area() == 0 || self.position.y() >= resolution.height()
    }

    /// Move to the next pixel, continuing in the next row after the last column.
    pub fn advance(&mut self) -> &mut Self {
        debug_assert!(!self.is_end(), "raster cursor advanced past the end");

        let Vec2(x, y) = self.position;
        self.position = if x + 1 < self.view.resolution().width() { Vec2(x + 1, y) } else { Vec2(0, y + 1) };
        self
    }

    /// Read the current pixel. Panics at the end.
    pub fn get(&self) -> PixelValue {
        self.view.get_pixel(self.position)
    }

    /// Stop using the cursor.
    pub fn into_view(self) -> V {
        self.view
    }
}

impl<V: SetPixel> RasterCursor<V> {

    /// Replace the current pixel. Panics at the end.
    pub fn set(&mut self, value: &PixelValue) {
        self.view.set_pixel(self.position, value)
    }
}


impl<V: GetPixel> RowCursor<V> {

    /// Start at the first pixel of the specified row.
    /// Panics if the row does not exist.
    pub fn new(view: V, y: usize) -> Self {
        let height = view.resolution().height();
        assert!(y < height, "row {} does not exist in a view of height {}", y, height);
        Self { view, x: 0, y }
    }

    /// The current column.
    #[inline]
    pub fn x(&self) -> usize { self.x }

    /// The row this cursor walks.
    #[inline]
    pub fn y(&self) -> usize { self.y }

    /// Whether the cursor moved past the last column of the row.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.x >= self.view.resolution().width()
    }

    /// Move to the next column. Stays in the same row.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.x += 1;
        self
    }

    /// Read the current pixel. Panics past the end of the row.
    pub fn get(&self) -> PixelValue {
        self.view.get_pixel(self.current())
    }

    fn current(&self) -> Vec2<usize> {
        assert!(!self.is_end(), "row cursor moved past the end of row {}", self.y);
        Vec2(self.x, self.y)
    }
}

impl<V: SetPixel> RowCursor<V> {

    /// Replace the current pixel. Panics past the end of the row.
    pub fn set(&mut self, value: &PixelValue) {
        let position = self.current();
        self.view.set_pixel(position, value)
    }
}


impl<V: GetPixel> Pixels<V> {

    /// Iterate all pixels of the view.
    pub fn new(view: V) -> Self {
        let len = view.resolution().area();
        Self { view, next_index: 0, len }
    }
}

impl<V: GetPixel> Iterator for Pixels<V> {
    type Item = PixelValue;

    fn next(&mut self) -> Option<PixelValue> {
        if self.next_index >= self.len {
            return None;
        }

        let width = self.view.resolution().width();
        let position = Vec2(self.next_index % width, self.next_index / width);
        self.next_index += 1;

        Some(self.view.get_pixel(position))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next_index;
        (remaining, Some(remaining))
    }
}

impl<V: GetPixel> ExactSizeIterator for Pixels<V> {}
