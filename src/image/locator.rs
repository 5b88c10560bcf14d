
//! A two-dimensional cursor with independently steppable axes.
//!
//! The locator only stores the `(x, y)` coordinates of its two cursors.
//! Byte and bit offsets are derived from both coordinates on every access,
//! so stepping the horizontal cursor before the vertical cursor
//! addresses exactly the same pixel as stepping them the other way around.

use crate::bits::BitPosition;
use crate::error::Result;
use crate::image::{GetPixel, SetPixel};
use crate::math::Vec2;
use crate::pixel::PixelValue;


/// One axis of a locator.
/// May temporarily point outside of the view,
/// for example after the last step of a drawing loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct AxisCursor {
    position: isize,
}

/// A 2D cursor over a view. See the module documentation.
#[derive(Debug, Clone)]
pub struct Locator<V> {
    view: V,
    x: AxisCursor,
    y: AxisCursor,
}


impl AxisCursor {

    /// Create a cursor at the specified coordinate.
    #[inline]
    pub fn new(position: isize) -> Self {
        Self { position }
    }

    /// The current coordinate.
    #[inline]
    pub fn position(self) -> isize {
        self.position
    }

    /// Move forward by one pixel.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.step(1)
    }

    /// Move back by one pixel.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.step(-1)
    }

    /// Move by any number of pixels.
    #[inline]
    pub fn step(&mut self, delta: isize) -> &mut Self {
        self.position += delta;
        self
    }
}


impl<V: GetPixel> Locator<V> {

    /// Create a locator at the specified position of the view.
    /// The position itself is not checked until the locator is dereferenced.
    pub fn new(view: V, position: Vec2<usize>) -> Result<Self> {
        let Vec2(x, y) = position.to_isize("locator position too large")?;
        Ok(Self { view, x: AxisCursor::new(x), y: AxisCursor::new(y) })
    }

    /// The horizontal cursor.
    #[inline] pub fn x(&self) -> AxisCursor { self.x }

    /// The vertical cursor.
    #[inline] pub fn y(&self) -> AxisCursor { self.y }

    /// The horizontal cursor, which can be stepped without affecting the vertical cursor.
    #[inline] pub fn x_mut(&mut self) -> &mut AxisCursor { &mut self.x }

    /// The vertical cursor, which can be stepped without affecting the horizontal cursor.
    #[inline] pub fn y_mut(&mut self) -> &mut AxisCursor { &mut self.y }

    /// Move the horizontal cursor.
    #[inline]
    pub fn step_x(&mut self, delta: isize) -> &mut Self {
        self.x.step(delta);
        self
    }

    /// Move the vertical cursor.
    #[inline]
    pub fn step_y(&mut self, delta: isize) -> &mut Self {
        self.y.step(delta);
        self
    }

    /// Move both cursors.
    #[inline]
    pub fn step(&mut self, delta: Vec2<isize>) -> &mut Self {
        self.step_x(delta.x()).step_y(delta.y())
    }

    /// The coordinates of both cursors, which may be outside of the view.
    #[inline]
    pub fn position(&self) -> Vec2<isize> {
        Vec2(self.x.position(), self.y.position())
    }

    /// The position, if it currently addresses a pixel of the view.
    pub fn try_position(&self) -> Option<Vec2<usize>> {
        self.position().to_usize("locator outside of view").ok()
            .filter(|&position| position.is_within(self.view.resolution()))
    }

    /// Whether the locator currently addresses a pixel of the view.
    pub fn is_within(&self) -> bool {
        self.try_position().is_some()
    }

    /// Where the bits of the addressed pixel start.
    /// Panics if the locator is outside of the view.
    pub fn bit_position(&self) -> BitPosition {
        self.view.bit_position(self.current())
    }

    /// Read the addressed pixel.
    /// Panics if the locator is outside of the view.
    pub fn get(&self) -> PixelValue {
        self.view.get_pixel(self.current())
    }

    /// The view this locator moves over.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Stop using the locator.
    pub fn into_view(self) -> V {
        self.view
    }

    fn current(&self) -> Vec2<usize> {
        match self.try_position() {
            Some(position) => position,
            None => {
                let resolution = self.view.resolution();
                panic!(
                    "locator at ({}, {}) is outside of the {}x{} view",
                    self.x.position(), self.y.position(), resolution.width(), resolution.height()
                )
            }
        }
    }
}

impl<V: SetPixel> Locator<V> {

    /// Replace the addressed pixel.
    /// Panics if the locator is outside of the view.
    pub fn set(&mut self, value: &PixelValue) {
        let position = self.current();
        self.view.set_pixel(position, value);
    }
}
