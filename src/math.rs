
//! Simple math utilities.

use crate::error::{Result, usize_to_isize, isize_to_usize};

/// Simple two-dimensional vector of any numerical type.
/// Supports only few mathematical operations
/// as this is used mainly as data struct.
/// Used for pixel positions `(x, y)` and image sizes `(width, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Vec2<T> (pub T, pub T);

impl<T> Vec2<T> {

    /// Seeing this vector as a dimension or size (width and height),
    /// this returns the area that this dimensions contains (`width * height`).
    #[inline] pub fn area(self) -> T where T: std::ops::Mul<T, Output = T> {
        self.0 * self.1
    }

    /// The first component of this 2D vector.
    #[inline] pub fn x(self) -> T { self.0 }

    /// The second component of this 2D vector.
    #[inline] pub fn y(self) -> T { self.1 }

    /// The first component of this 2D vector.
    #[inline] pub fn width(self) -> T { self.0 }

    /// The second component of this 2D vector.
    #[inline] pub fn height(self) -> T { self.1 }
}


impl Vec2<usize> {

    /// Convert to `Vec2<isize>`, returning an error on values that do not fit.
    pub fn to_isize(self, error_message: &'static str) -> Result<Vec2<isize>> {
        let x = usize_to_isize(self.0, error_message)?;
        let y = usize_to_isize(self.1, error_message)?;
        Ok(Vec2(x, y))
    }

    /// Seeing `self` as a position inside a rectangle of the specified size,
    /// returns the row-major index of that position.
    /// Panics for positions outside the size in debug builds.
    #[inline]
    pub fn flat_index_for_size(self, resolution: Vec2<usize>) -> usize {
        debug_assert!(
            self.x() < resolution.width() && self.y() < resolution.height(),
            "position {:?} is not within size {:?}", self, resolution
        );

        self.y() * resolution.width() + self.x()
    }

    /// Whether this position lies inside a rectangle of the specified size.
    #[inline]
    pub fn is_within(self, resolution: Vec2<usize>) -> bool {
        self.x() < resolution.width() && self.y() < resolution.height()
    }
}

impl Vec2<isize> {

    /// Convert to `Vec2<usize>`, returning an error on negative numbers.
    pub fn to_usize(self, error_message: &'static str) -> Result<Vec2<usize>> {
        let x = isize_to_usize(self.0, error_message)?;
        let y = isize_to_usize(self.1, error_message)?;
        Ok(Vec2(x, y))
    }
}


impl<T: std::ops::Add<T>> std::ops::Add<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T::Output>;
    fn add(self, other: Vec2<T>) -> Self::Output {
        Vec2(self.0 + other.0, self.1 + other.1)
    }
}

impl<T: std::ops::Sub<T>> std::ops::Sub<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T::Output>;
    fn sub(self, other: Vec2<T>) -> Self::Output {
        Vec2(self.0 - other.0, self.1 - other.1)
    }
}

impl<T: std::ops::Neg<Output=T>> std::ops::Neg for Vec2<T> {
    type Output = Vec2<T>;
    fn neg(self) -> Self::Output { Vec2(-self.0, -self.1) }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self { Vec2(x, y) }
}

impl<T> From<Vec2<T>> for (T, T) {
    fn from(vec2: Vec2<T>) -> Self { (vec2.0, vec2.1) }
}
