
//! Error type definitions.

use std::borrow::Cow;
pub use std::io::Error as IoError;
use std::convert::TryFrom;
use std::error;
use std::fmt;

/// A result that may contain a bitpix error.
pub type Result<T> = std::result::Result<T, Error>;

/// A result that, if ok, contains nothing, and otherwise contains a bitpix error.
pub type UnitResult = Result<()>;


/// An error that may happen while building pixel formats, views or regression runs.
/// Distinguishes between three types of errors:
/// invalid arguments, unsupported features, and I/O errors while dumping.
#[derive(Debug)]
pub enum Error {

    /// A pixel format, view rectangle or run configuration violates an invariant.
    Invalid(Cow<'static, str>),

    /// The requested combination is representable but not implemented.
    NotSupported(Cow<'static, str>),

    /// The underlying byte stream could not be written to.
    Io(IoError),
}


impl Error {

    /// Create an error of the variant `Invalid`.
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Error::Invalid(message.into())
    }

    /// Create an error of the variant `NotSupported`.
    pub(crate) fn unsupported(message: impl Into<Cow<'static, str>>) -> Self {
        Error::NotSupported(message.into())
    }
}

/// Enable using the `?` operator on `std::io::Result`.
impl From<IoError> for Error {
    fn from(error: IoError) -> Self {
        Error::Io(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => err.fmt(formatter),
            Error::NotSupported(message) => write!(formatter, "not supported: {}", message),
            Error::Invalid(message) => write!(formatter, "invalid: {}", message),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}


/// Return error on invalid range.
#[inline]
pub(crate) fn usize_to_isize(value: usize, error_message: &'static str) -> Result<isize> {
    isize::try_from(value).map_err(|_| Error::invalid(error_message))
}

/// Return error on invalid range.
#[inline]
pub(crate) fn isize_to_usize(value: isize, error_message: &'static str) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::invalid(error_message))
}
