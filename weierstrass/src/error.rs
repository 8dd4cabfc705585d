//! Error type

use core::fmt::{self, Display};

/// Errors raised by field, point and scalar operations.
///
/// All of these are local, synchronous failures caused by invalid input;
/// none of them is transient.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to invert the zero field element.
    DivisionByZero,

    /// Coordinates do not satisfy the curve equation.
    PointNotOnCurve,

    /// A coordinate is not smaller than the field modulus.
    CoordinateOutOfRange,

    /// A negative value was supplied where a scalar was expected.
    NegativeScalar,

    /// A scalar is not smaller than the group order.
    ScalarOutOfRange,

    /// A scalar string is not a decimal or `0x`-prefixed hex integer.
    MalformedScalar,

    /// A SEC1 point encoding has an invalid tag or length.
    MalformedEncoding,

    /// The random number generator failed to produce bytes.
    EntropyUnavailable,

    /// No curve parameters are registered under the requested name.
    UnknownCurveName,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::DivisionByZero => "division by zero in field inversion",
            Error::PointNotOnCurve => "point is not on the curve",
            Error::CoordinateOutOfRange => "coordinate is not reduced modulo the field prime",
            Error::NegativeScalar => "scalar is negative",
            Error::ScalarOutOfRange => "scalar is not reduced modulo the group order",
            Error::MalformedScalar => "malformed scalar",
            Error::MalformedEncoding => "malformed SEC1 point encoding",
            Error::EntropyUnavailable => "entropy source unavailable",
            Error::UnknownCurveName => "unknown curve name",
        })
    }
}

impl From<::sec1::Error> for Error {
    fn from(_: ::sec1::Error) -> Error {
        Error::MalformedEncoding
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type with the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
