//! Support for SEC1 elliptic curve encoding formats.
//!
//! <https://www.secg.org/sec1-v2.pdf>

use ::sec1::point::Coordinates;
use generic_array::{typenum::U32, GenericArray};
use subtle::{Choice, ConditionallySelectable, CtOption};

use crate::{AffinePoint, CurveParameters, Error, FieldElement, Result, BYTES};

pub use ::sec1::point::Tag;

/// SEC1 encoded point for a 256-bit curve.
pub type EncodedPoint = ::sec1::EncodedPoint<U32>;

/// Big-endian serialized field element.
pub type FieldBytes = GenericArray<u8, U32>;

fn field_bytes(bytes: &FieldBytes) -> [u8; BYTES] {
    let mut out = [0u8; BYTES];
    out.copy_from_slice(bytes);
    out
}

impl<C: CurveParameters> AffinePoint<C> {
    /// Serializes this point in SEC1 format.
    pub fn to_encoded_point(&self, compress: bool) -> EncodedPoint {
        match self.coordinates() {
            Some((x, y)) => EncodedPoint::from_affine_coordinates(
                FieldBytes::from_slice(&x.to_be_bytes()),
                FieldBytes::from_slice(&y.to_be_bytes()),
                compress,
            ),
            None => EncodedPoint::identity(),
        }
    }

    /// Decodes a point from SEC1 bytes, checking that it lies on the curve.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_encoded_point(&EncodedPoint::from_bytes(bytes)?)
    }

    /// Decodes an [`EncodedPoint`]. Compact encodings are not supported.
    pub fn from_encoded_point(encoded: &EncodedPoint) -> Result<Self> {
        match encoded.coordinates() {
            Coordinates::Identity => Ok(Self::IDENTITY),
            Coordinates::Compact { .. } => Err(Error::MalformedEncoding),
            Coordinates::Compressed { x, y_is_odd } => {
                let x = Option::from(FieldElement::from_be_bytes(&field_bytes(x)))
                    .ok_or(Error::CoordinateOutOfRange)?;
                Option::from(Self::decompress(&x, Choice::from(y_is_odd as u8)))
                    .ok_or(Error::PointNotOnCurve)
            }
            Coordinates::Uncompressed { x, y } => {
                Self::from_coordinates(&field_bytes(x), &field_bytes(y))
            }
        }
    }

    /// Recovers the point with the given x-coordinate and y parity.
    ///
    /// Relies on `p ≡ 3 mod 4` for the square root.
    pub fn decompress(x: &FieldElement<C>, y_is_odd: Choice) -> CtOption<Self> {
        let alpha = Self::curve_equation(x);
        alpha.sqrt().map(|beta| {
            let y = FieldElement::conditional_select(&beta, &-beta, beta.is_odd() ^ y_is_odd);
            Self {
                x: *x,
                y,
                infinity: 0,
            }
        })
    }
}
