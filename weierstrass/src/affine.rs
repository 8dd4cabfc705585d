//! Affine curve points.

use core::{fmt, ops::Neg};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::{CurveParameters, Error, FieldElement, Result, BYTES};

/// Point on a Weierstrass curve in affine coordinates.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<C: CurveParameters> {
    /// x-coordinate
    pub(crate) x: FieldElement<C>,

    /// y-coordinate
    pub(crate) y: FieldElement<C>,

    /// Is this point the point at infinity? 0 = no, 1 = yes
    ///
    /// This is a proxy for [`Choice`], but uses `u8` instead to permit `const`
    /// constructors for `IDENTITY` and `GENERATOR`.
    pub(crate) infinity: u8,
}

impl<C: CurveParameters> AffinePoint<C> {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ZERO,
        infinity: 1,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: FieldElement::GENERATOR_X,
        y: FieldElement::GENERATOR_Y,
        infinity: 0,
    };

    /// Builds a finite point from big-endian coordinates.
    ///
    /// Fails with [`Error::CoordinateOutOfRange`] if a coordinate is not
    /// below `p`, and with [`Error::PointNotOnCurve`] if `(x, y)` does not
    /// satisfy the curve equation.
    pub fn from_coordinates(x: &[u8; BYTES], y: &[u8; BYTES]) -> Result<Self> {
        let x = Option::from(FieldElement::from_be_bytes(x)).ok_or(Error::CoordinateOutOfRange)?;
        let y = Option::from(FieldElement::from_be_bytes(y)).ok_or(Error::CoordinateOutOfRange)?;
        Self::from_field_elements(x, y)
    }

    /// Builds a finite point from field elements, checking the curve equation.
    pub fn from_field_elements(x: FieldElement<C>, y: FieldElement<C>) -> Result<Self> {
        let point = Self { x, y, infinity: 0 };

        if point.is_on_curve().into() {
            Ok(point)
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Does this point satisfy `y² = x³ + ax + b`?
    ///
    /// The point at infinity is always on the curve.
    pub fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square();
        let rhs = Self::curve_equation(&self.x);
        lhs.ct_eq(&rhs) | self.is_identity()
    }

    /// Returns `(x, y)`, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(FieldElement<C>, FieldElement<C>)> {
        if self.is_identity().into() {
            None
        } else {
            Some((self.x, self.y))
        }
    }

    /// Right hand side of the curve equation: `x³ + ax + b`.
    pub(crate) fn curve_equation(x: &FieldElement<C>) -> FieldElement<C> {
        (x.square() + FieldElement::EQUATION_A) * *x + FieldElement::EQUATION_B
    }
}

impl<C: CurveParameters> ConditionallySelectable for AffinePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C: CurveParameters> ConstantTimeEq for AffinePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let both_identity = self.is_identity() & other.is_identity();
        let same_finite = self.x.ct_eq(&other.x)
            & self.y.ct_eq(&other.y)
            & !self.is_identity()
            & !other.is_identity();
        both_identity | same_finite
    }
}

impl<C: CurveParameters> Default for AffinePoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: CurveParameters> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: CurveParameters> Eq for AffinePoint<C> {}

impl<C: CurveParameters> fmt::Display for AffinePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coordinates() {
            Some((x, y)) => write!(f, "({}, {})", x, y),
            None => f.write_str("infinity"),
        }
    }
}

impl<C: CurveParameters> Neg for AffinePoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        AffinePoint {
            x: self.x,
            y: FieldElement::conditional_select(&-self.y, &self.y, self.is_identity()),
            infinity: self.infinity,
        }
    }
}

impl<C: CurveParameters> Neg for &AffinePoint<C> {
    type Output = AffinePoint<C>;

    fn neg(self) -> AffinePoint<C> {
        -(*self)
    }
}

impl<C: CurveParameters> zeroize::DefaultIsZeroes for AffinePoint<C> {}
