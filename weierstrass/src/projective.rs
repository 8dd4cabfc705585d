//! Projective curve points.

use core::{
    iter::Sum,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::{mul, AffinePoint, CurveParameters, FieldElement, Scalar};

/// Point on a Weierstrass curve in homogeneous projective coordinates.
///
/// `(X : Y : Z)` represents the affine point `(X/Z, Y/Z)`; the point at
/// infinity is any triple with `Z = 0`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<C: CurveParameters> {
    pub(crate) x: FieldElement<C>,
    pub(crate) y: FieldElement<C>,
    pub(crate) z: FieldElement<C>,
}

impl<C: CurveParameters> ProjectivePoint<C> {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: FieldElement::GENERATOR_X,
        y: FieldElement::GENERATOR_Y,
        z: FieldElement::ONE,
    };

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Returns the affine representation of this point.
    pub fn to_affine(&self) -> AffinePoint<C> {
        self.z
            .invert()
            .map(|zinv| AffinePoint {
                x: self.x * zinv,
                y: self.y * zinv,
                infinity: 0,
            })
            .unwrap_or(AffinePoint::IDENTITY)
    }

    /// Returns `-self`.
    fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Returns `self + other`.
    ///
    /// Implements the complete addition formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 1). The comments after each line indicate which algorithm steps
    /// are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn add(&self, other: &Self) -> Self {
        let a = FieldElement::<C>::EQUATION_A;
        let b3 = FieldElement::<C>::EQUATION_B3;

        let t0 = self.x * other.x; // 1
        let t1 = self.y * other.y; // 2
        let t2 = self.z * other.z; // 3
        let t3 = self.x + self.y; // 4
        let t4 = other.x + other.y; // 5
        let t3 = t3 * t4; // 6
        let t4 = t0 + t1; // 7
        let t3 = t3 - t4; // 8
        let t4 = self.x + self.z; // 9
        let t5 = other.x + other.z; // 10
        let t4 = t4 * t5; // 11
        let t5 = t0 + t2; // 12
        let t4 = t4 - t5; // 13
        let t5 = self.y + self.z; // 14
        let x3 = other.y + other.z; // 15
        let t5 = t5 * x3; // 16
        let x3 = t1 + t2; // 17
        let t5 = t5 - x3; // 18
        let z3 = a * t4; // 19
        let x3 = b3 * t2; // 20
        let z3 = x3 + z3; // 21
        let x3 = t1 - z3; // 22
        let z3 = t1 + z3; // 23
        let y3 = x3 * z3; // 24
        let t1 = t0 + t0; // 25
        let t1 = t1 + t0; // 26
        let t2 = a * t2; // 27
        let t4 = b3 * t4; // 28
        let t1 = t1 + t2; // 29
        let t2 = t0 - t2; // 30
        let t2 = a * t2; // 31
        let t4 = t4 + t2; // 32
        let t0 = t1 * t4; // 33
        let y3 = y3 + t0; // 34
        let t0 = t5 * t4; // 35
        let x3 = t3 * x3; // 36
        let x3 = x3 - t0; // 37
        let t0 = t3 * t1; // 38
        let z3 = t5 * z3; // 39
        let z3 = z3 + t0; // 40

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Returns `self + self`.
    ///
    /// Implements the exception-free point doubling formula from
    /// [Renes-Costello-Batina 2015] (Algorithm 3). The comments after each line
    /// indicate which algorithm steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    pub fn double(&self) -> Self {
        let a = FieldElement::<C>::EQUATION_A;
        let b3 = FieldElement::<C>::EQUATION_B3;

        let t0 = self.x * self.x; // 1
        let t1 = self.y * self.y; // 2
        let t2 = self.z * self.z; // 3
        let t3 = self.x * self.y; // 4
        let t3 = t3 + t3; // 5
        let z3 = self.x * self.z; // 6
        let z3 = z3 + z3; // 7
        let x3 = a * z3; // 8
        let y3 = b3 * t2; // 9
        let y3 = x3 + y3; // 10
        let x3 = t1 - y3; // 11
        let y3 = t1 + y3; // 12
        let y3 = x3 * y3; // 13
        let x3 = t3 * x3; // 14
        let z3 = b3 * z3; // 15
        let t2 = a * t2; // 16
        let t3 = t0 - t2; // 17
        let t3 = a * t3; // 18
        let t3 = t3 + z3; // 19
        let z3 = t0 + t0; // 20
        let t0 = z3 + t0; // 21
        let t0 = t0 + t2; // 22
        let t0 = t0 * t3; // 23
        let y3 = y3 + t0; // 24
        let t2 = self.y * self.z; // 25
        let t2 = t2 + t2; // 26
        let t0 = t2 * t3; // 27
        let x3 = x3 - t0; // 28
        let z3 = t2 * t1; // 29
        let z3 = z3 + z3; // 30
        let z3 = z3 + z3; // 31

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Returns `self - other`.
    fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns `[k] self` in constant time.
    fn mul(&self, k: &Scalar<C>) -> Self {
        mul::ladder(k, self)
    }
}

impl<C: CurveParameters> From<AffinePoint<C>> for ProjectivePoint<C> {
    fn from(p: AffinePoint<C>) -> Self {
        let projective = Self {
            x: p.x,
            y: p.y,
            z: FieldElement::ONE,
        };
        Self::conditional_select(&projective, &Self::IDENTITY, p.is_identity())
    }
}

impl<C: CurveParameters> From<&AffinePoint<C>> for ProjectivePoint<C> {
    fn from(p: &AffinePoint<C>) -> Self {
        Self::from(*p)
    }
}

impl<C: CurveParameters> From<ProjectivePoint<C>> for AffinePoint<C> {
    fn from(p: ProjectivePoint<C>) -> Self {
        p.to_affine()
    }
}

impl<C: CurveParameters> ConditionallySelectable for ProjectivePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: CurveParameters> ConstantTimeEq for ProjectivePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_affine().ct_eq(&other.to_affine())
    }
}

impl<C: CurveParameters> PartialEq for ProjectivePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: CurveParameters> Eq for ProjectivePoint<C> {}

impl<C: CurveParameters> Default for ProjectivePoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: CurveParameters> Add<Self> for ProjectivePoint<C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        ProjectivePoint::add(&self, &other)
    }
}

impl<C: CurveParameters> Add<&Self> for ProjectivePoint<C> {
    type Output = Self;

    fn add(self, other: &Self) -> Self {
        ProjectivePoint::add(&self, other)
    }
}

impl<C: CurveParameters> AddAssign<Self> for ProjectivePoint<C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl<C: CurveParameters> Add<AffinePoint<C>> for ProjectivePoint<C> {
    type Output = Self;

    fn add(self, other: AffinePoint<C>) -> Self {
        ProjectivePoint::add(&self, &other.into())
    }
}

impl<C: CurveParameters> AddAssign<AffinePoint<C>> for ProjectivePoint<C> {
    fn add_assign(&mut self, rhs: AffinePoint<C>) {
        *self = ProjectivePoint::add(self, &rhs.into());
    }
}

impl<C: CurveParameters> Sum for ProjectivePoint<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::IDENTITY, |a, b| a + b)
    }
}

impl<C: CurveParameters> Sub<Self> for ProjectivePoint<C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        ProjectivePoint::sub(&self, &other)
    }
}

impl<C: CurveParameters> SubAssign<Self> for ProjectivePoint<C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = ProjectivePoint::sub(self, &rhs);
    }
}

impl<C: CurveParameters> Sub<AffinePoint<C>> for ProjectivePoint<C> {
    type Output = Self;

    fn sub(self, other: AffinePoint<C>) -> Self {
        ProjectivePoint::sub(&self, &other.into())
    }
}

impl<C: CurveParameters> Mul<Scalar<C>> for ProjectivePoint<C> {
    type Output = Self;

    fn mul(self, other: Scalar<C>) -> Self {
        ProjectivePoint::mul(&self, &other)
    }
}

impl<C: CurveParameters> Mul<&Scalar<C>> for ProjectivePoint<C> {
    type Output = Self;

    fn mul(self, other: &Scalar<C>) -> Self {
        ProjectivePoint::mul(&self, other)
    }
}

impl<C: CurveParameters> MulAssign<Scalar<C>> for ProjectivePoint<C> {
    fn mul_assign(&mut self, rhs: Scalar<C>) {
        *self = ProjectivePoint::mul(self, &rhs);
    }
}

impl<C: CurveParameters> Neg for ProjectivePoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        ProjectivePoint::neg(&self)
    }
}

impl<C: CurveParameters> zeroize::DefaultIsZeroes for ProjectivePoint<C> {}
