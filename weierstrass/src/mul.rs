//! Constant-time scalar multiplication.

use subtle::{Choice, ConditionallySelectable};

use crate::{AffinePoint, CurveParameters, ProjectivePoint, Scalar, WORD_WIDTH_BITS};

/// Computes `[k]P` and returns the result in affine form.
///
/// The ladder always runs over every bit of the scalar field and performs
/// one complete addition and one doubling per bit, selecting operands with
/// conditional swaps. Execution time therefore does not depend on `k` or on
/// the value of `P`. A zero scalar yields the point at infinity.
///
/// A `Scalar` is always in `[0, n)`, so it is never negative.
pub fn scalar_multiply<C: CurveParameters>(k: &Scalar<C>, point: &AffinePoint<C>) -> AffinePoint<C> {
    if k.is_zero().into() {
        return AffinePoint::IDENTITY;
    }

    ladder(k, &ProjectivePoint::from(*point)).to_affine()
}

/// Computes `[k]G` for the curve's base point `G`.
pub fn mul_by_generator<C: CurveParameters>(k: &Scalar<C>) -> AffinePoint<C> {
    scalar_multiply(k, &AffinePoint::GENERATOR)
}

/// Montgomery ladder over all bits of `k`, most significant first.
///
/// Maintains `r1 - r0 = point` throughout.
pub(crate) fn ladder<C: CurveParameters>(
    k: &Scalar<C>,
    point: &ProjectivePoint<C>,
) -> ProjectivePoint<C> {
    let mut r0 = ProjectivePoint::IDENTITY;
    let mut r1 = *point;

    for word in k.to_uint().iter().rev() {
        for i in (0..WORD_WIDTH_BITS).rev() {
            let bit = Choice::from(((word >> i) & 1) as u8);

            ProjectivePoint::conditional_swap(&mut r0, &mut r1, bit);
            r1 = r0 + r1;
            r0 = r0.double();
            ProjectivePoint::conditional_swap(&mut r0, &mut r1, bit);
        }
    }

    r0
}

#[cfg(test)]
mod tests {
    use super::{mul_by_generator, scalar_multiply};
    use crate::{
        point_arithmetic, words_to_be_bytes, AffinePoint, CurveParameters, Error, ProjectivePoint,
        Scalar, Secp256r1,
    };
    use hex_literal::hex;

    type Point = AffinePoint<Secp256r1>;
    type S = Scalar<Secp256r1>;

    #[test]
    fn zero_scalar_gives_identity() {
        assert_eq!(scalar_multiply(&S::ZERO, &Point::GENERATOR), Point::IDENTITY);
        assert_eq!(
            ProjectivePoint::<Secp256r1>::GENERATOR * S::ZERO,
            ProjectivePoint::IDENTITY
        );
    }

    #[test]
    fn identity_times_scalar() {
        let k = S::from_u64(12345);
        assert_eq!(scalar_multiply(&k, &Point::IDENTITY), Point::IDENTITY);
    }

    #[test]
    fn one_is_neutral() {
        assert_eq!(scalar_multiply(&S::ONE, &Point::GENERATOR), Point::GENERATOR);
    }

    #[test]
    fn six_g() {
        let expected = Point::from_coordinates(
            &hex!("B01A172A76A4602C92D3242CB897DDE3024C740DEBB215B4C6B0AAE93C2291A9"),
            &hex!("E85C10743237DAD56FEC0E2DFBA703791C00F7701C7E16BDFD7C48538FC77FE2"),
        )
        .unwrap();
        assert_eq!(mul_by_generator(&S::from_u64(6)), expected);
    }

    #[test]
    fn order_minus_one() {
        assert_eq!(mul_by_generator(&-S::ONE), -Point::GENERATOR);
    }

    #[test]
    fn scalars_stay_below_order() {
        let n = words_to_be_bytes(&Secp256r1::ORDER_N);
        assert!(bool::from(S::from_be_bytes(&n).is_none()));
        assert_eq!(
            "-5".parse::<S>().map(|k| mul_by_generator(&k)),
            Err(Error::NegativeScalar)
        );

        // n + 1 only enters through explicit reduction, and acts as 1.
        let mut n_plus_one = n;
        n_plus_one[31] += 1;
        let k = S::from_be_bytes_reduced(&n_plus_one);
        assert_eq!(k, S::ONE);
        assert_eq!(scalar_multiply(&k, &Point::GENERATOR), Point::GENERATOR);
    }

    #[test]
    fn matches_double_and_add() {
        let k: S = "0x3f1e4c8a9b0d7e6f5a4b3c2d1e0f9a8b7c6d5e4f3a2b1c0d9e8f7a6b5c4d3e2f"
            .parse()
            .unwrap();
        let point = mul_by_generator(&S::from_u64(0xdead_beef));

        assert_eq!(
            scalar_multiply(&k, &point),
            point_arithmetic::mul_vartime(&k, &point).unwrap()
        );
    }
}
