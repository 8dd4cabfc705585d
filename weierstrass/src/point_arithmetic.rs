//! Affine group law.
//!
//! These are the textbook chord-and-tangent formulas. Each call performs a
//! field inversion and branches on the input coordinates, so none of them run
//! in constant time. Secret-dependent work goes through
//! [`scalar_multiply`][crate::scalar_multiply] instead, which uses complete
//! projective formulas.

use subtle::ConstantTimeEq;

use crate::{AffinePoint, CurveParameters, FieldElement, Result, Scalar, WORD_WIDTH_BITS};

/// Returns `p + q`.
///
/// Doubling is dispatched to [`double`] when both operands are the same
/// point, and `p + (-p)` yields the point at infinity.
pub fn add<C: CurveParameters>(p: &AffinePoint<C>, q: &AffinePoint<C>) -> Result<AffinePoint<C>> {
    let (x1, y1) = match p.coordinates() {
        Some(coords) => coords,
        None => return Ok(*q),
    };
    let (x2, y2) = match q.coordinates() {
        Some(coords) => coords,
        None => return Ok(*p),
    };

    if bool::from(x1.ct_eq(&x2)) {
        if bool::from(y1.ct_eq(&-y2)) {
            return Ok(AffinePoint::IDENTITY);
        }

        if bool::from(y1.ct_eq(&y2)) {
            return double(p);
        }
    }

    let lambda = (y2 - y1) * (x2 - x1).inverse()?;
    let x3 = lambda.square() - x1 - x2;
    let y3 = lambda * (x1 - x3) - y1;

    Ok(AffinePoint {
        x: x3,
        y: y3,
        infinity: 0,
    })
}

/// Returns `p + p`.
///
/// Points with `y = 0` have order two and double to the point at infinity.
pub fn double<C: CurveParameters>(p: &AffinePoint<C>) -> Result<AffinePoint<C>> {
    let (x, y) = match p.coordinates() {
        Some(coords) => coords,
        None => return Ok(AffinePoint::IDENTITY),
    };

    if bool::from(y.is_zero()) {
        return Ok(AffinePoint::IDENTITY);
    }

    let three = FieldElement::from_u64(3);
    let lambda = (three * x.square() + FieldElement::EQUATION_A) * y.double().inverse()?;
    let x3 = lambda.square() - x.double();
    let y3 = lambda * (x - x3) - y;

    Ok(AffinePoint {
        x: x3,
        y: y3,
        infinity: 0,
    })
}

/// Returns `-p`, mapping `(x, y)` to `(x, p - y)`.
pub fn negate<C: CurveParameters>(p: &AffinePoint<C>) -> AffinePoint<C> {
    -p
}

/// Returns `p - q`.
pub fn subtract<C: CurveParameters>(
    p: &AffinePoint<C>,
    q: &AffinePoint<C>,
) -> Result<AffinePoint<C>> {
    add(p, &negate(q))
}

/// Computes `[k]P` by left-to-right double-and-add over the affine group law.
///
/// Both the running time and the sequence of operations depend on `k`, so
/// this must never see secret scalars. It exists as an independent check of
/// the constant-time ladder.
pub fn mul_vartime<C: CurveParameters>(
    k: &Scalar<C>,
    point: &AffinePoint<C>,
) -> Result<AffinePoint<C>> {
    let mut acc = AffinePoint::IDENTITY;

    for word in k.to_uint().iter().rev() {
        for i in (0..WORD_WIDTH_BITS).rev() {
            acc = double(&acc)?;

            if (word >> i) & 1 == 1 {
                acc = add(&acc, point)?;
            }
        }
    }

    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::{add, double, mul_vartime, negate, subtract};
    use crate::{AffinePoint, Scalar, Secp256r1};
    use hex_literal::hex;

    type Point = AffinePoint<Secp256r1>;

    fn point(x: [u8; 32], y: [u8; 32]) -> Point {
        Point::from_coordinates(&x, &y).unwrap()
    }

    fn two_g() -> Point {
        point(
            hex!("7CF27B188D034F7E8A52380304B51AC3C08969E277F21B35A60B48FC47669978"),
            hex!("07775510DB8ED040293D9AC69F7430DBBA7DADE63CE982299E04B79D227873D1"),
        )
    }

    fn three_g() -> Point {
        point(
            hex!("5ECBE4D1A6330A44C8F7EF951D4BF165E6C6B721EFADA985FB41661BC6E7FD6C"),
            hex!("8734640C4998FF7E374B06CE1A64A2ECD82AB036384FB83D9A79B127A27D5032"),
        )
    }

    #[test]
    fn double_generator() {
        assert_eq!(double(&Point::GENERATOR).unwrap(), two_g());
    }

    #[test]
    fn add_distinct_points() {
        let g = Point::GENERATOR;
        assert_eq!(add(&g, &two_g()).unwrap(), three_g());
        assert_eq!(add(&two_g(), &g).unwrap(), three_g());
    }

    #[test]
    fn add_same_point_doubles() {
        let g = Point::GENERATOR;
        assert_eq!(add(&g, &g).unwrap(), two_g());
    }

    #[test]
    fn add_identity() {
        let g = Point::GENERATOR;
        assert_eq!(add(&g, &Point::IDENTITY).unwrap(), g);
        assert_eq!(add(&Point::IDENTITY, &g).unwrap(), g);
        assert_eq!(
            add(&Point::IDENTITY, &Point::IDENTITY).unwrap(),
            Point::IDENTITY
        );
        assert_eq!(double(&Point::IDENTITY).unwrap(), Point::IDENTITY);
    }

    #[test]
    fn add_inverse_is_identity() {
        let g = Point::GENERATOR;
        assert_eq!(add(&g, &negate(&g)).unwrap(), Point::IDENTITY);
        assert_eq!(subtract(&three_g(), &three_g()).unwrap(), Point::IDENTITY);
    }

    #[test]
    fn subtract_points() {
        assert_eq!(subtract(&three_g(), &two_g()).unwrap(), Point::GENERATOR);
    }

    #[test]
    fn mul_vartime_small() {
        let g = Point::GENERATOR;
        assert_eq!(
            mul_vartime(&Scalar::ZERO, &g).unwrap(),
            Point::IDENTITY
        );
        assert_eq!(mul_vartime(&Scalar::ONE, &g).unwrap(), g);
        assert_eq!(mul_vartime(&Scalar::from_u64(3), &g).unwrap(), three_g());
    }

    #[test]
    fn mul_vartime_order_minus_one() {
        let g = Point::GENERATOR;
        assert_eq!(mul_vartime(&-Scalar::ONE, &g).unwrap(), -g);
    }
}
