//! Projective and affine arithmetic tests.

use hex_literal::hex;
use proptest::prelude::*;
use weierstrass_dh::{mul_by_generator, point_arithmetic, Error, Secp256r1};

type AffinePoint = weierstrass_dh::AffinePoint<Secp256r1>;
type ProjectivePoint = weierstrass_dh::ProjectivePoint<Secp256r1>;
type Scalar = weierstrass_dh::Scalar<Secp256r1>;

/// Affine x/y-coordinates of `[k]G` for `k = 1..=3`.
const MUL_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"),
        hex!("4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"),
    ),
    (
        hex!("7CF27B188D034F7E8A52380304B51AC3C08969E277F21B35A60B48FC47669978"),
        hex!("07775510DB8ED040293D9AC69F7430DBBA7DADE63CE982299E04B79D227873D1"),
    ),
    (
        hex!("5ECBE4D1A6330A44C8F7EF951D4BF165E6C6B721EFADA985FB41661BC6E7FD6C"),
        hex!("8734640C4998FF7E374B06CE1A64A2ECD82AB036384FB83D9A79B127A27D5032"),
    ),
];

#[test]
fn small_multiples_of_generator() {
    for (i, (x, y)) in MUL_TEST_VECTORS.iter().enumerate() {
        let expected = AffinePoint::from_coordinates(x, y).unwrap();
        let k = Scalar::from_u64(i as u64 + 1);
        assert_eq!(mul_by_generator(&k), expected);
        assert_eq!((ProjectivePoint::GENERATOR * k).to_affine(), expected);
    }
}

#[test]
fn repeated_addition_matches_multiplication() {
    let mut sum = ProjectivePoint::IDENTITY;
    for i in 1..=20u64 {
        sum += AffinePoint::GENERATOR;
        assert_eq!(sum.to_affine(), mul_by_generator(&Scalar::from_u64(i)));
    }
}

#[test]
fn order_annihilates_generator() {
    let n_minus_one = -Scalar::ONE;
    let p = mul_by_generator(&n_minus_one);
    assert_eq!(
        point_arithmetic::add(&p, &AffinePoint::GENERATOR).unwrap(),
        AffinePoint::IDENTITY
    );
}

#[test]
fn one_one_is_not_on_curve() {
    let mut one = [0u8; 32];
    one[31] = 1;
    assert_eq!(
        AffinePoint::from_coordinates(&one, &one),
        Err(Error::PointNotOnCurve)
    );
}

prop_compose! {
    fn point()(bytes in any::<[u8; 32]>()) -> AffinePoint {
        mul_by_generator(&Scalar::from_be_bytes_reduced(&bytes))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn identity_is_neutral(p in point()) {
        let identity = AffinePoint::IDENTITY;
        prop_assert_eq!(point_arithmetic::add(&p, &identity).unwrap(), p);
        prop_assert_eq!(point_arithmetic::add(&identity, &p).unwrap(), p);
    }

    #[test]
    fn adding_negation_gives_identity(p in point()) {
        let sum = point_arithmetic::add(&p, &point_arithmetic::negate(&p)).unwrap();
        prop_assert!(bool::from(sum.is_identity()));
    }

    #[test]
    fn affine_and_projective_agree(p in point(), q in point()) {
        let affine_sum = point_arithmetic::add(&p, &q).unwrap();
        let projective_sum = ProjectivePoint::from(p) + q;
        prop_assert_eq!(projective_sum.to_affine(), affine_sum);
        prop_assert!(bool::from(affine_sum.is_on_curve()));

        let affine_double = point_arithmetic::double(&p).unwrap();
        prop_assert_eq!(ProjectivePoint::from(p).double().to_affine(), affine_double);
        prop_assert!(bool::from(affine_double.is_on_curve()));
    }

    #[test]
    fn sec1_round_trip(p in point(), compress in any::<bool>()) {
        let encoded = p.to_encoded_point(compress);
        prop_assert_eq!(AffinePoint::from_sec1_bytes(encoded.as_bytes()).unwrap(), p);
    }
}
