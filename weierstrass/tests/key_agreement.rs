//! Diffie-Hellman commutativity over secp256r1.

use proptest::prelude::*;
use weierstrass_dh::{demo, mul_by_generator, scalar_multiply, Secp256r1};

type AffinePoint = weierstrass_dh::AffinePoint<Secp256r1>;
type Scalar = weierstrass_dh::Scalar<Secp256r1>;

const SIX_G_X: &str =
    "79653159259317329199152975905021693207262715618295428672027927511489832980905";
const SIX_G_Y: &str =
    "105099244361861367422779349381909628134794498213392835359532911141293690159074";

#[test]
fn two_and_three_give_six_g() {
    let k = Scalar::from_u64(2);
    let d = Scalar::from_u64(3);
    let g = AffinePoint::GENERATOR;

    let shared_a = scalar_multiply(&d, &scalar_multiply(&k, &g));
    let shared_b = scalar_multiply(&k, &scalar_multiply(&d, &g));
    let six_g = scalar_multiply(&Scalar::from_u64(6), &g);

    assert_eq!(shared_a, shared_b);
    assert_eq!(shared_a, six_g);
    for point in [shared_a, shared_b, six_g] {
        assert!(bool::from(point.is_on_curve()));
    }

    let (x, y) = six_g.coordinates().unwrap();
    assert_eq!(x.to_string(), SIX_G_X);
    assert_eq!(y.to_string(), SIX_G_Y);
}

#[test]
fn exchange_from_parsed_scalars() {
    let k: Scalar = "2".parse().unwrap();
    let d: Scalar = "0x3".parse().unwrap();
    let exchange = demo::exchange(&k, &d).unwrap();

    assert!(exchange.agreed());
    assert!(exchange.all_on_curve());
    assert_eq!(exchange.shared_a.to_string(), format!("({}, {})", SIX_G_X, SIX_G_Y));
}

#[test]
fn zero_scalar_gives_identity() {
    let p = mul_by_generator(&Scalar::from_u64(0xfeed));
    assert_eq!(scalar_multiply(&Scalar::ZERO, &p), AffinePoint::IDENTITY);
    assert_eq!(
        scalar_multiply(&Scalar::ZERO, &AffinePoint::IDENTITY),
        AffinePoint::IDENTITY
    );
}

#[test]
fn negative_scalars_are_rejected() {
    assert_eq!(
        "-5".parse::<Scalar>(),
        Err(weierstrass_dh::Error::NegativeScalar)
    );
    assert_eq!(
        Scalar::try_from(-1i64),
        Err(weierstrass_dh::Error::NegativeScalar)
    );
}

prop_compose! {
    fn scalar()(bytes in any::<[u8; 32]>()) -> Scalar {
        Scalar::from_be_bytes_reduced(&bytes)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn scalar_multiplication_commutes(k in scalar(), m in scalar(), seed in scalar()) {
        let p = mul_by_generator(&seed);

        let km = scalar_multiply(&k, &scalar_multiply(&m, &p));
        let mk = scalar_multiply(&m, &scalar_multiply(&k, &p));
        let product = scalar_multiply(&(k * m), &p);

        prop_assert_eq!(km, mk);
        prop_assert_eq!(km, product);
        prop_assert!(bool::from(km.is_on_curve()));
    }

    #[test]
    fn exchange_always_agrees(k in scalar(), d in scalar()) {
        let exchange = demo::exchange(&k, &d).unwrap();
        prop_assert!(exchange.agreed());
        prop_assert!(exchange.all_on_curve());
    }
}
