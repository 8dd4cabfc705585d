use hex_literal::hex;

use crate::{words_from_be_bytes, CurveParameters, Words};

/// NIST P-256 elliptic curve.
///
/// This curve is also known as prime256v1 (ANSI X9.62) and secp256r1 (SECG)
/// and is specified in SEC 2: Recommended Elliptic Curve Domain Parameters.
///
/// ```text
/// p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1
/// a = p - 3
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Secp256r1;

impl CurveParameters for Secp256r1 {
    const NAME: &'static str = "secp256r1";

    const MODULUS_P: Words = words_from_be_bytes(&hex!(
        "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"
    ));

    const ORDER_N: Words = words_from_be_bytes(&hex!(
        "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"
    ));

    const EQUATION_A: Words = words_from_be_bytes(&hex!(
        "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"
    ));

    const EQUATION_B: Words = words_from_be_bytes(&hex!(
        "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"
    ));

    const GENERATOR: (Words, Words) = (
        words_from_be_bytes(&hex!(
            "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
        )),
        words_from_be_bytes(&hex!(
            "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
        )),
    );
}
