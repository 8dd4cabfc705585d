//! Diffie-Hellman commutativity check.
//!
//! Two parties holding secret scalars `k` and `d` each publish a multiple of
//! the base point, then multiply the other party's point by their own
//! scalar. Both arrive at `[dk]G`:
//!
//! ```
//! use weierstrass_dh::{demo, Scalar, Secp256r1};
//!
//! let k = Scalar::<Secp256r1>::from_u64(2);
//! let d = Scalar::<Secp256r1>::from_u64(3);
//! let exchange = demo::exchange(&k, &d)?;
//! assert!(exchange.agreed());
//! # Ok::<(), weierstrass_dh::Error>(())
//! ```

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::{mul_by_generator, scalar_multiply, AffinePoint, CurveParameters, Result, Scalar};

/// Outcome of computing the shared point in both orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exchange<C: CurveParameters> {
    /// `[k]G`, published by the first party.
    pub public_k: AffinePoint<C>,

    /// `[d]G`, published by the second party.
    pub public_d: AffinePoint<C>,

    /// `[d]([k]G)`, computed by the second party.
    pub shared_a: AffinePoint<C>,

    /// `[k]([d]G)`, computed by the first party.
    pub shared_b: AffinePoint<C>,
}

impl<C: CurveParameters> Exchange<C> {
    /// Did both parties arrive at the same point?
    pub fn agreed(&self) -> bool {
        self.shared_a == self.shared_b
    }

    /// Is `[k]G` on the curve?
    pub fn public_k_on_curve(&self) -> bool {
        self.public_k.is_on_curve().into()
    }

    /// Is `[d]G` on the curve?
    pub fn public_d_on_curve(&self) -> bool {
        self.public_d.is_on_curve().into()
    }

    /// Is `[d]([k]G)` on the curve?
    pub fn shared_a_on_curve(&self) -> bool {
        self.shared_a.is_on_curve().into()
    }

    /// Is `[k]([d]G)` on the curve?
    pub fn shared_b_on_curve(&self) -> bool {
        self.shared_b.is_on_curve().into()
    }

    /// Are all four points on the curve?
    pub fn all_on_curve(&self) -> bool {
        [self.public_k, self.public_d, self.shared_a, self.shared_b]
            .iter()
            .all(|p| bool::from(p.is_on_curve()))
    }
}

/// Runs the exchange with the given secret scalars.
///
/// Each public point is sent through its SEC1 encoding and validated on
/// receipt, so a point that left the curve is reported as
/// [`Error::PointNotOnCurve`][crate::Error::PointNotOnCurve] instead of being
/// multiplied further.
pub fn exchange<C: CurveParameters>(k: &Scalar<C>, d: &Scalar<C>) -> Result<Exchange<C>> {
    let public_k = mul_by_generator(k);
    let public_d = mul_by_generator(d);

    let received_k = transmit(&public_k)?;
    let received_d = transmit(&public_d)?;

    Ok(Exchange {
        public_k,
        public_d,
        shared_a: scalar_multiply(d, &received_k),
        shared_b: scalar_multiply(k, &received_d),
    })
}

/// Runs the exchange with scalars drawn uniformly from `[0, n)`.
///
/// Fails with [`Error::EntropyUnavailable`][crate::Error::EntropyUnavailable]
/// if the random source does.
pub fn random_exchange<C: CurveParameters>(
    rng: &mut (impl CryptoRng + RngCore),
) -> Result<Exchange<C>> {
    let mut k = Scalar::random(rng)?;
    let mut d = Scalar::random(rng)?;
    let result = exchange(&k, &d);
    k.zeroize();
    d.zeroize();
    result
}

fn transmit<C: CurveParameters>(point: &AffinePoint<C>) -> Result<AffinePoint<C>> {
    AffinePoint::from_sec1_bytes(point.to_encoded_point(true).as_bytes())
}
