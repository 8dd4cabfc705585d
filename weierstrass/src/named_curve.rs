//! Lookup of curve parameters by standard name.

use core::{fmt, str::FromStr};

use crate::{CurveParameters, Error, Result, Secp256r1, Words};

/// Curves whose parameters ship with this crate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NamedCurve {
    /// NIST P-256, see [`Secp256r1`].
    Secp256r1,
}

impl NamedCurve {
    /// Every supported curve.
    pub const ALL: &'static [NamedCurve] = &[NamedCurve::Secp256r1];

    /// Looks a curve up by one of its standard names, ignoring ASCII case.
    ///
    /// Fails with [`Error::UnknownCurveName`] for any other name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|curve| curve.aliases().iter().any(|a| a.eq_ignore_ascii_case(name)))
            .ok_or(Error::UnknownCurveName)
    }

    /// Canonical SECG name of the curve.
    pub fn name(&self) -> &'static str {
        self.parameters().name
    }

    /// All names accepted by [`NamedCurve::from_name`].
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            NamedCurve::Secp256r1 => &["secp256r1", "prime256v1", "P-256", "nistp256"],
        }
    }

    /// Returns the `(p, a, b, G, n)` tuple of the curve.
    pub fn parameters(&self) -> CurveDescription {
        match self {
            NamedCurve::Secp256r1 => CurveDescription::of::<Secp256r1>(),
        }
    }
}

impl FromStr for NamedCurve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime view of a curve's domain parameters.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CurveDescription {
    /// Standard name.
    pub name: &'static str,
    /// Field modulus `p`.
    pub p: Words,
    /// Coefficient `a`.
    pub a: Words,
    /// Coefficient `b`.
    pub b: Words,
    /// Base point `G` as `(x, y)`.
    pub generator: (Words, Words),
    /// Order `n` of `G`.
    pub n: Words,
}

impl CurveDescription {
    /// Describes the curve `C`.
    pub const fn of<C: CurveParameters>() -> Self {
        Self {
            name: C::NAME,
            p: C::MODULUS_P,
            a: C::EQUATION_A,
            b: C::EQUATION_B,
            generator: C::GENERATOR,
            n: C::ORDER_N,
        }
    }
}
