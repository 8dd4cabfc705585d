//! Scalar field arithmetic modulo the group order `n`.

use core::{
    fmt,
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};
use rand_core::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

use crate::utils::{
    fmt_decimal, fmt_hex, is_zero_mask, lt_mask, mac, words_from_be_bytes, words_to_be_bytes,
    MontyParams, BYTES,
};
use crate::{CurveParameters, Error, Result, Word, Words, LIMBS};

/// An integer in `[0, n)` where `n` is the order of the base point of curve `C`.
///
/// Unlike [`FieldElement`](crate::FieldElement), scalars are stored in canonical
/// (non-Montgomery) form so that the ladder can read their bits directly.
#[derive(Clone, Copy)]
pub struct Scalar<C: CurveParameters> {
    words: Words,
    curve: PhantomData<C>,
}

/// Mask covering the bit length of `n`.
const fn order_mask(n: &Words) -> Words {
    let mut mask = [0; LIMBS];
    let mut i = LIMBS;
    let mut seen = false;
    while i > 0 {
        i -= 1;
        if seen {
            mask[i] = Word::MAX;
        } else if n[i] != 0 {
            mask[i] = Word::MAX >> n[i].leading_zeros();
            seen = true;
        }
    }
    mask
}

impl<C: CurveParameters> Scalar<C> {
    const PARAMS: MontyParams = MontyParams::new(C::ORDER_N);
    const MASK: Words = order_mask(&C::ORDER_N);

    /// Zero scalar.
    pub const ZERO: Self = Self::new([0; LIMBS]);

    /// Multiplicative identity.
    pub const ONE: Self = Self::new([1, 0, 0, 0]);

    const fn new(words: Words) -> Self {
        Self {
            words,
            curve: PhantomData,
        }
    }

    /// Creates a scalar from a little-endian integer, reducing it modulo `n`.
    pub const fn from_uint_reduced(w: &Words) -> Self {
        // Converting into Montgomery form reduces any 256-bit input; converting
        // back yields the canonical residue.
        let mont = Self::PARAMS.to_montgomery(w);
        Self::new(Self::PARAMS.from_montgomery(&mont))
    }

    /// Creates a scalar from a small integer.
    pub const fn from_u64(w: u64) -> Self {
        Self::from_uint_reduced(&[w, 0, 0, 0])
    }

    /// Creates a scalar from a little-endian integer.
    ///
    /// Returns `None` if the integer is not in the range `[0, n)`.
    pub fn from_uint(w: &Words) -> CtOption<Self> {
        let in_range = Choice::from((lt_mask(w, &C::ORDER_N) & 1) as u8);
        CtOption::new(Self::new(*w), in_range)
    }

    /// Parses a big-endian integer, rejecting values not below `n`.
    pub fn from_be_bytes(bytes: &[u8; BYTES]) -> CtOption<Self> {
        Self::from_uint(&words_from_be_bytes(bytes))
    }

    /// Parses a big-endian integer, reducing it modulo `n`.
    pub fn from_be_bytes_reduced(bytes: &[u8; BYTES]) -> Self {
        Self::from_uint_reduced(&words_from_be_bytes(bytes))
    }

    /// Returns the big-endian encoding of this scalar.
    pub fn to_be_bytes(&self) -> [u8; BYTES] {
        words_to_be_bytes(&self.words)
    }

    /// Returns the canonical little-endian integer in `[0, n)`.
    pub const fn to_uint(&self) -> Words {
        self.words
    }

    /// Determine if this `Scalar` is zero.
    pub fn is_zero(&self) -> Choice {
        Choice::from((is_zero_mask(&self.words) & 1) as u8)
    }

    /// Returns a uniformly random scalar in `[0, n)`.
    ///
    /// Candidates are drawn with [`RngCore::try_fill_bytes`], truncated to the
    /// bit length of `n` and rejected until one falls below `n`. Fails with
    /// [`Error::EntropyUnavailable`] if the generator reports an error.
    pub fn random(rng: &mut (impl CryptoRng + RngCore)) -> Result<Self> {
        let mut bytes = [0u8; BYTES];
        loop {
            rng.try_fill_bytes(&mut bytes)
                .map_err(|_| Error::EntropyUnavailable)?;

            let mut words = words_from_be_bytes(&bytes);
            for (w, m) in words.iter_mut().zip(Self::MASK.iter()) {
                *w &= m;
            }
            bytes.zeroize();

            let candidate: Option<Self> = Self::from_uint(&words).into();
            words.zeroize();
            if let Some(scalar) = candidate {
                return Ok(scalar);
            }
        }
    }

    /// Returns `self + rhs mod n`.
    pub const fn add(&self, rhs: &Self) -> Self {
        Self::new(Self::PARAMS.add(&self.words, &rhs.words))
    }

    /// Returns `self - rhs mod n`.
    pub const fn subtract(&self, rhs: &Self) -> Self {
        Self::new(Self::PARAMS.sub(&self.words, &rhs.words))
    }

    /// Returns `-self mod n`.
    pub const fn negate(&self) -> Self {
        Self::new(Self::PARAMS.neg(&self.words))
    }

    /// Returns `self * rhs mod n`.
    pub const fn multiply(&self, rhs: &Self) -> Self {
        // mont(a, b) = a * b / R; multiplying by R^2 and dividing by R again
        // cancels the stray factor.
        let t = Self::PARAMS.mul(&self.words, &rhs.words);
        Self::new(Self::PARAMS.to_montgomery(&t))
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal magnitude.
fn parse_uint(s: &str) -> Result<Words> {
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };

    if digits.is_empty() {
        return Err(Error::MalformedScalar);
    }

    let mut acc = [0; LIMBS];
    for c in digits.chars() {
        let digit = c.to_digit(radix).ok_or(Error::MalformedScalar)?;
        let mut carry = Word::from(digit);
        for w in acc.iter_mut() {
            let (lo, hi) = mac(carry, *w, Word::from(radix), 0);
            *w = lo;
            carry = hi;
        }
        if carry != 0 {
            return Err(Error::ScalarOutOfRange);
        }
    }
    Ok(acc)
}

/// Parses a decimal or `0x`-prefixed hexadecimal scalar.
///
/// A leading `-` is accepted only for zero; any other negative value fails
/// with [`Error::NegativeScalar`]. Values not below `n` fail with
/// [`Error::ScalarOutOfRange`].
impl<C: CurveParameters> FromStr for Scalar<C> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (negative, magnitude) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let words = match parse_uint(magnitude) {
            Err(Error::ScalarOutOfRange) if negative => return Err(Error::NegativeScalar),
            other => other?,
        };

        if negative && is_zero_mask(&words) == 0 {
            return Err(Error::NegativeScalar);
        }

        Option::from(Self::from_uint(&words)).ok_or(Error::ScalarOutOfRange)
    }
}

impl<C: CurveParameters> TryFrom<i64> for Scalar<C> {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(Error::NegativeScalar);
        }
        Ok(Self::from_u64(value.unsigned_abs()))
    }
}

impl<C: CurveParameters> From<u64> for Scalar<C> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<C: CurveParameters> Default for Scalar<C> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<C: CurveParameters> ConditionallySelectable for Scalar<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut words = [0; LIMBS];
        for (w, (wa, wb)) in words.iter_mut().zip(a.words.iter().zip(b.words.iter())) {
            *w = Word::conditional_select(wa, wb, choice);
        }
        Self::new(words)
    }
}

impl<C: CurveParameters> ConstantTimeEq for Scalar<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut res = Choice::from(1);
        for (a, b) in self.words.iter().zip(other.words.iter()) {
            res &= a.ct_eq(b);
        }
        res
    }
}

impl<C: CurveParameters> PartialEq for Scalar<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: CurveParameters> Eq for Scalar<C> {}

impl<C: CurveParameters> fmt::Debug for Scalar<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x{:X})", self)
    }
}

/// Formats the scalar in decimal.
impl<C: CurveParameters> fmt::Display for Scalar<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_decimal(&self.words, f)
    }
}

impl<C: CurveParameters> fmt::UpperHex for Scalar<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex(&self.words, f, true)
    }
}

impl<C: CurveParameters> fmt::LowerHex for Scalar<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex(&self.words, f, false)
    }
}

impl<C: CurveParameters> Add for Scalar<C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Scalar::add(&self, &other)
    }
}

impl<C: CurveParameters> AddAssign for Scalar<C> {
    fn add_assign(&mut self, other: Self) {
        *self = Scalar::add(self, &other);
    }
}

impl<C: CurveParameters> Sub for Scalar<C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.subtract(&other)
    }
}

impl<C: CurveParameters> SubAssign for Scalar<C> {
    fn sub_assign(&mut self, other: Self) {
        *self = self.subtract(&other);
    }
}

impl<C: CurveParameters> Mul for Scalar<C> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.multiply(&other)
    }
}

impl<C: CurveParameters> MulAssign for Scalar<C> {
    fn mul_assign(&mut self, other: Self) {
        *self = self.multiply(&other);
    }
}

impl<C: CurveParameters> Neg for Scalar<C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl<C: CurveParameters> zeroize::DefaultIsZeroes for Scalar<C> {}
