//! Field arithmetic modulo the curve's prime `p`.

use core::{
    fmt,
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::utils::{
    add_word, fmt_decimal, fmt_hex, is_zero_mask, lt_mask, shr_words, sub_words,
    words_from_be_bytes, words_to_be_bytes, MontyParams, BYTES,
};
use crate::{CurveParameters, Error, Result, Word, Words, LIMBS};

/// An element of the prime field `GF(p)` underlying the curve `C`.
///
/// The internal representation is in little-endian order. Elements are always in
/// Montgomery form; i.e., FieldElement(a) = aR mod p, with R = 2^256. The stored
/// value is always fully reduced, so every element has exactly one representation.
#[derive(Clone, Copy)]
pub struct FieldElement<C: CurveParameters> {
    words: Words,
    curve: PhantomData<C>,
}

impl<C: CurveParameters> FieldElement<C> {
    const PARAMS: MontyParams = MontyParams::new(C::MODULUS_P);

    /// p - 2
    const P_MINUS_2: Words = sub_words(&C::MODULUS_P, &[2, 0, 0, 0]).0;

    /// (p + 1) / 4
    const SQRT_EXP: Words = shr_words(&add_word(&C::MODULUS_P, 1), 2);

    /// Additive identity.
    pub const ZERO: Self = Self::from_montgomery([0; LIMBS]);

    /// Multiplicative identity.
    pub const ONE: Self = Self::from_montgomery(Self::PARAMS.one);

    pub(crate) const EQUATION_A: Self = Self::from_uint_unchecked(&C::EQUATION_A);
    pub(crate) const EQUATION_B: Self = Self::from_uint_unchecked(&C::EQUATION_B);
    pub(crate) const EQUATION_B3: Self =
        FieldElement::add(&Self::EQUATION_B.double(), &Self::EQUATION_B);
    pub(crate) const GENERATOR_X: Self = Self::from_uint_unchecked(&C::GENERATOR.0);
    pub(crate) const GENERATOR_Y: Self = Self::from_uint_unchecked(&C::GENERATOR.1);

    const fn from_montgomery(words: Words) -> Self {
        Self {
            words,
            curve: PhantomData,
        }
    }

    /// Converts an integer into Montgomery form without checking that it is below `p`.
    ///
    /// Inputs of `p` or more are silently reduced.
    pub(crate) const fn from_uint_unchecked(w: &Words) -> Self {
        Self::from_montgomery(Self::PARAMS.to_montgomery(w))
    }

    /// Creates a field element from a small integer.
    pub const fn from_u64(w: u64) -> Self {
        Self::from_uint_unchecked(&[w, 0, 0, 0])
    }

    /// Creates a field element from a little-endian integer.
    ///
    /// Returns `None` if the integer is not in the range `[0, p)`.
    pub fn from_uint(w: &Words) -> CtOption<Self> {
        let in_range = Choice::from((lt_mask(w, &C::MODULUS_P) & 1) as u8);
        CtOption::new(Self::from_uint_unchecked(w), in_range)
    }

    /// Attempts to parse the given byte array as an SEC1-encoded field element.
    ///
    /// Returns `None` if the byte array does not contain a big-endian integer in
    /// the range `[0, p)`.
    pub fn from_be_bytes(bytes: &[u8; BYTES]) -> CtOption<Self> {
        Self::from_uint(&words_from_be_bytes(bytes))
    }

    /// Returns the SEC1 encoding of this field element.
    pub fn to_be_bytes(&self) -> [u8; BYTES] {
        words_to_be_bytes(&self.to_uint())
    }

    /// Returns the canonical little-endian integer in `[0, p)`.
    pub const fn to_uint(&self) -> Words {
        Self::PARAMS.from_montgomery(&self.words)
    }

    /// Determine if this `FieldElement` is zero.
    pub fn is_zero(&self) -> Choice {
        Choice::from((is_zero_mask(&self.words) & 1) as u8)
    }

    /// Determine if the canonical value of this `FieldElement` is odd.
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_uint()[0] & 1) as u8)
    }

    /// Returns `self + rhs mod p`.
    pub const fn add(&self, rhs: &Self) -> Self {
        Self::from_montgomery(Self::PARAMS.add(&self.words, &rhs.words))
    }

    /// Returns `self - rhs mod p`, never negative.
    pub const fn subtract(&self, rhs: &Self) -> Self {
        Self::from_montgomery(Self::PARAMS.sub(&self.words, &rhs.words))
    }

    /// Returns `-self mod p`.
    pub const fn negate(&self) -> Self {
        Self::from_montgomery(Self::PARAMS.neg(&self.words))
    }

    /// Returns `2 * self mod p`.
    pub const fn double(&self) -> Self {
        self.add(self)
    }

    /// Returns `self * rhs mod p`.
    pub const fn multiply(&self, rhs: &Self) -> Self {
        Self::from_montgomery(Self::PARAMS.mul(&self.words, &rhs.words))
    }

    /// Returns `self * self mod p`.
    pub const fn square(&self) -> Self {
        self.multiply(self)
    }

    /// Returns `self^exp mod p`, where `exp` is a little-endian integer.
    ///
    /// The sequence of operations depends only on the bit length of `Words`,
    /// not on the exponent or the base.
    pub const fn pow(&self, exp: &Words) -> Self {
        Self::from_montgomery(Self::PARAMS.pow(&self.words, exp))
    }

    /// Returns the multiplicative inverse of self, if self is non-zero.
    pub fn invert(&self) -> CtOption<Self> {
        // We need to find b such that b * a ≡ 1 mod p. As we are in a prime
        // field, we can apply Fermat's Little Theorem:
        //
        //    a^p         ≡ a mod p
        //    a^(p-1)     ≡ 1 mod p
        //    a^(p-2) * a ≡ 1 mod p
        //
        // Thus inversion can be implemented with a single exponentiation.
        CtOption::new(self.pow(&Self::P_MINUS_2), !self.is_zero())
    }

    /// Returns the multiplicative inverse of self.
    ///
    /// Fails with [`Error::DivisionByZero`] when self is zero.
    pub fn inverse(&self) -> Result<Self> {
        Option::from(self.invert()).ok_or(Error::DivisionByZero)
    }

    /// Returns the square root of self mod p, or `None` if no square root exists.
    ///
    /// Only valid for curves with `p ≡ 3 mod 4`; on other curves the candidate
    /// root fails the final check and `None` is returned.
    pub fn sqrt(&self) -> CtOption<Self> {
        // For p ≡ 3 mod 4, Euler's criterion gives beta^((p - 1) / 2) ≡ 1 for
        // any square beta, hence (beta^((p + 1) / 4))^2 ≡ beta.
        let sqrt = self.pow(&Self::SQRT_EXP);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }
}

impl<C: CurveParameters> Default for FieldElement<C> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<C: CurveParameters> ConditionallySelectable for FieldElement<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut words = [0; LIMBS];
        for (w, (wa, wb)) in words.iter_mut().zip(a.words.iter().zip(b.words.iter())) {
            *w = Word::conditional_select(wa, wb, choice);
        }
        Self::from_montgomery(words)
    }
}

impl<C: CurveParameters> ConstantTimeEq for FieldElement<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut res = Choice::from(1);
        for (a, b) in self.words.iter().zip(other.words.iter()) {
            res &= a.ct_eq(b);
        }
        res
    }
}

impl<C: CurveParameters> PartialEq for FieldElement<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: CurveParameters> Eq for FieldElement<C> {}

impl<C: CurveParameters> fmt::Debug for FieldElement<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:X})", self)
    }
}

/// Formats the canonical value in decimal.
impl<C: CurveParameters> fmt::Display for FieldElement<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_decimal(&self.to_uint(), f)
    }
}

impl<C: CurveParameters> fmt::UpperHex for FieldElement<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex(&self.to_uint(), f, true)
    }
}

impl<C: CurveParameters> fmt::LowerHex for FieldElement<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex(&self.to_uint(), f, false)
    }
}

impl<C: CurveParameters> Add for FieldElement<C> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        FieldElement::add(&self, &other)
    }
}

impl<C: CurveParameters> AddAssign for FieldElement<C> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = FieldElement::add(self, &other);
    }
}

impl<C: CurveParameters> Sub for FieldElement<C> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self.subtract(&other)
    }
}

impl<C: CurveParameters> SubAssign for FieldElement<C> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = self.subtract(&other);
    }
}

impl<C: CurveParameters> Mul for FieldElement<C> {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        self.multiply(&other)
    }
}

impl<C: CurveParameters> MulAssign for FieldElement<C> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = self.multiply(&other);
    }
}

impl<C: CurveParameters> Neg for FieldElement<C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<C: CurveParameters> zeroize::DefaultIsZeroes for FieldElement<C> {}

#[cfg(test)]
mod tests {
    use super::FieldElement;
    use crate::{CurveParameters, Error, Secp256r1};
    use hex_literal::hex;
    use std::string::ToString;

    type Fe = FieldElement<Secp256r1>;

    #[test]
    fn zero_is_additive_identity() {
        let a = Fe::from_u64(42);
        assert_eq!(a + Fe::ZERO, a);
        assert_eq!(Fe::ZERO + a, a);
    }

    #[test]
    fn one_is_multiplicative_identity() {
        let a = Fe::from_u64(42);
        assert_eq!(a * Fe::ONE, a);
        assert_eq!(Fe::ONE * a, a);
        assert_eq!(Fe::ONE.to_uint(), [1, 0, 0, 0]);
    }

    #[test]
    fn subtraction_never_goes_negative() {
        let one = Fe::ONE;
        let two = Fe::from_u64(2);
        let p_minus_one = one - two;
        assert_eq!(p_minus_one + two, one);
        assert_eq!(
            p_minus_one.to_be_bytes(),
            hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffe")
        );
    }

    #[test]
    fn negation() {
        let a = Fe::from_u64(7);
        assert_eq!(a + (-a), Fe::ZERO);
        assert_eq!(-Fe::ZERO, Fe::ZERO);
    }

    #[test]
    fn multiplication_and_square() {
        let a = Fe::from_u64(123_456_789);
        let b = Fe::from_u64(987_654_321);
        assert_eq!((a * b).to_uint(), [121_932_631_112_635_269, 0, 0, 0]);
        assert_eq!(a.square(), a * a);
        assert_eq!(a.double(), a + a);
    }

    #[test]
    fn invert() {
        let a = Fe::from_u64(2);
        let inv = a.invert().unwrap();
        assert_eq!(a * inv, Fe::ONE);

        let b = Fe::from_be_bytes(&hex!(
            "1ccbe91c075fc7f4f033bfa248db8fccd3565de94bbfb12f3c59ff46c271bf83"
        ))
        .unwrap();
        assert_eq!(b * b.inverse().unwrap(), Fe::ONE);
    }

    #[test]
    fn invert_zero_is_division_by_zero() {
        assert!(bool::from(Fe::ZERO.invert().is_none()));
        assert_eq!(Fe::ZERO.inverse(), Err(Error::DivisionByZero));
    }

    #[test]
    fn sqrt() {
        let a = Fe::from_u64(9);
        let root = a.sqrt().unwrap();
        assert_eq!(root.square(), a);

        // -1 is not a square when p ≡ 3 mod 4
        assert!(bool::from((-Fe::ONE).sqrt().is_none()));
    }

    #[test]
    fn from_be_bytes_rejects_modulus() {
        let p = crate::utils::words_to_be_bytes(&Secp256r1::MODULUS_P);
        assert!(bool::from(Fe::from_be_bytes(&p).is_none()));
        assert!(bool::from(Fe::from_be_bytes(&[0xff; 32]).is_none()));
        assert_eq!(Fe::from_be_bytes(&[0; 32]).unwrap(), Fe::ZERO);
    }

    #[test]
    fn bytes_round_trip() {
        let bytes = hex!("ce4014c68811f9a21a1fdb2c0e6113e06db7ca93b7404e78dc7ccd5ca89a4ca9");
        assert_eq!(Fe::from_be_bytes(&bytes).unwrap().to_be_bytes(), bytes);
    }

    #[test]
    fn is_odd() {
        assert!(bool::from(Fe::ONE.is_odd()));
        assert!(!bool::from(Fe::from_u64(2).is_odd()));
    }

    #[test]
    fn formatting() {
        let a = Fe::from_u64(255);
        assert_eq!(a.to_string(), "255");
        assert_eq!(
            std::format!("{:x}", a),
            "00000000000000000000000000000000000000000000000000000000000000ff"
        );
    }
}
