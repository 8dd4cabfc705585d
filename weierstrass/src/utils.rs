//! Multi-precision limb arithmetic and the Montgomery engine shared by
//! [`FieldElement`](crate::FieldElement) and [`Scalar`](crate::Scalar).
//!
//! Integers are stored as little-endian arrays of 64-bit words. Every
//! routine here runs a fixed sequence of word operations: carries and
//! borrows are turned into masks instead of branches.

use core::fmt;

use crate::{DoubleWord, Word, Words, LIMBS, WORD_WIDTH_BITS};

/// Number of bytes in a big-endian encoding of [`Words`].
pub const BYTES: usize = LIMBS * 8;

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let ret = (a as DoubleWord) + (b as DoubleWord) + (carry as DoubleWord);
    (ret as Word, (ret >> WORD_WIDTH_BITS) as Word)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow.
///
/// The borrow is either `0` or `Word::MAX`.
#[inline(always)]
pub(crate) const fn sbb(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let (a, b) = (a as DoubleWord, b as DoubleWord);
    let t = (borrow >> (WORD_WIDTH_BITS - 1)) as DoubleWord;
    let ret = a.wrapping_sub(b + t);
    (ret as Word, (ret >> WORD_WIDTH_BITS) as Word)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn mac(a: Word, b: Word, c: Word, carry: Word) -> (Word, Word) {
    let (a, b, c) = (a as DoubleWord, b as DoubleWord, c as DoubleWord);
    let ret = a + b * c + (carry as DoubleWord);
    (ret as Word, (ret >> WORD_WIDTH_BITS) as Word)
}

/// Decodes a big-endian byte string into little-endian words.
pub const fn words_from_be_bytes(bytes: &[u8; BYTES]) -> Words {
    let mut words = [0; LIMBS];
    let mut i = 0;
    while i < LIMBS {
        let offset = (LIMBS - 1 - i) * 8;
        let mut w: Word = 0;
        let mut j = 0;
        while j < 8 {
            w = (w << 8) | bytes[offset + j] as Word;
            j += 1;
        }
        words[i] = w;
        i += 1;
    }
    words
}

/// Encodes little-endian words as a big-endian byte string.
pub const fn words_to_be_bytes(words: &Words) -> [u8; BYTES] {
    let mut bytes = [0; BYTES];
    let mut i = 0;
    while i < LIMBS {
        let offset = (LIMBS - 1 - i) * 8;
        let mut j = 0;
        while j < 8 {
            bytes[offset + j] = (words[i] >> (56 - 8 * j)) as u8;
            j += 1;
        }
        i += 1;
    }
    bytes
}

/// Returns `a - b` along with the final borrow mask.
pub(crate) const fn sub_words(a: &Words, b: &Words) -> (Words, Word) {
    let mut r = [0; LIMBS];
    let mut borrow = 0;
    let mut i = 0;
    while i < LIMBS {
        let (w, bw) = sbb(a[i], b[i], borrow);
        r[i] = w;
        borrow = bw;
        i += 1;
    }
    (r, borrow)
}

/// Returns `a + w`, discarding any carry out of the top word.
pub(crate) const fn add_word(a: &Words, w: Word) -> Words {
    let mut r = [0; LIMBS];
    let mut carry = w;
    let mut i = 0;
    while i < LIMBS {
        let (v, c) = adc(a[i], 0, carry);
        r[i] = v;
        carry = c;
        i += 1;
    }
    r
}

/// Returns `a >> shift` for `shift < 64`.
pub(crate) const fn shr_words(a: &Words, shift: u32) -> Words {
    let mut r = [0; LIMBS];
    let mut i = 0;
    while i < LIMBS {
        r[i] = a[i] >> shift;
        if shift > 0 && i + 1 < LIMBS {
            r[i] |= a[i + 1] << (WORD_WIDTH_BITS - shift);
        }
        i += 1;
    }
    r
}

/// Returns `Word::MAX` when `a < b` and `0` otherwise.
pub(crate) const fn lt_mask(a: &Words, b: &Words) -> Word {
    sub_words(a, b).1
}

/// Returns `Word::MAX` when every word of `a` is zero and `0` otherwise.
pub(crate) const fn is_zero_mask(a: &Words) -> Word {
    let mut acc = 0;
    let mut i = 0;
    while i < LIMBS {
        acc |= a[i];
        i += 1;
    }
    // `acc | -acc` has its top bit set iff `acc != 0`.
    let nonzero = (acc | acc.wrapping_neg()) >> (WORD_WIDTH_BITS - 1);
    nonzero.wrapping_sub(1)
}

/// Selects `b` where `mask` is `Word::MAX` and `a` where it is `0`.
pub(crate) const fn select_words(a: &Words, b: &Words, mask: Word) -> Words {
    let mut r = [0; LIMBS];
    let mut i = 0;
    while i < LIMBS {
        r[i] = a[i] ^ (mask & (a[i] ^ b[i]));
        i += 1;
    }
    r
}

/// Subtracts `modulus` from the `LIMBS + 1` word value `hi:a` when the
/// result does not underflow. Requires `hi:a < 2 * modulus`.
const fn reduce_once(a: &Words, hi: Word, modulus: &Words) -> Words {
    let (r, borrow) = sub_words(a, modulus);
    let (_, borrow) = sbb(hi, 0, borrow);

    // If underflow occurred on the final word, borrow = 0xfff...fff, otherwise
    // borrow = 0x000...000. Thus, we use it as a mask to conditionally add the
    // modulus back.
    let mut out = [0; LIMBS];
    let mut carry = 0;
    let mut i = 0;
    while i < LIMBS {
        let (w, c) = adc(r[i], modulus[i] & borrow, carry);
        out[i] = w;
        carry = c;
        i += 1;
    }
    out
}

/// Returns `a + b mod modulus` for `a, b < modulus`.
const fn add_mod(a: &Words, b: &Words, modulus: &Words) -> Words {
    let mut t = [0; LIMBS];
    let mut carry = 0;
    let mut i = 0;
    while i < LIMBS {
        let (w, c) = adc(a[i], b[i], carry);
        t[i] = w;
        carry = c;
        i += 1;
    }
    reduce_once(&t, carry, modulus)
}

/// Returns `a - b mod modulus` for `a, b < modulus`.
const fn sub_mod(a: &Words, b: &Words, modulus: &Words) -> Words {
    let (r, borrow) = sub_words(a, b);
    let mut out = [0; LIMBS];
    let mut carry = 0;
    let mut i = 0;
    while i < LIMBS {
        let (w, c) = adc(r[i], modulus[i] & borrow, carry);
        out[i] = w;
        carry = c;
        i += 1;
    }
    out
}

/// Returns `2^k mod modulus` by repeated modular doubling.
const fn pow2_mod(k: usize, modulus: &Words) -> Words {
    let mut x = [0; LIMBS];
    x[0] = 1;
    let mut i = 0;
    while i < k {
        x = add_mod(&x, &x, modulus);
        i += 1;
    }
    x
}

/// Returns `-m^{-1} mod 2^64` for odd `m`.
const fn neg_inv(m: Word) -> Word {
    // Newton iteration doubles the number of correct low bits per step,
    // starting from the one bit that is correct for any odd `m`.
    let mut inv: Word = 1;
    let mut i = 0;
    while i < 6 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(m.wrapping_mul(inv)));
        i += 1;
    }
    inv.wrapping_neg()
}

/// Precomputed Montgomery parameters for an odd modulus `m < 2^256`.
///
/// Values handed to [`MontyParams::mul`] are in Montgomery form, i.e. `aR mod m`
/// with `R = 2^256`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MontyParams {
    /// The modulus `m`.
    pub(crate) modulus: Words,

    /// `R mod m`, the Montgomery form of one.
    pub(crate) one: Words,

    /// `R^2 mod m`
    r2: Words,

    /// `m * inv ≡ -1 (mod 2^64)`
    inv: Word,
}

impl MontyParams {
    pub(crate) const fn new(modulus: Words) -> Self {
        Self {
            modulus,
            one: pow2_mod(LIMBS * WORD_WIDTH_BITS as usize, &modulus),
            r2: pow2_mod(2 * LIMBS * WORD_WIDTH_BITS as usize, &modulus),
            inv: neg_inv(modulus[0]),
        }
    }

    pub(crate) const fn add(&self, a: &Words, b: &Words) -> Words {
        add_mod(a, b, &self.modulus)
    }

    pub(crate) const fn sub(&self, a: &Words, b: &Words) -> Words {
        sub_mod(a, b, &self.modulus)
    }

    pub(crate) const fn neg(&self, a: &Words) -> Words {
        sub_mod(&[0; LIMBS], a, &self.modulus)
    }

    /// Montgomery Reduction: returns `t * R^-1 mod m` for `t < m * R`.
    const fn reduce(&self, t: &[Word; 2 * LIMBS]) -> Words {
        let mut t = *t;
        let mut hi = 0;
        let mut i = 0;
        while i < LIMBS {
            let u = t[i].wrapping_mul(self.inv);
            let mut carry = 0;
            let mut j = 0;
            while j < LIMBS {
                let (w, c) = mac(t[i + j], u, self.modulus[j], carry);
                t[i + j] = w;
                carry = c;
                j += 1;
            }
            let mut k = i + LIMBS;
            while k < 2 * LIMBS {
                let (w, c) = adc(t[k], 0, carry);
                t[k] = w;
                carry = c;
                k += 1;
            }
            hi += carry;
            i += 1;
        }

        let mut r = [0; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            r[i] = t[i + LIMBS];
            i += 1;
        }
        reduce_once(&r, hi, &self.modulus)
    }

    /// Returns `a * b * R^-1 mod m`.
    pub(crate) const fn mul(&self, a: &Words, b: &Words) -> Words {
        let mut w = [0; 2 * LIMBS];

        // Schoolbook multiplication.
        let mut i = 0;
        while i < LIMBS {
            let mut carry = 0;
            let mut j = 0;
            while j < LIMBS {
                let (v, c) = mac(w[i + j], a[i], b[j], carry);
                w[i + j] = v;
                carry = c;
                j += 1;
            }
            w[i + LIMBS] = carry;
            i += 1;
        }

        self.reduce(&w)
    }

    /// Converts any 256-bit integer into Montgomery form, reducing it modulo `m`.
    pub(crate) const fn to_montgomery(&self, a: &Words) -> Words {
        self.mul(a, &self.r2)
    }

    /// Converts out of Montgomery form into the canonical integer in `[0, m)`.
    pub(crate) const fn from_montgomery(&self, a: &Words) -> Words {
        let mut t = [0; 2 * LIMBS];
        let mut i = 0;
        while i < LIMBS {
            t[i] = a[i];
            i += 1;
        }
        self.reduce(&t)
    }

    /// Returns `base^exp` for a Montgomery-form `base` and a little-endian
    /// integer exponent.
    ///
    /// Every exponent bit costs one squaring and one multiplication; the
    /// product is kept or discarded with a mask.
    pub(crate) const fn pow(&self, base: &Words, exp: &Words) -> Words {
        let mut res = self.one;
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            let mut j = WORD_WIDTH_BITS;
            while j > 0 {
                j -= 1;
                res = self.mul(&res, &res);
                let t = self.mul(&res, base);
                let mask = ((exp[i] >> j) & 1).wrapping_neg();
                res = select_words(&res, &t, mask);
            }
        }
        res
    }
}

/// Writes a 256-bit integer in decimal.
pub(crate) fn fmt_decimal(words: &Words, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    const CHUNK: DoubleWord = 10_000_000_000_000_000_000;

    // 2^256 < 10^78, so five 19-digit chunks always suffice.
    let mut chunks = [0 as Word; 5];
    let mut len = 0;
    let mut n = *words;
    loop {
        let mut rem: DoubleWord = 0;
        for w in n.iter_mut().rev() {
            let cur = (rem << WORD_WIDTH_BITS) | (*w as DoubleWord);
            *w = (cur / CHUNK) as Word;
            rem = cur % CHUNK;
        }
        chunks[len] = rem as Word;
        len += 1;
        if n.iter().all(|&w| w == 0) {
            break;
        }
    }

    write!(f, "{}", chunks[len - 1])?;
    for chunk in chunks[..len - 1].iter().rev() {
        write!(f, "{:019}", chunk)?;
    }
    Ok(())
}

/// Writes a 256-bit integer as fixed-width hexadecimal.
pub(crate) fn fmt_hex(words: &Words, f: &mut fmt::Formatter<'_>, upper: bool) -> fmt::Result {
    for word in words.iter().rev() {
        if upper {
            write!(f, "{:016X}", word)?;
        } else {
            write!(f, "{:016x}", word)?;
        }
    }
    Ok(())
}
