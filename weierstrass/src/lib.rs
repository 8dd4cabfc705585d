#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod demo;
pub mod point_arithmetic;
pub mod sec1;

mod affine;
mod error;
mod field;
mod mul;
mod named_curve;
mod projective;
mod scalar;
mod secp256r1;
mod utils;

pub use crate::{
    affine::AffinePoint,
    error::{Error, Result},
    field::FieldElement,
    mul::{mul_by_generator, scalar_multiply},
    named_curve::{CurveDescription, NamedCurve},
    projective::ProjectivePoint,
    scalar::Scalar,
    secp256r1::Secp256r1,
    utils::{words_from_be_bytes, words_to_be_bytes, BYTES},
};
pub use subtle;

use core::fmt::Debug;

/// Machine word used for multi-precision limbs.
pub type Word = u64;
type DoubleWord = u128;
const WORD_WIDTH_BITS: u32 = Word::BITS;

/// Number of limbs in a field element or scalar.
pub const LIMBS: usize = 4;

/// A 256-bit integer as little-endian limbs.
pub type Words = [Word; LIMBS];

/// Parameters of a prime-order curve `y² = x³ + ax + b` over `GF(p)`.
///
/// Implemented by zero-sized marker types. All values are canonical integers
/// (not in Montgomery form); derived constants are computed at compile time.
/// The parameters are trusted: they are never validated at runtime.
pub trait CurveParameters: Copy + Clone + Debug + Default + Eq + Send + Sync + 'static {
    /// Standard name of the curve.
    const NAME: &'static str;

    /// Field modulus `p`: an odd prime. Point decompression additionally
    /// requires `p ≡ 3 mod 4`.
    const MODULUS_P: Words;

    /// Order `n` of the base point: an odd prime.
    const ORDER_N: Words;

    /// Coefficient `a` in the curve equation.
    const EQUATION_A: Words;

    /// Coefficient `b` in the curve equation.
    const EQUATION_B: Words;

    /// Base point's affine coordinates: (x, y).
    const GENERATOR: (Words, Words);
}
