//! GF(2^8) arithmetic module.
//!
//! This module implements finite field arithmetic over GF(2^8), using the irreducible polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B), the same field AES uses. An element is an 8-bit value read
//! as a polynomial over GF(2) of degree at most 7; since the backing type is `u8`, every element
//! is held in reduced form by construction.
//!
//! # Design Choices
//! - **No Tables**: Multiplication is a carry-less product followed by reduction, both written
//!   with masks instead of data-dependent branches so no secret-indexed memory is touched.
//! - **One Additive Primitive**: The field has characteristic 2, so addition and subtraction are
//!   the same XOR. `Sub` forwards to `Add`.
//! - **Checked Division**: Zero has no inverse. `inv` and `checked_div` report it as
//!   `SssError::InvalidFieldOperation` instead of returning a conventional value.
//!
//! # Usage
//! ```
//! use shrz::core::GF256;
//! let a = GF256(0x57);
//! let b = GF256(0x83);
//! assert_eq!(a + b, GF256(0xD4)); // XOR
//! assert_eq!(a * b, GF256(0xC1)); // product mod 0x11B
//! assert_eq!(a * a.inv().unwrap(), GF256(1));
//! ```

#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use zeroize::Zeroize;

use super::field::Field;
use crate::mpc::SssError;

/// Full irreducible polynomial (x^8 + x^4 + x^3 + x + 1).
pub const POLY_FULL: u16 = 0b1_0001_1011;

/// Exponent giving the multiplicative inverse: a^(2^8 - 2) = a^-1 for a != 0.
const INVERSE_EXPONENT: u32 = 254;

/// The finite field element type, wrapping a u8.
///
/// This wrapper ensures domain-specific operations and prevents accidental misuse (e.g., raw XOR
/// instead of GF add, or integer multiplication instead of GF multiplication).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct GF256(pub u8);

impl From<u8> for GF256 {
    /// Converts a u8 to GF256. No validation needed as GF(2^8) covers all 256 values.
    #[inline(always)]
    fn from(value: u8) -> Self {
        GF256(value)
    }
}

impl From<GF256> for u8 {
    #[inline(always)]
    fn from(gf: GF256) -> u8 {
        gf.0
    }
}

/// Carry-less (XOR) product of two 8-bit polynomials. The result has degree at most 14.
#[inline(always)]
fn carryless_mul(a: u8, b: u8) -> u16 {
    let mut product: u16 = 0;
    for i in 0..8 {
        let bit = ((b >> i) & 1) as u16;
        let mask = bit.wrapping_neg(); // 0xFFFF or 0x0000
        product ^= ((a as u16) << i) & mask;
    }
    product
}

/// Reduces a binary polynomial of degree <= 14 modulo `POLY_FULL`.
///
/// Walks the degrees from 14 down to 8 and XORs the modulus, shifted to line up with that
/// degree, whenever the bit is set. Afterwards the degree is below 8.
#[inline(always)]
fn reduce(mut n: u16) -> u8 {
    for degree in (8..15).rev() {
        let bit = (n >> degree) & 1;
        let mask = bit.wrapping_neg();
        n ^= (POLY_FULL << (degree - 8)) & mask;
    }
    n as u8
}

/// GF(2^8) addition: simple XOR, as the field characteristic is 2.
impl Add for GF256 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        GF256(self.0 ^ rhs.0)
    }
}

impl AddAssign for GF256 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Every element is its own additive inverse, so subtraction is addition.
impl Sub for GF256 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self + rhs
    }
}

impl SubAssign for GF256 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// GF(2^8) multiplication: carry-less product reduced modulo 0x11B.
impl Mul for GF256 {
    type Output = Self;

    /// Multiplies two GF elements with reduction modulo 0x11B.
    ///
    /// # Safety Guarantees
    /// - Constant-time: fixed iteration counts and mask-based conditionals.
    /// - Closed: the result is always a reduced element.
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        GF256(reduce(carryless_mul(self.0, rhs.0)))
    }
}

impl MulAssign for GF256 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl GF256 {
    pub const ZERO: GF256 = GF256(0);
    pub const ONE: GF256 = GF256(1);

    /// Raises `self` to a non-negative integer power by repeated squaring.
    ///
    /// `x.pow(0)` is one for every `x`, including zero.
    pub fn pow(self, mut exponent: u32) -> Self {
        let mut result = GF256::ONE;
        let mut base = self;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result *= base;
            }
            base *= base;
            exponent >>= 1;
        }
        result
    }

    /// Computes the multiplicative inverse a^{-1} such that a * a^{-1} = 1 mod poly.
    ///
    /// Uses Fermat's little theorem for GF(2^8): a^{-1} = a^254.
    ///
    /// # Failure Modes
    /// - a = 0: `SssError::InvalidFieldOperation`, zero has no inverse.
    pub fn inv(self) -> Result<Self, SssError> {
        if self.is_zero() {
            return Err(SssError::InvalidFieldOperation);
        }
        Ok(self.pow(INVERSE_EXPONENT))
    }

    /// Computes self / rhs = self * inv(rhs).
    ///
    /// # Failure Modes
    /// - rhs = 0: `SssError::InvalidFieldOperation`.
    pub fn div(self, rhs: Self) -> Result<Self, SssError> {
        Ok(self * rhs.inv()?)
    }
}

impl Field for GF256 {
    #[inline(always)]
    fn zero() -> Self {
        GF256::ZERO
    }

    #[inline(always)]
    fn one() -> Self {
        GF256::ONE
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> Result<Self, SssError> {
        self.div(rhs)
    }
}
