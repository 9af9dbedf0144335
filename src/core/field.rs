//! Field capability set.
//!
//! Polynomial multiplication, evaluation and both interpolation forms only need
//! `{add, sub, mul, div, zero, one}` plus equality, so they are written once against
//! this trait. `GF256` is the production field; tests plug in exact rationals.

use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use crate::mpc::SssError;

/// An element of a field.
///
/// Addition, subtraction and multiplication are total and use the operator traits.
/// Division is the only partial operation and is exposed as [`Field::checked_div`].
/// `PartialEq` must be the field's own equality: representations that denote the same
/// value have to compare equal.
pub trait Field:
    Copy + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Computes `self / rhs`.
    ///
    /// # Errors
    /// * `SssError::InvalidFieldOperation` when `rhs` is the additive identity.
    fn checked_div(self, rhs: Self) -> Result<Self, SssError>;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}
