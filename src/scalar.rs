//! Scalar building blocks shared by the vector/matrix/quaternion types.
//!
//! [`Scalar`] is the numeric-element bound used throughout the crate: any
//! built-in integer or float satisfies it. Trigonometry, square roots and
//! epsilon comparisons additionally require [`num_traits::Float`], and
//! sign-dependent operations require [`num_traits::Signed`] — integer
//! element types keep the plain arithmetic surface and nothing more.

use anyhow::{bail, Result};
use num_traits::{Float, Num, NumCast, Signed};
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Compile-time bound for a matrix/vector/quaternion element type.
///
/// Blanket-implemented for every type with the standard numeric operations,
/// so callers never implement it by hand.
pub trait Scalar:
    Num
    + NumCast
    + Copy
    + PartialOrd
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Display
    + Debug
    + 'static
{
}

impl<T> Scalar for T where
    T: Num
        + NumCast
        + Copy
        + PartialOrd
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + Display
        + Debug
        + 'static
{
}

/// Converts an `f64` literal into any float element type.
///
/// Constants like `2.0` or `0.001` appear throughout the quaternion and
/// matrix formulas; this keeps those call sites readable. Falls back to NaN
/// for values a narrower float cannot represent.
pub fn flt<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

pub fn abs<T: Scalar + Signed>(v: T) -> T {
    v.abs()
}

pub fn sin<T: Float>(v: T) -> T {
    v.sin()
}

pub fn cos<T: Float>(v: T) -> T {
    v.cos()
}

pub fn tan<T: Float>(v: T) -> T {
    v.tan()
}

pub fn asin<T: Float>(v: T) -> T {
    v.asin()
}

pub fn acos<T: Float>(v: T) -> T {
    v.acos()
}

pub fn atan<T: Float>(v: T) -> T {
    v.atan()
}

pub fn sqrt<T: Float>(v: T) -> T {
    v.sqrt()
}

/// Raises `v` to a non-negative integer power by repeated squaring.
pub fn pow<T: Scalar>(v: T, exp: u32) -> T {
    num_traits::pow(v, exp as usize)
}

pub fn min<T: Scalar>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

pub fn max<T: Scalar>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// Tolerance comparison: `|b - a| < tolerance` (strictly less).
///
/// Note the strict `<` here versus the `<=` used by the vector/matrix
/// `almost_eq` methods; both forms are part of the public contract.
pub fn is_equal<T: Scalar + Signed>(a: T, b: T, tolerance: T) -> bool {
    abs(b - a) < tolerance
}

/// [`is_equal`] with the element type's machine epsilon as tolerance.
pub fn almost_eq<T: Float>(a: T, b: T) -> bool {
    (b - a).abs() < T::epsilon()
}

pub fn deg_to_rad<T: Float>(v: T) -> T {
    v.to_radians()
}

pub fn rad_to_deg<T: Float>(v: T) -> T {
    v.to_degrees()
}

/// Linear interpolation between `a` and `b`, with `t` unclamped.
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Numeric cast that fails instead of silently truncating.
///
/// The arithmetic operators deliberately accept only matching element types;
/// this is the explicit escape hatch for crossing between them.
pub fn checked_cast<T: Scalar, U: Scalar>(v: T) -> Result<U> {
    match U::from(v) {
        Some(u) => Ok(u),
        None => bail!("{v} does not fit in the range of the target type"),
    }
}

/// Numeric cast falling back to a caller-supplied default.
pub fn cast_or<T: Scalar, U: Scalar>(v: T, default: U) -> U {
    U::from(v).unwrap_or(default)
}
