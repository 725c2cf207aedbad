use crate::assert::check_ne;
use crate::scalar::{self, Scalar};
use crate::vec2::Vec2;
use crate::vec3::Vec3;
use num_traits::{Float, Signed, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 4D vector over any numeric element type.
///
/// Mostly used as the homogeneous form of a [`Vec3`]: w = 1 for points and
/// w = 0 for directions. See [`Vec3::homogenous`] and [`Vec3::to_vec4`].
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Scalar> Vec4<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Vec4<T> {
        Vec4 { x, y, z, w }
    }

    /// Creates a vector with all four components set to the given value.
    #[must_use]
    pub fn splat(v: T) -> Vec4<T> {
        Vec4 {
            x: v,
            y: v,
            z: v,
            w: v,
        }
    }

    #[must_use]
    pub fn zero() -> Vec4<T> {
        Vec4::splat(T::zero())
    }

    #[must_use]
    pub fn one() -> Vec4<T> {
        Vec4::splat(T::one())
    }

    #[must_use]
    pub fn dot(self, other: Vec4<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[must_use]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    #[must_use]
    pub fn distance_squared(self, other: Vec4<T>) -> T {
        (other - self).length_squared()
    }

    /// Narrows to a [`Vec2`], dropping z and w.
    #[must_use]
    pub fn to_vec2(self) -> Vec2<T> {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }

    /// Narrows to a [`Vec3`], dropping w without dividing by it.
    #[must_use]
    pub fn to_vec3(self) -> Vec3<T> {
        Vec3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// Element-type conversion; `None` if a component does not fit.
    #[must_use]
    pub fn cast<U: Scalar>(self) -> Option<Vec4<U>> {
        Some(Vec4 {
            x: U::from(self.x)?,
            y: U::from(self.y)?,
            z: U::from(self.z)?,
            w: U::from(self.w)?,
        })
    }
}

impl<T: Scalar + Signed> Vec4<T> {
    /// Component-wise absolute value.
    #[must_use]
    pub fn abs(self) -> Vec4<T> {
        Vec4 {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
            w: self.w.abs(),
        }
    }
}

impl<T: Scalar + Float> Vec4<T> {
    #[must_use]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns a unit vector in the same direction, or the zero vector
    /// unchanged if the length is exactly zero.
    #[must_use]
    pub fn normalize(self) -> Vec4<T> {
        let l = self.length();
        if l > T::zero() {
            self * (T::one() / l)
        } else {
            self
        }
    }

    #[must_use]
    pub fn distance(self, other: Vec4<T>) -> T {
        self.distance_squared(other).sqrt()
    }

    /// Returns the vector unchanged if its length is within `max_length`,
    /// otherwise the same direction scaled to `max_length`.
    #[must_use]
    pub fn clamp(self, max_length: T) -> Vec4<T> {
        if self.length() > max_length {
            self.normalize() * max_length
        } else {
            self
        }
    }

    #[must_use]
    pub fn lerp(self, to: Vec4<T>, t: T) -> Vec4<T> {
        Vec4 {
            x: scalar::lerp(self.x, to.x, t),
            y: scalar::lerp(self.y, to.y, t),
            z: scalar::lerp(self.z, to.z, t),
            w: scalar::lerp(self.w, to.w, t),
        }
    }

    /// Divides through by w, producing the 3D point this homogeneous vector
    /// represents.
    #[must_use]
    pub fn perspective_divide(self) -> Vec3<T> {
        check_ne!(self.w, T::zero());
        Vec3 {
            x: self.x / self.w,
            y: self.y / self.w,
            z: self.z / self.w,
        }
    }

    /// Component-wise tolerance comparison with machine epsilon.
    #[must_use]
    pub fn almost_eq(self, rhs: Vec4<T>) -> bool {
        self.almost_eq_with(rhs, T::epsilon())
    }

    /// Component-wise `|difference| <= tolerance`.
    #[must_use]
    pub fn almost_eq_with(self, rhs: Vec4<T>, tolerance: T) -> bool {
        (self.x - rhs.x).abs() <= tolerance
            && (self.y - rhs.y).abs() <= tolerance
            && (self.z - rhs.z).abs() <= tolerance
            && (self.w - rhs.w).abs() <= tolerance
    }
}

impl<T: Scalar> Zero for Vec4<T> {
    fn zero() -> Self {
        Vec4::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl<T: Scalar> From<[T; 4]> for Vec4<T> {
    fn from(value: [T; 4]) -> Self {
        Vec4 {
            x: value[0],
            y: value[1],
            z: value[2],
            w: value[3],
        }
    }
}

impl<T: Scalar> From<Vec4<T>> for [T; 4] {
    fn from(value: Vec4<T>) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}

impl<T: Scalar> fmt::Display for Vec4<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl<T: Scalar> Add<Vec4<T>> for Vec4<T> {
    type Output = Vec4<T>;

    fn add(self, rhs: Vec4<T>) -> Self::Output {
        Vec4 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}
impl<T: Scalar> AddAssign<Vec4<T>> for Vec4<T> {
    fn add_assign(&mut self, rhs: Vec4<T>) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.w += rhs.w;
    }
}

impl<T: Scalar> Sub<Vec4<T>> for Vec4<T> {
    type Output = Vec4<T>;

    fn sub(self, rhs: Vec4<T>) -> Self::Output {
        Vec4 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}
impl<T: Scalar> SubAssign<Vec4<T>> for Vec4<T> {
    fn sub_assign(&mut self, rhs: Vec4<T>) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.w -= rhs.w;
    }
}

/// Component-wise product, not a dot product.
impl<T: Scalar> Mul<Vec4<T>> for Vec4<T> {
    type Output = Vec4<T>;

    fn mul(self, rhs: Vec4<T>) -> Self::Output {
        Vec4 {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
            w: self.w * rhs.w,
        }
    }
}
impl<T: Scalar> MulAssign<Vec4<T>> for Vec4<T> {
    fn mul_assign(&mut self, rhs: Vec4<T>) {
        self.x *= rhs.x;
        self.y *= rhs.y;
        self.z *= rhs.z;
        self.w *= rhs.w;
    }
}

impl<T: Scalar> Mul<T> for Vec4<T> {
    type Output = Vec4<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Vec4 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}
impl<T: Scalar> MulAssign<T> for Vec4<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
        self.w *= rhs;
    }
}

impl<T: Scalar> Div<T> for Vec4<T> {
    type Output = Vec4<T>;

    fn div(self, rhs: T) -> Self::Output {
        check_ne!(rhs, T::zero());
        Vec4 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}
impl<T: Scalar> DivAssign<T> for Vec4<T> {
    fn div_assign(&mut self, rhs: T) {
        check_ne!(rhs, T::zero());
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
        self.w /= rhs;
    }
}

impl<T: Scalar + Signed> Neg for Vec4<T> {
    type Output = Vec4<T>;

    fn neg(self) -> Self::Output {
        Vec4 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl<T: Scalar> Sum<Vec4<T>> for Vec4<T> {
    fn sum<I: Iterator<Item = Vec4<T>>>(iter: I) -> Self {
        iter.fold(Vec4::zero(), Vec4::add)
    }
}

macro_rules! vec4_scalar_lhs_mul {
    ($($t:ty),+) => {$(
        impl Mul<Vec4<$t>> for $t {
            type Output = Vec4<$t>;

            fn mul(self, rhs: Vec4<$t>) -> Self::Output {
                rhs * self
            }
        }
    )+};
}
vec4_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a + b, Vec4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b - a, Vec4::splat(4.0));
        assert_eq!(a * b, Vec4::new(5.0, 12.0, 21.0, 32.0));
        assert_eq!(a * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vec4::new(2.5, 3.0, 3.5, 4.0));
        assert_eq!(-a, Vec4::new(-1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn in_place_forms() {
        let mut v = Vec4::new(1, 2, 3, 4);
        v += Vec4::splat(1);
        assert_eq!(v, Vec4::new(2, 3, 4, 5));
        v -= Vec4::splat(2);
        assert_eq!(v, Vec4::new(0, 1, 2, 3));
        v *= 3;
        assert_eq!(v, Vec4::new(0, 3, 6, 9));
        v /= 3;
        assert_eq!(v, Vec4::new(0, 1, 2, 3));
    }

    #[test]
    fn dot_and_length() {
        let v = Vec4::new(1.0_f64, 2.0, 3.0, 4.0);
        assert_eq!(v.dot(v), 30.0);
        assert_eq!(v.length_squared(), 30.0);
        assert!(scalar::almost_eq(v.length(), 30.0_f64.sqrt()));
        assert_eq!(Vec4::new(2.0_f32, 0.0, 0.0, 0.0).length(), 2.0);
    }

    #[test]
    fn normalize_handles_zero_vector() {
        let v = Vec4::new(0.0_f64, 0.0, 3.0, 4.0).normalize();
        assert!(v.almost_eq(Vec4::new(0.0, 0.0, 0.6, 0.8)));
        assert_eq!(Vec4::<f32>::zero().normalize(), Vec4::zero());
    }

    #[test]
    fn clamp_limits_length() {
        let v = Vec4::new(0.0_f32, 0.0, 3.0, 4.0);
        assert_eq!(v.clamp(10.0), v);
        let clamped = v.clamp(1.0);
        assert!(scalar::almost_eq(clamped.length(), 1.0));
        assert!(clamped.almost_eq(Vec4::new(0.0, 0.0, 0.6, 0.8)));
    }

    #[test]
    fn perspective_divide_recovers_point() {
        let v = Vec4::new(2.0, 4.0, 6.0, 2.0);
        assert_eq!(v.perspective_divide(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn dimension_conversions() {
        let v = Vec4::new(1, 2, 3, 4);
        assert_eq!(v.to_vec2(), Vec2::new(1, 2));
        assert_eq!(v.to_vec3(), Vec3::new(1, 2, 3));
    }

    #[test]
    fn cast_between_element_types() {
        let v = Vec4::new(1_i64, 2, 3, 4);
        assert_eq!(v.cast::<f32>(), Some(Vec4::new(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(Vec4::new(-1, 0, 0, 0).cast::<u16>(), None);
    }

    #[test]
    fn display_format() {
        assert_eq!(Vec4::new(1, 2, 3, 4).to_string(), "(1, 2, 3, 4)");
    }

    #[test]
    fn lerp_midpoint() {
        let a = Vec4::<f64>::zero();
        let b = Vec4::new(2.0, 4.0, 6.0, 8.0);
        assert_eq!(a.lerp(b, 0.5), Vec4::new(1.0, 2.0, 3.0, 4.0));
    }
}
