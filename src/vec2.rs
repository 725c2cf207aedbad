use crate::assert::check_ne;
use crate::scalar::{self, Scalar};
use crate::vec3::Vec3;
use crate::vec4::Vec4;
use num_traits::{Float, Signed, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector over any numeric element type.
///
/// Plain aggregate with public `x`, `y` fields in declaration order, so an
/// external serializer sees a stable field layout. Arithmetic operators
/// accept the same element type only; cross a type boundary explicitly with
/// [`Vec2::cast`].
///
/// # Examples
///
/// ```
/// use vecmat::vec2::Vec2;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2::new(1.0, 2.0);
/// assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
/// assert_eq!(v1.length(), 5.0);
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vec2<T> {
    pub fn new(x: T, y: T) -> Vec2<T> {
        Vec2 { x, y }
    }

    /// Creates a vector with both components set to the given value.
    #[must_use]
    pub fn splat(v: T) -> Vec2<T> {
        Vec2 { x: v, y: v }
    }

    #[must_use]
    pub fn zero() -> Vec2<T> {
        Vec2::splat(T::zero())
    }

    #[must_use]
    pub fn one() -> Vec2<T> {
        Vec2::splat(T::one())
    }

    /// Unit vector along the positive x-axis.
    #[must_use]
    pub fn right() -> Vec2<T> {
        Vec2 {
            x: T::one(),
            y: T::zero(),
        }
    }

    /// Unit vector along the positive y-axis.
    #[must_use]
    pub fn up() -> Vec2<T> {
        Vec2 {
            x: T::zero(),
            y: T::one(),
        }
    }

    #[must_use]
    pub fn dot(self, other: Vec2<T>) -> T {
        self.x * other.x + self.y * other.y
    }

    #[must_use]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    #[must_use]
    pub fn distance_squared(self, other: Vec2<T>) -> T {
        (other - self).length_squared()
    }

    /// Widens to a [`Vec3`] with z = 0.
    #[must_use]
    pub fn to_vec3(self) -> Vec3<T> {
        Vec3 {
            x: self.x,
            y: self.y,
            z: T::zero(),
        }
    }

    /// Widens to a [`Vec4`] direction with z = 0, w = 0.
    #[must_use]
    pub fn to_vec4(self) -> Vec4<T> {
        Vec4 {
            x: self.x,
            y: self.y,
            z: T::zero(),
            w: T::zero(),
        }
    }

    /// Widens to a homogeneous point: z = 0, w = 1.
    ///
    /// Distinct from [`Vec2::to_vec4`], which zero-pads w — only points (w = 1)
    /// pick up the translation part of an affine transform.
    #[must_use]
    pub fn homogenous(self) -> Vec4<T> {
        Vec4 {
            x: self.x,
            y: self.y,
            z: T::zero(),
            w: T::one(),
        }
    }

    /// Element-type conversion; `None` if a component does not fit.
    #[must_use]
    pub fn cast<U: Scalar>(self) -> Option<Vec2<U>> {
        Some(Vec2 {
            x: U::from(self.x)?,
            y: U::from(self.y)?,
        })
    }
}

impl<T: Scalar + Signed> Vec2<T> {
    /// Unit vector along the negative x-axis.
    #[must_use]
    pub fn left() -> Vec2<T> {
        -Vec2::right()
    }

    /// Unit vector along the negative y-axis.
    #[must_use]
    pub fn down() -> Vec2<T> {
        -Vec2::up()
    }

    /// Component-wise absolute value.
    #[must_use]
    pub fn abs(self) -> Vec2<T> {
        Vec2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }
}

impl<T: Scalar + Float> Vec2<T> {
    #[must_use]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns a unit vector in the same direction, or the zero vector
    /// unchanged if the length is exactly zero.
    #[must_use]
    pub fn normalize(self) -> Vec2<T> {
        let l = self.length();
        if l > T::zero() {
            self * (T::one() / l)
        } else {
            self
        }
    }

    #[must_use]
    pub fn distance(self, other: Vec2<T>) -> T {
        self.distance_squared(other).sqrt()
    }

    /// Returns the vector unchanged if its length is within `max_length`,
    /// otherwise the same direction scaled to `max_length`.
    #[must_use]
    pub fn clamp(self, max_length: T) -> Vec2<T> {
        if self.length() > max_length {
            self.normalize() * max_length
        } else {
            self
        }
    }

    #[must_use]
    pub fn lerp(self, to: Vec2<T>, t: T) -> Vec2<T> {
        Vec2 {
            x: scalar::lerp(self.x, to.x, t),
            y: scalar::lerp(self.y, to.y, t),
        }
    }

    /// Component-wise tolerance comparison with machine epsilon.
    #[must_use]
    pub fn almost_eq(self, rhs: Vec2<T>) -> bool {
        self.almost_eq_with(rhs, T::epsilon())
    }

    /// Component-wise `|difference| <= tolerance`.
    #[must_use]
    pub fn almost_eq_with(self, rhs: Vec2<T>, tolerance: T) -> bool {
        (self.x - rhs.x).abs() <= tolerance && (self.y - rhs.y).abs() <= tolerance
    }
}

impl<T: Scalar> Zero for Vec2<T> {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl<T: Scalar> From<[T; 2]> for Vec2<T> {
    fn from(value: [T; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}

impl<T: Scalar> From<Vec2<T>> for [T; 2] {
    fn from(value: Vec2<T>) -> Self {
        [value.x, value.y]
    }
}

impl<T: Scalar> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Scalar> Add<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T>;

    fn add(self, rhs: Vec2<T>) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl<T: Scalar> AddAssign<Vec2<T>> for Vec2<T> {
    fn add_assign(&mut self, rhs: Vec2<T>) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Scalar> Sub<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T>;

    fn sub(self, rhs: Vec2<T>) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl<T: Scalar> SubAssign<Vec2<T>> for Vec2<T> {
    fn sub_assign(&mut self, rhs: Vec2<T>) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

/// Component-wise product, not a dot product.
impl<T: Scalar> Mul<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T>;

    fn mul(self, rhs: Vec2<T>) -> Self::Output {
        Vec2 {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
        }
    }
}
impl<T: Scalar> MulAssign<Vec2<T>> for Vec2<T> {
    fn mul_assign(&mut self, rhs: Vec2<T>) {
        self.x *= rhs.x;
        self.y *= rhs.y;
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Vec2<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Vec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl<T: Scalar> MulAssign<T> for Vec2<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl<T: Scalar> Div<T> for Vec2<T> {
    type Output = Vec2<T>;

    fn div(self, rhs: T) -> Self::Output {
        check_ne!(rhs, T::zero());
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl<T: Scalar> DivAssign<T> for Vec2<T> {
    fn div_assign(&mut self, rhs: T) {
        check_ne!(rhs, T::zero());
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl<T: Scalar + Signed> Neg for Vec2<T> {
    type Output = Vec2<T>;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Scalar> Sum<Vec2<T>> for Vec2<T> {
    fn sum<I: Iterator<Item = Vec2<T>>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), Vec2::add)
    }
}

macro_rules! vec2_scalar_lhs_mul {
    ($($t:ty),+) => {$(
        impl Mul<Vec2<$t>> for $t {
            type Output = Vec2<$t>;

            fn mul(self, rhs: Vec2<$t>) -> Self::Output {
                rhs * self
            }
        }
    )+};
}
vec2_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
