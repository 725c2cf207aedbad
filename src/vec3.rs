use crate::assert::{check_gt, check_ne};
use crate::scalar::{self, Scalar};
use crate::vec2::Vec2;
use crate::vec4::Vec4;
use num_traits::{Float, Signed, Zero};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3D vector over any numeric element type.
///
/// Directional constants use a y-up, z-forward right-handed frame:
/// [`Vec3::forward`] is `(0, 0, 1)` even though the camera builders look
/// down -z, so a look-at view matrix maps forward to negative depth.
///
/// # Examples
///
/// ```
/// use vecmat::vec3::Vec3;
///
/// let v = Vec3::new(1.0, 2.0, 2.0);
/// assert_eq!(v.length(), 3.0);
/// assert_eq!(Vec3::<f32>::right().cross(Vec3::up()), Vec3::forward());
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vec3<T> {
    pub fn new(x: T, y: T, z: T) -> Vec3<T> {
        Vec3 { x, y, z }
    }

    /// Creates a vector with all three components set to the given value.
    #[must_use]
    pub fn splat(v: T) -> Vec3<T> {
        Vec3 { x: v, y: v, z: v }
    }

    #[must_use]
    pub fn zero() -> Vec3<T> {
        Vec3::splat(T::zero())
    }

    #[must_use]
    pub fn one() -> Vec3<T> {
        Vec3::splat(T::one())
    }

    /// Unit vector along the positive x-axis.
    #[must_use]
    pub fn right() -> Vec3<T> {
        Vec3 {
            x: T::one(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Unit vector along the positive y-axis.
    #[must_use]
    pub fn up() -> Vec3<T> {
        Vec3 {
            x: T::zero(),
            y: T::one(),
            z: T::zero(),
        }
    }

    #[must_use]
    pub fn dot(self, other: Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    #[must_use]
    pub fn distance_squared(self, other: Vec3<T>) -> T {
        (other - self).length_squared()
    }

    /// Narrows to a [`Vec2`], dropping z.
    #[must_use]
    pub fn to_vec2(self) -> Vec2<T> {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }

    /// Widens to a [`Vec4`] direction with w = 0.
    #[must_use]
    pub fn to_vec4(self) -> Vec4<T> {
        Vec4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w: T::zero(),
        }
    }

    /// Widens to a homogeneous point with w = 1.
    ///
    /// Only points (w = 1) pick up the translation part of an affine
    /// transform; use [`Vec3::to_vec4`] for directions.
    #[must_use]
    pub fn homogenous(self) -> Vec4<T> {
        Vec4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w: T::one(),
        }
    }

    /// Element-type conversion; `None` if a component does not fit.
    #[must_use]
    pub fn cast<U: Scalar>(self) -> Option<Vec3<U>> {
        Some(Vec3 {
            x: U::from(self.x)?,
            y: U::from(self.y)?,
            z: U::from(self.z)?,
        })
    }
}

impl<T: Scalar + Signed> Vec3<T> {
    /// Unit vector along the negative x-axis.
    #[must_use]
    pub fn left() -> Vec3<T> {
        -Vec3::right()
    }

    /// Unit vector along the negative y-axis.
    #[must_use]
    pub fn down() -> Vec3<T> {
        -Vec3::up()
    }

    /// Unit vector along the positive z-axis.
    #[must_use]
    pub fn forward() -> Vec3<T> {
        Vec3 {
            x: T::zero(),
            y: T::zero(),
            z: T::one(),
        }
    }

    /// Unit vector along the negative z-axis.
    #[must_use]
    pub fn back() -> Vec3<T> {
        -Vec3::forward()
    }

    /// Right-handed cross product.
    #[must_use]
    pub fn cross(self, other: Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.y * other.z - other.y * self.z,
            y: self.z * other.x - other.z * self.x,
            z: self.x * other.y - other.x * self.y,
        }
    }

    /// Component-wise absolute value.
    #[must_use]
    pub fn abs(self) -> Vec3<T> {
        Vec3 {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }
}

impl<T: Scalar + Float> Vec3<T> {
    #[must_use]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns a unit vector in the same direction, or the zero vector
    /// unchanged if the length is exactly zero.
    #[must_use]
    pub fn normalize(self) -> Vec3<T> {
        let l = self.length();
        if l > T::zero() {
            self * (T::one() / l)
        } else {
            self
        }
    }

    #[must_use]
    pub fn distance(self, other: Vec3<T>) -> T {
        self.distance_squared(other).sqrt()
    }

    /// Returns the vector unchanged if its length is within `max_length`,
    /// otherwise the same direction scaled to `max_length`.
    #[must_use]
    pub fn clamp(self, max_length: T) -> Vec3<T> {
        if self.length() > max_length {
            self.normalize() * max_length
        } else {
            self
        }
    }

    #[must_use]
    pub fn lerp(self, to: Vec3<T>, t: T) -> Vec3<T> {
        Vec3 {
            x: scalar::lerp(self.x, to.x, t),
            y: scalar::lerp(self.y, to.y, t),
            z: scalar::lerp(self.z, to.z, t),
        }
    }

    /// Component-wise tolerance comparison with machine epsilon.
    #[must_use]
    pub fn almost_eq(self, rhs: Vec3<T>) -> bool {
        self.almost_eq_with(rhs, T::epsilon())
    }

    /// Component-wise `|difference| <= tolerance`.
    #[must_use]
    pub fn almost_eq_with(self, rhs: Vec3<T>, tolerance: T) -> bool {
        (self.x - rhs.x).abs() <= tolerance
            && (self.y - rhs.y).abs() <= tolerance
            && (self.z - rhs.z).abs() <= tolerance
    }

    /// A uniformly distributed random point on the sphere of the given
    /// radius, centred at the origin.
    ///
    /// Samples z and azimuth directly rather than rejection-sampling a cube.
    #[must_use]
    pub fn spherical_random(radius: T) -> Vec3<T> {
        check_gt!(radius, T::zero());
        let mut rng = rand::thread_rng();
        let theta: T = scalar::flt(rng.gen_range(0.0..std::f64::consts::TAU));
        let z: T = scalar::flt(rng.gen_range(-1.0..=1.0));
        let planar = (T::one() - z * z).sqrt();
        Vec3 {
            x: planar * theta.cos(),
            y: planar * theta.sin(),
            z,
        } * radius
    }
}

impl<T: Scalar> Zero for Vec3<T> {
    fn zero() -> Self {
        Vec3::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl<T: Scalar> From<[T; 3]> for Vec3<T> {
    fn from(value: [T; 3]) -> Self {
        Vec3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl<T: Scalar> From<Vec3<T>> for [T; 3] {
    fn from(value: Vec3<T>) -> Self {
        [value.x, value.y, value.z]
    }
}

impl<T: Scalar> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<T: Scalar> Add<Vec3<T>> for Vec3<T> {
    type Output = Vec3<T>;

    fn add(self, rhs: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl<T: Scalar> AddAssign<Vec3<T>> for Vec3<T> {
    fn add_assign(&mut self, rhs: Vec3<T>) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T: Scalar> Sub<Vec3<T>> for Vec3<T> {
    type Output = Vec3<T>;

    fn sub(self, rhs: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl<T: Scalar> SubAssign<Vec3<T>> for Vec3<T> {
    fn sub_assign(&mut self, rhs: Vec3<T>) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

/// Component-wise product, not a dot or cross product.
impl<T: Scalar> Mul<Vec3<T>> for Vec3<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}
impl<T: Scalar> MulAssign<Vec3<T>> for Vec3<T> {
    fn mul_assign(&mut self, rhs: Vec3<T>) {
        self.x *= rhs.x;
        self.y *= rhs.y;
        self.z *= rhs.z;
    }
}

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Vec3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl<T: Scalar> MulAssign<T> for Vec3<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl<T: Scalar> Div<T> for Vec3<T> {
    type Output = Vec3<T>;

    fn div(self, rhs: T) -> Self::Output {
        check_ne!(rhs, T::zero());
        Vec3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}
impl<T: Scalar> DivAssign<T> for Vec3<T> {
    fn div_assign(&mut self, rhs: T) {
        check_ne!(rhs, T::zero());
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl<T: Scalar + Signed> Neg for Vec3<T> {
    type Output = Vec3<T>;

    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: Scalar> Sum<Vec3<T>> for Vec3<T> {
    fn sum<I: Iterator<Item = Vec3<T>>>(iter: I) -> Self {
        iter.fold(Vec3::zero(), Vec3::add)
    }
}

macro_rules! vec3_scalar_lhs_mul {
    ($($t:ty),+) => {$(
        impl Mul<Vec3<$t>> for $t {
            type Output = Vec3<$t>;

            fn mul(self, rhs: Vec3<$t>) -> Self::Output {
                rhs * self
            }
        }
    )+};
}
vec3_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
