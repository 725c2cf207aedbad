use crate::assert::check_gt;
use crate::mat3::Mat3;
use crate::mat4::Mat4;
use crate::scalar::{self, Scalar};
use crate::vec3::Vec3;
use crate::vec4::Vec4;
use num_traits::{Float, Signed};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};
use tracing::warn;

/// A quaternion with the vector part in `x`, `y`, `z` and the scalar part
/// in `w`.
///
/// Follows the Hamilton product convention, so `q1 * q2` applied to a vector
/// rotates by `q2` first and `q1` second, matching matrix composition.
/// Rotation helpers assume a unit quaternion; [`Quat::normalize`] first if in
/// doubt.
///
/// # Examples
///
/// ```
/// use vecmat::quat::Quat;
/// use vecmat::vec3::Vec3;
///
/// let q = Quat::axis_angle_deg(Vec3::<f32>::right(), 90.0);
/// assert!(q.rotate(Vec3::up()).almost_eq_with(Vec3::forward(), 1e-6));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quat<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// The identity rotation, not the zero quaternion.
impl<T: Scalar> Default for Quat<T> {
    fn default() -> Self {
        Quat::identity()
    }
}

impl<T: Scalar> Quat<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Quat<T> {
        Quat { x, y, z, w }
    }

    /// `(0, 0, 0, 1)`, the rotation that leaves every vector unchanged.
    #[must_use]
    pub fn identity() -> Quat<T> {
        Quat {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
            w: T::one(),
        }
    }

    #[must_use]
    pub fn dot(self, other: Quat<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[must_use]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// The vector (imaginary) part.
    #[must_use]
    pub fn to_vec3(self) -> Vec3<T> {
        Vec3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    #[must_use]
    pub fn to_vec4(self) -> Vec4<T> {
        Vec4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w: self.w,
        }
    }

    /// Element-type conversion; `None` if a component does not fit.
    #[must_use]
    pub fn cast<U: Scalar>(self) -> Option<Quat<U>> {
        Some(Quat {
            x: U::from(self.x)?,
            y: U::from(self.y)?,
            z: U::from(self.z)?,
            w: U::from(self.w)?,
        })
    }
}

impl<T: Scalar + Signed> Quat<T> {
    /// For a unit quaternion this is also the inverse rotation.
    #[must_use]
    pub fn conjugate(self) -> Quat<T> {
        Quat {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }
}

impl<T: Scalar + Float> Quat<T> {
    #[must_use]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns a unit quaternion, or the input unchanged if its length is
    /// exactly zero.
    #[must_use]
    pub fn normalize(self) -> Quat<T> {
        let l = self.length();
        if l > T::zero() {
            self * (T::one() / l)
        } else {
            self
        }
    }

    /// The angle in radians between the rotations `self` and `other`.
    #[must_use]
    pub fn angle_rad(self, other: Quat<T>) -> T {
        let length_product = self.length() * other.length();
        check_gt!(length_product, T::zero());
        let mut cos_angle = self.dot(other) / length_product;
        // rounding can push the cosine just past +/-1, which acos rejects
        if cos_angle > T::one() || cos_angle < -T::one() {
            warn!("cosine {cos_angle} out of acos domain, clamping");
            cos_angle = cos_angle.max(-T::one()).min(T::one());
        }
        scalar::flt::<T>(2.0) * cos_angle.acos()
    }

    /// [`Quat::angle_rad`] in degrees.
    #[must_use]
    pub fn angle_deg(self, other: Quat<T>) -> T {
        scalar::rad_to_deg(self.angle_rad(other))
    }

    /// The rotation of `angle_rad` radians about `axis`, right-handed.
    ///
    /// The axis is normalized here, so any nonzero vector works.
    #[must_use]
    pub fn axis_angle(axis: Vec3<T>, angle_rad: T) -> Quat<T> {
        check_gt!(axis.length_squared(), T::zero());
        let axis = axis.normalize();
        let half = angle_rad * scalar::flt(0.5);
        let sin_half = half.sin();
        Quat {
            x: axis.x * sin_half,
            y: axis.y * sin_half,
            z: axis.z * sin_half,
            w: half.cos(),
        }
    }

    /// [`Quat::axis_angle`] with the angle in degrees.
    #[must_use]
    pub fn axis_angle_deg(axis: Vec3<T>, angle_deg: T) -> Quat<T> {
        Quat::axis_angle(axis, scalar::deg_to_rad(angle_deg))
    }

    /// Applies the rotation to a vector.
    ///
    /// Uses the Rodrigues-style expansion `v + w*t + q_v x t` with
    /// `t = 2 (q_v x v)`, which is cheaper than `q * v * q.conjugate()`.
    #[must_use]
    pub fn rotate(self, v: Vec3<T>) -> Vec3<T> {
        let two = scalar::flt::<T>(2.0);
        let t = Vec3 {
            x: two * (self.y * v.z - self.z * v.y),
            y: two * (self.z * v.x - self.x * v.z),
            z: two * (self.x * v.y - self.y * v.x),
        };
        Vec3 {
            x: v.x + self.w * t.x + self.y * t.z - self.z * t.y,
            y: v.y + self.w * t.y + self.z * t.x - self.x * t.z,
            z: v.z + self.w * t.z + self.x * t.y - self.y * t.x,
        }
    }

    /// Spherical linear interpolation from `self` (t = 0) to `to` (t = 1).
    ///
    /// Falls back to a plain average when the two rotations are close to
    /// antipodal and the interpolation path is ill-defined.
    #[must_use]
    pub fn slerp(self, to: Quat<T>, t: T) -> Quat<T> {
        let cos_half_theta = self.dot(to);
        if cos_half_theta.abs() >= T::one() {
            return self;
        }

        let sin_half_theta = (T::one() - cos_half_theta * cos_half_theta).sqrt();
        if sin_half_theta.abs() < scalar::flt(0.001) {
            warn!("slerp between near-antipodal rotations, averaging instead");
            let half = scalar::flt::<T>(0.5);
            return self * half + to * half;
        }

        let half_theta = cos_half_theta.acos();
        let ta = ((T::one() - t) * half_theta).sin() / sin_half_theta;
        let tb = (t * half_theta).sin() / sin_half_theta;
        self * ta + to * tb
    }

    /// The rotation as a 3x3 matrix; `q.to_mat3() * v == q.rotate(v)`.
    #[must_use]
    pub fn to_mat3(self) -> Mat3<T> {
        let one = T::one();
        let two = scalar::flt::<T>(2.0);

        let xx = self.x * self.x;
        let yy = self.y * self.y;
        let zz = self.z * self.z;
        let xy = self.x * self.y;
        let xz = self.x * self.z;
        let yz = self.y * self.z;
        let wx = self.w * self.x;
        let wy = self.w * self.y;
        let wz = self.w * self.z;

        Mat3 {
            _00: one - two * (yy + zz),
            _01: two * (xy + wz),
            _02: two * (xz - wy),
            _10: two * (xy - wz),
            _11: one - two * (xx + zz),
            _12: two * (yz + wx),
            _20: two * (xz + wy),
            _21: two * (yz - wx),
            _22: one - two * (xx + yy),
        }
    }

    /// The rotation as the upper-left block of a 4x4 matrix.
    #[must_use]
    pub fn to_mat4(self) -> Mat4<T> {
        self.to_mat3().to_mat4()
    }

    /// Component-wise tolerance comparison with machine epsilon.
    #[must_use]
    pub fn almost_eq(self, rhs: Quat<T>) -> bool {
        self.almost_eq_with(rhs, T::epsilon())
    }

    /// Component-wise `|difference| <= tolerance`.
    #[must_use]
    pub fn almost_eq_with(self, rhs: Quat<T>, tolerance: T) -> bool {
        (self.x - rhs.x).abs() <= tolerance
            && (self.y - rhs.y).abs() <= tolerance
            && (self.z - rhs.z).abs() <= tolerance
            && (self.w - rhs.w).abs() <= tolerance
    }
}

impl<T: Scalar> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl<T: Scalar> Add<Quat<T>> for Quat<T> {
    type Output = Quat<T>;

    fn add(self, rhs: Quat<T>) -> Self::Output {
        Quat {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}
impl<T: Scalar> AddAssign<Quat<T>> for Quat<T> {
    fn add_assign(&mut self, rhs: Quat<T>) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.w += rhs.w;
    }
}

impl<T: Scalar> Sub<Quat<T>> for Quat<T> {
    type Output = Quat<T>;

    fn sub(self, rhs: Quat<T>) -> Self::Output {
        Quat {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}
impl<T: Scalar> SubAssign<Quat<T>> for Quat<T> {
    fn sub_assign(&mut self, rhs: Quat<T>) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.w -= rhs.w;
    }
}

/// Hamilton product; composes rotations, right operand first.
impl<T: Scalar> Mul<Quat<T>> for Quat<T> {
    type Output = Quat<T>;

    fn mul(self, rhs: Quat<T>) -> Self::Output {
        Quat {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl<T: Scalar> MulAssign<Quat<T>> for Quat<T> {
    fn mul_assign(&mut self, rhs: Quat<T>) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Mul<T> for Quat<T> {
    type Output = Quat<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Quat {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}
impl<T: Scalar> MulAssign<T> for Quat<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Div<T> for Quat<T> {
    type Output = Quat<T>;

    fn div(self, rhs: T) -> Self::Output {
        crate::assert::check_ne!(rhs, T::zero());
        Quat {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}

macro_rules! quat_scalar_lhs_mul {
    ($($t:ty),+) => {$(
        impl Mul<Quat<$t>> for $t {
            type Output = Quat<$t>;

            fn mul(self, rhs: Quat<$t>) -> Self::Output {
                rhs * self
            }
        }
    )+};
}
quat_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn default_is_identity() {
        assert_eq!(Quat::<f32>::default(), Quat::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Quat::<f64>::identity(), Quat::default());
    }

    #[test]
    fn additive_arithmetic() {
        let q1 = Quat::new(1.0, 2.0, 3.0, 4.0);
        let q2 = Quat::new(4.0, 5.0, 6.0, 7.0);
        assert_eq!(q1 + q2, Quat::new(5.0, 7.0, 9.0, 11.0));
        assert_eq!(q2 - q1, Quat::new(3.0, 3.0, 3.0, 3.0));
    }

    #[test]
    fn hamilton_product() {
        let q1 = Quat::new(2.0, 4.0, 1.0, 3.0);
        let q2 = Quat::new(3.0, 5.0, 2.0, 1.0);
        assert_eq!(q1 * q2, Quat::new(14.0, 18.0, 5.0, -25.0));
        assert_ne!(q2 * q1, Quat::new(14.0, 18.0, 5.0, -25.0));

        let mut q = q1;
        q *= q2;
        assert_eq!(q, q1 * q2);
    }

    #[test]
    fn scalar_multiplication_forms() {
        let q = Quat::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q * 2.0, Quat::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * q, q * 2.0);
        let mut scaled = q;
        scaled *= 2.0;
        assert_eq!(scaled, q * 2.0);
        assert_eq!(scaled / 2.0, q);
    }

    #[test]
    fn identity_is_multiplicative_unit() {
        let q = Quat::new(2.0, 4.0, 1.0, 3.0);
        assert_eq!(q * Quat::identity(), q);
        assert_eq!(Quat::identity() * q, q);
    }

    #[test]
    fn conjugate_negates_vector_part() {
        let q = Quat::new(0.1_f32, 0.2, 0.3, 1.0);
        assert_eq!(q.conjugate(), Quat::new(-0.1, -0.2, -0.3, 1.0));
    }

    #[test]
    fn normalize_matches_reference_values() {
        let q = Quat::new(1.0_f32, 2.0, 3.0, 4.0).normalize();
        let expected = Quat::new(0.18257, 0.36515, 0.54772, 0.7303);
        assert!(q.almost_eq_with(expected, 1e-4));
        assert!(scalar::almost_eq(q.length(), 1.0));
        assert_eq!(Quat::new(0.0_f32, 0.0, 0.0, 0.0).normalize().w, 0.0);
    }

    #[test]
    fn rotates_quarter_turn_about_x() {
        let q = Quat::axis_angle_deg(Vec3::<f32>::right(), 90.0);
        let rotated = q.rotate(Vec3::up());
        assert!(rotated.almost_eq_with(Vec3::forward(), 1e-6));
    }

    #[test]
    fn rotation_matches_matrix_form() {
        let q = Quat::axis_angle(Vec3::new(1.0_f64, 2.0, -0.5), 0.73);
        let v = Vec3::new(3.0, -1.0, 2.0);
        assert!((q.to_mat3() * v).almost_eq_with(q.rotate(v), 1e-12));
        assert!((q.to_mat4() * v).almost_eq_with(q.rotate(v), 1e-12));
    }

    #[test]
    fn conjugate_inverts_unit_rotation() {
        let q = Quat::axis_angle(Vec3::new(0.0_f64, 1.0, 1.0), 1.2);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(q.conjugate().rotate(q.rotate(v)).almost_eq_with(v, 1e-12));
    }

    #[test]
    fn angle_between_opposite_rotations() {
        let q1 = Quat::<f32>::identity();
        let q2 = Quat::axis_angle_deg(Vec3::right(), 180.0);
        assert!(scalar::is_equal(q1.angle_deg(q2), 180.0, 1e-3));
        assert!(scalar::is_equal(q1.angle_rad(q2), PI, 1e-5));
    }

    #[test]
    fn angle_of_quat_with_itself_is_zero_despite_rounding() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        // dot/length can exceed 1 by an ulp; the clamp keeps acos defined
        let q = Quat::new(1.0_f32, 2.0, 3.0, 4.0).normalize();
        assert!(scalar::is_equal(q.angle_rad(q), 0.0, 1e-3));
    }

    #[test]
    fn slerp_endpoints() {
        let q1 = Quat::axis_angle_deg(Vec3::<f32>::up(), 10.0);
        let q2 = Quat::axis_angle_deg(Vec3::<f32>::up(), 80.0);
        assert!(q1.slerp(q2, 0.0).almost_eq_with(q1, 1e-6));
        assert!(q1.slerp(q2, 1.0).almost_eq_with(q2, 1e-6));
    }

    #[test]
    fn slerp_halfway_bisects_the_angle() {
        let q1 = Quat::<f64>::identity();
        let q2 = Quat::axis_angle_deg(Vec3::up(), 90.0);
        let mid = q1.slerp(q2, 0.5);
        let expected = Quat::axis_angle_deg(Vec3::up(), 45.0);
        assert!(mid.almost_eq_with(expected, 1e-12));
    }

    #[test]
    fn display_format() {
        assert_eq!(Quat::new(1, 2, 3, 4).to_string(), "(1, 2, 3, 4)");
    }
}
