use crate::assert::check_ne;
use crate::mat3::Mat3;
use crate::quat::Quat;
use crate::scalar::{self, Scalar};
use crate::vec3::Vec3;
use crate::vec4::Vec4;
use num_traits::{Float, Signed};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// A 4x4 matrix over any numeric element type.
///
/// Storage and composition follow the same convention as [`Mat3`]: fields
/// `_rc` in row-major declaration order, with the stored rows acting as the
/// columns of the usual column-vector matrix. The affine builders chain by
/// value, so a model transform reads left to right:
///
/// ```
/// use vecmat::mat4::Mat4;
/// use vecmat::vec3::Vec3;
///
/// let m = Mat4::identity()
///     .scale(Vec3::splat(2.0_f32))
///     .translate(Vec3::right() * 5.0);
/// assert!((m * Vec3::zero()).almost_eq_with(Vec3::new(10.0, 0.0, 0.0), 1e-6));
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mat4<T> {
    pub _00: T,
    pub _01: T,
    pub _02: T,
    pub _03: T,
    pub _10: T,
    pub _11: T,
    pub _12: T,
    pub _13: T,
    pub _20: T,
    pub _21: T,
    pub _22: T,
    pub _23: T,
    pub _30: T,
    pub _31: T,
    pub _32: T,
    pub _33: T,
}

impl<T: Scalar> Mat4<T> {
    #[must_use]
    pub fn identity() -> Mat4<T> {
        let mut m = Mat4::zero();
        m._00 = T::one();
        m._11 = T::one();
        m._22 = T::one();
        m._33 = T::one();
        m
    }

    #[must_use]
    pub fn zero() -> Mat4<T> {
        Mat4::make(T::zero())
    }

    /// A matrix with all sixteen entries equal to `v`.
    #[must_use]
    pub fn make(v: T) -> Mat4<T> {
        Mat4 {
            _00: v,
            _01: v,
            _02: v,
            _03: v,
            _10: v,
            _11: v,
            _12: v,
            _13: v,
            _20: v,
            _21: v,
            _22: v,
            _23: v,
            _30: v,
            _31: v,
            _32: v,
            _33: v,
        }
    }

    #[must_use]
    pub fn from_rows(r0: Vec4<T>, r1: Vec4<T>, r2: Vec4<T>, r3: Vec4<T>) -> Mat4<T> {
        Mat4 {
            _00: r0.x,
            _01: r0.y,
            _02: r0.z,
            _03: r0.w,
            _10: r1.x,
            _11: r1.y,
            _12: r1.z,
            _13: r1.w,
            _20: r2.x,
            _21: r2.y,
            _22: r2.z,
            _23: r2.w,
            _30: r3.x,
            _31: r3.y,
            _32: r3.z,
            _33: r3.w,
        }
    }

    fn element_ref(&self, r: usize, c: usize) -> &T {
        match (r, c) {
            (0, 0) => &self._00,
            (0, 1) => &self._01,
            (0, 2) => &self._02,
            (0, 3) => &self._03,
            (1, 0) => &self._10,
            (1, 1) => &self._11,
            (1, 2) => &self._12,
            (1, 3) => &self._13,
            (2, 0) => &self._20,
            (2, 1) => &self._21,
            (2, 2) => &self._22,
            (2, 3) => &self._23,
            (3, 0) => &self._30,
            (3, 1) => &self._31,
            (3, 2) => &self._32,
            (3, 3) => &self._33,
            _ => panic!("matrix index out of range: ({r}, {c})"),
        }
    }

    fn element_mut(&mut self, r: usize, c: usize) -> &mut T {
        match (r, c) {
            (0, 0) => &mut self._00,
            (0, 1) => &mut self._01,
            (0, 2) => &mut self._02,
            (0, 3) => &mut self._03,
            (1, 0) => &mut self._10,
            (1, 1) => &mut self._11,
            (1, 2) => &mut self._12,
            (1, 3) => &mut self._13,
            (2, 0) => &mut self._20,
            (2, 1) => &mut self._21,
            (2, 2) => &mut self._22,
            (2, 3) => &mut self._23,
            (3, 0) => &mut self._30,
            (3, 1) => &mut self._31,
            (3, 2) => &mut self._32,
            (3, 3) => &mut self._33,
            _ => panic!("matrix index out of range: ({r}, {c})"),
        }
    }

    /// The element at row `r`, column `c`. Panics if either index is out of
    /// range, in debug and release builds alike.
    #[must_use]
    pub fn at(&self, r: usize, c: usize) -> T {
        *self.element_ref(r, c)
    }

    pub fn set_at(&mut self, r: usize, c: usize, v: T) {
        *self.element_mut(r, c) = v;
    }

    /// A borrowing view of row `r`, indexable by column.
    #[must_use]
    pub fn row(&self, r: usize) -> Mat4Row<'_, T> {
        Mat4Row { mat: self, r }
    }

    /// A mutably borrowing view of row `r`; the matrix stays borrowed for
    /// the lifetime of the view.
    #[must_use]
    pub fn row_mut(&mut self, r: usize) -> Mat4RowMut<'_, T> {
        Mat4RowMut { mat: self, r }
    }

    /// Row `r` copied out as a vector.
    #[must_use]
    pub fn row_at(&self, r: usize) -> Vec4<T> {
        Vec4 {
            x: self.at(r, 0),
            y: self.at(r, 1),
            z: self.at(r, 2),
            w: self.at(r, 3),
        }
    }

    pub fn set_row_at(&mut self, r: usize, v: Vec4<T>) {
        self.set_at(r, 0, v.x);
        self.set_at(r, 1, v.y);
        self.set_at(r, 2, v.z);
        self.set_at(r, 3, v.w);
    }

    #[must_use]
    pub fn transpose(self) -> Mat4<T> {
        Mat4 {
            _00: self._00,
            _01: self._10,
            _02: self._20,
            _03: self._30,
            _10: self._01,
            _11: self._11,
            _12: self._21,
            _13: self._31,
            _20: self._02,
            _21: self._12,
            _22: self._22,
            _23: self._32,
            _30: self._03,
            _31: self._13,
            _32: self._23,
            _33: self._33,
        }
    }

    /// Extracts the upper-left 3x3 block, dropping the translation row.
    #[must_use]
    pub fn to_mat3(self) -> Mat3<T> {
        Mat3 {
            _00: self._00,
            _01: self._01,
            _02: self._02,
            _10: self._10,
            _11: self._11,
            _12: self._12,
            _20: self._20,
            _21: self._21,
            _22: self._22,
        }
    }

    /// Element-type conversion; `None` if any entry does not fit.
    #[must_use]
    pub fn cast<U: Scalar>(self) -> Option<Mat4<U>> {
        Some(Mat4::from_rows(
            self.row_at(0).cast()?,
            self.row_at(1).cast()?,
            self.row_at(2).cast()?,
            self.row_at(3).cast()?,
        ))
    }

    /// Accumulates a translation by `v` in the current basis, so chained
    /// `translate` calls compose in local space.
    #[must_use]
    pub fn translate(self, v: Vec3<T>) -> Mat4<T> {
        let mut m = self;
        let t = m.row_at(0) * v.x + m.row_at(1) * v.y + m.row_at(2) * v.z + m.row_at(3);
        m.set_row_at(3, t);
        m
    }

    /// Scales the basis vectors component-wise; the translation part is
    /// untouched.
    #[must_use]
    pub fn scale(self, v: Vec3<T>) -> Mat4<T> {
        let mut m = self;
        let (r0, r1, r2) = (m.row_at(0) * v.x, m.row_at(1) * v.y, m.row_at(2) * v.z);
        m.set_row_at(0, r0);
        m.set_row_at(1, r1);
        m.set_row_at(2, r2);
        m
    }

    /// Sum of pairwise 2x2 subdeterminant products; cheaper than a cofactor
    /// expansion over sixteen 3x3 minors.
    #[must_use]
    pub fn determinant(self) -> T {
        let b00 = self._00 * self._11 - self._01 * self._10;
        let b01 = self._00 * self._12 - self._02 * self._10;
        let b02 = self._00 * self._13 - self._03 * self._10;
        let b03 = self._01 * self._12 - self._02 * self._11;
        let b04 = self._01 * self._13 - self._03 * self._11;
        let b05 = self._02 * self._13 - self._03 * self._12;
        let b06 = self._20 * self._31 - self._21 * self._30;
        let b07 = self._20 * self._32 - self._22 * self._30;
        let b08 = self._20 * self._33 - self._23 * self._30;
        let b09 = self._21 * self._32 - self._22 * self._31;
        let b10 = self._21 * self._33 - self._23 * self._31;
        let b11 = self._22 * self._33 - self._23 * self._32;
        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
    }
}

impl<T: Scalar + Float> Mat4<T> {
    /// Adjugate divided by the determinant, via the same pairwise
    /// subdeterminants as [`Mat4::determinant`].
    ///
    /// A singular matrix trips `check_ne!` in debug builds; in release the
    /// division by zero yields Inf/NaN entries.
    #[must_use]
    pub fn inverse(self) -> Mat4<T> {
        let b00 = self._00 * self._11 - self._01 * self._10;
        let b01 = self._00 * self._12 - self._02 * self._10;
        let b02 = self._00 * self._13 - self._03 * self._10;
        let b03 = self._01 * self._12 - self._02 * self._11;
        let b04 = self._01 * self._13 - self._03 * self._11;
        let b05 = self._02 * self._13 - self._03 * self._12;
        let b06 = self._20 * self._31 - self._21 * self._30;
        let b07 = self._20 * self._32 - self._22 * self._30;
        let b08 = self._20 * self._33 - self._23 * self._30;
        let b09 = self._21 * self._32 - self._22 * self._31;
        let b10 = self._21 * self._33 - self._23 * self._31;
        let b11 = self._22 * self._33 - self._23 * self._32;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        check_ne!(det, T::zero());
        let f = det.recip();

        Mat4 {
            _00: (self._11 * b11 - self._12 * b10 + self._13 * b09) * f,
            _01: (self._02 * b10 - self._01 * b11 - self._03 * b09) * f,
            _02: (self._31 * b05 - self._32 * b04 + self._33 * b03) * f,
            _03: (self._22 * b04 - self._21 * b05 - self._23 * b03) * f,
            _10: (self._12 * b08 - self._10 * b11 - self._13 * b07) * f,
            _11: (self._00 * b11 - self._02 * b08 + self._03 * b07) * f,
            _12: (self._32 * b02 - self._30 * b05 - self._33 * b01) * f,
            _13: (self._20 * b05 - self._22 * b02 + self._23 * b01) * f,
            _20: (self._10 * b10 - self._11 * b08 + self._13 * b06) * f,
            _21: (self._01 * b08 - self._00 * b10 - self._03 * b06) * f,
            _22: (self._30 * b04 - self._31 * b02 + self._33 * b00) * f,
            _23: (self._21 * b02 - self._20 * b04 - self._23 * b00) * f,
            _30: (self._11 * b07 - self._10 * b09 - self._12 * b06) * f,
            _31: (self._00 * b09 - self._01 * b07 + self._02 * b06) * f,
            _32: (self._31 * b01 - self._30 * b03 - self._32 * b00) * f,
            _33: (self._20 * b03 - self._21 * b01 + self._22 * b00) * f,
        }
    }

    /// Post-composes a quaternion rotation, matching
    /// [`Mat4::translate`]/[`Mat4::scale`] chaining.
    #[must_use]
    pub fn rotate_quat(self, q: Quat<T>) -> Mat4<T> {
        self * q.to_mat4()
    }

    /// [`Mat4::rotate_quat`] built from an axis and an angle in radians.
    #[must_use]
    pub fn rotate_axis_angle(self, axis: Vec3<T>, angle_rad: T) -> Mat4<T> {
        self.rotate_quat(Quat::axis_angle(axis, angle_rad))
    }

    /// Right-handed view matrix looking from `eye` towards `center`;
    /// maps `eye` to the origin with the view direction along -z.
    #[must_use]
    pub fn look_at(eye: Vec3<T>, center: Vec3<T>, up: Vec3<T>) -> Mat4<T>
    where
        T: Signed,
    {
        let f = (center - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);

        Mat4::from_rows(
            Vec4::new(s.x, u.x, -f.x, T::zero()),
            Vec4::new(s.y, u.y, -f.y, T::zero()),
            Vec4::new(s.z, u.z, -f.z, T::zero()),
            Vec4::new(-s.dot(eye), -u.dot(eye), f.dot(eye), T::one()),
        )
    }

    /// Right-handed perspective projection with a [-1, 1] depth range.
    #[must_use]
    pub fn perspective(fov_rad: T, aspect: T, z_near: T, z_far: T) -> Mat4<T> {
        check_ne!(aspect, T::zero());
        let two = scalar::flt::<T>(2.0);
        let tan_half_fov = (fov_rad / two).tan();
        let depth = z_far - z_near;

        let mut m = Mat4::zero();
        m._00 = (aspect * tan_half_fov).recip();
        m._11 = tan_half_fov.recip();
        m._22 = -(z_far + z_near) / depth;
        m._23 = -T::one();
        m._32 = -(two * z_far * z_near) / depth;
        m
    }

    /// Right-handed orthographic projection with a [-1, 1] depth range.
    #[must_use]
    pub fn orthographic(left: T, right: T, bottom: T, top: T, z_near: T, z_far: T) -> Mat4<T> {
        let two = scalar::flt::<T>(2.0);

        let mut m = Mat4::identity();
        m._00 = two / (right - left);
        m._11 = two / (top - bottom);
        m._22 = -two / (z_far - z_near);
        m._30 = -(right + left) / (right - left);
        m._31 = -(top + bottom) / (top - bottom);
        m._32 = -(z_far + z_near) / (z_far - z_near);
        m
    }

    /// Entry-wise tolerance comparison with machine epsilon.
    #[must_use]
    pub fn almost_eq(self, rhs: Mat4<T>) -> bool {
        self.almost_eq_with(rhs, T::epsilon())
    }

    /// Entry-wise `|difference| <= tolerance`.
    #[must_use]
    pub fn almost_eq_with(self, rhs: Mat4<T>, tolerance: T) -> bool {
        (0..4).all(|r| self.row_at(r).almost_eq_with(rhs.row_at(r), tolerance))
    }
}

/// Read-only row view returned by [`Mat4::row`].
pub struct Mat4Row<'a, T> {
    mat: &'a Mat4<T>,
    r: usize,
}

impl<T: Scalar> Index<usize> for Mat4Row<'_, T> {
    type Output = T;

    fn index(&self, c: usize) -> &T {
        self.mat.element_ref(self.r, c)
    }
}

/// Mutable row view returned by [`Mat4::row_mut`].
pub struct Mat4RowMut<'a, T> {
    mat: &'a mut Mat4<T>,
    r: usize,
}

impl<T: Scalar> Index<usize> for Mat4RowMut<'_, T> {
    type Output = T;

    fn index(&self, c: usize) -> &T {
        self.mat.element_ref(self.r, c)
    }
}

impl<T: Scalar> IndexMut<usize> for Mat4RowMut<'_, T> {
    fn index_mut(&mut self, c: usize) -> &mut T {
        self.mat.element_mut(self.r, c)
    }
}

impl<T: Scalar> Index<(usize, usize)> for Mat4<T> {
    type Output = T;

    fn index(&self, (r, c): (usize, usize)) -> &T {
        self.element_ref(r, c)
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Mat4<T> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        self.element_mut(r, c)
    }
}

impl<T: Scalar> fmt::Display for Mat4<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "({}, {}, {}, {})", self._00, self._01, self._02, self._03)?;
        writeln!(f, "({}, {}, {}, {})", self._10, self._11, self._12, self._13)?;
        writeln!(f, "({}, {}, {}, {})", self._20, self._21, self._22, self._23)?;
        write!(f, "({}, {}, {}, {})", self._30, self._31, self._32, self._33)
    }
}

impl<T: Scalar> Add<Mat4<T>> for Mat4<T> {
    type Output = Mat4<T>;

    fn add(self, rhs: Mat4<T>) -> Self::Output {
        Mat4::from_rows(
            self.row_at(0) + rhs.row_at(0),
            self.row_at(1) + rhs.row_at(1),
            self.row_at(2) + rhs.row_at(2),
            self.row_at(3) + rhs.row_at(3),
        )
    }
}
impl<T: Scalar> AddAssign<Mat4<T>> for Mat4<T> {
    fn add_assign(&mut self, rhs: Mat4<T>) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub<Mat4<T>> for Mat4<T> {
    type Output = Mat4<T>;

    fn sub(self, rhs: Mat4<T>) -> Self::Output {
        Mat4::from_rows(
            self.row_at(0) - rhs.row_at(0),
            self.row_at(1) - rhs.row_at(1),
            self.row_at(2) - rhs.row_at(2),
            self.row_at(3) - rhs.row_at(3),
        )
    }
}
impl<T: Scalar> SubAssign<Mat4<T>> for Mat4<T> {
    fn sub_assign(&mut self, rhs: Mat4<T>) {
        *self = *self - rhs;
    }
}

/// Matrix product; `(a * b) * v == a * (b * v)`, so the right factor applies
/// first.
impl<T: Scalar> Mul<Mat4<T>> for Mat4<T> {
    type Output = Mat4<T>;

    fn mul(self, rhs: Mat4<T>) -> Self::Output {
        Mat4::from_rows(
            self * rhs.row_at(0),
            self * rhs.row_at(1),
            self * rhs.row_at(2),
            self * rhs.row_at(3),
        )
    }
}
impl<T: Scalar> MulAssign<Mat4<T>> for Mat4<T> {
    fn mul_assign(&mut self, rhs: Mat4<T>) {
        *self = *self * rhs;
    }
}

/// Linear application to a homogeneous column vector, no divide.
impl<T: Scalar> Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;

    fn mul(self, v: Vec4<T>) -> Self::Output {
        Vec4 {
            x: self._00 * v.x + self._10 * v.y + self._20 * v.z + self._30 * v.w,
            y: self._01 * v.x + self._11 * v.y + self._21 * v.z + self._31 * v.w,
            z: self._02 * v.x + self._12 * v.y + self._22 * v.z + self._32 * v.w,
            w: self._03 * v.x + self._13 * v.y + self._23 * v.z + self._33 * v.w,
        }
    }
}

/// Treats `v` as a point (w = 1) and divides through by the resulting w.
impl<T: Scalar + Float> Mul<Vec3<T>> for Mat4<T> {
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Self::Output {
        (self * v.homogenous()).perspective_divide()
    }
}

/// Row-vector application `v * m`; not the same as `m * v`.
impl<T: Scalar> Mul<Mat4<T>> for Vec4<T> {
    type Output = Vec4<T>;

    fn mul(self, m: Mat4<T>) -> Self::Output {
        Vec4 {
            x: self.dot(m.row_at(0)),
            y: self.dot(m.row_at(1)),
            z: self.dot(m.row_at(2)),
            w: self.dot(m.row_at(3)),
        }
    }
}

impl<T: Scalar> Mul<T> for Mat4<T> {
    type Output = Mat4<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Mat4::from_rows(
            self.row_at(0) * rhs,
            self.row_at(1) * rhs,
            self.row_at(2) * rhs,
            self.row_at(3) * rhs,
        )
    }
}
impl<T: Scalar> MulAssign<T> for Mat4<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Div<T> for Mat4<T> {
    type Output = Mat4<T>;

    fn div(self, rhs: T) -> Self::Output {
        check_ne!(rhs, T::zero());
        Mat4::from_rows(
            self.row_at(0) / rhs,
            self.row_at(1) / rhs,
            self.row_at(2) / rhs,
            self.row_at(3) / rhs,
        )
    }
}
impl<T: Scalar> DivAssign<T> for Mat4<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! mat4_scalar_lhs_mul {
    ($($t:ty),+) => {$(
        impl Mul<Mat4<$t>> for $t {
            type Output = Mat4<$t>;

            fn mul(self, rhs: Mat4<$t>) -> Self::Output {
                rhs * self
            }
        }
    )+};
}
mat4_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    fn counting() -> Mat4<i32> {
        Mat4::from_rows(
            Vec4::new(1, 2, 3, 4),
            Vec4::new(5, 6, 7, 8),
            Vec4::new(9, 10, 11, 12),
            Vec4::new(13, 14, 15, 16),
        )
    }

    fn reversed() -> Mat4<i32> {
        Mat4::from_rows(
            Vec4::new(16, 15, 14, 13),
            Vec4::new(12, 11, 10, 9),
            Vec4::new(8, 7, 6, 5),
            Vec4::new(4, 3, 2, 1),
        )
    }

    #[test]
    fn entrywise_arithmetic() {
        assert_eq!(counting() + reversed(), Mat4::make(17));
        let expected = Mat4::from_rows(
            Vec4::new(-15, -13, -11, -9),
            Vec4::new(-7, -5, -3, -1),
            Vec4::new(1, 3, 5, 7),
            Vec4::new(9, 11, 13, 15),
        );
        assert_eq!(counting() - reversed(), expected);

        let mut m = counting();
        m += reversed();
        assert_eq!(m, Mat4::make(17));
        m -= reversed();
        assert_eq!(m, counting());
    }

    #[test]
    fn index_like_a_2d_array() {
        let mut m = counting();
        assert_eq!(m[(3, 2)], 15);
        assert_eq!(m.at(2, 3), 12);
        m[(3, 2)] = 100;
        assert_eq!(m[(3, 2)], 100);
        assert_eq!(m.row(3)[2], 100);
        m.row_mut(3)[2] = 15;
        assert_eq!(m, counting());
    }

    #[test]
    #[should_panic(expected = "matrix index out of range")]
    fn out_of_range_index_panics() {
        let _ = counting()[(4, 0)];
    }

    #[test]
    fn make_fills_every_entry() {
        assert_eq!(Mat4::make(4), Mat4::from_rows(Vec4::splat(4), Vec4::splat(4), Vec4::splat(4), Vec4::splat(4)));
    }

    #[test]
    fn product_of_constant_matrices() {
        let mut m1 = Mat4::make(2.0_f32);
        let m2 = Mat4::make(3.0);
        assert!((m1 * m2).almost_eq(Mat4::make(24.0)));
        m1 *= m2;
        assert!(m1.almost_eq(Mat4::make(24.0)));
    }

    #[test]
    fn transpose_flips_rows_and_columns() {
        let expected = Mat4::from_rows(
            Vec4::new(1, 5, 9, 13),
            Vec4::new(2, 6, 10, 14),
            Vec4::new(3, 7, 11, 15),
            Vec4::new(4, 8, 12, 16),
        );
        assert_eq!(counting().transpose(), expected);
        assert_eq!(counting().transpose().transpose(), counting());
    }

    #[test]
    fn determinant_of_singular_matrix_is_zero() {
        let m = counting().cast::<f32>().unwrap();
        assert!(scalar::is_equal(m.determinant(), 0.0, 1e-6));
    }

    #[test]
    fn determinant_works_on_unsigned_elements() {
        assert_eq!(Mat4::<u32>::identity().determinant(), 1);
        assert_eq!(Mat3::<u32>::identity().determinant(), 1);
    }

    #[test]
    fn inverse_matches_reference_values() {
        let m = Mat4::from_rows(
            Vec4::new(3.0_f32, 0.0, 1.0, 0.0),
            Vec4::new(-1.0, 3.0, 5.0, -2.0),
            Vec4::new(1.0, -1.0, 0.0, 0.0),
            Vec4::new(-2.0, 5.0, -4.0, 2.0),
        );
        let expected = Mat4::from_rows(
            Vec4::new(-1.0 / 2.0, 1.0 / 2.0, 4.0, 1.0 / 2.0),
            Vec4::new(-1.0 / 2.0, 1.0 / 2.0, 3.0, 1.0 / 2.0),
            Vec4::new(5.0 / 2.0, -3.0 / 2.0, -12.0, -3.0 / 2.0),
            Vec4::new(23.0 / 4.0, -15.0 / 4.0, -55.0 / 2.0, -13.0 / 4.0),
        );
        assert!(m.inverse().almost_eq_with(expected, 1e-4));
        assert!((m * expected).almost_eq_with(Mat4::identity(), 1e-4));
    }

    #[test]
    fn extracts_upper_left_block() {
        let m = Mat4::from_rows(
            Vec4::new(3, 0, 1, 0),
            Vec4::new(-1, 3, 5, -2),
            Vec4::new(1, -1, 0, 0),
            Vec4::new(-2, 5, -4, 2),
        );
        let m3 = m.to_mat3();
        assert_eq!(m3.row_at(0), Vec3::new(3, 0, 1));
        assert_eq!(m3.row_at(1), Vec3::new(-1, 3, 5));
        assert_eq!(m3.row_at(2), Vec3::new(1, -1, 0));
    }

    #[test]
    fn chained_translations_accumulate() {
        let translation = Mat4::identity()
            .translate(Vec3::<f32>::right() * 5.0)
            .translate(Vec3::down() * 2.0)
            .translate(Vec3::forward() * 3.0);
        let point = translation * Vec3::zero();
        assert!(point.almost_eq_with(Vec3::new(5.0, -2.0, 3.0), 1e-6));
    }

    #[test]
    fn rotation_composes_with_translation() {
        let with_translation = Mat4::identity().translate(Vec3::<f32>::right() * 5.0);
        let rotation = Quat::axis_angle_deg(Vec3::up(), -90.0);

        let p1 = rotation.rotate(with_translation * Vec3::zero());
        let p2 = rotation.to_mat4() * with_translation * Vec3::zero();

        let expected = Vec3::new(0.0, 0.0, 5.0);
        assert!(p1.almost_eq_with(expected, 1e-6));
        assert!(p2.almost_eq_with(expected, 1e-6));
    }

    #[test]
    fn scale_rotate_translate_chain() {
        let transform = Mat4::identity()
            .scale(Vec3::<f32>::one() * 2.0)
            .rotate_quat(Quat::axis_angle_deg(Vec3::up(), -90.0))
            .translate(Vec3::right() * 5.0)
            .translate(Vec3::down() * 2.0)
            .translate(Vec3::forward() * 3.0);

        let point = transform * Vec3::zero();
        assert!(point.almost_eq_with(Vec3::new(-6.0, -4.0, 10.0), 1e-5));
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        {
            let view = Mat4::look_at(Vec3::<f32>::zero(), Vec3::new(0.0, 0.0, -1.0), Vec3::up());
            assert!((view * Vec3::zero()).almost_eq_with(Vec3::zero(), 1e-5));
        }
        {
            let eye = Vec3::new(5.0_f32, 2.0, 3.0);
            let view = Mat4::look_at(eye, Vec3::zero(), Vec3::up());
            assert!((view * eye).almost_eq_with(Vec3::zero(), 1e-5));
        }
        {
            // degenerate-ish up vector pointing along -z while looking down -y
            let eye = Vec3::new(0.0_f32, 10.0, 0.0);
            let view = Mat4::look_at(eye, Vec3::zero(), Vec3::new(0.0, 0.0, -1.0));
            assert!((view * eye).almost_eq_with(Vec3::zero(), 1e-5));
        }
    }

    #[test]
    fn perspective_matches_reference_layout() {
        let fov = scalar::deg_to_rad(90.0_f32);
        let aspect = 16.0 / 9.0;
        let (z_near, z_far) = (0.1, 100.0);

        let m = Mat4::perspective(fov, aspect, z_near, z_far);

        let tan_half_fov = (fov / 2.0).tan();
        let mut expected = Mat4::zero();
        expected._00 = 1.0 / (aspect * tan_half_fov);
        expected._11 = 1.0 / tan_half_fov;
        expected._22 = -(z_far + z_near) / (z_far - z_near);
        expected._23 = -1.0;
        expected._32 = -(2.0 * z_far * z_near) / (z_far - z_near);

        assert!(m.almost_eq_with(expected, 1e-5));
    }

    #[test]
    fn orthographic_matches_reference_layout() {
        let (left, right, bottom, top) = (-10.0_f32, 10.0, -5.0, 5.0);
        let (z_near, z_far) = (0.1, 100.0);

        let m = Mat4::orthographic(left, right, bottom, top, z_near, z_far);

        let mut expected = Mat4::identity();
        expected._00 = 2.0 / (right - left);
        expected._11 = 2.0 / (top - bottom);
        expected._22 = -2.0 / (z_far - z_near);
        expected._30 = -(right + left) / (right - left);
        expected._31 = -(top + bottom) / (top - bottom);
        expected._32 = -(z_far + z_near) / (z_far - z_near);

        assert!(m.almost_eq_with(expected, 1e-5));
    }

    #[test]
    fn row_and_column_vector_products_differ() {
        let m = counting().cast::<f64>().unwrap();
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let column = m * v;
        let row = v * m;
        assert_eq!(column, Vec4::new(90.0, 100.0, 110.0, 120.0));
        assert_eq!(row, Vec4::new(30.0, 70.0, 110.0, 150.0));
        assert_ne!(column, row);
    }

    #[test]
    fn applying_to_direction_vs_point() {
        let m = Mat4::identity().translate(Vec3::<f64>::right() * 7.0);
        let direction = Vec3::new(0.0, 1.0, 0.0).to_vec4();
        let point = Vec3::new(0.0, 1.0, 0.0).homogenous();
        assert_eq!((m * direction).to_vec3(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!((m * point).to_vec3(), Vec3::new(7.0, 1.0, 0.0));
    }

    #[test]
    fn scalar_multiplication_and_division() {
        assert_eq!(counting() * 2, counting() + counting());
        assert_eq!(2 * counting(), counting() * 2);
        assert_eq!((counting() * 2) / 2, counting());
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Mat4::<f64>::default(), Mat4::zero());
    }
}
