use crate::assert::check_ne;
use crate::mat4::Mat4;
use crate::scalar::Scalar;
use crate::vec3::Vec3;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// A 3x3 matrix over any numeric element type.
///
/// Fields are named `_rc` (row `r`, column `c`) and declared in row-major
/// order, which is also the serialized field order. The stored rows are the
/// columns of the usual column-vector matrix, so `m * v` computes
/// `v'_c = sum_r m_rc * v_r` and `a * b` applies `b` first. See
/// [`Quat::to_mat3`](crate::quat::Quat::to_mat3) for building rotations.
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mat3<T> {
    pub _00: T,
    pub _01: T,
    pub _02: T,
    pub _10: T,
    pub _11: T,
    pub _12: T,
    pub _20: T,
    pub _21: T,
    pub _22: T,
}

impl<T: Scalar> Mat3<T> {
    #[must_use]
    pub fn identity() -> Mat3<T> {
        let mut m = Mat3::zero();
        m._00 = T::one();
        m._11 = T::one();
        m._22 = T::one();
        m
    }

    #[must_use]
    pub fn zero() -> Mat3<T> {
        Mat3::make(T::zero())
    }

    /// A matrix with all nine entries equal to `v`.
    #[must_use]
    pub fn make(v: T) -> Mat3<T> {
        Mat3 {
            _00: v,
            _01: v,
            _02: v,
            _10: v,
            _11: v,
            _12: v,
            _20: v,
            _21: v,
            _22: v,
        }
    }

    #[must_use]
    pub fn from_rows(r0: Vec3<T>, r1: Vec3<T>, r2: Vec3<T>) -> Mat3<T> {
        Mat3 {
            _00: r0.x,
            _01: r0.y,
            _02: r0.z,
            _10: r1.x,
            _11: r1.y,
            _12: r1.z,
            _20: r2.x,
            _21: r2.y,
            _22: r2.z,
        }
    }

    fn element_ref(&self, r: usize, c: usize) -> &T {
        match (r, c) {
            (0, 0) => &self._00,
            (0, 1) => &self._01,
            (0, 2) => &self._02,
            (1, 0) => &self._10,
            (1, 1) => &self._11,
            (1, 2) => &self._12,
            (2, 0) => &self._20,
            (2, 1) => &self._21,
            (2, 2) => &self._22,
            _ => panic!("matrix index out of range: ({r}, {c})"),
        }
    }

    fn element_mut(&mut self, r: usize, c: usize) -> &mut T {
        match (r, c) {
            (0, 0) => &mut self._00,
            (0, 1) => &mut self._01,
            (0, 2) => &mut self._02,
            (1, 0) => &mut self._10,
            (1, 1) => &mut self._11,
            (1, 2) => &mut self._12,
            (2, 0) => &mut self._20,
            (2, 1) => &mut self._21,
            (2, 2) => &mut self._22,
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
    pub fn row(&self, r: usize) -> Mat3Row<'_, T> {
        Mat3Row { mat: self, r }
    }

    /// A mutably borrowing view of row `r`; the matrix stays borrowed for
    /// the lifetime of the view.
    #[must_use]
    pub fn row_mut(&mut self, r: usize) -> Mat3RowMut<'_, T> {
        Mat3RowMut { mat: self, r }
    }

    /// Row `r` copied out as a vector.
    #[must_use]
    pub fn row_at(&self, r: usize) -> Vec3<T> {
        Vec3 {
            x: self.at(r, 0),
            y: self.at(r, 1),
            z: self.at(r, 2),
        }
    }

    pub fn set_row_at(&mut self, r: usize, v: Vec3<T>) {
        self.set_at(r, 0, v.x);
        self.set_at(r, 1, v.y);
        self.set_at(r, 2, v.z);
    }

    #[must_use]
    pub fn transpose(self) -> Mat3<T> {
        Mat3 {
            _00: self._00,
            _01: self._10,
            _02: self._20,
            _10: self._01,
            _11: self._11,
            _12: self._21,
            _20: self._02,
            _21: self._12,
            _22: self._22,
        }
    }

    /// Closed-form cofactor expansion along the first row.
    #[must_use]
    pub fn determinant(self) -> T {
        self._00 * (self._11 * self._22 - self._12 * self._21)
            - self._01 * (self._10 * self._22 - self._12 * self._20)
            + self._02 * (self._10 * self._21 - self._11 * self._20)
    }

    /// Embeds as the upper-left block of a 4x4 matrix, with `(0, 0, 0, 1)`
    /// in the remaining row and column.
    #[must_use]
    pub fn to_mat4(self) -> Mat4<T> {
        let mut m = Mat4::identity();
        m._00 = self._00;
        m._01 = self._01;
        m._02 = self._02;
        m._10 = self._10;
        m._11 = self._11;
        m._12 = self._12;
        m._20 = self._20;
        m._21 = self._21;
        m._22 = self._22;
        m
    }

    /// Element-type conversion; `None` if any entry does not fit.
    #[must_use]
    pub fn cast<U: Scalar>(self) -> Option<Mat3<U>> {
        Some(Mat3 {
            _00: U::from(self._00)?,
            _01: U::from(self._01)?,
            _02: U::from(self._02)?,
            _10: U::from(self._10)?,
            _11: U::from(self._11)?,
            _12: U::from(self._12)?,
            _20: U::from(self._20)?,
            _21: U::from(self._21)?,
            _22: U::from(self._22)?,
        })
    }
}

impl<T: Scalar + Float> Mat3<T> {
    /// Adjugate divided by the determinant.
    ///
    /// A singular matrix trips `check_ne!` in debug builds; in release the
    /// division by zero yields Inf/NaN entries.
    #[must_use]
    pub fn inverse(self) -> Mat3<T> {
        let det = self.determinant();
        check_ne!(det, T::zero());
        let f = det.recip();
        Mat3 {
            _00: (self._11 * self._22 - self._12 * self._21) * f,
            _01: (self._02 * self._21 - self._01 * self._22) * f,
            _02: (self._01 * self._12 - self._02 * self._11) * f,
            _10: (self._12 * self._20 - self._10 * self._22) * f,
            _11: (self._00 * self._22 - self._02 * self._20) * f,
            _12: (self._02 * self._10 - self._00 * self._12) * f,
            _20: (self._10 * self._21 - self._11 * self._20) * f,
            _21: (self._01 * self._20 - self._00 * self._21) * f,
            _22: (self._00 * self._11 - self._01 * self._10) * f,
        }
    }

    /// Entry-wise tolerance comparison with machine epsilon.
    #[must_use]
    pub fn almost_eq(self, rhs: Mat3<T>) -> bool {
        self.almost_eq_with(rhs, T::epsilon())
    }

    /// Entry-wise `|difference| <= tolerance`.
    #[must_use]
    pub fn almost_eq_with(self, rhs: Mat3<T>, tolerance: T) -> bool {
        (0..3).all(|r| self.row_at(r).almost_eq_with(rhs.row_at(r), tolerance))
    }
}

/// Read-only row view returned by [`Mat3::row`].
pub struct Mat3Row<'a, T> {
    mat: &'a Mat3<T>,
    r: usize,
}

impl<T: Scalar> Index<usize> for Mat3Row<'_, T> {
    type Output = T;

    fn index(&self, c: usize) -> &T {
        self.mat.element_ref(self.r, c)
    }
}

/// Mutable row view returned by [`Mat3::row_mut`].
pub struct Mat3RowMut<'a, T> {
    mat: &'a mut Mat3<T>,
    r: usize,
}

impl<T: Scalar> Index<usize> for Mat3RowMut<'_, T> {
    type Output = T;

    fn index(&self, c: usize) -> &T {
        self.mat.element_ref(self.r, c)
    }
}

impl<T: Scalar> IndexMut<usize> for Mat3RowMut<'_, T> {
    fn index_mut(&mut self, c: usize) -> &mut T {
        self.mat.element_mut(self.r, c)
    }
}

impl<T: Scalar> Index<(usize, usize)> for Mat3<T> {
    type Output = T;

    fn index(&self, (r, c): (usize, usize)) -> &T {
        self.element_ref(r, c)
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Mat3<T> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        self.element_mut(r, c)
    }
}

impl<T: Scalar> fmt::Display for Mat3<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "({}, {}, {})", self._00, self._01, self._02)?;
        writeln!(f, "({}, {}, {})", self._10, self._11, self._12)?;
        write!(f, "({}, {}, {})", self._20, self._21, self._22)
    }
}

impl<T: Scalar> Add<Mat3<T>> for Mat3<T> {
    type Output = Mat3<T>;

    fn add(self, rhs: Mat3<T>) -> Self::Output {
        Mat3::from_rows(
            self.row_at(0) + rhs.row_at(0),
            self.row_at(1) + rhs.row_at(1),
            self.row_at(2) + rhs.row_at(2),
        )
    }
}
impl<T: Scalar> AddAssign<Mat3<T>> for Mat3<T> {
    fn add_assign(&mut self, rhs: Mat3<T>) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub<Mat3<T>> for Mat3<T> {
    type Output = Mat3<T>;

    fn sub(self, rhs: Mat3<T>) -> Self::Output {
        Mat3::from_rows(
            self.row_at(0) - rhs.row_at(0),
            self.row_at(1) - rhs.row_at(1),
            self.row_at(2) - rhs.row_at(2),
        )
    }
}
impl<T: Scalar> SubAssign<Mat3<T>> for Mat3<T> {
    fn sub_assign(&mut self, rhs: Mat3<T>) {
        *self = *self - rhs;
    }
}

/// Matrix product; `(a * b) * v == a * (b * v)`, so the right factor applies
/// first.
impl<T: Scalar> Mul<Mat3<T>> for Mat3<T> {
    type Output = Mat3<T>;

    fn mul(self, rhs: Mat3<T>) -> Self::Output {
        Mat3::from_rows(
            self * rhs.row_at(0),
            self * rhs.row_at(1),
            self * rhs.row_at(2),
        )
    }
}
impl<T: Scalar> MulAssign<Mat3<T>> for Mat3<T> {
    fn mul_assign(&mut self, rhs: Mat3<T>) {
        *self = *self * rhs;
    }
}

/// Linear application to a column vector.
impl<T: Scalar> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self._00 * v.x + self._10 * v.y + self._20 * v.z,
            y: self._01 * v.x + self._11 * v.y + self._21 * v.z,
            z: self._02 * v.x + self._12 * v.y + self._22 * v.z,
        }
    }
}

impl<T: Scalar> Mul<T> for Mat3<T> {
    type Output = Mat3<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Mat3::from_rows(
            self.row_at(0) * rhs,
            self.row_at(1) * rhs,
            self.row_at(2) * rhs,
        )
    }
}
impl<T: Scalar> MulAssign<T> for Mat3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Div<T> for Mat3<T> {
    type Output = Mat3<T>;

    fn div(self, rhs: T) -> Self::Output {
        check_ne!(rhs, T::zero());
        Mat3::from_rows(
            self.row_at(0) / rhs,
            self.row_at(1) / rhs,
            self.row_at(2) / rhs,
        )
    }
}
impl<T: Scalar> DivAssign<T> for Mat3<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! mat3_scalar_lhs_mul {
    ($($t:ty),+) => {$(
        impl Mul<Mat3<$t>> for $t {
            type Output = Mat3<$t>;

            fn mul(self, rhs: Mat3<$t>) -> Self::Output {
                rhs * self
            }
        }
    )+};
}
mat3_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
