//! Free helpers for composing model/view/projection transforms.
//!
//! Thin wrappers over the [`Mat4`] builders and [`Quat`] rotation methods,
//! for call sites that read better with free functions than with chained
//! methods.

use crate::mat4::Mat4;
use crate::quat::Quat;
use crate::scalar::Scalar;
use crate::vec3::Vec3;
use num_traits::{Float, Signed};

/// Applies the rotation `q` to `v`; same as [`Quat::rotate`].
#[must_use]
pub fn rotate<T: Scalar + Float>(q: Quat<T>, v: Vec3<T>) -> Vec3<T> {
    q.rotate(v)
}

/// The rotation of `angle_rad` radians about `axis`.
#[must_use]
pub fn from_axis_angle_rad<T: Scalar + Float>(axis: Vec3<T>, angle_rad: T) -> Quat<T> {
    Quat::axis_angle(axis, angle_rad)
}

/// The rotation of `angle_deg` degrees about `axis`.
#[must_use]
pub fn from_axis_angle_deg<T: Scalar + Float>(axis: Vec3<T>, angle_deg: T) -> Quat<T> {
    Quat::axis_angle_deg(axis, angle_deg)
}

/// The canonical translate-rotate-scale model matrix: scale applies first,
/// then the rotation, then the translation.
#[must_use]
pub fn trs<T: Scalar + Float>(translation: Vec3<T>, rotation: Quat<T>, scale: Vec3<T>) -> Mat4<T> {
    Mat4::identity()
        .translate(translation)
        .rotate_quat(rotation)
        .scale(scale)
}

/// Combines model, view and projection into one clip-space matrix.
#[must_use]
pub fn mvp<T: Scalar>(model: Mat4<T>, view: Mat4<T>, projection: Mat4<T>) -> Mat4<T> {
    projection * view * model
}

/// See [`Mat4::look_at`].
#[must_use]
pub fn look_at<T: Scalar + Float + Signed>(eye: Vec3<T>, center: Vec3<T>, up: Vec3<T>) -> Mat4<T> {
    Mat4::look_at(eye, center, up)
}

/// See [`Mat4::perspective`].
#[must_use]
pub fn perspective<T: Scalar + Float>(fov_rad: T, aspect: T, z_near: T, z_far: T) -> Mat4<T> {
    Mat4::perspective(fov_rad, aspect, z_near, z_far)
}

/// See [`Mat4::orthographic`].
#[must_use]
pub fn orthographic<T: Scalar + Float>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    z_near: T,
    z_far: T,
) -> Mat4<T> {
    Mat4::orthographic(left, right, bottom, top, z_near, z_far)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar;

    #[test]
    fn free_rotate_matches_method() {
        let q = Quat::axis_angle_deg(Vec3::<f64>::up(), 30.0);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(rotate(q, v), q.rotate(v));
        assert_eq!(from_axis_angle_deg(Vec3::<f64>::up(), 30.0), q);
        assert!(from_axis_angle_rad(Vec3::<f64>::up(), scalar::deg_to_rad(30.0)).almost_eq(q));
    }

    #[test]
    fn trs_applies_scale_then_rotation_then_translation() {
        let m = trs(
            Vec3::<f32>::right() * 10.0,
            Quat::axis_angle_deg(Vec3::up(), 90.0),
            Vec3::splat(2.0),
        );
        // (1, 0, 0) scales to (2, 0, 0), rotates to (0, 0, -2), then translates
        let p = m * Vec3::right();
        assert!(p.almost_eq_with(Vec3::new(10.0, 0.0, -2.0), 1e-5));
    }

    #[test]
    fn mvp_composition_order() {
        let model = Mat4::<f32>::identity().translate(Vec3::right() * 2.0);
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::zero(), Vec3::up());
        let projection = Mat4::orthographic(-10.0, 10.0, -10.0, 10.0, 0.1, 100.0);

        let combined = mvp(model, view, projection);
        let direct = projection * (view * (model * Vec3::zero().homogenous()));
        assert!((combined * Vec3::zero().homogenous()).almost_eq_with(direct, 1e-5));
    }

    #[test]
    fn camera_helpers_delegate() {
        let eye = Vec3::new(5.0_f32, 2.0, 3.0);
        assert!(look_at(eye, Vec3::zero(), Vec3::up())
            .almost_eq(Mat4::look_at(eye, Vec3::zero(), Vec3::up())));
        assert!(perspective(1.0_f32, 1.5, 0.1, 100.0)
            .almost_eq(Mat4::perspective(1.0, 1.5, 0.1, 100.0)));
        assert!(orthographic(-1.0_f32, 1.0, -1.0, 1.0, 0.1, 10.0)
            .almost_eq(Mat4::orthographic(-1.0, 1.0, -1.0, 1.0, 0.1, 10.0)));
    }
}
