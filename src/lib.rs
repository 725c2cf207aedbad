//! Compact generic linear algebra: 2/3/4-component vectors, 3x3/4x4 matrices
//! and quaternions over any numeric element type, plus the usual transform
//! builders (translate/rotate/scale, look-at, perspective, orthographic).
//!
//! All types are plain `Copy` aggregates with public named fields, so an
//! external serializer can read and write them field by field; every type
//! derives [`serde::Serialize`]/[`serde::Deserialize`] for exactly that.
//!
//! Numeric preconditions (zero divisors, singular matrices, degenerate
//! quaternions) are checked by the `check*` macros in debug builds only; in
//! release builds the arithmetic proceeds and IEEE-754 Inf/NaN propagates.

pub mod assert;
pub mod mat3;
pub mod mat4;
pub mod prelude;
pub mod quat;
pub mod scalar;
pub mod transform;
pub mod vec2;
pub mod vec3;
pub mod vec4;
