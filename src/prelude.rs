//! Single-use-statement import of the whole public surface.
//!
//! ```
//! use vecmat::prelude::*;
//!
//! let m = Mat4::<f32>::identity().translate(Vec3::right() * 2.0);
//! assert_eq!(m * Vec3::zero(), Vec3::right() * 2.0);
//! ```

pub use crate::mat3::Mat3;
pub use crate::mat4::Mat4;
pub use crate::quat::Quat;
pub use crate::scalar::{self, Scalar};
pub use crate::transform;
pub use crate::vec2::Vec2;
pub use crate::vec3::Vec3;
pub use crate::vec4::Vec4;

pub use num_traits::{Float, One, Signed, Zero};
