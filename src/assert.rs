//! Debug-only precondition checks.
//!
//! The `check*` macros guard numeric preconditions (nonzero divisors,
//! invertible matrices, non-degenerate quaternions). They panic with the
//! offending location when `debug_assertions` are enabled and compile to
//! nothing otherwise, so release builds pay no cost and simply let IEEE-754
//! Inf/NaN propagate.

pub fn assert_ord<T: PartialOrd>(_: &T) {}
pub fn assert_partial_eq<T: PartialEq>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}
pub fn assert_type<T>(_: &T) {}

#[allow(unused_macros)]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub(crate) use current_location;

#[allow(unused_macros)]
macro_rules! check {
    ($lhs:expr) => {{
        $crate::assert::assert_type::<bool>(&$lhs);
        if cfg!(debug_assertions) && !$lhs {
            panic!(
                "check failed: {}: {}",
                $crate::assert::current_location!(),
                stringify!($lhs),
            );
        }
    }};
}
#[allow(unused_imports)]
pub(crate) use check;

#[allow(unused_macros)]
macro_rules! check_lt {
    ($lhs:expr, $rhs:expr) => {{
        $crate::assert::assert_same_type(&$lhs, &$rhs);
        $crate::assert::assert_ord(&$lhs);
        if cfg!(debug_assertions) && !($lhs < $rhs) {
            panic!(
                "check failed: {}: {} < {}: {:?} vs. {:?}",
                $crate::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub(crate) use check_lt;

#[allow(unused_macros)]
macro_rules! check_gt {
    ($lhs:expr, $rhs:expr) => {{
        $crate::assert::assert_same_type(&$lhs, &$rhs);
        $crate::assert::assert_ord(&$lhs);
        if cfg!(debug_assertions) && !($lhs > $rhs) {
            panic!(
                "check failed: {}: {} > {}: {:?} vs. {:?}",
                $crate::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub(crate) use check_gt;

#[allow(unused_macros)]
macro_rules! check_le {
    ($lhs:expr, $rhs:expr) => {{
        $crate::assert::assert_same_type(&$lhs, &$rhs);
        $crate::assert::assert_ord(&$lhs);
        if cfg!(debug_assertions) && !($lhs <= $rhs) {
            panic!(
                "check failed: {}: {} <= {}: {:?} vs. {:?}",
                $crate::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub(crate) use check_le;

#[allow(unused_macros)]
macro_rules! check_ge {
    ($lhs:expr, $rhs:expr) => {{
        $crate::assert::assert_same_type(&$lhs, &$rhs);
        $crate::assert::assert_ord(&$lhs);
        if cfg!(debug_assertions) && !($lhs >= $rhs) {
            panic!(
                "check failed: {}: {} >= {}: {:?} vs. {:?}",
                $crate::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub(crate) use check_ge;

#[allow(unused_macros)]
macro_rules! check_eq {
    ($lhs:expr, $rhs:expr) => {{
        $crate::assert::assert_same_type(&$lhs, &$rhs);
        $crate::assert::assert_partial_eq(&$lhs);
        if cfg!(debug_assertions) && !($lhs == $rhs) {
            panic!(
                "check failed: {}: {} == {}: {:?} vs. {:?}",
                $crate::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub(crate) use check_eq;

#[allow(unused_macros)]
macro_rules! check_ne {
    ($lhs:expr, $rhs:expr) => {{
        $crate::assert::assert_same_type(&$lhs, &$rhs);
        $crate::assert::assert_partial_eq(&$lhs);
        if cfg!(debug_assertions) && !($lhs != $rhs) {
            panic!(
                "check failed: {}: {} != {}: {:?} vs. {:?}",
                $crate::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub(crate) use check_ne;
