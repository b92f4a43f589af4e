//! Quaternions a + bi + cj + dk
//!
//! See <https://en.wikipedia.org/wiki/Quaternion>
//!
//! The imaginary units obey Hamilton's relations
//! i² = j² = k² = ijk = -1,
//! which make quaternion multiplication noncommutative:
//!
//! ```
//! use hypernum::quaternion::Quaternion;
//!
//! let i = Quaternion::new(0, 1, 0, 0);
//! let j = Quaternion::new(0, 0, 1, 0);
//! let k = Quaternion::new(0, 0, 0, 1);
//!
//! assert_eq!(i * j, k);
//! assert_eq!(j * i, -k);
//! assert_eq!(i * j * k, Quaternion::new(-1, 0, 0, 0));
//! ```

use crate::ops::*;
use crate::scalar::*;
use hypernum_macros::cayley_algebra;

cayley_algebra! {
    table![
        [re,   i,   j,   k],
        [ i, -re,   k,  -j],
        [ j,  -k, -re,   i],
        [ k,   j,  -i, -re],
    ];

    /// A quaternion with real part `re`
    /// and coefficients `i`, `j`, `k` on the three imaginary units
    ///
    /// Multiplication is the Hamilton product, and is not commutative.
    /// Division `p / q` is right division, `p * q.reciprocal()`;
    /// see [Reciprocal](crate::ops::Reciprocal).
    ///
    /// Quaternions are unordered:
    /// only (exact, componentwise) equality is defined.
    ///
    /// `Quaternion::default()` is zero.
    #[derive(Clone, Copy, Default, Debug)]
    pub struct Quaternion<T> {
        re: T,
        i: T,
        j: T,
        k: T,
    }
}

impl<T: Ring> Quaternion<T> {
    /// The real part
    pub fn re(&self) -> T {
        self.re
    }

    /// The coefficient on i
    pub fn im1(&self) -> T {
        self.i
    }

    /// The coefficient on j
    pub fn im2(&self) -> T {
        self.j
    }

    /// The coefficient on k
    pub fn im3(&self) -> T {
        self.k
    }
}

/// Implement arithmetic with a scalar on the left-hand side, e.g. `2. * q`
///
/// Scalars commute with quaternions, so `t * q == q * t`.
/// See [impl_complex_for_scalar](crate::impl_complex_for_scalar).
#[macro_export]
macro_rules! impl_quaternion_for_scalar {
    ($type:ty) => {
        impl core::ops::Add<$crate::quaternion::Quaternion<$type>> for $type {
            type Output = $crate::quaternion::Quaternion<$type>;
            fn add(
                self,
                r: $crate::quaternion::Quaternion<$type>,
            ) -> $crate::quaternion::Quaternion<$type> {
                r + self
            }
        }

        impl core::ops::Sub<$crate::quaternion::Quaternion<$type>> for $type {
            type Output = $crate::quaternion::Quaternion<$type>;
            fn sub(
                self,
                r: $crate::quaternion::Quaternion<$type>,
            ) -> $crate::quaternion::Quaternion<$type> {
                -r + self
            }
        }

        impl core::ops::Mul<$crate::quaternion::Quaternion<$type>> for $type {
            type Output = $crate::quaternion::Quaternion<$type>;
            fn mul(
                self,
                r: $crate::quaternion::Quaternion<$type>,
            ) -> $crate::quaternion::Quaternion<$type> {
                r * self
            }
        }
    };
}

/// Implement division with a scalar on the left-hand side, e.g. `1. / q`
#[macro_export]
macro_rules! impl_quaternion_div_for_scalar {
    ($type:ty) => {
        impl core::ops::Div<$crate::quaternion::Quaternion<$type>> for $type {
            type Output = $crate::quaternion::Quaternion<$type>;
            fn div(
                self,
                r: $crate::quaternion::Quaternion<$type>,
            ) -> $crate::quaternion::Quaternion<$type> {
                $crate::ops::Reciprocal::reciprocal(r) * self
            }
        }
    };
}

impl_quaternion_for_scalar!(f32);
impl_quaternion_for_scalar!(f64);
impl_quaternion_for_scalar!(i8);
impl_quaternion_for_scalar!(i16);
impl_quaternion_for_scalar!(i32);
impl_quaternion_for_scalar!(i64);
impl_quaternion_for_scalar!(i128);
impl_quaternion_div_for_scalar!(f32);
impl_quaternion_div_for_scalar!(f64);
