//! Two-component "octonions"
//!
//! `Octonion` has two components and the same multiplication rule as [Complex](crate::complex::Complex):
//! (a + bu)(c + du) = (ac - bd) + (ad + bc)u.
//! It is *not* the eight-dimensional, non-associative Cayley–Dickson octonion algebra
//! (see <https://en.wikipedia.org/wiki/Octonion>).
//! It differs from `Complex` only in that it has no display formatting.
//!
//! ```
//! use hypernum::octonion::Octonion;
//! use hypernum::ops::*;
//!
//! let x = Octonion::new(3., 4.);
//! assert_eq!(x.norm(), 5.);
//! assert!((x * x.reciprocal()).abs_diff_eq(Octonion::new(1., 0.), 1e-12));
//! assert_eq!(x.sqrt() * x.sqrt(), x);
//! ```

use crate::complex::principal_sqrt;
use crate::ops::*;
use crate::scalar::*;
use hypernum_macros::cayley_algebra;

cayley_algebra! {
    table![
        [re,  im],
        [im, -re],
    ];

    /// A two-component number `re + im·u` where u² = -1
    ///
    /// Only (exact, componentwise) equality is defined.
    ///
    /// `Octonion::default()` is zero.
    #[derive(Clone, Copy, Default, Debug)]
    pub struct Octonion<T> {
        re: T,
        im: T,
    }
}

impl<T: Ring> Octonion<T> {
    /// The real part
    pub fn re(&self) -> T {
        self.re
    }

    /// The imaginary part
    pub fn im(&self) -> T {
        self.im
    }
}

impl<T: Field + Sqrt<Output = T> + SignBit> Octonion<T> {
    /// The principal square root, whose real part is never negative
    ///
    /// See [Complex::sqrt](crate::complex::Complex::sqrt).
    pub fn sqrt(self) -> Self {
        let (re, im) = principal_sqrt(self.re, self.im);
        Octonion { re, im }
    }
}

/// Implement arithmetic with a scalar on the left-hand side, e.g. `2. * x`
///
/// See [impl_complex_for_scalar](crate::impl_complex_for_scalar).
#[macro_export]
macro_rules! impl_octonion_for_scalar {
    ($type:ty) => {
        impl core::ops::Add<$crate::octonion::Octonion<$type>> for $type {
            type Output = $crate::octonion::Octonion<$type>;
            fn add(self, r: $crate::octonion::Octonion<$type>) -> $crate::octonion::Octonion<$type> {
                r + self
            }
        }

        impl core::ops::Sub<$crate::octonion::Octonion<$type>> for $type {
            type Output = $crate::octonion::Octonion<$type>;
            fn sub(self, r: $crate::octonion::Octonion<$type>) -> $crate::octonion::Octonion<$type> {
                -r + self
            }
        }

        impl core::ops::Mul<$crate::octonion::Octonion<$type>> for $type {
            type Output = $crate::octonion::Octonion<$type>;
            fn mul(self, r: $crate::octonion::Octonion<$type>) -> $crate::octonion::Octonion<$type> {
                r * self
            }
        }
    };
}

/// Implement division with a scalar on the left-hand side, e.g. `1. / x`
#[macro_export]
macro_rules! impl_octonion_div_for_scalar {
    ($type:ty) => {
        impl core::ops::Div<$crate::octonion::Octonion<$type>> for $type {
            type Output = $crate::octonion::Octonion<$type>;
            fn div(self, r: $crate::octonion::Octonion<$type>) -> $crate::octonion::Octonion<$type> {
                let zero = <$type as $crate::scalar::Ring>::zero();
                $crate::octonion::Octonion::new(self, zero) / r
            }
        }
    };
}

impl_octonion_for_scalar!(f32);
impl_octonion_for_scalar!(f64);
impl_octonion_for_scalar!(i8);
impl_octonion_for_scalar!(i16);
impl_octonion_for_scalar!(i32);
impl_octonion_for_scalar!(i64);
impl_octonion_for_scalar!(i128);
impl_octonion_div_for_scalar!(f32);
impl_octonion_div_for_scalar!(f64);
