//! Traits that govern the scalar data type used by hypernum
//!
//! Adding, subtracting, multiplying, and conjugating hypercomplex numbers
//! is done through sums and products of their components,
//! so the scalar datatype needs only be a [Ring] for that functionality to work.
//! Division, norms, and square roots ask more of the scalar:
//! see [Field], [Sqrt], and [SignBit].
//!
//! These extra requirements are placed on the operations that need them,
//! not on the number types themselves,
//! so e.g. `Complex<i32>` is perfectly usable for Gaussian integer arithmetic.
//! Calling an operation whose requirements the scalar does not meet
//! is a compile-time error.

use core::ops::{Add, Div, Mul, Neg, Sub};

/// A scalar datatype whose absolute value can be taken.
pub trait Abs {
    type Output;

    /// Computes the absolute value of a scalar.
    fn abs(self) -> Self::Output;
}

/// A scalar datatype which is closed under addition and multiplication.
///
/// see <https://en.wikipedia.org/wiki/Ring_(mathematics)>
///
/// `Ring` is implemented for `f32`, `f64`, and `i8` through `i128`
///
/// `Ring` requires that its datatype is `Copy` to avoid the need to clone or borrow when writing
/// mathematical expressions. If your scalar datatype is expensive to copy,
/// consider implementing `Ring` on a reference-counted container that is `Copy`.
///
/// Equality of hypercomplex numbers is exact, componentwise equality
/// using the scalar's `PartialEq`.
///
/// Beyond addition, subtraction, multiplication and equality,
/// `Ring` also asks for negation (used by conjugation and `t - x`),
/// [Abs] (used by `abs_diff_eq()`), and `Default` (zero).
/// Unsigned integers have no `Neg` and so cannot be used as scalars.
pub trait Ring:
    Clone
    + Copy
    + PartialEq
    + Neg<Output = Self>
    + Abs<Output = Self>
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Default
{
    /// The additive identity
    fn zero() -> Self {
        Self::default()
    }

    /// Construct an integer scalar
    fn from_integer(i: isize) -> Self;
}

/// A scalar datatype which can represent fractional values such as ½.
///
/// `Rational` comes implemented for `f32` and `f64`.
pub trait Rational: Ring {
    /// Construct a rational scalar
    /// from an integer numerator and integer denominator
    fn from_fraction(numerator: isize, denominator: isize) -> Self;

    /// A scalar value that when multiplied by 2 equals one
    fn one_half() -> Self {
        Self::from_fraction(1, 2)
    }
}

/// A scalar datatype with true (non-truncating) division.
///
/// Dividing hypercomplex numbers, or taking their [reciprocal](crate::ops::Reciprocal),
/// is only available when the scalar type is a `Field`.
/// Integer division truncates, so the integer types deliberately do not implement it:
///
/// ```compile_fail
/// use hypernum::complex::Complex;
///
/// // i32 is not a Field
/// let q = Complex::new(1, 2) / Complex::new(3, 4);
/// ```
///
/// `Field` comes implemented for `f32` and `f64`.
///
/// ## Division by zero
///
/// When given a zero divisor,
/// division must return a valid scalar datatype (e.g. `f32::INFINITY` or `f32::NAN`) or panic.
/// There are no other provisions for exception handling at this level.
///
/// For floating point datatypes, division is NOT NaN-free:
/// dividing by a hypercomplex number whose norm is zero
/// produces non-finite components, which propagate silently.
pub trait Field: Rational + Div<Self, Output = Self> {}

/// A scalar datatype which is closed under the square root function.
///
/// Failing to implement `Sqrt` means that [norms](crate::ops::Norm)
/// and principal square roots will not be available.
/// [Squared norms](crate::ops::NormSquared) will always be available.
///
/// `Sqrt` comes implemented for `f32` and `f64` when the `std` feature is enabled.
///
/// ## `sqrt()` of negative numbers
///
/// When given a negative value,
/// this function must either return a valid scalar datatype (e.g. `f32::NaN`)
/// or panic. There are no other provisions for exception handling at this level.
///
/// All uses of `sqrt()` within the library
/// are on values that are non-negative in exact arithmetic.
pub trait Sqrt: Ring {
    // The scalar datatype for the square root
    type Output;

    // This scalar's positive square root
    fn sqrt(self) -> <Self as Sqrt>::Output;
}

/// A scalar datatype that carries a sign even when it is zero.
///
/// The principal square root uses the sign of the imaginary part
/// to pick a branch, and `-0.0` must pick the same branch as negative values.
///
/// `SignBit` comes implemented for `f32` and `f64`.
pub trait SignBit {
    /// Returns true for negative values, including negative zero
    fn is_sign_negative(self) -> bool;
}

macro_rules! impl_for_float {
    ($type:ident) => {
        #[cfg(feature = "std")]
        impl Abs for $type {
            type Output = $type;
            fn abs(self) -> $type {
                self.abs()
            }
        }
        #[cfg(not(feature = "std"))]
        impl Abs for $type {
            type Output = $type;
            fn abs(self) -> $type {
                if self < 0. {
                    -self
                } else {
                    self
                }
            }
        }

        impl Ring for $type {
            fn from_integer(i: isize) -> $type {
                i as $type
            }
        }

        impl Rational for $type {
            fn from_fraction(numerator: isize, denominator: isize) -> $type {
                numerator as $type / denominator as $type
            }
        }

        impl Field for $type {}

        #[cfg(feature = "std")]
        impl Sqrt for $type {
            type Output = $type;
            fn sqrt(self) -> $type {
                self.sqrt()
            }
        }

        impl SignBit for $type {
            fn is_sign_negative(self) -> bool {
                self.is_sign_negative()
            }
        }
    };
}

impl_for_float!(f32);
impl_for_float!(f64);

macro_rules! impl_for_int {
    ($type:ident) => {
        impl Abs for $type {
            type Output = $type;
            fn abs(self) -> $type {
                self.abs()
            }
        }

        impl Ring for $type {
            fn from_integer(i: isize) -> $type {
                i.try_into().expect("Integer out of range")
            }
        }
    };
}

impl_for_int!(i8);
impl_for_int!(i16);
impl_for_int!(i32);
impl_for_int!(i64);
impl_for_int!(i128);
