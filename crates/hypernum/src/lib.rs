#![cfg_attr(not(feature = "std"), no_std)]

//! hypernum is a library of generic hypercomplex number types.
//!
//! hypernum ships with [complex numbers](complex),
//! [quaternions](quaternion),
//! and a two-component [octonion] type.
//! Each is a plain `Copy` value type;
//! every operation returns a new value and leaves its operands alone.
//!
//! Arithmetic is available through the usual operators,
//! both between two numbers of the same type and between a number and a bare scalar,
//! with the scalar on either side.
//! Operations without an operator, such as [conjugation](ops::Conjugate),
//! [norms](ops::Norm), and [reciprocals](ops::Reciprocal), live in the [ops] module.
//!
//! ```
//! use hypernum::complex::Complex;
//! use hypernum::quaternion::Quaternion;
//! use hypernum::ops::*;
//!
//! let z = Complex::new(3., 4.);
//! assert_eq!(z.norm(), 5.);
//! assert_eq!(2. * z - 1., Complex::new(5., 8.));
//!
//! let p = Quaternion::new(1., 2., 3., 4.);
//! let q = Quaternion::new(4., 3., 2., 1.);
//! assert_ne!(p * q, q * p);
//! ```
//!
//! hypernum is generic over the [scalar] datatype, and can be used with `f32`, `f64`, or custom datatypes.
//! It can even use integers, with some restrictions--
//! addition, subtraction, multiplication, and conjugation require only [a ring](scalar::Ring),
//! while division, norms, and square roots require [more](scalar::Field).
//! Using an operation that the scalar type does not support is a compile-time error.
//!
//! Floating-point division by zero is not an error:
//! it follows IEEE-754 and yields infinite or NaN components.
//!
//! hypernum does not use SIMD intrinsics.
//!
//! hypernum is `no_std`-compatible.
//! Without the `std` feature, `f32` and `f64` do not implement [Sqrt](scalar::Sqrt),
//! so norms and square roots are unavailable unless you bring your own scalar type.

/// Generate the arithmetic of a hypercomplex number struct
///
/// This low-level macro can be used to define new algebras
/// if the pre-made [complex], [quaternion], and [octonion] types are not sufficient,
/// or if you want ownership of the struct, e.g. to implement traits on it
/// within the constraints of the [orphan rule](https://doc.rust-lang.org/book/ch10-02-traits.html).
///
/// ```
/// use hypernum::cayley_algebra;
///
/// // These traits must be brought into scope before invoking the macro:
/// use hypernum::scalar::*;
/// use hypernum::ops::*;
///
/// cayley_algebra! {
///     // The multiplication table of the units, one row per field, in field order.
///     // The entry in row r, column s is the product unit_r * unit_s,
///     // written as `unit`, `-unit`, or `0`.
///     // The first field is the real unit, so the first row and column are the identity.
///     table![
///         [a,  b],
///         [b, -a],
///     ];
///
///     #[derive(Clone, Copy, Default, Debug)] // Must be Copy for use in math expressions
///     pub struct MyComplex<T> { // Must have a single generic parameter named T
///         a: T, // each component must be type T (the scalar type)
///         b: T,
///
///         // Fields marked #[cosmetic] take no part in arithmetic or equality.
///         // They must be Copy + Default, and results inherit them from the left-hand operand.
///         #[cosmetic]
///         tag: u8,
///     }
/// }
///
/// let z = MyComplex::new(1., 2.);
/// assert_eq!(z * z, MyComplex::new(-3., 4.));
/// assert_eq!(z.norm_squared(), 5.);
/// ```
///
/// The macro will emit the struct verbatim
/// (with the pseudo-attributes stripped out)
/// and append:
/// * `new()`, taking every component in field order
/// * `PartialEq` (do not derive it yourself)
/// * `+`, `-`, and unary `-` between numbers, and `+` or `-` of a scalar onto the real part
/// * `*` by a scalar, and the product given by the table
/// * `/` by a scalar
/// * [Conjugate](ops::Conjugate) and `abs_diff_eq()`
///
/// When every imaginary unit squares to the negated real unit,
/// the sum of the squares of the components is a multiplicative norm and the macro also emits
/// [NormSquared](ops::NormSquared), [Norm](ops::Norm), [Reciprocal](ops::Reciprocal),
/// and `/` between numbers.
/// If the table is symmetric, `p / q` is `(p * q.conjugate()) / q.norm_squared()`;
/// otherwise it is right division, `p * q.reciprocal()`.
pub use hypernum_macros::cayley_algebra;

pub mod complex;
pub mod octonion;
pub mod ops;
pub mod quaternion;
pub mod scalar;

mod test;
