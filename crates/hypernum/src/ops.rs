//! Algebraic operations on hypercomplex numbers
//!
//! Addition, subtraction, multiplication, and division use the operators in `core::ops`,
//! both between two numbers of the same type and between a number and a bare scalar.
//! The operations here are the ones without an operator.

/// The conjugate x̄, which keeps the real part and negates every imaginary part
///
/// ```
/// use hypernum::quaternion::Quaternion;
/// use hypernum::ops::*;
///
/// let q = Quaternion::new(1, 2, 3, 4);
/// assert_eq!(q.conjugate(), Quaternion::new(1, -2, -3, -4));
/// assert_eq!(q.conjugate().conjugate(), q);
/// ```
///
/// Conjugation only requires a [Ring](crate::scalar::Ring) scalar.
pub trait Conjugate {
    type Output;
    fn conjugate(self) -> Self::Output;
}

/// The square of the [norm](Norm): the sum of the squares of all components
///
/// This trait avoids the square root in [Norm]
/// and is therefore always available,
/// even on scalar types that do not implement [Sqrt](crate::scalar::Sqrt).
///
/// ```
/// use hypernum::complex::Complex;
/// use hypernum::ops::*;
///
/// assert_eq!(Complex::new(3, 4).norm_squared(), 25);
/// ```
pub trait NormSquared {
    type Output;
    fn norm_squared(self) -> Self::Output;
}

/// The Euclidean length of the component vector
///
/// For complex numbers this is the modulus |z|;
/// for quaternions it is the length of the 4-vector (a, b, c, d).
/// In both cases the norm is multiplicative: |pq| = |p| |q|.
///
/// ```
/// use hypernum::complex::Complex;
/// use hypernum::ops::*;
///
/// assert_eq!(Complex::new(3., 4.).norm(), 5.);
/// ```
///
/// Requires a scalar type that implements [Sqrt](crate::scalar::Sqrt).
/// Consider [NormSquared] if this is an issue.
pub trait Norm {
    type Output;
    fn norm(self) -> Self::Output;
}

/// The multiplicative inverse x⁻¹ = x̄ / |x|²
///
/// When multiplication does not commute, as with quaternions,
/// division `p / q` is *right* division, `p * q.reciprocal()`;
/// left division must be written out as `q.reciprocal() * p`.
/// Commutative algebras such as [Complex](crate::complex::Complex)
/// divide by the squared norm last instead, `(p * q.conjugate()) / q.norm_squared()`.
///
/// ```
/// use hypernum::quaternion::Quaternion;
/// use hypernum::ops::*;
///
/// let p = Quaternion::new(1., 2., 3., 4.);
/// let q = Quaternion::new(0., 1., 0., 0.);
///
/// assert_eq!(q.reciprocal(), Quaternion::new(0., -1., 0., 0.));
/// assert_eq!(p / q, p * q.reciprocal());
/// assert_ne!(p / q, q.reciprocal() * p);
/// ```
///
/// Requires a scalar type that implements [Field](crate::scalar::Field).
/// The reciprocal of zero is not finite.
pub trait Reciprocal {
    type Output;
    fn reciprocal(self) -> Self::Output;
}
