//! Complex numbers a + bi
//!
//! See <https://en.wikipedia.org/wiki/Complex_number>
//!
//! ```
//! use hypernum::complex::Complex;
//! use hypernum::ops::*;
//!
//! let z = Complex::new(1., 2.) + Complex::new(3., -1.);
//! assert_eq!(z, Complex::new(4., 1.));
//!
//! // (1 + 0i) / (0 + 1i) = 0 - 1i
//! assert_eq!(Complex::new(1., 0.) / Complex::new(0., 1.), Complex::new(0., -1.));
//!
//! assert_eq!(Complex::new(3., 4.).norm(), 5.);
//! assert_eq!(Complex::new(3., 4.).sqrt(), Complex::new(2., 1.));
//! ```

use crate::ops::*;
use crate::scalar::*;
use core::fmt;
use hypernum_macros::cayley_algebra;

/// The symbol used for the imaginary unit when a [Complex] is displayed
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum ImaginarySymbol {
    /// `i`, as is conventional in mathematics
    #[default]
    I,
    /// `j`, as is conventional in electrical engineering
    J,
}

cayley_algebra! {
    table![
        [re,  im],
        [im, -re],
    ];

    /// A complex number `re + im·i`
    ///
    /// Complex numbers are unordered:
    /// only (exact, componentwise) equality is defined.
    /// Use [abs_diff_eq()](Complex::abs_diff_eq) to compare with a tolerance.
    ///
    /// `Complex::default()` is zero.
    #[derive(Clone, Copy, Default, Debug)]
    pub struct Complex<T> {
        re: T,
        im: T,
        #[cosmetic]
        symbol: ImaginarySymbol,
    }
}

impl<T: Ring> Complex<T> {
    /// The real part
    pub fn re(&self) -> T {
        self.re
    }

    /// The imaginary part
    pub fn im(&self) -> T {
        self.im
    }

    /// The symbol used for the imaginary unit when displayed
    pub fn symbol(&self) -> ImaginarySymbol {
        self.symbol
    }

    /// Change the symbol used for the imaginary unit when displayed.
    /// This has no effect on arithmetic or equality.
    ///
    /// The results of arithmetic inherit the symbol of the left-hand operand.
    ///
    /// ```
    /// use hypernum::complex::{Complex, ImaginarySymbol};
    ///
    /// let mut z = Complex::new(1, -2);
    /// assert_eq!(z.to_string(), "1-2i");
    ///
    /// z.set_symbol(ImaginarySymbol::J);
    /// assert_eq!(z.to_string(), "1-2j");
    /// assert_eq!((z * 2).to_string(), "2-4j");
    /// ```
    pub fn set_symbol(&mut self, symbol: ImaginarySymbol) {
        self.symbol = symbol;
    }

    /// Return a copy that is displayed using the given imaginary symbol
    pub fn with_symbol(mut self, symbol: ImaginarySymbol) -> Self {
        self.symbol = symbol;
        self
    }
}

impl<T: Field + Sqrt<Output = T> + SignBit> Complex<T> {
    /// The principal square root, whose real part is never negative
    ///
    /// The branch cut lies along the negative real axis;
    /// the sign of the imaginary part (including the sign of `-0.0`)
    /// selects which side of it the result lands on.
    ///
    /// ```
    /// use hypernum::complex::Complex;
    ///
    /// assert_eq!(Complex::new(-4., 0.).sqrt(), Complex::new(0., 2.));
    /// assert_eq!(Complex::new(-4., -0.).sqrt(), Complex::new(0., -2.));
    /// ```
    pub fn sqrt(self) -> Self {
        let (re, im) = principal_sqrt(self.re, self.im);
        Complex {
            re,
            im,
            symbol: self.symbol,
        }
    }
}

/// The principal square root of re + im·u for an imaginary unit u² = -1
pub(crate) fn principal_sqrt<T: Field + Sqrt<Output = T> + SignBit>(re: T, im: T) -> (T, T) {
    let norm = (re * re + im * im).sqrt();
    let gamma = ((re + norm) * T::one_half()).sqrt();
    let delta = ((-re + norm) * T::one_half()).sqrt();
    let delta = if im.is_sign_negative() { -delta } else { delta };
    (gamma, delta)
}

impl<T: Ring + PartialOrd + fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im >= T::zero() { '+' } else { '-' };
        let symbol = match self.symbol {
            ImaginarySymbol::I => 'i',
            ImaginarySymbol::J => 'j',
        };
        write!(f, "{}{}{}{}", self.re, sign, self.im.abs(), symbol)
    }
}

/// Implement arithmetic with a scalar on the left-hand side, e.g. `2. * z`
///
/// These impls can't be written generically over the scalar type
/// because of the orphan rule,
/// so they are provided for the built-in scalars
/// and this macro can be used to provide them for your own.
/// See the [scalar module](crate::scalar) for the traits your scalar type must implement.
#[macro_export]
macro_rules! impl_complex_for_scalar {
    ($type:ty) => {
        impl core::ops::Add<$crate::complex::Complex<$type>> for $type {
            type Output = $crate::complex::Complex<$type>;
            fn add(self, r: $crate::complex::Complex<$type>) -> $crate::complex::Complex<$type> {
                r + self
            }
        }

        impl core::ops::Sub<$crate::complex::Complex<$type>> for $type {
            type Output = $crate::complex::Complex<$type>;
            fn sub(self, r: $crate::complex::Complex<$type>) -> $crate::complex::Complex<$type> {
                -r + self
            }
        }

        impl core::ops::Mul<$crate::complex::Complex<$type>> for $type {
            type Output = $crate::complex::Complex<$type>;
            fn mul(self, r: $crate::complex::Complex<$type>) -> $crate::complex::Complex<$type> {
                r * self
            }
        }
    };
}

/// Implement division with a scalar on the left-hand side, e.g. `1. / z`
///
/// Your scalar type must implement [Field].
/// `t / z` is `(t + 0i) / z`, displayed with the symbol of `z`.
#[macro_export]
macro_rules! impl_complex_div_for_scalar {
    ($type:ty) => {
        impl core::ops::Div<$crate::complex::Complex<$type>> for $type {
            type Output = $crate::complex::Complex<$type>;
            fn div(self, r: $crate::complex::Complex<$type>) -> $crate::complex::Complex<$type> {
                let zero = <$type as $crate::scalar::Ring>::zero();
                $crate::complex::Complex::new(self, zero).with_symbol(r.symbol()) / r
            }
        }
    };
}

impl_complex_for_scalar!(f32);
impl_complex_for_scalar!(f64);
impl_complex_for_scalar!(i8);
impl_complex_for_scalar!(i16);
impl_complex_for_scalar!(i32);
impl_complex_for_scalar!(i64);
impl_complex_for_scalar!(i128);
impl_complex_div_for_scalar!(f32);
impl_complex_div_for_scalar!(f64);
