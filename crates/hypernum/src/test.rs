#![cfg(all(test, feature = "std"))]

use crate::complex::{Complex, ImaginarySymbol};
use crate::octonion::Octonion;
use crate::ops::*;
use crate::quaternion::Quaternion;

macro_rules! assert_close {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                assert!(
                    (*left_val).is_close(*right_val),
                    "{:?} !~= {:?}",
                    left_val,
                    right_val
                );
            }
        }
    };
}

trait IsClose {
    fn is_close(self, rhs: Self) -> bool;
}

impl IsClose for f64 {
    fn is_close(self, rhs: f64) -> bool {
        (self - rhs).abs() < 1e-9
    }
}

impl IsClose for Complex<f64> {
    fn is_close(self, rhs: Self) -> bool {
        self.abs_diff_eq(rhs, 1e-9)
    }
}

impl IsClose for Quaternion<f64> {
    fn is_close(self, rhs: Self) -> bool {
        self.abs_diff_eq(rhs, 1e-9)
    }
}

impl IsClose for Octonion<f64> {
    fn is_close(self, rhs: Self) -> bool {
        self.abs_diff_eq(rhs, 1e-9)
    }
}

/// Arbitrary but deterministic operands
fn complex_samples() -> Vec<Complex<f64>> {
    vec![
        Complex::new(3., 4.),
        Complex::new(-1.5, 0.25),
        Complex::new(0., -2.),
        Complex::new(-7., 0.),
        Complex::new(0.125, -9.5),
        Complex::new(1e3, 250.),
    ]
}

fn quaternion_samples() -> Vec<Quaternion<f64>> {
    vec![
        Quaternion::new(1., 2., 3., 4.),
        Quaternion::new(-0.5, 0., 1.25, -3.),
        Quaternion::new(0., 0., 0., 1.),
        Quaternion::new(7., -1., -1., 2.5),
        Quaternion::new(0.1, 0.2, -0.3, 0.4),
    ]
}

fn octonion_samples() -> Vec<Octonion<f64>> {
    complex_samples()
        .into_iter()
        .map(|z| Octonion::new(z.re(), z.im()))
        .collect()
}

#[test]
fn test_complex_scenarios() {
    assert_eq!(Complex::new(3., 4.).norm(), 5.);
    assert_eq!(
        Complex::new(1., 2.) + Complex::new(3., -1.),
        Complex::new(4., 1.)
    );
    assert_eq!(
        Complex::new(1., 0.) / Complex::new(0., 1.),
        Complex::new(0., -1.)
    );

    // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
    assert_eq!(
        Complex::new(2, 3) * Complex::new(4, -5),
        Complex::new(23, 2)
    );

    // Division matches the closed form ((ac + bd) + (bc - ad)i) / (c² + d²)
    let (a, b, c, d): (f64, f64, f64, f64) = (1.5, -2., 0.5, 3.);
    let q = Complex::new(a, b) / Complex::new(c, d);
    let n = c * c + d * d;
    assert_eq!(q, Complex::new((a * c + b * d) / n, (b * c - a * d) / n));
}

#[test]
fn test_complex_scalar_operands() {
    let z = Complex::new(1, 2);

    // A scalar only touches the real part when added or subtracted
    assert_eq!(z + 3, Complex::new(4, 2));
    assert_eq!(z - 3, Complex::new(-2, 2));
    assert_eq!(3 + z, Complex::new(4, 2));
    assert_eq!(3 - z, Complex::new(2, -2));

    // ...and scales every component when multiplied
    assert_eq!(z * 3, Complex::new(3, 6));
    assert_eq!(3 * z, Complex::new(3, 6));

    let z = Complex::<f64>::new(3., 4.);
    assert_eq!(z / 2., Complex::new(1.5, 2.));
    assert_eq!(2. / z, Complex::new(6. / 25., -8. / 25.));
    assert_close!((2. / z) * z, Complex::new(2., 0.));
}

#[test]
fn test_division_closed_form() {
    let values = [0.1, -0.3, 1.5, -2., 7., 1e-3, 0.];
    for &a in values.iter() {
        for &b in values.iter() {
            for &c in values.iter() {
                for &d in values.iter() {
                    if c == 0. && d == 0. {
                        continue;
                    }
                    let n = c * c + d * d;
                    let (re, im) = ((a * c + b * d) / n, (b * c - a * d) / n);

                    // No tolerance: the quotient rounds exactly like the closed form
                    assert_eq!(Complex::new(a, b) / Complex::new(c, d), Complex::new(re, im));
                    assert_eq!(Octonion::new(a, b) / Octonion::new(c, d), Octonion::new(re, im));

                    // A scalar dividend is (a, 0)
                    let (re, im) = ((a * c + 0. * d) / n, (0. * c - a * d) / n);
                    assert_eq!(a / Complex::new(c, d), Complex::new(re, im));
                    assert_eq!(a / Octonion::new(c, d), Octonion::new(re, im));
                }
            }
        }
    }

    assert_eq!(
        Complex::new(0.1, 0.1) / Complex::new(0.1, 0.1),
        Complex::new(1., 0.)
    );

    let q = Complex::<f64>::new(1., 0.) / Complex::new(0., 1.);
    assert_eq!(q.re().to_bits(), 0f64.to_bits());
    assert_eq!(q.im(), -1.);

    // The symbol of the divisor carries over to a scalar dividend
    let z = Complex::<f64>::new(3., 4.).with_symbol(ImaginarySymbol::J);
    assert_eq!((1. / z).symbol(), ImaginarySymbol::J);
}

#[test]
fn test_division_overflow() {
    // c² + d² overflows, so the quotient is not finite
    let big = Complex::<f64>::new(1e200, 0.);
    assert!((big / big).re().is_nan());
    assert!((1e200 / big).re().is_nan());

    let big = Octonion::<f64>::new(1e200, 0.);
    assert!((big / big).re().is_nan());
    assert!((1e200 / big).re().is_nan());
}

#[test]
fn test_conjugate_involution() {
    for z in complex_samples() {
        assert_eq!(z.conjugate().conjugate(), z);
        assert_eq!(z.conjugate().im(), -z.im());
    }
    for q in quaternion_samples() {
        assert_eq!(q.conjugate().conjugate(), q);
        assert_eq!(q.conjugate().re(), q.re());
    }
    for x in octonion_samples() {
        assert_eq!(x.conjugate().conjugate(), x);
    }
}

#[test]
fn test_norm_multiplicative() {
    for &p in complex_samples().iter() {
        for &q in complex_samples().iter() {
            let lhs = (p * q).norm();
            let rhs = p.norm() * q.norm();
            assert!((lhs - rhs).abs() <= 1e-12 * rhs.max(1.), "{} != {}", lhs, rhs);
        }
    }
    for &p in quaternion_samples().iter() {
        for &q in quaternion_samples().iter() {
            let lhs = (p * q).norm();
            let rhs = p.norm() * q.norm();
            assert!((lhs - rhs).abs() <= 1e-12 * rhs.max(1.), "{} != {}", lhs, rhs);
        }
    }
}

#[test]
fn test_self_division() {
    for z in complex_samples() {
        assert_close!(z / z, Complex::new(1., 0.));
    }
    for q in quaternion_samples() {
        assert_close!(q / q, Quaternion::new(1., 0., 0., 0.));
        assert_close!(q * q.reciprocal(), Quaternion::new(1., 0., 0., 0.));
        assert_close!(q.reciprocal() * q, Quaternion::new(1., 0., 0., 0.));
    }
    for x in octonion_samples() {
        assert_close!(x / x, Octonion::new(1., 0.));
    }
}

#[test]
fn test_addition_commutative_associative() {
    let zs = complex_samples();
    for &a in zs.iter() {
        for &b in zs.iter() {
            assert_eq!(a + b, b + a);
            for &c in zs.iter() {
                assert_close!((a + b) + c, a + (b + c));
            }
        }
    }

    let qs = quaternion_samples();
    for &a in qs.iter() {
        for &b in qs.iter() {
            assert_eq!(a + b, b + a);
            for &c in qs.iter() {
                assert_close!((a + b) + c, a + (b + c));
            }
        }
    }

    let xs = octonion_samples();
    for &a in xs.iter() {
        for &b in xs.iter() {
            assert_eq!(a + b, b + a);
            for &c in xs.iter() {
                assert_close!((a + b) + c, a + (b + c));
            }
        }
    }
}

#[test]
fn test_quaternion_noncommutative() {
    let i = Quaternion::new(0., 1., 0., 0.);
    let j = Quaternion::new(0., 0., 1., 0.);
    let k = Quaternion::new(0., 0., 0., 1.);
    let minus_one = Quaternion::new(-1., 0., 0., 0.);

    assert_eq!(i * j, k);
    assert_eq!(j * i, Quaternion::new(0., 0., 0., -1.));
    assert_eq!(j * k, i);
    assert_eq!(k * j, -i);
    assert_eq!(k * i, j);
    assert_eq!(i * k, -j);

    assert_eq!(i * i, minus_one);
    assert_eq!(j * j, minus_one);
    assert_eq!(k * k, minus_one);
    assert_eq!(i * j * k, minus_one);
}

#[test]
fn test_hamilton_product() {
    let p = Quaternion::new(1, 2, 3, 4);
    let q = Quaternion::new(5, 6, 7, 8);

    // (a, b, c, d)(a', b', c', d')
    assert_eq!(p * q, Quaternion::new(-60, 12, 30, 24));
    assert_eq!(q * p, Quaternion::new(-60, 20, 14, 32));
}

#[test]
fn test_quaternion_right_division() {
    let p = Quaternion::<f64>::new(1., 2., 3., 4.);
    let q = Quaternion::<f64>::new(0.5, -1., 2., 0.25);

    let right = p / q;
    let left = q.reciprocal() * p;

    assert_close!(right, p * q.reciprocal());
    assert_close!(right * q, p);
    assert_close!(q * left, p);
    assert!(!right.abs_diff_eq(left, 1e-6));

    assert_eq!(p / 2., Quaternion::new(0.5, 1., 1.5, 2.));
    assert_close!((2. / q) * q, Quaternion::new(2., 0., 0., 0.));
    assert_eq!(3. - p, Quaternion::new(2., -2., -3., -4.));
    assert_eq!(p.reciprocal(), p.conjugate() / p.norm_squared());
}

#[test]
fn test_division_by_zero() {
    let zero = Quaternion::<f64>::default();
    assert_eq!(zero, Quaternion::new(0., 0., 0., 0.));

    let q = Quaternion::<f64>::new(1., 2., 3., 4.) / zero;
    assert!(!q.re().is_finite());
    assert!(!q.im1().is_finite());
    assert!(!q.im2().is_finite());
    assert!(!q.im3().is_finite());

    let z = Complex::<f64>::new(1., 1.) / 0.;
    assert!(z.re().is_infinite() && z.im().is_infinite());

    let z = Complex::<f64>::new(1., 1.) / Complex::default();
    assert!(!z.re().is_finite());
}

#[test]
fn test_principal_sqrt() {
    for z in complex_samples() {
        let root = z.sqrt();
        assert!(root.re() >= 0., "{:?}", root);
        assert_close!(root * root, z);
    }
    for x in octonion_samples() {
        let root = x.sqrt();
        assert!(root.re() >= 0.);
        assert_close!(root * root, x);
    }

    assert_eq!(Complex::new(3., 4.).sqrt(), Complex::new(2., 1.));
    assert_eq!(Complex::new(4., 0.).sqrt(), Complex::new(2., 0.));
    assert_eq!(Complex::new(0., 2.).sqrt(), Complex::new(1., 1.));

    // The sign of zero selects the side of the branch cut
    assert_eq!(Complex::new(-9., 0.).sqrt(), Complex::new(0., 3.));
    assert_eq!(Complex::new(-9., -0.).sqrt(), Complex::new(0., -3.));
    assert_eq!(Octonion::new(-9., -0.).sqrt(), Octonion::new(0., -3.));
}

#[test]
fn test_exact_equality() {
    let a = Complex::<f64>::new(0.1, 0.2) + Complex::new(0.2, 0.1);
    let b = Complex::<f64>::new(0.3, 0.3);

    // No tolerance is applied by ==
    assert_ne!(a, b);
    assert!(a.abs_diff_eq(b, 1e-12));

    // Display settings don't participate in equality
    assert_eq!(b.with_symbol(ImaginarySymbol::J), b);
}

#[test]
fn test_display() {
    let mut z = Complex::<f64>::new(1.5, -2.);
    assert_eq!(z.to_string(), "1.5-2i");
    assert_eq!(z.conjugate().to_string(), "1.5+2i");

    z.set_symbol(ImaginarySymbol::J);
    assert_eq!(z.symbol(), ImaginarySymbol::J);
    assert_eq!(z.to_string(), "1.5-2j");

    // Results inherit the symbol of the left-hand operand
    assert_eq!((z + Complex::new(1., 0.)).to_string(), "2.5-2j");
    assert_eq!((Complex::new(1., 0.) + z).to_string(), "2.5-2i");
    assert_eq!((2. * z).to_string(), "3-4j");

    assert_eq!(Complex::new(0, 0).to_string(), "0+0i");
    assert_eq!(Complex::<i32>::default().symbol(), ImaginarySymbol::I);
}

#[test]
fn test_integer_scalars() {
    // Gaussian integers need no division
    let z = Complex::new(2i64, -3);
    assert_eq!(z * z.conjugate(), Complex::new(13, 0));
    assert_eq!(z.norm_squared(), 13);

    let q = Quaternion::new(1i32, 1, 1, 1);
    assert_eq!(q * q.conjugate(), Quaternion::new(4, 0, 0, 0));
    assert_eq!(2 * q - q, q);
}
