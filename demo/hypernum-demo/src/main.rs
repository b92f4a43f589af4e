//! hypernum demo
//!
//! Walks through complex arithmetic, quaternion rotation, and division by zero,
//! logging each result. Run with `RUST_LOG=debug` for intermediate values.

use hypernum::complex::{Complex, ImaginarySymbol};
use hypernum::octonion::Octonion;
use hypernum::ops::*;
use hypernum::quaternion::Quaternion;
use log::{debug, info, warn};

/// Rotate `point` by `angle` radians about the unit vector `axis`
/// by conjugating it with a unit quaternion: p' = q p q⁻¹
fn rotate(point: [f64; 3], axis: [f64; 3], angle: f64) -> [f64; 3] {
    let (s, c) = (angle / 2.).sin_cos();
    let q = Quaternion::new(c, axis[0] * s, axis[1] * s, axis[2] * s);
    debug!("rotor {:?} has norm {}", q, q.norm());

    let p = Quaternion::new(0., point[0], point[1], point[2]);
    let rotated = q * p / q;
    debug!("rotated point {:?}", rotated);

    [rotated.im1(), rotated.im2(), rotated.im3()]
}

fn complex_demo() {
    let z = Complex::<f64>::new(3., 4.);
    info!("z = {}", z);
    info!("|z| = {}", z.norm());
    info!("conj(z) = {}", z.conjugate());
    info!("sqrt(z) = {}", z.sqrt());
    info!("1 / z = {}", 1. / z);

    // Electrical engineers write j for the imaginary unit
    let impedance = Complex::new(50., -25.).with_symbol(ImaginarySymbol::J);
    let load = Complex::new(75., 10.);
    info!(
        "series impedance {} + {} = {}",
        impedance,
        load,
        impedance + load
    );
    info!(
        "parallel impedance = {}",
        impedance * load / (impedance + load)
    );

    for x in [-4., 4.] {
        let root = Complex::new(x, 0.).sqrt();
        info!("principal sqrt of {} is {}", x, root);
    }

    let x = Octonion::new(-9., -0.);
    info!("two-component octonion sqrt of {:?} is {:?}", x, x.sqrt());
}

fn quaternion_demo() {
    let i = Quaternion::new(0., 1., 0., 0.);
    let j = Quaternion::new(0., 0., 1., 0.);
    info!("i * j = {:?}", i * j);
    info!("j * i = {:?}", j * i);

    let p = Quaternion::new(1., 2., 3., 4.);
    let q = Quaternion::new(4., 3., 2., 1.);
    info!("right division p / q = {:?}", p / q);
    info!("left division q⁻¹ p = {:?}", q.reciprocal() * p);

    let point = [1., 0., 0.];
    let rotated = rotate(point, [0., 0., 1.], core::f64::consts::FRAC_PI_2);
    info!(
        "{:?} rotated 90 degrees about Z is {:?}",
        point, rotated
    );
}

fn division_by_zero_demo() {
    let q = Quaternion::<f64>::new(1., 2., 3., 4.) / Quaternion::default();
    if !q.re().is_finite() {
        warn!("division by a zero quaternion is not finite: {:?}", q);
    }

    let z = Complex::<f64>::new(1., 1.) / 0.;
    if !z.re().is_finite() {
        warn!("division of a complex number by zero is not finite: {}", z);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    complex_demo();
    quaternion_demo();
    division_by_zero_demo();
}
