use ndarray::{Array1, Zip};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use num_complex::Complex64;

use crate::ops::cayley_klein::{CayleyKleinField, Waveform};


/// Random complex RF and gradient, reproducible per seed.
pub(crate) fn random_waveform(n: usize, seed: u64) -> Waveform {
    let mut rng = StdRng::seed_from_u64(seed);
    let rf_re = Array1::random_using(n, Uniform::new(-0.3, 0.3), &mut rng);
    let rf_im = Array1::random_using(n, Uniform::new(-0.3, 0.3), &mut rng);
    let g_re = Array1::random_using(n, Uniform::new(-1.0, 1.0), &mut rng);
    let g_im = Array1::random_using(n, Uniform::new(-1.0, 1.0), &mut rng);
    let rf = Zip::from(&rf_re)
        .and(&rf_im)
        .map_collect(|&re, &im| Complex64::new(re, im));
    let g = Zip::from(&g_re)
        .and(&g_im)
        .map_collect(|&re, &im| Complex64::new(re, im));
    Waveform::new(rf, g).expect("equal lengths")
}

pub(crate) fn max_abs_diff(lhs: &CayleyKleinField, rhs: &CayleyKleinField) -> f64 {
    let da = Zip::from(lhs.a())
        .and(rhs.a())
        .fold(0.0_f64, |acc, &x, &y| acc.max((x - y).norm()));
    let db = Zip::from(lhs.b())
        .and(rhs.b())
        .fold(0.0_f64, |acc, &x, &y| acc.max((x - y).norm()));
    da.max(db)
}
