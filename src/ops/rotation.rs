use num_complex::Complex64;
use num_traits::Float;

/// Keeps the offset away from zero so the rotation axis can be normalised.
///
/// Offsets with `|om| < ε` are replaced by `ε` carrying the sign of `om`;
/// an exact zero (either sign) becomes `+ε`. `ε` is the type's machine epsilon.
/// NaN passes through unchanged.
#[inline]
pub fn guard_offset<T: Float>(om: T) -> T {
    let eps = T::epsilon();
    if !(om.abs() < eps) {
        om
    } else if om < T::zero() {
        -eps
    } else {
        eps
    }
}

/// Incremental Cayley-Klein rotation for one RF sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationStep {
    pub av: Complex64,
    pub bv: Complex64,
}

impl RotationStep {
    /// Rotation produced by `rf_n` on top of a free precession of `om` radians.
    #[inline]
    pub fn new(rf_n: Complex64, om: f64) -> Self {
        let om = guard_offset(om);
        let phi = rf_n.norm().hypot(om);
        let n1 = rf_n.re / phi;
        let n2 = rf_n.im / phi;
        let n3 = om / phi;
        let (s, c) = (phi / 2.0).sin_cos();

        // av = cos(φ/2) - i·n3·sin(φ/2), bv = -i·(n1 + i·n2)·sin(φ/2)
        Self {
            av: Complex64::new(c, -n3 * s),
            bv: Complex64::new(n2 * s, -n1 * s),
        }
    }

    /// `[[av, -conj(bv)], [bv, conj(av)]]`
    pub fn matrix(&self) -> [[Complex64; 2]; 2] {
        [
            [self.av, -self.bv.conj()],
            [self.bv, self.av.conj()],
        ]
    }

    /// Left-multiplies the column `(a, b)` by [`Self::matrix`].
    #[inline]
    pub fn apply(&self, a: Complex64, b: Complex64) -> (Complex64, Complex64) {
        (
            self.av * a - self.bv.conj() * b,
            self.bv * a + self.av.conj() * b,
        )
    }
}

pub fn rotation_step(rf_n: Complex64, om: f64) -> RotationStep {
    RotationStep::new(rf_n, om)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_guard_offset() {
        assert_eq!(guard_offset(0.0_f64), f64::EPSILON);
        assert_eq!(guard_offset(-0.0_f64), f64::EPSILON);
        assert_eq!(guard_offset(1e-20_f64), f64::EPSILON);
        assert_eq!(guard_offset(-1e-20_f64), -f64::EPSILON);
        assert_eq!(guard_offset(0.25_f64), 0.25);
        assert_eq!(guard_offset(-0.25_f64), -0.25);
        assert_eq!(guard_offset(f64::EPSILON), f64::EPSILON);
        assert_eq!(guard_offset(0.0_f32), f32::EPSILON);
        assert!(guard_offset(f64::NAN).is_nan());
        assert_eq!(guard_offset(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_large_offset_stays_finite() {
        let step = RotationStep::new(Complex64::new(0.5, 0.0), 1e200);
        for v in [step.av, step.bv] {
            assert!(v.re.is_finite() && v.im.is_finite());
        }
        assert_relative_eq!(step.av.norm_sqr() + step.bv.norm_sqr(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nan_offset_propagates() {
        let step = RotationStep::new(Complex64::new(0.5, 0.0), f64::NAN);
        assert!(step.av.re.is_nan());
        assert!(step.bv.im.is_nan());
    }

    #[test]
    fn test_step_is_unitary() {
        for &(rf, om) in &[
            (Complex64::new(0.3, 0.0), 0.0),
            (Complex64::new(0.0, -1.2), 0.7),
            (Complex64::new(2.0, 1.0), -3.0),
            (Complex64::new(0.0, 0.0), 0.0),
        ] {
            let step = RotationStep::new(rf, om);
            assert_relative_eq!(step.av.norm_sqr() + step.bv.norm_sqr(), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_pure_rf_rotation() {
        // x축 π/2 회전
        let step = RotationStep::new(Complex64::new(PI / 2.0, 0.0), 0.0);
        let half = (PI / 4.0).cos();
        assert_relative_eq!(step.av.re, half, epsilon = 1e-12);
        assert_relative_eq!(step.av.im, 0.0, epsilon = 1e-12);
        assert_relative_eq!(step.bv.re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(step.bv.im, -half, epsilon = 1e-12);
    }

    #[test]
    fn test_pure_precession() {
        let om = 0.8;
        let step = RotationStep::new(Complex64::new(0.0, 0.0), om);
        assert_relative_eq!(step.av.re, (om / 2.0).cos(), epsilon = 1e-14);
        assert_relative_eq!(step.av.im, -(om / 2.0).sin(), epsilon = 1e-14);
        assert_eq!(step.bv, Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_zero_sample_is_identity() {
        let step = rotation_step(Complex64::new(0.0, 0.0), 0.0);
        assert!(step.av.re.is_finite() && step.av.im.is_finite());
        assert_relative_eq!(step.av.re, 1.0, epsilon = 1e-15);
        assert_relative_eq!(step.av.im, 0.0, epsilon = 1e-15);
        assert_eq!(step.bv, Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_apply_matches_matrix_product() {
        let step = RotationStep::new(Complex64::new(0.4, -0.1), 0.3);
        let m = step.matrix();
        let (a, b) = (Complex64::new(0.6, 0.0), Complex64::new(0.0, 0.8));
        let (a2, b2) = step.apply(a, b);
        let expected_a = m[0][0] * a + m[0][1] * b;
        let expected_b = m[1][0] * a + m[1][1] * b;
        assert_relative_eq!((a2 - expected_a).norm(), 0.0, epsilon = 1e-15);
        assert_relative_eq!((b2 - expected_b).norm(), 0.0, epsilon = 1e-15);
    }
}
