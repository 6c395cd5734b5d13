//! Forward Shinnar-Le Roux simulation.
//!
//! Every position composes the per-sample rotations of [`RotationStep`] in
//! chronological order. Positions are independent of each other, so the
//! outer loop may run on the rayon pool while the inner fold over time
//! stays strictly sequential.

use ndarray::{Array1, Array2, ArrayView1, Zip};
use num_complex::Complex64;

use crate::config::SimulatorConfig;
use crate::error::{Result, SlrError};
use crate::ops::profile;
use crate::ops::rotation::RotationStep;

/// Cayley-Klein pair `(a, b)` of one position. Stays on the unit sphere
/// `|a|² + |b|² = 1` through every rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CayleyKleinState {
    pub a: Complex64,
    pub b: Complex64,
}

impl Default for CayleyKleinState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CayleyKleinState {
    pub const IDENTITY: Self = Self {
        a: Complex64::new(1.0, 0.0),
        b: Complex64::new(0.0, 0.0),
    };

    /// Applies `step` after everything already accumulated in `self`.
    #[inline]
    #[must_use]
    pub fn rotate(self, step: &RotationStep) -> Self {
        let (a, b) = step.apply(self.a, self.b);
        Self { a, b }
    }

    pub fn norm_sqr(&self) -> f64 {
        self.a.norm_sqr() + self.b.norm_sqr()
    }

    pub fn excitation(&self) -> Complex64 {
        profile::excitation(self.a, self.b)
    }

    pub fn inversion(&self) -> f64 {
        profile::inversion(self.a, self.b)
    }
}

/// Real or complex samples of one waveform channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    Real(Array1<f64>),
    Complex(Array1<Complex64>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::Real(v) => v.len(),
            Samples::Complex(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Real samples become `v + 0i`.
    pub fn into_complex(self) -> Array1<Complex64> {
        match self {
            Samples::Real(v) => v.mapv(|re| Complex64::new(re, 0.0)),
            Samples::Complex(v) => v,
        }
    }
}

/// RF samples plus the matching gradient samples.
///
/// `rf` is scaled so that its sum is the flip angle in radians. The real part
/// of `g` drives the x axis and the imaginary part the y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    rf: Array1<Complex64>,
    g: Array1<Complex64>,
}

impl Waveform {
    pub fn new(rf: Array1<Complex64>, g: Array1<Complex64>) -> Result<Self> {
        check_lengths(rf.len(), g.len())?;
        Ok(Self { rf, g })
    }

    /// Real RF on a real (x only) gradient.
    pub fn from_real(rf: &ArrayView1<f64>, g: &ArrayView1<f64>) -> Result<Self> {
        Self::new(
            rf.mapv(|v| Complex64::new(v, 0.0)),
            g.mapv(|v| Complex64::new(v, 0.0)),
        )
    }

    /// Either channel may be real; real gradients drive the x axis only.
    pub fn from_samples(rf: Samples, g: Samples) -> Result<Self> {
        check_lengths(rf.len(), g.len())?;
        Ok(Self {
            rf: rf.into_complex(),
            g: g.into_complex(),
        })
    }

    pub fn len(&self) -> usize {
        self.rf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rf.is_empty()
    }

    pub fn rf(&self) -> ArrayView1<'_, Complex64> {
        self.rf.view()
    }

    pub fn g(&self) -> ArrayView1<'_, Complex64> {
        self.g.view()
    }

    /// Same samples played backwards.
    pub fn reversed(&self) -> Self {
        Self {
            rf: self.rf.slice(ndarray::s![..;-1]).to_owned(),
            g: self.g.slice(ndarray::s![..;-1]).to_owned(),
        }
    }
}

/// `(a, b)` for every position, shape `(len(x), len(y))`, indexed `[x, y]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CayleyKleinField {
    a: Array2<Complex64>,
    b: Array2<Complex64>,
}

impl CayleyKleinField {
    pub fn a(&self) -> &Array2<Complex64> {
        &self.a
    }

    pub fn b(&self) -> &Array2<Complex64> {
        &self.b
    }

    pub fn shape(&self) -> (usize, usize) {
        self.a.dim()
    }

    pub fn get(&self, ix: usize, iy: usize) -> Option<CayleyKleinState> {
        Some(CayleyKleinState {
            a: *self.a.get((ix, iy))?,
            b: *self.b.get((ix, iy))?,
        })
    }

    /// `2·conj(a)·b` per position.
    pub fn excitation(&self) -> Array2<Complex64> {
        Zip::from(&self.a)
            .and(&self.b)
            .map_collect(|&a, &b| profile::excitation(a, b))
    }

    /// `1 - 2·|b|²` per position.
    pub fn inversion(&self) -> Array2<f64> {
        Zip::from(&self.a)
            .and(&self.b)
            .map_collect(|&a, &b| profile::inversion(a, b))
    }

    pub fn into_parts(self) -> (Array2<Complex64>, Array2<Complex64>) {
        (self.a, self.b)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CayleyKleinSimulator {
    config: SimulatorConfig,
}

impl CayleyKleinSimulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn simulate_waveform(
        &self,
        waveform: &Waveform,
        x: &ArrayView1<f64>,
        y: Option<&ArrayView1<f64>>,
    ) -> Result<CayleyKleinField> {
        self.simulate(&waveform.rf(), &waveform.g(), x, y)
    }

    /// Runs the pulse `rf`/`g` over the outer product of `x` and `y`.
    ///
    /// `y` defaults to a single zero position. Fails with
    /// [`SlrError::InvalidInput`] when `rf` and `g` differ in length or when an
    /// axis is empty; no partial field is returned.
    pub fn simulate(
        &self,
        rf: &ArrayView1<Complex64>,
        g: &ArrayView1<Complex64>,
        x: &ArrayView1<f64>,
        y: Option<&ArrayView1<f64>>,
    ) -> Result<CayleyKleinField> {
        check_lengths(rf.len(), g.len())?;
        if x.is_empty() {
            return Err(SlrError::invalid("x axis is empty"));
        }
        let origin = Array1::zeros(1);
        let y = match y {
            Some(y) if y.is_empty() => return Err(SlrError::invalid("y axis is empty")),
            Some(y) => y.view(),
            None => origin.view(),
        };

        let n_positions = x.len() * y.len();
        let parallel =
            self.config.parallel && n_positions >= self.config.min_parallel_positions;
        let _span = tracing::debug_span!(
            "abrm",
            nx = x.len(),
            ny = y.len(),
            samples = rf.len(),
            parallel
        )
        .entered();

        let mut states = Array2::from_elem((x.len(), y.len()), CayleyKleinState::IDENTITY);
        let fold = |(ix, iy): (usize, usize), state: &mut CayleyKleinState| {
            *state = simulate_position(rf, g, x[ix], y[iy]);
        };
        if parallel {
            Zip::indexed(&mut states).par_for_each(fold);
        } else {
            Zip::indexed(&mut states).for_each(fold);
        }

        tracing::debug!(positions = n_positions, "forward SLR finished");
        Ok(CayleyKleinField {
            a: states.map(|s| s.a),
            b: states.map(|s| s.b),
        })
    }
}

/// Folds every sample of the pulse, first to last, for one position.
///
/// Assumes `rf` and `g` have equal length; extra samples of the longer one
/// are ignored.
pub fn simulate_position(
    rf: &ArrayView1<Complex64>,
    g: &ArrayView1<Complex64>,
    x: f64,
    y: f64,
) -> CayleyKleinState {
    rf.iter()
        .zip(g.iter())
        .fold(CayleyKleinState::IDENTITY, |state, (&rf_n, &g_n)| {
            let om = x * g_n.re + y * g_n.im;
            state.rotate(&RotationStep::new(rf_n, om))
        })
}

/// Forward SLR with the default configuration.
pub fn abrm(
    rf: &ArrayView1<Complex64>,
    g: &ArrayView1<Complex64>,
    x: &ArrayView1<f64>,
    y: Option<&ArrayView1<f64>>,
) -> Result<CayleyKleinField> {
    CayleyKleinSimulator::default().simulate(rf, g, x, y)
}

fn check_lengths(n_rf: usize, n_g: usize) -> Result<()> {
    if n_rf != n_g {
        return Err(SlrError::invalid(format!(
            "rf has {n_rf} samples but g has {n_g}"
        )));
    }
    Ok(())
}
