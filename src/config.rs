//! Simulation settings.
//!
//! The gyromagnetic ratio is carried here instead of being baked into the
//! scaling helpers, so tests can run against synthetic constants.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{Result, SlrError};

/// Proton gyromagnetic ratio over 2π, in kHz/G.
pub const GAMMA_BAR_1H: f64 = 4.257;

pub const ENV_GAMMA_BAR: &str = "SLR_GAMMA_BAR";
pub const ENV_PARALLEL: &str = "SLR_PARALLEL";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    /// γ/2π in kHz/G.
    pub gamma_bar_khz_per_gauss: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gamma_bar_khz_per_gauss: GAMMA_BAR_1H,
        }
    }
}

impl PhysicalConstants {
    pub fn new(gamma_bar_khz_per_gauss: f64) -> Result<Self> {
        let constants = Self {
            gamma_bar_khz_per_gauss,
        };
        constants.validate()?;
        Ok(constants)
    }

    /// γ in rad/ms/G.
    pub fn gamma_rad_per_ms_per_gauss(&self) -> f64 {
        2.0 * PI * self.gamma_bar_khz_per_gauss
    }

    pub fn validate(&self) -> Result<()> {
        let g = self.gamma_bar_khz_per_gauss;
        if !g.is_finite() || g <= 0.0 {
            return Err(SlrError::Config(format!(
                "gamma_bar_khz_per_gauss must be finite and positive, got {g}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub constants: PhysicalConstants,
    /// Spread the position loop over the rayon pool.
    pub parallel: bool,
    /// Below this many positions the loop stays on the calling thread.
    pub min_parallel_positions: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            constants: PhysicalConstants::default(),
            parallel: true,
            min_parallel_positions: 64,
        }
    }
}

impl SimulatorConfig {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| SlrError::Config(err.to_string()))?;
        config.constants.validate()?;
        Ok(config)
    }

    /// Applies `SLR_GAMMA_BAR` / `SLR_PARALLEL` on top of `self`.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(
            std::env::var(ENV_GAMMA_BAR).ok().as_deref(),
            std::env::var(ENV_PARALLEL).ok().as_deref(),
        )
    }

    fn with_overrides(mut self, gamma_bar: Option<&str>, parallel: Option<&str>) -> Result<Self> {
        if let Some(raw) = gamma_bar.map(str::trim).filter(|s| !s.is_empty()) {
            let value: f64 = raw
                .parse()
                .map_err(|_| SlrError::Config(format!("{ENV_GAMMA_BAR}={raw} is not a number")))?;
            self.constants = PhysicalConstants::new(value)?;
        }
        if let Some(raw) = parallel.map(str::trim).filter(|s| !s.is_empty()) {
            match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => self.parallel = true,
                "0" | "false" | "off" | "no" => self.parallel = false,
                other => {
                    tracing::warn!(value = other, "ignoring unrecognised {}", ENV_PARALLEL);
                }
            }
        }
        Ok(self)
    }
}
