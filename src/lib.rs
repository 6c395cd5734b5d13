//! Forward Shinnar-Le Roux simulation of RF excitation pulses.
//!
//! [`CayleyKleinSimulator`] turns an RF/gradient waveform pair into the
//! Cayley-Klein parameters `(a, b)` of every position on a one or two
//! dimensional axis; [`ab2ex`] and [`ab2inv`] map those to excitation and
//! inversion profiles.

pub mod config;
pub mod error;
pub mod ops;
pub mod pulse;
pub mod units;

#[cfg(feature = "python")]
mod bindings;

pub use config::{PhysicalConstants, SimulatorConfig};
pub use error::{Result, SlrError};
pub use ops::{
    ab2ex, ab2inv, abrm, CayleyKleinField, CayleyKleinSimulator, CayleyKleinState, RotationStep,
    Waveform,
};
pub use units::{cm2gt, gt2cm, rfscaleg, slice_thickness_cm};
