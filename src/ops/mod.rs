pub mod cayley_klein;
pub mod profile;
pub mod rotation;
pub mod small_tip;

#[cfg(test)]
mod __test__;

pub use self::cayley_klein::{
    abrm, simulate_position, CayleyKleinField, CayleyKleinSimulator, CayleyKleinState, Samples,
    Waveform,
};
pub use self::profile::{ab2ex, ab2inv};
pub use self::rotation::{guard_offset, rotation_step, RotationStep};
pub use self::small_tip::{small_tip_profile, small_tip_spectrum, spectrum_axis};
