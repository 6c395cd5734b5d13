//! Waveforms fed to the simulator: sinc envelopes, slice-select gradients and
//! Hadamard multiband modulation.

pub mod gradient;
pub mod multiband;
pub mod sinc;

pub use self::gradient::{constant_gradient, constant_gradient_complex, gradient_2d};
pub use self::multiband::{
    hadamard_decode, hadamard_decode_stacked, hadamard_encode, hadamard_pair,
};
pub use self::sinc::{sinc, SincPulse, Window};
