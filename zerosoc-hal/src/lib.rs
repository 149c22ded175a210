#![no_std]

pub mod prelude;

/// Peripheral access crate, providing raw, unconstrained access to
/// peripherals.
pub use zerosoc as pac;

pub mod block;
pub mod delay;
pub mod gpio;
pub mod time;
pub mod uart;
